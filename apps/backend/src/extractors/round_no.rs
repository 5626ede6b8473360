use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Round number extracted from the `round_no` route path parameter.
///
/// Parse-only; whether the number is on the 1..=10 schedule is a domain
/// decision (`RoundNotFound`), not a parse failure.
#[derive(Debug, Clone, Copy)]
pub struct RoundNo(pub u8);

impl FromRequest for RoundNo {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<RoundNo, AppError> {
    let raw = req.match_info().get("round_no").ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidRoundNumber, "Missing round_no parameter")
    })?;

    let round_no = raw.parse::<u8>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidRoundNumber,
            format!("Invalid round number: {raw}"),
        )
    })?;

    Ok(RoundNo(round_no))
}
