//! Game-related HTTP routes.
//!
//! Every game-returning operation replies with the full snapshot so callers
//! can re-render without additional queries.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::round::StatEntry;
use crate::domain::snapshot::GameSnapshot;
use crate::error::AppError;
use crate::extractors::game_id::GameId;
use crate::extractors::round_no::RoundNo;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::games::GameService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlayerCreate {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub players: Vec<PlayerCreate>,
}

#[derive(Debug, Deserialize)]
pub struct RoundSubmitRequest {
    pub player_stats: Vec<StatEntry>,
    #[serde(default)]
    pub kraken_played: bool,
}

/// POST /api/games
///
/// Create a game from a roster of names (at least two), all ten rounds open.
async fn create_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateGameRequest>,
) -> Result<web::Json<GameSnapshot>, AppError> {
    let names: Vec<String> = body
        .into_inner()
        .players
        .into_iter()
        .map(|p| p.name)
        .collect();

    let snap = GameService::new().create_game(&app_state.store, &names)?;
    Ok(web::Json(snap))
}

/// GET /api/games/{game_id}
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameSnapshot>, AppError> {
    let snap = GameService::new().fetch_game(&app_state.store, game_id.0)?;
    Ok(web::Json(snap))
}

/// POST /api/games/{game_id}/rounds/{round_no}
///
/// Resolve the next open round with one stats entry per player.
async fn submit_round(
    game_id: GameId,
    round_no: RoundNo,
    app_state: web::Data<AppState>,
    body: ValidatedJson<RoundSubmitRequest>,
) -> Result<web::Json<GameSnapshot>, AppError> {
    let body = body.into_inner();
    let snap = GameService::new().resolve_round(
        &app_state.store,
        game_id.0,
        round_no.0,
        &body.player_stats,
        body.kraken_played,
    )?;
    Ok(web::Json(snap))
}

/// PUT /api/games/{game_id}/rounds/{round_no}
///
/// Rewrite an already-resolved round; later running totals cascade.
async fn update_round(
    game_id: GameId,
    round_no: RoundNo,
    app_state: web::Data<AppState>,
    body: ValidatedJson<RoundSubmitRequest>,
) -> Result<web::Json<GameSnapshot>, AppError> {
    let body = body.into_inner();
    let snap = GameService::new().edit_round(
        &app_state.store,
        game_id.0,
        round_no.0,
        &body.player_stats,
        body.kraken_played,
    )?;
    Ok(web::Json(snap))
}

/// DELETE /api/games/{game_id}/rounds/{round_no}
///
/// Undo the latest resolved round (stack pop).
async fn undo_round(
    game_id: GameId,
    round_no: RoundNo,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameSnapshot>, AppError> {
    let snap = GameService::new().undo_round(&app_state.store, game_id.0, round_no.0)?;
    Ok(web::Json(snap))
}

/// DELETE /api/games/{game_id}
async fn delete_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    GameService::new().delete_game(&app_state.store, game_id.0)?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/history
///
/// Read-only projection of every stored game, most recently accessed first.
pub async fn list_history(
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<GameSnapshot>>, AppError> {
    Ok(web::Json(GameService::new().list_history(&app_state.store)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(
        web::resource("/{game_id}")
            .route(web::get().to(get_game))
            .route(web::delete().to(delete_game)),
    );
    cfg.service(
        web::resource("/{game_id}/rounds/{round_no}")
            .route(web::post().to(submit_round))
            .route(web::put().to(update_round))
            .route(web::delete().to(undo_round)),
    );
}
