pub mod game_id;
pub mod round_no;
pub mod validated_json;

pub use game_id::GameId;
pub use round_no::RoundNo;
pub use validated_json::ValidatedJson;
