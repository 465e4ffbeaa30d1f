pub use app_state::AppState;
pub use router::router;
pub use web_actor::WebServerActor;

mod app_state;
mod dto;
mod handler;
mod router;
mod web_actor;
