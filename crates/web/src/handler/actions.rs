use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, info};

use interop_events::ActionCommand;

use crate::app_state::AppState;
use crate::handler::trigger_kind_from_path;

/// The click of one of the two action buttons. The driver owns every
/// decision (chain guard, disabled state); this just enqueues the intent.
pub async fn trigger_action(State(state): State<AppState>, Path(kind): Path<String>) -> Result<Json<Value>, StatusCode> {
    let Some(kind) = trigger_kind_from_path(&kind) else {
        return Err(StatusCode::NOT_FOUND);
    };

    match state.ctx.action_commands_channel().send(ActionCommand::Trigger(kind)) {
        Ok(_) => {
            info!("Trigger accepted : {kind}");
            Ok(Json(json!({ "accepted": true })))
        }
        Err(e) => {
            error!("No action driver listening : {e}");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
