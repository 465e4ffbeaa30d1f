use axum::routing::{get, post};
use axum::Router;

use crate::app_state::AppState;
use crate::handler::{destination_panel, source_panel, switch_chain, trigger_action, wallet_connect, wallet_disconnect, wallet_info};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/source", get(source_panel))
        .route("/api/destination", get(destination_panel))
        .route("/api/trigger/:kind", post(trigger_action))
        .route("/api/wallet", get(wallet_info))
        .route("/api/wallet/connect", post(wallet_connect))
        .route("/api/wallet/disconnect", post(wallet_disconnect))
        .route("/api/chain/switch", post(switch_chain))
        .with_state(app_state)
}
