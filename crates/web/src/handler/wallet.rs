use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::app_state::AppState;
use crate::dto::WalletDto;
use crate::handler::panels::wallet_dto;

pub async fn wallet_info(State(state): State<AppState>) -> Json<WalletDto> {
    let session = state.ctx.wallet().read().await.clone();
    Json(wallet_dto(&session))
}

pub async fn wallet_connect(State(state): State<AppState>) -> Json<WalletDto> {
    let wallet = state.ctx.wallet();
    let mut session = wallet.write().await;
    session.connect(state.signer_address);
    info!("Wallet connected : {}", state.signer_address);
    Json(wallet_dto(&session))
}

pub async fn wallet_disconnect(State(state): State<AppState>) -> Json<WalletDto> {
    let wallet = state.ctx.wallet();
    let mut session = wallet.write().await;
    session.disconnect();
    info!("Wallet disconnected");
    Json(wallet_dto(&session))
}

#[derive(Debug, Deserialize)]
pub struct SwitchChainRequest {
    pub chain_id: u64,
}

pub async fn switch_chain(State(state): State<AppState>, Json(request): Json<SwitchChainRequest>) -> Json<WalletDto> {
    let wallet = state.ctx.wallet();
    let mut session = wallet.write().await;
    session.switch_chain(request.chain_id);
    info!("Session switched to chain {}", request.chain_id);
    Json(wallet_dto(&session))
}
