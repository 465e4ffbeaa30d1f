use std::net::SocketAddr;

use alloy_primitives::Address;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::info;

use hop_actors::{Actor, ActorResult, WorkerResult};
use interop_context::DemoContext;

use crate::app_state::AppState;
use crate::router::router;

pub async fn start_web_server_worker(host: String, app_state: AppState, shutdown_token: CancellationToken) -> WorkerResult {
    let router = router(app_state);

    // logging
    let router = router.layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)));

    info!("Webserver listening on {}", &host);
    let listener = TcpListener::bind(host).await?;
    axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(async move {
            shutdown_token.cancelled().await;
            info!("Shutting down webserver...");
        })
        .await?;

    Ok("Webserver shutdown".to_string())
}

pub struct WebServerActor {
    host: String,
    signer_address: Address,
    shutdown_token: CancellationToken,
    ctx: Option<DemoContext>,
}

impl WebServerActor {
    pub fn new(host: String, signer_address: Address, shutdown_token: CancellationToken) -> Self {
        Self { host, signer_address, shutdown_token, ctx: None }
    }

    pub fn on_ctx(self, ctx: &DemoContext) -> Self {
        Self { ctx: Some(ctx.clone()), ..self }
    }
}

impl Actor for WebServerActor {
    fn start(&self) -> ActorResult {
        let app_state = AppState { ctx: self.ctx.clone().unwrap(), signer_address: self.signer_address };
        let task = tokio::spawn(start_web_server_worker(self.host.clone(), app_state, self.shutdown_token.clone()));
        Ok(vec![task])
    }

    fn name(&self) -> &'static str {
        "WebServerActor"
    }
}
