use clap::Parser;
use eyre::Result;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hop_actors::ActorsManager;
use interop_actors::{ActionDriverActor, CounterEventsActor, CounterStateActor, DemoSubmitter};
use interop_context::DemoContext;
use interop_events::{CounterEvents, TxLifecycleEvent};
use interop_topology::{Topology, TopologyConfig};
use interop_types::TriggerKind;
use interop_web::WebServerActor;

#[derive(Parser, Debug)]
struct Args {
    #[clap(long, short, default_value = "config.toml")]
    config_file: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let topology_config = TopologyConfig::load_from_file(args.config_file)?;
    let topology = Topology::from(topology_config).await?;

    let ctx = DemoContext::new(topology.source().tag.clone(), topology.destination().tag.clone(), topology.contracts().clone());

    // the session starts connected to the loaded signer, pointed at the source chain
    ctx.wallet().write().await.connect(topology.signer_address());
    info!("Wallet session : {}", topology.signer_address());

    let submitter =
        DemoSubmitter::new(topology.source().provider.clone(), topology.contracts().clone(), topology.destination().tag.chain_id)
            .with_receipt_poll_interval(topology.watch().receipt_poll_interval())
            .with_receipt_timeout(topology.watch().receipt_timeout());

    let mut actors = ActorsManager::new();

    for kind in [TriggerKind::IncrementerCall, TriggerKind::MessengerCall] {
        actors.start(ActionDriverActor::new(kind, submitter.clone(), topology.source().tag.clone()).on_ctx(&ctx))?;
    }

    actors.start(CounterEventsActor::new(topology.destination().provider.clone(), topology.contracts().counter).on_ctx(&ctx))?;

    actors.start(
        CounterStateActor::new(topology.destination().provider.clone(), topology.contracts().counter)
            .with_refresh_interval(topology.watch().refresh_interval())
            .on_ctx(&ctx),
    )?;

    let shutdown_token = CancellationToken::new();
    actors.start(WebServerActor::new(topology.webserver_host().to_string(), topology.signer_address(), shutdown_token.clone()).on_ctx(&ctx))?;

    tokio::task::spawn(async move { actors.wait().await });

    // tail the demo to the log until interrupted
    let mut lifecycle_rx = ctx.tx_lifecycle_channel().subscribe();
    let mut counter_rx = ctx.counter_events_channel().subscribe();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            msg = lifecycle_rx.recv() => if let Ok(event) = msg {
                match event {
                    TxLifecycleEvent::Submitted { kind, tx_hash } => info!("{kind} submitted : {tx_hash:?}"),
                    TxLifecycleEvent::Confirmed { kind, tx_hash, block_number } => info!("{kind} confirmed : {tx_hash:?} block {block_number:?}"),
                    TxLifecycleEvent::Failed { kind, reason } => error!("{kind} failed : {reason}"),
                }
            },
            msg = counter_rx.recv() => if let Ok(event) = msg {
                if let CounterEvents::JournalUpdated { total, .. } = event {
                    info!("Counter event journal holds {total} entries");
                }
            },
            _ = &mut ctrl_c => {
                info!("Shutting down");
                shutdown_token.cancel();
                break;
            }
        }
    }

    Ok(())
}
