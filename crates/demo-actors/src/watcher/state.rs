use std::marker::PhantomData;
use std::time::Duration;

use alloy_network::Ethereum;
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_transport::Transport;
use eyre::{eyre, Result};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, error};

use hop_actors::{run_sync, subscribe, Accessor, Actor, ActorResult, Broadcaster, Consumer, SharedState, WorkerResult};
use interop_abi::ICrossChainCounter;
use interop_context::DemoContext;
use interop_events::CounterEvents;
use interop_types::{CounterSnapshot, LastIncrementer};

async fn refetch_snapshot<P, T>(client: P, counter_address: Address, snapshot: &SharedState<CounterSnapshot>) -> Result<()>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Send + Sync + Clone + 'static,
{
    let counter = ICrossChainCounter::new(counter_address, client);

    let number = counter.number().call().await?._0;
    let last = counter.lastIncrementer().call().await?;

    snapshot.write().await.record(number, LastIncrementer { chain_id: last.chainId, sender: last.sender });
    debug!("Counter snapshot refreshed : number {number}");

    Ok(())
}

pub async fn counter_state_worker<P, T>(
    client: P,
    counter_address: Address,
    refresh_interval: Duration,
    snapshot: SharedState<CounterSnapshot>,
    counter_events_channel: Broadcaster<CounterEvents>,
) -> WorkerResult
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Send + Sync + Clone + 'static,
{
    let counter_events_rx = counter_events_channel.clone();
    subscribe!(counter_events_rx);

    let mut timer = tokio::time::interval(refresh_interval);

    loop {
        let refetch = tokio::select! {
            _ = timer.tick() => true,
            msg = counter_events_rx.recv() => match msg {
                Ok(CounterEvents::JournalUpdated { .. }) => true,
                Ok(_) => false,
                Err(RecvError::Closed) => {
                    error!("Counter events channel closed");
                    break Err(eyre!("COUNTER_EVENTS_RX_CLOSED"));
                }
                Err(RecvError::Lagged(lag)) => {
                    error!("Counter events channel lagged by {lag} messages");
                    false
                }
            },
        };

        if !refetch {
            continue;
        }

        match refetch_snapshot(client.clone(), counter_address, &snapshot).await {
            Ok(()) => {
                run_sync!(counter_events_channel.send(CounterEvents::SnapshotRefreshed));
            }
            Err(e) => error!("Counter snapshot refetch failed : {e}"),
        }
    }
}

/// Keeps the aggregate counter reads fresh: refetches on every journal
/// update and on a periodic tick.
pub struct CounterStateActor<P, T> {
    client: P,
    counter_address: Address,
    refresh_interval: Duration,
    snapshot: Option<SharedState<CounterSnapshot>>,
    counter_events_channel: Option<Broadcaster<CounterEvents>>,
    _t: PhantomData<T>,
}

impl<P, T> CounterStateActor<P, T>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Send + Sync + Clone + 'static,
{
    pub fn new(client: P, counter_address: Address) -> CounterStateActor<P, T> {
        CounterStateActor {
            client,
            counter_address,
            refresh_interval: Duration::from_secs(12),
            snapshot: None,
            counter_events_channel: None,
            _t: PhantomData,
        }
    }

    pub fn with_refresh_interval(self, refresh_interval: Duration) -> Self {
        Self { refresh_interval, ..self }
    }

    pub fn on_ctx(self, ctx: &DemoContext) -> Self {
        Self { snapshot: Some(ctx.snapshot()), counter_events_channel: Some(ctx.counter_events_channel()), ..self }
    }
}

impl<P, T> Accessor<CounterSnapshot> for CounterStateActor<P, T> {
    fn access(&mut self, data: SharedState<CounterSnapshot>) -> &mut Self {
        self.snapshot = Some(data);
        self
    }
}

impl<P, T> Consumer<CounterEvents> for CounterStateActor<P, T> {
    fn consume(&mut self, receiver: Broadcaster<CounterEvents>) -> &mut Self {
        self.counter_events_channel = Some(receiver);
        self
    }
}

impl<P, T> Actor for CounterStateActor<P, T>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Send + Sync + Clone + 'static,
{
    fn start(&self) -> ActorResult {
        let task = tokio::task::spawn(counter_state_worker(
            self.client.clone(),
            self.counter_address,
            self.refresh_interval,
            self.snapshot.clone().unwrap(),
            self.counter_events_channel.clone().unwrap(),
        ));
        Ok(vec![task])
    }

    fn name(&self) -> &'static str {
        "CounterStateActor"
    }
}
