use std::marker::PhantomData;

use alloy_network::Ethereum;
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_rpc_types::Filter;
use alloy_sol_types::SolEvent;
use alloy_transport::Transport;
use chrono::Utc;
use eyre::eyre;
use futures_util::StreamExt;
use tracing::{debug, error};

use hop_actors::{run_sync, Accessor, Actor, ActorResult, Broadcaster, Producer, SharedState, WorkerResult};
use interop_abi::ICrossChainCounter;
use interop_context::DemoContext;
use interop_events::CounterEvents;
use interop_types::{CounterJournal, JournalEntry};

pub async fn counter_events_worker<P, T>(
    client: P,
    counter_address: Address,
    journal: SharedState<CounterJournal>,
    counter_events_tx: Broadcaster<CounterEvents>,
) -> WorkerResult
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Send + Sync + Clone + 'static,
{
    let filter = Filter::new().address(counter_address).event_signature(ICrossChainCounter::CounterIncremented::SIGNATURE_HASH);

    let subscription = client.subscribe_logs(&filter).await?;
    let mut stream = subscription.into_stream();

    while let Some(log) = stream.next().await {
        let incremented = match ICrossChainCounter::CounterIncremented::decode_log(&log.inner, true) {
            Ok(decoded) => decoded,
            Err(e) => {
                error!("Failed to decode CounterIncremented log : {e}");
                continue;
            }
        };

        let entry = JournalEntry {
            sender_chain_id: incremented.senderChainId,
            sender: incremented.sender,
            new_value: incremented.newValue,
            transaction_hash: log.transaction_hash.unwrap_or_default(),
            block_number: log.block_number.unwrap_or_default(),
            seen_at: Utc::now(),
        };
        debug!("CounterIncremented at block {} : {}", entry.block_number, entry.new_value);

        let total = {
            let mut journal_guard = journal.write().await;
            journal_guard.append(entry);
            journal_guard.len()
        };
        run_sync!(counter_events_tx.send(CounterEvents::JournalUpdated { appended: 1, total }));
    }

    Err(eyre!("LOG_SUBSCRIPTION_ENDED"))
}

/// Destination-side observer: decodes `CounterIncremented` deliveries into
/// the journal and announces each update so aggregate reads refetch.
pub struct CounterEventsActor<P, T> {
    client: P,
    counter_address: Address,
    journal: Option<SharedState<CounterJournal>>,
    counter_events_tx: Option<Broadcaster<CounterEvents>>,
    _t: PhantomData<T>,
}

impl<P, T> CounterEventsActor<P, T>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Send + Sync + Clone + 'static,
{
    pub fn new(client: P, counter_address: Address) -> CounterEventsActor<P, T> {
        CounterEventsActor { client, counter_address, journal: None, counter_events_tx: None, _t: PhantomData }
    }

    pub fn on_ctx(self, ctx: &DemoContext) -> Self {
        Self { journal: Some(ctx.journal()), counter_events_tx: Some(ctx.counter_events_channel()), ..self }
    }
}

impl<P, T> Accessor<CounterJournal> for CounterEventsActor<P, T> {
    fn access(&mut self, data: SharedState<CounterJournal>) -> &mut Self {
        self.journal = Some(data);
        self
    }
}

impl<P, T> Producer<CounterEvents> for CounterEventsActor<P, T> {
    fn produce(&mut self, broadcaster: Broadcaster<CounterEvents>) -> &mut Self {
        self.counter_events_tx = Some(broadcaster);
        self
    }
}

impl<P, T> Actor for CounterEventsActor<P, T>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Send + Sync + Clone + 'static,
{
    fn start(&self) -> ActorResult {
        let task = tokio::task::spawn(counter_events_worker(
            self.client.clone(),
            self.counter_address,
            self.journal.clone().unwrap(),
            self.counter_events_tx.clone().unwrap(),
        ));
        Ok(vec![task])
    }

    fn name(&self) -> &'static str {
        "CounterEventsActor"
    }
}
