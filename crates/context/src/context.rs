use alloy_primitives::Address;

use hop_actors::{Broadcaster, SharedState};
use interop_events::{ActionCommand, CounterEvents, TxLifecycleEvent};
use interop_types::{ChainTag, CounterJournal, CounterSnapshot, TriggerKind, TriggerState, WalletSession};

/// The three contracts the demo touches.
#[derive(Clone, Debug)]
pub struct DemoContracts {
    pub counter: Address,
    pub incrementer: Address,
    pub messenger: Address,
}

/// Central owner of every shared state and channel in the topology. Actors
/// attach to it with their `on_ctx` helpers; nothing else holds wiring.
#[derive(Clone)]
pub struct DemoContext {
    source_chain: ChainTag,
    destination_chain: ChainTag,
    contracts: DemoContracts,

    wallet: SharedState<WalletSession>,
    incrementer_trigger: SharedState<TriggerState>,
    messenger_trigger: SharedState<TriggerState>,
    journal: SharedState<CounterJournal>,
    snapshot: SharedState<CounterSnapshot>,

    action_commands_channel: Broadcaster<ActionCommand>,
    tx_lifecycle_channel: Broadcaster<TxLifecycleEvent>,
    counter_events_channel: Broadcaster<CounterEvents>,
}

impl DemoContext {
    pub fn new(source_chain: ChainTag, destination_chain: ChainTag, contracts: DemoContracts) -> DemoContext {
        let wallet = SharedState::new(WalletSession::new(source_chain.chain_id));

        DemoContext {
            source_chain,
            destination_chain,
            contracts,
            wallet,
            incrementer_trigger: SharedState::new(TriggerState::default()),
            messenger_trigger: SharedState::new(TriggerState::default()),
            journal: SharedState::new(CounterJournal::new()),
            snapshot: SharedState::new(CounterSnapshot::default()),
            action_commands_channel: Broadcaster::new(10),
            tx_lifecycle_channel: Broadcaster::new(100),
            counter_events_channel: Broadcaster::new(100),
        }
    }

    pub fn source_chain(&self) -> &ChainTag {
        &self.source_chain
    }

    pub fn destination_chain(&self) -> &ChainTag {
        &self.destination_chain
    }

    pub fn contracts(&self) -> &DemoContracts {
        &self.contracts
    }

    pub fn wallet(&self) -> SharedState<WalletSession> {
        self.wallet.clone()
    }

    pub fn trigger_state(&self, kind: TriggerKind) -> SharedState<TriggerState> {
        match kind {
            TriggerKind::IncrementerCall => self.incrementer_trigger.clone(),
            TriggerKind::MessengerCall => self.messenger_trigger.clone(),
        }
    }

    pub fn journal(&self) -> SharedState<CounterJournal> {
        self.journal.clone()
    }

    pub fn snapshot(&self) -> SharedState<CounterSnapshot> {
        self.snapshot.clone()
    }

    pub fn action_commands_channel(&self) -> Broadcaster<ActionCommand> {
        self.action_commands_channel.clone()
    }

    pub fn tx_lifecycle_channel(&self) -> Broadcaster<TxLifecycleEvent> {
        self.tx_lifecycle_channel.clone()
    }

    pub fn counter_events_channel(&self) -> Broadcaster<CounterEvents> {
        self.counter_events_channel.clone()
    }
}
