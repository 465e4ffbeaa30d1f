use eyre::eyre;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, error, info, warn};

use hop_actors::{run_sync, subscribe, Actor, ActorResult, Broadcaster, Consumer, Producer, SharedState, WorkerResult};
use interop_context::DemoContext;
use interop_events::{ActionCommand, TxLifecycleEvent};
use interop_types::{ChainTag, TriggerKind, TriggerState, WalletSession};

use crate::action::submitter::ActionSubmitter;

fn arm_display_reset(trigger_state: SharedState<TriggerState>, epoch: u64) {
    tokio::task::spawn(async move {
        let window = match trigger_state.read().await.status().display_window() {
            Some(window) => window,
            None => return,
        };
        tokio::time::sleep(window).await;
        trigger_state.write().await.reset_display(epoch);
    });
}

async fn handle_trigger<S: ActionSubmitter>(
    kind: TriggerKind,
    submitter: &S,
    source_chain: &ChainTag,
    wallet: &SharedState<WalletSession>,
    trigger_state: &SharedState<TriggerState>,
    lifecycle_tx: &Broadcaster<TxLifecycleEvent>,
) {
    {
        let mut wallet_guard = wallet.write().await;
        if !wallet_guard.is_connected() {
            debug!("Trigger {kind} ignored : no wallet connected");
            return;
        }
        // wrong chain routes to a switch request instead of a submission
        if wallet_guard.needs_switch(source_chain.chain_id) {
            wallet_guard.switch_chain(source_chain.chain_id);
            info!("Session switched to {} ({})", source_chain.name, source_chain.chain_id);
            return;
        }
    }

    if !trigger_state.write().await.begin() {
        debug!("Trigger {kind} dropped : control disabled");
        return;
    }

    let tx_hash = match submitter.submit(kind).await {
        Ok(tx_hash) => tx_hash,
        Err(e) => {
            error!("Submission failed for {kind} : {e}");
            let epoch = {
                let mut state = trigger_state.write().await;
                state.failed();
                state.epoch()
            };
            run_sync!(lifecycle_tx.send(TxLifecycleEvent::Failed { kind, reason: e.to_string() }));
            arm_display_reset(trigger_state.clone(), epoch);
            return;
        }
    };

    trigger_state.write().await.submitted(tx_hash);
    run_sync!(lifecycle_tx.send(TxLifecycleEvent::Submitted { kind, tx_hash }));
    info!("Submitted {kind} tx {tx_hash:?}");

    match submitter.wait_receipt(tx_hash).await {
        Ok(block_number) => {
            let epoch = {
                let mut state = trigger_state.write().await;
                state.confirmed();
                state.epoch()
            };
            run_sync!(lifecycle_tx.send(TxLifecycleEvent::Confirmed { kind, tx_hash, block_number }));
            arm_display_reset(trigger_state.clone(), epoch);
        }
        Err(e) => {
            // no explicit policy for a lost receipt: re-enable the control
            // and leave the displayed status as-is
            warn!("Receipt wait failed for {kind} tx {tx_hash:?} : {e}");
            trigger_state.write().await.release();
        }
    }
}

pub async fn action_driver_worker<S: ActionSubmitter>(
    kind: TriggerKind,
    submitter: S,
    source_chain: ChainTag,
    wallet: SharedState<WalletSession>,
    trigger_state: SharedState<TriggerState>,
    commands_rx: Broadcaster<ActionCommand>,
    lifecycle_tx: Broadcaster<TxLifecycleEvent>,
) -> WorkerResult {
    subscribe!(commands_rx);

    loop {
        match commands_rx.recv().await {
            Ok(ActionCommand::Trigger(trigger_kind)) => {
                if trigger_kind != kind {
                    continue;
                }
                handle_trigger(kind, &submitter, &source_chain, &wallet, &trigger_state, &lifecycle_tx).await;
            }
            Err(RecvError::Closed) => {
                error!("Action command channel closed");
                break Err(eyre!("ACTION_COMMANDS_RX_CLOSED"));
            }
            Err(RecvError::Lagged(lag)) => {
                error!("Action command channel lagged by {lag} messages");
                continue;
            }
        }
    }
}

/// One driver per write path: chain-guards the trigger, submits through the
/// [`ActionSubmitter`], tracks the receipt, and drives the per-trigger status
/// machine including its display-reset timers.
pub struct ActionDriverActor<S> {
    kind: TriggerKind,
    submitter: S,
    source_chain: ChainTag,
    wallet: Option<SharedState<WalletSession>>,
    trigger_state: Option<SharedState<TriggerState>>,
    commands_rx: Option<Broadcaster<ActionCommand>>,
    lifecycle_tx: Option<Broadcaster<TxLifecycleEvent>>,
}

impl<S: ActionSubmitter> ActionDriverActor<S> {
    pub fn new(kind: TriggerKind, submitter: S, source_chain: ChainTag) -> Self {
        Self { kind, submitter, source_chain, wallet: None, trigger_state: None, commands_rx: None, lifecycle_tx: None }
    }

    pub fn on_ctx(self, ctx: &DemoContext) -> Self {
        Self {
            wallet: Some(ctx.wallet()),
            trigger_state: Some(ctx.trigger_state(self.kind)),
            commands_rx: Some(ctx.action_commands_channel()),
            lifecycle_tx: Some(ctx.tx_lifecycle_channel()),
            ..self
        }
    }
}

impl<S: ActionSubmitter> Consumer<ActionCommand> for ActionDriverActor<S> {
    fn consume(&mut self, receiver: Broadcaster<ActionCommand>) -> &mut Self {
        self.commands_rx = Some(receiver);
        self
    }
}

impl<S: ActionSubmitter> Producer<TxLifecycleEvent> for ActionDriverActor<S> {
    fn produce(&mut self, broadcaster: Broadcaster<TxLifecycleEvent>) -> &mut Self {
        self.lifecycle_tx = Some(broadcaster);
        self
    }
}

impl<S: ActionSubmitter> Actor for ActionDriverActor<S> {
    fn start(&self) -> ActorResult {
        let task = tokio::task::spawn(action_driver_worker(
            self.kind,
            self.submitter.clone(),
            self.source_chain.clone(),
            self.wallet.clone().unwrap(),
            self.trigger_state.clone().unwrap(),
            self.commands_rx.clone().unwrap(),
            self.lifecycle_tx.clone().unwrap(),
        ));
        Ok(vec![task])
    }

    fn name(&self) -> &'static str {
        match self.kind {
            TriggerKind::IncrementerCall => "IncrementerDriverActor",
            TriggerKind::MessengerCall => "MessengerDriverActor",
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use alloy_primitives::{Address, TxHash};
    use async_trait::async_trait;
    use eyre::{eyre, Result};

    use interop_types::TriggerStatus;

    use super::*;

    #[derive(Clone, Copy)]
    enum Script {
        ConfirmAfter(Duration),
        RefuseSubmission,
        LoseReceipt,
    }

    #[derive(Clone)]
    struct ScriptedSubmitter {
        script: Script,
        submissions: Arc<AtomicUsize>,
    }

    impl ScriptedSubmitter {
        fn new(script: Script) -> Self {
            Self { script, submissions: Arc::new(AtomicUsize::new(0)) }
        }

        fn submissions(&self) -> usize {
            self.submissions.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ActionSubmitter for ScriptedSubmitter {
        async fn submit(&self, _kind: TriggerKind) -> Result<TxHash> {
            match self.script {
                Script::RefuseSubmission => Err(eyre!("USER_REJECTED")),
                _ => {
                    self.submissions.fetch_add(1, Ordering::SeqCst);
                    Ok(TxHash::repeat_byte(0xab))
                }
            }
        }

        async fn wait_receipt(&self, _tx_hash: TxHash) -> Result<Option<u64>> {
            match self.script {
                Script::ConfirmAfter(delay) => {
                    tokio::time::sleep(delay).await;
                    Ok(Some(2))
                }
                Script::LoseReceipt => Err(eyre!("RECEIPT_WAIT_TIMEOUT")),
                Script::RefuseSubmission => unreachable!(),
            }
        }
    }

    struct Harness {
        submitter: ScriptedSubmitter,
        wallet: SharedState<WalletSession>,
        trigger_state: SharedState<TriggerState>,
        commands: Broadcaster<ActionCommand>,
        lifecycle: Broadcaster<TxLifecycleEvent>,
    }

    fn source_chain() -> ChainTag {
        ChainTag::new(420120000, "interop-alpha-0")
    }

    async fn spawn_driver(script: Script, active_chain_id: u64) -> Harness {
        let submitter = ScriptedSubmitter::new(script);
        let mut session = WalletSession::new(active_chain_id);
        session.connect(Address::repeat_byte(0x42));

        let wallet = SharedState::new(session);
        let trigger_state = SharedState::new(TriggerState::default());
        let commands: Broadcaster<ActionCommand> = Broadcaster::new(10);
        let lifecycle: Broadcaster<TxLifecycleEvent> = Broadcaster::new(10);
        // keep the lifecycle channel alive for the whole test
        std::mem::forget(lifecycle.subscribe());

        tokio::task::spawn(action_driver_worker(
            TriggerKind::IncrementerCall,
            submitter.clone(),
            source_chain(),
            wallet.clone(),
            trigger_state.clone(),
            commands.clone(),
            lifecycle.clone(),
        ));
        // let the worker open its command subscription before anything is sent
        tokio::time::sleep(Duration::from_millis(10)).await;

        Harness { submitter, wallet, trigger_state, commands, lifecycle }
    }

    async fn label(harness: &Harness) -> String {
        let state = harness.trigger_state.read().await;
        let wallet = harness.wallet.read().await;
        let switch_target = wallet.needs_switch(source_chain().chain_id).then(|| source_chain().name);
        state.button_label(TriggerKind::IncrementerCall, switch_target.as_deref())
    }

    #[tokio::test(start_paused = true)]
    async fn confirmation_shows_success_then_idles() {
        let harness = spawn_driver(Script::ConfirmAfter(Duration::from_secs(2)), 420120000).await;

        harness.commands.send(ActionCommand::Trigger(TriggerKind::IncrementerCall)).unwrap();

        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert_eq!(harness.trigger_state.read().await.status(), TriggerStatus::Success);
        assert_eq!(label(&harness).await, "Increment Sent!");

        // success window is 5s; at t=7.1s the label is back to idle
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(harness.trigger_state.read().await.status(), TriggerStatus::Idle);
        assert_eq!(label(&harness).await, "Increment");
    }

    #[tokio::test(start_paused = true)]
    async fn duplicate_triggers_submit_once() {
        let harness = spawn_driver(Script::ConfirmAfter(Duration::from_secs(10)), 420120000).await;

        for _ in 0..4 {
            harness.commands.send(ActionCommand::Trigger(TriggerKind::IncrementerCall)).unwrap();
        }

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(harness.submitter.submissions(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn refused_submission_shows_error_then_idles_without_pending() {
        let harness = spawn_driver(Script::RefuseSubmission, 420120000).await;
        let mut lifecycle_rx = harness.lifecycle.subscribe();

        harness.commands.send(ActionCommand::Trigger(TriggerKind::IncrementerCall)).unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(harness.trigger_state.read().await.status(), TriggerStatus::Error);

        // the only lifecycle event is the failure, so Pending was never entered
        match lifecycle_rx.recv().await.unwrap() {
            TxLifecycleEvent::Failed { kind, .. } => assert_eq!(kind, TriggerKind::IncrementerCall),
            other => panic!("unexpected lifecycle event {other:?}"),
        }

        // error window is 3s
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(harness.trigger_state.read().await.status(), TriggerStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_chain_switches_without_any_transition() {
        let harness = spawn_driver(Script::ConfirmAfter(Duration::from_secs(1)), 420120001).await;

        assert_eq!(label(&harness).await, "Switch to interop-alpha-0");

        harness.commands.send(ActionCommand::Trigger(TriggerKind::IncrementerCall)).unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(harness.wallet.read().await.active_chain_id(), 420120000);
        assert_eq!(harness.trigger_state.read().await.status(), TriggerStatus::Idle);
        assert_eq!(harness.submitter.submissions(), 0);

        // next trigger lands on the right chain and goes through
        harness.commands.send(ActionCommand::Trigger(TriggerKind::IncrementerCall)).unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(harness.submitter.submissions(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn lost_receipt_reenables_and_keeps_status() {
        let harness = spawn_driver(Script::LoseReceipt, 420120000).await;

        harness.commands.send(ActionCommand::Trigger(TriggerKind::IncrementerCall)).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        let state = harness.trigger_state.read().await;
        assert_eq!(state.status(), TriggerStatus::Pending);
        assert!(!state.is_disabled());
    }

    #[tokio::test(start_paused = true)]
    async fn disconnected_wallet_drops_trigger() {
        let harness = spawn_driver(Script::ConfirmAfter(Duration::from_secs(1)), 420120000).await;
        harness.wallet.write().await.disconnect();

        harness.commands.send(ActionCommand::Trigger(TriggerKind::IncrementerCall)).unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(harness.submitter.submissions(), 0);
        assert_eq!(harness.trigger_state.read().await.status(), TriggerStatus::Idle);
    }
}
