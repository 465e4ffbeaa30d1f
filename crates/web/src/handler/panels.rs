use alloy_primitives::Bytes;
use alloy_sol_types::SolCall;
use axum::extract::State;
use axum::Json;

use interop_abi::ICrossChainCounter;
use interop_context::DemoContext;
use interop_types::{TriggerKind, TriggerState, TriggerStatus, WalletSession};

use crate::app_state::AppState;
use crate::dto::{
    ArgDto, BannerDto, ChainDto, CounterDto, DestinationPanelDto, EventDto, LastIncrementerDto, SourcePanelDto, TriggerCardDto,
    WalletDto,
};
use crate::handler::trigger_kind_wire;

pub(crate) fn chain_dto(chain: &interop_types::ChainTag) -> ChainDto {
    ChainDto { chain_id: chain.chain_id, name: chain.name.clone() }
}

pub(crate) fn wallet_dto(session: &WalletSession) -> WalletDto {
    WalletDto {
        connected: session.is_connected(),
        address: session.address().map(|address| address.to_string()),
        short_address: session.short_address(),
        active_chain_id: session.active_chain_id(),
    }
}

fn banner(kind: TriggerKind, status: TriggerStatus) -> Option<BannerDto> {
    match status {
        TriggerStatus::Success => Some(BannerDto {
            level: "success",
            message: match kind {
                TriggerKind::IncrementerCall => {
                    "Transaction sent successfully! The counter will be incremented once the message is received on the destination chain."
                }
                TriggerKind::MessengerCall => {
                    "Message sent successfully! The counter will be incremented once the message is received on the destination chain."
                }
            },
        }),
        TriggerStatus::Error => Some(BannerDto { level: "error", message: "Transaction failed. Please try again." }),
        _ => None,
    }
}

fn trigger_card(kind: TriggerKind, trigger: &TriggerState, session: &WalletSession, ctx: &DemoContext) -> TriggerCardDto {
    let contracts = ctx.contracts();
    let destination = ctx.destination_chain();

    let switch_target = session.needs_switch(ctx.source_chain().chain_id).then(|| ctx.source_chain().name.clone());
    let label = trigger.button_label(kind, switch_target.as_deref());
    let disabled = !session.is_connected() || trigger.is_disabled();

    let (title, contract, signature, args) = match kind {
        TriggerKind::IncrementerCall => (
            "CrossChainCounterIncrementer",
            contracts.incrementer.to_string(),
            "increment(uint256 counterChainId, address counterAddress)",
            vec![
                ArgDto { name: "counterChainId", value: destination.chain_id.to_string() },
                ArgDto { name: "counterAddress", value: contracts.counter.to_string() },
            ],
        ),
        TriggerKind::MessengerCall => {
            let message = Bytes::from(ICrossChainCounter::incrementCall {}.abi_encode());
            (
                "L2ToL2CrossDomainMessenger",
                contracts.messenger.to_string(),
                "sendMessage(uint256 _destination, address _target, bytes calldata _message)",
                vec![
                    ArgDto { name: "_destination", value: destination.chain_id.to_string() },
                    ArgDto { name: "_target", value: contracts.counter.to_string() },
                    ArgDto { name: "_message", value: message.to_string() },
                ],
            )
        }
    };

    TriggerCardDto {
        kind: trigger_kind_wire(kind).to_string(),
        title,
        contract,
        signature,
        args,
        status: trigger.status().to_string(),
        label,
        disabled,
        banner: banner(kind, trigger.status()),
    }
}

pub async fn source_panel(State(state): State<AppState>) -> Json<SourcePanelDto> {
    let ctx = &state.ctx;
    let session = ctx.wallet().read().await.clone();
    let source = ctx.source_chain().clone();

    let mut cards = Vec::with_capacity(2);
    for kind in [TriggerKind::IncrementerCall, TriggerKind::MessengerCall] {
        let trigger = ctx.trigger_state(kind).read().await.clone();
        cards.push(trigger_card(kind, &trigger, &session, ctx));
    }

    Json(SourcePanelDto {
        connected_to_chain: !session.needs_switch(source.chain_id),
        chain: chain_dto(&source),
        wallet: wallet_dto(&session),
        cards,
    })
}

pub async fn destination_panel(State(state): State<AppState>) -> Json<DestinationPanelDto> {
    let ctx = &state.ctx;
    let session = ctx.wallet().read().await.clone();
    let destination = ctx.destination_chain().clone();

    let snapshot = ctx.snapshot().read().await.clone();
    let counter = CounterDto {
        address: ctx.contracts().counter.to_string(),
        number: snapshot.number.map(|number| number.to_string()),
        last_incrementer: snapshot.last_incrementer.map(|last| LastIncrementerDto {
            chain_id: last.chain_id.to_string(),
            sender: last.sender.to_string(),
        }),
    };

    let events = ctx
        .journal()
        .read()
        .await
        .sorted_view()
        .into_iter()
        .map(|entry| EventDto {
            block_number: entry.block_number,
            sender_chain_id: entry.sender_chain_id.to_string(),
            sender: entry.sender.to_string(),
            new_value: entry.new_value.to_string(),
            transaction_hash: format!("{:?}", entry.transaction_hash),
            seen_at: entry.seen_at.to_rfc3339(),
        })
        .collect();

    Json(DestinationPanelDto {
        connected_to_chain: !session.needs_switch(destination.chain_id),
        chain: chain_dto(&destination),
        counter,
        events,
    })
}
