pub use actions::trigger_action;
pub use panels::{destination_panel, source_panel};
pub use wallet::{switch_chain, wallet_connect, wallet_disconnect, wallet_info};

use interop_types::TriggerKind;

mod actions;
mod panels;
mod wallet;

pub(crate) fn trigger_kind_from_path(path: &str) -> Option<TriggerKind> {
    match path {
        "incrementer" => Some(TriggerKind::IncrementerCall),
        "messenger" => Some(TriggerKind::MessengerCall),
        _ => None,
    }
}

pub(crate) fn trigger_kind_wire(kind: TriggerKind) -> &'static str {
    match kind {
        TriggerKind::IncrementerCall => "incrementer",
        TriggerKind::MessengerCall => "messenger",
    }
}
