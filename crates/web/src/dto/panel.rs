use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct ChainDto {
    pub chain_id: u64,
    pub name: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct WalletDto {
    pub connected: bool,
    pub address: Option<String>,
    pub short_address: Option<String>,
    pub active_chain_id: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct ArgDto {
    pub name: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct BannerDto {
    pub level: &'static str,
    pub message: &'static str,
}

/// One action card of the source panel: the contract it calls, the call it
/// renders, and the live status of its trigger.
#[derive(Clone, Debug, Serialize)]
pub struct TriggerCardDto {
    pub kind: String,
    pub title: &'static str,
    pub contract: String,
    pub signature: &'static str,
    pub args: Vec<ArgDto>,
    pub status: String,
    pub label: String,
    pub disabled: bool,
    pub banner: Option<BannerDto>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SourcePanelDto {
    pub chain: ChainDto,
    pub connected_to_chain: bool,
    pub wallet: WalletDto,
    pub cards: Vec<TriggerCardDto>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LastIncrementerDto {
    pub chain_id: String,
    pub sender: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct CounterDto {
    pub address: String,
    pub number: Option<String>,
    pub last_incrementer: Option<LastIncrementerDto>,
}

#[derive(Clone, Debug, Serialize)]
pub struct EventDto {
    pub block_number: u64,
    pub sender_chain_id: String,
    pub sender: String,
    pub new_value: String,
    pub transaction_hash: String,
    pub seen_at: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct DestinationPanelDto {
    pub chain: ChainDto,
    pub connected_to_chain: bool,
    pub counter: CounterDto,
    pub events: Vec<EventDto>,
}
