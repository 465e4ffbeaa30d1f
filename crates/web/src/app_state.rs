use alloy_primitives::Address;
use interop_context::DemoContext;

#[derive(Clone)]
pub struct AppState {
    pub ctx: DemoContext,
    /// Identity of the loaded signer; `connect` binds the session to it.
    pub signer_address: Address,
}
