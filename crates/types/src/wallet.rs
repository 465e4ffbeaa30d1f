use alloy_primitives::Address;

/// Session view of the signing wallet: who is connected and which chain the
/// session is pointed at. Write triggers gate on `needs_switch`; the wallet
/// endpoints and the chain-guard switch path are the only mutators.
#[derive(Clone, Debug, Default)]
pub struct WalletSession {
    address: Option<Address>,
    active_chain_id: u64,
}

impl WalletSession {
    pub fn new(active_chain_id: u64) -> Self {
        Self { address: None, active_chain_id }
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn active_chain_id(&self) -> u64 {
        self.active_chain_id
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn connect(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn disconnect(&mut self) {
        self.address = None;
    }

    pub fn switch_chain(&mut self, chain_id: u64) {
        self.active_chain_id = chain_id;
    }

    pub fn needs_switch(&self, required_chain_id: u64) -> bool {
        self.active_chain_id != required_chain_id
    }

    /// `0x1b68...41d3` form for display.
    pub fn short_address(&self) -> Option<String> {
        self.address.map(|address| {
            let full = format!("{address:?}");
            format!("{}...{}", &full[..6], &full[full.len() - 4..])
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn connect_and_switch() {
        let mut session = WalletSession::new(420120000);
        assert!(!session.is_connected());
        assert!(!session.needs_switch(420120000));
        assert!(session.needs_switch(420120001));

        session.connect(Address::repeat_byte(0x1b));
        assert!(session.is_connected());

        session.switch_chain(420120001);
        assert!(!session.needs_switch(420120001));

        session.disconnect();
        assert!(!session.is_connected());
        assert_eq!(session.active_chain_id(), 420120001);
    }

    #[test]
    fn short_address_form() {
        let mut session = WalletSession::new(420120000);
        assert_eq!(session.short_address(), None);

        session.connect("0x1b68f70248d6d2176c88d9285564cd23173d41d3".parse().unwrap());
        let short = session.short_address().unwrap();
        assert_eq!(short.len(), "0x1b68...41d3".len());
        assert_eq!(short.to_lowercase(), "0x1b68...41d3");
    }
}
