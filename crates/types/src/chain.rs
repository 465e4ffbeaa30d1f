/// Identity of one of the two demo chains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainTag {
    pub chain_id: u64,
    pub name: String,
}

impl ChainTag {
    pub fn new(chain_id: u64, name: impl Into<String>) -> Self {
        Self { chain_id, name: name.into() }
    }
}
