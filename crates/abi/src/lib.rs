pub use counter::ICrossChainCounter;
pub use incrementer::ICrossChainCounterIncrementer;
pub use messenger::{IL2ToL2CrossDomainMessenger, L2_TO_L2_CROSS_DOMAIN_MESSENGER_ADDRESS};

mod counter;
mod incrementer;
mod messenger;
