pub use topology::{ChainClient, ChainProvider, Topology};
pub use topology_config::{ChainConfig, ChainsConfig, ContractsConfig, TopologyConfig, WalletConfig, WatchConfig, WebserverConfig};

mod topology;
mod topology_config;
