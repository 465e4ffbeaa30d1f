use std::fs;
use std::time::Duration;

use alloy_primitives::Address;
use eyre::Result;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub name: String,
    pub rpc_url: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainsConfig {
    pub source: ChainConfig,
    pub destination: ChainConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractsConfig {
    pub counter: Address,
    pub incrementer: Address,
    /// Defaults to the cross-domain messenger predeploy when omitted.
    pub messenger: Option<Address>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum WalletConfig {
    #[serde(rename = "env")]
    Env(EnvWalletConfig),
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnvWalletConfig {
    #[serde(default = "default_key_var")]
    pub var: String,
}

fn default_key_var() -> String {
    "HOPCOUNT_PRIVATE_KEY".to_string()
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchConfig {
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_receipt_poll_interval_ms")]
    pub receipt_poll_interval_ms: u64,
    #[serde(default = "default_receipt_timeout_secs")]
    pub receipt_timeout_secs: u64,
}

fn default_refresh_interval_secs() -> u64 {
    12
}

fn default_receipt_poll_interval_ms() -> u64 {
    1000
}

fn default_receipt_timeout_secs() -> u64 {
    120
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
            receipt_poll_interval_ms: default_receipt_poll_interval_ms(),
            receipt_timeout_secs: default_receipt_timeout_secs(),
        }
    }
}

impl WatchConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn receipt_poll_interval(&self) -> Duration {
        Duration::from_millis(self.receipt_poll_interval_ms)
    }

    pub fn receipt_timeout(&self) -> Duration {
        Duration::from_secs(self.receipt_timeout_secs)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebserverConfig {
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_host() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for WebserverConfig {
    fn default() -> Self {
        Self { host: default_host() }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TopologyConfig {
    pub chains: ChainsConfig,
    pub contracts: ContractsConfig,
    pub wallet: WalletConfig,
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub webserver: WebserverConfig,
}

impl TopologyConfig {
    pub fn load_from_file(file_name: String) -> Result<TopologyConfig> {
        let contents = fs::read_to_string(file_name)?;
        let config: TopologyConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const CONFIG: &str = r#"
        [chains.source]
        chain_id = 420120000
        name = "interop-alpha-0"
        rpc_url = "wss://interop-alpha-0.optimism.io"

        [chains.destination]
        chain_id = 420120001
        name = "interop-alpha-1"
        rpc_url = "wss://interop-alpha-1.optimism.io"

        [contracts]
        counter = "0x1b68f70248d6d2176c88d9285564cd23173d41d3"
        incrementer = "0x8e238A310C851e851B59974E2bcD7e833fD3CE60"

        [wallet]
        type = "env"
        var = "HOPCOUNT_PRIVATE_KEY"

        [watch]
        refresh_interval_secs = 6
    "#;

    #[test]
    fn parse_full_config() {
        let config: TopologyConfig = toml::from_str(CONFIG).unwrap();

        assert_eq!(config.chains.source.chain_id, 420120000);
        assert_eq!(config.chains.destination.name, "interop-alpha-1");
        assert!(config.contracts.messenger.is_none());
        assert_eq!(config.watch.refresh_interval(), Duration::from_secs(6));
        // untouched sections fall back to defaults
        assert_eq!(config.watch.receipt_poll_interval(), Duration::from_millis(1000));
        assert_eq!(config.webserver.host, "127.0.0.1:3000");

        let WalletConfig::Env(env) = config.wallet;
        assert_eq!(env.var, "HOPCOUNT_PRIVATE_KEY");
    }
}
