use alloy_network::{Ethereum, EthereumWallet};
use alloy_primitives::Address;
use alloy_provider::fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller};
use alloy_provider::{Identity, ProviderBuilder, RootProvider};
use alloy_pubsub::PubSubFrontend;
use alloy_rpc_client::WsConnect;
use alloy_signer_local::PrivateKeySigner;
use eyre::{eyre, Result};
use tracing::info;

use interop_abi::L2_TO_L2_CROSS_DOMAIN_MESSENGER_ADDRESS;
use interop_context::DemoContracts;
use interop_types::ChainTag;

use crate::topology_config::{ChainConfig, TopologyConfig, WalletConfig, WatchConfig, WebserverConfig};

pub type ChainProvider = FillProvider<
    JoinFill<
        JoinFill<JoinFill<JoinFill<Identity, ChainIdFiller>, GasFiller>, NonceFiller>,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider<PubSubFrontend>,
    PubSubFrontend,
    Ethereum,
>;

/// One connected demo chain: its identity plus a wallet-filled ws provider.
#[derive(Clone)]
pub struct ChainClient {
    pub tag: ChainTag,
    pub rpc_url: String,
    pub provider: ChainProvider,
}

impl ChainClient {
    pub async fn connect(config: &ChainConfig, wallet: EthereumWallet) -> Result<ChainClient> {
        let ws = WsConnect::new(&config.rpc_url);

        let provider = ProviderBuilder::new()
            .with_chain_id(config.chain_id)
            .filler(GasFiller)
            .filler(NonceFiller::default())
            .wallet(wallet)
            .on_ws(ws)
            .await?;

        info!("Connected to {} ({}) at {}", config.name, config.chain_id, config.rpc_url);

        Ok(ChainClient {
            tag: ChainTag::new(config.chain_id, config.name.clone()),
            rpc_url: config.rpc_url.clone(),
            provider,
        })
    }
}

/// Everything the wiring needs, built once from the config file: both chain
/// clients, the signer identity, the resolved contract set and the tuning
/// knobs.
pub struct Topology {
    source: ChainClient,
    destination: ChainClient,
    signer_address: Address,
    contracts: DemoContracts,
    watch: WatchConfig,
    webserver: WebserverConfig,
}

impl Topology {
    pub async fn from(config: TopologyConfig) -> Result<Topology> {
        let signer = match &config.wallet {
            WalletConfig::Env(env) => std::env::var(&env.var)
                .map_err(|_| eyre!("SIGNER_KEY_NOT_SET"))?
                .parse::<PrivateKeySigner>()?,
        };
        let signer_address = signer.address();
        let wallet = EthereumWallet::from(signer);

        let source = ChainClient::connect(&config.chains.source, wallet.clone()).await?;
        let destination = ChainClient::connect(&config.chains.destination, wallet).await?;

        let contracts = DemoContracts {
            counter: config.contracts.counter,
            incrementer: config.contracts.incrementer,
            messenger: config.contracts.messenger.unwrap_or(*L2_TO_L2_CROSS_DOMAIN_MESSENGER_ADDRESS),
        };

        Ok(Topology { source, destination, signer_address, contracts, watch: config.watch, webserver: config.webserver })
    }

    pub fn source(&self) -> &ChainClient {
        &self.source
    }

    pub fn destination(&self) -> &ChainClient {
        &self.destination
    }

    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    pub fn contracts(&self) -> &DemoContracts {
        &self.contracts
    }

    pub fn watch(&self) -> &WatchConfig {
        &self.watch
    }

    pub fn webserver_host(&self) -> &str {
        &self.webserver.host
    }
}
