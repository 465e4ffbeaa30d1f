use std::marker::PhantomData;
use std::time::Duration;

use alloy_network::Ethereum;
use alloy_primitives::{Bytes, TxHash, U256};
use alloy_provider::Provider;
use alloy_sol_types::SolCall;
use alloy_transport::Transport;
use async_trait::async_trait;
use eyre::{eyre, Result};
use tracing::debug;

use interop_abi::{ICrossChainCounter, ICrossChainCounterIncrementer, IL2ToL2CrossDomainMessenger};
use interop_context::DemoContracts;
use interop_types::TriggerKind;

/// Write capability of the source chain: turn a trigger into a submitted
/// transaction and report when its receipt lands. Drivers are generic over
/// this so the status logic runs against a scripted stand-in in tests.
#[async_trait]
pub trait ActionSubmitter: Clone + Send + Sync + 'static {
    async fn submit(&self, kind: TriggerKind) -> Result<TxHash>;

    /// Resolves once a receipt for `tx_hash` is observed, with its block
    /// number when the node reports one.
    async fn wait_receipt(&self, tx_hash: TxHash) -> Result<Option<u64>>;
}

/// Production submitter over a wallet-filled source-chain provider.
#[derive(Clone)]
pub struct DemoSubmitter<P, T> {
    client: P,
    contracts: DemoContracts,
    destination_chain_id: u64,
    receipt_poll_interval: Duration,
    receipt_timeout: Duration,
    _t: PhantomData<T>,
}

impl<P, T> DemoSubmitter<P, T>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Send + Sync + Clone + 'static,
{
    pub fn new(client: P, contracts: DemoContracts, destination_chain_id: u64) -> DemoSubmitter<P, T> {
        DemoSubmitter {
            client,
            contracts,
            destination_chain_id,
            receipt_poll_interval: Duration::from_millis(1000),
            receipt_timeout: Duration::from_secs(120),
            _t: PhantomData,
        }
    }

    pub fn with_receipt_poll_interval(self, receipt_poll_interval: Duration) -> Self {
        Self { receipt_poll_interval, ..self }
    }

    pub fn with_receipt_timeout(self, receipt_timeout: Duration) -> Self {
        Self { receipt_timeout, ..self }
    }
}

#[async_trait]
impl<P, T> ActionSubmitter for DemoSubmitter<P, T>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Send + Sync + Clone + 'static,
{
    async fn submit(&self, kind: TriggerKind) -> Result<TxHash> {
        let destination = U256::from(self.destination_chain_id);

        let tx_hash = match kind {
            TriggerKind::IncrementerCall => {
                let incrementer = ICrossChainCounterIncrementer::new(self.contracts.incrementer, self.client.clone());
                let call = incrementer.increment(destination, self.contracts.counter);
                let pending = call.send().await?;
                *pending.tx_hash()
            }
            TriggerKind::MessengerCall => {
                let message = Bytes::from(ICrossChainCounter::incrementCall {}.abi_encode());
                let messenger = IL2ToL2CrossDomainMessenger::new(self.contracts.messenger, self.client.clone());
                let call = messenger.sendMessage(destination, self.contracts.counter, message);
                let pending = call.send().await?;
                *pending.tx_hash()
            }
        };

        Ok(tx_hash)
    }

    async fn wait_receipt(&self, tx_hash: TxHash) -> Result<Option<u64>> {
        let deadline = tokio::time::Instant::now() + self.receipt_timeout;

        loop {
            if let Some(receipt) = self.client.get_transaction_receipt(tx_hash).await? {
                debug!("Receipt observed for {:?} in block {:?}", tx_hash, receipt.block_number);
                return Ok(receipt.block_number);
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(eyre!("RECEIPT_WAIT_TIMEOUT"));
            }
            tokio::time::sleep(self.receipt_poll_interval).await;
        }
    }
}
