use alloy::sol;
use alloy_primitives::{address, Address};
use lazy_static::lazy_static;

lazy_static! {
    /// Predeploy address, identical on every OP Stack interop chain.
    pub static ref L2_TO_L2_CROSS_DOMAIN_MESSENGER_ADDRESS: Address = address!("4200000000000000000000000000000000000023");
}

sol! {
    #[sol(rpc)]
    #[derive(Debug)]
    interface IL2ToL2CrossDomainMessenger {
        function sendMessage(uint256 _destination, address _target, bytes calldata _message) external returns (bytes32 msgHash_);
    }
}
