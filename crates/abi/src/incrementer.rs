use alloy::sol;

sol! {
    #[sol(rpc)]
    #[derive(Debug)]
    interface ICrossChainCounterIncrementer {
        function increment(uint256 counterChainId, address counterAddress) external returns (bytes32 msgHash);
    }
}
