use alloy::sol;

sol! {
    #[sol(rpc)]
    #[derive(Debug)]
    interface ICrossChainCounter {
        event CounterIncremented(uint256 senderChainId, address sender, uint256 newValue);

        function increment() external;
        function number() external view returns (uint256);
        function lastIncrementer() external view returns (uint256 chainId, address sender);
    }
}
