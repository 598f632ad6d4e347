//! Contract ABI definitions for TimelockController and Safe MultiSend

use alloy::sol;

sol! {
    /// OpenZeppelin TimelockController interface
    #[sol(rpc)]
    interface ITimelockController {
        /// Schedule an operation containing a single transaction
        function schedule(
            address target,
            uint256 value,
            bytes calldata data,
            bytes32 predecessor,
            bytes32 salt,
            uint256 delay
        ) external;

        /// Schedule an operation containing a batch of transactions
        function scheduleBatch(
            address[] calldata targets,
            uint256[] calldata values,
            bytes[] calldata payloads,
            bytes32 predecessor,
            bytes32 salt,
            uint256 delay
        ) external;

        /// Execute a ready operation containing a single transaction
        function execute(
            address target,
            uint256 value,
            bytes calldata payload,
            bytes32 predecessor,
            bytes32 salt
        ) external payable;

        /// Execute a ready operation containing a batch of transactions
        function executeBatch(
            address[] calldata targets,
            uint256[] calldata values,
            bytes[] calldata payloads,
            bytes32 predecessor,
            bytes32 salt
        ) external payable;

        /// Cancel a pending operation
        function cancel(bytes32 id) external;

        /// Change the minimum delay (only callable by the timelock itself)
        function updateDelay(uint256 newDelay) external;

        function hashOperation(
            address target,
            uint256 value,
            bytes calldata data,
            bytes32 predecessor,
            bytes32 salt
        ) external pure returns (bytes32);

        function hashOperationBatch(
            address[] calldata targets,
            uint256[] calldata values,
            bytes[] calldata payloads,
            bytes32 predecessor,
            bytes32 salt
        ) external pure returns (bytes32);

        function getMinDelay() external view returns (uint256);
        function isOperation(bytes32 id) external view returns (bool);
        function isOperationPending(bytes32 id) external view returns (bool);
        function isOperationReady(bytes32 id) external view returns (bool);
        function isOperationDone(bytes32 id) external view returns (bool);
        function getTimestamp(bytes32 id) external view returns (uint256);

        event CallScheduled(
            bytes32 indexed id,
            uint256 indexed index,
            address target,
            uint256 value,
            bytes data,
            bytes32 predecessor,
            uint256 delay
        );
        event CallExecuted(bytes32 indexed id, uint256 indexed index, address target, uint256 value, bytes data);
        event CallSalt(bytes32 indexed id, bytes32 salt);
        event Cancelled(bytes32 indexed id);
        event MinDelayChange(uint256 oldDuration, uint256 newDuration);
    }

    /// MultiSend interface for batching multiple calls
    interface IMultiSend {
        /// Sends multiple transactions in a single call
        /// @param transactions Packed encoding of transactions:
        ///        operation (1 byte) | to (20 bytes) | value (32 bytes) | data length (32 bytes) | data
        function multiSend(bytes memory transactions) external payable;
    }

    /// ERC20 interface for common token operations
    interface IERC20 {
        function transfer(address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::keccak256;
    use alloy::sol_types::SolCall;

    fn selector(sig: &str) -> [u8; 4] {
        let hash = keccak256(sig);
        [hash[0], hash[1], hash[2], hash[3]]
    }

    #[test]
    fn test_timelock_selectors() {
        use ITimelockController::*;

        assert_eq!(scheduleCall::SELECTOR, [0x01, 0xd5, 0x06, 0x2a]);
        assert_eq!(scheduleBatchCall::SELECTOR, [0x8f, 0x2a, 0x0b, 0xb0]);
        assert_eq!(executeCall::SELECTOR, [0x13, 0x40, 0x08, 0xd3]);
        assert_eq!(executeBatchCall::SELECTOR, [0xe3, 0x83, 0x35, 0xe5]);
        assert_eq!(cancelCall::SELECTOR, [0xc4, 0xd2, 0x52, 0xf5]);
        assert_eq!(updateDelayCall::SELECTOR, [0x64, 0xd6, 0x23, 0x53]);
    }

    #[test]
    fn test_selectors_match_signatures() {
        use ITimelockController::*;

        assert_eq!(
            scheduleCall::SELECTOR,
            selector("schedule(address,uint256,bytes,bytes32,bytes32,uint256)")
        );
        assert_eq!(
            executeBatchCall::SELECTOR,
            selector("executeBatch(address[],uint256[],bytes[],bytes32,bytes32)")
        );
        assert_eq!(hashOperationCall::SIGNATURE, "hashOperation(address,uint256,bytes,bytes32,bytes32)");
    }

    #[test]
    fn test_multisend_selector() {
        assert_eq!(IMultiSend::multiSendCall::SELECTOR, [0x8d, 0x80, 0xff, 0x0a]);
        assert_eq!(IMultiSend::multiSendCall::SELECTOR, selector("multiSend(bytes)"));
    }
}
