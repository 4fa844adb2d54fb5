// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Test utilities for exercising the contract wrapper without a node
//!
//! Alloy's mock transport answers JSON-RPC requests from a queue filled by the
//! test. Responses are consumed in order, one per request, so a test pushes
//! exactly what the calls under test will ask for.

use alloy_network::Ethereum;
use alloy_primitives::{address, Address, Bytes};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::Log;
use alloy_sol_types::{SolError, SolEvent, SolValue};
use alloy_transport::mock::Asserter;

use crate::contracts::oapp_options_type3::OAppOptionsType3Contract;

/// Address the mocked contract is bound to.
pub const MOCK_OAPP_ADDRESS: Address = address!("0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a");

/// A contract wrapper over a mocked provider, plus the queue feeding it.
pub fn mocked_contract() -> (
    OAppOptionsType3Contract<impl Provider<Ethereum> + Clone>,
    Asserter,
) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
    (
        OAppOptionsType3Contract::new(MOCK_OAPP_ADDRESS, provider),
        asserter,
    )
}

/// Queue the return data of a view call returning `bytes`.
pub fn push_bytes_return(asserter: &Asserter, value: Bytes) {
    let encoded = Bytes::from((value,).abi_encode_params());
    asserter.push_success(&encoded);
}

/// Queue the return data of a view call returning `address`.
pub fn push_address_return(asserter: &Asserter, value: Address) {
    let encoded = Bytes::from((value,).abi_encode_params());
    asserter.push_success(&encoded);
}

/// Queue an `eth_getLogs` response holding `events`, all emitted by the mocked
/// contract in `block_number`.
pub fn push_logs<E: SolEvent>(asserter: &Asserter, events: &[E], block_number: u64) {
    let logs: Vec<Log> = events
        .iter()
        .enumerate()
        .map(|(index, event)| Log {
            inner: alloy_primitives::Log {
                address: MOCK_OAPP_ADDRESS,
                data: event.encode_log_data(),
            },
            block_number: Some(block_number),
            log_index: Some(index as u64),
            ..Default::default()
        })
        .collect();
    asserter.push_success(&logs);
}

/// Queue an `eth_call` failure carrying `error` as revert data.
///
/// # Panics
///
/// Never in practice: hex-encoded bytes always serialize to a JSON string.
pub fn push_revert<E: SolError>(asserter: &Asserter, error: E) {
    let payload = alloy_json_rpc::ErrorPayload {
        code: 3,
        message: "execution reverted".into(),
        data: Some(
            serde_json::value::to_raw_value(&Bytes::from(error.abi_encode()))
                .expect("bytes always serialize"),
        ),
    };
    asserter.push_failure(payload);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::bytes;

    #[tokio::test]
    async fn test_mocked_view_call() {
        let (oapp, asserter) = mocked_contract();
        push_bytes_return(&asserter, bytes!("0003"));

        let enforced = oapp.enforced_options(30101, 1).await.unwrap();
        assert_eq!(enforced, bytes!("0003"));
    }
}
