// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! OAppOptionsType3 contract bindings and wrapper
//!
//! This module contains the Alloy-generated bindings for LayerZero's
//! `OAppOptionsType3` facet, which stores owner-enforced execution options per
//! destination endpoint and message type, and merges them with caller-supplied
//! options.

use std::marker::PhantomData;

use alloy_contract::CallBuilder;
use alloy_network::Ethereum;
use alloy_primitives::{Address, Bytes, Log};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::{sol, SolEventInterface, SolInterface};
use tracing::{debug, info, warn, Instrument};

use crate::error::{OAppError, Result};
use crate::protocol::assert_options_type3;
use crate::spans;
use OAppOptionsType3::{
    setEnforcedOptionsCall, EnforcedOptionParam, EnforcedOptionSet, OAppOptionsType3Errors,
    OAppOptionsType3Events, OAppOptionsType3Instance, OwnershipTransferred,
};

/// The OAppOptionsType3 contract wrapper
///
/// View functions are called through the provider. State-changing functions
/// only build [`TransactionRequest`]s; signing and sending is left to the
/// caller, so a provider without a wallet gives a read-only proxy.
///
/// # Example
///
/// ```rust,no_run
/// use oapp_options_type3::{connect, MsgType, EndpointId};
/// use alloy_primitives::address;
/// use alloy_provider::ProviderBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
/// let oapp = connect(address!("1234567890123456789012345678901234567890"), provider);
///
/// let enforced = oapp
///     .enforced_options(EndpointId::Arbitrum.into(), MsgType::Send.into())
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct OAppOptionsType3Contract<P: Provider<Ethereum>> {
    instance: OAppOptionsType3Instance<P>,
}

impl<P: Provider<Ethereum>> OAppOptionsType3Contract<P> {
    /// Create a new OAppOptionsType3Contract
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "oapp_options_type3_contract_initialized"
        );
        Self {
            instance: OAppOptionsType3Instance::new(address, provider),
        }
    }

    /// Merge the enforced options for `(eid, msg_type)` with caller-supplied options
    ///
    /// The contract returns the extra options unchanged when nothing is enforced,
    /// the enforced options when no extras are passed, and otherwise the enforced
    /// options followed by the extras with their type-3 header stripped.
    pub async fn combine_options(
        &self,
        eid: u32,
        msg_type: u16,
        extra_options: Bytes,
    ) -> Result<Bytes> {
        let span = spans::view_call("combineOptions", self.instance.address());
        async {
            debug!(
                eid = eid,
                msg_type = msg_type,
                extra_options_len = extra_options.len(),
                contract_address = %self.instance.address(),
                event = "combining_options"
            );

            let combined = self
                .instance
                .combineOptions(eid, msg_type, extra_options)
                .call()
                .await
                .map_err(record_call_error)?;

            info!(
                eid = eid,
                msg_type = msg_type,
                combined_options = %combined,
                contract_address = %self.instance.address(),
                event = "options_combined"
            );

            Ok::<_, OAppError>(combined)
        }
        .instrument(span)
        .await
    }

    /// Get the enforced options for a destination endpoint and message type
    ///
    /// Empty bytes mean no options are enforced for the pair.
    pub async fn enforced_options(&self, eid: u32, msg_type: u16) -> Result<Bytes> {
        let span = spans::view_call("enforcedOptions", self.instance.address());
        async {
            debug!(
                eid = eid,
                msg_type = msg_type,
                contract_address = %self.instance.address(),
                event = "checking_enforced_options"
            );

            let enforced = self
                .instance
                .enforcedOptions(eid, msg_type)
                .call()
                .await
                .map_err(record_call_error)?;

            info!(
                eid = eid,
                msg_type = msg_type,
                enforced_options = %enforced,
                contract_address = %self.instance.address(),
                event = "enforced_options_retrieved"
            );

            Ok::<_, OAppError>(enforced)
        }
        .instrument(span)
        .await
    }

    /// Get the current owner of the OApp
    pub async fn owner(&self) -> Result<Address> {
        let span = spans::view_call("owner", self.instance.address());
        async {
            let owner = self
                .instance
                .owner()
                .call()
                .await
                .map_err(record_call_error)?;

            info!(
                owner = %owner,
                contract_address = %self.instance.address(),
                event = "owner_retrieved"
            );

            Ok::<_, OAppError>(owner)
        }
        .instrument(span)
        .await
    }

    /// Create the transaction request for `renounceOwnership`
    ///
    /// After this executes the OApp has no owner and enforced options can no
    /// longer be changed.
    pub fn renounce_ownership_transaction(&self, from_address: Address) -> TransactionRequest {
        let span = spans::build_transaction(
            "renounceOwnership",
            self.instance.address(),
            &from_address,
        );
        let _guard = span.enter();

        warn!(
            from_address = %from_address,
            contract_address = %self.instance.address(),
            event = "renounce_ownership_transaction_created"
        );

        self.instance
            .renounceOwnership()
            .from(from_address)
            .into_transaction_request()
    }

    /// Create the call builder for the `setEnforcedOptions` function.
    ///
    /// Performs no validation. Most users will want
    /// `set_enforced_options_transaction` instead.
    pub fn set_enforced_options_call_builder(
        &self,
        from_address: Address,
        params: Vec<EnforcedOptionParam>,
    ) -> CallBuilder<&P, PhantomData<setEnforcedOptionsCall>> {
        self.instance
            .setEnforcedOptions(params)
            .from(from_address)
    }

    /// Create the transaction request for `setEnforcedOptions`
    ///
    /// Every entry's options must carry the type-3 header; the contract reverts
    /// with `InvalidOptions` otherwise, so the check is done before building.
    ///
    /// # Errors
    ///
    /// [`OAppError::InvalidOptions`] with the first offending options.
    pub fn set_enforced_options_transaction(
        &self,
        from_address: Address,
        params: Vec<EnforcedOptionParam>,
    ) -> Result<TransactionRequest> {
        let span = spans::build_transaction(
            "setEnforcedOptions",
            self.instance.address(),
            &from_address,
        );
        let _guard = span.enter();

        for param in &params {
            if let Err(e) = assert_options_type3(&param.options) {
                spans::record_error_with_context(
                    "InvalidOptions",
                    &e.to_string(),
                    Some(&format!("eid={} msg_type={}", param.eid, param.msgType)),
                );
                return Err(e);
            }
        }

        info!(
            from_address = %from_address,
            param_count = params.len(),
            contract_address = %self.instance.address(),
            event = "set_enforced_options_transaction_created"
        );

        Ok(self
            .set_enforced_options_call_builder(from_address, params)
            .into_transaction_request())
    }

    /// Create the transaction request for `transferOwnership`
    ///
    /// # Errors
    ///
    /// [`OAppError::InvalidOwner`] when `new_owner` is the zero address, which the
    /// contract rejects; use `renounce_ownership_transaction` for that.
    pub fn transfer_ownership_transaction(
        &self,
        from_address: Address,
        new_owner: Address,
    ) -> Result<TransactionRequest> {
        let span = spans::build_transaction(
            "transferOwnership",
            self.instance.address(),
            &from_address,
        );
        let _guard = span.enter();

        if new_owner.is_zero() {
            let err = OAppError::InvalidOwner(new_owner);
            spans::record_error(&err);
            return Err(err);
        }

        info!(
            from_address = %from_address,
            new_owner = %new_owner,
            contract_address = %self.instance.address(),
            event = "transfer_ownership_transaction_created"
        );

        Ok(self
            .instance
            .transferOwnership(new_owner)
            .from(from_address)
            .into_transaction_request())
    }

    /// Fetch `EnforcedOptionSet` events emitted since `from_block`
    pub async fn query_enforced_option_set(
        &self,
        from_block: u64,
    ) -> Result<Vec<(EnforcedOptionSet, alloy_rpc_types::Log)>> {
        let span = spans::query_events("EnforcedOptionSet", self.instance.address(), from_block);
        async {
            let events = self
                .instance
                .EnforcedOptionSet_filter()
                .from_block(from_block)
                .query()
                .await?;

            debug!(
                event_count = events.len(),
                from_block = from_block,
                event = "enforced_option_set_events_retrieved"
            );

            Ok::<_, OAppError>(events)
        }
        .instrument(span)
        .await
    }

    /// Fetch `OwnershipTransferred` events emitted since `from_block`
    pub async fn query_ownership_transferred(
        &self,
        from_block: u64,
    ) -> Result<Vec<(OwnershipTransferred, alloy_rpc_types::Log)>> {
        let span = spans::query_events(
            "OwnershipTransferred",
            self.instance.address(),
            from_block,
        );
        async {
            let events = self
                .instance
                .OwnershipTransferred_filter()
                .from_block(from_block)
                .query()
                .await?;

            debug!(
                event_count = events.len(),
                from_block = from_block,
                event = "ownership_transferred_events_retrieved"
            );

            Ok::<_, OAppError>(events)
        }
        .instrument(span)
        .await
    }

    /// Whether any code is deployed at the bound address
    ///
    /// The address itself is never validated on construction; this is the cheap
    /// way to catch a wrong address before calling into it.
    pub async fn is_deployed(&self) -> Result<bool> {
        let code = self
            .instance
            .provider()
            .get_code_at(*self.instance.address())
            .await?;

        debug!(
            contract_address = %self.instance.address(),
            code_len = code.len(),
            event = "deployment_checked"
        );

        Ok(!code.is_empty())
    }

    /// Returns the underlying Alloy contract instance
    pub fn instance(&self) -> &OAppOptionsType3Instance<P> {
        &self.instance
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

/// Bind an address and provider into an [`OAppOptionsType3Contract`].
///
/// No validation happens here; a bad address surfaces on the first call.
pub fn connect<P: Provider<Ethereum>>(address: Address, provider: P) -> OAppOptionsType3Contract<P> {
    OAppOptionsType3Contract::new(address, provider)
}

/// Build one `setEnforcedOptions` entry.
pub fn enforced_option(eid: u32, msg_type: u16, options: Bytes) -> EnforcedOptionParam {
    EnforcedOptionParam {
        eid,
        msgType: msg_type,
        options,
    }
}

/// Decode revert data into one of the contract's declared errors.
pub fn decode_revert(data: &[u8]) -> Result<OAppOptionsType3Errors> {
    let span = spans::decode_payload("revert", data);
    let _guard = span.enter();

    Ok(OAppOptionsType3Errors::abi_decode(data)?)
}

/// Decode a log emitted by the contract into one of its events.
pub fn decode_log(log: &Log) -> Result<OAppOptionsType3Events> {
    let span = spans::decode_payload("log", &log.data.data);
    let _guard = span.enter();

    Ok(OAppOptionsType3Events::decode_log(log)?.data)
}

pub(crate) fn revert_error(err: &alloy_contract::Error) -> Option<OAppOptionsType3Errors> {
    err.as_revert_data()
        .and_then(|data| OAppOptionsType3Errors::abi_decode(&data).ok())
}

fn record_call_error(err: alloy_contract::Error) -> OAppError {
    let err = OAppError::from(err);
    spans::record_error(&err);
    err
}

sol!(
    #[allow(clippy::too_many_arguments)]
    #[allow(missing_docs)]
    #[sol(rpc, abi, all_derives)]
    OAppOptionsType3,
    "abis/oapp_options_type3.json"
);

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, bytes, hex};
    use alloy_sol_types::{SolCall, SolError, SolEvent};
    use rstest::rstest;
    use OAppOptionsType3::{
        combineOptionsCall, enforcedOptionsCall, ownerCall, renounceOwnershipCall,
        transferOwnershipCall, InvalidOptions, OAppOptionsType3Calls, OwnableInvalidOwner,
        OwnableUnauthorizedAccount,
    };

    #[rstest]
    #[case(combineOptionsCall::SELECTOR, "bc70b354")]
    #[case(enforcedOptionsCall::SELECTOR, "5535d461")]
    #[case(ownerCall::SELECTOR, "8da5cb5b")]
    #[case(renounceOwnershipCall::SELECTOR, "715018a6")]
    #[case(setEnforcedOptionsCall::SELECTOR, "b98bd070")]
    #[case(transferOwnershipCall::SELECTOR, "f2fde38b")]
    #[case(InvalidOptions::SELECTOR, "9a6d49cd")]
    #[case(OwnableInvalidOwner::SELECTOR, "1e4fbdf7")]
    #[case(OwnableUnauthorizedAccount::SELECTOR, "118cdaa7")]
    fn test_selectors(#[case] selector: [u8; 4], #[case] expected: &str) {
        assert_eq!(hex::encode(selector), expected);
    }

    #[test]
    fn test_event_topics() {
        assert_eq!(
            hex::encode(EnforcedOptionSet::SIGNATURE_HASH),
            "be4864a8e820971c0247f5992e2da559595f7bf076a21cb5928d443d2a13b674"
        );
        assert_eq!(
            hex::encode(OwnershipTransferred::SIGNATURE_HASH),
            "8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e0"
        );
    }

    #[test]
    fn test_exactly_six_functions() {
        assert_eq!(OAppOptionsType3Calls::SELECTORS.len(), 6);
        assert_eq!(OAppOptionsType3Errors::SELECTORS.len(), 3);
        assert_eq!(OAppOptionsType3Events::SELECTORS.len(), 2);
    }

    #[test]
    fn test_signatures() {
        assert_eq!(
            combineOptionsCall::SIGNATURE,
            "combineOptions(uint32,uint16,bytes)"
        );
        assert_eq!(
            setEnforcedOptionsCall::SIGNATURE,
            "setEnforcedOptions((uint32,uint16,bytes)[])"
        );
        assert_eq!(
            EnforcedOptionSet::SIGNATURE,
            "EnforcedOptionSet((uint32,uint16,bytes)[])"
        );
    }

    #[test]
    fn test_decode_revert_invalid_options() {
        let data = InvalidOptions {
            options: bytes!("0001"),
        }
        .abi_encode();

        match decode_revert(&data).unwrap() {
            OAppOptionsType3Errors::InvalidOptions(err) => {
                assert_eq!(err.options, bytes!("0001"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_revert_unauthorized() {
        let account = address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d");
        let data = OwnableUnauthorizedAccount { account }.abi_encode();

        assert_eq!(
            decode_revert(&data).unwrap(),
            OAppOptionsType3Errors::OwnableUnauthorizedAccount(OwnableUnauthorizedAccount {
                account
            })
        );
    }

    #[test]
    fn test_decode_revert_unknown_selector() {
        assert!(matches!(
            decode_revert(&hex!("deadbeef")),
            Err(OAppError::Abi(_))
        ));
    }

    #[test]
    fn test_decode_ownership_transferred_log() {
        let previous_owner = address!("1111111111111111111111111111111111111111");
        let new_owner = address!("2222222222222222222222222222222222222222");
        let event = OwnershipTransferred {
            previousOwner: previous_owner,
            newOwner: new_owner,
        };
        let log = Log {
            address: Address::ZERO,
            data: event.encode_log_data(),
        };

        // both owners are indexed, so the body is empty
        assert_eq!(log.data.topics().len(), 3);
        assert!(log.data.data.is_empty());
        assert_eq!(
            decode_log(&log).unwrap(),
            OAppOptionsType3Events::OwnershipTransferred(event)
        );
    }

    #[test]
    fn test_decode_enforced_option_set_log() {
        let event = EnforcedOptionSet {
            _enforcedOptions: vec![
                enforced_option(30110, 1, bytes!("00030100110100000000000000000000000000030d40")),
                enforced_option(30184, 2, bytes!("0003")),
            ],
        };
        let log = Log {
            address: Address::ZERO,
            data: event.encode_log_data(),
        };

        assert_eq!(log.data.topics().len(), 1);
        assert_eq!(
            decode_log(&log).unwrap(),
            OAppOptionsType3Events::EnforcedOptionSet(event)
        );
    }

    #[test]
    fn test_transfer_ownership_calldata() {
        let new_owner = address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d");
        let calldata = transferOwnershipCall {
            newOwner: new_owner,
        }
        .abi_encode();

        assert_eq!(calldata.len(), 4 + 32);
        assert_eq!(&calldata[..4], &hex!("f2fde38b"));
        assert_eq!(&calldata[16..], new_owner.as_slice());
    }
}
