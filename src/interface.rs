// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Runtime interface decoder for OAppOptionsType3
//!
//! The typed `sol!` bindings cover code that knows the contract at compile time.
//! This module exposes the same ABI as a [`JsonAbi`] for tooling that works with
//! member names and [`DynSolValue`]s: relayers matching selectors, log indexers,
//! revert decoders.

use std::sync::LazyLock;

use alloy_dyn_abi::{DecodedEvent, DynSolValue, EventExt, FunctionExt, JsonAbiExt};
use alloy_json_abi::{Error as AbiError, Event, Function, JsonAbi};
use alloy_primitives::{hex, Bytes, Selector, B256};
use tracing::{debug, trace};

use crate::error::{MemberKind, OAppError, Result};
use crate::spans;

/// The ABI table exactly as published with the contract.
pub const ABI_JSON: &str = include_str!("../abis/oapp_options_type3.json");

/// The process-wide interface descriptor, parsed from [`ABI_JSON`] on first use.
///
/// Parsing keeps every member's `internalType`, so serializing this value
/// reproduces the published table.
///
/// # Panics
///
/// On first access if the bundled ABI file is not valid JSON ABI.
pub static ABI: LazyLock<JsonAbi> = LazyLock::new(|| {
    serde_json::from_str(ABI_JSON).expect("bundled OAppOptionsType3 ABI is valid JSON ABI")
});

/// Decoder bound to the OAppOptionsType3 ABI
///
/// # Example
///
/// ```rust
/// use oapp_options_type3::create_interface;
///
/// let iface = create_interface();
/// let selector = iface.function_selector("owner").unwrap();
/// assert_eq!(selector.to_string(), "0x8da5cb5b");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OAppOptionsType3Interface {
    abi: &'static JsonAbi,
}

/// Build a decoder over the static OAppOptionsType3 ABI.
pub fn create_interface() -> OAppOptionsType3Interface {
    OAppOptionsType3Interface { abi: &ABI }
}

impl Default for OAppOptionsType3Interface {
    fn default() -> Self {
        create_interface()
    }
}

impl OAppOptionsType3Interface {
    pub fn abi(&self) -> &'static JsonAbi {
        self.abi
    }

    pub fn function(&self, name: &str) -> Result<&'static Function> {
        self.abi
            .function(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| unknown(MemberKind::Function, name))
    }

    pub fn event(&self, name: &str) -> Result<&'static Event> {
        self.abi
            .event(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| unknown(MemberKind::Event, name))
    }

    pub fn error(&self, name: &str) -> Result<&'static AbiError> {
        self.abi
            .error(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| unknown(MemberKind::Error, name))
    }

    /// Names of all functions, sorted.
    pub fn function_names(&self) -> Vec<&'static str> {
        self.abi.functions().map(|f| f.name.as_str()).collect()
    }

    pub fn function_selector(&self, name: &str) -> Result<Selector> {
        Ok(self.function(name)?.selector())
    }

    /// The `topic0` a non-anonymous event is logged under.
    pub fn event_topic(&self, name: &str) -> Result<B256> {
        Ok(self.event(name)?.selector())
    }

    pub fn error_selector(&self, name: &str) -> Result<Selector> {
        Ok(self.error(name)?.selector())
    }

    /// Encode calldata for `name`: selector followed by the ABI-encoded arguments.
    pub fn encode_function_data(&self, name: &str, args: &[DynSolValue]) -> Result<Bytes> {
        let function = self.function(name)?;
        let calldata = function.abi_encode_input(args)?;

        trace!(
            function = name,
            calldata_len = calldata.len(),
            event = "function_data_encoded"
        );

        Ok(calldata.into())
    }

    /// Decode calldata for `name`, checking the selector first.
    pub fn decode_function_data(&self, name: &str, calldata: &[u8]) -> Result<Vec<DynSolValue>> {
        let span = spans::decode_payload("calldata", calldata);
        let _guard = span.enter();

        let function = self.function(name)?;
        let (selector, body) = split_selector(calldata)?;
        if selector != function.selector() {
            return Err(OAppError::SelectorMismatch {
                name: name.to_string(),
                expected: function.selector().to_string(),
                actual: selector.to_string(),
            });
        }

        Ok(function.abi_decode_input(body)?)
    }

    /// Decode the return data of a call to `name`.
    pub fn decode_function_result(&self, name: &str, data: &[u8]) -> Result<Vec<DynSolValue>> {
        let span = spans::decode_payload("return", data);
        let _guard = span.enter();

        Ok(self.function(name)?.abi_decode_output(data)?)
    }

    /// Identify and decode calldata for any function in the interface.
    pub fn parse_transaction(&self, calldata: &[u8]) -> Result<(&'static Function, Vec<DynSolValue>)> {
        let span = spans::decode_payload("calldata", calldata);
        let _guard = span.enter();

        let (selector, body) = split_selector(calldata)?;
        let function = self
            .abi
            .functions()
            .find(|f| f.selector() == selector)
            .ok_or_else(|| unknown_selector(MemberKind::Function, selector.as_slice()))?;

        debug!(
            function = %function.name,
            selector = %selector,
            event = "transaction_parsed"
        );

        Ok((function, function.abi_decode_input(body)?))
    }

    /// Identify and decode a log emitted by the contract.
    ///
    /// The event is matched on `topics[0]`, so anonymous events are not found.
    pub fn parse_log(&self, topics: &[B256], data: &[u8]) -> Result<(&'static Event, DecodedEvent)> {
        let span = spans::decode_payload("log", data);
        let _guard = span.enter();

        let topic0 = topics.first().ok_or_else(|| unknown_selector(MemberKind::Event, &[]))?;
        let event = self
            .abi
            .events()
            .find(|e| !e.anonymous && e.selector() == *topic0)
            .ok_or_else(|| unknown_selector(MemberKind::Event, topic0.as_slice()))?;

        let decoded = event.decode_log_parts(topics.iter().copied(), data)?;

        debug!(
            event_name = %event.name,
            indexed_count = decoded.indexed.len(),
            body_count = decoded.body.len(),
            event = "log_parsed"
        );

        Ok((event, decoded))
    }

    /// Identify and decode revert data as one of the contract's errors.
    pub fn parse_error(&self, data: &[u8]) -> Result<(&'static AbiError, Vec<DynSolValue>)> {
        let span = spans::decode_payload("revert", data);
        let _guard = span.enter();

        let (selector, body) = split_selector(data)?;
        let error = self
            .abi
            .errors()
            .find(|e| e.selector() == selector)
            .ok_or_else(|| unknown_selector(MemberKind::Error, selector.as_slice()))?;

        Ok((error, error.abi_decode_input(body)?))
    }
}

fn split_selector(data: &[u8]) -> Result<(Selector, &[u8])> {
    if data.len() < 4 {
        return Err(unknown_selector(MemberKind::Function, data));
    }
    let (selector, body) = data.split_at(4);
    Ok((Selector::from_slice(selector), body))
}

fn unknown(kind: MemberKind, name: &str) -> OAppError {
    OAppError::UnknownMember {
        kind,
        name: name.to_string(),
    }
}

fn unknown_selector(kind: MemberKind, selector: &[u8]) -> OAppError {
    OAppError::UnknownSelector {
        kind,
        selector: format!("0x{}", hex::encode(selector)),
    }
}
