// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
use std::fmt;

use alloy_primitives::{hex, Address, Bytes};
use thiserror::Error;

use crate::contracts::oapp_options_type3::OAppOptionsType3::OAppOptionsType3Errors;

/// The kind of ABI member a lookup was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Function,
    Event,
    Error,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => f.write_str("function"),
            Self::Event => f.write_str("event"),
            Self::Error => f.write_str("error"),
        }
    }
}

#[derive(Error, Debug)]
pub enum OAppError {
    #[error("Unknown {kind} in OAppOptionsType3 ABI: {name}")]
    UnknownMember { kind: MemberKind, name: String },

    #[error("No {kind} matches selector {selector}")]
    UnknownSelector { kind: MemberKind, selector: String },

    #[error("Selector mismatch for {name}: expected {expected}, got {actual}")]
    SelectorMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid options: 0x{}", hex::encode(.options))]
    InvalidOptions { options: Bytes },

    #[error("Malformed options: {reason}")]
    MalformedOptions { reason: String },

    #[error("Invalid owner: {0}")]
    InvalidOwner(Address),

    #[error("Contract reverted: {0:?}")]
    Reverted(OAppOptionsType3Errors),

    #[error("Contract call failed: {0}")]
    ContractCall(#[source] alloy_contract::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("RPC error: {0}")]
    Rpc(#[from] alloy_json_rpc::RpcError<alloy_transport::TransportErrorKind>),

    #[error("ABI encoding/decoding error: {0}")]
    Abi(#[from] alloy_sol_types::Error),

    #[error("Dynamic ABI error: {0}")]
    DynAbi(#[from] alloy_dyn_abi::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<alloy_contract::Error> for OAppError {
    /// Revert data matching one of the contract's declared errors is surfaced
    /// as [`OAppError::Reverted`]; everything else stays a `ContractCall`.
    fn from(err: alloy_contract::Error) -> Self {
        match crate::contracts::oapp_options_type3::revert_error(&err) {
            Some(decoded) => Self::Reverted(decoded),
            None => Self::ContractCall(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, OAppError>;
