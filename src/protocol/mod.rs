// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! LayerZero protocol types
//!
//! Endpoint identifiers, message types and the type-3 options encoding that
//! enforced options are expressed in.

mod endpoint_id;
mod msg_type;
pub mod options;

pub use endpoint_id::{EndpointId, InvalidEndpointId, TESTNET_EID_BASE};
pub use msg_type::MsgType;
pub use options::{
    assert_options_type3, decode_options, ExecutorOption, OptionsBuilder, WorkerOption,
};
