// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! # oapp-options-type3
//!
//! Rust bindings for LayerZero's `OAppOptionsType3` contract: the OApp facet that
//! lets an owner enforce execution options per destination endpoint and message
//! type, and merges them with options supplied by senders.
//!
//! The ABI ships with the crate and is exposed two ways:
//!
//! - [`connect`] binds an address and a provider into an
//!   [`OAppOptionsType3Contract`], a typed proxy over the six contract functions.
//! - [`create_interface`] returns an [`OAppOptionsType3Interface`], a runtime
//!   decoder for calldata, return data, logs and revert data.
//!
//! ## Reading enforced options
//!
//! ```rust,no_run
//! use oapp_options_type3::{connect, EndpointId, MsgType};
//! use alloy_primitives::address;
//! use alloy_provider::ProviderBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
//! let oapp = connect(address!("1234567890123456789012345678901234567890"), provider);
//!
//! let enforced = oapp
//!     .enforced_options(EndpointId::Base.into(), MsgType::Send.into())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Setting enforced options
//!
//! ```rust,no_run
//! use oapp_options_type3::{enforced_option, connect, EndpointId, MsgType, OptionsBuilder};
//! use alloy_primitives::address;
//! use alloy_provider::ProviderBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
//! let owner = address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d");
//! let oapp = connect(address!("1234567890123456789012345678901234567890"), provider);
//!
//! let options = OptionsBuilder::new()
//!     .add_executor_lz_receive_option(200_000, 0)
//!     .build();
//! let tx = oapp.set_enforced_options_transaction(
//!     owner,
//!     vec![enforced_option(EndpointId::Arbitrum.into(), MsgType::Send.into(), options)],
//! )?;
//! // Sign and send `tx` with a wallet-enabled provider...
//! # Ok(())
//! # }
//! ```
//!
//! ## Public API
//!
//! - [`connect`], [`OAppOptionsType3Contract`] - Connected contract proxy
//! - [`create_interface`], [`OAppOptionsType3Interface`], [`ABI`], [`ABI_JSON`] - ABI decoder
//! - [`OptionsBuilder`], [`decode_options`], [`assert_options_type3`] - Type-3 options
//! - [`EndpointId`], [`MsgType`] - Protocol identifiers
//! - [`OAppConfig`] - Deployment configuration
//! - [`OAppError`] and [`Result`] - Error types

mod config;
mod contracts;
mod error;
mod interface;
mod protocol;

pub use config::{OAppConfig, ENV_ADDRESS, ENV_EID, ENV_RPC_URL};
pub use contracts::oapp_options_type3::{
    connect, decode_log, decode_revert, enforced_option, OAppOptionsType3,
    OAppOptionsType3Contract,
};
pub use error::{MemberKind, OAppError, Result};
pub use interface::{create_interface, OAppOptionsType3Interface, ABI, ABI_JSON};
pub use protocol::{
    assert_options_type3, decode_options, options, EndpointId, ExecutorOption, InvalidEndpointId,
    MsgType, OptionsBuilder, WorkerOption, TESTNET_EID_BASE,
};

// Public module for advanced users who need custom instrumentation
pub mod spans;

pub mod testing;
