// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! OApp contract bindings
//!
//! Alloy-generated bindings for LayerZero's `OAppOptionsType3` facet, generated
//! from the published ABI in `abis/oapp_options_type3.json`.
//!
//! ## Public API
//!
//! - [`OAppOptionsType3Contract`](oapp_options_type3::OAppOptionsType3Contract): instrumented
//!   wrapper over the generated instance
//! - [`OAppOptionsType3`](oapp_options_type3::OAppOptionsType3): the generated module with
//!   call, event and error types

pub mod oapp_options_type3;
