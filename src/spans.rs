// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! OpenTelemetry span helpers for OAppOptionsType3 operations
//!
//! Static span names with structured attributes, kept apart from the contract
//! wrapper so callers can attach their own instrumentation.
//!
//! # Example
//!
//! ```rust,no_run
//! use oapp_options_type3::spans;
//! use alloy_primitives::Address;
//!
//! let span = spans::view_call("owner", &Address::ZERO);
//! let _guard = span.enter();
//! // Your custom contract call here
//! ```

use alloy_primitives::{hex, Address};
use tracing::Span;

/// Create span for a read-only (`view`) contract call.
///
/// Parent: caller's operation span
/// Children: Provider RPC calls (`eth_call`)
#[inline]
pub fn view_call(method: &'static str, contract_address: &Address) -> Span {
    tracing::info_span!(
        "oapp_options_type3.view_call",
        method = method,
        contract_address = %contract_address,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for building a state-changing transaction request.
///
/// Parent: caller's operation span
/// Children: None
#[inline]
pub fn build_transaction(
    method: &'static str,
    contract_address: &Address,
    from_address: &Address,
) -> Span {
    tracing::info_span!(
        "oapp_options_type3.build_transaction",
        method = method,
        contract_address = %contract_address,
        from_address = %from_address,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.context = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for querying event logs emitted by the contract.
///
/// Parent: caller's operation span
/// Children: Provider RPC calls (`eth_getLogs`)
#[inline]
pub fn query_events(event_name: &'static str, contract_address: &Address, from_block: u64) -> Span {
    tracing::debug_span!(
        "oapp_options_type3.query_events",
        event_name = event_name,
        contract_address = %contract_address,
        from_block = from_block,
    )
}

/// Create span for decoding raw ABI payloads (calldata, logs, revert data).
///
/// Parent: caller's operation span
/// Children: None
#[inline]
pub fn decode_payload(kind: &'static str, payload: &[u8]) -> Span {
    tracing::trace_span!(
        "oapp_options_type3.decode_payload",
        kind = kind,
        payload_len = payload.len(),
        payload_prefix = %hex::encode(&payload[..payload.len().min(4)]),
    )
}

/// Record error attributes on the current span.
///
/// Follows OpenTelemetry semantic conventions:
/// - error.type: The error type/variant
/// - error.message: Human-readable error message
/// - error.source: The underlying cause, when present
pub fn record_error<E: std::error::Error>(error: &E) {
    let current_span = tracing::Span::current();
    current_span.record(
        "error.type",
        error.to_string().split(':').next().unwrap_or("Unknown"),
    );
    current_span.record("error.message", error.to_string());
    current_span.record("otel.status_code", "ERROR");

    if let Some(source) = error.source() {
        current_span.record("error.source", source.to_string());
    }
}

/// Record error attributes with custom context on the current span.
pub fn record_error_with_context(
    error_type: &str,
    error_message: &str,
    additional_context: Option<&str>,
) {
    let current_span = tracing::Span::current();
    current_span.record("error.type", error_type);
    current_span.record("error.message", error_message);
    current_span.record("otel.status_code", "ERROR");

    if let Some(context) = additional_context {
        current_span.record("error.context", context);
    }
}
