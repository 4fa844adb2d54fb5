// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Type-3 execution options
//!
//! Options travel as packed bytes: a big-endian `uint16` header equal to 3,
//! followed by worker entries.
//!
//! - executor: `worker_id:u8 | size:u16 | option_type:u8 | params`, `size = params.len() + 1`
//! - DVN: `worker_id:u8 | size:u16 | dvn_idx:u8 | option_type:u8 | params`, `size = params.len() + 2`
//!
//! Enforced options set on the contract must carry the type-3 header, otherwise
//! `setEnforcedOptions` reverts with `InvalidOptions`.

use alloy_primitives::{Bytes, B256};
use tracing::debug;

use crate::error::{OAppError, Result};

pub const OPTION_TYPE_3: u16 = 3;

pub const EXECUTOR_WORKER_ID: u8 = 1;
pub const DVN_WORKER_ID: u8 = 2;

pub const OPTION_TYPE_LZRECEIVE: u8 = 1;
pub const OPTION_TYPE_NATIVE_DROP: u8 = 2;
pub const OPTION_TYPE_LZCOMPOSE: u8 = 3;
pub const OPTION_TYPE_ORDERED_EXECUTION: u8 = 4;

pub const OPTION_TYPE_PRECRIME: u8 = 1;

/// Builder for type-3 options
///
/// # Example
///
/// ```rust
/// use oapp_options_type3::OptionsBuilder;
///
/// let options = OptionsBuilder::new()
///     .add_executor_lz_receive_option(200_000, 0)
///     .build();
///
/// assert_eq!(
///     options.to_string(),
///     "0x00030100110100000000000000000000000000030d40"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsBuilder {
    buf: Vec<u8>,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsBuilder {
    /// Starts an empty option set carrying only the type-3 header.
    pub fn new() -> Self {
        Self {
            buf: OPTION_TYPE_3.to_be_bytes().to_vec(),
        }
    }

    /// Gas (and optional native value) for `lzReceive` on the destination.
    ///
    /// A zero `value` is omitted from the encoding.
    pub fn add_executor_lz_receive_option(self, gas: u128, value: u128) -> Self {
        let mut params = gas.to_be_bytes().to_vec();
        if value != 0 {
            params.extend_from_slice(&value.to_be_bytes());
        }
        self.add_executor_option(OPTION_TYPE_LZRECEIVE, &params)
    }

    /// Native gas token airdropped to `receiver` on the destination.
    pub fn add_executor_native_drop_option(self, amount: u128, receiver: B256) -> Self {
        let mut params = amount.to_be_bytes().to_vec();
        params.extend_from_slice(receiver.as_slice());
        self.add_executor_option(OPTION_TYPE_NATIVE_DROP, &params)
    }

    /// Gas (and optional native value) for the composed call at `index`.
    pub fn add_executor_lz_compose_option(self, index: u16, gas: u128, value: u128) -> Self {
        let mut params = index.to_be_bytes().to_vec();
        params.extend_from_slice(&gas.to_be_bytes());
        if value != 0 {
            params.extend_from_slice(&value.to_be_bytes());
        }
        self.add_executor_option(OPTION_TYPE_LZCOMPOSE, &params)
    }

    pub fn add_executor_ordered_execution_option(self) -> Self {
        self.add_executor_option(OPTION_TYPE_ORDERED_EXECUTION, &[])
    }

    pub fn add_dvn_precrime_option(self, dvn_idx: u8) -> Self {
        self.add_dvn_option(dvn_idx, OPTION_TYPE_PRECRIME, &[])
    }

    fn add_executor_option(mut self, option_type: u8, params: &[u8]) -> Self {
        self.buf.push(EXECUTOR_WORKER_ID);
        self.buf
            .extend_from_slice(&entry_size(params.len(), 1).to_be_bytes());
        self.buf.push(option_type);
        self.buf.extend_from_slice(params);
        self
    }

    fn add_dvn_option(mut self, dvn_idx: u8, option_type: u8, params: &[u8]) -> Self {
        self.buf.push(DVN_WORKER_ID);
        self.buf
            .extend_from_slice(&entry_size(params.len(), 2).to_be_bytes());
        self.buf.push(dvn_idx);
        self.buf.push(option_type);
        self.buf.extend_from_slice(params);
        self
    }

    pub fn build(self) -> Bytes {
        Bytes::from(self.buf)
    }
}

// Params built here are at most 50 bytes, far below u16::MAX.
const fn entry_size(params_len: usize, prefix: usize) -> u16 {
    (params_len + prefix) as u16
}

/// Checks that `options` starts with the type-3 header.
///
/// Fails with [`OAppError::InvalidOptions`] when the header is missing or wrong,
/// mirroring the contract's revert condition for enforced options.
pub fn assert_options_type3(options: &[u8]) -> Result<()> {
    match options {
        [hi, lo, ..] if u16::from_be_bytes([*hi, *lo]) == OPTION_TYPE_3 => Ok(()),
        _ => {
            debug!(
                options_len = options.len(),
                event = "options_type3_assertion_failed"
            );
            Err(OAppError::InvalidOptions {
                options: Bytes::copy_from_slice(options),
            })
        }
    }
}

/// A decoded executor option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutorOption {
    LzReceive { gas: u128, value: u128 },
    NativeDrop { amount: u128, receiver: B256 },
    LzCompose { index: u16, gas: u128, value: u128 },
    OrderedExecution,
    /// An option type this crate does not interpret
    Other { option_type: u8, params: Bytes },
}

/// A single worker entry of a type-3 option set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerOption {
    Executor(ExecutorOption),
    Dvn {
        dvn_idx: u8,
        option_type: u8,
        params: Bytes,
    },
}

/// Splits a type-3 option set into its worker entries.
///
/// # Example
///
/// ```rust
/// use oapp_options_type3::{decode_options, ExecutorOption, OptionsBuilder, WorkerOption};
///
/// let options = OptionsBuilder::new()
///     .add_executor_lz_receive_option(65_000, 0)
///     .build();
///
/// assert_eq!(
///     decode_options(&options).unwrap(),
///     vec![WorkerOption::Executor(ExecutorOption::LzReceive { gas: 65_000, value: 0 })]
/// );
/// ```
pub fn decode_options(options: &[u8]) -> Result<Vec<WorkerOption>> {
    assert_options_type3(options)?;

    let mut entries = Vec::new();
    let mut cursor = 2;
    while cursor < options.len() {
        let header = options
            .get(cursor..cursor + 3)
            .ok_or_else(|| malformed(format!("truncated worker header at offset {cursor}")))?;
        let worker_id = header[0];
        let size = u16::from_be_bytes([header[1], header[2]]) as usize;
        let body_start = cursor + 3;
        let body = options.get(body_start..body_start + size).ok_or_else(|| {
            malformed(format!(
                "worker entry at offset {cursor} declares {size} bytes, {} available",
                options.len() - body_start
            ))
        })?;

        let entry = match worker_id {
            EXECUTOR_WORKER_ID => {
                let (&option_type, params) = body
                    .split_first()
                    .ok_or_else(|| malformed("empty executor option".to_string()))?;
                WorkerOption::Executor(decode_executor_option(option_type, params)?)
            }
            DVN_WORKER_ID => match body {
                [dvn_idx, option_type, params @ ..] => WorkerOption::Dvn {
                    dvn_idx: *dvn_idx,
                    option_type: *option_type,
                    params: Bytes::copy_from_slice(params),
                },
                _ => return Err(malformed("DVN option shorter than 2 bytes".to_string())),
            },
            other => return Err(malformed(format!("unknown worker id {other}"))),
        };
        entries.push(entry);
        cursor = body_start + size;
    }

    Ok(entries)
}

fn decode_executor_option(option_type: u8, params: &[u8]) -> Result<ExecutorOption> {
    let option = match option_type {
        OPTION_TYPE_LZRECEIVE => match params.len() {
            16 => ExecutorOption::LzReceive {
                gas: read_u128(&params[..16]),
                value: 0,
            },
            32 => ExecutorOption::LzReceive {
                gas: read_u128(&params[..16]),
                value: read_u128(&params[16..]),
            },
            len => return Err(malformed(format!("lzReceive option of {len} bytes"))),
        },
        OPTION_TYPE_NATIVE_DROP => {
            if params.len() != 48 {
                return Err(malformed(format!(
                    "nativeDrop option of {} bytes",
                    params.len()
                )));
            }
            ExecutorOption::NativeDrop {
                amount: read_u128(&params[..16]),
                receiver: B256::from_slice(&params[16..]),
            }
        }
        OPTION_TYPE_LZCOMPOSE => {
            let index = match params {
                [hi, lo, ..] => u16::from_be_bytes([*hi, *lo]),
                _ => return Err(malformed("lzCompose option missing index".to_string())),
            };
            match params.len() {
                18 => ExecutorOption::LzCompose {
                    index,
                    gas: read_u128(&params[2..18]),
                    value: 0,
                },
                34 => ExecutorOption::LzCompose {
                    index,
                    gas: read_u128(&params[2..18]),
                    value: read_u128(&params[18..]),
                },
                len => return Err(malformed(format!("lzCompose option of {len} bytes"))),
            }
        }
        OPTION_TYPE_ORDERED_EXECUTION => ExecutorOption::OrderedExecution,
        other => ExecutorOption::Other {
            option_type: other,
            params: Bytes::copy_from_slice(params),
        },
    };
    Ok(option)
}

// Callers guarantee a 16-byte slice.
fn read_u128(bytes: &[u8]) -> u128 {
    let mut buf = [0u8; 16];
    buf.copy_from_slice(bytes);
    u128::from_be_bytes(buf)
}

fn malformed(reason: String) -> OAppError {
    OAppError::MalformedOptions { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{b256, bytes};

    #[test]
    fn test_empty_builder_is_header_only() {
        assert_eq!(OptionsBuilder::new().build(), bytes!("0003"));
        assert!(decode_options(&bytes!("0003")).unwrap().is_empty());
    }

    #[test]
    fn test_lz_receive_encoding() {
        let options = OptionsBuilder::new()
            .add_executor_lz_receive_option(200_000, 0)
            .build();
        assert_eq!(
            options,
            bytes!("00030100110100000000000000000000000000030d40")
        );

        let with_value = OptionsBuilder::new()
            .add_executor_lz_receive_option(200_000, 1)
            .build();
        // size = 32 params + 1 type byte
        assert_eq!(&with_value[3..5], &[0x00, 0x21]);
        assert_eq!(with_value.len(), 2 + 3 + 1 + 32);
    }

    #[test]
    fn test_combined_encoding() {
        let receiver = b256!("000000000000000000000000742d35cc6634c0532925a3b844bc9e7595f8fa0d");
        let options = OptionsBuilder::new()
            .add_executor_lz_receive_option(100_000, 0)
            .add_executor_native_drop_option(5, receiver)
            .add_executor_lz_compose_option(0, 50_000, 0)
            .add_executor_ordered_execution_option()
            .add_dvn_precrime_option(1)
            .build();

        let decoded = decode_options(&options).unwrap();
        assert_eq!(
            decoded,
            vec![
                WorkerOption::Executor(ExecutorOption::LzReceive {
                    gas: 100_000,
                    value: 0
                }),
                WorkerOption::Executor(ExecutorOption::NativeDrop {
                    amount: 5,
                    receiver
                }),
                WorkerOption::Executor(ExecutorOption::LzCompose {
                    index: 0,
                    gas: 50_000,
                    value: 0
                }),
                WorkerOption::Executor(ExecutorOption::OrderedExecution),
                WorkerOption::Dvn {
                    dvn_idx: 1,
                    option_type: OPTION_TYPE_PRECRIME,
                    params: Bytes::new(),
                },
            ]
        );

        // ordered execution then precrime close the buffer
        assert!(options.ends_with(&[0x01, 0x00, 0x01, 0x04, 0x02, 0x00, 0x02, 0x01, 0x01]));
    }

    #[test]
    fn test_assert_options_type3() {
        assert!(assert_options_type3(&bytes!("0003")).is_ok());
        assert!(assert_options_type3(&bytes!("0003ff")).is_ok());

        for bad in [Bytes::new(), bytes!("00"), bytes!("0001"), bytes!("0002aa")] {
            let err = assert_options_type3(&bad).unwrap_err();
            assert!(
                matches!(err, OAppError::InvalidOptions { ref options } if *options == bad),
                "unexpected error for {bad}: {err}"
            );
        }
    }

    #[test]
    fn test_decode_truncated_entry() {
        // declares 17 bytes, carries 2
        let err = decode_options(&bytes!("000301001101ff")).unwrap_err();
        assert!(matches!(err, OAppError::MalformedOptions { .. }));

        let err = decode_options(&bytes!("00030100")).unwrap_err();
        assert!(matches!(err, OAppError::MalformedOptions { .. }));
    }

    #[test]
    fn test_decode_unknown_worker() {
        let err = decode_options(&bytes!("000303000101")).unwrap_err();
        assert!(err.to_string().contains("unknown worker id 3"));
    }

    #[test]
    fn test_decode_unknown_executor_type_is_preserved() {
        let decoded = decode_options(&bytes!("000301000309abcd")).unwrap();
        assert_eq!(
            decoded,
            vec![WorkerOption::Executor(ExecutorOption::Other {
                option_type: 9,
                params: bytes!("abcd"),
            })]
        );
    }

    #[test]
    fn test_decode_bad_lz_receive_length() {
        let err = decode_options(&bytes!("0003010003010102")).unwrap_err();
        assert!(err.to_string().contains("lzReceive option of 2 bytes"));
    }
}
