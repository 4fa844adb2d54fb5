// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Deployment configuration for an OApp
//!
//! Points the client at one OApp deployment: contract address, JSON-RPC
//! endpoint and, optionally, the LayerZero endpoint id of the chain it lives on.

use std::env;

use alloy_network::Ethereum;
use alloy_primitives::Address;
use alloy_provider::{Provider, ProviderBuilder};
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::contracts::oapp_options_type3::OAppOptionsType3Contract;
use crate::error::{OAppError, Result};
use crate::protocol::EndpointId;

pub const ENV_ADDRESS: &str = "OAPP_ADDRESS";
pub const ENV_RPC_URL: &str = "OAPP_RPC_URL";
pub const ENV_EID: &str = "OAPP_EID";

/// Where an OApp is deployed
///
/// # Examples
///
/// ```rust
/// use oapp_options_type3::OAppConfig;
/// use alloy_primitives::address;
///
/// let config = OAppConfig::builder()
///     .address(address!("1234567890123456789012345678901234567890"))
///     .rpc_url("http://localhost:8545".parse().unwrap())
///     .eid(30101)
///     .build();
///
/// assert_eq!(config.eid(), Some(30101));
/// ```
#[derive(Builder, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAppConfig {
    address: Address,
    rpc_url: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    eid: Option<u32>,
}

impl OAppConfig {
    /// Loads the configuration from `OAPP_ADDRESS`, `OAPP_RPC_URL` and the
    /// optional `OAPP_EID`, reading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), event = "dotenv_loaded");
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parses a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        debug!(
            contract_address = %config.address,
            eid = ?config.eid,
            event = "oapp_config_parsed"
        );
        Ok(config)
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| OAppError::InvalidConfig(format!("{key} is not set")))
        };

        let address = required(ENV_ADDRESS)?.parse::<Address>().map_err(|e| {
            OAppError::InvalidConfig(format!("{ENV_ADDRESS} is not a valid address: {e}"))
        })?;
        let rpc_url = Url::parse(&required(ENV_RPC_URL)?).map_err(|e| {
            OAppError::InvalidConfig(format!("{ENV_RPC_URL} is not a valid URL: {e}"))
        })?;
        let eid = lookup(ENV_EID)
            .map(|raw| {
                raw.parse::<u32>().map_err(|e| {
                    OAppError::InvalidConfig(format!("{ENV_EID} is not a valid u32: {e}"))
                })
            })
            .transpose()?;

        let config = Self {
            address,
            rpc_url,
            eid,
        };
        info!(
            contract_address = %config.address,
            eid = ?config.eid,
            event = "oapp_config_loaded"
        );
        Ok(config)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    pub fn eid(&self) -> Option<u32> {
        self.eid
    }

    /// The well-known endpoint for `eid`, if any.
    pub fn endpoint(&self) -> Option<EndpointId> {
        self.eid.and_then(EndpointId::from_u32)
    }

    /// Connects a read-only proxy over HTTP.
    ///
    /// No request is made until the first call.
    pub fn connect(&self) -> OAppOptionsType3Contract<impl Provider<Ethereum> + Clone> {
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());
        OAppOptionsType3Contract::new(self.address, provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config = OAppConfig::from_lookup(lookup(&[
            (ENV_ADDRESS, "0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d"),
            (ENV_RPC_URL, "https://arb1.arbitrum.io/rpc"),
            (ENV_EID, "30110"),
        ]))
        .unwrap();

        assert_eq!(
            config.address(),
            address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d")
        );
        assert_eq!(config.rpc_url().as_str(), "https://arb1.arbitrum.io/rpc");
        assert_eq!(config.endpoint(), Some(EndpointId::Arbitrum));
    }

    #[test]
    fn test_eid_is_optional() {
        let config = OAppConfig::from_lookup(lookup(&[
            (ENV_ADDRESS, "0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d"),
            (ENV_RPC_URL, "http://localhost:8545"),
        ]))
        .unwrap();
        assert_eq!(config.eid(), None);
        assert_eq!(config.endpoint(), None);
    }

    #[test]
    fn test_missing_address() {
        let err = OAppConfig::from_lookup(lookup(&[(ENV_RPC_URL, "http://localhost:8545")]))
            .unwrap_err();
        assert!(matches!(err, OAppError::InvalidConfig(ref msg) if msg.contains(ENV_ADDRESS)));
    }

    #[test]
    fn test_invalid_values() {
        let bad_address = OAppConfig::from_lookup(lookup(&[
            (ENV_ADDRESS, "0x1234"),
            (ENV_RPC_URL, "http://localhost:8545"),
        ]));
        assert!(matches!(bad_address, Err(OAppError::InvalidConfig(_))));

        let bad_eid = OAppConfig::from_lookup(lookup(&[
            (ENV_ADDRESS, "0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d"),
            (ENV_RPC_URL, "http://localhost:8545"),
            (ENV_EID, "arbitrum"),
        ]));
        assert!(matches!(bad_eid, Err(OAppError::InvalidConfig(ref msg)) if msg.contains(ENV_EID)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = r#"{
            "address": "0x742d35cc6634c0532925a3b844bc9e7595f8fa0d",
            "rpc_url": "http://localhost:8545/"
        }"#;
        let config = OAppConfig::from_json(json).unwrap();
        assert_eq!(config.eid(), None);

        let back = serde_json::to_value(&config).unwrap();
        assert!(back.get("eid").is_none());
        assert_eq!(serde_json::from_value::<OAppConfig>(back).unwrap(), config);
    }

    #[test]
    fn test_from_json_rejects_bad_address() {
        let err = OAppConfig::from_json(r#"{"address": "0x12", "rpc_url": "http://localhost:8545"}"#)
            .unwrap_err();
        assert!(matches!(err, OAppError::Json(_)));
    }

    #[test]
    fn test_connect_binds_address() {
        let config = OAppConfig::builder()
            .address(address!("1234567890123456789012345678901234567890"))
            .rpc_url("http://localhost:8545".parse().unwrap())
            .build();

        let oapp = config.connect();
        assert_eq!(oapp.address(), config.address());
    }
}
