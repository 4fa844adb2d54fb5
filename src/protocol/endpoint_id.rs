// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! LayerZero V2 endpoint identifiers
//!
//! Every chain reachable through the LayerZero V2 endpoint is addressed by a
//! `uint32` endpoint id (EID). Mainnets live in the `30xxx` range and testnets in
//! the `40xxx` range. Enforced options are keyed by EID.
//!
//! The contract accepts any `u32`, so the methods on the wrapper take raw values;
//! this enum covers the well-known deployments.

use std::fmt;

use alloy_chains::NamedChain;

/// Lowest endpoint id used by LayerZero V2 testnets.
pub const TESTNET_EID_BASE: u32 = 40_000;

/// LayerZero V2 endpoint identifier for well-known EVM chains
///
/// # Example
///
/// ```rust
/// use oapp_options_type3::EndpointId;
///
/// let eid: u32 = EndpointId::Arbitrum.into();
/// assert_eq!(eid, 30110);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
#[non_exhaustive]
pub enum EndpointId {
    /// Ethereum mainnet (EID: 30101)
    Ethereum = 30101,
    /// BNB Smart Chain (EID: 30102)
    BnbSmartChain = 30102,
    /// Avalanche C-Chain (EID: 30106)
    Avalanche = 30106,
    /// Polygon PoS (EID: 30109)
    Polygon = 30109,
    /// Arbitrum One (EID: 30110)
    Arbitrum = 30110,
    /// Optimism (EID: 30111)
    Optimism = 30111,
    /// Linea (EID: 30183)
    Linea = 30183,
    /// Base (EID: 30184)
    Base = 30184,
    /// Scroll (EID: 30214)
    Scroll = 30214,
    /// BNB Smart Chain testnet (EID: 40102)
    BnbSmartChainTestnet = 40102,
    /// Avalanche Fuji (EID: 40106)
    AvalancheFuji = 40106,
    /// Ethereum Sepolia (EID: 40161)
    Sepolia = 40161,
    /// Arbitrum Sepolia (EID: 40231)
    ArbitrumSepolia = 40231,
    /// Optimism Sepolia (EID: 40232)
    OptimismSepolia = 40232,
    /// Base Sepolia (EID: 40245)
    BaseSepolia = 40245,
}

impl EndpointId {
    /// Returns the numeric endpoint id
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Attempts to create an EndpointId from a u32 value
    ///
    /// # Example
    ///
    /// ```rust
    /// use oapp_options_type3::EndpointId;
    ///
    /// assert_eq!(EndpointId::from_u32(30101), Some(EndpointId::Ethereum));
    /// assert_eq!(EndpointId::from_u32(1), None);
    /// ```
    #[inline]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            30101 => Some(Self::Ethereum),
            30102 => Some(Self::BnbSmartChain),
            30106 => Some(Self::Avalanche),
            30109 => Some(Self::Polygon),
            30110 => Some(Self::Arbitrum),
            30111 => Some(Self::Optimism),
            30183 => Some(Self::Linea),
            30184 => Some(Self::Base),
            30214 => Some(Self::Scroll),
            40102 => Some(Self::BnbSmartChainTestnet),
            40106 => Some(Self::AvalancheFuji),
            40161 => Some(Self::Sepolia),
            40231 => Some(Self::ArbitrumSepolia),
            40232 => Some(Self::OptimismSepolia),
            40245 => Some(Self::BaseSepolia),
            _ => None,
        }
    }

    /// Returns the chain name as a string
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::BnbSmartChain => "BNB Smart Chain",
            Self::Avalanche => "Avalanche",
            Self::Polygon => "Polygon",
            Self::Arbitrum => "Arbitrum",
            Self::Optimism => "Optimism",
            Self::Linea => "Linea",
            Self::Base => "Base",
            Self::Scroll => "Scroll",
            Self::BnbSmartChainTestnet => "BNB Smart Chain Testnet",
            Self::AvalancheFuji => "Avalanche Fuji",
            Self::Sepolia => "Sepolia",
            Self::ArbitrumSepolia => "Arbitrum Sepolia",
            Self::OptimismSepolia => "Optimism Sepolia",
            Self::BaseSepolia => "Base Sepolia",
        }
    }

    #[inline]
    pub const fn is_testnet(self) -> bool {
        self.as_u32() >= TESTNET_EID_BASE
    }

    /// The alloy chain this endpoint is deployed on
    pub const fn named_chain(self) -> NamedChain {
        match self {
            Self::Ethereum => NamedChain::Mainnet,
            Self::BnbSmartChain => NamedChain::BinanceSmartChain,
            Self::Avalanche => NamedChain::Avalanche,
            Self::Polygon => NamedChain::Polygon,
            Self::Arbitrum => NamedChain::Arbitrum,
            Self::Optimism => NamedChain::Optimism,
            Self::Linea => NamedChain::Linea,
            Self::Base => NamedChain::Base,
            Self::Scroll => NamedChain::Scroll,
            Self::BnbSmartChainTestnet => NamedChain::BinanceSmartChainTestnet,
            Self::AvalancheFuji => NamedChain::AvalancheFuji,
            Self::Sepolia => NamedChain::Sepolia,
            Self::ArbitrumSepolia => NamedChain::ArbitrumSepolia,
            Self::OptimismSepolia => NamedChain::OptimismSepolia,
            Self::BaseSepolia => NamedChain::BaseSepolia,
        }
    }

    /// Looks up the endpoint id for an alloy chain, if it is a known deployment
    pub const fn from_named_chain(chain: NamedChain) -> Option<Self> {
        match chain {
            NamedChain::Mainnet => Some(Self::Ethereum),
            NamedChain::BinanceSmartChain => Some(Self::BnbSmartChain),
            NamedChain::Avalanche => Some(Self::Avalanche),
            NamedChain::Polygon => Some(Self::Polygon),
            NamedChain::Arbitrum => Some(Self::Arbitrum),
            NamedChain::Optimism => Some(Self::Optimism),
            NamedChain::Linea => Some(Self::Linea),
            NamedChain::Base => Some(Self::Base),
            NamedChain::Scroll => Some(Self::Scroll),
            NamedChain::BinanceSmartChainTestnet => Some(Self::BnbSmartChainTestnet),
            NamedChain::AvalancheFuji => Some(Self::AvalancheFuji),
            NamedChain::Sepolia => Some(Self::Sepolia),
            NamedChain::ArbitrumSepolia => Some(Self::ArbitrumSepolia),
            NamedChain::OptimismSepolia => Some(Self::OptimismSepolia),
            NamedChain::BaseSepolia => Some(Self::BaseSepolia),
            _ => None,
        }
    }
}

impl From<EndpointId> for u32 {
    #[inline]
    fn from(eid: EndpointId) -> Self {
        eid.as_u32()
    }
}

impl TryFrom<u32> for EndpointId {
    type Error = InvalidEndpointId;

    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_u32(value).ok_or(InvalidEndpointId(value))
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u32())
    }
}

/// Error returned when a u32 is not a known LayerZero endpoint id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidEndpointId(pub u32);

impl fmt::Display for InvalidEndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown LayerZero endpoint ID: {}", self.0)
    }
}

impl std::error::Error for InvalidEndpointId {}
