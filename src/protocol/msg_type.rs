// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Message types used to key enforced options
//!
//! OApps pick their own `uint16` message type values; the OFT family uses the
//! two below, and enforced options are usually configured for both.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum MsgType {
    /// Plain token send (1)
    Send = 1,
    /// Send followed by a composed call on the destination (2)
    SendAndCall = 2,
}

impl MsgType {
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    #[inline]
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(Self::Send),
            2 => Some(Self::SendAndCall),
            _ => None,
        }
    }
}

impl From<MsgType> for u16 {
    #[inline]
    fn from(msg_type: MsgType) -> Self {
        msg_type.as_u16()
    }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Send => write!(f, "SEND ({})", self.as_u16()),
            Self::SendAndCall => write!(f, "SEND_AND_CALL ({})", self.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_type_values() {
        assert_eq!(MsgType::Send.as_u16(), 1);
        assert_eq!(u16::from(MsgType::SendAndCall), 2);
        assert_eq!(MsgType::from_u16(1), Some(MsgType::Send));
        assert_eq!(MsgType::from_u16(0), None);
        assert_eq!(MsgType::from_u16(3), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(MsgType::Send.to_string(), "SEND (1)");
        assert_eq!(MsgType::SendAndCall.to_string(), "SEND_AND_CALL (2)");
    }
}
