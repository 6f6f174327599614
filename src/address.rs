use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "address_tests.rs"]
mod address_tests;

/// A 6-byte Bluetooth device address.
///
/// Static addresses carry the two most significant bits of byte 0 set to
/// `1 1`, marking them as locally administered rather than globally assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BtAddress([u8; 6]);

impl BtAddress {
    /// Mask forcing the static-address marker bits in byte 0.
    pub const STATIC_ADDR_MASK: u8 = 0xC0;

    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        BtAddress(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// True when the static-address marker bits are both set.
    pub fn is_static(&self) -> bool {
        self.0[0] & Self::STATIC_ADDR_MASK == Self::STATIC_ADDR_MASK
    }
}

impl fmt::Display for BtAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.0.iter().map(|b| format!("{:02x}", b)).collect();
        write!(f, "{}", pairs.join(":"))
    }
}

impl FromStr for BtAddress {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 6 || parts.iter().any(|p| p.len() != 2) {
            anyhow::bail!("Address must be 6 colon-separated hex byte pairs, got {:?}", s);
        }
        let raw = hex::decode(parts.join(""))
            .with_context(|| format!("Invalid hex in address {:?}", s))?;
        let mut bytes = [0u8; 6];
        bytes.copy_from_slice(&raw);
        Ok(BtAddress(bytes))
    }
}
