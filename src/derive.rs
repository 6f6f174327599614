use aes::Aes128;
use anyhow::{Context, Result};
use cmac::{Cmac, Mac};
use uuid::Uuid;

use crate::address::BtAddress;

#[cfg(test)]
#[path = "derive_tests.rs"]
mod derive_tests;

/// Fixed label authenticated by the CMAC. Not configurable: changing it
/// changes every derived address.
pub const DERIVE_LABEL: &[u8] = b"candy";

/// Derive the Bluetooth static address for a UUID.
///
/// The UUID's canonical 16-byte form keys an AES-128 CMAC over
/// [`DERIVE_LABEL`]; the first 6 tag bytes are reversed and the resulting
/// first byte is OR-ed with [`BtAddress::STATIC_ADDR_MASK`]. Deterministic
/// for every UUID value, including all-zero.
pub fn derive_address(uuid: &Uuid) -> BtAddress {
    let mut mac = Cmac::<Aes128>::new(uuid.as_bytes().into());
    mac.update(DERIVE_LABEL);
    let tag = mac.finalize().into_bytes();

    let mut addr = [0u8; 6];
    for (i, b) in tag[..6].iter().rev().enumerate() {
        addr[i] = *b;
    }
    addr[0] |= BtAddress::STATIC_ADDR_MASK;
    BtAddress::from_bytes(addr)
}

/// Parse a UUID string and derive its address.
///
/// Fails only when the input is not a syntactically valid 128-bit UUID.
pub fn derive_address_str(input: &str) -> Result<BtAddress> {
    let uuid = Uuid::parse_str(input.trim())
        .with_context(|| format!("Not a valid UUID: {:?}", input))?;
    Ok(derive_address(&uuid))
}
