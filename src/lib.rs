//! UUID to Bluetooth Static Address Derivation
//!
//! This library derives a 6-byte Bluetooth-style static device address
//! deterministically from a 128-bit UUID, using AES-128 CMAC as the
//! pseudo-random function.

pub mod address;
pub mod derive;
