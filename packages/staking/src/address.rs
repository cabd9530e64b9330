use std::sync::OnceLock;

use bech32::{FromBase32, ToBase32, Variant};
use cosmwasm_std::Addr;
use sha2::{Digest, Sha256};

use crate::error::StakingError;
use crate::Result;

/// Bech32 human readable part of account addresses
pub const ACCOUNT_PREFIX: &str = "cosmos";
/// Name of the governance module, whose account is the only allowed params authority
pub const GOV_MODULE_NAME: &str = "gov";
/// Length of a module account address, i.e. a truncated SHA-256 digest
pub const MODULE_ADDRESS_LENGTH: usize = 20;

static GOV_AUTHORITY: OnceLock<Addr> = OnceLock::new();

/// Derives the raw account address of a module from its name.
pub fn module_address(name: &str) -> Vec<u8> {
    Sha256::digest(name.as_bytes())[..MODULE_ADDRESS_LENGTH].to_vec()
}

pub fn to_bech32_addr(prefix: &str, addr: &[u8]) -> Result<Addr> {
    bech32::encode(prefix, addr.to_base32(), Variant::Bech32)
        .map(Addr::unchecked)
        .map_err(|e| StakingError::InvalidAddress {
            field: "module",
            address: hex::encode(addr),
            reason: e.to_string(),
        })
}

/// Decodes a bech32 account address, checking its prefix and length.
pub fn to_canonical_addr(addr: &str, prefix: &str) -> std::result::Result<Vec<u8>, String> {
    if addr.is_empty() {
        return Err("empty address string is not allowed".to_string());
    }
    let (hrp, data, variant) = bech32::decode(addr).map_err(|e| e.to_string())?;
    if hrp != prefix {
        return Err(format!("invalid Bech32 prefix; expected {prefix}, got {hrp}"));
    }
    if variant != Variant::Bech32 {
        return Err("expected Bech32 encoding, got Bech32m".to_string());
    }
    let bytes = Vec::<u8>::from_base32(&data).map_err(|e| e.to_string())?;
    match bytes.len() {
        20 | 32 => Ok(bytes),
        len => Err(format!("address length must be 20 or 32 bytes, got {len}")),
    }
}

/// Checks that `addr` is a well-formed account address.
pub fn validate_address(field: &'static str, addr: &str) -> Result<()> {
    to_canonical_addr(addr, ACCOUNT_PREFIX)
        .map(|_| ())
        .map_err(|reason| StakingError::InvalidAddress {
            field,
            address: addr.to_string(),
            reason,
        })
}

/// The account address of the governance module.
/// It is derived once and then shared.
pub fn gov_authority() -> &'static Addr {
    GOV_AUTHORITY.get_or_init(|| {
        to_bech32_addr(ACCOUNT_PREFIX, &module_address(GOV_MODULE_NAME))
            .expect("static account prefix must be valid")
    })
}
