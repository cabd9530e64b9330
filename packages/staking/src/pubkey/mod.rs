//! Consensus public keys of validators.
//!
//! A key is one of several unrelated algorithms. On the wire it always travels inside a
//! [`KeyEnvelope`], i.e. the algorithm's type URL plus the protobuf encoding of the key, and
//! the [`PubKeyRegistry`] converts between the two by dispatching on the type URL.

mod codec;
mod registry;

pub use codec::{Bls12381Codec, Ed25519Codec, KeyCodec, Secp256k1Codec};
pub use registry::{PubKeyRegistry, PubKeyRegistryBuilder};

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;
use staking_proto::Any;

use crate::error::StakingError;
use crate::Result;

pub const ED25519_TYPE_URL: &str = "/cosmos.crypto.ed25519.PubKey";
pub const SECP256K1_TYPE_URL: &str = "/cosmos.crypto.secp256k1.PubKey";
pub const BLS12_381_TYPE_URL: &str = "/cosmos.crypto.bls12_381.PubKey";

/// Key sizes in bytes
pub const ED25519_PUBKEY_LENGTH: usize = 32;
/// Compressed SEC1 point
pub const SECP256K1_PUBKEY_LENGTH: usize = 33;
/// Compressed G1 point
pub const BLS12_381_PUBKEY_LENGTH: usize = 48;

/// A validator public key, tagged with its algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PubKey {
    Ed25519([u8; ED25519_PUBKEY_LENGTH]),
    Secp256k1([u8; SECP256K1_PUBKEY_LENGTH]),
    Bls12381([u8; BLS12_381_PUBKEY_LENGTH]),
}

impl PubKey {
    /// Type identifier of the key's algorithm.
    pub fn type_url(&self) -> &'static str {
        match self {
            PubKey::Ed25519(_) => ED25519_TYPE_URL,
            PubKey::Secp256k1(_) => SECP256K1_TYPE_URL,
            PubKey::Bls12381(_) => BLS12_381_TYPE_URL,
        }
    }

    /// Raw key material.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PubKey::Ed25519(k) => k,
            PubKey::Secp256k1(k) => k,
            PubKey::Bls12381(k) => k,
        }
    }
}

/// Generic wire envelope of a public key: its type URL and serialised payload.
#[cw_serde]
#[derive(Default)]
pub struct KeyEnvelope {
    pub type_url: String,
    pub value: Binary,
}

impl KeyEnvelope {
    pub fn new(type_url: impl Into<String>, value: impl Into<Binary>) -> Self {
        Self {
            type_url: type_url.into(),
            value: value.into(),
        }
    }

    /// An envelope missing either its type or its payload carries no key.
    pub fn is_empty(&self) -> bool {
        self.type_url.is_empty() || self.value.is_empty()
    }
}

impl From<Any> for KeyEnvelope {
    fn from(any: Any) -> Self {
        Self {
            type_url: any.type_url,
            value: Binary::new(any.value.to_vec()),
        }
    }
}

impl From<KeyEnvelope> for Any {
    fn from(envelope: KeyEnvelope) -> Self {
        Any {
            type_url: envelope.type_url,
            value: envelope.value.to_vec().into(),
        }
    }
}

/// Envelopes of messages map to optional protobuf fields; the empty envelope is the absent one.
pub(crate) fn envelope_from_proto(any: Option<Any>) -> KeyEnvelope {
    any.map(KeyEnvelope::from).unwrap_or_default()
}

pub(crate) fn envelope_to_proto(envelope: KeyEnvelope) -> Option<Any> {
    if envelope.type_url.is_empty() && envelope.value.is_empty() {
        None
    } else {
        Some(envelope.into())
    }
}

/// Checks the hex encoded BLS12-381 key carried next to the consensus key.
/// Only the encoding and the length are checked.
pub fn validate_bls_key_hex(bls_key: &str) -> Result<()> {
    let malformed = |reason: String| StakingError::MalformedKeyPayload {
        type_url: BLS12_381_TYPE_URL.to_string(),
        reason,
    };
    let bytes = hex::decode(bls_key).map_err(|e| malformed(format!("invalid hex: {e}")))?;
    if bytes.len() != BLS12_381_PUBKEY_LENGTH {
        return Err(malformed(format!(
            "expected {BLS12_381_PUBKEY_LENGTH} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(())
}
