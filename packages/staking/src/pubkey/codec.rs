use prost::Message;
use staking_proto::cosmos::crypto::{bls12_381, ed25519, secp256k1};

use super::{
    PubKey, BLS12_381_PUBKEY_LENGTH, BLS12_381_TYPE_URL, ED25519_PUBKEY_LENGTH, ED25519_TYPE_URL,
    SECP256K1_PUBKEY_LENGTH, SECP256K1_TYPE_URL,
};

/// Serialisation of the keys of one algorithm.
pub trait KeyCodec: Send + Sync {
    /// Type identifier the codec is registered under.
    fn type_url(&self) -> &'static str;

    /// Serialises `key`, or returns `None` if it belongs to another algorithm.
    fn encode(&self, key: &PubKey) -> Option<Vec<u8>>;

    /// Reconstructs a key from its payload. The error describes why the payload is malformed.
    fn decode(&self, payload: &[u8]) -> Result<PubKey, String>;
}

fn key_array<const N: usize>(key: &[u8]) -> Result<[u8; N], String> {
    key.try_into()
        .map_err(|_| format!("expected {N} bytes, got {}", key.len()))
}

/// Tendermint ed25519 consensus keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Codec;

impl KeyCodec for Ed25519Codec {
    fn type_url(&self) -> &'static str {
        ED25519_TYPE_URL
    }

    fn encode(&self, key: &PubKey) -> Option<Vec<u8>> {
        match key {
            PubKey::Ed25519(k) => Some(ed25519::PubKey { key: k.to_vec() }.encode_to_vec()),
            _ => None,
        }
    }

    fn decode(&self, payload: &[u8]) -> Result<PubKey, String> {
        let raw = ed25519::PubKey::decode(payload).map_err(|e| e.to_string())?;
        key_array::<ED25519_PUBKEY_LENGTH>(&raw.key).map(PubKey::Ed25519)
    }
}

/// Compressed secp256k1 keys. The payload must be a point on the curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Codec;

impl KeyCodec for Secp256k1Codec {
    fn type_url(&self) -> &'static str {
        SECP256K1_TYPE_URL
    }

    fn encode(&self, key: &PubKey) -> Option<Vec<u8>> {
        match key {
            PubKey::Secp256k1(k) => Some(secp256k1::PubKey { key: k.to_vec() }.encode_to_vec()),
            _ => None,
        }
    }

    fn decode(&self, payload: &[u8]) -> Result<PubKey, String> {
        let raw = secp256k1::PubKey::decode(payload).map_err(|e| e.to_string())?;
        let key = key_array::<SECP256K1_PUBKEY_LENGTH>(&raw.key)?;
        k256::PublicKey::from_sec1_bytes(&key)
            .map_err(|_| "not a compressed secp256k1 point".to_string())?;
        Ok(PubKey::Secp256k1(key))
    }
}

/// BLS12-381 min-pk keys. The payload must be a valid, non-identity G1 point in the subgroup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bls12381Codec;

impl KeyCodec for Bls12381Codec {
    fn type_url(&self) -> &'static str {
        BLS12_381_TYPE_URL
    }

    fn encode(&self, key: &PubKey) -> Option<Vec<u8>> {
        match key {
            PubKey::Bls12381(k) => Some(bls12_381::PubKey { key: k.to_vec() }.encode_to_vec()),
            _ => None,
        }
    }

    fn decode(&self, payload: &[u8]) -> Result<PubKey, String> {
        let raw = bls12_381::PubKey::decode(payload).map_err(|e| e.to_string())?;
        let key = key_array::<BLS12_381_PUBKEY_LENGTH>(&raw.key)?;
        blst::min_pk::PublicKey::key_validate(&key)
            .map_err(|e| format!("invalid BLS12-381 public key: {e:?}"))?;
        Ok(PubKey::Bls12381(key))
    }
}
