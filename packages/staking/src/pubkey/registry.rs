use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use super::{Bls12381Codec, Ed25519Codec, KeyCodec, KeyEnvelope, PubKey, Secp256k1Codec};
use crate::error::StakingError;
use crate::Result;

/// Collects key codecs before the registry is frozen.
#[derive(Default)]
pub struct PubKeyRegistryBuilder {
    codecs: BTreeMap<&'static str, Box<dyn KeyCodec>>,
}

impl PubKeyRegistryBuilder {
    /// Adds a codec. Every type URL can be registered only once.
    pub fn register(mut self, codec: impl KeyCodec + 'static) -> Result<Self> {
        let type_url = codec.type_url();
        if self.codecs.contains_key(type_url) {
            return Err(StakingError::DuplicateKeyType(type_url.to_string()));
        }
        debug!("registering public key codec {type_url}");
        self.codecs.insert(type_url, Box::new(codec));
        Ok(self)
    }

    pub fn build(self) -> PubKeyRegistry {
        PubKeyRegistry {
            codecs: self.codecs,
        }
    }
}

impl fmt::Debug for PubKeyRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PubKeyRegistryBuilder")
            .field("type_urls", &self.codecs.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Read-only mapping from key type URL to codec.
///
/// Built once at start-up and then shared by reference; encoding and decoding never mutate it.
pub struct PubKeyRegistry {
    codecs: BTreeMap<&'static str, Box<dyn KeyCodec>>,
}

impl PubKeyRegistry {
    pub fn builder() -> PubKeyRegistryBuilder {
        PubKeyRegistryBuilder::default()
    }

    /// Registry with every supported algorithm: ed25519, secp256k1 and BLS12-381.
    pub fn with_default_codecs() -> Self {
        let codecs: [Box<dyn KeyCodec>; 3] = [
            Box::new(Ed25519Codec),
            Box::new(Secp256k1Codec),
            Box::new(Bls12381Codec),
        ];
        PubKeyRegistry {
            codecs: codecs.into_iter().map(|c| (c.type_url(), c)).collect(),
        }
    }

    pub fn is_registered(&self, type_url: &str) -> bool {
        self.codecs.contains_key(type_url)
    }

    pub fn type_urls(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codecs.keys().copied()
    }

    /// Wraps a key into its envelope.
    pub fn encode(&self, key: &PubKey) -> Result<KeyEnvelope> {
        let type_url = key.type_url();
        let payload = self
            .codecs
            .get(type_url)
            .and_then(|codec| codec.encode(key))
            .ok_or_else(|| StakingError::UnknownKeyType(type_url.to_string()))?;
        Ok(KeyEnvelope::new(type_url, payload))
    }

    /// Recovers the key carried by an envelope.
    pub fn decode(&self, envelope: &KeyEnvelope) -> Result<PubKey> {
        if envelope.is_empty() {
            return Err(StakingError::EmptyPublicKey);
        }
        let codec = self.codecs.get(envelope.type_url.as_str()).ok_or_else(|| {
            debug!("rejecting public key of unknown type {}", envelope.type_url);
            StakingError::UnknownKeyType(envelope.type_url.clone())
        })?;
        codec
            .decode(envelope.value.as_slice())
            .map_err(|reason| StakingError::MalformedKeyPayload {
                type_url: envelope.type_url.clone(),
                reason,
            })
    }
}

impl fmt::Debug for PubKeyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PubKeyRegistry")
            .field("type_urls", &self.codecs.keys().collect::<Vec<_>>())
            .finish()
    }
}
