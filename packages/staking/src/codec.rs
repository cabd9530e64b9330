//! Marshalling of staking messages and consensus keys to and from `Any` envelopes.

use std::collections::HashMap;

use log::debug;
use prost::Message;
use staking_proto::Any;

use crate::error::StakingError;
use crate::msg::{
    Msg, MsgBeginRedelegate, MsgCreateValidator, MsgDelegate, MsgEditValidator, MsgUndelegate,
    MsgUpdateParams, StakingMsg,
};
use crate::pubkey::{KeyEnvelope, PubKey, PubKeyRegistry};
use crate::Result;

type MsgDecoder = fn(&[u8]) -> Result<StakingMsg>;

fn decode_as<M: Msg>(bytes: &[u8]) -> Result<StakingMsg> {
    let raw = M::Raw::decode(bytes)?;
    Ok(M::from_raw(raw)?.into())
}

/// Message and key registries of the staking module.
///
/// Built once and only read afterwards, so one instance can be shared across threads.
pub struct Codec {
    keys: PubKeyRegistry,
    msgs: HashMap<&'static str, MsgDecoder>,
}

impl Codec {
    /// Registers every staking message type next to the given key registry.
    pub fn new(keys: PubKeyRegistry) -> Self {
        let mut codec = Self {
            keys,
            msgs: HashMap::new(),
        };
        codec.register::<MsgCreateValidator>();
        codec.register::<MsgEditValidator>();
        codec.register::<MsgDelegate>();
        codec.register::<MsgBeginRedelegate>();
        codec.register::<MsgUndelegate>();
        codec.register::<MsgUpdateParams>();
        codec
    }

    fn register<M: Msg>(&mut self) {
        debug!("registering message type {}", M::TYPE_URL);
        self.msgs.insert(M::TYPE_URL, decode_as::<M>);
    }

    pub fn keys(&self) -> &PubKeyRegistry {
        &self.keys
    }

    pub fn is_registered(&self, type_url: &str) -> bool {
        self.msgs.contains_key(type_url)
    }

    pub fn encode_msg(&self, msg: &StakingMsg) -> Any {
        msg.to_any()
    }

    /// Unpacks a message envelope.
    ///
    /// The consensus key of a validator creation, when present, is decoded as well, so unknown
    /// or malformed keys are rejected here rather than by a later consumer.
    pub fn decode_msg(&self, any: &Any) -> Result<StakingMsg> {
        let decode = self.msgs.get(any.type_url.as_str()).ok_or_else(|| {
            debug!("rejecting message of unknown type {}", any.type_url);
            StakingError::UnknownMsgType(any.type_url.clone())
        })?;
        let msg = decode(any.value.as_ref()).map_err(|e| {
            debug!("rejecting malformed {} message: {e}", any.type_url);
            e
        })?;
        if let StakingMsg::CreateValidator(create) = &msg {
            if !create.pubkey.is_empty() {
                self.keys.decode(&create.pubkey)?;
            }
        }
        Ok(msg)
    }

    pub fn encode_pubkey(&self, key: &PubKey) -> Result<KeyEnvelope> {
        self.keys.encode(key)
    }

    pub fn decode_pubkey(&self, envelope: &KeyEnvelope) -> Result<PubKey> {
        self.keys.decode(envelope)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(PubKeyRegistry::with_default_codecs())
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut type_urls: Vec<_> = self.msgs.keys().collect();
        type_urls.sort();
        f.debug_struct("Codec")
            .field("keys", &self.keys)
            .field("msgs", &type_urls)
            .finish()
    }
}
