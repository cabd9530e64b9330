//! Request messages of the staking module.
//!
//! Every message is plain data. It is checked with [`ValidateBasic`], knows who must sign it,
//! and converts to and from its protobuf form through the [`Msg`] trait.

mod delegation;
mod params;
mod validator;

pub use delegation::{MsgBeginRedelegate, MsgDelegate, MsgUndelegate};
pub use params::MsgUpdateParams;
pub use validator::{MsgCreateValidator, MsgEditValidator};

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use prost::Message;
use staking_proto::Any;

use crate::validation::ValidateBasic;
use crate::Result;

/// Name of the staking module
pub const MODULE_NAME: &str = "staking";
/// Route of all staking messages
pub const ROUTER_KEY: &str = MODULE_NAME;

pub const CREATE_VALIDATOR_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgCreateValidator";
pub const EDIT_VALIDATOR_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgEditValidator";
pub const DELEGATE_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgDelegate";
pub const BEGIN_REDELEGATE_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgBeginRedelegate";
pub const UNDELEGATE_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgUndelegate";
pub const UPDATE_PARAMS_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgUpdateParams";

pub trait Msg: Clone + ValidateBasic + Into<StakingMsg> {
    /// Protobuf form of the message.
    type Raw: Message + Default + From<Self>;

    /// Type identifier of the message inside an `Any` envelope.
    const TYPE_URL: &'static str;

    /// Converts the protobuf form back, rejecting values the domain type cannot hold.
    fn from_raw(raw: Self::Raw) -> Result<Self>;

    /// Accounts that must sign the message.
    fn get_signers(&self) -> Vec<Addr>;

    fn route(&self) -> &'static str {
        ROUTER_KEY
    }

    fn type_url(&self) -> &'static str {
        Self::TYPE_URL
    }

    /// Bytes to sign, i.e. the protobuf encoding of the message.
    fn get_sign_bytes(&self) -> Vec<u8> {
        Self::Raw::from(self.clone()).encode_to_vec()
    }

    fn to_any(&self) -> Any {
        Any {
            type_url: Self::TYPE_URL.to_string(),
            value: self.get_sign_bytes().into(),
        }
    }
}

/// Any of the staking messages.
#[cw_serde]
pub enum StakingMsg {
    CreateValidator(MsgCreateValidator),
    EditValidator(MsgEditValidator),
    Delegate(MsgDelegate),
    BeginRedelegate(MsgBeginRedelegate),
    Undelegate(MsgUndelegate),
    UpdateParams(MsgUpdateParams),
}

impl StakingMsg {
    pub fn type_url(&self) -> &'static str {
        match self {
            StakingMsg::CreateValidator(_) => MsgCreateValidator::TYPE_URL,
            StakingMsg::EditValidator(_) => MsgEditValidator::TYPE_URL,
            StakingMsg::Delegate(_) => MsgDelegate::TYPE_URL,
            StakingMsg::BeginRedelegate(_) => MsgBeginRedelegate::TYPE_URL,
            StakingMsg::Undelegate(_) => MsgUndelegate::TYPE_URL,
            StakingMsg::UpdateParams(_) => MsgUpdateParams::TYPE_URL,
        }
    }

    pub fn get_signers(&self) -> Vec<Addr> {
        match self {
            StakingMsg::CreateValidator(msg) => msg.get_signers(),
            StakingMsg::EditValidator(msg) => msg.get_signers(),
            StakingMsg::Delegate(msg) => msg.get_signers(),
            StakingMsg::BeginRedelegate(msg) => msg.get_signers(),
            StakingMsg::Undelegate(msg) => msg.get_signers(),
            StakingMsg::UpdateParams(msg) => msg.get_signers(),
        }
    }

    pub fn to_any(&self) -> Any {
        match self {
            StakingMsg::CreateValidator(msg) => msg.to_any(),
            StakingMsg::EditValidator(msg) => msg.to_any(),
            StakingMsg::Delegate(msg) => msg.to_any(),
            StakingMsg::BeginRedelegate(msg) => msg.to_any(),
            StakingMsg::Undelegate(msg) => msg.to_any(),
            StakingMsg::UpdateParams(msg) => msg.to_any(),
        }
    }
}

impl ValidateBasic for StakingMsg {
    fn validate_basic(&self) -> Result<()> {
        match self {
            StakingMsg::CreateValidator(msg) => msg.validate_basic(),
            StakingMsg::EditValidator(msg) => msg.validate_basic(),
            StakingMsg::Delegate(msg) => msg.validate_basic(),
            StakingMsg::BeginRedelegate(msg) => msg.validate_basic(),
            StakingMsg::Undelegate(msg) => msg.validate_basic(),
            StakingMsg::UpdateParams(msg) => msg.validate_basic(),
        }
    }
}

/// Optional string fields travel as the empty string when unset.
pub(crate) fn optional_string(raw: String) -> Option<String> {
    (!raw.is_empty()).then_some(raw)
}

macro_rules! impl_into_staking_msg {
    ($($msg:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$msg> for StakingMsg {
                fn from(msg: $msg) -> Self {
                    StakingMsg::$variant(msg)
                }
            }
        )+
    };
}

impl_into_staking_msg!(
    MsgCreateValidator => CreateValidator,
    MsgEditValidator => EditValidator,
    MsgDelegate => Delegate,
    MsgBeginRedelegate => BeginRedelegate,
    MsgUndelegate => Undelegate,
    MsgUpdateParams => UpdateParams,
);
