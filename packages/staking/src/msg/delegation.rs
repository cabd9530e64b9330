use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin};
use staking_proto::cosmos::staking::v1beta1::{
    MsgBeginRedelegate as RawMsgBeginRedelegate, MsgDelegate as RawMsgDelegate,
    MsgUndelegate as RawMsgUndelegate,
};

use super::{Msg, BEGIN_REDELEGATE_TYPE_URL, DELEGATE_TYPE_URL, UNDELEGATE_TYPE_URL};
use crate::coin::{coin_from_proto, coin_to_proto};
use crate::error::StakingError;
use crate::Result;

/// Bonds coins of a delegator to a validator.
#[cw_serde]
pub struct MsgDelegate {
    pub delegator_address: String,
    pub validator_address: String,
    pub amount: Option<Coin>,
}

/// Starts unbonding coins of a delegator from a validator.
#[cw_serde]
pub struct MsgUndelegate {
    pub delegator_address: String,
    pub validator_address: String,
    pub amount: Option<Coin>,
}

/// Moves bonded coins of a delegator from one validator to another.
#[cw_serde]
pub struct MsgBeginRedelegate {
    pub delegator_address: String,
    pub validator_src_address: String,
    pub validator_dst_address: String,
    pub amount: Option<Coin>,
}

impl MsgDelegate {
    pub fn new(
        delegator_address: impl Into<String>,
        validator_address: impl Into<String>,
        amount: Coin,
    ) -> Self {
        Self {
            delegator_address: delegator_address.into(),
            validator_address: validator_address.into(),
            amount: Some(amount),
        }
    }
}

impl MsgUndelegate {
    pub fn new(
        delegator_address: impl Into<String>,
        validator_address: impl Into<String>,
        amount: Coin,
    ) -> Self {
        Self {
            delegator_address: delegator_address.into(),
            validator_address: validator_address.into(),
            amount: Some(amount),
        }
    }
}

impl MsgBeginRedelegate {
    pub fn new(
        delegator_address: impl Into<String>,
        validator_src_address: impl Into<String>,
        validator_dst_address: impl Into<String>,
        amount: Coin,
    ) -> Self {
        Self {
            delegator_address: delegator_address.into(),
            validator_src_address: validator_src_address.into(),
            validator_dst_address: validator_dst_address.into(),
            amount: Some(amount),
        }
    }
}

impl Msg for MsgDelegate {
    type Raw = RawMsgDelegate;

    const TYPE_URL: &'static str = DELEGATE_TYPE_URL;

    fn from_raw(raw: Self::Raw) -> Result<Self> {
        Self::try_from(raw)
    }

    fn get_signers(&self) -> Vec<Addr> {
        vec![Addr::unchecked(&self.delegator_address)]
    }
}

impl Msg for MsgUndelegate {
    type Raw = RawMsgUndelegate;

    const TYPE_URL: &'static str = UNDELEGATE_TYPE_URL;

    fn from_raw(raw: Self::Raw) -> Result<Self> {
        Self::try_from(raw)
    }

    fn get_signers(&self) -> Vec<Addr> {
        vec![Addr::unchecked(&self.delegator_address)]
    }
}

impl Msg for MsgBeginRedelegate {
    type Raw = RawMsgBeginRedelegate;

    const TYPE_URL: &'static str = BEGIN_REDELEGATE_TYPE_URL;

    fn from_raw(raw: Self::Raw) -> Result<Self> {
        Self::try_from(raw)
    }

    fn get_signers(&self) -> Vec<Addr> {
        vec![Addr::unchecked(&self.delegator_address)]
    }
}

impl TryFrom<RawMsgDelegate> for MsgDelegate {
    type Error = StakingError;

    fn try_from(raw: RawMsgDelegate) -> Result<Self> {
        Ok(Self {
            delegator_address: raw.delegator_address,
            validator_address: raw.validator_address,
            amount: coin_from_proto(raw.amount)?,
        })
    }
}

impl From<MsgDelegate> for RawMsgDelegate {
    fn from(msg: MsgDelegate) -> Self {
        Self {
            delegator_address: msg.delegator_address,
            validator_address: msg.validator_address,
            amount: coin_to_proto(msg.amount),
        }
    }
}

impl TryFrom<RawMsgUndelegate> for MsgUndelegate {
    type Error = StakingError;

    fn try_from(raw: RawMsgUndelegate) -> Result<Self> {
        Ok(Self {
            delegator_address: raw.delegator_address,
            validator_address: raw.validator_address,
            amount: coin_from_proto(raw.amount)?,
        })
    }
}

impl From<MsgUndelegate> for RawMsgUndelegate {
    fn from(msg: MsgUndelegate) -> Self {
        Self {
            delegator_address: msg.delegator_address,
            validator_address: msg.validator_address,
            amount: coin_to_proto(msg.amount),
        }
    }
}

impl TryFrom<RawMsgBeginRedelegate> for MsgBeginRedelegate {
    type Error = StakingError;

    fn try_from(raw: RawMsgBeginRedelegate) -> Result<Self> {
        Ok(Self {
            delegator_address: raw.delegator_address,
            validator_src_address: raw.validator_src_address,
            validator_dst_address: raw.validator_dst_address,
            amount: coin_from_proto(raw.amount)?,
        })
    }
}

impl From<MsgBeginRedelegate> for RawMsgBeginRedelegate {
    fn from(msg: MsgBeginRedelegate) -> Self {
        Self {
            delegator_address: msg.delegator_address,
            validator_src_address: msg.validator_src_address,
            validator_dst_address: msg.validator_dst_address,
            amount: coin_to_proto(msg.amount),
        }
    }
}
