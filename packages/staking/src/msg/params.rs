use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use staking_proto::cosmos::staking::v1beta1::MsgUpdateParams as RawMsgUpdateParams;

use super::{Msg, UPDATE_PARAMS_TYPE_URL};
use crate::address::gov_authority;
use crate::error::{ParamsError, StakingError};
use crate::params::Params;
use crate::Result;

/// Governance operation replacing the staking parameters.
#[cw_serde]
pub struct MsgUpdateParams {
    /// Account submitting the change; only the governance module account is accepted.
    pub authority: String,
    /// The full set of parameters to apply.
    pub params: Params,
}

impl MsgUpdateParams {
    pub fn new(authority: impl Into<String>, params: Params) -> Self {
        Self {
            authority: authority.into(),
            params,
        }
    }
}

impl Msg for MsgUpdateParams {
    type Raw = RawMsgUpdateParams;

    const TYPE_URL: &'static str = UPDATE_PARAMS_TYPE_URL;

    fn from_raw(raw: Self::Raw) -> Result<Self> {
        Self::try_from(raw)
    }

    /// Always the governance module, whatever the message claims.
    fn get_signers(&self) -> Vec<Addr> {
        vec![gov_authority().clone()]
    }
}

impl TryFrom<RawMsgUpdateParams> for MsgUpdateParams {
    type Error = StakingError;

    fn try_from(raw: RawMsgUpdateParams) -> Result<Self> {
        let params = raw.params.ok_or(ParamsError::Missing)?;
        Ok(Self {
            authority: raw.authority,
            params: params.try_into()?,
        })
    }
}

impl From<MsgUpdateParams> for RawMsgUpdateParams {
    fn from(msg: MsgUpdateParams) -> Self {
        Self {
            authority: msg.authority,
            params: Some(msg.params.into()),
        }
    }
}
