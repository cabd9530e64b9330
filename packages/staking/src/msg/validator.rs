use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Decimal, Uint128};
use staking_proto::cosmos::staking::v1beta1::{
    MsgCreateValidator as RawMsgCreateValidator, MsgEditValidator as RawMsgEditValidator,
};

use super::{optional_string, Msg, CREATE_VALIDATOR_TYPE_URL, EDIT_VALIDATOR_TYPE_URL};
use crate::coin::{coin_from_proto, coin_to_proto, parse_amount};
use crate::commission::{parse_rate, CommissionRates};
use crate::decimal::to_legacy_dec;
use crate::description::{Description, DescriptionUpdate};
use crate::error::StakingError;
use crate::pubkey::{envelope_from_proto, envelope_to_proto, KeyEnvelope, PubKey, PubKeyRegistry};
use crate::Result;

/// Registers a new validator together with its initial self-delegation.
#[cw_serde]
pub struct MsgCreateValidator {
    pub description: Description,
    pub commission: CommissionRates,
    /// Self-delegation the validator commits to keep.
    pub min_self_delegation: Uint128,
    /// Account funding the self-delegation.
    pub delegator_address: String,
    pub validator_address: String,
    /// Consensus key, wrapped with its algorithm.
    pub pubkey: KeyEnvelope,
    /// Initial self-delegation; `None` when not provided.
    pub value: Option<Coin>,
    pub secondary_owner_address: String,
    pub reward_collector_address: String,
    pub relayer_address: String,
    /// Hex encoded BLS12-381 key used outside of consensus.
    pub bls_key: String,
}

impl MsgCreateValidator {
    /// Builds the message, packing the consensus key through `keys`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        validator_address: impl Into<String>,
        pubkey: &PubKey,
        keys: &PubKeyRegistry,
        value: Coin,
        description: Description,
        commission: CommissionRates,
        min_self_delegation: Uint128,
        delegator_address: impl Into<String>,
        secondary_owner_address: impl Into<String>,
        reward_collector_address: impl Into<String>,
        relayer_address: impl Into<String>,
        bls_key: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            description,
            commission,
            min_self_delegation,
            delegator_address: delegator_address.into(),
            validator_address: validator_address.into(),
            pubkey: keys.encode(pubkey)?,
            value: Some(value),
            secondary_owner_address: secondary_owner_address.into(),
            reward_collector_address: reward_collector_address.into(),
            relayer_address: relayer_address.into(),
            bls_key: bls_key.into(),
        })
    }
}

impl Msg for MsgCreateValidator {
    type Raw = RawMsgCreateValidator;

    const TYPE_URL: &'static str = CREATE_VALIDATOR_TYPE_URL;

    fn from_raw(raw: Self::Raw) -> Result<Self> {
        Self::try_from(raw)
    }

    /// The funding account, plus the validator operator when it is a different account.
    fn get_signers(&self) -> Vec<Addr> {
        let mut signers = vec![Addr::unchecked(&self.delegator_address)];
        if self.validator_address != self.delegator_address {
            signers.push(Addr::unchecked(&self.validator_address));
        }
        signers
    }
}

impl TryFrom<RawMsgCreateValidator> for MsgCreateValidator {
    type Error = StakingError;

    fn try_from(raw: RawMsgCreateValidator) -> Result<Self> {
        let min_self_delegation = parse_amount(&raw.min_self_delegation)
            .map_err(StakingError::InvalidMinSelfDelegation)?;
        Ok(Self {
            description: raw.description.unwrap_or_default().into(),
            commission: raw
                .commission
                .map(CommissionRates::try_from)
                .transpose()?
                .unwrap_or_default(),
            min_self_delegation,
            delegator_address: raw.delegator_address,
            validator_address: raw.validator_address,
            pubkey: envelope_from_proto(raw.pubkey),
            value: coin_from_proto(raw.value)?,
            secondary_owner_address: raw.secondary_owner_address,
            reward_collector_address: raw.reward_collector_address,
            relayer_address: raw.relayer_address,
            bls_key: raw.bls_key,
        })
    }
}

impl From<MsgCreateValidator> for RawMsgCreateValidator {
    fn from(msg: MsgCreateValidator) -> Self {
        Self {
            description: Some(msg.description.into()),
            commission: Some(msg.commission.into()),
            min_self_delegation: msg.min_self_delegation.to_string(),
            delegator_address: msg.delegator_address,
            validator_address: msg.validator_address,
            pubkey: envelope_to_proto(msg.pubkey),
            value: coin_to_proto(msg.value),
            secondary_owner_address: msg.secondary_owner_address,
            reward_collector_address: msg.reward_collector_address,
            relayer_address: msg.relayer_address,
            bls_key: msg.bls_key,
        }
    }
}

/// Changes an existing validator. Every `None` field, and every description field set to
/// [`FieldUpdate::Keep`](crate::description::FieldUpdate::Keep), is left unchanged.
#[cw_serde]
#[derive(Default)]
pub struct MsgEditValidator {
    pub validator_address: String,
    pub description: DescriptionUpdate,
    pub commission_rate: Option<Decimal>,
    pub min_self_delegation: Option<Uint128>,
    pub secondary_owner_address: Option<String>,
    pub reward_collector_address: Option<String>,
    pub bls_key: Option<String>,
}

impl MsgEditValidator {
    pub fn new(
        validator_address: impl Into<String>,
        description: DescriptionUpdate,
        commission_rate: Option<Decimal>,
        min_self_delegation: Option<Uint128>,
    ) -> Self {
        Self {
            validator_address: validator_address.into(),
            description,
            commission_rate,
            min_self_delegation,
            ..Default::default()
        }
    }
}

impl Msg for MsgEditValidator {
    type Raw = RawMsgEditValidator;

    const TYPE_URL: &'static str = EDIT_VALIDATOR_TYPE_URL;

    fn from_raw(raw: Self::Raw) -> Result<Self> {
        Self::try_from(raw)
    }

    fn get_signers(&self) -> Vec<Addr> {
        vec![Addr::unchecked(&self.validator_address)]
    }
}

impl TryFrom<RawMsgEditValidator> for MsgEditValidator {
    type Error = StakingError;

    fn try_from(raw: RawMsgEditValidator) -> Result<Self> {
        let commission_rate = optional_string(raw.commission_rate)
            .map(|rate| parse_rate(&rate))
            .transpose()?;
        let min_self_delegation = optional_string(raw.min_self_delegation)
            .map(|amount| parse_amount(&amount))
            .transpose()
            .map_err(StakingError::InvalidMinSelfDelegation)?;
        Ok(Self {
            validator_address: raw.validator_address,
            description: raw
                .description
                .map(DescriptionUpdate::from)
                .unwrap_or_default(),
            commission_rate,
            min_self_delegation,
            secondary_owner_address: optional_string(raw.secondary_owner_address),
            reward_collector_address: optional_string(raw.reward_collector_address),
            bls_key: optional_string(raw.bls_key),
        })
    }
}

impl From<MsgEditValidator> for RawMsgEditValidator {
    fn from(msg: MsgEditValidator) -> Self {
        Self {
            description: Some(msg.description.into()),
            validator_address: msg.validator_address,
            commission_rate: msg.commission_rate.map(to_legacy_dec).unwrap_or_default(),
            min_self_delegation: msg
                .min_self_delegation
                .map(|amount| amount.to_string())
                .unwrap_or_default(),
            secondary_owner_address: msg.secondary_owner_address.unwrap_or_default(),
            reward_collector_address: msg.reward_collector_address.unwrap_or_default(),
            bls_key: msg.bls_key.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::FieldUpdate;
    use assert_matches::assert_matches;
    use cosmwasm_std::coin;

    fn raw_create_validator() -> RawMsgCreateValidator {
        let msg = MsgCreateValidator::new(
            "cosmosvaloper",
            &PubKey::Ed25519([1u8; 32]),
            &PubKeyRegistry::with_default_codecs(),
            coin(1000, "stake"),
            Description::new("a", "b", "c", "d", "e"),
            CommissionRates::default(),
            Uint128::one(),
            "cosmosdelegator",
            "",
            "",
            "",
            "",
        )
        .unwrap();
        msg.into()
    }

    #[test]
    fn create_validator_wire_conversion() {
        let raw = raw_create_validator();
        assert_eq!(raw.min_self_delegation, "1");
        assert_eq!(raw.commission.as_ref().unwrap().rate, "0");

        let msg = MsgCreateValidator::try_from(raw.clone()).unwrap();
        assert_eq!(msg.value, Some(coin(1000, "stake")));
        assert_eq!(RawMsgCreateValidator::from(msg), raw);
    }

    #[test]
    fn create_validator_rejects_negative_wire_values() {
        let raw = RawMsgCreateValidator {
            min_self_delegation: "-1".to_string(),
            ..raw_create_validator()
        };
        assert_matches!(
            MsgCreateValidator::try_from(raw),
            Err(StakingError::InvalidMinSelfDelegation(_))
        );

        let mut raw = raw_create_validator();
        raw.commission.as_mut().unwrap().rate = "-5".to_string();
        assert_matches!(
            MsgCreateValidator::try_from(raw),
            Err(StakingError::InvalidCommission(_))
        );

        let mut raw = raw_create_validator();
        raw.value.as_mut().unwrap().amount = "-1000".to_string();
        assert_matches!(
            MsgCreateValidator::try_from(raw),
            Err(StakingError::InvalidAmount(_))
        );
    }

    #[test]
    fn create_validator_signers() {
        let mut raw = raw_create_validator();
        let msg = MsgCreateValidator::try_from(raw.clone()).unwrap();
        assert_eq!(
            msg.get_signers(),
            vec![
                Addr::unchecked("cosmosdelegator"),
                Addr::unchecked("cosmosvaloper")
            ]
        );

        raw.delegator_address = raw.validator_address.clone();
        let msg = MsgCreateValidator::try_from(raw).unwrap();
        assert_eq!(msg.get_signers(), vec![Addr::unchecked("cosmosvaloper")]);
    }

    #[test]
    fn edit_validator_unset_fields_are_empty_on_the_wire() {
        let msg = MsgEditValidator::new("cosmosvaloper", DescriptionUpdate::default(), None, None);
        let raw = RawMsgEditValidator::from(msg.clone());
        assert_eq!(raw.commission_rate, "");
        assert_eq!(raw.min_self_delegation, "");
        assert_eq!(raw.description.as_ref().unwrap().moniker, "[do-not-modify]");
        assert_eq!(MsgEditValidator::try_from(raw).unwrap(), msg);
    }

    #[test]
    fn edit_validator_set_fields_survive_the_wire() {
        let msg = MsgEditValidator {
            description: DescriptionUpdate {
                details: FieldUpdate::Set(String::new()),
                ..Default::default()
            },
            bls_key: Some("ab".repeat(48)),
            ..MsgEditValidator::new(
                "cosmosvaloper",
                DescriptionUpdate::default(),
                Some(Decimal::percent(5)),
                Some(Uint128::new(10)),
            )
        };
        let raw = RawMsgEditValidator::from(msg.clone());
        assert_eq!(raw.commission_rate, "50000000000000000");
        assert_eq!(raw.min_self_delegation, "10");
        assert_eq!(MsgEditValidator::try_from(raw).unwrap(), msg);
        assert_eq!(msg.get_signers(), vec![Addr::unchecked("cosmosvaloper")]);
    }

    #[test]
    fn edit_validator_rejects_unparsable_wire_values() {
        let raw = RawMsgEditValidator {
            commission_rate: "abc".to_string(),
            ..Default::default()
        };
        assert_matches!(
            MsgEditValidator::try_from(raw),
            Err(StakingError::InvalidCommission(_))
        );

        let raw = RawMsgEditValidator {
            min_self_delegation: "-3".to_string(),
            ..Default::default()
        };
        assert_matches!(
            MsgEditValidator::try_from(raw),
            Err(StakingError::InvalidMinSelfDelegation(_))
        );
    }
}
