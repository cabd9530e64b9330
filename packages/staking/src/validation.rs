//! Stateless checks of the staking messages.
//!
//! Rules are evaluated in a fixed order and the first violation is reported.

use crate::address::{gov_authority, to_canonical_addr, validate_address, ACCOUNT_PREFIX};
use crate::coin::validate_coin;
use crate::commission::validate_rate;
use crate::error::StakingError;
use crate::msg::{
    MsgBeginRedelegate, MsgCreateValidator, MsgDelegate, MsgEditValidator, MsgUndelegate,
    MsgUpdateParams,
};
use crate::pubkey::validate_bls_key_hex;
use crate::Result;

/// Checks that do not depend on chain state.
pub trait ValidateBasic {
    fn validate_basic(&self) -> Result<()>;
}

impl ValidateBasic for MsgCreateValidator {
    fn validate_basic(&self) -> Result<()> {
        validate_address("validator", &self.validator_address)?;
        validate_address("delegator", &self.delegator_address)?;
        validate_address("secondary owner", &self.secondary_owner_address)?;
        validate_address("reward collector", &self.reward_collector_address)?;
        validate_address("relayer", &self.relayer_address)?;

        if self.pubkey.is_empty() {
            return Err(StakingError::EmptyPublicKey);
        }

        let value = validate_coin(&self.value, "self delegation")?;
        self.description.validate()?;
        self.commission.validate()?;

        if self.min_self_delegation.is_zero() {
            return Err(StakingError::InvalidMinSelfDelegation(
                "minimum self delegation must be a positive integer".to_string(),
            ));
        }
        if self.min_self_delegation > value.amount {
            return Err(StakingError::InvalidMinSelfDelegation(format!(
                "self delegation {} is below the minimum self delegation {}",
                value.amount, self.min_self_delegation
            )));
        }

        validate_bls_key_hex(&self.bls_key)
    }
}

impl ValidateBasic for MsgEditValidator {
    fn validate_basic(&self) -> Result<()> {
        validate_address("validator", &self.validator_address)?;
        self.description.validate()?;

        if let Some(rate) = self.commission_rate {
            validate_rate(rate)?;
        }
        if self.min_self_delegation.is_some_and(|amount| amount.is_zero()) {
            return Err(StakingError::InvalidMinSelfDelegation(
                "minimum self delegation must be a positive integer".to_string(),
            ));
        }
        if let Some(addr) = &self.secondary_owner_address {
            validate_address("secondary owner", addr)?;
        }
        if let Some(addr) = &self.reward_collector_address {
            validate_address("reward collector", addr)?;
        }
        if let Some(bls_key) = &self.bls_key {
            validate_bls_key_hex(bls_key)?;
        }
        Ok(())
    }
}

impl ValidateBasic for MsgDelegate {
    fn validate_basic(&self) -> Result<()> {
        validate_address("delegator", &self.delegator_address)?;
        validate_address("validator", &self.validator_address)?;
        validate_coin(&self.amount, "delegation amount")?;
        Ok(())
    }
}

impl ValidateBasic for MsgUndelegate {
    fn validate_basic(&self) -> Result<()> {
        validate_address("delegator", &self.delegator_address)?;
        validate_address("validator", &self.validator_address)?;
        validate_coin(&self.amount, "unbonding amount")?;
        Ok(())
    }
}

impl ValidateBasic for MsgBeginRedelegate {
    fn validate_basic(&self) -> Result<()> {
        validate_address("delegator", &self.delegator_address)?;
        validate_address("source validator", &self.validator_src_address)?;
        validate_address("destination validator", &self.validator_dst_address)?;
        validate_coin(&self.amount, "redelegation amount")?;
        Ok(())
    }
}

impl ValidateBasic for MsgUpdateParams {
    fn validate_basic(&self) -> Result<()> {
        to_canonical_addr(&self.authority, ACCOUNT_PREFIX)
            .map_err(StakingError::InvalidAuthority)?;
        let expected = gov_authority();
        if self.authority != expected.as_str() {
            return Err(StakingError::InvalidAuthority(format!(
                "expected {expected}, got {}",
                self.authority
            )));
        }
        self.params.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::CommissionRates;
    use crate::description::{Description, DescriptionUpdate, FieldUpdate};
    use crate::error::{CommissionError, ParamsError};
    use crate::params::{Params, SignedDuration};
    use crate::pubkey::{KeyEnvelope, PubKey, PubKeyRegistry};
    use assert_matches::assert_matches;
    use cosmwasm_std::{coin, Decimal, Uint128};

    const VALIDATOR: &str = "cosmos1qyqszqgpqyqszqgpqyqszqgpqyqszqgpjnp7du";
    const DELEGATOR: &str = "cosmos1qgpqyqszqgpqyqszqgpqyqszqgpqyqszrh8mx2";

    fn create_validator() -> MsgCreateValidator {
        MsgCreateValidator::new(
            VALIDATOR,
            &PubKey::Ed25519([5u8; 32]),
            &PubKeyRegistry::with_default_codecs(),
            coin(1000, "stake"),
            Description::new("a", "b", "c", "d", "e"),
            CommissionRates::default(),
            Uint128::one(),
            DELEGATOR,
            DELEGATOR,
            DELEGATOR,
            DELEGATOR,
            hex::encode([1u8; 48]),
        )
        .unwrap()
    }

    #[test]
    fn create_validator_checks_in_order() {
        assert_eq!(create_validator().validate_basic(), Ok(()));

        let msg = MsgCreateValidator {
            validator_address: String::new(),
            value: None,
            ..create_validator()
        };
        assert_matches!(
            msg.validate_basic(),
            Err(StakingError::InvalidAddress { field: "validator", .. })
        );

        let msg = MsgCreateValidator {
            relayer_address: "cosmos1".to_string(),
            ..create_validator()
        };
        assert_matches!(
            msg.validate_basic(),
            Err(StakingError::InvalidAddress { field: "relayer", .. })
        );

        let msg = MsgCreateValidator {
            pubkey: KeyEnvelope::default(),
            ..create_validator()
        };
        assert_eq!(msg.validate_basic(), Err(StakingError::EmptyPublicKey));
    }

    #[test]
    fn create_validator_self_delegation() {
        let msg = MsgCreateValidator {
            value: None,
            ..create_validator()
        };
        assert_matches!(msg.validate_basic(), Err(StakingError::InvalidAmount(_)));

        let msg = MsgCreateValidator {
            min_self_delegation: Uint128::zero(),
            ..create_validator()
        };
        assert_matches!(
            msg.validate_basic(),
            Err(StakingError::InvalidMinSelfDelegation(_))
        );

        let msg = MsgCreateValidator {
            min_self_delegation: Uint128::new(1001),
            ..create_validator()
        };
        assert_matches!(
            msg.validate_basic(),
            Err(StakingError::InvalidMinSelfDelegation(_))
        );

        let msg = MsgCreateValidator {
            min_self_delegation: Uint128::new(1000),
            ..create_validator()
        };
        assert_eq!(msg.validate_basic(), Ok(()));
    }

    #[test]
    fn create_validator_commission_and_bls_key() {
        let msg = MsgCreateValidator {
            commission: CommissionRates::new(
                Decimal::percent(50),
                Decimal::percent(40),
                Decimal::zero(),
            ),
            ..create_validator()
        };
        assert_matches!(
            msg.validate_basic(),
            Err(StakingError::InvalidCommission(
                CommissionError::RateAboveMaxRate { .. }
            ))
        );

        let msg = MsgCreateValidator {
            bls_key: "zz".to_string(),
            ..create_validator()
        };
        assert_matches!(
            msg.validate_basic(),
            Err(StakingError::MalformedKeyPayload { .. })
        );
    }

    #[test]
    fn edit_validator_only_checks_present_fields() {
        let msg = MsgEditValidator::new(VALIDATOR, DescriptionUpdate::default(), None, None);
        assert_eq!(msg.validate_basic(), Ok(()));

        let msg = MsgEditValidator {
            secondary_owner_address: Some("not an address".to_string()),
            ..msg
        };
        assert_matches!(
            msg.validate_basic(),
            Err(StakingError::InvalidAddress { field: "secondary owner", .. })
        );
    }

    #[test]
    fn edit_validator_rules() {
        let msg = MsgEditValidator::new(
            VALIDATOR,
            DescriptionUpdate {
                moniker: FieldUpdate::Set("m".repeat(Description::MAX_MONIKER_LENGTH + 1)),
                ..Default::default()
            },
            None,
            None,
        );
        assert_matches!(
            msg.validate_basic(),
            Err(StakingError::InvalidDescription(_))
        );

        let msg = MsgEditValidator::new(
            VALIDATOR,
            DescriptionUpdate::default(),
            Some(Decimal::percent(101)),
            None,
        );
        assert_matches!(
            msg.validate_basic(),
            Err(StakingError::InvalidCommission(CommissionError::RateTooHigh(_)))
        );

        let msg = MsgEditValidator::new(
            VALIDATOR,
            DescriptionUpdate::default(),
            Some(Decimal::one()),
            Some(Uint128::zero()),
        );
        assert_matches!(
            msg.validate_basic(),
            Err(StakingError::InvalidMinSelfDelegation(_))
        );

        let msg = MsgEditValidator {
            bls_key: Some(hex::encode([1u8; 47])),
            ..MsgEditValidator::new(VALIDATOR, DescriptionUpdate::default(), None, None)
        };
        assert_matches!(
            msg.validate_basic(),
            Err(StakingError::MalformedKeyPayload { .. })
        );
    }

    #[test]
    fn redelegation_may_target_the_source() {
        let msg = MsgBeginRedelegate::new(DELEGATOR, VALIDATOR, VALIDATOR, coin(1, "stake"));
        assert_eq!(msg.validate_basic(), Ok(()));

        let msg = MsgBeginRedelegate {
            validator_dst_address: String::new(),
            ..msg
        };
        assert_matches!(
            msg.validate_basic(),
            Err(StakingError::InvalidAddress { field: "destination validator", .. })
        );
    }

    #[test]
    fn undelegate_amount() {
        let msg = MsgUndelegate::new(DELEGATOR, VALIDATOR, coin(0, "stake"));
        assert_matches!(msg.validate_basic(), Err(StakingError::InvalidAmount(_)));
        let msg = MsgUndelegate::new(DELEGATOR, VALIDATOR, coin(3, "x"));
        assert_matches!(msg.validate_basic(), Err(StakingError::InvalidAmount(_)));
        let msg = MsgUndelegate::new(DELEGATOR, VALIDATOR, coin(3, "stake"));
        assert_eq!(msg.validate_basic(), Ok(()));
    }

    #[test]
    fn update_params_checks_authority_first() {
        let bad_params = Params {
            unbonding_time: SignedDuration::from_days(-21),
            ..Default::default()
        };

        let msg = MsgUpdateParams::new("invalid", bad_params.clone());
        let err = msg.validate_basic().unwrap_err();
        assert_matches!(err, StakingError::InvalidAuthority(_));
        assert!(err.to_string().contains("invalid authority address"));

        // well-formed, but not the governance module
        let msg = MsgUpdateParams::new(DELEGATOR, Params::default());
        assert_matches!(msg.validate_basic(), Err(StakingError::InvalidAuthority(_)));

        let msg = MsgUpdateParams::new(gov_authority().as_str(), bad_params);
        let err = msg.validate_basic().unwrap_err();
        assert_matches!(
            err,
            StakingError::InvalidParams(ParamsError::NonPositiveUnbondingTime(_))
        );
        assert!(err.to_string().contains("unbonding time must be positive"));

        let msg = MsgUpdateParams::new(gov_authority().as_str(), Params::default());
        assert_eq!(msg.validate_basic(), Ok(()));
    }
}
