use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;
use staking_proto::cosmos::staking::v1beta1::CommissionRates as ProtoCommissionRates;

use crate::decimal::{parse_legacy_dec, to_legacy_dec, LegacyDecError};
use crate::error::{CommissionError, StakingError};

/// Commission rates a validator charges its delegators, as fractions in `[0, 1]`.
#[cw_serde]
#[derive(Copy, Default)]
pub struct CommissionRates {
    /// Commission rate charged to delegators.
    pub rate: Decimal,
    /// Maximum commission rate the validator can ever charge.
    pub max_rate: Decimal,
    /// Maximum daily increase of the commission rate.
    pub max_change_rate: Decimal,
}

impl CommissionRates {
    pub fn new(rate: Decimal, max_rate: Decimal, max_change_rate: Decimal) -> Self {
        Self {
            rate,
            max_rate,
            max_change_rate,
        }
    }

    /// Checks the rates as a unit: `rate <= max_rate <= 1` and `max_change_rate <= max_rate`.
    pub fn validate(&self) -> Result<(), CommissionError> {
        if self.max_rate > Decimal::one() {
            return Err(CommissionError::MaxRateTooHigh(self.max_rate));
        }
        if self.rate > self.max_rate {
            return Err(CommissionError::RateAboveMaxRate {
                rate: self.rate,
                max_rate: self.max_rate,
            });
        }
        if self.max_change_rate > self.max_rate {
            return Err(CommissionError::MaxChangeRateAboveMaxRate {
                max_change_rate: self.max_change_rate,
                max_rate: self.max_rate,
            });
        }
        Ok(())
    }
}

/// Checks a standalone commission rate, as set by an edit.
pub fn validate_rate(rate: Decimal) -> Result<(), CommissionError> {
    if rate > Decimal::one() {
        return Err(CommissionError::RateTooHigh(rate));
    }
    Ok(())
}

pub(crate) fn parse_rate(raw: &str) -> Result<Decimal, CommissionError> {
    parse_legacy_dec(raw).map_err(|e| match e {
        LegacyDecError::Negative => CommissionError::Negative(raw.to_string()),
        LegacyDecError::Unparsable => CommissionError::Unparsable(raw.to_string()),
    })
}

impl TryFrom<ProtoCommissionRates> for CommissionRates {
    type Error = StakingError;

    fn try_from(c: ProtoCommissionRates) -> Result<Self, Self::Error> {
        Ok(Self {
            rate: parse_rate(&c.rate)?,
            max_rate: parse_rate(&c.max_rate)?,
            max_change_rate: parse_rate(&c.max_change_rate)?,
        })
    }
}

impl From<CommissionRates> for ProtoCommissionRates {
    fn from(c: CommissionRates) -> Self {
        Self {
            rate: to_legacy_dec(c.rate),
            max_rate: to_legacy_dec(c.max_rate),
            max_change_rate: to_legacy_dec(c.max_change_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn dec(permille: u64) -> Decimal {
        Decimal::permille(permille)
    }

    #[test]
    fn zero_rates_are_valid() {
        assert!(CommissionRates::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_rates_are_rejected() {
        let five = Decimal::from_ratio(5u128, 1u128);
        assert_matches!(
            CommissionRates::new(five, five, five).validate(),
            Err(CommissionError::MaxRateTooHigh(_))
        );
        assert_matches!(
            CommissionRates::new(dec(200), dec(100), dec(10)).validate(),
            Err(CommissionError::RateAboveMaxRate { .. })
        );
        assert_eq!(
            CommissionRates::new(dec(100), dec(200), dec(300))
                .validate()
                .unwrap_err()
                .to_string(),
            "max change rate cannot be greater than the max rate (max change rate: 0.3, max rate: 0.2)"
        );
    }

    /// Accepted iff `0 <= rate <= max_rate <= 1` and `0 <= max_change_rate <= max_rate`.
    #[test]
    fn invariant_over_grid() {
        let steps = [0, 1, 250, 500, 999, 1000, 1001, 2000];
        for rate in steps {
            for max_rate in steps {
                for max_change_rate in steps {
                    let rates = CommissionRates::new(dec(rate), dec(max_rate), dec(max_change_rate));
                    let expected =
                        rate <= max_rate && max_rate <= 1000 && max_change_rate <= max_rate;
                    assert_eq!(
                        rates.validate().is_ok(),
                        expected,
                        "rates: {rates:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn standalone_rate() {
        assert!(validate_rate(Decimal::one()).is_ok());
        assert_matches!(
            validate_rate(Decimal::from_ratio(5u128, 1u128)),
            Err(CommissionError::RateTooHigh(_))
        );
    }

    #[test]
    fn negative_wire_rates_fail_closed() {
        let raw = ProtoCommissionRates {
            rate: "-1".to_string(),
            max_rate: "0".to_string(),
            max_change_rate: "0".to_string(),
        };
        assert_matches!(
            CommissionRates::try_from(raw),
            Err(StakingError::InvalidCommission(CommissionError::Negative(_)))
        );
    }
}
