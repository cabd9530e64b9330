use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;
use derivative::Derivative;
use staking_proto::cosmos::staking::v1beta1::Params as ProtoParams;
use staking_proto::Duration as ProtoDuration;

use crate::coin::validate_denom;
use crate::decimal::{parse_legacy_dec, to_legacy_dec, LegacyDecError};
use crate::error::{ParamsError, StakingError};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Default unbonding period: three weeks
pub const DEFAULT_UNBONDING_TIME: SignedDuration = SignedDuration::from_days(21);
/// Default maximum number of bonded validators
pub const DEFAULT_MAX_VALIDATORS: u32 = 100;
/// Default maximum entries for a unbonding delegation or redelegation (per pair/trio)
pub const DEFAULT_MAX_ENTRIES: u32 = 7;
/// Default number of historical info entries to persist in store
pub const DEFAULT_HISTORICAL_ENTRIES: u32 = 10000;
/// Default chain-wide minimum commission rate
pub const DEFAULT_MIN_COMMISSION_RATE: Decimal = Decimal::zero();
/// Default bondable coin denomination
pub const DEFAULT_BOND_DENOM: &str = "stake";

/// A span of time with nanosecond resolution that may be negative, so that
/// a negative unbonding period can be represented and rejected.
#[cw_serde]
#[derive(Copy, Default, Eq, PartialOrd, Ord, Hash)]
pub struct SignedDuration(i64);

impl SignedDuration {
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(NANOS_PER_SECOND))
    }

    pub const fn from_days(days: i64) -> Self {
        Self::from_secs(days.saturating_mul(SECONDS_PER_DAY))
    }

    pub const fn as_nanos(&self) -> i64 {
        self.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for SignedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0 / NANOS_PER_SECOND;
        let nanos = (self.0 % NANOS_PER_SECOND).abs();
        if nanos == 0 {
            write!(f, "{secs}s")
        } else if secs == 0 && self.0 < 0 {
            write!(f, "-0.{nanos:09}s")
        } else {
            write!(f, "{secs}.{nanos:09}s")
        }
    }
}

impl TryFrom<ProtoDuration> for SignedDuration {
    type Error = ParamsError;

    fn try_from(d: ProtoDuration) -> Result<Self, Self::Error> {
        d.seconds
            .checked_mul(NANOS_PER_SECOND)
            .and_then(|n| n.checked_add(i64::from(d.nanos)))
            .map(Self)
            .ok_or(ParamsError::UnbondingTimeOutOfRange)
    }
}

impl From<SignedDuration> for ProtoDuration {
    fn from(d: SignedDuration) -> Self {
        Self {
            seconds: d.0 / NANOS_PER_SECOND,
            // Bounded by NANOS_PER_SECOND in magnitude
            nanos: (d.0 % NANOS_PER_SECOND) as i32,
        }
    }
}

/// Params define the chain-wide staking parameters
#[cw_serde]
#[derive(Derivative)]
#[derivative(Default)]
pub struct Params {
    /// Time a delegation takes to unbond.
    #[derivative(Default(value = "DEFAULT_UNBONDING_TIME"))]
    pub unbonding_time: SignedDuration,
    /// Maximum number of bonded validators.
    #[derivative(Default(value = "DEFAULT_MAX_VALIDATORS"))]
    pub max_validators: u32,
    /// Maximum entries for either unbonding delegation or redelegation (per pair/trio).
    #[derivative(Default(value = "DEFAULT_MAX_ENTRIES"))]
    pub max_entries: u32,
    /// Number of historical entries to persist.
    #[derivative(Default(value = "DEFAULT_HISTORICAL_ENTRIES"))]
    pub historical_entries: u32,
    /// Chain-wide minimum commission rate a validator can charge its delegators.
    #[derivative(Default(value = "DEFAULT_MIN_COMMISSION_RATE"))]
    pub min_commission_rate: Decimal,
    /// Bondable coin denomination.
    #[derivative(Default(value = "String::from(DEFAULT_BOND_DENOM)"))]
    pub bond_denom: String,
}

impl Params {
    /// Checks the parameters, reporting the first failing clause.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.unbonding_time.is_positive() {
            return Err(ParamsError::NonPositiveUnbondingTime(self.unbonding_time));
        }
        if self.max_validators == 0 {
            return Err(ParamsError::ZeroMaxValidators(self.max_validators));
        }
        if self.max_entries == 0 {
            return Err(ParamsError::ZeroMaxEntries(self.max_entries));
        }
        if self.min_commission_rate > Decimal::one() {
            return Err(ParamsError::MinCommissionRateTooHigh(
                self.min_commission_rate,
            ));
        }
        if self.bond_denom.trim().is_empty() {
            return Err(ParamsError::BlankBondDenom);
        }
        validate_denom(&self.bond_denom).map_err(ParamsError::InvalidBondDenom)
    }
}

impl TryFrom<ProtoParams> for Params {
    type Error = StakingError;

    fn try_from(p: ProtoParams) -> Result<Self, Self::Error> {
        let unbonding_time = match p.unbonding_time {
            Some(d) => SignedDuration::try_from(d)?,
            None => SignedDuration::default(),
        };
        let min_commission_rate =
            parse_legacy_dec(&p.min_commission_rate).map_err(|e| match e {
                LegacyDecError::Negative => {
                    ParamsError::NegativeMinCommissionRate(p.min_commission_rate.clone())
                }
                LegacyDecError::Unparsable => {
                    ParamsError::UnparsableMinCommissionRate(p.min_commission_rate.clone())
                }
            })?;
        Ok(Self {
            unbonding_time,
            max_validators: p.max_validators,
            max_entries: p.max_entries,
            historical_entries: p.historical_entries,
            min_commission_rate,
            bond_denom: p.bond_denom,
        })
    }
}

impl From<Params> for ProtoParams {
    fn from(p: Params) -> Self {
        Self {
            unbonding_time: Some(p.unbonding_time.into()),
            max_validators: p.max_validators,
            max_entries: p.max_entries,
            historical_entries: p.historical_entries,
            bond_denom: p.bond_denom,
            min_commission_rate: to_legacy_dec(p.min_commission_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn params() -> Params {
        Params {
            bond_denom: "denom".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults() {
        let p = Params::default();
        assert_eq!(p.unbonding_time, SignedDuration::from_secs(1_814_400));
        assert_eq!(p.max_validators, 100);
        assert_eq!(p.max_entries, 7);
        assert_eq!(p.historical_entries, 10000);
        assert_eq!(p.min_commission_rate, Decimal::zero());
        assert_eq!(p.bond_denom, "stake");
        assert!(p.validate().is_ok());
    }

    #[test]
    fn each_clause_is_reported() {
        let p = Params {
            unbonding_time: SignedDuration::from_days(-21),
            ..params()
        };
        assert_matches!(p.validate(), Err(ParamsError::NonPositiveUnbondingTime(_)));

        let p = Params {
            max_validators: 0,
            ..params()
        };
        assert_eq!(
            p.validate().unwrap_err().to_string(),
            "max validators must be positive: 0"
        );

        let p = Params {
            max_entries: 0,
            ..params()
        };
        assert_eq!(
            p.validate().unwrap_err().to_string(),
            "max entries must be positive: 0"
        );

        let p = Params {
            min_commission_rate: Decimal::from_ratio(2u128, 1u128),
            ..params()
        };
        assert_matches!(p.validate(), Err(ParamsError::MinCommissionRateTooHigh(_)));

        let p = Params {
            bond_denom: "  ".to_string(),
            ..params()
        };
        assert_eq!(p.validate(), Err(ParamsError::BlankBondDenom));
    }

    #[test]
    fn first_failing_clause_wins() {
        let p = Params {
            unbonding_time: SignedDuration::from_secs(0),
            max_validators: 0,
            max_entries: 0,
            bond_denom: String::new(),
            ..params()
        };
        assert_matches!(p.validate(), Err(ParamsError::NonPositiveUnbondingTime(_)));
    }

    #[test]
    fn negative_min_commission_rate_on_the_wire() {
        let mut raw = ProtoParams::from(params());
        raw.min_commission_rate = "-1000000000000000000".to_string();
        assert_eq!(
            Params::try_from(raw).unwrap_err().to_string(),
            "invalid params: minimum commission rate cannot be negative: -1000000000000000000"
        );
    }

    #[test]
    fn duration_display_and_wire() {
        assert_eq!(SignedDuration::from_days(-21).to_string(), "-1814400s");
        assert_eq!(SignedDuration::from_nanos(1_500_000_000).to_string(), "1.500000000s");
        assert_eq!(SignedDuration::from_nanos(-5).to_string(), "-0.000000005s");

        let d = SignedDuration::from_nanos(-1_500_000_000);
        let wire = ProtoDuration::from(d);
        assert_eq!((wire.seconds, wire.nanos), (-1, -500_000_000));
        assert_eq!(SignedDuration::try_from(wire).unwrap(), d);

        let overflow = ProtoDuration {
            seconds: i64::MAX,
            nanos: 0,
        };
        assert_eq!(
            SignedDuration::try_from(overflow),
            Err(ParamsError::UnbondingTimeOutOfRange)
        );
    }
}
