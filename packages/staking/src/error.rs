use cosmwasm_std::Decimal;
use thiserror::Error;

use crate::params::SignedDuration;

#[derive(Error, Debug, PartialEq)]
pub enum StakingError {
    #[error("invalid {field} address {address:?}: {reason}")]
    InvalidAddress {
        field: &'static str,
        address: String,
        reason: String,
    },
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid commission: {0}")]
    InvalidCommission(#[from] CommissionError),
    #[error("invalid min self delegation: {0}")]
    InvalidMinSelfDelegation(String),
    #[error("invalid description: {0}")]
    InvalidDescription(String),
    #[error("invalid params: {0}")]
    InvalidParams(#[from] ParamsError),
    #[error("invalid authority address: {0}")]
    InvalidAuthority(String),
    #[error("empty validator public key")]
    EmptyPublicKey,
    #[error("unknown public key type: {0}")]
    UnknownKeyType(String),
    #[error("malformed {type_url} key payload: {reason}")]
    MalformedKeyPayload { type_url: String, reason: String },
    #[error("public key type {0} is already registered")]
    DuplicateKeyType(String),
    #[error("unknown message type: {0}")]
    UnknownMsgType(String),
    #[error(transparent)]
    Decode(#[from] prost::DecodeError),
}

/// The clause of the commission rate invariants that was violated.
#[derive(Error, Debug, PartialEq)]
pub enum CommissionError {
    #[error("commission rate cannot be negative: {0}")]
    Negative(String),
    #[error("cannot parse commission rate {0:?}")]
    Unparsable(String),
    #[error("commission rate cannot be greater than 1 (rate: {0})")]
    RateTooHigh(Decimal),
    #[error("max rate cannot be greater than 1 (max rate: {0})")]
    MaxRateTooHigh(Decimal),
    #[error("rate cannot be greater than the max rate (rate: {rate}, max rate: {max_rate})")]
    RateAboveMaxRate { rate: Decimal, max_rate: Decimal },
    #[error("max change rate cannot be greater than the max rate (max change rate: {max_change_rate}, max rate: {max_rate})")]
    MaxChangeRateAboveMaxRate {
        max_change_rate: Decimal,
        max_rate: Decimal,
    },
}

/// The clause of the staking parameter invariants that was violated.
#[derive(Error, Debug, PartialEq)]
pub enum ParamsError {
    #[error("params must be set")]
    Missing,
    #[error("unbonding time must be positive: {0}")]
    NonPositiveUnbondingTime(SignedDuration),
    #[error("unbonding time is out of range")]
    UnbondingTimeOutOfRange,
    #[error("max validators must be positive: {0}")]
    ZeroMaxValidators(u32),
    #[error("max entries must be positive: {0}")]
    ZeroMaxEntries(u32),
    #[error("minimum commission rate cannot be negative: {0}")]
    NegativeMinCommissionRate(String),
    #[error("cannot parse minimum commission rate {0:?}")]
    UnparsableMinCommissionRate(String),
    #[error("minimum commission rate cannot be greater than 100%: {0}")]
    MinCommissionRateTooHigh(Decimal),
    #[error("bond denom cannot be blank")]
    BlankBondDenom,
    #[error("invalid bond denom: {0}")]
    InvalidBondDenom(String),
}
