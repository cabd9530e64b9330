use std::cmp::Ordering;

use cosmwasm_std::{Coin, Uint128};
use staking_proto::Coin as ProtoCoin;

use crate::error::StakingError;

/// Denomination length bounds
pub const MIN_DENOM_LENGTH: usize = 3;
pub const MAX_DENOM_LENGTH: usize = 128;

/// Checks the denomination format: a letter followed by 2 to 127 letters, digits or `/:._-`.
pub fn validate_denom(denom: &str) -> Result<(), String> {
    if denom.len() < MIN_DENOM_LENGTH || denom.len() > MAX_DENOM_LENGTH {
        return Err(format!(
            "denom {denom:?} must be between {MIN_DENOM_LENGTH} and {MAX_DENOM_LENGTH} characters"
        ));
    }
    let mut chars = denom.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(format!("denom {denom:?} must start with a letter"));
    }
    if let Some(c) = chars.find(|c| !(c.is_ascii_alphanumeric() || "/:._-".contains(*c))) {
        return Err(format!("denom {denom:?} contains invalid character {c:?}"));
    }
    Ok(())
}

/// Checks that a coin is present, has a well-formed denom and a strictly positive amount.
/// Returns the coin for further checks.
pub fn validate_coin<'a>(coin: &'a Option<Coin>, what: &str) -> Result<&'a Coin, StakingError> {
    let coin = coin
        .as_ref()
        .ok_or_else(|| StakingError::InvalidAmount(format!("{what} is not set")))?;
    validate_denom(&coin.denom)
        .map_err(|e| StakingError::InvalidAmount(format!("{what}: {e}")))?;
    if coin.amount.is_zero() {
        return Err(StakingError::InvalidAmount(format!(
            "{what} must be positive, got {coin}"
        )));
    }
    Ok(coin)
}

/// Compares two coins of the same denomination.
pub fn checked_cmp(a: &Coin, b: &Coin) -> Result<Ordering, StakingError> {
    if a.denom != b.denom {
        return Err(StakingError::InvalidAmount(format!(
            "cannot compare coins of different denoms: {} and {}",
            a.denom, b.denom
        )));
    }
    Ok(a.amount.cmp(&b.amount))
}

/// Parses an integer amount from its wire representation.
pub(crate) fn parse_amount(amount: &str) -> Result<Uint128, String> {
    if amount.starts_with('-') {
        return Err(format!("amount cannot be negative: {amount}"));
    }
    amount
        .parse::<u128>()
        .map(Uint128::new)
        .map_err(|e| format!("cannot parse amount {amount:?}: {e}"))
}

/// An absent coin and a coin with neither denom nor amount both decode to `None`.
pub(crate) fn coin_from_proto(coin: Option<ProtoCoin>) -> Result<Option<Coin>, StakingError> {
    match coin {
        None => Ok(None),
        Some(c) if c.denom.is_empty() && c.amount.is_empty() => Ok(None),
        Some(c) => {
            let amount = parse_amount(&c.amount).map_err(StakingError::InvalidAmount)?;
            Ok(Some(Coin::new(amount, c.denom)))
        }
    }
}

pub(crate) fn coin_to_proto(coin: Option<Coin>) -> Option<ProtoCoin> {
    coin.map(|c| ProtoCoin {
        denom: c.denom,
        amount: c.amount.to_string(),
    })
}
