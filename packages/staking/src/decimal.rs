//! Legacy decimal wire format: the integer string of the value scaled by 10^18.

use cosmwasm_std::{Decimal, Uint128};

pub(crate) const LEGACY_DEC_PRECISION: u32 = 18;

#[derive(Debug, PartialEq)]
pub(crate) enum LegacyDecError {
    Negative,
    Unparsable,
}

pub(crate) fn parse_legacy_dec(s: &str) -> Result<Decimal, LegacyDecError> {
    if s.starts_with('-') {
        return Err(LegacyDecError::Negative);
    }
    let atomics = s.parse::<u128>().map_err(|_| LegacyDecError::Unparsable)?;
    Decimal::from_atomics(Uint128::new(atomics), LEGACY_DEC_PRECISION)
        .map_err(|_| LegacyDecError::Unparsable)
}

pub(crate) fn to_legacy_dec(d: Decimal) -> String {
    d.atomics().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_scaled_atomics() {
        assert_eq!(
            parse_legacy_dec("100000000000000000").unwrap(),
            Decimal::from_str("0.1").unwrap()
        );
        assert_eq!(parse_legacy_dec("0").unwrap(), Decimal::zero());
        assert_eq!(
            to_legacy_dec(Decimal::one()),
            "1000000000000000000".to_string()
        );
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert_eq!(
            parse_legacy_dec("-1000000000000000000"),
            Err(LegacyDecError::Negative)
        );
        assert_eq!(parse_legacy_dec(""), Err(LegacyDecError::Unparsable));
        assert_eq!(parse_legacy_dec("0.5"), Err(LegacyDecError::Unparsable));
    }
}
