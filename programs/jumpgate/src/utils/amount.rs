use anchor_lang::prelude::*;

use crate::errors::JumpgateError;

/// Compute the portion of `raw` that can cross the precision boundary.
///
/// Bridges carry amounts at `target_decimals` precision, typically coarser
/// than the source mint. Any fraction finer than that is unrepresentable on
/// the destination side and is floored away rather than rounded, so the
/// result never exceeds `raw`. The result is then clamped to `cap`, rounded
/// down to the same truncation unit.
///
/// Pure and total: never consults live state, and a zero result is a valid
/// outcome (reported, not rejected)
pub fn bridgeable_amount(
    raw: u128,
    source_decimals: u8,
    target_decimals: u8,
    cap: u128,
) -> Result<u128> {
    require!(
        source_decimals >= target_decimals,
        JumpgateError::InvalidPrecisionConfig
    );

    let shift = u32::from(source_decimals - target_decimals);
    let unit = 10u128
        .checked_pow(shift)
        .ok_or(error!(JumpgateError::InvalidPrecisionConfig))?;

    let truncated = raw / unit * unit;

    Ok(if truncated > cap { cap / unit * unit } else { truncated })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_BRIDGING_CAP;

    const ONE_QUINTILLION: u128 = DEFAULT_BRIDGING_CAP as u128;

    #[test]
    fn dust_below_the_cutoff_is_floored() {
        let amount = bridgeable_amount(123_456_789_012_345_678, 18, 8, ONE_QUINTILLION).unwrap();
        assert_eq!(amount, 123_456_780_000_000_000);
    }

    #[test]
    fn oversized_balance_is_clamped_by_the_cap() {
        // 200 tokens at 18 decimals truncates cleanly but still exceeds the cap
        let amount = bridgeable_amount(200 * ONE_QUINTILLION, 18, 8, ONE_QUINTILLION).unwrap();
        assert_eq!(amount, ONE_QUINTILLION);
    }

    #[test]
    fn ragged_cap_is_rounded_down_to_the_unit() {
        let cap = ONE_QUINTILLION + 5;
        let amount = bridgeable_amount(200 * ONE_QUINTILLION, 18, 8, cap).unwrap();
        assert_eq!(amount, ONE_QUINTILLION);
        assert_eq!(amount % 10u128.pow(10), 0);
    }

    #[test]
    fn balance_below_the_unit_is_zero_not_an_error() {
        assert_eq!(bridgeable_amount(5, 18, 8, ONE_QUINTILLION).unwrap(), 0);
        assert_eq!(
            bridgeable_amount(9_999_999_999, 18, 8, ONE_QUINTILLION).unwrap(),
            0
        );
    }

    #[test]
    fn equal_precision_passes_amounts_through() {
        assert_eq!(
            bridgeable_amount(123_456, 8, 8, ONE_QUINTILLION).unwrap(),
            123_456
        );
    }

    #[test]
    fn source_coarser_than_target_is_rejected() {
        assert_eq!(
            bridgeable_amount(1_000_000, 6, 8, ONE_QUINTILLION).unwrap_err(),
            error!(JumpgateError::InvalidPrecisionConfig)
        );
    }

    #[test]
    fn never_fabricates_value_and_is_idempotent() {
        for raw in [
            0,
            1,
            9_999_999_999,
            10_000_000_000,
            123_456_789_012_345_678,
            200 * ONE_QUINTILLION,
            u128::from(u64::MAX),
        ] {
            let once = bridgeable_amount(raw, 18, 8, ONE_QUINTILLION).unwrap();
            assert!(once <= raw);
            assert!(once <= ONE_QUINTILLION);
            assert_eq!(once % 10u128.pow(10), 0);

            let twice = bridgeable_amount(once, 18, 8, ONE_QUINTILLION).unwrap();
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn sequential_invocations_never_overdraw_one_balance() {
        // Two callers race on the same starting balance. The runtime
        // serializes them over the writable token account, so the second one
        // observes the post-transfer balance. Their combined approvals must
        // never exceed what was there to begin with
        let starting_balance: u128 = 123_456_789_012_345_678;
        let mut balance = starting_balance;
        let mut authorized_total = 0u128;

        for _ in 0..2 {
            let amount = bridgeable_amount(balance, 18, 8, ONE_QUINTILLION).unwrap();
            authorized_total += amount;
            balance -= amount;
        }

        assert!(authorized_total <= starting_balance);
    }
}
