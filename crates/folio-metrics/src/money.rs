//! Currency rounding at the reporting boundary.
//!
//! Amounts are accumulated at full decimal precision and only canonicalized
//! here, so rounding error never compounds across aggregation steps.

use std::cmp::Ordering;

use crate::types::{MoneyRounding, MAX_MONEY_DECIMALS};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Unit moved between the remainder and the carry of a [`MoneySum`].
const CARRY_UNIT: Decimal = dec!(10000000000000000000000000000);

/// Rounds a money amount to `decimals` places and fixes its scale.
///
/// The result always carries exactly `decimals` fractional digits when the
/// magnitude allows it (`1755` becomes `1755.00` for two places), so
/// serialized and displayed values look the same for every amount.
/// Precision is capped at [`MAX_MONEY_DECIMALS`].
#[must_use]
pub fn round_money(amount: Decimal, decimals: u32, rounding: MoneyRounding) -> Decimal {
    let decimals = decimals.min(MAX_MONEY_DECIMALS);
    let mut rounded = amount.round_dp_with_strategy(decimals, rounding.strategy());
    rounded.rescale(decimals);
    rounded
}

/// Running total of money amounts that tolerates out-of-range partial sums.
///
/// The sum is held as `carry × 10^28 + remainder` with `|remainder| < 10^28`,
/// so only the final total has to fit in a [`Decimal`]. The outcome of
/// [`MoneySum::total`] does not depend on the order amounts were added in.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoneySum {
    carry: Decimal,
    remainder: Decimal,
}

impl MoneySum {
    /// Creates an empty sum.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an amount.
    pub fn add(&mut self, amount: Decimal) {
        let units = (amount / CARRY_UNIT).trunc();
        self.carry += units;
        self.remainder += amount - units * CARRY_UNIT;

        if self.remainder >= CARRY_UNIT {
            self.remainder -= CARRY_UNIT;
            self.carry += Decimal::ONE;
        } else if self.remainder <= -CARRY_UNIT {
            self.remainder += CARRY_UNIT;
            self.carry -= Decimal::ONE;
        }
    }

    /// The total, or `None` if it is outside the decimal range.
    #[must_use]
    pub fn total(&self) -> Option<Decimal> {
        // One unit moves into the remainder so the carry product stays in
        // range whenever the total does.
        let borrow = match self.carry.cmp(&Decimal::ZERO) {
            Ordering::Greater => Decimal::ONE,
            Ordering::Less => Decimal::NEGATIVE_ONE,
            Ordering::Equal => Decimal::ZERO,
        };
        let head = (self.carry - borrow).checked_mul(CARRY_UNIT)?;
        head.checked_add(self.remainder + borrow * CARRY_UNIT)
    }
}

impl FromIterator<Decimal> for MoneySum {
    fn from_iter<I: IntoIterator<Item = Decimal>>(iter: I) -> Self {
        let mut sum = Self::new();
        for amount in iter {
            sum.add(amount);
        }
        sum
    }
}
