// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Represents a purse of coins in three fixed denominations.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
    str::FromStr,
};

use coinpurse_core::{
    Separable,
    correctness::{FAILED, check_non_negative_i64, check_whole_f64},
};

use crate::{
    enums::{ArithmeticOp, ComparisonOp, Denomination, WeightUnit},
    error::PurseError,
    types::{
        operand::{Comparand, Operand, Target, cmp_total_f64},
        view::{CoinView, IndexKey, SliceKey},
    },
};

/// Represents a purse holding a non-negative number of coins of each [`Denomination`].
///
/// The purse has two faces:
/// - For arithmetic it is a physical collection of coins, so operations act field-wise and a
///   subtraction can never borrow from a higher denomination.
/// - For comparison it is a monetary value, so equality, ordering and hashing use only the
///   [`total`](Self::total) in lowest-denomination units. Purses with different splits but
///   equal totals compare equal.
///
/// Every instance reachable through the public API holds three non-negative counts. Fallible
/// operations validate the complete result before anything is committed, so a failed in-place
/// operation leaves the purse unchanged.
#[derive(Clone, Copy, Default)]
pub struct CoinPurse {
    high: u64,
    mid: u64,
    low: u64,
}

impl CoinPurse {
    /// The empty purse.
    pub const ZERO: Self = Self::from_counts(0, 0, 0);

    /// Creates a new [`CoinPurse`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidAmount`] if any count is negative.
    pub fn new(high: i64, mid: i64, low: i64) -> Result<Self, PurseError> {
        let high = check_count(high, Denomination::High)?;
        let mid = check_count(mid, Denomination::Mid)?;
        let low = check_count(low, Denomination::Low)?;
        Ok(Self::from_counts(high, mid, low))
    }

    /// Creates a new [`CoinPurse`] instance from counts which are non-negative by type.
    #[must_use]
    pub const fn from_counts(high: u64, mid: u64, low: u64) -> Self {
        Self { high, mid, low }
    }

    /// Creates a new [`CoinPurse`] instance from floating-point counts.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidAmount`] if any count is not a finite, non-negative whole
    /// number.
    pub fn from_f64_counts(high: f64, mid: f64, low: f64) -> Result<Self, PurseError> {
        let check = |value: f64, denomination: Denomination| {
            check_whole_f64(value, denomination.as_ref())
                .map_err(|e| PurseError::invalid_amount(&e))
        };
        Ok(Self::from_counts(
            check(high, Denomination::High)?,
            check(mid, Denomination::Mid)?,
            check(low, Denomination::Low)?,
        ))
    }

    /// Returns the number of high-denomination coins.
    #[must_use]
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// Returns the number of mid-denomination coins.
    #[must_use]
    pub const fn mid(&self) -> u64 {
        self.mid
    }

    /// Returns the number of low-denomination coins.
    #[must_use]
    pub const fn low(&self) -> u64 {
        self.low
    }

    /// Returns the number of coins of the given `denomination`.
    #[must_use]
    pub const fn count_of(&self, denomination: Denomination) -> u64 {
        match denomination {
            Denomination::High => self.high,
            Denomination::Mid => self.mid,
            Denomination::Low => self.low,
        }
    }

    /// Returns the counts as a `(high, mid, low)` tuple.
    #[must_use]
    pub const fn counts(&self) -> (u64, u64, u64) {
        (self.high, self.mid, self.low)
    }

    /// Sets the number of coins of the given `denomination`.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidAmount`] if `value` is negative, leaving the purse unchanged.
    pub fn set(&mut self, denomination: Denomination, value: i64) -> Result<(), PurseError> {
        let value = check_count(value, denomination)?;
        match denomination {
            Denomination::High => self.high = value,
            Denomination::Mid => self.mid = value,
            Denomination::Low => self.low = value,
        }
        Ok(())
    }

    /// Sets the number of high-denomination coins.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidAmount`] if `value` is negative.
    pub fn set_high(&mut self, value: i64) -> Result<(), PurseError> {
        self.set(Denomination::High, value)
    }

    /// Sets the number of mid-denomination coins.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidAmount`] if `value` is negative.
    pub fn set_mid(&mut self, value: i64) -> Result<(), PurseError> {
        self.set(Denomination::Mid, value)
    }

    /// Sets the number of low-denomination coins.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidAmount`] if `value` is negative.
    pub fn set_low(&mut self, value: i64) -> Result<(), PurseError> {
        self.set(Denomination::Low, value)
    }

    /// Returns the value of the purse in lowest-denomination units.
    #[must_use]
    pub fn total(&self) -> u128 {
        u128::from(self.high) * u128::from(Denomination::High.value())
            + u128::from(self.mid) * u128::from(Denomination::Mid.value())
            + u128::from(self.low)
    }

    /// Returns the number of physical coins in the purse.
    #[must_use]
    pub fn count(&self) -> u128 {
        u128::from(self.high) + u128::from(self.mid) + u128::from(self.low)
    }

    /// Returns the length of the indexing view, equal to [`count`](Self::count).
    #[must_use]
    pub fn len(&self) -> u128 {
        self.count()
    }

    /// Returns whether the purse holds no coins at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.high == 0 && self.mid == 0 && self.low == 0
    }

    /// Returns whether the purse holds at least one coin (its truthiness).
    #[must_use]
    pub const fn is_non_zero(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the physical weight of the coins in the given `unit`.
    #[must_use]
    pub fn weight(&self, unit: WeightUnit) -> f64 {
        let grams = self.high as f64 * Denomination::High.grams()
            + self.mid as f64 * Denomination::Mid.grams()
            + self.low as f64 * Denomination::Low.grams();
        grams * unit.per_gram()
    }

    /// Returns the physical weight of the coins in the unit named by `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidUnit`] if `unit` is not one of `grams`, `kilograms`,
    /// `ounces` or `pounds`.
    pub fn weight_by_name(&self, unit: &str) -> Result<f64, PurseError> {
        let unit = WeightUnit::from_str(unit).map_err(|_| PurseError::InvalidUnit(unit.into()))?;
        Ok(self.weight(unit))
    }

    /// Returns the total as an integer.
    #[must_use]
    pub fn as_int(&self) -> u128 {
        self.total()
    }

    /// Returns the total as a float.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.total() as f64
    }

    // ---------------------------------------------------------------------------------------------
    // Arithmetic
    // ---------------------------------------------------------------------------------------------

    /// Returns a new purse holding the coins of both purses.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidAmount`] if any resulting count overflows.
    pub fn checked_add(&self, other: &Self) -> Result<Self, PurseError> {
        self.zip_with(other, u64::checked_add, |d| {
            format!("adding {other} to {self} overflows the '{d}' count")
        })
    }

    /// Returns a new purse with the coins of `other` taken out of this purse.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::NegativeResult`] if `other` holds more coins of any denomination
    /// than this purse. All three denominations are checked before anything is computed.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, PurseError> {
        if other.high > self.high || other.mid > self.mid || other.low > self.low {
            return Err(PurseError::NegativeResult(format!(
                "subtracting {other} from {self} would result in negative quantity of coins"
            )));
        }

        Ok(Self::from_counts(
            self.high - other.high,
            self.mid - other.mid,
            self.low - other.low,
        ))
    }

    /// Returns a new purse with every count multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidAmount`] if `factor` is negative or a resulting count
    /// overflows.
    pub fn scale(&self, factor: i64) -> Result<Self, PurseError> {
        let factor = check_non_negative_i64(factor, "factor").map_err(|_| {
            PurseError::InvalidAmount(format!(
                "cannot multiply {self} by negative integer {factor}"
            ))
        })?;
        self.scale_unsigned(factor)
    }

    /// Returns a new purse with every count raised to the power `exponent`.
    ///
    /// The operation acts on each count independently, so the total of the result is not a
    /// function of the original total. In particular an exponent of zero yields one coin of
    /// every denomination, even for an empty purse.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidAmount`] if `exponent` is negative (which would produce
    /// fractional counts) or a resulting count overflows.
    pub fn pow(&self, exponent: i64) -> Result<Self, PurseError> {
        let exponent = check_non_negative_i64(exponent, "exponent").map_err(|_| {
            PurseError::InvalidAmount(format!(
                "cannot raise {self} to negative power {exponent}, counts would not be integers"
            ))
        })?;
        self.map(
            |count| checked_pow(count, exponent),
            |d| format!("raising {self} to the power {exponent} overflows the '{d}' count"),
        )
    }

    /// Adds the coins of `other` to this purse in place.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidAmount`] if any resulting count overflows, leaving the
    /// purse unchanged.
    pub fn add_in_place(&mut self, other: &Self) -> Result<&mut Self, PurseError> {
        let result = self.checked_add(other);
        self.commit(ArithmeticOp::Add, result)
    }

    /// Takes the coins of `other` out of this purse in place.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::NegativeResult`] if `other` holds more coins of any denomination,
    /// leaving the purse unchanged.
    pub fn sub_in_place(&mut self, other: &Self) -> Result<&mut Self, PurseError> {
        let result = self.checked_sub(other);
        self.commit(ArithmeticOp::Sub, result)
    }

    /// Multiplies every count by `factor` in place.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidAmount`] if `factor` is negative or a count overflows,
    /// leaving the purse unchanged.
    pub fn scale_in_place(&mut self, factor: i64) -> Result<&mut Self, PurseError> {
        let result = self.scale(factor);
        self.commit(ArithmeticOp::Mul, result)
    }

    /// Raises every count to the power `exponent` in place.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidAmount`] if `exponent` is negative or a count overflows,
    /// leaving the purse unchanged.
    pub fn pow_in_place(&mut self, exponent: i64) -> Result<&mut Self, PurseError> {
        let result = self.pow(exponent);
        self.commit(ArithmeticOp::Pow, result)
    }

    /// Applies the arithmetic operation `op` with a dynamically typed right-hand operand.
    ///
    /// Addition and subtraction accept only another purse; scaling and exponentiation accept
    /// only an integer. No operand is ever coerced to fit.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::UnsupportedOperand`] if the operand type does not fit `op`, or
    /// any error of the underlying operation.
    pub fn apply(&self, op: ArithmeticOp, operand: Operand<'_>) -> Result<Self, PurseError> {
        match (op, operand) {
            (ArithmeticOp::Add, Operand::Purse(other)) => self.checked_add(other),
            (ArithmeticOp::Sub, Operand::Purse(other)) => self.checked_sub(other),
            (ArithmeticOp::Mul, Operand::Integer(factor)) => self.scale(factor),
            (ArithmeticOp::Pow, Operand::Integer(exponent)) => self.pow(exponent),
            (op, operand) => Err(PurseError::UnsupportedOperand {
                op: op.symbol(),
                operand: operand.type_name(),
            }),
        }
    }

    fn scale_unsigned(&self, factor: u64) -> Result<Self, PurseError> {
        self.map(
            |count| count.checked_mul(factor),
            |d| format!("multiplying {self} by {factor} overflows the '{d}' count"),
        )
    }

    fn map(
        &self,
        f: impl Fn(u64) -> Option<u64>,
        overflow_msg: impl Fn(Denomination) -> String,
    ) -> Result<Self, PurseError> {
        let apply = |count: u64, denomination: Denomination| {
            f(count).ok_or_else(|| PurseError::InvalidAmount(overflow_msg(denomination)))
        };
        Ok(Self::from_counts(
            apply(self.high, Denomination::High)?,
            apply(self.mid, Denomination::Mid)?,
            apply(self.low, Denomination::Low)?,
        ))
    }

    fn zip_with(
        &self,
        other: &Self,
        f: impl Fn(u64, u64) -> Option<u64>,
        overflow_msg: impl Fn(Denomination) -> String,
    ) -> Result<Self, PurseError> {
        let apply = |denomination: Denomination| {
            f(self.count_of(denomination), other.count_of(denomination))
                .ok_or_else(|| PurseError::InvalidAmount(overflow_msg(denomination)))
        };
        Ok(Self::from_counts(
            apply(Denomination::High)?,
            apply(Denomination::Mid)?,
            apply(Denomination::Low)?,
        ))
    }

    fn commit(
        &mut self,
        op: ArithmeticOp,
        result: Result<Self, PurseError>,
    ) -> Result<&mut Self, PurseError> {
        match result {
            Ok(updated) => {
                log::trace!("In-place {op} committed: {self:?} -> {updated:?}");
                *self = updated;
                Ok(self)
            }
            Err(e) => {
                log::debug!("In-place {op} rejected for {self:?}: {e}");
                Err(e)
            }
        }
    }

    // ---------------------------------------------------------------------------------------------
    // Comparison
    // ---------------------------------------------------------------------------------------------

    /// Compares the total of this purse against `other` using the relational operator `op`.
    ///
    /// The operand is resolved in order: a purse by its total, a number directly, and a
    /// three-element sequence as `(high, mid, low)` counts. Any other operand is never equal to
    /// a purse, so `Eq` yields `false` and `Ne` yields `true`.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::NotComparable`] if `op` is an ordering operator and `other` cannot
    /// be resolved to a total.
    pub fn compare<'a>(
        &self,
        op: ComparisonOp,
        other: impl Into<Comparand<'a>>,
    ) -> Result<bool, PurseError> {
        let other = other.into();
        match other.resolve() {
            Some(target) => Ok(op.evaluate(self.cmp_target(target))),
            None if op.is_ordering() => Err(PurseError::NotComparable {
                op: op.symbol(),
                operand: other.type_name(),
            }),
            None => Ok(op == ComparisonOp::Ne),
        }
    }

    /// Returns whether the total of this purse equals `other`.
    #[must_use]
    pub fn is_eq<'a>(&self, other: impl Into<Comparand<'a>>) -> bool {
        matches!(self.compare(ComparisonOp::Eq, other), Ok(true))
    }

    /// Returns whether the total of this purse differs from `other`.
    #[must_use]
    pub fn is_ne<'a>(&self, other: impl Into<Comparand<'a>>) -> bool {
        matches!(self.compare(ComparisonOp::Ne, other), Ok(true))
    }

    /// Returns whether the total of this purse is less than `other`.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::NotComparable`] if `other` has no ordering with a purse.
    pub fn is_lt<'a>(&self, other: impl Into<Comparand<'a>>) -> Result<bool, PurseError> {
        self.compare(ComparisonOp::Lt, other)
    }

    /// Returns whether the total of this purse is less than or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::NotComparable`] if `other` has no ordering with a purse.
    pub fn is_le<'a>(&self, other: impl Into<Comparand<'a>>) -> Result<bool, PurseError> {
        self.compare(ComparisonOp::Le, other)
    }

    /// Returns whether the total of this purse is greater than `other`.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::NotComparable`] if `other` has no ordering with a purse.
    pub fn is_gt<'a>(&self, other: impl Into<Comparand<'a>>) -> Result<bool, PurseError> {
        self.compare(ComparisonOp::Gt, other)
    }

    /// Returns whether the total of this purse is greater than or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::NotComparable`] if `other` has no ordering with a purse.
    pub fn is_ge<'a>(&self, other: impl Into<Comparand<'a>>) -> Result<bool, PurseError> {
        self.compare(ComparisonOp::Ge, other)
    }

    fn cmp_target(&self, target: Target) -> Option<Ordering> {
        match target {
            // Totals are bounded by 523 * u64::MAX so always fit in an i128
            Target::Exact(value) => Some((self.total() as i128).cmp(&value)),
            Target::Float(value) => cmp_total_f64(self.total() as i128, value),
        }
    }

    // ---------------------------------------------------------------------------------------------
    // Indexing view
    // ---------------------------------------------------------------------------------------------

    /// Returns the full indexing view: one tag per coin, highest denomination first.
    #[must_use]
    pub fn tags(&self) -> String {
        let mut tags = String::with_capacity(usize::try_from(self.count()).unwrap_or(0));
        for (denomination, count) in [
            (Denomination::High, self.high),
            (Denomination::Mid, self.mid),
            (Denomination::Low, self.low),
        ] {
            tags.extend(std::iter::repeat_n(denomination.tag(), count as usize));
        }
        tags
    }

    /// Returns the denomination of the coin at `index` in the indexing view.
    ///
    /// Negative indices count back from the end.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::IndexOutOfRange`] if `index` falls outside the view.
    pub fn index_at(&self, index: isize) -> Result<Denomination, PurseError> {
        let len = self.count();
        let requested = index as i128;
        let position = if requested < 0 {
            requested + len as i128
        } else {
            requested
        };

        if position < 0 || position as u128 >= len {
            return Err(PurseError::IndexOutOfRange {
                index: requested,
                len,
            });
        }
        Ok(self.denomination_at(position as u128))
    }

    /// Returns the tags selected by `key` from the indexing view.
    ///
    /// Bounds are clamped to the view and the step may be negative.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidKey`] if the step is zero.
    pub fn slice(&self, key: impl Into<SliceKey>) -> Result<String, PurseError> {
        let key = key.into();
        let (start, step, selected) = key
            .indices(self.count())
            .ok_or_else(|| PurseError::InvalidKey("slice step cannot be zero".to_string()))?;

        let mut position = start;
        let mut tags = String::new();
        for _ in 0..selected {
            tags.push(self.denomination_at(position as u128).tag());
            position += step;
        }
        Ok(tags)
    }

    /// Reads the indexing view at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PurseError::InvalidKey`] if `key` is neither a position nor a slice, or any
    /// error of [`index_at`](Self::index_at) and [`slice`](Self::slice).
    pub fn get(&self, key: &IndexKey<'_>) -> Result<CoinView, PurseError> {
        match *key {
            IndexKey::Position(index) => self.index_at(index).map(CoinView::Coin),
            IndexKey::Slice(slice) => self.slice(slice).map(CoinView::Coins),
            IndexKey::Unrecognized(name) => Err(PurseError::InvalidKey(format!(
                "indices must be integers or slices, not {name}"
            ))),
        }
    }

    /// Rejects assignment through the indexing view, which is read-only.
    ///
    /// # Errors
    ///
    /// Always returns [`PurseError::UnsupportedOperation`].
    pub fn set_item(&mut self, key: &IndexKey<'_>, value: char) -> Result<(), PurseError> {
        Err(PurseError::UnsupportedOperation(format!(
            "item assignment not supported (key {key:?}, value {value:?})"
        )))
    }

    /// Rejects deletion through the indexing view, which is read-only.
    ///
    /// # Errors
    ///
    /// Always returns [`PurseError::UnsupportedOperation`].
    pub fn delete_item(&mut self, key: &IndexKey<'_>) -> Result<(), PurseError> {
        Err(PurseError::UnsupportedOperation(format!(
            "item deletion not supported (key {key:?})"
        )))
    }

    fn denomination_at(&self, position: u128) -> Denomination {
        let high = u128::from(self.high);
        if position < high {
            Denomination::High
        } else if position < high + u128::from(self.mid) {
            Denomination::Mid
        } else {
            Denomination::Low
        }
    }
}

fn check_count(value: i64, denomination: Denomination) -> Result<u64, PurseError> {
    check_non_negative_i64(value, denomination.as_ref()).map_err(|e| PurseError::invalid_amount(&e))
}

fn checked_pow(base: u64, exponent: u64) -> Option<u64> {
    match (base, u32::try_from(exponent)) {
        (_, Ok(exponent)) => base.checked_pow(exponent),
        (0 | 1, Err(_)) => Some(base),
        (_, Err(_)) => None,
    }
}

impl TryFrom<(i64, i64, i64)> for CoinPurse {
    type Error = PurseError;

    fn try_from((high, mid, low): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::new(high, mid, low)
    }
}

impl From<CoinPurse> for u128 {
    fn from(value: CoinPurse) -> Self {
        value.total()
    }
}

impl From<CoinPurse> for f64 {
    fn from(value: CoinPurse) -> Self {
        value.as_f64()
    }
}

impl PartialEq for CoinPurse {
    fn eq(&self, other: &Self) -> bool {
        self.total() == other.total()
    }
}

impl Eq for CoinPurse {}

impl Hash for CoinPurse {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total().hash(state);
    }
}

impl PartialOrd for CoinPurse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CoinPurse {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total().cmp(&other.total())
    }
}

macro_rules! impl_cmp_number {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for CoinPurse {
                fn eq(&self, other: &$t) -> bool {
                    self.is_eq(*other)
                }
            }

            impl PartialOrd<$t> for CoinPurse {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Comparand::from(*other)
                        .resolve()
                        .and_then(|target| self.cmp_target(target))
                }
            }
        )*
    };
}

impl_cmp_number!(i64, u64, i128, u128, f64);

impl PartialEq<(i64, i64, i64)> for CoinPurse {
    fn eq(&self, other: &(i64, i64, i64)) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<(i64, i64, i64)> for CoinPurse {
    fn partial_cmp(&self, (high, mid, low): &(i64, i64, i64)) -> Option<Ordering> {
        let value = i128::from(*high) * i128::from(Denomination::High.value())
            + i128::from(*mid) * i128::from(Denomination::Mid.value())
            + i128::from(*low);
        self.cmp_target(Target::Exact(value))
    }
}

impl Add for CoinPurse {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if any resulting count overflows.
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).unwrap_or_else(|e| panic!("{FAILED}: {e}"))
    }
}

impl Sub for CoinPurse {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` holds more coins of any denomination than `self`.
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).unwrap_or_else(|e| panic!("{FAILED}: {e}"))
    }
}

impl Mul<u64> for CoinPurse {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if any resulting count overflows.
    fn mul(self, rhs: u64) -> Self::Output {
        self.scale_unsigned(rhs).unwrap_or_else(|e| panic!("{FAILED}: {e}"))
    }
}

impl Mul<CoinPurse> for u64 {
    type Output = CoinPurse;

    /// # Panics
    ///
    /// Panics if any resulting count overflows.
    fn mul(self, rhs: CoinPurse) -> Self::Output {
        rhs * self
    }
}

impl AddAssign for CoinPurse {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for CoinPurse {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<u64> for CoinPurse {
    fn mul_assign(&mut self, rhs: u64) {
        *self = *self * rhs;
    }
}

impl Debug for CoinPurse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(high={}, mid={}, low={})",
            stringify!(CoinPurse),
            self.high,
            self.mid,
            self.low
        )
    }
}

impl Display for CoinPurse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} high, {} mid, {} low",
            self.high.separate_with_commas(),
            self.mid.separate_with_commas(),
            self.low.separate_with_commas()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;
    use crate::types::stubs::*;

    #[rstest]
    fn test_new(purse: CoinPurse) {
        assert_eq!(purse.counts(), (2, 3, 4));
        assert_eq!(purse.high(), 2);
        assert_eq!(purse.mid(), 3);
        assert_eq!(purse.low(), 4);
        assert_eq!(CoinPurse::new(2, 3, 4).unwrap().counts(), purse.counts());
    }

    #[rstest]
    #[case(-1, 0, 0, "'high'")]
    #[case(0, -5, 0, "'mid'")]
    #[case(0, 0, i64::MIN, "'low'")]
    fn test_new_with_negative_count(
        #[case] high: i64,
        #[case] mid: i64,
        #[case] low: i64,
        #[case] field: &str,
    ) {
        let err = CoinPurse::new(high, mid, low).unwrap_err();
        assert!(matches!(err, PurseError::InvalidAmount(_)));
        assert!(err.to_string().contains(field), "{err}");
    }

    #[rstest]
    fn test_try_from_tuple() {
        let purse = CoinPurse::try_from((1, 2, 3)).unwrap();
        assert_eq!(purse.counts(), (1, 2, 3));
        assert!(CoinPurse::try_from((1, -2, 3)).is_err());
    }

    #[rstest]
    fn test_from_f64_counts() {
        let purse = CoinPurse::from_f64_counts(2.0, 3.0, 4.0).unwrap();
        assert_eq!(purse.counts(), (2, 3, 4));

        let err = CoinPurse::from_f64_counts(2.0, 1.5, 4.0).unwrap_err();
        assert!(matches!(err, PurseError::InvalidAmount(_)));
        assert!(err.to_string().contains("'mid'"));
        assert!(CoinPurse::from_f64_counts(-1.0, 0.0, 0.0).is_err());
        assert!(CoinPurse::from_f64_counts(0.0, 0.0, f64::NAN).is_err());
    }

    #[rstest]
    fn test_setters(mut purse: CoinPurse) {
        purse.set_high(10).unwrap();
        purse.set_mid(0).unwrap();
        purse.set_low(7).unwrap();
        assert_eq!(purse.counts(), (10, 0, 7));
    }

    #[rstest]
    #[case(Denomination::High)]
    #[case(Denomination::Mid)]
    #[case(Denomination::Low)]
    fn test_set_negative_leaves_purse_unchanged(
        mut purse: CoinPurse,
        #[case] denomination: Denomination,
    ) {
        let err = purse.set(denomination, -3).unwrap_err();
        assert!(matches!(err, PurseError::InvalidAmount(_)));
        assert!(err.to_string().contains(denomination.as_ref()));
        assert_eq!(purse.counts(), (2, 3, 4));
    }

    #[rstest]
    fn test_derived_quantities(purse: CoinPurse) {
        assert_eq!(purse.total(), 2 * 493 + 3 * 29 + 4);
        assert_eq!(purse.total(), 1077);
        assert_eq!(purse.count(), 9);
        assert_eq!(purse.len(), 9);
        assert_eq!(purse.count_of(Denomination::Mid), 3);
    }

    #[rstest]
    fn test_total_does_not_overflow_at_maximum_counts() {
        let purse = CoinPurse::from_counts(u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(purse.total(), u128::from(u64::MAX) * 523);
        assert_eq!(purse.count(), u128::from(u64::MAX) * 3);
    }

    #[rstest]
    #[case(WeightUnit::Grams, 116.226)]
    #[case(WeightUnit::Kilograms, 0.116_226)]
    #[case(WeightUnit::Ounces, 116.226 * 0.035_273_962)]
    #[case(WeightUnit::Pounds, 116.226 * 0.002_204_622_6)]
    fn test_weight(purse: CoinPurse, #[case] unit: WeightUnit, #[case] expected: f64) {
        assert!((purse.weight(unit) - expected).abs() < 1e-9);
    }

    #[rstest]
    fn test_weight_grams_formula(purse: CoinPurse) {
        let expected = 2.0 * 31.103 + 3.0 * 11.34 + 4.0 * 5.0;
        assert!((purse.weight(WeightUnit::default()) - expected).abs() < 1e-9);
    }

    #[rstest]
    fn test_weight_by_name(purse: CoinPurse) {
        let pounds = purse.weight_by_name("pounds").unwrap();
        assert!((pounds - purse.weight(WeightUnit::Pounds)).abs() < 1e-12);

        let err = purse.weight_by_name("furlongs").unwrap_err();
        assert_eq!(err, PurseError::InvalidUnit("furlongs".to_string()));
    }

    #[rstest]
    fn test_truthiness(purse_empty: CoinPurse) {
        assert!(!purse_empty.is_non_zero());
        assert!(purse_empty.is_empty());
        assert!(CoinPurse::from_counts(0, 0, 1).is_non_zero());
        assert!(CoinPurse::from_counts(1, 0, 0).is_non_zero());
        assert_eq!(CoinPurse::default().counts(), (0, 0, 0));
    }

    #[rstest]
    fn test_numeric_coercions(purse: CoinPurse) {
        assert_eq!(purse.as_int(), 1077);
        assert_eq!(purse.as_f64(), 1077.0);
        assert_eq!(u128::from(purse), 1077);
        assert_eq!(f64::from(purse), 1077.0);
    }

    #[rstest]
    fn test_checked_add(purse: CoinPurse) {
        let other = CoinPurse::from_counts(1, 0, 10);
        let result = purse.checked_add(&other).unwrap();
        assert_eq!(result.counts(), (3, 3, 14));
        assert_eq!(result.total(), purse.total() + other.total());
    }

    #[rstest]
    fn test_checked_add_overflow(purse_one_high: CoinPurse) {
        let full = CoinPurse::from_counts(u64::MAX, 0, 0);
        let err = full.checked_add(&purse_one_high).unwrap_err();
        assert!(matches!(err, PurseError::InvalidAmount(_)));
        assert!(err.to_string().contains("'high'"));
    }

    #[rstest]
    fn test_checked_sub(purse: CoinPurse) {
        let other = CoinPurse::from_counts(1, 3, 0);
        let result = purse.checked_sub(&other).unwrap();
        assert_eq!(result.counts(), (1, 0, 4));
        assert_eq!(result.checked_add(&other).unwrap().counts(), purse.counts());
    }

    #[rstest]
    #[case(3, 0, 0)]
    #[case(0, 4, 0)]
    #[case(0, 0, 5)]
    #[case(3, 4, 5)]
    fn test_checked_sub_negative_result(
        purse: CoinPurse,
        #[case] high: u64,
        #[case] mid: u64,
        #[case] low: u64,
    ) {
        let other = CoinPurse::from_counts(high, mid, low);
        let err = purse.checked_sub(&other).unwrap_err();
        assert!(matches!(err, PurseError::NegativeResult(_)));
    }

    #[rstest]
    fn test_checked_sub_does_not_make_change() {
        // A larger total is not enough, each denomination must cover its own count
        let rich = CoinPurse::from_counts(5, 0, 0);
        let err = rich.checked_sub(&CoinPurse::from_counts(0, 1, 0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "negative result: subtracting 0 high, 1 mid, 0 low from 5 high, 0 mid, 0 low \
             would result in negative quantity of coins"
        );
    }

    #[rstest]
    fn test_scale_is_commutative(purse: CoinPurse) {
        assert_eq!(purse.scale(3).unwrap().counts(), (6, 9, 12));
        assert_eq!((purse * 3).counts(), (3 * purse).counts());
        assert_eq!((purse * 3).counts(), purse.scale(3).unwrap().counts());
    }

    #[rstest]
    fn test_scale_by_zero_is_empty(purse: CoinPurse) {
        assert!(purse.scale(0).unwrap().is_empty());
    }

    #[rstest]
    fn test_scale_negative(purse: CoinPurse) {
        let err = purse.scale(-1).unwrap_err();
        assert!(matches!(err, PurseError::InvalidAmount(_)));
        assert!(err.to_string().contains("negative integer -1"));
    }

    #[rstest]
    fn test_scale_overflow() {
        let purse = CoinPurse::from_counts(0, u64::MAX / 2 + 1, 0);
        let err = purse.scale(2).unwrap_err();
        assert!(err.to_string().contains("'mid'"));
    }

    #[rstest]
    fn test_pow(purse: CoinPurse) {
        assert_eq!(purse.pow(2).unwrap().counts(), (4, 9, 16));
        assert_eq!(purse.pow(1).unwrap().counts(), purse.counts());
    }

    #[rstest]
    fn test_pow_zero_yields_one_coin_of_each_denomination(purse_empty: CoinPurse) {
        // Exponentiation is field-wise, so even an empty purse becomes 1 high, 1 mid, 1 low
        let result = purse_empty.pow(0).unwrap();
        assert_eq!(result.counts(), (1, 1, 1));
        assert_eq!(result.total(), 493 + 29 + 1);
    }

    #[rstest]
    fn test_pow_negative(purse: CoinPurse) {
        let err = purse.pow(-1).unwrap_err();
        assert!(matches!(err, PurseError::InvalidAmount(_)));
    }

    #[rstest]
    fn test_pow_overflow() {
        let err = CoinPurse::from_counts(0, 0, u64::MAX).pow(2).unwrap_err();
        assert!(err.to_string().contains("'low'"));
    }

    #[rstest]
    fn test_pow_huge_exponent_on_zero_and_one() {
        let purse = CoinPurse::from_counts(1, 0, 1);
        assert_eq!(purse.pow(i64::MAX).unwrap().counts(), (1, 0, 1));
        assert!(CoinPurse::from_counts(2, 0, 0).pow(i64::MAX).is_err());
    }

    #[rstest]
    fn test_in_place_operations_chain(mut purse: CoinPurse) {
        let other = CoinPurse::from_counts(1, 1, 1);
        purse
            .add_in_place(&other)
            .unwrap()
            .scale_in_place(2)
            .unwrap()
            .sub_in_place(&other)
            .unwrap();
        assert_eq!(purse.counts(), (5, 7, 9));

        purse.pow_in_place(2).unwrap();
        assert_eq!(purse.counts(), (25, 49, 81));
    }

    #[rstest]
    fn test_in_place_failures_leave_purse_unchanged(mut purse: CoinPurse) {
        let before = purse.counts();

        assert!(purse.sub_in_place(&CoinPurse::from_counts(0, 0, 5)).is_err());
        assert!(purse.scale_in_place(-2).is_err());
        assert!(purse.pow_in_place(-1).is_err());
        assert!(
            purse
                .add_in_place(&CoinPurse::from_counts(0, u64::MAX, 0))
                .is_err()
        );
        assert_eq!(purse.counts(), before);
    }

    #[rstest]
    fn test_operator_traits(purse: CoinPurse) {
        let other = CoinPurse::from_counts(1, 1, 1);
        assert_eq!((purse + other).counts(), (3, 4, 5));
        assert_eq!((purse - other).counts(), (1, 2, 3));

        let mut value = purse;
        value += other;
        value *= 2;
        value -= other;
        assert_eq!(value.counts(), (5, 7, 9));
    }

    #[rstest]
    #[should_panic(expected = "would result in negative quantity of coins")]
    fn test_sub_operator_panics_on_negative_result(purse: CoinPurse) {
        let _ = purse - CoinPurse::from_counts(0, 0, 5);
    }

    #[rstest]
    fn test_apply(purse: CoinPurse, purse_one_high: CoinPurse) {
        let sum = purse.apply(ArithmeticOp::Add, Operand::from(&purse_one_high)).unwrap();
        assert_eq!(sum.counts(), (3, 3, 4));
        let diff = purse.apply(ArithmeticOp::Sub, Operand::from(&purse_one_high)).unwrap();
        assert_eq!(diff.counts(), (1, 3, 4));
        let product = purse.apply(ArithmeticOp::Mul, Operand::from(2_i64)).unwrap();
        assert_eq!(product.counts(), (4, 6, 8));
        let power = purse.apply(ArithmeticOp::Pow, Operand::from(0_i64)).unwrap();
        assert_eq!(power.counts(), (1, 1, 1));
    }

    #[rstest]
    #[case(ArithmeticOp::Add, Operand::Integer(1), "+", "i64")]
    #[case(ArithmeticOp::Sub, Operand::Float(1.0), "-", "f64")]
    #[case(ArithmeticOp::Mul, Operand::Float(2.0), "*", "f64")]
    #[case(ArithmeticOp::Pow, Operand::Unrecognized("String"), "**", "String")]
    fn test_apply_unsupported_operand(
        purse: CoinPurse,
        #[case] op: ArithmeticOp,
        #[case] operand: Operand<'static>,
        #[case] symbol: &'static str,
        #[case] type_name: &str,
    ) {
        let err = purse.apply(op, operand).unwrap_err();
        assert_eq!(
            err,
            PurseError::UnsupportedOperand {
                op: symbol,
                operand: type_name.to_string(),
            }
        );
    }

    #[rstest]
    fn test_apply_purse_to_scaling_is_unsupported(purse: CoinPurse) {
        let err = purse.apply(ArithmeticOp::Mul, Operand::from(&purse)).unwrap_err();
        assert!(matches!(err, PurseError::UnsupportedOperand { op: "*", .. }));
    }

    #[rstest]
    fn test_equality_by_total(purse_one_high: CoinPurse, purse_seventeen_mid: CoinPurse) {
        assert_eq!(purse_one_high, purse_seventeen_mid);
        assert_eq!(purse_one_high, 493_i64);
        assert_eq!(purse_one_high, 493_u64);
        assert_eq!(purse_one_high, 493.0_f64);
        assert_eq!(purse_one_high, (0_i64, 17, 0));
        assert_ne!(purse_one_high, (0_i64, 17, 1));
        assert_ne!(purse_one_high, 492_i64);
    }

    #[rstest]
    fn test_hash_consistent_with_equality(
        purse_one_high: CoinPurse,
        purse_seventeen_mid: CoinPurse,
    ) {
        let set: HashSet<CoinPurse> = [purse_one_high, purse_seventeen_mid].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_ordering(purse: CoinPurse, purse_one_high: CoinPurse, purse_empty: CoinPurse) {
        assert!(purse > purse_one_high);
        assert!(purse_empty < purse_one_high);
        assert!(purse > 1076_u64);
        assert!(purse < 1078_i64);
        assert!(purse >= 1077.0_f64);
        assert!(purse > (2_i64, 3, 3));
        assert!(purse < (2_i64, 4, 0));
        assert!(purse > -1_i64);

        let mut purses = vec![purse, purse_empty, purse_one_high];
        purses.sort();
        let totals: Vec<u128> = purses.iter().map(CoinPurse::total).collect();
        assert_eq!(totals, vec![0, 493, 1077]);
    }

    #[rstest]
    #[case(ComparisonOp::Eq, false)]
    #[case(ComparisonOp::Ne, true)]
    #[case(ComparisonOp::Lt, false)]
    #[case(ComparisonOp::Le, false)]
    #[case(ComparisonOp::Gt, true)]
    #[case(ComparisonOp::Ge, true)]
    fn test_compare_against_each_comparand(
        purse: CoinPurse,
        purse_one_high: CoinPurse,
        #[case] op: ComparisonOp,
        #[case] expected: bool,
    ) {
        let counts = [1.0, 0.0, 0.0];
        assert_eq!(purse.compare(op, &purse_one_high).unwrap(), expected);
        assert_eq!(purse.compare(op, 493_i64).unwrap(), expected);
        assert_eq!(purse.compare(op, 493.0_f64).unwrap(), expected);
        assert_eq!(purse.compare(op, &counts).unwrap(), expected);
    }

    #[rstest]
    fn test_compare_triple_equivalence(purse_one_high: CoinPurse) {
        let counts = [0.0, 17.0, 0.0];
        assert!(purse_one_high.is_eq(&counts));
        assert!(purse_one_high.is_eq(493_u64));
        assert!(!purse_one_high.is_ne(493_u64));
        assert!(purse_one_high.is_le(&counts).unwrap());
        assert!(purse_one_high.is_ge(&counts).unwrap());
        assert!(!purse_one_high.is_lt(&counts).unwrap());
        assert!(!purse_one_high.is_gt(&counts).unwrap());
    }

    #[rstest]
    fn test_compare_against_nan(purse: CoinPurse) {
        assert!(!purse.is_eq(f64::NAN));
        assert!(purse.is_ne(f64::NAN));
        assert!(!purse.is_lt(f64::NAN).unwrap());
        assert!(!purse.is_ge(f64::NAN).unwrap());
        assert_ne!(purse, f64::NAN);
    }

    #[rstest]
    fn test_compare_float_and_triple_beyond_f64_precision() {
        // 2^53 + 1 is not representable as an f64
        let purse = CoinPurse::from_counts(0, 0, (1 << 53) + 1);
        let float = 9_007_199_254_740_992.0_f64;
        let counts = [0.0, 0.0, float];

        assert!(!purse.is_eq(float));
        assert!(purse.is_ne(float));
        assert!(purse.is_gt(float).unwrap());
        assert!(!purse.is_le(float).unwrap());
        assert!(!purse.is_eq(&counts));
        assert!(purse.is_gt(&counts).unwrap());
        assert_ne!(purse, float);
        assert!(purse > float);
    }

    #[rstest]
    fn test_compare_fractional_float(purse_one_high: CoinPurse) {
        assert!(purse_one_high.is_lt(493.5).unwrap());
        assert!(purse_one_high.is_gt(492.5).unwrap());
        assert!(!purse_one_high.is_eq(493.5));
        assert!(purse_one_high.is_lt(f64::INFINITY).unwrap());
    }

    #[rstest]
    fn test_compare_with_total_of_another_purse(purse: CoinPurse, purse_one_high: CoinPurse) {
        assert!(purse.is_eq(purse.total()));
        assert!(purse_one_high.is_lt(purse.total()).unwrap());
        assert_eq!(purse, purse.as_int());
    }

    #[rstest]
    #[case(Comparand::Unrecognized("String"))]
    #[case(Comparand::Sequence(&[1.0, 2.0]))]
    fn test_compare_unrecognized_equality_falls_back(
        purse: CoinPurse,
        #[case] other: Comparand<'static>,
    ) {
        assert!(!purse.compare(ComparisonOp::Eq, other).unwrap());
        assert!(purse.compare(ComparisonOp::Ne, other).unwrap());
        assert!(!purse.is_eq(other));
        assert!(purse.is_ne(other));
    }

    #[rstest]
    #[case(ComparisonOp::Lt, "<")]
    #[case(ComparisonOp::Le, "<=")]
    #[case(ComparisonOp::Gt, ">")]
    #[case(ComparisonOp::Ge, ">=")]
    fn test_compare_unrecognized_ordering_fails(
        purse: CoinPurse,
        #[case] op: ComparisonOp,
        #[case] symbol: &str,
    ) {
        let err = purse
            .compare(op, Comparand::Unrecognized("String"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("'{symbol}' not supported between instances of 'CoinPurse' and 'String'")
        );
    }

    #[rstest]
    fn test_tags() {
        assert_eq!(CoinPurse::from_counts(3, 2, 3).tags(), "HHHMMLLL");
        assert_eq!(CoinPurse::ZERO.tags(), "");
    }

    #[rstest]
    #[case(0, Denomination::High)]
    #[case(1, Denomination::High)]
    #[case(2, Denomination::Mid)]
    #[case(-1, Denomination::Mid)]
    #[case(-3, Denomination::High)]
    fn test_index_at(#[case] index: isize, #[case] expected: Denomination) {
        let purse = CoinPurse::from_counts(2, 1, 0);
        assert_eq!(purse.len(), 3);
        assert_eq!(purse.index_at(index).unwrap(), expected);
    }

    #[rstest]
    #[case(3)]
    #[case(-4)]
    #[case(isize::MAX)]
    #[case(isize::MIN)]
    fn test_index_at_out_of_range(#[case] index: isize) {
        let purse = CoinPurse::from_counts(2, 1, 0);
        let err = purse.index_at(index).unwrap_err();
        assert_eq!(
            err,
            PurseError::IndexOutOfRange {
                index: index as i128,
                len: 3,
            }
        );
    }

    #[rstest]
    fn test_index_at_empty(purse_empty: CoinPurse) {
        assert!(purse_empty.index_at(0).is_err());
        assert!(purse_empty.index_at(-1).is_err());
    }

    #[rstest]
    #[case(SliceKey::from(..), "HHHMMLLL")]
    #[case(SliceKey::from(2..5), "HMM")]
    #[case(SliceKey::from(5..100), "LLL")]
    #[case(SliceKey::from(-100..1), "H")]
    #[case(SliceKey::from(..-3), "HHHMM")]
    #[case(SliceKey::from(4..2), "")]
    #[case(SliceKey::from(..).with_step(2), "HHML")]
    #[case(SliceKey::from(..).with_step(-1), "LLLMMHHH")]
    #[case(SliceKey::new(Some(4), None, Some(-2)), "MHH")]
    fn test_slice(#[case] key: SliceKey, #[case] expected: &str) {
        let purse = CoinPurse::from_counts(3, 2, 3);
        assert_eq!(purse.slice(key).unwrap(), expected);
    }

    #[rstest]
    fn test_slice_matches_tags_for_large_purse() {
        let purse = CoinPurse::from_counts(40, 25, 60);
        let tags = purse.tags();
        assert_eq!(purse.slice(..).unwrap(), tags);
        assert_eq!(purse.slice(30_isize..70).unwrap(), tags[30..70]);
    }

    #[rstest]
    fn test_slice_zero_step(purse: CoinPurse) {
        let err = purse.slice(SliceKey::from(..).with_step(0)).unwrap_err();
        assert!(matches!(err, PurseError::InvalidKey(_)));
    }

    #[rstest]
    fn test_get(purse: CoinPurse) {
        assert_eq!(
            purse.get(&IndexKey::from(0)).unwrap(),
            CoinView::Coin(Denomination::High)
        );
        assert_eq!(
            purse.get(&IndexKey::from(SliceKey::from(1..4))).unwrap(),
            CoinView::Coins("HMM".to_string())
        );

        let err = purse.get(&IndexKey::Unrecognized("f64")).unwrap_err();
        assert_eq!(
            err,
            PurseError::InvalidKey("indices must be integers or slices, not f64".to_string())
        );
    }

    #[rstest]
    #[case(IndexKey::Position(0))]
    #[case(IndexKey::Slice(SliceKey::from(..)))]
    #[case(IndexKey::Unrecognized("String"))]
    fn test_view_is_read_only(mut purse: CoinPurse, #[case] key: IndexKey<'static>) {
        let err = purse.set_item(&key, 'H').unwrap_err();
        assert!(matches!(err, PurseError::UnsupportedOperation(_)));
        let err = purse.delete_item(&key).unwrap_err();
        assert!(matches!(err, PurseError::UnsupportedOperation(_)));
        assert_eq!(purse.counts(), (2, 3, 4));
    }

    #[rstest]
    fn test_display_and_debug(purse: CoinPurse) {
        assert_eq!(purse.to_string(), "2 high, 3 mid, 4 low");
        assert_eq!(format!("{purse:?}"), "CoinPurse(high=2, mid=3, low=4)");
        assert_eq!(
            CoinPurse::from_counts(1_000, 0, 12_345).to_string(),
            "1,000 high, 0 mid, 12,345 low"
        );
    }
}
