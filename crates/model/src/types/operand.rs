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

//! Closed sets of right-hand operands accepted by a purse's dynamic entry points.
//!
//! [`Comparand`] feeds [`CoinPurse::compare`] and [`Operand`] feeds [`CoinPurse::apply`]. Both
//! carry an `Unrecognized` variant so callers holding heterogeneous input can forward a value
//! of any other type, named for error messages, and receive the defined fallback behavior
//! instead of a coercion.

use std::cmp::Ordering;

use crate::{
    enums::{LOW_PER_HIGH, LOW_PER_MID},
    types::CoinPurse,
};

/// A value a purse can be compared against.
///
/// Resolution follows variant order: another purse compares by total, a plain number compares
/// directly against the total, and a three-element sequence is read as `(high, mid, low)` counts
/// and converted to a total first. Anything else is unrecognized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Comparand<'a> {
    /// Another purse.
    Purse(&'a CoinPurse),
    /// An integer amount in lowest-denomination units.
    Integer(i128),
    /// A floating-point amount in lowest-denomination units.
    Float(f64),
    /// Counts in `(high, mid, low)` order; only three-element sequences are comparable.
    Sequence(&'a [f64]),
    /// A value of any other type, identified by its type name.
    Unrecognized(&'a str),
}

/// A resolved comparison target in lowest-denomination units.
///
/// Integer targets compare exactly. Float targets are compared against the exact integer total
/// without rounding the total to `f64`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Target {
    Exact(i128),
    Float(f64),
}

impl Comparand<'_> {
    /// Returns the type name reported when this comparand cannot be used.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Purse(_) => "CoinPurse".to_string(),
            Self::Integer(_) => "integer".to_string(),
            Self::Float(_) => "f64".to_string(),
            Self::Sequence(seq) => format!("[f64; {}]", seq.len()),
            Self::Unrecognized(name) => (*name).to_string(),
        }
    }

    /// Resolves the comparand to a total, or `None` when it is not comparable with a purse.
    pub(crate) fn resolve(&self) -> Option<Target> {
        match *self {
            Self::Purse(purse) => Some(Target::Exact(purse.total() as i128)),
            Self::Integer(value) => Some(Target::Exact(value)),
            Self::Float(value) => Some(Target::Float(value)),
            Self::Sequence(&[high, mid, low]) => match exact_triple(high, mid, low) {
                Some(total) => Some(Target::Exact(total)),
                None => Some(Target::Float(
                    high * LOW_PER_HIGH as f64 + mid * LOW_PER_MID as f64 + low,
                )),
            },
            Self::Sequence(_) | Self::Unrecognized(_) => None,
        }
    }
}

fn whole_to_i128(value: f64) -> Option<i128> {
    // 2^127 is the first f64 beyond the i128 range
    (value.is_finite() && value.fract() == 0.0 && value.abs() < 1.701_411_834_604_692_3e38)
        .then_some(value as i128)
}

/// Converts `(high, mid, low)` counts to a total without rounding, when all are whole numbers.
fn exact_triple(high: f64, mid: f64, low: f64) -> Option<i128> {
    whole_to_i128(high)?
        .checked_mul(i128::from(LOW_PER_HIGH))?
        .checked_add(whole_to_i128(mid)?.checked_mul(i128::from(LOW_PER_MID))?)?
        .checked_add(whole_to_i128(low)?)
}

/// Compares an exact integer `total` against a float without converting the total to `f64`.
///
/// Returns `None` only if `value` is NaN.
pub(crate) fn cmp_total_f64(total: i128, value: f64) -> Option<Ordering> {
    if value.is_nan() {
        return None;
    }
    if value.is_infinite() {
        return Some(if value > 0.0 { Ordering::Less } else { Ordering::Greater });
    }

    // Casts saturate, and totals are far inside the i128 range, so ordering is preserved
    let floor = value.floor();
    match total.cmp(&(floor as i128)) {
        Ordering::Equal if value != floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

impl<'a> From<&'a CoinPurse> for Comparand<'a> {
    fn from(value: &'a CoinPurse) -> Self {
        Self::Purse(value)
    }
}

impl From<i64> for Comparand<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u64> for Comparand<'_> {
    fn from(value: u64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u128> for Comparand<'_> {
    /// Values beyond `i128::MAX` saturate, which preserves their ordering against any total.
    fn from(value: u128) -> Self {
        Self::Integer(i128::try_from(value).unwrap_or(i128::MAX))
    }
}

impl From<i128> for Comparand<'_> {
    fn from(value: i128) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Comparand<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<'a> From<&'a [f64]> for Comparand<'a> {
    fn from(value: &'a [f64]) -> Self {
        Self::Sequence(value)
    }
}

impl<'a> From<&'a [f64; 3]> for Comparand<'a> {
    fn from(value: &'a [f64; 3]) -> Self {
        Self::Sequence(value.as_slice())
    }
}

/// A right-hand operand for a dynamically dispatched arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<'a> {
    /// Another purse, accepted by addition and subtraction.
    Purse(&'a CoinPurse),
    /// An integer, accepted by scaling and exponentiation.
    Integer(i64),
    /// A floating-point number, accepted by no operation.
    Float(f64),
    /// A value of any other type, identified by its type name.
    Unrecognized(&'a str),
}

impl Operand<'_> {
    /// Returns the type name reported when this operand is unsupported.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Purse(_) => "CoinPurse".to_string(),
            Self::Integer(_) => "i64".to_string(),
            Self::Float(_) => "f64".to_string(),
            Self::Unrecognized(name) => (*name).to_string(),
        }
    }
}

impl<'a> From<&'a CoinPurse> for Operand<'a> {
    fn from(value: &'a CoinPurse) -> Self {
        Self::Purse(value)
    }
}

impl From<i64> for Operand<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
