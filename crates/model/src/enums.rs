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

//! Enumerations for the coin purse domain model.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The number of lowest-denomination units in one mid-denomination coin.
pub const LOW_PER_MID: u64 = 29;

/// The number of mid-denomination coins in one high-denomination coin.
pub const MID_PER_HIGH: u64 = 17;

/// The number of lowest-denomination units in one high-denomination coin.
pub const LOW_PER_HIGH: u64 = MID_PER_HIGH * LOW_PER_MID;

/// One of the three fixed coin denominations held by a purse.
///
/// Variants are declared from highest to lowest value, which is also the order the
/// coins appear in a purse's indexing view.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "snake_case")]
pub enum Denomination {
    /// The highest value coin.
    High = 1,
    /// The middle value coin.
    Mid = 2,
    /// The lowest value coin, the unit all totals are expressed in.
    Low = 3,
}

impl Denomination {
    /// Returns the value of one coin expressed in lowest-denomination units.
    #[must_use]
    pub const fn value(self) -> u64 {
        match self {
            Self::High => LOW_PER_HIGH,
            Self::Mid => LOW_PER_MID,
            Self::Low => 1,
        }
    }

    /// Returns the physical weight of one coin in grams.
    #[must_use]
    pub const fn grams(self) -> f64 {
        match self {
            Self::High => 31.103,
            Self::Mid => 11.34,
            Self::Low => 5.0,
        }
    }

    /// Returns the single-character tag used for this coin in a purse's indexing view.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::High => 'H',
            Self::Mid => 'M',
            Self::Low => 'L',
        }
    }
}

/// The unit a purse weight is reported in.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum WeightUnit {
    #[default]
    Grams = 1,
    Kilograms = 2,
    Ounces = 3,
    Pounds = 4,
}

impl WeightUnit {
    /// Returns the multiplier converting a weight in grams into this unit.
    #[must_use]
    pub const fn per_gram(self) -> f64 {
        match self {
            Self::Grams => 1.0,
            Self::Kilograms => 0.001,
            Self::Ounces => 0.035_273_962,
            Self::Pounds => 0.002_204_622_6,
        }
    }
}

/// A relational operator applied by [`CoinPurse::compare`](crate::types::CoinPurse::compare).
#[repr(C)]
#[derive(Copy, Clone, Debug, Display, Hash, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ComparisonOp {
    /// Equal.
    Eq = 1,
    /// Not equal.
    Ne = 2,
    /// Less than.
    Lt = 3,
    /// Less than or equal.
    Le = 4,
    /// Greater than.
    Gt = 5,
    /// Greater than or equal.
    Ge = 6,
}

impl ComparisonOp {
    /// Returns whether this operator orders its operands (as opposed to testing equality).
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        !matches!(self, Self::Eq | Self::Ne)
    }

    /// Returns the operator symbol, used when reporting operands that cannot be ordered.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }

    /// Applies the operator to the result of comparing the left operand to the right.
    ///
    /// A `None` ordering (e.g. against NaN) satisfies only [`ComparisonOp::Ne`].
    #[must_use]
    pub fn evaluate(self, ordering: Option<std::cmp::Ordering>) -> bool {
        use std::cmp::Ordering::{Equal, Greater, Less};

        match (self, ordering) {
            (Self::Ne, None) => true,
            (_, None) => false,
            (Self::Eq, Some(ord)) => ord == Equal,
            (Self::Ne, Some(ord)) => ord != Equal,
            (Self::Lt, Some(ord)) => ord == Less,
            (Self::Le, Some(ord)) => ord != Greater,
            (Self::Gt, Some(ord)) => ord == Greater,
            (Self::Ge, Some(ord)) => ord != Less,
        }
    }
}

/// An arithmetic operation applied by [`CoinPurse::apply`](crate::types::CoinPurse::apply).
#[repr(C)]
#[derive(Copy, Clone, Debug, Display, Hash, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ArithmeticOp {
    Add = 1,
    Sub = 2,
    Mul = 3,
    Pow = 4,
}

impl ArithmeticOp {
    /// Returns the operator symbol, used when reporting unsupported operands.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Pow => "**",
        }
    }
}
