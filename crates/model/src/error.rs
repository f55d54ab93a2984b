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

//! The error type surfaced by every fallible coin purse operation.

use thiserror::Error;

/// An error raised when a coin purse operation is misused.
///
/// Every variant carries a message naming the offending value and, where applicable, the field
/// it was destined for. Failures are deterministic validation failures and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurseError {
    /// A field was set to, or an operation would produce, a non-integer or negative count.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// A weight was requested in an unrecognized unit.
    #[error(
        "invalid unit '{0}': unit argument must be \"grams\", \"kilograms\", \"ounces\", or \"pounds\""
    )]
    InvalidUnit(String),
    /// A subtraction would leave a negative number of coins in some field.
    #[error("negative result: {0}")]
    NegativeResult(String),
    /// The indexing view was keyed by something other than an integer position or a slice.
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// An integer position fell outside the indexing view.
    #[error("index {index} out of range for purse of {len} coins")]
    IndexOutOfRange { index: i128, len: u128 },
    /// A mutation was attempted through the read-only indexing view.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    /// An arithmetic operator was applied to an operand of an incompatible type.
    #[error("unsupported operand type(s) for {op}: 'CoinPurse' and '{operand}'")]
    UnsupportedOperand { op: &'static str, operand: String },
    /// An ordering operator was applied to an operand that has no ordering with a purse.
    #[error("'{op}' not supported between instances of 'CoinPurse' and '{operand}'")]
    NotComparable { op: &'static str, operand: String },
}

impl PurseError {
    /// Creates a [`PurseError::InvalidAmount`] from a failed correctness check.
    pub(crate) fn invalid_amount(err: &anyhow::Error) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}
