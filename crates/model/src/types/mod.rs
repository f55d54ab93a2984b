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

//! Value types for the coin purse domain model.
//!
//! [`CoinPurse`] is a value type over three non-negative coin counts. It behaves as a physical
//! collection of coins for arithmetic and as a monetary amount for comparison.
//!
//! # Arithmetic operations
//!
//! | Operation               | Result      | Notes                                          |
//! |-------------------------|-------------|------------------------------------------------|
//! | `CoinPurse + CoinPurse` | `CoinPurse` | Field-wise sum.                                |
//! | `CoinPurse - CoinPurse` | `CoinPurse` | Panics if any field of the result is negative. |
//! | `CoinPurse * u64`       | `CoinPurse` | Field-wise product, commutative.               |
//! | `CoinPurse::pow(n)`     | `CoinPurse` | Field-wise exponentiation.                     |
//!
//! The operator traits panic on failure; every operation also has a named, fallible variant
//! (`checked_add`, `checked_sub`, `scale`, `pow`) and an in-place variant that leaves the purse
//! unchanged when it fails.
//!
//! # Comparison
//!
//! Purses compare by [`CoinPurse::total`] against other purses, plain numbers and
//! `(high, mid, low)` count triples. See [`Comparand`] for the resolution order.

pub mod operand;
pub mod purse;
pub mod view;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use operand::{Comparand, Operand};
pub use purse::CoinPurse;
pub use view::{CoinView, IndexKey, SliceKey};
