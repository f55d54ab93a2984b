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

//! A three-denomination coin purse value type.
//!
//! The `coinpurse-model` crate provides [`CoinPurse`](types::CoinPurse), which holds
//! non-negative counts of high, mid and low value coins (1 high = 17 mid = 493 low) and supports
//! arithmetic, comparison against purses, numbers and count triples, unit-aware weights, and a
//! read-only indexing view with one tag per coin.
//!
//! # Feature flags
//!
//! - `stubs`: Enables type stubs (`rstest` fixtures) for use in testing scenarios.

pub mod enums;
pub mod error;
pub mod types;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use enums::{ArithmeticOp, ComparisonOp, Denomination, WeightUnit};
pub use error::PurseError;
pub use types::CoinPurse;
