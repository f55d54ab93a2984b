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

//! Fixtures for purses used across tests.

use rstest::fixture;

use super::CoinPurse;
use crate::stubs::TestDefault;

impl TestDefault for CoinPurse {
    /// Creates a new test default [`CoinPurse`] instance holding 2 high, 3 mid and 4 low coins.
    fn test_default() -> Self {
        Self::from_counts(2, 3, 4)
    }
}

#[fixture]
pub fn purse() -> CoinPurse {
    CoinPurse::test_default()
}

#[fixture]
pub fn purse_empty() -> CoinPurse {
    CoinPurse::ZERO
}

#[fixture]
pub fn purse_one_high() -> CoinPurse {
    CoinPurse::from_counts(1, 0, 0)
}

#[fixture]
pub fn purse_seventeen_mid() -> CoinPurse {
    CoinPurse::from_counts(0, 17, 0)
}
