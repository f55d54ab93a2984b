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

//! Keys and results for the read-only indexing view of a purse.
//!
//! The view is a sequence with one single-character tag per physical coin, all high coins
//! first, then mid, then low. Integer positions follow the usual negative-from-the-end
//! convention and fail when out of range; slices clamp to the view bounds and may step in
//! either direction.

use std::{
    fmt::Display,
    ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo},
};

use crate::enums::Denomination;

/// A slice of the indexing view, with optional bounds and step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SliceKey {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceKey {
    /// Creates a new [`SliceKey`] instance.
    #[must_use]
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Returns a copy of this slice stepping by `step`.
    #[must_use]
    pub const fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolves the slice against a view of `len` coins.
    ///
    /// Returns the first position, the step and the number of positions selected.
    /// Returns `None` if the step is zero.
    pub(crate) fn indices(&self, len: u128) -> Option<(i128, i128, u128)> {
        let step = self.step.unwrap_or(1) as i128;
        if step == 0 {
            return None;
        }
        let len = i128::try_from(len).unwrap_or(i128::MAX);

        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: Option<isize>, default: i128| match bound {
            None => default,
            Some(value) => {
                let value = value as i128;
                if value < 0 {
                    (value + len).max(lower)
                } else {
                    value.min(upper)
                }
            }
        };

        let (start, stop) = if step < 0 {
            (clamp(self.start, upper), clamp(self.stop, lower))
        } else {
            (clamp(self.start, lower), clamp(self.stop, upper))
        };

        let selected = if step < 0 && stop < start {
            (start - stop - 1) / -step + 1
        } else if step > 0 && start < stop {
            (stop - start - 1) / step + 1
        } else {
            0
        };

        Some((start, step, selected as u128))
    }
}

impl From<RangeFull> for SliceKey {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}

impl From<Range<isize>> for SliceKey {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end), None)
    }
}

impl From<RangeFrom<isize>> for SliceKey {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceKey {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end), None)
    }
}

impl From<RangeInclusive<isize>> for SliceKey {
    fn from(range: RangeInclusive<isize>) -> Self {
        let stop = range.end().checked_add(1);
        Self::new(Some(*range.start()), stop, None)
    }
}

/// A key into the indexing view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexKey<'a> {
    /// A single position; negative positions count back from the end.
    Position(isize),
    /// A range of positions.
    Slice(SliceKey),
    /// A key of any other type, identified by its type name.
    Unrecognized(&'a str),
}

impl From<isize> for IndexKey<'_> {
    fn from(value: isize) -> Self {
        Self::Position(value)
    }
}

impl From<SliceKey> for IndexKey<'_> {
    fn from(value: SliceKey) -> Self {
        Self::Slice(value)
    }
}

/// The result of reading the indexing view.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CoinView {
    /// The coin at a single position.
    Coin(Denomination),
    /// The tags of the coins selected by a slice.
    Coins(String),
}

impl Display for CoinView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coin(denomination) => write!(f, "{}", denomination.tag()),
            Self::Coins(tags) => write!(f, "{tags}"),
        }
    }
}
