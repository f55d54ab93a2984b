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

//! Number formatting utilities for coin counts.

fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            result.push(sep);
        }
        result.push(c);
    }

    result
}

/// Extension trait for formatting unsigned counts with thousands separators.
pub trait Separable {
    /// Formats the count with commas as thousand separators.
    fn separate_with_commas(&self) -> String;
}

macro_rules! impl_separable {
    ($($t:ty),*) => {
        $(
            impl Separable for $t {
                fn separate_with_commas(&self) -> String {
                    group_digits(&self.to_string(), ',')
                }
            }
        )*
    };
}

impl_separable!(u8, u16, u32, u64, u128, usize);
