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

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! This module provides validation checking of function or method conditions.
//!
//! A condition is a predicate which must be true just prior to the execution of
//! some section of code, for example a count that must never go negative.
//!
//! Each check returns an [`anyhow::Result`] describing the failed condition, leaving it to the
//! caller to map the failure into a domain error or to panic with the [`FAILED`] prefix.

/// A message prefix that can be used with calls to `expect` or other assertion-related functions.
///
/// This constant provides a standard message that can be used to indicate a failure condition
/// when a predicate or condition does not hold true. It is typically used in conjunction with
/// functions like `expect` to provide a consistent error message.
pub const FAILED: &str = "Condition failed";

/// Checks the `i64` value is non-negative (>= 0), returning it as a `u64`.
///
/// # Errors
///
/// Returns an error if `value` is negative.
#[inline(always)]
pub fn check_non_negative_i64(value: i64, param: &str) -> anyhow::Result<u64> {
    u64::try_from(value)
        .map_err(|_| anyhow::anyhow!("invalid i64 for '{param}' not non-negative, was {value}"))
}

/// Checks the `f64` value is a finite, non-negative whole number, returning it as a `u64`.
///
/// # Errors
///
/// Returns an error if `value` is non-finite, fractional, negative, or exceeds `u64::MAX`.
pub fn check_whole_f64(value: f64, param: &str) -> anyhow::Result<u64> {
    if !value.is_finite() {
        anyhow::bail!("invalid f64 for '{param}' not finite, was {value}")
    }
    if value.fract() != 0.0 {
        anyhow::bail!("invalid f64 for '{param}' not a whole number, was {value}")
    }
    if value < 0.0 {
        anyhow::bail!("invalid f64 for '{param}' not non-negative, was {value}")
    }
    // 2^64 is the first f64 beyond the u64 range
    if value >= 18_446_744_073_709_551_616.0 {
        anyhow::bail!("invalid f64 for '{param}' exceeds u64::MAX, was {value}")
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(i64::MAX, i64::MAX as u64)]
    fn test_check_non_negative_i64_when_valid(#[case] value: i64, #[case] expected: u64) {
        assert_eq!(check_non_negative_i64(value, "param").unwrap(), expected);
    }

    #[rstest]
    #[case(-1)]
    #[case(i64::MIN)]
    fn test_check_non_negative_i64_when_negative(#[case] value: i64) {
        let err = check_non_negative_i64(value, "high").unwrap_err();
        assert!(err.to_string().contains("'high'"));
        assert!(err.to_string().contains(&value.to_string()));
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(7.0, 7)]
    #[case(1e15, 1_000_000_000_000_000)]
    fn test_check_whole_f64_when_valid(#[case] value: f64, #[case] expected: u64) {
        assert_eq!(check_whole_f64(value, "param").unwrap(), expected);
    }

    #[rstest]
    #[case(0.5, "whole number")]
    #[case(-1.0, "non-negative")]
    #[case(f64::NAN, "finite")]
    #[case(f64::INFINITY, "finite")]
    #[case(1e20, "u64::MAX")]
    fn test_check_whole_f64_when_invalid(#[case] value: f64, #[case] expected: &str) {
        let err = check_whole_f64(value, "param").unwrap_err();
        assert!(err.to_string().contains(expected), "{err}");
    }
}
