// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
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

//! Core parsing functions.
//!
//! Numeric inputs are normalized leniently: grouping separators are stripped and anything
//! that cannot be read as a finite number becomes `0.0`. The fallback is intentional and is
//! the single place where malformed input is absorbed, so callers never handle parse errors.

use std::borrow::Cow;

use rust_decimal::{Decimal, prelude::ToPrimitive};

/// The grouping separator stripped from numeric strings before parsing.
pub const GROUPING_SEPARATOR: char = ',';

/// Returns `s` with every [`GROUPING_SEPARATOR`] removed, borrowing when there is nothing to strip.
#[must_use]
pub fn strip_grouping(s: &str) -> Cow<'_, str> {
    if s.contains(GROUPING_SEPARATOR) {
        Cow::Owned(s.replace(GROUPING_SEPARATOR, ""))
    } else {
        Cow::Borrowed(s)
    }
}

/// Parses the given string as an `f64`, returning `0.0` when it cannot be parsed.
///
/// Grouping separators are removed and surrounding whitespace is trimmed first, so
/// `"1,234.5"` parses as `1234.5`. Values which parse to NaN or infinity also yield `0.0`.
#[must_use]
pub fn parse_or_zero(s: &str) -> f64 {
    let cleaned = strip_grouping(s);

    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        Ok(value) => {
            log::debug!("Normalized non-finite numeric input '{s}' ({value}) to zero");
            0.0
        }
        Err(e) => {
            log::debug!("Normalized malformed numeric input '{s}' to zero: {e}");
            0.0
        }
    }
}

/// Returns `value` when finite, otherwise `0.0`.
#[inline]
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::debug!("Normalized non-finite value {value} to zero");
        0.0
    }
}

/// Conversion of numeric-like inputs into a raw `f64` amount.
///
/// Implementations never fail: inputs which cannot be represented as a finite number
/// normalize to `0.0`.
pub trait Normalize {
    /// Returns the normalized `f64` value of this input.
    fn to_amount(&self) -> f64;
}

impl Normalize for f64 {
    fn to_amount(&self) -> f64 {
        finite_or_zero(*self)
    }
}

impl Normalize for f32 {
    fn to_amount(&self) -> f64 {
        finite_or_zero(f64::from(*self))
    }
}

macro_rules! impl_normalize_int {
    ($($t:ty),*) => {
        $(
            impl Normalize for $t {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_amount(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_normalize_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Normalize for str {
    fn to_amount(&self) -> f64 {
        parse_or_zero(self)
    }
}

impl Normalize for String {
    fn to_amount(&self) -> f64 {
        parse_or_zero(self)
    }
}

impl Normalize for Decimal {
    fn to_amount(&self) -> f64 {
        self.to_f64().map_or(0.0, finite_or_zero)
    }
}

impl<T: Normalize + ?Sized> Normalize for &T {
    fn to_amount(&self) -> f64 {
        (**self).to_amount()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    #[case("", 0.0)]
    #[case("0", 0.0)]
    #[case("500", 500.0)]
    #[case("1,000", 1000.0)]
    #[case("1,234,567.89", 1_234_567.89)]
    #[case("-1,234.5", -1234.5)]
    #[case("  42  ", 42.0)]
    #[case("1.5e3", 1500.0)]
    #[case(".5", 0.5)]
    #[case("+7", 7.0)]
    #[case(",,,", 0.0)]
    fn test_parse_or_zero_valid(#[case] s: &str, #[case] expected: f64) {
        assert_eq!(parse_or_zero(s), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("12abc")]
    #[case("1.2.3")]
    #[case("$100")]
    #[case("NaN")]
    #[case("inf")]
    #[case("-infinity")]
    #[case("1e999")]
    fn test_parse_or_zero_malformed_is_zero(#[case] s: &str) {
        assert_eq!(parse_or_zero(s), 0.0);
    }

    #[rstest]
    fn test_strip_grouping_borrows_when_clean() {
        assert!(matches!(strip_grouping("1234.5"), Cow::Borrowed("1234.5")));
        assert_eq!(strip_grouping("1,234.5"), "1234.5");
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(f64::NEG_INFINITY, 0.0)]
    #[case(-12.5, -12.5)]
    fn test_finite_or_zero(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(finite_or_zero(value), expected);
    }

    #[rstest]
    fn test_normalize_primitives() {
        assert_eq!(1.25_f64.to_amount(), 1.25);
        assert_eq!(1.25_f32.to_amount(), 1.25);
        assert_eq!(18_u32.to_amount(), 18.0);
        assert_eq!((-3_i64).to_amount(), -3.0);
        assert_eq!(f64::NAN.to_amount(), 0.0);
    }

    #[rstest]
    fn test_normalize_strings() {
        assert_eq!("1,000".to_amount(), 1000.0);
        assert_eq!(String::from("2,500.75").to_amount(), 2500.75);
        assert_eq!((&String::from("oops")).to_amount(), 0.0);
    }

    #[rstest]
    fn test_normalize_decimal() {
        assert_eq!(dec!(1234.50).to_amount(), 1234.5);
        assert_eq!(dec!(-0.125).to_amount(), -0.125);
        assert_eq!(Decimal::ZERO.to_amount(), 0.0);
    }

    #[rstest]
    fn test_normalize_decimal_keeps_inherent_normalize() {
        // `Decimal::normalize` strips trailing zeros and stays a `Decimal`
        let value = dec!(1234.500);
        assert_eq!(value.normalize(), dec!(1234.5));
        assert_eq!(value.normalize().to_amount(), 1234.5);
        assert_eq!(Normalize::to_amount(&value), 1234.5);
    }

    mod property_tests {
        use proptest::prelude::*;
        use thousands::Separable;

        use super::*;

        proptest! {
            #[test]
            fn prop_grouped_integers_parse_back(value in -1_000_000_000_i64..1_000_000_000) {
                let grouped = value.separate_with_commas();
                prop_assert_eq!(parse_or_zero(&grouped), value as f64);
            }

            #[test]
            fn prop_parse_or_zero_is_always_finite(s in "\\PC*") {
                prop_assert!(parse_or_zero(&s).is_finite());
            }
        }
    }
}
