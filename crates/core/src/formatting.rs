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

//! Number formatting utilities.

use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};
use thousands::{Separable, SeparatorPolicy, digits};

/// The maximum number of decimals rounded through [`Decimal`] (its maximum scale).
pub const MAX_DECIMAL_SCALE: u8 = 28;

/// Formats `value` as a fixed-point string with `decimals` fractional digits.
///
/// Rounding is half away from zero applied to the shortest decimal representation of
/// `value`, so `0.125` renders as `0.13` and `1.005` as `1.01`. A value which rounds to
/// zero never carries a minus sign. The integer part is grouped in threes with
/// `thousands_sep`, and `decimal_sep` separates the fractional digits.
///
/// Non-finite values are rendered with their standard `Display` form.
///
/// # Examples
///
/// ```
/// use nummus_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5, 2, ',', '.'), "1.234,50");
/// assert_eq!(format_number(-1234567.891, 1, '.', ','), "-1,234,567.9");
/// ```
#[must_use]
pub fn format_number(value: f64, decimals: u8, decimal_sep: char, thousands_sep: char) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = to_fixed(value, decimals);

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut buf = [0u8; 4];
    let policy = SeparatorPolicy {
        separator: thousands_sep.encode_utf8(&mut buf),
        groups: &[3],
        digits: digits::ASCII_DECIMAL,
    };

    let mut result = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    result.push_str(sign);
    result.push_str(&int_part.separate_by_policy(policy));

    if let Some(frac) = frac_part {
        result.push(decimal_sep);
        result.push_str(frac);
    }

    result
}

fn to_fixed(value: f64, decimals: u8) -> String {
    let precision = usize::from(decimals);

    if decimals <= MAX_DECIMAL_SCALE
        && let Some(decimal) = Decimal::from_f64(value)
    {
        let rounded = decimal.round_dp_with_strategy(
            u32::from(decimals),
            RoundingStrategy::MidpointAwayFromZero,
        );
        let rounded = if rounded.is_zero() {
            Decimal::ZERO
        } else {
            rounded
        };
        return format!("{rounded:.precision$}");
    }

    // Beyond the range or scale of `Decimal`
    let fixed = format!("{value:.precision$}");
    match fixed.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => fixed,
    }
}
