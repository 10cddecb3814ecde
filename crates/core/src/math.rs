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

//! Percentage arithmetic and floating-point comparison utilities.

/// Macro for approximate floating-point equality comparison.
///
/// This macro compares two floating-point values with a specified epsilon tolerance,
/// providing a safe alternative to exact equality checks which can fail due to
/// floating-point precision issues.
///
/// # Usage
///
/// ```rust
/// use nummus_core::approx_eq;
///
/// let a = 0.1 + 0.2;
/// let b = 0.3;
/// assert!(approx_eq!(f64, a, b, epsilon = 1e-10));
/// ```
#[macro_export]
macro_rules! approx_eq {
    ($type:ty, $left:expr, $right:expr, epsilon = $epsilon:expr) => {{
        let left_val: $type = $left;
        let right_val: $type = $right;
        (left_val - right_val).abs() < $epsilon
    }};
}

/// Returns `percent` percent of `base`, computed as `base * (percent / 100)`.
///
/// The division happens first; callers relying on a specific rounding sequence
/// must not reorder this into `base * percent / 100`.
#[inline]
#[must_use]
pub fn percent_of(base: f64, percent: f64) -> f64 {
    base * (percent / 100.0)
}

/// Returns the pre-percentage base of a `total` which already includes `percent` percent,
/// computed as `total / (1 + percent / 100)`.
///
/// A `percent` of `-100` yields a non-finite result.
#[inline]
#[must_use]
pub fn exclusive_of(total: f64, percent: f64) -> f64 {
    total / (1.0 + percent / 100.0)
}
