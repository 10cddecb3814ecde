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

//! Value types for the monetary domain model.
//!
//! [`MoneyValue`] is **mutable**: every arithmetic, tax and discount operation changes the
//! amount in place and returns `&mut Self`, so a computation reads as one chain against a
//! single owned value. Each construction returns a fresh, independent instance.
//!
//! # Operations
//!
//! | Operation                | Effect on the amount                              |
//! |--------------------------|---------------------------------------------------|
//! | `sum(xs)`                | `amount += x` for each `x` in order               |
//! | `subtract(xs)`           | `amount -= x` for each `x` in order               |
//! | `multiply(f)`            | `amount *= f`                                     |
//! | `divide(f)`              | `amount /= f`, or `amount = 0` when `f == 0`       |
//! | `add_tax(p)`             | `amount *= 1 + p / 100`                           |
//! | `remove_tax(p)`          | `amount /= 1 + p / 100`                           |
//! | `add_discount(v, false)` | `amount -= amount * v / 100`                      |
//! | `add_discount(v, true)`  | `amount -= v`                                     |
//!
//! # Fallbacks
//!
//! Operations never fail. Malformed numeric strings and non-finite numbers normalize to
//! zero, division by zero resets the amount to zero, and an unknown locale position
//! becomes [`LocalePosition::Prefix`](crate::enums::LocalePosition::Prefix).

pub mod money;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use money::{DECIMAL_SEPARATOR, MoneySummary, MoneyValue, THOUSANDS_SEPARATOR};
