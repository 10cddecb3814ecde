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

//! Domain model for `nummus`.
//!
//! The `nummus-model` crate provides [`MoneyValue`], a mutable monetary amount which
//! accumulates chained arithmetic, tax and discount operations and renders the result
//! as a locale-decorated string:
//!
//! ```
//! use nummus_model::types::MoneyValue;
//!
//! let mut money = MoneyValue::new(100.0);
//! money.set_locale_active(true).set_locale_code("₺").add_tax(None);
//!
//! assert_eq!(money.get(), "₺118,00");
//! ```
//!
//! # Feature flags
//!
//! - `stubs`: Enables type stubs for use in testing scenarios.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod enums;
pub mod error;
pub mod types;

// Re-exports
pub use crate::{
    config::MoneyConfig,
    enums::LocalePosition,
    error::MoneyError,
    types::{MoneySummary, MoneyValue},
};
