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

//! Core foundational utilities for `nummus`.
//!
//! The `nummus-core` crate is deliberately small and free of domain types. It supplies the
//! building blocks the `nummus-model` crate composes into its monetary value type:
//!
//! - Correctness validation functions.
//! - Lenient "parse-or-zero" numeric normalization.
//! - Fixed-point number formatting with configurable separators.
//! - Floating-point comparison helpers.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod correctness;
pub mod formatting;
pub mod math;
pub mod parsing;

// Re-exports
pub use crate::{
    formatting::format_number,
    parsing::{Normalize, parse_or_zero},
};
