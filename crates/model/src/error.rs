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

//! Errors associated with monetary value configuration.

/// Errors raised when loading or validating a [`MoneyConfig`](crate::config::MoneyConfig).
///
/// Arithmetic on a [`MoneyValue`](crate::types::MoneyValue) never fails, so these only
/// surface at configuration boundaries.
#[derive(thiserror::Error, Debug)]
pub enum MoneyError {
    #[error("Invalid money config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error("Invalid money config: `locale_code` was empty with the locale active")]
    EmptyLocaleCode,
}
