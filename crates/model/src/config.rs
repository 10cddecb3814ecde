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

//! Provides a configuration for `MoneyValue` instances.

use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{enums::LocalePosition, error::MoneyError};

/// The default tax rate percentage.
pub const DEFAULT_TAX_RATE: i32 = 18;

/// The default number of decimals used when rendering.
pub const DEFAULT_DECIMALS: u8 = 2;

/// The default locale marker.
pub const DEFAULT_LOCALE_CODE: &str = "TRL";

/// Configuration for `MoneyValue` instances.
///
/// Every field is optional when deserializing; missing fields take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MoneyConfig {
    /// The tax percentage applied when a tax operation omits an explicit rate.
    pub tax_rate: i32,
    /// The number of fractional digits used when rendering.
    pub decimals: u8,
    /// The locale marker attached to rendered output (e.g. a currency symbol or code).
    pub locale_code: Ustr,
    /// If the locale marker is included in rendered output.
    pub locale_active: bool,
    /// Where the locale marker is placed relative to the amount.
    pub locale_position: LocalePosition,
}

impl Default for MoneyConfig {
    /// Creates a new default [`MoneyConfig`] instance.
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            decimals: DEFAULT_DECIMALS,
            locale_code: Ustr::from(DEFAULT_LOCALE_CODE),
            locale_active: false,
            locale_position: LocalePosition::default(),
        }
    }
}

impl MoneyConfig {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `json` is not a valid configuration object.
    /// - The configuration fails [`MoneyConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, MoneyError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes this configuration to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, MoneyError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the locale is active with an empty `locale_code`.
    pub fn validate(&self) -> Result<(), MoneyError> {
        if self.locale_active && self.locale_code.is_empty() {
            return Err(MoneyError::EmptyLocaleCode);
        }
        Ok(())
    }
}
