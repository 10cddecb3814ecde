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

//! Enumerations for the monetary value domain model.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The placement of the locale marker relative to a rendered amount.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LocalePosition {
    /// The marker is rendered before the amount, e.g. `₺1.234,50`.
    #[default]
    Prefix,
    /// The marker is rendered after the amount, e.g. `1.234,50₺`.
    Suffix,
}

impl LocalePosition {
    /// Parses a position from `s`, falling back to [`LocalePosition::Prefix`] for any
    /// value other than exactly `"prefix"` or `"suffix"`.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|_| {
            log::debug!("Invalid locale position '{s}', using '{}'", Self::default());
            Self::default()
        })
    }
}

impl<'de> Deserialize<'de> for LocalePosition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let position: String = Deserialize::deserialize(deserializer)?;
        Ok(Self::parse_or_default(&position))
    }
}
