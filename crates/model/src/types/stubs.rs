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

//! Type stubs to facilitate testing.

use rstest::fixture;
use ustr::Ustr;

use crate::{config::MoneyConfig, enums::LocalePosition, types::MoneyValue};

#[fixture]
pub fn money_config_usd_suffix() -> MoneyConfig {
    MoneyConfig {
        locale_code: Ustr::from("USD"),
        locale_active: true,
        locale_position: LocalePosition::Suffix,
        ..Default::default()
    }
}

#[fixture]
pub fn money_value_try() -> MoneyValue {
    let mut money = MoneyValue::new(100.0);
    money.set_locale_active(true).set_locale_code("₺");
    money
}
