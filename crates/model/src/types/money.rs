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

//! Represents a mutable monetary amount accumulated through chained operations.

use std::fmt::{Display, Formatter};

use nummus_core::{
    correctness::check_finite_f64,
    formatting::format_number,
    math::{exclusive_of, percent_of},
    parsing::Normalize,
};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{config::MoneyConfig, enums::LocalePosition};

/// The separator between the integer and fractional digits of a rendered amount.
pub const DECIMAL_SEPARATOR: char = ',';

/// The separator between groups of three integer digits of a rendered amount.
pub const THOUSANDS_SEPARATOR: char = '.';

/// Represents a mutable monetary amount with tax, discount and rendering configuration.
///
/// Arithmetic, tax and discount operations mutate the amount in place and return
/// `&mut Self` so they can be chained. Inputs are anything implementing [`Normalize`],
/// including numeric strings with `,` grouping separators such as `"1,234.50"`.
///
/// ```
/// use nummus_model::types::MoneyValue;
///
/// let mut money = MoneyValue::new(0.0);
/// money.sum(["1,000", "500"]).add_discount(10, false);
///
/// assert_eq!(money.get(), "1.350,00");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MoneyValue {
    amount: f64,
    tax_rate: i32,
    decimals: u8,
    tax_amount: f64,
    locale_code: Ustr,
    locale_active: bool,
    locale_prefix: Option<Ustr>,
    locale_suffix: Option<Ustr>,
    locale_position: LocalePosition,
}

impl MoneyValue {
    /// Creates a new [`MoneyValue`] instance with the default configuration.
    ///
    /// The `amount` is normalized, so a malformed string or a non-finite number starts at zero.
    #[must_use]
    pub fn new<T: Normalize>(amount: T) -> Self {
        Self::with_config(amount, &MoneyConfig::default())
    }

    /// Creates a new [`MoneyValue`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is NaN or infinite.
    pub fn new_checked(amount: f64) -> anyhow::Result<Self> {
        check_finite_f64(amount, "amount")?;
        Ok(Self::new(amount))
    }

    /// Creates a new [`MoneyValue`] instance from the given `config`.
    #[must_use]
    pub fn with_config<T: Normalize>(amount: T, config: &MoneyConfig) -> Self {
        let mut value = Self {
            amount: amount.to_amount(),
            tax_rate: config.tax_rate,
            decimals: config.decimals,
            tax_amount: 0.0,
            locale_code: config.locale_code,
            locale_active: config.locale_active,
            locale_prefix: None,
            locale_suffix: None,
            locale_position: config.locale_position,
        };
        value.update_locale_affixes();
        value
    }

    /// Re-initializes the amount and clears the last tax amount, keeping the configuration.
    pub fn reset<T: Normalize>(&mut self, amount: T) -> &mut Self {
        self.amount = amount.to_amount();
        self.tax_amount = 0.0;
        self
    }

    /// Returns the current configuration of this instance.
    #[must_use]
    pub fn config(&self) -> MoneyConfig {
        MoneyConfig {
            tax_rate: self.tax_rate,
            decimals: self.decimals,
            locale_code: self.locale_code,
            locale_active: self.locale_active,
            locale_position: self.locale_position,
        }
    }

    /// Sets the number of decimals used when rendering.
    pub fn set_decimals(&mut self, decimals: u8) -> &mut Self {
        self.decimals = decimals;
        self
    }

    /// Sets the default tax percentage used when a tax operation omits a rate.
    pub fn set_tax_rate(&mut self, tax_rate: i32) -> &mut Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Enables or disables the locale marker in rendered output.
    pub fn set_locale_active(&mut self, active: bool) -> &mut Self {
        self.locale_active = active;
        self
    }

    /// Sets the locale marker (e.g. `"₺"`, `"USD"`) attached to rendered output.
    pub fn set_locale_code<T: AsRef<str>>(&mut self, code: T) -> &mut Self {
        self.locale_code = Ustr::from(code.as_ref());
        self.update_locale_affixes();
        self
    }

    /// Sets the locale marker position from `"prefix"` or `"suffix"`.
    ///
    /// Any other value is treated as `"prefix"`.
    pub fn set_locale_position(&mut self, position: &str) -> &mut Self {
        self.set_position(LocalePosition::parse_or_default(position))
    }

    /// Sets the locale marker position.
    pub fn set_position(&mut self, position: LocalePosition) -> &mut Self {
        self.locale_position = position;
        self.update_locale_affixes();
        self
    }

    /// Adds each of the given `numbers` to the amount, in order.
    pub fn sum<I>(&mut self, numbers: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Normalize,
    {
        for number in numbers {
            self.amount += number.to_amount();
        }
        self
    }

    /// Subtracts each of the given `numbers` from the amount, in order.
    pub fn subtract<I>(&mut self, numbers: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Normalize,
    {
        for number in numbers {
            self.amount -= number.to_amount();
        }
        self
    }

    /// Multiplies the amount by `factor`.
    pub fn multiply<T: Normalize>(&mut self, factor: T) -> &mut Self {
        self.amount *= factor.to_amount();
        self
    }

    /// Divides the amount by `factor`.
    ///
    /// A `factor` which normalizes to zero resets the amount to zero.
    pub fn divide<T: Normalize>(&mut self, factor: T) -> &mut Self {
        let factor = factor.to_amount();

        if factor == 0.0 {
            log::debug!("Division by zero, resetting amount {} to zero", self.amount);
            self.amount = 0.0;
        } else {
            self.amount /= factor;
        }
        self
    }

    /// Adds tax at `percent` (or the default tax rate when `None`) to the amount.
    ///
    /// The added tax is retained and available from [`MoneyValue::get_tax`].
    pub fn add_tax(&mut self, percent: Option<i32>) -> &mut Self {
        let percent = percent.unwrap_or(self.tax_rate);
        self.tax_amount = percent_of(self.amount.to_amount(), percent.to_amount());
        self.amount += self.tax_amount;
        self
    }

    /// Removes tax at `percent` (or the default tax rate when `None`) from the amount,
    /// treating the current amount as tax-inclusive.
    ///
    /// The removed tax is retained and available from [`MoneyValue::get_tax`].
    ///
    /// A `percent` of `-100` divides by zero, leaving the amount non-finite. It then
    /// renders as zero, since rendering normalizes the amount.
    pub fn remove_tax(&mut self, percent: Option<i32>) -> &mut Self {
        let percent = percent.unwrap_or(self.tax_rate);
        self.tax_amount = self.amount - exclusive_of(self.amount.to_amount(), percent.to_amount());
        self.amount -= self.tax_amount;
        self
    }

    /// Applies a discount of `value`, either a fixed amount or a percentage of the amount.
    pub fn add_discount<T: Normalize>(&mut self, value: T, is_fixed: bool) -> &mut Self {
        if is_fixed {
            self.add_fixed_discount(value)
        } else {
            self.add_percent_discount(value)
        }
    }

    /// Subtracts `percent` percent of the amount from the amount.
    pub fn add_percent_discount<T: Normalize>(&mut self, percent: T) -> &mut Self {
        let discount = percent_of(self.amount.to_amount(), percent.to_amount());
        self.amount -= discount;
        self
    }

    /// Subtracts a fixed `amount` from the amount.
    pub fn add_fixed_discount<T: Normalize>(&mut self, amount: T) -> &mut Self {
        self.amount -= amount.to_amount();
        self
    }

    /// Returns the amount rendered with the configured decimals, `.` thousands grouping
    /// and `,` decimal separator, decorated with the locale marker when active.
    #[must_use]
    pub fn get(&self) -> String {
        let amount = format_number(
            self.amount.to_amount(),
            self.decimals,
            DECIMAL_SEPARATOR,
            THOUSANDS_SEPARATOR,
        );

        if !self.locale_active {
            return amount;
        }

        let prefix = self.locale_prefix.as_ref().map_or("", Ustr::as_str);
        let suffix = self.locale_suffix.as_ref().map_or("", Ustr::as_str);
        format!("{prefix}{amount}{suffix}")
    }

    /// Returns the tax computed by the most recent tax operation, or zero if none has run.
    #[must_use]
    pub const fn get_tax(&self) -> f64 {
        self.tax_amount
    }

    /// Returns the rendered amount together with the last computed tax.
    #[must_use]
    pub fn all(&self) -> MoneySummary {
        MoneySummary {
            amount: self.get(),
            tax: self.get_tax(),
        }
    }

    /// Returns the raw amount of this instance as an `f64`.
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.amount
    }

    /// Returns the default tax percentage.
    #[must_use]
    pub const fn tax_rate(&self) -> i32 {
        self.tax_rate
    }

    /// Returns the number of decimals used when rendering.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Returns the locale marker.
    #[must_use]
    pub const fn locale_code(&self) -> Ustr {
        self.locale_code
    }

    /// Returns `true` if the locale marker is included in rendered output.
    #[must_use]
    pub const fn is_locale_active(&self) -> bool {
        self.locale_active
    }

    /// Returns the locale marker position.
    #[must_use]
    pub const fn locale_position(&self) -> LocalePosition {
        self.locale_position
    }

    /// Returns the locale marker when it is placed before the amount.
    #[must_use]
    pub const fn locale_prefix(&self) -> Option<Ustr> {
        self.locale_prefix
    }

    /// Returns the locale marker when it is placed after the amount.
    #[must_use]
    pub const fn locale_suffix(&self) -> Option<Ustr> {
        self.locale_suffix
    }

    fn update_locale_affixes(&mut self) {
        match self.locale_position {
            LocalePosition::Prefix => {
                self.locale_prefix = Some(self.locale_code);
                self.locale_suffix = None;
            }
            LocalePosition::Suffix => {
                self.locale_prefix = None;
                self.locale_suffix = Some(self.locale_code);
            }
        }
    }
}

impl Default for MoneyValue {
    /// Creates a new [`MoneyValue`] instance with a zero amount and the default configuration.
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Display for MoneyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The rendered amount of a [`MoneyValue`] bundled with its last computed tax.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoneySummary {
    /// The rendered amount, see [`MoneyValue::get`].
    pub amount: String,
    /// The tax computed by the most recent tax operation.
    pub tax: f64,
}

impl Display for MoneySummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (tax {})", self.amount, self.tax)
    }
}
