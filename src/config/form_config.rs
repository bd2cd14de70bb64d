//! Input bounds and display settings for the prediction form.
//!
//! These are presentation policy only; the engine accepts any year range
//! where the target does not precede the purchase.

use super::{VarLookup, parse_var};
use anyhow::{Result, bail};

/// Form environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEnvConfig {
    pub target_year_min: i32,
    pub target_year_max: i32,
    pub target_year_default: i32,
    pub price_min: u64,
    pub price_max: u64,
    pub price_default: u64,
    pub price_step: u64,
    pub currency_symbol: String,
}

impl Default for FormEnvConfig {
    fn default() -> Self {
        Self {
            target_year_min: 2024,
            target_year_max: 2035,
            target_year_default: 2026,
            price_min: 1000,
            price_max: 100_000,
            price_default: 25_000,
            price_step: 1000,
            currency_symbol: "₹".to_string(),
        }
    }
}

impl FormEnvConfig {
    pub fn from_vars(vars: VarLookup<'_>) -> Result<Self> {
        let d = Self::default();
        let config = Self {
            target_year_min: parse_var(vars, "FORM_TARGET_YEAR_MIN", d.target_year_min)?,
            target_year_max: parse_var(vars, "FORM_TARGET_YEAR_MAX", d.target_year_max)?,
            target_year_default: parse_var(vars, "FORM_TARGET_YEAR_DEFAULT", d.target_year_default)?,
            price_min: parse_var(vars, "FORM_PRICE_MIN", d.price_min)?,
            price_max: parse_var(vars, "FORM_PRICE_MAX", d.price_max)?,
            price_default: parse_var(vars, "FORM_PRICE_DEFAULT", d.price_default)?,
            price_step: parse_var(vars, "FORM_PRICE_STEP", d.price_step)?,
            currency_symbol: vars("CURRENCY_SYMBOL").unwrap_or(d.currency_symbol),
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects a target year the form would not offer.
    pub fn check_target_year(&self, target_year: i32) -> Result<()> {
        if !(self.target_year_min..=self.target_year_max).contains(&target_year) {
            bail!(
                "Target year {} outside {}..={}",
                target_year,
                self.target_year_min,
                self.target_year_max
            );
        }
        Ok(())
    }

    /// Rejects an original price the form would not offer.
    pub fn check_price(&self, price: u64) -> Result<()> {
        if !(self.price_min..=self.price_max).contains(&price) {
            bail!("Price {} outside {}..={}", price, self.price_min, self.price_max);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.target_year_min > self.target_year_max {
            bail!(
                "FORM_TARGET_YEAR_MIN ({}) exceeds FORM_TARGET_YEAR_MAX ({})",
                self.target_year_min,
                self.target_year_max
            );
        }
        if !(self.target_year_min..=self.target_year_max).contains(&self.target_year_default) {
            bail!(
                "FORM_TARGET_YEAR_DEFAULT ({}) outside {}..={}",
                self.target_year_default,
                self.target_year_min,
                self.target_year_max
            );
        }
        if self.price_min > self.price_max {
            bail!(
                "FORM_PRICE_MIN ({}) exceeds FORM_PRICE_MAX ({})",
                self.price_min,
                self.price_max
            );
        }
        if !(self.price_min..=self.price_max).contains(&self.price_default) {
            bail!(
                "FORM_PRICE_DEFAULT ({}) outside {}..={}",
                self.price_default,
                self.price_min,
                self.price_max
            );
        }
        if self.price_step == 0 {
            bail!("FORM_PRICE_STEP must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::lookup;

    #[test]
    fn test_form_config_defaults() {
        let config = FormEnvConfig::from_vars(&lookup(&[])).unwrap();
        assert_eq!(config, FormEnvConfig::default());
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_form_config_currency_override() {
        let config = FormEnvConfig::from_vars(&lookup(&[("CURRENCY_SYMBOL", "$")])).unwrap();
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_form_config_rejects_inverted_bounds() {
        assert!(
            FormEnvConfig::from_vars(&lookup(&[
                ("FORM_TARGET_YEAR_MIN", "2030"),
                ("FORM_TARGET_YEAR_MAX", "2025"),
            ]))
            .is_err()
        );
        assert!(FormEnvConfig::from_vars(&lookup(&[("FORM_PRICE_DEFAULT", "500")])).is_err());
        assert!(FormEnvConfig::from_vars(&lookup(&[("FORM_PRICE_STEP", "0")])).is_err());
    }

    #[test]
    fn test_form_bounds_checks() {
        let config = FormEnvConfig::default();
        assert!(config.check_target_year(2024).is_ok());
        assert!(config.check_target_year(2035).is_ok());
        assert!(config.check_target_year(2036).is_err());
        assert!(config.check_price(1000).is_ok());
        assert!(config.check_price(999).is_err());
        assert!(config.check_price(100_001).is_err());
    }
}
