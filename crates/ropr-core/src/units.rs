//! Entry-field scaling.
//!
//! Revenue is entered in millions and investments in thousands; the model
//! works on absolute amounts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RoprError;

/// Multiplier applied to an entry field before it reaches the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Absolute amount.
    #[default]
    Units,
    /// Thousands (×1,000).
    Thousands,
    /// Millions (×1,000,000).
    Millions,
}

impl Scale {
    /// Returns the multiplier.
    pub fn factor(self) -> f64 {
        match self {
            Scale::Units => 1.0,
            Scale::Thousands => 1_000.0,
            Scale::Millions => 1_000_000.0,
        }
    }

    /// Converts an entry value into an absolute amount.
    pub fn to_amount(self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Converts an absolute amount back into an entry value.
    pub fn from_amount(self, amount: f64) -> f64 {
        amount / self.factor()
    }

    /// Short suffix used in labels ("$M", "$K").
    pub fn suffix(self) -> &'static str {
        match self {
            Scale::Units => "$",
            Scale::Thousands => "$K",
            Scale::Millions => "$M",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scale::Units => "units",
            Scale::Thousands => "thousands",
            Scale::Millions => "millions",
        };
        f.write_str(name)
    }
}

impl FromStr for Scale {
    type Err = RoprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "units" | "unit" | "1" => Ok(Scale::Units),
            "thousands" | "thousand" | "k" => Ok(Scale::Thousands),
            "millions" | "million" | "m" => Ok(Scale::Millions),
            _ => Err(RoprError::UnknownScale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_conventions() {
        assert_eq!(Scale::Millions.to_amount(100.0), 100_000_000.0);
        assert_eq!(Scale::Thousands.to_amount(1000.0), 1_000_000.0);
        assert_eq!(Scale::Thousands.to_amount(500.0), 500_000.0);
        assert_eq!(Scale::Units.to_amount(42.0), 42.0);
    }

    #[test]
    fn test_from_amount_inverts() {
        assert_eq!(Scale::Millions.from_amount(250_000_000.0), 250.0);
        assert_eq!(Scale::Thousands.from_amount(1_500_000.0), 1500.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Millions".parse::<Scale>().unwrap(), Scale::Millions);
        assert_eq!("k".parse::<Scale>().unwrap(), Scale::Thousands);
        assert_eq!(" units ".parse::<Scale>().unwrap(), Scale::Units);
        assert_eq!(
            "billions".parse::<Scale>(),
            Err(RoprError::UnknownScale("billions".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for scale in [Scale::Units, Scale::Thousands, Scale::Millions] {
            assert_eq!(scale.to_string().parse::<Scale>().unwrap(), scale);
        }
    }
}
