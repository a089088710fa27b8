use std::fmt;

use serde::{Deserialize, Serialize};

/// Price as the backend sends it, usually a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{}", amount),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A pricing plan shown in the pricing section.
///
/// Every field is optional on the wire so one incomplete tier renders with
/// blanks instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl PricingTier {
    /// Price as shown on the card, e.g. `$199` or `$19.5`, and a bare `$`
    /// when the tier has none.
    ///
    /// Whole numbers are printed without a fractional part, matching how the
    /// backend's JSON numbers read.
    pub fn display_price(&self) -> String {
        match &self.price {
            Some(price) => format!("${}", price),
            None => "$".to_string(),
        }
    }

    /// Label of the call to action at the bottom of the card.
    pub fn choose_label(&self) -> String {
        format!("Choose {}", self.name)
    }
}
