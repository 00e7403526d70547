//! Category Enumeration
//!
//! The fixed set of household areas an item can belong to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::DomainError;

/// Household area used to classify wishlist items
///
/// Serialized with the Portuguese label, which is also what the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Sala de Estar")]
    LivingRoom,
    #[serde(rename = "Cozinha")]
    Kitchen,
    #[serde(rename = "Quarto")]
    Bedroom,
    #[serde(rename = "Banheiro")]
    Bathroom,
    #[serde(rename = "Área Externa")]
    Outdoor,
    #[serde(rename = "Decoração")]
    Decoration,
    #[serde(rename = "Eletrodomésticos")]
    Appliances,
    #[serde(rename = "Outros")]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Category::LivingRoom,
        Category::Kitchen,
        Category::Bedroom,
        Category::Bathroom,
        Category::Outdoor,
        Category::Decoration,
        Category::Appliances,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::LivingRoom => "Sala de Estar",
            Category::Kitchen => "Cozinha",
            Category::Bedroom => "Quarto",
            Category::Bathroom => "Banheiro",
            Category::Outdoor => "Área Externa",
            Category::Decoration => "Decoração",
            Category::Appliances => "Eletrodomésticos",
            Category::Other => "Outros",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown category '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert!("Garagem".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Category::Outdoor).unwrap();
        assert_eq!(json, "\"Área Externa\"");
        let parsed: Category = serde_json::from_str("\"Eletrodomésticos\"").unwrap();
        assert_eq!(parsed, Category::Appliances);
        assert!(serde_json::from_str::<Category>("\"kitchen\"").is_err());
    }
}
