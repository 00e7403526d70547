//! Item Drafts
//!
//! The user-editable part of an item, validated before it reaches the store.

use super::category::Category;
use super::entity::{DomainError, DomainResult};

/// Validated field set of an item, without id or creation time
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) price: f64,
    pub(crate) store_link: Option<String>,
    pub(crate) category: Category,
}

impl Draft {
    /// Create a draft with the required fields
    pub fn new(name: impl Into<String>, category: Category, price: f64) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("name is required".into()));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidInput(format!("invalid price {}", price)));
        }
        Ok(Self {
            name,
            description: String::new(),
            price,
            store_link: None,
            category,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_store_link(mut self, link: impl Into<String>) -> Self {
        self.store_link = Some(link.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn store_link(&self) -> Option<&str> {
        self.store_link.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Raw form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftInput {
    pub name: String,
    pub description: String,
    pub price: String,
    pub store_link: String,
    pub category: String,
}

impl DraftInput {
    /// Validate the form fields into a draft
    ///
    /// Name, category and price are required. The price accepts either `,`
    /// or `.` as decimal separator. A blank store link means no link.
    pub fn parse(&self) -> DomainResult<Draft> {
        let category: Category = self.category.parse()?;
        let price = parse_price(&self.price)?;
        let mut draft = Draft::new(self.name.as_str(), category, price)?
            .with_description(self.description.trim());
        let link = self.store_link.trim();
        if !link.is_empty() {
            draft = draft.with_store_link(link);
        }
        Ok(draft)
    }

    /// Prefill from an existing draft (edit form)
    pub fn from_draft(draft: &Draft) -> Self {
        Self {
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: format_price_input(draft.price),
            store_link: draft.store_link.clone().unwrap_or_default(),
            category: draft.category.label().to_string(),
        }
    }
}

fn parse_price(raw: &str) -> DomainResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DomainError::InvalidInput("price is required".into()));
    }
    raw.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| DomainError::InvalidInput(format!("'{}' is not a number", raw)))
}

fn format_price_input(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, category: &str, price: &str) -> DraftInput {
        DraftInput {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_valid_input() {
        let draft = input("  Sofá ", "Sala de Estar", "1200,50").parse().unwrap();
        assert_eq!(draft.name(), "Sofá");
        assert_eq!(draft.category(), Category::LivingRoom);
        assert_eq!(draft.price(), 1200.5);
        assert_eq!(draft.store_link(), None);
    }

    #[test]
    fn test_missing_required_fields() {
        assert!(input("", "Cozinha", "10").parse().is_err());
        assert!(input("Panela", "", "10").parse().is_err());
        assert!(input("Panela", "Cozinha", "").parse().is_err());
        assert!(input("Panela", "Cozinha", "abc").parse().is_err());
    }

    #[test]
    fn test_negative_or_non_finite_price() {
        assert!(input("Panela", "Cozinha", "-5").parse().is_err());
        assert!(Draft::new("Panela", Category::Kitchen, f64::NAN).is_err());
        assert!(Draft::new("Panela", Category::Kitchen, f64::INFINITY).is_err());
    }

    #[test]
    fn test_store_link_blank_means_none() {
        let mut raw = input("Panela", "Cozinha", "0");
        raw.store_link = "   ".into();
        assert_eq!(raw.parse().unwrap().store_link(), None);
        raw.store_link = "https://loja.example".into();
        assert_eq!(raw.parse().unwrap().store_link(), Some("https://loja.example"));
    }

    #[test]
    fn test_from_draft_prefills_form() {
        let draft = Draft::new("Toalha", Category::Bathroom, 49.9)
            .unwrap()
            .with_store_link("https://x");
        let raw = DraftInput::from_draft(&draft);
        assert_eq!(raw.price, "49.90");
        assert_eq!(raw.category, "Banheiro");
        assert_eq!(raw.parse().unwrap(), draft);
    }
}
