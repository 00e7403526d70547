//! Item Entity
//!
//! A single wishlist entry. Records are replaced, never edited in place.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::draft::Draft;
use super::entity::{DomainError, DomainResult, Entity};

/// Opaque item identifier, a UUID string for items created here
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A wishlist item as stored and displayed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned at creation
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Planned price, never negative
    pub price: f64,
    /// Store URL; `None` is omitted on disk, `Some("")` is kept as an empty string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_link: Option<String>,
    pub category: Category,
    /// Creation time, assigned once
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item from a validated draft, stamping id and creation time
    pub fn from_draft(draft: Draft) -> Self {
        Self::with_identity(ItemId::generate(), Utc::now(), draft)
    }

    /// Build an item with an explicit identity
    pub fn with_identity(id: ItemId, created_at: DateTime<Utc>, draft: Draft) -> Self {
        let Draft {
            name,
            description,
            price,
            store_link,
            category,
        } = draft;
        Self {
            id,
            name,
            description,
            price,
            store_link,
            category,
            created_at,
        }
    }

    /// Return a replacement record with the draft's fields and this item's identity
    pub fn revised(&self, draft: Draft) -> Self {
        Self::with_identity(self.id.clone(), self.created_at, draft)
    }

    /// Field set of this item, e.g. to prefill an edit form
    pub fn to_draft(&self) -> Draft {
        Draft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            store_link: self.store_link.clone(),
            category: self.category,
        }
    }

    /// Re-check invariants on a record that did not go through a draft
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.as_str().is_empty() {
            return Err(DomainError::InvalidInput("item id is empty".into()));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput(format!("item {} has no name", self.id)));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "item {} has invalid price {}",
                self.id, self.price
            )));
        }
        Ok(())
    }

    pub fn is_planned(&self) -> bool {
        self.price > 0.0
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(name: &str, price: f64) -> Draft {
        Draft::new(name, Category::Kitchen, price).unwrap()
    }

    #[test]
    fn test_from_draft_assigns_identity() {
        let a = Item::from_draft(draft("Panela", 89.9));
        let b = Item::from_draft(draft("Panela", 89.9));
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Panela");
        assert_eq!(a.category, Category::Kitchen);
    }

    #[test]
    fn test_revised_keeps_id_and_created_at() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let original = Item::with_identity("abc".into(), created, draft("Sofá", 1200.0));
        let replacement = Draft::new("Sofá retrátil", Category::LivingRoom, 1500.0)
            .unwrap()
            .with_description("3 lugares")
            .with_store_link("https://loja.example/sofa");

        let revised = original.revised(replacement);
        assert_eq!(revised.id, original.id);
        assert_eq!(revised.created_at, created);
        assert_eq!(revised.name, "Sofá retrátil");
        assert_eq!(revised.category, Category::LivingRoom);
        assert_eq!(revised.price, 1500.0);
        assert_eq!(revised.description, "3 lugares");
        assert_eq!(revised.store_link.as_deref(), Some("https://loja.example/sofa"));
    }

    #[test]
    fn test_json_layout() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let item = Item::with_identity("abc".into(), created, draft("Panela", 0.0));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["category"], "Cozinha");
        assert_eq!(value["createdAt"], "2024-05-01T10:00:00Z");
        assert!(value.get("storeLink").is_none());
    }

    #[test]
    fn test_reads_browser_timestamps() {
        let json = r#"{"id":"x","name":"Mesa","description":"","price":350,
            "storeLink":"","category":"Sala de Estar","createdAt":"2024-05-01T10:00:00.000Z"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.store_link.as_deref(), Some(""));
        assert_eq!(item.created_at, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut item = Item::from_draft(draft("Panela", 10.0));
        item.price = -1.0;
        assert!(item.validate().is_err());
    }
}
