//! Filter/Aggregate View
//!
//! Pure derivations over a snapshot of the store. Everything is recomputed
//! from scratch on each change; collections here hold at most a few hundred
//! items.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::{Category, DomainError, Item};

/// Category selection for the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Todas as categorias",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.label()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}

/// Item count per category, with every category present
pub fn counts_by_category(items: &[Item]) -> BTreeMap<Category, usize> {
    let mut counts: BTreeMap<Category, usize> = Category::ALL.iter().map(|c| (*c, 0)).collect();
    for item in items {
        *counts.entry(item.category).or_insert(0) += 1;
    }
    counts
}

/// Items matching the filter, in collection order
pub fn filtered(items: &[Item], filter: CategoryFilter) -> Vec<&Item> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

pub fn total_value<'a, I>(items: I) -> f64
where
    I: IntoIterator<Item = &'a Item>,
{
    items.into_iter().map(|item| item.price).sum()
}

/// Number of items that already have a price
pub fn planned_count(items: &[Item]) -> usize {
    items.iter().filter(|item| item.is_planned()).count()
}

/// Figures shown in the stats panel
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub item_count: usize,
    pub total_value: f64,
    pub planned_count: usize,
    /// Creation time of the most recent item
    pub last_added: Option<DateTime<Utc>>,
}

impl Summary {
    pub fn of(items: &[Item]) -> Self {
        Self {
            item_count: items.len(),
            total_value: total_value(items),
            planned_count: planned_count(items),
            last_added: items.first().map(|item| item.created_at),
        }
    }
}

/// The filtered subset together with its total
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    pub filter: CategoryFilter,
    pub items: Vec<&'a Item>,
    pub total_value: f64,
}

impl<'a> FilteredView<'a> {
    pub fn new(items: &'a [Item], filter: CategoryFilter) -> Self {
        let items = filtered(items, filter);
        let total_value = total_value(items.iter().copied());
        Self {
            filter,
            items,
            total_value,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Draft;

    fn item(name: &str, category: Category, price: f64) -> Item {
        Item::from_draft(Draft::new(name, category, price).unwrap())
    }

    fn sample() -> Vec<Item> {
        vec![
            item("Panela", Category::Kitchen, 80.0),
            item("Sofá", Category::LivingRoom, 1200.0),
            item("Faqueiro", Category::Kitchen, 0.0),
            item("Tapete", Category::Decoration, 300.0),
        ]
    }

    #[test]
    fn test_counts_include_every_category() {
        let items = sample();
        let counts = counts_by_category(&items);
        assert_eq!(counts.len(), Category::ALL.len());
        assert_eq!(counts[&Category::Kitchen], 2);
        assert_eq!(counts[&Category::Bathroom], 0);
        assert_eq!(counts.values().sum::<usize>(), items.len());
        assert!(counts_by_category(&[]).values().all(|n| *n == 0));
    }

    #[test]
    fn test_filter_all_is_full_collection() {
        let items = sample();
        let all = filtered(&items, CategoryFilter::All);
        assert_eq!(all.len(), items.len());
        assert!(all.iter().zip(&items).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_filter_category_keeps_order() {
        let items = sample();
        let kitchen = filtered(&items, CategoryFilter::Only(Category::Kitchen));
        let names: Vec<_> = kitchen.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Panela", "Faqueiro"]);
        assert!(filtered(&items, CategoryFilter::Only(Category::Outdoor)).is_empty());
    }

    #[test]
    fn test_totals_and_planned() {
        let items = sample();
        assert_eq!(total_value(&items), 1580.0);
        assert_eq!(planned_count(&items), 3);

        let view = FilteredView::new(&items, CategoryFilter::Only(Category::Kitchen));
        assert_eq!(view.len(), 2);
        assert_eq!(view.total_value, 80.0);
    }

    #[test]
    fn test_summary() {
        let items = sample();
        let summary = Summary::of(&items);
        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.planned_count, 3);
        assert_eq!(summary.last_added, Some(items[0].created_at));
        assert_eq!(Summary::of(&[]).last_added, None);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Quarto".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Bedroom))
        );
        assert!("everything".parse::<CategoryFilter>().is_err());
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }
}
