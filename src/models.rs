//! Frontend Models
//!
//! Domain types from the core crate plus presentation helpers.

pub use planejaqui_core::{Category, CategoryFilter, Draft, DraftInput, Item, ItemId, Summary};

/// CSS modifier for a category badge
pub fn badge_class(category: Category) -> &'static str {
    match category {
        Category::LivingRoom => "badge badge-blue",
        Category::Kitchen => "badge badge-orange",
        Category::Bedroom => "badge badge-purple",
        Category::Bathroom => "badge badge-cyan",
        Category::Outdoor => "badge badge-green",
        Category::Decoration => "badge badge-pink",
        Category::Appliances => "badge badge-yellow",
        Category::Other => "badge badge-gray",
    }
}

/// Class for a filter chip
pub fn chip_class(active: bool) -> &'static str {
    if active {
        "filter-chip active"
    } else {
        "filter-chip"
    }
}

/// Open link targets in a new tab, adding a scheme when the user left it out
pub fn external_href(link: &str) -> String {
    let link = link.trim();
    if link.contains("://") {
        link.to_string()
    } else {
        format!("https://{}", link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_badge() {
        for category in Category::ALL {
            assert!(badge_class(category).starts_with("badge "));
        }
        assert_eq!(badge_class(Category::Other), "badge badge-gray");
    }

    #[test]
    fn test_external_href() {
        assert_eq!(external_href("https://loja.com/sofa"), "https://loja.com/sofa");
        assert_eq!(external_href(" loja.com/sofa "), "https://loja.com/sofa");
    }
}
