//! UI Components
//!
//! Leptos components for the wishlist page.

mod header;
mod stats_panel;
mod category_filter_panel;
mod item_list;
mod item_card;
mod item_form;
mod modal;
mod delete_confirm_button;

pub use header::Header;
pub use stats_panel::StatsPanel;
pub use category_filter_panel::CategoryFilterPanel;
pub use item_list::ItemList;
pub use item_card::ItemCard;
pub use item_form::ItemForm;
pub use modal::Modal;
pub use delete_confirm_button::DeleteConfirmButton;
