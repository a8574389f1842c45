//! UI Components
//!
//! Reusable Leptos components.

mod catalog_cascade;
mod delete_button;
mod form_actions;
mod image_picker;
mod notice_banner;
mod option_select;
mod sidebar;
mod status_select;

pub use catalog_cascade::{CascadeDepth, CatalogCascade};
pub use delete_button::DeleteButton;
pub use form_actions::FormActions;
pub use image_picker::{clear_images, ImagePicker, PickedImage};
pub use notice_banner::NoticeBanner;
pub use option_select::OptionSelect;
pub use sidebar::Sidebar;
pub use status_select::{StatusBadge, StatusSelect};
