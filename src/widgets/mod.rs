//! Built-in widgets: text, image, button, spacer.
//!
//! A representative set, not a catalog — projects register their own
//! widgets alongside these through
//! [`WidgetRegistry::register`](crate::widget::WidgetRegistry::register).

pub mod button;
pub mod image;
pub mod spacer;
pub mod text;

pub use button::ButtonWidget;
pub use image::ImageWidget;
pub use spacer::SpacerWidget;
pub use text::TextWidget;
