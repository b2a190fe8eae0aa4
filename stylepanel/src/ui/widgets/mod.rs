mod arrow_button;
mod radio_group;
mod select;

pub use arrow_button::ArrowButton;
pub use radio_group::RadioGroup;
pub use select::Select;

/// Screen rectangles of the options a list laid out this frame.
pub type OptionRects = Vec<(&'static crate::params::StyleOption, egui::Rect)>;
