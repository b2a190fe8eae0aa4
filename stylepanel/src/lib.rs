pub mod app;
pub mod consts;
pub mod errors;
pub mod params;
pub mod style;
pub mod ui;
