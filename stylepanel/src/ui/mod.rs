pub mod article;
pub mod document;
pub mod form;
pub mod outside_dismiss;
pub mod side_panel;
pub mod widgets;
