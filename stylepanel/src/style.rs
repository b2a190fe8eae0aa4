//! Projection of the committed article state onto style variables, and
//! resolution of those variables into values the preview can paint with.

use crate::errors::StyleError;
use crate::params::{ArticleState, Field};
use egui::{Color32, FontFamily};
use indexmap::IndexMap;

pub const FONT_FAMILY_VAR: &str = "--font-family";
pub const FONT_SIZE_VAR: &str = "--font-size";
pub const FONT_COLOR_VAR: &str = "--font-color";
pub const CONTAINER_WIDTH_VAR: &str = "--container-width";
pub const BG_COLOR_VAR: &str = "--bg-color";

/// Style variables in the order they are applied to the preview container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleVars(IndexMap<&'static str, &'static str>);

impl StyleVars {
    pub fn project(state: &ArticleState) -> Self {
        let vars = [
            (FONT_FAMILY_VAR, Field::FontFamily),
            (FONT_SIZE_VAR, Field::FontSize),
            (FONT_COLOR_VAR, Field::FontColor),
            (CONTAINER_WIDTH_VAR, Field::ContentWidth),
            (BG_COLOR_VAR, Field::BackgroundColor),
        ]
        .into_iter()
        .map(|(name, field)| (name, state.get(field).value))
        .collect();
        Self(vars)
    }

    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(name, value)| (*name, *value))
    }

    fn require(&self, name: &'static str) -> Result<&'static str, StyleError> {
        self.get(name).ok_or(StyleError::MissingVar(name))
    }
}

/// Concrete rendering values derived from [`StyleVars`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font_family: FontFamily,
    pub font_size: f32,
    pub font_color: Color32,
    pub container_width: f32,
    pub bg_color: Color32,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Proportional,
            font_size: 18.0,
            font_color: Color32::BLACK,
            container_width: 1394.0,
            bg_color: Color32::WHITE,
        }
    }
}

impl ResolvedStyle {
    pub fn resolve(vars: &StyleVars) -> Result<Self, StyleError> {
        Ok(Self {
            font_family: parse_font_family(vars.require(FONT_FAMILY_VAR)?),
            font_size: parse_px(vars.require(FONT_SIZE_VAR)?)?,
            font_color: parse_color(vars.require(FONT_COLOR_VAR)?)?,
            container_width: parse_px(vars.require(CONTAINER_WIDTH_VAR)?)?,
            bg_color: parse_color(vars.require(BG_COLOR_VAR)?)?,
        })
    }
}

pub fn parse_px(value: &str) -> Result<f32, StyleError> {
    value
        .trim()
        .strip_suffix("px")
        .and_then(|number| number.trim().parse::<f32>().ok())
        .filter(|number| number.is_finite() && *number >= 0.0)
        .ok_or_else(|| StyleError::Length(value.to_string()))
}

pub fn parse_color(value: &str) -> Result<Color32, StyleError> {
    let invalid = || StyleError::Color(value.to_string());
    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(invalid)
    };
    Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Picks the egui family for a font stack by its generic family name.
pub fn parse_font_family(value: &str) -> FontFamily {
    let generic = value.rsplit(',').next().unwrap_or(value).trim();
    if generic.eq_ignore_ascii_case("monospace") {
        FontFamily::Monospace
    } else {
        FontFamily::Proportional
    }
}
