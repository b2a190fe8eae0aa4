use super::options::{
    self, StyleOption, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS, FONT_FAMILY_OPTIONS,
    FONT_SIZE_OPTIONS,
};
use crate::errors::StyleError;
use garde::Validate;

/// The five chosen options that make up the article style.
///
/// Both the committed state and the panel's draft are values of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct ArticleState {
    #[garde(custom(font_family_member))]
    pub font_family: &'static StyleOption,
    #[garde(custom(font_size_member))]
    pub font_size: &'static StyleOption,
    #[garde(custom(font_color_member))]
    pub font_color: &'static StyleOption,
    #[garde(custom(background_color_member))]
    pub background_color: &'static StyleOption,
    #[garde(custom(content_width_member))]
    pub content_width: &'static StyleOption,
}

pub static DEFAULT_ARTICLE_STATE: ArticleState = ArticleState {
    font_family: &FONT_FAMILY_OPTIONS[0],
    font_size: &FONT_SIZE_OPTIONS[0],
    font_color: &FONT_COLORS[0],
    background_color: &BACKGROUND_COLORS[0],
    content_width: &CONTENT_WIDTH_OPTIONS[0],
};

impl Default for ArticleState {
    fn default() -> Self {
        DEFAULT_ARTICLE_STATE
    }
}

impl ArticleState {
    pub fn get(&self, field: Field) -> &'static StyleOption {
        match field {
            Field::FontFamily => self.font_family,
            Field::FontSize => self.font_size,
            Field::FontColor => self.font_color,
            Field::BackgroundColor => self.background_color,
            Field::ContentWidth => self.content_width,
        }
    }

    pub fn set(&mut self, field: Field, option: &'static StyleOption) {
        let slot = match field {
            Field::FontFamily => &mut self.font_family,
            Field::FontSize => &mut self.font_size,
            Field::FontColor => &mut self.font_color,
            Field::BackgroundColor => &mut self.background_color,
            Field::ContentWidth => &mut self.content_width,
        };
        *slot = option;
    }

    pub fn with(mut self, field: Field, option: &'static StyleOption) -> Self {
        self.set(field, option);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl Field {
    /// Fields in panel order.
    pub const ALL: [Field; 5] = [
        Field::FontFamily,
        Field::FontSize,
        Field::FontColor,
        Field::BackgroundColor,
        Field::ContentWidth,
    ];

    /// Validation path of the field, matching the `ArticleState` member name.
    pub fn name(self) -> &'static str {
        match self {
            Field::FontFamily => "font_family",
            Field::FontSize => "font_size",
            Field::FontColor => "font_color",
            Field::BackgroundColor => "background_color",
            Field::ContentWidth => "content_width",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Field::FontFamily => "Font",
            Field::FontSize => "Font size",
            Field::FontColor => "Font color",
            Field::BackgroundColor => "Background color",
            Field::ContentWidth => "Content width",
        }
    }

    pub fn catalog(self) -> &'static [StyleOption] {
        match self {
            Field::FontFamily => &FONT_FAMILY_OPTIONS,
            Field::FontSize => &FONT_SIZE_OPTIONS,
            Field::FontColor => &FONT_COLORS,
            Field::BackgroundColor => &BACKGROUND_COLORS,
            Field::ContentWidth => &CONTENT_WIDTH_OPTIONS,
        }
    }

    /// Name of the style variable the field is projected to.
    pub fn style_var(self) -> &'static str {
        match self {
            Field::FontFamily => "--font-family",
            Field::FontSize => "--font-size",
            Field::FontColor => "--font-color",
            Field::BackgroundColor => "--bg-color",
            Field::ContentWidth => "--container-width",
        }
    }

    pub fn option(self, value: &str) -> Result<&'static StyleOption, StyleError> {
        options::find(self.catalog(), value).ok_or_else(|| StyleError::UnknownOption {
            field: self.name(),
            value: value.to_string(),
        })
    }
}

fn member_of(field: Field, value: &StyleOption) -> garde::Result {
    if options::contains(field.catalog(), value) {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "`{}` is not a {} option",
            value.label,
            field.title().to_lowercase()
        )))
    }
}

fn font_family_member(value: &&'static StyleOption, _: &()) -> garde::Result {
    member_of(Field::FontFamily, value)
}

fn font_size_member(value: &&'static StyleOption, _: &()) -> garde::Result {
    member_of(Field::FontSize, value)
}

fn font_color_member(value: &&'static StyleOption, _: &()) -> garde::Result {
    member_of(Field::FontColor, value)
}

fn background_color_member(value: &&'static StyleOption, _: &()) -> garde::Result {
    member_of(Field::BackgroundColor, value)
}

fn content_width_member(value: &&'static StyleOption, _: &()) -> garde::Result {
    member_of(Field::ContentWidth, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    static STRAY: StyleOption = StyleOption::new("Teal", "#008080");

    #[test]
    fn default_state_uses_first_entry_of_each_catalog() {
        let state = ArticleState::default();
        for field in Field::ALL {
            assert_eq!(state.get(field), &field.catalog()[0]);
        }
        assert_eq!(state.font_size.value, "18px");
    }

    #[test]
    fn set_replaces_only_the_given_field() {
        for field in Field::ALL {
            for option in field.catalog() {
                let before = ArticleState::default();
                let after = before.with(field, option);
                assert_eq!(after.get(field), option);
                for other in Field::ALL.into_iter().filter(|f| *f != field) {
                    assert_eq!(after.get(other), before.get(other));
                }
            }
        }
    }

    #[test]
    fn option_lookup_reports_unknown_values() {
        assert_eq!(Field::FontSize.option("38px").unwrap().label, "38px");
        let err = Field::BackgroundColor.option("#123456").unwrap_err();
        assert!(matches!(
            err,
            StyleError::UnknownOption { field: "background_color", .. }
        ));
    }

    #[test]
    fn validation_accepts_catalog_members_only() {
        assert!(ArticleState::default().validate().is_ok());
        let stray = ArticleState::default().with(Field::FontColor, &STRAY);
        let report = stray.validate().unwrap_err();
        assert!(report
            .iter()
            .any(|(path, _)| path.to_string() == "font_color"));
    }
}
