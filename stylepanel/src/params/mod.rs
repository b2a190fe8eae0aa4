mod options;
mod state;

pub use options::{
    contains, find, StyleOption, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS,
    FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};
pub use state::{ArticleState, Field, DEFAULT_ARTICLE_STATE};
