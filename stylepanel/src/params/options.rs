//! Static catalogs of every value the panel can offer.

/// One selectable entry of a catalog.
///
/// `value` is the concrete style token (a font stack, a `px` length or a
/// `#RRGGBB` color) and `class_name` is an optional rendering hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleOption {
    pub label: &'static str,
    pub value: &'static str,
    pub class_name: Option<&'static str>,
}

impl StyleOption {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value,
            class_name: None,
        }
    }

    pub const fn with_class(label: &'static str, value: &'static str, class: &'static str) -> Self {
        Self {
            label,
            value,
            class_name: Some(class),
        }
    }
}

pub static FONT_FAMILY_OPTIONS: [StyleOption; 6] = [
    StyleOption::with_class("Open Sans", "'Open Sans', sans-serif", "open-sans"),
    StyleOption::with_class("Ubuntu", "Ubuntu, sans-serif", "ubuntu"),
    StyleOption::with_class(
        "Cormorant Garamond",
        "'Cormorant Garamond', serif",
        "cormorant-garamond",
    ),
    StyleOption::with_class("Days One", "'Days One', sans-serif", "days-one"),
    StyleOption::with_class("Merriweather", "Merriweather, serif", "merriweather"),
    StyleOption::with_class("JetBrains Mono", "'JetBrains Mono', monospace", "jetbrains-mono"),
];

pub static FONT_SIZE_OPTIONS: [StyleOption; 3] = [
    StyleOption::new("18px", "18px"),
    StyleOption::new("24px", "24px"),
    StyleOption::new("38px", "38px"),
];

pub static FONT_COLORS: [StyleOption; 10] = [
    StyleOption::with_class("Black", "#000000", "font-black"),
    StyleOption::with_class("White", "#FFFFFF", "font-white"),
    StyleOption::with_class("Gray", "#C4C4C4", "font-gray"),
    StyleOption::with_class("Pink", "#FEAFE8", "font-pink"),
    StyleOption::with_class("Hot pink", "#FD24AF", "font-hot-pink"),
    StyleOption::with_class("Orange", "#FD4C24", "font-orange"),
    StyleOption::with_class("Yellow", "#FFC802", "font-yellow"),
    StyleOption::with_class("Green", "#80D994", "font-green"),
    StyleOption::with_class("Blue", "#6FC1FD", "font-blue"),
    StyleOption::with_class("Purple", "#5F24FD", "font-purple"),
];

pub static BACKGROUND_COLORS: [StyleOption; 9] = [
    StyleOption::with_class("White", "#FFFFFF", "bg-white"),
    StyleOption::with_class("Black", "#000000", "bg-black"),
    StyleOption::with_class("Gray", "#C4C4C4", "bg-gray"),
    StyleOption::with_class("Pink", "#FEAFE8", "bg-pink"),
    StyleOption::with_class("Yellow", "#FFC802", "bg-yellow"),
    StyleOption::with_class("Green", "#80D994", "bg-green"),
    StyleOption::with_class("Swamp green", "#4B5D3A", "bg-swamp-green"),
    StyleOption::with_class("Blue", "#6FC1FD", "bg-blue"),
    StyleOption::with_class("Purple", "#5F24FD", "bg-purple"),
];

pub static CONTENT_WIDTH_OPTIONS: [StyleOption; 2] = [
    StyleOption::with_class("Wide", "1394px", "width-wide"),
    StyleOption::with_class("Narrow", "948px", "width-narrow"),
];

/// Finds the entry of `catalog` whose value token equals `value`.
pub fn find(catalog: &'static [StyleOption], value: &str) -> Option<&'static StyleOption> {
    catalog.iter().find(|option| option.value == value)
}

pub fn contains(catalog: &[StyleOption], option: &StyleOption) -> bool {
    catalog.iter().any(|entry| entry == option)
}
