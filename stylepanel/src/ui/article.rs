use crate::style::ResolvedStyle;
use egui::{Frame, Label, RichText, ScrollArea, Ui};

const TITLE: &str = "Human-scale typography";

const PARAGRAPHS: [&str; 4] = [
    "Type is the voice of a page. Before a reader follows a single argument, the \
     shape of the letters, the distance between lines and the width of the column \
     have already decided whether reading will feel like a walk or a climb.",
    "Line length matters more than most people expect. A column that is too wide \
     makes the eye hunt for the start of the next line; one that is too narrow \
     breaks the rhythm of every sentence into short, nervous steps.",
    "Size and color work together. Large type on a busy background can still be \
     tiring, while modest type with enough contrast stays comfortable for hours. \
     Try a few combinations and notice which one you stop noticing.",
    "Good settings disappear. When the page is right, the reader only sees the \
     words, and the choices that made it right are nowhere to be found.",
];

/// Sample article painted with the committed style.
pub struct ArticleView<'a> {
    style: &'a ResolvedStyle,
}

impl<'a> ArticleView<'a> {
    pub fn new(style: &'a ResolvedStyle) -> Self {
        Self { style }
    }

    pub fn frame(&self, ui_style: &egui::Style) -> Frame {
        Frame::central_panel(ui_style).fill(self.style.bg_color)
    }

    pub fn show(&self, ui: &mut Ui) {
        let style = self.style;
        let text = |text: &str, scale: f32| {
            RichText::new(text)
                .size(style.font_size * scale)
                .color(style.font_color)
                .family(style.font_family.clone())
        };

        ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
            let available = ui.available_width();
            let width = style.container_width.min(available);
            ui.horizontal(|ui| {
                ui.add_space((available - width) / 2.0);
                ui.vertical(|ui| {
                    ui.set_width(width);
                    ui.add_space(style.font_size * 2.0);
                    ui.add(Label::new(text(TITLE, 2.0).strong()).wrap());
                    for paragraph in PARAGRAPHS {
                        ui.add_space(style.font_size);
                        ui.add(Label::new(text(paragraph, 1.0)).wrap());
                    }
                    ui.add_space(style.font_size * 2.0);
                });
            });
        });
    }
}
