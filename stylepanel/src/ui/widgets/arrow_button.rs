use egui::{Button, Response, RichText, Ui, Vec2, Widget};

/// Round toggle that points toward the direction the panel will move.
pub struct ArrowButton {
    open: bool,
}

impl ArrowButton {
    pub const SIZE: f32 = 48.0;

    pub fn new(open: bool) -> Self {
        Self { open }
    }
}

impl Widget for ArrowButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let arrow = if self.open { "◀" } else { "▶" };
        let hover = if self.open {
            "Close the parameters panel"
        } else {
            "Open the parameters panel"
        };
        Button::new(RichText::new(arrow).size(20.0))
            .corner_radius(Self::SIZE / 2.0)
            .min_size(Vec2::splat(Self::SIZE))
            .ui(ui)
            .on_hover_text(hover)
    }
}
