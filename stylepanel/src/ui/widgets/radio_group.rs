use super::OptionRects;
use crate::params::StyleOption;
use egui::{Response, Ui, Widget};

/// Horizontal single-choice group over a catalog.
///
/// A newly chosen option is written to the `chosen` slot and the returned
/// response is marked changed. Re-picking the selected option reports nothing.
pub struct RadioGroup<'a> {
    options: &'static [StyleOption],
    selected: &'static StyleOption,
    chosen: &'a mut Option<&'static StyleOption>,
    rects: Option<&'a mut OptionRects>,
}

impl<'a> RadioGroup<'a> {
    pub fn new(
        options: &'static [StyleOption],
        selected: &'static StyleOption,
        chosen: &'a mut Option<&'static StyleOption>,
    ) -> Self {
        Self {
            options,
            selected,
            chosen,
            rects: None,
        }
    }

    /// Appends the rectangle of every radio button to `rects`.
    pub fn record_rects(mut self, rects: &'a mut OptionRects) -> Self {
        self.rects = Some(rects);
        self
    }
}

impl Widget for RadioGroup<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let mut picked = None;
        let mut response = ui
            .horizontal_wrapped(|ui| {
                for option in self.options {
                    let is_selected = option == self.selected;
                    let radio = ui.radio(is_selected, option.label);
                    if let Some(rects) = self.rects.as_deref_mut() {
                        rects.push((option, radio.rect));
                    }
                    if radio.clicked() && !is_selected {
                        picked = Some(option);
                    }
                }
            })
            .response;
        if picked.is_some() {
            *self.chosen = picked;
            response.mark_changed();
        }
        response
    }
}
