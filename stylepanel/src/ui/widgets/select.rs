use super::OptionRects;
use crate::params::StyleOption;
use crate::style::parse_color;
use egui::{Button, Context, Id, Response, RichText, Sense, Ui, Vec2, Widget};

#[derive(Debug, Clone, Default)]
struct SelectState {
    expanded: bool,
}

impl SelectState {
    fn load(ctx: &Context, id: Id) -> Self {
        ctx.data_mut(|d| d.get_temp::<Self>(id).unwrap_or_default())
    }

    fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }
}

/// Single-choice list over a catalog.
///
/// The list unfolds in place below its header instead of in a popup, so the
/// open list stays inside the surrounding panel's area.
pub struct Select<'a> {
    id: Id,
    options: &'static [StyleOption],
    selected: &'static StyleOption,
    chosen: &'a mut Option<&'static StyleOption>,
    rects: Option<&'a mut OptionRects>,
}

impl<'a> Select<'a> {
    const SWATCH: f32 = 12.0;

    pub fn new(
        id: Id,
        options: &'static [StyleOption],
        selected: &'static StyleOption,
        chosen: &'a mut Option<&'static StyleOption>,
    ) -> Self {
        Self {
            id,
            options,
            selected,
            chosen,
            rects: None,
        }
    }

    /// Appends the rectangle of every listed option to `rects` while the list
    /// is unfolded.
    pub fn record_rects(mut self, rects: &'a mut OptionRects) -> Self {
        self.rects = Some(rects);
        self
    }
}

impl Widget for Select<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let mut state = SelectState::load(ui.ctx(), self.id);
        let mut picked = None;
        let width = ui.available_width();

        let mut response = ui
            .vertical(|ui| {
                let marker = if state.expanded { "⏶" } else { "⏷" };
                let header = Button::new(format!("{}  {marker}", self.selected.label))
                    .min_size(Vec2::new(width, 0.0));
                if ui.add(header).clicked() {
                    state.expanded = !state.expanded;
                }
                if !state.expanded {
                    return;
                }
                ui.indent(self.id.with("options"), |ui| {
                    for option in self.options {
                        let is_selected = option == self.selected;
                        let row = ui
                            .horizontal(|ui| {
                                swatch(ui, option);
                                ui.selectable_label(is_selected, RichText::new(option.label))
                            })
                            .inner;
                        if let Some(rects) = self.rects.as_deref_mut() {
                            rects.push((option, row.rect));
                        }
                        if row.clicked() {
                            state.expanded = false;
                            if !is_selected {
                                picked = Some(option);
                            }
                        }
                    }
                });
            })
            .response;

        state.store(ui.ctx(), self.id);
        if picked.is_some() {
            *self.chosen = picked;
            response.mark_changed();
        }
        response
    }
}

fn swatch(ui: &mut Ui, option: &StyleOption) {
    let Ok(color) = parse_color(option.value) else {
        return;
    };
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(Select::SWATCH), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.painter().rect_stroke(
        rect,
        2.0,
        ui.visuals().widgets.noninteractive.bg_stroke,
        egui::StrokeKind::Inside,
    );
}
