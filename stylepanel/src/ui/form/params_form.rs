use super::ArticleParamsForm;
use crate::params::{ArticleState, Field, StyleOption};
use crate::ui::side_panel::SidePanel;
use crate::ui::widgets::{ArrowButton, OptionRects, RadioGroup, Select};
use egui::{Align, Context, Id, Layout, Order, Rect, RichText, Ui};
use egui_form::garde::GardeReport;
use egui_form::{Form, FormField};
use garde::Validate;

/// Where the panel's controls were laid out in the last open frame.
#[derive(Debug, Clone, Default)]
pub struct PanelLayout {
    pub toggle: Option<Rect>,
    /// Select headers, or the whole radio group for font size.
    pub controls: Vec<(Field, Rect)>,
    pub options: Vec<(Field, &'static StyleOption, Rect)>,
    pub reset: Option<Rect>,
    pub apply: Option<Rect>,
}

impl PanelLayout {
    pub fn control(&self, field: Field) -> Option<Rect> {
        self.controls
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rect)| *rect)
    }

    /// Rectangle of the option labelled `label` in `field`'s list, if listed.
    pub fn option(&self, field: Field, label: &str) -> Option<Rect> {
        self.options
            .iter()
            .find(|(f, option, _)| *f == field && option.label == label)
            .map(|(_, _, rect)| *rect)
    }
}

#[derive(Default)]
struct Intents {
    chosen: Vec<(Field, &'static StyleOption)>,
    submit: bool,
    reset: bool,
    layout: PanelLayout,
}

impl ArticleParamsForm {
    pub fn id() -> &'static str {
        "article-params"
    }

    /// Lays out the toggle button and, while open, the side panel. Submit and
    /// reset write into `committed`.
    pub fn show(&mut self, ctx: &Context, title: &str, committed: &mut ArticleState) {
        self.boundary().clear();

        let open = self.is_open();
        let width = self.panel.width;
        let draft = self.draft;
        let mut intents = Intents::default();

        let panel = egui::SidePanel::left(Id::new(Self::id()).with("panel"))
            .resizable(false)
            .exact_width(width)
            .show_animated(ctx, open, |ui| params_form(ui, title, &draft, &mut intents));
        if let Some(panel) = panel.filter(|_| open) {
            self.boundary().include(panel.response.rect);
        }

        let toggle_x = if open { width } else { 0.0 } + SidePanel::TOGGLE_MARGIN;
        let toggle = egui::Area::new(Id::new(Self::id()).with("toggle"))
            .order(Order::Foreground)
            .fixed_pos(egui::pos2(toggle_x, SidePanel::TOGGLE_MARGIN))
            .show(ctx, |ui| ui.add(ArrowButton::new(open)));
        let toggle_rect = Some(toggle.inner.rect);

        // the panel keeps painting while it slides out; nothing it reports then counts
        if open {
            self.boundary().include(toggle.response.rect);
            for (field, option) in intents.chosen {
                self.update_field(field, option);
            }
            if intents.reset {
                self.reset(committed);
            }
            if intents.submit {
                self.submit(committed);
            }
            self.layout = PanelLayout {
                toggle: toggle_rect,
                ..intents.layout
            };
        } else {
            self.layout = PanelLayout {
                toggle: toggle_rect,
                ..PanelLayout::default()
            };
        }
        if toggle.inner.clicked() {
            self.toggle();
        }
    }
}

fn params_form(ui: &mut Ui, title: &str, draft: &ArticleState, intents: &mut Intents) {
    let mut form = Form::new().add_report(GardeReport::new(draft.validate()));

    ui.add_space(SidePanel::TOGGLE_MARGIN * 2.0 + ArrowButton::SIZE);
    ui.label(RichText::new(title.to_uppercase()).size(31.0).strong());
    ui.add_space(20.0);

    for field in Field::ALL {
        if field == Field::BackgroundColor {
            ui.separator();
        }
        let selected = draft.get(field);
        if let Some(option) = field_control(ui, &mut form, field, selected, &mut intents.layout) {
            intents.chosen.push((field, option));
        }
        ui.add_space(12.0);
    }

    ui.with_layout(Layout::bottom_up(Align::Max), |ui| {
        ui.add_space(20.0);
        ui.horizontal(|ui| {
            let reset = ui.button("Reset");
            intents.layout.reset = Some(reset.rect);
            if reset.clicked() {
                intents.reset = true;
            }
            let apply = ui.button("Apply");
            intents.layout.apply = Some(apply.rect);
            if let Some(Ok(())) = form.handle_submit(&apply, ui) {
                intents.submit = true;
            }
        });
    });
}

fn field_control(
    ui: &mut Ui,
    form: &mut Form<GardeReport>,
    field: Field,
    selected: &'static StyleOption,
    layout: &mut PanelLayout,
) -> Option<&'static StyleOption> {
    let mut chosen = None;
    let mut rects = OptionRects::new();
    ui.label(RichText::new(field.title().to_uppercase()).strong());
    let response = match field {
        Field::FontSize => FormField::new(form, field.name()).ui(
            ui,
            RadioGroup::new(field.catalog(), selected, &mut chosen).record_rects(&mut rects),
        ),
        _ => {
            let id = ui.make_persistent_id(field.name());
            FormField::new(form, field.name()).ui(
                ui,
                Select::new(id, field.catalog(), selected, &mut chosen).record_rects(&mut rects),
            )
        }
    };
    let mut rect = response.rect;
    if field != Field::FontSize {
        // an unfolded select spans its list too; keep the header row
        rect.set_height(rect.height().min(ui.spacing().interact_size.y));
    }
    layout.controls.push((field, rect));
    layout
        .options
        .extend(rects.into_iter().map(|(option, rect)| (field, option, rect)));
    chosen
}
