use crate::consts::{APP_NAME, DEFAULT_TITLE, MIN_WINDOW_SIZE, REPOSITORY_URL};
use crate::params::ArticleState;
use crate::style::{ResolvedStyle, StyleVars};
use crate::ui::article::ArticleView;
use crate::ui::document::{Document, DocumentEvent};
use crate::ui::form::ArticleParamsForm;
use crate::ui::side_panel::SidePanel;
use eframe::{egui, NativeOptions};
use egui::ViewportBuilder;
use egui_theme_switch::global_theme_switch;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub title: String,
    pub panel_width: f32,
    pub min_window_size: (f32, f32),
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            panel_width: SidePanel::DEFAULT_WIDTH,
            min_window_size: MIN_WINDOW_SIZE,
        }
    }
}

impl AppOptions {
    pub fn native_options(&self) -> NativeOptions {
        NativeOptions {
            centered: true,
            viewport: ViewportBuilder::default().with_min_inner_size(self.min_window_size),
            ..Default::default()
        }
    }
}

pub struct StylePanelApp {
    /// Committed article parameters; the panel only ever holds a draft.
    pub params: ArticleState,
    pub form: ArticleParamsForm,
    pub document: Document,
    pub opts: AppOptions,
    style_vars: StyleVars,
    style: ResolvedStyle,
}

impl StylePanelApp {
    pub fn new(opts: AppOptions) -> Self {
        let params = ArticleState::default();
        let document = Document::new();
        let form = ArticleParamsForm::new(&params, &document, SidePanel::new(opts.panel_width));
        let style_vars = StyleVars::project(&params);
        let style = resolve_or_default(&style_vars);
        Self {
            params,
            form,
            document,
            opts,
            style_vars,
            style,
        }
    }

    pub fn start(opts: AppOptions) -> eframe::Result<()> {
        let native_options = opts.native_options();
        eframe::run_native(
            APP_NAME,
            native_options,
            Box::new(|cc| {
                catppuccin_egui::set_theme(&cc.egui_ctx, catppuccin_egui::FRAPPE);
                Ok(Box::new(StylePanelApp::new(opts)))
            }),
        )
    }

    pub fn style_vars(&self) -> &StyleVars {
        &self.style_vars
    }

    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    /// Runs one frame of the panel and preview without the window chrome.
    pub fn frame(&mut self, ctx: &egui::Context) {
        self.dispatch_input(ctx);
        self.form.handle_dismissals();
        self.form.show(ctx, &self.opts.title, &mut self.params);
        self.refresh_style();

        let view = ArticleView::new(&self.style);
        egui::CentralPanel::default()
            .frame(view.frame(&ctx.style()))
            .show(ctx, |ui| view.show(ui));
    }

    fn dispatch_input(&self, ctx: &egui::Context) {
        // a discarded pass replays the same input
        if ctx.current_pass_index() > 0 {
            return;
        }
        let events = ctx.input(|i| i.events.clone());
        for event in events.iter().filter_map(DocumentEvent::from_egui) {
            self.document.dispatch(&event);
        }
    }

    fn refresh_style(&mut self) {
        let vars = StyleVars::project(&self.params);
        if vars == self.style_vars {
            return;
        }
        info!(
            vars = ?vars.iter().collect::<Vec<_>>(),
            "style variables updated"
        );
        self.style = resolve_or_default(&vars);
        self.style_vars = vars;
    }
}

impl eframe::App for StylePanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("main_bottom_panel").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                global_theme_switch(ui);
                ui.hyperlink_to("About", REPOSITORY_URL);
            });
        });
        self.frame(ctx);
    }
}

fn resolve_or_default(vars: &StyleVars) -> ResolvedStyle {
    ResolvedStyle::resolve(vars).unwrap_or_else(|err| {
        error!("failed to resolve style variables: {err}");
        ResolvedStyle::default()
    })
}
