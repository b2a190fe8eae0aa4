//! Article parameters panel: the staged draft, the panel visibility and the
//! outside dismissal that closes it.

use crate::params::{self, ArticleState, Field, StyleOption};
use crate::ui::document::Document;
use crate::ui::outside_dismiss::{Boundary, OutsideDismiss};
use crate::ui::side_panel::{SidePanel, Trigger, Visibility};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info};

mod params_form;
pub use params_form::PanelLayout;

pub struct ArticleParamsForm {
    draft: ArticleState,
    panel: SidePanel,
    dismiss: OutsideDismiss,
    dismiss_requested: Rc<Cell<bool>>,
    layout: PanelLayout,
}

impl ArticleParamsForm {
    /// Creates a closed panel whose draft starts as a copy of `committed`.
    pub fn new(committed: &ArticleState, document: &Document, panel: SidePanel) -> Self {
        let dismiss_requested = Rc::new(Cell::new(false));
        let dismiss = {
            let requested = dismiss_requested.clone();
            OutsideDismiss::new(document.clone(), Boundary::new(), move || {
                requested.set(true)
            })
        };
        let mut form = Self {
            draft: *committed,
            panel,
            dismiss,
            dismiss_requested,
            layout: PanelLayout::default(),
        };
        form.sync_dismiss();
        form
    }

    pub fn draft(&self) -> &ArticleState {
        &self.draft
    }

    pub fn visibility(&self) -> Visibility {
        self.panel.visibility()
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn boundary(&self) -> &Boundary {
        self.dismiss.boundary()
    }

    /// Control rectangles from the last laid-out frame.
    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn is_dismiss_active(&self) -> bool {
        self.dismiss.is_active()
    }

    /// Stages `option` for `field` without touching the committed state.
    pub fn update_field(&mut self, field: Field, option: &'static StyleOption) {
        debug_assert!(
            params::contains(field.catalog(), option),
            "{} is not a {:?} option",
            option.value,
            field
        );
        debug!(?field, value = option.value, "draft updated");
        self.draft.set(field, option);
    }

    /// Commits the draft and closes the panel.
    pub fn submit(&mut self, committed: &mut ArticleState) {
        *committed = self.draft;
        info!(?committed, "article parameters applied");
        self.transition(Trigger::Submit);
    }

    /// Restores the defaults in both the draft and the committed state. The
    /// panel stays as it is.
    pub fn reset(&mut self, committed: &mut ArticleState) {
        self.draft = params::DEFAULT_ARTICLE_STATE;
        *committed = params::DEFAULT_ARTICLE_STATE;
        info!("article parameters reset to defaults");
    }

    pub fn toggle(&mut self) {
        self.transition(Trigger::Toggle);
    }

    /// Closes the panel if a dismissal was reported since the last call.
    /// Returns whether the panel closed.
    pub fn handle_dismissals(&mut self) -> bool {
        if !self.dismiss_requested.replace(false) {
            return false;
        }
        self.transition(Trigger::Dismiss)
    }

    fn transition(&mut self, trigger: Trigger) -> bool {
        let changed = self.panel.apply(trigger);
        if changed {
            self.sync_dismiss();
        }
        changed
    }

    fn sync_dismiss(&mut self) {
        let open = self.panel.is_open();
        if !open {
            self.dismiss_requested.set(false);
            self.boundary().clear();
        }
        self.dismiss.set_active(open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{BACKGROUND_COLORS, FONT_COLORS, FONT_SIZE_OPTIONS};
    use crate::ui::document::DocumentEvent;
    use egui::{pos2, Key, Rect};

    fn setup(committed: &ArticleState) -> (Document, ArticleParamsForm) {
        let document = Document::new();
        let form = ArticleParamsForm::new(committed, &document, SidePanel::default());
        (document, form)
    }

    fn open_with_boundary(form: &mut ArticleParamsForm) {
        form.toggle();
        form.boundary()
            .set(Rect::from_min_max(pos2(0.0, 0.0), pos2(600.0, 800.0)));
    }

    #[test]
    fn draft_starts_from_committed() {
        let committed = ArticleState::default().with(Field::FontColor, &FONT_COLORS[4]);
        let (_, form) = setup(&committed);
        assert_eq!(form.draft(), &committed);
        assert_eq!(form.visibility(), Visibility::Closed);
        assert!(!form.is_dismiss_active());
    }

    #[test]
    fn edits_stay_in_the_draft_until_submit() {
        let mut committed = ArticleState::default();
        let (_, mut form) = setup(&committed);
        let original = committed;

        for field in Field::ALL {
            for option in field.catalog() {
                form.update_field(field, option);
                assert_eq!(committed, original);
            }
        }
        form.submit(&mut committed);
        assert_eq!(&committed, form.draft());
    }

    #[test]
    fn submit_twice_is_same_as_once() {
        let mut committed = ArticleState::default();
        let (_, mut form) = setup(&committed);
        form.toggle();
        form.update_field(Field::FontSize, &FONT_SIZE_OPTIONS[2]);
        form.submit(&mut committed);
        let once = committed;
        form.submit(&mut committed);
        assert_eq!(committed, once);
        assert!(!form.is_open());
    }

    #[test]
    fn reset_restores_defaults_and_keeps_panel_open() {
        let mut committed = ArticleState::default()
            .with(Field::BackgroundColor, &BACKGROUND_COLORS[3])
            .with(Field::FontSize, &FONT_SIZE_OPTIONS[1]);
        let (_, mut form) = setup(&committed);
        form.toggle();
        form.update_field(Field::FontColor, &FONT_COLORS[9]);

        form.reset(&mut committed);

        assert_eq!(committed, params::DEFAULT_ARTICLE_STATE);
        assert_eq!(form.draft(), &params::DEFAULT_ARTICLE_STATE);
        assert!(form.is_open());
        assert!(form.is_dismiss_active());
    }

    #[test]
    fn detector_follows_visibility() {
        let mut committed = ArticleState::default();
        let (document, mut form) = setup(&committed);
        assert_eq!(document.listener_count(), 0);

        form.toggle();
        assert_eq!(document.listener_count(), 2);
        form.toggle();
        assert_eq!(document.listener_count(), 0);

        form.toggle();
        form.submit(&mut committed);
        assert_eq!(document.listener_count(), 0);

        form.toggle();
        drop(form);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn escape_while_closed_does_nothing() {
        let (document, mut form) = setup(&ArticleState::default());
        document.dispatch(&DocumentEvent::KeyDown { key: Key::Escape });
        assert!(!form.handle_dismissals());
        assert_eq!(form.visibility(), Visibility::Closed);
    }

    #[test]
    fn outside_click_closes_and_inside_click_does_not() {
        let (document, mut form) = setup(&ArticleState::default());
        open_with_boundary(&mut form);

        document.dispatch(&DocumentEvent::PointerDown {
            pos: pos2(100.0, 100.0),
        });
        assert!(!form.handle_dismissals());
        assert!(form.is_open());

        document.dispatch(&DocumentEvent::PointerDown {
            pos: pos2(900.0, 100.0),
        });
        assert!(form.handle_dismissals());
        assert!(!form.is_open());
        assert!(form.boundary().is_empty());
    }

    #[test]
    fn stale_dismissal_does_not_close_a_reopened_panel() {
        let (document, mut form) = setup(&ArticleState::default());
        open_with_boundary(&mut form);
        document.dispatch(&DocumentEvent::KeyDown { key: Key::Escape });
        form.toggle();
        form.toggle();
        assert!(!form.handle_dismissals());
        assert!(form.is_open());
    }
}
