//! Dismissal on outside pointer-down or Escape while a surface is open.

use crate::ui::document::{Document, DocumentEvent, EventKind, ListenerGuard};
use egui::{Key, Pos2, Rect};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

/// Screen areas that count as "inside". Empty until something is laid out.
#[derive(Debug, Clone, Default)]
pub struct Boundary(Rc<RefCell<Vec<Rect>>>);

impl Boundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> Vec<Rect> {
        self.0.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Replaces the boundary with the single `rect`.
    pub fn set(&self, rect: Rect) {
        *self.0.borrow_mut() = vec![rect];
    }

    /// Adds `rect` to the areas counted as inside.
    pub fn include(&self, rect: Rect) {
        self.0.borrow_mut().push(rect);
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// `None` when the boundary is empty.
    pub fn contains(&self, pos: Pos2) -> Option<bool> {
        let rects = self.0.borrow();
        if rects.is_empty() {
            return None;
        }
        Some(rects.iter().any(|rect| rect.contains(pos)))
    }
}

pub struct OutsideDismiss {
    document: Document,
    boundary: Boundary,
    on_dismiss: Rc<dyn Fn()>,
    guards: Option<[ListenerGuard; 2]>,
}

impl OutsideDismiss {
    pub const DISMISS_KEY: Key = Key::Escape;

    pub fn new<F>(document: Document, boundary: Boundary, on_dismiss: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            document,
            boundary,
            on_dismiss: Rc::new(on_dismiss),
            guards: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.guards.is_some()
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn set_active(&mut self, active: bool) {
        match (active, self.is_active()) {
            (true, false) => self.activate(),
            (false, true) => {
                self.guards = None;
                trace!("outside dismiss deactivated");
            }
            _ => {}
        }
    }

    fn activate(&mut self) {
        let pointer = {
            let boundary = self.boundary.clone();
            let on_dismiss = self.on_dismiss.clone();
            self.document
                .add_listener(EventKind::PointerDown, move |event| {
                    let DocumentEvent::PointerDown { pos } = event else {
                        return;
                    };
                    if boundary.contains(*pos) == Some(false) {
                        debug!(?pos, "pointer down outside boundary");
                        on_dismiss();
                    }
                })
        };
        let key = {
            let on_dismiss = self.on_dismiss.clone();
            self.document.add_listener(EventKind::KeyDown, move |event| {
                if matches!(event, DocumentEvent::KeyDown { key } if *key == Self::DISMISS_KEY) {
                    debug!("dismiss key pressed");
                    on_dismiss();
                }
            })
        };
        self.guards = Some([pointer, key]);
        trace!("outside dismiss activated");
    }
}
