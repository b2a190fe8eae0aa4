//! Application-wide listener registry for pointer and keyboard activity.
//!
//! The frame loop translates egui input into [`DocumentEvent`]s and hands them
//! to [`Document::dispatch`]. Listeners are owned through [`ListenerGuard`]s and
//! leave the registry as soon as their guard is dropped.

use egui::{Key, Pos2};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    KeyDown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocumentEvent {
    PointerDown { pos: Pos2 },
    KeyDown { key: Key },
}

impl DocumentEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DocumentEvent::PointerDown { .. } => EventKind::PointerDown,
            DocumentEvent::KeyDown { .. } => EventKind::KeyDown,
        }
    }

    /// Press events only; releases, moves and text input are ignored.
    pub fn from_egui(event: &egui::Event) -> Option<Self> {
        match event {
            egui::Event::PointerButton {
                pos, pressed: true, ..
            } => Some(DocumentEvent::PointerDown { pos: *pos }),
            egui::Event::Key {
                key, pressed: true, ..
            } => Some(DocumentEvent::KeyDown { key: *key }),
            _ => None,
        }
    }
}

type Callback = Rc<RefCell<dyn FnMut(&DocumentEvent)>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Listener {
    kind: EventKind,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: IndexMap<ListenerId, Listener>,
}

#[derive(Clone, Default)]
pub struct Document {
    registry: Rc<RefCell<Registry>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener<F>(&self, kind: EventKind, callback: F) -> ListenerGuard
    where
        F: FnMut(&DocumentEvent) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.insert(
            id,
            Listener {
                kind,
                callback: Rc::new(RefCell::new(callback)),
            },
        );
        trace!(?id, ?kind, "listener registered");
        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every listener of its kind in registration order and
    /// returns how many were invoked.
    pub fn dispatch(&self, event: &DocumentEvent) -> usize {
        let kind = event.kind();
        let targets: Vec<(ListenerId, Callback)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, listener)| listener.kind == kind)
            .map(|(id, listener)| (*id, listener.callback.clone()))
            .collect();

        let mut invoked = 0;
        for (id, callback) in targets {
            // an earlier callback may have released this listener
            if !self.registry.borrow().listeners.contains_key(&id) {
                continue;
            }
            let mut callback = callback.borrow_mut();
            (*callback)(event);
            invoked += 1;
        }
        invoked
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Registration handle; dropping it removes the listener.
#[must_use = "the listener is removed when the guard is dropped"]
pub struct ListenerGuard {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.shift_remove(&self.id);
            trace!(id = ?self.id, "listener released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Modifiers, PointerButton};
    use std::cell::Cell;

    fn escape() -> DocumentEvent {
        DocumentEvent::KeyDown { key: Key::Escape }
    }

    #[test]
    fn dispatch_reaches_only_matching_kind() {
        let document = Document::new();
        let keys = Rc::new(Cell::new(0));
        let pointers = Rc::new(Cell::new(0));
        let _key_guard = {
            let keys = keys.clone();
            document.add_listener(EventKind::KeyDown, move |_| keys.set(keys.get() + 1))
        };
        let _pointer_guard = {
            let pointers = pointers.clone();
            document.add_listener(EventKind::PointerDown, move |_| {
                pointers.set(pointers.get() + 1)
            })
        };

        assert_eq!(document.dispatch(&escape()), 1);
        assert_eq!(keys.get(), 1);
        assert_eq!(pointers.get(), 0);
    }

    #[test]
    fn dropping_guard_unregisters_listener() {
        let document = Document::new();
        let hits = Rc::new(Cell::new(0));
        let guard = {
            let hits = hits.clone();
            document.add_listener(EventKind::KeyDown, move |_| hits.set(hits.get() + 1))
        };
        assert_eq!(document.listener_count(), 1);
        drop(guard);
        assert_eq!(document.listener_count(), 0);
        assert_eq!(document.dispatch(&escape()), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn listener_released_during_dispatch_is_skipped() {
        let document = Document::new();
        let second_hits = Rc::new(Cell::new(0));
        let second: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));

        let _first = {
            let second = second.clone();
            document.add_listener(EventKind::KeyDown, move |_| {
                second.borrow_mut().take();
            })
        };
        *second.borrow_mut() = Some({
            let hits = second_hits.clone();
            document.add_listener(EventKind::KeyDown, move |_| hits.set(hits.get() + 1))
        });

        assert_eq!(document.dispatch(&escape()), 1);
        assert_eq!(second_hits.get(), 0);
        assert_eq!(document.listener_count(), 1);
    }

    #[test]
    fn guard_outliving_document_is_harmless() {
        let document = Document::new();
        let guard = document.add_listener(EventKind::PointerDown, |_| {});
        drop(document);
        drop(guard);
    }

    #[test]
    fn translates_presses_from_egui() {
        let press = egui::Event::PointerButton {
            pos: Pos2::new(3.0, 4.0),
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::NONE,
        };
        let release = egui::Event::PointerButton {
            pos: Pos2::new(3.0, 4.0),
            button: PointerButton::Primary,
            pressed: false,
            modifiers: Modifiers::NONE,
        };
        let key = egui::Event::Key {
            key: Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        };

        assert_eq!(
            DocumentEvent::from_egui(&press),
            Some(DocumentEvent::PointerDown {
                pos: Pos2::new(3.0, 4.0)
            })
        );
        assert_eq!(DocumentEvent::from_egui(&release), None);
        assert_eq!(DocumentEvent::from_egui(&key), Some(escape()));
        assert_eq!(DocumentEvent::from_egui(&egui::Event::Copy), None);
    }
}
