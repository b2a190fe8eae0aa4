use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    Open,
    #[default]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Toggle,
    Dismiss,
    Submit,
}

impl Visibility {
    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }

    pub fn next(self, trigger: Trigger) -> Self {
        match (self, trigger) {
            (Visibility::Closed, Trigger::Toggle) => Visibility::Open,
            (Visibility::Open, _) => Visibility::Closed,
            (Visibility::Closed, Trigger::Dismiss | Trigger::Submit) => Visibility::Closed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SidePanel {
    visibility: Visibility,
    pub width: f32,
}

impl Default for SidePanel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH)
    }
}

impl SidePanel {
    pub const DEFAULT_WIDTH: f32 = 616.0;
    pub const MIN_WIDTH: f32 = 320.0;
    pub const MAX_WIDTH: f32 = 720.0;
    /// Gap between the toggle button and the window or panel edge.
    pub const TOGGLE_MARGIN: f32 = 12.0;

    pub fn new(width: f32) -> Self {
        Self {
            visibility: Visibility::Closed,
            width: width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// Applies `trigger`, returning whether the visibility changed.
    pub fn apply(&mut self, trigger: Trigger) -> bool {
        let next = self.visibility.next(trigger);
        if next == self.visibility {
            return false;
        }
        debug!(from = ?self.visibility, to = ?next, ?trigger, "side panel transition");
        self.visibility = next;
        true
    }
}
