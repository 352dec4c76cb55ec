/// What a click landed on, as far as the navigation menu cares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub on_toggle: bool,
    pub in_menu: bool,
    pub on_menu_link: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Click handled by the toggle control's own listener.
    ToggleClick,
    /// Any click bubbling to the document, including ones on the toggle.
    DocumentClick(ClickTarget),
    KeyDown(&'static str),
}

impl NavEvent {
    /// Map a raw key name; only Escape matters here.
    pub fn key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(NavEvent::KeyDown("Escape"))
    }
}

/// Open/closed state of the mobile navigation. Always starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply an event; returns `true` when the state changed.
    pub fn handle(&mut self, event: NavEvent) -> bool {
        let next = match event {
            NavEvent::ToggleClick => !self.open,
            NavEvent::KeyDown("Escape") => false,
            NavEvent::KeyDown(_) => self.open,
            NavEvent::DocumentClick(target) => {
                if target.on_menu_link {
                    false
                } else if !target.on_toggle && !target.in_menu {
                    false
                } else {
                    self.open
                }
            }
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }
}

/// Attribute value written for the current state.
#[inline]
pub fn flag_value(open: bool) -> &'static str {
    if open {
        "true"
    } else {
        "false"
    }
}
