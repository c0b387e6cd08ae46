//! Active-section tracking and the mobile drawer.

/// Insets applied to the viewport when deciding which section is "in view". The larger
/// top inset biases the choice toward sections whose top has passed the upper third.
pub const OBSERVER_ROOT_MARGIN: &str = "-30% 0px -50% 0px";
/// Vertical scroll offset past which the header turns opaque.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Stats,
    Contact,
}

impl Section {
    /// Document order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Stats,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Stats => "stats",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// One-line description shown under the link in the drawer.
    pub fn blurb(self) -> &'static str {
        match self {
            Section::Home => "Back to top",
            Section::About => "Learn about me",
            Section::Projects => "See my work",
            Section::Skills => "My expertise",
            Section::Stats => "My achievements",
            Section::Contact => "Get in touch",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
    pub drawer_open: bool,
}

impl NavState {
    /// Apply one batch of intersection reports. Every intersecting entry overwrites the
    /// active section, so the last one in the batch wins regardless of document order.
    pub fn observe<'a>(&mut self, entries: impl IntoIterator<Item = (&'a str, bool)>) {
        for (id, intersecting) in entries {
            if !intersecting {
                continue;
            }
            if let Some(section) = Section::from_id(id) {
                self.active = section;
            }
        }
    }

    /// A link was followed: the target becomes active and the drawer closes.
    pub fn activate(&mut self, section: Section) {
        self.active = section;
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Returns true when the key closed the drawer.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.drawer_open {
            self.drawer_open = false;
            return true;
        }
        false
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let nav = NavState::default();
        assert_eq!(nav.active, Section::Home);
        assert!(!nav.drawer_open);
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("blog"), None);
    }

    #[test]
    fn test_last_intersecting_entry_wins() {
        let mut nav = NavState::default();
        nav.observe([("skills", true), ("about", true), ("contact", false)]);
        assert_eq!(nav.active, Section::About);

        // Unknown ids and non-intersecting entries leave the state alone
        nav.observe([("footer", true), ("projects", false)]);
        assert_eq!(nav.active, Section::About);
    }

    #[test]
    fn test_activate_closes_drawer() {
        let mut nav = NavState::default();
        nav.toggle_drawer();
        assert!(nav.drawer_open);
        nav.activate(Section::Contact);
        assert_eq!(nav.active, Section::Contact);
        assert!(!nav.drawer_open);
    }

    #[test]
    fn test_escape_only_closes_open_drawer() {
        let mut nav = NavState::default();
        assert!(!nav.on_key("Escape"));

        nav.toggle_drawer();
        assert!(!nav.on_key("Enter"));
        assert!(nav.drawer_open);
        assert!(nav.on_key("Escape"));
        assert!(!nav.drawer_open);
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
