/// Delay before the opened explorer is scrolled into view, so the expand transition has
/// started and the scroll target is stable.
pub const EXPLORER_SCROLL_DELAY_MS: u64 = 60;
pub const HOVER_MEDIA_QUERY: &str = "(hover: hover)";

/// At most one core skill is highlighted; the last interaction wins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    selected: Option<usize>,
}

impl Highlight {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Click, tap and focus all land here.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Pointer entry only counts on hover-capable devices. Touch devices emulate
    /// `mouseenter` on tap, which would otherwise fight the tap selection.
    ///
    /// The listeners stay registered and the gate is checked here, because hover
    /// capability comes from a live media query and can change while mounted.
    pub fn pointer_enter(&mut self, index: usize, can_hover: bool) {
        if can_hover {
            self.select(index);
        }
    }

    pub fn pointer_leave(&mut self, can_hover: bool) {
        if can_hover {
            self.clear();
        }
    }
}

/// Placeholder copy for the preview panel when nothing is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewPrompt {
    pub heading: &'static str,
    pub body: &'static str,
}

pub fn preview_prompt(can_hover: bool) -> PreviewPrompt {
    if can_hover {
        PreviewPrompt {
            heading: "Hover a skill",
            body: "Move your mouse over any core skill to see typical uses, pairings and deployment notes.",
        }
    } else {
        PreviewPrompt {
            heading: "Tap a skill",
            body: "Tap a skill to see typical uses, pairings and deployment notes.",
        }
    }
}

pub fn explorer_toggle_label(open: bool) -> &'static str {
    if open {
        "Close Explorer"
    } else {
        "Explore Stacks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CORE_SKILLS;

    #[test]
    fn test_selection_is_exclusive() {
        let mut highlight = Highlight::default();
        for i in 0..CORE_SKILLS.len() {
            highlight.select(i);
            assert_eq!(highlight.selected(), Some(i));
        }
        highlight.clear();
        assert_eq!(highlight.selected(), None);
    }

    #[test]
    fn test_pointer_events_need_hover() {
        let mut highlight = Highlight::default();
        highlight.pointer_enter(2, false);
        assert_eq!(highlight.selected(), None);

        highlight.select(2);
        highlight.pointer_leave(false);
        assert_eq!(highlight.selected(), Some(2));

        highlight.pointer_enter(4, true);
        assert_eq!(highlight.selected(), Some(4));
        highlight.pointer_leave(true);
        assert_eq!(highlight.selected(), None);
    }

    #[test]
    fn test_prompt_follows_capability() {
        assert_eq!(preview_prompt(true).heading, "Hover a skill");
        assert_eq!(preview_prompt(false).heading, "Tap a skill");
        assert_eq!(explorer_toggle_label(false), "Explore Stacks");
    }
}
