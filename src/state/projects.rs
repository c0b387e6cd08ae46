use crate::data::Project;

/// Pointer offset (px) from the card centre per degree of rotation.
pub const TILT_DIVISOR: f64 = 15.0;
pub const HOVER_LIFT_PX: f64 = 20.0;
/// Share of the grid that must be visible before entrance styling kicks in.
pub const IN_VIEW_THRESHOLD: f64 = 0.3;
pub const PLACEHOLDER_HREF: &str = "#";
pub const EXTERNAL_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Source,
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundLink {
    pub kind: LinkKind,
    pub href: &'static str,
    pub aria_label: String,
}

/// The two actions every card exposes, in display order. Missing URLs become `#`.
pub fn project_links(project: &Project) -> [OutboundLink; 2] {
    [
        OutboundLink {
            kind: LinkKind::Source,
            href: project.github.unwrap_or(PLACEHOLDER_HREF),
            aria_label: format!("{} GitHub", project.title),
        },
        OutboundLink {
            kind: LinkKind::Live,
            href: project.website.unwrap_or(PLACEHOLDER_HREF),
            aria_label: format!("{} Website", project.title),
        },
    ]
}

/// 1-based, zero-padded position shown beside each card.
pub fn index_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub lifted: bool,
}

impl Tilt {
    /// `x`/`y` are relative to the card's top-left corner.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            rotate_x: (y - height / 2.0) / TILT_DIVISOR,
            rotate_y: (width / 2.0 - x) / TILT_DIVISOR,
            lifted: true,
        }
    }

    pub fn transform(&self) -> String {
        let lift = if self.lifted { HOVER_LIFT_PX } else { 0.0 };
        format!(
            "transform: perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ({lift}px);",
            self.rotate_x, self.rotate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PROJECTS;

    #[test]
    fn test_every_project_has_two_links() {
        for project in PROJECTS {
            let [source, live] = project_links(project);
            assert_eq!(source.kind, LinkKind::Source);
            assert_eq!(live.kind, LinkKind::Live);
            assert!(!source.href.is_empty());
            assert!(!live.href.is_empty());
        }
    }

    #[test]
    fn test_missing_links_fall_back() {
        let project = Project {
            title: "Draft",
            description: "",
            tech_stack: &[],
            github: Some("https://github.com/x/draft"),
            website: None,
        };
        let [source, live] = project_links(&project);
        assert_eq!(source.href, "https://github.com/x/draft");
        assert_eq!(live.href, "#");
        assert_eq!(live.aria_label, "Draft Website");
    }

    #[test]
    fn test_index_labels() {
        let labels: Vec<_> = (0..PROJECTS.len()).map(index_label).collect();
        assert_eq!(labels[0], "01");
        assert_eq!(index_label(9), "10");
        assert_eq!(labels.len(), PROJECTS.len());
    }

    #[test]
    fn test_tilt_is_linear_in_offset() {
        // Centre of a 300x150 card: no rotation
        let centre = Tilt::from_pointer(150.0, 75.0, 300.0, 150.0);
        assert_eq!((centre.rotate_x, centre.rotate_y), (0.0, 0.0));

        let corner = Tilt::from_pointer(0.0, 150.0, 300.0, 150.0);
        assert_eq!(corner.rotate_x, 5.0);
        assert_eq!(corner.rotate_y, 10.0);
        assert!(corner.transform().contains("translateZ(20px)"));
    }

    #[test]
    fn test_reset_tilt() {
        let rest = Tilt::default();
        assert_eq!(
            rest.transform(),
            "transform: perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(0px);"
        );
    }
}
