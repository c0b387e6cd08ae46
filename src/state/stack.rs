//! Stack explorer support: flattening the static technology trees and resolving the
//! heading icon for each stack.

use crate::data::{Skill, StackNode};

pub const DEFAULT_GLYPH: &str = "🔹";
pub const ICON_PX: u32 = 20;
/// Node and Docker logos are drawn larger; their artwork has more padding.
pub const LARGE_ICON_PX: u32 = 44;

/// One line of a rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineRow {
    pub depth: usize,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
}

/// Pre-order walk of a forest. Pure in its input, so calling it twice yields the
/// same rows.
pub fn outline(tree: &'static [StackNode]) -> Vec<OutlineRow> {
    fn walk(nodes: &'static [StackNode], depth: usize, rows: &mut Vec<OutlineRow>) {
        for node in nodes {
            rows.push(OutlineRow {
                depth,
                title: node.title,
                subtitle: node.subtitle,
            });
            walk(node.children, depth + 1, rows);
        }
    }

    let mut rows = Vec::new();
    walk(tree, 0, &mut rows);
    rows
}

pub fn topic_count(tree: &[StackNode]) -> usize {
    tree.iter()
        .map(|node| 1 + topic_count(node.children))
        .sum()
}

/// Image paths known for common technology keys, tried in order by substring.
const SVG_PATHS: &[(&str, &str)] = &[
    ("python", "/python.svg"),
    ("django", "/django.svg"),
    ("django rest framework", "/Django REST.svg"),
    ("drf", "/Django REST.svg"),
    ("react", "/react.svg"),
    ("node", "/node.svg"),
    ("node.js", "/node.svg"),
    ("postgre", "/postgre.svg"),
    ("postgresql", "/postgre.svg"),
    ("git", "/git.svg"),
    ("js", "/js.svg"),
    ("javascript", "/js.svg"),
    ("html", "/html.svg"),
    ("css", "/css.svg"),
    ("rust", "/rust.svg"),
    ("github", "/github.svg"),
    ("database", "/database.svg"),
    ("tailwind", "/tailwind.svg"),
    ("bootstrap", "/bootstrap.svg"),
    ("mui", "/mui.svg"),
];

const FALLBACK_GLYPHS: &[(&str, &str)] = &[
    ("tailwind", "💨"),
    ("mui", "🎛️"),
    ("material ui", "🎛️"),
    ("bootstrap", "📦"),
    ("drf", "🛰️"),
    ("django rest framework", "🛰️"),
    ("sqlite", "📚"),
    ("node", "🟢"),
    ("node.js", "🟢"),
    ("fastapi", "⚡"),
    ("postgre", "💾"),
    ("postgresql", "💾"),
    ("git", "🔧"),
    ("docker", "🐳"),
];

fn fallback_glyph(key: &str) -> &'static str {
    FALLBACK_GLYPHS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(DEFAULT_GLYPH, |(_, glyph)| *glyph)
}

fn is_large(name: &str) -> bool {
    name.contains("node") || name.contains("docker")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackIcon {
    Image {
        /// Already URI-encoded.
        src: String,
        alt: String,
        /// Shown if the image fails to load.
        fallback: &'static str,
        size_px: u32,
    },
    Glyph {
        glyph: &'static str,
        large: bool,
    },
}

impl StackIcon {
    fn image(path: &str, alt: &str, fallback: &'static str, large: bool) -> Self {
        StackIcon::Image {
            src: encode_asset_path(path),
            alt: alt.to_string(),
            fallback,
            size_px: if large { LARGE_ICON_PX } else { ICON_PX },
        }
    }
}

/// Resolve the icon for a lookup key: a skill whose name contains the key, then the
/// known image paths, then the emoji table, then [`DEFAULT_GLYPH`].
pub fn resolve_icon<'a>(key: &str, skills: impl IntoIterator<Item = &'a Skill>) -> StackIcon {
    let key = key.to_lowercase();

    let found = skills
        .into_iter()
        .find(|s| s.name.to_lowercase().contains(&key));
    if let Some(skill) = found {
        let name = skill.name.to_lowercase();
        let fallback = if skill.icon.is_empty() {
            DEFAULT_GLYPH
        } else {
            skill.icon
        };
        if let Some(path) = skill.icon_path {
            return StackIcon::image(path, skill.name, fallback, is_large(&name));
        }
        if !skill.icon.is_empty() {
            return StackIcon::Glyph {
                glyph: skill.icon,
                large: is_large(&name),
            };
        }
    }

    if let Some((k, path)) = SVG_PATHS.iter().find(|(k, _)| key.contains(k)) {
        return StackIcon::image(path, &key, fallback_glyph(k), *k == "node");
    }

    if let Some((k, glyph)) = FALLBACK_GLYPHS.iter().find(|(k, _)| key.contains(k)) {
        return StackIcon::Glyph {
            glyph: *glyph,
            large: matches!(*k, "node" | "node.js" | "docker"),
        };
    }

    StackIcon::Glyph {
        glyph: DEFAULT_GLYPH,
        large: false,
    }
}

/// Percent-encode a public asset path the way `encodeURI` does: URI delimiters are
/// left alone, everything else outside the unreserved set is escaped.
pub fn encode_asset_path(path: &str) -> String {
    const KEEP: &[u8] = b";,/?:@&=+$-_.!~*'()#";
    let mut out = String::with_capacity(path.len());
    for byte in path.bytes() {
        if byte.is_ascii_alphanumeric() || KEEP.contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Whether a wheel event over the horizontal strip should be kept from scrolling the
/// page. Only when the strip itself can still move.
pub fn should_contain_wheel(scroll_left: f64, scroll_width: f64, client_width: f64) -> bool {
    scroll_left > 0.0 || scroll_left < scroll_width - client_width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{all_skills, STACKS};

    #[test]
    fn test_outline_is_preorder() {
        let python = &STACKS[0];
        let rows = outline(python.tree);
        assert_eq!(rows[0].title, "Primary uses");
        assert_eq!(rows[0].depth, 0);
        assert_eq!(rows[1].depth, 1);
        assert_eq!(rows[4].title, "Frameworks & tools");
        assert_eq!(rows.len(), topic_count(python.tree));
    }

    #[test]
    fn test_outline_is_deterministic() {
        for stack in STACKS {
            assert_eq!(outline(stack.tree), outline(stack.tree), "{}", stack.name);
        }
    }

    #[test]
    fn test_icon_prefers_skill_records() {
        let icon = resolve_icon("node", all_skills());
        assert_eq!(
            icon,
            StackIcon::Image {
                src: "/node.svg".into(),
                alt: "Node".into(),
                fallback: "🟢",
                size_px: LARGE_ICON_PX,
            }
        );

        let icon = resolve_icon("react", all_skills());
        assert!(matches!(icon, StackIcon::Image { size_px: ICON_PX, .. }));
    }

    #[test]
    fn test_icon_falls_back_to_known_paths() {
        let StackIcon::Image { src, fallback, .. } = resolve_icon("javascript", all_skills()) else {
            panic!("expected an image");
        };
        assert_eq!(src, "/js.svg");
        assert_eq!(fallback, DEFAULT_GLYPH);

        let StackIcon::Image { src, .. } = resolve_icon("drf", []) else {
            panic!("expected an image");
        };
        assert_eq!(src, "/Django%20REST.svg");
    }

    #[test]
    fn test_icon_glyph_fallbacks() {
        assert_eq!(
            resolve_icon("sqlite", all_skills()),
            StackIcon::Glyph { glyph: "📚", large: false }
        );
        assert_eq!(
            resolve_icon("docker", []),
            StackIcon::Glyph { glyph: "🐳", large: true }
        );
        assert_eq!(
            resolve_icon("cobol", all_skills()),
            StackIcon::Glyph { glyph: DEFAULT_GLYPH, large: false }
        );
    }

    #[test]
    fn test_encode_asset_path() {
        assert_eq!(encode_asset_path("/react.svg"), "/react.svg");
        assert_eq!(encode_asset_path("/linked in.jpg"), "/linked%20in.jpg");
        assert_eq!(encode_asset_path("/café.png"), "/caf%C3%A9.png");
        assert_eq!(encode_asset_path("/a%b"), "/a%25b");
    }

    #[test]
    fn test_wheel_containment() {
        assert!(should_contain_wheel(0.0, 800.0, 400.0));
        assert!(should_contain_wheel(400.0, 800.0, 400.0));
        assert!(!should_contain_wheel(0.0, 400.0, 400.0));
    }
}
