use super::capabilities::{Capabilities, ViewportClass};

pub const DESKTOP_STAR_COUNT: usize = 150;
pub const MOBILE_STAR_COUNT: usize = 30;
/// Size and glow multiplier applied to every star on mobile.
pub const MOBILE_STAR_SCALE: f64 = 0.6;
const MIN_STAR_PX: f64 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub glow: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Star {
    fn sample(id: usize, scale: f64, rng: &mut fastrand::Rng) -> Self {
        Self {
            id,
            x: rng.f64() * 100.0,
            y: rng.f64() * 100.0,
            size: (rng.f64() * 2.0 + 1.0) * scale,
            opacity: rng.f64() * 0.35 + 0.08,
            glow: (rng.f64() * 6.0 + 3.0) * scale,
            duration: 2.0 + rng.f64() * 3.0,
            delay: rng.f64() * 4.0,
        }
    }

    pub fn style(&self) -> String {
        let px = self.size.max(MIN_STAR_PX);
        format!(
            "left: {x}%; top: {y}%; width: {px}px; height: {px}px; background-color: #ffffff; \
             opacity: {o}; box-shadow: 0 0 {g1}px rgba(255, 255, 255, 0.45), \
             0 0 {g2}px rgba(147, 51, 234, 0.18), 0 0 {g3}px rgba(59, 130, 246, 0.12); \
             animation: sparkle {d}s ease-in-out infinite; animation-delay: {delay}s; \
             transform: translateZ(0);",
            x = self.x,
            y = self.y,
            o = self.opacity,
            g1 = self.glow,
            g2 = self.glow * 1.3,
            g3 = self.glow * 1.8,
            d = self.duration,
            delay = self.delay,
        )
    }
}

/// Generate the star field. The viewport class is decided once by the caller and the
/// field is never resized afterwards.
pub fn generate_stars(viewport: ViewportClass, rng: &mut fastrand::Rng) -> Vec<Star> {
    let (count, scale) = match viewport {
        ViewportClass::Mobile => (MOBILE_STAR_COUNT, MOBILE_STAR_SCALE),
        ViewportClass::Desktop => (DESKTOP_STAR_COUNT, 1.0),
    };
    (0..count).map(|id| Star::sample(id, scale, rng)).collect()
}

/// Pointer position as percentages of some reference box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl PointerPosition {
    /// `client_x`/`client_y` relative to a box at (`left`, `top`) of the given size.
    pub fn within(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (client_x - left) / width * 100.0,
            y: (client_y - top) / height * 100.0,
        }
    }

    pub fn in_viewport(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        Self::within(client_x, client_y, 0.0, 0.0, width, height)
    }

    /// Page-wide backdrop gradient centred on the pointer.
    pub fn backdrop_gradient(&self) -> String {
        format!(
            "background: radial-gradient(40vw circle at {}% {}%, rgba(147, 51, 234, 0.25), \
             rgba(59, 130, 246, 0.12), rgba(0, 0, 0, 0.96));",
            self.x, self.y
        )
    }

    /// Softer gradient used inside a single section.
    pub fn section_gradient(&self, viewport: ViewportClass) -> String {
        let radius = match viewport {
            ViewportClass::Mobile => "300px",
            ViewportClass::Desktop => "600px",
        };
        format!(
            "background: radial-gradient({radius} circle at {}% {}%, rgba(147, 51, 234, 0.1), \
             rgba(6, 182, 212, 0.05), transparent 70%);",
            self.x, self.y
        )
    }
}

/// Ambient state owned by the page shell once it has mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct Ambient {
    pub stars: Vec<Star>,
    pub tracks_pointer: bool,
}

impl Ambient {
    pub fn mount(caps: &Capabilities, rng: &mut fastrand::Rng) -> Self {
        Self {
            stars: generate_stars(caps.viewport(), rng),
            tracks_pointer: caps.tracks_pointer(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_counts_follow_viewport() {
        let mut rng = fastrand::Rng::with_seed(7);
        assert_eq!(generate_stars(ViewportClass::Desktop, &mut rng).len(), DESKTOP_STAR_COUNT);
        assert_eq!(generate_stars(ViewportClass::Mobile, &mut rng).len(), MOBILE_STAR_COUNT);
    }

    #[test]
    fn test_star_ranges() {
        let mut rng = fastrand::Rng::with_seed(42);
        for star in generate_stars(ViewportClass::Desktop, &mut rng) {
            assert!((0.0..100.0).contains(&star.x));
            assert!((0.0..100.0).contains(&star.y));
            assert!((1.0..3.0).contains(&star.size));
            assert!((0.08..0.43).contains(&star.opacity));
            assert!((3.0..9.0).contains(&star.glow));
            assert!((2.0..5.0).contains(&star.duration));
            assert!((0.0..4.0).contains(&star.delay));
        }
        for star in generate_stars(ViewportClass::Mobile, &mut rng) {
            assert!(star.size < 3.0 * MOBILE_STAR_SCALE);
            assert!(star.glow < 9.0 * MOBILE_STAR_SCALE);
        }
    }

    #[test]
    fn test_star_ids_are_sequential() {
        let mut rng = fastrand::Rng::with_seed(1);
        let stars = generate_stars(ViewportClass::Mobile, &mut rng);
        assert!(stars.iter().enumerate().all(|(i, s)| s.id == i));
    }

    #[test]
    fn test_star_style_clamps_size() {
        let star = Star {
            id: 0,
            x: 10.0,
            y: 20.0,
            size: 0.3,
            opacity: 0.2,
            glow: 2.0,
            duration: 3.0,
            delay: 1.0,
        };
        let style = star.style();
        assert!(style.contains("width: 0.6px"));
        assert!(style.contains("left: 10%"));
        assert!(style.contains("sparkle 3s"));
    }

    #[test]
    fn test_pointer_percentages() {
        let p = PointerPosition::in_viewport(960.0, 270.0, 1920.0, 1080.0);
        assert_eq!(p, PointerPosition { x: 50.0, y: 25.0 });

        let p = PointerPosition::within(150.0, 150.0, 100.0, 100.0, 200.0, 100.0);
        assert_eq!(p, PointerPosition { x: 25.0, y: 50.0 });

        // Degenerate boxes fall back to the centre
        assert_eq!(PointerPosition::in_viewport(10.0, 10.0, 0.0, 0.0), PointerPosition::default());
    }

    #[test]
    fn test_gradients_follow_pointer() {
        let p = PointerPosition { x: 12.5, y: 80.0 };
        assert!(p.backdrop_gradient().contains("at 12.5% 80%"));
        assert!(p.section_gradient(ViewportClass::Mobile).contains("300px circle"));
        assert!(p.section_gradient(ViewportClass::Desktop).contains("600px circle"));
    }

    #[test]
    fn test_desktop_mount() {
        use crate::state::nav::{NavState, Section};

        let caps = Capabilities::desktop(1440.0);
        let ambient = Ambient::mount(&caps, &mut fastrand::Rng::with_seed(3));
        assert_eq!(ambient.stars.len(), DESKTOP_STAR_COUNT);
        assert!(ambient.tracks_pointer);
        assert_eq!(NavState::default().active, Section::Home);
    }

    #[test]
    fn test_touch_mount() {
        let caps = Capabilities {
            touch: true,
            hover: false,
            ..Capabilities::desktop(390.0)
        };
        let ambient = Ambient::mount(&caps, &mut fastrand::Rng::with_seed(3));
        assert_eq!(ambient.stars.len(), MOBILE_STAR_COUNT);
        assert!(!ambient.tracks_pointer);
    }
}
