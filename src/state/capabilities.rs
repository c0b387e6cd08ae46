use wasm_bindgen::JsValue;

/// Widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Used when the window can't be measured (never on a real browser)
const FALLBACK_WIDTH_PX: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// What the browser can do, sampled once at mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capabilities {
    pub viewport_width: f64,
    pub touch: bool,
    pub hover: bool,
    pub intersection_observer: bool,
}

impl Capabilities {
    pub fn desktop(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            touch: false,
            hover: true,
            intersection_observer: true,
        }
    }

    pub fn viewport(&self) -> ViewportClass {
        ViewportClass::from_width(self.viewport_width)
    }

    /// Mouse-follow effects are only wired up for non-touch devices.
    pub fn tracks_pointer(&self) -> bool {
        !self.touch
    }

    /// Sample the current window. Only meaningful in the browser.
    pub fn probe() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::desktop(FALLBACK_WIDTH_PX);
        };
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(FALLBACK_WIDTH_PX);
        let has = |name: &str| js_sys::Reflect::has(&window, &JsValue::from_str(name)).unwrap_or(false);
        let touch = has("ontouchstart") || window.navigator().max_touch_points() > 0;
        let hover = window
            .match_media("(hover: hover)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);
        Self {
            viewport_width,
            touch,
            hover,
            intersection_observer: has("IntersectionObserver"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_split() {
        assert_eq!(ViewportClass::from_width(320.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(767.9), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(1920.0), ViewportClass::Desktop);
    }

    #[test]
    fn test_touch_disables_pointer_tracking() {
        let mut caps = Capabilities::desktop(1280.0);
        assert!(caps.tracks_pointer());
        caps.touch = true;
        assert!(!caps.tracks_pointer());
    }
}
