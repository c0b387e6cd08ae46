//! Geometry helpers for the about section: avatar lightbox sizing, swipe-to-close and
//! the scroll progress bar.

/// Space kept between the zoomed image and the viewport edges.
pub const ZOOM_PADDING_PX: f64 = 48.0;
/// Downward swipe distance that dismisses the lightbox.
pub const SWIPE_CLOSE_PX: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomSize {
    /// Natural size known: scaled to fit, never upscaled.
    Exact { width: f64, height: f64 },
    /// Natural size not reported yet: let the browser fit it within these bounds.
    Bounded { max_width: f64, max_height: f64 },
}

impl ZoomSize {
    pub fn fit(natural: Option<(f64, f64)>, viewport_width: f64, viewport_height: f64) -> Self {
        let max_width = (viewport_width - ZOOM_PADDING_PX * 2.0).max(0.0);
        let max_height = (viewport_height - ZOOM_PADDING_PX * 2.0).max(0.0);
        match natural {
            Some((w, h)) if w > 0.0 && h > 0.0 => {
                let ratio = (max_width / w).min(max_height / h).min(1.0);
                ZoomSize::Exact {
                    width: (w * ratio).round(),
                    height: (h * ratio).round(),
                }
            }
            _ => ZoomSize::Bounded {
                max_width,
                max_height,
            },
        }
    }

    pub fn style(&self) -> String {
        match self {
            ZoomSize::Exact { width, height } => {
                format!("width: {width}px; height: {height}px; background-color: #000;")
            }
            ZoomSize::Bounded {
                max_width,
                max_height,
            } => format!(
                "max-width: {max_width}px; max-height: {max_height}px; width: auto; height: auto; \
                 background-color: #000;"
            ),
        }
    }
}

pub fn is_swipe_close(start_y: Option<f64>, end_y: Option<f64>) -> bool {
    match (start_y, end_y) {
        (Some(start), Some(end)) => end - start > SWIPE_CLOSE_PX,
        _ => false,
    }
}

/// How far the section's top has travelled up through the viewport, in `0.0..=1.0`.
pub fn scroll_progress(viewport_height: f64, section_top: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    ((viewport_height - section_top) / viewport_height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_never_upscales() {
        let size = ZoomSize::fit(Some((400.0, 300.0)), 1920.0, 1080.0);
        assert_eq!(
            size,
            ZoomSize::Exact {
                width: 400.0,
                height: 300.0
            }
        );
    }

    #[test]
    fn test_zoom_fits_viewport() {
        // 1000x1000 into (600-96)x(800-96)
        let size = ZoomSize::fit(Some((1000.0, 1000.0)), 600.0, 800.0);
        assert_eq!(
            size,
            ZoomSize::Exact {
                width: 504.0,
                height: 504.0
            }
        );
    }

    #[test]
    fn test_zoom_without_natural_size() {
        let size = ZoomSize::fit(None, 1200.0, 800.0);
        assert_eq!(
            size,
            ZoomSize::Bounded {
                max_width: 1104.0,
                max_height: 704.0
            }
        );
        assert!(size.style().contains("max-width: 1104px"));

        // Tiny viewports clamp to zero rather than going negative
        assert_eq!(
            ZoomSize::fit(Some((0.0, 10.0)), 50.0, 50.0),
            ZoomSize::Bounded {
                max_width: 0.0,
                max_height: 0.0
            }
        );
    }

    #[test]
    fn test_swipe_close() {
        assert!(is_swipe_close(Some(100.0), Some(161.0)));
        assert!(!is_swipe_close(Some(100.0), Some(160.0)));
        assert!(!is_swipe_close(Some(200.0), Some(100.0)));
        assert!(!is_swipe_close(None, Some(500.0)));
    }

    #[test]
    fn test_scroll_progress_is_clamped() {
        assert_eq!(scroll_progress(800.0, 900.0), 0.0);
        assert_eq!(scroll_progress(800.0, 400.0), 0.5);
        assert_eq!(scroll_progress(800.0, -50.0), 1.0);
        assert_eq!(scroll_progress(0.0, 0.0), 0.0);
    }
}
