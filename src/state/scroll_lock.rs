//! Reference-counted lock over the document's scroll styles.
//!
//! Any overlay (mobile drawer, resume preview, avatar lightbox) can hold a
//! [`ScrollLockGuard`]. The body's `overflow` and `touch-action` are captured once when the
//! first guard is taken and written back only when the last guard drops, so overlapping
//! overlays never restore each other's values.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScrollLockError {
    #[error("document has no body")]
    NoBody,
    #[error("couldn't access body style: {0}")]
    Style(String),
}

/// The subset of inline style the lock owns.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LockStyles {
    pub overflow: String,
    pub touch_action: String,
}

impl LockStyles {
    pub fn locked() -> Self {
        Self {
            overflow: "hidden".into(),
            touch_action: "none".into(),
        }
    }
}

/// Where the lock reads and writes its styles.
pub trait StyleTarget: Send + Sync + 'static {
    fn read(&self) -> Result<LockStyles, ScrollLockError>;
    fn write(&self, styles: &LockStyles) -> Result<(), ScrollLockError>;
}

struct Inner<T> {
    target: T,
    holders: usize,
    saved: Option<LockStyles>,
}

pub struct ScrollLock<T: StyleTarget> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T: StyleTarget> Clone for ScrollLock<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: StyleTarget> ScrollLock<T> {
    pub fn new(target: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                target,
                holders: 0,
                saved: None,
            })),
        }
    }

    // A panic while holding the lock can't leave the counters half-updated, so a
    // poisoned mutex is still usable.
    fn inner(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn acquire(&self) -> Result<ScrollLockGuard<T>, ScrollLockError> {
        let mut inner = self.inner();
        if inner.holders == 0 {
            let saved = inner.target.read()?;
            if let Err(e) = inner.target.write(&LockStyles::locked()) {
                // The write may have landed partially; put back what was read.
                if let Err(restore) = inner.target.write(&saved) {
                    log::warn!("couldn't roll back scroll styles: {restore}");
                }
                return Err(e);
            }
            inner.saved = Some(saved);
            log::debug!("scroll locked");
        }
        inner.holders += 1;
        Ok(ScrollLockGuard { lock: self.clone() })
    }

    pub fn holders(&self) -> usize {
        self.inner().holders
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    fn release(&self) {
        let mut inner = self.inner();
        inner.holders = inner.holders.saturating_sub(1);
        if inner.holders > 0 {
            return;
        }
        if let Some(saved) = inner.saved.take() {
            match inner.target.write(&saved) {
                Ok(()) => log::debug!("scroll unlocked"),
                Err(e) => log::warn!("couldn't restore scroll styles: {e}"),
            }
        }
    }
}

/// Releases its share of the lock when dropped.
pub struct ScrollLockGuard<T: StyleTarget> {
    lock: ScrollLock<T>,
}

impl<T: StyleTarget> Drop for ScrollLockGuard<T> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

/// The live `document.body`.
#[cfg(any(feature = "ssr", feature = "hydrate"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentBody;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl DocumentBody {
    fn style() -> Result<web_sys::CssStyleDeclaration, ScrollLockError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.style())
            .ok_or(ScrollLockError::NoBody)
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
fn js_err(e: wasm_bindgen::JsValue) -> ScrollLockError {
    ScrollLockError::Style(format!("{e:?}"))
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl StyleTarget for DocumentBody {
    fn read(&self) -> Result<LockStyles, ScrollLockError> {
        let style = Self::style()?;
        Ok(LockStyles {
            overflow: style.get_property_value("overflow").map_err(js_err)?,
            touch_action: style.get_property_value("touch-action").map_err(js_err)?,
        })
    }

    fn write(&self, styles: &LockStyles) -> Result<(), ScrollLockError> {
        let style = Self::style()?;
        style
            .set_property("overflow", &styles.overflow)
            .map_err(js_err)?;
        style
            .set_property("touch-action", &styles.touch_action)
            .map_err(js_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct MemoryStyle(Arc<Mutex<LockStyles>>);

    impl MemoryStyle {
        fn with_overflow(value: &str) -> Self {
            Self(Arc::new(Mutex::new(LockStyles {
                overflow: value.into(),
                touch_action: String::new(),
            })))
        }

        fn get(&self) -> LockStyles {
            self.0.lock().unwrap().clone()
        }
    }

    impl StyleTarget for MemoryStyle {
        fn read(&self) -> Result<LockStyles, ScrollLockError> {
            Ok(self.get())
        }

        fn write(&self, styles: &LockStyles) -> Result<(), ScrollLockError> {
            *self.0.lock().unwrap() = styles.clone();
            Ok(())
        }
    }

    struct Detached;

    impl StyleTarget for Detached {
        fn read(&self) -> Result<LockStyles, ScrollLockError> {
            Err(ScrollLockError::NoBody)
        }

        fn write(&self, _: &LockStyles) -> Result<(), ScrollLockError> {
            Err(ScrollLockError::NoBody)
        }
    }

    /// Applies `overflow` first and rejects `touch-action: none`, like a style
    /// declaration that fails halfway through a write.
    #[derive(Clone)]
    struct RejectsTouchLock(MemoryStyle);

    impl StyleTarget for RejectsTouchLock {
        fn read(&self) -> Result<LockStyles, ScrollLockError> {
            self.0.read()
        }

        fn write(&self, styles: &LockStyles) -> Result<(), ScrollLockError> {
            let mut current = self.0.get();
            current.overflow = styles.overflow.clone();
            self.0.write(&current)?;
            if styles.touch_action == "none" {
                return Err(ScrollLockError::Style("touch-action rejected".into()));
            }
            current.touch_action = styles.touch_action.clone();
            self.0.write(&current)
        }
    }

    #[test]
    fn test_partial_lock_is_rolled_back() {
        let style = RejectsTouchLock(MemoryStyle::with_overflow("scroll"));
        let lock = ScrollLock::new(style.clone());

        assert!(matches!(lock.acquire(), Err(ScrollLockError::Style(_))));
        assert_eq!(lock.holders(), 0);
        assert_eq!(style.0.get().overflow, "scroll");
        assert_eq!(style.0.get().touch_action, "");
    }

    #[test]
    fn test_release_restores_previous_value() {
        let style = MemoryStyle::with_overflow("scroll");
        let lock = ScrollLock::new(style.clone());

        let guard = lock.acquire().unwrap();
        assert!(lock.is_locked());
        assert_eq!(style.get(), LockStyles::locked());

        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(style.get().overflow, "scroll");
        assert_eq!(style.get().touch_action, "");
    }

    #[test]
    fn test_nested_holders_restore_once() {
        let style = MemoryStyle::with_overflow("auto");
        let lock = ScrollLock::new(style.clone());

        let drawer = lock.acquire().unwrap();
        let modal = lock.acquire().unwrap();
        assert_eq!(lock.holders(), 2);

        drop(drawer);
        assert_eq!(style.get(), LockStyles::locked());

        drop(modal);
        assert_eq!(style.get().overflow, "auto");
    }

    #[test]
    fn test_original_captured_once() {
        let style = MemoryStyle::with_overflow("scroll");
        let lock = ScrollLock::new(style.clone());

        let first = lock.acquire().unwrap();
        // A second holder sees the locked value but must not save it
        let second = lock.acquire().unwrap();
        drop(first);
        drop(second);
        assert_eq!(style.get().overflow, "scroll");

        // The lock is reusable once released
        let again = lock.acquire().unwrap();
        drop(again);
        assert_eq!(style.get().overflow, "scroll");
    }

    #[test]
    fn test_failed_acquire_holds_nothing() {
        let lock = ScrollLock::new(Detached);
        assert_eq!(lock.acquire().err(), Some(ScrollLockError::NoBody));
        assert_eq!(lock.holders(), 0);
    }
}
