//! Framework-free models of the page's transient UI state.
//!
//! Components in `app` own instances of these, feed them browser events and render
//! what they report. Keeping the transitions here means they can be exercised on the
//! host with plain `cargo test`.

pub mod about;
pub mod background;
pub mod capabilities;
pub mod nav;
pub mod projects;
pub mod rotator;
pub mod scroll_lock;
pub mod skills;
pub mod social;
pub mod stack;
pub mod typewriter;
