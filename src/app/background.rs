use leptos::{ev, prelude::*};

use crate::state::background::{Ambient, PointerPosition, Star};
use crate::state::capabilities::Capabilities;

/// Fixed decorative layer behind the page: a pointer-following gradient and a
/// twinkling star field.
#[component]
pub fn Background() -> impl IntoView {
    let (stars, set_stars) = signal(Vec::<Star>::new());
    let (pointer, set_pointer) = signal(PointerPosition::default());

    // Stars are random, so they're only generated once the page is live in the browser.
    // The server renders an empty field and hydration never sees a mismatch.
    Effect::new(move |_| {
        let caps = Capabilities::probe();
        let ambient = Ambient::mount(&caps, &mut fastrand::Rng::new());
        log::debug!(
            "background mounted: {} stars, pointer tracking {}",
            ambient.stars.len(),
            ambient.tracks_pointer
        );
        set_stars.set(ambient.stars);

        if ambient.tracks_pointer {
            let handle = window_event_listener(ev::mousemove, move |e| {
                let win = window();
                let width = win.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                let height = win.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                set_pointer.set(PointerPosition::in_viewport(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    width,
                    height,
                ));
            });
            on_cleanup(move || handle.remove());
        }
    });

    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none z-0" aria-hidden="true">
            <div
                class="absolute inset-0 opacity-20 transition-all duration-700"
                style=move || pointer.get().backdrop_gradient()
            />
            <For
                each=move || stars.get()
                key=|star| star.id
                children=|star| {
                    view! { <div class="absolute rounded-full star" style=star.style() aria-hidden="true" /> }
                }
            />
        </div>
    }
}
