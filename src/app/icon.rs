use leptos::prelude::*;

/// Image icon that swaps itself for `fallback` text once the browser reports a load
/// failure. `src` must already be URI-encoded.
#[component]
pub fn IconImg(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into)] fallback: String,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] style: &'static str,
    #[prop(optional)] fallback_style: &'static str,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    view! {
        <Show
            when=move || !failed.get()
            fallback=move || {
                view! {
                    <span aria-hidden="true" style=fallback_style>
                        {fallback.clone()}
                    </span>
                }
            }
        >
            <img
                src=src.clone()
                alt=alt.clone()
                class=class
                style=style
                loading="lazy"
                on:error=move |_| {
                    log::debug!("icon failed to load, showing fallback");
                    set_failed.set(true);
                }
            />
        </Show>
    }
}
