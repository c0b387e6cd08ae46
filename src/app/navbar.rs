use leptos::{ev, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
};

use super::{lock_scroll_while, scroll_to_section, SectionRefs};
use crate::data::PROFILE;
use crate::state::capabilities::Capabilities;
use crate::state::nav::{is_scrolled, NavState, Section, OBSERVER_ROOT_MARGIN};

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let refs = expect_context::<SectionRefs>();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    for section in Section::ALL {
        use_intersection_observer_with_options(
            refs.get(section),
            move |entries, _| {
                let reports = entries
                    .iter()
                    .map(|e| (e.target().id(), e.is_intersecting()))
                    .collect::<Vec<_>>();
                nav.update(|n| n.observe(reports.iter().map(|(id, hit)| (id.as_str(), *hit))));
            },
            UseIntersectionObserverOptions::default()
                .root_margin(OBSERVER_ROOT_MARGIN.to_string())
                .thresholds(vec![0.0]),
        );
    }

    Effect::new(move |_| {
        if !Capabilities::probe().intersection_observer {
            log::warn!("IntersectionObserver unavailable, active section stays on {}", nav.get_untracked().active);
        }
        let handle = window_event_listener(ev::keydown, move |e| {
            if nav.try_update(|n| n.on_key(&e.key())) == Some(true) {
                log::debug!("drawer closed with Escape");
            }
        });
        on_cleanup(move || handle.remove());
    });

    let drawer_open = move || nav.with(|n| n.drawer_open);
    lock_scroll_while(drawer_open);

    let go = move |section: Section| {
        scroll_to_section(section);
        nav.update(|n| n.activate(section));
    };

    view! {
        <nav
            class=move || {
                format!(
                    "fixed top-0 left-0 right-0 w-full z-50 transition-all duration-300 {}",
                    if scrolled.get() {
                        "backdrop-blur-xl bg-black/60"
                    } else {
                        "backdrop-blur-0 bg-transparent"
                    },
                )
            }
            style="height: 72px;"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-full flex items-center justify-between py-2">
                <button
                    on:click=move |_| go(Section::Home)
                    aria-label="Go to home"
                    class="flex items-center gap-3 focus:outline-none h-full"
                >
                    <img
                        src=PROFILE.logo_path
                        alt=format!("{} logo", PROFILE.name)
                        loading="eager"
                        class="h-10 sm:h-12 md:h-14 lg:h-16 w-auto object-contain"
                        style="max-height: 64px;"
                    />
                </button>

                <div class="hidden md:flex items-center space-x-2 lg:space-x-6">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    on:click=move |_| go(section)
                                    class=move || {
                                        let active = nav.with(|n| n.active == section);
                                        format!(
                                            "capitalize transition-all duration-200 px-3 lg:px-4 py-1 rounded-xl text-sm lg:text-base font-medium text-white relative focus:outline-none hover:bg-white/10 hover:text-purple-400 {}",
                                            if active { "bg-white/10 text-purple-300" } else { "" },
                                        )
                                    }
                                >
                                    {section.id()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="md:hidden flex items-center">
                    <button
                        on:click=move |_| nav.update(NavState::toggle_drawer)
                        aria-label=move || if drawer_open() { "Close menu" } else { "Open menu" }
                        aria-expanded=move || drawer_open().to_string()
                        class="p-2 rounded-md transition-transform duration-200 focus:outline-none text-white hover:text-purple-400 active:scale-95"
                    >
                        <MenuIcon open=Signal::derive(drawer_open) />
                    </button>
                </div>
            </div>

            <Drawer nav go />
        </nav>
    }
}

#[component]
fn MenuIcon(open: Signal<bool>) -> impl IntoView {
    let layer = "absolute inset-0 transform transition-all duration-300 ease-in-out";
    view! {
        <div class="relative w-6 h-6">
            <svg
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                class=move || {
                    format!(
                        "{layer} {}",
                        if open.get() {
                            "rotate-180 opacity-0 scale-0"
                        } else {
                            "rotate-0 opacity-100 scale-100"
                        },
                    )
                }
            >
                <path d="M4 6h16" />
                <path d="M4 12h16" />
                <path d="M4 18h16" />
            </svg>
            <svg
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                class=move || {
                    format!(
                        "{layer} {}",
                        if open.get() {
                            "rotate-0 opacity-100 scale-100"
                        } else {
                            "-rotate-180 opacity-0 scale-0"
                        },
                    )
                }
            >
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </svg>
        </div>
    }
}

/// Mobile slide-over. Its own panel scrolls; the page behind it is locked.
#[component]
fn Drawer(nav: RwSignal<NavState>, go: impl Fn(Section) + Copy + Send + Sync + 'static) -> impl IntoView {
    let open = move || nav.with(|n| n.drawer_open);

    view! {
        <div
            class=move || {
                format!(
                    "md:hidden fixed left-0 right-0 top-[72px] bottom-0 z-50 transition-all duration-300 {}",
                    if open() {
                        "opacity-100 visible pointer-events-auto"
                    } else {
                        "opacity-0 invisible pointer-events-none"
                    },
                )
            }
            aria-hidden=move || (!open()).to_string()
        >
            <div
                class="h-full overflow-y-auto overscroll-contain bg-black/95 backdrop-blur-2xl border border-white/10 m-2 rounded-2xl shadow-2xl"
                style="-webkit-overflow-scrolling: touch; touch-action: pan-y;"
            >
                <div class="p-3 border-b border-white/8 bg-gradient-to-r from-purple-600/6 to-cyan-600/6">
                    <div class="flex items-center gap-3">
                        <div class="h-12 w-32 sm:w-36 overflow-hidden flex items-center justify-center">
                            <img
                                src=PROFILE.favicon_path
                                alt=format!("{} favicon", PROFILE.name)
                                class="w-full h-auto object-contain"
                                loading="lazy"
                                style="max-height: 56px;"
                            />
                        </div>
                        <div class="flex-1 min-w-0">
                            <h3 class="text-sm font-bold text-white truncate">
                                {format!("{}'s Portfolio", PROFILE.name)}
                            </h3>
                            <p class="text-gray-400 text-xs truncate">"Navigate through my work"</p>
                        </div>
                        <div class="flex items-center gap-2">
                            <div class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></div>
                            <span class="text-green-300 text-xs">"Online"</span>
                        </div>
                    </div>
                </div>

                <div class="p-2 space-y-1">
                    {Section::ALL
                        .into_iter()
                        .enumerate()
                        .map(|(i, section)| {
                            let active = move || nav.with(|n| n.active == section);
                            view! {
                                <button
                                    on:click=move |_| go(section)
                                    class=move || {
                                        format!(
                                            "group w-full text-left p-3 rounded-lg transition-all duration-200 border border-transparent active:scale-[0.99] hover:bg-gradient-to-r hover:from-purple-600/16 hover:to-cyan-600/16 {}",
                                            if active() { "bg-white/10" } else { "" },
                                        )
                                    }
                                    style=move || {
                                        if open() {
                                            format!(
                                                "transform: translateX(0); animation: slideInMobile 0.28s ease-out {}ms both;",
                                                i * 40,
                                            )
                                        } else {
                                            "transform: translateX(-10px); animation: none;".to_string()
                                        }
                                    }
                                >
                                    <div class="flex items-center justify-between">
                                        <div class="flex items-center gap-3">
                                            <div class="w-8 h-8 rounded-lg flex items-center justify-center bg-white/5 group-hover:bg-purple-600/30 transition-all duration-200">
                                                <span class="text-xs text-purple-300 group-hover:text-white">
                                                    <SectionIcon section />
                                                </span>
                                            </div>
                                            <div class="min-w-0">
                                                <span class="capitalize text-white font-medium group-hover:text-purple-300 transition-colors duration-200 text-sm truncate">
                                                    {section.id()}
                                                </span>
                                                <p class="text-gray-400 text-xs group-hover:text-gray-300 transition-colors duration-200 truncate">
                                                    {section.blurb()}
                                                </p>
                                            </div>
                                        </div>
                                        <div class=move || {
                                            format!(
                                                "w-8 h-8 rounded-full flex items-center justify-center transition-all duration-200 group-hover:bg-purple-600/30 {}",
                                                if active() { "bg-white/10" } else { "bg-white/5" },
                                            )
                                        }>
                                            <span class="text-xs text-purple-300 group-hover:text-white">"→"</span>
                                        </div>
                                    </div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="p-3 border-t border-white/8 bg-gradient-to-r from-black/50 to-purple-900/12 text-center">
                    <p class="text-gray-400 text-xs mb-2">"Ready to collaborate?"</p>
                    <button
                        on:click=move |_| go(Section::Contact)
                        class="w-full py-2 px-3 bg-gradient-to-r from-purple-600 to-cyan-600 rounded-lg text-white font-medium text-sm hover:scale-102 transition-all duration-200 active:scale-99"
                    >
                        "Let's Work Together"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SectionIcon(section: Section) -> impl IntoView {
    let paths: &[&str] = match section {
        Section::Home => &[
            "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8",
            "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
        ],
        Section::About => &["m13.5 8.5-5 5", "M19 11a8 8 0 1 1-16 0 8 8 0 0 1 16 0", "m21 21-4.3-4.3"],
        Section::Projects => &[
            "M4 20h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.93a2 2 0 0 1-1.66-.9l-.82-1.2A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13c0 1.1.9 2 2 2Z",
            "M8 10v4",
            "M12 10v2",
            "M16 10v6",
        ],
        Section::Skills => &[
            "M10 3h.01",
            "M14 2h.01",
            "m2 9 20-5",
            "M12 12V6.5",
            "M7 12h10a3 3 0 0 1 3 3v4a3 3 0 0 1-3 3H7a3 3 0 0 1-3-3v-4a3 3 0 0 1 3-3",
            "M9 12v5",
            "M15 12v5",
            "M4 17h16",
        ],
        Section::Stats => &[
            "M12 16v5",
            "M16 14v7",
            "M20 10v11",
            "m22 3-8.646 8.646a.5.5 0 0 1-.708 0L9.354 8.354a.5.5 0 0 0-.707 0L2 15",
            "M4 18v3",
            "M8 14v7",
        ],
        Section::Contact => &[
            "M16 2v2",
            "M7 22v-2a2 2 0 0 1 2-2h6a2 2 0 0 1 2 2v2",
            "M8 2v2",
            "M15 11a3 3 0 1 1-6 0 3 3 0 0 1 6 0",
            "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2",
        ],
    };

    view! {
        <svg
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.75"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
