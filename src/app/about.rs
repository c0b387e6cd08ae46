use std::time::Duration;

use leptos::{ev, html, prelude::*};
use leptos_use::{use_media_query, use_window_scroll};
use web_sys::HtmlImageElement;

use super::lock_scroll_while;
use crate::data::{EXPERTISE, EXPLORING, JOURNEY, PRINCIPLES, PROFILE, ROLES};
use crate::state::about::{is_swipe_close, scroll_progress, ZoomSize};
use crate::state::background::PointerPosition;
use crate::state::capabilities::ViewportClass;
use crate::state::rotator::{Cycler, JOURNEY_MS};
use crate::state::typewriter::{TypeStep, Typewriter, HOLD_MS, TYPE_MS};

fn schedule_typing(typer: RwSignal<Typewriter>, timer: StoredValue<Option<TimeoutHandle>>, delay: u64) {
    let handle = set_timeout_with_handle(
        move || {
            let Some(step) = typer.try_update(Typewriter::tick) else {
                return;
            };
            match step {
                TypeStep::Typed => schedule_typing(typer, timer, TYPE_MS),
                TypeStep::Complete => {
                    let handle = set_timeout_with_handle(
                        move || {
                            if typer.try_update(Typewriter::next_role).is_some() {
                                schedule_typing(typer, timer, TYPE_MS);
                            }
                        },
                        Duration::from_millis(HOLD_MS),
                    );
                    match handle {
                        Ok(h) => {
                            timer.try_set_value(Some(h));
                        }
                        Err(e) => log::warn!("typewriter stopped: {e:?}"),
                    }
                }
            }
        },
        Duration::from_millis(delay),
    );
    match handle {
        Ok(h) => {
            timer.try_set_value(Some(h));
        }
        Err(e) => log::warn!("typewriter stopped: {e:?}"),
    }
}

fn natural_size(img: &HtmlImageElement) -> Option<(f64, f64)> {
    let (w, h) = (img.natural_width(), img.natural_height());
    (w > 0 && h > 0).then_some((w as f64, h as f64))
}

#[component]
pub fn About() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let typer = RwSignal::new(Typewriter::new(ROLES));
    let typing_timer = StoredValue::new(None::<TimeoutHandle>);
    let journey = RwSignal::new(Cycler::new(JOURNEY.len()));
    let (pointer, set_pointer) = signal(PointerPosition { x: 0.0, y: 0.0 });
    let (progress, set_progress) = signal(0.0_f64);
    let is_narrow = use_media_query("(max-width: 768px)");
    let (_, scroll_y) = use_window_scroll();

    let zoom_open = RwSignal::new(false);
    let natural = RwSignal::new(None::<(f64, f64)>);
    let avatar = NodeRef::<html::Img>::new();

    Effect::new(move |_| {
        schedule_typing(typer, typing_timer, TYPE_MS);
        let interval = set_interval_with_handle(
            move || {
                journey.try_update(Cycler::advance);
            },
            Duration::from_millis(JOURNEY_MS),
        );
        let interval = interval
            .inspect_err(|e| log::warn!("journey timeline won't cycle: {e:?}"))
            .ok();
        on_cleanup(move || {
            if let Some(handle) = typing_timer.try_get_value().flatten() {
                handle.clear();
            }
            if let Some(handle) = interval {
                handle.clear();
            }
        });
    });

    Effect::new(move |_| {
        scroll_y.track();
        let Some(el) = container.get() else {
            return;
        };
        let vh = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        set_progress.set(scroll_progress(vh, el.get_bounding_client_rect().top()));
    });

    let on_mouse_move = move |e: ev::MouseEvent| {
        let Some(el) = container.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        set_pointer.set(PointerPosition::within(
            e.client_x() as f64,
            e.client_y() as f64,
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        ));
    };

    let open_zoom = move |_| {
        if natural.get_untracked().is_none() {
            if let Some(img) = avatar.get_untracked() {
                natural.set(natural_size(&img));
            }
        }
        log::debug!("avatar lightbox opened");
        zoom_open.set(true);
    };

    let viewport = move || {
        if is_narrow.get() {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    };

    view! {
        <div
            node_ref=container
            on:mousemove=on_mouse_move
            class="min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8 py-12 sm:py-16 lg:py-20 relative overflow-hidden"
        >
            <div
                class="absolute top-0 left-0 h-0.5 bg-gradient-to-r from-purple-500 to-cyan-500 transition-all duration-150"
                style=move || format!("width: {:.1}%;", progress.get() * 100.0)
                aria-hidden="true"
            />
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="absolute top-16 sm:top-20 left-4 sm:left-10 opacity-10 text-cyan-400 font-mono text-xs sm:text-sm animate-float-slow">
                    "const about = {"
                </div>
                <div class="absolute top-32 sm:top-40 right-8 sm:right-20 opacity-10 text-purple-400 font-mono text-xs sm:text-sm animate-float-medium">
                    "  passion: \"development\","
                </div>
                <div class="absolute bottom-24 sm:bottom-32 left-8 sm:left-20 opacity-10 text-gray-400 font-mono text-xs sm:text-sm animate-float-fast">
                    "  expertise: \"full-stack\","
                </div>
                <div class="absolute top-48 sm:top-60 right-16 sm:right-40 opacity-10 text-cyan-400 font-mono text-xs sm:text-sm animate-float-slow">
                    "  focus: \"innovation\""
                </div>
                <div class="absolute bottom-48 sm:bottom-60 right-4 sm:right-10 opacity-10 text-purple-400 font-mono text-xs sm:text-sm animate-float-medium">
                    "};"
                </div>

                <div class="absolute top-1/4 left-1/4 w-16 h-16 sm:w-24 sm:h-24 lg:w-32 lg:h-32 border border-purple-500/20 rotate-45 animate-spin-slow"></div>
                <div class="absolute bottom-1/4 right-1/4 w-12 h-12 sm:w-18 sm:h-18 lg:w-24 lg:h-24 border border-cyan-500/20 rotate-12 animate-pulse"></div>
                <div class="absolute top-1/3 right-1/3 w-8 h-8 sm:w-12 sm:h-12 lg:w-16 lg:h-16 bg-gradient-to-r from-purple-500/10 to-cyan-500/10 rounded-full animate-bounce-slow"></div>

                <div
                    class="absolute inset-0 opacity-5 transition-all duration-300"
                    style=move || pointer.get().section_gradient(viewport())
                />
            </div>

            <div class="max-w-7xl mx-auto relative z-10 w-full">
                <div class="text-center mb-12 sm:mb-16">
                    <div class="inline-flex items-center gap-2 px-3 py-2 sm:px-4 sm:py-2 bg-gradient-to-r from-purple-600/20 to-cyan-600/20 border border-purple-500/30 rounded-full text-xs sm:text-sm text-purple-300 mb-4 sm:mb-6 backdrop-blur-sm">
                        <div class="w-1.5 h-1.5 sm:w-2 sm:h-2 bg-cyan-400 rounded-full animate-pulse"></div>
                        {format!("About {}", PROFILE.name)}
                    </div>

                    <div class="relative mb-6 sm:mb-8">
                        <div class="absolute inset-0 opacity-20" aria-hidden="true">
                            <h2 class="text-3xl sm:text-5xl md:text-6xl lg:text-7xl font-black text-purple-500 blur-sm transform translate-x-1 translate-y-1 animate-glitch-1">
                                "About Me"
                            </h2>
                        </div>
                        <div class="absolute inset-0 opacity-15" aria-hidden="true">
                            <h2 class="text-3xl sm:text-5xl md:text-6xl lg:text-7xl font-black text-cyan-500 blur-sm transform -translate-x-1 -translate-y-1 animate-glitch-2">
                                "About Me"
                            </h2>
                        </div>
                        <h2 class="relative text-3xl sm:text-5xl md:text-6xl lg:text-7xl font-black bg-gradient-to-r from-white via-purple-200 to-cyan-200 bg-clip-text text-transparent leading-none hover:scale-105 transition-transform duration-300 cursor-default">
                            "About Me"
                        </h2>
                    </div>

                    <div class="text-lg sm:text-2xl md:text-3xl text-cyan-300 font-medium mb-6 sm:mb-8 min-h-[2rem] sm:min-h-[3rem] flex items-center justify-center px-4">
                        <span class="border-r-2 border-cyan-400 animate-pulse pr-2 text-center">
                            {move || typer.with(Typewriter::text)}
                        </span>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-8 xl:grid-cols-12 gap-6 sm:gap-8 lg:gap-12">
                    <div class="lg:col-span-3 xl:col-span-4 space-y-6 sm:space-y-8">
                        <ProfileCard avatar natural on_open=open_zoom />
                        <div class="bg-white/5 backdrop-blur-xl border border-white/20 rounded-xl sm:rounded-2xl p-4 sm:p-6">
                            <h3 class="text-lg sm:text-xl font-semibold text-cyan-300 mb-3 sm:mb-4 flex items-center gap-2">
                                <span>"💡"</span>
                                " Philosophy"
                            </h3>
                            <blockquote class="text-gray-300 italic text-xs sm:text-sm leading-relaxed border-l-2 border-purple-500/50 pl-3 sm:pl-4">
                                "\"Every line of code is an opportunity to solve a problem elegantly. I believe in writing software that not only works but inspires.\""
                            </blockquote>
                        </div>
                        <div class="bg-white/5 backdrop-blur-xl border border-white/20 rounded-xl sm:rounded-2xl p-4 sm:p-6">
                            <h3 class="text-lg sm:text-xl font-semibold text-purple-300 mb-3 sm:mb-4 flex items-center gap-2">
                                <span>"⚡"</span>
                                " Core Values"
                            </h3>
                            <BulletList items=PRINCIPLES dot="w-1.5 h-1.5" />
                        </div>
                    </div>

                    <div class="lg:col-span-3 xl:col-span-5 space-y-6 sm:space-y-8">
                        <div class="bg-gradient-to-br from-white/5 to-white/10 backdrop-blur-xl border border-white/20 rounded-2xl sm:rounded-3xl p-6 sm:p-8 relative overflow-hidden">
                            <h3 class="text-xl sm:text-2xl font-bold text-white mb-4 sm:mb-6">"My Story"</h3>
                            <div class="space-y-3 sm:space-y-4 text-gray-300 leading-relaxed text-sm sm:text-base">
                                <p>
                                    "I'm a passionate "
                                    <span class="text-purple-300 font-semibold">"software engineer"</span>
                                    {format!(" from {}, specializing in full-stack development.", PROFILE.location)}
                                </p>
                                <p>
                                    "What drives me is the intersection of "
                                    <span class="text-cyan-300 font-semibold">"creativity"</span>
                                    " and "
                                    <span class="text-purple-300 font-semibold">"technology"</span>
                                    ", transforming complex business requirements into intuitive digital solutions."
                                </p>
                                <p>
                                    "I believe in writing clean, maintainable code and staying current with emerging technologies while keeping strong fundamentals."
                                </p>
                            </div>
                        </div>
                        <Journey active=Signal::derive(move || journey.with(Cycler::index)) />
                    </div>

                    <div class="lg:col-span-2 xl:col-span-3 space-y-6 sm:space-y-8">
                        <Expertise />
                        <div class="bg-gradient-to-br from-purple-600/10 to-cyan-600/10 backdrop-blur-xl border border-purple-500/20 rounded-lg sm:rounded-xl p-4 sm:p-6">
                            <h3 class="text-base sm:text-lg font-semibold text-purple-300 mb-3 sm:mb-4 flex items-center gap-2">
                                <span>"🎯"</span>
                                " Currently Exploring"
                            </h3>
                            <BulletList items=EXPLORING dot="w-1 h-1" />
                        </div>
                    </div>
                </div>
            </div>

            <Show when=move || zoom_open.get()>
                <Lightbox open=zoom_open natural />
            </Show>
        </div>
    }
}

#[component]
fn ProfileCard(
    avatar: NodeRef<html::Img>,
    natural: RwSignal<Option<(f64, f64)>>,
    on_open: impl Fn(ev::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <div class="relative group">
            <div class="absolute -inset-1 bg-gradient-to-r from-purple-600/20 to-cyan-600/20 rounded-2xl sm:rounded-3xl blur opacity-25 group-hover:opacity-75 transition duration-1000"></div>
            <div class="relative bg-white/5 backdrop-blur-xl border border-white/20 rounded-2xl sm:rounded-3xl p-6 sm:p-8 hover:bg-white/10 transition-all duration-500 overflow-hidden">
                <div class="absolute inset-0 opacity-5" aria-hidden="true">
                    {(0..12)
                        .map(|i| {
                            let style = format!(
                                "left: {}%; top: {}%; animation: twinkle {}s ease-in-out infinite {:.1}s;",
                                20 + (i % 4) * 20,
                                20 + (i / 4) * 20,
                                2 + i % 3,
                                i as f64 * 0.3,
                            );
                            view! { <div class="absolute w-1 h-1 bg-purple-400 rounded-full" style=style /> }
                        })
                        .collect_view()}
                </div>

                <div class="relative z-10 text-center">
                    <div class="relative mx-auto mb-4 sm:mb-6 w-32 h-32 sm:w-48 sm:h-48 md:w-64 md:h-64 lg:w-72 lg:h-72 xl:w-80 xl:h-80">
                        <div class="absolute inset-0 rounded-full border-2 border-purple-500/30 animate-spin-slow"></div>
                        <div class="absolute inset-1 sm:inset-3 rounded-full border border-cyan-500/40 animate-spin-reverse"></div>
                        <div class="absolute inset-3 sm:inset-6 rounded-full flex items-center justify-center shadow-xl border border-white/10 group-hover:scale-110 transition-transform duration-300">
                            <img
                                node_ref=avatar
                                src=PROFILE.avatar_path
                                alt=format!("{} avatar", PROFILE.name)
                                loading="lazy"
                                on:load=move |e| {
                                    let img = event_target::<HtmlImageElement>(&e);
                                    natural.set(natural_size(&img));
                                }
                                on:click=on_open
                                style="background-color: #000;"
                                class="w-full h-full object-cover rounded-full cursor-pointer"
                            />
                        </div>
                    </div>

                    <h3 class="text-xl sm:text-2xl font-bold text-white mb-1 sm:mb-2">{PROFILE.name}</h3>
                    <p class="text-sm sm:text-base text-purple-300 font-medium mb-3 sm:mb-4">{PROFILE.title}</p>
                    <div class="w-12 sm:w-16 h-1 bg-gradient-to-r from-purple-500 to-cyan-500 rounded-full mx-auto mb-4 sm:mb-6"></div>
                    <p class="text-gray-300 text-xs sm:text-sm leading-relaxed px-2 sm:px-0">
                        "Passionate about creating digital solutions that bridge the gap between complex problems and elegant implementations."
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn BulletList(items: &'static [&'static str], dot: &'static str) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <div class="flex items-center gap-2 sm:gap-3 text-xs sm:text-sm text-gray-300 group cursor-default">
                            <div class=format!(
                                "{dot} bg-cyan-400 rounded-full group-hover:bg-purple-400 transition-colors duration-200 flex-shrink-0",
                            )></div>
                            <span class="group-hover:text-white transition-colors duration-200">{*item}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Journey(active: Signal<usize>) -> impl IntoView {
    let pick = move |i: usize, on: &'static str, off: &'static str| {
        move || if active.get() == i { on } else { off }
    };

    view! {
        <div class="bg-white/5 backdrop-blur-xl border border-white/20 rounded-xl sm:rounded-2xl p-4 sm:p-6">
            <h3 class="text-lg sm:text-xl font-semibold text-white mb-4 sm:mb-6 flex items-center gap-2">
                <span>"🚀"</span>
                " Development Journey"
            </h3>
            <div class="space-y-3 sm:space-y-4">
                {JOURNEY
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let line = if i + 1 != JOURNEY.len() { "border-l-2 border-gray-700" } else { "" };
                        view! {
                            <div class=format!("relative pl-6 sm:pl-8 pb-3 sm:pb-4 {line}")>
                                <div class=move || {
                                    format!(
                                        "absolute -left-1.5 sm:-left-2 top-0 w-3 h-3 sm:w-4 sm:h-4 rounded-full border-2 transition-all duration-300 {}",
                                        pick(i, "bg-purple-500 border-purple-400", "bg-gray-600 border-gray-500")(),
                                    )
                                }></div>
                                <div class="space-y-1">
                                    <div class="flex flex-col sm:flex-row sm:items-center gap-1 sm:gap-3">
                                        <span class=move || {
                                            format!(
                                                "text-xs sm:text-sm font-bold transition-colors duration-300 {}",
                                                pick(i, "text-purple-300", "text-gray-400")(),
                                            )
                                        }>{item.period}</span>
                                        <span class=move || {
                                            format!(
                                                "px-2 py-1 rounded-md text-xs font-medium transition-all duration-300 self-start sm:self-auto {}",
                                                pick(i, "bg-purple-500/20 text-purple-300", "bg-gray-600/20 text-gray-400")(),
                                            )
                                        }>{item.phase}</span>
                                    </div>
                                    <h4 class=move || {
                                        format!(
                                            "text-sm sm:text-base font-semibold transition-colors duration-300 {}",
                                            pick(i, "text-white", "text-gray-300")(),
                                        )
                                    }>{item.milestone}</h4>
                                    <p class=move || {
                                        format!(
                                            "text-xs sm:text-sm transition-colors duration-300 {}",
                                            pick(i, "text-gray-300", "text-gray-400")(),
                                        )
                                    }>{item.details}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Expertise() -> impl IntoView {
    view! {
        <div class="space-y-3 sm:space-y-4">
            <h3 class="text-lg sm:text-xl font-semibold text-white mb-4 sm:mb-6">"Technical Expertise"</h3>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-1 gap-3 sm:gap-4">
                {EXPERTISE
                    .iter()
                    .map(|area| {
                        view! {
                            <div class="bg-white/5 backdrop-blur-xl border border-white/20 rounded-lg sm:rounded-xl p-3 sm:p-4 hover:bg-white/10 transition-all duration-300 group">
                                <div class="flex items-start gap-2 sm:gap-3 mb-2 sm:mb-3">
                                    <span class="text-lg sm:text-xl flex-shrink-0">{area.icon}</span>
                                    <div class="flex-1 min-w-0">
                                        <h4 class="font-semibold text-white group-hover:text-purple-300 transition-colors duration-200 text-sm sm:text-base">
                                            {area.category}
                                        </h4>
                                        <p class="text-xs text-gray-400 mt-1 leading-tight">{area.description}</p>
                                    </div>
                                </div>
                                <div class="flex flex-wrap gap-1">
                                    {area
                                        .techs
                                        .iter()
                                        .map(|tech| {
                                            view! {
                                                <span class="px-1.5 sm:px-2 py-0.5 sm:py-1 bg-gray-700/50 text-gray-300 text-xs rounded border border-white/10 hover:border-purple-500/30 transition-colors duration-200">
                                                    {*tech}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Zoomed avatar. Only mounted while open; closes on Escape, a click anywhere outside
/// the close button's wrapper, or a downward swipe.
#[component]
fn Lightbox(open: RwSignal<bool>, natural: RwSignal<Option<(f64, f64)>>) -> impl IntoView {
    let touch_start = StoredValue::new(None::<f64>);
    let close = move || {
        log::debug!("avatar lightbox closed");
        open.try_set(false);
    };

    lock_scroll_while(move || open.get());

    Effect::new(move |_| {
        let handle = window_event_listener(ev::keydown, move |e| {
            if e.key() == "Escape" {
                close();
            }
        });
        on_cleanup(move || handle.remove());
    });

    let zoom_style = move || {
        let win = window();
        let vw = win.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
        let vh = win.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        ZoomSize::fit(natural.get(), vw, vh).style()
    };

    view! {
        <div
            class="fixed inset-0 z-[9999] flex items-center justify-center bg-black/80 p-4 sm:p-6"
            role="dialog"
            aria-modal="true"
            on:click=move |_| close()
            on:touchstart=move |e: ev::TouchEvent| {
                touch_start.set_value(e.touches().get(0).map(|t| t.client_y() as f64));
            }
            on:touchend=move |e: ev::TouchEvent| {
                let end = e.changed_touches().get(0).map(|t| t.client_y() as f64);
                if is_swipe_close(touch_start.get_value(), end) {
                    close();
                }
                touch_start.set_value(None);
            }
        >
            <div
                class="relative max-w-full max-h-full flex items-center justify-center pointer-events-auto"
                on:click=|e| e.stop_propagation()
            >
                <button
                    on:click=move |_| close()
                    aria-label="Close"
                    class="absolute text-white bg-black/50 hover:bg-black/70 rounded-full w-10 h-10 flex items-center justify-center shadow-lg backdrop-blur-sm z-[10001]"
                    style="top: max(8px, env(safe-area-inset-top)); right: max(8px, env(safe-area-inset-right));"
                >
                    "✕"
                </button>
                <img
                    src=PROFILE.avatar_path
                    alt=format!("{} avatar large", PROFILE.name)
                    on:click=move |_| close()
                    on:load=move |e| {
                        let img = event_target::<HtmlImageElement>(&e);
                        if let Some(size) = natural_size(&img) {
                            natural.set(Some(size));
                        }
                    }
                    style=zoom_style
                    class="rounded-md shadow-2xl select-none"
                    draggable="false"
                />
            </div>
        </div>
    }
}
