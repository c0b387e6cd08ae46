use std::time::Duration;

use leptos::{ev, prelude::*};
use wasm_bindgen::JsValue;

use super::{lock_scroll_while, scroll_to_section};
use crate::data::{HERO_WORDS, PROFILE};
use crate::state::nav::Section;
use crate::state::rotator::{Motion, Phase, Rotator, ANIM_MS, CYCLE_MS};

const HEADLINE_TEXT: &str = "inline-block font-black leading-none bg-clip-text text-transparent text-2xl xs:text-3xl sm:text-4xl md:text-6xl xl:text-7xl bg-gradient-to-r from-white via-purple-200 to-cyan-200";
const SUBTITLE_TEXT: &str = "inline-block text-cyan-300 font-medium text-xs sm:text-sm md:text-lg";

fn keep_timer(timer: StoredValue<Option<TimeoutHandle>>, handle: Result<TimeoutHandle, JsValue>) {
    match handle {
        Ok(h) => {
            timer.try_set_value(Some(h));
        }
        Err(e) => log::warn!("couldn't schedule headline rotation: {e:?}"),
    }
}

/// Wait one cycle, animate, then commit and go again. A disposed rotator ends the loop,
/// so a cycle never starts while the previous one is still sliding.
fn schedule_cycle(rotator: RwSignal<Rotator>, timer: StoredValue<Option<TimeoutHandle>>) {
    let handle = set_timeout_with_handle(
        move || {
            if rotator.try_update(Rotator::begin).is_none() {
                return;
            }
            let handle = set_timeout_with_handle(
                move || {
                    if rotator.try_update(Rotator::commit).is_some() {
                        schedule_cycle(rotator, timer);
                    }
                },
                Duration::from_millis(ANIM_MS),
            );
            keep_timer(timer, handle);
        },
        Duration::from_millis(CYCLE_MS),
    );
    keep_timer(timer, handle);
}

#[component]
pub fn Hero() -> impl IntoView {
    let rotator = RwSignal::new(Rotator::new(HERO_WORDS.len()));
    let timer = StoredValue::new(None::<TimeoutHandle>);
    let show_preview = RwSignal::new(false);

    Effect::new(move |_| {
        schedule_cycle(rotator, timer);
        on_cleanup(move || {
            if let Some(handle) = timer.try_get_value().flatten() {
                handle.clear();
            }
        });
    });

    view! {
        <div
            aria-label="Hero"
            class="relative overflow-visible flex items-center justify-center px-4 sm:px-6 py-12 scroll-mt-[72px]"
        >
            <FloatingCode />

            <div class="relative z-10 w-full max-w-7xl mx-auto">
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-6 items-center min-h-[60vh] lg:min-h-[80vh]">
                    <div class="lg:col-span-7 lg:col-start-2 text-center lg:text-left">
                        <div class="inline-flex items-center gap-2 px-3 py-1.5 sm:px-4 sm:py-2 bg-gradient-to-r from-purple-600/20 to-cyan-600/20 border border-purple-500/30 rounded-full text-xs sm:text-sm text-purple-300 mb-4 backdrop-blur-sm">
                            <div class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></div>
                            "Available for new opportunities"
                        </div>

                        <Switcher
                            rotator
                            motion=|r: &Rotator| r.headline_motion()
                            text=|i| HERO_WORDS[i].text
                            rail_class="h-10 sm:h-12 md:h-14 border-cyan-400/70"
                            mask_class="relative overflow-hidden will-change-transform"
                            text_class=HEADLINE_TEXT
                            wrapper_class="relative mb-3 sm:mb-4"
                        />
                        <Switcher
                            rotator
                            motion=|r: &Rotator| r.subtitle_motion()
                            text=|i| HERO_WORDS[i].subtitle
                            rail_class="h-6 sm:h-7 md:h-8 border-purple-400/70"
                            mask_class="relative overflow-hidden min-h-[2.2rem] will-change-transform"
                            text_class=SUBTITLE_TEXT
                            wrapper_class="relative mb-4 sm:mb-6"
                        />

                        <div class="mb-6 sm:mb-8 relative">
                            <div class="absolute -left-3 top-0 w-1 h-full bg-gradient-to-b from-purple-500 to-cyan-500 rounded-full opacity-60 hidden md:block"></div>
                            <p class="text-base sm:text-lg md:text-2xl text-gray-300 font-light mb-1 sm:mb-2 pl-0 sm:pl-6">
                                {PROFILE.title}
                            </p>
                            <p class="text-sm sm:text-base md:text-lg text-purple-300 pl-0 sm:pl-6 font-medium">
                                "Full-Stack Developer"
                            </p>
                            <div class="w-20 sm:w-24 h-1 bg-gradient-to-r from-purple-500 to-cyan-500 mt-3 sm:mt-4 rounded-full ml-0 sm:ml-6 shadow-lg shadow-purple-500/30"></div>
                        </div>

                        <p class="text-sm sm:text-base md:text-xl text-gray-400 max-w-lg leading-relaxed mb-8 sm:mb-12 mx-auto lg:mx-0 backdrop-blur-sm bg-black/20 p-3 sm:p-4 rounded-lg border border-white/10">
                            "Design-minded developer crafting exceptional digital experiences from "
                            <span class="text-cyan-300 font-semibold relative">
                                <span class="absolute inset-0 bg-cyan-400/20 blur-lg hidden sm:block"></span>
                                <span class="relative">{PROFILE.location}</span>
                            </span>
                        </p>
                    </div>

                    <div class="lg:col-span-4 flex justify-center lg:justify-end">
                        <AvailabilityCard />
                    </div>
                </div>

                <div class="flex flex-col sm:flex-row gap-3 sm:gap-6 justify-center mt-6 sm:mt-8 lg:mt-12 px-4">
                    <button
                        on:click=move |_| show_preview.set(true)
                        title="Preview resume"
                        class="group relative w-full sm:w-auto px-5 sm:px-10 py-3 sm:py-4 bg-gradient-to-r from-purple-600 via-purple-500 to-blue-600 rounded-2xl text-sm sm:text-base md:text-lg font-bold text-white overflow-hidden transform transition-all duration-300 hover:scale-105 sm:hover:scale-110 hover:rotate-1 shadow-2xl hover:shadow-purple-500/50 text-center border border-purple-400/30"
                    >
                        <span class="relative z-10 flex items-center justify-center gap-2">"📄 Preview Resume"</span>
                        <div class="absolute inset-0 bg-gradient-to-r from-blue-600 to-purple-600 opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
                    </button>
                    <button
                        on:click=move |_| scroll_to_section(Section::Contact)
                        class="group relative w-full sm:w-auto px-5 sm:px-10 py-3 sm:py-4 bg-white/5 backdrop-blur-lg border-2 border-white/18 rounded-2xl text-sm sm:text-base md:text-lg font-bold text-white overflow-hidden transform transition-all duration-300 hover:scale-105 sm:hover:scale-110 hover:-rotate-1 hover:bg-white/10 hover:border-purple-400/50 text-center"
                    >
                        <span class="relative z-10 flex items-center justify-center gap-2">"🚀 Let's Connect"</span>
                        <div class="absolute inset-0 bg-gradient-to-r from-purple-600/20 to-cyan-600/20 scale-x-0 group-hover:scale-x-100 transition-transform duration-500 origin-left"></div>
                    </button>
                </div>

                <div class="absolute bottom-6 left-1/2 transform -translate-x-1/2 animate-bounce hidden sm:block">
                    <div class="w-6 h-10 border-2 border-white/30 rounded-full flex justify-center backdrop-blur-sm bg-black/20">
                        <div class="w-1 h-3 bg-gradient-to-b from-purple-400 to-cyan-400 rounded-full mt-2 animate-pulse"></div>
                    </div>
                    <p class="text-xs text-gray-400 mt-2 text-center">"Scroll"</p>
                </div>
            </div>

            <Show when=move || show_preview.get()>
                <ResumePreview open=show_preview />
            </Show>
        </div>
    }
}

/// One line of the rotating headline: the current text, the incoming text while a
/// cycle animates, and a rail on the side the motion starts from.
#[component]
fn Switcher(
    rotator: RwSignal<Rotator>,
    motion: fn(&Rotator) -> Motion,
    text: fn(usize) -> &'static str,
    rail_class: &'static str,
    mask_class: &'static str,
    text_class: &'static str,
    wrapper_class: &'static str,
) -> impl IntoView {
    let motion = Memo::new(move |_| rotator.with(motion));
    let animating = move || rotator.with(|r| r.phase() == Phase::Animating);

    view! {
        <div class=wrapper_class>
            <div class=move || {
                format!("absolute top-1/2 -translate-y-1/2 {} {rail_class}", motion.get().rail)
            } />
            <div class=mask_class>
                <div
                    class=move || format!("{text_class} {}", motion.get().outgoing)
                    style="white-space: nowrap;"
                >
                    {move || text(rotator.with(Rotator::index))}
                </div>
                <Show when=animating>
                    <div
                        class=move || {
                            format!(
                                "{text_class} absolute inset-0 {}",
                                motion.get().incoming.unwrap_or_default(),
                            )
                        }
                        style="white-space: nowrap;"
                    >
                        {move || text(rotator.with(Rotator::next_index))}
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn AvailabilityCard() -> impl IntoView {
    view! {
        <div class="relative group w-full max-w-xs">
            <div class="absolute -inset-1 bg-gradient-to-r from-purple-600 to-cyan-600 rounded-3xl blur opacity-25 group-hover:opacity-75 transition duration-1000 group-hover:duration-200 hidden sm:block"></div>
            <div class="relative p-4 sm:p-6 rounded-2xl border border-white/20 bg-black/40 backdrop-blur-xl hover:scale-105 transition-all duration-500 text-center w-full max-w-xs group-hover:bg-black/60">
                <div class="relative mb-4 sm:mb-6">
                    <div class="absolute inset-0 bg-gradient-to-r from-purple-600 to-cyan-600 rounded-full blur-md opacity-50 animate-pulse hidden sm:block"></div>
                    <div class="relative w-14 h-14 sm:w-20 sm:h-20 mx-auto rounded-full bg-gradient-to-r from-purple-600/80 to-cyan-600/80 flex items-center justify-center text-lg sm:text-2xl font-bold text-white shadow-lg border border-white/10">
                        {PROFILE.initial}
                    </div>
                    <div class="absolute inset-0 rounded-full border-2 border-purple-400/30 animate-ping"></div>
                </div>
                <h3 class="text-sm sm:text-base font-semibold text-gray-200 mb-1">"Available for Work"</h3>
                <p class="text-gray-400 text-xs sm:text-sm mb-2">"Let's build something amazing together"</p>
                <div class="flex items-center justify-center gap-2">
                    <div class="relative">
                        <div class="w-2.5 h-2.5 bg-green-400 rounded-full animate-pulse"></div>
                        <div class="absolute inset-0 bg-green-400 rounded-full animate-ping opacity-20"></div>
                    </div>
                    <span class="text-green-300 text-xs sm:text-sm font-medium">"Online"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FloatingCode() -> impl IntoView {
    let snippets = [
        ("top-20 left-10 text-cyan-400 animate-float-slow hidden md:block", "<div className=\"hero\">".to_string()),
        (
            "top-40 right-20 text-purple-400 animate-float-medium hidden md:block",
            format!("const developer = \"{}\";", PROFILE.name),
        ),
        ("bottom-32 left-20 text-blue-400 animate-float-fast hidden md:block", "function createMagic() {".to_string()),
        ("top-60 right-40 text-green-400 animate-float-slow hidden lg:block", "return innovation;".to_string()),
        ("bottom-60 right-10 text-yellow-400 animate-float-medium hidden lg:block", "}".to_string()),
    ];

    view! {
        <div class="absolute inset-0 pointer-events-none overflow-hidden" aria-hidden="true">
            {snippets
                .into_iter()
                .map(|(class, code)| {
                    view! { <div class=format!("absolute opacity-10 font-mono text-sm {class}")>{code}</div> }
                })
                .collect_view()}
        </div>
        <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
            <div class="absolute top-1/4 left-1/4 w-32 h-32 border border-purple-500/20 rotate-45 animate-spin-slow hidden lg:block"></div>
            <div class="absolute bottom-1/4 right-1/4 w-24 h-24 border border-cyan-500/20 rotate-12 animate-pulse hidden md:block"></div>
            <div class="absolute top-1/3 right-1/3 w-16 h-16 bg-gradient-to-r from-purple-500/10 to-cyan-500/10 rounded-full animate-bounce-slow hidden sm:block"></div>
        </div>
    }
}

/// Full-screen resume viewer. Mounted only while open, so the scroll lock and the
/// Escape listener live exactly as long as the dialog.
#[component]
fn ResumePreview(open: RwSignal<bool>) -> impl IntoView {
    lock_scroll_while(move || open.get());

    Effect::new(move |_| {
        let handle = window_event_listener(ev::keydown, move |e| {
            if e.key() == "Escape" {
                open.try_set(false);
            }
        });
        on_cleanup(move || handle.remove());
    });

    let close = move |_| open.set(false);

    view! {
        <div
            class="fixed inset-0 z-[9999] flex items-center justify-center p-2 sm:p-4"
            role="dialog"
            aria-modal="true"
            aria-label="Resume preview"
            style="position: fixed; top: 0; left: 0; width: 100vw; height: 100dvh;"
        >
            <div class="absolute inset-0 bg-black/80 backdrop-blur-sm" on:click=close />
            <div class="relative z-[10000] w-full h-full max-w-4xl bg-black/95 rounded-lg sm:rounded-xl overflow-hidden shadow-2xl border border-white/10">
                <div class="flex items-center justify-between p-2 sm:p-4 border-b border-white/10 bg-black/90 backdrop-blur-sm">
                    <div class="flex items-center gap-2 sm:gap-3 min-w-0 flex-1">
                        <div class="w-6 h-6 sm:w-8 sm:h-8 flex items-center justify-center rounded bg-gradient-to-r from-purple-600 to-cyan-600 text-white font-bold text-xs sm:text-sm">
                            "📄"
                        </div>
                        <div class="min-w-0 flex-1">
                            <h4 class="text-xs sm:text-base font-semibold text-white truncate">"Resume Preview"</h4>
                            <p class="text-xs text-gray-400 truncate hidden sm:block">
                                {format!("Previewing {}", PROFILE.resume_path.trim_start_matches('/'))}
                            </p>
                        </div>
                    </div>
                    <div class="flex items-center gap-1 sm:gap-2 flex-shrink-0">
                        <a
                            href=PROFILE.resume_path
                            target="_blank"
                            rel="noopener noreferrer"
                            download=PROFILE.resume_path.trim_start_matches('/')
                            class="inline-flex items-center gap-1 px-2 py-1 sm:px-3 sm:py-2 bg-gradient-to-r from-purple-600 to-cyan-600 text-white text-xs sm:text-sm rounded hover:opacity-90 transition"
                        >
                            "Save"
                        </a>
                        <button
                            on:click=close
                            aria-label="Close preview"
                            class="p-1 sm:p-2 rounded hover:bg-white/10 transition text-white text-sm sm:text-base"
                        >
                            "✕"
                        </button>
                    </div>
                </div>
                <div class="w-full h-[calc(100%-44px)] sm:h-[calc(100%-60px)] bg-gray-900 relative overflow-hidden">
                    <iframe
                        src=format!("{}#view=FitH", PROFILE.resume_path)
                        title="CV Preview"
                        width="100%"
                        height="100%"
                        class="border-0"
                        style="min-height: 400px; background-color: #1f2937;"
                    />
                </div>
            </div>
        </div>
    }
}
