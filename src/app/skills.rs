use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::use_media_query;
use web_sys::{FocusOptions, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::icon::IconImg;
use super::stack_explorer::StackExplorer;
use crate::data::{skill_blurb, Skill, CORE_SKILLS, QUICK_NOTES, QUICK_NOTE_TAGS};
use crate::state::skills::{
    explorer_toggle_label, preview_prompt, Highlight, EXPLORER_SCROLL_DELAY_MS, HOVER_MEDIA_QUERY,
};
use crate::state::stack::encode_asset_path;

/// Bring the freshly opened explorer into view and give it focus for keyboard users,
/// without letting focus cause a second jump.
fn reveal(explorer: NodeRef<html::Div>) {
    let Some(el) = explorer.get_untracked() else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    opts.set_inline(ScrollLogicalPosition::Nearest);
    el.scroll_into_view_with_scroll_into_view_options(&opts);

    let focus = FocusOptions::new();
    focus.set_prevent_scroll(true);
    if let Err(e) = el.focus_with_options(&focus) {
        log::warn!("couldn't focus stack explorer: {e:?}");
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let highlight = RwSignal::new(Highlight::default());
    let explorer_open = RwSignal::new(false);
    let explorer = NodeRef::<html::Div>::new();
    let can_hover = use_media_query(HOVER_MEDIA_QUERY);

    Effect::new(move |_| {
        if !explorer_open.get() {
            return;
        }
        log::debug!("stack explorer opened");
        match set_timeout_with_handle(move || reveal(explorer), Duration::from_millis(EXPLORER_SCROLL_DELAY_MS)) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("couldn't schedule explorer scroll: {e:?}"),
        }
    });

    let selected = move || highlight.with(Highlight::selected).and_then(|i| CORE_SKILLS.get(i));

    view! {
        <div class="relative py-16 px-4 sm:px-6">
            <div class="relative z-10 max-w-7xl mx-auto">
                <div class="mb-8 text-center">
                    <h2 class="text-4xl sm:text-5xl md:text-6xl font-extrabold bg-clip-text text-transparent bg-gradient-to-r from-purple-300 to-cyan-300">
                        "Core Skills"
                    </h2>
                    <p class="mt-3 text-slate-300 max-w-2xl mx-auto text-sm sm:text-base">
                        "Languages, frameworks and tools I use. Hover a skill for a preview, or click \"Explore Stacks\" for deep-dive trees."
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-12 gap-6 md:gap-8 items-start">
                    <div class="lg:col-span-8">
                        <div class="bg-white/2 border border-white/6 rounded-3xl p-4 md:p-6 shadow-xl">
                            <div class="flex items-center justify-between mb-4">
                                <h3 class="text-lg font-semibold text-white">"Skill Matrix"</h3>
                                <div class="text-xs sm:text-sm text-slate-300">"Hover to preview • Tap on mobile"</div>
                            </div>

                            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4 sm:gap-6">
                                {CORE_SKILLS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, skill)| {
                                        view! {
                                            <div
                                                tabindex="0"
                                                class="outline-none"
                                                aria-label=format!("Skill {}", skill.name)
                                                on:click=move |_| highlight.update(|h| h.select(i))
                                                on:focus=move |_| highlight.update(|h| h.select(i))
                                                on:blur=move |_| highlight.update(Highlight::clear)
                                                on:mouseenter=move |_| {
                                                    highlight.update(|h| h.pointer_enter(i, can_hover.get_untracked()))
                                                }
                                                on:mouseleave=move |_| {
                                                    highlight.update(|h| h.pointer_leave(can_hover.get_untracked()))
                                                }
                                            >
                                                <SkillCard skill />
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="mt-6 flex items-center justify-between flex-wrap gap-3">
                                <div class="text-xs text-slate-400">"Core technologies I use day-to-day"</div>
                                <button
                                    on:click=move |_| explorer_open.update(|open| *open = !*open)
                                    class="inline-flex items-center gap-2 px-4 py-2 rounded-full text-sm font-medium bg-gradient-to-r from-purple-500 to-cyan-400 text-black shadow-md hover:scale-[1.02] transition-transform w-full md:w-auto"
                                    aria-expanded=move || explorer_open.get().to_string()
                                    aria-controls="stack-explorer"
                                >
                                    {move || explorer_toggle_label(explorer_open.get())}
                                </button>
                            </div>
                        </div>
                    </div>

                    <aside class="lg:col-span-4 mt-6 lg:mt-0">
                        <div class="lg:sticky lg:top-20 lg:flex lg:flex-col lg:h-[calc(100vh-12rem)]">
                            <div class="bg-gradient-to-br from-white/4 to-white/3 border border-white/8 rounded-3xl p-4 md:p-6 shadow-2xl">
                                <div class="flex items-center gap-4">
                                    <div class="w-12 h-12 md:w-16 md:h-16 rounded-lg flex items-center justify-center text-3xl md:text-4xl bg-gradient-to-br from-purple-500 via-blue-500 to-cyan-500 shadow-lg">
                                        {move || match selected() {
                                            Some(skill) => preview_icon(skill),
                                            None => "⚙️".into_any(),
                                        }}
                                    </div>
                                    <div>
                                        <h4 class="text-lg md:text-xl font-bold text-white">
                                            {move || {
                                                selected()
                                                    .map(|s| s.name)
                                                    .unwrap_or_else(|| preview_prompt(can_hover.get()).heading)
                                            }}
                                        </h4>
                                        <div class="text-xs md:text-sm text-slate-300 mt-1">
                                            {move || {
                                                selected()
                                                    .map(|s| skill_blurb(s.name).subtitle)
                                                    .unwrap_or("Preview details here")
                                            }}
                                        </div>
                                    </div>
                                </div>

                                <div class="mt-4 text-slate-300 text-sm leading-relaxed min-h-[64px]">
                                    {move || {
                                        selected()
                                            .map(|s| skill_blurb(s.name).text)
                                            .unwrap_or_else(|| preview_prompt(can_hover.get()).body)
                                    }}
                                </div>

                                <div class="mt-5 flex flex-col sm:flex-row gap-3">
                                    <button
                                        on:click=move |_| explorer_open.set(true)
                                        class="flex-1 inline-flex items-center justify-center gap-2 px-4 py-2 rounded-lg bg-purple-600 hover:bg-purple-700 text-white font-semibold transition w-full sm:w-auto"
                                    >
                                        "Explore stacks"
                                    </button>
                                    <a
                                        href="#contact"
                                        class="inline-flex items-center justify-center gap-2 px-4 py-2 rounded-lg border border-white/10 text-sm text-slate-200 hover:bg-white/2 transition w-full sm:w-auto text-center"
                                    >
                                        "Work with me"
                                    </a>
                                </div>
                            </div>

                            <QuickNotes />
                        </div>
                    </aside>
                </div>

                <div
                    id="stack-explorer"
                    node_ref=explorer
                    tabindex="-1"
                    class=move || {
                        format!(
                            "mt-10 transition-all duration-400 ease-in-out overflow-hidden {}",
                            if explorer_open.get() {
                                "opacity-100 max-h-none"
                            } else {
                                "opacity-0 max-h-0 pointer-events-none"
                            },
                        )
                    }
                    aria-hidden=move || (!explorer_open.get()).to_string()
                >
                    <div class="rounded-3xl">
                        <div class="flex flex-col sm:flex-row items-start sm:items-center justify-between p-4 md:p-6 border-b border-white/10 gap-3">
                            <h3 class="text-lg md:text-xl font-bold text-white">"Stack Explorer"</h3>
                            <div class="flex items-center gap-4 w-full sm:w-auto">
                                <div class="text-xs md:text-sm text-slate-400">"Horizontally scroll to explore each stack"</div>
                                <button
                                    on:click=move |_| explorer_open.set(false)
                                    class="inline-flex items-center gap-2 px-3 py-1.5 rounded-lg text-sm bg-white/10 hover:bg-white/20 text-white transition w-full sm:w-auto"
                                >
                                    "Close"
                                </button>
                            </div>
                        </div>
                        <div class="p-4 md:p-6">
                            <StackExplorer />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn preview_icon(skill: &'static Skill) -> AnyView {
    match skill.icon_path {
        Some(path) => view! {
            <IconImg
                src=encode_asset_path(path)
                alt=format!("{} logo", skill.name)
                fallback=skill.icon
                style="width: 72%; height: 72%; object-fit: contain; display: block;"
                fallback_style="font-size: 1.4rem;"
            />
        }
        .into_any(),
        None => view! { <span style="font-size: 1.4rem;">{skill.icon}</span> }.into_any(),
    }
}

#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    let icon_size = "width: clamp(56px, 12vw, 96px); height: clamp(56px, 12vw, 96px);";
    let glyph_style = "font-size: clamp(1.4rem, 3.2vw, 2.8rem);";
    let backdrop = if skill.icon_path.is_some() {
        "bg-transparent"
    } else {
        "bg-gradient-to-br from-purple-500 via-blue-500 to-cyan-500"
    };

    view! {
        <article
            role="group"
            aria-label=format!("Skill card: {}", skill.name)
            class="relative group bg-gradient-to-br from-white/10 to-white/5 backdrop-blur-xl border border-white/20 rounded-2xl sm:rounded-3xl p-4 sm:p-6 lg:p-8 text-center shadow-lg hover:shadow-purple-500/30 hover:border-purple-400/40 transform hover:-translate-y-2 hover:scale-105 transition-all duration-500 ease-out w-full max-w-[92%] sm:max-w-[320px] md:max-w-[360px] lg:max-w-[420px] xl:max-w-[480px] mx-auto flex flex-col items-center"
        >
            <div
                class="absolute inset-0 rounded-2xl sm:rounded-3xl opacity-0 group-hover:opacity-100 transition-opacity duration-500 pointer-events-none"
                aria-hidden="true"
            >
                <div class="w-full h-full rounded-2xl sm:rounded-3xl bg-gradient-to-br from-purple-500/20 to-blue-500/20 blur-2xl" />
            </div>

            <div
                style=icon_size
                class=format!(
                    "relative z-10 mb-3 sm:mb-4 lg:mb-5 rounded-xl sm:rounded-2xl flex items-center justify-center text-white shadow-lg shadow-purple-500/40 transform group-hover:rotate-6 transition-transform duration-500 flex-shrink-0 {backdrop}",
                )
            >
                {match skill.icon_path {
                    Some(path) => view! {
                        <IconImg
                            src=encode_asset_path(path)
                            alt=format!("{} logo", skill.name)
                            fallback=skill.icon
                            style="width: 70%; height: 70%; object-fit: contain; display: block; max-width: 100%; max-height: 100%;"
                            fallback_style=glyph_style
                        />
                    }
                    .into_any(),
                    None => view! { <span style=glyph_style>{skill.icon}</span> }.into_any(),
                }}
            </div>

            <h3
                class="relative z-10 font-semibold text-white text-sm sm:text-base md:text-lg lg:text-xl tracking-wide mt-2 sm:mt-3 lg:mt-4 leading-tight"
                style="-webkit-font-smoothing: antialiased;"
            >
                {skill.name}
            </h3>
        </article>
    }
}

#[component]
fn QuickNotes() -> impl IntoView {
    view! {
        <div
            class="mt-6 p-4 rounded-2xl bg-white/3 border border-white/6 max-h-[40vh] overflow-auto lg:max-h-[34.7vh] quick-scroll"
            aria-live="polite"
        >
            <div class="text-xs text-slate-300 mb-3">"Quick notes"</div>
            <div class="flex flex-wrap gap-2 mb-4">
                {QUICK_NOTE_TAGS
                    .iter()
                    .map(|tag| {
                        view! { <span class="text-xs px-3 py-1 rounded-full bg-white/5 border border-white/6">{*tag}</span> }
                    })
                    .collect_view()}
            </div>
            <div class="space-y-4 text-slate-300 text-sm">
                {QUICK_NOTES
                    .iter()
                    .map(|note| {
                        view! {
                            <div>
                                <h5 class="text-sm font-semibold text-white mb-1">{note.title}</h5>
                                <p class="text-xs sm:text-sm leading-relaxed">{note.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
