use leptos::{ev, html, prelude::*};

use super::icon::IconImg;
use crate::data::{all_skills, TechStack, STACKS};
use crate::state::stack::{outline, resolve_icon, should_contain_wheel, topic_count, StackIcon};

/// Horizontally scrolling row of technology trees.
#[component]
pub fn StackExplorer() -> impl IntoView {
    let strip = NodeRef::<html::Div>::new();

    // Only keep the wheel when the strip itself still has somewhere to go.
    let on_wheel = move |e: ev::WheelEvent| {
        let Some(el) = strip.get_untracked() else {
            return;
        };
        if should_contain_wheel(
            el.scroll_left() as f64,
            el.scroll_width() as f64,
            el.client_width() as f64,
        ) {
            e.stop_propagation();
        }
    };

    view! {
        <div class="relative rounded-3xl">
            <div class="text-center mb-8 px-4 sm:px-6">
                <h3 class="text-2xl sm:text-3xl md:text-4xl font-black mb-3 bg-clip-text text-transparent bg-gradient-to-r from-purple-300 via-cyan-300 to-purple-400 tracking-tight">
                    "Technology Stack Deep Dive"
                </h3>
                <div class="w-12 sm:w-16 h-1 bg-gradient-to-r from-purple-400 to-cyan-400 mx-auto mb-4 rounded-full"></div>
                <p class="text-slate-300 text-base sm:text-lg max-w-3xl mx-auto leading-relaxed font-light px-2">
                    "Scroll horizontally to explore each technology stack in detail. "
                    <span class="text-cyan-300 font-medium">"Just Scroll And GO."</span>
                </p>
            </div>

            <div class="flex justify-center mb-6 px-2">
                <div class="flex items-center gap-3 px-4 py-2 sm:px-6 sm:py-3 rounded-2xl border border-white/10">
                    <div class="flex gap-1">
                        <div class="w-2 h-2 rounded-full bg-purple-400 animate-pulse"></div>
                        <div class="w-2 h-2 rounded-full bg-cyan-400 animate-pulse" style="animation-delay: 0.2s;"></div>
                        <div class="w-2 h-2 rounded-full bg-purple-400 animate-pulse" style="animation-delay: 0.4s;"></div>
                    </div>
                    <span class="text-sm sm:text-base text-slate-400 font-medium">"Drag to scroll horizontally"</span>
                </div>
            </div>

            <div
                node_ref=strip
                class="relative -mx-4 sm:-mx-6 px-4 sm:px-6 overflow-x-auto overflow-y-visible stack-scroll"
                style="-webkit-overflow-scrolling: touch;"
                on:wheel=on_wheel
                on:touchmove=|e| e.stop_propagation()
            >
                <div class="absolute left-0 top-0 bottom-0 w-4 sm:w-8 bg-gradient-to-r from-black/20 to-transparent z-10 pointer-events-none"></div>
                <div class="absolute right-0 top-0 bottom-0 w-4 sm:w-8 bg-gradient-to-l from-black/20 to-transparent z-10 pointer-events-none"></div>

                <div class="flex gap-6 sm:gap-8 pb-8" style="min-width: max-content;">
                    {STACKS
                        .iter()
                        .map(|stack| {
                            view! {
                                <div class="min-w-[260px] sm:min-w-[320px] md:min-w-[360px] max-w-[400px] flex-shrink-0 transform transition-all duration-500 hover:scale-[1.02] hover:-translate-y-2">
                                    <StackTree stack />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="mt-6 sm:mt-8 text-center px-2">
                <div class="inline-flex items-center gap-3 px-4 py-2 sm:px-6 sm:py-3 rounded-2xl border border-white/10">
                    <div class="w-3 h-3 rounded-full bg-gradient-to-r from-purple-400 to-cyan-400"></div>
                    <span class="text-sm sm:text-base text-slate-400 font-medium">
                        "Each stack shows the complete technology ecosystem and common patterns"
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StackTree(stack: &'static TechStack) -> impl IntoView {
    let rows = outline(stack.tree);

    view! {
        <div class="p-4 sm:p-6 bg-gradient-to-b from-black/40 to-white/2 rounded-2xl shadow-2xl min-h-[220px] sm:min-h-[280px] w-full">
            <h4 class="text-lg sm:text-xl md:text-2xl font-bold mb-4 text-white flex items-center gap-2 sm:gap-3 flex-wrap">
                <span class="text-xl sm:text-2xl md:text-3xl flex items-center gap-1">
                    {stack
                        .icon_keys
                        .iter()
                        .map(|key| view! { <StackGlyph icon=resolve_icon(key, all_skills()) /> })
                        .collect_view()}
                </span>
                <span class="truncate">{stack.name}</span>
                <span class="ml-auto text-xs font-medium text-slate-400">
                    {format!("{} topics", topic_count(stack.tree))}
                </span>
            </h4>

            <div class="space-y-3 sm:space-y-4 w-full max-h-[400px] overflow-auto tree-scroll">
                {rows
                    .into_iter()
                    .map(|row| {
                        let (frame, indent) = if row.depth == 0 {
                            ("bg-white/6 border border-white/8", String::new())
                        } else {
                            (
                                "bg-white/3",
                                format!("margin-left: {}rem; border-left: 1px solid rgba(255,255,255,0.06); padding-left: 0.75rem;", row.depth),
                            )
                        };
                        view! {
                            <div style=indent>
                                <div
                                    class=format!("flex items-center gap-3 py-2 px-3 rounded-xl shadow-sm w-full {frame}")
                                    style="min-width: 160px;"
                                >
                                    <div class="text-lg font-semibold text-purple-100 flex-shrink-0">"•"</div>
                                    <div class="text-sm break-words">
                                        <div class="font-semibold text-white leading-tight text-xs sm:text-sm md:text-base">
                                            {row.title}
                                        </div>
                                        {row
                                            .subtitle
                                            .map(|sub| view! { <div class="text-xs text-slate-300 mt-0.5">{sub}</div> })}
                                    </div>
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
fn StackGlyph(icon: StackIcon) -> impl IntoView {
    match icon {
        StackIcon::Image {
            src,
            alt,
            fallback,
            size_px,
        } => {
            let size = format!(
                "width: {size_px}px; height: {size_px}px; object-fit: contain; display: inline-block; vertical-align: middle; margin-right: 6px;"
            );
            view! {
                <span style=size>
                    <IconImg src alt fallback class="w-full h-full" style="object-fit: contain;" />
                </span>
            }
            .into_any()
        }
        StackIcon::Glyph { glyph, large } => {
            let style = if large { "font-size: 26px; margin-right: 8px;" } else { "" };
            view! { <span style=style>{glyph}</span> }.into_any()
        }
    }
}
