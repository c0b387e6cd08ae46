use leptos::{ev, html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::data::Project;
use crate::state::projects::{
    index_label, project_links, LinkKind, OutboundLink, Tilt, EXTERNAL_REL, IN_VIEW_THRESHOLD,
};

const CORNER: &str = "absolute w-4 sm:w-6 lg:w-8 h-4 sm:h-6 lg:h-8 transform transition-transform";

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    let active = RwSignal::new(0_usize);
    let in_view = RwSignal::new(false);
    let grid = NodeRef::<html::Div>::new();

    use_intersection_observer_with_options(
        grid,
        move |entries, _| {
            if let Some(entry) = entries.first() {
                in_view.set(entry.is_intersecting());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![IN_VIEW_THRESHOLD]),
    );

    view! {
        <div class="px-4 sm:px-6 lg:px-8 py-8 sm:py-12 lg:py-16 relative overflow-hidden">
            <div class="max-w-7xl mx-auto relative z-10 w-full">
                <div class="relative mb-8 sm:mb-12 lg:mb-16 text-center">
                    <h2 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl xl:text-7xl font-black bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                        "Featured Projects"
                    </h2>
                    <div class="relative mt-4 sm:mt-6 flex justify-center">
                        <div class="relative w-32 sm:w-48 md:w-64 h-1 sm:h-2 overflow-hidden">
                            <div class="absolute inset-0 bg-white/10 rounded-full"></div>
                            <div class="absolute left-0 top-0 w-1/3 h-full bg-gradient-to-r from-purple-500 to-purple-600 rounded-full"></div>
                            <div class="absolute right-0 top-0 w-1/3 h-full bg-gradient-to-r from-cyan-600 to-cyan-500 rounded-full"></div>
                            <div class="absolute left-1/2 top-0 w-4 sm:w-8 h-full bg-white/50 rounded-full transform -translate-x-1/2"></div>
                        </div>
                    </div>
                </div>

                <div
                    node_ref=grid
                    class=move || {
                        format!(
                            "project-grid grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 2xl:grid-cols-4 gap-6 sm:gap-8 lg:gap-10 xl:gap-12 items-stretch transition-all duration-700 {}",
                            if in_view.get() { "opacity-100 translate-y-0" } else { "opacity-70 translate-y-4" },
                        )
                    }
                >
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <div
                                    class="relative group/project flex flex-col min-h-0"
                                    on:mouseenter=move |_| active.set(i)
                                >
                                    <div class="absolute -inset-2 sm:-inset-3 lg:-inset-4 pointer-events-none">
                                        <div class=format!("{CORNER} top-0 left-0 border-l-2 border-t-2 border-purple-500/30 origin-top-left group-hover/project:scale-125 duration-500")></div>
                                        <div class=format!("{CORNER} top-0 right-0 border-r-2 border-t-2 border-cyan-500/30 origin-top-right group-hover/project:scale-125 duration-500")></div>
                                        <div class=format!("{CORNER} bottom-0 left-0 border-l-2 border-b-2 border-cyan-500/30 origin-bottom-left group-hover/project:scale-125 duration-500")></div>
                                        <div class=format!("{CORNER} bottom-0 right-0 border-r-2 border-b-2 border-purple-500/30 origin-bottom-right group-hover/project:scale-125 duration-500")></div>
                                        <div class="absolute -top-4 sm:-top-5 lg:-top-6 -left-4 sm:-left-5 lg:-left-6 w-8 sm:w-10 lg:w-12 h-8 sm:h-10 lg:h-12 border border-purple-500/40 rounded-full flex items-center justify-center text-purple-300 font-bold bg-black/20 backdrop-blur-sm text-xs sm:text-sm lg:text-base transform group-hover/project:scale-110 group-hover/project:rotate-12 transition-all duration-300">
                                            {index_label(i)}
                                        </div>
                                        <Show when=move || active.get() == i>
                                            <div class="absolute inset-0 border-2 border-purple-500/50 rounded-2xl sm:rounded-3xl animate-pulse"></div>
                                        </Show>
                                    </div>
                                    <div class="flex-1 min-h-0 flex flex-col">
                                        <ProjectCard project />
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-8 sm:mt-12 flex items-center justify-center gap-2 sm:gap-4 opacity-50 text-xs sm:text-sm">
                    <div class="hidden sm:block text-purple-300 font-mono">
                        {format!("GRID: {} PROJECTS", projects.len())}
                    </div>
                    <div class="flex gap-1">
                        {(0..projects.len())
                            .map(|i| {
                                view! {
                                    <div class=move || {
                                        format!(
                                            "w-1.5 sm:w-2 h-1.5 sm:h-2 rounded-full transition-all duration-300 {}",
                                            if active.get() == i { "bg-purple-500 scale-125" } else { "bg-white/20" },
                                        )
                                    } />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// A single project with pointer-driven 3D tilt and its two outbound links.
#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let tilt = RwSignal::new(Tilt::default());
    let hovered = move || tilt.with(|t| t.lifted);

    let on_move = move |e: ev::MouseEvent| {
        let Some(el) = card.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        tilt.set(Tilt::from_pointer(
            e.client_x() as f64 - rect.left(),
            e.client_y() as f64 - rect.top(),
            rect.width(),
            rect.height(),
        ));
    };

    let [source, live] = project_links(project);

    view! {
        <div
            node_ref=card
            on:mouseenter=move |_| {
                tilt.set(Tilt {
                    lifted: true,
                    ..Tilt::default()
                })
            }
            on:mousemove=on_move
            on:mouseleave=move |_| tilt.set(Tilt::default())
            class="relative group perspective-1000 w-full h-full overflow-hidden transform-gpu transition-all duration-500 ease-out min-h-[220px] sm:min-h-[260px] md:min-h-[300px] lg:min-h-[340px] xl:min-h-[360px] flex flex-col"
            style=move || tilt.get().transform()
        >
            <div class="hidden lg:block absolute -inset-8 pointer-events-none" aria-hidden="true">
                {(0..8)
                    .map(|i| {
                        view! {
                            <div
                                class="absolute w-2 h-2 border border-purple-500/30 rotate-45 opacity-0 group-hover:opacity-100 transition-all duration-1000"
                                style=move || {
                                    let orbit = if hovered() {
                                        format!("orbit-{} {}s linear infinite", i % 4, 4 + i)
                                    } else {
                                        "none".to_string()
                                    };
                                    format!(
                                        "left: {}%; top: {}%; animation: {orbit}; animation-delay: {:.1}s;",
                                        20 + i * 10,
                                        10 + i * 8,
                                        i as f64 * 0.2,
                                    )
                                }
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                <div class=format!("{CORNER} top-0 left-0 border-l-2 border-t-2 border-purple-500/50 origin-top-left group-hover:scale-[1.5] duration-700")></div>
                <div class=format!("{CORNER} top-0 right-0 border-r-2 border-t-2 border-cyan-500/50 origin-top-right group-hover:scale-[1.5] duration-700")></div>
                <div class=format!("{CORNER} bottom-0 left-0 border-l-2 border-b-2 border-cyan-500/50 origin-bottom-left group-hover:scale-[1.5] duration-700")></div>
                <div class=format!("{CORNER} bottom-0 right-0 border-r-2 border-b-2 border-purple-500/50 origin-bottom-right group-hover:scale-[1.5] duration-700")></div>
                <div class="hidden md:block absolute left-0 top-1/4 w-1 h-1/2 bg-purple-500/30 transform -translate-x-full group-hover:translate-x-0 transition-transform duration-500"></div>
                <div class="hidden md:block absolute right-0 top-1/4 w-1 h-1/2 bg-cyan-500/30 transform translate-x-full group-hover:translate-x-0 transition-transform duration-500"></div>
                <div class="hidden md:block absolute top-0 left-1/4 w-1/2 h-1 bg-purple-500/30 transform -translate-y-full group-hover:translate-y-0 transition-transform duration-500"></div>
                <div class="hidden md:block absolute bottom-0 left-1/4 w-1/2 h-1 bg-cyan-500/30 transform translate-y-full group-hover:translate-y-0 transition-transform duration-500"></div>
            </div>

            <div class="relative flex-1 h-full min-h-0">
                <div class="absolute inset-0 border border-white/10 rounded-2xl sm:rounded-3xl transform group-hover:scale-105 transition-transform duration-700"></div>
                <div class="hidden sm:block absolute inset-1 sm:inset-2 border border-purple-500/20 rounded-xl sm:rounded-2xl transform group-hover:scale-110 group-hover:rotate-1 transition-all duration-700"></div>
                <div class="hidden lg:block absolute inset-2 lg:inset-4 border border-cyan-500/20 rounded-lg lg:rounded-xl transform group-hover:scale-[1.15] group-hover:-rotate-1 transition-all duration-700"></div>

                <div class="relative h-full flex flex-col p-4 sm:p-6 lg:p-8 rounded-2xl sm:rounded-3xl border border-white/10 backdrop-blur-xl overflow-hidden min-h-0">
                    <div class="hidden lg:block absolute inset-0 opacity-0 group-hover:opacity-20 transition-opacity duration-500 holo-grid"></div>

                    <div class="flex-1 flex flex-col min-h-0">
                        <div class="relative mb-4 sm:mb-6 overflow-hidden">
                            <h3 class="text-lg sm:text-xl lg:text-2xl font-bold text-white mb-2 transform group-hover:translate-x-1 sm:group-hover:translate-x-2 transition-transform duration-300 line-clamp-2">
                                {project.title}
                            </h3>
                            <div class="relative h-0.5 sm:h-1 overflow-hidden">
                                <div class="absolute inset-0 bg-white/10 rounded-full"></div>
                                <div class="absolute left-0 top-0 h-full bg-gradient-to-r from-purple-500 to-cyan-500 rounded-full transform -translate-x-full group-hover:translate-x-0 transition-transform duration-700 ease-out w-3/5"></div>
                            </div>
                        </div>

                        <p class="relative mb-4 sm:mb-6 lg:mb-8 flex-1 min-h-0 text-slate-300 leading-relaxed text-sm sm:text-base transform group-hover:scale-105 transition-transform duration-300 line-clamp-3 sm:line-clamp-4">
                            {project.description}
                        </p>

                        <div class="relative mb-4 sm:mb-6 lg:mb-8 flex flex-wrap gap-2 sm:gap-3">
                            {project
                                .tech_stack
                                .iter()
                                .enumerate()
                                .map(|(idx, tech)| {
                                    view! {
                                        <div class="relative group/tech">
                                            <div class="hidden sm:block absolute inset-0 border border-purple-500/30 rounded-lg transform group-hover/tech:rotate-3 transition-transform duration-300"></div>
                                            <span
                                                class="relative block px-2 sm:px-3 lg:px-4 py-1 sm:py-1.5 lg:py-2 text-purple-200 text-xs sm:text-sm font-semibold bg-white/5 sm:bg-transparent border sm:border-0 border-white/10 rounded-md sm:rounded-lg"
                                                style=move || {
                                                    if hovered() {
                                                        format!(
                                                            "animation: float-tech 2s ease-in-out infinite alternate; animation-delay: {:.1}s;",
                                                            idx as f64 * 0.1,
                                                        )
                                                    } else {
                                                        "animation: none;".to_string()
                                                    }
                                                }
                                            >
                                                {*tech}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="flex-shrink-0 pt-3 sm:pt-4 lg:pt-5 flex justify-end gap-2 sm:gap-3">
                        <CardLink link=source />
                        <CardLink link=live />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CardLink(link: OutboundLink) -> impl IntoView {
    let hover_border = match link.kind {
        LinkKind::Source => "hover:border-purple-500/50",
        LinkKind::Live => "hover:border-cyan-500/50",
    };
    let icon = match link.kind {
        LinkKind::Source => view! {
            <svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true" class="w-5 h-5 sm:w-6 sm:h-6">
                <path d="M12 .5C5.73.5.5 5.73.5 12c0 5.08 3.29 9.38 7.86 10.9.57.1.78-.25.78-.55 0-.27-.01-1-.02-1.96-3.2.7-3.88-1.38-3.88-1.38-.52-1.33-1.28-1.69-1.28-1.69-1.05-.72.08-.7.08-.7 1.17.08 1.79 1.2 1.79 1.2 1.03 1.77 2.7 1.26 3.36.96.1-.75.4-1.26.72-1.55-2.56-.29-5.25-1.28-5.25-5.69 0-1.26.45-2.29 1.19-3.09-.12-.29-.52-1.47.11-3.06 0 0 .97-.31 3.18 1.18.92-.26 1.9-.39 2.88-.39.98 0 1.96.13 2.88.39 2.21-1.49 3.18-1.18 3.18-1.18.63 1.59.23 2.77.11 3.06.74.8 1.19 1.83 1.19 3.09 0 4.42-2.7 5.39-5.28 5.68.41.36.78 1.08.78 2.18 0 1.57-.01 2.84-.01 3.23 0 .3.2.66.79.55C20.71 21.38 24 17.08 24 12c0-6.27-5.23-11.5-12-11.5z" />
            </svg>
        }
        .into_any(),
        LinkKind::Live => view! {
            <svg
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <path d="M21 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h6" />
                <path d="m21 3-9 9" />
                <path d="M15 3h6v6" />
            </svg>
        }
        .into_any(),
    };

    view! {
        <a
            href=link.href
            target="_blank"
            rel=EXTERNAL_REL
            aria-label=link.aria_label
            class=format!(
                "relative inline-flex items-center justify-center w-8 sm:w-10 lg:w-12 h-8 sm:h-10 lg:h-12 text-white font-bold rounded-lg sm:rounded-xl border border-white/20 transform transition-all duration-300 overflow-hidden group/button-hover hover:scale-105 {hover_border} text-xs sm:text-sm lg:text-base bg-black/20 backdrop-blur-sm",
            )
        >
            <span class="relative z-10 flex items-center justify-center">{icon}</span>
            <div class="absolute inset-0 bg-gradient-to-r from-transparent via-white/10 to-transparent transform -skew-x-12 -translate-x-full group-hover/button-hover:translate-x-full transition-transform duration-700"></div>
        </a>
    }
}
