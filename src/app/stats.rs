use leptos::prelude::*;

use crate::data::Stat;

#[component]
pub fn Stats(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-6 border-t border-b border-white/10">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16 bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                    "Developer Stats"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {stats.iter().map(|stat| view! { <StatCard stat /> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(stat: &'static Stat) -> impl IntoView {
    view! {
        <div class="bg-white/5 backdrop-blur-lg border border-white/10 rounded-3xl p-8 text-center shadow-2xl hover:shadow-purple-500/20 transform hover:scale-105 transition-all duration-500">
            <div class="text-4xl md:text-5xl font-black text-purple-400 mb-4">{stat.number}</div>
            <div class="text-slate-300 font-medium">{stat.label}</div>
        </div>
    }
}
