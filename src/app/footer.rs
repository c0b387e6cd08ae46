use leptos::prelude::*;

use crate::data::PROFILE;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full mt-8" title=format!("Built {}", env!("BUILD_TIME"))>
            <div class="w-full h-px bg-gradient-to-r from-transparent via-white/10 to-transparent" />
            <div class="grid grid-cols-3 items-center py-3 px-3 border-t border-white/10 bg-black/20">
                <div />
                <p class="text-center text-xs sm:text-sm text-gray-400 col-start-2">
                    {format!("© {BUILD_YEAR}. All rights reserved.")}
                </p>
                <div class="justify-self-end">
                    <img
                        src=PROFILE.logo_path
                        alt=format!("{} logo", PROFILE.name)
                        loading="lazy"
                        class="h-8 sm:h-9 w-auto object-contain opacity-90 hover:opacity-100 transition"
                    />
                </div>
            </div>
        </footer>
    }
}
