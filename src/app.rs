mod about;
mod background;
mod contact;
mod footer;
mod hero;
mod icon;
mod navbar;
mod projects;
mod skills;
mod stack_explorer;
mod stats;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::data::{PROFILE, PROJECTS, STATS};
use crate::state::nav::Section;
use crate::state::scroll_lock::{DocumentBody, ScrollLock, ScrollLockGuard};

use about::About;
use background::Background;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use stats::Stats;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/png" href=PROFILE.favicon_path />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(PageLock::new(DocumentBody));

    view! {
        <Title formatter=|title| format!("{} | {title}", PROFILE.name) />
        <Meta
            name="description"
            content=format!("{} - {} based in {}", PROFILE.name, PROFILE.title, PROFILE.location)
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The page-wide scroll lock shared by every overlay.
pub type PageLock = ScrollLock<DocumentBody>;

/// Anchors for each top-level section, observed by the navbar.
#[derive(Clone, Copy)]
pub struct SectionRefs([NodeRef<html::Section>; 6]);

impl SectionRefs {
    fn new() -> Self {
        Self(std::array::from_fn(|_| NodeRef::new()))
    }

    pub fn get(&self, section: Section) -> NodeRef<html::Section> {
        self.0[section as usize]
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    let refs = SectionRefs::new();
    provide_context(refs);

    let divider = || {
        view! { <div class="w-full h-px bg-gradient-to-r from-transparent via-white/10 to-transparent" /> }
    };

    view! {
        <Title text=PROFILE.title />
        <div class="min-h-screen bg-black text-white overflow-x-hidden relative text-base md:text-lg lg:text-lg">
            <Background />
            <div class="relative z-10">
                <Navbar />
                <section id=Section::Home.id() node_ref=refs.get(Section::Home)>
                    <Hero />
                </section>
                {divider()}
                <section id=Section::About.id() node_ref=refs.get(Section::About)>
                    <About />
                </section>
                {divider()}
                <section id=Section::Projects.id() node_ref=refs.get(Section::Projects)>
                    <Projects projects=PROJECTS />
                </section>
                {divider()}
                <section id=Section::Skills.id() node_ref=refs.get(Section::Skills)>
                    <Skills />
                </section>
                {divider()}
                <section id=Section::Stats.id() node_ref=refs.get(Section::Stats)>
                    <Stats stats=STATS />
                </section>
                {divider()}
                <section id=Section::Contact.id() node_ref=refs.get(Section::Contact)>
                    <Contact />
                </section>
                <Footer />
            </div>
        </div>
    }
}

/// Smooth-scroll the given section to the top of the viewport.
pub fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no element for section {section}");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Hold a share of the page scroll lock whenever `open` is true.
///
/// The guard lives in a stored value owned by the calling component, so unmounting
/// drops it and releases the lock even if `open` never goes false.
pub fn lock_scroll_while(open: impl Fn() -> bool + 'static) {
    let lock = expect_context::<PageLock>();
    let guard = StoredValue::new(None::<ScrollLockGuard<DocumentBody>>);

    Effect::new(move |_| {
        if !open() {
            guard.set_value(None);
            return;
        }
        if guard.with_value(Option::is_some) {
            return;
        }
        match lock.acquire() {
            Ok(g) => guard.set_value(Some(g)),
            Err(e) => log::warn!("couldn't lock page scroll: {e}"),
        }
    });
}
