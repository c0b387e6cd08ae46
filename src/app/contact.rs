use leptos::prelude::*;

use super::icon::IconImg;
use crate::data::{PROFILE, SOCIAL_LINKS};
use crate::state::projects::EXTERNAL_REL;
use crate::state::social::{
    resolve_channels, resolve_email_href, ChannelKey, ChannelOverrides, SocialChannel, FOLLOW_LINKS,
};
use crate::state::stack::encode_asset_path;

#[derive(Clone, Copy)]
enum IconSize {
    Small,
    Medium,
    Large,
}

impl IconSize {
    fn image_style(self) -> &'static str {
        match self {
            IconSize::Small => "display: inline-block; width: 18px; height: 18px; object-fit: contain;",
            IconSize::Medium => "display: inline-block; width: 24px; height: 24px; object-fit: contain;",
            IconSize::Large => "display: inline-block; width: 28px; height: 28px; object-fit: contain;",
        }
    }

    fn glyph_style(self) -> &'static str {
        match self {
            IconSize::Small => "display: inline-block; width: 18px; height: 18px; line-height: 18px; text-align: center; font-size: 16px;",
            IconSize::Medium => "display: inline-block; width: 24px; height: 24px; line-height: 24px; text-align: center; font-size: 21px;",
            IconSize::Large => "display: inline-block; width: 28px; height: 28px; line-height: 28px; text-align: center; font-size: 25px;",
        }
    }
}

fn channel_icon(channel: &SocialChannel, size: IconSize) -> AnyView {
    match &channel.icon_path {
        Some(path) => view! {
            <IconImg
                src=encode_asset_path(path)
                alt=channel.label.clone()
                fallback=channel.icon.clone()
                style=size.image_style()
                fallback_style=size.glyph_style()
            />
        }
        .into_any(),
        None => view! {
            <span aria-hidden="true" style=size.glyph_style()>
                {channel.icon.clone()}
            </span>
        }
        .into_any(),
    }
}

/// Contact cards and the closing call to action.
///
/// `links` overrides individual channel hrefs and beats both the built-in defaults and
/// the static social records.
#[component]
pub fn Contact(
    #[prop(optional)] links: ChannelOverrides,
    #[prop(optional, into)] email: Option<String>,
) -> impl IntoView {
    let channels = resolve_channels(SOCIAL_LINKS, &links);
    let email_href = resolve_email_href(&channels, &links, email.as_deref());
    let email = email.unwrap_or_else(|| PROFILE.email.to_string());
    let call_href = channels[ChannelKey::Call].href.clone();

    // Card children are move closures, so each one gets its own copy.
    let card_email_href = email_href.clone();
    let card_call_href = call_href.clone();

    let follow = FOLLOW_LINKS
        .iter()
        .map(|(key, desc)| {
            let item = &channels[*key];
            view! {
                <a
                    href=item.href.clone()
                    target="_blank"
                    rel=EXTERNAL_REL
                    class="flex items-center gap-3 p-2 sm:p-3 rounded-lg bg-white/3 border border-white/6 hover:translate-y-[-2px] transition-transform text-sm w-full"
                    aria-label=format!("Open {}", item.label)
                >
                    <div class="flex-shrink-0">{channel_icon(item, IconSize::Small)}</div>
                    <div class="min-w-0 text-left">
                        <div class="text-white font-medium whitespace-normal">{item.label.clone()}</div>
                        <div class="text-slate-400 text-xs sm:whitespace-normal">{*desc}</div>
                    </div>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen px-4 sm:px-6 lg:px-8 py-12 sm:py-16 md:py-20">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-8 sm:mb-12">
                    <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold mb-3 bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                        "Let's Work Together"
                    </h2>
                    <p class="text-base sm:text-lg text-slate-400 max-w-2xl mx-auto">
                        "Ready to bring your ideas to life? Drop me a line and let's create something amazing."
                    </p>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 sm:gap-6 mb-10 sm:mb-12">
                    <ContactCard
                        channel=channels[ChannelKey::Email].clone()
                        heading="Email Me"
                        accent="text-purple-300"
                        aria="Email contact card"
                    >
                        <a
                            href=card_email_href
                            class="block text-white text-sm mt-1 hover:text-purple-300 whitespace-normal break-words"
                            aria-label="Send email"
                        >
                            {email.clone()}
                        </a>
                        <div class="text-slate-400 text-xs mt-2">"Best for detailed project discussions"</div>
                    </ContactCard>

                    <ContactCard
                        channel=channels[ChannelKey::Call].clone()
                        heading="Call Me"
                        accent="text-cyan-300"
                        aria="Phone contact card"
                    >
                        <a
                            href=card_call_href
                            class="block text-white text-sm mt-1 hover:text-cyan-300 whitespace-normal"
                            aria-label="Call phone number"
                        >
                            {PROFILE.phone_display}
                        </a>
                        <div class="text-slate-400 text-xs mt-2">"Quick chats and urgent matters"</div>
                    </ContactCard>

                    <ContactCard
                        channel=channels[ChannelKey::Location].clone()
                        heading="Location"
                        accent="text-green-300"
                        aria="Location card"
                    >
                        <p class="text-white text-sm mt-1 leading-relaxed whitespace-normal">{PROFILE.location}</p>
                        <div class="text-slate-400 text-xs mt-2 leading-relaxed">{PROFILE.timezone_note}</div>
                        <div class="hidden sm:block mt-4 pt-3 border-t border-white/10">
                            <div class="flex items-center gap-2 text-slate-400 text-xs mb-2">
                                <span>"🌍"</span>
                                <span>"Global collaboration welcome"</span>
                            </div>
                            <div class="flex items-center gap-2 text-slate-400 text-xs">
                                <span>"⏰"</span>
                                <span>{PROFILE.hours_note}</span>
                            </div>
                        </div>
                    </ContactCard>

                    <ContactCard
                        channel=channels[ChannelKey::Follow].clone()
                        heading="Follow My Journey"
                        accent="text-yellow-300"
                        aria="Follow card"
                    >
                        <p class="text-slate-400 text-xs md:text-sm mt-2 mb-3">
                            "Catch updates, open-source work, and short project notes."
                        </p>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-2 sm:gap-3">{follow}</div>
                    </ContactCard>
                </div>

                <div class="text-center mt-6">
                    <div class="bg-gradient-to-r from-purple-500/10 to-cyan-500/10 border border-white/10 rounded-3xl p-6 md:p-10 backdrop-blur-lg">
                        <h3 class="text-xl sm:text-2xl md:text-3xl font-bold text-white mb-3">"Ready to Start Your Project?"</h3>
                        <p class="text-sm sm:text-base text-slate-300 mb-6 max-w-2xl mx-auto whitespace-normal">
                            "Whether you need a simple website or a complex application, I'm here to help turn your vision into reality."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-3 sm:gap-4 justify-center">
                            <a
                                href=email_href
                                class="w-full sm:w-auto px-6 py-3 bg-gradient-to-r from-purple-500 to-blue-500 rounded-2xl font-semibold text-white hover:scale-105 transform transition-all duration-200 text-center"
                                aria-label="Send email CTA"
                            >
                                "Send Email"
                            </a>
                            <a
                                href=call_href
                                class="w-full sm:w-auto px-6 py-3 bg-white/10 border border-white/20 rounded-2xl font-semibold text-white hover:bg-white/20 transform transition-all duration-200 text-center"
                                aria-label="Call now CTA"
                            >
                                "Call Now"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Icon and heading stacked on small screens, side by side from `md` up.
#[component]
fn ContactCard(
    channel: SocialChannel,
    heading: &'static str,
    accent: &'static str,
    aria: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="bg-white/5 backdrop-blur-lg border border-white/10 rounded-3xl p-4 md:p-6 shadow-md hover:bg-white/10 transition-all duration-300"
            role="group"
            aria-label=aria
        >
            <div class="md:hidden flex items-center gap-3 mb-4">
                {channel_icon(&channel, IconSize::Medium)}
                <h3 class=format!("text-base font-semibold {accent}")>{heading}</h3>
            </div>
            <div class="hidden md:flex items-center gap-6">
                <div class="flex-shrink-0 w-14 h-14 rounded-lg flex items-center justify-center">
                    {channel_icon(&channel, IconSize::Large)}
                </div>
                <div class="flex-1 min-w-0">
                    <h3 class=format!("text-lg font-semibold {accent}")>{heading}</h3>
                </div>
            </div>
            <div class="md:ml-20">{children()}</div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(view: impl FnOnce() -> AnyView) -> String {
        Owner::new().with(|| view().to_html())
    }

    #[test]
    fn test_renders_every_card_and_cta() {
        let html = render(|| view! { <Contact /> }.into_any());
        assert!(html.contains("Email Me"));
        assert!(html.contains("Call Me"));
        assert!(html.contains("Location"));
        assert!(html.contains("Follow My Journey"));
        assert_eq!(html.matches(PROFILE.email_uri).count(), 2);
        assert_eq!(html.matches(PROFILE.phone_uri).count(), 2);
    }

    #[test]
    fn test_follow_links_open_safely() {
        let html = render(|| view! { <Contact /> }.into_any());
        assert_eq!(html.matches(EXTERNAL_REL).count(), FOLLOW_LINKS.len());
        assert!(!html.contains("rel=\"noreferrer\""));
    }

    #[test]
    fn test_email_prop_reaches_card_and_cta() {
        let html = render(|| view! { <Contact email="hi@example.com" /> }.into_any());
        assert_eq!(html.matches("mailto:hi@example.com").count(), 2);
        assert!(!html.contains(PROFILE.email_uri));
    }
}
