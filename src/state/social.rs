//! Resolution of contact channels from three layers: built-in defaults, the static
//! [`SocialLink`](crate::data::SocialLink) records, and explicit href overrides handed to
//! the contact section. Later layers win.

use std::collections::BTreeMap;
use std::ops::Index;

use crate::data::{SocialLink, PROFILE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChannelKey {
    Linkedin,
    Upwork,
    Github,
    Twitter,
    Email,
    Call,
    Follow,
    Location,
}

impl ChannelKey {
    pub const ALL: [ChannelKey; 8] = [
        ChannelKey::Linkedin,
        ChannelKey::Upwork,
        ChannelKey::Github,
        ChannelKey::Twitter,
        ChannelKey::Email,
        ChannelKey::Call,
        ChannelKey::Follow,
        ChannelKey::Location,
    ];

    /// Fuzzy match of a free-form label against the known channels. Checked in a fixed
    /// order so "Follow my GitHub" resolves to GitHub.
    pub fn from_label(raw: &str) -> Option<Self> {
        let label = raw.trim().to_lowercase();
        if label.is_empty() {
            return None;
        }
        let key = if label.contains("linkedin") {
            ChannelKey::Linkedin
        } else if label.contains("upwork") {
            ChannelKey::Upwork
        } else if label.contains("github") {
            ChannelKey::Github
        } else if label.contains("twitter") || label == "x" {
            ChannelKey::Twitter
        } else if label.contains("email") {
            ChannelKey::Email
        } else if label.contains("call") || label.contains("phone") {
            ChannelKey::Call
        } else if label.contains("follow") || label.contains("journey") {
            ChannelKey::Follow
        } else if label.contains("location") {
            ChannelKey::Location
        } else {
            return None;
        };
        Some(key)
    }

    fn default_channel(self) -> SocialChannel {
        let (href, label, icon_path, icon) = match self {
            ChannelKey::Linkedin => ("#", "LinkedIn", "/linkedin.svg", "💼"),
            ChannelKey::Upwork => (
                "https://www.upwork.com/freelancers/~0105e7000766f5f7d2?mp_source=share",
                "Upwork",
                "/upwork.svg",
                "🔧",
            ),
            ChannelKey::Github => ("#", "GitHub", "/github.svg", "💻"),
            ChannelKey::Twitter => ("#", "Twitter", "/x.svg", "🐦"),
            ChannelKey::Email => (PROFILE.email_uri, "Email", "/email.svg", "📧"),
            ChannelKey::Call => (PROFILE.phone_uri, "Call", "/call.svg", "📞"),
            ChannelKey::Follow => ("#", "Follow My Journey", "/follow_my_journey.svg", "💼"),
            ChannelKey::Location => ("#", "Location", "/location.svg", "📍"),
        };
        SocialChannel {
            href: href.into(),
            label: label.into(),
            icon_path: Some(icon_path.into()),
            icon: icon.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialChannel {
    pub href: String,
    pub label: String,
    pub icon_path: Option<String>,
    /// Emoji shown when the image is missing or fails to load.
    pub icon: String,
}

impl SocialChannel {
    fn merge_record(&mut self, record: &SocialLink) {
        if let Some(href) = record.href {
            self.href = href.into();
        }
        if let Some(path) = record.icon_path {
            self.icon_path = Some(path.into());
        }
        if !record.icon.is_empty() {
            self.icon = record.icon.into();
        }
        if !record.label.is_empty() {
            self.label = record.label.into();
        }
    }
}

/// Explicit href overrides, keyed by channel.
pub type ChannelOverrides = BTreeMap<ChannelKey, String>;

/// One resolved record per [`ChannelKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channels([SocialChannel; 8]);

impl Index<ChannelKey> for Channels {
    type Output = SocialChannel;

    fn index(&self, key: ChannelKey) -> &SocialChannel {
        &self.0[key as usize]
    }
}

pub fn resolve_channels(records: &[SocialLink], overrides: &ChannelOverrides) -> Channels {
    let mut channels = Channels(ChannelKey::ALL.map(ChannelKey::default_channel));

    for record in records {
        let raw = if record.label.is_empty() {
            record.name
        } else {
            record.label
        };
        match ChannelKey::from_label(raw) {
            Some(key) => channels.0[key as usize].merge_record(record),
            None => log::debug!("ignoring social link with unknown label {raw:?}"),
        }
    }

    for (key, href) in overrides {
        if !href.is_empty() {
            channels.0[*key as usize].href = href.clone();
        }
    }

    channels
}

/// Where the email card and CTA point. An explicit `address` beats the resolved
/// email channel unless that channel was itself overridden.
pub fn resolve_email_href(
    channels: &Channels,
    overrides: &ChannelOverrides,
    address: Option<&str>,
) -> String {
    match address {
        Some(addr) if !overrides.contains_key(&ChannelKey::Email) => format!("mailto:{addr}"),
        _ => channels[ChannelKey::Email].href.clone(),
    }
}

/// Channels listed in the "follow my journey" card, with their one-line descriptions.
pub const FOLLOW_LINKS: [(ChannelKey, &str); 4] = [
    (ChannelKey::Linkedin, "Professional updates"),
    (ChannelKey::Upwork, "Freelance gigs"),
    (ChannelKey::Github, "Open-source"),
    (ChannelKey::Twitter, "Micro-updates"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SOCIAL_LINKS;

    fn record(label: &'static str, href: Option<&'static str>) -> SocialLink {
        SocialLink {
            name: label,
            label,
            icon: "",
            icon_path: None,
            href,
        }
    }

    #[test]
    fn test_label_matching() {
        assert_eq!(ChannelKey::from_label("LinkedIn"), Some(ChannelKey::Linkedin));
        assert_eq!(ChannelKey::from_label("X"), Some(ChannelKey::Twitter));
        assert_eq!(ChannelKey::from_label("Xing"), None);
        assert_eq!(ChannelKey::from_label("Phone"), Some(ChannelKey::Call));
        assert_eq!(ChannelKey::from_label("Follow My Journey"), Some(ChannelKey::Follow));
        assert_eq!(ChannelKey::from_label("Follow my GitHub"), Some(ChannelKey::Github));
        assert_eq!(ChannelKey::from_label("  "), None);
    }

    #[test]
    fn test_defaults_without_sources() {
        let channels = resolve_channels(&[], &ChannelOverrides::new());
        assert_eq!(channels[ChannelKey::Github].href, "#");
        assert_eq!(channels[ChannelKey::Email].href, "mailto:techbyhenry@gmail.com");
        assert_eq!(channels[ChannelKey::Twitter].label, "Twitter");
    }

    #[test]
    fn test_prop_override_wins() {
        let records = [record("GitHub", Some("https://a"))];
        let mut overrides = ChannelOverrides::new();
        overrides.insert(ChannelKey::Github, "https://b".into());

        let channels = resolve_channels(&records, &overrides);
        assert_eq!(channels[ChannelKey::Github].href, "https://b");

        let channels = resolve_channels(&records, &ChannelOverrides::new());
        assert_eq!(channels[ChannelKey::Github].href, "https://a");
    }

    #[test]
    fn test_partial_records_keep_defaults() {
        // A record without href only changes the fields it carries
        let records = [record("Follow My Journey", None)];
        let channels = resolve_channels(&records, &ChannelOverrides::new());
        let follow = &channels[ChannelKey::Follow];
        assert_eq!(follow.href, "#");
        assert_eq!(follow.icon, "💼");
        assert_eq!(follow.icon_path.as_deref(), Some("/follow_my_journey.svg"));
    }

    #[test]
    fn test_static_records_resolve() {
        let channels = resolve_channels(SOCIAL_LINKS, &ChannelOverrides::new());
        assert_eq!(channels[ChannelKey::Twitter].href, "https://x.com/TechByHenry1");
        assert_eq!(channels[ChannelKey::Twitter].label, "X");
        assert!(channels[ChannelKey::Linkedin].href.starts_with("https://www.linkedin.com/"));
        assert_eq!(channels[ChannelKey::Location].href, "#");
    }

    #[test]
    fn test_email_address_without_override() {
        let overrides = ChannelOverrides::new();
        let channels = resolve_channels(&[], &overrides);
        assert_eq!(
            resolve_email_href(&channels, &overrides, Some("hi@example.com")),
            "mailto:hi@example.com"
        );
    }

    #[test]
    fn test_email_override_beats_address() {
        let mut overrides = ChannelOverrides::new();
        overrides.insert(ChannelKey::Email, "mailto:links@example.com".into());
        let channels = resolve_channels(&[], &overrides);
        assert_eq!(
            resolve_email_href(&channels, &overrides, Some("hi@example.com")),
            "mailto:links@example.com"
        );
    }

    #[test]
    fn test_email_falls_back_to_profile() {
        let overrides = ChannelOverrides::new();
        let channels = resolve_channels(&[], &overrides);
        assert_eq!(resolve_email_href(&channels, &overrides, None), PROFILE.email_uri);
    }
}
