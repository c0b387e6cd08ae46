//! Static site content. Nothing in here is mutated at runtime; components borrow
//! these records for the lifetime of the page.

mod stacks;

pub use stacks::{StackNode, TechStack, STACKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initial: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub email_uri: &'static str,
    pub phone_display: &'static str,
    pub phone_uri: &'static str,
    pub location: &'static str,
    pub timezone_note: &'static str,
    pub hours_note: &'static str,
    pub resume_path: &'static str,
    pub logo_path: &'static str,
    pub favicon_path: &'static str,
    pub avatar_path: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Henry",
    initial: "H",
    title: "Software Engineer",
    email: "techbyhenry@gmail.com",
    email_uri: "mailto:techbyhenry@gmail.com",
    phone_display: "+234 814 322 0785",
    phone_uri: "tel:+2348143220785",
    location: "Lagos, Nigeria",
    timezone_note: "WAT timezone • Remote work available",
    hours_note: "Available 9 AM - 6 PM WAT",
    resume_path: "/CV.pdf",
    logo_path: "/Logo.png",
    favicon_path: "/favico.png",
    avatar_path: "/contact2.png",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub github: Option<&'static str>,
    pub website: Option<&'static str>,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Events Management App",
        description: "A full-stack web app that lets users create and manage view events. Built with DRF for the backend and React for the frontend.",
        tech_stack: &["React", "Django", "PostgreSQL", "Django Rest Framework"],
        github: Some("https://github.com/Tech-By-Henry/Event"),
        website: Some("https://events-by-henry.vercel.app/"),
    },
    Project {
        title: "Trade Net",
        description: "TradeNet is a no-nonsense arbitrage trading platform built for traders who value speed and clarity.",
        tech_stack: &["Python", "HTML", "CSS", "Javascript", "Celery", "PostgreSQL"],
        github: Some("https://github.com/Tech-By-Henry/Aleen"),
        website: Some("https://tech-by-henry.onrender.com/"),
    },
    Project {
        title: "Verifi",
        description: "Fetches bank account holder details using NubAPI, therefore understanding external API integration.",
        tech_stack: &["React", "MUI", "PostgresQL", "Django Rest Framework"],
        github: Some("https://github.com/Tech-By-Henry/L_API/"),
        website: Some("https://l-api.vercel.app/"),
    },
    Project {
        title: "QR Barcode Generator",
        description: "Generates QR codes and barcodes instantly from user input for quick download.",
        tech_stack: &["HTML", "CSS", "Javascript", "Django", "Python"],
        github: Some("https://github.com/Tech-By-Henry/QR-BARCODE"),
        website: Some("https://qr-barcode.onrender.com"),
    },
    Project {
        title: "Letter Generator App",
        description: "Generates Letters with provided details instantly for quick download.",
        tech_stack: &["React", "Tailwind"],
        github: Some("https://github.com/Tech-By-Henry/letter-generator-app"),
        website: Some("https://letter-generator-app.vercel.app/"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub icon_path: Option<&'static str>,
}

pub static CORE_SKILLS: &[Skill] = &[
    Skill { name: "React", icon: "⚛️", icon_path: Some("/react.svg") },
    Skill { name: "Python", icon: "🐍", icon_path: Some("/python.svg") },
    Skill { name: "Django", icon: "🎯", icon_path: Some("/django.svg") },
    Skill { name: "JS", icon: "🌐", icon_path: Some("/js.svg") },
    Skill { name: "Postgre SQL", icon: "💾", icon_path: Some("/postgre.svg") },
    Skill { name: "Rust", icon: "🎨", icon_path: Some("/rust.svg") },
    Skill { name: "Node", icon: "🟢", icon_path: Some("/node.svg") },
    Skill { name: "CSS", icon: "🎨", icon_path: Some("/css.svg") },
    Skill { name: "Bootstrap", icon: "📦", icon_path: Some("/bootstrap.svg") },
    Skill { name: "Tailwind", icon: "💨", icon_path: Some("/tailwind.svg") },
    Skill { name: "MUI", icon: "🎛️", icon_path: Some("/mui.svg") },
    Skill { name: "Docker", icon: "🐳", icon_path: Some("/docker.svg") },
];

// Revealed only inside the stack explorer
pub static ADDITIONAL_SKILLS: &[Skill] = &[
    Skill { name: "Docker", icon: "🐳", icon_path: Some("/docker.svg") },
    Skill { name: "Git", icon: "🔧", icon_path: Some("/git.svg") },
];

/// Core skills followed by additional skills, in declaration order.
pub fn all_skills() -> impl Iterator<Item = &'static Skill> {
    CORE_SKILLS.iter().chain(ADDITIONAL_SKILLS.iter())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillBlurb {
    pub subtitle: &'static str,
    pub text: &'static str,
}

static DEFAULT_BLURB: SkillBlurb = SkillBlurb {
    subtitle: "Technology",
    text: "Part of a modern web stack.",
};

static SKILL_BLURBS: &[(&str, SkillBlurb)] = &[
    ("react", SkillBlurb {
        subtitle: "UI — component-driven single page apps",
        text: "Build fast, component-based UIs with hooks, context and modern patterns for SPAs, PWAs and component libraries.",
    }),
    ("python", SkillBlurb {
        subtitle: "Backend, scripting, data & ML",
        text: "APIs (Django/DRF, FastAPI), scripting/automation, and data analysis or machine learning with pandas, NumPy and friends.",
    }),
    ("django", SkillBlurb {
        subtitle: "Batteries-included Python web framework",
        text: "Rapid development with ORM, admin, authentication and conventions — ideal for data-driven apps, dashboards and CMS-like projects.",
    }),
    ("js", SkillBlurb {
        subtitle: "Language of the web",
        text: "Client- and server-side language for interactive UI, DOM manipulation, async programming, and the huge tooling ecosystem (npm, Vite, Webpack).",
    }),
    ("postgre sql", SkillBlurb {
        subtitle: "Production relational database",
        text: "ACID-compliant RDBMS with advanced features (JSONB, full-text search, powerful indexes) for reliable production backends.",
    }),
    ("rust", SkillBlurb {
        subtitle: "Safe, fast systems language",
        text: "Memory-safe, performance-focused language for systems and performance-critical components — great when safety and speed matter.",
    }),
    ("node", SkillBlurb {
        subtitle: "Server-side JavaScript runtime",
        text: "Event-driven runtime for building APIs, CLIs and realtime apps; commonly paired with Express, Fastify, and socket libraries.",
    }),
    ("css", SkillBlurb {
        subtitle: "Styling & responsive layouts",
        text: "Responsible for visual presentation — modern techniques include Flexbox, Grid, variables and accessible responsive design.",
    }),
    ("bootstrap", SkillBlurb {
        subtitle: "Component-based CSS toolkit",
        text: "Quick-to-use UI framework with prebuilt responsive components and utilities — great for prototypes and consistent admin UIs.",
    }),
    ("tailwind", SkillBlurb {
        subtitle: "Utility-first CSS",
        text: "Utility-first approach for rapid, consistent styling and theming — works well with component systems and design tokens.",
    }),
    ("mui", SkillBlurb {
        subtitle: "Material Design React components",
        text: "Comprehensive React component library implementing Material Design—useful for dashboards, forms and consistent design systems.",
    }),
    ("docker", SkillBlurb {
        subtitle: "Containerization & reproducible runtimes",
        text: "Package applications into portable containers for reproducible development and deployment; commonly used in CI/CD and multi-service setups.",
    }),
    ("git", SkillBlurb {
        subtitle: "Source control & collaboration",
        text: "Distributed version control for tracking changes, branching strategies and collaboration through PRs and code reviews.",
    }),
];

/// Preview copy for a skill, matched case-insensitively by name.
pub fn skill_blurb(name: &str) -> &'static SkillBlurb {
    let name = name.to_lowercase();
    SKILL_BLURBS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, blurb)| blurb)
        .unwrap_or(&DEFAULT_BLURB)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickNote {
    pub title: &'static str,
    pub body: &'static str,
}

pub static QUICK_NOTE_TAGS: &[&str] = &["APIs", "Full-stack", "Docker", "CI / CD"];

pub static QUICK_NOTES: &[QuickNote] = &[
    QuickNote {
        title: "APIs",
        body: "I design and implement RESTful and GraphQL APIs — usually with Django REST Framework or FastAPI. Focused on clear contracts, stable versioning, and efficient pagination/serialization.",
    },
    QuickNote {
        title: "Full-stack",
        body: "Comfortable building end-to-end features: database schemas and migrations, backend business logic, auth flows, and reactive frontend components (React + state management).",
    },
    QuickNote {
        title: "Docker",
        body: "Containerize apps for consistent development and deployment. Compose for local dev, lean multi-stage Dockerfiles for smaller images in production, and sensible health checks.",
    },
    QuickNote {
        title: "CI / CD",
        body: "Automated pipelines for tests, linting, builds and deployments. Prefer incremental checks, parallel jobs for speed, and deployment strategies that reduce risk (canary/blue-green).",
    },
    QuickNote {
        title: "Observability",
        body: "Instrument services with logs, metrics and traces. Fast feedback loops + clear dashboards make debugging far less painful.",
    },
    QuickNote {
        title: "Security",
        body: "Secure defaults: proper auth/session handling, rate-limiting, input validation, and keeping dependencies up to date. Security should be baked into the workflow.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub static STATS: &[Stat] = &[
    Stat { number: "1½+", label: "Years of Experience" },
    Stat { number: "6+", label: "Projects Completed" },
    Stat { number: "11+", label: "Technologies Mastered" },
    Stat { number: "100%", label: "Client Satisfaction" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub icon_path: Option<&'static str>,
    pub href: Option<&'static str>,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Linkedin",
        label: "LinkedIn",
        icon: "🔗",
        icon_path: Some("/linkedin.svg"),
        href: Some("https://www.linkedin.com/in/techbyhenry-iheonu-798300380/"),
    },
    SocialLink {
        name: "Email",
        label: "Email",
        icon: "📧",
        icon_path: Some("/email.svg"),
        href: Some("mailto:techbyhenry@gmail.com"),
    },
    SocialLink {
        name: "Upwork",
        label: "Upwork",
        icon: "🔧",
        icon_path: Some("/upwork.svg"),
        href: Some("https://www.upwork.com/freelancers/~0105e7000766f5f7d2?mp_source=share"),
    },
    SocialLink {
        name: "X",
        label: "X",
        icon: "🐦",
        icon_path: Some("/x.svg"),
        href: Some("https://x.com/TechByHenry1"),
    },
    SocialLink {
        name: "GitHub",
        label: "GitHub",
        icon: "💻",
        icon_path: Some("/github.svg"),
        href: Some("https://github.com/Tech-By-Henry/"),
    },
    SocialLink {
        name: "Call",
        label: "Call",
        icon: "📞",
        icon_path: Some("/call.svg"),
        href: Some("tel:+2348143220785"),
    },
    SocialLink {
        name: "Follow My Journey",
        label: "Follow My Journey",
        icon: "💼",
        icon_path: Some("/follow_my_journey.svg"),
        href: None,
    },
    SocialLink {
        name: "Location",
        label: "Location",
        icon: "📍",
        icon_path: Some("/location.svg"),
        href: Some("#"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroWord {
    pub text: &'static str,
    pub subtitle: &'static str,
}

pub static HERO_WORDS: &[HeroWord] = &[
    HeroWord { text: "Henry", subtitle: "That's me - your next developer" },
    HeroWord { text: "Problem Solver", subtitle: "I turn complex challenges into elegant solutions" },
    HeroWord { text: "Code Craftsman", subtitle: "Building digital experiences that just work" },
    HeroWord { text: "Full-Stack Dev", subtitle: "Frontend beauty meets backend power" },
    HeroWord { text: "API Builder", subtitle: "Connecting systems with seamless integrations" },
    HeroWord { text: "Henry", subtitle: "Ready to bring your vision to life" },
    HeroWord { text: "UI/UX Focused", subtitle: "Creating interfaces users actually love" },
    HeroWord { text: "Performance Expert", subtitle: "Fast, scalable, and optimized solutions" },
    HeroWord { text: "Team Player", subtitle: "Collaborative mindset with solo execution skills" },
    HeroWord { text: "Tech Innovator", subtitle: "Always learning the latest and greatest" },
    HeroWord { text: "Henry", subtitle: "Your reliable development partner" },
    HeroWord { text: "Bug Crusher", subtitle: "Clean code that stands the test of time" },
    HeroWord { text: "Client Focused", subtitle: "Your success is my priority" },
    HeroWord { text: "Detail Oriented", subtitle: "Pixel-perfect execution every single time" },
    HeroWord { text: "Deadline Driven", subtitle: "On time, every time, without compromise" },
    HeroWord { text: "Henry", subtitle: "The developer you've been searching for" },
    HeroWord { text: "Solution Architect", subtitle: "Designing systems that scale with your business" },
    HeroWord { text: "Quality Obsessed", subtitle: "Excellence isn't optional, it's standard" },
    HeroWord { text: "Future Ready", subtitle: "Building today for tomorrow's challenges" },
    HeroWord { text: "Your Choice", subtitle: "Let's create something amazing together" },
];

pub static ROLES: &[&str] = &[
    "Full-Stack Developer",
    "Backend Architect",
    "API Specialist",
    "Problem Solver",
    "Code Craftsman",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyPhase {
    pub phase: &'static str,
    pub period: &'static str,
    pub milestone: &'static str,
    pub details: &'static str,
}

pub static JOURNEY: &[JourneyPhase] = &[
    JourneyPhase {
        phase: "Foundation",
        period: "2021-2022",
        milestone: "Learning Core Technologies",
        details: "Mastered JavaScript, React, and fundamental programming concepts",
    },
    JourneyPhase {
        phase: "Growth",
        period: "2022-2023",
        milestone: "First Professional Projects",
        details: "Built real-world applications and collaborated with development teams",
    },
    JourneyPhase {
        phase: "Expertise",
        period: "2023-2024",
        milestone: "Full-Stack Mastery",
        details: "Architected complete solutions from database to deployment",
    },
    JourneyPhase {
        phase: "Innovation",
        period: "2024-Present",
        milestone: "Leading Development",
        details: "Creating scalable systems and mentoring other developers",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expertise {
    pub category: &'static str,
    pub icon: &'static str,
    pub techs: &'static [&'static str],
    pub description: &'static str,
}

pub static EXPERTISE: &[Expertise] = &[
    Expertise {
        category: "Frontend",
        icon: "🎨",
        techs: &["React", "MUI", "HTML & CSS", "Tailwind CSS"],
        description: "Creating responsive, interactive user interfaces",
    },
    Expertise {
        category: "Backend",
        icon: "⚡",
        techs: &["Node.js", "Python", "Django", "Flask"],
        description: "Building scalable server-side architectures",
    },
    Expertise {
        category: "Database",
        icon: "🗄️",
        techs: &["MongoDB", "PostgreSQL", "Redis", "Sqlite"],
        description: "Designing efficient data storage solutions",
    },
    Expertise {
        category: "DevOps",
        icon: "🚀",
        techs: &["Docker", "Render", "Vercel", "GitHub Actions"],
        description: "Streamlining deployment and infrastructure",
    },
];

pub static PRINCIPLES: &[&str] = &[
    "Clean, maintainable code",
    "User-centered design",
    "Performance optimization",
    "Continuous learning",
    "Collaborative teamwork",
];

pub static EXPLORING: &[&str] = &[
    "AI/ML Integration",
    "Cloud Architecture",
    "Microservices",
    "Performance Optimization",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_sets_are_partitioned_by_visibility() {
        assert_eq!(CORE_SKILLS.len(), 12);
        assert!(ADDITIONAL_SKILLS.iter().any(|s| s.name == "Git"));
        assert_eq!(all_skills().count(), CORE_SKILLS.len() + ADDITIONAL_SKILLS.len());
        assert_eq!(all_skills().next().map(|s| s.name), Some("React"));
    }

    #[test]
    fn test_skill_blurb_lookup() {
        assert_eq!(skill_blurb("React").subtitle, "UI — component-driven single page apps");
        assert_eq!(skill_blurb("MUI").subtitle, "Material Design React components");
        assert_eq!(skill_blurb("postgre sql").subtitle, "Production relational database");

        // Every core skill has its own copy
        for skill in CORE_SKILLS {
            assert_ne!(skill_blurb(skill.name), &DEFAULT_BLURB, "{}", skill.name);
        }

        assert_eq!(skill_blurb("Cobol"), &DEFAULT_BLURB);
    }

    #[test]
    fn test_static_lists_are_populated() {
        assert_eq!(PROJECTS.len(), 5);
        assert_eq!(STATS.len(), 4);
        assert_eq!(HERO_WORDS.len(), 20);
        assert_eq!(JOURNEY.len(), 4);
        assert!(PROJECTS.iter().all(|p| !p.tech_stack.is_empty()));
    }
}
