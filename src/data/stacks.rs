/// One node of a technology tree. Trees are static and acyclic by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackNode {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub children: &'static [StackNode],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechStack {
    pub name: &'static str,
    /// Lookup keys for the heading icon(s); most stacks have one.
    pub icon_keys: &'static [&'static str],
    pub tree: &'static [StackNode],
}

macro_rules! node {
    ($title:literal) => {
        StackNode {
            title: $title,
            subtitle: None,
            children: &[],
        }
    };
    ($title:literal => [$($child:expr),* $(,)?]) => {
        StackNode {
            title: $title,
            subtitle: None,
            children: &[$($child),*],
        }
    };
}

pub static STACKS: &[TechStack] = &[
    TechStack {
        name: "Python",
        icon_keys: &["python"],
        tree: &[
            node!("Primary uses" => [
                node!("Backend APIs (Django, DRF, FastAPI)"),
                node!("Data analysis & ML (pandas, numpy)"),
                node!("Scripting & automation"),
            ]),
            node!("Frameworks & tools" => [node!("Django / DRF"), node!("FastAPI"), node!("Jupyter")]),
            node!("Deploy & infra" => [node!("Docker images")]),
        ],
    },
    TechStack {
        name: "Django",
        icon_keys: &["django"],
        tree: &[
            node!("Role" => [
                node!("Full-featured backend framework"),
                node!("Admin, ORM, Auth out of the box"),
            ]),
            node!("Common pairing" => [
                node!("Django REST Framework (APIs)"),
                node!("PostgreSQL for production"),
                node!("Celery for background tasks"),
            ]),
            node!("When to use" => [
                node!("Fast development with conventions"),
                node!("Data-driven apps, admin dashboards"),
            ]),
        ],
    },
    TechStack {
        name: "Django REST Framework (DRF)",
        icon_keys: &["django"],
        tree: &[
            node!("Purpose" => [node!("Build REST APIs rapidly"), node!("Serializers & viewsets")]),
            node!("Pairings" => [node!("Django + DRF + JWT auth"), node!("React / Mobile clients")]),
        ],
    },
    TechStack {
        name: "JavaScript",
        icon_keys: &["javascript"],
        tree: &[
            node!("Role" => [
                node!("Language of the web: browser + server (Node)"),
                node!("Async/event-driven programming"),
            ]),
            node!("Ecosystem" => [
                node!("Node.js, npm/yarn, tooling (Vite, Webpack)"),
                node!("Transpilers: Babel, TypeScript"),
            ]),
        ],
    },
    TechStack {
        name: "Node.js",
        icon_keys: &["node"],
        tree: &[
            node!("Role" => [node!("Server-side JS runtime"), node!("API servers, realtime sockets")]),
            node!("Common libs" => [node!("Express, Fastify"), node!("Socket.io")]),
        ],
    },
    TechStack {
        name: "React",
        icon_keys: &["react"],
        tree: &[
            node!("UI role" => [
                node!("Component-driven SPAs"),
                node!("Hooks, context, concurrent patterns"),
            ]),
            node!("Testing & build" => [
                node!("Jest, React Testing Library"),
                node!("Vite / CRA / Next.js for SSR"),
            ]),
            node!("Styling & UI libs" => [
                node!("Tailwind CSS"),
                node!("Material UI (MUI)"),
                node!("Bootstrap"),
            ]),
        ],
    },
    TechStack {
        name: "HTML & CSS",
        icon_keys: &["html", "css"],
        tree: &[
            node!("Core" => [node!("Semantic HTML"), node!("Responsive & accessible CSS")]),
            node!("Frameworks" => [
                node!("Tailwind (utility-first)"),
                node!("Bootstrap (component-based)"),
            ]),
        ],
    },
    TechStack {
        name: "Tailwind CSS",
        icon_keys: &["tailwind"],
        tree: &[
            node!("Role" => [node!("Utility-first styling"), node!("Rapid layout & theming")]),
            node!("Pairings" => [
                node!("React + Tailwind"),
                node!("Component libraries (headless UI)"),
            ]),
        ],
    },
    TechStack {
        name: "MUI (Material UI)",
        icon_keys: &["mui"],
        tree: &[
            node!("Role" => [
                node!("Prebuilt React components"),
                node!("Design system & themeable UI"),
            ]),
            node!("Use" => [node!("Dashboards, admin panels, forms")]),
        ],
    },
    TechStack {
        name: "Bootstrap",
        icon_keys: &["bootstrap"],
        tree: &[
            node!("Role" => [
                node!("Component-based CSS framework"),
                node!("Quick responsive layout"),
            ]),
            node!("Use" => [node!("Prototypes, admin UIs, legacy support")]),
        ],
    },
    TechStack {
        name: "Databases",
        icon_keys: &["database"],
        tree: &[
            node!("PostgreSQL" => [
                node!("ACID, production-ready"),
                node!("Advanced features: JSONB, indexing"),
            ]),
            node!("SQLite" => [node!("Lightweight, local dev & prototypes")]),
            node!("Notes" => [node!("Migrations, backups, connection pooling")]),
        ],
    },
    TechStack {
        name: "Docker & DevOps",
        icon_keys: &["docker"],
        tree: &[
            node!("Containers" => [
                node!("Reproducible runtime (images)"),
                node!("Compose for multi-service dev"),
            ]),
            node!("CI/CD & Cloud" => [
                node!("CI pipelines, image registries"),
                node!("Deploy to cloud (Render, DigitalOcean)"),
            ]),
            node!("Versioning" => [node!("Git for source control")]),
        ],
    },
    TechStack {
        name: "Git",
        icon_keys: &["git"],
        tree: &[
            node!("Purpose" => [
                node!("Source control"),
                node!("Branching strategies (GitFlow, trunk)"),
            ]),
            node!("Pairings" => [node!("CI integrations"), node!("Code reviews & PRs")]),
        ],
    },
];
