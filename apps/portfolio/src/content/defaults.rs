//! Compiled-in content: the fallback rendered when neither the cache nor the
//! generator can supply content, and the certification directory.

use crate::content::models::{Certification, PortfolioContent, Project, Skill};

const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "AWS Certified Developer - Associate",
        issuer: "Amazon Web Services",
        url: "https://www.credly.com/badges/aws-developer-associate",
    },
    Certification {
        name: "Certified Kubernetes Application Developer",
        issuer: "The Linux Foundation",
        url: "https://www.credly.com/badges/ckad",
    },
    Certification {
        name: "Professional Cloud Developer",
        issuer: "Google Cloud",
        url: "https://www.credential.net/google-cloud-professional-developer",
    },
    Certification {
        name: "Responsive Web Design",
        issuer: "freeCodeCamp",
        url: "https://www.freecodecamp.org/certification/responsive-web-design",
    },
];

pub fn certifications() -> &'static [Certification] {
    CERTIFICATIONS
}

fn skill(name: &str, description: &str) -> Skill {
    Skill {
        skill_name: name.to_string(),
        description: description.to_string(),
    }
}

fn project(name: &str, description: &str, technologies: &[&str], github: &str, live: &str) -> Project {
    Project {
        project_name: name.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        github_url: github.to_string(),
        live_url: live.to_string(),
    }
}

/// Content shown when resolution falls through every other source.
pub fn default_content() -> PortfolioContent {
    PortfolioContent {
        biography: "I am a software engineer who enjoys building dependable backend \
            services and the tools that make them pleasant to operate. Most of my recent \
            work is in Rust: HTTP APIs, data pipelines and command-line utilities that \
            other engineers rely on every day. I care about clear interfaces, honest error \
            messages and tests that describe behaviour rather than implementation. Before \
            Rust I spent several years writing Python and TypeScript, which taught me to \
            value fast feedback loops and readable code. Outside of work I contribute to \
            open-source projects, write about what I learn, and mentor people who are \
            starting out in systems programming."
            .to_string(),
        skills: vec![
            skill(
                "Rust",
                "Async services with Tokio and Axum, CLI tools, and careful use of the type system to rule out invalid states.",
            ),
            skill(
                "Backend APIs",
                "Designing REST and JSON APIs with clear error contracts, versioning and observability.",
            ),
            skill(
                "Databases",
                "PostgreSQL schema design, query tuning and Redis for caching and lightweight queues.",
            ),
            skill(
                "Cloud & DevOps",
                "Containerised deployments on Kubernetes, CI pipelines and infrastructure as code.",
            ),
            skill(
                "Web Frontend",
                "Accessible, responsive interfaces with modern HTML, CSS and TypeScript.",
            ),
            skill(
                "Testing",
                "Unit and integration suites that run fast, fail clearly and cover the edge cases that matter.",
            ),
        ],
        projects: vec![
            project(
                "Ledgerline",
                "A double-entry bookkeeping API with immutable audit trails and balance snapshots.",
                &["Rust", "Axum", "PostgreSQL", "Docker"],
                "https://github.com/ada-portfolio/ledgerline",
                "https://ledgerline.dev",
            ),
            project(
                "Tidepool",
                "A terminal dashboard for tailing, filtering and highlighting structured JSON logs.",
                &["Rust", "Ratatui", "Serde"],
                "https://github.com/ada-portfolio/tidepool",
                "",
            ),
            project(
                "Quillmark",
                "A static site generator with incremental rebuilds and live preview.",
                &["Rust", "Markdown", "WebSockets", "HTML/CSS"],
                "https://github.com/ada-portfolio/quillmark",
                "https://quillmark.ada.dev",
            ),
        ],
    }
}
