use serde::{Deserialize, Serialize};

/// Content rendered into the portfolio page.
///
/// Field names follow the generation schema (camelCase). Entry counts and
/// biography length are conventions of the prompt and are not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub biography: String,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub skill_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    /// Empty when the project has no live deployment.
    pub live_url: String,
}

impl Project {
    pub fn has_live_url(&self) -> bool {
        !self.live_url.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub url: &'static str,
}

/// Which tier of the resolution chain produced the rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Cache,
    Generated,
    Fallback,
}
