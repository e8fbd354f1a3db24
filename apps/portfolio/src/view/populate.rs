//! View Populator — writes resolved content into the page containers.
//!
//! Pure document mutation: no network or storage access. All content is
//! inserted as text nodes, never as markup.

use crate::content::models::{Certification, PortfolioContent, Project, Skill};
use crate::view::dom::{Document, Element};

pub const ABOUT_TEXT_ID: &str = "about-text";
pub const SKILLS_CONTAINER_ID: &str = "skills-container";
pub const PROJECTS_CONTAINER_ID: &str = "projects-container";
pub const CERTIFICATIONS_LIST_ID: &str = "certifications-list";

/// Populates biography, skills and projects.
///
/// No-op unless all three containers are present in `doc`.
pub fn populate(doc: &mut Document, content: &PortfolioContent) {
    if ![ABOUT_TEXT_ID, SKILLS_CONTAINER_ID, PROJECTS_CONTAINER_ID]
        .iter()
        .all(|id| doc.contains(id))
    {
        return;
    }

    if let Some(about) = doc.get_element_by_id_mut(ABOUT_TEXT_ID) {
        about.set_text_content(&content.biography);
    }

    if let Some(skills) = doc.get_element_by_id_mut(SKILLS_CONTAINER_ID) {
        skills.set_inner_html("");
        for skill in &content.skills {
            skills.append_child(skill_card(skill));
        }
    }

    if let Some(projects) = doc.get_element_by_id_mut(PROJECTS_CONTAINER_ID) {
        projects.set_inner_html("");
        for project in &content.projects {
            projects.append_child(project_card(project));
        }
    }
}

fn skill_card(skill: &Skill) -> Element {
    Element::new("div")
        .with_class("skill-card")
        .with_child(Element::new("h3").with_text(&skill.skill_name))
        .with_child(Element::new("p").with_text(&skill.description))
}

fn project_card(project: &Project) -> Element {
    let tags = project
        .technologies
        .iter()
        .fold(Element::new("div").with_class("tech-tags"), |tags, tech| {
            tags.with_child(Element::new("span").with_class("tech-tag").with_text(tech))
        });

    let mut links = Element::new("div").with_class("project-links").with_child(
        external_link(&project.github_url, "GitHub")
            .with_class("project-link")
            .with_class("github-link"),
    );
    if project.has_live_url() {
        links.append_child(
            external_link(&project.live_url, "Live Demo")
                .with_class("project-link")
                .with_class("live-link"),
        );
    }

    Element::new("div")
        .with_class("project-card")
        .with_child(Element::new("h3").with_text(&project.project_name))
        .with_child(Element::new("p").with_text(&project.description))
        .with_child(tags)
        .with_child(links)
}

fn external_link(href: &str, label: &str) -> Element {
    Element::new("a")
        .with_attr("href", href)
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener noreferrer")
        .with_text(label)
}

/// Fills the certifications list. No-op if the list is absent.
pub fn populate_certifications(doc: &mut Document, certifications: &[Certification]) {
    let Some(list) = doc.get_element_by_id_mut(CERTIFICATIONS_LIST_ID) else {
        return;
    };
    list.set_inner_html("");
    for cert in certifications {
        list.append_child(
            Element::new("li").with_class("certification").with_child(
                external_link(cert.url, &format!("{}, {}", cert.name, cert.issuer)),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn containers() -> Document {
        Document::new(
            Element::new("html").with_child(
                Element::new("body")
                    .with_child(Element::new("p").with_id(ABOUT_TEXT_ID))
                    .with_child(
                        Element::new("div")
                            .with_id(SKILLS_CONTAINER_ID)
                            .with_text("Loading skills..."),
                    )
                    .with_child(Element::new("div").with_id(PROJECTS_CONTAINER_ID))
                    .with_child(Element::new("ul").with_id(CERTIFICATIONS_LIST_ID)),
            ),
        )
    }

    fn project(live_url: &str) -> Project {
        Project {
            project_name: "Tidepool".to_string(),
            description: "Log dashboard".to_string(),
            technologies: vec!["Rust".to_string(), "Ratatui".to_string(), "Serde".to_string()],
            github_url: "https://github.com/ada/tidepool".to_string(),
            live_url: live_url.to_string(),
        }
    }

    fn content_with(projects: Vec<Project>) -> PortfolioContent {
        PortfolioContent {
            biography: "Hello <b>world</b>".to_string(),
            skills: vec![
                Skill {
                    skill_name: "Rust".to_string(),
                    description: "Systems".to_string(),
                },
                Skill {
                    skill_name: "SQL".to_string(),
                    description: "Queries".to_string(),
                },
            ],
            projects,
        }
    }

    fn links_of(doc: &Document) -> Vec<&Element> {
        doc.get_element_by_id(PROJECTS_CONTAINER_ID)
            .unwrap()
            .find_by_class("project-link")
    }

    #[test]
    fn test_biography_is_plain_text() {
        let mut doc = containers();
        populate(&mut doc, &content_with(vec![]));
        let about = doc.get_element_by_id(ABOUT_TEXT_ID).unwrap();
        assert_eq!(about.text_content(), "Hello <b>world</b>");
        assert!(doc.to_html().contains("Hello &lt;b&gt;world&lt;/b&gt;"));
    }

    #[test]
    fn test_skills_container_is_rebuilt() {
        let mut doc = containers();
        populate(&mut doc, &content_with(vec![]));
        let skills = doc.get_element_by_id(SKILLS_CONTAINER_ID).unwrap();
        let cards = skills.find_by_class("skill-card");
        assert_eq!(cards.len(), 2);
        assert_eq!(skills.child_elements().count(), 2);
        assert!(!skills.text_content().contains("Loading"));
        let first: Vec<&Element> = cards[0].child_elements().collect();
        assert_eq!(first[0].tag(), "h3");
        assert_eq!(first[0].text_content(), "Rust");
        assert_eq!(first[1].text_content(), "Systems");
    }

    #[test]
    fn test_empty_live_url_renders_no_secondary_link() {
        let mut doc = containers();
        populate(&mut doc, &content_with(vec![project("")]));
        let links = links_of(&doc);
        assert_eq!(links.len(), 1);
        assert!(links[0].has_class("github-link"));
        assert_eq!(links[0].attr("href"), Some("https://github.com/ada/tidepool"));
    }

    #[test]
    fn test_non_empty_live_url_renders_exactly_one_secondary_link() {
        let mut doc = containers();
        populate(&mut doc, &content_with(vec![project("https://tidepool.dev")]));
        let live: Vec<&Element> = links_of(&doc)
            .into_iter()
            .filter(|l| l.has_class("live-link"))
            .collect();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].attr("href"), Some("https://tidepool.dev"));
    }

    #[test]
    fn test_whitespace_live_url_still_renders_secondary_link() {
        let mut doc = containers();
        populate(&mut doc, &content_with(vec![project(" ")]));
        let live: Vec<&Element> = links_of(&doc)
            .into_iter()
            .filter(|l| l.has_class("live-link"))
            .collect();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].attr("href"), Some(" "));
    }

    #[test]
    fn test_technology_tags_rendered_in_order() {
        let mut doc = containers();
        populate(&mut doc, &content_with(vec![project("")]));
        let projects = doc.get_element_by_id(PROJECTS_CONTAINER_ID).unwrap();
        let tags: Vec<String> = projects
            .find_by_class("tech-tag")
            .iter()
            .map(|t| t.text_content())
            .collect();
        assert_eq!(tags, vec!["Rust", "Ratatui", "Serde"]);
    }

    #[test]
    fn test_missing_container_is_noop() {
        let mut doc = Document::new(
            Element::new("html")
                .with_child(Element::new("p").with_id(ABOUT_TEXT_ID).with_text("unchanged"))
                .with_child(Element::new("div").with_id(SKILLS_CONTAINER_ID)),
        );
        let before = doc.clone();
        populate(&mut doc, &content_with(vec![project("")]));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_repopulating_replaces_previous_cards() {
        let mut doc = containers();
        populate(&mut doc, &content_with(vec![project(""), project("")]));
        populate(&mut doc, &content_with(vec![project("")]));
        let projects = doc.get_element_by_id(PROJECTS_CONTAINER_ID).unwrap();
        assert_eq!(projects.find_by_class("project-card").len(), 1);
    }

    #[test]
    fn test_certifications_rendered_as_links() {
        let mut doc = containers();
        let certs = [Certification {
            name: "CKAD",
            issuer: "The Linux Foundation",
            url: "https://example.org/ckad",
        }];
        populate_certifications(&mut doc, &certs);
        let list = doc.get_element_by_id(CERTIFICATIONS_LIST_ID).unwrap();
        let items = list.find_by_class("certification");
        assert_eq!(items.len(), 1);
        let link = items[0].child_elements().next().unwrap();
        assert_eq!(link.attr("href"), Some("https://example.org/ckad"));
        assert_eq!(link.attr("target"), Some("_blank"));
        assert_eq!(link.text_content(), "CKAD, The Linux Foundation");
    }
}
