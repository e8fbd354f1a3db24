//! Page skeleton with empty content containers, ready for population.

use crate::view::dom::{Document, Element};
use crate::view::populate::{
    ABOUT_TEXT_ID, CERTIFICATIONS_LIST_ID, PROJECTS_CONTAINER_ID, SKILLS_CONTAINER_ID,
};

pub const PAGE_TITLE: &str = "Ada Lindqvist | Software Engineer";

const MENU_TOGGLE_SCRIPT: &str = "document.getElementById('menu-toggle').addEventListener('click',function(){document.getElementById('nav-links').classList.toggle('active');});";

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("certifications", "Certifications"),
    ("contact", "Contact"),
];

/// Builds the full page with placeholder text in every container.
pub fn build_page(year: i32) -> Document {
    let head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1"),
        )
        .with_child(Element::new("title").with_text(PAGE_TITLE));

    let mut script = Element::new("script");
    script.set_inner_html(MENU_TOGGLE_SCRIPT);

    let body = Element::new("body")
        .with_child(header())
        .with_child(
            Element::new("main")
                .with_child(section("about", "About Me").with_child(
                    Element::new("p")
                        .with_id(ABOUT_TEXT_ID)
                        .with_text("Loading biography..."),
                ))
                .with_child(section("skills", "Skills").with_child(
                    Element::new("div")
                        .with_id(SKILLS_CONTAINER_ID)
                        .with_class("skills-grid")
                        .with_text("Loading skills..."),
                ))
                .with_child(section("projects", "Projects").with_child(
                    Element::new("div")
                        .with_id(PROJECTS_CONTAINER_ID)
                        .with_class("projects-grid")
                        .with_text("Loading projects..."),
                ))
                .with_child(
                    section("certifications", "Certifications").with_child(
                        Element::new("ul")
                            .with_id(CERTIFICATIONS_LIST_ID)
                            .with_class("certifications-list"),
                    ),
                )
                .with_child(section("contact", "Contact").with_child(contact_form())),
        )
        .with_child(
            Element::new("footer")
                .with_child(Element::new("p").with_text(&format!("© {year} Ada Lindqvist"))),
        )
        .with_child(script);

    Document::new(
        Element::new("html")
            .with_attr("lang", "en")
            .with_child(head)
            .with_child(body),
    )
}

fn header() -> Element {
    let links = NAV_SECTIONS.iter().fold(
        Element::new("ul").with_id("nav-links").with_class("nav-links"),
        |ul, (anchor, label)| {
            ul.with_child(
                Element::new("li").with_child(
                    Element::new("a")
                        .with_attr("href", &format!("#{anchor}"))
                        .with_text(label),
                ),
            )
        },
    );

    Element::new("header").with_child(
        Element::new("nav")
            .with_child(Element::new("a").with_class("logo").with_attr("href", "#").with_text("AL"))
            .with_child(
                Element::new("button")
                    .with_id("menu-toggle")
                    .with_class("menu-toggle")
                    .with_attr("aria-label", "Toggle navigation")
                    .with_text("☰"),
            )
            .with_child(links),
    )
}

fn section(id: &str, title: &str) -> Element {
    Element::new("section")
        .with_id(id)
        .with_class("section")
        .with_child(Element::new("h2").with_text(title))
}

fn contact_form() -> Element {
    Element::new("form")
        .with_id("contact-form")
        .with_attr("action", "/api/v1/contact")
        .with_attr("method", "post")
        .with_child(
            Element::new("input")
                .with_attr("type", "text")
                .with_attr("name", "name")
                .with_attr("placeholder", "Your name")
                .with_attr("required", "required"),
        )
        .with_child(
            Element::new("input")
                .with_attr("type", "email")
                .with_attr("name", "email")
                .with_attr("placeholder", "Your email")
                .with_attr("required", "required"),
        )
        .with_child(
            Element::new("textarea")
                .with_attr("name", "message")
                .with_attr("placeholder", "Your message")
                .with_attr("required", "required"),
        )
        .with_child(
            Element::new("button")
                .with_attr("type", "submit")
                .with_text("Send Message"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_all_content_containers() {
        let doc = build_page(2026);
        for id in [
            ABOUT_TEXT_ID,
            SKILLS_CONTAINER_ID,
            PROJECTS_CONTAINER_ID,
            CERTIFICATIONS_LIST_ID,
            "contact-form",
            "menu-toggle",
            "nav-links",
        ] {
            assert!(doc.contains(id), "missing #{id}");
        }
    }

    #[test]
    fn test_title_is_plain_ascii() {
        let html = build_page(2026).to_html();
        assert!(html.contains("<title>Ada Lindqvist | Software Engineer</title>"));
        assert!(PAGE_TITLE.is_ascii());
    }

    #[test]
    fn test_footer_shows_year() {
        let html = build_page(2031).to_html();
        assert!(html.contains("© 2031 Ada Lindqvist"));
    }

    #[test]
    fn test_menu_script_is_not_escaped() {
        let html = build_page(2026).to_html();
        assert!(html.contains("getElementById('menu-toggle')"));
    }

    #[test]
    fn test_nav_links_point_at_sections() {
        let doc = build_page(2026);
        let nav = doc.get_element_by_id("nav-links").unwrap();
        assert_eq!(nav.child_elements().count(), NAV_SECTIONS.len());
        for (anchor, _) in NAV_SECTIONS {
            assert!(doc.contains(anchor), "no section #{anchor}");
        }
    }
}
