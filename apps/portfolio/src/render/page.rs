use askama::Template;
use chrono::{Datelike, Utc};

use crate::content::ContentDocument;
use crate::render::href::safe_href;
use crate::render::{render_sections, PageSlots};
use crate::ui::contact::form_target;
use crate::ui::nav::NAV_SECTIONS;
use crate::ui::resume::RESUME_PATH;
use crate::ui::theme::Theme;

/// Per-request inputs to the page shell that are not content.
#[derive(Debug, Clone)]
pub struct PageOptions<'a> {
    pub theme: Theme,
    pub contact_action: Option<&'a str>,
    pub year: i32,
}

impl<'a> PageOptions<'a> {
    pub fn new(theme: Theme, contact_action: Option<&'a str>) -> Self {
        Self {
            theme,
            contact_action,
            year: Utc::now().year(),
        }
    }
}

struct SectionView<'a> {
    id: &'static str,
    title: &'static str,
    container_id: &'static str,
    class: &'static str,
    html: &'a str,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    theme: &'static str,
    icon: &'static str,
    nav: &'static [(&'static str, &'static str)],
    resume_href: String,
    sections: Vec<SectionView<'a>>,
    form_action: String,
    year: i32,
}

/// Renders the full HTML document for one page view.
pub fn render_page(doc: &ContentDocument, opts: &PageOptions<'_>) -> askama::Result<String> {
    let mut slots = PageSlots::default();
    render_sections(doc, &mut slots);

    let sections = vec![
        SectionView {
            id: "experience",
            title: "Experience",
            container_id: PageSlots::EXPERIENCE_TIMELINE_ID,
            class: "timeline",
            html: slots.experience_timeline.html(),
        },
        SectionView {
            id: "projects",
            title: "Projects",
            container_id: PageSlots::PROJECTS_GRID_ID,
            class: "projects-grid",
            html: slots.projects_grid.html(),
        },
        SectionView {
            id: "skills",
            title: "Skills",
            container_id: PageSlots::SKILLS_GRID_ID,
            class: "skills-grid",
            html: slots.skills_grid.html(),
        },
        SectionView {
            id: "education",
            title: "Education",
            container_id: PageSlots::EDUCATION_CONTENT_ID,
            class: "education-content",
            html: slots.education_content.html(),
        },
    ];

    PageTemplate {
        theme: opts.theme.as_str(),
        icon: opts.theme.icon(),
        nav: NAV_SECTIONS,
        resume_href: safe_href(RESUME_PATH),
        sections,
        form_action: safe_href(form_target(opts.contact_action)),
        year: opts.year,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fallback::fallback_document;

    #[test]
    fn test_page_carries_theme_and_year() {
        let opts = PageOptions {
            theme: Theme::Light,
            contact_action: None,
            year: 2031,
        };
        let html = render_page(&ContentDocument::default(), &opts).unwrap();
        assert!(html.contains("data-theme=\"light\""));
        assert!(html.contains("<span class=\"theme-icon\">🌙</span>"));
        assert!(html.contains("<span id=\"currentYear\">2031</span>"));
    }

    #[test]
    fn test_page_embeds_rendered_sections() {
        let opts = PageOptions::new(Theme::Dark, Some("https://formspree.io/f/abc"));
        let html = render_page(&fallback_document(), &opts).unwrap();
        assert!(html.contains("<div id=\"experienceTimeline\" class=\"timeline\"><div class=\"timeline-item\">"));
        assert!(html.contains("id=\"projectsGrid\""));
        assert!(html.contains("id=\"skillsGrid\""));
        assert!(html.contains("<div id=\"educationContent\" class=\"education-content\"><div class=\"education-grid\">"));
        assert!(html.contains("action=\"https://formspree.io/f/abc\""));
        assert_eq!(html.matches("class=\"nav-link\"").count(), NAV_SECTIONS.len());
    }

    #[test]
    fn test_unconfigured_form_posts_to_local_endpoint() {
        for action in [None, Some("https://formspree.io/f/YOUR_FORM_ID")] {
            let opts = PageOptions::new(Theme::Dark, action);
            let html = render_page(&ContentDocument::default(), &opts).unwrap();
            assert!(html.contains("<form class=\"contact-form\" action=\"/contact\" method=\"POST\">"));
        }
    }

    #[test]
    fn test_page_loads_interaction_script() {
        let opts = PageOptions::new(Theme::Dark, None);
        let html = render_page(&ContentDocument::default(), &opts).unwrap();
        assert!(html.contains("<script src=\"./js/main.js\" defer></script>"));
        assert!(html.contains("id=\"themeToggle\""));
        assert!(html.contains("id=\"downloadResume\""));
    }

    #[test]
    fn test_content_markup_is_not_double_escaped() {
        let doc: ContentDocument = serde_json::from_str(
            r#"{"projects":[{"name":"R&D <lab>","description":"d"}]}"#,
        )
        .unwrap();
        let opts = PageOptions::new(Theme::Dark, None);
        let html = render_page(&doc, &opts).unwrap();
        assert!(html.contains("<h3 class=\"project-title\">R&amp;D &lt;lab&gt;</h3>"));
        assert!(!html.contains("&amp;amp;"));
    }

    #[test]
    fn test_page_is_deterministic() {
        let opts = PageOptions {
            theme: Theme::Dark,
            contact_action: None,
            year: 2030,
        };
        let doc = fallback_document();
        assert_eq!(
            render_page(&doc, &opts).unwrap(),
            render_page(&doc, &opts).unwrap()
        );
    }
}
