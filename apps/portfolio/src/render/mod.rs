// Server-side rendering of the portfolio page.
// Section renderers are pure: data in, fragment written to the slot they own.

pub mod education;
pub mod experience;
pub mod href;
pub mod page;
pub mod projects;
pub mod skills;

pub use page::{render_page, PageOptions};

use askama::Template;
use tracing::error;

use crate::content::ContentDocument;

/// A page region owned by exactly one renderer.
/// Empty until a renderer writes it; a renderer either replaces it or leaves it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slot {
    html: Option<String>,
}

impl Slot {
    pub fn set(&mut self, html: String) {
        self.html = Some(html);
    }

    pub fn html(&self) -> &str {
        self.html.as_deref().unwrap_or("")
    }

    #[cfg(test)]
    pub fn is_rendered(&self) -> bool {
        self.html.is_some()
    }
}

/// Renders an askama fragment. Fragments only interpolate strings, so a
/// failure here is a template bug; it is logged and renders as nothing.
pub(crate) fn render_fragment<T: Template>(template: &T) -> String {
    template.render().unwrap_or_else(|e| {
        error!("Fragment template error: {e}");
        String::new()
    })
}

/// The four content containers of the page, by element id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSlots {
    pub experience_timeline: Slot,
    pub projects_grid: Slot,
    pub skills_grid: Slot,
    pub education_content: Slot,
}

impl PageSlots {
    pub const EXPERIENCE_TIMELINE_ID: &'static str = "experienceTimeline";
    pub const PROJECTS_GRID_ID: &'static str = "projectsGrid";
    pub const SKILLS_GRID_ID: &'static str = "skillsGrid";
    pub const EDUCATION_CONTENT_ID: &'static str = "educationContent";
}

/// Runs every section renderer over `doc` in page order.
pub fn render_sections(doc: &ContentDocument, slots: &mut PageSlots) {
    experience::render_experience(&doc.experience, &mut slots.experience_timeline);
    projects::render_projects(&doc.projects, &mut slots.projects_grid);
    skills::render_skills(doc.skills.as_ref(), &mut slots.skills_grid);
    education::render_education(&doc.education, &doc.awards, &mut slots.education_content);
}
