use serde::{Deserialize, Serialize};

/// In-page sections linked from the navbar, as (element id, label).
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("education", "Education"),
    ("contact", "Contact"),
];

/// Height of the fixed navbar; scroll targets land this far above a section.
pub const NAV_OFFSET: f64 = 80.0;

/// A section counts as active once the viewport is within this distance of it.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

/// Layout position of one section, as measured by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionOffset {
    pub id: String,
    pub offset_top: f64,
}

/// Scroll position for a nav link like `#projects`, or `None` when the link
/// does not point at a known section.
pub fn scroll_target(href: &str, sections: &[SectionOffset]) -> Option<f64> {
    let id = href.strip_prefix('#')?;
    sections
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.offset_top - NAV_OFFSET)
}

/// The last section in document order whose top (minus the activation offset)
/// has been scrolled past.
pub fn active_section(scroll_y: f64, sections: &[SectionOffset]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.offset_top - ACTIVE_SECTION_OFFSET)
        .last()
        .map(|s| s.id.as_str())
}

/// The href of the nav link to highlight, if any.
pub fn active_nav_href(scroll_y: f64, sections: &[SectionOffset]) -> Option<String> {
    active_section(scroll_y, sections).map(|id| format!("#{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionOffset> {
        [("about", 0.0), ("experience", 700.0), ("projects", 1500.0)]
            .into_iter()
            .map(|(id, offset_top)| SectionOffset {
                id: id.to_string(),
                offset_top,
            })
            .collect()
    }

    #[test]
    fn test_scroll_target_accounts_for_navbar() {
        assert_eq!(scroll_target("#experience", &layout()), Some(620.0));
        assert_eq!(scroll_target("#missing", &layout()), None);
        assert_eq!(scroll_target("experience", &layout()), None);
    }

    #[test]
    fn test_active_section_threshold() {
        let sections = layout();
        assert_eq!(active_section(0.0, &sections), Some("about"));
        assert_eq!(active_section(599.0, &sections), Some("about"));
        assert_eq!(active_section(600.0, &sections), Some("experience"));
        assert_eq!(active_nav_href(5000.0, &sections).as_deref(), Some("#projects"));
    }

    #[test]
    fn test_no_section_reached() {
        let sections = vec![SectionOffset {
            id: "about".to_string(),
            offset_top: 400.0,
        }];
        assert_eq!(active_nav_href(0.0, &sections), None);
    }
}
