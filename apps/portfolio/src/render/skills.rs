use askama::Template;

use crate::content::models::{SkillCategory, SkillSet};
use crate::render::{render_fragment, Slot};

struct SkillGroup<'a> {
    key: &'static str,
    label: &'static str,
    names: &'a [String],
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"
{%- for group in groups -%}
<div class="skills-category" data-category="{{ group.key }}"><h3>{{ group.label }}</h3><div class="skills-list">
{%- for name in group.names -%}
<span class="skill-tag">{{ name }}</span>
{%- endfor -%}
</div></div>
{%- endfor -%}
"#
)]
struct SkillsFragment<'a> {
    groups: Vec<SkillGroup<'a>>,
}

/// Fills the skills grid in `SkillCategory::ALL` order, skipping empty categories.
/// A missing skill set leaves the slot untouched.
pub fn render_skills(skills: Option<&SkillSet>, slot: &mut Slot) {
    let Some(skills) = skills else {
        return;
    };

    let groups = SkillCategory::ALL
        .into_iter()
        .map(|category| SkillGroup {
            key: category.key(),
            label: category.label(),
            names: skills.get(category),
        })
        .filter(|group| !group.names.is_empty())
        .collect();
    slot.set(render_fragment(&SkillsFragment { groups }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(html: &str) -> Vec<&str> {
        html.split("<h3>")
            .skip(1)
            .filter_map(|s| s.split("</h3>").next())
            .collect()
    }

    #[test]
    fn test_fixed_order_regardless_of_key_order() {
        let skills: SkillSet = serde_json::from_str(
            r#"{"viz":["Plotly"],"data":["Spark"],"cloud":["GCP"],"mlops":["DVC"],"ml":["XGBoost"],"languages":["Rust"]}"#,
        )
        .unwrap();
        let mut slot = Slot::default();
        render_skills(Some(&skills), &mut slot);
        assert_eq!(
            headings(slot.html()),
            [
                "Languages",
                "Machine Learning",
                "MLOps &amp; Cloud",
                "Cloud Platforms",
                "Data &amp; Analytics",
                "Visualization"
            ]
        );
    }

    #[test]
    fn test_only_populated_categories_render() {
        let skills: SkillSet =
            serde_json::from_str(r#"{"languages":["Rust","SQL"],"ml":[]}"#).unwrap();
        let mut slot = Slot::default();
        render_skills(Some(&skills), &mut slot);
        assert_eq!(slot.html().matches("class=\"skills-category\"").count(), 1);
        assert_eq!(headings(slot.html()), ["Languages"]);
        assert!(slot.html().contains("<span class=\"skill-tag\">Rust</span><span class=\"skill-tag\">SQL</span>"));
    }

    #[test]
    fn test_missing_skill_set_leaves_slot_untouched() {
        let mut slot = Slot::default();
        render_skills(None, &mut slot);
        assert!(!slot.is_rendered());
    }

    #[test]
    fn test_all_empty_writes_empty_grid() {
        let mut slot = Slot::default();
        render_skills(Some(&SkillSet::default()), &mut slot);
        assert!(slot.is_rendered());
        assert_eq!(slot.html(), "");
    }
}
