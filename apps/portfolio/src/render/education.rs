use askama::Template;

use crate::content::models::EducationEntry;
use crate::render::{render_fragment, Slot};

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<div class="education-grid">
{%- for edu in education -%}
<div class="education-item"><div class="education-header"><h3>{{ edu.degree }}</h3><div class="education-school">{{ edu.school }}</div><div class="education-year">{{ edu.year }}</div></div></div>
{%- endfor -%}
{%- if !awards.is_empty() -%}
<div class="education-item"><div class="education-header"><h3>Awards &amp; Achievements</h3></div><ul class="awards-list">
{%- for award in awards -%}
<li><span class="award-title">{{ award }}</span></li>
{%- endfor -%}
</ul></div>
{%- endif -%}
</div>"#
)]
struct EducationFragment<'a> {
    education: &'a [EducationEntry],
    awards: &'a [String],
}

/// Fills the education container. The `education-grid` wrapper is always
/// written, even when both lists are empty.
pub fn render_education(education: &[EducationEntry], awards: &[String], slot: &mut Slot) {
    slot.set(render_fragment(&EducationFragment { education, awards }));
}
