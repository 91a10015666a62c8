use askama::Template;

use crate::content::models::ExperienceEntry;
use crate::render::{render_fragment, Slot};

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"
{%- for exp in entries -%}
<div class="timeline-item"><div class="timeline-content"><div class="timeline-header"><h3 class="timeline-title">{{ exp.role }}</h3><div class="timeline-company">{{ exp.company }}</div><div class="timeline-period">{{ exp.start }} - {{ exp.end }}</div></div><ul class="timeline-highlights">
{%- for highlight in exp.highlights -%}
<li>{{ highlight }}</li>
{%- endfor -%}
</ul><div class="tech-stack">
{%- for tech in exp.stack -%}
<span class="tech-tag">{{ tech }}</span>
{%- endfor -%}
</div></div></div>
{%- endfor -%}
"#
)]
struct TimelineFragment<'a> {
    entries: &'a [ExperienceEntry],
}

/// Fills the experience timeline. An empty list leaves the slot untouched.
pub fn render_experience(entries: &[ExperienceEntry], slot: &mut Slot) {
    if entries.is_empty() {
        return;
    }
    slot.set(render_fragment(&TimelineFragment { entries }));
}
