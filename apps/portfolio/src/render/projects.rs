use askama::Template;

use crate::content::models::ProjectEntry;
use crate::render::href::safe_href;
use crate::render::{render_fragment, Slot};

/// A project with its optional parts resolved; empty means "omit".
struct ProjectCard<'a> {
    name: &'a str,
    description: &'a str,
    impact: &'a str,
    href: String,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"
{%- for card in cards -%}
<div class="project-card"><div class="project-header"><h3 class="project-title">{{ card.name }}</h3></div><p class="project-description">{{ card.description }}</p>
{%- if !card.impact.is_empty() -%}
<p class="project-impact">Impact: {{ card.impact }}</p>
{%- endif -%}
{%- if !card.href.is_empty() -%}
<a href="{{ card.href }}" class="project-link" target="_blank" rel="noopener">View Project →</a>
{%- endif -%}
</div>
{%- endfor -%}
"#
)]
struct ProjectsFragment<'a> {
    cards: Vec<ProjectCard<'a>>,
}

/// Fills the projects grid, one card per project.
/// Impact and link fragments are emitted only when present and non-empty.
pub fn render_projects(projects: &[ProjectEntry], slot: &mut Slot) {
    if projects.is_empty() {
        return;
    }

    let cards = projects
        .iter()
        .map(|project| ProjectCard {
            name: &project.name,
            description: &project.description,
            impact: project.impact().unwrap_or(""),
            href: project.link().map(safe_href).unwrap_or_default(),
        })
        .collect();
    slot.set(render_fragment(&ProjectsFragment { cards }));
}
