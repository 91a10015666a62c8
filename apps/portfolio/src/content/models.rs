use serde::{Deserialize, Deserializer, Serialize};

/// An explicit `null` sequence reads the same as an absent one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One position on the experience timeline.
/// `highlights` and `stack` default to empty so a sparse entry still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub start: String, // free-form period label, e.g. "2023"
    pub end: String,   // e.g. "Present"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl ProjectEntry {
    /// Impact text, treating `""` the same as an absent value.
    pub fn impact(&self) -> Option<&str> {
        self.impact.as_deref().filter(|s| !s.is_empty())
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
}

/// The six skill categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Languages,
    MachineLearning,
    MlOps,
    Cloud,
    Data,
    Visualization,
}

impl SkillCategory {
    /// Display order of the skills grid. Independent of the key order in the JSON.
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Languages,
        SkillCategory::MachineLearning,
        SkillCategory::MlOps,
        SkillCategory::Cloud,
        SkillCategory::Data,
        SkillCategory::Visualization,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::MachineLearning => "Machine Learning",
            SkillCategory::MlOps => "MLOps & Cloud",
            SkillCategory::Cloud => "Cloud Platforms",
            SkillCategory::Data => "Data & Analytics",
            SkillCategory::Visualization => "Visualization",
        }
    }

    /// JSON key under `skills`.
    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::MachineLearning => "ml",
            SkillCategory::MlOps => "mlops",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Data => "data",
            SkillCategory::Visualization => "viz",
        }
    }
}

/// Skill names per category. Unknown keys in the source document are dropped
/// during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ml: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mlops: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viz: Option<Vec<String>>,
}

impl SkillSet {
    /// Skills for one category; absent categories read as empty.
    pub fn get(&self, category: SkillCategory) -> &[String] {
        let skills = match category {
            SkillCategory::Languages => &self.languages,
            SkillCategory::MachineLearning => &self.ml,
            SkillCategory::MlOps => &self.mlops,
            SkillCategory::Cloud => &self.cloud,
            SkillCategory::Data => &self.data,
            SkillCategory::Visualization => &self.viz,
        };
        skills.as_deref().unwrap_or(&[])
    }
}

/// Everything the page renders for one page view. Built once per load and
/// only ever read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Option<SkillSet>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub awards: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sequences_default_to_empty() {
        let doc: ContentDocument = serde_json::from_str(
            r#"{"experience":[{"role":"R","company":"C","start":"2020","end":"2021"}]}"#,
        )
        .unwrap();
        assert!(doc.experience[0].highlights.is_empty());
        assert!(doc.experience[0].stack.is_empty());
        assert!(doc.projects.is_empty());
        assert!(doc.skills.is_none());
    }

    #[test]
    fn test_null_sections_read_as_empty() {
        let doc: ContentDocument = serde_json::from_str(
            r#"{"experience":null,"projects":[{"name":"Real Project","description":"d"}],
                "education":null,"awards":null,"skills":null}"#,
        )
        .unwrap();
        assert!(doc.experience.is_empty());
        assert_eq!(doc.projects[0].name, "Real Project");
        assert!(doc.education.is_empty());
        assert!(doc.awards.is_empty());
        assert!(doc.skills.is_none());

        let entry: ExperienceEntry = serde_json::from_str(
            r#"{"role":"R","company":"C","start":"2020","end":"2021","highlights":null,"stack":null}"#,
        )
        .unwrap();
        assert!(entry.highlights.is_empty());
        assert!(entry.stack.is_empty());
    }

    #[test]
    fn test_unknown_skill_keys_ignored() {
        let skills: SkillSet =
            serde_json::from_str(r#"{"languages":["Rust"],"cooking":["Pasta"]}"#).unwrap();
        assert_eq!(skills.get(SkillCategory::Languages), ["Rust".to_string()]);
        assert!(skills.get(SkillCategory::Visualization).is_empty());
    }

    #[test]
    fn test_empty_impact_and_link_read_as_absent() {
        let project: ProjectEntry = serde_json::from_str(
            r#"{"name":"X","description":"Y","impact":"","link":null}"#,
        )
        .unwrap();
        assert_eq!(project.impact(), None);
        assert_eq!(project.link(), None);
    }

    #[test]
    fn test_category_keys_match_document_fields() {
        let keys: Vec<_> = SkillCategory::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, ["languages", "ml", "mlops", "cloud", "data", "viz"]);
    }
}
