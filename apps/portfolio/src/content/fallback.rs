//! Sample content shown when the real content document cannot be loaded.

use crate::content::models::{
    ContentDocument, EducationEntry, ExperienceEntry, ProjectEntry, SkillSet,
};

const EXPERIENCE_HIGHLIGHTS: &[&str] = &[
    "Developed and deployed ML models serving production traffic",
    "Improved model performance through feature engineering and optimization",
    "Built end-to-end MLOps pipelines for automated deployment",
    "Collaborated with cross-functional teams on AI initiatives",
];

const EXPERIENCE_STACK: &[&str] = &["Python", "PyTorch", "Docker", "Kubernetes", "AWS", "MLflow"];

const SKILLS_LANGUAGES: &[&str] = &["Python", "SQL", "R", "JavaScript"];
const SKILLS_ML: &[&str] = &["PyTorch", "TensorFlow", "scikit-learn", "Transformers", "XGBoost"];
const SKILLS_MLOPS: &[&str] = &["Docker", "Kubernetes", "MLflow", "Apache Airflow", "DVC"];
const SKILLS_CLOUD: &[&str] = &["AWS", "GCP", "Azure"];
const SKILLS_DATA: &[&str] = &["PostgreSQL", "MongoDB", "Apache Spark", "Pandas", "NumPy"];
const SKILLS_VIZ: &[&str] = &["Matplotlib", "Seaborn", "Plotly", "Tableau", "Streamlit"];

const AWARDS: &[&str] = &[
    "Academic Excellence Awards",
    "Project Recognition",
    "Professional Achievement Recognition",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed sample document. Always the same value; nothing is derived from
/// the failed load.
pub fn fallback_document() -> ContentDocument {
    ContentDocument {
        experience: vec![ExperienceEntry {
            role: "Machine Learning Engineer".to_string(),
            company: "Technology Company".to_string(),
            start: "2023".to_string(),
            end: "Present".to_string(),
            highlights: strings(EXPERIENCE_HIGHLIGHTS),
            stack: strings(EXPERIENCE_STACK),
        }],
        projects: vec![
            ProjectEntry {
                name: "ML Pipeline Automation".to_string(),
                description: "End-to-end machine learning pipeline with automated training, validation, and deployment capabilities.".to_string(),
                impact: Some("Reduced model deployment time from weeks to hours".to_string()),
                link: Some("https://github.com/Kalash0309".to_string()),
            },
            ProjectEntry {
                name: "NLP Text Classification System".to_string(),
                description: "Production-ready text classification system using transformer models for document processing.".to_string(),
                impact: Some("Achieved 95% accuracy on business document classification".to_string()),
                link: None,
            },
        ],
        skills: Some(SkillSet {
            languages: Some(strings(SKILLS_LANGUAGES)),
            ml: Some(strings(SKILLS_ML)),
            mlops: Some(strings(SKILLS_MLOPS)),
            cloud: Some(strings(SKILLS_CLOUD)),
            data: Some(strings(SKILLS_DATA)),
            viz: Some(strings(SKILLS_VIZ)),
        }),
        education: vec![EducationEntry {
            degree: "Master's Degree in Technology/Engineering".to_string(),
            school: "Indian Institute of Technology or Similar".to_string(),
            year: "2020".to_string(),
        }],
        awards: strings(AWARDS),
    }
}
