// Content pipeline: fetch data/content.json, fall back to sample data on any failure.

pub mod fallback;
pub mod loader;
pub mod models;
pub mod source;

pub use loader::ContentLoader;
pub use models::ContentDocument;
pub use source::{FsSource, HttpSource, ResourceSource};
