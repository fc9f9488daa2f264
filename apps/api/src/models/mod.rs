pub mod analytics;
pub mod content;
