pub mod admin_cli;
pub mod config;
pub mod database;
pub mod error;
pub mod extract_text;
pub mod intelligence;
pub mod llm;
pub mod parser;
pub mod pipeline;
pub mod types;
pub mod web;

pub use config::ConfigManager;
pub use pipeline::{AnalysisBundle, AnalysisPipeline};
pub use web::start_web_server;
