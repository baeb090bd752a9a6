// src/web/handlers/mod.rs

pub mod analyze;
pub mod assistant;
pub mod feedback;
pub mod insights;
pub mod system;

pub use analyze::analyze_resume_handler;
pub use assistant::assistant_handler;
pub use feedback::{list_feedback_handler, submit_feedback_handler};
pub use insights::insights_handler;
pub use system::health_handler;
