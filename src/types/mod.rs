pub mod analysis;
pub mod lenient;
pub mod resume;

pub use analysis::{CareerTrajectory, ContentQuality, ImprovementArea, MarketInsights, ResumeAnalysis};
pub use resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, ExperienceLevel, ProjectEntry,
    ResumeRecord, SkillSet,
};
