pub mod analysis;
pub mod resume;

pub use analysis::{JDAnalysis, KeywordCategory, WeightedKeyword, REQUIREMENTS_CATEGORY};
pub use resume::{
    Contact, EducationEntry, ExperienceEntry, OptimizedResume, ProjectEntry, SkillCategory,
    Skills, StructuredResume,
};
