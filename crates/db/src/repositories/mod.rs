//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod learning_progress_repo;
pub mod mastery_prediction_repo;
pub mod note_summary_repo;
pub mod skill_category_repo;
pub mod skill_recommendation_repo;
pub mod skill_repo;

pub use learning_progress_repo::LearningProgressRepo;
pub use mastery_prediction_repo::MasteryPredictionRepo;
pub use note_summary_repo::NoteSummaryRepo;
pub use skill_category_repo::SkillCategoryRepo;
pub use skill_recommendation_repo::SkillRecommendationRepo;
pub use skill_repo::SkillRepo;
