pub mod diagnosis_run_repo;
pub mod project_repo;
pub mod suggestion_repo;

pub use diagnosis_run_repo::DiagnosisRunRepo;
pub use project_repo::ProjectRepo;
pub use suggestion_repo::SuggestionRepo;
