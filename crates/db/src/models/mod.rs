pub mod diagnosis_run;
pub mod project;
pub mod suggestion;
