pub mod project;
pub mod suggestion;
