pub mod dashboard;
pub mod public;
