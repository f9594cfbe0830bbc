pub mod resume;
pub mod suggestion;
