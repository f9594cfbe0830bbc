pub mod analyzer;
pub mod apply;
pub mod choice;
pub mod handlers;
pub mod improve;
pub mod in_flight;
pub mod industry;
pub mod templates;
