pub mod document;
pub mod handlers;
pub mod library;
pub mod store;
