pub mod dates;
pub mod handlers;
pub mod html;
pub mod projector;
pub mod styles;
