//! API request handlers

mod audit;
mod comments;
mod courses;
mod health;

pub use audit::*;
pub use comments::*;
pub use courses::*;
pub use health::*;
