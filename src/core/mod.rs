pub mod annotations;
pub mod comprehension;
pub mod delays;

pub use crate::utils::error::Result;
