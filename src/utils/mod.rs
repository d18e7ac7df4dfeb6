pub mod error;
pub mod logger;
pub mod memoize;
pub mod nested_map;
pub mod validation;
