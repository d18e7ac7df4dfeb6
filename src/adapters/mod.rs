// Adapters layer: concrete implementations for external systems (http, GitHub).

pub mod github;
pub mod http;
