pub mod blog_client;
pub mod components;
pub mod configuration;
pub mod constant;
pub mod context;
pub mod domain;
pub mod error;
pub mod request;
pub mod session_state;
pub mod telemetry;
