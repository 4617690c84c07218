//! Core types for building and inspecting Kubernetes image-pull Secrets.

pub mod docker_config;
pub mod error;
pub mod secret;
pub mod validate;
