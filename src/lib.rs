//! ICASA-GEO - strategic organizational management dashboard
//!
//! Server-rendered navigation shell and executive dashboard over the ICASA
//! knowledge base REST API.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod render;
pub mod shell;
pub mod web;

#[cfg(test)]
pub(crate) mod test_support;
