//! Résumé tailoring core: parse a résumé, analyze a job description,
//! optimize the résumé against it and render the result.
//!
//! The four stages are pure synchronous functions ([`parsing::parse`],
//! [`analysis::analyze`], [`optimization::optimize`], [`render::format`]).
//! The `routes`, `pipeline::handlers`, `state` and `config` modules are the
//! HTTP shell around them.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod models;
pub mod optimization;
pub mod parsing;
pub mod pipeline;
pub mod render;
pub mod routes;
pub mod state;
pub mod vocabulary;
