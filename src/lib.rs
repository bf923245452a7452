//! Core library for recording-rename
pub mod batch;
pub mod config;
pub mod materialize;
pub mod models;
pub mod naming;
pub mod report;
pub mod source;
