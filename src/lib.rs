//! Career Compass - Preference-to-career matching engine
//!
//! This crate turns a structured preference profile extracted from
//! conversation into ranked career recommendations, gated by the
//! extractor's self-reported confidence.

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
