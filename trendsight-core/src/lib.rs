//! TrendSight Core — daily stock price trend analytics.
//!
//! This crate contains:
//! - Domain types (price bars, the ordered price series, derived columns,
//!   transactions)
//! - Analytics passes: SMA, daily returns, directional run segmentation,
//!   single/multi-transaction profit analysis, display selection
//! - The data boundary: provider trait plus Yahoo Finance, CSV and
//!   synthetic sources, and raw-to-validated ingest
//!
//! Every analyzer is a pure function over an immutable series: read-only
//! input, freshly allocated output. Analyses of distinct series are
//! independent and safe to run in parallel at the caller's discretion.

pub mod analytics;
pub mod data;
pub mod domain;
