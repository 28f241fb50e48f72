//! Report renderers for the analyzed notice table.
//!
//! - [`terminal`] — colored summary box and per-tier tables; respects
//!   `--verbose` / `--quiet`.
//! - [`export`] — CSV spreadsheet of the enriched table, with optional
//!   year/month archive bucketing.

pub mod export;
pub mod terminal;
