//! Reusable observers for the Strong Wolfe line search.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the events and actions emitted by
//! [`strong_wolfe::search`][search].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasAlpha`], [`HasValue`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`] — records every event for later inspection
//! - [`LogObserver`] — forwards every event to the [`log`] facade
//!
//! [`Observer`]: wolfe_core::Observer
//! [search]: wolfe_solvers::line_search::strong_wolfe::search
//! [`HasAlpha`]: traits::HasAlpha
//! [`HasValue`]: traits::HasValue
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod logging;

pub use history::{History, Phase, Record};
pub use logging::LogObserver;
