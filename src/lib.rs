//! Terminal admin dashboard for a camping store.
//!
//! Four summary tiles, a revenue chart, a category breakdown and a region map
//! (or per-category trends), all drawn from a read-only [`store::FixtureStore`].
//! The one piece of interactive state is the review approval dialog in
//! [`modules::review_dialog`].

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod logging;
pub mod modules;
pub mod store;
pub mod ui;
