//! Dashboard modules
//!
//! Pure models behind the view; `ui` only draws what these produce.
//!
//! Modules:
//! - tiles: the four summary tiles and their inline review controls
//! - charts: projections of fixtures into widget inputs
//! - review_dialog: the approve/deny dialog state machine
//! - approvals: where approve/deny decisions are delivered
//! - export: CSV/JSON snapshot of the fixtures

pub mod approvals;
pub mod charts;
pub mod export;
pub mod review_dialog;
pub mod tiles;
