//! Shared test support utilities for behaviour-driven suites.
//!
//! Exposes the `text` helpers (for example `StepText`) that strip the quotes
//! scenarios wrap around literal values, so every step compares the same
//! string the author wrote.
pub mod text;
