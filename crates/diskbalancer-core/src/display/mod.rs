//! Display formatting for plans and plan command results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers format collections and sizes for console output.
//!
//! - [`report`]: the verbose plan summary ([`PlanReport`])
//! - [`size`]: human readable byte counts ([`ByteSize`])
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use diskbalancer_core::display::ByteSize;
//!
//! assert_eq!(ByteSize(512).to_string(), "512 B");
//! assert_eq!(ByteSize(3 * 1024 * 1024 / 2).to_string(), "1.50 MB");
//! ```

pub mod models;
pub mod report;
pub mod size;

pub use report::PlanReport;
pub use size::ByteSize;
