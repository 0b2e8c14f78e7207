//! Version layer: fetching remote metadata and comparing it to the build
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Feed     │────▶│   Compare   │────▶│ CheckResult │
//! │  (fetch)    │     │ (components)│     │  (outcome)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`compare`]: dotted-numeric version comparison
//! - [`error`]: failure taxonomy for the check pipeline
//! - [`feed`]: update feed trait and HTTP implementation
//! - [`types`]: remote metadata and check outcomes

pub mod compare;
pub mod error;
pub mod feed;
pub mod types;
