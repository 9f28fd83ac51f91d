//! UI components and pages.
//!
//! # Structure
//!
//! - [`components`]: Reusable components, including the release-stage badge
//! - [`gallery`]: Preview page listing every badge variant

pub mod components;
pub mod gallery;
