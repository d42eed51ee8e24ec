//! Version resolution layer
//!
//! This module provides the core functionality for resolving the
//! requires-python constraint of a package release and selecting the
//! minimum compatible interpreter version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Resolver   │────▶│  Registry   │     │  Selector   │
//! │ (constraint)│     │   (fetch)   │     │   (pick)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Source-     │     │ Registries  │
//! │ install tbl │     │   (PyPI)    │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types for registry and selection operations
//! - [`registry`]: Registry trait for fetching release metadata
//! - [`registries`]: Concrete registry implementations (PyPI)
//! - [`resolver`]: Requires-python constraint lookup with the source-install shortcut
//! - [`selector`]: Candidate sorting and minimum-version selection

pub mod error;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod selector;
