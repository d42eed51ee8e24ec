//! pymin - resolve the minimum Python version compatible with a package release
//!
//! Queries a package index's JSON metadata API for a release's declared
//! `requires_python` constraint and picks the lowest candidate interpreter
//! version that satisfies it.

pub mod config;
pub mod version;
