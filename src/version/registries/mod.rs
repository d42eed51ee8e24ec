//! Registry implementations for fetching release metadata

pub mod pypi;

pub use pypi::PypiRegistry;
