//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod random_source;

pub use random_source::RealRandomSource;
