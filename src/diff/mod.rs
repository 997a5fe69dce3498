pub mod summary;

pub use summary::unified_summary;
