// Configuration module for quote-patcher
// Everything is compiled in; there is no configuration file

pub mod target;

pub use target::PatchTarget;

/// Log filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "quote_patcher=warn";

/// Line printed to stdout after a successful run
pub const CONFIRMATION_MESSAGE: &str = "Replacement complete";
