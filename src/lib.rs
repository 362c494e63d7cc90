pub mod base58;
pub mod logger;
pub mod snippet;
