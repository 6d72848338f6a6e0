//! Order records as served by the backend, plus the values derived from them.

pub mod details;
pub mod order;
pub mod summary;

pub use details::*;
pub use order::*;
pub use summary::*;
