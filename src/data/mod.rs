//! Data module: bounds, element addressing and buffer storage
#![warn(missing_docs)]

pub mod bound;
pub mod elements;
pub mod storage;

pub use bound::Bound;
pub use storage::{Storage, VecStorage};
