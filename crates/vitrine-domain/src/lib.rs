//! # Vitrine - Domain Layer
//!
//! Core types for the product catalog similarity search: the in-memory
//! [`VectorStore`], the value objects it stores and returns, and the ports
//! implemented by provider crates.
//!
//! ## Example
//!
//! ```ignore
//! use vitrine_domain::VectorStore;
//!
//! let mut store = VectorStore::new(Box::new(index));
//! store.add(&[1.0, 0.0], "chair-A")?;
//! let hits = store.search(&[1.0, 0.0], 5)?;
//! ```

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;
pub mod vector_store;

pub use error::{Error, Result};
pub use value_objects::*;
pub use vector_store::{SharedVectorStore, VectorStore};
