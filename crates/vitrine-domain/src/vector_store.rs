//! In-memory vector store
//!
//! Holds (vector, metadata) records and answers top-k cosine similarity
//! queries through a pluggable [`VectorIndex`].
//!
//! ## Lifecycle
//!
//! A store starts empty. Its dimension is fixed either explicitly
//! ([`VectorStore::with_dimension`]) or by the first vector added, and every
//! later vector and query must match it. Records keep their insertion order
//! for the lifetime of the store; that order breaks similarity ties.
//!
//! ## Concurrency
//!
//! `add` takes `&mut self`, so a plain store has a single writer. Once loaded,
//! share it behind an `Arc` for any number of readers. [`SharedVectorStore`]
//! serializes writers for callers that keep inserting while serving queries.

use std::sync::{RwLock, RwLockReadGuard};

use crate::error::{Error, Result};
use crate::ports::providers::VectorIndex;
use crate::value_objects::SearchHit;

/// Collection of embedding records with similarity search
pub struct VectorStore<M> {
    index: Box<dyn VectorIndex>,
    metadata: Vec<M>,
    dimension: Option<usize>,
}

impl<M> VectorStore<M> {
    /// Create an empty store whose dimension is set by the first `add`
    ///
    /// `index` must be empty; the store owns every insertion into it.
    pub fn new(index: Box<dyn VectorIndex>) -> Self {
        debug_assert!(index.is_empty(), "vector store needs an empty index");
        Self {
            index,
            metadata: Vec::new(),
            dimension: None,
        }
    }

    /// Create an empty store with a fixed dimension
    pub fn with_dimension(index: Box<dyn VectorIndex>, dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::invalid_argument(
                "Vector store dimension must be positive",
            ));
        }
        let mut store = Self::new(index);
        store.dimension = Some(dimension);
        Ok(store)
    }

    /// Established dimension, if any
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    /// Name of the similarity backend
    pub fn index_name(&self) -> &str {
        self.index.name()
    }

    /// Metadata of every record, in insertion order
    pub fn metadata(&self) -> &[M] {
        &self.metadata
    }

    /// Iterate `(vector, metadata)` pairs in insertion order
    pub fn records(&self) -> impl Iterator<Item = (&[f32], &M)> + '_ {
        self.metadata.iter().enumerate().filter_map(|(slot, meta)| {
            self.index.vector(slot).map(|vector| (vector, meta))
        })
    }

    /// Append a record
    ///
    /// # Errors
    /// `DimensionMismatch` when `vector` disagrees with the established
    /// dimension; `InvalidArgument` for an empty vector or a non-finite
    /// component. On error the store is left untouched.
    pub fn add(&mut self, vector: &[f32], metadata: M) -> Result<()> {
        match self.dimension {
            Some(expected) if vector.len() != expected => {
                return Err(Error::dimension_mismatch(expected, vector.len()));
            }
            None if vector.is_empty() => {
                return Err(Error::invalid_argument(
                    "Cannot establish a store dimension from an empty vector",
                ));
            }
            _ => {}
        }
        if let Some(position) = vector.iter().position(|v| !v.is_finite()) {
            return Err(Error::invalid_argument(format!(
                "Vector component {position} is not finite"
            )));
        }

        self.index.insert(vector);
        self.metadata.push(metadata);
        self.dimension.get_or_insert(vector.len());
        Ok(())
    }

    /// Top-k records by cosine similarity to `query`
    ///
    /// Results are sorted by descending similarity; equal scores keep
    /// insertion order. An empty store yields an empty result.
    ///
    /// # Errors
    /// `DimensionMismatch` when `query` disagrees with the established
    /// dimension; `InvalidArgument` when `top_k` is zero.
    pub fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<SearchHit<M>>>
    where
        M: Clone,
    {
        if top_k == 0 {
            return Err(Error::invalid_argument("top_k must be positive"));
        }
        if let Some(expected) = self.dimension
            && query.len() != expected
        {
            return Err(Error::dimension_mismatch(expected, query.len()));
        }
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let hits = self
            .index
            .query(query, top_k)
            .into_iter()
            .filter_map(|scored| {
                self.metadata.get(scored.slot).map(|meta| SearchHit {
                    metadata: meta.clone(),
                    score: scored.score,
                })
            })
            .collect();
        Ok(hits)
    }
}

impl<M> std::fmt::Debug for VectorStore<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorStore")
            .field("index", &self.index.name())
            .field("len", &self.len())
            .field("dimension", &self.dimension)
            .finish()
    }
}

/// A [`VectorStore`] that accepts inserts while serving queries
///
/// Writers take an exclusive lock around the append; readers share it.
pub struct SharedVectorStore<M> {
    inner: RwLock<VectorStore<M>>,
}

impl<M> SharedVectorStore<M> {
    /// Wrap a store
    pub fn new(store: VectorStore<M>) -> Self {
        Self {
            inner: RwLock::new(store),
        }
    }

    /// Append a record under the write lock
    pub fn add(&self, vector: &[f32], metadata: M) -> Result<()> {
        self.inner
            .write()
            .map_err(|_| Error::infrastructure("Vector store lock poisoned"))?
            .add(vector, metadata)
    }

    /// Search under the read lock
    pub fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<SearchHit<M>>>
    where
        M: Clone,
    {
        self.read()?.search(query, top_k)
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Read access to the wrapped store
    pub fn read(&self) -> Result<RwLockReadGuard<'_, VectorStore<M>>> {
        self.inner
            .read()
            .map_err(|_| Error::infrastructure("Vector store lock poisoned"))
    }

    /// Unwrap the store
    pub fn into_inner(self) -> Result<VectorStore<M>> {
        self.inner
            .into_inner()
            .map_err(|_| Error::infrastructure("Vector store lock poisoned"))
    }
}
