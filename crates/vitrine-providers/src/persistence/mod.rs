//! Store persistence
//!
//! A store is saved as two row-aligned files: an `N x D` `.npy` matrix of
//! vectors and a JSON array of N metadata records. Run summaries are saved
//! next to them as JSON.

pub mod json;
pub mod npy;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use vitrine_domain::VectorStore;
use vitrine_domain::error::{Error, Result};
use vitrine_domain::value_objects::{ProductRecord, RunSummary};

use crate::vector_store::BruteForceIndex;

pub use json::{read_json, write_json};
pub use npy::{Matrix, read_matrix, write_matrix};

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io_with_source(format!("Failed to create {}", parent.display()), e)
            })
        }
        _ => Ok(()),
    }
}

/// Read a vector matrix file
pub fn load_matrix(path: &Path) -> Result<Matrix> {
    let file = File::open(path)
        .map_err(|e| Error::io_with_source(format!("Failed to open {}", path.display()), e))?;
    read_matrix(&mut BufReader::new(file))
}

/// Write a vector matrix file
pub fn save_matrix(path: &Path, matrix: &Matrix) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| {
        Error::io_with_source(format!("Failed to create {}", path.display()), e)
    })?;
    write_matrix(&mut BufWriter::new(file), matrix)
}

/// Load a store from a vector matrix and a metadata array
///
/// The store dimension is taken from the matrix shape, so an empty matrix
/// still fixes it.
///
/// # Errors
/// `Persistence` when the files disagree on the number of records or a
/// file is malformed.
pub fn load_store<M: DeserializeOwned>(
    vectors_path: &Path,
    metadata_path: &Path,
) -> Result<VectorStore<M>> {
    let matrix = load_matrix(vectors_path)?;
    let metadata: Vec<M> = read_json(metadata_path)?;

    if matrix.rows() != metadata.len() {
        return Err(Error::persistence(format!(
            "{} holds {} vectors but {} holds {} records",
            vectors_path.display(),
            matrix.rows(),
            metadata_path.display(),
            metadata.len()
        )));
    }

    let index = BruteForceIndex::with_capacity(matrix.cols(), matrix.rows());
    let mut store = VectorStore::with_dimension(Box::new(index), matrix.cols())?;
    for (vector, record) in matrix.iter_rows().zip(metadata) {
        store.add(vector, record)?;
    }

    info!(
        records = store.len(),
        dimension = matrix.cols(),
        "Loaded vector store"
    );
    Ok(store)
}

/// Save a store as a vector matrix and a metadata array
///
/// # Errors
/// `Persistence` when the store is empty.
pub fn save_store<M: Serialize>(
    store: &VectorStore<M>,
    vectors_path: &Path,
    metadata_path: &Path,
) -> Result<()> {
    let Some(dimension) = store.dimension().filter(|_| !store.is_empty()) else {
        return Err(Error::persistence("No embeddings to save"));
    };

    let matrix = Matrix::from_rows(dimension, store.records().map(|(vector, _)| vector))?;
    save_matrix(vectors_path, &matrix)?;
    write_json(metadata_path, store.metadata())?;

    info!(
        records = store.len(),
        dimension,
        vectors = %vectors_path.display(),
        metadata = %metadata_path.display(),
        "Saved vector store"
    );
    Ok(())
}

/// Read the product list written by a scrape
pub fn load_products(path: &Path) -> Result<Vec<ProductRecord>> {
    read_json(path)
}

/// Write a product list
pub fn save_products(path: &Path, products: &[ProductRecord]) -> Result<()> {
    write_json(path, products)
}

/// Write the summary of an embedding pass
pub fn save_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    write_json(path, summary)
}

/// Read the summary of an embedding pass
pub fn load_summary(path: &Path) -> Result<RunSummary> {
    read_json(path)
}
