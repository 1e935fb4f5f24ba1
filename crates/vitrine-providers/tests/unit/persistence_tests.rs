//! Tests for store persistence

use std::io::Cursor;

use byteorder::{LittleEndian, WriteBytesExt};
use vitrine_domain::{Error, ProductRecord, RunSummary, VectorStore};
use vitrine_providers::persistence::{
    Matrix, load_products, load_store, load_summary, read_matrix, save_products, save_store,
    save_summary, write_matrix,
};
use vitrine_providers::vector_store::BruteForceIndex;

fn product(id: &str, name: &str, category: &str) -> ProductRecord {
    let mut record = ProductRecord::new(id, name, category);
    record.description = "實木 · solid oak".to_string();
    record.image_url = Some(format!("https://shop.example/upload/products/{id}.jpg"));
    record.detail_url = format!("https://shop.example/products_detail/{id}");
    record
}

fn catalog_store() -> VectorStore<ProductRecord> {
    let mut store = VectorStore::new(Box::new(BruteForceIndex::new()));
    store
        .add(&[1.0, 0.0, 0.25], product("1", "chair-A", "Chairs"))
        .expect("add");
    store
        .add(&[0.0, 1.0, -0.5], product("2", "table-B", "Tables"))
        .expect("add");
    let mut degraded = product("3", "stool-C", "Seating");
    degraded.embedding_failed = true;
    store.add(&[0.0, 0.0, 0.0], degraded).expect("add");
    store
}

#[test]
fn test_round_trip_preserves_search_results() {
    let dir = tempfile::tempdir().expect("tempdir");
    let vectors = dir.path().join("data/embeddings.npy");
    let products = dir.path().join("data/products.json");
    let original = catalog_store();

    save_store(&original, &vectors, &products).expect("save");
    let reloaded: VectorStore<ProductRecord> = load_store(&vectors, &products).expect("load");

    assert_eq!(reloaded.len(), original.len());
    assert_eq!(reloaded.dimension(), Some(3));
    assert_eq!(reloaded.metadata(), original.metadata());
    for query in [[1.0, 0.0, 0.0], [0.2, 0.9, -0.1], [-1.0, -1.0, 1.0]] {
        let before = original.search(&query, 3).expect("search");
        let after = reloaded.search(&query, 3).expect("search");
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(&after) {
            assert_eq!(b.metadata, a.metadata);
            assert!((b.score - a.score).abs() < 1e-6);
        }
    }
}

#[test]
fn test_metadata_file_keeps_unicode_and_degraded_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let vectors = dir.path().join("embeddings.npy");
    let products = dir.path().join("products.json");

    save_store(&catalog_store(), &vectors, &products).expect("save");
    let text = std::fs::read_to_string(&products).expect("read");

    assert!(text.contains("實木 · solid oak"));
    assert_eq!(text.matches("\"embedding_failed\": true").count(), 1);
}

#[test]
fn test_matrix_file_layout() {
    let matrix = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("matrix");
    let mut bytes = Vec::new();
    write_matrix(&mut bytes, &matrix).expect("write");

    assert_eq!(&bytes[..6], b"\x93NUMPY");
    assert_eq!(&bytes[6..8], &[1, 0]);
    let header_len = usize::from(u16::from_le_bytes([bytes[8], bytes[9]]));
    assert_eq!((10 + header_len) % 64, 0);
    let header = std::str::from_utf8(&bytes[10..10 + header_len]).expect("ascii header");
    assert!(header.starts_with("{'descr': '<f4', 'fortran_order': False, 'shape': (2, 2), }"));
    assert!(header.ends_with('\n'));
    assert_eq!(bytes.len(), 10 + header_len + 4 * 4);
    assert_eq!(&bytes[10 + header_len..10 + header_len + 4], &1.0f32.to_le_bytes());
}

fn npy_v2(header: &str, values: &[f32]) -> Vec<u8> {
    let mut bytes = b"\x93NUMPY\x02\x00".to_vec();
    let header = format!("{header}\n");
    bytes
        .write_u32::<LittleEndian>(u32::try_from(header.len()).expect("len"))
        .expect("write");
    bytes.extend_from_slice(header.as_bytes());
    for v in values {
        bytes.write_f32::<LittleEndian>(*v).expect("write");
    }
    bytes
}

#[test]
fn test_reads_version_two_headers() {
    let bytes = npy_v2(
        "{'descr': '<f4', 'fortran_order': False, 'shape': (1, 3), }",
        &[0.5, 0.25, 0.125],
    );

    let matrix = read_matrix(&mut Cursor::new(bytes)).expect("read");

    assert_eq!((matrix.rows(), matrix.cols()), (1, 3));
    assert_eq!(matrix.data(), &[0.5, 0.25, 0.125]);
}

#[test]
fn test_rejects_unsupported_matrices() {
    let cases = [
        npy_v2("{'descr': '<f8', 'fortran_order': False, 'shape': (1, 1), }", &[0.0, 0.0]),
        npy_v2("{'descr': '<f4', 'fortran_order': True, 'shape': (1, 1), }", &[0.0]),
        npy_v2("{'descr': '<f4', 'fortran_order': False, 'shape': (2,), }", &[0.0, 0.0]),
        npy_v2("{'descr': '<f4', 'fortran_order': False, 'shape': (2, 2), }", &[0.0; 3]),
        b"not a matrix at all".to_vec(),
    ];

    for bytes in cases {
        let err = read_matrix(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, Error::Persistence { .. }), "{err}");
    }
}

fn npy_v1(header: &str, body: &[u8]) -> Vec<u8> {
    let mut bytes = b"\x93NUMPY\x01\x00".to_vec();
    let header = format!("{header}\n");
    bytes
        .write_u16::<LittleEndian>(u16::try_from(header.len()).expect("len"))
        .expect("write");
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(body);
    bytes
}

#[test]
fn test_huge_shape_over_short_body_is_truncated() {
    let bytes = npy_v1(
        "{'descr': '<f4', 'fortran_order': False, 'shape': (100000000000, 100000), }",
        &[0u8; 16],
    );

    let err = read_matrix(&mut bytes.as_slice()).unwrap_err();

    assert!(matches!(err, Error::Persistence { .. }), "{err}");
    assert!(err.to_string().contains("truncated"), "{err}");
}

#[test]
fn test_huge_header_length_over_short_stream_is_truncated() {
    let mut bytes = b"\x93NUMPY\x02\x00".to_vec();
    bytes.write_u32::<LittleEndian>(u32::MAX).expect("write");
    bytes.extend_from_slice(b"{'descr': '<f4'");

    let err = read_matrix(&mut bytes.as_slice()).unwrap_err();

    assert!(err.to_string().contains("header is truncated"), "{err}");
}

#[test]
fn test_trailing_bytes_after_data_are_rejected() {
    let bytes = npy_v1(
        "{'descr': '<f4', 'fortran_order': False, 'shape': (1, 2), }",
        &[0u8; 9],
    );

    let err = read_matrix(&mut bytes.as_slice()).unwrap_err();

    assert!(err.to_string().contains("Unexpected bytes"), "{err}");
}

#[test]
fn test_row_count_mismatch_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let vectors = dir.path().join("embeddings.npy");
    let products = dir.path().join("products.json");
    save_store(&catalog_store(), &vectors, &products).expect("save");
    save_products(&products, &[product("1", "chair-A", "Chairs")]).expect("overwrite");

    let err = load_store::<ProductRecord>(&vectors, &products).unwrap_err();

    assert!(matches!(err, Error::Persistence { .. }));
}

#[test]
fn test_saving_empty_store_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store: VectorStore<ProductRecord> =
        VectorStore::with_dimension(Box::new(BruteForceIndex::new()), 4).expect("store");

    let err = save_store(
        &store,
        &dir.path().join("embeddings.npy"),
        &dir.path().join("products.json"),
    )
    .unwrap_err();

    assert!(err.to_string().contains("No embeddings to save"));
}

#[test]
fn test_products_and_summary_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let products_path = dir.path().join("products.json");
    let summary_path = dir.path().join("embeddings_metadata.json");
    let products = vec![product("1", "chair-A", "Chairs"), product("2", "table-B", "Tables")];
    let summary = RunSummary {
        total_products: 2,
        successful_embeddings: 1,
        failed_products: vec!["2".to_string()],
        embedding_dimension: 1024,
        model_id: "amazon.titan-embed-image-v1".to_string(),
        generated_at: None,
    };

    save_products(&products_path, &products).expect("save products");
    save_summary(&summary_path, &summary).expect("save summary");

    assert_eq!(load_products(&products_path).expect("load products"), products);
    assert_eq!(load_summary(&summary_path).expect("load summary"), summary);
}
