//! Tests for dataset handling

use super::*;
use rand::SeedableRng;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_file(ext: &str, content: &str) -> std::path::PathBuf {
    let temp = NamedTempFile::new().unwrap();
    let path = temp.path().with_extension(ext);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    // Keep only the renamed path alive
    temp.close().ok();
    path
}

#[test]
fn test_load_csv_infers_types() {
    let path = write_file("csv", "age,gender,income\n25,male,40000\n31,female,52000\n");
    let dataset = load_dataset(&path).unwrap();

    assert_eq!(dataset.n_rows(), 2);
    assert_eq!(dataset.columns().len(), 3);
    assert!(dataset.columns()[0].is_numeric());
    assert!(!dataset.columns()[1].is_numeric());
    assert!(dataset.columns()[2].is_numeric());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_csv_ragged_row_rejected() {
    let path = write_file("csv", "a,b\n1,2\n3\n");
    let result = load_dataset(&path);
    assert!(matches!(result, Err(crate::Error::UnsupportedFormat(_))));
    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_csv_empty_rejected() {
    let path = write_file("csv", "");
    assert!(load_dataset(&path).is_err());
    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_json_records() {
    let path = write_file(
        "json",
        r#"[{"age": 25, "gender": "male", "label": 1},
            {"age": 31, "gender": "female", "label": 0}]"#,
    );
    let dataset = load_dataset(&path).unwrap();

    assert_eq!(dataset.n_rows(), 2);
    let names: Vec<&str> = dataset.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["age", "gender", "label"]);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_json_missing_field_rejected() {
    let path = write_file("json", r#"[{"a": 1, "b": 2}, {"a": 3}]"#);
    assert!(load_dataset(&path).is_err());
    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_unsupported_extension() {
    let path = write_file("parquet", "whatever");
    let result = load_dataset(&path);
    assert!(matches!(result, Err(crate::Error::UnsupportedFormat(_))));
    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_no_extension() {
    let result = load_dataset("dataset_without_extension");
    assert!(matches!(result, Err(crate::Error::UnsupportedFormat(_))));
}

#[test]
fn test_dataset_requires_two_columns() {
    let result = Dataset::new(vec![Column::numeric("only", vec![1.0])]);
    assert!(result.is_err());
}

#[test]
fn test_dataset_rejects_unequal_lengths() {
    let result = Dataset::new(vec![
        Column::numeric("a", vec![1.0, 2.0]),
        Column::numeric("b", vec![1.0]),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_split_target_positional() {
    let dataset = Dataset::new(vec![
        Column::numeric("age", vec![25.0, 31.0]),
        Column::categorical("gender", vec!["male".into(), "female".into()]),
        Column::numeric("label", vec![1.0, 0.0]),
    ])
    .unwrap();

    let (features, y_true) = dataset.split_target().unwrap();
    assert_eq!(features.n_columns(), 2);
    assert_eq!(features.columns()[1].name, "gender");
    assert_eq!(y_true, vec![1.0, 0.0]);
}

#[test]
fn test_split_target_categorical_rejected() {
    let dataset = Dataset::new(vec![
        Column::numeric("age", vec![25.0]),
        Column::categorical("label", vec!["yes".into()]),
    ])
    .unwrap();

    let result = dataset.split_target();
    assert!(matches!(result, Err(crate::Error::UnsupportedFormat(_))));
}

#[test]
fn test_category_shares() {
    let col = Column::categorical(
        "city",
        vec!["a".into(), "a".into(), "b".into(), "a".into()],
    );
    let shares = col.category_shares().unwrap();
    assert_eq!(shares.len(), 2);
    assert!((shares[0].1 - 0.75).abs() < 1e-12);
    assert!((shares[1].1 - 0.25).abs() < 1e-12);

    assert!(Column::numeric("age", vec![1.0]).category_shares().is_none());
}

#[test]
fn test_to_matrix_encodes_categoricals() {
    let dataset = Dataset::new(vec![
        Column::numeric("x", vec![1.5, 2.5]),
        Column::categorical("g", vec!["m".into(), "f".into()]),
        Column::numeric("y", vec![0.0, 1.0]),
    ])
    .unwrap();
    let (features, _) = dataset.split_target().unwrap();

    let m = features.to_matrix();
    assert_eq!(m.shape(), &[2, 2]);
    assert!((m[[0, 0]] - 1.5).abs() < 1e-12);
    // Sorted distinct ["f", "m"]: m -> 1, f -> 0
    assert!((m[[0, 1]] - 1.0).abs() < 1e-12);
    assert!((m[[1, 1]] - 0.0).abs() < 1e-12);
}

#[test]
fn test_shuffle_preserves_multiset() {
    let dataset = Dataset::new(vec![
        Column::numeric("x", (0..50).map(f64::from).collect()),
        Column::numeric("y", vec![0.0; 50]),
    ])
    .unwrap();
    let (features, _) = dataset.split_target().unwrap();

    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let shuffled = features.with_shuffled_column("x", &mut rng);

    let ColumnValues::Numeric(original) = &features.columns()[0].values else {
        panic!("expected numeric column");
    };
    let ColumnValues::Numeric(permuted) = &shuffled.columns()[0].values else {
        panic!("expected numeric column");
    };

    let mut a = original.clone();
    let mut b = permuted.clone();
    a.sort_by(f64::total_cmp);
    b.sort_by(f64::total_cmp);
    assert_eq!(a, b);
    assert_ne!(original, permuted);
}

#[test]
fn test_gaussian_noise_small_and_numeric_only() {
    let dataset = Dataset::new(vec![
        Column::numeric("x", vec![1.0; 100]),
        Column::categorical("g", vec!["m".to_string(); 100]),
        Column::numeric("y", vec![0.0; 100]),
    ])
    .unwrap();
    let (features, _) = dataset.split_target().unwrap();

    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let noisy = features.with_gaussian_noise(0.01, &mut rng);

    let ColumnValues::Numeric(values) = &noisy.columns()[0].values else {
        panic!("expected numeric column");
    };
    assert!(values.iter().all(|v| (v - 1.0).abs() < 0.1));
    assert!(values.iter().any(|v| (v - 1.0).abs() > 1e-9));

    // Categorical column untouched
    assert_eq!(noisy.columns()[1], features.columns()[1]);
}
