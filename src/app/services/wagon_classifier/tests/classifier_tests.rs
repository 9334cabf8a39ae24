//! Tests for classification table loading, lookup and persistence

use super::*;
use crate::Error;
use crate::app::services::wagon_classifier::WagonClassifier;
use crate::constants::classifications;

#[tokio::test]
async fn test_missing_store_seeds_defaults() {
    let (_temp_dir, path) = create_store_path();

    let classifier = WagonClassifier::load(&path).await.unwrap();

    assert_eq!(classifier.len(), classifications::DEFAULT_TABLE.len());
    assert_eq!(classifier.classify("BCN"), "JUMBO");
    assert_eq!(classifier.classify("BOXNHL"), "BOX");
    assert_eq!(classifier.classify("BTPGN"), "BTPG");

    // The seed write leaves a loadable store behind
    assert!(path.exists());
    let reloaded = WagonClassifier::load(&path).await.unwrap();
    assert_eq!(reloaded.len(), classifier.len());
}

#[tokio::test]
async fn test_failed_seed_write_does_not_abort() {
    let (_temp_dir, blocker) = create_store_path();
    std::fs::write(&blocker, "not a directory").unwrap();

    // The store parent is a plain file, so persisting the seed must fail
    let path = blocker.join("store.csv");
    let classifier = WagonClassifier::load(&path).await.unwrap();

    assert_eq!(classifier.len(), classifications::DEFAULT_TABLE.len());
    assert_eq!(classifier.classify("SHRN"), "SHRA");
}

#[test]
fn test_classify_identity_fallback() {
    let (_temp_dir, path) = create_store_path();
    let classifier = WagonClassifier::with_defaults(&path);

    assert_eq!(classifier.classify("ZZNEW"), "ZZNEW");
    assert_eq!(classifier.classify("MYLY"), "MYLY");
}

#[test]
fn test_classify_blank_is_empty() {
    let (_temp_dir, path) = create_store_path();
    let classifier = WagonClassifier::with_defaults(&path);

    assert_eq!(classifier.classify(""), "");
    assert_eq!(classifier.classify("   "), "");
}

#[test]
fn test_classify_trims_input() {
    let (_temp_dir, path) = create_store_path();
    let classifier = WagonClassifier::with_defaults(&path);

    assert_eq!(classifier.classify(" BCN "), "JUMBO");
    assert_eq!(classifier.classify("\tBOXN"), "BOX");
}

#[tokio::test]
async fn test_load_existing_store() {
    let (_temp_dir, path) = create_store_path();
    write_store(
        &path,
        "WAGON_TYPE,CATEGORY",
        &["BCN,JUMBO", "CUSTOM,CONT"],
    );

    let classifier = WagonClassifier::load(&path).await.unwrap();

    assert_eq!(classifier.len(), 2);
    assert_eq!(classifier.classify("CUSTOM"), "CONT");
}

#[tokio::test]
async fn test_load_store_with_reversed_columns() {
    let (_temp_dir, path) = create_store_path();
    write_store(&path, "CATEGORY,WAGON_TYPE", &["JUMBO,BCN"]);

    let classifier = WagonClassifier::load(&path).await.unwrap();

    assert_eq!(classifier.classify("BCN"), "JUMBO");
}

#[tokio::test]
async fn test_load_skips_blank_cells() {
    let (_temp_dir, path) = create_store_path();
    write_store(
        &path,
        "WAGON_TYPE,CATEGORY",
        &["BCN,JUMBO", ",CONT", "SHRA,", "  ,  "],
    );

    let classifier = WagonClassifier::load(&path).await.unwrap();

    assert_eq!(classifier.len(), 1);
    assert_eq!(classifier.classify("SHRA"), "SHRA");
}

#[tokio::test]
async fn test_corrupt_store_is_an_error() {
    let (_temp_dir, path) = create_store_path();
    write_store(&path, "TYPE,LABEL", &["BCN,JUMBO"]);

    let result = WagonClassifier::load(&path).await;

    assert!(matches!(result, Err(Error::ClassificationStore { .. })));
}

#[tokio::test]
async fn test_add_then_reload_round_trip() {
    let (_temp_dir, path) = create_store_path();
    let mut classifier = WagonClassifier::load(&path).await.unwrap();

    classifier
        .add_classifications(&[
            ("ZZNEW".to_string(), "CONT".to_string()),
            ("BCN".to_string(), "BOX".to_string()),
        ])
        .await
        .unwrap();

    let reloaded = WagonClassifier::load(&path).await.unwrap();
    assert_eq!(reloaded.classify("ZZNEW"), "CONT");

    // Overrides replace the previous mapping
    assert_eq!(reloaded.classify("BCN"), "BOX");
    assert_eq!(reloaded.len(), classifications::DEFAULT_TABLE.len() + 1);
}

#[tokio::test]
async fn test_save_writes_sorted_rows() {
    let (_temp_dir, path) = create_store_path();
    write_store(
        &path,
        "WAGON_TYPE,CATEGORY",
        &["ZULU,CONT", "ALPHA,JUMBO", "MIKE,BOX"],
    );

    let classifier = WagonClassifier::load(&path).await.unwrap();
    classifier.save().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[0], "WAGON_TYPE,CATEGORY");
    assert_eq!(lines[1], "ALPHA,JUMBO");
    assert_eq!(lines[2], "MIKE,BOX");
    assert_eq!(lines[3], "ZULU,CONT");
}
