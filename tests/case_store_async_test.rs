//! Tests for the async entry points of `CaseStore`

use kodegen_tools_testcases::{CaseData, SectionName, WriteOutcome};

mod common;

use common::{create_test_dir, create_test_store, full_case_data};

#[tokio::test]
async fn test_create_and_list_async() {
    let temp_dir = create_test_dir().unwrap();
    let store = create_test_store(temp_dir.path());

    let outcome = store
        .create_async(
            "http://ex.com/form".to_string(),
            "submit".to_string(),
            full_case_data(),
        )
        .await
        .unwrap();
    assert!(matches!(outcome, WriteOutcome::Written { .. }));

    let cases = store
        .list_async("http://ex.com/form".to_string())
        .await
        .unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].name, "submit");
    assert_eq!(cases[0].sections, full_case_data().to_sections());
}

#[tokio::test]
async fn test_create_async_skips_empty_input() {
    let temp_dir = create_test_dir().unwrap();
    let store = create_test_store(temp_dir.path());

    let outcome = store
        .create_async("http://ex.com".to_string(), "n".to_string(), CaseData::default())
        .await
        .unwrap();

    assert_eq!(outcome, WriteOutcome::Skipped);
    assert!(!temp_dir.path().join("tests").exists());
}

#[tokio::test]
async fn test_concurrent_writes_last_one_wins() {
    let temp_dir = create_test_dir().unwrap();
    let store = create_test_store(temp_dir.path());

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let data = CaseData::default().with_section(SectionName::Get, [("n", i.to_string())]);
            store
                .create_async("http://ex.com/race".to_string(), "same".to_string(), data)
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let cases = store
        .list_async("http://ex.com/race".to_string())
        .await
        .unwrap();
    assert_eq!(cases.len(), 1);
    let value = cases[0].sections.get(SectionName::Get)["n"].parse::<u32>().unwrap();
    assert!(value < 8);
}
