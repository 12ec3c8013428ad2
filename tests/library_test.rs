use std::fs;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use transaction_classifier::config::{EngineConfig, UploadPolicy};
use transaction_classifier::engine::IngestEngine;
use transaction_classifier::query::{PageRequest, QueryService};
use transaction_classifier::storage::{GenerationStore, MemoryStore};
use transaction_classifier::types::ResultSetName;

#[tokio::test]
async fn test_library_uploads_queries_and_resets() -> Result<()> {
    let config = EngineConfig::default().with_upload_policy(UploadPolicy::Queue);
    let store = Arc::new(MemoryStore::new());
    let queries = QueryService::new(store.clone(), &config);
    let engine = IngestEngine::new(store.clone(), config);

    let summary = engine.upload(Some("fixed.csv"), fs::read("samples/fixed.csv")?).await?;
    assert_eq!(summary.good_records, 5);
    assert_eq!(summary.bad_records, 2);
    assert_eq!(summary.sizes.collections_accounts, 2);

    let response = queries.query(ResultSetName::ChartOfAccounts, &PageRequest::new(2, 1).with_search("A"));
    let page = response.accounts().ok_or_else(|| anyhow!("expected an accounts page"))?;
    assert_eq!(page.total_items, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items[0].account_name, "Carol");

    let bad = queries.query(ResultSetName::BadTransactions, &PageRequest::default());
    assert_eq!(bad.bad_transactions().map(|page| page.items.len()), Some(2));

    let reset = engine.reset().await?;
    assert_eq!(reset.message, "System reset successfully");
    assert!(reset.generation > summary.generation);
    assert!(store.snapshot().sets().is_empty());

    for set in ResultSetName::ALL {
        let response = queries.query(set, &PageRequest::default());
        assert!(response.is_empty());
        assert_eq!(response.total_pages(), 1);
    }

    Ok(())
}
