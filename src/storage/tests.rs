use super::{GenerationStore, MemoryStore, ResultSets};

use std::str::FromStr;
use std::sync::Arc;
use std::thread;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::AccountTotal;

fn sets_with_accounts(count: usize) -> Result<ResultSets> {
    let mut chart_of_accounts = Vec::with_capacity(count);

    for index in 0..count {
        let mut account = AccountTotal::new(format!("Account {index}"), format!("{index:016}"));
        account.apply(Decimal::from_str("1.00")?)?;
        chart_of_accounts.push(account);
    }

    Ok(ResultSets {
        chart_of_accounts,
        ..ResultSets::default()
    })
}

#[test]
fn test_new_store_starts_with_empty_generation() {
    let store = MemoryStore::new();
    let snapshot = store.snapshot();

    assert!(snapshot.sets().is_empty());
    assert_eq!(snapshot.id(), 0);
}

#[test]
fn test_replace_swaps_all_sets_and_bumps_generation() -> Result<()> {
    let store = MemoryStore::new();

    let first = store.replace(sets_with_accounts(2)?);
    let second = store.replace(sets_with_accounts(5)?);

    assert!(second > first);
    assert_eq!(store.snapshot().id(), second);
    assert_eq!(store.snapshot().chart_of_accounts().len(), 5);

    Ok(())
}

#[test]
fn test_snapshot_held_across_replace_keeps_prior_generation() -> Result<()> {
    let store = MemoryStore::new();
    store.replace(sets_with_accounts(3)?);

    let held = store.snapshot();
    store.replace(sets_with_accounts(7)?);

    assert_eq!(held.chart_of_accounts().len(), 3);
    assert_eq!(store.snapshot().chart_of_accounts().len(), 7);

    Ok(())
}

#[test]
fn test_reset_clears_every_set_with_a_new_generation() -> Result<()> {
    let store = MemoryStore::new();
    let loaded = store.replace(sets_with_accounts(4)?);

    let cleared = store.reset();
    let snapshot = store.snapshot();

    assert_ne!(loaded, cleared);
    assert!(snapshot.chart_of_accounts().is_empty());
    assert!(snapshot.collections_accounts().is_empty());
    assert!(snapshot.bad_transactions().is_empty());

    Ok(())
}

#[test]
fn test_concurrent_readers_only_observe_whole_generations() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let small = sets_with_accounts(10)?;
    let large = sets_with_accounts(500)?;

    let readers: Vec<_> = (0..4).map(|_| {
        let store = store.clone();

        thread::spawn(move || {
            for _ in 0..1_000 {
                let length = store.snapshot().chart_of_accounts().len();
                assert!(length == 0 || length == 10 || length == 500);
            }
        })
    }).collect();

    for _ in 0..50 {
        store.replace(small.clone());
        store.replace(large.clone());
    }

    for reader in readers {
        reader.join().map_err(|_| anyhow::anyhow!("reader thread panicked"))?;
    }

    Ok(())
}
