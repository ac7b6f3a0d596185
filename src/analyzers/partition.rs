use crate::analyzers::types::PassFailPartition;
use crate::store::RecordStore;

/// Pass mark used when none is given.
pub const DEFAULT_PASS_MARK: f64 = 40.0;

/// Splits the store's names into passed (`score >= pass_mark`) and failed,
/// each list in store order.
pub fn pass_fail(store: &RecordStore, pass_mark: f64) -> PassFailPartition {
    let (passed, failed): (Vec<_>, Vec<_>) = store.iter().partition(|r| r.score >= pass_mark);

    PassFailPartition {
        passed: passed.into_iter().map(|r| r.name.clone()).collect(),
        failed: failed.into_iter().map(|r| r.name.clone()).collect(),
    }
}
