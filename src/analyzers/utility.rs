use crate::store::RecordStore;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the median of a slice of values. Returns 0.0 for empty input.
///
/// For an even number of values this is the mean of the two middle values.
/// Any NaN in the input makes the median NaN.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    if values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Mean score across the store.
pub fn average(store: &RecordStore) -> f64 {
    mean(&store.scores())
}

/// Median score across the store.
pub fn median_score(store: &RecordStore) -> f64 {
    median(&store.scores())
}

/// Returns the name and score of the highest score, or `("", 0.0)` when empty.
///
/// Ties go to the first record in store order. A NaN score wins over any
/// number, so the first NaN record is returned when one exists.
pub fn max_score(store: &RecordStore) -> (String, f64) {
    extremum(store, |candidate, best| candidate > best)
}

/// Returns the name and score of the lowest score, or `("", 0.0)` when empty.
///
/// Ties go to the first record in store order. As with [`max_score`], the
/// first NaN record wins.
pub fn min_score(store: &RecordStore) -> (String, f64) {
    extremum(store, |candidate, best| candidate < best)
}

fn extremum(store: &RecordStore, better: impl Fn(f64, f64) -> bool) -> (String, f64) {
    let mut iter = store.iter();
    let Some(first) = iter.next() else {
        return (String::new(), 0.0);
    };

    if let Some(nan) = store.iter().find(|r| r.score.is_nan()) {
        return (nan.name.clone(), nan.score);
    }

    let best = iter.fold(first, |best, r| {
        if better(r.score, best.score) { r } else { best }
    });
    (best.name.clone(), best.score)
}
