//! Classification metrics used by the checks
//!
//! Small pure helpers over label vectors. Labels compare by exact
//! equality; group membership comes from the sensitive column's per-row
//! labels.

use std::collections::BTreeMap;

/// Fraction of rows where the predicted label equals the true label
pub fn accuracy(y_true: &[f64], y_pred: &[f64]) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let correct = y_true
        .iter()
        .zip(y_pred)
        .filter(|(t, p)| t == p)
        .count();
    correct as f64 / y_true.len() as f64
}

/// Max group accuracy minus min group accuracy.
///
/// Returns 0.0 with fewer than two groups.
pub fn group_accuracy_gap(groups: &[String], y_true: &[f64], y_pred: &[f64]) -> f64 {
    let mut per_group: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for ((g, t), p) in groups.iter().zip(y_true).zip(y_pred) {
        let entry = per_group.entry(g.as_str()).or_insert((0, 0));
        entry.1 += 1;
        if t == p {
            entry.0 += 1;
        }
    }
    if per_group.len() < 2 {
        return 0.0;
    }

    let accuracies = per_group
        .values()
        .map(|&(correct, total)| correct as f64 / total as f64);
    spread(accuracies)
}

/// Equalized-odds difference, pairwise max-difference formulation.
///
/// For each group, the true-positive and false-positive rates are
/// computed with the positive class taken as the largest observed true
/// label; the result is the largest max-minus-min gap across groups over
/// both rates. Groups lacking the relevant class are skipped for that
/// rate. Larger values mean more divergent group behavior.
pub fn equalized_odds_difference(groups: &[String], y_true: &[f64], y_pred: &[f64]) -> f64 {
    let Some(positive) = y_true.iter().cloned().reduce(f64::max) else {
        return 0.0;
    };

    // Per group: (true positives, positives, false positives, negatives)
    let mut per_group: BTreeMap<&str, (usize, usize, usize, usize)> = BTreeMap::new();
    for ((g, &t), &p) in groups.iter().zip(y_true).zip(y_pred) {
        let entry = per_group.entry(g.as_str()).or_insert((0, 0, 0, 0));
        if t == positive {
            entry.1 += 1;
            if p == positive {
                entry.0 += 1;
            }
        } else {
            entry.3 += 1;
            if p == positive {
                entry.2 += 1;
            }
        }
    }

    let tpr_gap = spread(
        per_group
            .values()
            .filter(|&&(_, pos, _, _)| pos > 0)
            .map(|&(tp, pos, _, _)| tp as f64 / pos as f64),
    );
    let fpr_gap = spread(
        per_group
            .values()
            .filter(|&&(_, _, _, neg)| neg > 0)
            .map(|&(_, _, fp, neg)| fp as f64 / neg as f64),
    );

    tpr_gap.max(fpr_gap)
}

/// Max minus min over an iterator of rates, 0.0 for fewer than two values
fn spread(values: impl Iterator<Item = f64>) -> f64 {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut count = 0;
    for v in values {
        min = min.min(v);
        max = max.max(v);
        count += 1;
    }
    if count < 2 {
        0.0
    } else {
        max - min
    }
}
