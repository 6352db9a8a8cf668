use std::cmp::Ordering;
use std::collections::HashMap;

/// Assigns 1-based ranks by pace achievement rate, best first.
///
/// Equal rates are ordered by city code so the ranking is stable between runs.
pub fn rank_by_achievement<'a, I>(entries: I) -> HashMap<String, i32>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut sorted: Vec<(&str, f64)> = entries.into_iter().collect();
    sorted.sort_by(|a, b| compare_achievement(a.1, b.1).then_with(|| a.0.cmp(b.0)));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, (code, _))| (code.to_string(), i as i32 + 1))
        .collect()
}

/// Descending order of achievement rates.
pub fn compare_achievement(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
