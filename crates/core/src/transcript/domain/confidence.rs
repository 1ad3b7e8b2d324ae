use super::recognition::{ItemKind, ResultItem};

/// Mean top-alternative confidence across word items, as a percentage.
///
/// Punctuation carries no confidence signal and is excluded. A word item
/// without an explicit confidence counts as 1.0. With no word items at all
/// there is no evidence of error, so the score is 100.0.
pub fn confidence_score(items: &[ResultItem]) -> f64 {
    let confidences: Vec<f64> = items
        .iter()
        .filter(|item| item.kind == ItemKind::Word)
        .map(|item| {
            item.top_alternative()
                .and_then(|a| a.confidence)
                .unwrap_or(1.0) as f64
        })
        .collect();

    if confidences.is_empty() {
        return 100.0;
    }

    confidences.iter().sum::<f64>() / confidences.len() as f64 * 100.0
}
