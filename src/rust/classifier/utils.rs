/// Tolerance when deciding whether raw scores already sum to one.
const DISTRIBUTION_TOLERANCE: f32 = 1e-3;

pub(crate) fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|x| x / sum).collect()
}

/// True when `scores` are non-negative and sum to one, i.e. the model already
/// ends in a softmax layer.
pub(crate) fn is_distribution(scores: &[f32]) -> bool {
    let sum: f32 = scores.iter().sum();
    scores.iter().all(|&x| x >= 0.0) && (sum - 1.0).abs() < DISTRIBUTION_TOLERANCE
}

/// Index of the largest score. Ties resolve to the lowest index.
pub(crate) fn argmax(scores: &[f32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f32)>, (i, &x)| match best {
            Some((_, b)) if b >= x => best,
            _ => Some((i, x)),
        })
        .map(|(i, _)| i)
}

/// Outcome of comparing a model's declared tensor shape with the expected one.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum DimCheck {
    Ok,
    RankMismatch,
    /// Axis whose static size disagrees
    DimMismatch(usize),
}

/// Compares declared dimensions with `expected`. Dynamic axes (declared as
/// zero or negative) match anything.
pub(crate) fn check_static_dims(declared: &[i64], expected: &[usize]) -> DimCheck {
    if declared.len() != expected.len() {
        return DimCheck::RankMismatch;
    }
    declared
        .iter()
        .zip(expected)
        .position(|(&d, &e)| d > 0 && d as usize != e)
        .map_or(DimCheck::Ok, DimCheck::DimMismatch)
}
