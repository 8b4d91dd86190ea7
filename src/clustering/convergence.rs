/// Reports whether the assignment vector is unchanged from the previous iteration.
///
/// A missing previous vector never counts as converged. Labels are compared
/// exactly.
#[must_use]
pub fn has_converged(previous: Option<&[usize]>, current: &[usize]) -> bool {
    previous.is_some_and(|previous| previous == current)
}

/// Number of points whose label differs between two generations.
pub(crate) fn changed_labels(previous: &[usize], current: &[usize]) -> usize {
    previous
        .iter()
        .zip(current)
        .filter(|(before, after)| before != after)
        .count()
        + previous.len().abs_diff(current.len())
}
