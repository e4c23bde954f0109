/// Order in which partial products are summed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reduction {
    /// Left fold: ((p0 + p1) + p2) + ...
    #[default]
    Sequential,
    /// Pairwise rounds: depth ceil(log2(len)).
    Tree,
}

/// Combines `items` into one value, or returns None if `items` is empty.
/// `combine` must be associative for both strategies to agree.
pub fn reduce<T, E>(
    items: Vec<T>,
    strategy: Reduction,
    mut combine: impl FnMut(&T, &T) -> Result<T, E>,
) -> Result<Option<T>, E> {
    match strategy {
        Reduction::Sequential => {
            let mut iter = items.into_iter();
            let Some(first) = iter.next() else {
                return Ok(None);
            };
            iter.try_fold(first, |acc, x| combine(&acc, &x)).map(Some)
        }
        Reduction::Tree => {
            let mut level: Vec<T> = items;
            while level.len() > 1 {
                let mut next: Vec<T> = Vec::with_capacity(level.len().div_ceil(2));
                let mut iter = level.into_iter();
                while let Some(a) = iter.next() {
                    match iter.next() {
                        Some(b) => next.push(combine(&a, &b)?),
                        None => next.push(a),
                    }
                }
                level = next;
            }
            Ok(level.pop())
        }
    }
}
