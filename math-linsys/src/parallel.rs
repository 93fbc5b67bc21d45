//! Parallel utilities with feature-gated implementations
//!
//! Uses rayon when the `parallel` feature is enabled, with a sequential
//! fallback otherwise. Both variants preserve input order.

/// Parallel map over a slice
#[cfg(feature = "parallel")]
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    data.par_iter().map(f).collect()
}

/// Sequential map (fallback when parallel is not available)
#[cfg(not(feature = "parallel"))]
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    data.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_map_keeps_order() {
        let data: Vec<usize> = (0..100).collect();
        let result = parallel_map(&data, |x| x * 2);
        assert_eq!(result, (0..100).map(|x| x * 2).collect::<Vec<_>>());
    }
}
