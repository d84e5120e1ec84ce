//! Higher-order helpers that take their closure as the final argument,
//! so a multi-line closure body reads as the tail of the call.

pub fn with_closure<R>(body: impl FnOnce() -> R) -> R {
    body()
}

pub fn sort_descending<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    crate::sorting::sorted_by(names, |a, b| a > b)
}

pub fn map_all<T, R>(items: &[T], f: impl FnMut(&T) -> R) -> Vec<R> {
    items.iter().map(f).collect()
}
