//! Small scanning helpers shared by the extractor and the injector.

/// Index of the first item satisfying `predicate`, if any.
pub fn find_first<T, P>(items: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    items.iter().position(predicate)
}

/// Like [`find_first`], but starts scanning at `from` and returns an absolute index.
///
/// Returns `None` when `from` is past the end.
pub fn find_first_from<T, P>(items: &[T], from: usize, predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    items
        .get(from..)
        .and_then(|rest| find_first(rest, predicate))
        .map(|offset| from + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first() {
        let items = ["a", "b", "c", "b"];
        assert_eq!(find_first(&items, |s| *s == "b"), Some(1));
        assert_eq!(find_first(&items, |s| *s == "z"), None);
    }

    #[test]
    fn test_find_first_from() {
        let items = ["a", "b", "c", "b"];
        assert_eq!(find_first_from(&items, 2, |s| *s == "b"), Some(3));
        assert_eq!(find_first_from(&items, 4, |s| *s == "b"), None);
        assert_eq!(find_first_from(&items, 10, |_| true), None);
    }
}
