//! First-present-value selection

/// Return the first present value, or `None` when every value is absent.
///
/// Only `None` is skipped: `Some(0)`, `Some(false)` and `Some("")` are
/// present and win over anything after them.
///
/// ```
/// use ferrule_value::coalesce;
///
/// assert_eq!(coalesce([None, None, Some(3), Some(4)]), Some(3));
/// assert_eq!(coalesce([None, Some(false), Some(true)]), Some(false));
/// assert_eq!(coalesce(Vec::<Option<i32>>::new()), None);
/// ```
pub fn coalesce<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().next()
}

/// Variadic form of [`coalesce`].
///
/// Arguments are evaluated left to right and evaluation stops at the first
/// present one.
///
/// ```
/// use ferrule_value::coalesce;
///
/// let configured: Option<&str> = None;
/// assert_eq!(coalesce!(configured, Some(""), Some("fallback")), Some(""));
/// assert_eq!(coalesce!(None::<u8>), None);
/// ```
#[macro_export]
macro_rules! coalesce {
    () => {
        ::core::option::Option::None
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {
        match $first {
            ::core::option::Option::Some(value) => ::core::option::Option::Some(value),
            ::core::option::Option::None => $crate::coalesce!($($rest),*),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_coalesce_first_present() {
        assert_eq!(coalesce([None, None, Some(3), Some(4)]), Some(3));
    }

    #[test]
    fn test_coalesce_all_absent() {
        assert_eq!(coalesce([None::<i32>, None, None]), None);
    }

    #[test]
    fn test_coalesce_keeps_falsy_values() {
        assert_eq!(coalesce([Some(0), Some(1), Some(2)]), Some(0));
        assert_eq!(coalesce([None, Some(false), Some(true)]), Some(false));
        assert_eq!(coalesce([None, Some(""), Some("fallback")]), Some(""));
    }

    #[test]
    fn test_coalesce_empty() {
        assert_eq!(coalesce(Vec::<Option<i32>>::new()), None);
    }

    #[test]
    fn test_macro_stops_at_first_present() {
        let evaluated = Cell::new(0);
        let tracked = |v: Option<i32>| {
            evaluated.set(evaluated.get() + 1);
            v
        };
        let result = coalesce!(tracked(None), tracked(Some(7)), tracked(Some(8)));
        assert_eq!(result, Some(7));
        assert_eq!(evaluated.get(), 2);
    }

    #[test]
    fn test_macro_empty() {
        let none: Option<i32> = coalesce!();
        assert_eq!(none, None);
    }
}
