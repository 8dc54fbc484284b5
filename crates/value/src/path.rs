//! Key paths
//!
//! Supports dotted/bracketed syntax: `user.name`, `items[0]`,
//! `matrix[1][-2].cell`. Bracketed integers become [`Key::Integer`], every
//! other segment becomes [`Key::Text`].
//!
//! Text keys that dotted syntax cannot spell (empty, or containing `.` or
//! `[`) are written quoted in brackets: `[""]`, `["a.b"]`. Inside quotes,
//! `\"` and `\\` escape a quote and a backslash. [`Path`]'s `Display`
//! output uses this form where needed and parses back to the same keys.

use core::fmt::{self, Display, Formatter, Write as _};
use core::iter::Peekable;
use core::str::{Chars, FromStr};

use crate::error::PathError;
use crate::key::Key;

/// Parsing limits for [`Path::parse_with`]
///
/// # Example
///
/// ```
/// use ferrule_value::PathLimits;
///
/// let limits = PathLimits::default();
/// assert_eq!(limits.max_segments, 100);
///
/// let strict = PathLimits::strict();
/// assert_eq!(strict.max_segments, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathLimits {
    /// Maximum number of segments
    pub max_segments: usize,

    /// Maximum length of a bracketed index, sign included
    pub max_index_len: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_segments: 100,
            max_index_len: 20, // i64::MIN fits
        }
    }
}

impl PathLimits {
    /// Limits for untrusted path text
    pub const fn strict() -> Self {
        Self {
            max_segments: 32,
            max_index_len: 10,
        }
    }

    /// Limits for trusted, generated paths
    pub const fn permissive() -> Self {
        Self {
            max_segments: 1_000,
            max_index_len: 20,
        }
    }
}

/// Parsed sequence of keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    keys: Vec<Key>,
}

impl Path {
    /// Parse with [`PathLimits::default`].
    ///
    /// ```
    /// use ferrule_value::{Key, Path};
    ///
    /// let path = Path::parse("data[0].value")?;
    /// assert_eq!(path.keys(), &[Key::from("data"), Key::from(0), Key::from("value")]);
    /// # Ok::<(), ferrule_value::PathError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, PathError> {
        Self::parse_with(text, &PathLimits::default())
    }

    /// Parse under explicit limits
    pub fn parse_with(text: &str, limits: &PathLimits) -> Result<Self, PathError> {
        let mut parser = Parser {
            text,
            limits,
            keys: Vec::new(),
        };
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '.' => parser.flush(&mut current)?,
                '[' => {
                    parser.flush(&mut current)?;

                    if chars.next_if_eq(&'"').is_some() {
                        parser.push_quoted(&mut chars)?;
                        continue;
                    }

                    let mut index = String::new();
                    let mut closed = false;
                    for ch in chars.by_ref() {
                        if ch == ']' {
                            closed = true;
                            break;
                        }
                        index.push(ch);
                    }
                    if !closed {
                        return Err(PathError::Unclosed(text.to_string()));
                    }
                    parser.push_index(index)?;
                }
                _ => current.push(ch),
            }
        }
        parser.flush(&mut current)?;

        Ok(Self { keys: parser.keys })
    }

    /// Keys in traversal order
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Consume into the key list
    pub fn into_keys(self) -> Vec<Key> {
        self.keys
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when the path has no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Append a key
    pub fn push(&mut self, key: impl Into<Key>) {
        self.keys.push(key.into());
    }

    /// Iterate over the keys
    pub fn iter(&self) -> core::slice::Iter<'_, Key> {
        self.keys.iter()
    }
}

struct Parser<'a> {
    text: &'a str,
    limits: &'a PathLimits,
    keys: Vec<Key>,
}

impl Parser<'_> {
    fn push(&mut self, key: Key) -> Result<(), PathError> {
        self.keys.push(key);
        if self.keys.len() > self.limits.max_segments {
            return Err(PathError::LimitExceeded {
                what: "path segments",
                limit: self.limits.max_segments,
                actual: self.keys.len(),
            });
        }
        Ok(())
    }

    fn flush(&mut self, current: &mut String) -> Result<(), PathError> {
        if current.is_empty() {
            return Ok(());
        }
        self.push(Key::Text(core::mem::take(current)))
    }

    /// Quoted text key after `["`, through the closing `"]`
    fn push_quoted(&mut self, chars: &mut Peekable<Chars<'_>>) -> Result<(), PathError> {
        let mut name = String::new();
        while let Some(ch) = chars.next() {
            match ch {
                '\\' => match chars.next() {
                    Some(escaped) => name.push(escaped),
                    None => break,
                },
                '"' => {
                    return match chars.next() {
                        Some(']') => self.push(Key::Text(name)),
                        _ => Err(PathError::Unclosed(self.text.to_string())),
                    };
                }
                _ => name.push(ch),
            }
        }
        Err(PathError::Unclosed(self.text.to_string()))
    }

    fn push_index(&mut self, index: String) -> Result<(), PathError> {
        if index.len() > self.limits.max_index_len {
            return Err(PathError::LimitExceeded {
                what: "path index length",
                limit: self.limits.max_index_len,
                actual: index.len(),
            });
        }
        match index.trim().parse::<i64>() {
            Ok(i) => self.push(Key::Integer(i)),
            Err(_) => Err(PathError::InvalidIndex {
                path: self.text.to_string(),
                index,
            }),
        }
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn write_quoted(f: &mut Formatter<'_>, name: &str) -> fmt::Result {
    f.write_str("[\"")?;
    for ch in name.chars() {
        if matches!(ch, '"' | '\\') {
            f.write_char('\\')?;
        }
        f.write_char(ch)?;
    }
    f.write_str("\"]")
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (position, key) in self.keys.iter().enumerate() {
            match key {
                Key::Text(name) if name.is_empty() || name.contains(['.', '[']) => {
                    write_quoted(f, name)?;
                }
                Key::Text(name) if position == 0 => f.write_str(name)?,
                Key::Text(name) => write!(f, ".{name}")?,
                Key::Integer(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Self { keys }
    }
}

impl<K: Into<Key>> FromIterator<K> for Path {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for Path {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = core::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Build a `Vec<Key>` from mixed text and integer literals.
///
/// ```
/// use ferrule_value::{path, Key};
///
/// assert_eq!(path!["items", 0, "id"], vec![Key::from("items"), Key::from(0), Key::from("id")]);
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        ::std::vec::Vec::<$crate::Key>::new()
    };
    ($($key:expr),+ $(,)?) => {
        ::std::vec![$($crate::Key::from($key)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn keys(text: &str) -> Vec<Key> {
        Path::parse(text).unwrap().into_keys()
    }

    #[test]
    fn test_parse_path_simple() {
        assert_eq!(keys("user"), vec![Key::from("user")]);
    }

    #[test]
    fn test_parse_path_nested() {
        assert_eq!(keys("user.name"), vec![Key::from("user"), Key::from("name")]);
    }

    #[test]
    fn test_parse_path_index() {
        assert_eq!(keys("items[0]"), vec![Key::from("items"), Key::from(0)]);
    }

    #[test]
    fn test_parse_path_complex() {
        assert_eq!(
            keys("data[0].value"),
            vec![Key::from("data"), Key::from(0), Key::from("value")]
        );
    }

    #[test]
    fn test_parse_path_multiple_indices() {
        assert_eq!(
            keys("matrix[0][-1]"),
            vec![Key::from("matrix"), Key::from(0), Key::from(-1)]
        );
    }

    #[test]
    fn test_parse_path_skips_empty_segments() {
        assert_eq!(keys("a..b."), vec![Key::from("a"), Key::from("b")]);
        assert_eq!(keys(""), Vec::<Key>::new());
    }

    #[rstest]
    #[case("items[x]")]
    #[case("items[]")]
    #[case("items[1.5]")]
    fn test_parse_path_invalid_index(#[case] text: &str) {
        assert!(matches!(
            Path::parse(text),
            Err(PathError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_parse_path_unclosed() {
        assert_eq!(
            Path::parse("items[0"),
            Err(PathError::Unclosed("items[0".to_string()))
        );
    }

    #[test]
    fn test_parse_path_segment_limit() {
        let text = vec!["a"; 101].join(".");
        assert_eq!(
            Path::parse(&text),
            Err(PathError::LimitExceeded {
                what: "path segments",
                limit: 100,
                actual: 101,
            })
        );
        assert!(Path::parse_with(&text, &PathLimits::permissive()).is_ok());
    }

    #[test]
    fn test_parse_path_index_length_limit() {
        let err = Path::parse_with("a[12345678901]", &PathLimits::strict()).unwrap_err();
        assert!(matches!(
            err,
            PathError::LimitExceeded {
                what: "path index length",
                ..
            }
        ));
    }

    #[test]
    fn test_display_round_trips_simple_paths() {
        let path = Path::parse("a.b[1][2].c").unwrap();
        assert_eq!(path.to_string(), "a.b[1][2].c");
        let path: Path = [Key::from(0), Key::from("x")].into_iter().collect();
        assert_eq!(path.to_string(), "[0].x");
    }

    #[test]
    fn test_parse_quoted_keys() {
        assert_eq!(keys(r#"[""].b"#), vec![Key::from(""), Key::from("b")]);
        assert_eq!(
            keys(r#"cfg["a.b"]["x[0]"].c"#),
            vec![Key::from("cfg"), Key::from("a.b"), Key::from("x[0]"), Key::from("c")]
        );
        assert_eq!(keys(r#"["say \"hi\" \\ bye"]"#), vec![Key::from(r#"say "hi" \ bye"#)]);
    }

    #[rstest]
    #[case(r#"a[""#)]
    #[case(r#"a["b"#)]
    #[case(r#"a["b"x]"#)]
    fn test_parse_quoted_key_unclosed(#[case] text: &str) {
        assert_eq!(Path::parse(text), Err(PathError::Unclosed(text.to_string())));
    }

    #[rstest]
    #[case(path!["", "b"], r#"[""].b"#)]
    #[case(path!["a.b", 0, "c"], r#"["a.b"][0].c"#)]
    #[case(path!["x", "y[1]"], r#"x["y[1]"]"#)]
    #[case(path!["q\"\\"], r#"["q\"\\"]"#)]
    #[case(path!["plain", -1], "plain[-1]")]
    fn test_display_round_trips_awkward_keys(#[case] keys: Vec<Key>, #[case] shown: &str) {
        let path = Path::from(keys.clone());
        assert_eq!(path.to_string(), shown);
        assert_eq!(Path::parse(shown).unwrap().into_keys(), keys);
    }
}
