use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

///
/// Path
///
/// Dotted field address, e.g. `address.city`.
///
/// Construction never validates; a path that names nothing fails when it
/// is applied. There is no escape for the delimiter, so a field whose
/// identifier contains `.` cannot be addressed.
///

#[derive(
    Clone, Debug, Default, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct Path(String);

impl Path {
    pub const DELIMITER: char = '.';

    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split on the delimiter and upper-case the first character of each
    /// segment. An empty path yields a single empty token.
    #[must_use]
    pub fn tokenize(&self) -> Vec<String> {
        self.0.split(Self::DELIMITER).map(upper_first).collect()
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Upper-case the first code point of `segment`, leaving the rest as is.
#[must_use]
pub fn upper_first(segment: &str) -> String {
    let mut chars = segment.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tokenize_upper_cases_first_letter_only() {
        let path = Path::from("address.cityName");

        assert_eq!(path.tokenize(), vec!["Address", "CityName"]);
    }

    #[test]
    fn tokenize_leaves_already_upper_segments_untouched() {
        assert_eq!(Path::from("Name").tokenize(), vec!["Name"]);
        assert_eq!(Path::from("nAme").tokenize(), vec!["NAme"]);
    }

    #[test]
    fn empty_path_is_one_empty_token() {
        assert_eq!(Path::default().tokenize(), vec![String::new()]);
    }

    #[test]
    fn empty_segments_survive_tokenizing() {
        assert_eq!(Path::from("a..b").tokenize(), vec!["A", "", "B"]);
        assert_eq!(Path::from(".a").tokenize(), vec!["", "A"]);
    }

    #[test]
    fn upper_first_is_multibyte_safe() {
        assert_eq!(upper_first("élan"), "Élan");
        assert_eq!(upper_first("ßtraße"), "SStraße");
        assert_eq!(upper_first("9lives"), "9lives");
    }

    #[test]
    fn path_displays_as_given() {
        let path = Path::from("address.city");

        assert_eq!(path.to_string(), "address.city");
        assert_eq!(&*path, "address.city");
    }

    proptest! {
        #[test]
        fn token_count_matches_delimiter_count(raw in "[a-zA-Z0-9_.]{0,32}") {
            let path = Path::new(raw.clone());
            let dots = raw.matches(Path::DELIMITER).count();

            prop_assert_eq!(path.tokenize().len(), dots + 1);
        }

        #[test]
        fn tokens_differ_from_segments_only_in_first_char(raw in "[a-z][a-zA-Z]{0,8}(\\.[a-z][a-zA-Z]{0,8}){0,4}") {
            let path = Path::new(raw.clone());

            for (token, segment) in path.tokenize().iter().zip(raw.split('.')) {
                prop_assert_eq!(&token[1..], &segment[1..]);
                prop_assert!(token.starts_with(|c: char| c.is_ascii_uppercase()));
            }
        }
    }
}
