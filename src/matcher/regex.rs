use anyhow::Result;
use regex::{Regex, RegexBuilder};

use super::{Match, Matcher};

pub struct RegexMatcher {
    re: Regex,
}

impl RegexMatcher {
    pub fn new(regex: &str, size_limit: Option<usize>) -> Result<Self> {
        let mut builder = RegexBuilder::new(regex);
        if let Some(limit) = size_limit {
            builder.size_limit(limit);
        }
        let re = builder.build()?;
        Ok(RegexMatcher { re })
    }
}

impl Matcher for RegexMatcher {
    fn find_all(&self, text: &str) -> Result<Vec<Match>> {
        Ok(self
            .re
            .find_iter(text)
            .map(|m| Match {
                text: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("[0-9]+", "abc123def456", vec!["123", "456"])]
    #[case("foo", "foo bar foo", vec!["foo", "foo"])]
    #[case("a*", "", vec![""])]
    #[case("x*", "abc", vec!["", "", "", ""])]
    #[case("a+", "aaa", vec!["aaa"])]
    #[case("(a)(b)", "abab", vec!["ab", "ab"])]
    #[case("z", "abc", vec![])]
    fn test_find_all(#[case] regex: &str, #[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(
            RegexMatcher::new(regex, None)
                .unwrap()
                .find_all(text)
                .unwrap()
                .into_iter()
                .map(|m| m.text)
                .collect::<Vec<String>>(),
            expected
        )
    }

    #[test]
    fn test_offsets() {
        let matches = RegexMatcher::new("é+", None)
            .unwrap()
            .find_all("aéé b")
            .unwrap();
        assert_eq!(
            matches,
            vec![Match {
                text: "éé".to_string(),
                start: 1,
                end: 5
            }]
        );
    }

    #[rstest]
    #[case("(")]
    #[case("++")]
    #[case("[a-")]
    fn test_invalid(#[case] regex: &str) {
        assert!(RegexMatcher::new(regex, None).is_err())
    }

    #[test]
    fn test_size_limit() {
        assert!(RegexMatcher::new("a{100}", Some(16)).is_err());
        assert!(RegexMatcher::new("a{100}", None).is_ok());
    }
}
