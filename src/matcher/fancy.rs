use anyhow::Result;
use fancy_regex::{Regex, RegexBuilder};

use super::{Match, Matcher};

/// Backtracking matcher for look-around and backreferences.
pub struct FancyMatcher {
    re: Regex,
}

impl FancyMatcher {
    pub fn new(
        regex: &str,
        size_limit: Option<usize>,
        backtrack_limit: Option<usize>,
    ) -> Result<Self> {
        let mut builder = RegexBuilder::new(regex);
        if let Some(limit) = size_limit {
            builder.delegate_size_limit(limit);
        }
        if let Some(limit) = backtrack_limit {
            builder.backtrack_limit(limit);
        }
        let re = builder.build()?;
        Ok(FancyMatcher { re })
    }
}

impl Matcher for FancyMatcher {
    fn find_all(&self, text: &str) -> Result<Vec<Match>> {
        self.re
            .find_iter(text)
            .map(|m| {
                m.map(|m| Match {
                    text: m.as_str().to_string(),
                    start: m.start(),
                    end: m.end(),
                })
                .map_err(anyhow::Error::from)
            })
            .collect()
    }
}
