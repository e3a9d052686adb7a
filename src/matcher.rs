mod regex;
pub use self::regex::RegexMatcher;

mod fancy;
pub use self::fancy::FancyMatcher;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Match {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

pub trait Matcher {
    /// Every non-overlapping match of the whole pattern, left to right.
    fn find_all(&self, text: &str) -> Result<Vec<Match>>;
}

#[derive(
    Debug,
    Default,
    PartialEq,
    Clone,
    Copy,
    ValueEnum,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Engine {
    Basic,
    Fancy,
    #[default]
    Adaptive,
}

#[derive(Debug, Default, Clone)]
pub struct EngineOptions {
    pub engine: Engine,
    pub size_limit: Option<usize>,
    pub backtrack_limit: Option<usize>,
}

pub fn compile(pattern: &str, options: &EngineOptions) -> Result<Box<dyn Matcher>> {
    match options.engine {
        Engine::Basic => Ok(Box::new(RegexMatcher::new(pattern, options.size_limit)?)),
        Engine::Fancy => Ok(Box::new(FancyMatcher::new(
            pattern,
            options.size_limit,
            options.backtrack_limit,
        )?)),
        Engine::Adaptive => match RegexMatcher::new(pattern, options.size_limit) {
            Ok(m) => Ok(Box::new(m)),
            Err(basic_err) => {
                FancyMatcher::new(pattern, options.size_limit, options.backtrack_limit)
                    .map(|m| Box::new(m) as Box<dyn Matcher>)
                    .map_err(|_| basic_err)
            }
        },
    }
}
