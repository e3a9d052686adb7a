use crate::error::{MatchEngineError, PatternCompileError};
use crate::matcher::{self, EngineOptions, Match, Matcher};
use serde::Serialize;
use std::time::Instant;
use tap::{Tap, TapFallible};
use tracing::{debug, warn};

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MatchGroup {
    pub pattern: String,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub groups: Vec<MatchGroup>,
    pub elapsed_seconds: f64,
    pub error: Option<MatchEngineError>,
}

impl ScanReport {
    /// All matched substrings, grouped in pattern order.
    pub fn matches(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.matches.iter().map(|m| m.text.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.matches.is_empty())
    }
}

pub struct PatternScanner {
    text: String,
    patterns: Vec<String>,
    options: EngineOptions,
}

impl PatternScanner {
    pub fn new(text: impl Into<String>, patterns: Vec<String>) -> Self {
        PatternScanner {
            text: text.into(),
            patterns,
            options: EngineOptions::default(),
        }
    }

    pub fn with_options(self, options: EngineOptions) -> Self {
        PatternScanner { options, ..self }
    }

    pub fn scan(&self) -> Result<ScanReport, PatternCompileError> {
        let compiled = self.compile()?;
        let start = Instant::now();
        let mut groups = Vec::with_capacity(compiled.len());
        let mut error = None;

        for (index, (pattern, matcher)) in self.patterns.iter().zip(compiled.iter()).enumerate() {
            match matcher.find_all(&self.text) {
                Ok(matches) => groups.push(MatchGroup {
                    pattern: pattern.clone(),
                    matches,
                }),
                Err(e) => {
                    warn!(index, pattern = pattern.as_str(), "match engine error: {}", e);
                    error = Some(MatchEngineError {
                        index,
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    });
                    break;
                }
            }
        }

        Ok(ScanReport {
            groups,
            elapsed_seconds: start.elapsed().as_secs_f64(),
            error,
        }
        .tap(|r| {
            debug!(
                patterns = self.patterns.len(),
                matches = r.matches().count(),
                elapsed = r.elapsed_seconds,
                "scan finished"
            )
        }))
    }

    fn compile(&self) -> Result<Vec<Box<dyn Matcher>>, PatternCompileError> {
        self.patterns
            .iter()
            .enumerate()
            .map(|(index, pattern)| {
                matcher::compile(pattern, &self.options)
                    .map_err(|e| PatternCompileError {
                        index,
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })
                    .tap_ok(|_| debug!(index, engine = %self.options.engine, "compiled {}", pattern))
            })
            .collect()
    }
}
