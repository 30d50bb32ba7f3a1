//! Pattern compilers
//!
//! The cache is generic over the compiler so that hosts can plug in their own
//! pattern dialect, and tests can count compilations.

use super::types::PatternFlags;
use crate::utils::error::{ReuseError, Result};
use regex::{Regex, RegexBuilder};

/// Turns pattern text into its executable form
pub trait PatternCompiler: Send + Sync {
    /// The compiled form handed out by the cache
    type Compiled: Send + Sync;

    /// Compile `pattern` under `flags`
    ///
    /// Must return `ReuseError::PatternSyntax` when the text is rejected.
    fn compile(&self, pattern: &str, flags: PatternFlags) -> Result<Self::Compiled>;
}

/// Compiler backed by the `regex` crate
#[derive(Debug, Clone, Default)]
pub struct RegexCompiler {
    size_limit: Option<usize>,
}

impl RegexCompiler {
    /// Create a compiler with the regex crate's default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the size of a single compiled program, in bytes
    pub fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }
}

impl PatternCompiler for RegexCompiler {
    type Compiled = Regex;

    fn compile(&self, pattern: &str, flags: PatternFlags) -> Result<Regex> {
        let source = if flags.contains(PatternFlags::LITERAL) {
            regex::escape(pattern)
        } else {
            pattern.to_string()
        };

        let mut builder = RegexBuilder::new(&source);
        builder
            .case_insensitive(flags.contains(PatternFlags::CASE_INSENSITIVE))
            .multi_line(flags.contains(PatternFlags::MULTILINE))
            .dot_matches_new_line(flags.contains(PatternFlags::DOTALL))
            // Literal text must not have its whitespace stripped
            .ignore_whitespace(
                flags.contains(PatternFlags::COMMENTS) && !flags.contains(PatternFlags::LITERAL),
            );
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }

        builder.build().map_err(|e| match ReuseError::from(e) {
            ReuseError::PatternSyntax { message, .. } => {
                ReuseError::pattern_syntax(pattern, message)
            }
            other => other,
        })
    }
}
