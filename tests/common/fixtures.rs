//! Test fixtures
//!
//! Real components with instrumentation attached, not mocks.

use regex::Regex;
use reuse_rs::{PatternCompiler, PatternFlags, RegexCompiler, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Regex compiler that counts how often it is invoked
#[derive(Default)]
pub struct CountingCompiler {
    inner: RegexCompiler,
    calls: AtomicUsize,
}

impl CountingCompiler {
    /// Number of compilations attempted so far, failed ones included
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PatternCompiler for CountingCompiler {
    type Compiled = Regex;

    fn compile(&self, pattern: &str, flags: PatternFlags) -> Result<Regex> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.compile(pattern, flags)
    }
}

/// A reusable scratch buffer of the kind a parser checks out per document
#[derive(Debug)]
pub struct DocumentBuffer {
    /// Identity assigned at construction, used to observe reuse order
    pub id: usize,
    pub text: String,
}

impl DocumentBuffer {
    /// Factory yielding buffers numbered from 0 in construction order
    pub fn factory() -> impl FnMut() -> DocumentBuffer {
        let mut next = 0;
        move || {
            let id = next;
            next += 1;
            DocumentBuffer {
                id,
                text: String::with_capacity(128),
            }
        }
    }
}
