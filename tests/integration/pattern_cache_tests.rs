//! Pattern cache integration tests

#[cfg(test)]
mod tests {
    use crate::common::CountingCompiler;
    use reuse_rs::{PatternCache, PatternFlags, ReuseError};
    use std::sync::Arc;

    fn counting_cache(capacity: usize) -> PatternCache<CountingCompiler> {
        PatternCache::with_compiler(capacity, CountingCompiler::default()).unwrap()
    }

    #[test]
    fn test_repeated_lookup_compiles_once() {
        let cache = counting_cache(8);

        let first = cache.get_or_compile("a.b").unwrap();
        let second = cache.get_or_compile("a.b").unwrap();

        assert_eq!(cache.compiler().calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_flagged_compilations_are_separate() {
        let cache = counting_cache(8);

        let plain = cache.get_or_compile("a.b").unwrap();
        let blind = cache
            .get_or_compile_with_flags("a.b", PatternFlags::CASE_INSENSITIVE)
            .unwrap();

        assert_eq!(cache.compiler().calls(), 2);
        assert_eq!(cache.len(), 2);
        assert!(!plain.is_match("A-B"));
        assert!(blind.is_match("A-B"));
    }

    #[test]
    fn test_xpath_flags_select_entry() {
        let cache = counting_cache(8);
        let flags = PatternFlags::parse("iq").unwrap();

        let re = cache.get_or_compile_with_flags("A.B", flags).unwrap();
        assert!(re.is_match("xx a.b xx"));
        assert!(!re.is_match("axb"));

        assert!(cache.contains("A.B", PatternFlags::CASE_INSENSITIVE | PatternFlags::LITERAL));
        assert!(!cache.contains("A.B", PatternFlags::NONE));
    }

    #[test]
    fn test_unknown_xpath_flag_rejected() {
        let err = PatternFlags::parse("iz").unwrap_err();
        assert!(matches!(err, ReuseError::InvalidArgument(_)));
    }

    #[test]
    fn test_lru_victim_is_oldest_untouched_key() {
        let cache = counting_cache(3);

        for pattern in ["k1", "k2", "k3", "k4"] {
            cache.get_or_compile(pattern).unwrap();
        }

        assert!(!cache.contains("k1", PatternFlags::NONE));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_touched_key_survives_eviction() {
        let cache = counting_cache(3);

        for pattern in ["k1", "k2", "k3", "k1", "k4"] {
            cache.get_or_compile(pattern).unwrap();
        }

        assert!(cache.contains("k1", PatternFlags::NONE));
        assert!(!cache.contains("k2", PatternFlags::NONE));
        assert_eq!(cache.compiler().calls(), 4);
    }

    #[test]
    fn test_invalid_pattern_retried_not_cached() {
        let cache = counting_cache(8);
        cache.get_or_compile("ok").unwrap();

        for _ in 0..2 {
            let err = cache.get_or_compile("(unclosed").unwrap_err();
            assert!(matches!(err, ReuseError::PatternSyntax { .. }));
            assert_eq!(cache.len(), 1);
        }
        assert_eq!(cache.compiler().calls(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_compilers_share_cache() {
        let cache = Arc::new(counting_cache(16));
        let patterns = ["[a-z]+", r"\d{3}", "^doc", "end$", "a|b"];

        let tasks: Vec<_> = (0..16)
            .map(|worker| {
                let cache = Arc::clone(&cache);
                tokio::task::spawn_blocking(move || {
                    for i in 0..200 {
                        let pattern = patterns[(i + worker) % patterns.len()];
                        let compiled = cache.get_or_compile(pattern).unwrap();
                        assert_eq!(compiled.as_str(), pattern);
                    }
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(cache.len(), patterns.len());
        // Benign races may compile a key more than once, never unboundedly.
        assert!(cache.compiler().calls() >= patterns.len());
        assert!(cache.compiler().calls() <= patterns.len() * 16);
    }
}
