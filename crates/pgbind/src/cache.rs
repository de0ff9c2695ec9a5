//! Scanned-template cache.
//!
//! Scanning is cheap but not free; callers that render the same template many
//! times can pick a key that identifies the template text and let the cache
//! hand out one shared, already scanned [`Parser`].

use crate::template::Parser;
use crate::trace;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// Map from caller-chosen key to a scanned [`Parser`].
///
/// Entries are never evicted or replaced. A key must always be used with the
/// same template: looking up a key with a template of a different length is a
/// caller bug and panics.
#[derive(Debug, Default)]
pub struct TemplateCache {
    parsers: Mutex<HashMap<String, Arc<Parser>>>,
}

impl TemplateCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`bind`](crate::bind) and
    /// [`bind_one`](crate::bind_one).
    pub fn global() -> &'static TemplateCache {
        static GLOBAL: OnceLock<TemplateCache> = OnceLock::new();
        GLOBAL.get_or_init(TemplateCache::new)
    }

    /// Get the parser for `key`, scanning and storing `template` on first use.
    ///
    /// An empty key bypasses the cache and returns a fresh, unscanned parser.
    /// A template that fails to scan is returned without being stored, so the
    /// error surfaces when the SQL is rendered.
    ///
    /// # Panics
    ///
    /// If `key` was previously stored with a template of a different length.
    pub fn get_parser(&self, key: &str, template: &str) -> Arc<Parser> {
        if key.is_empty() {
            return Arc::new(Parser::new(template));
        }

        let cached = self.lock().get(key).cloned();
        if let Some(parser) = cached {
            trace::cache_hit(key);
            return ensure_same_template(key, parser, template);
        }

        // Scan outside the lock so unrelated keys are not serialized behind it.
        let parser = Parser::new(template);
        if parser.scan().is_err() {
            return Arc::new(parser);
        }

        let parser = {
            let mut parsers = self.lock();
            Arc::clone(
                parsers
                    .entry(key.to_string())
                    .or_insert_with(|| Arc::new(parser)),
            )
        };
        trace::cache_miss(key);
        ensure_same_template(key, parser, template)
    }

    /// Number of cached templates.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Check if a key has been stored.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    // A panic never happens while the map is borrowed, so a poisoned lock
    // still guards a consistent map.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Parser>>> {
        self.parsers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Called with the lock released.
fn ensure_same_template(key: &str, parser: Arc<Parser>, template: &str) -> Arc<Parser> {
    if parser.template().len() != template.len() {
        panic!("same key for different templates: {key}");
    }
    parser
}
