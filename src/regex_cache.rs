//! Thread-local regex cache for pattern compilation
//!
//! Compiled regex patterns are cached to avoid recompilation overhead when
//! the same pattern appears in several grammars or grammar instances.
//! Uses thread-local storage for safe concurrent access.

use hashbrown::HashMap;
use regex::Regex;
use std::cell::RefCell;

thread_local! {
    /// Thread-local cache of compiled regex patterns
    static REGEX_CACHE: RefCell<HashMap<String, Regex>> = RefCell::new(HashMap::new());
}

/// Wrap `pattern` so it only matches at the start of the text
pub fn anchored(pattern: &str) -> String {
    format!("^(?:{})", pattern)
}

/// Get or compile a regex pattern
///
/// Compiled patterns are cached for reuse. Invalid patterns are not cached.
///
/// # Arguments
/// * `pattern` - The regex pattern string, used verbatim
#[inline]
pub fn get_or_compile(pattern: &str) -> Result<Regex, regex::Error> {
    REGEX_CACHE.with(|cache| {
        if let Some(regex) = cache.borrow().get(pattern) {
            return Ok(regex.clone());
        }

        let regex = Regex::new(pattern)?;
        cache
            .borrow_mut()
            .insert(pattern.to_string(), regex.clone());
        Ok(regex)
    })
}

/// Clear the regex cache
///
/// Call this to free memory if many unique patterns have been compiled.
pub fn clear_cache() {
    REGEX_CACHE.with(|cache| cache.borrow_mut().clear());
}

/// Get the number of cached patterns
pub fn cache_size() -> usize {
    REGEX_CACHE.with(|cache| cache.borrow().len())
}
