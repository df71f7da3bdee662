//! Language detection from environment.

/// Environment variables consulted, in priority order.
const LANG_VARS: &[&str] = &["ARBOR_LANG", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Detect language from environment variables.
///
/// Falls back to "en" if none is set or the locale is `C`/`POSIX`.
pub fn detect_language() -> String {
    LANG_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .map(|value| normalize_lang(&value))
        .unwrap_or_else(|| "en".to_string())
}

/// Normalize language string (e.g., "ru_RU.UTF-8" -> "ru").
pub fn normalize_lang(lang: &str) -> String {
    let normalized = lang
        .split(['_', '.', '-', '@'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    match normalized.as_str() {
        "" | "c" | "posix" => "en".to_string(),
        _ => normalized,
    }
}
