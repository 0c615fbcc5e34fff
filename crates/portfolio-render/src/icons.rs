//! Skill icon lookup.
//!
//! Maps a skill name to a Font Awesome class string. Lookups are exact,
//! case-sensitive matches; unrecognized names fall back to
//! [`DEFAULT_SKILL_ICON`]. The map is immutable after definition and shared
//! by all callers.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Icon class used for skills with no dedicated entry.
pub const DEFAULT_SKILL_ICON: &str = "fas fa-code";

static SKILL_ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Programming languages
        ("JavaScript", "fab fa-js-square"),
        ("Python", "fab fa-python"),
        ("Java", "fab fa-java"),
        ("C++", "fas fa-code"),
        ("C#", "fas fa-code"),
        ("PHP", "fab fa-php"),
        ("Ruby", "fas fa-gem"),
        ("Go", "fas fa-code"),
        ("Rust", "fas fa-code"),
        ("TypeScript", "fas fa-code"),
        // Frameworks
        ("React", "fab fa-react"),
        ("Angular", "fab fa-angular"),
        ("Vue", "fab fa-vuejs"),
        ("Node.js", "fab fa-node-js"),
        ("Express", "fas fa-server"),
        ("Django", "fas fa-code"),
        ("Flask", "fas fa-code"),
        ("Spring", "fas fa-leaf"),
        ("Laravel", "fas fa-code"),
        // Databases
        ("MySQL", "fas fa-database"),
        ("PostgreSQL", "fas fa-database"),
        ("MongoDB", "fas fa-database"),
        ("Redis", "fas fa-database"),
        ("SQLite", "fas fa-database"),
        // Cloud & DevOps
        ("AWS", "fab fa-aws"),
        ("Azure", "fas fa-cloud"),
        ("Google Cloud", "fab fa-google"),
        ("Docker", "fab fa-docker"),
        ("Kubernetes", "fas fa-dharmachakra"),
        ("Jenkins", "fas fa-tools"),
        ("Git", "fab fa-git-alt"),
        ("GitHub", "fab fa-github"),
    ])
});

/// Returns the icon class for a skill name.
///
/// # Example
///
/// ```rust
/// use portfolio_render::{skill_icon, DEFAULT_SKILL_ICON};
///
/// assert_eq!(skill_icon("Python"), "fab fa-python");
/// assert_eq!(skill_icon("Fortran"), DEFAULT_SKILL_ICON);
/// ```
pub fn skill_icon(name: &str) -> &'static str {
    SKILL_ICONS.get(name).copied().unwrap_or(DEFAULT_SKILL_ICON)
}
