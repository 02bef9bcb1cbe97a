//! Constants and validation functions for notes and categories.
//!
//! Provides the default category color, the fixed seed categories, and the
//! field-level checks the API layer runs before touching the repository.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Color applied when a category is created without one (or with an empty one).
pub const DEFAULT_CATEGORY_COLOR: &str = "#3b82f6";

/// Maximum length of a category name.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// Maximum length of a category color string.
pub const MAX_CATEGORY_COLOR_LENGTH: usize = 32;

/// Maximum length of a note title.
pub const MAX_NOTE_TITLE_LENGTH: usize = 500;

/// Maximum length of note content in characters.
pub const MAX_NOTE_CONTENT_LENGTH: usize = 100_000;

/// Categories seeded into an empty database, as `(name, color)` pairs.
pub const DEFAULT_CATEGORIES: [(&str, &str); 4] = [
    ("Work Notes", DEFAULT_CATEGORY_COLOR),
    ("Personal", "#10b981"),
    ("Ideas", "#f59e0b"),
    ("Prompts", "#8b5cf6"),
];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a category name: must be non-empty and within the length limit.
pub fn validate_category_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Category name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_CATEGORY_NAME_LENGTH {
        return Err(format!(
            "Category name exceeds maximum length of {MAX_CATEGORY_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a category color string's length.
pub fn validate_category_color(color: &str) -> Result<(), String> {
    if color.chars().count() > MAX_CATEGORY_COLOR_LENGTH {
        return Err(format!(
            "Category color exceeds maximum length of {MAX_CATEGORY_COLOR_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a note title's length. Empty titles are allowed; the
/// "Untitled" display policy belongs to the caller.
pub fn validate_note_title(title: &str) -> Result<(), String> {
    if title.chars().count() > MAX_NOTE_TITLE_LENGTH {
        return Err(format!(
            "Note title exceeds maximum length of {MAX_NOTE_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate note content's length. Empty content is allowed.
pub fn validate_note_content(content: &str) -> Result<(), String> {
    if content.chars().count() > MAX_NOTE_CONTENT_LENGTH {
        return Err(format!(
            "Note content exceeds maximum length of {MAX_NOTE_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
