//! Mapping from a generator response to a new [`Project`].
//!
//! This is the only producer of project data. Everything it builds shares a
//! single generation timestamp, so tasks generated together compare as
//! simultaneous.

use std::collections::HashSet;

use jiff::Timestamp;
use log::warn;

use crate::{
    error::{BoardError, Result},
    generator::GenerationResponse,
    models::{Column, Project, Task},
};

/// Longest card title before the text is shortened.
pub const MAX_TITLE_CHARS: usize = 80;

/// Title given to a blank task entry.
pub const UNTITLED_TASK: &str = "Untitled task";

/// Trims a project description and rejects empty input.
///
/// # Errors
///
/// Returns `BoardError::InvalidInput` for the `description` field when the
/// text is empty or only whitespace.
///
/// # Examples
///
/// ```rust
/// use taskboard_core::ingest::validate_description;
///
/// assert_eq!(validate_description("  A chat app  ")?, "A chat app");
/// assert!(validate_description(" \n\t ").is_err());
/// # Ok::<(), taskboard_core::BoardError>(())
/// ```
pub fn validate_description(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BoardError::invalid_input("description")
            .with_reason("Project description cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Builds a project from a generator response.
///
/// Roles are visited in `selected_roles` order (duplicates collapsed); roles
/// that only appear in `role_tasks` follow in name order but are not added to
/// the project's selected roles. Every task entry becomes one task in the
/// first column, numbered by its position in the role's list and stamped with
/// `generated_at`.
pub fn build_project(
    description: String,
    response: GenerationResponse,
    generated_at: Timestamp,
) -> Project {
    let GenerationResponse {
        selected_roles,
        mut role_tasks,
    } = response;

    let mut seen = HashSet::new();
    let selected: Vec<String> = selected_roles
        .into_iter()
        .filter(|role| seen.insert(role.clone()))
        .collect();

    let extra: Vec<String> = role_tasks
        .keys()
        .filter(|role| !seen.contains(*role))
        .cloned()
        .collect();
    if !extra.is_empty() {
        warn!(
            "Generator returned tasks for unselected roles: {}",
            extra.join(", ")
        );
    }

    let mut slugs = SlugRegistry::default();
    let mut tasks = Vec::new();
    for role in selected.iter().chain(&extra) {
        let Some(texts) = role_tasks.remove(role) else {
            continue;
        };
        let slug = slugs.claim(role);
        for (index, text) in texts.iter().map(|t| t.trim()).enumerate() {
            tasks.push(Task {
                id: format!("{slug}-{index}"),
                title: card_title(text),
                description: text.to_string(),
                role: role.clone(),
                status: Column::first(),
                created_at: generated_at,
                updated_at: generated_at,
            });
        }
    }

    Project {
        description,
        generated_at,
        selected_roles: selected,
        tasks,
    }
}

fn card_title(text: &str) -> String {
    if text.is_empty() {
        UNTITLED_TASK.to_string()
    } else {
        shorten_title(text)
    }
}

/// Lowercase role name with runs of non-alphanumerics collapsed to `-`.
///
/// # Examples
///
/// ```rust
/// use taskboard_core::ingest::slugify;
///
/// assert_eq!(slugify("AI/ML Engineer"), "ai-ml-engineer");
/// assert_eq!(slugify("  Backend  "), "backend");
/// assert_eq!(slugify("???"), "role");
/// ```
pub fn slugify(role: &str) -> String {
    let mut slug = String::with_capacity(role.len());
    let mut pending_dash = false;
    for c in role.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("role");
    }
    slug
}

/// Shortens task text to a card title, cutting on a word boundary.
pub fn shorten_title(text: &str) -> String {
    if text.chars().count() <= MAX_TITLE_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_TITLE_CHARS - 1).collect();
    let head = match cut.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", head.trim_end())
}

/// Hands out one slug per role, disambiguating roles that collide.
#[derive(Default)]
struct SlugRegistry {
    taken: HashSet<String>,
}

impl SlugRegistry {
    fn claim(&mut self, role: &str) -> String {
        let base = slugify(role);
        let mut candidate = base.clone();
        let mut n = 2;
        while !self.taken.insert(candidate.clone()) {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        candidate
    }
}
