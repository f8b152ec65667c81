//! Prompt catalog: the curated dataset plus search and filtering.
//!
//! Filtering is a plain in-memory pass over the static dataset: category
//! match, case-insensitive text search over title/description/author, and a
//! keyword-based "superpower" filter.

mod data;

pub use data::all_prompts;

use crate::models::Prompt;

/// Catalog categories, in display order. `All` disables category filtering.
pub const CATEGORIES: &[&str] = &[
    "All",
    "Productivity",
    "Marketing & Sales",
    "Development & Programming",
    "Creative Writing",
    "Data Analysis",
    "Education",
    "Design & UX",
];

/// Superpower filter IDs and the keywords each matches against.
const SUPERPOWER_KEYWORDS: &[(&str, &[&str])] = &[
    ("automate", &["meeting", "productivity", "workflow"]),
    ("analyze", &["data analysis", "research", "review"]),
    ("create", &["creative writing", "content", "social media"]),
    ("optimize", &["optimization", "improvement", "enhancement"]),
    ("extract", &["summary", "extract", "facts"]),
    ("translate", &["conversion", "format", "transform"]),
    ("validate", &["review", "check", "validation"]),
    ("brainstorm", &["ideas", "creative", "brainstorm"]),
    ("summarize", &["summary", "summarize", "bullet points"]),
];

/// Find a prompt by its catalog ID.
#[must_use]
pub fn prompt_by_id(id: &str) -> Option<Prompt> {
    all_prompts().into_iter().find(|prompt| prompt.id == id)
}

/// Prompts in a category; `All` returns everything.
#[must_use]
pub fn prompts_by_category(category: &str) -> Vec<Prompt> {
    let prompts = all_prompts();
    if category == "All" {
        return prompts;
    }
    prompts
        .into_iter()
        .filter(|prompt| prompt.category == category)
        .collect()
}

/// Search prompts by free text within a category.
///
/// The query is stripped of HTML-significant characters, capped at 100
/// characters, and matched case-insensitively against title, description,
/// and author. An empty (post-sanitization) query returns the whole
/// category.
#[must_use]
pub fn search_prompts(query: &str, category: &str) -> Vec<Prompt> {
    let prompts = prompts_by_category(category);

    let safe_query: String = query
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\'' | '&'))
        .collect::<String>()
        .trim()
        .chars()
        .take(100)
        .collect::<String>()
        .to_lowercase();

    if safe_query.is_empty() {
        return prompts;
    }

    prompts
        .into_iter()
        .filter(|prompt| {
            prompt.title.to_lowercase().contains(&safe_query)
                || prompt.description.to_lowercase().contains(&safe_query)
                || prompt.author.to_lowercase().contains(&safe_query)
        })
        .collect()
}

/// Keywords associated with a superpower ID, empty for unknown IDs.
#[must_use]
pub fn superpower_keywords(superpower: &str) -> &'static [&'static str] {
    SUPERPOWER_KEYWORDS
        .iter()
        .find(|(id, _)| *id == superpower)
        .map_or(&[], |&(_, keywords)| keywords)
}

/// Keep only prompts matching a superpower's keyword list.
///
/// A prompt matches when any keyword appears in its title, description, or
/// body (case-insensitive). An unknown superpower matches nothing.
#[must_use]
pub fn filter_by_superpower(prompts: Vec<Prompt>, superpower: &str) -> Vec<Prompt> {
    let keywords = superpower_keywords(superpower);
    prompts
        .into_iter()
        .filter(|prompt| {
            let title = prompt.title.to_lowercase();
            let description = prompt.description.to_lowercase();
            let body = prompt.prompt.to_lowercase();
            keywords.iter().any(|keyword| {
                title.contains(keyword) || description.contains(keyword) || body.contains(keyword)
            })
        })
        .collect()
}

/// Photo search query used to decorate cards of a category.
#[must_use]
pub fn photo_query_for_category(category: &str) -> &'static str {
    match category {
        "Productivity" => "productivity workspace office desk",
        "Marketing & Sales" => "marketing business growth strategy",
        "Development & Programming" => "programming coding developer computer",
        "Creative Writing" => "writing notebook pen creative",
        "Data Analysis" => "data analytics charts visualization",
        "Education" => "education learning books study",
        "Design & UX" => "design interface sketch wireframe",
        _ => "technology abstract minimal",
    }
}
