//! Blog post model.

use serde::Serialize;

/// Post author shown in the byline.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
    pub role: String,
}

impl Author {
    /// Initials used when the avatar image is unavailable.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// A blog post. `slug` is the only externally addressable key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Raw markdown-like body, rendered by [`crate::markdown::render`]
    pub content: String,
    /// Display date such as `Apr 28, 2025`
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: Author,
    pub featured: bool,
    /// CSS gradient token for the card background
    pub color: String,
}

/// Sidebar entry: a blog category and how many posts it holds.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub slug: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_initials() {
        let author = Author {
            name: "Ehsan Ghaffar".to_string(),
            avatar: String::new(),
            role: String::new(),
        };
        assert_eq!(author.initials(), "EG");
    }
}
