//! Articles, written as typed blocks rather than parsed from Markdown.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy)]
pub struct CodeSample {
    pub language: Option<&'static str>,
    /// Label shown above the block.
    pub filename: Option<&'static str>,
    pub code: &'static str,
    /// Highlighted line numbers, forwarded to the markup for styling.
    pub highlights: &'static [u32],
}

#[derive(Debug, Clone, Copy)]
pub enum Block {
    Heading(&'static str),
    Paragraph(&'static str),
    Code(CodeSample),
}

#[derive(Debug, Clone, Copy)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub published: &'static str,
    pub blocks: &'static [Block],
}

impl Article {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d").ok()
    }

    pub fn href(&self) -> String {
        format!("/articles/{}", self.slug)
    }
}

static ARTICLES: &[Article] = &[
    Article {
        slug: "hello-world",
        title: "Hello, world",
        description: "Starting a technical blog, and the obligatory first snippet.",
        published: "2023-03-12",
        blocks: &[
            Block::Paragraph(
                "Every blog starts somewhere. This one starts with the smallest program that proves the toolchain works.",
            ),
            Block::Code(CodeSample {
                language: Some("js"),
                filename: Some("hello.js"),
                code: "console.log('hi')",
                highlights: &[],
            }),
            Block::Paragraph("Hover a code block to reveal the copy button."),
        ],
    },
    Article {
        slug: "shell-aliases",
        title: "Shell aliases I actually use",
        description: "A short list of aliases that survived years of dotfile churn.",
        published: "2023-05-02",
        blocks: &[
            Block::Paragraph(
                "Most aliases get added in a burst of enthusiasm and forgotten a week later. These are the ones still in my rc file.",
            ),
            Block::Heading("Git"),
            Block::Code(CodeSample {
                language: Some("bash"),
                filename: Some("~/.zshrc"),
                code: "alias gs='git status -sb'\nalias gl='git log --oneline --graph --decorate'\nalias gco='git checkout'",
                highlights: &[2],
            }),
            Block::Heading("Navigation"),
            Block::Code(CodeSample {
                language: Some("bash"),
                filename: None,
                code: "alias ..='cd ..'\nalias ...='cd ../..'\nmkcd() { mkdir -p \"$1\" && cd \"$1\"; }",
                highlights: &[3],
            }),
        ],
    },
    Article {
        slug: "typed-config",
        title: "Typed configuration with serde",
        description: "Letting the deserializer reject bad config before the server starts.",
        published: "2023-08-19",
        blocks: &[
            Block::Paragraph(
                "Stringly-typed options tend to fail late. Deserializing into enums moves the failure to startup.",
            ),
            Block::Code(CodeSample {
                language: Some("rust"),
                filename: Some("config.rs"),
                code: "#[derive(Deserialize)]\n#[serde(rename_all = \"lowercase\")]\nenum Alignment {\n    Left,\n    Center,\n    Right,\n}",
                highlights: &[2],
            }),
            Block::Heading("Loading"),
            Block::Paragraph("Parse once, attach context to the error, and fail fast."),
            Block::Code(CodeSample {
                language: Some("rust"),
                filename: None,
                code: "let config: SiteConfig = toml::from_str(&raw)\n    .context(\"Failed to parse site config\")?;",
                highlights: &[],
            }),
        ],
    },
];

/// All articles, newest first. Undated articles sort last.
pub fn articles() -> Vec<&'static Article> {
    let mut list: Vec<&'static Article> = ARTICLES.iter().collect();
    list.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
    list
}

pub fn find_article(slug: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|a| a.slug == slug)
}

/// `2023-03-12` → `March 12, 2023`. Unparseable input is returned as is.
pub fn format_published(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let slugs: Vec<&str> = articles().iter().map(|a| a.slug).collect();
        assert_eq!(slugs, vec!["typed-config", "shell-aliases", "hello-world"]);
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<&str> = ARTICLES.iter().map(|a| a.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), ARTICLES.len());
    }

    #[test]
    fn every_article_has_a_valid_date() {
        for article in ARTICLES {
            assert!(article.published_on().is_some(), "bad date on {}", article.slug);
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(find_article("hello-world").map(|a| a.title), Some("Hello, world"));
        assert!(find_article("missing").is_none());
        assert_eq!(find_article("shell-aliases").unwrap().href(), "/articles/shell-aliases");
    }

    #[test]
    fn date_formatting() {
        assert_eq!(format_published("2026-01-05"), "January 5, 2026");
        assert_eq!(format_published("2023-12-31"), "December 31, 2023");
        assert_eq!(format_published("someday"), "someday");
    }
}
