use std::collections::{HashMap, HashSet};

use crate::error::{ReaderModeError, Result};
use crate::text::collapse_whitespace;

/// Block text that marks page furniture such as share bars and comment
/// sections. Installed by [`Config::with_boilerplate_keywords`].
pub const COMMON_TERMINATING_KEYWORDS: &[&str] = &[
    "comments",
    "share this",
    "related articles",
    "subscribe",
    "topics",
    "newsletter",
    "related",
    "read more",
    "about the author",
    "no newsletters selected",
];

/// Terminating keywords after which nothing more is article content.
pub const COMMON_CUTOFF_KEYWORDS: &[&str] = &[
    "comments",
    "related articles",
    "topics",
    "newsletter",
    "related",
    "about the author",
];

const DEFAULT_BLOCK_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "li", "blockquote", "pre", "td",
];
const DEFAULT_SCRIPT_TAGS: &[&str] = &["script", "style", "noscript", "template"];
const DEFAULT_POSITIVE_TAGS: &[&str] = &["article", "main"];
const DEFAULT_POSITIVE_KEYWORDS: &[&str] = &["content", "article", "post", "story"];
const DEFAULT_NEGATIVE_KEYWORDS: &[&str] = &[
    "nav", "sidebar", "footer", "header", "comment", "ad", "banner", "menu",
];
const DEFAULT_TAG_WEIGHTS: &[(&str, f64)] = &[
    ("h1", 1.5),
    ("h2", 1.5),
    ("h3", 1.5),
    ("h4", 1.5),
    ("h5", 1.5),
    ("h6", 1.5),
    ("p", 1.0),
    ("li", 1.0),
    ("blockquote", 1.0),
    ("pre", 0.8),
];

fn string_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Configuration for the extraction pipeline.
///
/// Every field has a default; [`Config::validate`] runs before any traversal.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Tags treated as content-bearing blocks.
    pub block_tags: HashSet<String>,
    /// Tags excluded together with their subtree.
    pub script_tags: HashSet<String>,
    /// Blocks whose link density exceeds this are dropped (headings exempt).
    pub link_density_threshold: f64,
    /// Minimum text length of a non-heading block.
    pub min_text_length: usize,
    /// Minimum text length of a heading block.
    pub min_heading_text_length: usize,
    /// Per-tag score multiplier.
    pub tag_weights: HashMap<String, f64>,
    /// Multiplier for block tags missing from `tag_weights`.
    pub default_tag_weight: f64,
    /// Container tags that earn `positive_bonus`.
    pub positive_tags: HashSet<String>,
    /// id/class substrings that earn `positive_bonus`.
    pub positive_keywords: Vec<String>,
    /// id/class substrings that incur `negative_bonus`.
    pub negative_keywords: Vec<String>,
    pub positive_bonus: f64,
    pub negative_bonus: f64,
    /// Block text (whole, case-insensitive) that is never emitted.
    pub terminating_keywords: Vec<String>,
    /// Terminating text that ends extraction once enough content was emitted.
    pub cutoff_keywords: Vec<String>,
    /// Words of emitted content required before a cutoff keyword applies.
    pub min_cutoff_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_tags: string_set(DEFAULT_BLOCK_TAGS),
            script_tags: string_set(DEFAULT_SCRIPT_TAGS),
            link_density_threshold: 0.33,
            min_text_length: 25,
            min_heading_text_length: 1,
            tag_weights: DEFAULT_TAG_WEIGHTS
                .iter()
                .map(|(tag, w)| (tag.to_string(), *w))
                .collect(),
            default_tag_weight: 1.0,
            positive_tags: string_set(DEFAULT_POSITIVE_TAGS),
            positive_keywords: string_vec(DEFAULT_POSITIVE_KEYWORDS),
            negative_keywords: string_vec(DEFAULT_NEGATIVE_KEYWORDS),
            positive_bonus: 1.25,
            negative_bonus: 0.25,
            terminating_keywords: Vec::new(),
            cutoff_keywords: Vec::new(),
            min_cutoff_words: 100,
        }
    }
}

impl Config {
    pub fn with_block_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block_tags = tags.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_script_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script_tags = tags.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_link_density_threshold(mut self, v: f64) -> Self {
        self.link_density_threshold = v;
        self
    }
    pub fn with_min_text_length(mut self, n: usize) -> Self {
        self.min_text_length = n;
        self
    }
    pub fn with_min_heading_text_length(mut self, n: usize) -> Self {
        self.min_heading_text_length = n;
        self
    }
    pub fn with_tag_weight(mut self, tag: &str, weight: f64) -> Self {
        self.tag_weights.insert(tag.to_string(), weight);
        self
    }
    pub fn with_default_tag_weight(mut self, weight: f64) -> Self {
        self.default_tag_weight = weight;
        self
    }
    pub fn with_positive_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positive_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_negative_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.negative_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_positive_bonus(mut self, v: f64) -> Self {
        self.positive_bonus = v;
        self
    }
    pub fn with_negative_bonus(mut self, v: f64) -> Self {
        self.negative_bonus = v;
        self
    }
    pub fn with_terminating_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terminating_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_cutoff_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cutoff_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_min_cutoff_words(mut self, n: usize) -> Self {
        self.min_cutoff_words = n;
        self
    }

    /// Install [`COMMON_TERMINATING_KEYWORDS`] and [`COMMON_CUTOFF_KEYWORDS`].
    pub fn with_boilerplate_keywords(self) -> Self {
        self.with_terminating_keywords(COMMON_TERMINATING_KEYWORDS.iter().copied())
            .with_cutoff_keywords(COMMON_CUTOFF_KEYWORDS.iter().copied())
    }

    /// Check every threshold, weight and keyword against its valid domain.
    pub fn validate(&self) -> Result<()> {
        self.rules().map(|_| ())
    }

    /// Validate and lower-case the configuration for one extraction run.
    pub(crate) fn rules(&self) -> Result<Rules> {
        let t = self.link_density_threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(invalid(
                "link_density_threshold",
                format!("{t} is outside [0, 1]"),
            ));
        }
        check_factor("default_tag_weight", self.default_tag_weight)?;
        check_factor("positive_bonus", self.positive_bonus)?;
        check_factor("negative_bonus", self.negative_bonus)?;
        for (tag, weight) in &self.tag_weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(invalid(
                    "tag_weights",
                    format!("weight {weight} for `{tag}` must be finite and non-negative"),
                ));
            }
        }

        let terminating_keywords = phrases("terminating_keywords", &self.terminating_keywords)?;
        let longest_terminating = terminating_keywords
            .iter()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);

        Ok(Rules {
            block_tags: lowercase_set(&self.block_tags),
            script_tags: lowercase_set(&self.script_tags),
            positive_tags: lowercase_set(&self.positive_tags),
            tag_weights: self
                .tag_weights
                .iter()
                .map(|(tag, w)| (tag.to_ascii_lowercase(), *w))
                .collect(),
            default_tag_weight: self.default_tag_weight,
            link_density_threshold: t,
            min_text_length: self.min_text_length,
            min_heading_text_length: self.min_heading_text_length,
            positive_keywords: keywords("positive_keywords", &self.positive_keywords)?,
            negative_keywords: keywords("negative_keywords", &self.negative_keywords)?,
            positive_bonus: self.positive_bonus,
            negative_bonus: self.negative_bonus,
            terminating_keywords,
            cutoff_keywords: phrases("cutoff_keywords", &self.cutoff_keywords)?,
            min_cutoff_words: self.min_cutoff_words,
            longest_terminating,
        })
    }
}

fn invalid(field: &'static str, reason: String) -> ReaderModeError {
    ReaderModeError::InvalidConfig { field, reason }
}

fn check_factor(field: &'static str, v: f64) -> Result<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{v} must be finite and non-negative")))
    }
}

fn lowercase_set(set: &HashSet<String>) -> HashSet<String> {
    set.iter().map(|s| s.to_ascii_lowercase()).collect()
}

/// Lower-cased id/class keywords. An empty keyword would match everything,
/// and one with inner whitespace could match across the id/class join.
fn keywords(field: &'static str, list: &[String]) -> Result<Vec<String>> {
    list.iter()
        .map(|k| {
            let k = k.trim().to_lowercase();
            if k.is_empty() {
                Err(invalid(field, "keywords must not be empty".to_string()))
            } else if k.contains(char::is_whitespace) {
                Err(invalid(field, format!("keyword `{k}` must not contain whitespace")))
            } else {
                Ok(k)
            }
        })
        .collect()
}

/// Lower-cased, whitespace-collapsed block phrases.
fn phrases(field: &'static str, list: &[String]) -> Result<Vec<String>> {
    list.iter()
        .map(|k| {
            let k = collapse_whitespace(&k.to_lowercase());
            if k.is_empty() {
                Err(invalid(field, "keywords must not be empty".to_string()))
            } else {
                Ok(k)
            }
        })
        .collect()
}

/// Validated, lower-cased view of a [`Config`], shared read-only by all stages.
#[derive(Debug)]
pub(crate) struct Rules {
    pub block_tags: HashSet<String>,
    pub script_tags: HashSet<String>,
    pub positive_tags: HashSet<String>,
    pub tag_weights: HashMap<String, f64>,
    pub default_tag_weight: f64,
    pub link_density_threshold: f64,
    pub min_text_length: usize,
    pub min_heading_text_length: usize,
    pub positive_keywords: Vec<String>,
    pub negative_keywords: Vec<String>,
    pub positive_bonus: f64,
    pub negative_bonus: f64,
    pub terminating_keywords: Vec<String>,
    pub cutoff_keywords: Vec<String>,
    pub min_cutoff_words: usize,
    /// Character length of the longest terminating keyword.
    pub longest_terminating: usize,
}

impl Rules {
    pub fn is_block_tag(&self, tag: &str) -> bool {
        self.block_tags.contains(tag)
    }

    pub fn weight(&self, tag: &str) -> f64 {
        self.tag_weights
            .get(tag)
            .copied()
            .unwrap_or(self.default_tag_weight)
    }
}

/// h1 through h6.
pub(crate) fn is_heading(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}
