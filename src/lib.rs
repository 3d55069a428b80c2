//! Reader-mode main content extraction for HTML.
//!
//! `readermode` finds the article body of a page: it drops scripts, comments
//! and hidden elements, scores every candidate container by how much real
//! text its blocks carry versus link text, picks the best container and
//! returns its blocks as ordered `{tag, content}` records.
//!
//! # Quick start
//!
//! ```rust
//! use readermode::{extract_html, Config};
//!
//! let html = r#"<body>
//!   <div id="nav"><a href="/">Home</a></div>
//!   <div id="content">
//!     <h1>Title</h1>
//!     <p>A paragraph of article text that is comfortably long enough.</p>
//!   </div>
//! </body>"#;
//! let records = extract_html(html, &Config::default()).unwrap();
//! assert_eq!(records[0].tag, "h1");
//! assert_eq!(records[1].tag, "p");
//! ```
//!
//! Trees from another parser can be built directly with [`Document`] and
//! passed to [`extract`].

mod classify;
mod config;
mod document;
mod error;
mod extract;
mod filter;
mod normalize;
mod parse;
mod record;
mod score;
mod select;
mod text;

pub use config::{Config, COMMON_CUTOFF_KEYWORDS, COMMON_TERMINATING_KEYWORDS};
pub use document::{Descendants, Document, DocumentNode, NodeId, NodeKind};
pub use error::{ReaderModeError, Result};
pub use record::ContentRecord;

/// Extract the main content of a parsed document.
///
/// The configuration is validated before the tree is touched. A document
/// with no qualifying blocks yields an empty list.
pub fn extract(doc: &Document, config: &Config) -> Result<Vec<ContentRecord>> {
    let rules = config.rules()?;
    let root = doc.root().ok_or(ReaderModeError::MissingRoot)?;
    let order = doc.preorder();

    let excluded = normalize::exclusions(doc, &rules);
    let classes = classify::classify(doc, &order, &excluded, &rules);
    let scores = score::score(doc, &order, &excluded);
    let blocks = filter::filter_blocks(doc, &classes.blocks, &scores, &excluded, &rules);
    let kept = filter::kept_table(&blocks, doc.len());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        excluded = excluded.iter().filter(|&&e| e).count(),
        blocks = blocks.len(),
        kept = blocks.iter().filter(|b| b.kept).count(),
        containers = classes.containers.len(),
        "scored document"
    );

    let scored =
        select::score_containers(doc, &order, &classes.containers, &kept, &scores, &rules);
    let selection = select::select(&scored, root);

    #[cfg(feature = "tracing")]
    match &selection {
        select::Selection::Container(c) => tracing::debug!(
            container = c.container.index(),
            tag = %doc.node(c.container).tag,
            score = c.score,
            block_count = c.block_count,
            "selected container"
        ),
        select::Selection::Fallback(_) => {
            tracing::debug!("no container holds a kept block, using whole tree")
        }
    }

    let tables = extract::Tables {
        excluded: &excluded,
        is_block: &classes.is_block,
        kept: &kept,
    };
    let records = extract::extract_records(doc, selection.node(), &tables, &rules);

    #[cfg(feature = "tracing")]
    tracing::debug!(records = records.len(), "extracted content");

    Ok(records)
}

/// Parse `html` and extract its main content.
///
/// Empty or blank input yields an empty list.
///
/// # Example
///
/// ```rust
/// let records = readermode::extract_html("", &readermode::Config::default()).unwrap();
/// assert!(records.is_empty());
/// ```
pub fn extract_html(html: &str, config: &Config) -> Result<Vec<ContentRecord>> {
    if text::is_blank(html) {
        config.validate()?;
        return Ok(Vec::new());
    }
    extract(&Document::parse(html), config)
}

/// Convenience: the extracted content joined with newlines.
pub fn extract_text(html: &str, config: &Config) -> Result<String> {
    Ok(extract_html(html, config)?
        .into_iter()
        .map(|r| r.content)
        .collect::<Vec<_>>()
        .join("\n"))
}
