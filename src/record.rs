/// One unit of extracted article content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ContentRecord {
    /// Tag of the originating block, e.g. `"p"` or `"h1"`.
    pub tag: String,
    /// Whitespace-collapsed text; never has leading, trailing or doubled spaces.
    pub content: String,
}

impl ContentRecord {
    /// Returns `true` if this record came from a heading (h1-h6).
    pub fn is_heading(&self) -> bool {
        crate::config::is_heading(&self.tag)
    }
}
