// Bottom-up text and link-text lengths.

use crate::document::{Document, NodeId};
use crate::text::text_length;

/// Tag whose text counts as link text.
const ANCHOR_TAG: &str = "a";

/// Text statistics of one node, descendants included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScoreRecord {
    pub text_length: usize,
    pub link_text_length: usize,
}

impl ScoreRecord {
    /// link_text_length / text_length, in [0, 1]; 0 for a node without text.
    pub fn link_density(&self) -> f64 {
        if self.text_length == 0 {
            0.0
        } else {
            self.link_text_length as f64 / self.text_length as f64
        }
    }
}

/// Score every node in one post-order pass.
///
/// Excluded nodes keep a zero record, so their text never reaches an ancestor.
pub(crate) fn score(doc: &Document, order: &[NodeId], excluded: &[bool]) -> Vec<ScoreRecord> {
    let mut scores = vec![ScoreRecord::default(); doc.len()];

    for &id in order.iter().rev() {
        if excluded[id.index()] {
            continue;
        }
        let node = doc.node(id);
        let mut record = ScoreRecord {
            text_length: text_length(&node.text),
            link_text_length: 0,
        };
        for child in &node.children {
            let child = scores[child.index()];
            record.text_length += child.text_length;
            record.link_text_length += child.link_text_length;
        }
        if node.is_element() && node.tag == ANCHOR_TAG {
            record.link_text_length = record.text_length;
        }
        scores[id.index()] = record;
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::exclusions;
    use crate::Config;

    fn run(doc: &Document) -> Vec<ScoreRecord> {
        let rules = Config::default().rules().unwrap();
        let excluded = exclusions(doc, &rules);
        score(doc, &doc.preorder(), &excluded)
    }

    #[test]
    fn test_text_lengths_sum_up() {
        let mut doc = Document::new();
        let p = doc.set_root("p");
        doc.append_text(p, "  a   b ");
        let em = doc.append_element(p, "em");
        doc.append_text(em, "cdef");

        let s = run(&doc);
        assert_eq!(s[em.index()].text_length, 4);
        assert_eq!(s[p.index()].text_length, 7);
        assert_eq!(s[p.index()].link_text_length, 0);
        assert_eq!(s[p.index()].link_density(), 0.0);
    }

    #[test]
    fn test_anchor_text_is_link_text() {
        let mut doc = Document::new();
        let p = doc.set_root("p");
        doc.append_text(p, "abcdef");
        let a = doc.append_element(p, "a");
        let strong = doc.append_element(a, "strong");
        doc.append_text(strong, "xy");

        let s = run(&doc);
        assert_eq!(s[a.index()].link_text_length, 2);
        assert_eq!(s[p.index()].text_length, 8);
        assert_eq!(s[p.index()].link_text_length, 2);
        assert_eq!(s[p.index()].link_density(), 0.25);
    }

    #[test]
    fn test_nested_anchors_not_double_counted() {
        let mut doc = Document::new();
        let a = doc.set_root("a");
        let inner = doc.append_element(a, "a");
        doc.append_text(inner, "link");

        let s = run(&doc);
        assert_eq!(s[a.index()].text_length, 4);
        assert_eq!(s[a.index()].link_text_length, 4);
        assert_eq!(s[a.index()].link_density(), 1.0);
    }

    #[test]
    fn test_anchor_own_text_counts() {
        let mut doc = Document::new();
        let div = doc.set_root("div");
        let a = doc.append_element(div, "a");
        doc.set_text(a, "Home");

        let s = run(&doc);
        assert_eq!(s[div.index()].link_text_length, 4);
    }

    #[test]
    fn test_excluded_text_never_contributes() {
        let mut doc = Document::new();
        let div = doc.set_root("div");
        doc.append_text(div, "kept");
        let style = doc.append_element(div, "style");
        doc.append_text(style, "body { color: red }");
        doc.append_comment(div, "hidden comment");

        let s = run(&doc);
        assert_eq!(s[div.index()].text_length, 4);
        assert_eq!(s[style.index()], ScoreRecord::default());
    }

    #[test]
    fn test_empty_node_density_is_zero() {
        let mut doc = Document::new();
        let a = doc.set_root("a");
        let s = run(&doc);
        assert_eq!(s[a.index()].link_density(), 0.0);
    }
}
