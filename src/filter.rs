// Threshold rules that drop link-heavy or too-short blocks.

use crate::config::{is_heading, Rules};
use crate::document::{Document, NodeId};
use crate::score::ScoreRecord;

/// A block candidate and the filter's verdict on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block<'a> {
    pub node: NodeId,
    pub tag: &'a str,
    pub kept: bool,
}

/// Decide `kept` for every block. Each block is judged on its own record.
pub(crate) fn filter_blocks<'a>(
    doc: &'a Document,
    blocks: &[NodeId],
    scores: &[ScoreRecord],
    excluded: &[bool],
    rules: &Rules,
) -> Vec<Block<'a>> {
    blocks
        .iter()
        .map(|&node| {
            let tag = doc.node(node).tag.as_str();
            let kept = !excluded[node.index()] && passes(tag, &scores[node.index()], rules);
            Block { node, tag, kept }
        })
        .collect()
}

fn passes(tag: &str, record: &ScoreRecord, rules: &Rules) -> bool {
    if is_heading(tag) {
        // A linked title is still a title.
        return record.text_length >= rules.min_heading_text_length;
    }
    record.link_density() <= rules.link_density_threshold
        && record.text_length >= rules.min_text_length
}

/// Per-node kept table, `kept[id.index()]`.
pub(crate) fn kept_table(blocks: &[Block<'_>], len: usize) -> Vec<bool> {
    let mut kept = vec![false; len];
    for block in blocks.iter().filter(|b| b.kept) {
        kept[block.node.index()] = true;
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn record(text_length: usize, link_text_length: usize) -> ScoreRecord {
        ScoreRecord {
            text_length,
            link_text_length,
        }
    }

    fn rules(config: Config) -> Rules {
        config.rules().unwrap()
    }

    #[test]
    fn test_min_length() {
        let r = rules(Config::default());
        assert!(!passes("p", &record(24, 0), &r));
        assert!(passes("p", &record(25, 0), &r));
    }

    #[test]
    fn test_link_density_threshold() {
        let r = rules(Config::default());
        // 33/100 = 0.33 is not above the threshold
        assert!(passes("p", &record(100, 33), &r));
        assert!(!passes("p", &record(100, 34), &r));
        assert!(!passes("li", &record(40, 40), &r));
    }

    #[test]
    fn test_headings_exempt_from_density_and_length() {
        let r = rules(Config::default());
        assert!(passes("h1", &record(5, 5), &r));
        assert!(passes("h6", &record(1, 0), &r));
        assert!(!passes("h2", &record(0, 0), &r));
    }

    #[test]
    fn test_custom_heading_minimum() {
        let r = rules(Config::default().with_min_heading_text_length(10));
        assert!(!passes("h2", &record(9, 0), &r));
        assert!(passes("h2", &record(10, 0), &r));
    }

    #[test]
    fn test_threshold_one_keeps_all_link_text() {
        let r = rules(Config::default().with_link_density_threshold(1.0));
        assert!(passes("p", &record(30, 30), &r));
    }

    #[test]
    fn test_excluded_block_not_kept() {
        let mut doc = Document::new();
        let body = doc.set_root("body");
        let p = doc.append_element(body, "p");
        let scores = vec![record(0, 0), record(100, 0)];
        let r = rules(Config::default());

        let blocks = filter_blocks(&doc, &[p], &scores, &[false, true], &r);
        assert_eq!(
            blocks,
            vec![Block {
                node: p,
                tag: "p",
                kept: false
            }]
        );

        let blocks = filter_blocks(&doc, &[p], &scores, &[false, false], &r);
        assert!(blocks[0].kept);
        assert_eq!(kept_table(&blocks, 2), vec![false, true]);
    }
}
