// Document-order emission of kept blocks within the selected container.

use crate::config::Rules;
use crate::document::{Document, NodeId, NodeKind};
use crate::record::ContentRecord;
use crate::text::{collapse_whitespace, word_count};

/// Per-node tables produced by the earlier stages.
pub(crate) struct Tables<'a> {
    pub excluded: &'a [bool],
    pub is_block: &'a [bool],
    pub kept: &'a [bool],
}

/// Walk `container` in document order and emit one record per kept block.
pub(crate) fn extract_records(
    doc: &Document,
    container: NodeId,
    tables: &Tables<'_>,
    rules: &Rules,
) -> Vec<ContentRecord> {
    let mut records = Vec::new();
    let mut words_so_far = 0;
    let has_keywords = !rules.terminating_keywords.is_empty();

    for id in doc.descendants(container) {
        let i = id.index();
        if tables.excluded[i] || !tables.is_block[i] || (!tables.kept[i] && !has_keywords) {
            continue;
        }

        let content = block_text(doc, id, tables, rules);
        if let Some(keyword) = terminating_keyword(&content, rules) {
            if words_so_far > rules.min_cutoff_words
                && rules.cutoff_keywords.iter().any(|k| *k == keyword)
            {
                break;
            }
            continue;
        }

        if !tables.kept[i] || content.is_empty() {
            continue;
        }
        words_so_far += word_count(&content);
        records.push(ContentRecord {
            tag: doc.node(id).tag.clone(),
            content,
        });
    }
    records
}

/// The block's own text, when it is exactly a terminating keyword.
fn terminating_keyword(content: &str, rules: &Rules) -> Option<String> {
    if rules.terminating_keywords.is_empty()
        || content.chars().count() > rules.longest_terminating
    {
        return None;
    }
    let text = content.to_lowercase();
    rules
        .terminating_keywords
        .iter()
        .any(|k| *k == text)
        .then_some(text)
}

enum Step {
    Visit(NodeId),
    Space,
}

/// Collapsed text of `block` and its descendants.
///
/// Nested kept blocks are skipped (they get their own record) and excluded
/// nodes contribute nothing. Block boundaries and `<br>` read as spaces.
fn block_text(doc: &Document, block: NodeId, tables: &Tables<'_>, rules: &Rules) -> String {
    let mut buf = String::new();
    let mut stack = vec![Step::Visit(block)];

    while let Some(step) = stack.pop() {
        let id = match step {
            Step::Visit(id) => id,
            Step::Space => {
                buf.push(' ');
                continue;
            }
        };
        if tables.excluded[id.index()] {
            continue;
        }
        let node = doc.node(id);
        match node.kind {
            NodeKind::Comment => {}
            NodeKind::Text => buf.push_str(&node.text),
            NodeKind::Element => {
                if id != block {
                    if tables.kept[id.index()] {
                        buf.push(' ');
                        continue;
                    }
                    if node.tag == "br" || rules.is_block_tag(&node.tag) {
                        buf.push(' ');
                        stack.push(Step::Space);
                    }
                }
                buf.push_str(&node.text);
                stack.extend(node.children.iter().rev().map(|&c| Step::Visit(c)));
            }
        }
    }
    collapse_whitespace(&buf)
}
