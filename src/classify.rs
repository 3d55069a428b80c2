// Tag-based classification of block and container candidates.

use crate::config::Rules;
use crate::document::{Document, NodeId};

/// Read-only candidate indexes over the normalized tree.
#[derive(Debug, Default)]
pub(crate) struct Classification {
    /// Block candidates, in document order.
    pub blocks: Vec<NodeId>,
    /// Elements with at least one descendant block candidate, in document order.
    pub containers: Vec<NodeId>,
    /// `is_block[id.index()]`
    pub is_block: Vec<bool>,
}

/// Classify every non-excluded element. Text content is not consulted.
///
/// `order` is the document's pre-order walk.
pub(crate) fn classify(
    doc: &Document,
    order: &[NodeId],
    excluded: &[bool],
    rules: &Rules,
) -> Classification {
    let mut is_block = vec![false; doc.len()];
    let mut has_block_below = vec![false; doc.len()];

    // Reverse pre-order visits every child before its parent.
    for &id in order.iter().rev() {
        if excluded[id.index()] {
            continue;
        }
        let node = doc.node(id);
        if !node.is_element() {
            continue;
        }
        is_block[id.index()] = rules.is_block_tag(&node.tag);
        let below = node
            .children
            .iter()
            .any(|c| is_block[c.index()] || has_block_below[c.index()]);
        has_block_below[id.index()] = below;
    }

    let blocks = order
        .iter()
        .copied()
        .filter(|id| is_block[id.index()])
        .collect();
    let containers = order
        .iter()
        .copied()
        .filter(|id| has_block_below[id.index()])
        .collect();

    Classification {
        blocks,
        containers,
        is_block,
    }
}
