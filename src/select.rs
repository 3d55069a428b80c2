// Container scoring and selection of the main content region.

use crate::config::Rules;
use crate::document::{Document, DocumentNode, NodeId};
use crate::score::ScoreRecord;

/// Aggregated score of one container candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ContainerScore {
    pub container: NodeId,
    pub score: f64,
    /// Kept blocks anywhere below the container.
    pub block_count: usize,
}

/// Outcome of container selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Selection {
    Container(ContainerScore),
    /// No container holds a kept block; the whole tree is used.
    Fallback(NodeId),
}

impl Selection {
    pub fn node(&self) -> NodeId {
        match self {
            Selection::Container(c) => c.container,
            Selection::Fallback(root) => *root,
        }
    }
}

/// `weight(tag) * ln(1 + textLength) * (1 - linkDensity)`
fn contribution(tag: &str, record: &ScoreRecord, rules: &Rules) -> f64 {
    rules.weight(tag) * (record.text_length as f64).ln_1p() * (1.0 - record.link_density())
}

/// Bonus/penalty factor from the container's tag and id/class.
fn multiplier(node: &DocumentNode, rules: &Rules) -> f64 {
    let id_class = format!(
        "{} {}",
        node.attr("id").unwrap_or_default(),
        node.attr("class").unwrap_or_default()
    )
    .to_lowercase();

    let mut factor = 1.0;
    if rules.positive_tags.contains(&node.tag)
        || rules.positive_keywords.iter().any(|k| id_class.contains(k))
    {
        factor *= rules.positive_bonus;
    }
    if rules.negative_keywords.iter().any(|k| id_class.contains(k)) {
        factor *= rules.negative_bonus;
    }
    factor
}

/// Score every container over all of its kept descendant blocks.
///
/// Containers overlap: an outer container includes the blocks of every
/// nested one. Sums are accumulated bottom-up, so the pass is linear.
pub(crate) fn score_containers(
    doc: &Document,
    order: &[NodeId],
    containers: &[NodeId],
    kept: &[bool],
    scores: &[ScoreRecord],
    rules: &Rules,
) -> Vec<ContainerScore> {
    let mut below = vec![(0.0_f64, 0_usize); doc.len()];

    for &id in order.iter().rev() {
        let mut sum = 0.0;
        let mut count = 0;
        for &child in &doc.node(id).children {
            let (child_sum, child_count) = below[child.index()];
            sum += child_sum;
            count += child_count;
            if kept[child.index()] {
                sum += contribution(&doc.node(child).tag, &scores[child.index()], rules);
                count += 1;
            }
        }
        below[id.index()] = (sum, count);
    }

    containers
        .iter()
        .map(|&container| {
            let (sum, block_count) = below[container.index()];
            ContainerScore {
                container,
                score: sum * multiplier(doc.node(container), rules),
                block_count,
            }
        })
        .collect()
}

/// Highest score wins; ties go to more kept blocks, then to document order.
///
/// `scored` must be in document order.
pub(crate) fn select(scored: &[ContainerScore], root: NodeId) -> Selection {
    let mut best: Option<ContainerScore> = None;
    for candidate in scored.iter().filter(|c| c.block_count > 0) {
        let better = match best {
            None => true,
            Some(b) => {
                candidate.score > b.score
                    || (candidate.score == b.score && candidate.block_count > b.block_count)
            }
        };
        if better {
            best = Some(*candidate);
        }
    }
    best.map_or(Selection::Fallback(root), Selection::Container)
}
