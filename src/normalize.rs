// Exclusion of non-content nodes: script-like tags, comments, hidden elements.

use crate::config::Rules;
use crate::document::{Document, DocumentNode, NodeId, NodeKind};

/// Compute the exclusion table for every node reachable from the root.
///
/// `excluded[id.index()]` is true for a node that is itself non-content or
/// sits below one. The document is never modified.
pub(crate) fn exclusions(doc: &Document, rules: &Rules) -> Vec<bool> {
    let mut excluded = vec![false; doc.len()];
    let Some(root) = doc.root() else {
        return excluded;
    };

    // (node, ancestor excluded)
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];
    while let Some((id, inherited)) = stack.pop() {
        let node = doc.node(id);
        let is_excluded = inherited || is_non_content(node, rules);
        excluded[id.index()] = is_excluded;
        stack.extend(node.children.iter().rev().map(|&c| (c, is_excluded)));
    }
    excluded
}

fn is_non_content(node: &DocumentNode, rules: &Rules) -> bool {
    match node.kind {
        NodeKind::Comment => true,
        NodeKind::Text => false,
        NodeKind::Element => rules.script_tags.contains(&node.tag) || is_hidden(node),
    }
}

/// `hidden` attribute, `aria-hidden="true"`, or an inline style hiding the node.
fn is_hidden(node: &DocumentNode) -> bool {
    if node.attr("hidden").is_some() {
        return true;
    }
    if node
        .attr("aria-hidden")
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    {
        return true;
    }
    node.attr("style").is_some_and(style_hides)
}

/// Scan `prop: value` declarations; anything malformed is ignored.
fn style_hides(style: &str) -> bool {
    style.split(';').any(|decl| {
        let Some((prop, value)) = decl.split_once(':') else {
            return false;
        };
        let prop = prop.trim().to_ascii_lowercase();
        let value = value.trim().to_ascii_lowercase();
        let value = value.trim_end_matches("!important").trim_end();
        match prop.as_str() {
            "display" => value == "none",
            "visibility" => value == "hidden",
            _ => false,
        }
    })
}
