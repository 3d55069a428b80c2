// HTML → Document adapter over scraper's html5ever tree.

use ego_tree::iter::Edge;
use scraper::node::Node;
use scraper::Html;

use crate::document::{Document, NodeId};

impl Document {
    /// Parse HTML with html5ever's error-recovering parser.
    ///
    /// The root is the `<html>` element; implicit `<head>`/`<body>` are
    /// inserted by the parser. Comments are kept so the normalizer can drop
    /// them; doctypes and processing instructions are not.
    pub fn parse(html: &str) -> Document {
        from_html(&Html::parse_document(html))
    }
}

/// Copy scraper's tree into the arena with an edge traversal (no recursion).
fn from_html(html: &Html) -> Document {
    let mut doc = Document::new();
    // Open elements that were copied, innermost last.
    let mut open: Vec<NodeId> = Vec::new();

    for edge in html.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(el) => {
                    let id = match open.last() {
                        Some(&parent) => doc.append_element(parent, el.name()),
                        // Only the document element can open with nothing open.
                        None if doc.root().is_none() => doc.set_root(el.name()),
                        None => continue,
                    };
                    for (name, value) in el.attrs() {
                        doc.set_attr(id, name, value);
                    }
                    open.push(id);
                }
                Node::Text(text) => {
                    if let Some(&parent) = open.last() {
                        doc.append_text(parent, text.text.as_ref());
                    }
                }
                Node::Comment(comment) => {
                    if let Some(&parent) = open.last() {
                        doc.append_comment(parent, comment.comment.as_ref());
                    }
                }
                // Document, fragment, doctype, processing instructions
                _ => {}
            },
            Edge::Close(node) => {
                if node.value().is_element() && !open.is_empty() {
                    open.pop();
                }
            }
        }
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::NodeKind;

    fn tags(doc: &Document) -> Vec<String> {
        doc.preorder()
            .into_iter()
            .map(|id| doc.node(id))
            .filter(|n| n.is_element())
            .map(|n| n.tag.clone())
            .collect()
    }

    #[test]
    fn test_implicit_html_and_body() {
        let doc = Document::parse("<p>Hello</p>");
        assert_eq!(tags(&doc), vec!["html", "head", "body", "p"]);
    }

    #[test]
    fn test_attributes_copied() {
        let doc = Document::parse(r#"<div id="content" class="Post Body">x</div>"#);
        let div = doc
            .preorder()
            .into_iter()
            .find(|&id| doc.node(id).tag == "div")
            .unwrap();
        assert_eq!(doc.node(div).attr("id"), Some("content"));
        assert_eq!(doc.node(div).attr("class"), Some("Post Body"));
    }

    #[test]
    fn test_comments_kept_doctype_dropped() {
        let doc = Document::parse("<!DOCTYPE html><html><body><!-- note --><p>x</p></body></html>");
        let kinds: Vec<NodeKind> = doc
            .preorder()
            .into_iter()
            .map(|id| doc.node(id).kind)
            .collect();
        assert!(kinds.contains(&NodeKind::Comment));
        assert_eq!(doc.node(doc.root().unwrap()).tag, "html");
    }

    #[test]
    fn test_unclosed_tags_recovered() {
        let doc = Document::parse("<div><p>one<p>two</div>");
        assert_eq!(tags(&doc), vec!["html", "head", "body", "div", "p", "p"]);
    }

    #[test]
    fn test_entities_decoded() {
        let doc = Document::parse("<p>Use &lt;year&gt; &amp; more</p>");
        let text: String = doc
            .preorder()
            .into_iter()
            .map(|id| doc.node(id))
            .filter(|n| n.kind == NodeKind::Text)
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(text, "Use <year> & more");
    }

    #[test]
    fn test_empty_input_still_has_root() {
        let doc = Document::parse("");
        assert_eq!(tags(&doc), vec!["html", "head", "body"]);
    }
}
