//! Owned XML element tree.
//!
//! roxmltree documents borrow the response body, so the client converts
//! the parsed document into this owned form before handing it back.
//! Only element nodes are kept; `text` is the text directly inside the
//! element before its first child element.

use crate::error::ZombieResult;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name:     String,
    pub text:     Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    /// Parse a full document and return its root element.
    pub fn parse(body: &str) -> ZombieResult<Element> {
        let doc = roxmltree::Document::parse(body)?;
        Ok(Element::from_node(doc.root_element()))
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Element {
        Element {
            name:     node.tag_name().name().to_string(),
            text:     node.text().map(str::to_string),
            children: node
                .children()
                .filter(|child| child.is_element())
                .map(Element::from_node)
                .collect(),
        }
    }

    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }
}
