use std::collections::BTreeMap;

use super::{DocumentAdapter, ElementHandle, Selector};

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    parent: Option<usize>,
    children: Vec<usize>,
    attributes: BTreeMap<String, String>,
    text: String,
}

impl Node {
    fn has_class(&self, class: &str) -> bool {
        self.attributes
            .get("class")
            .is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
    }

    fn href(&self) -> Option<&str> {
        self.attributes.get("href").map(String::as_str)
    }
}

/// In-memory element tree. Handles stay valid for the document's lifetime.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    roots: Vec<usize>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element as the last child of `parent`, or as a new top-level element
    pub fn append(
        &mut self,
        parent: Option<ElementHandle>,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> ElementHandle {
        let index = self.nodes.len();
        let parent = parent.map(|p| p.0).filter(|&p| p < index);
        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            parent,
            children: Vec::new(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            text: String::new(),
        });
        match parent {
            Some(p) => self.nodes[p].children.push(index),
            None => self.roots.push(index),
        }
        ElementHandle(index)
    }

    pub fn text(&self, element: ElementHandle) -> Option<&str> {
        self.nodes.get(element.0).map(|n| n.text.as_str())
    }

    /// Pre-order walk of the subtrees rooted at `start`
    fn walk(&self, start: &[usize]) -> Vec<usize> {
        let mut order = Vec::new();
        let mut stack: Vec<usize> = start.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(self.nodes[index].children.iter().rev());
        }
        order
    }

    fn has_ancestor_tag(&self, mut index: usize, tag: &str) -> bool {
        while let Some(parent) = self.nodes[index].parent {
            if self.nodes[parent].tag == tag {
                return true;
            }
            index = parent;
        }
        false
    }

    fn matches(&self, index: usize, selector: &Selector<'_>) -> bool {
        let node = &self.nodes[index];
        if node.tag != "a" {
            return false;
        }
        match *selector {
            Selector::AnchorWithClass(class) => node.has_class(class),
            Selector::AnchorWithHref(href) => node.href() == Some(href),
            Selector::AnchorWithHrefPrefixIn { ancestor, prefix } => {
                node.href().is_some_and(|h| h.starts_with(prefix))
                    && self.has_ancestor_tag(index, ancestor)
            }
        }
    }
}

impl DocumentAdapter for MemoryDocument {
    fn find_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.walk(&self.roots)
            .into_iter()
            .find(|&i| self.nodes[i].attributes.get("id").is_some_and(|v| v == id))
            .map(ElementHandle)
    }

    fn find_by_selector(&self, selector: &Selector<'_>) -> Vec<ElementHandle> {
        self.walk(&self.roots)
            .into_iter()
            .filter(|&i| self.matches(i, selector))
            .map(ElementHandle)
            .collect()
    }

    fn find_descendant_by_class(
        &self,
        element: ElementHandle,
        class: &str,
    ) -> Option<ElementHandle> {
        let node = self.nodes.get(element.0)?;
        self.walk(&node.children)
            .into_iter()
            .find(|&i| self.nodes[i].has_class(class))
            .map(ElementHandle)
    }

    fn attribute(&self, element: ElementHandle, name: &str) -> Option<String> {
        self.nodes.get(element.0)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, element: ElementHandle, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_text(&mut self, element: ElementHandle, text: &str) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.text = text.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_results_follow_document_order() {
        let mut doc = MemoryDocument::new();
        let nav = doc.append(None, "nav", &[]);
        let footer = doc.append(None, "footer", &[]);
        let foot_link = doc.append(Some(footer), "a", &[("href", "index.html")]);
        let nav_link = doc.append(Some(nav), "a", &[("href", "index.html")]);

        let found = doc.find_by_selector(&Selector::AnchorWithHref("index.html"));
        assert_eq!(found, vec![nav_link, foot_link]);
    }

    #[test]
    fn prefix_selector_requires_ancestor() {
        let mut doc = MemoryDocument::new();
        let outside = doc.append(None, "a", &[("href", "https://github.com/a/b")]);
        let footer = doc.append(None, "footer", &[]);
        let div = doc.append(Some(footer), "div", &[]);
        let inside = doc.append(Some(div), "a", &[("href", "https://github.com/a/b")]);
        doc.append(Some(div), "a", &[("href", "https://example.com/")]);

        let found = doc.find_by_selector(&Selector::AnchorWithHrefPrefixIn {
            ancestor: "footer",
            prefix: "https://github.com/",
        });
        assert_eq!(found, vec![inside]);
        assert!(!found.contains(&outside));
    }

    #[test]
    fn class_matching_is_token_based() {
        let mut doc = MemoryDocument::new();
        doc.append(None, "a", &[("class", "btn github-button")]);
        doc.append(None, "a", &[("class", "github-buttons")]);
        doc.append(None, "span", &[("class", "github-button")]);
        assert_eq!(
            doc.find_by_selector(&Selector::AnchorWithClass("github-button"))
                .len(),
            1
        );
    }

    #[test]
    fn descendant_lookup_stays_inside_element() {
        let mut doc = MemoryDocument::new();
        let toggle = doc.append(None, "button", &[("id", "t")]);
        doc.append(None, "span", &[("class", "value")]);
        assert!(doc.find_descendant_by_class(toggle, "value").is_none());

        let wrapper = doc.append(Some(toggle), "b", &[]);
        let inner = doc.append(Some(wrapper), "span", &[("class", "value")]);
        assert_eq!(doc.find_descendant_by_class(toggle, "value"), Some(inner));
        assert_eq!(doc.find_by_id("t"), Some(toggle));
        assert!(doc.find_by_id("missing").is_none());
    }

    #[test]
    fn set_attribute_and_text() {
        let mut doc = MemoryDocument::new();
        let el = doc.append(None, "A", &[]);
        doc.set_attribute(el, "href", "x");
        doc.set_text(el, "hello");
        assert_eq!(doc.attribute(el, "href").as_deref(), Some("x"));
        assert_eq!(doc.text(el), Some("hello"));
        // unknown handles are ignored
        doc.set_text(ElementHandle(99), "nope");
        assert!(doc.attribute(ElementHandle(99), "href").is_none());
    }
}
