#![allow(dead_code)]

use std::collections::BTreeMap;

use ego_tree::{NodeId, NodeMut, NodeRef};
use scraper::{Html, Node, Selector};
use tracing::warn;

/// A page with addressable containers the renderer writes into.
pub trait Surface {
    /// Whether a container matching `selector` exists.
    fn contains(&self, selector: &str) -> bool;

    /// Replaces the children of the first container matching `selector`.
    /// Returns `false` and leaves the page untouched when there is none.
    fn replace_children(&mut self, selector: &str, markup: &str) -> bool;

    /// Appends markup at the end of the page body.
    fn append_to_body(&mut self, markup: &str);
}

/// Host HTML page parsed into a mutable DOM.
pub struct HostPage {
    html: Html,
}

impl HostPage {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Inner HTML of the first container matching `selector`.
    pub fn inner_html(&self, selector: &str) -> Option<String> {
        let selector = parse_selector(selector)?;
        let inner = self.html.select(&selector).next().map(|el| el.inner_html());
        inner
    }

    /// Number of elements matching `selector`.
    pub fn count(&self, selector: &str) -> usize {
        let Some(selector) = parse_selector(selector) else {
            return 0;
        };
        let count = self.html.select(&selector).count();
        count
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}", self.html.root_element().html())
    }

    fn find(&self, selector: &str) -> Option<NodeId> {
        let selector = parse_selector(selector)?;
        let found = self.html.select(&selector).next().map(|el| el.id());
        found
    }

    fn graft_fragment(&mut self, target: NodeId, markup: &str) -> bool {
        let fragment = Html::parse_fragment(markup);
        let Some(mut node) = self.html.tree.get_mut(target) else {
            return false;
        };
        while let Some(mut child) = node.first_child() {
            child.detach();
        }
        for child in fragment.root_element().children() {
            graft(&mut node, child);
        }
        true
    }
}

impl Surface for HostPage {
    fn contains(&self, selector: &str) -> bool {
        self.find(selector).is_some()
    }

    fn replace_children(&mut self, selector: &str, markup: &str) -> bool {
        match self.find(selector) {
            Some(id) => self.graft_fragment(id, markup),
            None => false,
        }
    }

    fn append_to_body(&mut self, markup: &str) {
        let target = self
            .find("body")
            .unwrap_or_else(|| self.html.root_element().id());
        let fragment = Html::parse_fragment(markup);
        if let Some(mut body) = self.html.tree.get_mut(target) {
            for child in fragment.root_element().children() {
                graft(&mut body, child);
            }
        }
    }
}

/// Copies `source` and its subtree under `parent`.
fn graft(parent: &mut NodeMut<'_, Node>, source: NodeRef<'_, Node>) {
    let mut node = parent.append(source.value().clone());
    for child in source.children() {
        graft(&mut node, child);
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("Invalid container selector '{selector}': {e:?}");
            None
        }
    }
}

/// In-memory surface keyed by selector. Containers must be declared up front.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemorySurface {
    containers: BTreeMap<String, String>,
    pub appended: Vec<String>,
}

impl MemorySurface {
    pub fn with_containers<'a>(selectors: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            containers: selectors
                .into_iter()
                .map(|s| (s.to_string(), String::new()))
                .collect(),
            appended: Vec::new(),
        }
    }

    pub fn get(&self, selector: &str) -> Option<&str> {
        self.containers.get(selector).map(String::as_str)
    }

    /// Seeds a container with existing content.
    pub fn set(&mut self, selector: &str, content: &str) {
        self.containers
            .insert(selector.to_string(), content.to_string());
    }
}

impl Surface for MemorySurface {
    fn contains(&self, selector: &str) -> bool {
        self.containers.contains_key(selector)
    }

    fn replace_children(&mut self, selector: &str, markup: &str) -> bool {
        match self.containers.get_mut(selector) {
            Some(content) => {
                *content = markup.to_string();
                true
            }
            None => false,
        }
    }

    fn append_to_body(&mut self, markup: &str) {
        self.appended.push(markup.to_string());
    }
}
