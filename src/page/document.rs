//! # Document
//!
//! An in-memory element tree with named templates, classes, event handlers
//! and alerts. `Page` is a cheap, clonable handle to one document; every
//! component holds one.
//!
//! ```text
//! Document
//! ├── nodes: Vec<Option<Element>>   // arena, slots never reused
//! ├── roots: Vec<NodeId>            // top-level attached elements
//! ├── templates: name → TemplateNode
//! ├── handlers: NodeId → [(EventKind, Handler)]
//! └── alerts: VecDeque<String>
//! ```
//!
//! Borrows of the document never outlive a single `Page` method call. In
//! particular `dispatch` copies the handlers it is about to run before
//! running them, so a handler may freely rebuild parts of the page.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use crate::page::event::{Event, EventKind};

/// Handle to an element. Stale once the element is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Where `insert_adjacent` places a node inside its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// First child of the host.
    AfterBegin,
    /// Last child of the host.
    BeforeEnd,
}

/// Event callback registered on an element.
pub type Handler = Rc<dyn Fn(&mut Event)>;

#[derive(Debug)]
pub enum PageError {
    UnknownTemplate(String),
    UnknownHost(String),
    Detached(NodeId),
    MissingElement(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::UnknownTemplate(name) => write!(f, "no template named '{name}'"),
            PageError::UnknownHost(id) => write!(f, "no host element with id '{id}'"),
            PageError::Detached(node) => write!(f, "element {node:?} no longer exists"),
            PageError::MissingElement(selector) => write!(f, "no element matches '{selector}'"),
        }
    }
}

impl std::error::Error for PageError {}

/// Markup description of an element tree, used for templates and roots.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateNode {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: String,
    pub children: Vec<TemplateNode>,
}

impl TemplateNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn child(mut self, child: TemplateNode) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub text: String,
    pub value: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

#[derive(Default)]
struct Document {
    nodes: Vec<Option<Element>>,
    roots: Vec<NodeId>,
    templates: HashMap<String, TemplateNode>,
    handlers: HashMap<NodeId, Vec<(EventKind, Handler)>>,
    alerts: VecDeque<String>,
}

impl Document {
    fn get(&self, node: NodeId) -> Result<&Element, PageError> {
        self.nodes
            .get(node.0)
            .and_then(Option::as_ref)
            .ok_or(PageError::Detached(node))
    }

    fn get_mut(&mut self, node: NodeId) -> Result<&mut Element, PageError> {
        self.nodes
            .get_mut(node.0)
            .and_then(Option::as_mut)
            .ok_or(PageError::Detached(node))
    }

    /// Instantiate a markup tree as fresh, parentless nodes.
    fn build(&mut self, markup: &TemplateNode) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(Some(Element {
            tag: markup.tag.clone(),
            id: markup.id.clone(),
            classes: markup.classes.iter().cloned().collect(),
            text: markup.text.clone(),
            ..Default::default()
        }));
        for child_markup in &markup.children {
            let child = self.build(child_markup);
            if let Some(Some(el)) = self.nodes.get_mut(child.0) {
                el.parent = Some(node);
            }
            if let Some(Some(el)) = self.nodes.get_mut(node.0) {
                el.children.push(child);
            }
        }
        node
    }

    /// Unlink `node` from its parent (or the root list).
    fn detach(&mut self, node: NodeId) -> Result<(), PageError> {
        let parent = self.get_mut(node)?.parent.take();
        match parent {
            Some(parent) => self.get_mut(parent)?.children.retain(|c| *c != node),
            None => self.roots.retain(|r| *r != node),
        }
        Ok(())
    }

    /// Delete `node` and its subtree, including their handlers.
    fn remove_subtree(&mut self, node: NodeId) -> usize {
        let Some(Some(element)) = self.nodes.get_mut(node.0).map(Option::take) else {
            return 0;
        };
        self.handlers.remove(&node);
        1 + element
            .children
            .into_iter()
            .map(|child| self.remove_subtree(child))
            .sum::<usize>()
    }

    fn find(&self, from: NodeId, matches: &dyn Fn(&Element) -> bool) -> Option<NodeId> {
        let element = self.get(from).ok()?;
        if matches(element) {
            return Some(from);
        }
        element
            .children
            .iter()
            .find_map(|child| self.find(*child, matches))
    }

    fn ancestors_and_self(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(node);
        while let Some(n) = current {
            let Ok(element) = self.get(n) else { break };
            path.push(n);
            current = element.parent;
        }
        path
    }
}

/// Element selector understood by `query_selector`: `tag` or `#id`.
fn selector_matches(selector: &str, element: &Element) -> bool {
    match selector.strip_prefix('#') {
        Some(id) => element.id.as_deref() == Some(id),
        None => element.tag == selector,
    }
}

#[derive(Clone, Default)]
pub struct Page {
    doc: Rc<RefCell<Document>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_template(&self, name: &str, markup: TemplateNode) {
        self.doc.borrow_mut().templates.insert(name.to_string(), markup);
    }

    /// Build `markup` and attach it at the top level of the document.
    pub fn append_root(&self, markup: &TemplateNode) -> NodeId {
        let mut doc = self.doc.borrow_mut();
        let node = doc.build(markup);
        doc.roots.push(node);
        node
    }

    /// Clone a template's root element into a new, detached node.
    pub fn import_template(&self, name: &str) -> Result<NodeId, PageError> {
        let mut doc = self.doc.borrow_mut();
        let markup = doc
            .templates
            .get(name)
            .cloned()
            .ok_or_else(|| PageError::UnknownTemplate(name.to_string()))?;
        Ok(doc.build(&markup))
    }

    /// Move `node` into `host` at the given position.
    pub fn insert_adjacent(
        &self,
        host: NodeId,
        position: InsertPosition,
        node: NodeId,
    ) -> Result<(), PageError> {
        let mut doc = self.doc.borrow_mut();
        doc.get(host)?;
        doc.detach(node)?;
        doc.get_mut(node)?.parent = Some(host);
        let children = &mut doc.get_mut(host)?.children;
        match position {
            InsertPosition::AfterBegin => children.insert(0, node),
            InsertPosition::BeforeEnd => children.push(node),
        }
        Ok(())
    }

    /// First attached element, in document order, whose id is `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let doc = self.doc.borrow();
        let matches = |el: &Element| el.id.as_deref() == Some(id);
        doc.roots.iter().find_map(|root| doc.find(*root, &matches))
    }

    /// First element below `root` (depth-first) matching `selector`.
    pub fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        let doc = self.doc.borrow();
        let children = doc.get(root).ok()?.children.clone();
        let matches = |el: &Element| selector_matches(selector, el);
        children.into_iter().find_map(|child| doc.find(child, &matches))
    }

    /// Like `query_selector`, but a miss is an error.
    pub fn require(&self, root: NodeId, selector: &str) -> Result<NodeId, PageError> {
        self.query_selector(root, selector)
            .ok_or_else(|| PageError::MissingElement(selector.to_string()))
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.doc.borrow().get(node).is_ok()
    }

    pub fn tag(&self, node: NodeId) -> Result<String, PageError> {
        Ok(self.doc.borrow().get(node)?.tag.clone())
    }

    pub fn id(&self, node: NodeId) -> Result<Option<String>, PageError> {
        Ok(self.doc.borrow().get(node)?.id.clone())
    }

    pub fn set_id(&self, node: NodeId, id: &str) -> Result<(), PageError> {
        self.doc.borrow_mut().get_mut(node)?.id = Some(id.to_string());
        Ok(())
    }

    pub fn text(&self, node: NodeId) -> Result<String, PageError> {
        Ok(self.doc.borrow().get(node)?.text.clone())
    }

    pub fn set_text(&self, node: NodeId, text: &str) -> Result<(), PageError> {
        self.doc.borrow_mut().get_mut(node)?.text = text.to_string();
        Ok(())
    }

    pub fn value(&self, node: NodeId) -> Result<String, PageError> {
        Ok(self.doc.borrow().get(node)?.value.clone())
    }

    pub fn set_value(&self, node: NodeId, value: &str) -> Result<(), PageError> {
        self.doc.borrow_mut().get_mut(node)?.value = value.to_string();
        Ok(())
    }

    /// The value read as a number input would: NaN when empty or not numeric.
    pub fn value_as_number(&self, node: NodeId) -> Result<f64, PageError> {
        let value = self.value(node)?;
        Ok(value.trim().parse::<f64>().unwrap_or(f64::NAN))
    }

    pub fn add_class(&self, node: NodeId, class: &str) -> Result<(), PageError> {
        self.doc.borrow_mut().get_mut(node)?.classes.insert(class.to_string());
        Ok(())
    }

    pub fn remove_class(&self, node: NodeId, class: &str) -> Result<(), PageError> {
        self.doc.borrow_mut().get_mut(node)?.classes.remove(class);
        Ok(())
    }

    /// False for removed nodes as well.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.doc
            .borrow()
            .get(node)
            .is_ok_and(|el| el.classes.contains(class))
    }

    pub fn children(&self, node: NodeId) -> Result<Vec<NodeId>, PageError> {
        Ok(self.doc.borrow().get(node)?.children.clone())
    }

    /// Remove everything inside `node`. Returns how many elements were dropped.
    pub fn clear_children(&self, node: NodeId) -> Result<usize, PageError> {
        let mut doc = self.doc.borrow_mut();
        let children = std::mem::take(&mut doc.get_mut(node)?.children);
        let removed = children
            .into_iter()
            .map(|child| doc.remove_subtree(child))
            .sum();
        Ok(removed)
    }

    pub fn add_event_listener(
        &self,
        node: NodeId,
        kind: EventKind,
        handler: impl Fn(&mut Event) + 'static,
    ) -> Result<(), PageError> {
        let mut doc = self.doc.borrow_mut();
        doc.get(node)?;
        doc.handlers
            .entry(node)
            .or_default()
            .push((kind, Rc::new(handler)));
        Ok(())
    }

    /// Number of handlers registered directly on `node`.
    pub fn handler_count(&self, node: NodeId) -> usize {
        self.doc.borrow().handlers.get(&node).map_or(0, Vec::len)
    }

    /// Run the handlers for `event` on `target`, then on each ancestor.
    ///
    /// Returns false if any handler called `prevent_default`.
    pub fn dispatch(&self, target: NodeId, event: &mut Event) -> bool {
        let handlers: Vec<Handler> = {
            let doc = self.doc.borrow();
            if doc.get(target).is_err() {
                warn!("Dropping {:?} dispatched to removed element {:?}", event.kind, target);
                return true;
            }
            doc.ancestors_and_self(target)
                .into_iter()
                .filter_map(|node| doc.handlers.get(&node))
                .flatten()
                .filter(|(kind, _)| *kind == event.kind)
                .map(|(_, handler)| handler.clone())
                .collect()
        };
        debug!(
            "Dispatching {:?} to {:?} ({} handlers)",
            event.kind,
            target,
            handlers.len()
        );
        for handler in handlers {
            handler(event);
        }
        !event.default_prevented()
    }

    /// Queue a blocking, user-visible message.
    pub fn alert(&self, message: &str) {
        warn!("Alert: {}", message);
        self.doc.borrow_mut().alerts.push_back(message.to_string());
    }

    /// Pop the oldest pending alert.
    pub fn take_alert(&self) -> Option<String> {
        self.doc.borrow_mut().alerts.pop_front()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.doc.borrow().alerts.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn card_template() -> TemplateNode {
        TemplateNode::new("li")
            .child(TemplateNode::new("h2"))
            .child(TemplateNode::new("p"))
    }

    fn page_with_host() -> (Page, NodeId) {
        let page = Page::new();
        let host = page.append_root(&TemplateNode::new("ul").with_id("host"));
        page.define_template("card", card_template());
        (page, host)
    }

    #[test]
    fn test_imported_template_is_detached_until_inserted() {
        let (page, host) = page_with_host();
        let card = page.import_template("card").unwrap();
        page.set_id(card, "c1").unwrap();
        assert_eq!(page.get_element_by_id("c1"), None);

        page.insert_adjacent(host, InsertPosition::BeforeEnd, card).unwrap();
        assert_eq!(page.get_element_by_id("c1"), Some(card));
    }

    #[test]
    fn test_each_import_is_a_fresh_copy() {
        let (page, _) = page_with_host();
        let a = page.import_template("card").unwrap();
        let b = page.import_template("card").unwrap();
        assert_ne!(a, b);
        let h2 = page.query_selector(a, "h2").unwrap();
        page.set_text(h2, "changed").unwrap();
        let other = page.query_selector(b, "h2").unwrap();
        assert_eq!(page.text(other).unwrap(), "");
    }

    #[test]
    fn test_insert_positions() {
        let (page, host) = page_with_host();
        let first = page.import_template("card").unwrap();
        let last = page.import_template("card").unwrap();
        let front = page.import_template("card").unwrap();
        page.insert_adjacent(host, InsertPosition::BeforeEnd, first).unwrap();
        page.insert_adjacent(host, InsertPosition::BeforeEnd, last).unwrap();
        page.insert_adjacent(host, InsertPosition::AfterBegin, front).unwrap();
        assert_eq!(page.children(host).unwrap(), vec![front, first, last]);
    }

    #[test]
    fn test_unknown_template() {
        let page = Page::new();
        assert!(matches!(
            page.import_template("nope"),
            Err(PageError::UnknownTemplate(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_query_selector_by_tag_and_id() {
        let page = Page::new();
        let root = page.append_root(
            &TemplateNode::new("form")
                .child(TemplateNode::new("input").with_id("title"))
                .child(TemplateNode::new("div").child(TemplateNode::new("input").with_id("people"))),
        );
        let people = page.query_selector(root, "#people").unwrap();
        assert_eq!(page.tag(people).unwrap(), "input");
        let first_input = page.query_selector(root, "input").unwrap();
        assert_eq!(page.id(first_input).unwrap().as_deref(), Some("title"));
        assert!(page.query_selector(root, "ul").is_none());
        assert!(matches!(page.require(root, "ul"), Err(PageError::MissingElement(_))));
    }

    #[test]
    fn test_clear_children_drops_nodes_and_handlers() {
        let (page, host) = page_with_host();
        let card = page.import_template("card").unwrap();
        page.insert_adjacent(host, InsertPosition::BeforeEnd, card).unwrap();
        page.add_event_listener(card, EventKind::DragStart, |_| {}).unwrap();
        assert_eq!(page.handler_count(card), 1);

        let removed = page.clear_children(host).unwrap();

        assert_eq!(removed, 3);
        assert!(!page.contains(card));
        assert_eq!(page.handler_count(card), 0);
        assert!(page.children(host).unwrap().is_empty());
        assert!(matches!(page.set_text(card, "x"), Err(PageError::Detached(_))));
    }

    #[test]
    fn test_dispatch_bubbles_to_ancestors() {
        let (page, host) = page_with_host();
        let card = page.import_template("card").unwrap();
        page.insert_adjacent(host, InsertPosition::BeforeEnd, card).unwrap();
        let h2 = page.query_selector(card, "h2").unwrap();

        let order = Rc::new(RefCell::new(Vec::new()));
        for (node, name) in [(host, "host"), (card, "card")] {
            let order = order.clone();
            page.add_event_listener(node, EventKind::DragOver, move |_| order.borrow_mut().push(name))
                .unwrap();
        }

        let mut event = Event::new(EventKind::DragOver);
        page.dispatch(h2, &mut event);
        assert_eq!(*order.borrow(), vec!["card", "host"]);
    }

    #[test]
    fn test_dispatch_filters_by_kind_and_reports_prevent_default() {
        let (page, host) = page_with_host();
        let drops = Rc::new(Cell::new(0));
        let counter = drops.clone();
        page.add_event_listener(host, EventKind::Drop, move |e| {
            counter.set(counter.get() + 1);
            e.prevent_default();
        })
        .unwrap();

        assert!(page.dispatch(host, &mut Event::new(EventKind::DragOver)));
        assert!(!page.dispatch(host, &mut Event::new(EventKind::Drop)));
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_handler_may_mutate_page() {
        let (page, host) = page_with_host();
        let card = page.import_template("card").unwrap();
        page.insert_adjacent(host, InsertPosition::BeforeEnd, card).unwrap();
        let inner = page.clone();
        page.add_event_listener(card, EventKind::Drop, move |_| {
            inner.clear_children(host).unwrap();
        })
        .unwrap();

        page.dispatch(card, &mut Event::new(EventKind::Drop));
        assert!(!page.contains(card));
    }

    #[test]
    fn test_value_as_number() {
        let page = Page::new();
        let input = page.append_root(&TemplateNode::new("input"));
        assert!(page.value_as_number(input).unwrap().is_nan());
        page.set_value(input, " 3 ").unwrap();
        assert_eq!(page.value_as_number(input).unwrap(), 3.0);
        page.set_value(input, "three").unwrap();
        assert!(page.value_as_number(input).unwrap().is_nan());
    }

    #[test]
    fn test_alerts_queue_in_order() {
        let page = Page::new();
        page.alert("first");
        page.alert("second");
        assert_eq!(page.alerts(), vec!["first", "second"]);
        assert_eq!(page.take_alert().as_deref(), Some("first"));
        assert_eq!(page.take_alert().as_deref(), Some("second"));
        assert_eq!(page.take_alert(), None);
    }

    #[test]
    fn test_classes() {
        let page = Page::new();
        let ul = page.append_root(&TemplateNode::new("ul"));
        page.add_class(ul, "droppable").unwrap();
        assert!(page.has_class(ul, "droppable"));
        page.remove_class(ul, "droppable").unwrap();
        assert!(!page.has_class(ul, "droppable"));
    }
}
