//! In-memory element tree.
//!
//! The form helpers in this crate mutate a live element tree the way the
//! browser helpers they model mutate the document. This module supplies that
//! tree: reference-counted element handles with tags, attributes, classes,
//! label content, children in document order, and synchronously dispatched
//! event listeners.
//!
//! Ownership model: an [`Element`] is a cheap-clone handle; parents own their
//! children, child-to-parent links are weak. Everything is single-threaded
//! (`Rc`/`RefCell`), matching the cooperative, non-concurrent execution model
//! of the hosting page this substitutes for.

mod render;
mod selector;

pub use render::escape_html;
pub use selector::Selector;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::event::{EventType, Listener};

/// Label content attached to an element.
///
/// The plain/rich split is deliberate and must not be unified: plain text is
/// escaped on render, rich text is emitted as markup. Section headings are
/// plain; button and multi-container labels are rich.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum LabelContent {
    /// No label content
    #[default]
    None,
    /// Text content, escaped when rendered
    Plain(String),
    /// Markup content, rendered as-is
    Rich(String),
}

struct ElementData {
    tag: String,
    /// Attributes in insertion order; setting an existing name replaces in place.
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    style: Option<String>,
    label: LabelContent,
    children: Vec<Element>,
    parent: Weak<RefCell<ElementData>>,
    listeners: Vec<Listener>,
    /// Crate-internal marks used by binding routines to stay idempotent.
    marks: Vec<&'static str>,
}

/// A live handle to an element in the tree.
///
/// Cloning the handle does not clone the element; both handles refer to the
/// same node. Use [`Element::same_node`] for identity comparison.
#[derive(Clone)]
pub struct Element {
    inner: Rc<RefCell<ElementData>>,
}

/// A non-owning handle to an element.
///
/// Used by listeners that refer back up the tree (the remove-button case)
/// without keeping their ancestor alive.
#[derive(Clone)]
pub struct WeakElement {
    inner: Weak<RefCell<ElementData>>,
}

impl WeakElement {
    /// Upgrade to a live handle, if the element is still alive
    #[must_use]
    pub fn upgrade(&self) -> Option<Element> {
        self.inner.upgrade().map(|inner| Element { inner })
    }
}

impl fmt::Debug for WeakElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WeakElement")
    }
}

impl Element {
    /// Create a detached element with the given tag name
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementData {
                tag: tag.into(),
                attributes: Vec::new(),
                classes: Vec::new(),
                style: None,
                label: LabelContent::None,
                children: Vec::new(),
                parent: Weak::new(),
                listeners: Vec::new(),
                marks: Vec::new(),
            })),
        }
    }

    /// Tag name
    #[must_use]
    pub fn tag(&self) -> String {
        self.inner.borrow().tag.clone()
    }

    /// Downgrade to a non-owning handle
    #[must_use]
    pub fn downgrade(&self) -> WeakElement {
        WeakElement {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Whether two handles refer to the same node
    #[must_use]
    pub fn same_node(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // --- attributes -------------------------------------------------------

    /// Set an attribute, replacing any existing value
    pub fn set_attr(&self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        let mut data = self.inner.borrow_mut();
        if let Some(slot) = data.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            data.attributes.push((name, value));
        }
    }

    /// Get an attribute value
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// Whether an attribute is present
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.inner.borrow().attributes.iter().any(|(n, _)| n == name)
    }

    /// Remove an attribute if present
    pub fn remove_attr(&self, name: &str) {
        self.inner.borrow_mut().attributes.retain(|(n, _)| n != name);
    }

    /// Set or clear the checked state of a checkbox input.
    ///
    /// Checked state is modeled as presence of the `checked` attribute;
    /// unchecked means the attribute is entirely absent, never `"false"`.
    pub fn set_checked(&self, checked: bool) {
        if checked {
            self.set_attr("checked", "checked");
        } else {
            self.remove_attr("checked");
        }
    }

    /// Whether the `checked` attribute is present
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.has_attr("checked")
    }

    // --- classes and style ------------------------------------------------

    /// Add a class if not already present
    pub fn add_class(&self, class: impl Into<String>) {
        let class = class.into();
        let mut data = self.inner.borrow_mut();
        if !data.classes.contains(&class) {
            data.classes.push(class);
        }
    }

    /// Whether a class is present
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    /// Set the inline style string
    pub fn set_style(&self, style: impl Into<String>) {
        self.inner.borrow_mut().style = Some(style.into());
    }

    /// Inline style string, if set
    #[must_use]
    pub fn style(&self) -> Option<String> {
        self.inner.borrow().style.clone()
    }

    // --- labels -----------------------------------------------------------

    /// Set the label content as plain text, escaped on render
    pub fn set_plain_label(&self, text: impl Into<String>) {
        self.inner.borrow_mut().label = LabelContent::Plain(text.into());
    }

    /// Set the label content as markup, rendered as-is
    pub fn set_rich_label(&self, markup: impl Into<String>) {
        self.inner.borrow_mut().label = LabelContent::Rich(markup.into());
    }

    /// Visible label text, regardless of plain/rich kind
    #[must_use]
    pub fn label_text(&self) -> Option<String> {
        match &self.inner.borrow().label {
            LabelContent::None => None,
            LabelContent::Plain(text) | LabelContent::Rich(text) => Some(text.clone()),
        }
    }

    // --- tree structure ---------------------------------------------------

    /// Append a child, detaching it from any previous parent.
    ///
    /// Appending an element into its own subtree is refused (and logged)
    /// since it would make the tree cyclic.
    pub fn append_child(&self, child: &Element) {
        if child.same_node(self) || self.is_descendant_of(child) {
            tracing::warn!(tag = %child.tag(), "refusing to append an element into its own subtree");
            return;
        }
        child.detach();
        child.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().children.push(child.clone());
    }

    /// Children in document order
    #[must_use]
    pub fn children(&self) -> Vec<Element> {
        self.inner.borrow().children.clone()
    }

    /// Parent element, if attached
    #[must_use]
    pub fn parent(&self) -> Option<Element> {
        self.inner.borrow().parent.upgrade().map(|inner| Element { inner })
    }

    /// Detach this element from its parent.
    ///
    /// A single tree-detach operation: the subtree below stays intact, and
    /// listeners on detached elements are dropped with them once the last
    /// handle goes away.
    pub fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent
                .inner
                .borrow_mut()
                .children
                .retain(|c| !c.same_node(self));
            self.inner.borrow_mut().parent = Weak::new();
        }
    }

    /// Whether this element is below `ancestor` in the tree
    #[must_use]
    pub fn is_descendant_of(&self, ancestor: &Element) -> bool {
        let mut current = self.parent();
        while let Some(el) = current {
            if el.same_node(ancestor) {
                return true;
            }
            current = el.parent();
        }
        false
    }

    /// All descendants in document order (preorder), excluding self
    #[must_use]
    pub fn descendants(&self) -> Vec<Element> {
        fn collect(el: &Element, out: &mut Vec<Element>) {
            for child in &el.inner.borrow().children {
                out.push(child.clone());
                collect(child, out);
            }
        }
        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }

    /// First descendant matching the selector, in document order
    #[must_use]
    pub fn query(&self, selector: &Selector) -> Option<Element> {
        self.descendants().into_iter().find(|el| selector.matches(el))
    }

    /// All descendants matching the selector, in document order
    #[must_use]
    pub fn query_all(&self, selector: &Selector) -> Vec<Element> {
        self.descendants()
            .into_iter()
            .filter(|el| selector.matches(el))
            .collect()
    }

    // --- events -----------------------------------------------------------

    /// Register a listener for an event type.
    ///
    /// Listeners run in registration order and stay attached until the
    /// element itself is dropped.
    pub fn on(&self, event: EventType, callback: impl Fn(&Element) + 'static) {
        self.inner.borrow_mut().listeners.push(Listener {
            event,
            callback: Rc::new(callback),
        });
    }

    /// Number of listeners registered for an event type
    #[must_use]
    pub fn listener_count(&self, event: EventType) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.event == event)
            .count()
    }

    /// Dispatch an event on this element, running its listeners synchronously.
    ///
    /// Callbacks may mutate the tree, including detaching this element; no
    /// borrow is held across a callback.
    pub fn dispatch(&self, event: EventType) {
        let callbacks: Vec<Rc<dyn Fn(&Element)>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.event == event)
            .map(|l| Rc::clone(&l.callback))
            .collect();
        for callback in callbacks {
            callback(self);
        }
    }

    /// Dispatch a click event
    pub fn click(&self) {
        self.dispatch(EventType::Click);
    }

    // --- rendering --------------------------------------------------------

    /// Render this element and its subtree to an HTML string.
    ///
    /// Deterministic: attributes in insertion order, plain labels escaped,
    /// rich labels raw, void elements without a closing tag.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        render::render_element(self, &mut out);
        out
    }

    // --- internal marks ---------------------------------------------------

    pub(crate) fn mark(&self, key: &'static str) {
        let mut data = self.inner.borrow_mut();
        if !data.marks.contains(&key) {
            data.marks.push(key);
        }
    }

    pub(crate) fn has_mark(&self, key: &'static str) -> bool {
        self.inner.borrow().marks.contains(&key)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("Element")
            .field("tag", &data.tag)
            .field("attributes", &data.attributes)
            .field("classes", &data.classes)
            .field("children", &data.children.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_attr_replaces_existing_value() {
        let el = Element::new("input");
        el.set_attr("name", "port");
        el.set_attr("name", "hostname");
        assert_eq!(el.attr("name").as_deref(), Some("hostname"));
        assert_eq!(
            el.inner.borrow().attributes.len(),
            1,
            "replacement must not duplicate the attribute"
        );
    }

    #[test]
    fn checked_attribute_absent_when_unchecked() {
        let el = Element::new("input");
        el.set_checked(true);
        assert_eq!(el.attr("checked").as_deref(), Some("checked"));
        el.set_checked(false);
        assert!(!el.has_attr("checked"));
        assert_ne!(el.attr("checked").as_deref(), Some("false"));
    }

    #[test]
    fn append_child_sets_parent_link() {
        let parent = Element::new("div");
        let child = Element::new("span");
        parent.append_child(&child);
        assert!(child.parent().unwrap().same_node(&parent));
        assert!(child.is_descendant_of(&parent));
    }

    #[test]
    fn append_child_reparents() {
        let first = Element::new("div");
        let second = Element::new("div");
        let child = Element::new("span");
        first.append_child(&child);
        second.append_child(&child);
        assert!(first.children().is_empty());
        assert!(child.parent().unwrap().same_node(&second));
    }

    #[test]
    fn append_into_own_subtree_is_refused() {
        let parent = Element::new("div");
        let child = Element::new("div");
        parent.append_child(&child);
        child.append_child(&parent);
        assert!(parent.parent().is_none());
        assert!(child.children().is_empty());
    }

    #[test]
    fn detach_removes_only_self() {
        let list = Element::new("ul");
        let a = Element::new("li");
        let b = Element::new("li");
        let c = Element::new("li");
        list.append_child(&a);
        list.append_child(&b);
        list.append_child(&c);

        b.detach();

        let remaining = list.children();
        assert_eq!(remaining.len(), 2);
        assert!(remaining[0].same_node(&a));
        assert!(remaining[1].same_node(&c));
        assert!(b.parent().is_none());
    }

    #[test]
    fn descendants_are_in_document_order() {
        let root = Element::new("div");
        let first = Element::new("section");
        let nested = Element::new("input");
        let second = Element::new("section");
        root.append_child(&first);
        first.append_child(&nested);
        root.append_child(&second);

        let order: Vec<String> = root.descendants().iter().map(Element::tag).collect();
        assert_eq!(order, vec!["section", "input", "section"]);
        assert!(root.descendants()[0].same_node(&first));
        assert!(root.descendants()[1].same_node(&nested));
    }

    #[test]
    fn query_finds_first_match_in_document_order() {
        let root = Element::new("div");
        let a = Element::new("input");
        a.set_attr("type", "text");
        let b = Element::new("input");
        b.set_attr("type", "checkbox");
        root.append_child(&a);
        root.append_child(&b);

        let found = root.query(&Selector::input_type("checkbox")).unwrap();
        assert!(found.same_node(&b));
        assert!(root.query(&Selector::id("missing")).is_none());
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let el = Element::new("button");
        let log = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let log = Rc::clone(&log);
            el.on(EventType::Click, move |_| log.borrow_mut().push(i));
        }
        el.click();
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn listener_may_detach_its_own_element() {
        let list = Element::new("ul");
        let entry = Element::new("li");
        list.append_child(&entry);

        let handle = entry.downgrade();
        entry.on(EventType::Click, move |_| {
            if let Some(entry) = handle.upgrade() {
                entry.detach();
            }
        });

        entry.click();
        assert!(list.children().is_empty());
    }

    #[test]
    fn dispatch_only_runs_matching_event_type() {
        let el = Element::new("input");
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        el.on(EventType::Change, move |_| counter.set(counter.get() + 1));

        el.dispatch(EventType::Input);
        assert_eq!(fired.get(), 0);
        el.dispatch(EventType::Change);
        assert_eq!(fired.get(), 1);
        assert_eq!(el.listener_count(EventType::Change), 1);
        assert_eq!(el.listener_count(EventType::Input), 0);
    }

    #[test]
    fn marks_are_idempotent() {
        let el = Element::new("input");
        assert!(!el.has_mark("bound"));
        el.mark("bound");
        el.mark("bound");
        assert!(el.has_mark("bound"));
        assert_eq!(el.inner.borrow().marks.len(), 1);
    }
}
