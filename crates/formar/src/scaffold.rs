//! Form scaffolding operations.
//!
//! Stateless helpers that append labeled inputs, grouped sections, repeatable
//! list entries, and action buttons to a caller-supplied container. Every
//! helper returns the created element as a live handle the caller may further
//! style, query, or remove.

use crate::dom::{Element, Selector};
use crate::event::EventType;
use crate::field::{CheckboxField, NumberField, PasswordField, TextField};
use crate::result::{FormarError, FormarResult};

/// Id of the page-unique form element `init_form` scaffolds into
pub const FORM_ID: &str = "form";

/// Id of the inputs sub-container created by `init_form`
pub const INPUTS_ID: &str = "inputs";

/// Locate the `#form` element under `root` and scaffold it.
///
/// Appends an empty `#inputs` container, a line break, a submit button
/// labeled "Save" and a discard button wired to reload the page. Returns the
/// inputs container for further population.
///
/// # Errors
///
/// Returns [`FormarError::MissingElement`] when no `#form` element exists
/// under `root`; the caller must guarantee that precondition.
pub fn init_form(root: &Element) -> FormarResult<Element> {
    let form = root
        .query(&Selector::id(FORM_ID))
        .ok_or_else(|| FormarError::MissingElement {
            selector: format!("#{FORM_ID}"),
        })?;

    let inputs = Element::new("div");
    inputs.set_attr("id", INPUTS_ID);
    form.append_child(&inputs);
    form.append_child(&Element::new("br"));

    let save = Element::new("button");
    save.set_attr("type", "submit");
    save.set_rich_label("Save");
    form.append_child(&save);

    let discard = Element::new("button");
    discard.set_attr("type", "button");
    discard.set_attr("onclick", "location.reload()");
    discard.set_rich_label("Discard Changes");
    form.append_child(&discard);

    tracing::debug!("form scaffold initialized");
    Ok(inputs)
}

/// Shared shape of the four field builders: a label element carrying the
/// display text, with the input nested inside it.
fn labeled_input(container: &Element, label: &str, id: &str, input_type: &str) -> Element {
    let label_element = Element::new("label");
    label_element.set_plain_label(label);
    let input = Element::new("input");
    container.append_child(&label_element);
    label_element.append_child(&input);
    input.set_attr("type", input_type);
    input.set_attr("name", id);
    input
}

/// Append a labeled checkbox input.
///
/// The `checked` attribute is present only when the flag is true; an
/// unchecked box omits it entirely.
pub fn append_checkbox(container: &Element, field: &CheckboxField) -> Element {
    let input = labeled_input(container, &field.label, &field.id, "checkbox");
    if field.checked {
        input.set_attr("checked", "checked");
    }
    input
}

/// Append a labeled number input
pub fn append_number(container: &Element, field: &NumberField) -> Element {
    let input = labeled_input(container, &field.label, &field.id, "number");
    input.set_attr("value", &field.value);
    input
}

/// Append a labeled text input
pub fn append_text(container: &Element, field: &TextField) -> Element {
    let input = labeled_input(container, &field.label, &field.id, "text");
    input.set_attr("value", &field.value);
    input
}

/// Append a labeled password input
pub fn append_password(container: &Element, field: &PasswordField) -> Element {
    let input = labeled_input(container, &field.label, &field.id, "password");
    input.set_attr("value", &field.value);
    input
}

/// Append a heading and an empty list for repeatable entries.
///
/// The label is rich (interpreted as markup). Returns the list; call once per
/// group name.
pub fn make_multi_container(container: &Element, label: &str) -> Element {
    let multi = Element::new("ul");
    let header = Element::new("h3");
    header.set_rich_label(label);
    container.append_child(&header);
    container.append_child(&multi);
    multi
}

/// Append a new list entry pre-populated with a "Remove" button.
///
/// Clicking the button detaches the entry from the list immediately and
/// unconditionally, leaving siblings untouched. Returns the entry for the
/// caller to populate with field builders.
pub fn make_multi_container_entry(list: &Element) -> Element {
    let entry = Element::new("li");
    entry.set_style("position: relative;");
    let handle = entry.downgrade();
    let button = append_button(&entry, "Remove", move || {
        if let Some(entry) = handle.upgrade() {
            entry.detach();
        }
    });
    button.set_style("position: absolute; right: 0; top: 0; margin: 0; padding: 2px 6px;");
    list.append_child(&entry);
    entry
}

/// Append a heading and an empty grouping element classed `section`.
///
/// Unlike multi-container headings, the section heading is plain text and is
/// escaped on render.
pub fn make_section(container: &Element, label: &str) -> Element {
    let section = Element::new("div");
    section.add_class("section");
    let header = Element::new("h2");
    header.set_plain_label(label);
    header.set_style("margin-bottom: 0;");
    container.append_child(&header);
    container.append_child(&section);
    section
}

/// Append a button with a rich label whose click invokes `on_click`
pub fn append_button(container: &Element, label: &str, on_click: impl Fn() + 'static) -> Element {
    let button = Element::new("button");
    button.set_rich_label(label);
    button.set_attr("type", "button");
    button.on(EventType::Click, move |_| on_click());
    container.append_child(&button);
    button
}
