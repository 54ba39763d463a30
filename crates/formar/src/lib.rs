//! Formar: form scaffolding helpers over a testable in-memory element tree.
//!
//! Builds simple HTML forms dynamically: labeled text/number/password/
//! checkbox inputs, repeatable "multi" list sections with per-entry removal,
//! action buttons, and multi-select checkbox groups whose checked subset is
//! reported as one logical value. The helpers mutate a live [`dom::Element`]
//! tree that stands in for the hosting document, so every operation is
//! directly testable and renders to deterministic HTML.
//!
//! # Example
//!
//! ```
//! use formar::prelude::*;
//!
//! let root = Element::new("body");
//! let form = Element::new("form");
//! form.set_attr("id", "form");
//! root.append_child(&form);
//!
//! let inputs = init_form(&root)?;
//! let general = make_section(&inputs, "General");
//! append_text(&general, &TextField::new("Name", "name", "www"));
//! append_number(&general, &NumberField::new("Port", "port", 80));
//!
//! assert!(root.to_html().contains(r#"<input type="text" name="name" value="www">"#));
//! # Ok::<(), FormarError>(())
//! ```

#![warn(missing_docs)]

pub mod dom;
pub mod event;
pub mod field;
pub mod multi_select;
mod result;
pub mod scaffold;

pub use result::{FormarError, FormarResult};

/// Commonly used types and operations
pub mod prelude {
    pub use crate::dom::{escape_html, Element, Selector, WeakElement};
    pub use crate::event::EventType;
    pub use crate::field::{CheckboxField, NumberField, PasswordField, TextField};
    pub use crate::multi_select::{
        initialize_multi_select_listeners, update_multi_select_value, LogSink, SelectionReport,
        SelectionSink, MULTI_SELECT_CLASS,
    };
    pub use crate::result::{FormarError, FormarResult};
    pub use crate::scaffold::{
        append_button, append_checkbox, append_number, append_password, append_text, init_form,
        make_multi_container, make_multi_container_entry, make_section, FORM_ID, INPUTS_ID,
    };
}
