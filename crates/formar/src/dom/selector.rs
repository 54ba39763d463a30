//! Selector taxonomy for locating elements in the tree.

use super::Element;

/// Selector for locating elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by `id` attribute (e.g. `#form`)
    Id(String),
    /// Match by class (e.g. `.multi-select`)
    Class(String),
    /// Match by tag name
    Tag(String),
    /// Match `input` elements by their `type` attribute
    InputType(String),
}

impl Selector {
    /// Create an id selector
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Create a class selector
    #[must_use]
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// Create a tag-name selector
    #[must_use]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    /// Create an input-type selector (e.g. `input[type="checkbox"]`)
    #[must_use]
    pub fn input_type(input_type: impl Into<String>) -> Self {
        Self::InputType(input_type.into())
    }

    /// Whether an element matches this selector
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Id(id) => element.attr("id").as_deref() == Some(id),
            Self::Class(class) => element.has_class(class),
            Self::Tag(tag) => element.tag() == *tag,
            Self::InputType(input_type) => {
                element.tag() == "input" && element.attr("type").as_deref() == Some(input_type)
            }
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::InputType(input_type) => write!(f, "input[type=\"{input_type}\"]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_selector_matches_id_attribute() {
        let el = Element::new("form");
        el.set_attr("id", "form");
        assert!(Selector::id("form").matches(&el));
        assert!(!Selector::id("other").matches(&el));
    }

    #[test]
    fn class_selector_matches_any_class() {
        let el = Element::new("div");
        el.add_class("multi-select");
        el.add_class("wide");
        assert!(Selector::class("multi-select").matches(&el));
        assert!(Selector::class("wide").matches(&el));
        assert!(!Selector::class("narrow").matches(&el));
    }

    #[test]
    fn input_type_selector_requires_input_tag() {
        let input = Element::new("input");
        input.set_attr("type", "checkbox");
        let button = Element::new("button");
        button.set_attr("type", "checkbox");
        assert!(Selector::input_type("checkbox").matches(&input));
        assert!(!Selector::input_type("checkbox").matches(&button));
    }

    #[test]
    fn display_renders_css_shape() {
        assert_eq!(Selector::id("form").to_string(), "#form");
        assert_eq!(Selector::class("multi-select").to_string(), ".multi-select");
        assert_eq!(
            Selector::input_type("checkbox").to_string(),
            "input[type=\"checkbox\"]"
        );
    }
}
