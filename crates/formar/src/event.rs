//! Event taxonomy and listener plumbing.
//!
//! Dispatch is synchronous and single-threaded: a listener runs on the
//! element it was registered on, in registration order, strictly after the
//! triggering call. Detaching an element from the tree implicitly drops its
//! listeners with it.

use std::fmt;
use std::rc::Rc;

use crate::dom::Element;

/// DOM event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Mouse click
    Click,
    /// Double click
    DoubleClick,
    /// Mouse down
    MouseDown,
    /// Mouse up
    MouseUp,
    /// Key down
    KeyDown,
    /// Key up
    KeyUp,
    /// Input value change (per keystroke)
    Input,
    /// Form control change (committed value)
    Change,
    /// Form submit
    Submit,
    /// Focus gained
    Focus,
    /// Focus lost
    Blur,
    /// Custom event
    Custom(&'static str),
}

impl EventType {
    /// Get the DOM event name
    #[must_use]
    pub fn dom_name(&self) -> &str {
        match self {
            Self::Click => "click",
            Self::DoubleClick => "dblclick",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
            Self::Input => "input",
            Self::Change => "change",
            Self::Submit => "submit",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Custom(name) => name,
        }
    }
}

/// A listener registered on an element.
pub(crate) struct Listener {
    pub(crate) event: EventType,
    pub(crate) callback: Rc<dyn Fn(&Element)>,
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}
