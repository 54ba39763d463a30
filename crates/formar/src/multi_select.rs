//! Multi-select groups: checkbox containers whose checked subset is read as
//! one logical value (an ordered set of strings).
//!
//! Binding is explicit rather than a page-ready side effect:
//! [`initialize_multi_select_listeners`] is invoked by the host at a chosen
//! time and may be re-invoked after dynamic group insertion. Checkboxes added
//! since the last invocation are not covered until the routine runs again.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::dom::{Element, Selector};
use crate::event::EventType;
use crate::result::FormarResult;

/// Marker class flagging an element as a multi-select container
pub const MULTI_SELECT_CLASS: &str = "multi-select";

/// Mark keeping re-invocations of the binding routine idempotent.
const BOUND_MARK: &str = "multi-select-change";

/// Receiver for recomputed multi-select values.
///
/// [`LogSink`] reports to the diagnostic log; a server-submission sink can
/// replace it without touching the scan logic.
pub trait SelectionSink {
    /// Called with the group element and its checked values, in document order
    fn report(&self, group: &Element, values: &[String]);
}

/// Sink that emits a structured log event per report
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SelectionSink for LogSink {
    fn report(&self, group: &Element, values: &[String]) {
        let group_id = group.attr("id").unwrap_or_default();
        tracing::info!(group = %group_id, ?values, "selected values");
    }
}

/// Wire-ready snapshot of one group's selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionReport {
    /// Group id, when the group element carries one
    pub group: Option<String>,
    /// Checked values in document order
    pub values: Vec<String>,
}

impl SelectionReport {
    /// Snapshot the current selection of a group
    #[must_use]
    pub fn capture(group: &Element) -> Self {
        Self {
            group: group.attr("id"),
            values: update_multi_select_value(group),
        }
    }

    /// Serialize to the JSON form a future submission endpoint would receive
    pub fn to_json(&self) -> FormarResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Collect the values of the currently checked checkboxes under `group`.
///
/// Values come back in document order, one per checked box, none invented and
/// none dropped; a box without a `value` attribute contributes the DOM
/// default `"on"`. An empty result is valid. No error conditions.
#[must_use]
pub fn update_multi_select_value(group: &Element) -> Vec<String> {
    group
        .query_all(&Selector::input_type("checkbox"))
        .into_iter()
        .filter(Element::is_checked)
        .map(|checkbox| checkbox.attr("value").unwrap_or_else(|| "on".to_string()))
        .collect()
}

/// Attach change listeners to every checkbox inside every `.multi-select`
/// container under `root`.
///
/// On any bound checkbox's change event, the owning group's value list is
/// recomputed and reported through `sink`. Checkboxes bound by a previous
/// invocation are skipped, so re-invoking after dynamic insertion covers new
/// checkboxes without double-reporting old ones. Returns the number of
/// checkboxes newly bound.
pub fn initialize_multi_select_listeners(root: &Element, sink: Rc<dyn SelectionSink>) -> usize {
    let mut bound = 0;
    for group in root.query_all(&Selector::class(MULTI_SELECT_CLASS)) {
        for checkbox in group.query_all(&Selector::input_type("checkbox")) {
            if checkbox.has_mark(BOUND_MARK) {
                continue;
            }
            let group_ref = group.downgrade();
            let sink = Rc::clone(&sink);
            checkbox.on(EventType::Change, move |_| {
                let Some(group) = group_ref.upgrade() else {
                    return;
                };
                let values = update_multi_select_value(&group);
                sink.report(&group, &values);
            });
            checkbox.mark(BOUND_MARK);
            bound += 1;
        }
    }
    tracing::debug!(bound, "multi-select listeners attached");
    bound
}
