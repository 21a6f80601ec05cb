//! Layout Rules
//!
//! Section widths and which task actions each column permits.

use crate::config::LayoutConfig;

/// Which actions a task card offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCapabilities {
    pub editable: bool,
    pub removable: bool,
    pub promotable: bool,
    pub demotable: bool,
}

/// Per-section configuration derived from the column position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionConfig {
    pub has_task_adder: bool,
    pub task: TaskCapabilities,
}

impl SectionConfig {
    /// First column: adder, editable tasks, no demote.
    /// Last column: no promote. Every task is removable.
    pub fn for_position(index: usize, count: usize) -> Self {
        let is_first = index == 0;
        let is_last = index + 1 >= count;
        Self {
            has_task_adder: is_first,
            task: TaskCapabilities {
                editable: is_first,
                removable: true,
                promotable: !is_last,
                demotable: !is_first,
            },
        }
    }
}

/// Whether sections are laid out side by side at this viewport width
pub fn is_horizontal(viewport_px: f64, layout: &LayoutConfig) -> bool {
    viewport_px >= layout.breakpoint_px
}

/// Width of one section, in percent of the board
pub fn section_width_percent(count: usize, viewport_px: f64, layout: &LayoutConfig) -> f64 {
    if count == 0 || !is_horizontal(viewport_px, layout) {
        return layout.stacked_width_percent;
    }
    (100.0 / count as f64 - layout.gap_percent).max(0.0)
}

/// Characters still available in a bounded text field.
///
/// Counted in UTF-16 code units, as the browser's `maxlength` does, so an
/// emoji uses two.
pub fn remaining_chars(text: &str, max: usize) -> usize {
    max.saturating_sub(text.encode_utf16().count())
}
