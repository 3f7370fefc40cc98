//! Transient drag-session state.

use picrolace_core::Position;

/// Axis a linear drag is locked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DragDirection {
    /// The drag moves along a single row.
    Horizontal,
    /// The drag moves along a single column.
    Vertical,
}

/// Live feedback counts shown next to the pointer while dragging.
///
/// `count` is the number of cells spanned by the drag itself;
/// `block_count` is the matching run length immediately adjacent outside the
/// span. The UI shows just `count` when the two agree and
/// `"count/blockCount"` otherwise, where the displayed block count is
/// `count + block_count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkedCellsCount {
    /// Cells spanned by the drag, endpoints inclusive.
    pub count: usize,
    /// Adjacent matching cells outside the dragged span.
    pub block_count: usize,
}

/// State that exists only between `start_dragging` and `stop_dragging`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragSession {
    pub(crate) start: Position,
    pub(crate) end: Position,
    pub(crate) direction: Option<DragDirection>,
}

impl DragSession {
    pub(crate) fn new(start: Position) -> Self {
        Self {
            start,
            end: start,
            direction: None,
        }
    }
}
