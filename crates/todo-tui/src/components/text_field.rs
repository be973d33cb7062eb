use ratatui::layout::{Position, Rect};

/// Where a single-line field starts drawing and where its cursor lands.
///
/// Text wider than the field scrolls left so the cursor stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldView {
    pub scroll: u16,
    pub cursor: Position,
}

impl FieldView {
    /// `inner` is the area inside the field's border, `cursor_column` the
    /// cursor offset in columns from the start of the text.
    pub fn new(inner: Rect, cursor_column: usize) -> Self {
        let last_column = usize::from(inner.width.saturating_sub(1));
        let scroll = cursor_column.saturating_sub(last_column);
        let offset = u16::try_from(cursor_column - scroll).unwrap_or(u16::MAX);

        let max_x = inner.right().saturating_sub(1).max(inner.x);
        let cursor = Position::new(inner.x.saturating_add(offset).min(max_x), inner.y);

        Self {
            scroll: u16::try_from(scroll).unwrap_or(u16::MAX),
            cursor,
        }
    }
}
