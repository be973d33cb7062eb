use crate::TodoItem;

/// Trait for selecting todos out of the list.
pub trait TodoFilter {
    /// Returns true if the item belongs in the filtered view.
    fn matches(&self, item: &TodoItem) -> bool;

    /// Apply the filter to a slice, keeping each match's position in the
    /// unfiltered slice.
    fn apply<'a>(&self, items: &'a [TodoItem]) -> Vec<(usize, &'a TodoItem)> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(item))
            .collect()
    }
}
