use super::TodoFilter;
use crate::TodoItem;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The three list tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewFilter {
    #[default]
    All,
    Important,
    Others,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown view '{0}', expected one of: all, important, others")]
pub struct ParseViewFilterError(pub String);

impl ViewFilter {
    pub const ALL: [ViewFilter; 3] = [ViewFilter::All, ViewFilter::Important, ViewFilter::Others];

    pub fn label(&self) -> &'static str {
        match self {
            ViewFilter::All => "All Todos",
            ViewFilter::Important => "Important Todos",
            ViewFilter::Others => "Other Todos",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewFilter::All => "all",
            ViewFilter::Important => "important",
            ViewFilter::Others => "others",
        }
    }

    pub fn position(&self) -> usize {
        match self {
            ViewFilter::All => 0,
            ViewFilter::Important => 1,
            ViewFilter::Others => 2,
        }
    }

    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl TodoFilter for ViewFilter {
    fn matches(&self, item: &TodoItem) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Important => item.important,
            ViewFilter::Others => !item.important,
        }
    }
}

impl fmt::Display for ViewFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewFilter {
    type Err = ParseViewFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ViewFilter::All),
            "important" => Ok(ViewFilter::Important),
            "others" | "other" => Ok(ViewFilter::Others),
            _ => Err(ParseViewFilterError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str, important: bool) -> TodoItem {
        let mut item = TodoItem::new(text).unwrap();
        item.important = important;
        item
    }

    #[test]
    fn test_matches() {
        let starred = item("a", true);
        let plain = item("b", false);

        assert!(ViewFilter::All.matches(&starred));
        assert!(ViewFilter::All.matches(&plain));
        assert!(ViewFilter::Important.matches(&starred));
        assert!(!ViewFilter::Important.matches(&plain));
        assert!(!ViewFilter::Others.matches(&starred));
        assert!(ViewFilter::Others.matches(&plain));
    }

    #[test]
    fn test_apply_keeps_original_positions() {
        let items = vec![item("a", false), item("b", true), item("c", false)];
        let others: Vec<usize> = ViewFilter::Others
            .apply(&items)
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        assert_eq!(others, vec![0, 2]);
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(ViewFilter::All.next(), ViewFilter::Important);
        assert_eq!(ViewFilter::Others.next(), ViewFilter::All);
        assert_eq!(ViewFilter::All.prev(), ViewFilter::Others);
        assert_eq!(ViewFilter::Important.prev(), ViewFilter::All);
    }

    #[test]
    fn test_position_round_trip() {
        for filter in ViewFilter::ALL {
            assert_eq!(ViewFilter::from_position(filter.position()), Some(filter));
        }
        assert_eq!(ViewFilter::from_position(3), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("all".parse(), Ok(ViewFilter::All));
        assert_eq!(" Important ".parse(), Ok(ViewFilter::Important));
        assert_eq!("OTHERS".parse(), Ok(ViewFilter::Others));
        assert_eq!("other".parse(), Ok(ViewFilter::Others));
        assert!("starred".parse::<ViewFilter>().is_err());
    }

    #[test]
    fn test_labels_match_tabs() {
        let labels: Vec<&str> = ViewFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All Todos", "Important Todos", "Other Todos"]);
    }
}
