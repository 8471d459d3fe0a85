//! Top-level page selection.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::fmt;

/// Page shown in the main area. The nav bar lists these in `ALL` order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Validation,
    Specifications,
    Settings,
}

impl Page {
    pub const ALL: [Self; 3] = [Self::Validation, Self::Specifications, Self::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Validation => "Validation",
            Self::Specifications => "Specifications",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
