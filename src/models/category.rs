/// Label used for records whose category is missing.
pub const OTHER_LABEL: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Rent,
    Utilities,
    Savings,
    Entertainment,
    /// A stored label outside the fixed set, kept verbatim.
    Custom(String),
}

static FIXED: [Category; 5] = [
    Category::Food,
    Category::Rent,
    Category::Utilities,
    Category::Savings,
    Category::Entertainment,
];

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Savings => "Savings",
            Self::Entertainment => "Entertainment",
            Self::Custom(label) => label,
        }
    }

    /// Case-insensitive lookup of user input against the fixed set.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim();
        FIXED
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .cloned()
    }

    /// Category as read back from storage. Exact fixed names map to their
    /// variant, any other non-empty label is kept as `Custom`.
    pub fn from_stored(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        Some(
            FIXED
                .iter()
                .find(|c| c.as_str() == s)
                .cloned()
                .unwrap_or_else(|| Self::Custom(s.to_string())),
        )
    }

    /// The categories offered for new budgets.
    pub fn all() -> &'static [Category] {
        &FIXED
    }

    /// Display label for an optional category, falling back to "Other".
    pub fn label(category: Option<&Category>) -> &str {
        category.map_or(OTHER_LABEL, Category::as_str)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
