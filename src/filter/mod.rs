use chrono::NaiveDate;

use crate::models::{BudgetRecord, Category, Status, OTHER_LABEL};

/// Criteria for the budget list. Every set criterion must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetFilter {
    /// Case-insensitive substring of the budget name.
    pub search: Option<String>,
    /// Exact category label, "Other" for uncategorized budgets.
    pub category: Option<String>,
    pub status: Option<Status>,
    pub due_date: Option<NaiveDate>,
}

impl BudgetFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, record: &BudgetRecord) -> bool {
        if let Some(search) = &self.search {
            if !record.name.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if record.category_label() != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(due) = self.due_date {
            if record.due_date != Some(due) {
                return false;
            }
        }
        true
    }

    /// Matching records, in their original order.
    pub fn apply(&self, records: Vec<BudgetRecord>) -> Vec<BudgetRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Label to filter on for user-typed category text. Fixed categories and
/// "Other" are matched case-insensitively; anything else is taken as a
/// stored custom label.
pub fn category_label(raw: &str) -> String {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case(OTHER_LABEL) {
        return OTHER_LABEL.to_string();
    }
    match Category::parse(raw) {
        Some(category) => category.as_str().to_string(),
        None => raw.to_string(),
    }
}
