use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::lenient;

/// Maximum length of the free-text notes field, in characters.
pub const MAX_NOTES_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Upcoming,
    Expired,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Expired => "expired",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "upcoming" => Some(Self::Upcoming),
            "expired" => Some(Self::Expired),
            _ => None,
        }
    }

    pub fn all() -> &'static [Status] {
        &[Self::Active, Self::Upcoming, Self::Expired]
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a budget due on `due_date`, as seen on `today`.
///
/// No due date means the budget is open-ended and always active. A budget due
/// today is still active; one due earlier has expired.
pub fn derive_status(due_date: Option<NaiveDate>, today: NaiveDate) -> Status {
    match due_date {
        None => Status::Active,
        Some(due) if due < today => Status::Expired,
        Some(due) if due == today => Status::Active,
        Some(_) => Status::Upcoming,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "lenient::decimal")]
    pub amount: Decimal,
    #[serde(default, with = "lenient::decimal")]
    pub spent: Decimal,
    #[serde(default, with = "lenient::category")]
    pub category: Option<Category>,
    #[serde(default, with = "lenient::date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, with = "lenient::text")]
    pub notes: Option<String>,
    #[serde(default, with = "lenient::status")]
    pub status: Status,
}

impl BudgetRecord {
    /// Amount left before the ceiling is reached. Negative when overspent.
    pub fn remaining(&self) -> Decimal {
        self.amount - self.spent
    }

    /// Remaining amount clamped at zero, for a spent/remaining split.
    pub fn chart_remaining(&self) -> Decimal {
        self.remaining().max(Decimal::ZERO)
    }

    /// Share of the budget already spent, in percent. `None` for a zero budget.
    pub fn percent_spent(&self) -> Option<Decimal> {
        if self.amount.is_zero() {
            return None;
        }
        Some((self.spent / self.amount * Decimal::ONE_HUNDRED).round_dp(1))
    }

    pub fn category_label(&self) -> &str {
        Category::label(self.category.as_ref())
    }

    /// Expired budgets are closed for editing unless the caller forces it.
    pub fn is_editable(&self) -> bool {
        self.status != Status::Expired
    }

    pub(crate) fn refresh_status(&mut self, today: NaiveDate) {
        self.status = derive_status(self.due_date, today);
    }
}
