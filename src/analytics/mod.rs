//! Derived figures over a list of budgets: collection totals, per-category
//! rollups for charts, and the small dashboard queries.
//!
//! Amounts are summed as stored. Historical records whose amount or spent
//! field was not numeric were already coerced to zero when the collection was
//! decoded, so nothing here can fail.

use rust_decimal::Decimal;

use crate::models::BudgetRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total_budgeted: Decimal,
    pub total_spent: Decimal,
    pub total_remaining: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRollup {
    pub category: String,
    pub budgeted: Decimal,
    pub spent: Decimal,
}

impl CategoryRollup {
    pub fn remaining(&self) -> Decimal {
        self.budgeted - self.spent
    }
}

pub fn totals(records: &[BudgetRecord]) -> Totals {
    let total_budgeted: Decimal = records.iter().map(|r| r.amount).sum();
    let total_spent: Decimal = records.iter().map(|r| r.spent).sum();
    Totals {
        total_budgeted,
        total_spent,
        total_remaining: total_budgeted - total_spent,
    }
}

/// Sums amount and spent per category label, in order of first appearance.
/// Records without a category are grouped under "Other".
pub fn by_category(records: &[BudgetRecord]) -> Vec<CategoryRollup> {
    let mut groups: Vec<CategoryRollup> = Vec::new();
    for record in records {
        let label = record.category_label();
        match groups.iter_mut().find(|g| g.category == label) {
            Some(group) => {
                group.budgeted += record.amount;
                group.spent += record.spent;
            }
            None => groups.push(CategoryRollup {
                category: label.to_string(),
                budgeted: record.amount,
                spent: record.spent,
            }),
        }
    }
    groups
}

/// The `n` most recently added budgets, newest first.
pub fn latest(records: &[BudgetRecord], n: usize) -> Vec<&BudgetRecord> {
    records.iter().rev().take(n).collect()
}

/// Distinct category labels in order of first appearance.
pub fn categories_in_use(records: &[BudgetRecord]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for record in records {
        let label = record.category_label();
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen
}
