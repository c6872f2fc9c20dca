use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::budget::{BudgetRecord, MAX_NOTES_CHARS};
use super::category::Category;
use super::lenient::date::FORMAT as DATE_FORMAT;
use crate::error::BudgetError;

/// Raw, untrusted field text for a new budget, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct BudgetDraft {
    pub name: String,
    pub amount: String,
    pub category: String,
    pub due_date: String,
    pub notes: String,
}

/// A validated request to create a budget.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub name: String,
    pub amount: Decimal,
    pub category: Category,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl BudgetDraft {
    pub fn parse(&self) -> Result<NewBudget, BudgetError> {
        Ok(NewBudget {
            name: parse_name(&self.name)?,
            amount: parse_amount("amount", &self.amount)?,
            category: parse_category(&self.category)?,
            due_date: parse_due_date(&self.due_date)?,
            notes: parse_notes(&self.notes)?,
        })
    }
}

/// Field replacements for an existing budget. `None` leaves a field as is;
/// for the optional fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetPatch {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub spent: Option<Decimal>,
    pub category: Option<Category>,
    pub due_date: Option<Option<NaiveDate>>,
    pub notes: Option<Option<String>>,
}

impl BudgetPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply(&self, record: &mut BudgetRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(amount) = self.amount {
            record.amount = amount;
        }
        if let Some(spent) = self.spent {
            record.spent = spent;
        }
        if let Some(category) = &self.category {
            record.category = Some(category.clone());
        }
        if let Some(due_date) = self.due_date {
            record.due_date = due_date;
        }
        if let Some(notes) = &self.notes {
            record.notes = notes.clone();
        }
    }
}

/// Raw text for an edit. Fields left as `None` were not supplied at all; an
/// empty due date or notes value clears that field.
#[derive(Debug, Clone, Default)]
pub struct PatchDraft {
    pub name: Option<String>,
    pub amount: Option<String>,
    pub spent: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<String>,
    pub notes: Option<String>,
}

impl PatchDraft {
    pub fn parse(&self) -> Result<BudgetPatch, BudgetError> {
        Ok(BudgetPatch {
            name: self.name.as_deref().map(parse_name).transpose()?,
            amount: self
                .amount
                .as_deref()
                .map(|s| parse_amount("amount", s))
                .transpose()?,
            spent: self
                .spent
                .as_deref()
                .map(|s| parse_amount("spent", s))
                .transpose()?,
            category: self.category.as_deref().map(parse_category).transpose()?,
            due_date: self.due_date.as_deref().map(parse_due_date).transpose()?,
            notes: self.notes.as_deref().map(parse_notes).transpose()?,
        })
    }
}

/// Checks a merged record before it is written back by an update.
pub(crate) fn check_record(record: &BudgetRecord) -> Result<(), BudgetError> {
    if record.name.trim().is_empty() {
        return Err(BudgetError::validation("name is required"));
    }
    if record.category.is_none() {
        return Err(BudgetError::validation("category is required"));
    }
    if record.amount < Decimal::ZERO {
        return Err(BudgetError::validation("amount cannot be negative"));
    }
    if record.spent < Decimal::ZERO {
        return Err(BudgetError::validation("spent cannot be negative"));
    }
    if record.spent > record.amount {
        return Err(BudgetError::validation(
            "spent amount cannot exceed budgeted amount",
        ));
    }
    if let Some(notes) = &record.notes {
        check_notes_length(notes)?;
    }
    Ok(())
}

fn parse_name(raw: &str) -> Result<String, BudgetError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(BudgetError::validation("name is required"));
    }
    Ok(name.to_string())
}

/// Parses a non-negative money amount. Currency signs, thousands separators
/// and surrounding whitespace are tolerated.
fn parse_amount(field: &str, raw: &str) -> Result<Decimal, BudgetError> {
    let cleaned = raw.replace(['$', '₦', ','], "").trim().to_string();
    if cleaned.is_empty() {
        return Err(BudgetError::validation(format!("{field} is required")));
    }
    let value = Decimal::from_str(&cleaned)
        .map_err(|_| BudgetError::validation(format!("{field} '{raw}' is not a number")))?;
    if value < Decimal::ZERO {
        return Err(BudgetError::validation(format!("{field} cannot be negative")));
    }
    Ok(value)
}

fn parse_category(raw: &str) -> Result<Category, BudgetError> {
    if raw.trim().is_empty() {
        return Err(BudgetError::validation("category is required"));
    }
    Category::parse(raw).ok_or_else(|| {
        let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        BudgetError::validation(format!(
            "unknown category '{raw}', expected one of: {}",
            names.join(", ")
        ))
    })
}

pub(crate) fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>, BudgetError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| BudgetError::validation(format!("due date '{raw}' is not YYYY-MM-DD")))
}

fn parse_notes(raw: &str) -> Result<Option<String>, BudgetError> {
    if raw.is_empty() {
        return Ok(None);
    }
    check_notes_length(raw)?;
    Ok(Some(raw.to_string()))
}

fn check_notes_length(notes: &str) -> Result<(), BudgetError> {
    let count = notes.chars().count();
    if count > MAX_NOTES_CHARS {
        return Err(BudgetError::validation(format!(
            "notes are {count} characters, the limit is {MAX_NOTES_CHARS}"
        )));
    }
    Ok(())
}
