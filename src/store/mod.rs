//! The budget record store: sole owner of the persisted collection.
//!
//! Every mutation is a whole-collection read-modify-write through the
//! injected [`KeyValueStore`]. Nothing is cached between calls, so the store
//! never serves a view that differs from what is on disk.

mod clock;
mod codec;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub(crate) use clock::FixedClock;

use rust_decimal::Decimal;

use crate::error::BudgetError;
use crate::models::{check_record, derive_status, BudgetPatch, BudgetRecord, NewBudget};
use crate::storage::{KeyValueStore, PersistenceError};

/// Key under which the serialized collection lives.
pub const COLLECTION_KEY: &str = "budgie_budgets";

/// How the status of a record is reported on reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusMode {
    /// Re-derive status from the due date and today's date on every read.
    #[default]
    Live,
    /// Report the status persisted at the last create or update, which may
    /// be stale if the due date has since passed.
    Stored,
}

impl StatusMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "live" => Some(Self::Live),
            "stored" => Some(Self::Stored),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Stored => "stored",
        }
    }
}

pub struct BudgetStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    mode: StatusMode,
}

impl<S: KeyValueStore, C: Clock> BudgetStore<S, C> {
    pub fn new(storage: S, clock: C, mode: StatusMode) -> Self {
        Self {
            storage,
            clock,
            mode,
        }
    }

    /// All budgets in insertion order.
    ///
    /// Never fails: a missing or unreadable collection reads as empty.
    pub fn list_all(&self) -> Vec<BudgetRecord> {
        let mut records = match self.load() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "treating unreadable budget collection as empty");
                return Vec::new();
            }
        };
        if self.mode == StatusMode::Live {
            let today = self.clock.today();
            for record in &mut records {
                record.refresh_status(today);
            }
        }
        records
    }

    pub fn find_by_id(&self, id: i64) -> Option<BudgetRecord> {
        self.list_all().into_iter().find(|r| r.id == id)
    }

    pub fn create(&mut self, input: NewBudget) -> Result<BudgetRecord, BudgetError> {
        let mut records = self.load()?;
        let record = BudgetRecord {
            id: next_id(&records, self.clock.now_millis()),
            name: input.name,
            amount: input.amount,
            spent: Decimal::ZERO,
            category: Some(input.category),
            status: derive_status(input.due_date, self.clock.today()),
            due_date: input.due_date,
            notes: input.notes,
        };
        records.push(record.clone());
        self.persist(&records)?;
        tracing::info!(id = record.id, name = %record.name, "created budget");
        Ok(record)
    }

    /// Merges `patch` into the budget with `id` and writes the result.
    ///
    /// The merged record must still have a name, an amount and a category,
    /// and must not have spent more than its amount. On any rejection the
    /// stored collection is left untouched.
    pub fn update(&mut self, id: i64, patch: &BudgetPatch) -> Result<BudgetRecord, BudgetError> {
        let mut records = self.load()?;
        let slot = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(BudgetError::NotFound(id))?;

        let mut updated = slot.clone();
        patch.apply(&mut updated);
        check_record(&updated)?;
        updated.refresh_status(self.clock.today());
        *slot = updated.clone();

        self.persist(&records)?;
        tracing::info!(id, status = %updated.status, "updated budget");
        Ok(updated)
    }

    /// Removes the budget with `id`. Returns whether one was removed; an
    /// unknown id is not an error.
    pub fn delete(&mut self, id: i64) -> Result<bool, BudgetError> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() != before;
        self.persist(&records)?;
        if removed {
            tracing::info!(id, "deleted budget");
        }
        Ok(removed)
    }

    pub fn status_mode(&self) -> StatusMode {
        self.mode
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub(crate) fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn load(&self) -> Result<Vec<BudgetRecord>, PersistenceError> {
        match self.storage.read(COLLECTION_KEY)? {
            Some(text) => codec::decode(&text),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&mut self, records: &[BudgetRecord]) -> Result<(), PersistenceError> {
        let text = codec::encode(records)?;
        self.storage.write(COLLECTION_KEY, &text)?;
        tracing::debug!(count = records.len(), bytes = text.len(), "persisted budgets");
        Ok(())
    }
}

/// Ids come from the creation time in milliseconds, bumped past the largest
/// id in use so two budgets created in the same millisecond stay distinct.
fn next_id(records: &[BudgetRecord], now_millis: i64) -> i64 {
    match records.iter().map(|r| r.id).max() {
        Some(max) if max >= now_millis => max.saturating_add(1),
        _ => now_millis,
    }
}
