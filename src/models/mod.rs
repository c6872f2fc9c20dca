mod budget;
mod category;
mod draft;
pub(crate) mod lenient;

pub use budget::{derive_status, BudgetRecord, Status, MAX_NOTES_CHARS};
pub use category::{Category, OTHER_LABEL};
pub use draft::{BudgetDraft, BudgetPatch, NewBudget, PatchDraft};
pub(crate) use draft::{check_record, parse_due_date};
