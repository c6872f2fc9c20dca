use anyhow::{Context, Result};
use std::path::PathBuf;

use super::format::{cell, format_amount};
use crate::analytics;
use crate::error::BudgetError;
use crate::filter::{self, BudgetFilter};
use crate::models::{
    parse_due_date, BudgetDraft, BudgetRecord, Category, PatchDraft, Status,
    MAX_NOTES_CHARS,
};
use crate::storage::KeyValueStore;
use crate::store::{BudgetStore, Clock};

/// Flags that take a value; everything else starting with `--` is a switch.
const VALUE_FLAGS: &[&str] = &[
    "--search",
    "--category",
    "--status",
    "--due",
    "--name",
    "--amount",
    "--spent",
    "--notes",
];

/// Budgets shown on the dashboard.
const RECENT_COUNT: usize = 3;

pub(crate) fn as_cli<S: KeyValueStore, C: Clock>(
    args: &[String],
    store: &mut BudgetStore<S, C>,
) -> Result<()> {
    let rest = args.get(2..).unwrap_or_default();
    match args.get(1).map(String::as_str) {
        None | Some("dashboard") => cli_dashboard(store),
        Some("list" | "ls") => cli_list(rest, store),
        Some("show") => cli_show(rest, store),
        Some("add") => cli_add(rest, store),
        Some("edit") => cli_edit(rest, store),
        Some("delete" | "rm") => cli_delete(rest, store),
        Some("analytics" | "a") => cli_analytics(store),
        Some("export") => cli_export(rest, store),
        Some("categories") => {
            for category in Category::all() {
                println!("{category}");
            }
            Ok(())
        }
        Some("--help" | "-h" | "help") => {
            print_usage();
            Ok(())
        }
        Some("--version" | "-V" | "version") => {
            println!("budgie {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(other) => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Budgie — local-only personal budget tracker");
    println!();
    println!("Usage: budgie [command]");
    println!();
    println!("Commands:");
    println!("  (none)                          Dashboard: totals and recent budgets");
    println!("  list [filters]                  List budgets");
    println!("    --search <text>               Name contains text (any case)");
    println!("    --category <name>             Food, Rent, Utilities, Savings, Entertainment, Other");
    println!("    --status <status>             active, upcoming, expired");
    println!("    --due <YYYY-MM-DD>            Due on this date");
    println!("  show <id>                       Budget details");
    println!("  add <name> <amount> <category>  Create a budget");
    println!("    --due <YYYY-MM-DD>            Due date");
    println!("    --notes <text>                Notes (max {MAX_NOTES_CHARS} characters)");
    println!("  edit <id> [fields]              Change a budget");
    println!("    --name, --amount, --spent, --category, --due, --notes");
    println!("    --force                       Allow editing an expired budget");
    println!("  delete <id>                     Delete a budget");
    println!("  analytics                       Totals and per-category breakdown");
    println!("  export [path] [filters]         Export budgets to CSV (default: ~/budgets.csv)");
    println!("  categories                      List budget categories");
    println!("  --help, -h                      Show this help");
    println!("  --version, -V                   Show version");
}

// ── Commands ──────────────────────────────────────────────────

fn cli_dashboard<S: KeyValueStore, C: Clock>(store: &BudgetStore<S, C>) -> Result<()> {
    let budgets = store.list_all();
    let totals = analytics::totals(&budgets);

    println!("Budgie — {}", store.today().format("%Y-%m-%d"));
    println!("{}", "─".repeat(40));
    println!("  Budgeted:   {}", format_amount(totals.total_budgeted));
    println!("  Spent:      {}", format_amount(totals.total_spent));
    println!("  Remaining:  {}", format_amount(totals.total_remaining));
    println!("  Budgets:    {}", budgets.len());
    println!("  Status:     {} mode", store.status_mode().as_str());

    println!();
    if budgets.is_empty() {
        println!("No budgets yet. Create one with: budgie add <name> <amount> <category>");
        return Ok(());
    }
    println!("Recent budgets:");
    let recent: Vec<BudgetRecord> = analytics::latest(&budgets, RECENT_COUNT)
        .into_iter()
        .cloned()
        .collect();
    print_table(&recent);
    if budgets.len() > RECENT_COUNT {
        println!();
        println!("View all with: budgie list");
    }
    Ok(())
}

fn cli_list<S: KeyValueStore, C: Clock>(args: &[String], store: &BudgetStore<S, C>) -> Result<()> {
    let filter = parse_filter(args)?;
    let all = store.list_all();
    let budgets: Vec<BudgetRecord> = all.iter().filter(|b| filter.matches(b)).cloned().collect();

    if budgets.is_empty() {
        println!("No budgets found.");
        let in_use = analytics::categories_in_use(&all);
        if !filter.is_empty() && !in_use.is_empty() {
            println!("Categories in use: {}", in_use.join(", "));
        }
        return Ok(());
    }
    print_table(&budgets);
    Ok(())
}

fn cli_show<S: KeyValueStore, C: Clock>(args: &[String], store: &BudgetStore<S, C>) -> Result<()> {
    let id = parse_id(args)?;
    let Some(b) = store.find_by_id(id) else {
        anyhow::bail!("Budget {id} not found. Run 'budgie list' to see current budgets");
    };

    println!("{} (#{})", b.name, b.id);
    println!("{}", "─".repeat(40));
    println!("  Category:   {}", b.category_label());
    println!("  Budgeted:   {}", format_amount(b.amount));
    println!("  Spent:      {}", format_amount(b.spent));
    println!("  Remaining:  {}", format_amount(b.remaining()));
    match b.percent_spent() {
        Some(pct) => println!(
            "  Used:       {pct}% (spent {} / left {})",
            format_amount(b.spent),
            format_amount(b.chart_remaining())
        ),
        None => println!("  Used:       -"),
    }
    println!(
        "  Due:        {}",
        b.due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "Not set".into())
    );
    println!("  Status:     {}", b.status);
    println!("  Notes:      {}", b.notes.as_deref().unwrap_or("-"));
    Ok(())
}

fn cli_add<S: KeyValueStore, C: Clock>(
    args: &[String],
    store: &mut BudgetStore<S, C>,
) -> Result<()> {
    let positional = positionals(args);
    let [name, amount, category] = positional.as_slice() else {
        anyhow::bail!(
            "Usage: budgie add <name> <amount> <category> [--due <YYYY-MM-DD>] [--notes <text>]"
        );
    };

    let draft = BudgetDraft {
        name: name.to_string(),
        amount: amount.to_string(),
        category: category.to_string(),
        due_date: flag_value(args, "--due").unwrap_or_default().to_string(),
        notes: flag_value(args, "--notes").unwrap_or_default().to_string(),
    };
    let created = store.create(draft.parse()?)?;
    println!(
        "Created budget '{}' (#{}) for {} [{}]",
        created.name,
        created.id,
        format_amount(created.amount),
        created.status
    );
    Ok(())
}

fn cli_edit<S: KeyValueStore, C: Clock>(
    args: &[String],
    store: &mut BudgetStore<S, C>,
) -> Result<()> {
    let id = parse_id(args)?;
    let force = args.iter().any(|a| a == "--force");

    let current = store.find_by_id(id).ok_or(BudgetError::NotFound(id)).map_err(redirect)?;
    if !current.is_editable() && !force {
        anyhow::bail!(
            "Budget '{}' has expired; pass --force to edit it anyway",
            current.name
        );
    }

    let patch = parse_patch(args)?;
    if patch.is_empty() {
        anyhow::bail!("Nothing to change. Usage: budgie edit <id> [--name ..] [--amount ..] [--spent ..] [--category ..] [--due ..] [--notes ..]");
    }
    let updated = store.update(id, &patch).map_err(redirect)?;
    println!(
        "Updated '{}': {} of {} spent, {} left [{}]",
        updated.name,
        format_amount(updated.spent),
        format_amount(updated.amount),
        format_amount(updated.remaining()),
        updated.status
    );
    Ok(())
}

fn cli_delete<S: KeyValueStore, C: Clock>(
    args: &[String],
    store: &mut BudgetStore<S, C>,
) -> Result<()> {
    let id = parse_id(args)?;
    let name = store.find_by_id(id).map(|b| b.name);
    if store.delete(id)? {
        println!("Deleted budget '{}'", name.unwrap_or_else(|| id.to_string()));
    } else {
        println!("No budget with id {id}; nothing deleted");
    }
    Ok(())
}

fn cli_analytics<S: KeyValueStore, C: Clock>(store: &BudgetStore<S, C>) -> Result<()> {
    let budgets = store.list_all();
    let totals = analytics::totals(&budgets);

    println!("Budget Analytics");
    println!("{}", "─".repeat(40));
    println!("  Total Budgeted:  {}", format_amount(totals.total_budgeted));
    println!("  Total Spent:     {}", format_amount(totals.total_spent));
    println!("  Remaining:       {}", format_amount(totals.total_remaining));

    let groups = analytics::by_category(&budgets);
    if groups.is_empty() {
        return Ok(());
    }
    println!();
    println!(
        "{} {:>16} {:>16} {:>16}",
        cell("Category", 16),
        "Budgeted",
        "Spent",
        "Remaining"
    );
    println!("{}", "─".repeat(67));
    for group in &groups {
        println!(
            "{} {:>16} {:>16} {:>16}",
            cell(&group.category, 16),
            format_amount(group.budgeted),
            format_amount(group.spent),
            format_amount(group.remaining())
        );
    }
    Ok(())
}

fn cli_export<S: KeyValueStore, C: Clock>(
    args: &[String],
    store: &BudgetStore<S, C>,
) -> Result<()> {
    let filter = parse_filter(args)?;
    let output_path = positionals(args)
        .first()
        .map(|p| shellexpand(p))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/budgets.csv")
        });

    let budgets = filter.apply(store.list_all());
    let count = crate::export::export_to_path(&budgets, &PathBuf::from(&output_path))?;
    if count == 0 {
        println!("No budgets to export; wrote header only to {output_path}");
    } else {
        println!("Exported {count} budgets to {output_path}");
    }
    Ok(())
}

// ── Output ────────────────────────────────────────────────────

fn print_table(budgets: &[BudgetRecord]) {
    println!(
        "{:<14} {} {} {:>14} {:>14} {:>14} {:<10} Status",
        "ID",
        cell("Name", 20),
        cell("Category", 13),
        "Amount",
        "Spent",
        "Remaining",
        "Due",
    );
    println!("{}", "─".repeat(114));
    for b in budgets {
        println!(
            "{:<14} {} {} {:>14} {:>14} {:>14} {:<10} {}",
            b.id,
            cell(&b.name, 20),
            cell(b.category_label(), 13),
            format_amount(b.amount),
            format_amount(b.spent),
            format_amount(b.remaining()),
            b.due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".into()),
            b.status,
        );
    }
}

/// Turn a missing-budget error into a hint pointing back at the list.
fn redirect(e: BudgetError) -> anyhow::Error {
    if e.is_not_found() {
        anyhow::anyhow!("{e}. Run 'budgie list' to see current budgets")
    } else {
        e.into()
    }
}

// ── Argument parsing ──────────────────────────────────────────

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// Arguments that are neither flags nor flag values.
fn positionals(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            iter.next();
        } else if !arg.starts_with("--") {
            out.push(arg.as_str());
        }
    }
    out
}

fn parse_id(args: &[String]) -> Result<i64> {
    let raw = positionals(args)
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Missing budget id"))?;
    raw.parse::<i64>()
        .with_context(|| format!("Invalid budget id: {raw}"))
}

fn parse_filter(args: &[String]) -> Result<BudgetFilter> {
    let category = flag_value(args, "--category").map(filter::category_label);
    let status = match flag_value(args, "--status") {
        Some(raw) => Some(Status::parse(raw).ok_or_else(|| {
            let names: Vec<&str> = Status::all().iter().map(|s| s.as_str()).collect();
            anyhow::anyhow!("Unknown status '{raw}', expected one of: {}", names.join(", "))
        })?),
        None => None,
    };
    let due_date = match flag_value(args, "--due") {
        Some(raw) => parse_due_date(raw)?,
        None => None,
    };

    Ok(BudgetFilter {
        search: flag_value(args, "--search")
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        category,
        status,
        due_date,
    })
}

fn parse_patch(args: &[String]) -> Result<crate::models::BudgetPatch> {
    let owned = |flag: &str| flag_value(args, flag).map(str::to_string);
    let draft = PatchDraft {
        name: owned("--name"),
        amount: owned("--amount"),
        spent: owned("--spent"),
        category: owned("--category"),
        due_date: owned("--due"),
        notes: owned("--notes"),
    };
    Ok(draft.parse()?)
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
