//! Plain-text renderings of the dashboard's summary and expense views.
//!
//! Every label comes from the translator and every amount or date goes
//! through its formatter, so switching language changes the whole view.

use std::borrow::Cow;

use caixa_common::{ArgumentValue, Arguments, TranslationKey, Translator, plural_suffix};
use time::Date;
use time::macros::date;

/// Figures shown on the month summary cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthSummary {
    /// Revenue booked this month.
    pub revenue: f64,
    /// Expenses booked this month.
    pub expenses: f64,
    /// Revenue minus expenses.
    pub balance: f64,
}

/// Sample figures for the current month.
pub const MONTH_SUMMARY: MonthSummary = MonthSummary {
    revenue: 12_450.0,
    expenses: 4_850.0,
    balance: 7_600.0,
};

/// One row of the expense table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expense {
    /// Day the expense was booked.
    pub date: Date,
    /// Free-text description.
    pub description: &'static str,
    /// Category label.
    pub category: &'static str,
    /// Amount in the active currency.
    pub amount: f64,
    /// Whether the expense repeats monthly.
    pub recurring: bool,
}

impl Expense {
    /// Case-insensitive match on description or category; empty queries match.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.description.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }
}

/// Sample expenses for May 2025.
pub const EXPENSES: [Expense; 8] = [
    expense(date!(2025 - 05 - 01), "Aluguel", "Fixo", 2_500.0, true),
    expense(date!(2025 - 05 - 03), "Produtos de Cabelo", "Insumos", 750.5, false),
    expense(date!(2025 - 05 - 05), "Água", "Utilidades", 120.0, true),
    expense(date!(2025 - 05 - 08), "Luz", "Utilidades", 380.0, true),
    expense(date!(2025 - 05 - 10), "Marketing Digital", "Marketing", 300.0, true),
    expense(date!(2025 - 05 - 15), "Manutenção Equipamentos", "Manutenção", 250.0, false),
    expense(date!(2025 - 05 - 20), "Material de Limpeza", "Insumos", 180.0, false),
    expense(date!(2025 - 05 - 25), "Internet", "Utilidades", 120.0, true),
];

const fn expense(
    date: Date,
    description: &'static str,
    category: &'static str,
    amount: f64,
    recurring: bool,
) -> Expense {
    Expense {
        date,
        description,
        category,
        amount,
        recurring,
    }
}

/// Returns the expenses matching `query`, in their original order.
#[must_use]
pub fn filter_expenses<'a>(expenses: &'a [Expense], query: &str) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|expense| expense.matches(query))
        .collect()
}

/// Renders the header and the month summary cards.
#[must_use]
pub fn render_summary<S>(translator: &Translator<S>, summary: &MonthSummary) -> String {
    let card = |key: TranslationKey, amount: f64| {
        format!(
            "  {}: {}",
            translator.resolve(key),
            translator.format_currency(amount)
        )
    };

    [
        translator.resolve(TranslationKey::HeaderTitle),
        translator.resolve(TranslationKey::HeaderSubtitle),
        String::new(),
        translator.resolve(TranslationKey::SummaryTitle),
        card(TranslationKey::SummaryRevenue, summary.revenue),
        card(TranslationKey::SummaryExpenses, summary.expenses),
        card(TranslationKey::SummaryBalance, summary.balance),
    ]
    .join("\n")
}

/// Renders the expense table filtered by `query`, followed by the count line
/// and the total of the visible rows.
#[must_use]
pub fn render_expenses<S>(translator: &Translator<S>, expenses: &[Expense], query: &str) -> String {
    let visible = filter_expenses(expenses, query);
    let mut lines = vec![
        translator.resolve(TranslationKey::ExpenseListTitle),
        translator.resolve(TranslationKey::ExpenseListDescription),
        String::new(),
        row(
            &translator.resolve(TranslationKey::ExpenseListDate),
            &translator.resolve(TranslationKey::ExpenseListDescriptionColumn),
            &translator.resolve(TranslationKey::ExpenseListCategory),
            &translator.resolve(TranslationKey::ExpenseListAmount),
            &translator.resolve(TranslationKey::ExpenseListRecurring),
        ),
    ];

    if visible.is_empty() {
        lines.push(translator.resolve(TranslationKey::ExpenseListEmpty));
    }
    lines.extend(visible.iter().map(|expense| {
        let recurring = if expense.recurring {
            TranslationKey::ExpenseListYes
        } else {
            TranslationKey::ExpenseListNo
        };
        row(
            &translator.format_date(expense.date),
            expense.description,
            expense.category,
            &translator.format_currency(expense.amount),
            &translator.resolve(recurring),
        )
    }));

    let total: f64 = visible.iter().map(|expense| expense.amount).sum();
    lines.push(String::new());
    lines.push(count_line(translator, visible.len()));
    lines.push(format!(
        "{}: {}",
        translator.resolve(TranslationKey::ExpenseListTotal),
        translator.format_currency(total)
    ));

    lines.join("\n")
}

/// Resolves the localised "N expenses" line.
#[must_use]
pub fn count_line<S>(translator: &Translator<S>, count: usize) -> String {
    let suffix = plural_suffix(
        translator.language(),
        u64::try_from(count).unwrap_or(u64::MAX),
    );
    let args = Arguments::from([
        (Cow::Borrowed("count"), ArgumentValue::from(count)),
        (Cow::Borrowed("plural"), ArgumentValue::from(suffix)),
    ]);

    translator.resolve_with_args(TranslationKey::ExpenseListCount, &args)
}

fn row(date: &str, description: &str, category: &str, amount: &str, recurring: &str) -> String {
    format!("{date:<12}{description:<26}{category:<14}{amount:>14}  {recurring}")
        .trim_end()
        .to_owned()
}
