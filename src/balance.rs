//! Plain-text rendering of the cash balance view: the balance cards, the
//! balance evolution with its projected points, and the transaction history.

use caixa_common::{TranslationKey, Translator};
use time::Date;
use time::macros::date;

/// Figures shown on the balance cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceOverview {
    /// Cash currently held.
    pub current: f64,
    /// Income booked on `day`.
    pub cash_in: f64,
    /// Expenses booked on `day`.
    pub cash_out: f64,
    /// Expected balance thirty days out.
    pub projection: f64,
    /// Day the income and expense cards refer to.
    pub day: Date,
}

/// Sample balance figures.
pub const BALANCE_OVERVIEW: BalanceOverview = BalanceOverview {
    current: 21_300.0,
    cash_in: 2_350.75,
    cash_out: 750.5,
    projection: 26_400.0,
    day: date!(2025 - 05 - 12),
};

/// One point on the balance evolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalancePoint {
    /// Day of the reading.
    pub date: Date,
    /// Balance on that day.
    pub balance: f64,
    /// Whether the point is a forecast rather than a booked balance.
    pub projected: bool,
}

/// Booked balances for May 2025 followed by the June forecast.
pub const BALANCE_HISTORY: [BalancePoint; 12] = [
    point(date!(2025 - 05 - 01), 12_500.0, false),
    point(date!(2025 - 05 - 05), 15_200.0, false),
    point(date!(2025 - 05 - 10), 13_800.0, false),
    point(date!(2025 - 05 - 15), 16_400.0, false),
    point(date!(2025 - 05 - 20), 14_900.0, false),
    point(date!(2025 - 05 - 25), 18_100.0, false),
    point(date!(2025 - 05 - 30), 21_300.0, false),
    point(date!(2025 - 06 - 05), 19_800.0, false),
    point(date!(2025 - 06 - 10), 23_500.0, true),
    point(date!(2025 - 06 - 15), 25_200.0, true),
    point(date!(2025 - 06 - 20), 27_800.0, true),
    point(date!(2025 - 06 - 25), 26_400.0, true),
];

const fn point(date: Date, balance: f64, projected: bool) -> BalancePoint {
    BalancePoint {
        date,
        balance,
        projected,
    }
}

/// Kind of cash movement.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TransactionKind {
    /// Money received.
    Revenue,
    /// Money paid out.
    Expense,
    /// Manual correction of the balance.
    Adjustment,
}

impl TransactionKind {
    /// Key of the label shown in the category column.
    #[must_use]
    pub const fn label_key(self) -> TranslationKey {
        match self {
            Self::Revenue => TranslationKey::BalanceTypeRevenue,
            Self::Expense => TranslationKey::BalanceTypeExpense,
            Self::Adjustment => TranslationKey::BalanceTypeAdjustment,
        }
    }

    /// Sign printed before the amount. Only revenue is shown as an inflow.
    #[must_use]
    pub const fn sign(self) -> char {
        match self {
            Self::Revenue => '+',
            Self::Expense | Self::Adjustment => '-',
        }
    }
}

/// One row of the transaction history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transaction {
    /// Day the movement was booked.
    pub date: Date,
    /// Kind of movement.
    pub kind: TransactionKind,
    /// Free-text description.
    pub description: &'static str,
    /// Unsigned amount.
    pub amount: f64,
}

/// Recent cash movements, newest first.
pub const TRANSACTIONS: [Transaction; 8] = [
    transaction(date!(2025 - 05 - 30), TransactionKind::Revenue, "Vendas do dia", 2_350.75),
    transaction(date!(2025 - 05 - 29), TransactionKind::Expense, "Fornecedor ABC", 750.5),
    transaction(date!(2025 - 05 - 28), TransactionKind::Revenue, "Vendas do dia", 1_980.0),
    transaction(date!(2025 - 05 - 28), TransactionKind::Adjustment, "Ajuste de saldo", 120.0),
    transaction(date!(2025 - 05 - 27), TransactionKind::Expense, "Pagamento funcionário", 1_500.0),
    transaction(date!(2025 - 05 - 26), TransactionKind::Revenue, "Vendas do dia", 2_180.5),
    transaction(date!(2025 - 05 - 25), TransactionKind::Expense, "Aluguel", 2_500.0),
    transaction(date!(2025 - 05 - 24), TransactionKind::Revenue, "Vendas do dia", 1_680.25),
];

const fn transaction(
    date: Date,
    kind: TransactionKind,
    description: &'static str,
    amount: f64,
) -> Transaction {
    Transaction {
        date,
        kind,
        description,
        amount,
    }
}

/// Renders the balance cards, the balance evolution, and the transaction
/// history. Projected points are marked with `*`.
#[must_use]
pub fn render_balance<S>(
    translator: &Translator<S>,
    overview: &BalanceOverview,
    history: &[BalancePoint],
    transactions: &[Transaction],
) -> String {
    let day = translator.format_date(overview.day);
    let mut lines = vec![
        format!(
            "{}: {}",
            translator.resolve(TranslationKey::BalanceCurrent),
            translator.format_currency(overview.current)
        ),
        format!(
            "{} ({day}): {}",
            translator.resolve(TranslationKey::BalanceCashIn),
            translator.format_currency(overview.cash_in)
        ),
        format!(
            "{} ({day}): {}",
            translator.resolve(TranslationKey::BalanceCashOut),
            translator.format_currency(overview.cash_out)
        ),
        format!(
            "{}: {}",
            translator.resolve(TranslationKey::BalanceProjection),
            translator.format_currency(overview.projection)
        ),
        String::new(),
        translator.resolve(TranslationKey::BalanceEvolution),
        translator.resolve(TranslationKey::BalanceHistory),
    ];

    lines.extend(history.iter().map(|point| {
        let marker = if point.projected { " *" } else { "" };
        format!(
            "  {:<12}{:>16}{marker}",
            translator.format_date(point.date),
            translator.format_currency(point.balance)
        )
    }));

    lines.push(String::new());
    lines.push(translator.resolve(TranslationKey::BalanceTransactions));
    lines.push(translator.resolve(TranslationKey::BalanceTransactionsDescription));
    lines.push(transaction_row(
        &translator.resolve(TranslationKey::ExpenseListDate),
        &translator.resolve(TranslationKey::ExpenseListDescriptionColumn),
        &translator.resolve(TranslationKey::ExpenseListCategory),
        &translator.resolve(TranslationKey::ExpenseListAmount),
    ));
    lines.extend(transactions.iter().map(|transaction| {
        transaction_row(
            &translator.format_date(transaction.date),
            transaction.description,
            &translator.resolve(transaction.kind.label_key()),
            &signed_amount(translator, transaction),
        )
    }));

    lines.join("\n")
}

/// Formats a transaction amount with its inflow or outflow sign.
#[must_use]
pub fn signed_amount<S>(translator: &Translator<S>, transaction: &Transaction) -> String {
    format!(
        "{}{}",
        transaction.kind.sign(),
        translator.format_currency(transaction.amount)
    )
}

fn transaction_row(date: &str, description: &str, category: &str, amount: &str) -> String {
    format!("{date:<12}{description:<24}{category:<14}{amount:>16}")
}
