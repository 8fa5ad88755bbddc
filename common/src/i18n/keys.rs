//! Closed set of translation keys shared by every dashboard screen.
//!
//! Keys are generated from a single table so the enum, its string form, and
//! the [`TranslationKey::ALL`] listing cannot drift apart. Catalog audits and
//! the locale quality tests walk [`TranslationKey::ALL`] to prove that every
//! dictionary covers every key.

use std::fmt;

macro_rules! translation_keys {
    ($($variant:ident => $key:literal,)+) => {
        /// Symbolic identifier for one piece of user-facing text.
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum TranslationKey {
            $(
                #[doc = concat!("`", $key, "`")]
                $variant,
            )+
        }

        impl TranslationKey {
            /// Every key in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the dotted key used by the locale resources.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }
        }
    };
}

translation_keys! {
    HeaderTitle => "header.title",
    HeaderSubtitle => "header.subtitle",
    TabsDashboard => "tabs.dashboard",
    TabsExpenses => "tabs.expenses",
    TabsProjections => "tabs.projections",
    TabsBalance => "tabs.balance",
    ActionsQuickActions => "actions.quickActions",
    ActionsNewExpense => "actions.newExpense",
    ActionsAdjustBalance => "actions.adjustBalance",
    SummaryTitle => "summary.title",
    SummaryRevenue => "summary.revenue",
    SummaryExpenses => "summary.expenses",
    SummaryBalance => "summary.balance",
    ExpenseAddTitle => "expense.add.title",
    ExpenseAddDescription => "expense.add.description",
    ExpenseAddDate => "expense.add.date",
    ExpenseAddAmount => "expense.add.amount",
    ExpenseAddDescriptionLabel => "expense.add.description_label",
    ExpenseAddCategory => "expense.add.category",
    ExpenseAddCategoryPlaceholder => "expense.add.category_placeholder",
    ExpenseAddNotes => "expense.add.notes",
    ExpenseAddNotesPlaceholder => "expense.add.notes_placeholder",
    ExpenseAddRecurring => "expense.add.recurring",
    ExpenseAddCancel => "expense.add.cancel",
    ExpenseAddAdd => "expense.add.add",
    ExpenseListTitle => "expense.list.title",
    ExpenseListDescription => "expense.list.description",
    ExpenseListDate => "expense.list.date",
    ExpenseListDescriptionColumn => "expense.list.description_column",
    ExpenseListCategory => "expense.list.category",
    ExpenseListAmount => "expense.list.amount",
    ExpenseListRecurring => "expense.list.recurring",
    ExpenseListActions => "expense.list.actions",
    ExpenseListSearch => "expense.list.search",
    ExpenseListEmpty => "expense.list.empty",
    ExpenseListCount => "expense.list.count",
    ExpenseListTotal => "expense.list.total",
    ExpenseListYes => "expense.list.yes",
    ExpenseListNo => "expense.list.no",
    BalanceCurrent => "balance.current",
    BalanceCashIn => "balance.cashIn",
    BalanceCashOut => "balance.cashOut",
    BalanceProjection => "balance.projection",
    BalanceEvolution => "balance.evolution",
    BalanceHistory => "balance.history",
    BalanceTransactions => "balance.transactions",
    BalanceTransactionsDescription => "balance.transactions_description",
    BalanceTypeRevenue => "balance.type.revenue",
    BalanceTypeExpense => "balance.type.expense",
    BalanceTypeAdjustment => "balance.type.adjustment",
    BalanceAdjustTitle => "balance.adjust.title",
    BalanceAdjustDescription => "balance.adjust.description",
    BalanceAdjustAmount => "balance.adjust.amount",
    BalanceAdjustAmountHelp => "balance.adjust.amount_help",
    BalanceAdjustReason => "balance.adjust.reason",
    BalanceAdjustReasonPlaceholder => "balance.adjust.reason_placeholder",
    BalanceAdjustCancel => "balance.adjust.cancel",
    BalanceAdjustConfirm => "balance.adjust.confirm",
    CommonCancel => "common.cancel",
    CommonConfirm => "common.confirm",
    LanguageSelect => "language.select",
}

impl TranslationKey {
    /// Look up the key whose dotted form is `key`.
    ///
    /// ```
    /// use caixa_common::i18n::TranslationKey;
    ///
    /// assert_eq!(
    ///     TranslationKey::from_key("tabs.balance"),
    ///     Some(TranslationKey::TabsBalance)
    /// );
    /// assert_eq!(TranslationKey::from_key("nonexistent.key"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == key)
    }
}

impl AsRef<str> for TranslationKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::TranslationKey;
    use std::collections::BTreeSet;

    #[test]
    fn keys_are_unique() {
        let unique: BTreeSet<&str> = TranslationKey::ALL
            .iter()
            .map(|key| key.as_str())
            .collect();
        assert_eq!(unique.len(), TranslationKey::ALL.len());
    }

    #[test]
    fn every_key_round_trips_through_its_dotted_form() {
        for key in TranslationKey::ALL {
            assert_eq!(TranslationKey::from_key(key.as_str()), Some(*key));
        }
    }
}
