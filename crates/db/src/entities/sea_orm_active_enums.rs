//! Database enum types backing the `SeaORM` entities.
//!
//! Each enum mirrors a Postgres enum created by the initial migration, plus
//! conversions to and from the core domain enums so invalid strings can
//! never cross the persistence boundary.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account type classification.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_type")]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Resources owned by the business.
    #[sea_orm(string_value = "asset")]
    Asset,
    /// Obligations owed to others.
    #[sea_orm(string_value = "liability")]
    Liability,
    /// Owner's residual interest.
    #[sea_orm(string_value = "equity")]
    Equity,
    /// Money earned.
    #[sea_orm(string_value = "income")]
    Income,
    /// Money spent.
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// Account subtype for more specific categorization.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_subtype")]
#[serde(rename_all = "snake_case")]
pub enum AccountSubtype {
    /// Cash on hand.
    #[sea_orm(string_value = "cash")]
    Cash,
    /// Bank account (reconcilable).
    #[sea_orm(string_value = "bank")]
    Bank,
    /// Amounts owed by customers.
    #[sea_orm(string_value = "accounts_receivable")]
    AccountsReceivable,
    /// Stock held for sale.
    #[sea_orm(string_value = "inventory")]
    Inventory,
    /// Long-lived assets.
    #[sea_orm(string_value = "fixed_asset")]
    FixedAsset,
    /// Any other asset.
    #[sea_orm(string_value = "other_asset")]
    OtherAsset,
    /// Amounts owed to suppliers.
    #[sea_orm(string_value = "accounts_payable")]
    AccountsPayable,
    /// Credit card liability.
    #[sea_orm(string_value = "credit_card")]
    CreditCard,
    /// Any other liability.
    #[sea_orm(string_value = "other_liability")]
    OtherLiability,
    /// Owner contributions and draws.
    #[sea_orm(string_value = "owner_equity")]
    OwnerEquity,
    /// Accumulated earnings.
    #[sea_orm(string_value = "retained_earnings")]
    RetainedEarnings,
    /// Revenue from primary operations.
    #[sea_orm(string_value = "operating_income")]
    OperatingIncome,
    /// Interest, refunds, and other income.
    #[sea_orm(string_value = "other_income")]
    OtherIncome,
    /// Direct cost of items sold.
    #[sea_orm(string_value = "cost_of_goods_sold")]
    CostOfGoodsSold,
    /// Day-to-day operating costs.
    #[sea_orm(string_value = "operating_expense")]
    OperatingExpense,
    /// Any other expense.
    #[sea_orm(string_value = "other_expense")]
    OtherExpense,
}

/// Side of a ledger posting.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "entry_side")]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    /// Debit entry.
    #[sea_orm(string_value = "debit")]
    Debit,
    /// Credit entry.
    #[sea_orm(string_value = "credit")]
    Credit,
}

/// Kind of business document behind a posting or payment.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "document_kind")]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Vendor bill.
    #[sea_orm(string_value = "bill")]
    Bill,
    /// Sales invoice.
    #[sea_orm(string_value = "invoice")]
    Invoice,
    /// Payment applied to a bill or invoice.
    #[sea_orm(string_value = "payment")]
    Payment,
}

/// Kind of bank statement transaction.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(
    rs_type = "String",
    db_type = "Enum",
    enum_name = "bank_transaction_kind"
)]
#[serde(rename_all = "lowercase")]
pub enum BankTransactionKind {
    /// Money in.
    #[sea_orm(string_value = "deposit")]
    Deposit,
    /// Money out.
    #[sea_orm(string_value = "withdrawal")]
    Withdrawal,
    /// Bank fee.
    #[sea_orm(string_value = "fee")]
    Fee,
    /// Interest earned.
    #[sea_orm(string_value = "interest")]
    Interest,
    /// Anything else.
    #[sea_orm(string_value = "other")]
    Other,
}

/// How the matcher found a candidate pairing.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "match_confidence")]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    /// Same amount, same date.
    #[sea_orm(string_value = "exact")]
    Exact,
    /// Same amount, date within the matching window.
    #[sea_orm(string_value = "high")]
    High,
}

// ============================================================
// Conversions to/from the core domain enums
// ============================================================

impl From<calyx_core::account::AccountType> for AccountType {
    fn from(value: calyx_core::account::AccountType) -> Self {
        use calyx_core::account::AccountType as Core;
        match value {
            Core::Asset => Self::Asset,
            Core::Liability => Self::Liability,
            Core::Equity => Self::Equity,
            Core::Income => Self::Income,
            Core::Expense => Self::Expense,
        }
    }
}

impl From<AccountType> for calyx_core::account::AccountType {
    fn from(value: AccountType) -> Self {
        match value {
            AccountType::Asset => Self::Asset,
            AccountType::Liability => Self::Liability,
            AccountType::Equity => Self::Equity,
            AccountType::Income => Self::Income,
            AccountType::Expense => Self::Expense,
        }
    }
}

impl From<calyx_core::account::AccountSubtype> for AccountSubtype {
    fn from(value: calyx_core::account::AccountSubtype) -> Self {
        use calyx_core::account::AccountSubtype as Core;
        match value {
            Core::Cash => Self::Cash,
            Core::Bank => Self::Bank,
            Core::AccountsReceivable => Self::AccountsReceivable,
            Core::Inventory => Self::Inventory,
            Core::FixedAsset => Self::FixedAsset,
            Core::OtherAsset => Self::OtherAsset,
            Core::AccountsPayable => Self::AccountsPayable,
            Core::CreditCard => Self::CreditCard,
            Core::OtherLiability => Self::OtherLiability,
            Core::OwnerEquity => Self::OwnerEquity,
            Core::RetainedEarnings => Self::RetainedEarnings,
            Core::OperatingIncome => Self::OperatingIncome,
            Core::OtherIncome => Self::OtherIncome,
            Core::CostOfGoodsSold => Self::CostOfGoodsSold,
            Core::OperatingExpense => Self::OperatingExpense,
            Core::OtherExpense => Self::OtherExpense,
        }
    }
}

impl From<AccountSubtype> for calyx_core::account::AccountSubtype {
    fn from(value: AccountSubtype) -> Self {
        match value {
            AccountSubtype::Cash => Self::Cash,
            AccountSubtype::Bank => Self::Bank,
            AccountSubtype::AccountsReceivable => Self::AccountsReceivable,
            AccountSubtype::Inventory => Self::Inventory,
            AccountSubtype::FixedAsset => Self::FixedAsset,
            AccountSubtype::OtherAsset => Self::OtherAsset,
            AccountSubtype::AccountsPayable => Self::AccountsPayable,
            AccountSubtype::CreditCard => Self::CreditCard,
            AccountSubtype::OtherLiability => Self::OtherLiability,
            AccountSubtype::OwnerEquity => Self::OwnerEquity,
            AccountSubtype::RetainedEarnings => Self::RetainedEarnings,
            AccountSubtype::OperatingIncome => Self::OperatingIncome,
            AccountSubtype::OtherIncome => Self::OtherIncome,
            AccountSubtype::CostOfGoodsSold => Self::CostOfGoodsSold,
            AccountSubtype::OperatingExpense => Self::OperatingExpense,
            AccountSubtype::OtherExpense => Self::OtherExpense,
        }
    }
}

impl From<calyx_core::ledger::EntrySide> for EntrySide {
    fn from(value: calyx_core::ledger::EntrySide) -> Self {
        match value {
            calyx_core::ledger::EntrySide::Debit => Self::Debit,
            calyx_core::ledger::EntrySide::Credit => Self::Credit,
        }
    }
}

impl From<EntrySide> for calyx_core::ledger::EntrySide {
    fn from(value: EntrySide) -> Self {
        match value {
            EntrySide::Debit => Self::Debit,
            EntrySide::Credit => Self::Credit,
        }
    }
}

impl From<calyx_core::ledger::DocumentKind> for DocumentKind {
    fn from(value: calyx_core::ledger::DocumentKind) -> Self {
        match value {
            calyx_core::ledger::DocumentKind::Bill => Self::Bill,
            calyx_core::ledger::DocumentKind::Invoice => Self::Invoice,
            calyx_core::ledger::DocumentKind::Payment => Self::Payment,
        }
    }
}

impl From<DocumentKind> for calyx_core::ledger::DocumentKind {
    fn from(value: DocumentKind) -> Self {
        match value {
            DocumentKind::Bill => Self::Bill,
            DocumentKind::Invoice => Self::Invoice,
            DocumentKind::Payment => Self::Payment,
        }
    }
}

impl From<calyx_core::reconciliation::BankTransactionKind> for BankTransactionKind {
    fn from(value: calyx_core::reconciliation::BankTransactionKind) -> Self {
        use calyx_core::reconciliation::BankTransactionKind as Core;
        match value {
            Core::Deposit => Self::Deposit,
            Core::Withdrawal => Self::Withdrawal,
            Core::Fee => Self::Fee,
            Core::Interest => Self::Interest,
            Core::Other => Self::Other,
        }
    }
}

impl From<BankTransactionKind> for calyx_core::reconciliation::BankTransactionKind {
    fn from(value: BankTransactionKind) -> Self {
        match value {
            BankTransactionKind::Deposit => Self::Deposit,
            BankTransactionKind::Withdrawal => Self::Withdrawal,
            BankTransactionKind::Fee => Self::Fee,
            BankTransactionKind::Interest => Self::Interest,
            BankTransactionKind::Other => Self::Other,
        }
    }
}

impl From<calyx_core::reconciliation::MatchConfidence> for MatchConfidence {
    fn from(value: calyx_core::reconciliation::MatchConfidence) -> Self {
        match value {
            calyx_core::reconciliation::MatchConfidence::Exact => Self::Exact,
            calyx_core::reconciliation::MatchConfidence::High => Self::High,
        }
    }
}

impl From<MatchConfidence> for calyx_core::reconciliation::MatchConfidence {
    fn from(value: MatchConfidence) -> Self {
        match value {
            MatchConfidence::Exact => Self::Exact,
            MatchConfidence::High => Self::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_roundtrip() {
        for core in [
            calyx_core::account::AccountType::Asset,
            calyx_core::account::AccountType::Liability,
            calyx_core::account::AccountType::Equity,
            calyx_core::account::AccountType::Income,
            calyx_core::account::AccountType::Expense,
        ] {
            let db: AccountType = core.into();
            let back: calyx_core::account::AccountType = db.into();
            assert_eq!(back, core);
        }
    }

    #[test]
    fn test_entry_side_roundtrip() {
        for core in [
            calyx_core::ledger::EntrySide::Debit,
            calyx_core::ledger::EntrySide::Credit,
        ] {
            let db: EntrySide = core.into();
            let back: calyx_core::ledger::EntrySide = db.into();
            assert_eq!(back, core);
        }
    }

    #[test]
    fn test_match_confidence_string_values() {
        use sea_orm::ActiveEnum;
        assert_eq!(MatchConfidence::Exact.to_value(), "exact");
        assert_eq!(MatchConfidence::High.to_value(), "high");
    }

    #[test]
    fn test_bank_transaction_kind_roundtrip() {
        for core in [
            calyx_core::reconciliation::BankTransactionKind::Deposit,
            calyx_core::reconciliation::BankTransactionKind::Withdrawal,
            calyx_core::reconciliation::BankTransactionKind::Fee,
            calyx_core::reconciliation::BankTransactionKind::Interest,
            calyx_core::reconciliation::BankTransactionKind::Other,
        ] {
            let db: BankTransactionKind = core.into();
            let back: calyx_core::reconciliation::BankTransactionKind = db.into();
            assert_eq!(back, core);
        }
    }
}
