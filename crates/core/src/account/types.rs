//! Account domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account type classification.
///
/// Every account in the chart belongs to exactly one of these five
/// categories; the category decides which side of a journal entry
/// increases the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Resources owned by the business.
    Asset,
    /// Obligations owed to others.
    Liability,
    /// Owner's residual interest.
    Equity,
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl AccountType {
    /// Returns which side of an entry increases accounts of this type.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Income => NormalBalance::Credit,
        }
    }
}

/// Normal balance side of an account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debits increase the balance (Asset, Expense).
    Debit,
    /// Credits increase the balance (Liability, Equity, Income).
    Credit,
}

impl NormalBalance {
    /// Calculates the balance change for a (debit, credit) pair.
    #[must_use]
    pub fn balance_change(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}

/// Account subtype for more specific categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountSubtype {
    /// Cash on hand.
    Cash,
    /// Bank account (reconcilable).
    Bank,
    /// Amounts owed by customers.
    AccountsReceivable,
    /// Stock held for sale.
    Inventory,
    /// Long-lived assets.
    FixedAsset,
    /// Any other asset.
    OtherAsset,
    /// Amounts owed to suppliers.
    AccountsPayable,
    /// Credit card liability.
    CreditCard,
    /// Any other liability.
    OtherLiability,
    /// Owner contributions and draws.
    OwnerEquity,
    /// Accumulated earnings.
    RetainedEarnings,
    /// Revenue from primary operations.
    OperatingIncome,
    /// Interest, refunds, and other income.
    OtherIncome,
    /// Direct cost of items sold.
    CostOfGoodsSold,
    /// Day-to-day operating costs.
    OperatingExpense,
    /// Any other expense.
    OtherExpense,
}

impl AccountSubtype {
    /// Returns the account type this subtype belongs to.
    #[must_use]
    pub const fn account_type(self) -> AccountType {
        match self {
            Self::Cash
            | Self::Bank
            | Self::AccountsReceivable
            | Self::Inventory
            | Self::FixedAsset
            | Self::OtherAsset => AccountType::Asset,
            Self::AccountsPayable | Self::CreditCard | Self::OtherLiability => {
                AccountType::Liability
            }
            Self::OwnerEquity | Self::RetainedEarnings => AccountType::Equity,
            Self::OperatingIncome | Self::OtherIncome => AccountType::Income,
            Self::CostOfGoodsSold | Self::OperatingExpense | Self::OtherExpense => {
                AccountType::Expense
            }
        }
    }

    /// Returns true if accounts of this subtype can be reconciled against
    /// bank statements.
    #[must_use]
    pub const fn is_bank(self) -> bool {
        matches!(self, Self::Bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_normal_balance_sides() {
        assert_eq!(AccountType::Asset.normal_balance(), NormalBalance::Debit);
        assert_eq!(AccountType::Expense.normal_balance(), NormalBalance::Debit);
        assert_eq!(
            AccountType::Liability.normal_balance(),
            NormalBalance::Credit
        );
        assert_eq!(AccountType::Equity.normal_balance(), NormalBalance::Credit);
        assert_eq!(AccountType::Income.normal_balance(), NormalBalance::Credit);
    }

    #[test]
    fn test_balance_change_debit_normal() {
        let nb = NormalBalance::Debit;
        assert_eq!(nb.balance_change(dec!(100), dec!(0)), dec!(100));
        assert_eq!(nb.balance_change(dec!(0), dec!(50)), dec!(-50));
        assert_eq!(nb.balance_change(dec!(100), dec!(30)), dec!(70));
    }

    #[test]
    fn test_balance_change_credit_normal() {
        let nb = NormalBalance::Credit;
        assert_eq!(nb.balance_change(dec!(0), dec!(100)), dec!(100));
        assert_eq!(nb.balance_change(dec!(50), dec!(0)), dec!(-50));
        assert_eq!(nb.balance_change(dec!(30), dec!(100)), dec!(70));
    }

    #[test]
    fn test_subtype_belongs_to_type() {
        assert_eq!(AccountSubtype::Bank.account_type(), AccountType::Asset);
        assert_eq!(
            AccountSubtype::AccountsPayable.account_type(),
            AccountType::Liability
        );
        assert_eq!(
            AccountSubtype::RetainedEarnings.account_type(),
            AccountType::Equity
        );
        assert_eq!(
            AccountSubtype::OperatingIncome.account_type(),
            AccountType::Income
        );
        assert_eq!(
            AccountSubtype::CostOfGoodsSold.account_type(),
            AccountType::Expense
        );
    }

    #[test]
    fn test_only_bank_subtype_is_reconcilable() {
        assert!(AccountSubtype::Bank.is_bank());
        assert!(!AccountSubtype::Cash.is_bank());
        assert!(!AccountSubtype::AccountsReceivable.is_bank());
    }
}
