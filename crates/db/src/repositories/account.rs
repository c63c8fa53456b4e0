//! Account repository for chart of accounts database operations.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use calyx_core::account::{AccountHierarchy, AccountNode, AccountSubtype, AccountType};
use calyx_shared::types::AccountId;

use crate::entities::{chart_of_accounts, journal_lines};

/// Error types for account operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Account code already exists.
    #[error("Account code '{0}' already exists")]
    DuplicateCode(String),

    /// Account not found.
    #[error("Account not found: {0}")]
    NotFound(Uuid),

    /// Hierarchy rule violation (type mismatch, nesting depth, cycle).
    #[error(transparent)]
    Hierarchy(#[from] calyx_core::account::AccountError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Account code (must be unique).
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account description.
    pub description: Option<String>,
    /// Account type.
    pub account_type: AccountType,
    /// Account subtype for more specific categorization.
    pub account_subtype: Option<AccountSubtype>,
    /// Parent account ID for sub-accounts.
    pub parent_id: Option<Uuid>,
    /// Whether the account is active.
    pub is_active: bool,
    /// Date the account was opened.
    pub opened_on: NaiveDate,
}

/// Filter options for listing accounts.
#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    /// Filter by account type.
    pub account_type: Option<AccountType>,
    /// Filter by active status.
    pub is_active: Option<bool>,
    /// Filter by parent ID (None = root accounts only).
    pub parent_id: Option<Option<Uuid>>,
}

/// Account repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account code is empty or already exists
    /// - The parent assignment violates a hierarchy rule
    /// - The database operation fails
    pub async fn create_account(
        &self,
        input: CreateAccountInput,
    ) -> Result<chart_of_accounts::Model, AccountError> {
        if input.code.trim().is_empty() {
            return Err(calyx_core::account::AccountError::CodeEmpty.into());
        }

        let existing = chart_of_accounts::Entity::find()
            .filter(chart_of_accounts::Column::Code.eq(&input.code))
            .one(&self.db)
            .await?;

        if existing.is_some() {
            return Err(AccountError::DuplicateCode(input.code));
        }

        let account_id = Uuid::new_v4();

        // Hierarchy rules are validated once, over the full chart, before
        // anything is written.
        if let Some(parent_id) = input.parent_id {
            let hierarchy = self.load_hierarchy().await?;
            hierarchy.validate_parent(
                AccountId::from_uuid(account_id),
                input.account_type,
                AccountId::from_uuid(parent_id),
            )?;
        }

        let now = Utc::now().into();
        let account = chart_of_accounts::ActiveModel {
            id: Set(account_id),
            code: Set(input.code),
            name: Set(input.name),
            description: Set(input.description),
            account_type: Set(input.account_type.into()),
            account_subtype: Set(input.account_subtype.map(Into::into)),
            parent_id: Set(input.parent_id),
            is_active: Set(input.is_active),
            balance: Set(Decimal::ZERO),
            opened_on: Set(input.opened_on),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let account = account.insert(&self.db).await?;
        Ok(account)
    }

    /// Re-parents an existing account.
    ///
    /// Passing `None` detaches the account from its parent. All hierarchy
    /// rules (same type, single level, no cycles) are checked before the
    /// update is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is missing, a rule is violated, or
    /// the database operation fails.
    pub async fn set_parent(
        &self,
        account_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> Result<chart_of_accounts::Model, AccountError> {
        let account = self.get_account(account_id).await?;

        if let Some(parent_id) = parent_id {
            let hierarchy = self.load_hierarchy().await?;
            hierarchy.validate_parent(
                AccountId::from_uuid(account_id),
                account.account_type.clone().into(),
                AccountId::from_uuid(parent_id),
            )?;
        }

        let mut active: chart_of_accounts::ActiveModel = account.into();
        active.parent_id = Set(parent_id);
        active.updated_at = Set(Utc::now().into());

        let account = active.update(&self.db).await?;
        Ok(account)
    }

    /// Gets an account by ID.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotFound` if the account does not exist.
    pub async fn get_account(
        &self,
        account_id: Uuid,
    ) -> Result<chart_of_accounts::Model, AccountError> {
        chart_of_accounts::Entity::find_by_id(account_id)
            .one(&self.db)
            .await?
            .ok_or(AccountError::NotFound(account_id))
    }

    /// Lists accounts with optional filters, ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_accounts(
        &self,
        filter: AccountFilter,
    ) -> Result<Vec<chart_of_accounts::Model>, AccountError> {
        let mut query =
            chart_of_accounts::Entity::find().order_by_asc(chart_of_accounts::Column::Code);

        if let Some(account_type) = filter.account_type {
            let db_type: crate::entities::sea_orm_active_enums::AccountType = account_type.into();
            query = query.filter(chart_of_accounts::Column::AccountType.eq(db_type));
        }

        if let Some(is_active) = filter.is_active {
            query = query.filter(chart_of_accounts::Column::IsActive.eq(is_active));
        }

        if let Some(parent_id) = filter.parent_id {
            match parent_id {
                Some(id) => {
                    query = query.filter(chart_of_accounts::Column::ParentId.eq(id));
                }
                None => {
                    query = query.filter(chart_of_accounts::Column::ParentId.is_null());
                }
            }
        }

        let accounts = query.all(&self.db).await?;
        Ok(accounts)
    }

    /// Deactivates an account so it no longer accepts postings.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is missing or the update fails.
    pub async fn deactivate(&self, account_id: Uuid) -> Result<(), AccountError> {
        let account = self.get_account(account_id).await?;

        let mut active: chart_of_accounts::ActiveModel = account.into();
        active.is_active = Set(false);
        active.updated_at = Set(Utc::now().into());
        active.update(&self.db).await?;

        Ok(())
    }

    /// Recomputes and stores the denormalized balance of an account.
    ///
    /// The balance is the sum of the account's journal lines, signed by the
    /// account type's normal balance side. Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is missing or a query fails.
    pub async fn recompute_balance(&self, account_id: Uuid) -> Result<Decimal, AccountError> {
        let account = self.get_account(account_id).await?;
        let account_type: AccountType = account.account_type.clone().into();
        let normal = account_type.normal_balance();

        let lines = journal_lines::Entity::find()
            .filter(journal_lines::Column::AccountId.eq(account_id))
            .all(&self.db)
            .await?;

        let balance = lines
            .iter()
            .map(|l| normal.balance_change(l.debit, l.credit))
            .sum::<Decimal>();

        let mut active: chart_of_accounts::ActiveModel = account.into();
        active.balance = Set(balance);
        active.updated_at = Set(Utc::now().into());
        active.update(&self.db).await?;

        Ok(balance)
    }

    /// Loads the adjacency view of the whole chart for hierarchy checks.
    async fn load_hierarchy(&self) -> Result<AccountHierarchy, AccountError> {
        let accounts = chart_of_accounts::Entity::find().all(&self.db).await?;

        Ok(AccountHierarchy::from_nodes(accounts.into_iter().map(
            |a| AccountNode {
                id: AccountId::from_uuid(a.id),
                account_type: a.account_type.into(),
                parent_id: a.parent_id.map(AccountId::from_uuid),
            },
        )))
    }
}
