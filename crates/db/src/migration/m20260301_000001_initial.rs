//! Initial database migration.
//!
//! Creates the enums, tables, and indexes for the chart of accounts, the
//! ledger (journals, journal lines, memo transactions), and the bank
//! reconciliation workflow.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: CHART OF ACCOUNTS
        // ============================================================
        db.execute_unprepared(CHART_OF_ACCOUNTS_SQL).await?;

        // ============================================================
        // PART 3: LEDGER
        // ============================================================
        db.execute_unprepared(JOURNALS_SQL).await?;
        db.execute_unprepared(JOURNAL_LINES_SQL).await?;
        db.execute_unprepared(TRANSACTIONS_SQL).await?;

        // ============================================================
        // PART 4: BANK RECONCILIATION
        // ============================================================
        db.execute_unprepared(PAYMENTS_SQL).await?;
        db.execute_unprepared(BANK_TRANSACTIONS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Account types
CREATE TYPE account_type AS ENUM (
    'asset',
    'liability',
    'equity',
    'income',
    'expense'
);

-- Account subtypes
CREATE TYPE account_subtype AS ENUM (
    'cash',
    'bank',
    'accounts_receivable',
    'inventory',
    'fixed_asset',
    'other_asset',
    'accounts_payable',
    'credit_card',
    'other_liability',
    'owner_equity',
    'retained_earnings',
    'operating_income',
    'other_income',
    'cost_of_goods_sold',
    'operating_expense',
    'other_expense'
);

-- Posting side
CREATE TYPE entry_side AS ENUM ('debit', 'credit');

-- Business document kinds
CREATE TYPE document_kind AS ENUM ('bill', 'invoice', 'payment');

-- Bank statement transaction kinds
CREATE TYPE bank_transaction_kind AS ENUM (
    'deposit',
    'withdrawal',
    'fee',
    'interest',
    'other'
);

-- Match confidence labels
CREATE TYPE match_confidence AS ENUM ('exact', 'high');
";

const CHART_OF_ACCOUNTS_SQL: &str = r"
CREATE TABLE chart_of_accounts (
    id UUID PRIMARY KEY,
    code VARCHAR(20) NOT NULL UNIQUE,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    account_type account_type NOT NULL,
    account_subtype account_subtype,
    parent_id UUID REFERENCES chart_of_accounts(id),
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    balance NUMERIC(19, 4) NOT NULL DEFAULT 0,
    opened_on DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_chart_of_accounts_parent ON chart_of_accounts(parent_id);
CREATE INDEX idx_chart_of_accounts_type ON chart_of_accounts(account_type);
";

const JOURNALS_SQL: &str = r"
CREATE TABLE journals (
    id UUID PRIMARY KEY,
    entry_date DATE NOT NULL,
    description TEXT NOT NULL,
    document_kind document_kind NOT NULL,
    document_id UUID NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_journals_document ON journals(document_kind, document_id);
CREATE INDEX idx_journals_entry_date ON journals(entry_date);
";

const JOURNAL_LINES_SQL: &str = r"
CREATE TABLE journal_lines (
    id UUID PRIMARY KEY,
    journal_id UUID NOT NULL REFERENCES journals(id) ON DELETE CASCADE,
    account_id UUID NOT NULL REFERENCES chart_of_accounts(id),
    debit NUMERIC(19, 4) NOT NULL DEFAULT 0,
    credit NUMERIC(19, 4) NOT NULL DEFAULT 0,
    memo TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    -- Exactly one side of the pair is set, and it is positive
    CONSTRAINT chk_one_side CHECK (
        (debit > 0 AND credit = 0) OR (debit = 0 AND credit > 0)
    )
);

CREATE INDEX idx_journal_lines_journal ON journal_lines(journal_id);
CREATE INDEX idx_journal_lines_account ON journal_lines(account_id);
";

const TRANSACTIONS_SQL: &str = r"
CREATE TABLE transactions (
    id UUID PRIMARY KEY,
    account_id UUID NOT NULL REFERENCES chart_of_accounts(id),
    side entry_side NOT NULL,
    amount NUMERIC(19, 4) NOT NULL CHECK (amount > 0),
    description TEXT NOT NULL,
    transaction_date DATE NOT NULL,
    document_kind document_kind NOT NULL,
    document_id UUID NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_transactions_account ON transactions(account_id);
CREATE INDEX idx_transactions_document ON transactions(document_kind, document_id);
";

const PAYMENTS_SQL: &str = r"
CREATE TABLE payments (
    id UUID PRIMARY KEY,
    amount NUMERIC(19, 4) NOT NULL CHECK (amount > 0),
    payment_date DATE NOT NULL,
    bank_account_id UUID NOT NULL REFERENCES chart_of_accounts(id),
    document_kind document_kind NOT NULL,
    document_id UUID NOT NULL,
    reconciled BOOLEAN NOT NULL DEFAULT FALSE,
    reconciled_date DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    -- Payments apply to a bill or an invoice, never another payment
    CONSTRAINT chk_payment_document CHECK (document_kind IN ('bill', 'invoice'))
);

CREATE INDEX idx_payments_bank_account ON payments(bank_account_id, reconciled);
CREATE INDEX idx_payments_date ON payments(payment_date);
";

const BANK_TRANSACTIONS_SQL: &str = r"
CREATE TABLE bank_transactions (
    id UUID PRIMARY KEY,
    bank_account_id UUID NOT NULL REFERENCES chart_of_accounts(id),
    transaction_date DATE NOT NULL,
    kind bank_transaction_kind NOT NULL,
    amount NUMERIC(19, 4) NOT NULL CHECK (amount >= 0),
    reconciled BOOLEAN NOT NULL DEFAULT FALSE,
    payment_id UUID REFERENCES payments(id),
    matched_amount NUMERIC(19, 4),
    match_confidence match_confidence,
    reconciled_by UUID,
    reconciled_at TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_bank_transactions_account
    ON bank_transactions(bank_account_id, reconciled);
CREATE INDEX idx_bank_transactions_date ON bank_transactions(transaction_date);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS bank_transactions;
DROP TABLE IF EXISTS payments;
DROP TABLE IF EXISTS transactions;
DROP TABLE IF EXISTS journal_lines;
DROP TABLE IF EXISTS journals;
DROP TABLE IF EXISTS chart_of_accounts;

DROP TYPE IF EXISTS match_confidence;
DROP TYPE IF EXISTS bank_transaction_kind;
DROP TYPE IF EXISTS document_kind;
DROP TYPE IF EXISTS entry_side;
DROP TYPE IF EXISTS account_subtype;
DROP TYPE IF EXISTS account_type;
";
