//! `SeaORM` entity definitions.

pub mod bank_transactions;
pub mod chart_of_accounts;
pub mod journal_lines;
pub mod journals;
pub mod payments;
pub mod sea_orm_active_enums;
pub mod transactions;
