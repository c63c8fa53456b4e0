//! Parent/child hierarchy validation for the chart of accounts.
//!
//! The chart allows a single level of nesting: a sub-account's parent must
//! itself be top-level and share the child's account type. All hierarchy
//! rules are enforced here, once, at write time, over an in-memory adjacency
//! view of the chart.

use std::collections::HashMap;

use calyx_shared::types::AccountId;

use super::error::AccountError;
use super::types::AccountType;

/// Minimal view of an account needed for hierarchy validation.
#[derive(Debug, Clone, Copy)]
pub struct AccountNode {
    /// The account ID.
    pub id: AccountId,
    /// The account's type.
    pub account_type: AccountType,
    /// The account's current parent, if any.
    pub parent_id: Option<AccountId>,
}

/// In-memory adjacency view of the chart of accounts.
///
/// Built from the full account set before a parent assignment is validated;
/// cheap to construct since charts are small.
#[derive(Debug, Default)]
pub struct AccountHierarchy {
    nodes: HashMap<AccountId, AccountNode>,
}

impl AccountHierarchy {
    /// Builds the adjacency view from an iterator of nodes.
    #[must_use]
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = AccountNode>,
    {
        Self {
            nodes: nodes.into_iter().map(|n| (n.id, n)).collect(),
        }
    }

    /// Returns the node for an account, if present.
    #[must_use]
    pub fn get(&self, id: AccountId) -> Option<&AccountNode> {
        self.nodes.get(&id)
    }

    /// Validates assigning `parent` to the account `child` of type `child_type`.
    ///
    /// Rules, checked in order:
    /// 1. The parent must exist in the chart.
    /// 2. Parent and child must share the same account type.
    /// 3. The parent must be top-level (single-level hierarchy).
    /// 4. The assignment must not create a cycle.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule; nothing is written on error.
    pub fn validate_parent(
        &self,
        child: AccountId,
        child_type: AccountType,
        parent: AccountId,
    ) -> Result<(), AccountError> {
        let parent_node = self
            .get(parent)
            .ok_or(AccountError::ParentNotFound(parent))?;

        if parent_node.account_type != child_type {
            return Err(AccountError::TypeMismatch {
                parent: parent_node.account_type,
                child: child_type,
            });
        }

        if parent_node.parent_id.is_some() {
            return Err(AccountError::ParentNotTopLevel(parent));
        }

        if self.would_cycle(child, parent) {
            return Err(AccountError::WouldCycle { child, parent });
        }

        Ok(())
    }

    /// Returns true if pointing `child` at `parent` would create a cycle.
    ///
    /// Walks the parent chain starting from `parent`; if the walk reaches
    /// `child`, the assignment would close a loop. The walk is bounded by the
    /// node count, so a pre-existing corrupt cycle cannot hang it.
    #[must_use]
    pub fn would_cycle(&self, child: AccountId, parent: AccountId) -> bool {
        if child == parent {
            return true;
        }

        let mut current = Some(parent);
        let mut hops = 0usize;

        while let Some(id) = current {
            if id == child {
                return true;
            }
            hops += 1;
            if hops > self.nodes.len() {
                return true;
            }
            current = self.get(id).and_then(|n| n.parent_id);
        }

        false
    }
}
