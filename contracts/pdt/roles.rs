use ink::storage::Mapping;

use crate::model::{AccountId, Error, Result, RoleId};

/// Flat role -> members table. Gating is an explicit `ensure` at the top
/// of each privileged message.
#[ink::storage_item]
#[derive(Default, Debug)]
pub struct RoleRegistry {
    members: Mapping<(RoleId, AccountId), bool>,
}

impl RoleRegistry {
    pub fn has_role(&self, role: RoleId, account: AccountId) -> bool {
        self.members.get((role, account)).unwrap_or(false)
    }

    /// Returns `true` when the account was not already a member.
    pub fn grant(&mut self, role: RoleId, account: AccountId) -> bool {
        if self.has_role(role, account) {
            return false
        }
        self.members.insert((role, account), &true);
        true
    }

    /// Returns `true` when the account was a member.
    pub fn revoke(&mut self, role: RoleId, account: AccountId) -> bool {
        if !self.has_role(role, account) {
            return false
        }
        self.members.remove((role, account));
        true
    }

    pub fn ensure(&self, role: RoleId, account: AccountId) -> Result<()> {
        if !self.has_role(role, account) {
            return Err(Error::Unauthorized)
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::constants::{DEFAULT_ADMIN_ROLE, MINTER_ROLE};

    #[ink::test]
    fn grant_and_revoke_are_idempotent() {
        let bob = ink::env::test::default_accounts::<ink::env::DefaultEnvironment>().bob;
        let mut roles = RoleRegistry::default();
        assert!(!roles.has_role(MINTER_ROLE, bob));

        assert!(roles.grant(MINTER_ROLE, bob));
        assert!(!roles.grant(MINTER_ROLE, bob));
        assert!(roles.has_role(MINTER_ROLE, bob));
        assert!(!roles.has_role(DEFAULT_ADMIN_ROLE, bob));

        assert!(roles.revoke(MINTER_ROLE, bob));
        assert!(!roles.revoke(MINTER_ROLE, bob));
        assert!(!roles.has_role(MINTER_ROLE, bob));
    }

    #[ink::test]
    fn ensure_rejects_non_members() {
        let acc = ink::env::test::default_accounts::<ink::env::DefaultEnvironment>();
        let mut roles = RoleRegistry::default();
        roles.grant(MINTER_ROLE, acc.alice);
        assert_eq!(roles.ensure(MINTER_ROLE, acc.alice), Ok(()));
        assert_eq!(roles.ensure(MINTER_ROLE, acc.charlie), Err(Error::Unauthorized));
    }
}
