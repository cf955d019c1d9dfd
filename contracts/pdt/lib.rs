#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod ledger;
pub mod model;
pub mod rewards;
pub mod roles;
pub mod settlement;

pub use model::{Error, Result};

#[ink::contract]
mod pdt {
    use ink::prelude::{string::String, vec::Vec};
    use ink::storage::Mapping;

    use crate::ledger::Ledger;
    use crate::model::constants::*;
    use crate::model::{ActionType, Error, Rate, Result, RewardRecord, RoleId};
    use crate::rewards::RewardSchedule;
    use crate::roles::RoleRegistry;
    use crate::settlement::{InitialAllocation, PurchaseRates};

    #[ink(event)]
    pub struct Transferred {
        #[ink(topic)]
        from_acc: AccountId,
        #[ink(topic)]
        to_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Minted {
        #[ink(topic)]
        to_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Burned {
        #[ink(topic)]
        from_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Approved {
        #[ink(topic)]
        owner_acc: AccountId,
        #[ink(topic)]
        spender_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct RoleGranted {
        #[ink(topic)]
        role: RoleId,
        #[ink(topic)]
        account: AccountId,
        sender_acc: AccountId,
    }

    #[ink(event)]
    pub struct RoleRevoked {
        #[ink(topic)]
        role: RoleId,
        #[ink(topic)]
        account: AccountId,
        sender_acc: AccountId,
    }

    #[ink(event)]
    pub struct RewardPaid {
        #[ink(topic)]
        recipient_acc: AccountId,
        action_type: ActionType,
        amount: Balance,
    }

    #[ink(event)]
    pub struct PurchaseSettled {
        #[ink(topic)]
        buyer_acc: AccountId,
        #[ink(topic)]
        seller_acc: AccountId,
        amount: Balance,
        burned: Balance,
        operator_fee: Balance,
        seller_amount: Balance,
    }

    #[ink(storage)]
    pub struct PersonalDataToken {
        // access control
        roles: RoleRegistry,

        // token state
        ledger: Ledger,
        allowances: Mapping<(AccountId, AccountId), Balance>,

        // fixed at construction
        operator_acc: AccountId,
        team_acc: AccountId,
        investor_acc: AccountId,
        burn_rate: Rate,
        operator_rate: Rate,

        // recipient -> number of rewards, (recipient, index) -> record
        reward_count: Mapping<AccountId, u32>,
        reward_log: Mapping<(AccountId, u32), RewardRecord>,
    }

    impl PersonalDataToken {
        // -------- constructors --------

        /// Deploys with the default purchase rates.
        #[ink(constructor)]
        pub fn new(team_acc: AccountId, investor_acc: AccountId, operator_acc: AccountId) -> Result<Self> {
            Self::new_with_rates(
                team_acc,
                investor_acc,
                operator_acc,
                DEFAULT_BURN_RATE,
                DEFAULT_OPERATOR_RATE,
            )
        }

        /// Deploys with the deployer acting as operator wallet.
        #[ink(constructor)]
        pub fn new_with_deployer(team_acc: AccountId, investor_acc: AccountId) -> Result<Self> {
            Self::new(team_acc, investor_acc, Self::env().caller())
        }

        /// Mints the initial supply 70/20/10 to operator, team and investor
        /// and hands every role to the operator.
        #[ink(constructor)]
        pub fn new_with_rates(
            team_acc: AccountId,
            investor_acc: AccountId,
            operator_acc: AccountId,
            burn_rate: Rate,
            operator_rate: Rate,
        ) -> Result<Self> {
            let rates = PurchaseRates::new(burn_rate, operator_rate)?;
            let allocation = InitialAllocation::of(INITIAL_SUPPLY)?;

            let mut instance = Self {
                roles: RoleRegistry::default(),
                ledger: Ledger::default(),
                allowances: Mapping::default(),
                operator_acc,
                team_acc,
                investor_acc,
                burn_rate: rates.burn(),
                operator_rate: rates.operator(),
                reward_count: Mapping::default(),
                reward_log: Mapping::default(),
            };

            for role in [DEFAULT_ADMIN_ROLE, MINTER_ROLE, REWARDER_ROLE] {
                instance.roles.grant(role, operator_acc);
            }

            for (to_acc, amount) in [
                (operator_acc, allocation.operator),
                (team_acc, allocation.team),
                (investor_acc, allocation.investor),
            ] {
                if amount == 0 {
                    continue
                }
                instance.ledger.mint(to_acc, amount)?;
                Self::env().emit_event(Minted { to_acc, amount });
            }

            Ok(instance)
        }

        // -------- metadata / parameters --------

        #[ink(message)]
        pub fn token_name(&self) -> String {
            String::from(TOKEN_NAME)
        }

        #[ink(message)]
        pub fn token_symbol(&self) -> String {
            String::from(TOKEN_SYMBOL)
        }

        #[ink(message)]
        pub fn token_decimals(&self) -> u8 {
            DECIMALS
        }

        #[ink(message)]
        pub fn operator_wallet(&self) -> AccountId {
            self.operator_acc
        }

        #[ink(message)]
        pub fn team_wallet(&self) -> AccountId {
            self.team_acc
        }

        #[ink(message)]
        pub fn investor_wallet(&self) -> AccountId {
            self.investor_acc
        }

        #[ink(message)]
        pub fn burn_rate(&self) -> Rate {
            self.burn_rate
        }

        #[ink(message)]
        pub fn operator_rate(&self) -> Rate {
            self.operator_rate
        }

        // -------- roles --------

        #[ink(message)]
        pub fn admin_role(&self) -> RoleId {
            DEFAULT_ADMIN_ROLE
        }

        #[ink(message)]
        pub fn minter_role(&self) -> RoleId {
            MINTER_ROLE
        }

        #[ink(message)]
        pub fn rewarder_role(&self) -> RoleId {
            REWARDER_ROLE
        }

        #[ink(message)]
        pub fn has_role(&self, role: RoleId, account: AccountId) -> bool {
            self.roles.has_role(role, account)
        }

        /// Admin only. Granting an existing member is a silent no-op.
        #[ink(message)]
        pub fn grant_role(&mut self, role: RoleId, account: AccountId) -> Result<()> {
            let sender_acc = self.env().caller();
            self.roles.ensure(DEFAULT_ADMIN_ROLE, sender_acc)?;
            if self.roles.grant(role, account) {
                self.env().emit_event(RoleGranted { role, account, sender_acc });
            }
            Ok(())
        }

        /// Admin only. Revoking a non-member is a silent no-op.
        #[ink(message)]
        pub fn revoke_role(&mut self, role: RoleId, account: AccountId) -> Result<()> {
            let sender_acc = self.env().caller();
            self.roles.ensure(DEFAULT_ADMIN_ROLE, sender_acc)?;
            if self.roles.revoke(role, account) {
                self.env().emit_event(RoleRevoked { role, account, sender_acc });
            }
            Ok(())
        }

        /// Drops the caller's own membership of `role`.
        #[ink(message)]
        pub fn renounce_role(&mut self, role: RoleId) {
            let account = self.env().caller();
            if self.roles.revoke(role, account) {
                self.env().emit_event(RoleRevoked { role, account, sender_acc: account });
            }
        }

        // -------- read API --------

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.ledger.total_supply()
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.ledger.balance_of(owner_acc)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get((owner_acc, spender_acc)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn get_reward_amount(&self, action_type: ActionType) -> Balance {
            RewardSchedule::STANDARD.amount_for(action_type)
        }

        #[ink(message)]
        pub fn reward_count(&self, recipient_acc: AccountId) -> u32 {
            self.reward_count.get(recipient_acc).unwrap_or(0)
        }

        /// Paginated rewards paid to `recipient_acc`, oldest first.
        #[ink(message)]
        pub fn reward_history(&self, recipient_acc: AccountId, start_index: u32, limit: u32) -> Vec<RewardRecord> {
            let count = self.reward_count(recipient_acc);
            if start_index >= count || limit == 0 {
                return Vec::new()
            }
            let end_index = count.min(start_index.saturating_add(limit));
            (start_index..end_index)
                .filter_map(|idx| self.reward_log.get((recipient_acc, idx)))
                .collect()
        }

        // -------- write API --------

        /// Privileged mint: caller must hold the minter role.
        #[ink(message)]
        pub fn mint(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            let caller_acc = self.env().caller();
            self.roles.ensure(MINTER_ROLE, caller_acc)?;
            self.ledger.mint(to_acc, amount)?;
            self.env().emit_event(Minted { to_acc, amount });
            Ok(())
        }

        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            self.move_balance(from_acc, to_acc, amount)
        }

        #[ink(message)]
        pub fn burn(&mut self, amount: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            self.ledger.burn(from_acc, amount)?;
            if amount != 0 {
                self.env().emit_event(Burned { from_acc, amount });
            }
            Ok(())
        }

        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            self.allowances.insert((owner_acc, spender_acc), &amount);
            self.env().emit_event(Approved { owner_acc, spender_acc, amount });
            Ok(())
        }

        #[ink(message)]
        pub fn transfer_from(&mut self, from_acc: AccountId, to_acc: AccountId, amount: Balance) -> Result<()> {
            // Precheck balance to avoid burning allowance on failure
            if self.ledger.balance_of(from_acc) < amount {
                return Err(Error::InsufficientBalance)
            }
            let caller_acc = self.env().caller();
            let current_allow = self.allowance(from_acc, caller_acc);
            if current_allow < amount {
                return Err(Error::InsufficientAllowance)
            }

            self.move_balance(from_acc, to_acc, amount)?;
            self.allowances.insert((from_acc, caller_acc), &(current_allow - amount));
            Ok(())
        }

        /// Pays the tiered reward for `action_type` out of the operator wallet.
        /// Caller must hold the rewarder role.
        #[ink(message)]
        pub fn reward_user(&mut self, recipient_acc: AccountId, action_type: ActionType) -> Result<()> {
            let caller_acc = self.env().caller();
            self.roles.ensure(REWARDER_ROLE, caller_acc)?;

            let amount = RewardSchedule::STANDARD.amount_for(action_type);
            let index = self.reward_count(recipient_acc);
            let next_count = index.checked_add(1).ok_or(Error::InvalidAmount)?;

            self.move_balance(self.operator_acc, recipient_acc, amount)?;

            let block = self.env().block_number();
            self.reward_log.insert((recipient_acc, index), &RewardRecord { action_type, amount, block });
            self.reward_count.insert(recipient_acc, &next_count);
            self.env().emit_event(RewardPaid { recipient_acc, action_type, amount });
            Ok(())
        }

        /// Spends `amount` of the buyer's tokens: a share is burned, a share
        /// goes to the operator wallet, the rest to the seller.
        #[ink(message)]
        pub fn purchase_with_discount(
            &mut self,
            buyer_acc: AccountId,
            amount: Balance,
            seller_acc: AccountId,
        ) -> Result<()> {
            if self.env().caller() != buyer_acc {
                return Err(Error::Unauthorized)
            }
            let split = self.rates()?.split(amount)?;
            // Checked once so no sub-step below can run short
            if self.ledger.balance_of(buyer_acc) < amount {
                return Err(Error::InsufficientBalance)
            }

            self.ledger.burn(buyer_acc, split.burn)?;
            if split.burn != 0 {
                self.env().emit_event(Burned { from_acc: buyer_acc, amount: split.burn });
            }
            self.move_balance(buyer_acc, self.operator_acc, split.operator_fee)?;
            self.move_balance(buyer_acc, seller_acc, split.seller)?;

            self.env().emit_event(PurchaseSettled {
                buyer_acc,
                seller_acc,
                amount,
                burned: split.burn,
                operator_fee: split.operator_fee,
                seller_amount: split.seller,
            });
            Ok(())
        }

        // ---- internals ----

        fn rates(&self) -> Result<PurchaseRates> {
            PurchaseRates::new(self.burn_rate, self.operator_rate)
        }

        fn move_balance(&mut self, from_acc: AccountId, to_acc: AccountId, amount: Balance) -> Result<()> {
            self.ledger.transfer(from_acc, to_acc, amount)?;
            if amount != 0 && from_acc != to_acc {
                self.env().emit_event(Transferred { from_acc, to_acc, amount });
            }
            Ok(())
        }
    }


}
