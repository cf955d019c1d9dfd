use ink::env::{DefaultEnvironment, Environment};

pub use ink::primitives::AccountId;

pub type Balance = <DefaultEnvironment as Environment>::Balance;
pub type BlockNumber = <DefaultEnvironment as Environment>::BlockNumber;

/// Reward action tag supplied by the caller (e.g. data submission, ad click).
pub type ActionType = u32;
pub type RoleId = u32;
/// Whole-number percentage, 0..=100.
pub type Rate = u8;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// Caller lacks the role (or identity) the message requires.
    Unauthorized,
    InsufficientBalance,
    InsufficientAllowance,
    /// Zero where a positive amount is required, or arithmetic overflow.
    InvalidAmount,
    /// Purchase rates out of range or summing above 100.
    InvalidRate,
}

pub mod constants {
    use super::{Balance, Rate, RoleId};

    pub const TOKEN_NAME: &str = "PersonalDataToken";
    pub const TOKEN_SYMBOL: &str = "PDT";
    pub const DECIMALS: u8 = 18;
    pub const UNIT: Balance = 1_000_000_000_000_000_000;

    pub const INITIAL_SUPPLY: Balance = 100_000_000 * UNIT;

    pub const OPERATOR_SHARE_PCT: Balance = 70;
    pub const TEAM_SHARE_PCT: Balance = 20;
    pub const INVESTOR_SHARE_PCT: Balance = 10;
    pub const PERCENT: Balance = 100;

    pub const DEFAULT_BURN_RATE: Rate = 10;
    pub const DEFAULT_OPERATOR_RATE: Rate = 5;

    pub const DEFAULT_ADMIN_ROLE: RoleId = 0;
    pub const MINTER_ROLE: RoleId = ink::selector_id!("MINTER_ROLE");
    pub const REWARDER_ROLE: RoleId = ink::selector_id!("REWARDER_ROLE");
}

/// One paid reward, kept per recipient.
#[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct RewardRecord {
    pub action_type: ActionType,
    pub amount: Balance,
    pub block: BlockNumber,
}
