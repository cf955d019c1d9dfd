use crate::model::{constants::UNIT, ActionType, Balance};

/// Fixed reward tiers keyed by action type, with a fallback for unknown tags.
pub struct RewardSchedule {
    tiers: &'static [(ActionType, Balance)],
    default_amount: Balance,
}

/// 0: data submission, 1: ad click, 2: survey.
const STANDARD_TIERS: [(ActionType, Balance); 3] = [(0, 50 * UNIT), (1, 100 * UNIT), (2, 200 * UNIT)];

impl RewardSchedule {
    pub const STANDARD: RewardSchedule = RewardSchedule {
        tiers: &STANDARD_TIERS,
        default_amount: 50 * UNIT,
    };

    pub fn amount_for(&self, action_type: ActionType) -> Balance {
        self.tiers
            .iter()
            .find(|(tag, _)| *tag == action_type)
            .map(|(_, amount)| *amount)
            .unwrap_or(self.default_amount)
    }
}
