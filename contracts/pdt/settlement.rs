use crate::model::{
    constants::{INVESTOR_SHARE_PCT, PERCENT, TEAM_SHARE_PCT},
    Balance, Error, Rate, Result,
};

/// Burn and operator-fee percentages applied to discounted purchases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseRates {
    burn: Rate,
    operator: Rate,
}

impl PurchaseRates {
    pub fn new(burn: Rate, operator: Rate) -> Result<Self> {
        let combined = u16::from(burn) + u16::from(operator);
        if combined > PERCENT as u16 {
            return Err(Error::InvalidRate)
        }
        Ok(Self { burn, operator })
    }

    pub fn burn(&self) -> Rate {
        self.burn
    }

    pub fn operator(&self) -> Rate {
        self.operator
    }

    pub fn split(&self, amount: Balance) -> Result<PurchaseSplit> {
        if amount == 0 {
            return Err(Error::InvalidAmount)
        }
        let burn = percent_of(amount, Balance::from(self.burn))?;
        let operator_fee = percent_of(amount, Balance::from(self.operator))?;
        let seller = amount
            .checked_sub(burn)
            .and_then(|rest| rest.checked_sub(operator_fee))
            .ok_or(Error::InvalidRate)?;
        Ok(PurchaseSplit { burn, operator_fee, seller })
    }
}

/// How one purchase amount is divided. Components always sum to the amount;
/// the seller absorbs rounding dust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseSplit {
    pub burn: Balance,
    pub operator_fee: Balance,
    pub seller: Balance,
}

/// Genesis distribution of the fixed initial supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialAllocation {
    pub operator: Balance,
    pub team: Balance,
    pub investor: Balance,
}

impl InitialAllocation {
    /// 70/20/10 split; any remainder lands on the operator.
    pub fn of(total: Balance) -> Result<Self> {
        let team = percent_of(total, TEAM_SHARE_PCT)?;
        let investor = percent_of(total, INVESTOR_SHARE_PCT)?;
        let operator = total - team - investor;
        Ok(Self { operator, team, investor })
    }
}

fn percent_of(amount: Balance, pct: Balance) -> Result<Balance> {
    amount
        .checked_mul(pct)
        .map(|scaled| scaled / PERCENT)
        .ok_or(Error::InvalidAmount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::constants::{INITIAL_SUPPLY, UNIT};

    #[test]
    fn rates_above_one_hundred_rejected() {
        assert_eq!(PurchaseRates::new(60, 41), Err(Error::InvalidRate));
        assert_eq!(PurchaseRates::new(200, 0), Err(Error::InvalidRate));
        assert!(PurchaseRates::new(60, 40).is_ok());
        assert!(PurchaseRates::new(0, 0).is_ok());
    }

    #[test]
    fn split_of_thousand_tokens() {
        let rates = PurchaseRates::new(10, 5).unwrap();
        let split = rates.split(1_000 * UNIT).unwrap();
        assert_eq!(split.burn, 100 * UNIT);
        assert_eq!(split.operator_fee, 50 * UNIT);
        assert_eq!(split.seller, 850 * UNIT);
    }

    #[test]
    fn seller_takes_rounding_dust() {
        let rates = PurchaseRates::new(33, 33).unwrap();
        let split = rates.split(10).unwrap();
        assert_eq!(split.burn, 3);
        assert_eq!(split.operator_fee, 3);
        assert_eq!(split.seller, 4);
    }

    #[test]
    fn full_rates_leave_nothing_for_seller() {
        let split = PurchaseRates::new(70, 30).unwrap().split(999).unwrap();
        assert_eq!(split.burn + split.operator_fee + split.seller, 999);
        assert_eq!(split.burn, 699);
        assert_eq!(split.operator_fee, 299);
        assert_eq!(split.seller, 1);
    }

    #[test]
    fn unvalidated_rates_fail_instead_of_underflowing() {
        let rates = PurchaseRates { burn: 200, operator: 0 };
        assert_eq!(rates.split(100), Err(Error::InvalidRate));
        let rates = PurchaseRates { burn: 60, operator: 60 };
        assert_eq!(rates.split(100), Err(Error::InvalidRate));
    }

    #[test]
    fn zero_amount_rejected() {
        let rates = PurchaseRates::new(10, 5).unwrap();
        assert_eq!(rates.split(0), Err(Error::InvalidAmount));
    }

    #[test]
    fn overflowing_amount_rejected() {
        let rates = PurchaseRates::new(10, 5).unwrap();
        assert_eq!(rates.split(Balance::MAX), Err(Error::InvalidAmount));
    }

    #[test]
    fn genesis_allocation_is_70_20_10() {
        let alloc = InitialAllocation::of(INITIAL_SUPPLY).unwrap();
        assert_eq!(alloc.operator, INITIAL_SUPPLY * 70 / 100);
        assert_eq!(alloc.team, INITIAL_SUPPLY * 20 / 100);
        assert_eq!(alloc.investor, INITIAL_SUPPLY * 10 / 100);
        assert_eq!(alloc.operator + alloc.team + alloc.investor, INITIAL_SUPPLY);
    }

    #[test]
    fn allocation_remainder_goes_to_operator() {
        let alloc = InitialAllocation::of(7).unwrap();
        assert_eq!(alloc.team, 1);
        assert_eq!(alloc.investor, 0);
        assert_eq!(alloc.operator, 6);
    }
}
