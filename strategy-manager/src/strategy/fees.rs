use soroban_fixed_point_math::FixedPoint;

use crate::constants::BPS_DENOMINATOR;

/// How a realized reward is divided between the user, the creator and the treasury
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeeSplit {
    pub net: i128,          // Paid to the user
    pub fee: i128,          // Total performance fee
    pub creator_fee: i128,  // Fee share paid to the strategy creator
    pub treasury_fee: i128, // Fee share paid to the treasury
}

/// Split a gross reward into the user's net amount and the performance fee
///
/// Formula:
/// - fee = floor(gross × fee_rate / 10_000)
/// - creator_fee = floor(fee × creator_share / 10_000)
/// - treasury_fee = fee - creator_fee
///
/// The three legs always sum to `gross`. Returns `None` on overflow.
///
/// # Parameters
/// - `gross`: Reward realized by the user, before fees
/// - `fee_rate`: Strategy performance fee in basis points
/// - `creator_share`: Creator's share of the fee in basis points
pub fn calculate_fee_split(gross: i128, fee_rate: u32, creator_share: u32) -> Option<FeeSplit> {
    if gross <= 0 {
        return Some(FeeSplit::default());
    }
    let denominator = BPS_DENOMINATOR as i128;
    let fee = gross.fixed_mul_floor(fee_rate as i128, denominator)?;
    let creator_fee = fee.fixed_mul_floor(creator_share as i128, denominator)?;
    Some(FeeSplit {
        net: gross - fee,
        fee,
        creator_fee,
        treasury_fee: fee - creator_fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_split_five_percent() {
        let split = calculate_fee_split(1_000, 500, 8_000).unwrap();
        assert_eq!(split.fee, 50);
        assert_eq!(split.net, 950);
        assert_eq!(split.creator_fee, 40);
        assert_eq!(split.treasury_fee, 10);
    }

    #[test]
    fn test_fee_split_floors_fee() {
        // 5% of 19 is 0.95, floored to 0
        let split = calculate_fee_split(19, 500, 8_000).unwrap();
        assert_eq!(split.fee, 0);
        assert_eq!(split.net, 19);

        // 10% of 1_234_567 = 123_456.7 -> 123_456; creator 80% = 98_764.8 -> 98_764
        let split = calculate_fee_split(1_234_567, 1_000, 8_000).unwrap();
        assert_eq!(split.fee, 123_456);
        assert_eq!(split.creator_fee, 98_764);
        assert_eq!(split.treasury_fee, 24_692);
        assert_eq!(split.net + split.creator_fee + split.treasury_fee, 1_234_567);
    }

    #[test]
    fn test_fee_split_all_to_treasury() {
        let split = calculate_fee_split(10_000, 1_000, 0).unwrap();
        assert_eq!(split.creator_fee, 0);
        assert_eq!(split.treasury_fee, 1_000);
    }

    #[test]
    fn test_fee_split_zero_reward() {
        assert_eq!(calculate_fee_split(0, 1_000, 8_000).unwrap(), FeeSplit::default());
        assert_eq!(calculate_fee_split(-5, 1_000, 8_000).unwrap(), FeeSplit::default());
    }

    #[test]
    fn test_fee_split_zero_rate() {
        let split = calculate_fee_split(777, 0, 8_000).unwrap();
        assert_eq!(split.net, 777);
        assert_eq!(split.fee, 0);
    }
}
