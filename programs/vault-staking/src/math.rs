use anchor_lang::prelude::*;

use crate::{
    constants::{BASIS_POINTS_DIVISOR, REWARD_RATE_BASIS_POINTS},
    error::VaultError,
};

/// Reward earned by a stake that has met the minimum duration.
///
/// Formula: reward = staked_amount × REWARD_RATE_BASIS_POINTS / BASIS_POINTS_DIVISOR
///
/// Truncates toward zero, so dust stakes below 10 lamports earn nothing.
pub fn calculate_reward(staked_amount: u64) -> Result<u64> {
    mul_div_floor(staked_amount, REWARD_RATE_BASIS_POINTS, BASIS_POINTS_DIVISOR)
}

/// Safe multiplication then floor division.
///
/// Computes: (value × numerator) / denominator
/// Uses u128 intermediate to prevent overflow.
pub fn mul_div_floor(value: u64, numerator: u64, denominator: u64) -> Result<u64> {
    require!(denominator > 0, VaultError::DivisionByZero);

    let product = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(VaultError::ArithmeticOverflow)?;

    let result = product / (denominator as u128);

    u64::try_from(result).map_err(|_| error!(VaultError::ArithmeticOverflow))
}
