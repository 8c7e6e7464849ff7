use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::set_return_data;

use crate::{
    clock::{SysvarClock, TimeSource},
    state::Vault,
};

#[derive(Accounts)]
pub struct VaultView<'info> {
    pub vault: Account<'info, Vault>,
}

/// Lamports the owner could withdraw right now
pub fn available_balance(ctx: Context<VaultView>) -> Result<()> {
    let available = ctx.accounts.vault.available_balance()?;

    set_return_data(&available.to_le_bytes());
    Ok(())
}

/// Reward an unstake would credit at the current clock (0 if not eligible)
pub fn preview_unstake(ctx: Context<VaultView>) -> Result<()> {
    let now = SysvarClock.unix_timestamp()?;
    let reward = ctx.accounts.vault.pending_reward(now)?;

    set_return_data(&reward.to_le_bytes());
    Ok(())
}
