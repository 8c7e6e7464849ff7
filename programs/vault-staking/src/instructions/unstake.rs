use anchor_lang::prelude::*;

use crate::{
    clock::SysvarClock,
    constants::{MIN_STAKE_DURATION, VAULT_SEED},
    events::Unstaked,
    state::Vault,
};

#[derive(Accounts)]
pub struct Unstake<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref(), &vault.vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
}

/// Release the stake, crediting the reward if it was held long enough
pub fn handler(ctx: Context<Unstake>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let vault = &mut ctx.accounts.vault;
    let outcome = vault.unstake(&owner, &SysvarClock)?;

    if outcome.reward > 0 {
        msg!(
            "Unstaked {} lamports after {}s, reward {}",
            outcome.unstaked,
            outcome.elapsed,
            outcome.reward
        );
    } else {
        msg!(
            "Unstaked {} lamports after {}s, below {}s minimum: no reward",
            outcome.unstaked,
            outcome.elapsed,
            MIN_STAKE_DURATION
        );
    }

    emit!(Unstaked {
        vault: vault.key(),
        owner,
        amount: outcome.unstaked,
        reward: outcome.reward,
        elapsed: outcome.elapsed,
        total_deposited: vault.total_deposited,
    });

    Ok(())
}
