use anchor_lang::prelude::*;

use crate::{clock::SysvarClock, constants::VAULT_SEED, events::Staked, state::Vault};

#[derive(Accounts)]
pub struct Stake<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref(), &vault.vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
}

/// Lock part of the unstaked balance in the single stake slot
pub fn handler(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let vault = &mut ctx.accounts.vault;
    let started_at = vault.stake(&owner, amount, &SysvarClock)?;

    emit!(Staked {
        vault: vault.key(),
        owner,
        amount,
        started_at,
    });

    msg!("Staked {} lamports at {}", amount, started_at);

    Ok(())
}
