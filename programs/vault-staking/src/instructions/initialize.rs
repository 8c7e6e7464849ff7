use anchor_lang::prelude::*;

use crate::{constants::VAULT_SEED, events::VaultInitialized, state::Vault};

#[derive(Accounts)]
#[instruction(vault_id: u64)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    // init_if_needed so a second call reaches the handler and fails with
    // AlreadyInitialized instead of a system program error.
    #[account(
        init_if_needed,
        payer = owner,
        space = Vault::LEN,
        seeds = [VAULT_SEED, owner.key().as_ref(), &vault_id.to_le_bytes()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, vault_id: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let bump = ctx.bumps.vault;

    let vault = &mut ctx.accounts.vault;
    vault.initialize(owner, bump, vault_id)?;

    emit!(VaultInitialized {
        vault: vault.key(),
        owner,
        vault_id,
    });

    msg!("Vault {} initialized for owner {}", vault_id, owner);

    Ok(())
}
