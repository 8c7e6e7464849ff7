use anchor_lang::prelude::*;

use crate::{constants::VAULT_SEED, error::VaultError, events::Withdrawn, state::Vault};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref(), &vault.vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
}

/// Withdraw unstaked lamports back to the owner
pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let vault_key = ctx.accounts.vault.key();
    let vault = &mut ctx.accounts.vault;
    let total_deposited = vault.withdraw(&owner, amount)?;

    // Credited rewards are bookkeeping only; never dip into rent.
    let vault_info = vault.to_account_info();
    let rent_exempt = Rent::get()?.minimum_balance(Vault::LEN);
    let spendable = vault_info
        .lamports()
        .checked_sub(rent_exempt)
        .ok_or(VaultError::InsufficientFunds)?;
    require!(amount <= spendable, VaultError::InsufficientFunds);

    // Program owns the PDA, so lamports move without a system program CPI.
    vault_info.sub_lamports(amount)?;
    ctx.accounts.owner.to_account_info().add_lamports(amount)?;

    emit!(Withdrawn {
        vault: vault_key,
        owner,
        amount,
        total_deposited,
    });

    msg!("Withdrawn {} lamports. Total deposited: {}", amount, total_deposited);

    Ok(())
}
