use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{constants::VAULT_SEED, events::Deposited, state::Vault};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref(), &vault.vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

/// Move lamports from the owner into vault custody
pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let vault_key = ctx.accounts.vault.key();
    let total_deposited = ctx.accounts.vault.deposit(&owner, amount)?;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(Deposited {
        vault: vault_key,
        owner,
        amount,
        total_deposited,
    });

    msg!("Deposited {} lamports. Total deposited: {}", amount, total_deposited);

    Ok(())
}
