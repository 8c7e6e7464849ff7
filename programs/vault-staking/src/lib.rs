use anchor_lang::prelude::*;

pub mod clock;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;

declare_id!("mkZJVMPpBYQhUjnhXKWMbuaVsEpGtGdTFa3BbRE1VU1");

#[program]
pub mod vault_staking {
    use super::*;

    /// Create the owner's vault at PDA ["vault", owner, vault_id]
    pub fn initialize(ctx: Context<Initialize>, vault_id: u64) -> Result<()> {
        instructions::initialize::handler(ctx, vault_id)
    }

    /// Deposit lamports from the owner into the vault
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraw unstaked lamports to the owner
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Lock deposited lamports in the single stake slot
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    /// Release the stake; 10% reward if held for at least 60 seconds
    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        instructions::unstake::handler(ctx)
    }

    // ============ View Functions (CPI composable) ============

    /// Unstaked balance the owner can withdraw
    pub fn available_balance(ctx: Context<VaultView>) -> Result<()> {
        instructions::view::available_balance(ctx)
    }

    /// Reward unstake would credit now
    pub fn preview_unstake(ctx: Context<VaultView>) -> Result<()> {
        instructions::view::preview_unstake(ctx)
    }
}
