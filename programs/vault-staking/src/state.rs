use anchor_lang::prelude::*;

use crate::{
    clock::TimeSource,
    constants::{MIN_STAKE_DURATION, VAULT_SEED},
    error::VaultError,
    math::calculate_reward,
};

#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Vault {
    /// Only key allowed to deposit, withdraw, stake and unstake
    pub owner: Pubkey,
    /// PDA bump seed
    pub bump: u8,
    /// Salt mixed into the PDA seeds (allows multiple vaults per owner)
    pub vault_id: u64,
    /// Lamports held on behalf of the owner, staked portion included
    pub total_deposited: u64,
    /// Portion of total_deposited locked in the active stake
    pub staked_amount: u64,
    /// Unix timestamp the active stake started at, 0 when unstaked
    pub stake_started_at: i64,
    pub is_staked: bool,
}

/// Result of a committed unstake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnstakeOutcome {
    pub unstaked: u64,
    pub reward: u64,
    pub elapsed: i64,
}

impl Vault {
    pub const LEN: usize = 8 +  // discriminator
        32 +  // owner
        1 +   // bump
        8 +   // vault_id
        8 +   // total_deposited
        8 +   // staked_amount
        8 +   // stake_started_at
        1; // is_staked

    /// Derive the vault PDA for `owner` and `vault_id` the way the program checks it.
    pub fn find_address(owner: &Pubkey, vault_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[VAULT_SEED, owner.as_ref(), &vault_id.to_le_bytes()],
            &crate::ID,
        )
    }

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Lamports that are neither staked nor already withdrawn.
    pub fn available_balance(&self) -> Result<u64> {
        self.total_deposited
            .checked_sub(self.staked_amount)
            .ok_or_else(|| error!(VaultError::ArithmeticUnderflow))
    }

    /// Seconds the active stake has been held at `now`, 0 when unstaked.
    pub fn stake_duration(&self, now: i64) -> i64 {
        if !self.is_staked {
            return 0;
        }
        now.saturating_sub(self.stake_started_at).max(0)
    }

    pub fn has_met_min_duration(&self, now: i64) -> bool {
        self.is_staked && self.stake_duration(now) >= MIN_STAKE_DURATION
    }

    /// Reward an unstake at `now` would credit.
    pub fn pending_reward(&self, now: i64) -> Result<u64> {
        if self.has_met_min_duration(now) {
            calculate_reward(self.staked_amount)
        } else {
            Ok(0)
        }
    }

    /// Structural invariants that hold after every committed transition.
    pub fn is_consistent(&self) -> bool {
        self.staked_amount <= self.total_deposited
            && self.is_staked == (self.staked_amount > 0)
            && self.is_staked == (self.stake_started_at > 0)
    }

    fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, VaultError::Unauthorized);
        Ok(())
    }

    // Every transition validates and computes first and assigns last, so a
    // failed call leaves the record untouched.

    pub fn initialize(&mut self, owner: Pubkey, bump: u8, vault_id: u64) -> Result<()> {
        require!(!self.is_initialized(), VaultError::AlreadyInitialized);

        *self = Vault {
            owner,
            bump,
            vault_id,
            ..Vault::default()
        };

        Ok(())
    }

    /// Returns the new total_deposited.
    pub fn deposit(&mut self, caller: &Pubkey, amount: u64) -> Result<u64> {
        self.require_owner(caller)?;
        require!(amount > 0, VaultError::InvalidAmount);

        let total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;

        self.total_deposited = total_deposited;
        Ok(total_deposited)
    }

    /// Returns the new total_deposited.
    pub fn withdraw(&mut self, caller: &Pubkey, amount: u64) -> Result<u64> {
        self.require_owner(caller)?;
        require!(amount > 0, VaultError::InvalidAmount);
        require!(
            amount <= self.available_balance()?,
            VaultError::InsufficientFunds
        );

        let total_deposited = self
            .total_deposited
            .checked_sub(amount)
            .ok_or(VaultError::ArithmeticUnderflow)?;

        self.total_deposited = total_deposited;
        Ok(total_deposited)
    }

    /// Returns the timestamp the stake started at.
    pub fn stake(
        &mut self,
        caller: &Pubkey,
        amount: u64,
        clock: &impl TimeSource,
    ) -> Result<i64> {
        self.require_owner(caller)?;
        require!(amount > 0, VaultError::InvalidAmount);
        require!(!self.is_staked, VaultError::AlreadyStaked);
        require!(
            amount <= self.available_balance()?,
            VaultError::InsufficientUnstakedBalance
        );

        let now = clock.unix_timestamp()?;
        require!(now > 0, VaultError::InvalidTimestamp);

        self.staked_amount = amount;
        self.stake_started_at = now;
        self.is_staked = true;

        Ok(now)
    }

    pub fn unstake(&mut self, caller: &Pubkey, clock: &impl TimeSource) -> Result<UnstakeOutcome> {
        self.require_owner(caller)?;
        require!(self.is_staked, VaultError::NotStaked);

        let now = clock.unix_timestamp()?;
        require!(now >= self.stake_started_at, VaultError::InvalidTimestamp);

        let elapsed = now
            .checked_sub(self.stake_started_at)
            .ok_or(VaultError::ArithmeticUnderflow)?;

        // Strictly pass/fail at the threshold, no proration.
        let reward = if elapsed >= MIN_STAKE_DURATION {
            calculate_reward(self.staked_amount)?
        } else {
            0
        };

        let total_deposited = self
            .total_deposited
            .checked_add(reward)
            .ok_or(VaultError::ArithmeticOverflow)?;

        let outcome = UnstakeOutcome {
            unstaked: self.staked_amount,
            reward,
            elapsed,
        };

        self.total_deposited = total_deposited;
        self.staked_amount = 0;
        self.stake_started_at = 0;
        self.is_staked = false;

        Ok(outcome)
    }
}
