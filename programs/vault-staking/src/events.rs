use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub vault_id: u64,
}

#[event]
pub struct Deposited {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub total_deposited: u64,
}

#[event]
pub struct Withdrawn {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub total_deposited: u64,
}

#[event]
pub struct Staked {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub started_at: i64,
}

#[event]
pub struct Unstaked {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub reward: u64,
    pub elapsed: i64,
    pub total_deposited: u64,
}
