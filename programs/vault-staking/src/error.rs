use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Vault already initialized at this address")]
    AlreadyInitialized,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Insufficient unstaked funds in vault")]
    InsufficientFunds,

    #[msg("Insufficient unstaked balance to stake this amount")]
    InsufficientUnstakedBalance,

    #[msg("Funds are already staked")]
    AlreadyStaked,

    #[msg("No funds are currently staked")]
    NotStaked,

    #[msg("Unauthorized - caller is not vault owner")]
    Unauthorized,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow,

    #[msg("Division by zero")]
    DivisionByZero,

    #[msg("Clock returned an invalid timestamp")]
    InvalidTimestamp,
}
