pub const VAULT_SEED: &[u8] = b"vault";

/// Seconds a stake must be held before it earns the reward.
pub const MIN_STAKE_DURATION: i64 = 60;

/// 1000 bps = 10%
pub const REWARD_RATE_BASIS_POINTS: u64 = 1000;
pub const BASIS_POINTS_DIVISOR: u64 = 10_000;
