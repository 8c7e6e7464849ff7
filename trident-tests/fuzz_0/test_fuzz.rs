use anchor_lang::prelude::Pubkey;
use rand::Rng;
use trident_fuzz::fuzzing::*;
use vault_staking::{
    clock::FixedClock,
    constants::{BASIS_POINTS_DIVISOR, MIN_STAKE_DURATION, REWARD_RATE_BASIS_POINTS},
    state::Vault,
};

const GENESIS: i64 = 1_700_000_000;

/// Independent bookkeeping the real vault is checked against after every flow
#[derive(Default, Clone)]
struct VaultTracker {
    total_deposited: u64,
    staked_amount: u64,
    stake_started_at: i64,
    deposited_in: u64,
    withdrawn_out: u64,
    rewards_paid: u64,
}

#[derive(FuzzTestMethods)]
struct FuzzTest {
    trident: Trident,
    owner: Pubkey,
    vault: Vault,
    clock: FixedClock,
    vault_tracker: VaultTracker,
}

#[flow_executor]
impl FuzzTest {
    fn new() -> Self {
        Self {
            trident: Trident::default(),
            owner: Pubkey::new_unique(),
            vault: Vault::default(),
            clock: FixedClock(GENESIS),
            vault_tracker: VaultTracker::default(),
        }
    }

    #[init]
    fn start(&mut self) {
        self.owner = Pubkey::new_unique();
        self.clock = FixedClock(GENESIS);
        self.vault = Vault::default();
        self.vault_tracker = VaultTracker::default();

        let (_, bump) = Vault::find_address(&self.owner, 0);
        self.vault
            .initialize(self.owner, bump, 0)
            .expect("fresh vault must initialize");

        // Invariant: first writer wins
        let before = self.vault.clone();
        assert!(self.vault.initialize(Pubkey::new_unique(), bump, 0).is_err());
        assert!(self.vault == before, "Invariant: re-initialize must not mutate");
    }

    #[flow]
    fn flow_deposit(&mut self) {
        // Zero is included on purpose
        let amount = rand::thread_rng().gen_range(0..=1_000_000_000_000u64);
        let before = self.vault.clone();

        match self.vault.deposit(&self.owner, amount) {
            Ok(total) => {
                assert!(amount > 0, "Invariant: zero deposit must fail");
                self.vault_tracker.total_deposited += amount;
                self.vault_tracker.deposited_in += amount;
                assert_eq!(total, self.vault_tracker.total_deposited);
            }
            Err(_) => {
                assert_eq!(amount, 0, "Invariant: positive deposit must succeed");
                assert!(self.vault == before, "Invariant: failed deposit must not mutate");
            }
        }
        self.check_invariants();
    }

    #[flow]
    fn flow_withdraw(&mut self) {
        let available = self.vault_tracker.total_deposited - self.vault_tracker.staked_amount;
        // Overshoot the withdrawable balance some of the time
        let amount = rand::thread_rng().gen_range(0..=available.saturating_add(10));
        let before = self.vault.clone();

        match self.vault.withdraw(&self.owner, amount) {
            Ok(_) => {
                assert!(amount > 0 && amount <= available);
                self.vault_tracker.total_deposited -= amount;
                self.vault_tracker.withdrawn_out += amount;
            }
            Err(_) => {
                assert!(amount == 0 || amount > available);
                assert!(self.vault == before, "Invariant: failed withdraw must not mutate");
            }
        }
        self.check_invariants();
    }

    #[flow]
    fn flow_stake(&mut self) {
        let available = self.vault_tracker.total_deposited - self.vault_tracker.staked_amount;
        let amount = rand::thread_rng().gen_range(0..=available.saturating_add(10));
        let already_staked = self.vault_tracker.staked_amount > 0;
        let before = self.vault.clone();

        match self.vault.stake(&self.owner, amount, &self.clock) {
            Ok(started_at) => {
                assert!(amount > 0 && !already_staked && amount <= available);
                self.vault_tracker.staked_amount = amount;
                self.vault_tracker.stake_started_at = started_at;
            }
            Err(_) => {
                assert!(amount == 0 || already_staked || amount > available);
                assert!(self.vault == before, "Invariant: failed stake must not mutate");
            }
        }
        self.check_invariants();
    }

    #[flow]
    fn flow_advance_clock(&mut self) {
        // Straddle the reward threshold
        let seconds = rand::thread_rng().gen_range(0..=2 * MIN_STAKE_DURATION);
        self.clock.advance(seconds);
    }

    #[flow]
    fn flow_unstake(&mut self) {
        let was_staked = self.vault_tracker.staked_amount > 0;
        let before = self.vault.clone();

        match self.vault.unstake(&self.owner, &self.clock) {
            Ok(outcome) => {
                assert!(was_staked);
                let elapsed = self.clock.0 - self.vault_tracker.stake_started_at;
                let expected_reward = if elapsed >= MIN_STAKE_DURATION {
                    ((self.vault_tracker.staked_amount as u128)
                        * REWARD_RATE_BASIS_POINTS as u128
                        / BASIS_POINTS_DIVISOR as u128) as u64
                } else {
                    0
                };

                assert_eq!(outcome.elapsed, elapsed);
                assert_eq!(outcome.reward, expected_reward, "Invariant: reward is 10% or nothing");

                self.vault_tracker.total_deposited += expected_reward;
                self.vault_tracker.rewards_paid += expected_reward;
                self.vault_tracker.staked_amount = 0;
                self.vault_tracker.stake_started_at = 0;
            }
            Err(_) => {
                assert!(!was_staked);
                assert!(self.vault == before, "Invariant: failed unstake must not mutate");
            }
        }
        self.check_invariants();
    }

    #[flow]
    fn flow_intruder(&mut self) {
        let intruder = Pubkey::new_unique();
        let amount = rand::thread_rng().gen_range(1..=1_000_000u64);
        let before = self.vault.clone();

        assert!(self.vault.deposit(&intruder, amount).is_err());
        assert!(self.vault.withdraw(&intruder, amount).is_err());
        assert!(self.vault.stake(&intruder, amount, &self.clock).is_err());
        assert!(self.vault.unstake(&intruder, &self.clock).is_err());
        assert!(self.vault == before, "Invariant: only the owner can move funds");
    }

    #[end]
    fn end(&mut self) {
        self.check_invariants();

        // Invariant: every lamport of bookkeeping is a deposit or a credited reward
        let t = &self.vault_tracker;
        assert_eq!(
            self.vault.total_deposited,
            t.deposited_in + t.rewards_paid - t.withdrawn_out
        );

        // Invariant: identity fields are write-once
        let (address, bump) = Vault::find_address(&self.owner, 0);
        assert_eq!(self.vault.owner, self.owner);
        assert_eq!(self.vault.bump, bump);
        assert_eq!(Vault::find_address(&self.vault.owner, self.vault.vault_id).0, address);
    }

    fn check_invariants(&self) {
        assert!(self.vault.is_consistent(), "Invariant: record must stay consistent");
        assert_eq!(self.vault.total_deposited, self.vault_tracker.total_deposited);
        assert_eq!(self.vault.staked_amount, self.vault_tracker.staked_amount);
        assert_eq!(self.vault.stake_started_at, self.vault_tracker.stake_started_at);
        assert!(self.vault.staked_amount <= self.vault.total_deposited);
    }
}

fn main() {
    // Run 1000 iterations with up to 100 flows per iteration
    FuzzTest::fuzz(1000, 100);
}
