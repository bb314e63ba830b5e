use anchor_lang::prelude::*;

/// Number of observations kept per pool
pub const OBSERVATION_NUM: usize = 100;
pub const OBSERVATION_SEED: &str = "observation";

/// The element of observations in ObservationState
#[zero_copy(unsafe)]
#[repr(C, packed)]
#[derive(Default, Debug)]
pub struct Observation {
    /// The block timestamp of the observation
    pub block_timestamp: u32,
    /// the cumulative of tick during the duration time
    pub tick_cumulative: i64,
    /// padding for feature update
    pub padding: [u64; 4],
}

impl Observation {
    pub const LEN: usize = 4 + 8 + 8 * 4;
}

/// Ring buffer of price observations, PDA of `[OBSERVATION_SEED, pool_state]`
#[account(zero_copy(unsafe))]
#[repr(C, packed)]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ObservationState {
    /// Whether the ObservationState is initialized
    pub initialized: bool,
    /// recent update epoch
    pub recent_epoch: u64,
    /// the most-recently updated index of the observations array
    pub observation_index: u16,
    /// belongs to which pool
    pub pool_id: Pubkey,
    /// observation array
    pub observations: [Observation; OBSERVATION_NUM],
    /// padding for feature update
    pub padding: [u64; 4],
}

impl ObservationState {
    pub const LEN: usize = 8 + 1 + 8 + 2 + 32 + (Observation::LEN * OBSERVATION_NUM) + 8 * 4;

    /// Resets the buffer for a freshly created pool. `initialized` stays false
    /// until the first observation is written.
    pub fn initialize(&mut self, pool_id: Pubkey, recent_epoch: u64) {
        self.initialized = false;
        self.recent_epoch = recent_epoch;
        self.observation_index = 0;
        self.pool_id = pool_id;
        self.observations = [Observation::default(); OBSERVATION_NUM];
        self.padding = [0u64; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_sizes() {
        assert_eq!(Observation::LEN, std::mem::size_of::<Observation>());
        assert_eq!(ObservationState::LEN, 8 + std::mem::size_of::<ObservationState>());
    }

    #[test]
    fn initialize_clears_observations() {
        let mut state: ObservationState = bytemuck::Zeroable::zeroed();
        state.observation_index = 17;
        state.observations[3].tick_cumulative = -5;

        let pool_id = Pubkey::new_unique();
        state.initialize(pool_id, 9);

        assert!(!state.initialized);
        assert_eq!({ state.observation_index }, 0);
        assert_eq!({ state.recent_epoch }, 9);
        assert_eq!(state.pool_id, pool_id);
        assert_eq!({ state.observations[3].tick_cumulative }, 0);
    }
}
