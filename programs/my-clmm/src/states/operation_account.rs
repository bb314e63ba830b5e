use crate::error::ErrorCode;
use anchor_lang::prelude::*;

pub const OPERATION_SEED: &str = "operation";
pub const OPERATION_SIZE_USIZE: usize = 10;
pub const WHITE_MINT_SIZE_USIZE: usize = 100;

/// Holds the current owner of the factory
#[account(zero_copy(unsafe))]
#[repr(C, packed)]
#[derive(Debug)]
pub struct OperationState {
    /// Bump to identify PDA
    pub bump: u8,
    /// Address of the operation owner
    pub operation_owners: [Pubkey; OPERATION_SIZE_USIZE],
    /// The mint address of whitelist to emmit reward
    pub whitelist_mints: [Pubkey; WHITE_MINT_SIZE_USIZE],
}

impl OperationState {
    pub const LEN: usize = 8 + 1 + 32 * OPERATION_SIZE_USIZE + 32 * WHITE_MINT_SIZE_USIZE;

    pub fn initialize(&mut self, bump: u8) {
        self.bump = bump;
        self.operation_owners = [Pubkey::default(); OPERATION_SIZE_USIZE];
        self.whitelist_mints = [Pubkey::default(); WHITE_MINT_SIZE_USIZE];
    }

    pub fn validate_operation_owner(&self, owner: Pubkey) -> bool {
        owner != Pubkey::default() && self.operation_owners.contains(&owner)
    }

    pub fn update_operation_owner(&mut self, keys: &[Pubkey]) -> Result<()> {
        let mut owners = self.operation_owners.to_vec();
        owners.extend_from_slice(keys);
        self.operation_owners = compact(owners)?;
        Ok(())
    }

    pub fn remove_operation_owner(&mut self, keys: &[Pubkey]) -> Result<()> {
        let mut owners = self.operation_owners.to_vec();
        owners.retain(|item| !keys.contains(item));
        self.operation_owners = compact(owners)?;
        Ok(())
    }

    pub fn validate_whitelist_mint(&self, mint: Pubkey) -> bool {
        mint != Pubkey::default() && self.whitelist_mints.contains(&mint)
    }

    pub fn update_whitelist_mint(&mut self, keys: &[Pubkey]) -> Result<()> {
        let mut mints = self.whitelist_mints.to_vec();
        mints.extend_from_slice(keys);
        self.whitelist_mints = compact(mints)?;
        Ok(())
    }

    pub fn remove_whitelist_mint(&mut self, keys: &[Pubkey]) -> Result<()> {
        let mut mints = self.whitelist_mints.to_vec();
        mints.retain(|item| !keys.contains(item));
        self.whitelist_mints = compact(mints)?;
        Ok(())
    }
}

/// Sorted, deduplicated, default keys dropped, then padded back to `N` slots.
fn compact<const N: usize>(mut keys: Vec<Pubkey>) -> Result<[Pubkey; N]> {
    keys.retain(|item| *item != Pubkey::default());
    keys.sort();
    keys.dedup();
    require_gte!(N, keys.len(), ErrorCode::OperationAccountFull);
    keys.resize(N, Pubkey::default());
    keys.try_into().map_err(|_| error!(ErrorCode::OperationAccountFull))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operation_state() -> Box<OperationState> {
        let mut state: Box<OperationState> = Box::new(bytemuck::Zeroable::zeroed());
        state.initialize(253);
        state
    }

    #[test]
    fn layout_size() {
        assert_eq!(OperationState::LEN, 8 + std::mem::size_of::<OperationState>());
    }

    #[test]
    fn owners_are_sorted_and_deduplicated() {
        let mut state = operation_state();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        state.update_operation_owner(&[b, a, b, Pubkey::default()]).unwrap();

        let mut expected = [a, b];
        expected.sort();
        assert_eq!(state.operation_owners[..2], expected);
        assert!(state.operation_owners[2..].iter().all(|k| *k == Pubkey::default()));
        assert!(state.validate_operation_owner(a));
        assert!(!state.validate_operation_owner(Pubkey::default()));

        state.remove_operation_owner(&[a]).unwrap();
        assert!(!state.validate_operation_owner(a));
        assert!(state.validate_operation_owner(b));
        assert_eq!(state.operation_owners[0], b);
    }

    #[test]
    fn owner_capacity_is_enforced() {
        let mut state = operation_state();
        let keys: Vec<Pubkey> = (0..OPERATION_SIZE_USIZE).map(|_| Pubkey::new_unique()).collect();
        state.update_operation_owner(&keys).unwrap();
        // re-adding present keys does not consume slots
        state.update_operation_owner(&keys[..3]).unwrap();

        let err = state.update_operation_owner(&[Pubkey::new_unique()]).unwrap_err();
        assert_eq!(err, ErrorCode::OperationAccountFull.into());
        assert!(keys.iter().all(|k| state.validate_operation_owner(*k)));
    }

    #[test]
    fn whitelist_mints() {
        let mut state = operation_state();
        let mint = Pubkey::new_unique();
        assert!(!state.validate_whitelist_mint(mint));
        state.update_whitelist_mint(&[mint]).unwrap();
        assert!(state.validate_whitelist_mint(mint));
        state.remove_whitelist_mint(&[mint]).unwrap();
        assert!(!state.validate_whitelist_mint(mint));
    }
}
