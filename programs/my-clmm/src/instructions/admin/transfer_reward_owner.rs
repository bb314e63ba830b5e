use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct TransferRewardOwner<'info> {
    /// Only the admin may hand over reward authority.
    #[account(
        address = crate::admin::id() @ ErrorCode::NotApproved
    )]
    pub authority: Signer<'info>,

    #[account(mut)]
    pub pool_state: AccountLoader<'info, PoolState>,
}

pub fn transfer_reward_owner(ctx: Context<TransferRewardOwner>, new_owner: Pubkey) -> Result<()> {
    require_keys_neq!(new_owner, Pubkey::default(), ErrorCode::InvalidRewardOwner);
    let mut pool_state = ctx.accounts.pool_state.load_mut()?;
    pool_state.transfer_reward_owner(new_owner);
    Ok(())
}
