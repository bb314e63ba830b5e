use crate::error::ErrorCode;
use crate::states::*;
use crate::util::get_recent_epoch;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdatePoolStatus<'info> {
    #[account(
        address = crate::admin::id() @ ErrorCode::NotApproved
    )]
    pub authority: Signer<'info>,

    #[account(mut)]
    pub pool_state: AccountLoader<'info, PoolState>,
}

pub fn update_pool_status(ctx: Context<UpdatePoolStatus>, status: u8) -> Result<()> {
    let mut pool_state = ctx.accounts.pool_state.load_mut()?;
    pool_state.set_status(status);
    pool_state.recent_epoch = get_recent_epoch()?;
    msg!(
        "pool {} status {:#07b}, swap enabled: {}",
        ctx.accounts.pool_state.key(),
        status,
        pool_state.get_status_by_bit(PoolStatusBitIndex::Swap)
    );
    Ok(())
}
