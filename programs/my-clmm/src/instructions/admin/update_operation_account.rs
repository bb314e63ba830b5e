use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateOperationAccount<'info> {
    /// Address to be set as operation account owner.
    #[account(
        address = crate::admin::id() @ ErrorCode::NotApproved
    )]
    pub owner: Signer<'info>,

    /// Operation state account holding operation owners and whitelist mints.
    #[account(
        mut,
        seeds = [
            OPERATION_SEED.as_bytes(),
        ],
        bump,
    )]
    pub operation_state: AccountLoader<'info, OperationState>,
}

/// `param` selects the list and direction:
/// 0 add operation owners, 1 remove operation owners,
/// 2 add whitelist mints, 3 remove whitelist mints.
pub fn update_operation_account(
    ctx: Context<UpdateOperationAccount>,
    param: u8,
    keys: Vec<Pubkey>,
) -> Result<()> {
    require!(!keys.is_empty(), ErrorCode::InvalidInputKeys);
    let mut operation_state = ctx.accounts.operation_state.load_mut()?;
    match param {
        0 => operation_state.update_operation_owner(&keys)?,
        1 => operation_state.remove_operation_owner(&keys)?,
        2 => operation_state.update_whitelist_mint(&keys)?,
        3 => operation_state.remove_whitelist_mint(&keys)?,
        _ => return err!(ErrorCode::InvalidUpdateConfigFlag),
    }
    msg!("operation account updated, param: {}, keys: {}", param, keys.len());
    Ok(())
}
