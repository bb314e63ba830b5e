use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateAmmConfig<'info> {
    /// The amm config owner or admin
    #[account(
        constraint = owner.key() == amm_config.owner || owner.key() == crate::admin::id() @ ErrorCode::NotApproved
    )]
    pub owner: Signer<'info>,

    /// Amm config account to be changed
    #[account(mut)]
    pub amm_config: Account<'info, AmmConfig>,
}

pub fn update_amm_config(ctx: Context<UpdateAmmConfig>, param: u8, value: u32) -> Result<()> {
    let amm_config = &mut ctx.accounts.amm_config;
    match param {
        0 => amm_config.set_trade_fee_rate(value)?,
        1 => amm_config.set_protocol_fee_rate(value)?,
        2 => amm_config.set_fund_fee_rate(value)?,
        3 => {
            let new_owner = ctx
                .remaining_accounts
                .first()
                .ok_or(ErrorCode::AccountLack)?
                .key();
            msg!("amm_config owner {} -> {}", amm_config.owner, new_owner);
            amm_config.owner = new_owner;
        }
        4 => {
            let new_fund_owner = ctx
                .remaining_accounts
                .first()
                .ok_or(ErrorCode::AccountLack)?
                .key();
            msg!(
                "amm_config fund_owner {} -> {}",
                amm_config.fund_owner,
                new_fund_owner
            );
            amm_config.fund_owner = new_fund_owner;
        }
        _ => return err!(ErrorCode::InvalidUpdateConfigFlag),
    }

    emit!(amm_config.change_event());
    Ok(())
}
