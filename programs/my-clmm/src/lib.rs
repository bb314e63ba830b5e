#![cfg_attr(not(test), warn(unexpected_cfgs))]
#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod libraries;
pub mod states;
pub mod util;

use instructions::*;

declare_id!("3EJpuBuuaKJH8B6AaFyVinPszYFkYrkiR7FDKDpAzMWh");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("9qMknujRc8eqBZ6gSrypjYyzNNpwiwASxocKdAfg563C");
}

#[program]
pub mod my_clmm {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Creates an AMM config holding the trade, protocol and fund fee rates
    /// for a tick spacing.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The accounts needed by instruction
    /// * `index` - The index of amm config, there may be multiple config
    /// * `tick_spacing` - The tick spacing binding with config, cannot be changed
    /// * `trade_fee_rate` - Trade fee rate, can be changed
    /// * `protocol_fee_rate` - The rate of protocol fee within trade fee
    /// * `fund_fee_rate` - The rate of fund fee within trade fee
    ///
    pub fn create_amm_config(
        ctx: Context<CreateAmmConfig>,
        index: u16,
        tick_spacing: u16,
        trade_fee_rate: u32,
        protocol_fee_rate: u32,
        fund_fee_rate: u32,
    ) -> Result<()> {
        instructions::create_amm_config(
            ctx,
            index,
            tick_spacing,
            trade_fee_rate,
            protocol_fee_rate,
            fund_fee_rate,
        )
    }

    /// Updates the fee rates, the owner or the fund owner of the amm config
    /// Must be called by the current owner or admin
    ///
    /// # Arguments
    ///
    /// * `ctx`- The context of accounts
    /// * `param`- The value can be 0 | 1 | 2 | 3 | 4, otherwise will report a error
    /// * `value` - trade fee rate when `param` is 0, protocol fee rate when 1,
    ///   fund fee rate when 2; unused for 3 (new owner) and 4 (new fund owner),
    ///   which take the key of the first remaining account
    ///
    pub fn update_amm_config(ctx: Context<UpdateAmmConfig>, param: u8, value: u32) -> Result<()> {
        instructions::update_amm_config(ctx, param, value)
    }

    /// Creates a pool for the given token pair and the initial price
    ///
    /// # Arguments
    ///
    /// * `ctx`- The context of accounts
    /// * `sqrt_price_x64` - the initial sqrt price (amount_token_1 / amount_token_0) of the pool as a Q64.64
    /// * `open_time` - the timestamp from which swaps are allowed
    ///
    pub fn create_pool(
        ctx: Context<CreatePool>,
        sqrt_price_x64: u128,
        open_time: u64,
    ) -> Result<()> {
        instructions::create_pool(ctx, sqrt_price_x64, open_time)
    }

    /// Update pool status for given value
    ///
    /// # Arguments
    ///
    /// * `ctx`- The context of accounts
    /// * `status` - The value of status
    ///
    pub fn update_pool_status(ctx: Context<UpdatePoolStatus>, status: u8) -> Result<()> {
        instructions::update_pool_status(ctx, status)
    }

    /// Creates an operation account for the program
    pub fn create_operation_account(ctx: Context<CreateOperationAccount>) -> Result<()> {
        instructions::create_operation_account(ctx)
    }

    /// Update the operation account
    ///
    /// # Arguments
    ///
    /// * `ctx`- The context of accounts
    /// * `param`- The value can be 0 | 1 | 2 | 3, otherwise will report a error
    /// * `keys`- update operation owner when the `param` is 0
    ///   remove operation owner when the `param` is 1
    ///   update whitelist mint when the `param` is 2
    ///   remove whitelist mint when the `param` is 3
    ///
    pub fn update_operation_account(
        ctx: Context<UpdateOperationAccount>,
        param: u8,
        keys: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::update_operation_account(ctx, param, keys)
    }

    /// Transfer reward owner
    ///
    /// # Arguments
    ///
    /// * `ctx`- The context of accounts
    /// * `new_owner`- new owner pubkey
    ///
    pub fn transfer_reward_owner(ctx: Context<TransferRewardOwner>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_reward_owner(ctx, new_owner)
    }
}
