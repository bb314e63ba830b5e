use crate::error::ErrorCode;
use anchor_lang::prelude::*;

pub const AMM_CONFIG_SEED: &str = "amm_config";

/// Fee rates are expressed in hundredths of a bip (10^-6).
pub const FEE_RATE_DENOMINATOR_VALUE: u32 = 1_000_000;

/// Holds the current owner of the factory
#[account]
#[derive(Default, Debug)]
pub struct AmmConfig {
    /// Bump to identify PDA
    pub bump: u8,
    pub index: u16,
    /// Address of the protocol owner
    pub owner: Pubkey,
    /// The protocol fee, a share of the trade fee
    pub protocol_fee_rate: u32,
    /// The trade fee, denominated in hundredths of a bip (10^-6)
    pub trade_fee_rate: u32,
    /// The tick spacing
    pub tick_spacing: u16,
    /// The fund fee, a share of the trade fee
    pub fund_fee_rate: u32,
    /// Receiver of the fund fee
    pub fund_owner: Pubkey,
    pub padding_u32: u32,
    pub padding: [u64; 3],
}

impl AmmConfig {
    pub const LEN: usize = 8 + 1 + 2 + 32 + 4 + 4 + 2 + 4 + 32 + 4 + 8 * 3;

    /// The trade fee is charged on every swap; protocol and fund fees are
    /// carved out of it, so together they may not exceed the whole trade fee.
    pub fn validate_fee_rates(
        trade_fee_rate: u32,
        protocol_fee_rate: u32,
        fund_fee_rate: u32,
    ) -> Result<()> {
        require_gt!(
            FEE_RATE_DENOMINATOR_VALUE,
            trade_fee_rate,
            ErrorCode::InvalidFeeRate
        );
        require_gte!(
            FEE_RATE_DENOMINATOR_VALUE,
            protocol_fee_rate,
            ErrorCode::InvalidFeeRate
        );
        require_gte!(
            FEE_RATE_DENOMINATOR_VALUE,
            fund_fee_rate,
            ErrorCode::InvalidFeeRate
        );
        // both bounded by 10^6, cannot overflow u32
        require_gte!(
            FEE_RATE_DENOMINATOR_VALUE,
            protocol_fee_rate + fund_fee_rate,
            ErrorCode::InvalidFeeRate
        );
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        bump: u8,
        index: u16,
        owner: Pubkey,
        tick_spacing: u16,
        trade_fee_rate: u32,
        protocol_fee_rate: u32,
        fund_fee_rate: u32,
    ) -> Result<()> {
        require_gt!(tick_spacing, 0, ErrorCode::InvalidTickSpacing);
        Self::validate_fee_rates(trade_fee_rate, protocol_fee_rate, fund_fee_rate)?;

        self.bump = bump;
        self.index = index;
        self.owner = owner;
        self.tick_spacing = tick_spacing;
        self.trade_fee_rate = trade_fee_rate;
        self.protocol_fee_rate = protocol_fee_rate;
        self.fund_fee_rate = fund_fee_rate;
        self.fund_owner = owner;
        self.padding_u32 = 0;
        self.padding = [0; 3];
        Ok(())
    }

    pub fn set_trade_fee_rate(&mut self, trade_fee_rate: u32) -> Result<()> {
        Self::validate_fee_rates(trade_fee_rate, self.protocol_fee_rate, self.fund_fee_rate)?;
        self.trade_fee_rate = trade_fee_rate;
        Ok(())
    }

    pub fn set_protocol_fee_rate(&mut self, protocol_fee_rate: u32) -> Result<()> {
        Self::validate_fee_rates(self.trade_fee_rate, protocol_fee_rate, self.fund_fee_rate)?;
        self.protocol_fee_rate = protocol_fee_rate;
        Ok(())
    }

    pub fn set_fund_fee_rate(&mut self, fund_fee_rate: u32) -> Result<()> {
        Self::validate_fee_rates(self.trade_fee_rate, self.protocol_fee_rate, fund_fee_rate)?;
        self.fund_fee_rate = fund_fee_rate;
        Ok(())
    }

    pub fn change_event(&self) -> ConfigChangeEvent {
        ConfigChangeEvent {
            index: self.index,
            owner: self.owner,
            protocol_fee_rate: self.protocol_fee_rate,
            trade_fee_rate: self.trade_fee_rate,
            tick_spacing: self.tick_spacing,
            fund_fee_rate: self.fund_fee_rate,
            fund_owner: self.fund_owner,
        }
    }
}

/// Emitted when create or update a config
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ConfigChangeEvent {
    pub index: u16,
    pub owner: Pubkey,
    pub protocol_fee_rate: u32,
    pub trade_fee_rate: u32,
    pub tick_spacing: u16,
    pub fund_fee_rate: u32,
    pub fund_owner: Pubkey,
}
