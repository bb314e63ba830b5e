use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Not approved")]
    NotApproved,
    #[msg("Invalid update amm config flag")]
    InvalidUpdateConfigFlag,
    #[msg("Account lack")]
    AccountLack,
    #[msg("Invalid input keys")]
    InvalidInputKeys,
    #[msg("Operation account is full")]
    OperationAccountFull,
    #[msg("Invalid reward owner")]
    InvalidRewardOwner,

    #[msg("Tick spacing must be greater than zero")]
    InvalidTickSpacing,
    #[msg("Fee rate out of range")]
    InvalidFeeRate,

    #[msg("Token mint 0 must be lower than token mint 1")]
    InvalidTokenMintOrder,
    #[msg("Not support token_2022 mint extension")]
    NotSupportMint,

    #[msg("The tick must be lesser than, or equal to the maximum tick(443636)")]
    TickUpperOverflow,
    #[msg("sqrt_price_x64 out of range")]
    SqrtPriceX64,
}
