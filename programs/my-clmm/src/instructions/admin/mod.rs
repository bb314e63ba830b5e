pub mod create_amm_config;
pub use create_amm_config::*;

pub mod update_amm_config;
pub use update_amm_config::*;

pub mod update_pool_status;
pub use update_pool_status::*;

pub mod create_operation_account;
pub use create_operation_account::*;

pub mod update_operation_account;
pub use update_operation_account::*;

pub mod transfer_reward_owner;
pub use transfer_reward_owner::*;
