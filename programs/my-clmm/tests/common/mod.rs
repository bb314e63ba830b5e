//! Account builders shared by the SVM tests.
#![allow(dead_code)]

use anchor_lang::{
    prelude::*,
    solana_program::{instruction::Instruction, program_option::COption, program_pack::Pack, sysvar},
    Discriminator, InstructionData, ToAccountMetas,
};
use anchor_spl::{
    token::spl_token,
    token_2022::spl_token_2022::{
        self,
        extension::{
            transfer_hook::TransferHook, BaseStateWithExtensionsMut, ExtensionType,
            StateWithExtensionsMut,
        },
    },
};
use mollusk_svm::{program::create_program_account_loader_v3, Mollusk};
use my_clmm::states::*;
use solana_account::Account;

pub const LAMPORTS: u64 = 10_000_000_000;

pub fn mollusk() -> Mollusk {
    let mut mollusk = Mollusk::new(&my_clmm::id(), "my_clmm");
    mollusk.compute_budget.compute_unit_limit = 1_400_000;
    mollusk
}

/// Anchor errors surface as `Custom(code)` program errors.
pub fn anchor_error(code: impl Into<anchor_lang::error::Error>) -> ProgramError {
    let error: anchor_lang::error::Error = code.into();
    error.into()
}

pub fn system_account(lamports: u64) -> Account {
    Account::new(lamports, 0, &anchor_lang::system_program::ID)
}

pub fn executable(program_id: &Pubkey) -> (Pubkey, Account) {
    (*program_id, create_program_account_loader_v3(program_id))
}

pub fn rent_sysvar() -> (Pubkey, Account) {
    let rent = Rent::default();
    let mut data = Vec::with_capacity(17);
    data.extend_from_slice(&rent.lamports_per_byte_year.to_le_bytes());
    data.extend_from_slice(&rent.exemption_threshold.to_le_bytes());
    data.push(rent.burn_percent);
    (
        sysvar::rent::ID,
        Account {
            lamports: 1,
            data,
            owner: sysvar::ID,
            executable: false,
            rent_epoch: 0,
        },
    )
}

pub fn amm_config_address(index: u16) -> Pubkey {
    Pubkey::find_program_address(
        &[AMM_CONFIG_SEED.as_bytes(), &index.to_be_bytes()],
        &my_clmm::id(),
    )
    .0
}

pub fn operation_address() -> Pubkey {
    Pubkey::find_program_address(&[OPERATION_SEED.as_bytes()], &my_clmm::id()).0
}

pub fn create_amm_config_ix(owner: Pubkey, amm_config: Pubkey, index: u16) -> Instruction {
    Instruction {
        program_id: my_clmm::id(),
        accounts: my_clmm::accounts::CreateAmmConfig {
            owner,
            amm_config,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: my_clmm::instruction::CreateAmmConfig {
            index,
            tick_spacing: 60,
            trade_fee_rate: 2500,
            protocol_fee_rate: 120_000,
            fund_fee_rate: 40_000,
        }
        .data(),
    }
}

/// Creates config `index` as the admin and returns the resulting account.
pub fn create_amm_config(mollusk: &Mollusk, index: u16) -> (Pubkey, Account) {
    let admin = my_clmm::admin::id();
    let amm_config = amm_config_address(index);
    let result = mollusk.process_instruction(
        &create_amm_config_ix(admin, amm_config, index),
        &[
            (admin, system_account(LAMPORTS)),
            (amm_config, Account::default()),
            mollusk_svm::program::keyed_account_for_system_program(),
        ],
    );
    assert!(!result.program_result.is_err());
    let account = result.get_account(&amm_config).cloned().unwrap();
    (amm_config, account)
}

pub fn read_amm_config(account: &Account) -> AmmConfig {
    AmmConfig::try_deserialize(&mut account.data.as_slice()).unwrap()
}

/// A pool account as it looks right after `create_pool`, with every reward
/// slot still owned by the pool creator.
pub fn pool_account(creator: Pubkey) -> Account {
    let mut pool: PoolState = bytemuck::Zeroable::zeroed();
    pool.initialize(PoolParams {
        bump: 255,
        amm_config: Pubkey::new_unique(),
        tick_spacing: 60,
        pool_creator: creator,
        token_mint_0: Pubkey::new_unique(),
        token_mint_1: Pubkey::new_unique(),
        mint_decimals_0: 6,
        mint_decimals_1: 9,
        token_vault_0: Pubkey::new_unique(),
        token_vault_1: Pubkey::new_unique(),
        observation_key: Pubkey::new_unique(),
        sqrt_price_x64: 1u128 << 64,
        tick: 0,
        open_time: 0,
        recent_epoch: 0,
    });
    let mut data = PoolState::DISCRIMINATOR.to_vec();
    data.extend_from_slice(bytemuck::bytes_of(&pool));
    Account {
        lamports: Rent::default().minimum_balance(data.len()),
        data,
        owner: my_clmm::id(),
        executable: false,
        rent_epoch: 0,
    }
}

pub fn read_pool(account: &Account) -> PoolState {
    *bytemuck::from_bytes::<PoolState>(&account.data[8..])
}

pub fn spl_mint(decimals: u8) -> Account {
    let mut data = vec![0; spl_token::state::Mint::LEN];
    spl_token::state::Mint::pack(
        spl_token::state::Mint {
            mint_authority: COption::None,
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: COption::None,
        },
        &mut data,
    )
    .unwrap();
    Account {
        lamports: Rent::default().minimum_balance(data.len()),
        data,
        owner: spl_token::ID,
        executable: false,
        rent_epoch: 0,
    }
}

/// Token-2022 mint data carrying a transfer hook, an extension pools refuse.
pub fn transfer_hook_mint_data(decimals: u8) -> Vec<u8> {
    let space = ExtensionType::try_calculate_account_len::<spl_token_2022::state::Mint>(&[
        ExtensionType::TransferHook,
    ])
    .unwrap();
    let mut data = vec![0; space];
    let mut state =
        StateWithExtensionsMut::<spl_token_2022::state::Mint>::unpack_uninitialized(&mut data)
            .unwrap();
    state.init_extension::<TransferHook>(true).unwrap();
    state.base = spl_token_2022::state::Mint {
        mint_authority: COption::None,
        supply: 0,
        decimals,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    state.pack_base();
    state.init_account_type().unwrap();
    data
}

pub fn transfer_hook_mint(decimals: u8) -> Account {
    let data = transfer_hook_mint_data(decimals);
    Account {
        lamports: Rent::default().minimum_balance(data.len()),
        data,
        owner: spl_token_2022::ID,
        executable: false,
        rent_epoch: 0,
    }
}

/// Two fresh keys, the lower one first.
pub fn ordered_keys() -> (Pubkey, Pubkey) {
    let a = Pubkey::new_unique();
    let b = Pubkey::new_unique();
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
