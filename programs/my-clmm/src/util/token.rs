use anchor_lang::{
    prelude::*,
    system_program::{create_account, CreateAccount},
};
use anchor_spl::token::Token;
use anchor_spl::token_2022::spl_token_2022::{
    self,
    extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensions},
};
use anchor_spl::token_interface::{initialize_account3, InitializeAccount3, Mint};

/// Token-2022 mints accepted regardless of their extensions
const MINT_WHITELIST: [Pubkey; 4] = [
    // Pax Dollar
    anchor_lang::solana_program::pubkey!("HVbpJAQGNpkgBaYBZQBR1t7yFdvaYVp2vCQQfKKEN4tM"),
    // GMO JPY
    anchor_lang::solana_program::pubkey!("Crn4x1Y2HUKko7ox2EZMT6N2t2ZyH7eKtwkBGVnhEq1g"),
    // Z.com USD
    anchor_lang::solana_program::pubkey!("FrBfWJ4qE5sCzKm3k3JaAtqZcXUh4LvJygDeketsrsH4"),
    // PayPal USD
    anchor_lang::solana_program::pubkey!("2b1kV6DkPAnxd5ixfnxCpjxmKwqjjaYmCZfHsFu24GXo"),
];

pub fn is_supported_extension(extension: ExtensionType) -> bool {
    matches!(
        extension,
        ExtensionType::TransferFeeConfig
            | ExtensionType::MetadataPointer
            | ExtensionType::TokenMetadata
            | ExtensionType::InterestBearingConfig
            | ExtensionType::MintCloseAuthority
    )
}

pub fn is_whitelisted_mint(mint: &Pubkey) -> bool {
    MINT_WHITELIST.contains(mint)
}

/// SPL Token mints are always supported. Token-2022 mints are supported when
/// whitelisted or when every extension they carry is known to be harmless.
pub fn is_supported_mint(mint_account: &InterfaceAccount<Mint>) -> Result<bool> {
    let mint_info = mint_account.to_account_info();
    if *mint_info.owner == Token::id() {
        return Ok(true);
    }
    if is_whitelisted_mint(&mint_account.key()) {
        return Ok(true);
    }
    let mint_data = mint_info.try_borrow_data()?;
    let mint = StateWithExtensions::<spl_token_2022::state::Mint>::unpack(&mint_data)?;
    let extensions = mint.get_extension_types()?;
    Ok(extensions.into_iter().all(is_supported_extension))
}

/// Space of a token account for `token_mint`, including the account extensions
/// its mint extensions require.
fn token_account_space(token_mint: &InterfaceAccount<Mint>) -> Result<usize> {
    let mint_info = token_mint.to_account_info();
    let required_extensions = if *mint_info.owner == Token::id() {
        Vec::new()
    } else {
        let mint_data = mint_info.try_borrow_data()?;
        let mint = StateWithExtensions::<spl_token_2022::state::Mint>::unpack(&mint_data)?;
        ExtensionType::get_required_init_account_extensions(&mint.get_extension_types()?)
    };
    let space = ExtensionType::try_calculate_account_len::<spl_token_2022::state::Account>(
        &required_extensions,
    )?;
    Ok(space)
}

/// Creates the pool vault at its PDA and initializes it under the mint's token
/// program with the pool as authority.
pub fn create_token_vault_account<'info>(
    payer: &Signer<'info>,
    pool_state: &AccountInfo<'info>,
    token_account: &AccountInfo<'info>,
    token_mint: &InterfaceAccount<'info, Mint>,
    system_program: &Program<'info, System>,
    token_program: &AccountInfo<'info>,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let space = token_account_space(token_mint)?;
    let lamports = Rent::get()?.minimum_balance(space);
    create_account(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            CreateAccount {
                from: payer.to_account_info(),
                to: token_account.clone(),
            },
            &[signer_seeds],
        ),
        lamports,
        space as u64,
        token_program.key,
    )?;
    initialize_account3(CpiContext::new(
        token_program.clone(),
        InitializeAccount3 {
            account: token_account.clone(),
            mint: token_mint.to_account_info(),
            authority: pool_state.clone(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::{program_option::COption, program_pack::Pack};
    use anchor_spl::token::spl_token;
    use spl_token_2022::extension::{
        mint_close_authority::MintCloseAuthority, transfer_hook::TransferHook,
        BaseStateWithExtensionsMut, StateWithExtensionsMut,
    };

    fn spl_mint_data() -> Vec<u8> {
        let mut data = vec![0; spl_token::state::Mint::LEN];
        spl_token::state::Mint::pack(
            spl_token::state::Mint {
                decimals: 6,
                is_initialized: true,
                ..Default::default()
            },
            &mut data,
        )
        .unwrap();
        data
    }

    fn token_2022_mint_data(extension: ExtensionType) -> Vec<u8> {
        let space =
            ExtensionType::try_calculate_account_len::<spl_token_2022::state::Mint>(&[extension])
                .unwrap();
        let mut data = vec![0; space];
        let mut state =
            StateWithExtensionsMut::<spl_token_2022::state::Mint>::unpack_uninitialized(&mut data)
                .unwrap();
        match extension {
            ExtensionType::TransferHook => {
                state.init_extension::<TransferHook>(true).unwrap();
            }
            ExtensionType::MintCloseAuthority => {
                state.init_extension::<MintCloseAuthority>(true).unwrap();
            }
            _ => unreachable!(),
        }
        state.base = spl_token_2022::state::Mint {
            mint_authority: COption::None,
            decimals: 6,
            is_initialized: true,
            ..Default::default()
        };
        state.pack_base();
        state.init_account_type().unwrap();
        data
    }

    fn supported(key: Pubkey, owner: Pubkey, mut data: Vec<u8>) -> bool {
        let mut lamports = 1_000_000;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);
        let mint = InterfaceAccount::<Mint>::try_from(&info).unwrap();
        is_supported_mint(&mint).unwrap()
    }

    #[test]
    fn spl_token_mint_is_supported() {
        assert!(supported(Pubkey::new_unique(), Token::id(), spl_mint_data()));
    }

    #[test]
    fn token_2022_mint_support_follows_extensions() {
        assert!(supported(
            Pubkey::new_unique(),
            spl_token_2022::ID,
            token_2022_mint_data(ExtensionType::MintCloseAuthority)
        ));
        assert!(!supported(
            Pubkey::new_unique(),
            spl_token_2022::ID,
            token_2022_mint_data(ExtensionType::TransferHook)
        ));
        // whitelisted mints pass whatever they carry
        assert!(supported(
            MINT_WHITELIST[0],
            spl_token_2022::ID,
            token_2022_mint_data(ExtensionType::TransferHook)
        ));
    }

    #[test]
    fn extension_allow_list() {
        assert!(is_supported_extension(ExtensionType::TransferFeeConfig));
        assert!(is_supported_extension(ExtensionType::MetadataPointer));
        assert!(is_supported_extension(ExtensionType::MintCloseAuthority));
        assert!(!is_supported_extension(ExtensionType::TransferHook));
        assert!(!is_supported_extension(ExtensionType::PermanentDelegate));
        assert!(!is_supported_extension(ExtensionType::NonTransferable));
    }

    #[test]
    fn stable_coins_are_whitelisted() {
        assert!(is_whitelisted_mint(&MINT_WHITELIST[3]));
        assert!(!is_whitelisted_mint(&Pubkey::new_unique()));
    }

    #[test]
    fn plain_token_account_space() {
        let len = ExtensionType::try_calculate_account_len::<spl_token_2022::state::Account>(&[])
            .unwrap();
        assert_eq!(len, 165);
    }
}
