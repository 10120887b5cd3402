use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{
        close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
        TransferChecked,
    },
};

use crate::errors::EscrowError;
use crate::state::{Escrow, ESCROW_SEED};

/// Generic settlement path. `token_program` must govern Token A; Token B may
/// be governed by either `token_program` or `token_program_alt`, and the
/// matching one is picked at runtime by inspecting the mint's owner.
///
/// Because an associated token address depends on the owning token program,
/// the maker's Token B account is supplied as a pair of optional accounts,
/// one per candidate program; exactly the one matching Token B's owner is
/// required to be present.
#[derive(Accounts)]
pub struct Take<'info> {
    #[account(mut)]
    pub taker: Signer<'info>,

    #[account(mut)]
    pub maker: SystemAccount<'info>,

    #[account(
        mut,
        close = maker,
        has_one = maker @ EscrowError::InvalidMaker,
        has_one = mint_a @ EscrowError::InvalidMintA,
        has_one = mint_b @ EscrowError::InvalidMintB,
        seeds = [ESCROW_SEED, maker.key().as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    #[account(mint::token_program = token_program)]
    pub mint_a: Box<InterfaceAccount<'info, Mint>>,

    /// Token B mint; not pinned to a program, the handler dispatches on its
    /// actual owner
    pub mint_b: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = escrow,
        associated_token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_a,
        associated_token::authority = taker,
        associated_token::token_program = token_program,
    )]
    pub taker_ata_a: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Taker's Token B account; any token account of `mint_b` owned by the
    /// taker, under whichever program governs the mint
    #[account(
        mut,
        token::mint = mint_b,
        token::authority = taker,
    )]
    pub taker_ata_b: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Maker's Token B account if `token_program` governs Token B
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_b,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_ata_b: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    /// Maker's Token B account if `token_program_alt` governs Token B
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_b,
        associated_token::authority = maker,
        associated_token::token_program = token_program_alt,
    )]
    pub maker_ata_b_alt: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    /// Program governing Token A (and possibly Token B)
    pub token_program: Interface<'info, TokenInterface>,
    /// Second candidate program for Token B
    pub token_program_alt: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Take<'info> {
    /// Transfer Token B from taker to maker, routed through whichever
    /// supplied token program actually owns the Token B mint
    pub fn transfer_to_maker(&mut self) -> Result<()> {
        let mint_b_owner = self.mint_b.to_account_info().owner;

        let (cpi_program, maker_ata_b) = if mint_b_owner == &self.token_program.key() {
            (
                self.token_program.to_account_info(),
                self.maker_ata_b.as_ref().ok_or(EscrowError::MissingMakerAtaB)?,
            )
        } else if mint_b_owner == &self.token_program_alt.key() {
            (
                self.token_program_alt.to_account_info(),
                self.maker_ata_b_alt.as_ref().ok_or(EscrowError::MissingMakerAtaB)?,
            )
        } else {
            return err!(EscrowError::InvalidTokenProgram);
        };

        let cpi_accounts = TransferChecked {
            from: self.taker_ata_b.to_account_info(),
            mint: self.mint_b.to_account_info(),
            to: maker_ata_b.to_account_info(),
            authority: self.taker.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, self.escrow.receive, self.mint_b.decimals)
    }

    /// Drain the vault to the taker, then close the vault to the maker
    pub fn withdraw_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            ESCROW_SEED,
            self.maker.key.as_ref(),
            &self.escrow.seed.to_le_bytes(),
            &[self.escrow.bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.taker_ata_a.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        transfer_checked(cpi_ctx, self.vault.amount, self.mint_a.decimals)?;

        let cpi_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.maker.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        close_account(cpi_ctx)
    }
}

/// Handler for the take instruction
pub fn handler(ctx: Context<Take>) -> Result<()> {
    ctx.accounts.transfer_to_maker()?;
    ctx.accounts.withdraw_and_close_vault()
}
