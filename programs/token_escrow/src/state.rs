use anchor_lang::prelude::*;

/// Static seed prefix for deriving escrow addresses
pub const ESCROW_SEED: &[u8] = b"escrow";

/// Escrow account recording the terms of one open offer.
///
/// The account lives at the PDA of `[ESCROW_SEED, maker, seed]`, and the
/// vault holding the deposit is the associated token account of `mint_a`
/// whose authority is this PDA. Closing this account (on take or refund)
/// is what ends the offer; there is no separate status flag.
#[account(discriminator = 1)]
#[derive(InitSpace)]
pub struct Escrow {
    /// Maker-chosen value so one maker can keep several offers open at once
    pub seed: u64,
    /// Wallet that opened the offer; the only authority allowed to refund
    pub maker: Pubkey,
    /// Mint of the deposited token
    pub mint_a: Pubkey,
    /// Mint of the requested token
    pub mint_b: Pubkey,
    /// Amount of the requested token the maker wants in return
    pub receive: u64,
    /// Escrow PDA bump, stored so later instructions re-derive the address
    /// without searching
    pub bump: u8,
}
