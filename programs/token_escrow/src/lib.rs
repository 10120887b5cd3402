use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("CggLmeaQXZXZLEnFkCyehy9XLR334NcZo9WaXqG13kMs");

#[program]
pub mod token_escrow {
    use super::*;

    /// Create a new escrow: the maker deposits Token A into the vault and
    /// records how much Token B they want in return
    #[instruction(discriminator = 0)]
    pub fn make(ctx: Context<Make>, seed: u64, receive: u64, amount: u64) -> Result<()> {
        instructions::make::handler(ctx, seed, receive, amount)
    }

    /// Accept the escrow when Token B may live under either token program;
    /// the leg is routed to whichever supplied program owns the mint
    #[instruction(discriminator = 1)]
    pub fn take(ctx: Context<Take>) -> Result<()> {
        instructions::take::handler(ctx)
    }

    /// Accept the escrow when a single token program governs both mints
    #[instruction(discriminator = 2)]
    pub fn take_same_program(ctx: Context<TakeSameProgram>) -> Result<()> {
        instructions::take_same_program::handler(ctx)
    }

    /// Accept the escrow when each mint is governed by its own token program
    #[instruction(discriminator = 3)]
    pub fn take_dual_program(ctx: Context<TakeDualProgram>) -> Result<()> {
        instructions::take_dual_program::handler(ctx)
    }

    /// Cancel the escrow: the maker reclaims the deposited Token A
    #[instruction(discriminator = 4)]
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        instructions::refund::handler(ctx)
    }
}
