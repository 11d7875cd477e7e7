use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::*;
use crate::errors::JumpgateError;
use crate::events::JumpgateInitialized;
use crate::state::Jumpgate;
use crate::utils::chains::encode_for_chain;

pub fn handler(
    ctx: Context<InitializeJumpgate>,
    recipient_chain: u16,
    recipient: String,
    arbiter_fee: u64,
    bridging_cap: u64,
) -> Result<()> {
    // Resolve the destination chain and encode the recipient once. The
    // canonical bytes are immutable from here on, so an unknown chain or a
    // checksum failure must abort the whole initialization
    let encoded_recipient = encode_for_chain(recipient_chain, &recipient)?;

    // A zero cap would make every bridge_tokens call a no-op, and a fee at or
    // above the cap would eat entire transfers
    require!(bridging_cap > 0, JumpgateError::InvalidFee);
    require!(arbiter_fee < bridging_cap, JumpgateError::InvalidFee);

    // The bridge must be a deployed program, not an arbitrary account
    require!(
        ctx.accounts.bridge_program.executable,
        JumpgateError::InvalidBridge
    );

    let jumpgate = &mut ctx.accounts.jumpgate;
    jumpgate.authority = ctx.accounts.authority.key();
    jumpgate.token_mint = ctx.accounts.token_mint.key();
    jumpgate.bridge_program = ctx.accounts.bridge_program.key();
    jumpgate.bridge_authority = ctx.accounts.bridge_authority.key();
    jumpgate.recipient_chain = recipient_chain;
    jumpgate.recipient = encoded_recipient;
    jumpgate.arbiter_fee = arbiter_fee;
    jumpgate.bridging_cap = bridging_cap;
    jumpgate.bump = ctx.bumps.jumpgate;

    emit!(JumpgateInitialized {
        jumpgate: jumpgate.key(),
        token_mint: jumpgate.token_mint,
        bridge_program: jumpgate.bridge_program,
        recipient_chain,
        recipient: encoded_recipient,
        arbiter_fee,
        bridging_cap,
    });

    msg!(
        "Jumpgate initialized: token={}, chain={}, arbiter_fee={}",
        jumpgate.token_mint,
        recipient_chain,
        arbiter_fee
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(recipient_chain: u16)]
pub struct InitializeJumpgate<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Jumpgate::SIZE,
        seeds = [
            JUMPGATE_SEED,
            token_mint.key().as_ref(),
            recipient_chain.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub jumpgate: Account<'info, Jumpgate>,

    pub token_mint: Account<'info, Mint>,

    /// CHECK: validated as executable in the handler, then stored as
    /// immutable configuration
    pub bridge_program: UncheckedAccount<'info>,

    /// CHECK: the bridge's transfer authority, derived and owned by the
    /// bridge program; stored as immutable configuration
    pub bridge_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
