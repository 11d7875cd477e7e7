use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::*;
use crate::errors::JumpgateError;
use crate::events::TokensRecovered;
use crate::state::Jumpgate;

pub fn handler(ctx: Context<RecoverTokens>, amount: u64) -> Result<()> {
    let jumpgate = &ctx.accounts.jumpgate;

    let chain_bytes = jumpgate.recipient_chain.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        JUMPGATE_SEED,
        jumpgate.token_mint.as_ref(),
        chain_bytes.as_ref(),
        &[jumpgate.bump],
    ]];

    token::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.recovery_token_account.to_account_info(),
                mint: ctx.accounts.recovery_token_mint.to_account_info(),
                to: ctx.accounts.destination_token_account.to_account_info(),
                authority: ctx.accounts.jumpgate.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        ctx.accounts.recovery_token_mint.decimals,
    )?;

    emit!(TokensRecovered {
        token_mint: ctx.accounts.recovery_token_mint.key(),
        destination: ctx.accounts.destination_token_account.key(),
        amount,
    });

    msg!(
        "Recovered {} of token {}",
        amount,
        ctx.accounts.recovery_token_mint.key()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct RecoverTokens<'info> {
    #[account(
        seeds = [
            JUMPGATE_SEED,
            jumpgate.token_mint.as_ref(),
            jumpgate.recipient_chain.to_le_bytes().as_ref()
        ],
        bump = jumpgate.bump,
        has_one = authority @ JumpgateError::UnauthorizedAuthority
    )]
    pub jumpgate: Account<'info, Jumpgate>,

    pub authority: Signer<'info>,

    pub recovery_token_mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = recovery_token_mint,
        token::authority = jumpgate
    )]
    pub recovery_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = recovery_token_mint
    )]
    pub destination_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
