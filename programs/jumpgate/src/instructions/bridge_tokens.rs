use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::AccountMeta, program::invoke_signed};
use anchor_spl::token::{self, Approve, Mint, Revoke, Token, TokenAccount};

use crate::constants::*;
use crate::errors::JumpgateError;
use crate::events::TokensBridged;
use crate::state::Jumpgate;
use crate::utils::amount::bridgeable_amount;
use crate::utils::bridge::transfer_tokens_instruction;

pub fn handler(ctx: Context<BridgeTokens>) -> Result<()> {
    let jumpgate = &ctx.accounts.jumpgate;

    // The live balance is read in the same atomic step that grants the
    // approval, so concurrent calls cannot double-authorize one balance
    let balance = ctx.accounts.jumpgate_token_account.amount;

    let amount = bridgeable_amount(
        u128::from(balance),
        ctx.accounts.token_mint.decimals,
        TARGET_DECIMALS,
        u128::from(jumpgate.bridging_cap),
    )?;
    require!(amount > 0, JumpgateError::NothingToBridge);
    // Never exceeds the u64 balance it was derived from
    let amount = amount as u64;

    let chain_bytes = jumpgate.recipient_chain.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        JUMPGATE_SEED,
        jumpgate.token_mint.as_ref(),
        chain_bytes.as_ref(),
        &[jumpgate.bump],
    ]];

    // Delegate exactly this invocation's amount to the bridge authority,
    // never an unbounded approval
    token::approve(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Approve {
                to: ctx.accounts.jumpgate_token_account.to_account_info(),
                delegate: ctx.accounts.bridge_authority.to_account_info(),
                authority: ctx.accounts.jumpgate.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    // The jumpgate PDA signs the bridge call; upgrade its meta accordingly
    let jumpgate_key = jumpgate.key();
    let account_metas = ctx
        .remaining_accounts
        .iter()
        .map(|account| AccountMeta {
            pubkey: account.key(),
            is_signer: account.is_signer || account.key() == jumpgate_key,
            is_writable: account.is_writable,
        })
        .collect();

    let instruction = transfer_tokens_instruction(
        jumpgate.bridge_program,
        account_metas,
        amount,
        jumpgate.recipient_chain,
        jumpgate.recipient,
        jumpgate.arbiter_fee,
    );

    // A rejected bridge call aborts the whole transaction, taking the
    // approval above down with it
    invoke_signed(&instruction, ctx.remaining_accounts, signer_seeds)
        .map_err(|_| error!(JumpgateError::BridgeRejected))?;

    // Report what the bridge actually pulled, not what was requested
    ctx.accounts.jumpgate_token_account.reload()?;
    let moved = balance.saturating_sub(ctx.accounts.jumpgate_token_account.amount);

    // No authorization outlives this call
    if moved < amount {
        token::revoke(CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Revoke {
                source: ctx.accounts.jumpgate_token_account.to_account_info(),
                authority: ctx.accounts.jumpgate.to_account_info(),
            },
            signer_seeds,
        ))?;
    }

    emit!(TokensBridged {
        token_mint: jumpgate.token_mint,
        bridge_program: jumpgate.bridge_program,
        recipient_chain: jumpgate.recipient_chain,
        recipient: jumpgate.recipient,
        amount: moved,
        arbiter_fee: jumpgate.arbiter_fee,
    });

    msg!(
        "Bridged {} of token {} to chain {}",
        moved,
        jumpgate.token_mint,
        jumpgate.recipient_chain
    );
    Ok(())
}

#[derive(Accounts)]
pub struct BridgeTokens<'info> {
    #[account(
        seeds = [
            JUMPGATE_SEED,
            jumpgate.token_mint.as_ref(),
            jumpgate.recipient_chain.to_le_bytes().as_ref()
        ],
        bump = jumpgate.bump,
        has_one = token_mint,
        has_one = bridge_program @ JumpgateError::InvalidBridge,
        has_one = bridge_authority @ JumpgateError::InvalidBridge
    )]
    pub jumpgate: Account<'info, Jumpgate>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = jumpgate
    )]
    pub jumpgate_token_account: Account<'info, TokenAccount>,

    /// CHECK: pinned to the configured bridge program by `has_one`
    pub bridge_program: UncheckedAccount<'info>,

    /// CHECK: pinned to the configured bridge authority by `has_one`
    pub bridge_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}
