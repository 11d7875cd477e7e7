use anchor_lang::prelude::*;

#[error_code]
pub enum JumpgateError {
    #[msg("Destination chain is not supported")]
    UnsupportedChain,

    #[msg("Recipient address is malformed for the destination chain")]
    MalformedAddress,

    #[msg("Arbiter fee or bridging cap is out of bounds")]
    InvalidFee,

    #[msg("Bridge account is not the configured bridge program")]
    InvalidBridge,

    #[msg("Source token is more coarse than the destination precision")]
    InvalidPrecisionConfig,

    #[msg("Balance is entirely dust, nothing to bridge")]
    NothingToBridge,

    #[msg("Bridge program rejected the transfer")]
    BridgeRejected,

    #[msg("Unauthorized authority")]
    UnauthorizedAuthority,
}
