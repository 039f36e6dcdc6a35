//! # Operation Codes
//!
//! 32-bit op codes, values taken from the deployed protocol. The jetton
//! block follows the standard token ops; the low-numbered block is the
//! Materia extension.

/// Wallet-to-wallet transfer (owner initiated).
pub const TRANSFER: u32 = 0x0f8a_7ea5;
/// Delivered to the final recipient when a transfer carries a forward amount.
pub const TRANSFER_NOTIFICATION: u32 = 0x7362_d09c;
/// Credit message between wallets / from the minter.
pub const INTERNAL_TRANSFER: u32 = 0x178d_4519;
/// Leftover value refund.
pub const EXCESSES: u32 = 0xd532_76db;
/// Burn request to a wallet.
pub const BURN: u32 = 0x595f_07bc;
/// Wallet-to-minter burn confirmation.
pub const BURN_NOTIFICATION: u32 = 0x7bdd_97de;
/// Minter-to-wallet experience credit (issued after signature checks).
pub const ADD_EXPERIENCE: u32 = 0x7bdd_98de;
/// Wallet address discovery request.
pub const PROVIDE_WALLET_ADDRESS: u32 = 0x2c76_b973;
/// Discovery reply.
pub const TAKE_WALLET_ADDRESS: u32 = 0xd173_5400;

// Materia extension ops.
pub const UPDATE_PUBKEY: u32 = 0x01;
pub const MINT_FROM_GAME: u32 = 0x02;
pub const CHANGE_ADMIN: u32 = 0x03;
pub const MATERIA_TO_TON: u32 = 0x05;
pub const RECEIVE_EXPERIENCE: u32 = 0x08;
pub const INIT_MINTER: u32 = 0x09;
/// Buy MAT for the attached payment (standard jetton mint slot).
pub const MINT: u32 = 21;
