#![cfg_attr(not(feature = "std"), no_std)]

//! Fungible-token ledger core.
//!
//! A deterministic state machine over balances, allowances and total supply.
//! The host supplies the calling account and the storage backend; the ledger
//! checks every precondition before writing, so a rejected call never leaves
//! a partial update or an event behind.
//!
//! - [`Ledger`]: accounting core, generic over a [`LedgerStore`]
//! - [`TransferHook`] / [`MintPolicy`]: extension points run at fixed places
//! - [`CapPolicy`]: supply ceiling enforced on mint
//! - [`Token`]: in-memory host with name/symbol metadata and presets

mod allowance;
mod burnable;
mod cap;
mod events;
mod hooks;
mod ledger;
mod model;
mod store;
mod supply;
mod token;
mod transfer;

pub use cap::CapPolicy;
pub use hooks::{MintPolicy, TransferHook};
pub use ledger::Ledger;
pub use model::{is_null, null_account, AccountId, Balance, Error, LedgerEvent, Metadata, Result};
pub use store::{LedgerStore, MemoryStore};
pub use token::Token;
