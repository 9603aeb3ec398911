use ink::prelude::string::String;

use crate::cap::CapPolicy;
use crate::ledger::Ledger;
use crate::model::{AccountId, Balance, Metadata, Result};
use crate::store::MemoryStore;

/// A complete token held in process memory: metadata plus a ledger.
///
/// Hosts that keep state elsewhere (contract storage, a database) build a
/// [`Ledger`] over their own [`LedgerStore`](crate::LedgerStore) instead.
pub struct Token {
    metadata: Metadata,
    ledger: Ledger<MemoryStore>,
}

impl Token {
    /// Empty token: zero supply, no balances, no allowances.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, generate_events: bool) -> Self {
        Self {
            metadata: Metadata::new(name.into(), symbol.into(), generate_events),
            ledger: Ledger::new(MemoryStore::new(), generate_events),
        }
    }

    /// Empty token whose supply may never exceed `cap`.
    pub fn capped(
        name: impl Into<String>,
        symbol: impl Into<String>,
        cap: Balance,
        generate_events: bool,
    ) -> Self {
        let mut token = Self::new(name, symbol, generate_events);
        token.ledger = token.ledger.with_mint_policy(CapPolicy::new(cap));
        token
    }

    /// Token whose entire supply is minted to `owner` up front.
    pub fn fixed_supply(
        name: impl Into<String>,
        symbol: impl Into<String>,
        initial_supply: Balance,
        owner: AccountId,
        generate_events: bool,
    ) -> Result<Self> {
        let mut token = Self::new(name, symbol, generate_events);
        token.ledger.mint(owner, initial_supply)?;
        Ok(token)
    }

    pub fn name(&self) -> &str {
        self.metadata.name()
    }

    pub fn symbol(&self) -> &str {
        self.metadata.symbol()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn ledger(&self) -> &Ledger<MemoryStore> {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger<MemoryStore> {
        &mut self.ledger
    }
}
