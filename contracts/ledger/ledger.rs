use ink::prelude::{boxed::Box, vec::Vec};

use crate::hooks::{MintPolicy, TransferHook};
use crate::model::{AccountId, Balance, LedgerEvent, Result};
use crate::store::LedgerStore;

/// Accounting core over a [`LedgerStore`].
///
/// Mutating operations live in the `allowance`, `transfer`, `supply` and
/// `burnable` modules. Each one validates everything it needs up front and
/// only then writes, through the `commit_*` functions below.
pub struct Ledger<S> {
    pub(crate) store: S,
    pub(crate) events_enabled: bool,
    pub(crate) journal: Vec<LedgerEvent>,
    pub(crate) hooks: Vec<Box<dyn TransferHook>>,
    pub(crate) mint_policies: Vec<Box<dyn MintPolicy>>,
}

impl<S: LedgerStore> Ledger<S> {
    pub fn new(store: S, events_enabled: bool) -> Self {
        Self {
            store,
            events_enabled,
            journal: Vec::new(),
            hooks: Vec::new(),
            mint_policies: Vec::new(),
        }
    }

    /// Appends a hook; hooks run in the order they were added.
    pub fn with_hook(mut self, hook: impl TransferHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn with_mint_policy(mut self, policy: impl MintPolicy + 'static) -> Self {
        self.mint_policies.push(Box::new(policy));
        self
    }

    // -------- read API --------

    pub fn total_supply(&self) -> Balance {
        self.store.total_supply()
    }

    pub fn balance_of(&self, account: &AccountId) -> Balance {
        self.store.balance(account)
    }

    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Balance {
        self.store.allowance(owner, spender)
    }

    /// Supply ceiling declared by the first capping policy, if any.
    pub fn cap(&self) -> Option<Balance> {
        self.mint_policies.iter().find_map(|policy| policy.cap())
    }

    pub fn events_enabled(&self) -> bool {
        self.events_enabled
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // -------- writes --------

    pub(crate) fn commit_supply(&mut self, value: Balance) {
        self.store.set_total_supply(value);
    }

    pub(crate) fn commit_balance(&mut self, account: &AccountId, value: Balance) {
        self.store.set_balance(account, value);
    }

    /// The single allowance write path: overwrite and announce.
    pub(crate) fn commit_allowance(&mut self, owner: AccountId, spender: AccountId, value: Balance) {
        self.store.set_allowance(&owner, &spender, value);
        self.emit(LedgerEvent::Approval { owner, spender, value });
    }

    // -------- hooks --------

    pub(crate) fn run_before_hooks(
        &mut self,
        from: Option<AccountId>,
        to: Option<AccountId>,
        amount: Balance,
    ) -> Result<()> {
        debug_assert!(from.is_some() || to.is_some());
        for hook in self.hooks.iter_mut() {
            hook.before_transfer(from, to, amount)?;
        }
        Ok(())
    }

    pub(crate) fn run_after_hooks(&mut self, from: Option<AccountId>, to: Option<AccountId>, amount: Balance) {
        for hook in self.hooks.iter_mut() {
            hook.after_transfer(from, to, amount);
        }
    }
}
