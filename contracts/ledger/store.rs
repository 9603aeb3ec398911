use ink::prelude::collections::BTreeMap;

use crate::model::{AccountId, Balance};

/// Key-unique storage for the ledger's three pieces of state.
///
/// Reads of an absent key return zero and must not create an entry.
pub trait LedgerStore {
    fn total_supply(&self) -> Balance;
    fn set_total_supply(&mut self, value: Balance);

    fn balance(&self, account: &AccountId) -> Balance;
    fn set_balance(&mut self, account: &AccountId, value: Balance);

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Balance;
    fn set_allowance(&mut self, owner: &AccountId, spender: &AccountId, value: Balance);
}

impl<S: LedgerStore + ?Sized> LedgerStore for &mut S {
    fn total_supply(&self) -> Balance {
        (**self).total_supply()
    }

    fn set_total_supply(&mut self, value: Balance) {
        (**self).set_total_supply(value)
    }

    fn balance(&self, account: &AccountId) -> Balance {
        (**self).balance(account)
    }

    fn set_balance(&mut self, account: &AccountId, value: Balance) {
        (**self).set_balance(account, value)
    }

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Balance {
        (**self).allowance(owner, spender)
    }

    fn set_allowance(&mut self, owner: &AccountId, spender: &AccountId, value: Balance) {
        (**self).set_allowance(owner, spender, value)
    }
}

/// Implements [`LedgerStore`] for a contract storage struct with the fields
/// `total_supply: Balance`, `balances: Mapping<AccountId, Balance>` and
/// `allowances: Mapping<(AccountId, AccountId), Balance>`.
#[macro_export]
macro_rules! mapping_store {
    ($contract:ty) => {
        impl $crate::LedgerStore for $contract {
            fn total_supply(&self) -> $crate::Balance {
                self.total_supply
            }

            fn set_total_supply(&mut self, value: $crate::Balance) {
                self.total_supply = value;
            }

            fn balance(&self, account: &$crate::AccountId) -> $crate::Balance {
                self.balances.get(account).unwrap_or(0)
            }

            fn set_balance(&mut self, account: &$crate::AccountId, value: $crate::Balance) {
                self.balances.insert(account, &value);
            }

            fn allowance(&self, owner: &$crate::AccountId, spender: &$crate::AccountId) -> $crate::Balance {
                self.allowances.get((owner, spender)).unwrap_or(0)
            }

            fn set_allowance(&mut self, owner: &$crate::AccountId, spender: &$crate::AccountId, value: $crate::Balance) {
                self.allowances.insert((owner, spender), &value);
            }
        }
    };
}

/// Process-local store backed by ordered maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    total_supply: Balance,
    balances: BTreeMap<AccountId, Balance>,
    // owner -> spender -> amount
    allowances: BTreeMap<AccountId, BTreeMap<AccountId, Balance>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every account that has ever been written, with its balance.
    pub fn balances(&self) -> impl Iterator<Item = (&AccountId, &Balance)> {
        self.balances.iter()
    }

    /// Number of owners with at least one allowance entry.
    pub fn allowance_owners(&self) -> usize {
        self.allowances.len()
    }
}

impl LedgerStore for MemoryStore {
    fn total_supply(&self) -> Balance {
        self.total_supply
    }

    fn set_total_supply(&mut self, value: Balance) {
        self.total_supply = value;
    }

    fn balance(&self, account: &AccountId) -> Balance {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn set_balance(&mut self, account: &AccountId, value: Balance) {
        self.balances.insert(*account, value);
    }

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Balance {
        self.allowances
            .get(owner)
            .and_then(|by_spender| by_spender.get(spender))
            .copied()
            .unwrap_or(0)
    }

    fn set_allowance(&mut self, owner: &AccountId, spender: &AccountId, value: Balance) {
        self.allowances
            .entry(*owner)
            .or_default()
            .insert(*spender, value);
    }
}
