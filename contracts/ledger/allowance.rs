use crate::ledger::Ledger;
use crate::model::{ensure_account, AccountId, Balance, Error, Result};
use crate::store::LedgerStore;

impl<S: LedgerStore> Ledger<S> {
    /// Sets `spender`'s allowance over `owner`'s tokens to exactly `amount`.
    pub fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Balance) -> Result<()> {
        ensure_account(&owner)?;
        ensure_account(&spender)?;
        self.commit_allowance(owner, spender, amount);
        Ok(())
    }

    pub fn increase_allowance(&mut self, owner: AccountId, spender: AccountId, delta: Balance) -> Result<()> {
        ensure_account(&owner)?;
        ensure_account(&spender)?;
        let new_val = self
            .allowance(&owner, &spender)
            .checked_add(delta)
            .ok_or(Error::Overflow)?;
        self.commit_allowance(owner, spender, new_val);
        Ok(())
    }

    pub fn decrease_allowance(&mut self, owner: AccountId, spender: AccountId, delta: Balance) -> Result<()> {
        ensure_account(&owner)?;
        ensure_account(&spender)?;
        let new_val = self
            .allowance(&owner, &spender)
            .checked_sub(delta)
            .ok_or(Error::AllowanceUnderflow)?;
        self.commit_allowance(owner, spender, new_val);
        Ok(())
    }

    /// Allowance left after `spender` uses `amount` of `owner`'s grant.
    /// Pure check: nothing is written.
    pub(crate) fn remaining_allowance(&self, owner: &AccountId, spender: &AccountId, amount: Balance) -> Result<Balance> {
        self.allowance(owner, spender)
            .checked_sub(amount)
            .ok_or(Error::AllowanceExceeded)
    }
}
