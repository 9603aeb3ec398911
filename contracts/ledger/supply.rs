use crate::ledger::Ledger;
use crate::model::{ensure_account, AccountId, Balance, Error, LedgerEvent, Result};
use crate::store::LedgerStore;

/// A validated burn, ready to be written.
pub(crate) struct Retirement {
    account: AccountId,
    amount: Balance,
    new_balance: Balance,
    new_supply: Balance,
}

impl<S: LedgerStore> Ledger<S> {
    /// Creates `amount` tokens for `account`, raising the total supply.
    ///
    /// Every registered [`MintPolicy`](crate::MintPolicy) must accept first.
    /// Hosts decide who may reach this; it is not a public entry point of a
    /// plain token.
    pub fn mint(&mut self, account: AccountId, amount: Balance) -> Result<()> {
        ensure_account(&account)?;
        let current_supply = self.total_supply();
        for policy in self.mint_policies.iter() {
            policy.check_mint(current_supply, amount)?;
        }
        let new_supply = current_supply.checked_add(amount).ok_or(Error::Overflow)?;
        let new_balance = self.balance_of(&account).checked_add(amount).ok_or(Error::Overflow)?;
        self.run_before_hooks(None, Some(account), amount)?;

        self.commit_supply(new_supply);
        self.commit_balance(&account, new_balance);
        self.emit(LedgerEvent::Transfer { from: None, to: Some(account), value: amount });
        self.run_after_hooks(None, Some(account), amount);
        Ok(())
    }

    /// Destroys `amount` of `account`'s tokens, lowering the total supply.
    pub fn destroy(&mut self, account: AccountId, amount: Balance) -> Result<()> {
        let retirement = self.plan_retirement(account, amount)?;
        self.run_before_hooks(Some(account), None, amount)?;
        self.apply_retirement(retirement);
        Ok(())
    }

    pub(crate) fn plan_retirement(&self, account: AccountId, amount: Balance) -> Result<Retirement> {
        ensure_account(&account)?;
        let new_balance = self
            .balance_of(&account)
            .checked_sub(amount)
            .ok_or(Error::InsufficientBalance)?;
        // supply covers every balance, so this only fails on a corrupted store
        let new_supply = self.total_supply().checked_sub(amount).ok_or(Error::Overflow)?;
        Ok(Retirement { account, amount, new_balance, new_supply })
    }

    pub(crate) fn apply_retirement(&mut self, retirement: Retirement) {
        let Retirement { account, amount, new_balance, new_supply } = retirement;
        self.commit_balance(&account, new_balance);
        self.commit_supply(new_supply);
        self.emit(LedgerEvent::Transfer { from: Some(account), to: None, value: amount });
        self.run_after_hooks(Some(account), None, amount);
    }
}
