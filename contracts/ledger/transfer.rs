use crate::ledger::Ledger;
use crate::model::{ensure_account, AccountId, Balance, Error, LedgerEvent, Result};
use crate::store::LedgerStore;

/// A validated balance movement, ready to be written.
pub(crate) struct Movement {
    from: AccountId,
    to: AccountId,
    amount: Balance,
    new_from: Balance,
    new_to: Balance,
}

impl<S: LedgerStore> Ledger<S> {
    /// Moves `amount` from `caller` to `recipient`.
    pub fn transfer(&mut self, caller: AccountId, recipient: AccountId, amount: Balance) -> Result<()> {
        let movement = self.plan_movement(caller, recipient, amount)?;
        self.run_before_hooks(Some(caller), Some(recipient), amount)?;
        self.apply_movement(movement);
        Ok(())
    }

    /// Moves `amount` from `sender` to `recipient`, spending the allowance
    /// `sender` granted to `caller`.
    ///
    /// Emits Transfer, then Approval with the remaining allowance.
    pub fn transfer_from(
        &mut self,
        caller: AccountId,
        sender: AccountId,
        recipient: AccountId,
        amount: Balance,
    ) -> Result<()> {
        ensure_account(&caller)?;
        ensure_account(&sender)?;
        ensure_account(&recipient)?;
        // allowance before balance: a spender short on both is told about its grant
        let remaining = self.remaining_allowance(&sender, &caller, amount)?;
        let movement = self.plan_movement(sender, recipient, amount)?;
        self.run_before_hooks(Some(sender), Some(recipient), amount)?;

        self.apply_movement(movement);
        self.commit_allowance(sender, caller, remaining);
        Ok(())
    }

    pub(crate) fn plan_movement(&self, from: AccountId, to: AccountId, amount: Balance) -> Result<Movement> {
        ensure_account(&from)?;
        ensure_account(&to)?;

        let from_bal = self.balance_of(&from);
        let new_from = from_bal.checked_sub(amount).ok_or(Error::InsufficientBalance)?;
        // both sides are read before either is written, so a self-transfer nets out
        let new_to = if from == to {
            from_bal
        } else {
            self.balance_of(&to).checked_add(amount).ok_or(Error::Overflow)?
        };

        Ok(Movement { from, to, amount, new_from, new_to })
    }

    pub(crate) fn apply_movement(&mut self, movement: Movement) {
        let Movement { from, to, amount, new_from, new_to } = movement;
        self.commit_balance(&from, new_from);
        self.commit_balance(&to, new_to);
        self.emit(LedgerEvent::Transfer { from: Some(from), to: Some(to), value: amount });
        self.run_after_hooks(Some(from), Some(to), amount);
    }
}
