use crate::ledger::Ledger;
use crate::model::{ensure_account, AccountId, Balance, Result};
use crate::store::LedgerStore;

impl<S: LedgerStore> Ledger<S> {
    /// Destroys `amount` of the caller's own tokens.
    pub fn burn(&mut self, caller: AccountId, amount: Balance) -> Result<()> {
        self.destroy(caller, amount)
    }

    /// Destroys `amount` of `account`'s tokens, spending the allowance
    /// `account` granted to `caller`.
    ///
    /// Emits Approval with the remaining allowance, then Transfer.
    pub fn burn_from(&mut self, caller: AccountId, account: AccountId, amount: Balance) -> Result<()> {
        ensure_account(&caller)?;
        ensure_account(&account)?;
        let remaining = self.remaining_allowance(&account, &caller, amount)?;
        let retirement = self.plan_retirement(account, amount)?;
        self.run_before_hooks(Some(account), None, amount)?;

        self.commit_allowance(account, caller, remaining);
        self.apply_retirement(retirement);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{null_account, AccountId, Error, Ledger, LedgerEvent, MemoryStore};

    fn acc(byte: u8) -> AccountId {
        AccountId::from([byte; 32])
    }

    fn ledger() -> Ledger<MemoryStore> {
        let mut ledger = Ledger::new(MemoryStore::new(), true);
        ledger.mint(acc(1), 100).unwrap();
        ledger.take_events();
        ledger
    }

    #[test]
    fn burn_from_own_balance() {
        let mut ledger = ledger();
        ledger.burn(acc(1), 30).unwrap();
        assert_eq!(ledger.balance_of(&acc(1)), 70);
        assert_eq!(ledger.total_supply(), 70);
    }

    #[test]
    fn burn_from_spends_allowance() {
        let mut ledger = ledger();
        ledger.approve(acc(1), acc(2), 40).unwrap();
        ledger.take_events();

        ledger.burn_from(acc(2), acc(1), 25).unwrap();
        assert_eq!(ledger.balance_of(&acc(1)), 75);
        assert_eq!(ledger.balance_of(&acc(2)), 0);
        assert_eq!(ledger.total_supply(), 75);
        assert_eq!(ledger.allowance(&acc(1), &acc(2)), 15);
        assert_eq!(
            ledger.events(),
            &[
                LedgerEvent::Approval { owner: acc(1), spender: acc(2), value: 15 },
                LedgerEvent::Transfer { from: Some(acc(1)), to: None, value: 25 },
            ]
        );
    }

    #[test]
    fn burn_from_over_allowance_changes_nothing() {
        let mut ledger = ledger();
        ledger.approve(acc(1), acc(2), 10).unwrap();
        assert_eq!(ledger.burn_from(acc(2), acc(1), 11), Err(Error::AllowanceExceeded));
        assert_eq!(ledger.allowance(&acc(1), &acc(2)), 10);
        assert_eq!(ledger.total_supply(), 100);
    }

    #[test]
    fn burn_from_short_on_both_reports_allowance() {
        let mut ledger = ledger();
        ledger.approve(acc(1), acc(2), 10).unwrap();
        ledger.take_events();

        assert_eq!(ledger.burn_from(acc(2), acc(1), 101), Err(Error::AllowanceExceeded));
        assert_eq!(ledger.balance_of(&acc(1)), 100);
        assert_eq!(ledger.total_supply(), 100);
        assert_eq!(ledger.allowance(&acc(1), &acc(2)), 10);
        assert!(ledger.events().is_empty());
    }

    #[test]
    fn burn_from_null_account_is_rejected() {
        let mut ledger = ledger();
        assert_eq!(ledger.burn_from(acc(2), null_account(), 1), Err(Error::NullAccount));
        assert_eq!(ledger.burn_from(null_account(), acc(1), 1), Err(Error::NullAccount));
    }

    #[test]
    fn burn_from_over_balance_keeps_allowance() {
        let mut ledger = ledger();
        ledger.approve(acc(1), acc(2), 500).unwrap();
        assert_eq!(ledger.burn_from(acc(2), acc(1), 101), Err(Error::InsufficientBalance));
        assert_eq!(ledger.allowance(&acc(1), &acc(2)), 500);
        assert_eq!(ledger.balance_of(&acc(1)), 100);
    }
}
