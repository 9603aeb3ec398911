use ink::prelude::vec::Vec;

use crate::ledger::Ledger;
use crate::model::{LedgerEvent, Result};

impl<S> Ledger<S> {
    /// Records `event` if this ledger was built with events enabled.
    ///
    /// Only called after a mutation has been written, so a rejected call
    /// never leaves an entry behind.
    pub(crate) fn emit(&mut self, event: LedgerEvent) {
        if self.events_enabled {
            self.journal.push(event);
        }
    }

    /// Events recorded since the last [`Ledger::take_events`].
    pub fn events(&self) -> &[LedgerEvent] {
        &self.journal
    }

    /// Drains the journal for delivery to the host's event log.
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        core::mem::take(&mut self.journal)
    }

    /// Runs `op` and hands back its value with everything journaled.
    ///
    /// On failure only the error comes back; the journal is dropped.
    pub fn apply<T>(mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<(T, Vec<LedgerEvent>)> {
        let value = op(&mut self)?;
        Ok((value, self.take_events()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{AccountId, Error, Ledger, LedgerEvent, MemoryStore};

    fn acc(byte: u8) -> AccountId {
        AccountId::from([byte; 32])
    }

    #[test]
    fn gate_off_records_nothing() {
        let mut ledger = Ledger::new(MemoryStore::new(), false);
        ledger.mint(acc(1), 10).unwrap();
        ledger.approve(acc(1), acc(2), 5).unwrap();
        assert!(ledger.events().is_empty());
    }

    #[test]
    fn take_events_drains_journal() {
        let mut ledger = Ledger::new(MemoryStore::new(), true);
        ledger.mint(acc(1), 10).unwrap();
        let drained = ledger.take_events();
        assert_eq!(
            drained,
            vec![LedgerEvent::Transfer { from: None, to: Some(acc(1)), value: 10 }]
        );
        assert!(ledger.events().is_empty());
    }

    #[test]
    fn apply_returns_events_of_successful_call() {
        let ledger = Ledger::new(MemoryStore::new(), true);
        let ((), events) = ledger.apply(|ledger| ledger.mint(acc(1), 3)).unwrap();
        assert_eq!(events, vec![LedgerEvent::Transfer { from: None, to: Some(acc(1)), value: 3 }]);
    }

    #[test]
    fn apply_drops_events_of_failed_call() {
        let mut ledger = Ledger::new(MemoryStore::new(), true);
        ledger.mint(acc(1), 3).unwrap();
        let outcome = ledger.apply(|ledger| ledger.transfer(acc(1), acc(2), 4));
        assert_eq!(outcome, Err(Error::InsufficientBalance));
    }

    #[test]
    fn failed_call_records_nothing() {
        let mut ledger = Ledger::new(MemoryStore::new(), true);
        assert!(ledger.transfer(acc(1), acc(2), 1).is_err());
        assert!(ledger.decrease_allowance(acc(1), acc(2), 1).is_err());
        assert!(ledger.events().is_empty());
    }
}
