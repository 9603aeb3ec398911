use proptest::prelude::*;
use token_ledger::{AccountId, Balance, CapPolicy, Ledger, MemoryStore};

const ACCOUNTS: u8 = 5;

fn acc(index: u8) -> AccountId {
    AccountId::from([index + 1; 32])
}

#[derive(Debug, Clone)]
enum Op {
    Mint(u8, Balance),
    Transfer(u8, u8, Balance),
    Approve(u8, u8, Balance),
    TransferFrom(u8, u8, u8, Balance),
    Burn(u8, Balance),
    BurnFrom(u8, u8, Balance),
}

fn op() -> impl Strategy<Value = Op> {
    let who = 0..ACCOUNTS;
    let amount = 0u128..2_000;
    prop_oneof![
        (who.clone(), amount.clone()).prop_map(|(a, n)| Op::Mint(a, n)),
        (who.clone(), who.clone(), amount.clone()).prop_map(|(a, b, n)| Op::Transfer(a, b, n)),
        (who.clone(), who.clone(), amount.clone()).prop_map(|(a, b, n)| Op::Approve(a, b, n)),
        (who.clone(), who.clone(), who.clone(), amount.clone())
            .prop_map(|(c, a, b, n)| Op::TransferFrom(c, a, b, n)),
        (who.clone(), amount.clone()).prop_map(|(a, n)| Op::Burn(a, n)),
        (who.clone(), who, amount).prop_map(|(c, a, n)| Op::BurnFrom(c, a, n)),
    ]
}

fn apply(ledger: &mut Ledger<MemoryStore>, op: &Op) -> token_ledger::Result<()> {
    match *op {
        Op::Mint(a, n) => ledger.mint(acc(a), n),
        Op::Transfer(a, b, n) => ledger.transfer(acc(a), acc(b), n),
        Op::Approve(a, b, n) => ledger.approve(acc(a), acc(b), n),
        Op::TransferFrom(c, a, b, n) => ledger.transfer_from(acc(c), acc(a), acc(b), n),
        Op::Burn(a, n) => ledger.burn(acc(a), n),
        Op::BurnFrom(c, a, n) => ledger.burn_from(acc(c), acc(a), n),
    }
}

fn sum_of_balances(ledger: &Ledger<MemoryStore>) -> Balance {
    ledger.store().balances().map(|(_, balance)| *balance).sum()
}

proptest! {
    #[test]
    fn supply_tracks_balances(ops in prop::collection::vec(op(), 1..60)) {
        let mut ledger = Ledger::new(MemoryStore::new(), true)
            .with_mint_policy(CapPolicy::new(5_000));
        for op in &ops {
            let before = ledger.store().clone();
            let events = ledger.events().len();
            if apply(&mut ledger, op).is_err() {
                prop_assert_eq!(ledger.store(), &before);
                prop_assert_eq!(ledger.events().len(), events);
            }
            prop_assert_eq!(ledger.total_supply(), sum_of_balances(&ledger));
            prop_assert!(ledger.total_supply() <= 5_000);
        }
    }

    #[test]
    fn increase_then_decrease_is_identity(start in any::<u64>(), delta in any::<u64>()) {
        let mut ledger = Ledger::new(MemoryStore::new(), false);
        ledger.approve(acc(0), acc(1), u128::from(start)).unwrap();
        ledger.increase_allowance(acc(0), acc(1), u128::from(delta)).unwrap();
        ledger.decrease_allowance(acc(0), acc(1), u128::from(delta)).unwrap();
        prop_assert_eq!(ledger.allowance(&acc(0), &acc(1)), u128::from(start));
    }

    #[test]
    fn transfer_from_spends_exactly(grant in 0u128..1_000, spend in 0u128..1_000) {
        let mut ledger = Ledger::new(MemoryStore::new(), false);
        ledger.mint(acc(0), 1_000).unwrap();
        ledger.approve(acc(0), acc(1), grant).unwrap();
        let outcome = ledger.transfer_from(acc(1), acc(0), acc(2), spend);
        if spend <= grant {
            prop_assert!(outcome.is_ok());
            prop_assert_eq!(ledger.allowance(&acc(0), &acc(1)), grant - spend);
            prop_assert_eq!(ledger.balance_of(&acc(2)), spend);
        } else {
            prop_assert!(outcome.is_err());
            prop_assert_eq!(ledger.allowance(&acc(0), &acc(1)), grant);
            prop_assert_eq!(ledger.balance_of(&acc(0)), 1_000);
        }
    }
}
