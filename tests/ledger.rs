//! Betting ledger tests.

use proptest::prelude::*;
use twentyone::{BetError, Ledger, Outcome};

#[test]
fn place_bet_moves_points_into_escrow() {
    let mut ledger = Ledger::new(100);
    assert_eq!(ledger.place_bet(50), Ok(50));
    assert_eq!(ledger.balance(), 50);
    assert_eq!(ledger.bet(), 50);
    assert!(ledger.has_bet());
}

#[test]
fn rejected_bets_leave_ledger_unchanged() {
    let mut ledger = Ledger::new(100);

    assert_eq!(ledger.place_bet(0), Err(BetError::NotPositive));
    assert_eq!(ledger.place_bet(-5), Err(BetError::NotPositive));
    assert_eq!(ledger.place_bet(101), Err(BetError::InsufficientFunds));
    assert_eq!(ledger, Ledger::new(100));

    ledger.place_bet(100).unwrap();
    assert_eq!(ledger.place_bet(1), Err(BetError::AlreadyPlaced));
    assert_eq!(ledger.balance(), 0);
    assert_eq!(ledger.bet(), 100);
}

#[test]
fn win_pays_double_the_stake() {
    let mut ledger = Ledger::new(100);
    ledger.place_bet(50).unwrap();
    assert_eq!(ledger.settle(Outcome::PlayerWin), Ok(100));
    assert_eq!(ledger.balance(), 150);
    assert_eq!(ledger.bet(), 0);
}

#[test]
fn draw_returns_the_stake() {
    let mut ledger = Ledger::new(100);
    ledger.place_bet(30).unwrap();
    assert_eq!(ledger.settle(Outcome::Draw), Ok(30));
    assert_eq!(ledger.balance(), 100);
}

#[test]
fn loss_forfeits_the_stake() {
    let mut ledger = Ledger::new(100);
    ledger.place_bet(100).unwrap();
    assert_eq!(ledger.settle(Outcome::PlayerLoss), Ok(0));
    assert_eq!(ledger.balance(), 0);
    assert!(!ledger.has_bet());
}

#[test]
fn settle_without_bet_is_rejected() {
    let mut ledger = Ledger::new(10);
    assert_eq!(
        ledger.settle(Outcome::PlayerWin),
        Err(BetError::NoActiveBet)
    );
    assert_eq!(ledger.balance(), 10);
}

#[test]
fn bet_whose_win_cannot_be_paid_is_rejected() {
    let mut ledger = Ledger::new(usize::MAX);
    assert_eq!(ledger.place_bet(1), Err(BetError::PayoutOverflow));
    assert_eq!(ledger, Ledger::new(usize::MAX));

    let mut ledger = Ledger::new(usize::MAX / 2);
    let bet = isize::try_from(usize::MAX / 2).unwrap();
    ledger.place_bet(bet).unwrap();
    assert_eq!(ledger.settle(Outcome::PlayerWin), Ok(usize::MAX - 1));
    assert_eq!(ledger.balance(), usize::MAX - 1);
}

fn outcomes() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::PlayerWin),
        Just(Outcome::PlayerLoss),
        Just(Outcome::Draw),
    ]
}

proptest! {
    #[test]
    fn settlement_moves_balance_by_exactly_the_bet(
        (balance, bet) in (1usize..10_000).prop_flat_map(|b| (Just(b), 1..=b)),
        outcome in outcomes(),
    ) {
        let mut ledger = Ledger::new(balance);
        ledger.place_bet(bet as isize).unwrap();
        ledger.settle(outcome).unwrap();

        let expected = match outcome {
            Outcome::PlayerWin => balance + bet,
            Outcome::Draw => balance,
            Outcome::PlayerLoss => balance - bet,
        };
        prop_assert_eq!(ledger.balance(), expected);
        prop_assert_eq!(ledger.bet(), 0);
    }
}
