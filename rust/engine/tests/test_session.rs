use keno_engine::card::Card;
use keno_engine::draw::Drawer;
use keno_engine::errors::KenoError;
use keno_engine::paytable::Preset;
use keno_engine::session::{KenoSession, SessionSnapshot, BET_OPTIONS, STARTING_BANKROLL};

fn seeded(bankroll: u64) -> KenoSession {
    KenoSession::new(Some(2024), bankroll)
}

#[test]
fn new_session_has_one_empty_card_and_cannot_draw() {
    let session = seeded(STARTING_BANKROLL);
    assert_eq!(session.cards(), &[Card::new(1)]);
    assert_eq!(session.bet_per_card(), 1);
    assert_eq!(session.preset(), Preset::Fun);
    assert_eq!(session.draw_blocker(), Some(KenoError::InvalidCards));
    assert!(!session.can_draw());
}

#[test]
fn invalid_cards_block_the_draw_without_charging() {
    let mut session = seeded(100);
    assert_eq!(session.draw(), Err(KenoError::InvalidCards));
    assert_eq!(session.bankroll(), 100);
    assert_eq!(session.rounds_played(), 0);
    assert!(session.drawn().is_empty());
}

#[test]
fn bankroll_must_cover_total_bet() {
    let mut session = seeded(9);
    session.set_card_count(2).unwrap();
    session.set_bet_per_card(5).unwrap();
    session.quick_pick_all();
    assert_eq!(session.total_bet(), 10);
    assert_eq!(
        session.draw(),
        Err(KenoError::InsufficientBankroll {
            needed: 10,
            available: 9
        })
    );
}

#[test]
fn draw_settles_every_card_against_one_draw() {
    let mut session = seeded(1_000);
    session.set_card_count(3).unwrap();
    session.set_bet_per_card(2).unwrap();
    session.quick_pick_all();

    let round = session.draw().expect("valid round");
    assert_eq!(round.round, 1);
    assert_eq!(round.results.len(), 3);
    assert_eq!(round.total_bet, 6);
    assert_eq!(session.drawn(), round.drawn.as_slice());

    let drawn: std::collections::HashSet<u8> = round.drawn.iter().copied().collect();
    for (card, result) in session.cards().iter().zip(&round.results) {
        let hits = card.picks.iter().filter(|p| drawn.contains(*p)).count();
        assert_eq!(result.hits, hits);
        assert_eq!(result.card_id, card.id);
        let mult = Preset::Fun.table().multiplier(card.picks.len(), hits);
        assert_eq!(result.win, u64::from(mult.unwrap_or(0)) * 2);
    }

    let won: u64 = round.results.iter().map(|r| r.win).sum();
    assert_eq!(round.total_win, won);
    assert_eq!(session.bankroll(), 1_000 - 6 + won);
    assert_eq!(round.bankroll_after, session.bankroll());
}

#[test]
fn toggle_validates_board_and_card_id() {
    let mut session = seeded(100);
    assert_eq!(
        session.toggle_pick(1, 0).unwrap_err(),
        KenoError::NumberOutOfRange { number: 0, max: 80 }
    );
    assert_eq!(
        session.toggle_pick(1, 81).unwrap_err(),
        KenoError::NumberOutOfRange { number: 81, max: 80 }
    );
    assert_eq!(
        session.toggle_pick(4, 10).unwrap_err(),
        KenoError::UnknownCard(4)
    );
    assert_eq!(session.toggle_pick(1, 80).unwrap().picks, vec![80]);
}

#[test]
fn eleventh_pick_through_session_is_ignored() {
    let mut session = seeded(100);
    for n in 1..=10 {
        session.toggle_pick(1, n).unwrap();
    }
    let card = session.toggle_pick(1, 11).unwrap();
    assert_eq!(card.picks, (1..=10).collect::<Vec<u8>>());
}

#[test]
fn card_count_and_bet_are_bounded() {
    let mut session = seeded(100);
    assert_eq!(
        session.set_card_count(0),
        Err(KenoError::InvalidCardCount { count: 0 })
    );
    assert_eq!(
        session.set_card_count(9),
        Err(KenoError::InvalidCardCount { count: 9 })
    );
    assert_eq!(session.set_bet_per_card(3), Err(KenoError::InvalidBet { bet: 3 }));
    for bet in BET_OPTIONS {
        assert!(session.set_bet_per_card(bet).is_ok());
    }
}

#[test]
fn shrinking_then_growing_cards_drops_picks_of_removed_cards() {
    let mut session = seeded(100);
    session.set_card_count(3).unwrap();
    session.toggle_pick(3, 7).unwrap();
    session.toggle_pick(1, 5).unwrap();
    session.set_card_count(2).unwrap();
    session.set_card_count(3).unwrap();
    assert_eq!(session.cards()[0].picks, vec![5]);
    assert_eq!(session.cards()[2], Card::new(3));
}

#[test]
fn repeat_last_round_copies_previous_cards() {
    let mut session = seeded(100);
    assert_eq!(session.repeat_last_round(), Err(KenoError::NoPreviousRound));

    session.quick_pick_all();
    let played = session.cards().to_vec();
    session.draw().unwrap();
    session.clear_all();
    assert!(session.cards()[0].picks.is_empty());

    session.repeat_last_round().unwrap();
    assert_eq!(session.cards(), played.as_slice());

    // editing the repeated card must not leak into the remembered round
    let first = session.cards()[0].picks[0];
    session.toggle_pick(1, first).unwrap();
    session.clear_all();
    session.repeat_last_round().unwrap();
    assert_eq!(session.cards(), played.as_slice());
}

#[test]
fn quick_pick_gives_each_card_ten_numbers() {
    let mut session = seeded(100);
    session.set_card_count(8).unwrap();
    session.quick_pick_all();
    assert!(session.cards().iter().all(|c| c.picks.len() == 10));
    assert!(session.can_draw());
}

#[test]
fn seeded_sessions_play_identically() {
    let mut a = seeded(500);
    let mut b = seeded(500);
    for s in [&mut a, &mut b] {
        s.set_card_count(2).unwrap();
        s.quick_pick_all();
    }
    for _ in 0..5 {
        assert_eq!(a.draw().unwrap(), b.draw().unwrap());
    }
    assert_eq!(a.bankroll(), b.bankroll());
}

#[test]
fn snapshot_round_trips_through_restore() {
    let mut session = seeded(750);
    session.set_card_count(2).unwrap();
    session.set_bet_per_card(10).unwrap();
    session.set_preset(Preset::CasinoIsh);
    session.toggle_pick(2, 33).unwrap();

    let snapshot = session.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let loaded: SessionSnapshot = serde_json::from_str(&json).unwrap();
    let restored = KenoSession::restore(loaded, Drawer::new_with_seed(1));

    assert_eq!(restored.snapshot(), snapshot);
}

#[test]
fn restore_falls_back_on_out_of_range_values() {
    let snapshot = SessionSnapshot {
        bankroll: 40,
        card_count: 12,
        bet_per_card: 7,
        cards: vec![
            Card {
                id: 9,
                picks: vec![90, 3, 3, 1],
            },
            Card {
                id: 4,
                picks: vec![2],
            },
        ],
        preset: Preset::CasinoIsh,
    };
    let session = KenoSession::restore(snapshot, Drawer::new_with_seed(5));
    assert_eq!(session.bankroll(), 40);
    assert_eq!(session.bet_per_card(), 1);
    assert_eq!(session.preset(), Preset::CasinoIsh);
    assert_eq!(
        session.cards(),
        &[Card {
            id: 1,
            picks: vec![1, 3]
        }]
    );
}

#[test]
fn partial_snapshot_loads_with_defaults() {
    let loaded: SessionSnapshot = serde_json::from_str(r#"{"card_count": 3}"#).unwrap();
    let session = KenoSession::restore(loaded, Drawer::new_with_seed(5));
    assert_eq!(session.bankroll(), STARTING_BANKROLL);
    assert_eq!(session.card_count(), 3);
    assert!(session.cards().iter().all(|c| c.picks.is_empty()));
    assert_eq!(session.preset(), Preset::Fun);
}

#[test]
fn round_summary_converts_to_record() {
    let mut session = seeded(100);
    session.quick_pick_all();
    let round = session.draw().unwrap();
    let record = round.to_record("20260101-000001".into(), session.seed());
    assert_eq!(record.seed, Some(2024));
    assert_eq!(record.cards.len(), 1);
    assert_eq!(record.cards[0].picks, session.cards()[0].picks);
    assert_eq!(record.total_win, round.total_win);
    assert!(record.ts.is_none());
}
