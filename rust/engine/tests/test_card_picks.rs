use keno_engine::card::{
    are_cards_valid, create_cards, repeat_cards, toggle_pick, Card, CardState, MAX_PICKS,
};

fn full_card() -> Card {
    Card {
        id: 1,
        picks: (1..=10).collect(),
    }
}

#[test]
fn create_cards_numbers_from_one_with_no_picks() {
    let cards = create_cards(4);
    assert_eq!(cards.len(), 4);
    for (i, card) in cards.iter().enumerate() {
        assert_eq!(card.id, i as u32 + 1);
        assert!(card.picks.is_empty());
        assert_eq!(card.state(), CardState::Empty);
    }
    assert!(create_cards(0).is_empty());
}

#[test]
fn toggle_keeps_picks_sorted() {
    let mut card = Card::new(1);
    for n in [40, 3, 77, 12, 1] {
        card = toggle_pick(&card, n);
    }
    assert_eq!(card.picks, vec![1, 3, 12, 40, 77]);
}

#[test]
fn toggle_twice_restores_original() {
    let card = Card {
        id: 3,
        picks: vec![4, 8, 15],
    };
    for n in [1u8, 4, 15, 16, 80] {
        let back = toggle_pick(&toggle_pick(&card, n), n);
        assert_eq!(back, card, "double toggle of {} changed the card", n);
    }
}

#[test]
fn eleventh_pick_is_a_no_op() {
    let card = full_card();
    let after = toggle_pick(&card, 50);
    assert_eq!(after, card);
    assert_eq!(after.picks.len(), 10);
    assert!(!after.has_pick(50));
}

#[test]
fn removal_may_leave_card_empty() {
    let card = Card {
        id: 1,
        picks: vec![9],
    };
    let after = toggle_pick(&card, 9);
    assert!(after.picks.is_empty());
    assert!(!after.is_valid());
}

#[test]
fn no_toggle_sequence_exceeds_ten_picks() {
    let mut card = Card::new(1);
    for round in 0..5u8 {
        for n in 1..=80u8 {
            card = toggle_pick(&card, n.wrapping_mul(round + 7) % 80 + 1);
            assert!(card.picks.len() <= MAX_PICKS);
        }
    }
}

#[test]
fn toggle_does_not_range_check_numbers() {
    let card = toggle_pick(&Card::new(1), 200);
    assert_eq!(card.picks, vec![200]);
}

#[test]
fn validity_requires_one_to_ten_picks_on_every_card() {
    let one = Card {
        id: 1,
        picks: vec![5],
    };
    let empty = Card::new(2);
    let overfull = Card {
        id: 3,
        picks: (1..=11).collect(),
    };

    assert!(are_cards_valid(&[one.clone(), full_card()]));
    assert!(!are_cards_valid(&[one.clone(), empty]));
    assert!(!are_cards_valid(&[one, overfull]));
}

#[test]
fn zero_cards_is_vacuously_valid() {
    assert!(are_cards_valid(&[]));
}

#[test]
fn repeated_cards_do_not_share_picks() {
    let original = vec![full_card()];
    let mut copy = repeat_cards(&original);
    copy[0] = toggle_pick(&copy[0], 1);
    copy[0].picks.push(99);
    assert_eq!(original[0], full_card());
}
