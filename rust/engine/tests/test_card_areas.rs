use freecell_engine::area::{AreaKind, CardArea};
use freecell_engine::cards::{Card, Suit};

fn c(suit: u8, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

fn area_with(kind: AreaKind, cards: Vec<Card>) -> CardArea {
    let mut area = CardArea::new(kind);
    area.replace_contents(cards);
    area
}

// Free cells

#[test]
fn free_cell_selects_its_only_card() {
    let fc = area_with(AreaKind::FreeCell, vec![c(2, 1)]);
    assert!(fc.can_select(&c(2, 1)));
    assert!(!fc.can_select(&c(1, 2)));
}

#[test]
fn empty_free_cell_has_nothing_to_select() {
    let fc = CardArea::new(AreaKind::FreeCell);
    assert!(!fc.can_select(&c(2, 1)));
}

#[test]
fn free_cell_accepts_one_card_when_empty() {
    let fc = CardArea::new(AreaKind::FreeCell);
    assert!(fc.can_accept(&[c(1, 1)]));
    assert!(!fc.can_accept(&[c(1, 2), c(3, 1)]));
    assert!(!fc.can_accept(&[]));

    let full = area_with(AreaKind::FreeCell, vec![c(4, 4)]);
    assert!(!full.can_accept(&[c(1, 1)]));
}

// Columns

#[test]
fn column_selects_front_card() {
    let cc = area_with(AreaKind::Column, vec![c(2, 1), c(1, 2)]);
    assert!(cc.can_select(&c(1, 2)));
    let single = area_with(AreaKind::Column, vec![c(2, 1)]);
    assert!(single.can_select(&c(2, 1)));
}

#[test]
fn column_selects_orderly_run() {
    let cc = area_with(
        AreaKind::Column,
        vec![c(4, 13), c(2, 12), c(3, 11), c(1, 10), c(4, 9)],
    );
    assert!(cc.can_select(&c(4, 13)));
}

#[test]
fn column_ignores_cards_behind_selection() {
    // 2C, 4H sit behind the run and break every rule
    let cc = area_with(
        AreaKind::Column,
        vec![c(1, 2), c(4, 4), c(4, 13), c(2, 12), c(3, 11)],
    );
    assert!(cc.can_select(&c(4, 13)));
    assert!(!cc.can_select(&c(4, 4)));
}

#[test]
fn column_rejects_missing_card() {
    let cc = area_with(AreaKind::Column, vec![c(4, 13)]);
    assert!(!cc.can_select(&c(2, 12)));
    assert!(!CardArea::new(AreaKind::Column).can_select(&c(4, 13)));
}

#[test]
fn column_rejects_repeated_color_at_the_end() {
    let cc = area_with(
        AreaKind::Column,
        vec![c(1, 2), c(4, 4), c(4, 13), c(2, 12), c(3, 11), c(3, 10)],
    );
    assert!(!cc.can_select(&c(4, 13)));
}

#[test]
fn column_rejects_rank_gap_at_the_end() {
    let cc = area_with(
        AreaKind::Column,
        vec![c(1, 2), c(4, 4), c(4, 13), c(2, 12), c(3, 11), c(1, 9)],
    );
    assert!(!cc.can_select(&c(4, 13)));
}

/// King of Hearts down to 5, alternating Hearts/Spades.
fn descending_run() -> Vec<Card> {
    (0..9u8)
        .map(|i| {
            let suit = if i % 2 == 0 { 4 } else { 2 };
            c(suit, 13 - i)
        })
        .collect()
}

#[test]
fn every_card_of_an_orderly_run_is_selectable() {
    let run = descending_run();
    let cc = area_with(AreaKind::Column, run.clone());
    for card in &run {
        assert!(cc.can_select(card), "{} should be selectable", card);
    }
}

#[test]
fn color_repeat_blocks_everything_behind_it() {
    for k in 1..descending_run().len() {
        let mut run = descending_run();
        // same color as the card behind it, same rank as before
        let repeat = if run[k - 1].suit == Suit::Hearts {
            Suit::Diamonds
        } else {
            Suit::Clubs
        };
        run[k].suit = repeat;
        let cc = area_with(AreaKind::Column, run.clone());
        let last = run.len() - 1;
        for (i, card) in run.iter().enumerate() {
            // the repeated card clashes with both neighbours
            assert_eq!(
                cc.can_select(card),
                i > k || i == last,
                "break at {}, checking {} at {}",
                k,
                card,
                i
            );
        }
    }
}

#[test]
fn rank_skip_blocks_the_run_above_it() {
    let mut run = descending_run();
    // 10S becomes 8H: skips a rank from JH and clashes with 9H
    run[3] = c(4, 8);
    let cc = area_with(AreaKind::Column, run.clone());
    for (i, card) in run.iter().enumerate() {
        assert_eq!(cc.can_select(card), i >= 4, "checking {} at {}", card, i);
    }
}

#[test]
fn empty_column_accepts_any_run() {
    let cc = CardArea::new(AreaKind::Column);
    assert!(cc.can_accept(&[c(1, 1)]));
    assert!(cc.can_accept(&[c(1, 13), c(3, 12), c(2, 11), c(4, 10)]));
}

#[test]
fn occupied_column_checks_first_card_of_run() {
    let cc = area_with(AreaKind::Column, vec![c(1, 10)]);
    assert!(cc.can_accept(&[c(3, 9), c(2, 8)]));

    let same_color = area_with(AreaKind::Column, vec![c(2, 2), c(3, 1), c(2, 5)]);
    assert!(!same_color.can_accept(&[c(1, 4), c(3, 3), c(2, 2)]));

    let gap = area_with(AreaKind::Column, vec![c(4, 10)]);
    assert!(!gap.can_accept(&[c(2, 7), c(3, 6)]));
}

// Suit cells

#[test]
fn suit_cell_never_allows_selection() {
    let sc = area_with(AreaKind::SuitCell, vec![c(1, 1), c(1, 2)]);
    assert!(!sc.can_select(&c(1, 2)));
    assert!(!sc.can_select(&c(1, 1)));
}

#[test]
fn empty_suit_cell_accepts_only_an_ace() {
    let sc = CardArea::new(AreaKind::SuitCell);
    assert!(sc.can_accept(&[c(1, 1)]));
    assert!(!sc.can_accept(&[c(1, 10)]));
    assert!(!sc.can_accept(&[c(4, 5)]));
}

#[test]
fn occupied_suit_cell_builds_up_in_suit() {
    let hearts = area_with(AreaKind::SuitCell, vec![c(4, 1)]);
    assert!(hearts.can_accept(&[c(4, 2)]));

    let diamonds = area_with(AreaKind::SuitCell, vec![c(3, 1)]);
    assert!(!diamonds.can_accept(&[c(3, 3)]));

    let spades = area_with(AreaKind::SuitCell, vec![c(2, 1)]);
    assert!(!spades.can_accept(&[c(1, 2)]));
}

#[test]
fn suit_cell_rejects_multi_card_runs() {
    let sc = CardArea::new(AreaKind::SuitCell);
    assert!(!sc.can_accept(&[c(1, 1), c(1, 2), c(1, 3)]));
    assert!(!sc.can_accept(&[]));
}
