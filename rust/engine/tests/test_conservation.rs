use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use freecell_engine::area::{AreaId, AreaKind};
use freecell_engine::cards::{Card, full_deck};
use freecell_engine::game::Game;

fn sorted_deck() -> Vec<Card> {
    let mut cards = full_deck();
    cards.sort();
    cards
}

fn assert_conserved(game: &Game, step: usize) {
    let mut cards = game.cards_in_play();
    cards.sort();
    assert_eq!(cards, sorted_deck(), "conservation broken at step {}", step);
}

fn random_kind(rng: &mut ChaCha20Rng) -> AreaKind {
    match rng.random_range(0..3) {
        0 => AreaKind::FreeCell,
        1 => AreaKind::SuitCell,
        _ => AreaKind::Column,
    }
}

/// Random selections and drops never create or lose a card.
#[test]
fn random_play_conserves_all_cards() {
    for seed in 0..20u64 {
        let mut game = Game::new(Some(seed)).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed ^ 0x5EED);
        assert_conserved(&game, 0);

        for step in 1..=400 {
            if game.is_holding() {
                let kind = random_kind(&mut rng);
                let id = rng.random_range(1..=kind.count());
                game.move_selection_to(kind, id).unwrap();
            } else {
                let kind = random_kind(&mut rng);
                let id = AreaId::new(kind, rng.random_range(1..=kind.count()));
                let cards = game.contents(id).unwrap().to_vec();
                if cards.is_empty() {
                    continue;
                }
                let card = cards[rng.random_range(0..cards.len())];
                let before = cards.clone();
                if game.select(&card, id).unwrap() {
                    assert_eq!(game.origin_area(), Some(id));
                    let kept = before.len() - game.selection().len();
                    assert_eq!(&before[..kept], game.contents(id).unwrap());
                    assert_eq!(&before[kept..], game.selection());
                } else {
                    assert_eq!(game.contents(id).unwrap(), before.as_slice());
                }
            }
            assert_conserved(&game, step);
        }
    }
}

#[test]
fn cancel_after_random_selection_restores_area() {
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    let mut game = Game::new(Some(77)).unwrap();
    for _ in 0..200 {
        let col = rng.random_range(1..=8);
        let id = AreaId::column(col);
        let before = game.contents(id).unwrap().to_vec();
        if before.is_empty() {
            continue;
        }
        let index = rng.random_range(0..before.len());
        if game.select_from_column(col, index).unwrap() {
            game.cancel_move().unwrap();
        }
        assert_eq!(game.contents(id).unwrap(), before.as_slice());
        assert!(!game.is_holding());
    }
}

#[test]
fn foundations_stay_single_suit_and_ascending() {
    for seed in 100..110u64 {
        let mut game = Game::new(Some(seed)).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        for _ in 0..600 {
            if game.is_holding() {
                let kind = random_kind(&mut rng);
                let id = rng.random_range(1..=kind.count());
                game.move_selection_to(kind, id).unwrap();
                continue;
            }
            let col = rng.random_range(1..=8);
            let len = game.contents(AreaId::column(col)).unwrap().len();
            if len > 0 {
                game.select_from_column(col, len - 1).unwrap();
            } else {
                game.select_from_free_cell(rng.random_range(1..=4)).unwrap();
            }
        }
        for (_, area) in game.layout().iter() {
            if area.kind() != AreaKind::SuitCell {
                continue;
            }
            for (i, card) in area.contents().iter().enumerate() {
                assert_eq!(card.rank.value() as usize, i + 1);
                assert_eq!(card.suit, area.contents()[0].suit);
            }
        }
    }
}
