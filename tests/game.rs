//! Game integration tests.

use big2::{
    Card, Deck, DeckError, Game, GameOptions, GamePhase, MAX_CARDS_PER_PLAYER, PlayError,
    SetupError, Turn, TurnError,
};

const ROSTER: [&str; 4] = ["Adam", "Ben", "Charlie", "Derek"];

fn card(ordinal: u8) -> Card {
    Deck::new().cards()[ordinal as usize]
}

fn stock(ordinals: &[u8]) -> Deck {
    Deck::from_cards(ordinals.iter().copied().map(card).collect())
}

fn names(game: &Game) -> Vec<&str> {
    game.players().iter().map(|p| p.name()).collect()
}

fn hand(game: &Game, name: &str) -> Vec<Card> {
    game.player(name).unwrap().hand().unwrap().cards().to_vec()
}

fn unshuffled() -> GameOptions {
    GameOptions::default().with_shuffle(false)
}

#[test]
fn new_validates_roster_and_options() {
    let empty: [&str; 0] = [];
    assert_eq!(
        Game::new(empty, GameOptions::default(), 1).unwrap_err(),
        SetupError::NoPlayers
    );
    assert_eq!(
        Game::new(["Adam", "Ben", "Adam"], GameOptions::default(), 1).unwrap_err(),
        SetupError::DuplicatePlayer
    );
    assert_eq!(
        Game::new(ROSTER, GameOptions::default().with_cards_per_player(14), 1).unwrap_err(),
        SetupError::InvalidOptions
    );
    assert_eq!(
        Game::new(ROSTER, GameOptions::default().with_cards_per_player(0), 1).unwrap_err(),
        SetupError::InvalidOptions
    );
    assert!(Game::new(ROSTER, GameOptions::default().with_cards_per_player(13), 1).is_ok());
}

#[test]
fn setup_deals_ordered_hands() {
    let mut game = Game::new(ROSTER, GameOptions::default(), 42).unwrap();
    assert_eq!(game.phase(), GamePhase::Uninitialized);

    game.setup().unwrap();
    assert_eq!(game.phase(), GamePhase::Dealt);
    assert_eq!(game.stock().len(), 52 - 4 * MAX_CARDS_PER_PLAYER);

    for player in game.players() {
        let cards = player.hand().unwrap().cards();
        assert_eq!(cards.len(), MAX_CARDS_PER_PLAYER);
        assert!(cards.windows(2).all(|w| w[0] < w[1]), "{}", player.name());
    }
}

#[test]
fn same_seed_deals_same_hands() {
    let mut a = Game::new(ROSTER, GameOptions::default(), 9).unwrap();
    let mut b = Game::new(ROSTER, GameOptions::default(), 9).unwrap();
    a.setup().unwrap();
    b.setup().unwrap();

    assert_eq!(names(&a), names(&b));
    for name in ROSTER {
        assert_eq!(hand(&a, name), hand(&b, name));
    }
}

#[test]
fn unshuffled_deal_follows_stock_order() {
    let mut game = Game::new(ROSTER, unshuffled(), 0).unwrap();
    game.setup().unwrap();

    assert_eq!(names(&game), ROSTER);
    assert_eq!(hand(&game, "Adam"), (0..12).map(card).collect::<Vec<_>>());
    assert_eq!(hand(&game, "Derek"), (36..48).map(card).collect::<Vec<_>>());
    assert_eq!(game.stock().cards(), &[card(48), card(49), card(50), card(51)]);
}

#[test]
fn holder_of_smallest_card_is_seated_first() {
    let mut cards: Vec<u8> = (0..52).collect();
    cards.swap(0, 24);
    let mut game = Game::with_stock(ROSTER, stock(&cards), unshuffled(), 0).unwrap();
    game.setup().unwrap();

    assert_eq!(names(&game), ["Charlie", "Derek", "Adam", "Ben"]);
    assert_eq!(game.players()[0].hand().unwrap().cards()[0], card(0));
}

#[test]
fn short_stock_fails_without_dealing() {
    let mut game = Game::with_stock(ROSTER, stock(&[0, 1, 2]), unshuffled(), 0).unwrap();

    assert_eq!(
        game.setup().unwrap_err(),
        SetupError::Deck(DeckError::InsufficientCards)
    );
    assert_eq!(game.phase(), GamePhase::Uninitialized);
    assert_eq!(game.stock().len(), 3);
    assert!(game.players().iter().all(|p| p.hand().is_none()));
}

#[test]
fn phase_guards() {
    let mut game = Game::new(ROSTER, GameOptions::default(), 5).unwrap();
    assert_eq!(game.start().unwrap_err(), TurnError::InvalidState);
    assert_eq!(game.next_turn(0).unwrap_err(), TurnError::InvalidState);
    assert_eq!(game.play("Adam").unwrap_err(), TurnError::InvalidState);

    game.setup().unwrap();
    assert_eq!(game.setup().unwrap_err(), SetupError::InvalidState);
    assert_eq!(game.next_turn(4).unwrap_err(), TurnError::SeatNotFound);
    assert_eq!(game.play("Eve").unwrap_err(), TurnError::PlayerNotFound);

    game.start().unwrap();
    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(game.start().unwrap_err(), TurnError::InvalidState);
}

#[test]
fn threshold_carries_past_passing_players() {
    // Adam [3♢ 10♡ 10♠], Ben [5♢ 5♣ 5♡], Charlie [5♠ 6♢ 6♣], Derek [3♠ K♢ K♣]
    let mut game = Game::with_stock(
        ROSTER,
        stock(&[0, 30, 31, 8, 9, 10, 11, 12, 13, 3, 40, 41]),
        unshuffled().with_cards_per_player(3),
        0,
    )
    .unwrap();
    game.setup().unwrap();
    assert_eq!(names(&game), ROSTER);

    assert_eq!(game.next_turn(0).unwrap().card(), Some(card(0)));
    assert_eq!(game.next_turn(1).unwrap().card(), Some(card(8)));
    assert_eq!(game.next_turn(2).unwrap().card(), Some(card(11)));
    assert_eq!(game.next_turn(3).unwrap().card(), Some(card(40)));
    assert_eq!(game.phase(), GamePhase::InProgress);

    for seat in 0..3 {
        let turn = game.next_turn(seat).unwrap();
        assert!(matches!(turn, Turn::Passed { .. }), "{turn}");
        assert_eq!(game.last_played_card(), Some(card(40)));
    }
    assert_eq!(game.last_played_player().unwrap().name(), "Derek");
}

#[test]
fn threshold_resets_when_play_returns_to_its_owner() {
    let mut game = Game::with_stock(
        ROSTER,
        stock(&[0, 30, 31, 8, 9, 10, 11, 12, 13, 3, 40, 41]),
        unshuffled().with_cards_per_player(3),
        0,
    )
    .unwrap();
    game.setup().unwrap();

    for seat in 0..4 {
        game.next_turn(seat).unwrap();
    }
    for seat in 0..3 {
        game.next_turn(seat).unwrap();
    }

    // Derek set K♢ and everyone passed, so he leads his 3♠ instead of K♣.
    let turn = game.next_turn(3).unwrap();
    assert_eq!(
        turn,
        Turn::Played {
            player: "Derek".to_string(),
            card: card(3),
        }
    );
    assert_eq!(hand(&game, "Derek"), vec![card(41)]);
    assert_eq!(game.last_played_card(), Some(card(3)));

    assert_eq!(game.next_turn(0).unwrap().card(), Some(card(30)));
}

#[test]
fn unshuffled_round_plays_out_deterministically() {
    let mut game = Game::new(ROSTER, unshuffled(), 0).unwrap();
    let result = game.setup().unwrap().start().unwrap();

    // Derek holds the top twelve cards and keeps the lead after the first lap.
    assert_eq!(result.winner, "Derek");
    assert_eq!(result.laps, 12);
    assert_eq!(result.cards_played, 4 + 11);
    assert_eq!(result.passes, 11 * 3);
    assert_eq!(game.history().len(), 48);
    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(game.winner().unwrap().name(), "Derek");
    assert_eq!(game.last_played_card(), Some(card(47)));
    assert_eq!(hand(&game, "Adam").len(), 11);
}

#[test]
fn lap_completes_after_a_player_goes_out() {
    // Adam [3♢ 2♠], Ben [3♣ 4♢], Charlie [3♡ 4♣], Derek [3♠ 4♡]
    let mut game = Game::with_stock(
        ROSTER,
        stock(&[0, 51, 1, 4, 2, 5, 3, 6]),
        unshuffled().with_cards_per_player(2),
        0,
    )
    .unwrap();
    let result = game.setup().unwrap().start().unwrap();

    // Lap 1: 3♢ 3♣ 3♡ 3♠. Lap 2: Adam plays 2♠ and goes out, the rest pass.
    assert_eq!(result.winner, "Adam");
    assert_eq!(result.laps, 2);
    assert_eq!(result.cards_played, 5);
    assert_eq!(result.passes, 3);
    assert_eq!(game.history().len(), 8);
    assert_eq!(game.history()[7].to_string(), "Derek passed this turn");
}

#[test]
fn play_by_name_finishes_the_game() {
    let mut game = Game::with_stock(
        ["Adam", "Ben"],
        stock(&[0, 1]),
        unshuffled().with_cards_per_player(1),
        0,
    )
    .unwrap();
    game.setup().unwrap();

    let turn = game.play("Adam").unwrap();
    assert_eq!(turn.to_string(), "Adam played 3♢");
    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(game.winner().unwrap().name(), "Adam");
    assert_eq!(game.play("Ben").unwrap_err(), TurnError::InvalidState);
}

#[test]
fn setup_after_finish_and_reset_deal_fresh_rounds() {
    let mut game = Game::new(ROSTER, GameOptions::default(), 11).unwrap();
    game.setup().unwrap().start().unwrap();

    game.setup().unwrap();
    assert_eq!(game.phase(), GamePhase::Dealt);
    assert!(game.history().is_empty());
    assert!(game.last_played().is_none());
    assert!(game.players().iter().all(|p| p.hand().unwrap().len() == 12));

    game.next_turn(0).unwrap();
    game.reset().unwrap();
    assert_eq!(game.phase(), GamePhase::Dealt);
    assert_eq!(game.stock().len(), 4);
    assert!(game.last_played().is_none());
    assert!(game.winner().is_none());
}

#[test]
fn discarded_hand_cannot_play() {
    let mut game = Game::new(ROSTER, GameOptions::default(), 3).unwrap();
    game.setup().unwrap();
    let seat = game.seat_of("Ben").unwrap();
    game.player_mut("Ben").unwrap().discard_all_cards();

    assert_eq!(
        game.next_turn(seat).unwrap_err(),
        TurnError::Play(PlayError::NoHand)
    );
    assert!(game.history().is_empty());
    assert_eq!(game.phase(), GamePhase::Dealt);
}

#[test]
fn failed_turn_keeps_the_card_to_beat() {
    let mut game = Game::new(ROSTER, unshuffled(), 0).unwrap();
    game.setup().unwrap();
    let turn = game.next_turn(0).unwrap();
    assert_eq!(turn.player(), "Adam");
    assert_eq!(turn.card(), Some(card(0)));

    // Play has come back to Adam, who set 3♢, but his hand is gone.
    game.player_mut("Adam").unwrap().discard_all_cards();
    assert_eq!(
        game.next_turn(0).unwrap_err(),
        TurnError::Play(PlayError::NoHand)
    );

    let last = game.last_played().unwrap();
    assert_eq!(last.card, card(0));
    assert_eq!(last.player, "Adam");
    assert_eq!(game.history().len(), 1);
}

#[test]
fn first_seated_player_wins_when_several_go_out_in_one_lap() {
    // Adam [3♢ 4♢], Ben [3♣ 4♣], Charlie [3♡ 4♡], Derek [3♠ 4♠]
    let mut game = Game::with_stock(
        ROSTER,
        stock(&[0, 4, 1, 5, 2, 6, 3, 7]),
        unshuffled().with_cards_per_player(2),
        0,
    )
    .unwrap();
    let result = game.setup().unwrap().start().unwrap();

    assert!(game.players().iter().all(|p| p.is_out()));
    assert_eq!(result.winner, "Adam");
    assert_eq!(result.laps, 2);
    assert_eq!(result.cards_played, 8);
    assert_eq!(result.passes, 0);
    assert_eq!(game.winner().unwrap().name(), "Adam");
    assert_eq!(game.history()[7].player(), "Derek");
}

#[test]
fn deal_moves_cards_out_of_the_stock() {
    let options = unshuffled().with_cards_per_player(5);
    let mut game = Game::new(ROSTER, options, 0).unwrap();
    game.setup().unwrap();

    assert_eq!(game.options(), &options);
    assert_eq!(game.stock().len(), 52 - 4 * 5);
    for player in game.players() {
        for card in player.hand().unwrap().cards() {
            assert!(!game.stock().contains(card));
        }
    }
    assert!(game.player("Adam").unwrap().hand().unwrap().contains(&card(4)));
    assert!(game.stock().contains(&card(20)));
}
