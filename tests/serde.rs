//! JSON shape of the table view.

#![cfg(feature = "serde")]

use big2::{Card, GameOptions, Rank, Suit, Table};
use serde_json::json;

#[test]
fn table_state_serializes_for_front_ends() {
    let options = GameOptions::default()
        .with_shuffle(false)
        .with_cards_per_player(2);
    let table = Table::seated(["Adam", "Ben"], options, 0).unwrap();
    table.play_card("Adam", "3♢").unwrap();

    let value = serde_json::to_value(table.state()).unwrap();
    assert_eq!(
        value,
        json!({
            "players": [
                { "name": "Adam", "cards": ["3♣"], "has_card": true },
                { "name": "Ben", "cards": ["3♡", "3♠"], "has_card": true },
            ],
            "last_played_card": "3♢",
            "last_played_player": "Adam",
            "phase": "InProgress",
            "winner": null,
        })
    );
}

#[test]
fn card_deserializes_from_rank_and_suit() {
    let card: Card = serde_json::from_value(json!({ "rank": "Ace", "suit": "Hearts" })).unwrap();
    assert_eq!(card, Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(card.ordinal(), 46);
}
