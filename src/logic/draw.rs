//! Deck shuffling and card drawing for the reading screen.
//!
//! Randomness comes from a small seedable xorshift64 generator rather than
//! an OS source, so a reading session can be replayed and the logic tested
//! deterministically.

use crate::model::MetaphorCard;
use serde::{Deserialize, Serialize};

/// Probability that a drawn card comes up reversed.
const REVERSED_CHANCE: f64 = 0.3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRng {
    state: u64,
}

impl DrawRng {
    pub fn new(seed: u64) -> Self {
        // xorshift needs a non-zero state
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform value in `[0, bound)`.
    fn next_below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    /// Uniform value in `[0, 1)`.
    fn next_fraction(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// One face-up card from the spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnCard {
    pub card: MetaphorCard,
    pub reversed: bool,
}

/// Fisher-Yates shuffle of a whole deck.
pub fn shuffle_deck(mut deck: Vec<MetaphorCard>, rng: &mut DrawRng) -> Vec<MetaphorCard> {
    for i in (1..deck.len()).rev() {
        let j = rng.next_below(i + 1);
        deck.swap(i, j);
    }
    deck
}

/// Draws a uniformly random card from the deck, reversed 30% of the time.
/// Empty deck draws nothing.
pub fn draw_card(deck: &[MetaphorCard], rng: &mut DrawRng) -> Option<DrawnCard> {
    if deck.is_empty() {
        return None;
    }
    let card = deck[rng.next_below(deck.len())].clone();
    let reversed = rng.next_fraction() < REVERSED_CHANCE;
    Some(DrawnCard { card, reversed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardMeaning, Deck};

    fn deck(n: usize) -> Vec<MetaphorCard> {
        (0..n)
            .map(|i| MetaphorCard {
                id: format!("card-{i}"),
                name: format!("Карта {i}"),
                image: String::new(),
                description: String::new(),
                meaning: CardMeaning {
                    upright: "Свет".to_string(),
                    reversed: Some("Тень".to_string()),
                },
                keywords: vec![],
                category: "Путь".to_string(),
                deck: Deck::Cosmic,
            })
            .collect()
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let original = deck(12);
        let mut rng = DrawRng::new(7);
        let shuffled = shuffle_deck(original.clone(), &mut rng);

        assert_eq!(shuffled.len(), original.len());
        let mut sorted_ids: Vec<&str> = shuffled.iter().map(|c| c.id.as_str()).collect();
        sorted_ids.sort();
        let mut expected: Vec<&str> = original.iter().map(|c| c.id.as_str()).collect();
        expected.sort();
        assert_eq!(sorted_ids, expected);
    }

    #[test]
    fn same_seed_same_order() {
        let cards = deck(12);
        let a = shuffle_deck(cards.clone(), &mut DrawRng::new(42));
        let b = shuffle_deck(cards, &mut DrawRng::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn draw_from_empty_deck_is_none() {
        assert_eq!(draw_card(&[], &mut DrawRng::new(1)), None);
    }

    #[test]
    fn reversed_rate_is_roughly_a_third() {
        let cards = deck(5);
        let mut rng = DrawRng::new(99);
        let reversed = (0..10_000)
            .filter(|_| draw_card(&cards, &mut rng).unwrap().reversed)
            .count();
        assert!((2_500..3_500).contains(&reversed), "got {reversed}");
    }
}
