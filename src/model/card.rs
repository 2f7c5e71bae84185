use crate::model::Id;
use serde::{Deserialize, Serialize};

/// Which physical deck a metaphor card belongs to. The content store keeps
/// one collection per deck; this discriminator drives add/update routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Deck {
    #[default]
    #[serde(rename = "cosmic")]
    Cosmic,
    #[serde(rename = "archangels")]
    Archangels,
    #[serde(rename = "amu-mom")]
    AmuMom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMeaning {
    pub upright: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaphorCard {
    pub id: Id,
    pub name: String,
    pub image: String,
    pub description: String,
    pub meaning: CardMeaning,
    pub keywords: Vec<String>,
    pub category: String,
    pub deck: Deck,
}

/// Static metadata describing one of the three decks. Reference data only;
/// never mutated by the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDeck {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub author: String,
    pub author_image: String,
    pub cover_image: String,
    pub card_count: u32,
    #[serde(rename = "type")]
    pub deck_type: Deck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_uses_kebab_wire_names() {
        assert_eq!(serde_json::to_string(&Deck::AmuMom).unwrap(), "\"amu-mom\"");
        assert_eq!(
            serde_json::from_str::<Deck>("\"archangels\"").unwrap(),
            Deck::Archangels
        );
    }

    #[test]
    fn reversed_meaning_is_omitted_when_absent() {
        let meaning = CardMeaning {
            upright: "Начало пути".to_string(),
            reversed: None,
        };
        let json = serde_json::to_string(&meaning).unwrap();
        assert!(!json.contains("reversed"));
    }
}
