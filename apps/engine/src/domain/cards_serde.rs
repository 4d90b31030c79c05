//! Serialization and deserialization for card types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Rank, Slot, Suit};

// Suit serde: canonical names out, any accepted representation in.
impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.canonical_name())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Suit::normalize(&s).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.token().to_string())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rank::ALL
            .into_iter()
            .find(|r| r.token().to_string() == s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid rank: {s}")))
    }
}

// Card serde (compact 2-character format like "4C", "7H")
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.token())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

// Slot serde: "EMPTY", "FOLD" or a card token.
impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Slot::Empty => serializer.serialize_str("EMPTY"),
            Slot::Folded => serializer.serialize_str("FOLD"),
            Slot::Played(card) => serializer.serialize_str(&card.token()),
        }
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "EMPTY" => Ok(Slot::Empty),
            "FOLD" => Ok(Slot::Folded),
            token => token
                .parse::<Card>()
                .map(Slot::Played)
                .map_err(|e| serde::de::Error::custom(e.to_string())),
        }
    }
}
