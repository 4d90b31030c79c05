//! Core card-related types: Card, Rank, Suit and the round Slot sentinel.

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

/// Ranks of the 40-card deck, declared weakest to strongest for ordinary cards.
///
/// The fixed manilhas (4♣, 7♥, A♠, 7♦) override this order; see
/// [`crate::domain::cards_logic::card_strength`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Four,
    Five,
    Six,
    Seven,
    Queen,
    Jack,
    King,
    Ace,
    Two,
    Three,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }
}

// Note: Ord on Card is only for stable sorting: suit order C<D<H<S then rank order.
// Round resolution compares strengths, never this ordering.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// What a seat has put on the table in the current round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Slot {
    /// Nothing played yet.
    #[default]
    Empty,
    /// Card played face down; loses to everything.
    Folded,
    Played(Card),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn card(&self) -> Option<Card> {
        match self {
            Slot::Played(card) => Some(*card),
            Slot::Empty | Slot::Folded => None,
        }
    }
}
