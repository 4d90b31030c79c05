use serde::{Deserialize, Serialize};

use crate::domain::dealing::deal_hands;
use crate::domain::rules::{TieBreakRule, PLAYERS};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::truco::{PendingCall, Stake};
use crate::domain::{Card, Slot};
use crate::errors::domain::DomainError;

pub type GameId = i64;
pub type Seat = u8; // 0..=3, seat 0 is the human player

/// Partnership by seat parity: A = seats {0, 2}, B = seats {1, 3}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    pub fn of_seat(seat: Seat) -> Team {
        if seat % 2 == 0 {
            Team::A
        } else {
            Team::B
        }
    }

    pub fn opponent(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Team::A => 0,
            Team::B => 1,
        }
    }

    pub fn seats(self) -> [Seat; 2] {
        match self {
            Team::A => [0, 2],
            Team::B => [1, 3],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub seat: Seat,
    pub name: String,
    pub team: Team,
    /// Cards in deal order; `None` once played. `PlayCard` indexes into this.
    pub hand: Vec<Option<Card>>,
    /// Rounds this seat has won over the whole game.
    pub rounds_won: u16,
}

impl Player {
    pub fn new(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            team: Team::of_seat(seat),
            hand: Vec::new(),
            rounds_won: 0,
        }
    }

    /// Unplayed cards with their hand index.
    pub fn remaining_cards(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.hand
            .iter()
            .enumerate()
            .filter_map(|(idx, card)| card.map(|c| (idx, c)))
    }

    pub fn cards_left(&self) -> usize {
        self.hand.iter().filter(|c| c.is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamState {
    pub team: Team,
    pub seats: [Seat; 2],
    pub score: u16,
}

impl TeamState {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            seats: team.seats(),
            score: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RoundOutcome {
    Won { seat: Seat, team: Team },
    Tied,
}

impl RoundOutcome {
    pub fn winning_team(&self) -> Option<Team> {
        match self {
            RoundOutcome::Won { team, .. } => Some(*team),
            RoundOutcome::Tied => None,
        }
    }
}

/// A single trick within a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number within the hand.
    pub number: u8,
    /// Seat that played first in this round.
    pub leader: Seat,
    /// One slot per seat, indexed by seat.
    pub slots: [Slot; PLAYERS],
    pub outcome: Option<RoundOutcome>,
}

impl Round {
    pub fn new(number: u8, leader: Seat) -> Self {
        Self {
            number,
            leader,
            slots: [Slot::Empty; PLAYERS],
            outcome: None,
        }
    }

    pub fn plays_made(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.plays_made() == PLAYERS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandEndReason {
    /// Decided by round results.
    Rounds,
    /// Responding team refused a truco call or raise.
    TrucoSurrendered,
    /// A team gave up the hand outright.
    HandSurrendered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandOutcome {
    /// `None` for a drawn hand.
    pub winner: Option<Team>,
    pub points: u8,
    pub reason: HandEndReason,
}

/// One deal, contested for the current stake over up to three rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// 1-based hand number.
    pub number: u32,
    pub dealer: Seat,
    /// Seat left of the dealer; leads round 1.
    pub first_seat: Seat,
    /// Locked-in stake.
    pub stake: Stake,
    /// Unanswered call or raise, if any.
    pub pending: Option<PendingCall>,
    /// Team that made the most recent call or raise this hand.
    pub last_raiser: Option<Team>,
    /// Every stake this hand has locked in, in order, starting at the base.
    pub stake_history: Vec<Stake>,
    pub rounds: Vec<Round>,
    pub outcome: Option<HandOutcome>,
}

impl Hand {
    pub fn new(number: u32, dealer: Seat) -> Self {
        let first_seat = round_start_seat(dealer);
        Self {
            number,
            dealer,
            first_seat,
            stake: Stake::Base,
            pending: None,
            last_raiser: None,
            stake_history: vec![Stake::Base],
            rounds: vec![Round::new(1, first_seat)],
            outcome: None,
        }
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn current_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.last_mut()
    }

    /// Outcomes of the rounds resolved so far.
    pub fn round_results(&self) -> Vec<RoundOutcome> {
        self.rounds.iter().filter_map(|r| r.outcome).collect()
    }

    pub(crate) fn lock_stake(&mut self, stake: Stake) {
        self.stake = stake;
        self.stake_history.push(stake);
    }
}

/// Summary of the most recently completed hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousHand {
    pub number: u32,
    pub dealer: Seat,
    pub outcome: HandOutcome,
    pub rounds: Vec<Round>,
}

/// Root aggregate: everything the state machine needs for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub game_id: GameId,
    /// Base seed; each hand is dealt from a seed derived from it.
    pub seed: u64,
    pub players: [Player; PLAYERS],
    pub teams: [TeamState; 2],
    /// Dealer of the current hand.
    pub dealer: Seat,
    pub hand: Hand,
    /// Number of completed hands.
    pub hands_played: u32,
    /// Seat expected to play a card. Card play is suspended while a call is pending.
    pub turn: Option<Seat>,
    pub winning_score: u16,
    pub tie_break: TieBreakRule,
    pub terminal: bool,
    pub winner: Option<Team>,
    /// Incremented once per applied command.
    pub version: u64,
    pub previous_hand: Option<PreviousHand>,
}

impl GameState {
    /// Seat players, then deal hand 1 with `dealer` dealing.
    pub fn new(
        game_id: GameId,
        seed: u64,
        player_name: &str,
        dealer: Seat,
        winning_score: u16,
        tie_break: TieBreakRule,
    ) -> Self {
        let players = [
            Player::new(0, player_name),
            Player::new(1, "Bot 1"),
            Player::new(2, "Bot 2"),
            Player::new(3, "Bot 3"),
        ];
        let mut state = Self {
            game_id,
            seed,
            players,
            teams: [TeamState::new(Team::A), TeamState::new(Team::B)],
            dealer,
            hand: Hand::new(1, dealer),
            hands_played: 0,
            turn: None,
            winning_score,
            tie_break,
            terminal: false,
            winner: None,
            version: 0,
            previous_hand: None,
        };
        state.begin_hand(1, dealer);
        state
    }

    /// Reset the hand to `number`, deal fresh cards and hand the turn to the
    /// seat left of `dealer`.
    pub(crate) fn begin_hand(&mut self, number: u32, dealer: Seat) {
        let hands = deal_hands(derive_dealing_seed(self.seed, number));
        for (player, cards) in self.players.iter_mut().zip(hands) {
            player.hand = cards.into_iter().map(Some).collect();
        }
        self.dealer = dealer;
        self.hand = Hand::new(number, dealer);
        self.turn = Some(self.hand.first_seat);
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat as usize)
    }

    pub fn team(&self, team: Team) -> &TeamState {
        &self.teams[team.index()]
    }

    pub fn scores(&self) -> [u16; 2] {
        [self.teams[0].score, self.teams[1].score]
    }
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % PLAYERS as Seat
}

/// Hand-start seat (player to the left of the dealer).
#[inline]
pub fn round_start_seat(dealer: Seat) -> Seat {
    next_seat(dealer)
}

pub fn require_turn(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state
        .turn
        .ok_or_else(|| DomainError::corruption(format!("Invariant violated: turn must be set ({ctx})")))
}

pub fn require_round<'a>(state: &'a GameState, ctx: &'static str) -> Result<&'a Round, DomainError> {
    state.hand.current_round().ok_or_else(|| {
        DomainError::corruption(format!("Invariant violated: hand has no round ({ctx})"))
    })
}
