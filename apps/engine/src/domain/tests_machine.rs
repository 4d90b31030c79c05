use crate::domain::commands::Command;
use crate::domain::rules::TieBreakRule;
use crate::domain::state::{HandEndReason, Team};
use crate::domain::test_state_helpers::{
    apply, game_with_hands, play_all, replace_hands, step, TEST_GAME,
};
use crate::domain::truco::Stake;
use crate::errors::ErrorCode;
use crate::events::model::{EventKind, EventPayload};

const HANDS: [[&str; 3]; 4] = [
    ["3H", "4H", "QC"],
    ["KH", "2S", "5D"],
    ["QH", "5S", "4C"],
    ["JH", "6S", "6D"],
];

fn kinds(events: &[crate::events::DomainEvent]) -> Vec<EventKind> {
    events.iter().map(|e| e.kind()).collect()
}

#[test]
fn start_game_deals_and_emits_start_events() {
    let t = apply(None, Command::start_game(TEST_GAME, Some("  Ana "))).unwrap();
    assert_eq!(kinds(&t.events), vec![EventKind::GameStarted, EventKind::HandStarted]);
    assert_eq!(t.state.players[0].name, "Ana");
    assert_eq!(t.state.players[3].name, "Bot 3");
    assert_eq!(t.state.dealer, 3);
    assert_eq!(t.state.turn, Some(0));
    assert_eq!(t.state.hand.stake, Stake::Base);
    assert_eq!(t.state.version, 1);
    assert!(t.state.players.iter().all(|p| p.cards_left() == 3));
}

#[test]
fn blank_player_name_falls_back() {
    let t = apply(None, Command::start_game(TEST_GAME, Some("   "))).unwrap();
    assert_eq!(t.state.players[0].name, "Player");
}

#[test]
fn accepted_truco_hand_pays_four() {
    let mut state = apply(None, Command::start_game(TEST_GAME, None)).unwrap().state;
    replace_hands(&mut state, HANDS);

    let called = step(&state, Command::call_truco(TEST_GAME, 0));
    assert_eq!(kinds(&called.events), vec![EventKind::TrucoCalled]);
    assert_eq!(called.state.turn, Some(0));
    let err = apply(Some(&called.state), Command::play_card(TEST_GAME, 0, 0)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidCommandForState);

    let accepted = step(&called.state, Command::accept_truco(TEST_GAME, 1));
    assert_eq!(accepted.state.hand.stake, Stake::Truco);
    assert!(accepted.state.hand.pending.is_none());
    assert_eq!(accepted.state.turn, Some(0), "card play resumes from the same seat");

    let done = play_all(
        &accepted.state,
        &["3H", "KH", "QH", "JH", "4H", "2S", "5S", "6S", "5D", "4C", "6D", "QC"],
    );
    assert_eq!(done.scores(), [4, 0]);
    assert_eq!(done.hand.number, 2);
    assert_eq!(done.hand.stake, Stake::Base);
    assert_eq!(done.dealer, 0);
    assert_eq!(done.turn, Some(1));
}

#[test]
fn last_play_emits_round_hand_and_next_hand_events() {
    let state = game_with_hands(HANDS, TieBreakRule::default());
    let before_last = play_all(
        &state,
        &["3H", "KH", "QH", "JH", "4H", "2S", "5S", "6S", "5D", "4C", "6D"],
    );
    let t = step(&before_last, Command::play_card(TEST_GAME, 0, 2));
    assert_eq!(
        kinds(&t.events),
        vec![
            EventKind::CardPlayed,
            EventKind::RoundResolved,
            EventKind::HandResolved,
            EventKind::HandStarted,
        ]
    );
    match &t.events[2].payload {
        EventPayload::HandResolved {
            winner,
            points,
            scores,
            ..
        } => {
            assert_eq!(*winner, Some(Team::A));
            assert_eq!(*points, 2);
            assert_eq!(*scores, [2, 0]);
        }
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn surrender_during_raise_to_eight_pays_four() {
    let state = game_with_hands(HANDS, TieBreakRule::default());
    let s = step(&state, Command::call_truco(TEST_GAME, 0)).state;
    let s = step(&s, Command::accept_truco(TEST_GAME, 3)).state;
    assert_eq!(s.hand.stake, Stake::Truco);

    // The call was answered, so team A could raise its own call on its turn.
    let again = step(&s, Command::call_truco(TEST_GAME, 0));
    assert_eq!(again.state.hand.pending.unwrap().requested, Stake::Seis);
    let err = apply(Some(&again.state), Command::call_truco(TEST_GAME, 2)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IllegalStakeEscalation);

    let s = play_all(&s, &["3H"]);
    let raised = step(&s, Command::call_truco(TEST_GAME, 1));
    let pending = raised.state.hand.pending.unwrap();
    assert_eq!(pending.requested, Stake::Seis);
    assert_eq!(pending.calling_team, Team::B);

    let t = step(&raised.state, Command::surrender_truco(TEST_GAME, 2));
    assert_eq!(
        kinds(&t.events),
        vec![
            EventKind::TrucoSurrendered,
            EventKind::HandResolved,
            EventKind::HandStarted,
        ]
    );
    match &t.events[0].payload {
        EventPayload::TrucoSurrendered {
            seat,
            stake,
            winner,
            snapshot,
            ..
        } => {
            assert_eq!(*seat, 2);
            assert_eq!(*stake, Stake::Truco);
            assert_eq!(*winner, Team::B);
            assert_eq!(snapshot.scores(), [0, 4]);
            assert_eq!(snapshot.hand.number, 1);
        }
        other => panic!("unexpected payload {other:?}"),
    }
    assert_eq!(t.state.scores(), [0, 4]);
    assert_eq!(t.state.hand.number, 2);
    assert_eq!(t.state.hand.stake, Stake::Base);
    assert_eq!(t.state.dealer, 0);
}

#[test]
fn counter_raise_locks_pending_stake() {
    let state = game_with_hands(HANDS, TieBreakRule::default());
    let s = step(&state, Command::call_truco(TEST_GAME, 0)).state;
    let t = step(&s, Command::call_truco(TEST_GAME, 3));
    match &t.events[0].payload {
        EventPayload::TrucoCalled {
            locked,
            requested,
            counter_raise,
            ..
        } => {
            assert_eq!(*locked, Stake::Truco);
            assert_eq!(*requested, Stake::Seis);
            assert!(*counter_raise);
        }
        other => panic!("unexpected payload {other:?}"),
    }

    // Either seat of team A may answer; seat 2 raises to twelve.
    let s = step(&t.state, Command::call_truco(TEST_GAME, 2)).state;
    assert_eq!(s.hand.stake, Stake::Seis);
    assert_eq!(s.hand.pending.unwrap().requested, Stake::Doze);
    assert_eq!(
        s.hand.stake_history,
        vec![Stake::Base, Stake::Truco, Stake::Seis]
    );

    let s = step(&s, Command::accept_truco(TEST_GAME, 1)).state;
    assert_eq!(s.hand.stake, Stake::Doze);
    let err = apply(Some(&s), Command::call_truco(TEST_GAME, 0)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IllegalStakeEscalation);
}

#[test]
fn wrong_team_cannot_answer_a_call() {
    let state = game_with_hands(HANDS, TieBreakRule::default());
    let s = step(&state, Command::call_truco(TEST_GAME, 0)).state;
    for cmd in [
        Command::accept_truco(TEST_GAME, 2),
        Command::surrender_truco(TEST_GAME, 0),
    ] {
        assert_eq!(apply(Some(&s), cmd).unwrap_err().code(), ErrorCode::WrongActor);
    }
    // Calling team waits for the answer.
    assert_eq!(
        apply(Some(&s), Command::call_truco(TEST_GAME, 2)).unwrap_err().code(),
        ErrorCode::IllegalStakeEscalation
    );
}

#[test]
fn opening_call_only_from_seat_to_act() {
    let state = game_with_hands(HANDS, TieBreakRule::default());
    let err = apply(Some(&state), Command::call_truco(TEST_GAME, 1)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::WrongActor);
}

#[test]
fn hand_surrender_pays_locked_stake_to_opponents() {
    let state = game_with_hands(HANDS, TieBreakRule::default());
    let s = step(&state, Command::call_truco(TEST_GAME, 0)).state;
    let err = apply(Some(&s), Command::surrender_hand(TEST_GAME, 1)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidCommandForState);

    let s = step(&s, Command::accept_truco(TEST_GAME, 1)).state;
    let t = step(&s, Command::surrender_hand(TEST_GAME, 3));
    assert_eq!(kinds(&t.events)[0], EventKind::HandSurrendered);
    assert_eq!(t.state.scores(), [4, 0]);
    assert_eq!(
        t.state.previous_hand.unwrap().outcome.reason,
        HandEndReason::HandSurrendered
    );
}

#[test]
fn reaching_twelve_ends_the_game() {
    let mut state = game_with_hands(HANDS, TieBreakRule::default());
    state.teams[Team::A.index()].score = 10;

    let t = step(&state, Command::surrender_hand(TEST_GAME, 1));
    assert_eq!(
        kinds(&t.events),
        vec![
            EventKind::HandSurrendered,
            EventKind::HandResolved,
            EventKind::GameWon,
        ]
    );
    assert!(t.state.terminal);
    assert_eq!(t.state.winner, Some(Team::A));
    assert_eq!(t.state.turn, None);

    for cmd in [
        Command::play_card(TEST_GAME, 0, 0),
        Command::call_truco(TEST_GAME, 1),
        Command::surrender_hand(TEST_GAME, 2),
    ] {
        let err = apply(Some(&t.state), cmd).unwrap_err();
        assert_eq!(err.code(), ErrorCode::GameAlreadyTerminal);
    }

    let restarted = apply(Some(&t.state), Command::start_game(TEST_GAME, None)).unwrap();
    assert!(!restarted.state.terminal);
    assert_eq!(restarted.state.scores(), [0, 0]);
    assert!(restarted.state.version > t.state.version);
}

#[test]
fn rejection_leaves_state_untouched() {
    let state = game_with_hands(HANDS, TieBreakRule::default());
    let before = state.clone();
    assert!(apply(Some(&state), Command::play_card(TEST_GAME, 2, 0)).is_err());
    assert_eq!(state, before);
}

#[test]
fn version_increments_per_applied_command() {
    let state = game_with_hands(HANDS, TieBreakRule::default());
    let a = step(&state, Command::call_truco(TEST_GAME, 0)).state;
    let b = step(&a, Command::accept_truco(TEST_GAME, 1)).state;
    assert_eq!(a.version, state.version + 1);
    assert_eq!(b.version, state.version + 2);
}

#[test]
fn dealing_is_deterministic_for_a_seed() {
    let a = apply(None, Command::start_game(TEST_GAME, None)).unwrap().state;
    let b = apply(None, Command::start_game(TEST_GAME, None)).unwrap().state;
    assert_eq!(a.players, b.players);
}
