//! Tests for game state transitions and their invariants.

use std::collections::HashSet;

use negamax_tictactoe::{Board, Cell, GameState, Outcome, Player, Position};
use proptest::prelude::*;

fn sorted(moves: &[Position]) -> Vec<Position> {
    let mut moves = moves.to_vec();
    moves.sort_unstable();
    moves
}

fn play(indices: &[usize]) -> GameState {
    let mut state = GameState::new();
    for &index in indices {
        state.try_play_index(index).expect("Valid move");
    }
    state
}

/// Plays `choices` (each taken modulo the number of legal moves) until the
/// game ends or the choices run out.
fn playout(choices: &[usize]) -> GameState {
    let mut state = GameState::new();
    for &choice in choices {
        if state.is_game_over() {
            break;
        }
        let moves = state.legal_moves();
        let mv = moves[choice % moves.len()];
        state.apply_move(mv);
    }
    state
}

fn collect_reachable(state: &mut GameState, seen: &mut HashSet<Board>) {
    seen.insert(state.board().clone());
    if state.is_game_over() {
        return;
    }
    let moves = state.legal_moves().to_vec();
    for mv in moves {
        let mut child = state.scoped_move(mv);
        collect_reachable(&mut child, seen);
    }
}

#[test]
fn test_row_win() {
    let state = play(&[0, 3, 1, 4, 2]);
    assert_eq!(state.winner(), Some(Player::X));
    assert_eq!(state.winner_sign(), 1);
    assert!(state.is_game_over());
    assert_eq!(state.outcome(), Some(Outcome::Winner(Player::X)));
}

#[test]
fn test_column_win_for_o() {
    let state = play(&[0, 1, 2, 4, 8, 7]);
    assert_eq!(state.winner(), Some(Player::O));
    assert_eq!(state.winner_sign(), -1);
}

#[test]
fn test_diagonal_win() {
    let state = play(&[0, 1, 4, 2, 8]);
    assert_eq!(state.winner(), Some(Player::X));
}

#[test]
fn test_draw() {
    let state = play(&[0, 4, 8, 1, 7, 6, 2, 5, 3]);
    assert_eq!(state.winner(), None);
    assert!(state.legal_moves().is_empty());
    assert!(state.is_game_over());
    assert_eq!(state.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_undo_clears_winner() {
    let mut state = play(&[0, 3, 1, 4]);
    state.apply_move(Position::TopRight);
    assert_eq!(state.winner(), Some(Player::X));
    state.undo_move(Position::TopRight);
    assert_eq!(state.winner(), None);
    assert_eq!(state.current_player(), Player::X);
    assert!(state.board().is_empty(Position::TopRight));
}

#[test]
fn test_reachable_positions() {
    let mut state = GameState::new();
    let mut seen = HashSet::new();
    collect_reachable(&mut state, &mut seen);
    assert_eq!(seen.len(), 5478);
    assert_eq!(state.board(), &Board::new());
    assert_eq!(sorted(state.legal_moves()), Position::ALL);
}

proptest! {
    #[test]
    fn prop_legal_moves_are_empty_cells(choices in proptest::collection::vec(0usize..9, 0..9)) {
        let state = playout(&choices);
        prop_assert_eq!(sorted(state.legal_moves()), state.board().empty_positions());
        prop_assert_eq!(state.moves_played() + state.legal_moves().len(), 9);
    }

    #[test]
    fn prop_apply_then_undo_restores(
        choices in proptest::collection::vec(0usize..9, 0..8),
        pick in 0usize..9,
    ) {
        let mut state = playout(&choices);
        prop_assume!(!state.is_game_over());

        let before = state.clone();
        let mv = state.legal_moves()[pick % state.legal_moves().len()];

        state.apply_move(mv);
        prop_assert_eq!(state.legal_moves().len(), before.legal_moves().len() - 1);
        prop_assert_eq!(state.board().get(mv), Cell::Occupied(before.current_player()));
        prop_assert_eq!(state.current_player(), before.current_player().opponent());

        state.undo_move(mv);
        prop_assert_eq!(state.board(), before.board());
        prop_assert_eq!(sorted(state.legal_moves()), sorted(before.legal_moves()));
        prop_assert_eq!(state.current_player(), before.current_player());
        prop_assert_eq!(state.winner(), before.winner());
    }

    #[test]
    fn prop_winner_matches_full_scan(choices in proptest::collection::vec(0usize..9, 0..9)) {
        const LINES: [[usize; 3]; 8] = [
            [0, 1, 2], [3, 4, 5], [6, 7, 8],
            [0, 3, 6], [1, 4, 7], [2, 5, 8],
            [0, 4, 8], [2, 4, 6],
        ];
        let state = playout(&choices);
        let cells = state.board().cells();
        let scanned = LINES.iter().find_map(|&[a, b, c]| match cells[a] {
            Cell::Occupied(p) if cells[b] == cells[a] && cells[c] == cells[a] => Some(p),
            _ => None,
        });
        prop_assert_eq!(state.winner(), scanned);
    }
}
