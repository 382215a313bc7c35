//! End-to-end tests for optimal action selection.

use std::collections::HashMap;
use strictly_minimax::{
    ALPHA_MIN, Action, BETA_MAX, Board, GameStatus, Player, RootWindow, SearchConfig, Searcher,
    Square, apply, current_player, initial_state, is_terminal, legal_actions, minimax_value,
    play_out, select_optimal_action, utility,
};

const X: Square = Square::Occupied(Player::X);
const O: Square = Square::Occupied(Player::O);
const E: Square = Square::Empty;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Plain minimax without pruning, memoized on the board.
fn exact_value(board: &Board, memo: &mut HashMap<Board, i32>) -> anyhow::Result<i32> {
    if let Some(value) = memo.get(board) {
        return Ok(*value);
    }
    let value = if is_terminal(board) {
        utility(board)
    } else {
        let mut values = Vec::new();
        for action in legal_actions(board) {
            values.push(exact_value(&apply(board, action)?, memo)?);
        }
        match current_player(board) {
            Player::X => values.into_iter().max().unwrap_or_default(),
            Player::O => values.into_iter().min().unwrap_or_default(),
        }
    };
    memo.insert(*board, value);
    Ok(value)
}

#[test]
fn test_empty_board_returns_legal_action() {
    init_tracing();
    let board = initial_state();
    let action = select_optimal_action(&board).expect("empty board has moves");
    assert!(legal_actions(&board).contains(&action));
}

#[test]
fn test_self_play_from_empty_board_draws() -> anyhow::Result<()> {
    init_tracing();
    let mut board = initial_state();
    let mut plies = 0;
    while let Some(action) = select_optimal_action(&board) {
        board = apply(&board, action)?;
        plies += 1;
        assert!(plies <= 9);
    }
    assert!(is_terminal(&board));
    assert_eq!(utility(&board), 0);
    Ok(())
}

#[test]
fn test_play_out_records_full_game() -> anyhow::Result<()> {
    init_tracing();
    for policy in [RootWindow::Threaded, RootWindow::Full] {
        let mut searcher = Searcher::new(SearchConfig::new(policy));
        let record = play_out(&initial_state(), &mut searcher)?;
        assert_eq!(*record.status(), GameStatus::Draw);
        assert_eq!(record.actions().len(), 9);
        assert_eq!(record.final_board().filled(), 9);
    }
    Ok(())
}

#[test]
fn test_play_out_on_terminal_board_is_empty() -> anyhow::Result<()> {
    let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
    let record = play_out(&board, &mut Searcher::default())?;
    assert!(record.actions().is_empty());
    assert_eq!(*record.status(), GameStatus::Won(Player::X));
    Ok(())
}

#[test]
fn test_x_takes_immediate_win() {
    // Two marks each, so X is to move.
    let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
    assert_eq!(current_player(&board), Player::X);
    assert_eq!(select_optimal_action(&board), Action::new(0, 2));
}

#[test]
fn test_o_takes_immediate_win() {
    // Winning beats blocking X's bottom row.
    let board = Board::from_rows([[E, X, E], [O, O, E], [X, X, E]]);
    assert_eq!(current_player(&board), Player::O);
    assert_eq!(select_optimal_action(&board), Action::new(1, 2));
}

#[test]
fn test_select_returns_none_on_terminal_boards() {
    let boards = [
        Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]),
        Board::from_rows([[X, X, O], [X, O, E], [O, E, E]]),
        Board::from_rows([[X, O, X], [O, X, X], [O, X, O]]),
    ];
    for board in boards {
        assert_eq!(select_optimal_action(&board), None, "{}", board);
    }
}

#[test]
fn test_pruned_value_matches_plain_minimax_everywhere() -> anyhow::Result<()> {
    let mut memo = HashMap::new();
    exact_value(&initial_state(), &mut memo)?;
    assert_eq!(memo[&initial_state()], 0);

    for (board, expected) in &memo {
        let player = current_player(board);
        assert_eq!(minimax_value(board, player, ALPHA_MIN, BETA_MAX), *expected, "{}", board);
    }
    Ok(())
}

#[test]
fn test_selected_action_is_optimal_everywhere() -> anyhow::Result<()> {
    let mut memo = HashMap::new();
    exact_value(&initial_state(), &mut memo)?;

    let mut searcher = Searcher::default();
    for (board, expected) in memo.iter().filter(|(b, _)| !is_terminal(b)) {
        let action = searcher.best_action(board).expect("non-terminal board");
        let child = apply(board, action)?;
        assert_eq!(memo[&child], *expected, "{}", board);
    }
    Ok(())
}

#[test]
fn test_optimal_player_never_loses_to_any_line() -> anyhow::Result<()> {
    // Engine as X against every O reply sequence.
    fn explore(board: &Board, searcher: &mut Searcher) -> anyhow::Result<()> {
        if is_terminal(board) {
            assert!(utility(board) >= 0, "{}", board);
            return Ok(());
        }
        match current_player(board) {
            Player::X => {
                let action = searcher.best_action(board).expect("non-terminal board");
                explore(&apply(board, action)?, searcher)
            }
            Player::O => {
                for action in legal_actions(board) {
                    explore(&apply(board, action)?, searcher)?;
                }
                Ok(())
            }
        }
    }
    explore(&initial_state(), &mut Searcher::default())
}

#[test]
fn test_evaluate_actions_on_empty_board_all_draw() {
    let scored = Searcher::default().evaluate_actions(&initial_state());
    assert_eq!(scored.len(), 9);
    assert!(scored.iter().all(|(_, value)| *value == 0));
}
