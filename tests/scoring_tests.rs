//! Scoring and steal-chain scenarios on hand-built boards.

use thunder_truth::board::Board;
use thunder_truth::core::{GameConfig, Operand, Player, PlayerId, Token, TokenId, TokenKind};
use thunder_truth::rules::{GameResult, RulesEngine, StealOutcome, ThunderTruthRules};

fn token(id: u32, kind: TokenKind, owner: u8) -> Token {
    Token::new(TokenId(id), kind, PlayerId::new(owner))
}

/// 5×5 board with row 1 reading `a, <first>, b, <empty>, c`.
fn chain_row(a: bool, first: Token, b: bool, c: bool) -> Board {
    let mut board = Board::new(5);
    board.place_operand(Operand(a), 1, 1).unwrap();
    board.place_token(first, 1, 2).unwrap();
    board.place_operand(Operand(b), 1, 3).unwrap();
    board.place_operand(Operand(c), 1, 5).unwrap();
    board
}

fn players_with(points: &[i64]) -> Vec<Player> {
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let mut player = Player::new(PlayerId::new(i as u8), format!("p{i}"));
            player.add_points(p);
            player
        })
        .collect()
}

/// AND on the left edge of a 3×3 board: only the pairs without the stub count.
#[test]
fn test_edge_token_scores_interior_pairs() {
    let mut board = Board::new(3);
    board.place_operand(Operand::TRUE, 1, 1).unwrap();
    board.place_operand(Operand::FALSE, 3, 1).unwrap();
    board.place_operand(Operand::TRUE, 2, 2).unwrap();
    board.place_token(token(0, TokenKind::And, 0), 2, 1).unwrap();

    // (up,right) = 1^1 is the only true pair; (up,down) and (right,down) are false.
    let rules = ThunderTruthRules;
    assert_eq!(rules.count_points(&board, 2, 1), Ok(1));

    let pairs = rules.scored_pairs(&board, 2, 1).unwrap();
    assert_eq!(pairs.len(), 3);
}

/// OR surrounded by falses scores nothing; flipping one neighbor scores three.
#[test]
fn test_or_counts_pairs_touching_the_true_neighbor() {
    let mut board = Board::new(3);
    for (row, col) in [(1, 2), (3, 2), (2, 1)] {
        board.place_operand(Operand::FALSE, row, col).unwrap();
    }
    board.place_operand(Operand::TRUE, 2, 3).unwrap();
    board.place_token(token(0, TokenKind::Or, 0), 2, 2).unwrap();

    // right=1 appears in (up,right), (left,right), (right,down)
    assert_eq!(ThunderTruthRules.count_points(&board, 2, 2), Ok(3));
}

/// Opponent's AND then my XOR: (1 AND 0) XOR 1 = 1, so I steal.
#[test]
fn test_horizontal_chain_steals() {
    let mut board = chain_row(true, token(0, TokenKind::And, 0), false, true);
    board.place_token(token(1, TokenKind::Xor, 1), 1, 4).unwrap();

    assert_eq!(
        ThunderTruthRules.exclude_and_steal_points(&board, 1, 4),
        Some(StealOutcome {
            opponent: PlayerId::new(0),
            mover: PlayerId::new(1),
        })
    );
}

#[test]
fn test_chain_with_false_result_does_not_steal() {
    // (1 OR 0) XOR 1 = 0
    let mut board = chain_row(true, token(0, TokenKind::Or, 0), false, true);
    board.place_token(token(1, TokenKind::Xor, 1), 1, 4).unwrap();
    assert_eq!(ThunderTruthRules.exclude_and_steal_points(&board, 1, 4), None);
}

#[test]
fn test_chain_between_own_tokens_does_not_steal() {
    let mut board = chain_row(true, token(0, TokenKind::And, 1), false, true);
    board.place_token(token(1, TokenKind::Xor, 1), 1, 4).unwrap();
    assert_eq!(ThunderTruthRules.exclude_and_steal_points(&board, 1, 4), None);
}

#[test]
fn test_chain_needs_xor_as_placed_token() {
    let mut board = chain_row(true, token(0, TokenKind::And, 0), false, true);
    board.place_token(token(1, TokenKind::Or, 1), 1, 4).unwrap();
    assert_eq!(ThunderTruthRules.exclude_and_steal_points(&board, 1, 4), None);
}

/// Column 2 top to bottom: 0, IMP, 0, XOR, 0 gives (0 => 0) XOR 0 = 1.
#[test]
fn test_vertical_chain_steals() {
    let mut board = Board::new(5);
    board.place_operand(Operand::FALSE, 1, 2).unwrap();
    board.place_token(token(0, TokenKind::Imp, 1), 2, 2).unwrap();
    board.place_operand(Operand::FALSE, 3, 2).unwrap();
    board.place_operand(Operand::FALSE, 5, 2).unwrap();
    board.place_token(token(1, TokenKind::Xor, 0), 4, 2).unwrap();

    assert_eq!(
        ThunderTruthRules.exclude_and_steal_points(&board, 4, 2),
        Some(StealOutcome {
            opponent: PlayerId::new(1),
            mover: PlayerId::new(0),
        })
    );
}

/// A chain that would run past the right edge is skipped.
#[test]
fn test_chain_near_edge_is_skipped() {
    let mut board = Board::new(5);
    board.place_operand(Operand::TRUE, 1, 2).unwrap();
    board.place_token(token(0, TokenKind::And, 0), 1, 3).unwrap();
    board.place_operand(Operand::FALSE, 1, 4).unwrap();
    board.place_token(token(1, TokenKind::Xor, 1), 1, 5).unwrap();
    assert_eq!(ThunderTruthRules.exclude_and_steal_points(&board, 1, 5), None);
}

#[test]
fn test_check_winner_needs_full_board() {
    let rules = ThunderTruthRules;
    let players = players_with(&[5, 2]);

    let mut board = Board::new(1);
    assert!(rules.check_winner(&board, &players).is_none());

    board.place_token(token(0, TokenKind::And, 0), 1, 1).unwrap();
    assert!(rules.is_board_full(&board));
    let winner = rules.check_winner(&board, &players).unwrap();
    assert_eq!(winner.id(), PlayerId::new(0));
    assert_eq!(
        rules.outcome(&board, &players),
        Some(GameResult::Winner(PlayerId::new(0)))
    );
}

#[test]
fn test_tied_scores_are_a_draw() {
    let rules = ThunderTruthRules;
    let players = players_with(&[3, 3]);
    let mut board = Board::new(1);
    board.place_token(token(0, TokenKind::Or, 1), 1, 1).unwrap();

    assert!(rules.check_winner(&board, &players).is_none());
    assert_eq!(rules.outcome(&board, &players), Some(GameResult::Draw));
}

#[test]
fn test_outcome_waits_while_play_continues() {
    let rules = ThunderTruthRules;
    let mut players = players_with(&[1, 0]);
    players[1].add_token(token(0, TokenKind::And, 1));
    let board = Board::new(GameConfig::default().board_size);

    assert!(rules.are_tokens_left(&players));
    assert_eq!(rules.outcome(&board, &players), None);

    players[1].clear_tokens();
    assert!(!rules.are_tokens_left(&players));
    assert_eq!(
        rules.outcome(&board, &players),
        Some(GameResult::Winner(PlayerId::new(0)))
    );
}
