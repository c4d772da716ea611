//! Round orchestration.
//!
//! A `Session` owns the board, the players and the rules, and walks a round
//! through `Setup → InProgress → Complete`:
//!
//! - **Setup**: players join and receive their tokens
//! - **InProgress**: players alternate; each move is validated, placed,
//!   scored and steal-checked as one unit
//! - **Complete**: the board is full or the hands are empty
//!
//! A failed move changes nothing, so the caller can simply ask the same
//! player again.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::core::{
    GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap, Result, Token, TokenId,
    TokenKind,
};
use crate::rules::{GameResult, RulesEngine, StealOutcome, ThunderTruthRules};

/// Round phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    InProgress,
    Complete,
}

impl Phase {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Setup => "in setup",
            Phase::InProgress => "in progress",
            Phase::Complete => "complete",
        }
    }
}

/// A move that went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Round number, starting at 0.
    pub round: u32,
    pub player: PlayerId,
    pub token: Token,
    pub row: usize,
    pub col: usize,
    /// Points from the neighbor pairs.
    pub points: u32,
    /// Steal chain that fired, if any.
    pub steal: Option<StealOutcome>,
}

/// What a successful move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    /// Phase after the move.
    pub phase: Phase,
    /// Set once the move ended the round.
    pub result: Option<GameResult>,
}

/// One table: board, players and rules.
pub struct Session<R: RulesEngine = ThunderTruthRules> {
    config: GameConfig,
    rules: R,
    board: Board,
    players: PlayerMap<Player>,
    current: PlayerId,
    phase: Phase,
    round: u32,
    next_token_id: TokenId,
    history: Vector<MoveRecord>,
}

impl Session<ThunderTruthRules> {
    /// Session with the standard rules.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::new(config, ThunderTruthRules)
    }
}

impl<R: RulesEngine> Session<R> {
    /// Create a session in `Setup`.
    ///
    /// Panics if the config breaks its invariants.
    #[must_use]
    pub fn new(config: GameConfig, rules: R) -> Self {
        if let Err(msg) = config.validate() {
            panic!("{msg}");
        }
        Self {
            board: Board::new(config.board_size),
            config,
            rules,
            players: PlayerMap::new(),
            current: PlayerId::new(0),
            phase: Phase::Setup,
            round: 0,
            next_token_id: TokenId::new(0),
            history: Vector::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seated players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.players.as_slice()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Round number, starting at 0.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Every move made in this session, across rounds.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Outcome of the finished round.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.phase != Phase::Complete {
            return None;
        }
        self.rules
            .outcome(&self.board, self.players.as_slice())
            .or(Some(GameResult::Draw))
    }

    /// Winning player of the finished round.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self.result()? {
            GameResult::Winner(id) => self.players.get(id),
            GameResult::Draw => None,
        }
    }

    // === Setup ===

    /// Seat a new player.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId> {
        self.require(Phase::Setup)?;
        let limit = self.config.players_amount;
        if self.players.player_count() >= limit {
            return Err(GameError::PlayerLimit { limit });
        }

        let id = PlayerId::new(self.players.player_count() as u8);
        let player = Player::new(id, name);
        info!(player = %id, name = %player.name, "player joined");
        self.players.push(player);
        Ok(id)
    }

    /// Deal fresh tokens of the given kinds to a player, replacing the hand.
    pub fn assign_tokens(&mut self, player: PlayerId, kinds: &[TokenKind]) -> Result<()> {
        self.require(Phase::Setup)?;
        let expected = self.config.initial_tokens_per_player;
        if kinds.len() != expected {
            return Err(GameError::TokenCount {
                expected,
                got: kinds.len(),
            });
        }
        if self.players.get(player).is_none() {
            return Err(GameError::UnknownPlayer { player });
        }

        let mut tokens = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            tokens.push(Token::new(self.next_token_id, kind, player));
            self.next_token_id = self.next_token_id.next();
        }
        debug!(%player, ?kinds, "dealt tokens");
        self.players[player].set_tokens(tokens);
        Ok(())
    }

    /// Seed the board and begin play.
    ///
    /// Every seat must be filled and every hand dealt.
    pub fn start(&mut self, seed: u64) -> Result<()> {
        self.require(Phase::Setup)?;
        let expected = self.config.players_amount;
        let got = self.players.player_count();
        if got != expected {
            return Err(GameError::MissingPlayers { expected, got });
        }
        let tokens = self.config.initial_tokens_per_player;
        if let Some(player) = self.players.values().find(|p| p.tokens().len() != tokens) {
            return Err(GameError::TokenCount {
                expected: tokens,
                got: player.tokens().len(),
            });
        }

        let mut rng = GameRng::for_round(seed, self.round);
        self.board.setup(&mut rng);
        self.current = PlayerId::new(0);
        self.phase = Phase::InProgress;
        info!(round = self.round, seed, "round started");

        // Nothing to play with: the round is over before it began.
        self.finish_if_over();
        Ok(())
    }

    /// Reset for another round: points, hands and board are cleared.
    pub fn start_next_round(&mut self) -> Result<()> {
        self.require(Phase::Complete)?;
        for player in self.players.values_mut() {
            player.reset_points();
            player.clear_tokens();
        }
        self.board = Board::new(self.config.board_size);
        self.round += 1;
        self.current = PlayerId::new(0);
        self.phase = Phase::Setup;
        info!(round = self.round, "new round");
        Ok(())
    }

    // === Play ===

    /// Play the current player's token at hand position `token_index`
    /// (0-based) into `(row, col)`.
    pub fn play_move(&mut self, token_index: usize, row: usize, col: usize) -> Result<MoveOutcome> {
        self.require(Phase::InProgress)?;
        let player = &self.players[self.current];
        let token = *player.token_at(token_index).ok_or(GameError::TokenIndex {
            index: token_index,
            hand_size: player.tokens().len(),
        })?;
        self.play_token(self.current, token, row, col)
    }

    /// Play `token` for `player` into `(row, col)`.
    ///
    /// Validate, place, score, steal-check, then hand the turn on. The
    /// session is untouched if any step fails.
    pub fn play_token(
        &mut self,
        player: PlayerId,
        token: Token,
        row: usize,
        col: usize,
    ) -> Result<MoveOutcome> {
        self.require(Phase::InProgress)?;
        if player != self.current {
            return Err(GameError::NotYourTurn { player });
        }
        let mover = &self.players[player];
        let held = mover.tokens().iter().find(|t| t.id == token.id);
        if held != Some(&token) || !self.rules.is_token_owned_by(mover, &token) {
            return Err(GameError::Ownership {
                player,
                token: token.id,
            });
        }

        // Work on a snapshot and commit only once everything succeeded.
        let mut board = self.board.clone();
        board.place_token(token, row, col)?;
        let points = self.rules.count_points(&board, row, col)?;
        let steal = self.rules.exclude_and_steal_points(&board, row, col);

        self.board = board;
        self.players[player].add_points(i64::from(points));
        if let Some(outcome) = steal {
            apply_steal(&mut self.players, outcome);
        }
        self.players[player].pop_token(token.id);

        let record = MoveRecord {
            round: self.round,
            player,
            token,
            row,
            col,
            points,
            steal,
        };
        self.history.push_back(record);
        debug!(
            %player,
            row,
            col,
            kind = %token.kind,
            points,
            total = self.players[player].points(),
            "move applied"
        );

        if !self.finish_if_over() {
            self.switch_player();
        }

        Ok(MoveOutcome {
            record,
            phase: self.phase,
            result: self.result(),
        })
    }

    /// Pass the turn to the next player who still holds tokens.
    fn switch_player(&mut self) {
        let count = self.players.player_count();
        for step in 1..=count {
            let next = PlayerId::new(((self.current.index() + step) % count) as u8);
            if self.players[next].has_tokens() {
                self.current = next;
                debug!(player = %next, "turn passed");
                return;
            }
        }
    }

    /// Move to `Complete` if the board is full or the hands are empty.
    fn finish_if_over(&mut self) -> bool {
        let players = self.players.as_slice();
        if self.rules.is_board_full(&self.board) || !self.rules.are_tokens_left(players) {
            self.phase = Phase::Complete;
            info!(round = self.round, result = ?self.result(), "round complete");
            true
        } else {
            false
        }
    }

    fn require(&self, phase: Phase) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                phase: self.phase.name(),
            })
        }
    }
}

/// Pay out a fired chain: the opponent loses a point (never below 0), the
/// mover gains one.
pub fn apply_steal(players: &mut PlayerMap<Player>, steal: StealOutcome) {
    let StealOutcome { opponent, mover } = steal;
    if let Some(loser) = players.get_mut(opponent) {
        loser.add_points(-1);
    }
    if let Some(gainer) = players.get_mut(mover) {
        gainer.add_points(1);
    }
    debug!(%opponent, %mover, "steal chain fired");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operand;

    fn ready_session(seed: u64) -> Session {
        let config = GameConfig::new().with_board_size(3).with_initial_tokens(2);
        let mut session = Session::with_config(config);
        let a = session.add_player("Ann").unwrap();
        let b = session.add_player("Bo").unwrap();
        session
            .assign_tokens(a, &[TokenKind::And, TokenKind::Or])
            .unwrap();
        session
            .assign_tokens(b, &[TokenKind::Xor, TokenKind::Imp])
            .unwrap();
        session.start(seed).unwrap();
        session
    }

    #[test]
    fn test_player_limit() {
        let mut session = Session::with_config(GameConfig::default());
        session.add_player("a").unwrap();
        session.add_player("b").unwrap();
        assert_eq!(
            session.add_player("c"),
            Err(GameError::PlayerLimit { limit: 2 })
        );
    }

    #[test]
    fn test_assign_tokens_checks_count_and_player() {
        let mut session = Session::with_config(GameConfig::default());
        let a = session.add_player("a").unwrap();
        assert_eq!(
            session.assign_tokens(a, &[TokenKind::And]),
            Err(GameError::TokenCount {
                expected: 4,
                got: 1
            })
        );
        assert_eq!(
            session.assign_tokens(PlayerId::new(3), &[TokenKind::And; 4]),
            Err(GameError::UnknownPlayer {
                player: PlayerId::new(3)
            })
        );
    }

    #[test]
    fn test_token_ids_unique_across_players() {
        let session = ready_session(1);
        let mut ids: Vec<_> = session
            .players()
            .iter()
            .flat_map(|p| p.tokens().iter().map(|t| t.id))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_start_requires_players() {
        let mut session = Session::with_config(GameConfig::default());
        session.add_player("a").unwrap();
        assert_eq!(
            session.start(0),
            Err(GameError::MissingPlayers {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_moves_rejected_outside_play() {
        let mut session = Session::with_config(GameConfig::default());
        assert_eq!(
            session.play_move(0, 1, 2),
            Err(GameError::WrongPhase { phase: "in setup" })
        );
    }

    #[test]
    fn test_failed_move_changes_nothing() {
        let mut session = ready_session(4);
        let before = session.board().clone();

        // (1, 1) is seeded with an operand
        assert_eq!(
            session.play_move(0, 1, 1),
            Err(GameError::CellOccupied { row: 1, col: 1 })
        );
        assert_eq!(
            session.play_move(5, 1, 2),
            Err(GameError::TokenIndex {
                index: 5,
                hand_size: 2
            })
        );
        assert_eq!(session.board(), &before);
        assert_eq!(session.current_player(), PlayerId::new(0));
        assert_eq!(session.players()[0].tokens().len(), 2);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_move_switches_turn_and_spends_token() {
        let mut session = ready_session(4);
        let outcome = session.play_move(0, 1, 2).unwrap();

        assert_eq!(outcome.record.player, PlayerId::new(0));
        assert_eq!(outcome.record.token.kind, TokenKind::And);
        assert_eq!(outcome.phase, Phase::InProgress);
        assert_eq!(session.current_player(), PlayerId::new(1));
        assert_eq!(session.players()[0].tokens().len(), 1);
        assert_eq!(session.history().len(), 1);

        let placed = session.board().element(1, 2).unwrap().as_token().copied();
        assert_eq!(placed.map(|t| t.owner), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_wrong_player_token_rejected() {
        let mut session = ready_session(4);
        let foreign = session.players()[1].tokens()[0];
        assert_eq!(
            session.play_token(PlayerId::new(0), foreign, 1, 2),
            Err(GameError::Ownership {
                player: PlayerId::new(0),
                token: foreign.id
            })
        );
        assert_eq!(
            session.play_token(PlayerId::new(1), foreign, 1, 2),
            Err(GameError::NotYourTurn {
                player: PlayerId::new(1)
            })
        );
    }

    #[test]
    fn test_token_must_match_hand_copy() {
        let mut session = ready_session(4);
        let held = session.players()[0].tokens()[0];
        assert_eq!(held.kind, TokenKind::And);

        let swapped = Token::new(held.id, TokenKind::Xor, held.owner);
        assert_eq!(
            session.play_token(PlayerId::new(0), swapped, 1, 2),
            Err(GameError::Ownership {
                player: PlayerId::new(0),
                token: held.id
            })
        );
        assert!(session.board().element(1, 2).unwrap().is_empty());
        assert_eq!(session.players()[0].tokens()[0], held);

        session.play_token(PlayerId::new(0), held, 1, 2).unwrap();
        let placed = session.board().element(1, 2).unwrap().as_token().copied();
        assert_eq!(placed, Some(held));
    }

    #[test]
    fn test_apply_steal_clamps_opponent() {
        let mut players = PlayerMap::new();
        let a = players.push(Player::new(PlayerId::new(0), "a"));
        let b = players.push(Player::new(PlayerId::new(1), "b"));
        players[b].add_points(3);

        apply_steal(&mut players, StealOutcome { opponent: a, mover: b });
        assert_eq!(players[a].points(), 0);
        assert_eq!(players[b].points(), 4);

        apply_steal(&mut players, StealOutcome { opponent: b, mover: a });
        assert_eq!(players[a].points(), 1);
        assert_eq!(players[b].points(), 3);
    }

    #[test]
    fn test_xor_move_steals_through_session() {
        let config = GameConfig::new().with_board_size(5).with_initial_tokens(2);
        let mut session = Session::with_config(config);
        let a = session.add_player("a").unwrap();
        let b = session.add_player("b").unwrap();
        session.assign_tokens(a, &[TokenKind::And, TokenKind::And]).unwrap();
        session.assign_tokens(b, &[TokenKind::Xor, TokenKind::Xor]).unwrap();
        session.start(0).unwrap();

        // Row 1 reads 1, AND(a), 0, _, 1; everything else is empty.
        let mut board = Board::new(5);
        board.place_operand(Operand::TRUE, 1, 1).unwrap();
        board
            .place_token(Token::new(TokenId(99), TokenKind::And, a), 1, 2)
            .unwrap();
        board.place_operand(Operand::FALSE, 1, 3).unwrap();
        board.place_operand(Operand::TRUE, 1, 5).unwrap();
        session.board = board;

        // Corner move with no operand neighbors.
        let quiet = session.play_move(0, 5, 5).unwrap();
        assert_eq!(quiet.record.points, 0);
        assert_eq!(quiet.record.steal, None);

        // 0 xor 1 scores one pair; (1 AND 0) XOR 1 fires the chain.
        let steal = session.play_move(0, 1, 4).unwrap();
        assert_eq!(steal.record.points, 1);
        assert_eq!(
            steal.record.steal,
            Some(StealOutcome {
                opponent: a,
                mover: b
            })
        );
        assert_eq!(session.players()[a.index()].points(), 0);
        assert_eq!(session.players()[b.index()].points(), 2);
    }

    #[test]
    fn test_full_board_completes_round() {
        let mut session = ready_session(8);
        // 3x3 leaves four empty cells: (1,2), (2,1), (2,3), (3,2)
        session.play_move(0, 1, 2).unwrap();
        session.play_move(0, 2, 1).unwrap();
        session.play_move(0, 2, 3).unwrap();
        let last = session.play_move(0, 3, 2).unwrap();

        assert_eq!(last.phase, Phase::Complete);
        assert!(last.result.is_some());
        assert_eq!(session.result(), last.result);
        assert!(session.rules().is_board_full(session.board()));
        assert!(session.play_move(0, 1, 2).is_err());
    }

    #[test]
    fn test_next_round_resets() {
        let mut session = ready_session(8);
        for (row, col) in [(1, 2), (2, 1), (2, 3), (3, 2)] {
            session.play_move(0, row, col).unwrap();
        }
        session.start_next_round().unwrap();

        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.round(), 1);
        assert!(session.players().iter().all(|p| p.points() == 0));
        assert!(session.players().iter().all(|p| !p.has_tokens()));
        assert_eq!(session.board().empty_cells().count(), 9);
        assert_eq!(session.history().len(), 4);
    }
}
