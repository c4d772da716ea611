//! Game driver: runs rounds against a display and an input handler.

use tracing::{info, warn};

use crate::core::{GameError, PlayerId, Result};
use crate::rules::{GameResult, RulesEngine, ThunderTruthRules};

use super::controller::{Display, InputHandler};
use super::session::{Phase, Session};

/// Rejected choices tolerated per turn before the driver gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 16;

/// Runs a `Session` to completion, one prompt at a time.
///
/// ```
/// use thunder_truth::core::GameConfig;
/// use thunder_truth::game::{Game, RandomInput, Session, TraceDisplay};
///
/// let session = Session::with_config(GameConfig::default());
/// let mut game = Game::new(session, TraceDisplay, RandomInput::new(3));
/// let results = game.play(42).unwrap();
/// assert_eq!(results.len(), 1);
/// ```
pub struct Game<D: Display, I: InputHandler, R: RulesEngine = ThunderTruthRules> {
    session: Session<R>,
    display: D,
    input: I,
    max_attempts: usize,
}

impl<D: Display, I: InputHandler, R: RulesEngine> Game<D, I, R> {
    #[must_use]
    pub fn new(session: Session<R>, display: D, input: I) -> Self {
        Self {
            session,
            display,
            input,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Limit rejected choices per prompt. Must be at least 1.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        assert!(attempts >= 1, "At least one attempt required");
        self.max_attempts = attempts;
        self
    }

    #[must_use]
    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Play rounds until the input declines another.
    ///
    /// Round `n` is seeded from `seed` and `n`. Returns one result per
    /// finished round; an abandoned round ends the loop.
    pub fn play(&mut self, seed: u64) -> Result<Vec<GameResult>> {
        let mut results = Vec::new();
        loop {
            let Some(result) = self.play_round(seed)? else {
                info!(round = self.session.round(), "round abandoned");
                break;
            };
            results.push(result);
            if !self.input.play_again() {
                break;
            }
            self.session.start_next_round()?;
        }
        Ok(results)
    }

    /// Seat players, deal tokens and play one round.
    ///
    /// `Ok(None)` if the input abandoned the round.
    pub fn play_round(&mut self, seed: u64) -> Result<Option<GameResult>> {
        self.seat_players()?;
        self.deal_tokens()?;
        self.session.start(seed)?;

        while self.session.phase() == Phase::InProgress {
            if !self.take_turn()? {
                return Ok(None);
            }
        }

        self.display.show_board(self.session.board());
        self.display.show_score(self.session.players());
        self.display.show_winner(self.session.winner());
        Ok(self.session.result())
    }

    fn seat_players(&mut self) -> Result<()> {
        let seats = self.session.config().players_amount;
        for seat in self.session.players().len()..seats {
            let name = self.input.player_name(seat);
            self.session.add_player(name)?;
        }
        Ok(())
    }

    fn deal_tokens(&mut self) -> Result<()> {
        let count = self.session.config().initial_tokens_per_player;
        for id in PlayerId::all(self.session.players().len()) {
            let mut attempt = 0;
            loop {
                let Some(player) = self.session.player(id) else {
                    return Err(GameError::UnknownPlayer { player: id });
                };
                let kinds = self.input.choose_tokens(player, count);
                match self.session.assign_tokens(id, &kinds) {
                    Ok(()) => break,
                    Err(err) => self.reject(err, &mut attempt)?,
                }
            }
        }
        Ok(())
    }

    /// One player's turn. `false` if the input gave up.
    fn take_turn(&mut self) -> Result<bool> {
        let id = self.session.current_player();
        let mut attempt = 0;
        loop {
            let Some(player) = self.session.player(id) else {
                return Err(GameError::UnknownPlayer { player: id });
            };
            self.display.show_board(self.session.board());
            self.display
                .show_prompt(&format!("{}, your move ({} tokens left)", player.name, player.tokens().len()));

            let Some(choice) = self.input.choose_move(player, self.session.board()) else {
                return Ok(false);
            };

            match self.session.play_move(choice.token_index, choice.row, choice.col) {
                Ok(outcome) => {
                    let record = outcome.record;
                    self.display.show_prompt(&format!(
                        "{} placed {} at ({}, {}) for {} points",
                        record.player, record.token.kind, record.row, record.col, record.points
                    ));
                    if let Some(steal) = record.steal {
                        self.display.show_prompt(&format!(
                            "{} steals a point from {}",
                            steal.mover, steal.opponent
                        ));
                    }
                    self.display.show_score(self.session.players());
                    return Ok(true);
                }
                Err(err) => self.reject(err, &mut attempt)?,
            }
        }
    }

    /// Report a rejected choice; fail once the attempts run out.
    fn reject(&mut self, err: GameError, attempt: &mut usize) -> Result<()> {
        *attempt += 1;
        warn!(error = %err, attempt = *attempt, "choice rejected");
        if *attempt >= self.max_attempts {
            return Err(err);
        }
        self.display.show_prompt(&format!("{err}. Try again."));
        Ok(())
    }
}
