//! Game state module - the spawn, fall, lock, clear cycle
//!
//! `GameState` owns the grid, the active piece and the piece source. Player
//! commands and `tick()` build candidate pieces and hand them to the collision
//! resolver; nothing here inspects the grid directly to decide a move.
//!
//! A lock runs Locking, Clearing and Spawning back to back inside the call
//! that triggered it, so between calls the game is always either `Falling`
//! with an active piece or `GameOver` without one.

use log::{debug, info, trace};
use serde::Serialize;

use crate::collision;
use crate::config::{ConfigError, GameConfig};
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::PieceQueue;
use crate::scoring::{level_for_lines, line_clear_score, tick_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameCommand, RotationDirection, ShapeKind};

/// Where the state machine stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    Clearing,
    GameOver,
}

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    /// The piece as it was merged into the grid
    pub piece: Piece,
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// The follow-up spawn collided
    pub game_over: bool,
}

/// Result of a single `tick()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to advance (game over)
    Idle,
    /// The active piece moved down one row
    Fell,
    /// The active piece could not fall and was locked
    Locked(LockEvent),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    active: Option<Piece>,
    queue: PieceQueue,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u32,
    pieces_locked: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a game on an empty grid and spawn the first piece
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let grid = Grid::new(config.width, config.height);
        Self::with_grid(config, grid)
    }

    /// Create a game on a pre-filled grid and spawn the first piece
    ///
    /// The first spawn may already collide, in which case the game starts in `GameOver`.
    pub fn with_grid(config: GameConfig, grid: Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.width() != config.width || grid.height() != config.height {
            return Err(ConfigError::GridSizeMismatch);
        }

        Ok(Self::from_parts(config, grid))
    }

    fn from_parts(config: GameConfig, grid: Grid) -> Self {
        let queue = PieceQueue::from_source(&config.source);
        let mut state = Self {
            config,
            grid,
            active: None,
            queue,
            phase: Phase::Spawning,
            score: 0,
            lines: 0,
            level: 0,
            pieces_locked: 0,
            last_event: None,
        };
        state.spawn();
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Kind of the piece the next spawn will use
    pub fn next_kind(&self) -> ShapeKind {
        self.queue.peek()
    }

    /// Suggested spacing between driver ticks at the current level
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(self.level)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Spawn the next piece at the top-center anchor
    ///
    /// Only acts while the game is waiting for a piece. A spawn that collides
    /// with locked cells ends the game.
    pub fn spawn(&mut self) -> bool {
        if self.phase != Phase::Spawning {
            return false;
        }

        let kind = self.queue.draw();
        let piece = Piece::spawn(kind, self.config.spawn_anchor());

        if !collision::is_legal(&self.grid, &piece) {
            self.active = None;
            self.phase = Phase::GameOver;
            info!(
                "game over: {:?} blocked at spawn, score {} lines {}",
                kind, self.score, self.lines
            );
            return false;
        }

        debug!("spawned {:?} at ({}, {})", kind, piece.x, piece.y);
        self.active = Some(piece);
        self.phase = Phase::Falling;
        true
    }

    /// Replace the active piece with `candidate` if the resolver allows it
    fn try_replace(&mut self, candidate: Piece) -> bool {
        if collision::is_legal(&self.grid, &candidate) {
            self.active = Some(candidate);
            true
        } else {
            trace!("rejected {:?}", candidate);
            false
        }
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        self.try_replace(active.moved(dx, dy))
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Soft drop by one row; never locks
    pub fn move_down(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate in place; a blocked rotation is discarded without kicks
    pub fn rotate(&mut self, direction: RotationDirection) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        self.try_replace(active.rotated(direction))
    }

    /// Drop the active piece to its landing row and lock it immediately
    pub fn hard_drop(&mut self) -> Option<LockEvent> {
        if self.phase != Phase::Falling {
            return None;
        }
        while self.try_move(0, 1) {}
        self.lock_active()
    }

    /// Where the active piece would land if dropped now
    pub fn ghost(&self) -> Option<Piece> {
        let mut piece = self.active?;
        loop {
            let below = piece.moved(0, 1);
            if !collision::is_legal(&self.grid, &below) {
                return Some(piece);
            }
            piece = below;
        }
    }

    /// Advance one logical step: fall one row, or lock, clear and respawn
    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            Phase::Falling => {
                if self.try_move(0, 1) {
                    return TickOutcome::Fell;
                }
                match self.lock_active() {
                    Some(event) => TickOutcome::Locked(event),
                    None => TickOutcome::Idle,
                }
            }
            Phase::Spawning => {
                self.spawn();
                TickOutcome::Idle
            }
            Phase::Locking | Phase::Clearing | Phase::GameOver => TickOutcome::Idle,
        }
    }

    /// Merge the active piece into the grid, clear rows, score, then respawn
    fn lock_active(&mut self) -> Option<LockEvent> {
        let piece = self.active.take()?;

        self.phase = Phase::Locking;
        let locked = self.grid.lock(&piece.occupied_cells(), piece.kind);
        debug_assert!(locked.is_ok(), "active piece overlapped the grid: {:?}", locked);

        self.phase = Phase::Clearing;
        let rows = self.grid.clear_full_rows();
        self.lines = self.lines.saturating_add(rows as u32);
        self.level = level_for_lines(self.lines);
        let score_delta = line_clear_score(rows, self.level);
        self.score = self.score.saturating_add(score_delta);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        debug!(
            "locked {:?} at ({}, {}), cleared {} rows for {} points",
            piece.kind, piece.x, piece.y, rows, score_delta
        );

        self.phase = Phase::Spawning;
        self.spawn();

        let event = LockEvent {
            piece,
            lines_cleared: rows as u32,
            score_delta,
            game_over: self.phase == Phase::GameOver,
        };
        self.last_event = Some(event);
        Some(event)
    }

    /// Start over on an empty grid with the configured piece source
    pub fn restart(&mut self) {
        debug!("restart after {} pieces, score {}", self.pieces_locked, self.score);
        self.grid.clear();
        self.queue = PieceQueue::from_source(&self.config.source);
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.level = 0;
        self.pieces_locked = 0;
        self.last_event = None;
        self.phase = Phase::Spawning;
        self.spawn();
    }

    /// Apply a game command
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::MoveDown => self.move_down(),
            GameCommand::Rotate(direction) => self.rotate(direction),
            GameCommand::HardDrop => self.hard_drop().is_some(),
            GameCommand::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.board.resize_with(self.grid.height() as usize, Vec::new);
        for (dst, row) in out.board.iter_mut().zip(self.grid.rows()) {
            dst.clear();
            dst.extend_from_slice(row);
        }
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost().map(|p| p.y);
        out.next = self.next_kind();
        out.phase = self.phase;
        out.game_over = self.is_game_over();
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.pieces_locked = self.pieces_locked;
        out.tick_interval_ms = self.tick_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        let config = GameConfig::default();
        let grid = Grid::new(config.width, config.height);
        Self::from_parts(config, grid)
    }
}
