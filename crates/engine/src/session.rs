//! Driver-facing session: a game plus a bounded command queue.
//!
//! Input handlers push commands whenever events arrive; the frame loop calls
//! [`Session::step`] once per logical tick, which drains the queue in arrival
//! order and then advances gravity. The queue is stack-only and does not
//! allocate.

use arrayvec::ArrayVec;
use log::warn;

use blockfall_core::{ConfigError, GameConfig, GameSnapshot, GameState, TickOutcome};

use crate::types::GameCommand;

/// Maximum commands buffered between two steps
pub const COMMAND_QUEUE_CAPACITY: usize = 32;

/// Commands received since the last step
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: ArrayVec<GameCommand, COMMAND_QUEUE_CAPACITY>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a command; returns false and drops it when the queue is full
    pub fn push(&mut self, command: GameCommand) -> bool {
        match self.pending.try_push(command) {
            Ok(()) => true,
            Err(_) => {
                warn!("command queue full, dropping {:?}", command);
                false
            }
        }
    }

    /// Remove all buffered commands in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = GameCommand> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Summary of one [`Session::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Commands that changed the game
    pub applied: usize,
    /// Commands that were no-ops (blocked moves, input after game over)
    pub rejected: usize,
    pub outcome: TickOutcome,
}

/// A game driven by queued commands and one step per tick
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    queue: CommandQueue,
    steps: u64,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_state(GameState::new(config)?))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            queue: CommandQueue::new(),
            steps: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    /// Number of completed steps
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Queue a command for the next step
    pub fn push(&mut self, command: GameCommand) -> bool {
        self.queue.push(command)
    }

    /// Apply every queued command, then advance one tick
    pub fn step(&mut self) -> StepReport {
        let (applied, rejected) = self.apply_queued();
        let outcome = self.state.tick();
        self.steps += 1;

        StepReport {
            applied,
            rejected,
            outcome,
        }
    }

    /// Apply every queued command without advancing gravity
    ///
    /// Returns the number of commands that changed the game.
    pub fn flush(&mut self) -> usize {
        self.apply_queued().0
    }

    fn apply_queued(&mut self) -> (usize, usize) {
        let mut applied = 0;
        let mut rejected = 0;
        for command in self.queue.drain() {
            if self.state.apply(command) {
                applied += 1;
            } else {
                rejected += 1;
            }
        }
        (applied, rejected)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }
}
