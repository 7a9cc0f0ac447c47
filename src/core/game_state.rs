//! Game state module - the block physics and orientation state machine
//!
//! Exactly two triggers mutate the state: the gravity tick and a player
//! command. Both run to completion on a single logical thread, so the state
//! needs no locking.

use crate::core::Frame;
use crate::types::{Cell, Command, Orientation, FRAME_HEIGHT, FRAME_WIDTH};

/// Wall row at the bottom of the frame; a block whose anchor reaches it has
/// landed.
const FLOOR_ROW: i8 = (FRAME_HEIGHT - 1) as i8;

/// Last row the block can occupy.
const LANDING_ROW: i8 = (FRAME_HEIGHT - 2) as i8;

/// Player-driven descent stops short of this row; gravity covers the rest.
const DOWN_STOP_ROW: i8 = (FRAME_HEIGHT - 3) as i8;

/// Leftmost interior column.
const LEFT_STOP_COL: i8 = 1;

/// Rightmost column the side-border tests allow the anchor to approach.
const RIGHT_STOP_COL: i8 = (FRAME_WIDTH - 3) as i8;

/// Column where fresh blocks appear.
const SPAWN_COL: i8 = (FRAME_WIDTH / 2 - 1) as i8;

/// The active falling block, anchored at (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub row: i8,
    pub col: i8,
}

impl Block {
    /// The three cells the block occupies for the given orientation
    pub fn cells(&self, orientation: Orientation) -> [(i8, i8); 3] {
        match orientation {
            Orientation::Horizontal => [
                (self.row, self.col - 1),
                (self.row, self.col),
                (self.row, self.col + 1),
            ],
            Orientation::Vertical => [
                (self.row - 2, self.col),
                (self.row - 1, self.col),
                (self.row, self.col),
            ],
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    frame: Frame,
    block: Block,
    orientation: Orientation,
}

impl GameState {
    /// Create a new game: bordered frame, horizontal block at the spawn
    /// position. The block is not stamped until the first gravity tick, so
    /// the opening frame is border-only.
    pub fn new() -> Self {
        Self {
            frame: Frame::new(),
            block: Block {
                row: 0,
                col: SPAWN_COL,
            },
            orientation: Orientation::Horizontal,
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn block(&self) -> Block {
        self.block
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Reinitialize frame and block, preserving orientation.
    pub fn soft_reset(&mut self) {
        self.frame.reset();
        self.spawn_block();
    }

    /// Place a fresh block at the start position for the current orientation
    fn spawn_block(&mut self) {
        self.block = match self.orientation {
            Orientation::Horizontal => Block {
                row: 0,
                col: SPAWN_COL,
            },
            Orientation::Vertical => Block {
                row: 1,
                col: SPAWN_COL,
            },
        };
    }

    /// Advance the block one row and re-derive the frame.
    ///
    /// Landing on the wall row discards the block and spawns a fresh one.
    /// Also invoked by every accepted command, so player moves and gravity
    /// share one mutation path.
    pub fn gravity_tick(&mut self) {
        self.block.row += 1;
        if self.reached_bottom() {
            self.soft_reset();
        } else {
            self.frame.reset();
            self.stamp_block();
        }
        // Guards against a desynchronized block position; not reachable
        // through the handlers themselves.
        if !self.block_in_bounds() {
            self.soft_reset();
        }
    }

    /// Apply one player command. Returns true when the state changed (and a
    /// gravity step ran with it), false for a rejected command.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Rotate => self.try_rotate(),
            Command::MoveRight => self.try_move_right(),
            Command::MoveLeft => self.try_move_left(),
            Command::MoveDown => self.try_move_down(),
        }
    }

    /// Flip the orientation if the border guard allows it.
    ///
    /// The guard runs against the pre-flip orientation: a vertical block must
    /// be clear of both side borders, a horizontal one may always rotate.
    pub fn try_rotate(&mut self) -> bool {
        if self.orientation == Orientation::Vertical
            && (self.reached_right() || self.reached_left())
        {
            return false;
        }
        self.frame.reset();
        self.orientation = self.orientation.flipped();
        self.gravity_tick();
        true
    }

    pub fn try_move_right(&mut self) -> bool {
        if self.reached_right() {
            return false;
        }
        self.block.col += 1;
        self.gravity_tick();
        true
    }

    pub fn try_move_left(&mut self) -> bool {
        if self.reached_left() {
            return false;
        }
        self.block.col -= 1;
        self.gravity_tick();
        true
    }

    pub fn try_move_down(&mut self) -> bool {
        if !self.can_move_down() {
            return false;
        }
        self.block.row += 1;
        self.gravity_tick();
        true
    }

    /// Check if the block touches the right border under the current
    /// orientation's rule
    pub fn reached_right(&self) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.block.col + 1 == RIGHT_STOP_COL,
            Orientation::Vertical => self.block.col == RIGHT_STOP_COL,
        }
    }

    /// Check if the block touches the left border under the current
    /// orientation's rule
    pub fn reached_left(&self) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.block.col - 1 == LEFT_STOP_COL,
            Orientation::Vertical => self.block.col == LEFT_STOP_COL,
        }
    }

    /// Check if the block has landed on the bottom wall
    pub fn reached_bottom(&self) -> bool {
        self.block.row == FLOOR_ROW
    }

    /// Check if a player-driven descent is still allowed.
    ///
    /// Stricter than the landing check: movement stops one row early so the
    /// final row is only ever entered by the shared gravity step.
    pub fn can_move_down(&self) -> bool {
        if self.block.row == LANDING_ROW {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => self.block.row != DOWN_STOP_ROW,
            Orientation::Vertical => self.block.row + 1 != DOWN_STOP_ROW,
        }
    }

    /// Stamp the block's three cells onto the frame. Cells outside the grid
    /// are dropped by the checked writes.
    fn stamp_block(&mut self) {
        for (row, col) in self.block.cells(self.orientation) {
            self.frame.set(row, col, Cell::Block);
        }
    }

    fn block_in_bounds(&self) -> bool {
        let interior = 1..FLOOR_ROW;
        interior.contains(&self.block.row) && interior.contains(&self.block.col)
    }

    /// Position the block directly (test setup only)
    #[cfg(test)]
    pub fn place_block(&mut self, row: i8, col: i8, orientation: Orientation) {
        self.block = Block { row, col };
        self.orientation = orientation;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
