//! Animation sequencer
//!
//! Short, self-terminating effects queued in FIFO order. Only the head advances,
//! one frame per tick, and gameplay is suspended while anything is queued. The
//! dissolve animation erases the cleared rows on the board as it plays; the
//! compaction and scoring that follow are left to the caller, which receives the
//! finished animation from [`AnimationQueue::advance`].

use std::collections::VecDeque;

use crate::board::{Board, FullRows};
use crate::types::{
    AnimationKind, BOARD_HEIGHT, BOARD_WIDTH, DISSOLVE_FRAMES_PER_STEP, LOCK_IN_BASE_FRAMES,
};

/// Column pairs erased by a dissolve, centre outwards.
const DISSOLVE_STEPS: u32 = (BOARD_WIDTH as u32).div_ceil(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Animation {
    /// Flash after a piece locks; lower rows flash for less time.
    LockIn { row: u8, frame: u32 },
    /// Erase full rows from the centre outwards before they are removed.
    LineDissolve {
        rows: FullRows,
        soft_drop_height: u32,
        frame: u32,
        peeled: u32,
    },
}

impl Animation {
    /// Lock flash for a piece whose anchor came to rest on `row`.
    pub fn lock_in(row: i8) -> Self {
        let row = row.clamp(0, BOARD_HEIGHT as i8 - 1) as u8;
        Animation::LockIn { row, frame: 0 }
    }

    pub fn line_dissolve(rows: FullRows, soft_drop_height: u32) -> Self {
        Animation::LineDissolve {
            rows,
            soft_drop_height,
            frame: 0,
            peeled: 0,
        }
    }

    pub fn kind(&self) -> AnimationKind {
        match self {
            Animation::LockIn { .. } => AnimationKind::LockIn,
            Animation::LineDissolve { .. } => AnimationKind::LineDissolve,
        }
    }

    /// Frames this animation runs for. A lock-in reports finished on the tick
    /// after its last frame.
    pub fn duration(&self) -> u32 {
        match self {
            Animation::LockIn { row, .. } => {
                LOCK_IN_BASE_FRAMES + ((BOARD_HEIGHT as u32 - *row as u32) / 4) * 2
            }
            Animation::LineDissolve { .. } => DISSOLVE_STEPS * DISSOLVE_FRAMES_PER_STEP + 1,
        }
    }

    /// Completion in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let frame = match self {
            Animation::LockIn { frame, .. } | Animation::LineDissolve { frame, .. } => *frame,
        };
        (frame as f32 / self.duration() as f32).clamp(0.0, 1.0)
    }

    /// Advance one frame. Returns true once the animation has finished.
    pub fn advance(&mut self, board: &mut Board) -> bool {
        let duration = self.duration();
        match self {
            Animation::LockIn { frame, .. } => {
                if *frame >= duration {
                    return true;
                }
                *frame += 1;
                false
            }
            Animation::LineDissolve {
                rows,
                frame,
                peeled,
                ..
            } => {
                *frame += 1;
                if *peeled >= DISSOLVE_STEPS {
                    return true;
                }
                if *frame % DISSOLVE_FRAMES_PER_STEP == 0 {
                    peel(board, rows, *peeled);
                    *peeled += 1;
                }
                false
            }
        }
    }
}

/// Erase the `step`-th column pair from the centre of every row in `rows`.
fn peel(board: &mut Board, rows: &[usize], step: u32) {
    let step = step as i8;
    let left = (BOARD_WIDTH as i8 - 1) / 2 - step;
    let right = BOARD_WIDTH as i8 / 2 + step;
    for &row in rows {
        let y = row as i8;
        board.set(left, y, None);
        board.set(right, y, None);
    }
}

/// FIFO animation queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationQueue {
    queue: VecDeque<Animation>,
}

impl AnimationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, animation: Animation) {
        self.queue.push_back(animation);
    }

    pub fn head(&self) -> Option<&Animation> {
        self.queue.front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Advance the head by one frame. Returns it if it finished this frame.
    pub fn advance(&mut self, board: &mut Board) -> Option<Animation> {
        let head = self.queue.front_mut()?;
        if head.advance(board) {
            return self.queue.pop_front();
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animation> {
        self.queue.iter()
    }
}
