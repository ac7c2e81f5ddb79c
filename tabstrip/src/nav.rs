//! Pure index navigation over a disabled-mask.
//!
//! Wraparound plus disabled-skipping is expressed as a single bounded
//! modular search: at most N steps, so "all disabled" and "single enabled
//! item" terminate the same way.

/// Direction of travel through the tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices, wrapping to 0 past the end
    Forward,
    /// Towards lower indices, wrapping to the end past 0
    Backward,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Advance `step` from `start` with wraparound until an enabled index is
/// found, giving up after a full cycle.
fn scan_from(start: isize, step: isize, disabled: &[bool]) -> Option<usize> {
    let len = disabled.len() as isize;
    let mut idx = start;
    for _ in 0..disabled.len() {
        idx = (idx + step).rem_euclid(len);
        if !disabled[idx as usize] {
            return Some(idx as usize);
        }
    }
    None
}

/// Next enabled index from `from`, wrapping around list boundaries.
///
/// Returns `from` unchanged when the list is empty or every item is
/// disabled.
pub fn next_enabled(from: usize, direction: Direction, disabled: &[bool]) -> usize {
    scan_from(from as isize, direction.step(), disabled).unwrap_or(from)
}

/// First enabled index, or `None` when no item is enabled.
pub fn first_enabled(disabled: &[bool]) -> Option<usize> {
    scan_from(-1, 1, disabled)
}

/// Last enabled index, or `None` when no item is enabled.
pub fn last_enabled(disabled: &[bool]) -> Option<usize> {
    scan_from(disabled.len() as isize, -1, disabled)
}
