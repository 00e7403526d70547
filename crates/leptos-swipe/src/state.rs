//! Swipe state machine
//!
//! Pure, renderer-free logic behind the reveal-to-delete gesture.

/// Distance the card slides when fully revealed
pub const DEFAULT_MAX_OFFSET: f64 = 80.0;

/// Movement in pixels after which a press counts as a swipe rather than a tap
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Where the card is in the gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Dragging,
    Revealed,
}

/// Per-card swipe state: a horizontal offset and a dragging flag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeState {
    max_offset: f64,
    offset: f64,
    start_x: f64,
    /// Resting offset when the current drag began
    base_offset: f64,
    dragging: bool,
    moved: bool,
}

impl Default for SwipeState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OFFSET)
    }
}

impl SwipeState {
    pub fn new(max_offset: f64) -> Self {
        Self {
            max_offset: max_offset.max(0.0),
            offset: 0.0,
            start_x: 0.0,
            base_offset: 0.0,
            dragging: false,
            moved: false,
        }
    }

    /// Pointer went down at `x`
    pub fn begin(&mut self, x: f64) {
        self.start_x = x;
        self.base_offset = self.offset;
        self.dragging = true;
        self.moved = false;
    }

    /// Pointer moved to `x`; returns the new offset
    ///
    /// Leftward movement opens the card, clamped to `[0, max_offset]`.
    /// From idle a rightward drag stays at 0; from revealed it closes.
    pub fn drag_to(&mut self, x: f64) -> f64 {
        if !self.dragging {
            return self.offset;
        }
        let delta = self.start_x - x;
        if delta.abs() > DRAG_THRESHOLD_PX {
            self.moved = true;
        }
        self.offset = (self.base_offset + delta).clamp(0.0, self.max_offset);
        self.offset
    }

    /// Pointer released: snap fully open past half the distance, else closed
    pub fn release(&mut self) -> SwipePhase {
        if !self.dragging {
            return self.phase();
        }
        self.dragging = false;
        self.offset = if self.offset > self.max_offset / 2.0 {
            self.max_offset
        } else {
            0.0
        };
        self.phase()
    }

    /// Activate the delete trigger; true only while revealed
    pub fn confirm_delete(&mut self) -> bool {
        let revealed = self.is_revealed();
        self.reset();
        revealed
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.max_offset);
    }

    pub fn phase(&self) -> SwipePhase {
        if self.dragging {
            SwipePhase::Dragging
        } else if self.offset >= self.max_offset && self.max_offset > 0.0 {
            SwipePhase::Revealed
        } else {
            SwipePhase::Idle
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_revealed(&self) -> bool {
        self.phase() == SwipePhase::Revealed
    }

    /// Whether the last drag moved past the tap threshold
    pub fn was_swipe(&self) -> bool {
        self.moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(state: &mut SwipeState, from: f64, path: &[f64]) -> SwipePhase {
        state.begin(from);
        for x in path {
            state.drag_to(*x);
        }
        state.release()
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut state = SwipeState::default();
        assert_eq!(drag(&mut state, 200.0, &[190.0, 170.0]), SwipePhase::Idle);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn test_long_drag_reveals() {
        let mut state = SwipeState::default();
        assert_eq!(drag(&mut state, 200.0, &[180.0, 140.0]), SwipePhase::Revealed);
        assert_eq!(state.offset(), 80.0);
    }

    #[test]
    fn test_offset_clamped_while_dragging() {
        let mut state = SwipeState::default();
        state.begin(300.0);
        assert_eq!(state.phase(), SwipePhase::Dragging);
        assert_eq!(state.drag_to(100.0), 80.0);
        assert_eq!(state.drag_to(250.0), 50.0);
        assert_eq!(state.drag_to(400.0), 0.0);
    }

    #[test]
    fn test_rightward_drag_never_opens() {
        let mut state = SwipeState::default();
        state.begin(100.0);
        for x in [120.0, 180.0, 260.0] {
            assert_eq!(state.drag_to(x), 0.0);
        }
        assert_eq!(state.release(), SwipePhase::Idle);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn test_exactly_half_stays_closed() {
        let mut state = SwipeState::default();
        assert_eq!(drag(&mut state, 100.0, &[60.0]), SwipePhase::Idle);
    }

    #[test]
    fn test_rightward_drag_closes_revealed_card() {
        let mut state = SwipeState::default();
        drag(&mut state, 200.0, &[100.0]);
        assert!(state.is_revealed());

        assert_eq!(drag(&mut state, 100.0, &[160.0]), SwipePhase::Idle);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn test_confirm_delete_only_when_revealed() {
        let mut state = SwipeState::default();
        assert!(!state.confirm_delete());

        drag(&mut state, 200.0, &[100.0]);
        assert!(state.confirm_delete());
        assert_eq!(state.phase(), SwipePhase::Idle);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn test_tap_is_not_a_swipe() {
        let mut state = SwipeState::default();
        drag(&mut state, 100.0, &[98.0]);
        assert!(!state.was_swipe());
        drag(&mut state, 100.0, &[70.0]);
        assert!(state.was_swipe());
    }

    #[test]
    fn test_move_without_begin_is_ignored() {
        let mut state = SwipeState::default();
        assert_eq!(state.drag_to(0.0), 0.0);
        assert_eq!(state.release(), SwipePhase::Idle);
    }
}
