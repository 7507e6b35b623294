use kurbo::Point;

use crate::core::TimestampMs;

/// One observation of the host pointer.
///
/// `moved_at` is `None` until the first pointer-move event, so a fresh engine
/// drifts on jitter instead of being attracted to a pointer nobody moved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pos: Point,
    pub moved_at: Option<TimestampMs>,
}

impl PointerSample {
    /// True when a pointer-move happened within `window_ms` before `now`.
    pub fn is_recent(&self, now: TimestampMs, window_ms: u64) -> bool {
        match self.moved_at {
            Some(stamp) => now.millis_since(stamp) < window_ms,
            None => false,
        }
    }
}

/// Shared pointer signal: written only by the host's pointer-move callback,
/// stamped onto every blob afterwards. Single writer, many readers.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    last: PointerSample,
}

impl PointerState {
    /// Initial state: pointer parked at `rest` (the surface center), never moved.
    pub fn new(rest: Point) -> Self {
        Self {
            last: PointerSample {
                pos: rest,
                moved_at: None,
            },
        }
    }

    /// Record a pointer-move event.
    pub fn record(&mut self, pos: Point, now: TimestampMs) {
        self.last = PointerSample {
            pos,
            moved_at: Some(now),
        };
    }

    pub fn sample(&self) -> PointerSample {
        self.last
    }
}
