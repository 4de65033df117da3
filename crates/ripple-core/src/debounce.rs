/// Trailing-edge debounce over host timer handles.
///
/// Each event re-arms the timer: `arm` hands back the previous handle, which
/// the caller must cancel. Only the last timer of a burst reaches `fire`.
#[derive(Clone, Debug)]
pub struct Debounce<H> {
    delay_ms: u32,
    pending: Option<H>,
}

impl<H: PartialEq> Debounce<H> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record `handle` as the pending timer. Returns the superseded one.
    pub fn arm(&mut self, handle: H) -> Option<H> {
        self.pending.replace(handle)
    }

    /// Timer `handle` elapsed. `true` when it is the pending one and the
    /// debounced action should run; stale handles are ignored.
    pub fn fire(&mut self, handle: &H) -> bool {
        if self.pending.as_ref() == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop the pending timer, returning it for cancellation.
    pub fn cancel(&mut self) -> Option<H> {
        self.pending.take()
    }
}
