// Host-side tests for the resize debounce, driven by a fake timer queue that
// behaves like setTimeout/clearTimeout.

use ripple_core::constants::RESIZE_DEBOUNCE_MS;
use ripple_core::Debounce;

struct FakeTimers {
    now: u32,
    next_id: u32,
    // (id, due_at)
    queue: Vec<(u32, u32)>,
}

impl FakeTimers {
    fn new() -> Self {
        Self {
            now: 0,
            next_id: 1,
            queue: Vec::new(),
        }
    }

    fn set_timeout(&mut self, delay: u32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.push((id, self.now + delay));
        id
    }

    fn clear_timeout(&mut self, id: u32) {
        self.queue.retain(|(queued, _)| *queued != id);
    }

    /// Advance to `t`, returning the ids that elapsed in order.
    fn advance_to(&mut self, t: u32) -> Vec<u32> {
        self.now = t;
        let mut due: Vec<(u32, u32)> = self.queue.iter().copied().filter(|(_, at)| *at <= t).collect();
        due.sort_by_key(|(_, at)| *at);
        self.queue.retain(|(_, at)| *at > t);
        due.into_iter().map(|(id, _)| id).collect()
    }
}

// One window `resize` event: re-arm and cancel the superseded timer.
fn resize_event(debounce: &mut Debounce<u32>, timers: &mut FakeTimers) {
    let id = timers.set_timeout(debounce.delay_ms());
    if let Some(old) = debounce.arm(id) {
        timers.clear_timeout(old);
    }
}

fn fired(debounce: &mut Debounce<u32>, ids: Vec<u32>) -> usize {
    ids.iter().filter(|id| debounce.fire(id)).count()
}

#[test]
fn burst_of_resizes_runs_once_after_the_delay() {
    let mut debounce = Debounce::new(RESIZE_DEBOUNCE_MS);
    let mut timers = FakeTimers::new();

    for t in [0, 50, 120, 200] {
        timers.now = t;
        resize_event(&mut debounce, &mut timers);
    }

    // quiet period not yet over since the last event at 200
    assert_eq!(fired(&mut debounce, timers.advance_to(200 + RESIZE_DEBOUNCE_MS - 1)), 0);
    assert!(debounce.is_pending());
    assert_eq!(fired(&mut debounce, timers.advance_to(200 + RESIZE_DEBOUNCE_MS)), 1);
    assert!(!debounce.is_pending());
    assert_eq!(fired(&mut debounce, timers.advance_to(5_000)), 0);
}

#[test]
fn separated_resizes_each_run() {
    let mut debounce = Debounce::new(RESIZE_DEBOUNCE_MS);
    let mut timers = FakeTimers::new();

    resize_event(&mut debounce, &mut timers);
    assert_eq!(fired(&mut debounce, timers.advance_to(300)), 1);
    resize_event(&mut debounce, &mut timers);
    assert_eq!(fired(&mut debounce, timers.advance_to(600)), 1);
}

#[test]
fn stale_timer_is_ignored() {
    let mut debounce = Debounce::new(10);
    assert_eq!(debounce.arm(1), None);
    assert_eq!(debounce.arm(2), Some(1));
    // a superseded timer that slipped through clearTimeout
    assert!(!debounce.fire(&1));
    assert!(debounce.is_pending());
    assert!(debounce.fire(&2));
    assert!(!debounce.fire(&2));
}

#[test]
fn cancel_returns_the_pending_timer() {
    let mut debounce = Debounce::new(10);
    assert_eq!(debounce.cancel(), None);
    debounce.arm(9);
    assert_eq!(debounce.cancel(), Some(9));
    assert!(!debounce.fire(&9));
}
