// Deterministic timer wheel for one-shot and repeating UI transitions.
//
// Time is supplied by the caller in milliseconds, so the same schedule runs
// under a browser timer or a test's simulated clock.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Clone, Debug)]
struct Entry<A> {
    handle: TimerHandle,
    deadline_ms: u64,
    period_ms: Option<u64>,
    action: A,
}

pub struct Scheduler<A> {
    entries: Vec<Entry<A>>,
    next_id: u64,
    now_ms: u64,
}

impl<A: Clone> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            now_ms: 0,
        }
    }

    /// Last time passed to `advance` (or `set_origin`).
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Anchor the clock without firing anything.
    pub fn set_origin(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    fn push(&mut self, delay_ms: u64, period_ms: Option<u64>, action: A) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            deadline_ms: self.now_ms + delay_ms,
            period_ms,
            action,
        });
        handle
    }

    pub fn once(&mut self, delay_ms: u64, action: A) -> TimerHandle {
        self.push(delay_ms, None, action)
    }

    /// Repeat every `period_ms` until cancelled. A zero period is bumped to 1ms.
    pub fn every(&mut self, period_ms: u64, action: A) -> TimerHandle {
        let period = period_ms.max(1);
        self.push(period, Some(period), action)
    }

    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline_ms).min()
    }

    /// Pop the single earliest entry due at or before `now_ms`.
    ///
    /// Ties resolve in scheduling order. Repeating entries are re-armed one
    /// period later. The clock is moved to the entry's deadline, so actions
    /// scheduled in response see the time they logically fired at.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TimerHandle, A)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline_ms <= now_ms)
            .min_by_key(|(_, e)| (e.deadline_ms, e.handle))
            .map(|(i, _)| i)?;
        let entry = &mut self.entries[idx];
        self.now_ms = self.now_ms.max(entry.deadline_ms);
        let fired = (entry.handle, entry.action.clone());
        match entry.period_ms {
            Some(p) => entry.deadline_ms += p,
            None => {
                self.entries.swap_remove(idx);
            }
        }
        Some(fired)
    }

    /// Collect everything due up to `now_ms` in firing order.
    pub fn advance(&mut self, now_ms: u64) -> Vec<A> {
        let mut out = Vec::new();
        while let Some((_, a)) = self.pop_due(now_ms) {
            out.push(a);
        }
        self.now_ms = self.now_ms.max(now_ms);
        out
    }
}
