//! In-process events between sibling components.

use leptos::prelude::*;

/// A filtered trace count reported by a trace table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceCountReport {
    /// Increases with every publish so identical counts still register
    pub seq: u64,
    pub count: u64,
}

/// `updateTraceTabCount` channel: trace tables publish, the tab strip listens
#[derive(Clone, Copy)]
pub struct TraceCountChannel {
    latest: RwSignal<Option<TraceCountReport>>,
}

impl TraceCountChannel {
    pub fn new() -> Self {
        Self {
            latest: RwSignal::new(None),
        }
    }

    pub fn publish(&self, count: u64) {
        self.latest
            .update(|latest| *latest = Some(next_report(*latest, count)));
    }

    /// Tracked read for effects
    pub fn latest(&self) -> Option<TraceCountReport> {
        self.latest.get()
    }

    pub fn latest_untracked(&self) -> Option<TraceCountReport> {
        self.latest.get_untracked()
    }
}

impl Default for TraceCountChannel {
    fn default() -> Self {
        Self::new()
    }
}

fn next_report(previous: Option<TraceCountReport>, count: u64) -> TraceCountReport {
    let seq = previous.map(|r| r.seq + 1).unwrap_or(1);
    TraceCountReport { seq, count }
}

/// Sequence number a listener mounting now has already seen
pub fn seen_seq(latest: Option<TraceCountReport>) -> u64 {
    latest.map(|r| r.seq).unwrap_or(0)
}

/// Count of `report` if it was published after `seen`
pub fn count_after(report: Option<TraceCountReport>, seen: u64) -> Option<u64> {
    report.filter(|r| r.seq > seen).map(|r| r.count)
}

pub fn use_trace_count_channel() -> TraceCountChannel {
    use_context::<TraceCountChannel>().expect("TraceCountChannel not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_count_gets_new_seq() {
        let first = next_report(None, 5);
        let second = next_report(Some(first), 5);
        assert_eq!(first, TraceCountReport { seq: 1, count: 5 });
        assert_eq!(second, TraceCountReport { seq: 2, count: 5 });
    }

    #[test]
    fn test_reports_before_mount_are_ignored() {
        let before = next_report(None, 7);
        let seen = seen_seq(Some(before));
        assert_eq!(count_after(Some(before), seen), None);
        assert_eq!(count_after(Some(next_report(Some(before), 3)), seen), Some(3));
        assert_eq!(count_after(None, seen_seq(None)), None);
        assert_eq!(count_after(Some(before), seen_seq(None)), Some(7));
    }
}
