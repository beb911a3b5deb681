//! Tab strip state without any reactive wiring.

use contracts::transaction::tab_bar::TabBarData;

pub const LOADING_PLACEHOLDER: &str = "...";

/// Tabs of the transaction detail screen, in strip order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionTab {
    Overview,
    Traces,
    Profile,
}

impl TransactionTab {
    pub fn all() -> [TransactionTab; 3] {
        [
            TransactionTab::Overview,
            TransactionTab::Traces,
            TransactionTab::Profile,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            TransactionTab::Overview => "overview",
            TransactionTab::Traces => "traces",
            TransactionTab::Profile => "profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionTab::Overview => "Response time",
            TransactionTab::Traces => "Traces",
            TransactionTab::Profile => "Thread profile",
        }
    }

    /// Router state selecting this tab
    pub fn state_name(&self) -> &'static str {
        match self {
            TransactionTab::Overview => "transaction.overview",
            TransactionTab::Traces => "transaction.traces",
            TransactionTab::Profile => "transaction.profile",
        }
    }

    /// DOM id of the tab link, target of arrow-key navigation
    pub fn element_id(&self) -> &'static str {
        match self {
            TransactionTab::Overview => "transaction-tab-overview",
            TransactionTab::Traces => "transaction-tab-traces",
            TransactionTab::Profile => "transaction-tab-profile",
        }
    }

    pub fn from_state_name(state: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.state_name() == state)
    }

    /// Element ids of the left and right neighbours in the strip
    pub fn neighbours(&self) -> (Option<&'static str>, Option<&'static str>) {
        let tabs = Self::all();
        let index = tabs.iter().position(|t| t == self).unwrap_or(0);
        let left = index.checked_sub(1).map(|i| tabs[i].element_id());
        let right = tabs.get(index + 1).map(|t| t.element_id());
        (left, right)
    }
}

/// Sequence number captured when a refresh is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// What the tab strip knows about the server side at the moment.
///
/// Only the response to the most recently issued ticket may change `data`;
/// anything older is dropped on arrival, whatever order responses come back in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabBarState {
    data: Option<TabBarData>,
    filtered_trace_count: Option<u64>,
    latest: u64,
    refreshing: bool,
    error: Option<String>,
}

impl TabBarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue_ticket(&mut self) -> RefreshTicket {
        self.latest += 1;
        self.refreshing = true;
        RefreshTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: RefreshTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Apply a successful response. Returns false when the ticket was superseded.
    pub fn apply(&mut self, ticket: RefreshTicket, data: TabBarData, active: TransactionTab) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        if active != TransactionTab::Traces {
            self.filtered_trace_count = None;
        }
        self.data = Some(data);
        self.error = None;
        self.refreshing = false;
        true
    }

    /// Record a failed refresh. Returns false when the ticket was superseded.
    pub fn apply_error(&mut self, ticket: RefreshTicket, message: String) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.error = Some(message);
        self.refreshing = false;
        true
    }

    /// `updateTraceTabCount` from a trace table showing a filtered subset
    pub fn report_filtered_trace_count(&mut self, count: u64) {
        self.filtered_trace_count = Some(count);
    }

    /// Label for the traces tab: override, then server count, then placeholder
    pub fn trace_count(&self) -> String {
        let Some(data) = &self.data else {
            return LOADING_PLACEHOLDER.to_string();
        };
        match self.filtered_trace_count {
            Some(count) => count.to_string(),
            None => data.trace_count.to_string(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }
}

/// Filter values whose change schedules a tab bar refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedFilters {
    pub from: i64,
    pub to: i64,
    pub transaction_name: Option<String>,
    pub chart_refresh: u64,
}

/// Debounce bookkeeping: every observed change opens a new generation and
/// only the newest generation may fire once its delay has elapsed.
#[derive(Debug, Clone, Default)]
pub struct RefreshSchedule {
    last: Option<WatchedFilters>,
    generation: u64,
}

impl RefreshSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the generation to wait on, or None when nothing changed
    pub fn observe(&mut self, filters: WatchedFilters) -> Option<u64> {
        if self.last.as_ref() == Some(&filters) {
            return None;
        }
        self.last = Some(filters);
        self.generation += 1;
        Some(self.generation)
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
