use crate::shared::http::ActionError;
use contracts::jvm::heap_dump::{DiskSpace, HeapDumpDefaults, HeapDumpFile};

pub const DISK_SPACE_CHECKED: &str = "See disk space below";
pub const HEAP_DUMP_CREATED: &str = "Heap dump created";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapDumpAction {
    CheckDiskSpace,
    DumpHeap,
}

/// Message shown next to the action buttons once an action settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Resolved(String),
    Rejected(String),
}

/// Directory form of the heap dump screen with its two response slots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeapDumpForm {
    pub directory: String,
    pub loaded: bool,
    pub loading_error: Option<String>,
    pub disk_space: Option<DiskSpace>,
    pub heap_dump: Option<HeapDumpFile>,
    pub running: Option<HeapDumpAction>,
    pub outcome: Option<ActionOutcome>,
}

impl HeapDumpForm {
    pub fn load_succeeded(&mut self, defaults: HeapDumpDefaults) {
        self.loaded = true;
        self.loading_error = None;
        self.directory = defaults.directory;
    }

    pub fn load_failed(&mut self, message: String) {
        self.loading_error = Some(message);
    }

    /// Clear both response slots before a new action starts.
    /// Returns false if another action is still running.
    pub fn begin(&mut self, action: HeapDumpAction) -> bool {
        if self.running.is_some() {
            return false;
        }
        self.disk_space = None;
        self.heap_dump = None;
        self.outcome = None;
        self.running = Some(action);
        true
    }

    pub fn finish_check_disk_space(
        &mut self,
        result: Result<DiskSpace, ActionError>,
    ) -> Result<String, String> {
        let settled = result.map(|space| {
            self.disk_space = Some(space);
            DISK_SPACE_CHECKED.to_string()
        });
        self.settle(settled)
    }

    pub fn finish_dump_heap(
        &mut self,
        result: Result<HeapDumpFile, ActionError>,
    ) -> Result<String, String> {
        let settled = result.map(|file| {
            self.heap_dump = Some(file);
            HEAP_DUMP_CREATED.to_string()
        });
        self.settle(settled)
    }

    fn settle(&mut self, result: Result<String, ActionError>) -> Result<String, String> {
        self.running = None;
        let result = result.map_err(|e| e.to_string());
        self.outcome = Some(match &result {
            Ok(message) => ActionOutcome::Resolved(message.clone()),
            Err(message) => ActionOutcome::Rejected(message.clone()),
        });
        result
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }
}

/// Enter in the directory field must not submit the dump action
pub fn suppresses_key(key: &str) -> bool {
    key == "Enter"
}

/// Human readable byte count, e.g. "1.5 GB"
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
