use serde::Serialize;

/// Number of processes gathered per tick.
pub const DEFAULT_PROCESS_LIMIT: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub command: String,
}

/// Lists running processes in registry order.
///
/// Implementations never fail: processes that exit mid-scan are skipped and an
/// unreadable registry yields an empty list.
pub trait ProcessEnumerator {
    fn list_processes(&self, limit: usize) -> Vec<ProcessInfo>;
}

pub fn is_pid_entry(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// Parses the leading `pid (comm)` fields of a `/proc/<pid>/stat` record.
///
/// The command name is taken between the first `(` and the last `)`, since it
/// may itself contain spaces or parentheses.
pub fn parse_stat_record(record: &str) -> Option<ProcessInfo> {
    let open = record.find('(')?;
    let close = record.rfind(')')?;
    if close < open {
        return None;
    }
    let pid = record[..open].trim().parse().ok()?;
    let command = record[open + 1..close].to_string();
    Some(ProcessInfo { pid, command })
}
