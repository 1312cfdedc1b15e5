//! Host counters read from a procfs mount.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use super::cpu::RawCpuCounters;
use super::memory::{MemorySnapshot, parse_meminfo};
use super::process::{ProcessEnumerator, ProcessInfo, is_pid_entry, parse_stat_record};
use super::source::{MetricSource, SourceError};

pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Reads `stat`, `meminfo` and `<pid>/stat` below `root`. Every read opens its
/// own handle and drops it before returning.
#[derive(Clone, Debug)]
pub struct ProcFs {
    root: PathBuf,
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT)
    }
}

impl ProcFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn open(&self, path: PathBuf) -> Result<(BufReader<File>, PathBuf), SourceError> {
        match File::open(&path) {
            Ok(file) => Ok((BufReader::new(file), path)),
            Err(source) => Err(SourceError::Unavailable { path, source }),
        }
    }

    fn read_pid(&self, pid: &str, buffer: &mut String) -> Option<ProcessInfo> {
        buffer.clear();
        let path = self.root.join(pid).join("stat");
        // The process may have exited since the directory listing.
        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::trace!(pid, %err, "process vanished before its stat could be read");
                return None;
            }
        };
        if let Err(err) = file.read_to_string(buffer) {
            tracing::trace!(pid, %err, "process stat read failed");
            return None;
        }
        let info = parse_stat_record(buffer);
        if info.is_none() {
            tracing::trace!(pid, "unparseable process stat record");
        }
        info
    }
}

/// Parses the aggregate `cpu` line of `/proc/stat`. Only the first four columns
/// (user, nice, system, idle) are used.
pub fn parse_cpu_line(line: &str) -> Option<RawCpuCounters> {
    let mut fields = line.split_whitespace();
    if fields.next()? != "cpu" {
        return None;
    }
    let mut next = || fields.next()?.parse::<u64>().ok();
    Some(RawCpuCounters {
        user: next()?,
        nice: next()?,
        system: next()?,
        idle: next()?,
    })
}

impl MetricSource for ProcFs {
    fn read_cpu_counters(&self) -> Result<RawCpuCounters, SourceError> {
        let (reader, path) = self.open(self.root.join("stat"))?;
        for line in reader.lines() {
            let Ok(line) = line else {
                break;
            };
            if line.starts_with("cpu ") {
                return parse_cpu_line(&line).ok_or(SourceError::Malformed {
                    path,
                    reason: "unparseable aggregate cpu line",
                });
            }
        }
        Err(SourceError::Malformed {
            path,
            reason: "aggregate cpu line missing",
        })
    }

    fn read_memory(&self) -> Result<MemorySnapshot, SourceError> {
        let (reader, path) = self.open(self.root.join("meminfo"))?;
        parse_meminfo(reader).ok_or(SourceError::Malformed {
            path,
            reason: "MemTotal or MemAvailable missing",
        })
    }
}

impl ProcessEnumerator for ProcFs {
    fn list_processes(&self, limit: usize) -> Vec<ProcessInfo> {
        let mut processes = Vec::with_capacity(limit);
        if limit == 0 {
            return processes;
        }

        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(root = %self.root.display(), %err, "process registry unavailable");
                return processes;
            }
        };

        let mut buffer = String::new();
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !is_pid_entry(name) {
                continue;
            }
            if let Some(info) = self.read_pid(name, &mut buffer) {
                processes.push(info);
                if processes.len() >= limit {
                    break;
                }
            }
        }

        processes
    }
}
