mod common;

use common::FakeProc;
use insta::assert_debug_snapshot;
use sysglance::system::cpu::{CpuUsage, RawCpuCounters};
use sysglance::system::process::{DEFAULT_PROCESS_LIMIT, ProcessEnumerator};
use sysglance::system::procfs::ProcFs;
use sysglance::system::sampler::SampleLoop;
use sysglance::system::source::{MetricSource, SourceError};

#[test]
fn reads_aggregate_cpu_counters() {
    let fake = FakeProc::new().with_cpu(10, 20, 30, 40);
    let counters = ProcFs::new(fake.root()).read_cpu_counters().unwrap();
    assert_eq!(
        counters,
        RawCpuCounters {
            user: 10,
            nice: 20,
            system: 30,
            idle: 40,
        }
    );
}

#[test]
fn stat_without_aggregate_line_is_malformed() {
    let fake = FakeProc::new();
    std::fs::write(fake.root().join("stat"), "cpu0 1 2 3 4\nintr 0\n").unwrap();
    assert!(matches!(
        ProcFs::new(fake.root()).read_cpu_counters(),
        Err(SourceError::Malformed { .. })
    ));
}

#[test]
fn reads_memory_totals() {
    let fake = FakeProc::new().with_meminfo(8_000_000, 2_000_000);
    let memory = ProcFs::new(fake.root()).read_memory().unwrap();
    assert_eq!(memory.used_mb(), 5859);
    assert_eq!(memory.total_mb(), 7812);
}

#[test]
fn meminfo_missing_available_is_malformed() {
    let fake = FakeProc::new();
    std::fs::write(fake.root().join("meminfo"), "MemTotal: 1024 kB\n").unwrap();
    let err = ProcFs::new(fake.root()).read_memory().unwrap_err();
    assert!(matches!(err, SourceError::Malformed { .. }));
    assert!(err.to_string().contains("meminfo"));
}

#[test]
fn lists_numeric_entries_only() {
    let fake = FakeProc::new()
        .with_process(1, "init")
        .with_process(200, "kworker/0:1")
        .with_process(3001, "Web Content")
        .with_entry("self")
        .with_entry("sys")
        .with_entry("12abc");

    let mut processes = ProcFs::new(fake.root()).list_processes(DEFAULT_PROCESS_LIMIT);
    processes.sort_by_key(|p| p.pid);

    assert_debug_snapshot!("procfs_listing_sorted", processes);
}

#[test]
fn listing_never_exceeds_limit() {
    let fake = (1..=25).fold(FakeProc::new(), |fake, pid| {
        fake.with_process(pid, &format!("worker{pid}"))
    });
    let procfs = ProcFs::new(fake.root());

    assert_eq!(procfs.list_processes(10).len(), 10);
    assert_eq!(procfs.list_processes(3).len(), 3);
    assert_eq!(procfs.list_processes(100).len(), 25);
    assert!(procfs.list_processes(0).is_empty());
}

#[test]
fn registry_without_processes_is_empty() {
    let fake = FakeProc::new()
        .with_cpu(1, 1, 1, 1)
        .with_meminfo(1024, 512)
        .with_entry("net");
    assert!(ProcFs::new(fake.root()).list_processes(10).is_empty());
}

#[test]
fn vanished_processes_are_skipped_not_counted() {
    let fake = (1..=12).fold(FakeProc::new(), |fake, pid| {
        if pid % 4 == 0 {
            fake.with_vanished_process(pid)
        } else {
            fake.with_process(pid, "alive")
        }
    });

    let processes = ProcFs::new(fake.root()).list_processes(DEFAULT_PROCESS_LIMIT);
    // 12 candidates, 3 vanished: all 9 survivors fit under the cap.
    assert_eq!(processes.len(), 9);
    assert!(processes.iter().all(|p| p.pid % 4 != 0));
}

#[test]
fn vanished_processes_do_not_shrink_a_full_page() {
    let fake = (1..=15).fold(FakeProc::new(), |fake, pid| {
        if pid == 2 || pid == 9 {
            fake.with_vanished_process(pid)
        } else {
            fake.with_process(pid, "alive")
        }
    });

    let processes = ProcFs::new(fake.root()).list_processes(10);
    assert_eq!(processes.len(), 10);
}

#[test]
fn garbage_stat_record_is_skipped() {
    let fake = FakeProc::new().with_process(5, "ok").with_entry("6");
    std::fs::write(fake.root().join("6").join("stat"), "not a stat record").unwrap();

    let processes = ProcFs::new(fake.root()).list_processes(10);
    assert_eq!(processes.len(), 1);
    assert_eq!(processes[0].pid, 5);
}

#[test]
fn sample_loop_over_fake_procfs() {
    let fake = FakeProc::new()
        .with_cpu(100, 0, 100, 800)
        .with_meminfo(8_000_000, 2_000_000)
        .with_process(1, "init")
        .with_process(2, "kthreadd");
    let mut sampler = SampleLoop::new(ProcFs::new(fake.root()));

    let first = sampler.tick();
    assert_eq!(first.cpu_usage, CpuUsage::Unavailable);
    assert_eq!(first.cpu_usage_percent(), -1.0);
    assert_eq!(first.memory.used_mb(), 5859);
    assert_eq!(first.processes.len(), 2);

    let fake = fake.with_cpu(175, 0, 125, 900);
    let second = sampler.tick();
    assert_eq!(second.cpu_usage, CpuUsage::Percent(50.0));

    // Same counters again: no time elapsed.
    let third = sampler.tick();
    assert_eq!(third.cpu_usage, CpuUsage::Unavailable);

    // Sources disappear: cpu degrades, memory keeps the last reading.
    fake.remove("stat");
    fake.remove("meminfo");
    fake.remove("1");
    let degraded = sampler.tick();
    assert_eq!(degraded.cpu_usage, CpuUsage::Unavailable);
    assert_eq!(degraded.memory.total_mb(), 7812);
    assert_eq!(degraded.processes.len(), 1);
    assert_eq!(degraded.processes[0].command, "kthreadd");
}

#[test]
fn snapshot_serializes_for_headless_output() {
    let fake = FakeProc::new()
        .with_cpu(1, 0, 1, 2)
        .with_meminfo(2048, 1024)
        .with_process(9, "sh");
    let snapshot = SampleLoop::new(ProcFs::new(fake.root())).tick();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["cpu_usage"]["state"], "unavailable");
    assert_eq!(json["memory"]["total_kb"], 2048);
    assert_eq!(json["processes"][0]["pid"], 9);
    assert_eq!(json["processes"][0]["command"], "sh");
}
