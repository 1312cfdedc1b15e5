use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A procfs-shaped directory tree for driving `ProcFs` without a live kernel.
pub struct FakeProc {
    dir: TempDir,
}

impl FakeProc {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn with_cpu(self, user: u64, nice: u64, system: u64, idle: u64) -> Self {
        let stat = format!(
            "cpu  {user} {nice} {system} {idle} 0 0 0 0 0 0\n\
             cpu0 {user} {nice} {system} {idle} 0 0 0 0 0 0\n\
             intr 1 2 3\nctxt 42\nbtime 1700000000\nprocesses 100\n"
        );
        fs::write(self.root().join("stat"), stat).expect("write stat");
        self
    }

    pub fn with_meminfo(self, total_kb: u64, available_kb: u64) -> Self {
        let meminfo = format!(
            "MemTotal:       {total_kb} kB\nMemFree:        1024 kB\nMemAvailable:   {available_kb} kB\nCached:         0 kB\n"
        );
        fs::write(self.root().join("meminfo"), meminfo).expect("write meminfo");
        self
    }

    pub fn with_process(self, pid: u32, comm: &str) -> Self {
        let dir = self.root().join(pid.to_string());
        fs::create_dir_all(&dir).expect("create pid dir");
        fs::write(dir.join("stat"), format!("{pid} ({comm}) S 1 {pid} {pid} 0 -1"))
            .expect("write pid stat");
        self
    }

    /// A pid directory whose stat record is gone, as when the process exits
    /// between listing and reading.
    pub fn with_vanished_process(self, pid: u32) -> Self {
        fs::create_dir_all(self.root().join(pid.to_string())).expect("create pid dir");
        self
    }

    pub fn with_entry(self, name: &str) -> Self {
        fs::create_dir_all(self.root().join(name)).expect("create entry");
        self
    }

    pub fn remove(&self, name: &str) {
        let path = self.root().join(name);
        if path.is_dir() {
            fs::remove_dir_all(path).expect("remove dir");
        } else {
            fs::remove_file(path).expect("remove file");
        }
    }
}
