pub mod cpu;
pub mod memory;
pub mod process;
pub mod procfs;
pub mod sampler;
pub mod snapshot;
pub mod source;
