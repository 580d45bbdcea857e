pub mod driver;
pub mod error;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::{SchedCore, SimOutcome, Slice, schedule, simulate};
pub use error::SchedError;
pub use event::SchedEvent;
pub use state::{DEFAULT_PRIORITY, KernelCtx, ProcessId, ProcessRecord, Quantum, Ticks};
