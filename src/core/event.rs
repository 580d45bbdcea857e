use serde::Serialize;

use crate::core::{ProcessId, Ticks};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SchedEvent {
    Admitted {
        process: ProcessId,
        at: Ticks,
    },
    // `slice` is the time actually used, never more than the remaining burst
    Dispatched {
        process: ProcessId,
        at: Ticks,
        slice: Ticks,
    },
    Preempted {
        process: ProcessId,
        at: Ticks,
        remaining: Ticks,
    },
    Completed {
        process: ProcessId,
        at: Ticks,
    },
    // Ready queue empty from `from` until the next arrival at `to`
    Idle {
        from: Ticks,
        to: Ticks,
    },
}
