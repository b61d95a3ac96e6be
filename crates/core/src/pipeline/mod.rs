//! The fetch-order-dispatch-retry pipeline.
//!
//! Two strictly sequential phases:
//! 1. **Fetch** - the catalog paginator feeds a single consumer that drains
//!    the stream into a complete ordered list before anything is downloaded.
//! 2. **Fan-out** - one task per item, bounded by a counting semaphore,
//!    joined on a completion barrier.

mod order;
mod orchestrator;
mod task;
mod types;

pub use order::collect_ordered;
pub use orchestrator::{Orchestrator, PipelineError};
pub use task::ItemTask;
pub use types::{ItemState, OrderedItem};
