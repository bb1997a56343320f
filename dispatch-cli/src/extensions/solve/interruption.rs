//! Interruption handler.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/interruption_test.rs"]
mod interruption_test;

use dispatch_core::prelude::{Float, GenericError, GenericResult};
use evokit::utils::{CancellationQuota, Quota, TimeQuota};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Creates interruption quota which is reached on `Ctrl-C` or when max time, if specified, is over.
pub fn create_interruption_quota(max_time: Option<usize>) -> GenericResult<Arc<dyn Quota + Send + Sync>> {
    let should_interrupt = Arc::new(AtomicBool::new(false));

    ctrlc::set_handler({
        let should_interrupt = should_interrupt.clone();
        move || {
            should_interrupt.store(true, Ordering::Relaxed);
        }
    })
    .map_err(|err| GenericError::from(format!("cannot set interruption handler: {err}")))?;

    Ok(create_cancellation_quota(should_interrupt, max_time))
}

/// Creates a quota which is reached once the flag is raised or max time is over.
pub fn create_cancellation_quota(flag: Arc<AtomicBool>, max_time: Option<usize>) -> Arc<dyn Quota + Send + Sync> {
    let inner = max_time.map::<Arc<dyn Quota + Send + Sync>, _>(|time| Arc::new(TimeQuota::new(time as Float)));

    Arc::new(CancellationQuota::new(flag, inner))
}
