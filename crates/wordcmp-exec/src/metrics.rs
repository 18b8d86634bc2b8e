//! Stage telemetry. Every call compiles to nothing unless the `tracing`
//! feature is on.

/// Record the counters of a finished stage. `resource` is `"-"` for stages
/// that touch no resource.
#[cfg(feature = "tracing")]
pub fn stage_done(stage: &str, resource: &str, counters: &[(&str, usize)]) {
    let span = tracing::debug_span!("wordcmp_stage", stage, resource);
    let _enter = span.enter();
    for (counter, value) in counters {
        tracing::debug!(counter = *counter, value = *value as u64, "stage counter");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn stage_done(_stage: &str, _resource: &str, _counters: &[(&str, usize)]) {}
