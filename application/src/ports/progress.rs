//! Progress notification port
//!
//! Defines the interface for reporting progress during a council run.
//! Implementations live in the cli layer and can display progress in
//! various ways (console bars, plain logging, ...).

use council_domain::Stage;

/// Callback for progress updates during council execution
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: Stage, total_tasks: usize);

    /// Called when one task within a stage completes
    fn on_task_complete(&self, stage: Stage, subject_id: &str, success: bool);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: Stage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _total_tasks: usize) {}
    fn on_task_complete(&self, _stage: Stage, _subject_id: &str, _success: bool) {}
    fn on_stage_complete(&self, _stage: Stage) {}
}
