//! Batch validation over many root objects.

use vet_core::{ContextRef, Inspect};
use vet_registry::CheckRegistry;
use vet_walker::{Report, WalkMode, WalkResult, Walker, DEFAULT_MAX_DEPTH};

/// One root object plus its optional host context.
pub struct Target<'a> {
    /// The object to validate.
    pub object: &'a dyn Inspect,
    /// Host context attached to every record produced from this object.
    pub context: Option<ContextRef>,
}

impl<'a> Target<'a> {
    /// Target an object without context.
    pub fn new(object: &'a dyn Inspect) -> Self {
        Self {
            object,
            context: None,
        }
    }

    /// Attach a host context.
    pub fn with_context(mut self, context: ContextRef) -> Self {
        self.context = Some(context);
        self
    }
}

/// Progress for one object of a batch run.
#[derive(Debug, Clone, Copy)]
pub struct RunProgress {
    /// Zero-based index of the object about to be walked.
    pub index: usize,
    /// Total number of objects in the run.
    pub total: usize,
    /// Type name of the object about to be walked.
    pub object_type: &'static str,
}

/// Observer verdict, consulted before each object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunControl {
    /// Walk the next object.
    Continue,
    /// Skip all remaining objects and finish the run.
    Stop,
}

/// Outcome of a batch run.
#[derive(Debug)]
pub struct RunSummary {
    /// All violations, merged in target order.
    pub report: Report,
    /// How many objects were actually walked.
    pub objects_walked: usize,
    /// True if the observer stopped the run early.
    pub interrupted: bool,
}

/// Runs walks over batches of objects with per-object granularity.
///
/// The runner owns nothing: it borrows the registry and the targets and
/// produces one merged report. Cancellation happens between objects,
/// never inside a walk.
pub struct Runner<'r> {
    registry: &'r CheckRegistry,
    mode: WalkMode,
    max_depth: usize,
}

impl<'r> Runner<'r> {
    /// Create a runner over the given registry.
    pub fn new(registry: &'r CheckRegistry, mode: WalkMode) -> Self {
        Self {
            registry,
            mode,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the recursion depth limit used for each walk.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validate every target, merging reports in target order.
    ///
    /// In fail-fast mode the first failing object aborts the whole run
    /// with its walk error.
    pub fn run(&self, targets: &[Target<'_>]) -> WalkResult<RunSummary> {
        self.run_with_progress(targets, |_| RunControl::Continue)
    }

    /// Validate targets, consulting the observer before each object.
    ///
    /// `RunControl::Stop` skips the remaining objects and marks the
    /// summary interrupted; everything walked so far is kept.
    pub fn run_with_progress(
        &self,
        targets: &[Target<'_>],
        mut observer: impl FnMut(RunProgress) -> RunControl,
    ) -> WalkResult<RunSummary> {
        let walker = Walker::new(self.registry).with_max_depth(self.max_depth);
        let mut report = Report::new();
        let mut objects_walked = 0;
        let mut interrupted = false;

        for (index, target) in targets.iter().enumerate() {
            let progress = RunProgress {
                index,
                total: targets.len(),
                object_type: target.object.type_name(),
            };
            if observer(progress) == RunControl::Stop {
                interrupted = true;
                break;
            }

            let object_report = match &target.context {
                Some(context) => {
                    walker.walk_with_context(target.object, self.mode, context.clone())?
                }
                None => walker.walk(target.object, self.mode)?,
            };
            report.merge(object_report);
            objects_walked += 1;
        }

        Ok(RunSummary {
            report,
            objects_walked,
            interrupted,
        })
    }
}
