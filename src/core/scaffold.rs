//! Plan materialization: rendering templates and writing files.
//!
//! The scaffolder walks a generation plan in order. For each task it
//! creates the missing parent directories, renders the template, and
//! writes the result to the target path, unconditionally overwriting any
//! existing file. The overwrite is a deliberate, documented policy:
//! re-running stack mode regenerates the skeleton from the canonical
//! templates, sacrificing manual edits to generated files.
//!
//! A filesystem error aborts the remaining plan immediately. There is no
//! rollback; the report out-parameter retains the applied prefix, and
//! re-running the same mode is self-correcting since output content is
//! deterministic apart from the timestamp field.

use std::fs;

use tracing::{debug, info};

use crate::core::error::{Error, Result};
use crate::core::plan::{Applied, FileTask, GenerationPlan, Report};
use crate::core::project::PACKAGE_MARKER;
use crate::core::templates::TemplateRegistry;

/// Applies generation plans against the filesystem
pub struct Scaffolder<'a> {
    registry: &'a TemplateRegistry,
}

impl<'a> Scaffolder<'a> {
    /// Create a scaffolder rendering through the given registry
    pub fn new(registry: &'a TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Apply every task of the plan, in order.
    ///
    /// On error the remaining tasks are skipped and `report` holds exactly
    /// the actions applied before the abort.
    pub fn apply(&self, plan: &GenerationPlan, report: &mut Report) -> Result<()> {
        debug!(mode = plan.mode(), tasks = plan.len(), "applying plan");
        for task in plan.tasks() {
            self.apply_task(task, report)?;
        }
        Ok(())
    }

    fn apply_task(&self, task: &FileTask, report: &mut Report) -> Result<()> {
        let parent = task.target.parent().ok_or_else(|| {
            Error::plan(format!(
                "task target {} has no parent directory",
                task.target.display()
            ))
        })?;

        // create_dir_all treats an already-existing directory as success,
        // which also covers a racing external creation.
        if !parent.exists() {
            fs::create_dir_all(parent)?;
            report.record(Applied::CreatedDir(parent.to_path_buf()));
        }

        if task.requires_parent_package && !parent.join(PACKAGE_MARKER).is_file() {
            return Err(Error::plan(format!(
                "package marker missing under {} before writing {}",
                parent.display(),
                task.target.display()
            )));
        }

        let content = self.registry.render(task.template, &task.params)?;
        info!(path = %task.target.display(), template = %task.template, "writing file");
        fs::write(&task.target, content)?;
        report.record(Applied::WroteFile(task.target.clone()));
        Ok(())
    }
}
