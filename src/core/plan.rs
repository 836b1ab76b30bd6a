//! Generation plans and materialization reports.
//!
//! A `GenerationPlan` is the ordered list of file tasks one invocation will
//! apply. Ordering matters for human-readable progress and for the package
//! marker invariant (a package's `__init__.py` task always precedes its
//! sibling module tasks); each task is otherwise independent. Plans are
//! built fresh per invocation and discarded after execution.

use std::path::PathBuf;

use crate::core::project::{CORE_DIR, ProjectLayout};
use crate::core::templates::{TemplateKind, TemplateParams};

/// One unit of planned work: a target path plus the template and
/// parameters needed to render it
#[derive(Debug, Clone)]
pub struct FileTask {
    /// Absolute path the rendered text is written to
    pub target: PathBuf,
    /// Template to render
    pub template: TemplateKind,
    /// Substitution parameters for the template
    pub params: TemplateParams,
    /// Whether a package marker must exist in the parent directory
    /// before this file is written
    pub requires_parent_package: bool,
}

/// Ordered sequence of file tasks for one generation mode
#[derive(Debug)]
pub struct GenerationPlan {
    mode: &'static str,
    tasks: Vec<FileTask>,
}

impl GenerationPlan {
    /// Plan the full project skeleton: the three stack packages, the
    /// top-level bootstrap module and the readme.
    pub fn stack(layout: &ProjectLayout, author: &str, created: &str) -> Self {
        let stamped = TemplateParams::new().with_author(author).with_created(created);
        let tasks = vec![
            FileTask {
                target: layout.requires_init(),
                template: TemplateKind::RequiresInit,
                params: TemplateParams::new(),
                requires_parent_package: false,
            },
            FileTask {
                target: layout.settings_file(),
                template: TemplateKind::Settings,
                params: stamped.clone(),
                requires_parent_package: true,
            },
            FileTask {
                target: layout.utils_init(),
                template: TemplateKind::UtilsInit,
                params: TemplateParams::new(),
                requires_parent_package: false,
            },
            FileTask {
                target: layout.server_file(),
                template: TemplateKind::BaseHandler,
                params: TemplateParams::new(),
                requires_parent_package: true,
            },
            FileTask {
                target: layout.decorators_file(),
                template: TemplateKind::Decorators,
                params: TemplateParams::new(),
                requires_parent_package: true,
            },
            FileTask {
                target: layout.core_init(),
                template: TemplateKind::AppInit,
                params: TemplateParams::new().with_app_name(CORE_DIR),
                requires_parent_package: false,
            },
            FileTask {
                target: layout.core_urls(),
                template: TemplateKind::AppUrls,
                params: stamped.clone().with_app_name(CORE_DIR),
                requires_parent_package: true,
            },
            FileTask {
                target: layout.core_handlers(),
                template: TemplateKind::AppHandlers,
                params: TemplateParams::new().with_app_name(CORE_DIR),
                requires_parent_package: true,
            },
            FileTask {
                target: layout.bootstrap_file(),
                template: TemplateKind::Bootstrap,
                params: stamped,
                requires_parent_package: false,
            },
            FileTask {
                target: layout.readme_file(),
                template: TemplateKind::Readme,
                params: TemplateParams::new(),
                requires_parent_package: false,
            },
        ];
        Self {
            mode: "stack",
            tasks,
        }
    }

    /// Plan one additional app module: entry point, URL map and handlers
    /// under a directory named after the app.
    pub fn app(layout: &ProjectLayout, app_name: &str, author: &str, created: &str) -> Self {
        let named = TemplateParams::new().with_app_name(app_name);
        let tasks = vec![
            FileTask {
                target: layout.app_init(app_name),
                template: TemplateKind::AppInit,
                params: named.clone(),
                requires_parent_package: false,
            },
            FileTask {
                target: layout.app_urls(app_name),
                template: TemplateKind::AppUrls,
                params: named.clone().with_author(author).with_created(created),
                requires_parent_package: true,
            },
            FileTask {
                target: layout.app_handlers(app_name),
                template: TemplateKind::AppHandlers,
                params: named,
                requires_parent_package: true,
            },
        ];
        Self { mode: "app", tasks }
    }

    /// The mode label used in progress output
    pub fn mode(&self) -> &'static str {
        self.mode
    }

    /// The ordered tasks
    pub fn tasks(&self) -> &[FileTask] {
        &self.tasks
    }

    /// Number of planned tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the plan is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// One action the materializer performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A missing target directory was created (ancestors included)
    CreatedDir(PathBuf),
    /// A rendered file was written, overwriting any previous content
    WroteFile(PathBuf),
}

/// Ordered record of what a run applied.
///
/// Passed to the materializer as an out-parameter so that, on abort, the
/// caller still holds exactly the prefix of actions that took effect.
#[derive(Debug, Default)]
pub struct Report {
    entries: Vec<Applied>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an applied action
    pub fn record(&mut self, entry: Applied) {
        self.entries.push(entry);
    }

    /// The applied actions, in order
    pub fn entries(&self) -> &[Applied] {
        &self.entries
    }

    /// Number of directories created
    pub fn dirs_created(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Applied::CreatedDir(_)))
            .count()
    }

    /// Number of files written
    pub fn files_written(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Applied::WroteFile(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::project::PACKAGE_MARKER;
    use std::collections::HashSet;
    use std::path::Path;

    fn layout() -> ProjectLayout {
        ProjectLayout::new("/tmp/proj")
    }

    #[test]
    fn test_stack_plan_covers_the_full_skeleton() {
        let plan = GenerationPlan::stack(&layout(), "someone", "August 06 2026");
        assert_eq!(plan.mode(), "stack");
        assert_eq!(plan.len(), 10);

        let targets: Vec<_> = plan.tasks().iter().map(|t| t.target.clone()).collect();
        let expected = [
            "requires/__init__.py",
            "requires/settings.py",
            "utils/__init__.py",
            "utils/server.py",
            "utils/decorators.py",
            "core/__init__.py",
            "core/urls.py",
            "core/handlers.py",
            "main.py",
            "readme.md",
        ];
        for rel in expected {
            assert!(
                targets.contains(&Path::new("/tmp/proj").join(rel)),
                "stack plan missing {rel}"
            );
        }
    }

    #[test]
    fn test_app_plan_produces_exactly_three_files_under_the_app() {
        let plan = GenerationPlan::app(&layout(), "blog", "someone", "August 06 2026");
        assert_eq!(plan.mode(), "app");
        assert_eq!(plan.len(), 3);
        for task in plan.tasks() {
            assert!(task.target.starts_with("/tmp/proj/blog"));
        }
        let names: HashSet<_> = plan
            .tasks()
            .iter()
            .map(|t| t.target.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            HashSet::from([
                "__init__.py".to_string(),
                "urls.py".to_string(),
                "handlers.py".to_string()
            ])
        );
    }

    #[test]
    fn test_package_markers_precede_their_siblings() {
        for plan in [
            GenerationPlan::stack(&layout(), "someone", "August 06 2026"),
            GenerationPlan::app(&layout(), "blog", "someone", "August 06 2026"),
        ] {
            let mut initialized: HashSet<PathBuf> = HashSet::new();
            for task in plan.tasks() {
                let parent = task.target.parent().unwrap().to_path_buf();
                if task.target.file_name().unwrap() == PACKAGE_MARKER {
                    initialized.insert(parent);
                } else if task.requires_parent_package {
                    assert!(
                        initialized.contains(&parent),
                        "{} ordered before its package marker",
                        task.target.display()
                    );
                }
            }
        }
    }

    #[test]
    fn test_tasks_carry_the_params_their_templates_require() {
        for plan in [
            GenerationPlan::stack(&layout(), "someone", "August 06 2026"),
            GenerationPlan::app(&layout(), "blog", "someone", "August 06 2026"),
        ] {
            for task in plan.tasks() {
                for key in task.template.required_params() {
                    assert!(
                        task.params.provides(*key),
                        "task {} lacks parameter '{key}'",
                        task.target.display()
                    );
                }
            }
        }
    }

    #[test]
    fn test_core_tasks_are_parameterized_with_the_core_name() {
        let plan = GenerationPlan::stack(&layout(), "someone", "August 06 2026");
        let core_init = plan
            .tasks()
            .iter()
            .find(|t| t.target.ends_with("core/__init__.py"))
            .unwrap();
        assert_eq!(core_init.template, TemplateKind::AppInit);
        assert_eq!(core_init.params.app_name.as_deref(), Some("core"));
    }

    #[test]
    fn test_report_counts_by_action() {
        let mut report = Report::new();
        assert!(report.entries().is_empty());
        report.record(Applied::CreatedDir("/tmp/proj/blog".into()));
        report.record(Applied::WroteFile("/tmp/proj/blog/__init__.py".into()));
        report.record(Applied::WroteFile("/tmp/proj/blog/urls.py".into()));
        assert_eq!(report.dirs_created(), 1);
        assert_eq!(report.files_written(), 2);
        assert_eq!(report.entries().len(), 3);
    }
}
