//! The daily task generator.

use std::sync::{PoisonError, RwLock};

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, error, info, warn};

use super::types::{GenerateError, GenerateOptions, Outcome};
use crate::clock::Clock;
use crate::dates::{
    DEFAULT_ROOT_DIR, date_with_icon, format_date, is_workday, task_file_path, year_folder,
    yesterday_date, yesterday_task_file_path,
};
use crate::host::{Host, Notice};
use crate::i18n::{Catalog, Language, Translate, TranslationKey};
use crate::settings::{AutoGenerateMode, Settings};
use crate::statistics::generate_statistics_content;
use crate::storage::{
    NodeKind, PathLocks, StorageError, Vault, append_to_file, ensure_file_exists,
    ensure_folder_exists, normalize_path,
};
use crate::tasks::{
    analyze_task_completion, extract_dated_entry, has_dated_entry, statistics_precede_entry,
};
use crate::templates::render_template;

/// Join a statistics block and a rendered template with one blank line.
///
/// Without statistics the template is returned unchanged.
pub fn compose_entry(statistics: &str, rendered: &str) -> String {
    let statistics = statistics.trim_end();
    if statistics.is_empty() {
        rendered.to_string()
    } else {
        format!("{statistics}\n\n{rendered}")
    }
}

/// Everything one run needs, resolved once up front.
struct Plan {
    root: String,
    year_folder: String,
    path: String,
    now: NaiveDateTime,
    today: NaiveDate,
    date: String,
    catalog: Catalog,
    settings: Settings,
}

/// Appends today's entry to the month's task file.
///
/// Storage, user interaction and time all come from the embedding host, so the
/// same generator drives the CLI, scheduled runs and tests.
pub struct TaskGenerator<V, H, C> {
    vault: V,
    host: H,
    clock: C,
    settings: RwLock<Settings>,
    locale: String,
    locks: PathLocks,
}

impl<V: Vault, H: Host, C: Clock> TaskGenerator<V, H, C> {
    /// `locale` is used when the language setting is `auto`.
    pub fn new(vault: V, host: H, clock: C, settings: Settings, locale: impl Into<String>) -> Self {
        Self {
            vault,
            host,
            clock,
            settings: RwLock::new(settings),
            locale: locale.into(),
            locks: PathLocks::new(),
        }
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn settings(&self) -> Settings {
        self.settings.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replace the settings used by subsequent runs.
    pub fn set_settings(&self, settings: Settings) {
        *self.settings.write().unwrap_or_else(PoisonError::into_inner) = settings;
    }

    pub fn language(&self) -> Language {
        self.settings().language.resolve(&self.locale)
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::for_language(self.language())
    }

    /// Vault path of today's task file.
    pub fn today_task_path(&self) -> String {
        self.plan().path
    }

    /// Vault path of the file holding yesterday's entry.
    pub fn yesterday_task_path(&self) -> String {
        let plan = self.plan();
        yesterday_task_file_path(&plan.root, plan.today, plan.catalog.is_english())
    }

    fn plan(&self) -> Plan {
        let settings = self.settings();
        let catalog = Catalog::for_language(settings.language.resolve(&self.locale));
        let now = self.clock.now();
        let today = now.date();

        let mut root = normalize_path(settings.effective_root_dir());
        if root.is_empty() {
            root = DEFAULT_ROOT_DIR.to_string();
        }

        Plan {
            year_folder: year_folder(&root, today),
            path: task_file_path(&root, today, catalog.is_english()),
            date: format_date(today),
            root,
            now,
            today,
            catalog,
            settings,
        }
    }

    /// Generate today's entry, returning what happened.
    ///
    /// Errors are returned as is; no notices are shown.
    pub fn run(&self, options: GenerateOptions) -> Result<Outcome, GenerateError> {
        self.execute(&self.plan(), options)
    }

    fn execute(&self, plan: &Plan, options: GenerateOptions) -> Result<Outcome, GenerateError> {
        let outcome = self.locks.with_lock(&plan.path, || self.write_entry(plan))?;
        if options.open_file {
            self.host.open_file(outcome.path())?;
        }
        Ok(outcome)
    }

    /// Generate today's entry and report the result through the host.
    ///
    /// Returns `false` only when something went wrong; an existing entry
    /// counts as success.
    pub fn generate_daily_task(&self, options: GenerateOptions) -> bool {
        let plan = self.plan();
        self.generate_with_plan(&plan, options)
    }

    fn generate_with_plan(&self, plan: &Plan, options: GenerateOptions) -> bool {
        match self.execute(plan, options) {
            Ok(Outcome::Created { path }) => {
                if options.quiet {
                    debug!(path = %path, "daily task created");
                } else {
                    info!(path = %path, "daily task created");
                }
                if options.open_file || !options.quiet {
                    self.host.notify(Notice::success(
                        plan.catalog.translate(TranslationKey::NotificationTaskAdded),
                        plan.settings.success_notification_duration,
                    ));
                }
                true
            }
            Ok(Outcome::AlreadyExists { path }) => {
                debug!(path = %path, date = %plan.date, "entry already exists");
                if options.open_file {
                    self.host.notify(Notice::warning(
                        plan.catalog.translate(TranslationKey::NotificationTaskExists),
                    ));
                }
                true
            }
            Err(err) => {
                self.report_error(plan, &err);
                false
            }
        }
    }

    /// User-triggered generation.
    ///
    /// An existing entry is reported with an "already exists" warning whether
    /// or not the file is opened.
    pub fn add_task_manually(&self, open_file: bool) -> bool {
        let plan = self.plan();

        match self.entry_exists(&plan) {
            Ok(true) => {
                info!(path = %plan.path, date = %plan.date, "today's entry already exists");
                if open_file
                    && let Err(err) = self.host.open_file(&plan.path)
                {
                    self.report_error(&plan, &err.into());
                    return false;
                }
                self.host.notify(Notice::warning(
                    plan.catalog.translate(TranslationKey::NotificationTaskExists),
                ));
                true
            }
            Ok(false) => {
                self.generate_with_plan(&plan, GenerateOptions { open_file, quiet: false })
            }
            Err(err) => {
                self.report_error(&plan, &err.into());
                false
            }
        }
    }

    /// Scheduled entry point. Returns `None` when the mode says not to run today.
    pub fn check_auto_generate(&self) -> Option<bool> {
        let mode = self.settings().auto_generate_mode;
        let today = self.clock.today();

        let due = match mode {
            AutoGenerateMode::None => false,
            AutoGenerateMode::Daily => true,
            AutoGenerateMode::Workday => is_workday(today),
        };
        if !due {
            debug!(?mode, %today, "auto-generation not due");
            return None;
        }

        Some(self.generate_daily_task(GenerateOptions::scheduled()))
    }

    /// Statistics block for yesterday's entry, or an empty string.
    ///
    /// Empty when today's entry already carries statistics, when yesterday has
    /// no entry or no tasks, or when anything cannot be read.
    pub fn generate_yesterday_statistics(
        &self,
        root: &str,
        today: NaiveDate,
        t: &impl Translate,
    ) -> String {
        match self.yesterday_statistics(root, today, t) {
            Ok(Some(block)) => block,
            Ok(None) => String::new(),
            Err(err) => {
                warn!(error = %err, "could not compute yesterday's statistics");
                String::new()
            }
        }
    }

    fn yesterday_statistics(
        &self,
        root: &str,
        today: NaiveDate,
        t: &impl Translate,
    ) -> Result<Option<String>, StorageError> {
        let english = t.is_english();
        let title = t.translate(TranslationKey::StatisticsTitle);

        let today_path = task_file_path(root, today, english);
        if let Some(content) = self.read_if_file(&today_path)?
            && statistics_precede_entry(&content, &format_date(today), &title)
        {
            debug!(path = %today_path, "today's entry already has statistics");
            return Ok(None);
        }

        let path = yesterday_task_file_path(root, today, english);
        let Some(content) = self.read_if_file(&path)? else {
            debug!(path = %path, "no task file for yesterday");
            return Ok(None);
        };

        let date = yesterday_date(today);
        let Some(entry) = extract_dated_entry(&content, &date) else {
            debug!(path = %path, date = %date, "no entry for yesterday");
            return Ok(None);
        };

        let stats = analyze_task_completion(entry);
        if stats.is_empty() {
            return Ok(None);
        }
        Ok(Some(generate_statistics_content(&stats, t)))
    }

    fn read_if_file(&self, path: &str) -> Result<Option<String>, StorageError> {
        match self.vault.node(path) {
            Some(NodeKind::File) => self.vault.read_file(path).map(Some),
            _ => Ok(None),
        }
    }

    fn entry_exists(&self, plan: &Plan) -> Result<bool, StorageError> {
        Ok(self
            .read_if_file(&plan.path)?
            .is_some_and(|content| has_dated_entry(&content, &plan.date)))
    }

    /// Steps run under the path lock: folders, file, duplicate check, append.
    fn write_entry(&self, plan: &Plan) -> Result<Outcome, GenerateError> {
        if !ensure_folder_exists(&self.vault, &plan.root) {
            return Err(GenerateError::RootFolder(plan.root.clone()));
        }
        if !ensure_folder_exists(&self.vault, &plan.year_folder) {
            return Err(GenerateError::YearFolder(plan.year_folder.clone()));
        }
        if !ensure_file_exists(&self.vault, &plan.path, "") {
            return Err(GenerateError::TaskFile(plan.path.clone()));
        }

        let content = self.vault.read_file(&plan.path)?;
        if has_dated_entry(&content, &plan.date) {
            return Ok(Outcome::AlreadyExists { path: plan.path.clone() });
        }

        let statistics = if plan.settings.task_statistics {
            self.generate_yesterday_statistics(&plan.root, plan.today, &plan.catalog)
        } else {
            String::new()
        };
        let entry = compose_entry(&statistics, &self.render_entry(plan));

        if !append_to_file(&self.vault, &plan.path, &entry)? {
            return Err(GenerateError::Append(plan.path.clone()));
        }
        debug!(path = %plan.path, date = %plan.date, bytes = entry.len(), "entry appended");
        Ok(Outcome::Created { path: plan.path.clone() })
    }

    fn render_entry(&self, plan: &Plan) -> String {
        let template = plan.settings.effective_template(plan.catalog.language());
        let rendered = render_template(template, plan.now, &plan.catalog);
        if has_dated_entry(&rendered, &plan.date) {
            rendered
        } else {
            warn!("template has no dated heading, adding one");
            format!("## {}\n\n{rendered}", date_with_icon(plan.today))
        }
    }

    fn report_error(&self, plan: &Plan, err: &GenerateError) {
        error!(error = %err, path = %plan.path, "daily task generation failed");
        let prefix = plan.catalog.translate(TranslationKey::NotificationError);
        self.host.notify(Notice::error(format!("{prefix} {err}")));
    }
}
