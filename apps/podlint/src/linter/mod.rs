//! The podspec validation engine.
//!
//! One `Linter::lint` call runs these passes in order, collecting every
//! finding into a fresh `ResultStore`:
//! 1. textual pre-scan of the raw document (only when the text is known)
//! 2. presence check of required root attributes
//! 3. root hooks, once, without platform context
//! 4. for the root and each nested subspec (depth first) and each platform the
//!    variant is available on: variant hooks followed by the structural checks
//!
//! A document that failed to load short-circuits the run with a single error.

pub mod checks;
pub mod hooks;
pub mod textual;

use crate::models::attribute::{AttributeCatalog, DslCatalog};
use crate::models::{LintResult, ResultStore, Severity};
use crate::spec::consumer::Consumer;
use crate::spec::platform::Platform;
use crate::spec::{is_empty_value, Specification};
use hooks::{HookInput, HookRegistry};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

/// Comment lines tolerated before comment density is reported.
pub const MAX_COMMENT_LINES: usize = 20;
/// Share of comment lines tolerated before comment density is reported.
pub const MAX_COMMENT_RATIO: f64 = 0.2;

/// The one required attribute whose absence is only a warning.
const LENIENT_REQUIRED_ATTRIBUTE: &str = "license";

#[derive(Debug, Clone, Copy, PartialEq)]
/// Tunable thresholds for the textual pre-scan.
pub struct LintSettings {
    pub max_comment_lines: usize,
    pub max_comment_ratio: f64,
}

impl Default for LintSettings {
    fn default() -> Self {
        Self {
            max_comment_lines: MAX_COMMENT_LINES,
            max_comment_ratio: MAX_COMMENT_RATIO,
        }
    }
}

/// Sink handed to every check. Findings are tagged with the platform of the
/// context the reporter was created for.
pub struct Reporter<'s> {
    store: &'s mut ResultStore,
    platform: Option<Platform>,
}

impl<'s> Reporter<'s> {
    pub fn new(store: &'s mut ResultStore, platform: Option<Platform>) -> Self {
        Self { store, platform }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.store.add(Severity::Error, message, self.platform);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.store.add(Severity::Warning, message, self.platform);
    }
}

#[derive(Debug)]
/// Findings of one lint run.
pub struct LintReport {
    store: ResultStore,
}

impl LintReport {
    /// True when nothing at all was reported, warnings included.
    pub fn passed(&self) -> bool {
        self.store.is_empty()
    }

    pub fn results(&self) -> &[LintResult] {
        self.store.results()
    }

    pub fn errors(&self) -> &[LintResult] {
        self.store.errors()
    }

    pub fn warnings(&self) -> &[LintResult] {
        self.store.warnings()
    }

    pub fn into_results(self) -> Vec<LintResult> {
        self.store.results().to_vec()
    }
}

enum Subject {
    Loaded(Specification),
    Failed { file: PathBuf, cause: String },
}

/// Validates a podspec against the DSL rulebook.
pub struct Linter {
    subject: Subject,
    catalog: Arc<dyn AttributeCatalog>,
    hooks: HookRegistry,
    settings: LintSettings,
}

impl Linter {
    /// Lint an in-memory specification.
    pub fn new(spec: Specification) -> Self {
        Self::with_subject(Subject::Loaded(spec))
    }

    /// Lint the podspec at `path`. Load failures are reported by `lint`.
    pub fn from_path(path: &Path) -> Self {
        let subject = match Specification::from_file(path) {
            Ok(spec) => Subject::Loaded(spec),
            Err(err) => {
                debug!(file = %path.display(), error = %err, "specification failed to load");
                Subject::Failed {
                    file: path.to_path_buf(),
                    cause: err.to_string(),
                }
            }
        };
        Self::with_subject(subject)
    }

    fn with_subject(subject: Subject) -> Self {
        Self {
            subject,
            catalog: Arc::new(DslCatalog),
            hooks: HookRegistry::builtin(),
            settings: LintSettings::default(),
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn AttributeCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_settings(mut self, settings: LintSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The loaded specification, if loading succeeded.
    pub fn spec(&self) -> Option<&Specification> {
        match &self.subject {
            Subject::Loaded(spec) => Some(spec),
            Subject::Failed { .. } => None,
        }
    }

    /// Run every pass and return the merged findings.
    pub fn lint(&self) -> LintReport {
        let mut store = ResultStore::new();
        match &self.subject {
            Subject::Failed { file, cause } => {
                store.add(
                    Severity::Error,
                    format!(
                        "The specification defined in `{}` could not be loaded.\n\n{}",
                        file.display(),
                        cause
                    ),
                    None,
                );
            }
            Subject::Loaded(spec) => {
                debug!(spec = spec.name(), "linting specification");
                if let Some(text) = spec.source_text() {
                    textual::analyse(text, &self.settings, &mut Reporter::new(&mut store, None));
                }
                self.check_required_root_attributes(spec, &mut store);
                self.run_root_hooks(spec, &mut store);
                let mut chain = Vec::new();
                self.analyse_variant(spec, spec, &mut chain, &mut store);
            }
        }
        debug!(results = store.len(), "lint finished");
        LintReport { store }
    }

    fn check_required_root_attributes(&self, root: &Specification, store: &mut ResultStore) {
        let mut reporter = Reporter::new(store, None);
        for attr in self.catalog.root_attributes() {
            if !attr.required {
                continue;
            }
            let missing = root.attribute(attr.name).map_or(true, is_empty_value);
            if !missing {
                continue;
            }
            let message = format!("Missing required attribute `{}`.", attr.name);
            if attr.name == LENIENT_REQUIRED_ATTRIBUTE {
                reporter.warning(message);
            } else {
                reporter.error(message);
            }
        }
    }

    fn run_root_hooks(&self, root: &Specification, store: &mut ResultStore) {
        let mut reporter = Reporter::new(store, None);
        let input = HookInput {
            root,
            file: root.defined_in_file(),
        };
        for attr in self.catalog.root_attributes() {
            let Some(hook) = self.hooks.get(attr.name) else {
                continue;
            };
            let Some(value) = root.attribute(attr.name) else {
                continue;
            };
            trace!(attribute = attr.name, "root hook");
            hook(&input, value, &mut reporter);
        }
    }

    fn analyse_variant<'a>(
        &self,
        root: &'a Specification,
        variant: &'a Specification,
        chain: &mut Vec<&'a Specification>,
        store: &mut ResultStore,
    ) {
        chain.push(variant);
        for &platform in variant.available_platforms() {
            debug!(spec = variant.full_name(), platform = platform.name(), "analysing variant");
            let consumer = Consumer::new(chain, platform);
            let mut reporter = Reporter::new(store, Some(platform));
            self.run_variant_hooks(root, &consumer, &mut reporter);
            checks::validate_file_patterns(self.catalog.as_ref(), &consumer, &mut reporter);
            checks::check_requires_arc(self.catalog.as_ref(), &consumer, &mut reporter);
            checks::check_if_spec_is_empty(self.catalog.as_ref(), &consumer, &mut reporter);
            checks::check_install_hooks(&consumer, &mut reporter);
        }
        for subspec in variant.subspecs() {
            self.analyse_variant(root, subspec, chain, store);
        }
        chain.pop();
    }

    fn run_variant_hooks(
        &self,
        root: &Specification,
        consumer: &Consumer<'_>,
        reporter: &mut Reporter<'_>,
    ) {
        let input = HookInput {
            root,
            file: root.defined_in_file(),
        };
        for attr in self.catalog.variant_attributes() {
            let Some(hook) = self.hooks.get(attr.name) else {
                continue;
            };
            let value = consumer.value(attr);
            if value.is_null() {
                continue;
            }
            trace!(attribute = attr.name, platform = consumer.platform().name(), "variant hook");
            hook(&input, &value, reporter);
        }
    }
}
