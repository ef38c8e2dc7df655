use std::fmt;
use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{line_col, CaseFileError, InputError};
use crate::prefix_common::find_the_prefix_common_array;
use crate::special_array::is_array_special;

// =============================================================================
// Case file model
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub parallel: bool,
    pub format: OutputFormat,
    pub color: bool,
    pub stop_on_failure: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            parallel: true,
            format: OutputFormat::Text,
            color: true,
            stop_on_failure: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrefixCommonCase {
    #[serde(default)]
    pub name: Option<String>,
    pub a: Vec<i64>,
    pub b: Vec<i64>,
    #[serde(default)]
    pub expected: Option<Vec<usize>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecialArrayCase {
    #[serde(default)]
    pub name: Option<String>,
    pub nums: Vec<i64>,
    #[serde(default)]
    pub expected: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaseFile {
    pub settings: Settings,
    pub prefix_common: Vec<PrefixCommonCase>,
    pub special_array: Vec<SpecialArrayCase>,
}

impl CaseFile {
    pub fn from_json_str(content: &str) -> Result<Self, CaseFileError> {
        serde_json::from_str(content).map_err(CaseFileError::from)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CaseFileError> {
        toml::from_str(content).map_err(|err| {
            let (line, col) = err
                .span()
                .map(|span| line_col(content, span.start))
                .unwrap_or((0, 0));
            CaseFileError::parse(line, col, err.message())
        })
    }

    pub fn load(path: &Path) -> Result<Self, CaseFileError> {
        let content = fs::read_to_string(path).map_err(|source| CaseFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            Some(other) => Err(CaseFileError::UnsupportedFormat(other.to_string())),
            None => {
                if content.trim_start().starts_with('{') {
                    Self::from_json_str(&content)
                } else {
                    Self::from_toml_str(&content)
                }
            }
        }
    }

    /// The worked examples from the problem statements.
    pub fn builtin() -> Self {
        CaseFile {
            settings: Settings::default(),
            prefix_common: vec![
                PrefixCommonCase {
                    name: Some("permutation".to_string()),
                    a: vec![1, 3, 2, 4],
                    b: vec![3, 1, 2, 4],
                    expected: Some(vec![0, 2, 3, 4]),
                },
                PrefixCommonCase {
                    name: Some("rotation".to_string()),
                    a: vec![2, 3, 1],
                    b: vec![3, 1, 2],
                    expected: Some(vec![0, 1, 3]),
                },
            ],
            special_array: vec![
                SpecialArrayCase {
                    name: Some("alternating".to_string()),
                    nums: vec![1, 2, 3, 4],
                    expected: Some(true),
                },
                SpecialArrayCase {
                    name: Some("two odds".to_string()),
                    nums: vec![4, 3, 1, 6],
                    expected: Some(false),
                },
                SpecialArrayCase {
                    name: Some("single".to_string()),
                    nums: vec![1],
                    expected: Some(true),
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.prefix_common.len() + self.special_array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Outcomes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    PrefixCommon,
    SpecialArray,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::PrefixCommon => write!(f, "prefix_common"),
            Problem::SpecialArray => write!(f, "special_array"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Counts(Vec<usize>),
    Special(bool),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Counts(counts) => write!(f, "{counts:?}"),
            Answer::Special(flag) => write!(f, "{flag}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseStatus {
    Passed { actual: Answer },
    Failed { expected: Answer, actual: Answer },
    Computed { actual: Answer },
    Rejected {
        #[serde(serialize_with = "serialize_display")]
        error: InputError,
    },
}

impl CaseStatus {
    fn judge(expected: Option<Answer>, actual: Result<Answer, InputError>) -> Self {
        match (expected, actual) {
            (_, Err(error)) => CaseStatus::Rejected { error },
            (None, Ok(actual)) => CaseStatus::Computed { actual },
            (Some(expected), Ok(actual)) if expected == actual => CaseStatus::Passed { actual },
            (Some(expected), Ok(actual)) => CaseStatus::Failed { expected, actual },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, CaseStatus::Failed { .. } | CaseStatus::Rejected { .. })
    }
}

fn serialize_display<T: fmt::Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub problem: Problem,
    pub name: String,
    #[serde(flatten)]
    pub status: CaseStatus,
}

// =============================================================================
// Evaluation
// =============================================================================

pub trait Evaluate {
    const PROBLEM: Problem;

    fn name(&self) -> Option<&str>;

    fn expected(&self) -> Option<Answer>;

    fn solve(&self) -> Result<Answer, InputError>;

    /// `index` is the case's position among cases of the same problem and
    /// only used to name unnamed cases.
    fn evaluate(&self, index: usize) -> CaseOutcome {
        let name = self
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} #{}", Self::PROBLEM, index + 1));

        CaseOutcome {
            problem: Self::PROBLEM,
            name,
            status: CaseStatus::judge(self.expected(), self.solve()),
        }
    }
}

impl Evaluate for PrefixCommonCase {
    const PROBLEM: Problem = Problem::PrefixCommon;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn expected(&self) -> Option<Answer> {
        self.expected.clone().map(Answer::Counts)
    }

    fn solve(&self) -> Result<Answer, InputError> {
        find_the_prefix_common_array(&self.a, &self.b).map(Answer::Counts)
    }
}

impl Evaluate for SpecialArrayCase {
    const PROBLEM: Problem = Problem::SpecialArray;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn expected(&self) -> Option<Answer> {
        self.expected.map(Answer::Special)
    }

    fn solve(&self) -> Result<Answer, InputError> {
        is_array_special(&self.nums).map(Answer::Special)
    }
}

fn evaluate_all<C: Evaluate + Sync>(cases: &[C], parallel: bool) -> Vec<CaseOutcome> {
    if parallel {
        cases
            .par_iter()
            .enumerate()
            .map(|(index, case)| case.evaluate(index))
            .collect()
    } else {
        cases
            .iter()
            .enumerate()
            .map(|(index, case)| case.evaluate(index))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub computed: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub outcomes: Vec<CaseOutcome>,
    /// Set when `stop_on_failure` cut the run short.
    pub stopped_early: bool,
}

impl RunSummary {
    pub fn counts(&self) -> Counts {
        self.outcomes
            .iter()
            .fold(Counts::default(), |mut counts, outcome| {
                counts.total += 1;
                match outcome.status {
                    CaseStatus::Passed { .. } => counts.passed += 1,
                    CaseStatus::Failed { .. } => counts.failed += 1,
                    CaseStatus::Computed { .. } => counts.computed += 1,
                    CaseStatus::Rejected { .. } => counts.rejected += 1,
                }
                counts
            })
    }

    pub fn all_passed(&self) -> bool {
        !self.outcomes.iter().any(|outcome| outcome.status.is_failure())
    }
}

/// Runs every case in `file`: prefix-common cases first, then special-array
/// cases, each group in file order.
pub fn run_cases(file: &CaseFile) -> RunSummary {
    let parallel = file.settings.parallel;

    let mut outcomes = evaluate_all(&file.prefix_common, parallel);
    outcomes.extend(evaluate_all(&file.special_array, parallel));

    let mut stopped_early = false;
    if file.settings.stop_on_failure {
        if let Some(first) = outcomes.iter().position(|outcome| outcome.status.is_failure()) {
            stopped_early = first + 1 < outcomes.len();
            outcomes.truncate(first + 1);
        }
    }

    RunSummary {
        outcomes,
        stopped_early,
    }
}
