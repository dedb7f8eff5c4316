use std::path::PathBuf;

pub const DEFAULT_EXAM_DIR: &str = "exams";
pub const DEFAULT_OUTPUT_DIR: &str = "submissions";
pub const DEFAULT_LOG_FILE: &str = "exam_runner.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub exam_dir: PathBuf,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
    /// Pre-fill inputs with the saved answer when revisiting a question.
    pub restore_answers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exam_dir: PathBuf::from(DEFAULT_EXAM_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            restore_answers: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let path = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        Self {
            exam_dir: path("EXAM_RUNNER_EXAM_DIR", defaults.exam_dir),
            output_dir: path("EXAM_RUNNER_OUTPUT_DIR", defaults.output_dir),
            log_file: path("EXAM_RUNNER_LOG_FILE", defaults.log_file),
            restore_answers: lookup("EXAM_RUNNER_RESTORE_ANSWERS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.restore_answers),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
