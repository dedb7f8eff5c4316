use crate::models::Submission;
use crate::submission::SubmissionTrigger;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes each finalized attempt as a pretty-printed JSON file in `output_dir`.
#[derive(Debug)]
pub struct FileSubmitter {
    output_dir: PathBuf,
    last_written: Option<PathBuf>,
}

impl FileSubmitter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            last_written: None,
        }
    }

    pub fn last_written(&self) -> Option<&Path> {
        self.last_written.as_deref()
    }
}

pub fn submission_file_name(submission: &Submission) -> String {
    let safe_id: String = submission
        .exam_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}-{}.json", safe_id, chrono::Utc::now().timestamp())
}

pub fn write_submission(file: &mut fs::File, submission: &Submission) -> io::Result<()> {
    let json = serde_json::to_string_pretty(submission)?;
    writeln!(file, "{}", json)?;
    file.flush()
}

impl SubmissionTrigger for FileSubmitter {
    fn submit(&mut self, submission: &Submission) -> io::Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(submission_file_name(submission));
        let mut file = fs::File::create(&path)?;
        write_submission(&mut file, submission)?;
        self.last_written = Some(path);
        Ok(())
    }
}
