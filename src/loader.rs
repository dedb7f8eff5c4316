use crate::models::ExamSession;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn get_exam_files(exam_dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if exam_dir.is_dir()
        && let Ok(entries) = fs::read_dir(exam_dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == "json"
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

pub fn load_exam(path: &Path) -> io::Result<ExamSession> {
    let content = fs::read_to_string(path)?;
    let mut exam = parse_exam(&content)?;

    if exam.id.is_empty() {
        exam.id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "exam".to_string());
    }
    if exam.title.is_empty() {
        exam.title = exam.id.clone();
    }

    Ok(exam)
}

pub fn parse_exam(content: &str) -> io::Result<ExamSession> {
    let exam: ExamSession = serde_json::from_str(content)?;

    if exam.questions.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "exam has no questions",
        ));
    }
    if exam.duration_minutes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "exam duration must be positive",
        ));
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = exam.questions.iter().find(|q| !seen.insert(&q.id)) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("duplicate question id {}", duplicate.id),
        ));
    }

    Ok(exam)
}
