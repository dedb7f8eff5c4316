pub mod answers;
pub mod config;
pub mod file_io;
pub mod filter;
pub mod input_panel;
pub mod loader;
pub mod logger;
pub mod models;
pub mod navigator;
pub mod render;
pub mod session;
pub mod status;
pub mod submission;
pub mod timer;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use answers::AnswerStore;
pub use config::Config;
pub use file_io::FileSubmitter;
pub use filter::{filter, select_all, QuestionBank};
pub use input_panel::PanelInput;
pub use loader::{get_exam_files, load_exam};
pub use models::{AnswerValue, AppState, ExamSession, Question, QuestionKind, QuestionStatus};
pub use navigator::Navigator;
pub use render::{extract, render, InputSurface};
pub use session::{
    handle_bank_input, handle_exam_input, handle_menu_input, handle_nav_click,
    handle_submit_confirm_input, handle_tick, ExamRun, Menu, MenuAction,
};
pub use status::StatusTracker;
pub use submission::{SubmissionTrigger, SubmitOutcome, Submitter};
pub use timer::{ExamTimer, TimerEvent};
pub use ui::{draw_bank, draw_exam, draw_menu, draw_submit_confirmation, draw_summary};
