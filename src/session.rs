use crate::filter::QuestionBank;
use crate::input_panel::PanelInput;
use crate::logger;
use crate::models::{AppState, ExamSession, Submission, SubmitReason};
use crate::navigator::Navigator;
use crate::submission::{SubmissionTrigger, SubmitOutcome, Submitter};
use crate::timer::{ExamTimer, TimerEvent};
use chrono::{DateTime, Local};
use crossbeam_channel::{never, tick, Receiver};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// One exam attempt: navigation state, countdown and the guarded
/// submission collaborator.
#[derive(Debug)]
pub struct ExamRun<T: SubmissionTrigger> {
    pub navigator: Navigator<PanelInput>,
    pub timer: ExamTimer,
    pub submitter: Submitter<T>,
    /// One-second countdown source, armed when the attempt starts.
    pub ticker: Receiver<Instant>,
    pub started_at: DateTime<Local>,
    pub submit_reason: Option<SubmitReason>,
    pub outcome: Option<SubmitOutcome>,
}

impl<T: SubmissionTrigger> ExamRun<T> {
    pub fn start(exam: ExamSession, trigger: T, restore_answers: bool) -> Self {
        let mut timer = ExamTimer::new();
        timer.start(exam.duration_minutes);
        logger::log(&format!(
            "Starting exam {} ({} questions, {} minutes)",
            exam.id,
            exam.len(),
            exam.duration_minutes
        ));

        Self {
            navigator: Navigator::new(exam, PanelInput::new(), restore_answers),
            timer,
            submitter: Submitter::new(trigger),
            ticker: tick(TICK_INTERVAL),
            started_at: Local::now(),
            submit_reason: None,
            outcome: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.submitter.is_submitted()
    }

    /// Saves the current input, stops the countdown and hands the attempt
    /// to the collaborator. Repeat requests are absorbed by the submitter.
    pub fn submit(&mut self, reason: SubmitReason) -> SubmitOutcome {
        if self.is_finished() {
            return SubmitOutcome::AlreadySubmitted;
        }
        self.navigator.save_current();
        self.timer.stop();
        self.ticker = never();

        let submission = self.build_submission(reason);
        let outcome = self.submitter.submit_once(&submission);
        self.submit_reason = Some(reason);
        self.outcome = Some(outcome.clone());
        outcome
    }

    pub fn build_submission(&self, reason: SubmitReason) -> Submission {
        let exam = self.navigator.exam();
        Submission {
            exam_id: exam.id.clone(),
            exam_title: exam.title.clone(),
            started_at: self.started_at.to_rfc3339(),
            submitted_at: Local::now().to_rfc3339(),
            reason,
            answers: self.navigator.answers().snapshot(),
            statuses: self.navigator.statuses().as_slice().to_vec(),
        }
    }
}

/// Advances the countdown by one second; on expiry submits and shows the
/// summary.
pub fn handle_tick<T: SubmissionTrigger>(run: &mut ExamRun<T>, app_state: &mut AppState) -> TimerEvent {
    let event = run.timer.tick();
    if event == TimerEvent::Expired {
        logger::log("Time is up, submitting exam");
        run.submit(SubmitReason::TimeExpired);
        *app_state = AppState::Summary;
    }
    event
}

pub fn handle_exam_input<T: SubmissionTrigger>(
    run: &mut ExamRun<T>,
    key: KeyEvent,
    app_state: &mut AppState,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let nav = &mut run.navigator;

    match key.code {
        KeyCode::Esc => *app_state = AppState::SubmitConfirm,
        KeyCode::Char('s') if ctrl => *app_state = AppState::SubmitConfirm,
        KeyCode::Char('r') if ctrl => nav.toggle_marked(),
        KeyCode::Tab => {
            nav.next();
        }
        KeyCode::BackTab => {
            nav.prev();
        }
        KeyCode::PageDown => {
            nav.next();
        }
        KeyCode::PageUp => {
            nav.prev();
        }
        KeyCode::Home if ctrl || !nav.surface().has_text_field() => {
            nav.jump_to(0);
        }
        KeyCode::End if ctrl || !nav.surface().has_text_field() => {
            let last = nav.exam().len().saturating_sub(1);
            nav.jump_to(last);
        }
        _ if nav.surface().has_text_field() => handle_text_key(nav, key, ctrl),
        _ => handle_choice_key(nav, key),
    }
}

fn handle_text_key(nav: &mut Navigator<PanelInput>, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Enter => {
            nav.next();
        }
        KeyCode::Left => nav.surface_mut().cursor_left(),
        KeyCode::Right => nav.surface_mut().cursor_right(),
        KeyCode::Backspace => nav.surface_mut().backspace(),
        KeyCode::Char(c) if !ctrl => nav.surface_mut().insert_char(c),
        _ => {}
    }
}

fn handle_choice_key(nav: &mut Navigator<PanelInput>, key: KeyEvent) {
    match key.code {
        KeyCode::Up => nav.surface_mut().focus_prev(),
        KeyCode::Down => nav.surface_mut().focus_next(),
        KeyCode::Char(' ') | KeyCode::Enter => nav.surface_mut().toggle_focused(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            nav.surface_mut().select_option(index);
        }
        KeyCode::Right => {
            nav.next();
        }
        KeyCode::Left => {
            nav.prev();
        }
        _ => {}
    }
}

/// Mouse click on a navigation-panel button.
pub fn handle_nav_click<T: SubmissionTrigger>(run: &mut ExamRun<T>, index: usize) {
    run.navigator.jump_to(index);
}

pub fn handle_submit_confirm_input<T: SubmissionTrigger>(
    run: &mut ExamRun<T>,
    key: KeyEvent,
    app_state: &mut AppState,
) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            run.submit(SubmitReason::Manual);
            *app_state = AppState::Summary;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => *app_state = AppState::Exam,
        _ => {}
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    None,
    StartExam(PathBuf),
    OpenBank(PathBuf),
    Quit,
}

#[derive(Debug, Default)]
pub struct Menu {
    pub exam_files: Vec<PathBuf>,
    pub selected: usize,
    pub error: Option<String>,
}

impl Menu {
    pub fn new(exam_files: Vec<PathBuf>) -> Self {
        Self {
            exam_files,
            selected: 0,
            error: None,
        }
    }

    fn selected_file(&self) -> Option<PathBuf> {
        self.exam_files.get(self.selected).cloned()
    }
}

pub fn handle_menu_input(menu: &mut Menu, key: KeyEvent) -> MenuAction {
    match key.code {
        KeyCode::Up => {
            menu.selected = menu.selected.saturating_sub(1);
            MenuAction::None
        }
        KeyCode::Down => {
            if menu.selected < menu.exam_files.len().saturating_sub(1) {
                menu.selected += 1;
            }
            MenuAction::None
        }
        KeyCode::Enter => menu
            .selected_file()
            .map_or(MenuAction::None, MenuAction::StartExam),
        KeyCode::Char('b') => menu
            .selected_file()
            .map_or(MenuAction::None, MenuAction::OpenBank),
        KeyCode::Char('q') | KeyCode::Esc => MenuAction::Quit,
        _ => MenuAction::None,
    }
}

pub fn handle_bank_input(bank: &mut QuestionBank, key: KeyEvent, app_state: &mut AppState) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => *app_state = AppState::Menu,
        KeyCode::Up => bank.select_prev(),
        KeyCode::Down => bank.select_next(),
        KeyCode::Enter => bank.toggle_selected(),
        KeyCode::Char('a') if ctrl => bank.toggle_all(),
        KeyCode::Backspace => bank.pop_query_char(),
        KeyCode::Char(c) if !ctrl => bank.push_query_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerValue, Question, QuestionId, QuestionKind, QuestionStatus};
    use crate::submission::tests::RecordingTrigger;
    use std::collections::BTreeSet;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn exam() -> ExamSession {
        ExamSession {
            id: "scenario".to_string(),
            title: "Scenario".to_string(),
            subject: None,
            duration_minutes: 1,
            questions: vec![
                Question::new(
                    "q1",
                    "Single",
                    QuestionKind::SingleChoice {
                        options: vec!["a".to_string(), "b".to_string()],
                    },
                ),
                Question::new(
                    "q2",
                    "Multi",
                    QuestionKind::MultiChoice {
                        options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
                    },
                ),
                Question::new("q3", "Text", QuestionKind::FreeText),
            ],
        }
    }

    fn run() -> ExamRun<RecordingTrigger> {
        ExamRun::start(exam(), RecordingTrigger::default(), false)
    }

    #[test]
    fn test_full_scenario_with_timer_expiry() {
        let mut run = run();
        let mut state = AppState::Exam;

        // Q1: pick option "1" then next.
        handle_exam_input(&mut run, key(KeyCode::Char('2')), &mut state);
        handle_exam_input(&mut run, key(KeyCode::Tab), &mut state);
        assert_eq!(run.navigator.statuses().status_of(0), QuestionStatus::Answered);
        assert_eq!(
            run.navigator.answers().get(&QuestionId::from("q1")),
            Some(&AnswerValue::Single("1".to_string()))
        );

        // Q2: check "0" and "2", then jump straight to Q3.
        handle_exam_input(&mut run, key(KeyCode::Char(' ')), &mut state);
        handle_exam_input(&mut run, key(KeyCode::Down), &mut state);
        handle_exam_input(&mut run, key(KeyCode::Down), &mut state);
        handle_exam_input(&mut run, key(KeyCode::Enter), &mut state);
        handle_nav_click(&mut run, 2);
        let expected: BTreeSet<String> = ["0".to_string(), "2".to_string()].into_iter().collect();
        assert_eq!(run.navigator.statuses().status_of(1), QuestionStatus::Answered);
        assert_eq!(
            run.navigator.answers().get(&QuestionId::from("q2")),
            Some(&AnswerValue::Multi(expected))
        );

        // Q3 left empty; let the clock run out and keep ticking.
        let mut expirations = 0;
        for _ in 0..90 {
            if handle_tick(&mut run, &mut state) == TimerEvent::Expired {
                expirations += 1;
            }
        }

        assert_eq!(expirations, 1);
        assert_eq!(state, AppState::Summary);
        assert_eq!(run.submitter.trigger().calls.len(), 1);
        assert_eq!(run.submit_reason, Some(SubmitReason::TimeExpired));
        assert_eq!(run.navigator.statuses().status_of(2), QuestionStatus::Unanswered);

        let sent = &run.submitter.trigger().calls[0];
        assert_eq!(sent.answers.len(), 2);
        assert_eq!(sent.statuses[2], QuestionStatus::Unanswered);
    }

    #[test]
    fn test_manual_submit_then_expiry_submits_once() {
        let mut run = run();
        let mut state = AppState::Exam;

        handle_exam_input(&mut run, ctrl('s'), &mut state);
        assert_eq!(state, AppState::SubmitConfirm);
        handle_submit_confirm_input(&mut run, key(KeyCode::Char('y')), &mut state);
        assert_eq!(state, AppState::Summary);

        for _ in 0..120 {
            assert_eq!(handle_tick(&mut run, &mut state), TimerEvent::Idle);
        }
        assert_eq!(run.submit(SubmitReason::Manual), SubmitOutcome::AlreadySubmitted);
        assert_eq!(run.submitter.trigger().calls.len(), 1);
        assert_eq!(run.submit_reason, Some(SubmitReason::Manual));
    }

    #[test]
    fn test_submit_saves_current_input() {
        let mut run = run();
        let mut state = AppState::Exam;
        run.navigator.jump_to(2);
        for c in "lifetimes".chars() {
            handle_exam_input(&mut run, key(KeyCode::Char(c)), &mut state);
        }
        run.submit(SubmitReason::Manual);

        let sent = &run.submitter.trigger().calls[0];
        assert_eq!(
            sent.answers.get(&QuestionId::from("q3")),
            Some(&AnswerValue::Text("lifetimes".to_string()))
        );
        assert_eq!(sent.statuses[2], QuestionStatus::Answered);
    }

    #[test]
    fn test_ticker_starts_with_the_attempt_and_stops_on_submit() {
        let before = Instant::now();
        let mut run = run();
        let first = run.ticker.recv_timeout(TICK_INTERVAL * 2).unwrap();
        assert!(first.duration_since(before) >= TICK_INTERVAL);

        run.submit(SubmitReason::Manual);
        assert!(run.ticker.recv_timeout(TICK_INTERVAL * 2).is_err());
    }

    #[test]
    fn test_cancel_submit_returns_to_exam() {
        let mut run = run();
        let mut state = AppState::SubmitConfirm;
        handle_submit_confirm_input(&mut run, key(KeyCode::Esc), &mut state);
        assert_eq!(state, AppState::Exam);
        assert!(!run.is_finished());
        assert!(run.timer.is_armed());
    }

    #[test]
    fn test_mark_for_review_shortcut() {
        let mut run = run();
        let mut state = AppState::Exam;
        handle_exam_input(&mut run, key(KeyCode::Tab), &mut state);
        handle_exam_input(&mut run, ctrl('r'), &mut state);
        assert_eq!(run.navigator.statuses().status_of(1), QuestionStatus::Marked);

        handle_exam_input(&mut run, key(KeyCode::Char('1')), &mut state);
        handle_exam_input(&mut run, key(KeyCode::BackTab), &mut state);
        assert_eq!(run.navigator.statuses().status_of(1), QuestionStatus::Answered);
        assert_eq!(run.navigator.current_index(), 0);
    }

    #[test]
    fn test_typing_in_free_text_does_not_trigger_shortcuts() {
        let mut run = run();
        let mut state = AppState::Exam;
        run.navigator.jump_to(2);
        for c in "1 rs".chars() {
            handle_exam_input(&mut run, key(KeyCode::Char(c)), &mut state);
        }
        assert_eq!(run.navigator.surface().text(), "1 rs");
        assert_eq!(state, AppState::Exam);

        handle_exam_input(&mut run, key(KeyCode::Left), &mut state);
        handle_exam_input(&mut run, key(KeyCode::Backspace), &mut state);
        assert_eq!(run.navigator.surface().text(), "1 s");
    }

    #[test]
    fn test_home_end_jump() {
        let mut run = run();
        let mut state = AppState::Exam;
        handle_exam_input(&mut run, key(KeyCode::End), &mut state);
        assert_eq!(run.navigator.current_index(), 2);
        // On the text question plain Home belongs to the editor.
        handle_exam_input(&mut run, key(KeyCode::Home), &mut state);
        assert_eq!(run.navigator.current_index(), 2);
        handle_exam_input(
            &mut run,
            KeyEvent::new(KeyCode::Home, KeyModifiers::CONTROL),
            &mut state,
        );
        assert_eq!(run.navigator.current_index(), 0);
    }

    #[test]
    fn test_out_of_range_click_is_ignored() {
        let mut run = run();
        handle_nav_click(&mut run, 7);
        assert_eq!(run.navigator.current_index(), 0);
    }

    #[test]
    fn test_menu_navigation_and_actions() {
        let mut menu = Menu::new(vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert_eq!(handle_menu_input(&mut menu, key(KeyCode::Up)), MenuAction::None);
        assert_eq!(menu.selected, 0);
        handle_menu_input(&mut menu, key(KeyCode::Down));
        handle_menu_input(&mut menu, key(KeyCode::Down));
        assert_eq!(menu.selected, 1);
        assert_eq!(
            handle_menu_input(&mut menu, key(KeyCode::Enter)),
            MenuAction::StartExam(PathBuf::from("b.json"))
        );
        assert_eq!(
            handle_menu_input(&mut menu, key(KeyCode::Char('b'))),
            MenuAction::OpenBank(PathBuf::from("b.json"))
        );
        assert_eq!(handle_menu_input(&mut menu, key(KeyCode::Char('q'))), MenuAction::Quit);
    }

    #[test]
    fn test_menu_enter_without_files() {
        let mut menu = Menu::new(Vec::new());
        assert_eq!(handle_menu_input(&mut menu, key(KeyCode::Enter)), MenuAction::None);
    }

    #[test]
    fn test_bank_input() {
        let mut bank = QuestionBank::from_exam(&exam());
        let mut state = AppState::Bank;
        for c in "multi".chars() {
            handle_bank_input(&mut bank, key(KeyCode::Char(c)), &mut state);
        }
        assert_eq!(bank.visible(), &[1]);
        handle_bank_input(&mut bank, key(KeyCode::Enter), &mut state);
        assert_eq!(bank.checked_ids(), vec![&QuestionId::from("q2")]);

        handle_bank_input(&mut bank, ctrl('a'), &mut state);
        assert!(bank.all_checked());
        assert_eq!(bank.checked_ids().len(), 3);

        handle_bank_input(&mut bank, key(KeyCode::Esc), &mut state);
        assert_eq!(state, AppState::Menu);
    }
}
