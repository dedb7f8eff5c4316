#[cfg(test)]
mod ui_render_tests {
    use crate::filter::QuestionBank;
    use crate::models::{ExamSession, Question, QuestionKind, SubmitReason};
    use crate::session::{ExamRun, Menu};
    use crate::submission::tests::RecordingTrigger;
    use crate::ui::{draw_bank, draw_exam, draw_menu, draw_summary};
    use ratatui::{backend::TestBackend, Terminal};

    fn exam() -> ExamSession {
        ExamSession {
            id: "render".to_string(),
            title: "Render Check".to_string(),
            subject: None,
            duration_minutes: 2,
            questions: vec![
                Question::new(
                    "q1",
                    "Pick the **borrow** checker",
                    QuestionKind::SingleChoice {
                        options: vec!["rustc".to_string(), "gcc".to_string()],
                    },
                ),
                Question::new("q2", "Explain ownership", QuestionKind::FreeText),
            ],
        }
    }

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(120, 40)).unwrap()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_exam_screen_shows_heading_timer_and_options() {
        let mut terminal = terminal();
        let mut run = ExamRun::start(exam(), RecordingTrigger::default(), false);

        terminal.draw(|f| draw_exam(f, &mut run)).unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("Question 1 of 2"));
        assert!(screen.contains("00:02:00"));
        assert!(screen.contains("rustc"));
        assert!(screen.contains("gcc"));
        assert!(screen.contains("Render Check"));
    }

    #[test]
    fn test_exam_screen_shows_text_field_placeholder() {
        let mut terminal = terminal();
        let mut run = ExamRun::start(exam(), RecordingTrigger::default(), false);
        run.navigator.next();

        terminal.draw(|f| draw_exam(f, &mut run)).unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("Question 2 of 2"));
        assert!(screen.contains("Type your answer here"));
    }

    #[test]
    fn test_summary_reports_time_expiry() {
        let mut terminal = terminal();
        let mut run = ExamRun::start(exam(), RecordingTrigger::default(), false);
        run.submit(SubmitReason::TimeExpired);

        terminal.draw(|f| draw_summary(f, &run)).unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("Time's up!"));
        assert!(screen.contains("Answers recorded."));
        assert!(screen.contains("Answered 0 of 2"));
    }

    #[test]
    fn test_menu_without_exam_files() {
        let mut terminal = terminal();
        let menu = Menu::new(Vec::new());

        terminal.draw(|f| draw_menu(f, &menu)).unwrap();

        assert!(screen_text(&terminal).contains("No exam files found"));
    }

    #[test]
    fn test_menu_shows_load_error() {
        let mut terminal = terminal();
        let mut menu = Menu::new(vec!["exams/broken.json".into()]);
        menu.error = Some("Failed to load broken".to_string());

        terminal.draw(|f| draw_menu(f, &menu)).unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("broken"));
        assert!(screen.contains("Failed to load broken"));
    }

    #[test]
    fn test_bank_shows_filtered_rows_and_query() {
        let mut terminal = terminal();
        let mut bank = QuestionBank::from_exam(&exam());
        for c in "owner".chars() {
            bank.push_query_char(c);
        }

        terminal.draw(|f| draw_bank(f, &bank)).unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("owner"));
        assert!(screen.contains("Explain ownership"));
        assert!(!screen.contains("borrow"));
        assert!(screen.contains("1 of 2 shown"));
    }
}
