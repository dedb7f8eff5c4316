use crate::models::{QuestionStatus, SubmitReason};
use crate::session::ExamRun;
use crate::submission::{SubmissionTrigger, SubmitOutcome};
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary<T: SubmissionTrigger>(f: &mut Frame, run: &ExamRun<T>) {
    let layout = calculate_summary_chunks(f.area());
    let nav = &run.navigator;
    let exam = nav.exam();

    let title = Paragraph::new(format!("Exam Submitted - {}", exam.title))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut text = Text::default();
    let reason = match run.submit_reason {
        Some(SubmitReason::TimeExpired) => "Time's up! The exam was submitted automatically.",
        Some(SubmitReason::Manual) => "You submitted the exam.",
        None => "The exam has not been submitted.",
    };
    text.push_line(Line::from(reason));

    match &run.outcome {
        Some(SubmitOutcome::Failed(error)) => text.push_line(Line::styled(
            format!("Submission failed: {}", error),
            Style::default().fg(Color::Red),
        )),
        Some(_) => text.push_line(Line::styled(
            "Answers recorded.",
            Style::default().fg(Color::Green),
        )),
        None => {}
    }

    let counts = nav.statuses().counts();
    text.push_line(Line::from(format!(
        "Answered {} of {} ({} marked for review)",
        counts.answered,
        exam.len(),
        counts.marked
    )));
    text.push_line(Line::from(""));

    for (i, question) in exam.questions.iter().enumerate() {
        let (marker, color) = match nav.statuses().status_of(i) {
            QuestionStatus::Answered => ("[✓]", Color::Green),
            QuestionStatus::Marked => ("[?]", Color::Yellow),
            QuestionStatus::Unanswered => ("[ ]", Color::DarkGray),
        };
        text.push_line(Line::from(vec![
            Span::styled(marker, Style::default().fg(color)),
            Span::from(format!(" {}. {}", i + 1, truncate_string(&question.text, 60))),
        ]));
        if let Some(answer) = nav.answers().get(&question.id) {
            text.push_line(Line::from(format!(
                "    Your Answer: {}",
                truncate_string(&answer.display(), 56)
            )));
        }
    }

    let summary = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.content_area);

    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("m", key),
        Span::from(" Main Menu  "),
        Span::styled("q/Esc", key),
        Span::from(" Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
