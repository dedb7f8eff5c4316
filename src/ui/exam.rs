use crate::input_panel::PanelInput;
use crate::models::QuestionStatus;
use crate::navigator::NavCell;
use crate::render::ControlKind;
use crate::session::ExamRun;
use crate::submission::SubmissionTrigger;
use crate::ui::layout::{calculate_exam_chunks, nav_cell_rects};
use crate::utils::{calculate_wrapped_cursor_position, render_markdown};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const LOW_TIME_SECONDS: u64 = 60;

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_exam<T: SubmissionTrigger>(f: &mut Frame, run: &mut ExamRun<T>) {
    let layout = calculate_exam_chunks(f.area());

    draw_header(f, run, layout.header_area);

    let nav = &run.navigator;
    let markup = nav.surface().markup();
    let question_text = nav
        .current_question()
        .map(|q| render_markdown(&q.text))
        .unwrap_or_default();
    let question = Paragraph::new(Text::from(question_text))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(markup.heading.clone()),
        );
    f.render_widget(question, layout.question_area);

    draw_nav_panel(f, nav.nav_panel(), layout.nav_area);

    let has_text_field = nav.surface().has_text_field();
    let surface = run.navigator.surface_mut();
    if has_text_field {
        draw_text_field(f, surface, layout.answer_area);
    } else {
        draw_choices(f, surface, layout.answer_area);
    }

    draw_help(f, has_text_field, layout.help_area);
}

fn draw_header<T: SubmissionTrigger>(f: &mut Frame, run: &ExamRun<T>, area: Rect) {
    let counts = run.navigator.statuses().counts();
    let remaining = run.timer.remaining_seconds();
    let timer_style = if remaining <= LOW_TIME_SECONDS {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::styled(
            run.navigator.exam().title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(
            "  |  Answered {}  Marked {}  Unanswered {}  |  Time left ",
            counts.answered, counts.marked, counts.unanswered
        )),
        Span::styled(run.timer.countdown().to_string(), timer_style),
    ]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_choices(f: &mut Frame, surface: &PanelInput, area: Rect) {
    let mut text = Text::default();
    for (i, control) in surface.markup().controls.iter().enumerate() {
        let checked = surface.is_checked(i);
        let marker = match (control.kind, checked) {
            (ControlKind::Radio, true) => "(•)",
            (ControlKind::Radio, false) => "( )",
            (_, true) => "[x]",
            (_, false) => "[ ]",
        };
        let style = if i == surface.focus() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        text.push_line(Line::styled(
            format!("{} {}. {}", marker, i + 1, control.label),
            style,
        ));
    }

    let answer = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(answer, area);
}

fn draw_text_field(f: &mut Frame, surface: &mut PanelInput, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let text_width = area.width.saturating_sub(2) as usize;
    let (cursor_line, cursor_col) =
        calculate_wrapped_cursor_position(surface.text(), surface.cursor(), text_width);

    // Keep the cursor line on screen.
    let mut scroll = surface.scroll_y as usize;
    if cursor_line < scroll {
        scroll = cursor_line;
    } else if visible_height > 0 && cursor_line >= scroll + visible_height {
        scroll = cursor_line + 1 - visible_height;
    }
    surface.scroll_y = scroll as u16;

    let content = if surface.text().is_empty() {
        Text::styled(
            "[Type your answer here...]",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Text::from(surface.text().to_string())
    };

    let answer = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((surface.scroll_y, 0))
        .block(Block::default().borders(Borders::ALL).title("Your Answer"));
    f.render_widget(answer, area);

    let cursor_x = area.x + 1 + cursor_col as u16;
    let cursor_y = area.y + 1 + (cursor_line as u16).saturating_sub(surface.scroll_y);
    f.set_cursor_position((cursor_x, cursor_y));
}

fn draw_nav_panel(f: &mut Frame, cells: &[NavCell], area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Questions");
    f.render_widget(block, area);

    for (cell, rect) in cells.iter().zip(nav_cell_rects(area, cells.len())) {
        let mut style = match cell.status {
            QuestionStatus::Answered => Style::default().fg(Color::Black).bg(Color::Green),
            QuestionStatus::Marked => Style::default().fg(Color::Black).bg(Color::Yellow),
            QuestionStatus::Unanswered => Style::default().fg(Color::White),
        };
        if cell.current {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        let label = Paragraph::new(format!("{:^width$}", cell.index + 1, width = rect.width as usize))
            .style(style);
        f.render_widget(label, rect);
    }
}

fn draw_help(f: &mut Frame, text_mode: bool, area: Rect) {
    let mut first = if text_mode {
        vec![
            Span::styled("Type", key_style()),
            Span::from(" Answer  "),
            Span::styled("Enter", key_style()),
            Span::from(" Next  "),
        ]
    } else {
        vec![
            Span::styled("↑/↓", key_style()),
            Span::from(" Focus  "),
            Span::styled("Space/1-9", key_style()),
            Span::from(" Select  "),
            Span::styled("←/→", key_style()),
            Span::from(" Prev/Next  "),
        ]
    };
    first.extend([
        Span::styled("Tab/Shift+Tab", key_style()),
        Span::from(" Next/Prev  "),
        Span::styled("Click", key_style()),
        Span::from(" Jump"),
    ]);

    let second = vec![
        Span::styled("Ctrl+R", key_style()),
        Span::from(" Mark for Review  "),
        Span::styled("Ctrl+S/Esc", key_style()),
        Span::from(" Submit  "),
        Span::styled("Ctrl+C", key_style()),
        Span::from(" Exit App"),
    ];

    let help = Paragraph::new(vec![Line::from(first), Line::from(second)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

pub fn draw_submit_confirmation<T: SubmissionTrigger>(f: &mut Frame, run: &ExamRun<T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Submit Exam")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let counts = run.navigator.statuses().counts();
    let mut message = Text::from(Line::from("Submit your answers now? This cannot be undone."));
    if counts.unanswered + counts.marked > 0 {
        message.push_line(Line::styled(
            format!(
                "{} unanswered, {} marked for review.",
                counts.unanswered, counts.marked
            ),
            Style::default().fg(Color::Red),
        ));
    }
    message.push_line(Line::from(format!(
        "Time left {}",
        run.timer.countdown()
    )));
    let message = Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Submit)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Exam)"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
