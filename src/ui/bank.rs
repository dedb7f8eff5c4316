use crate::filter::QuestionBank;
use crate::utils::truncate_string;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

pub fn draw_bank(f: &mut Frame, bank: &QuestionBank) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!("Question Bank - {}", bank.title))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let search = Paragraph::new(bank.query().to_string())
        .block(Block::default().borders(Borders::ALL).title("Search"));
    f.render_widget(search, chunks[1]);

    let rows: Vec<Row> = bank
        .visible()
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            let row = &bank.rows()[index];
            let style = if position == bank.selected() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(checkbox(bank.is_checked(index))),
                Cell::from(truncate_string(&row.text, 60)),
                Cell::from(row.topic.clone()),
                Cell::from(row.type_name.clone()),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec![
        Cell::from(checkbox(bank.all_checked())),
        Cell::from("Question"),
        Cell::from("Topic"),
        Cell::from("Type"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(format!(
        "{} of {} shown",
        bank.visible().len(),
        bank.rows().len()
    )));
    f.render_widget(table, chunks[2]);

    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Type", key),
        Span::from(" Search  "),
        Span::styled("↑/↓", key),
        Span::from(" Move  "),
        Span::styled("Enter", key),
        Span::from(" Toggle  "),
        Span::styled("Ctrl+A", key),
        Span::from(" Select All  "),
        Span::styled("Esc", key),
        Span::from(" Back"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
