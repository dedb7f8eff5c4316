use crossbeam_channel::{never, select, unbounded, Receiver};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use exam_runner::ui::{calculate_exam_chunks, nav_cell_at};
use exam_runner::{
    draw_bank, draw_exam, draw_menu, draw_submit_confirmation, draw_summary, get_exam_files,
    handle_bank_input, handle_exam_input, handle_menu_input, handle_nav_click,
    handle_submit_confirm_input, handle_tick, load_exam, logger, AppState, Config, ExamRun,
    FileSubmitter, Menu, MenuAction, QuestionBank,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io;
use std::thread;

fn spawn_input_reader() -> io::Result<Receiver<Event>> {
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name("exam-runner::input".to_string())
        .spawn(move || {
            while let Ok(event) = event::read() {
                if tx.send(event).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

fn main() -> io::Result<()> {
    let config = Config::from_env();
    logger::init(&config.log_file);
    logger::log(&format!("Starting with exam dir {}", config.exam_dir.display()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, config: &Config) -> io::Result<()> {
    let events = spawn_input_reader()?;
    let idle = never();

    let mut app_state = AppState::Menu;
    let mut menu = Menu::new(get_exam_files(&config.exam_dir));
    let mut exam_run: Option<ExamRun<FileSubmitter>> = None;
    let mut bank: Option<QuestionBank> = None;
    let mut frame_area = Rect::default();

    loop {
        terminal.draw(|f| {
            frame_area = f.area();
            match app_state {
                AppState::Menu => draw_menu(f, &menu),
                AppState::Exam => {
                    if let Some(run) = exam_run.as_mut() {
                        draw_exam(f, run);
                    }
                }
                AppState::SubmitConfirm => {
                    if let Some(run) = &exam_run {
                        draw_submit_confirmation(f, run);
                    }
                }
                AppState::Summary => {
                    if let Some(run) = &exam_run {
                        draw_summary(f, run);
                    }
                }
                AppState::Bank => {
                    if let Some(bank) = &bank {
                        draw_bank(f, bank);
                    }
                }
            }
        })?;

        // Key events and timer ticks are handled one at a time on this thread.
        // When both are ready, select! picks either.
        let ticker = exam_run.as_ref().map_or(&idle, |run| &run.ticker);
        let input = select! {
            recv(ticker) -> _ => None,
            recv(events) -> event => Some(event),
        };

        let Some(event) = input else {
            if let Some(run) = exam_run.as_mut() {
                handle_tick(run, &mut app_state);
            }
            continue;
        };
        let Ok(event) = event else {
            logger::log("Input reader stopped, exiting");
            break;
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    logger::log("Exiting on Ctrl+C");
                    break;
                }

                match app_state {
                    AppState::Menu => match handle_menu_input(&mut menu, key) {
                        MenuAction::StartExam(path) => match load_exam(&path) {
                            Ok(exam) => {
                                menu.error = None;
                                exam_run = Some(ExamRun::start(
                                    exam,
                                    FileSubmitter::new(&config.output_dir),
                                    config.restore_answers,
                                ));
                                app_state = AppState::Exam;
                            }
                            Err(e) => {
                                logger::log(&format!("Failed to load {}: {}", path.display(), e));
                                menu.error = Some(format!("Failed to load {}: {}", path.display(), e));
                            }
                        },
                        MenuAction::OpenBank(path) => match load_exam(&path) {
                            Ok(exam) => {
                                menu.error = None;
                                bank = Some(QuestionBank::from_exam(&exam));
                                app_state = AppState::Bank;
                            }
                            Err(e) => {
                                logger::log(&format!("Failed to load {}: {}", path.display(), e));
                                menu.error = Some(format!("Failed to load {}: {}", path.display(), e));
                            }
                        },
                        MenuAction::Quit => break,
                        MenuAction::None => {}
                    },
                    AppState::Exam => {
                        if let Some(run) = exam_run.as_mut() {
                            handle_exam_input(run, key, &mut app_state);
                        }
                    }
                    AppState::SubmitConfirm => {
                        if let Some(run) = exam_run.as_mut() {
                            handle_submit_confirm_input(run, key, &mut app_state);
                        }
                    }
                    AppState::Summary => match key.code {
                        KeyCode::Char('m') => {
                            exam_run = None;
                            menu = Menu::new(get_exam_files(&config.exam_dir));
                            app_state = AppState::Menu;
                        }
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    },
                    AppState::Bank => {
                        if let Some(bank) = bank.as_mut() {
                            handle_bank_input(bank, key, &mut app_state);
                        }
                    }
                }
            }
            Event::Mouse(mouse)
                if app_state == AppState::Exam
                    && mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
            {
                if let Some(run) = exam_run.as_mut() {
                    let nav_area = calculate_exam_chunks(frame_area).nav_area;
                    let count = run.navigator.exam().len();
                    if let Some(index) = nav_cell_at(nav_area, count, mouse.column, mouse.row) {
                        handle_nav_click(run, index);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}
