use anyhow::Result;
use content_board_config::Config;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    process,
};

mod app;
mod text;

use app::{Action, App};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    match args.get(1).map(String::as_str) {
        None => {}
        Some("--html") if args.len() == 2 => {
            println!("{}", config.initial_board().preview_html());
            return Ok(());
        }
        Some(_) => {
            eprintln!("Usage: {} [--html]", args[0]);
            process::exit(1);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.initial_board(), config.new_item_kind);

    let res = run_app(&mut terminal, &mut app, &config.window_title);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    title: &str,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app, title))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == Action::Quit
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App, title: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Block list panel
    let block_items: Vec<ListItem> = app
        .board
        .blocks()
        .iter()
        .map(|block| {
            let marker = if app.board.is_editing(&block.id) {
                "✎ "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("{:<6}", block.kind.as_str()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!(" {}", block.id)),
            ]))
        })
        .collect();

    let blocks_list = List::new(block_items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(blocks_list, chunks[0], &mut app.list_state);

    // Content panel
    let content_title = match app.board.active_id() {
        Some(id) => format!("Editing {id}"),
        None => "Preview".to_string(),
    };
    let content_text: Vec<Line> = app.content_lines().into_iter().map(Line::from).collect();
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(content_title))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = if app.board.session().is_some() {
        Line::from("Esc: Leave editor")
    } else {
        Line::from(vec![
            Span::raw("q: Quit | ↑/k ↓/j: Move | e: Edit | d: Delete | "),
            Span::raw(format!("n: Kind ({}) | a: Add", app.new_kind.label())),
        ])
    };

    f.render_widget(Paragraph::new(help_text), rows[1]);
}
