//! TUI rendering with ratatui
//!
//! Board, word list and progress panels for the word search game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Position;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Selection
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Board on the left, words and progress on the right
    let board_width = (app.session.board_size() * 2 + 3) as u16;
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(24)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_selection(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let size = app.session.board_size();
    let title = format!(
        "🔎 WORD SEARCH - {} ({size}x{size})",
        app.difficulty.name().to_uppercase()
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(app: &App, pos: Position) -> Style {
    let selected = app.session.selection().contains(pos);
    let is_anchor = app.session.selection().anchor() == Some(pos);

    let style = if is_anchor {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    if pos == app.cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.session.grid();

    let lines: Vec<Line> = grid
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .flat_map(|(col, cell)| {
                    let letter = cell.letter().unwrap_or('.').to_string();
                    [
                        Span::styled(letter, cell_style(app, Position::new(row, col))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Words
            Constraint::Length(3), // Progress gauge
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_words(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.remaining_words().iter().map(|word| {
        ListItem::new(format!("  ○ {word}")).style(Style::default().fg(Color::White))
    });

    let found = app.session.found_words().iter().map(|word| {
        ListItem::new(format!("  ● {word}")).style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    });

    let items: Vec<ListItem> = remaining.chain(found).collect();

    let words = List::new(items).block(
        Block::default()
            .title(" Words ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(words, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let found = app.session.found_words().len();
    let total = found + app.session.remaining_count();
    let progress_pct = if total > 0 {
        (found * 100 / total) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{found}/{total} words found"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_selection(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Completed => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Playing => (
            format!(
                " Selection ({} letters) | Enter: pick  Backspace: delete  Esc: clear ",
                app.session.selection_len()
            ),
            app.session.current_selection_text(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let cursor_text = format!("Cursor: {}", app.cursor);
    let cursor = Paragraph::new(cursor_text).alignment(Alignment::Center);
    f.render_widget(cursor, chunks[0]);

    let stats_text = format!(
        "Games: {}/{} completed",
        app.stats.games_completed, app.stats.games_started
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words_text = format!("Words found: {}", app.stats.words_found);
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help_text = if app.input_mode == InputMode::Completed {
        "q: Quit | n: New Game | 1/2/3: Difficulty"
    } else {
        "q: Quit | n: New | 1/2/3: Difficulty | ←↑↓→: Move"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
