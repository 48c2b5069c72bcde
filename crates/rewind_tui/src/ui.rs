//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Player, Square};

use crate::app::App;
use crate::input::Focus;
use crate::viewport::LayoutMode;

const TITLE: &str = "Rewind - Tic Tac Toe";
const HELP: &str = "1-9/Enter play  Tab switch  r sort  q quit";
const ROW_SEPARATOR: &str = "───┼───┼───";

/// Width of the rendered board grid.
pub const BOARD_WIDTH: u16 = 11;
/// Height of the rendered board grid.
pub const BOARD_HEIGHT: u16 = 5;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, mode: LayoutMode) {
    let [title_area, body, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(BOARD_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    match mode {
        LayoutMode::Wide => draw_wide(frame, body, app),
        LayoutMode::Compact => draw_compact(frame, body, app),
    }

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

fn draw_wide(frame: &mut Frame, area: Rect, app: &App) {
    let [board_area, info_area] = Layout::horizontal([
        Constraint::Length(BOARD_WIDTH + 4),
        Constraint::Min(20),
    ])
    .areas(area);

    let [board_area, _] =
        Layout::vertical([Constraint::Length(BOARD_HEIGHT + 2), Constraint::Min(0)])
            .areas(board_area);
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Board "));
    frame.render_widget(board, board_area);

    let [status_area, toggle_area, moves_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
    ])
    .areas(info_area);

    let status = Paragraph::new(status_line(app))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
    frame.render_widget(toggle_line(app), toggle_area);
    draw_moves(
        frame,
        moves_area,
        app,
        Block::default().borders(Borders::ALL).title(" Moves "),
    );
}

fn draw_compact(frame: &mut Frame, area: Rect, app: &App) {
    let [board_area, status_area, toggle_area, moves_area] = Layout::vertical([
        Constraint::Length(BOARD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(board_lines(app)).alignment(Alignment::Center),
        board_area,
    );
    frame.render_widget(
        Paragraph::new(status_line(app)).alignment(Alignment::Center),
        status_area,
    );
    frame.render_widget(toggle_line(app), toggle_area);
    draw_moves(frame, moves_area, app, Block::default());
}

fn status_line(app: &App) -> Line<'static> {
    Line::from(Span::styled(
        app.view().status().clone(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

fn toggle_line(app: &App) -> Paragraph<'static> {
    Paragraph::new(format!("[r] {}", app.view().order_toggle_label()))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, block: Block<'static>) {
    let items: Vec<ListItem> = app
        .view()
        .ordered_moves()
        .into_iter()
        .map(|entry| {
            let style = if entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}. {}", entry.step(), entry.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.history_cursor()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// The board grid as styled lines.
pub fn board_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            let index = row * 3 + col;
            let square = app.view().board()[index];
            spans.push(Span::styled(
                format!(" {} ", square.symbol()),
                cell_style(app, index),
            ));
            if col < 2 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::styled(
                ROW_SEPARATOR,
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    lines
}

/// Style for one cell: player colour, winning-line background, cursor inversion.
pub fn cell_style(app: &App, index: usize) -> Style {
    let mut style = match app.view().board()[index] {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if app.view().is_highlighted(index) {
        style = style.bg(Color::Green);
    }
    if app.focus() == Focus::Board && app.cursor().to_index() == index {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}
