//! Stateless UI rendering for Simon.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use strictly_simon::Color as Tile;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Min(10),   // Tiles
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let heading = Paragraph::new(app.heading())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(heading, chunks[0]);

    draw_tiles(frame, chunks[1], app);

    let status_text = match (app.last_result(), app.status()) {
        (Some(outcome), _) => outcome.to_string(),
        (None, Some(status)) => status.to_string(),
        (None, None) => String::new(),
    };
    let note = app
        .last_sound()
        .map(|tile| format!("  ♪ {}", tile))
        .unwrap_or_default();
    let status = Paragraph::new(Line::from(vec![
        Span::styled(status_text, Style::default().fg(Color::Yellow)),
        Span::styled(note, Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help_text = if app.start_available() {
        "S/Enter: Start | Q: Quit"
    } else {
        "R G B Y or 1-4: Tile | Arrows + Space: Select | Q: Quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_tiles(frame: &mut Frame, area: Rect, app: &App) {
    let grid = center_rect(area, 40, 10);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(grid);

    for (row, tiles) in rows.iter().zip([[Tile::Red, Tile::Green], [Tile::Blue, Tile::Yellow]]) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(*row);

        for (col, tile) in cols.iter().zip(tiles) {
            draw_tile(frame, *col, app, tile);
        }
    }
}

fn draw_tile(frame: &mut Frame, area: Rect, app: &App, tile: Tile) {
    let (dim, lit) = palette(tile);
    let is_lit = app.flashing() == Some(tile);

    let body = if is_lit {
        Style::default().bg(lit).fg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(dim)
    };

    let selected = app.input_allowed() && app.cursor() == tile;
    let border = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(dim)
    };

    let label = format!("{} [{}]", tile.label().to_uppercase(), tile.shortcut());
    let paragraph = Paragraph::new(label)
        .style(body)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if selected { BorderType::Double } else { BorderType::Plain })
                .border_style(border),
        );

    frame.render_widget(paragraph, area);
}

/// Resting and lit terminal colors for a tile.
fn palette(tile: Tile) -> (Color, Color) {
    match tile {
        Tile::Red => (Color::Red, Color::LightRed),
        Tile::Green => (Color::Green, Color::LightGreen),
        Tile::Blue => (Color::Blue, Color::LightBlue),
        Tile::Yellow => (Color::Yellow, Color::LightYellow),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
