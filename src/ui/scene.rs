//! Paints the world into terminal cells.
//!
//! World units are scaled to the play area and the y axis is flipped
//! (world is y-up, the terminal grows downward). Entities are painted in
//! depth order, so the sky sits behind the mountains, the mountains behind
//! the ground and rocks, and the plane on top.

use crate::game::{Game, RunState};
use crate::scene::{Entity, Sprite};
use crate::ui::effects::explosion_frame;
use crate::ui::game_common::{render_game_over_overlay, render_status_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, game: &Game) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Propwash ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(inner);

    render_world(frame, chunks[0], game);
    render_status(frame, chunks[1], game);

    if game.run_state == RunState::Ended {
        render_game_over_overlay(
            frame,
            chunks[0],
            "CRASH!",
            &[
                format!("Final {}", game.scoreboard.label().to_lowercase()),
                String::new(),
                "Press any key to exit".to_string(),
            ],
        );
    }
}

fn render_world(frame: &mut Frame, area: Rect, game: &Game) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let xs = width as f64 / game.tuning.world_w;
    let ys = height as f64 / game.tuning.world_h;
    let mut cells = vec![vec![(' ', Style::default()); width]; height];

    let mut visible: Vec<&Entity> = game
        .scene
        .iter()
        .map(|(_, e)| e)
        .filter(|e| e.sprite.is_some())
        .collect();
    visible.sort_by_key(|e| e.depth);
    for entity in visible {
        paint_entity(entity, &mut cells, xs, ys, game);
    }

    // Score label over everything, top-left corner of the play area
    for (i, ch) in game.scoreboard.label().chars().enumerate() {
        if i + 1 < width {
            cells[0][i + 1] = (
                ch,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    let lines: Vec<Line> = cells
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, style)| Span::styled(ch.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn paint_entity(
    entity: &Entity,
    cells: &mut [Vec<(char, Style)>],
    xs: f64,
    ys: f64,
    game: &Game,
) {
    let height = cells.len();
    let width = cells[0].len();
    let world_h = game.tuning.world_h;
    let rect = entity.rect();

    let fill = match entity.sprite {
        // Sky bands stay blank; they exist for layering, not texture
        Some(Sprite::SkyTop) | Some(Sprite::SkyBottom) | None => return,
        Some(Sprite::Mountains) => ('░', Style::default().fg(Color::DarkGray)),
        Some(Sprite::Ground) => ('█', Style::default().fg(Color::Green)),
        Some(Sprite::RockTop) | Some(Sprite::RockBottom) => {
            ('▓', Style::default().fg(Color::Gray))
        }
        Some(Sprite::Plane) => {
            paint_plane(entity, cells, xs, ys, world_h, game);
            return;
        }
        Some(Sprite::Explosion) => {
            let lifetime = game.tuning.explosion_lifetime;
            let remaining = entity.ttl.unwrap_or(0.0).max(0.0);
            let progress = 1.0 - (remaining / lifetime).clamp(0.0, 1.0);
            let (ch, color) = explosion_frame(progress);
            (ch, Style::default().fg(color).add_modifier(Modifier::BOLD))
        }
    };

    let col0 = (rect.min.x * xs).floor().max(0.0) as usize;
    let col1 = ((rect.max.x * xs).ceil().max(0.0) as usize).min(width);
    let row0 = ((world_h - rect.max.y) * ys).floor().max(0.0) as usize;
    let row1 = (((world_h - rect.min.y) * ys).ceil().max(0.0) as usize).min(height);

    for row in cells.iter_mut().take(row1).skip(row0.min(row1)) {
        for cell in row.iter_mut().take(col1).skip(col0.min(col1)) {
            *cell = fill;
        }
    }
}

/// The plane is a single glyph picked by tilt, with the spinning propeller
/// one cell ahead.
fn paint_plane(
    entity: &Entity,
    cells: &mut [Vec<(char, Style)>],
    xs: f64,
    ys: f64,
    world_h: f64,
    game: &Game,
) {
    let height = cells.len();
    let width = cells[0].len();
    let col = (entity.pos.x * xs).round() as usize;
    let row_f = (world_h - entity.pos.y) * ys;
    if row_f < 0.0 {
        return;
    }
    let row = row_f.round() as usize;
    if row >= height || col >= width {
        return;
    }

    let body = if entity.rotation > 0.002 {
        '▲'
    } else if entity.rotation < -0.002 {
        '▼'
    } else {
        '►'
    };
    cells[row][col] = (
        body,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    const PROPELLER: [char; 3] = ['|', '/', '─'];
    if col + 1 < width {
        cells[row][col + 1] = (
            PROPELLER[game.propeller_frame % PROPELLER.len()],
            Style::default().fg(Color::Cyan),
        );
    }
}

fn render_status(frame: &mut Frame, area: Rect, game: &Game) {
    match game.run_state {
        RunState::Running => render_status_bar(
            frame,
            area,
            game.scoreboard.label(),
            Color::Green,
            &[("[Space/Up/Enter]", "Climb"), ("[Q/Esc]", "Quit")],
        ),
        RunState::Ended => render_status_bar(
            frame,
            area,
            "Down in flames.",
            Color::Red,
            &[("[any key]", "Exit")],
        ),
    }
}
