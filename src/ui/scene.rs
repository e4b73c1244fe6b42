//! UI rendering for the flappy game screen.

use crate::assets::{Sprite, SpriteSet};
use crate::game::types::{GamePhase, Pipe};
use crate::render::FrameView;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// One terminal cell of the play field before styling.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    style: Style,
}

impl Cell {
    const EMPTY: Cell = Cell {
        ch: ' ',
        style: Style::new(),
    };
}

/// Mapping from logical field units to terminal cells.
#[derive(Debug, Clone, Copy)]
struct CellGrid {
    cols: usize,
    rows: usize,
    cell_w: f64,
    cell_h: f64,
}

impl CellGrid {
    fn new(area: Rect, field_width: f64, field_height: f64) -> Self {
        let cols = area.width as usize;
        let rows = area.height as usize;
        Self {
            cols,
            rows,
            cell_w: field_width / cols.max(1) as f64,
            cell_h: field_height / rows.max(1) as f64,
        }
    }

    fn center_x(&self, col: usize) -> f64 {
        (col as f64 + 0.5) * self.cell_w
    }

    fn center_y(&self, row: usize) -> f64 {
        (row as f64 + 0.5) * self.cell_h
    }

    /// Cells covering `[start, end)` along one axis, at least one cell wide
    /// when any part is on screen. Empty when the range ends at or before 0.
    fn span(start: f64, end: f64, cell: f64, limit: usize) -> (usize, usize) {
        if end <= 0.0 {
            return (0, 0);
        }
        let first = (start / cell).floor().max(0.0) as usize;
        let last = ((end / cell).ceil().max(0.0) as usize).max(first + 1);
        (first.min(limit), last.min(limit))
    }
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, view: &FrameView<'_>, sprites: &SpriteSet) {
    frame.render_widget(Clear, area);

    let border_color = match view.phase {
        GamePhase::GameOver => Color::Red,
        _ => Color::Cyan,
    };
    let block = Block::default()
        .title(" Flappy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    render_play_area(frame, inner, view, sprites);
    render_score(frame, inner, view);
    render_overlay(frame, inner, view);
}

/// Draw background tiles, pipes and the bird.
fn render_play_area(frame: &mut Frame, area: Rect, view: &FrameView<'_>, sprites: &SpriteSet) {
    let grid = CellGrid::new(area, view.config.field_width, view.config.field_height);
    let mut cells = vec![vec![Cell::EMPTY; grid.cols]; grid.rows];

    let background_style = Style::default().fg(Color::DarkGray);
    for offset in view.background_offsets {
        draw_background_tile(&mut cells, &grid, &sprites.background, offset, view, background_style);
    }

    let pipe_style = Style::default().fg(Color::Green);
    for pipe in &view.world.pipes {
        draw_pipe(&mut cells, &grid, &sprites.pipe, pipe, view.config.pipe_width, pipe_style);
    }

    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    draw_bird(&mut cells, &grid, &sprites.bird, view, bird_style);

    let lines: Vec<Line> = cells
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|cell| Span::styled(cell.ch.to_string(), cell.style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_background_tile(
    cells: &mut [Vec<Cell>],
    grid: &CellGrid,
    sprite: &Sprite,
    offset: f64,
    view: &FrameView<'_>,
    style: Style,
) {
    let tile_width = view.config.field_width;
    let field_height = view.config.field_height;
    for (row, line) in cells.iter_mut().enumerate() {
        let v = grid.center_y(row) / field_height;
        for (col, cell) in line.iter_mut().enumerate() {
            let x = grid.center_x(col);
            if x < offset || x >= offset + tile_width {
                continue;
            }
            let ch = sprite.sample((x - offset) / tile_width, v);
            if ch != ' ' {
                *cell = Cell { ch, style };
            }
        }
    }
}

/// Pipes are drawn starting from the gap edge: the top column mirrored, the
/// bottom column upright, repeating the sprite's last row for the body.
fn draw_pipe(
    cells: &mut [Vec<Cell>],
    grid: &CellGrid,
    sprite: &Sprite,
    pipe: &Pipe,
    pipe_width: f64,
    style: Style,
) {
    let (first_col, last_col) = CellGrid::span(pipe.x, pipe.x + pipe_width, grid.cell_w, grid.cols);
    let span_cols = (last_col - first_col).max(1);

    for (row, line) in cells.iter_mut().enumerate() {
        let y = grid.center_y(row);
        let from_edge = if y < pipe.top {
            (pipe.top - y) / grid.cell_h
        } else if y >= pipe.bottom {
            (y - pipe.bottom) / grid.cell_h
        } else {
            continue;
        };
        let sprite_row = from_edge as usize;

        for col in first_col..last_col {
            let u = (col - first_col) as f64 / span_cols as f64;
            let sprite_col = (u * sprite.width() as f64) as usize;
            let ch = sprite.cell(sprite_row, sprite_col);
            if ch != ' ' {
                line[col] = Cell { ch, style };
            }
        }
    }
}

fn draw_bird(
    cells: &mut [Vec<Cell>],
    grid: &CellGrid,
    sprite: &Sprite,
    view: &FrameView<'_>,
    style: Style,
) {
    let bird = &view.world.bird;
    let (first_col, last_col) = CellGrid::span(bird.x, bird.right(), grid.cell_w, grid.cols);
    let (first_row, last_row) = CellGrid::span(bird.y, bird.bottom(), grid.cell_h, grid.rows);
    let span_cols = (last_col - first_col).max(1) as f64;
    let span_rows = (last_row - first_row).max(1) as f64;

    for row in first_row..last_row {
        let v = ((row - first_row) as f64 + 0.5) / span_rows;
        for col in first_col..last_col {
            let u = ((col - first_col) as f64 + 0.5) / span_cols;
            let ch = sprite.sample(u, v);
            if ch != ' ' {
                cells[row][col] = Cell { ch, style };
            }
        }
    }
}

fn render_score(frame: &mut Frame, area: Rect, view: &FrameView<'_>) {
    let text = format!(" {} ", view.score_text());
    let width = (text.chars().count() as u16).min(area.width);
    let score_area = Rect::new(area.x, area.y, width, 1);
    let score = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(score, score_area);
}

/// Ready and game-over text, centered over the play field.
fn render_overlay(frame: &mut Frame, area: Rect, view: &FrameView<'_>) {
    match view.phase {
        GamePhase::Running => {}
        GamePhase::Ready => {
            let title_style = Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD);
            let prompt_style = Style::default().fg(Color::White);
            let lines = view.overlay_lines();
            if let [title, prompt] = lines {
                render_centered_line(frame, area, area.height / 3, title, title_style);
                render_centered_line(frame, area, area.height / 2, prompt, prompt_style);
            }
        }
        GamePhase::GameOver => {
            let style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
            for text in view.overlay_lines() {
                render_centered_line(frame, area, area.height / 2, text, style);
            }
        }
    }
}

fn render_centered_line(frame: &mut Frame, area: Rect, row: u16, text: &str, style: Style) {
    let row = row.min(area.height.saturating_sub(1));
    let line_area = Rect::new(area.x, area.y + row, area.width, 1);
    let paragraph = Paragraph::new(Line::from(Span::styled(text.to_string(), style)))
        .alignment(Alignment::Center);
    frame.render_widget(Clear, line_area);
    frame.render_widget(paragraph, line_area);
}
