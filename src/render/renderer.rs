use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::canvas::CellCanvas;
use crate::game::drawable::BACKGROUND_COLOR;
use crate::game::{BoardGeometry, Drawable, GameState, Rgb};
use crate::metrics::GameMetrics;

/// Title of the game window
pub const WINDOW_TITLE: &str = "Изгиб Питона";

/// Terminal columns used to draw one board cell; keeps cells roughly square
const COLUMNS_PER_CELL: u16 = 2;

const HEADER_ROWS: u16 = 1;
const FOOTER_ROWS: u16 = 1;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Terminal size (columns, rows) needed to show the whole board
    pub fn required_size(board: &BoardGeometry) -> (u16, u16) {
        let (width, height) = Self::board_size(board);
        (width, height + HEADER_ROWS + FOOTER_ROWS)
    }

    /// Bordered board size in terminal cells
    fn board_size(board: &BoardGeometry) -> (u16, u16) {
        (
            board.cols() as u16 * COLUMNS_PER_CELL + 2,
            board.rows() as u16 + 2,
        )
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_ROWS),
                Constraint::Min(0),
                Constraint::Length(FOOTER_ROWS),
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        let (board_width, board_height) = Self::board_size(&state.board);
        let area = chunks[1];

        if area.width < board_width || area.height < board_height {
            let (need_width, need_height) = Self::required_size(&state.board);
            let notice = self.render_too_small(need_width, need_height);
            frame.render_widget(notice, area);
        } else {
            let board_area = Rect::new(
                area.x + (area.width - board_width) / 2,
                area.y + (area.height - board_height) / 2,
                board_width,
                board_height,
            );
            let grid = self.render_grid(state);
            frame.render_widget(grid, board_area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Paint the entities onto a fresh canvas: background, food, then snake
    pub fn paint(&self, state: &GameState) -> CellCanvas {
        let mut canvas = CellCanvas::new(state.board, BACKGROUND_COLOR);
        canvas.clear();
        state.food.draw(&mut canvas);
        state.snake.draw(&mut canvas);
        canvas
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let canvas = self.paint(state);
        let cell = " ".repeat(COLUMNS_PER_CELL as usize);

        let lines: Vec<Line> = (0..canvas.rows())
            .map(|row| {
                let spans: Vec<Span> = canvas
                    .row(row)
                    .iter()
                    .map(|color| {
                        Span::styled(cell.clone(), Style::default().bg(to_color(*color)))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(format!(" {} ", WINDOW_TITLE)),
        )
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.snake.length.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_length.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Resets: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.resets.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_too_small(&self, need_width: u16, need_height: u16) -> Paragraph<'_> {
        let text = vec![
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("need {}x{}", need_width, need_height),
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
