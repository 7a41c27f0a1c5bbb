use std::collections::HashSet;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Position, Snapshot};
use crate::metrics::GameMetrics;

/// Window of the grid currently on screen, in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub min_x: i32,
    pub min_z: i32,
    pub cols: i32,
    pub rows: i32,
}

impl Viewport {
    /// Window of `cols` x `rows` cells centered on `center`
    pub fn centered(center: Position, cols: i32, rows: i32) -> Self {
        Self {
            min_x: center.x - cols / 2,
            min_z: center.z - rows / 2,
            cols,
            rows,
        }
    }
}

/// Food item closest to the head on the ground plane
pub fn nearest_food(snapshot: &Snapshot) -> Option<Position> {
    let head = snapshot.head();
    snapshot
        .foods
        .iter()
        .min_by(|a, b| head.planar_distance(a).total_cmp(&head.planar_distance(b)))
        .copied()
}

pub struct Renderer {
    grid_half: i32,
}

impl Renderer {
    pub fn new(grid_size: i32) -> Self {
        Self {
            grid_half: grid_size / 2,
        }
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot, metrics);
        frame.render_widget(stats, chunks[0]);

        let grid = self.render_grid(chunks[1], snapshot);
        frame.render_widget(grid, chunks[1]);

        let controls = self.render_controls(snapshot);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, area: Rect, snapshot: &Snapshot) -> Paragraph<'_> {
        // Each cell is two characters wide to keep cells roughly square
        let cols = i32::from(area.width.saturating_sub(2) / 2);
        let rows = i32::from(area.height.saturating_sub(2));
        let viewport = Viewport::centered(snapshot.head(), cols, rows);

        let body: HashSet<Position> = snapshot.segments.iter().copied().collect();
        let foods: HashSet<Position> = snapshot.foods.iter().copied().collect();
        let head = snapshot.head();

        let mut lines = Vec::with_capacity(rows.max(0) as usize);

        for z in viewport.min_z..viewport.min_z + viewport.rows {
            let mut spans = Vec::with_capacity(cols.max(0) as usize);

            for x in viewport.min_x..viewport.min_x + viewport.cols {
                let pos = Position::new(x, z);

                let cell = if pos == head {
                    let color = if snapshot.colliding {
                        Color::Red
                    } else {
                        Color::Cyan
                    };
                    Span::styled("■ ", Style::default().fg(color).add_modifier(Modifier::BOLD))
                } else if body.contains(&pos) {
                    let color = if snapshot.colliding {
                        Color::Red
                    } else {
                        Color::Green
                    };
                    Span::styled("□ ", Style::default().fg(color))
                } else if foods.contains(&pos) {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if x.abs() > self.grid_half || z.abs() > self.grid_half {
                    // Beyond the wrap boundary
                    Span::styled("▒▒", Style::default().fg(Color::Rgb(139, 69, 19)))
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let border_color = if snapshot.colliding {
            Color::Red
        } else {
            Color::White
        };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border_color))
                .title(format!(" Snake ({}, {}) ", head.x, head.z)),
        )
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(snapshot.len().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Steps: ", Style::default().fg(Color::Yellow)),
            Span::styled(snapshot.steps.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ];

        if let Some(food) = nearest_food(snapshot) {
            let head = snapshot.head();
            spans.push(Span::raw("    "));
            spans.push(Span::styled("Food: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(
                format!("{:+}, {:+}", food.x - head.x, food.z - head.z),
                Style::default().fg(Color::White),
            ));
        }

        if snapshot.boosted {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "BOOST",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_controls(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Magenta)),
            Span::raw(" boost | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ];

        if snapshot.colliding {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "WRAPPED",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}
