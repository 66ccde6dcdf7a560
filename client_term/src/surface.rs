//! Terminal renderer
//!
//! Scales window coordinates onto a grid of character cells and writes the
//! grid out with crossterm. Shapes become solid background cells; text is one
//! character per cell regardless of its nominal size.

use std::io::{self, Write};

use crossterm::{cursor, queue, style};
use game_core::{Aabb, Anchor, Color, Surface, Text};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    fn blank(bg: Color) -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg,
        }
    }
}

pub struct TerminalSurface {
    world: Vec2,
    columns: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl TerminalSurface {
    pub fn new(world: Vec2, columns: u16, rows: u16) -> Self {
        Self {
            world,
            columns,
            rows,
            cells: vec![Cell::blank(Color::BLACK); columns as usize * rows as usize],
        }
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        self.cells = vec![Cell::blank(Color::BLACK); columns as usize * rows as usize];
    }

    pub fn size(&self) -> (u16, u16) {
        (self.columns, self.rows)
    }

    pub fn cell(&self, column: u16, row: u16) -> Option<&Cell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.columns as usize + column as usize)
    }

    /// Window position at the middle of a cell, for mouse clicks
    pub fn cell_to_world(&self, column: u16, row: u16) -> Vec2 {
        let scale = self.scale();
        if scale.x <= 0.0 || scale.y <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            (column as f32 + 0.5) / scale.x,
            (row as f32 + 0.5) / scale.y,
        )
    }

    /// Cells per window pixel on each axis
    fn scale(&self) -> Vec2 {
        Vec2::new(
            self.columns as f32 / self.world.x,
            self.rows as f32 / self.world.y,
        )
    }

    fn column_at(&self, x: f32) -> i32 {
        (x * self.scale().x).floor() as i32
    }

    fn row_at(&self, y: f32) -> i32 {
        (y * self.scale().y).floor() as i32
    }

    fn cell_mut(&mut self, column: i32, row: i32) -> Option<&mut Cell> {
        if column < 0 || row < 0 || column >= self.columns as i32 || row >= self.rows as i32 {
            return None;
        }
        let index = row as usize * self.columns as usize + column as usize;
        self.cells.get_mut(index)
    }

    /// Write the whole grid, changing colours only where they differ
    pub fn flush(&self, out: &mut impl Write) -> io::Result<()> {
        let mut colors: Option<(Color, Color)> = None;

        for row in 0..self.rows {
            queue!(out, cursor::MoveTo(0, row))?;
            for column in 0..self.columns {
                let Some(cell) = self.cell(column, row) else {
                    continue;
                };
                if colors != Some((cell.fg, cell.bg)) {
                    queue!(
                        out,
                        style::SetForegroundColor(to_terminal(cell.fg)),
                        style::SetBackgroundColor(to_terminal(cell.bg))
                    )?;
                    colors = Some((cell.fg, cell.bg));
                }
                queue!(out, style::Print(cell.ch))?;
            }
        }

        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

fn to_terminal(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self, color: Color) {
        self.cells.fill(Cell::blank(color));
    }

    /// Fills every cell the rectangle overlaps
    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        let scale = self.scale();
        let first_column = (rect.min.x * scale.x).floor() as i32;
        let last_column = (rect.max.x * scale.x).ceil() as i32;
        let first_row = (rect.min.y * scale.y).floor() as i32;
        let last_row = (rect.max.y * scale.y).ceil() as i32;

        for row in first_row.max(0)..last_row.min(self.rows as i32) {
            for column in first_column.max(0)..last_column.min(self.columns as i32) {
                if let Some(cell) = self.cell_mut(column, row) {
                    *cell = Cell::blank(color);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let extent = Vec2::splat(radius);
        self.fill_rect(Aabb::new(center - extent, center + extent), color);
    }

    fn draw_text(&mut self, text: &Text) {
        let width = text.content.chars().count() as i32;
        let mut column = self.column_at(text.at.x);
        let row = self.row_at(text.at.y);
        if text.anchor == Anchor::Center {
            column -= width / 2;
        }

        for (offset, ch) in text.content.chars().enumerate() {
            if let Some(cell) = self.cell_mut(column + offset as i32, row) {
                cell.ch = ch;
                cell.fg = text.color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::TextSize;

    fn surface() -> TerminalSurface {
        // 8 window pixels per column, 25 per row
        TerminalSurface::new(Vec2::new(640.0, 600.0), 80, 24)
    }

    fn row_text(surface: &TerminalSurface, row: u16) -> String {
        (0..surface.size().0)
            .filter_map(|column| surface.cell(column, row))
            .map(|cell| cell.ch)
            .collect()
    }

    #[test]
    fn test_rect_fills_overlapped_cells() {
        let mut surface = surface();
        surface.clear(Color::BLACK);
        let paddle = Aabb::from_pos_size(Vec2::new(30.0, 260.0), Vec2::new(20.0, 100.0));
        surface.fill_rect(paddle, Color::WHITE);

        assert_eq!(surface.cell(3, 12).unwrap().bg, Color::WHITE);
        assert_eq!(surface.cell(5, 12).unwrap().bg, Color::WHITE);
        assert_eq!(surface.cell(7, 12).unwrap().bg, Color::BLACK);
        assert_eq!(surface.cell(4, 5).unwrap().bg, Color::BLACK);
    }

    #[test]
    fn test_shapes_off_screen_are_clipped() {
        let mut surface = surface();
        surface.clear(Color::BLACK);
        surface.fill_circle(Vec2::new(-5.0, 300.0), 10.0, Color::WHITE);
        surface.fill_rect(
            Aabb::new(Vec2::new(600.0, 550.0), Vec2::new(2000.0, 2000.0)),
            Color::WHITE,
        );

        assert_eq!(surface.cell(0, 12).unwrap().bg, Color::WHITE);
        assert_eq!(surface.cell(79, 23).unwrap().bg, Color::WHITE);
        assert!(surface.cell(80, 23).is_none());
    }

    #[test]
    fn test_centered_text() {
        let mut surface = surface();
        surface.clear(Color::BLACK);
        surface.draw_text(&Text::centered(
            "PONG",
            Vec2::new(320.0, 80.0),
            TextSize::TITLE,
        ));

        let row = row_text(&surface, 3);
        assert_eq!(&row[38..42], "PONG");
        assert_eq!(surface.cell(38, 3).unwrap().fg, Color::WHITE);
    }

    #[test]
    fn test_text_keeps_background() {
        let mut surface = surface();
        surface.clear(Color::BLACK);
        let button = Aabb::from_pos_size(Vec2::new(220.0, 250.0), Vec2::new(200.0, 60.0));
        surface.fill_rect(button, Color::BUTTON_GREY);
        surface.draw_text(&Text::centered(
            "Vs AI",
            Vec2::new(320.0, 280.0),
            TextSize::BUTTON,
        ));

        let cell = surface.cell(38, 11).unwrap();
        assert_eq!(cell.ch, 'V');
        assert_eq!(cell.bg, Color::BUTTON_GREY);
    }

    #[test]
    fn test_clicked_cell_maps_back_into_it() {
        let surface = surface();
        let point = surface.cell_to_world(40, 11);
        assert!((point.x - 324.0).abs() < 1e-3, "x = {}", point.x);
        assert!((point.y - 287.5).abs() < 1e-3, "y = {}", point.y);

        let button = Aabb::from_pos_size(Vec2::new(220.0, 250.0), Vec2::new(200.0, 60.0));
        assert!(button.contains(point));
    }

    #[test]
    fn test_empty_terminal() {
        let mut surface = TerminalSurface::new(Vec2::new(640.0, 600.0), 0, 0);
        surface.clear(Color::BLACK);
        surface.draw_text(&Text::new("x", Vec2::ZERO, TextSize::LABEL));
        assert_eq!(surface.cell_to_world(0, 0), Vec2::ZERO);

        surface.resize(10, 4);
        assert_eq!(surface.size(), (10, 4));
        assert!(surface.cell(9, 3).is_some());
    }

    #[test]
    fn test_flush_writes_text() {
        let mut surface = surface();
        surface.clear(Color::BLACK);
        surface.draw_text(&Text::new("Lives: 3", Vec2::new(20.0, 20.0), TextSize::LABEL));

        let mut out = Vec::new();
        surface.flush(&mut out).unwrap();
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("Lives: 3"));
    }
}
