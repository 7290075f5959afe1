//! Board rendering for the Reversi GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Cell, Pos, Side, BOARD_SIZE};
use crate::game::BoardSnapshot;
use crate::rules::MoveInfo;

use super::notation::column_label;
use super::theme::*;

/// What the board should highlight this frame
pub struct BoardOverlay<'a> {
    pub legal: &'a [Pos],
    pub last_move: Option<&'a MoveInfo>,
    pub suggested_move: Option<Pos>,
    pub show_hints: bool,
    /// A human is to move and clicks are accepted
    pub accept_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked legal cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: &BoardSnapshot,
        overlay: &BoardOverlay<'_>,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.play_area(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_discs(&painter, snapshot);

        if let Some(info) = overlay.last_move {
            self.draw_last_move(&painter, info);
        }
        if overlay.show_hints && overlay.accept_input {
            for &pos in overlay.legal {
                painter.circle_filled(
                    self.cell_center(pos),
                    self.cell_size * HINT_RADIUS_RATIO,
                    legal_hint(),
                );
            }
        }
        if let Some(pos) = overlay.suggested_move {
            self.draw_suggestion(&painter, pos, snapshot.to_move);
        }

        if !overlay.accept_input {
            return None;
        }

        let pointer = response.hover_pos()?;
        let pos = self.screen_to_board(pointer)?;
        let is_legal = overlay.legal.contains(&pos);
        if snapshot.get(pos) == Cell::Empty {
            self.draw_hover_preview(&painter, pos, snapshot.to_move, is_legal);
        }

        (response.clicked() && is_legal).then_some(pos)
    }

    fn play_area(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        )
    }

    /// Draw the 8x8 cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let area = self.play_area();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [
                    Pos2::new(area.min.x + offset, area.min.y),
                    Pos2::new(area.min.x + offset, area.max.y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    Pos2::new(area.min.x, area.min.y + offset),
                    Pos2::new(area.max.x, area.min.y + offset),
                ],
                stroke,
            );
        }
    }

    /// Column letters on top, row numbers on the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let area = self.play_area();

        for i in 0..BOARD_SIZE {
            let center = (i as f32 + 0.5) * self.cell_size;

            let pos = Pos2::new(area.min.x + center, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                column_label(i),
                font.clone(),
                COORD_LABEL,
            );

            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, area.min.y + center);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{}", i + 1),
                font.clone(),
                COORD_LABEL,
            );
        }
    }

    fn draw_discs(&self, painter: &Painter, snapshot: &BoardSnapshot) {
        for pos in Pos::all() {
            if let Some(side) = snapshot.get(pos).side() {
                self.draw_disc(painter, pos, side);
            }
        }
    }

    /// Draw a single disc with a shadow
    fn draw_disc(&self, painter: &Painter, pos: Pos, side: Side) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match side {
            Side::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_DISC);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_DISC_HIGHLIGHT,
                );
            }
            Side::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_DISC);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_DISC_SHADOW),
                );
            }
        }
    }

    /// Marker on the placed disc, rings around the flipped ones
    fn draw_last_move(&self, painter: &Painter, info: &MoveInfo) {
        painter.circle_filled(
            self.cell_center(info.pos),
            LAST_MOVE_MARKER_RADIUS,
            LAST_MOVE_MARKER,
        );
        let radius = self.cell_size * DISC_RADIUS_RATIO + 2.0;
        for pos in info.flipped.iter_ones() {
            painter.circle_stroke(self.cell_center(pos), radius, Stroke::new(2.0, FLIP_RING));
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, side: Side) {
        let center = self.cell_center(pos);
        let (fill, text) = match side {
            Side::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), WHITE_DISC),
            Side::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), BLACK_DISC),
        };
        painter.circle_filled(center, self.cell_size * DISC_RADIUS_RATIO, fill);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(16.0),
            text,
        );
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, side: Side, is_legal: bool) {
        let color = match (is_legal, side) {
            (true, Side::Black) => Color32::from_rgba_unmultiplied(20, 20, 20, 90),
            (true, Side::White) => Color32::from_rgba_unmultiplied(240, 240, 240, 90),
            (false, _) => hover_invalid(),
        };
        painter.circle_filled(self.cell_center(pos), self.cell_size * DISC_RADIUS_RATIO, color);
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.play_area().min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Pos::try_new(row, col).ok()
    }

    /// Screen coordinates of the center of a cell
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let area = self.play_area();
        Pos2::new(
            area.min.x + (pos.col as f32 + 0.5) * self.cell_size,
            area.min.y + (pos.row as f32 + 0.5) * self.cell_size,
        )
    }
}
