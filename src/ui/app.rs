//! Main application for the Reversi GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::Side;
use crate::config::{MenuChoice, SearchConfig};
use crate::eval::{Evaluator, WeightMatrix};
use crate::game::Outcome;
use crate::search::SearchMode;

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::GameSession;
use super::notation;
use super::theme::*;

/// Main Reversi application
pub struct ReversiApp {
    session: GameSession,
    board_view: BoardView,
    show_debug: bool,
    show_hints: bool,
    /// Typed move, e.g. "d3"
    move_entry: String,
}

impl Default for ReversiApp {
    fn default() -> Self {
        Self {
            session: GameSession::from_preset(MenuChoice::HumanVsAi),
            board_view: BoardView::default(),
            show_debug: true,
            show_hints: true,
            move_entry: String::new(),
        }
    }
}

impl ReversiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for choice in MenuChoice::ALL {
                        let label = format!("{}. {}", choice.number(), choice.label());
                        if ui.button(label).clicked() {
                            self.start(choice);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Restart (N)").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("AI", |ui| self.render_ai_menu(ui));

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                    ui.checkbox(&mut self.show_hints, "Legal Move Hints");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = &self.session.config;
                    ui.label(format!(
                        "Black: {}  |  White: {}",
                        config.black.label(),
                        config.white.label()
                    ));
                });
            });
        });
    }

    /// Depth, algorithm and evaluator of the AI sides
    fn render_ai_menu(&mut self, ui: &mut egui::Ui) {
        let Some(current) = self.session.search_config() else {
            ui.label("No AI in this game");
            return;
        };
        let mut search = current;

        ui.label("Depth");
        ui.add(egui::Slider::new(&mut search.depth_limit, 1..=SearchConfig::MAX_DEPTH));
        ui.separator();

        ui.radio_value(&mut search.mode, SearchMode::AlphaBeta, SearchMode::AlphaBeta.name());
        ui.radio_value(&mut search.mode, SearchMode::Minimax, SearchMode::Minimax.name());
        ui.separator();

        ui.radio_value(&mut search.evaluator, Evaluator::Material, "Material");
        ui.radio_value(&mut search.evaluator, Evaluator::positional(), "Positional (classic)");
        ui.radio_value(
            &mut search.evaluator,
            Evaluator::Positional(WeightMatrix::from_kernel(WeightMatrix::reference_kernel())),
            "Positional (3x3 kernel)",
        );

        if search != current {
            self.session.set_search_config(search);
        }
    }

    fn start(&mut self, choice: MenuChoice) {
        let search = self.session.search_config();
        self.session = GameSession::from_preset(choice);
        if let Some(search) = search {
            if self.session.search_config().is_some() {
                self.session.set_search_config(search);
            }
        }
        self.move_entry.clear();
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.session.outcome {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &outcome);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("REVERSI").size(22.0).strong().color(TEXT_PRIMARY));
        });
        if let Some(choice) = self.session.preset {
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new(choice.label()).size(11.0).color(TEXT_MUTED));
            });
        }
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let side = self.session.state.to_move;
            let (fill, name) = match side {
                Side::Black => (BLACK_DISC, "BLACK"),
                Side::White => (WHITE_DISC, "WHITE"),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.session.outcome.is_some() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_BUSY)
                    } else if self.session.is_human_turn() {
                        (
                            format!("Your turn ({:.0}s)", self.session.move_timer.elapsed().as_secs_f32()),
                            STATUS_OK,
                        )
                    } else {
                        ("Waiting".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Disc counts per side
    fn render_score_card(&self, ui: &mut egui::Ui) {
        let snapshot = self.session.state.snapshot();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DISCS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            for (side, count) in [
                (Side::Black, snapshot.black_count),
                (Side::White, snapshot.white_count),
            ] {
                ui.horizontal(|ui| {
                    let symbol = if side == Side::Black { "●" } else { "○" };
                    ui.label(RichText::new(symbol).size(18.0).color(TEXT_PRIMARY));
                    ui.label(RichText::new(side.to_string()).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(count.to_string()).size(18.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            ui.horizontal(|ui| {
                btn_frame.show(ui, |ui| {
                    if Self::link(ui, "↩ Undo").clicked() {
                        self.session.undo();
                    }
                });
                ui.add_space(4.0);
                btn_frame.show(ui, |ui| {
                    if Self::link(ui, "Hint (H)").clicked() {
                        self.session.request_suggestion();
                    }
                });
            });

            if self.session.is_human_turn() {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let edit = ui.add(
                        egui::TextEdit::singleline(&mut self.move_entry)
                            .hint_text("e.g. d3")
                            .desired_width(80.0),
                    );
                    let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Play").clicked() || submitted {
                        self.play_entry();
                    }
                });
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "Move #{}  Passes {}",
                    self.session.move_history.len(),
                    self.session.passes
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    fn link(ui: &mut egui::Ui, text: &str) -> egui::Response {
        ui.add(
            egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                .sense(egui::Sense::click()),
        )
    }

    /// Play the move typed into the entry box
    fn play_entry(&mut self) {
        let text = std::mem::take(&mut self.move_entry);
        let result = match notation::parse(&text) {
            Some(Ok(pos)) => self.session.try_play(pos),
            Some(Err(err)) => Err(notation::parse_error(&text, Some(&err))),
            None => Err(notation::parse_error(&text, None)),
        };
        if let Err(msg) = result {
            self.session.message = Some(msg);
        }
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.session.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("{:?}", result.kind)).size(11.0).strong().color(STATUS_OK));
                    let score = result.score.map_or("-".to_string(), |s| s.to_string());
                    ui.label(RichText::new(format!("Score: {score}")).size(10.0).color(TEXT_SECONDARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(
                            RichText::new(format!("{} nodes, {} cutoffs", result.nodes, result.cutoffs))
                                .size(10.0)
                                .color(TEXT_MUTED),
                        );
                    });
                });
            });

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("→ {}", notation::to_notation(result.best_move)))
                    .size(12.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &Outcome) {
        let headline = match outcome.winner {
            Some(Side::Black) => "BLACK WINS",
            Some(Side::White) => "WHITE WINS",
            None => "TIE",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!("{} - {}", outcome.black_count, outcome.white_count))
                            .size(22.0)
                            .color(WIN_HIGHLIGHT),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} moves, {} passes", outcome.moves, outcome.passes))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if Self::link(ui, "New Game").clicked() {
                                self.session.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0).color(STATUS_ALERT));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let legal = self.session.legal_moves();
            let snapshot = self.session.state.snapshot();
            let overlay = BoardOverlay {
                legal: &legal,
                last_move: self.session.last_move.as_ref(),
                suggested_move: self.session.suggested_move,
                show_hints: self.show_hints,
                accept_input: self.session.is_human_turn() && !self.session.is_ai_thinking(),
            };

            if let Some(pos) = self.board_view.show(ui, &snapshot, &overlay) {
                if let Err(msg) = self.session.try_play(pos) {
                    self.session.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::H) {
                self.session.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for ReversiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();
        if self.session.is_ai_turn() && !self.session.is_ai_thinking() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() || self.session.is_human_turn() {
            ctx.request_repaint();
        }
    }
}
