// ui.rs - egui layout and grid painting for the Game of Life window.

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use gol_kernel::{Boundary, patterns};
use std::time::Instant;

use crate::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.kernel.step();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.kernel.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.kernel.randomize();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.kernel
                        .apply_pattern(&patterns::PATTERNS[self.selected_pattern]);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.kernel.generation()));
            });

            ui.separator();

            // Boundary mode and speed
            ui.horizontal(|ui| {
                ui.label("Boundary:");
                let mut boundary = self.kernel.boundary();
                egui::ComboBox::from_id_source("boundary_selector")
                    .selected_text(format!("{boundary:?}"))
                    .show_ui(ui, |ui| {
                        for mode in [Boundary::Constant, Boundary::Periodic, Boundary::Mirror] {
                            ui.selectable_value(&mut boundary, mode, format!("{mode:?}"));
                        }
                    });
                self.set_boundary(boundary);

                ui.separator();

                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.update_interval =
                        std::time::Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                // Show current colors
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead. Use Start/Pause to run the simulation.");

            ui.separator();

            // Draw the grid
            let box_size = 12.0;
            let spacing = 0.5;
            let rows = self.kernel.rows();
            let cols = self.kernel.cols();

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * cols as f32 - spacing,
                (box_size + spacing) * rows as f32 - spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            // Fill background
            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            for row in 0..rows {
                for col in 0..cols {
                    let x = start_pos.x + col as f32 * (box_size + spacing);
                    let y = start_pos.y + row as f32 * (box_size + spacing);

                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let cell_color = if self.kernel.cell_at(row, col) == 1 {
                        self.live_color
                    } else {
                        self.dead_color
                    };

                    painter.rect_filled(rect, 1.0, cell_color);

                    // Draw subtle border
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                    // Handle clicking (only when not running)
                    if !self.is_running && response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            if rect.contains(pos) {
                                self.kernel.toggle_cell(row, col);
                            }
                        }
                    }
                }
            }

            ui.separator();

            // Statistics
            let live_cells = self.live_cell_count();
            let total = rows * cols;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / total as f32) * 100.0
                ));
                ui.label(format!(
                    "{} worker(s) on {} core(s)",
                    self.kernel.worker_count(),
                    self.kernel.core_count()
                ));
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
