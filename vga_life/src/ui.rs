// ui.rs - egui front end painting the display buffer

use crate::vga::{self, Cell, VgaBuffer};
use crate::LifeApp;
use eframe::egui;
use egui::{Align2, Color32, FontId, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

/// The classic 16-colour text-mode palette, indexed by attribute nibble.
const PALETTE: [Color32; 16] = [
    Color32::from_rgb(0x00, 0x00, 0x00), // black
    Color32::from_rgb(0x00, 0x00, 0xAA), // blue
    Color32::from_rgb(0x00, 0xAA, 0x00), // green
    Color32::from_rgb(0x00, 0xAA, 0xAA), // cyan
    Color32::from_rgb(0xAA, 0x00, 0x00), // red
    Color32::from_rgb(0xAA, 0x00, 0xAA), // magenta
    Color32::from_rgb(0xAA, 0x55, 0x00), // brown
    Color32::from_rgb(0xAA, 0xAA, 0xAA), // light grey
    Color32::from_rgb(0x55, 0x55, 0x55), // dark grey
    Color32::from_rgb(0x55, 0x55, 0xFF), // bright blue
    Color32::from_rgb(0x55, 0xFF, 0x55), // bright green
    Color32::from_rgb(0x55, 0xFF, 0xFF), // bright cyan
    Color32::from_rgb(0xFF, 0x55, 0x55), // bright red
    Color32::from_rgb(0xFF, 0x55, 0xFF), // bright magenta
    Color32::from_rgb(0xFF, 0xFF, 0x55), // yellow
    Color32::from_rgb(0xFF, 0xFF, 0xFF), // white
];

fn backdrop(cell: Cell) -> Color32 {
    PALETTE[((cell >> 12) & 0xF) as usize]
}

fn ink(cell: Cell) -> Color32 {
    PALETTE[((cell >> 8) & 0xF) as usize]
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.advance_generation();
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

                if ui.button("⟲ Reset").clicked() {
                    self.is_running = false;
                    self.reset();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=30.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }
            });

            ui.separator();

            ui.label("Click cells inside the frame to toggle them while paused.");

            ui.separator();

            // Draw the whole 80x25 buffer, frame and captions included
            let cell_size = Vec2::new(12.0, 18.0);
            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                cell_size.x * vga::WIDTH as f32,
                cell_size.y * vga::HEIGHT as f32,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            for row in 0..vga::HEIGHT {
                for col in 0..vga::WIDTH {
                    let cell = self.buffer.read(VgaBuffer::index(col, row));

                    let x = start_pos.x + col as f32 * cell_size.x;
                    let y = start_pos.y + row as f32 * cell_size.y;
                    let rect = Rect::from_min_size(egui::pos2(x, y), cell_size);

                    painter.rect_filled(rect, 0.0, backdrop(cell));

                    let glyph = (cell & vga::GLYPH_MASK) as u8;
                    if glyph != b' ' && glyph != 0 {
                        painter.text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            (glyph as char).to_string(),
                            FontId::monospace(cell_size.y - 4.0),
                            ink(cell),
                        );
                    }

                    // Faint cell outline so dead regions still read as a grid
                    painter.rect_stroke(rect, 0.0, Stroke::new(0.2, Color32::from_gray(40)));

                    // Handle clicking (only when not running)
                    if !self.is_running && response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            if rect.contains(pos) {
                                self.toggle_cell(col, row);
                            }
                        }
                    }
                }
            }

            ui.separator();

            // Statistics over the evolving interior
            let live_cells: usize = (1..=vga::INTERIOR_ROWS)
                .map(|row| {
                    (1..=vga::INTERIOR_COLS)
                        .filter(|&col| vga::is_alive(self.buffer.read(VgaBuffer::index(col, row))))
                        .count()
                })
                .sum();
            let interior = vga::INTERIOR_ROWS * vga::INTERIOR_COLS;

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", interior - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / interior as f32) * 100.0
                ));
            });
        });

        // Keep repainting while the simulation is running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
