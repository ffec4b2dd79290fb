// main.rs - Conway's Game of Life on an emulated text-mode display buffer

use eframe::egui;
use std::time::{Duration, Instant};

mod life;     // Update engine
mod patterns; // Packed seed shapes
mod ui;       // egui front end
mod vga;      // Display buffer and cell codec

use life::Life;
use vga::VgaBuffer;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1020.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}

// Fixed seed layout: two glider guns feeding four barber poles.
const SEEDS: [(&patterns::Pattern, usize, usize); 6] = [
    (&patterns::GLIDER_GUN, 40, 2),
    (&patterns::GLIDER_GUN, 6, 4),
    (&patterns::BARBER_POLE, 40, 13),
    (&patterns::BARBER_POLE, 56, 14),
    (&patterns::BARBER_POLE, 4, 13),
    (&patterns::BARBER_POLE, 15, 16),
];

// Captions burnt into the frame, twelve characters each.
const TOP_CAPTION: &str = "Game of Life";
const BOTTOM_CAPTION: &str = "Rust Edition";
const CAPTION_COL: usize = 34;

pub struct LifeApp {
    pub buffer: VgaBuffer,
    engine: Life,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u32,
}

impl Default for LifeApp {
    fn default() -> Self {
        let mut buffer = VgaBuffer::new();
        seed(&mut buffer);

        Self {
            buffer,
            engine: Life::new(),
            is_running: true,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            generation: 0,
        }
    }
}

/// Paints the frame, the captions and the starting patterns onto a cleared
/// buffer.
fn seed(buffer: &mut VgaBuffer) {
    for n in 0..vga::CELLS {
        buffer.write(n, vga::BLANK);
    }

    for col in 0..vga::WIDTH {
        buffer.write(VgaBuffer::index(col, 0), vga::BORDER);
        buffer.write(VgaBuffer::index(col, vga::HEIGHT - 1), vga::BORDER);
    }
    for row in 0..vga::HEIGHT {
        buffer.write(VgaBuffer::index(0, row), vga::BORDER);
        buffer.write(VgaBuffer::index(vga::WIDTH - 1, row), vga::BORDER);
    }

    // Caption glyphs are OR-ed over the frame attribute: red text on yellow.
    for (i, glyph) in TOP_CAPTION.bytes().enumerate() {
        let n = VgaBuffer::index(CAPTION_COL + i, 0);
        buffer.write(n, buffer.read(n) | glyph as vga::Cell);
    }
    for (i, glyph) in BOTTOM_CAPTION.bytes().enumerate() {
        let n = VgaBuffer::index(CAPTION_COL + i, vga::HEIGHT - 1);
        buffer.write(n, buffer.read(n) | glyph as vga::Cell);
    }

    for &(pattern, x, y) in &SEEDS {
        patterns::draw(buffer, pattern, x, y);
    }

    log::info!("display buffer seeded with {} patterns", SEEDS.len());
}

impl LifeApp {
    /// Runs engine iterations until the rule pass fires: one generation,
    /// gated no-op promotions included.
    pub fn advance_generation(&mut self) {
        while !self.engine.step(&mut self.buffer) {}
        self.generation += 1;
        log::trace!("generation {}", self.generation);
    }

    /// Back to the seeded screen, counters and engine included.
    pub fn reset(&mut self) {
        seed(&mut self.buffer);
        self.engine = Life::new();
        self.generation = 0;
    }

    /// Flips one interior cell by hand, the same priming write the seed
    /// patterns use. The frame is not clickable.
    pub fn toggle_cell(&mut self, col: usize, row: usize) {
        if (1..=vga::INTERIOR_COLS).contains(&col) && (1..=vga::INTERIOR_ROWS).contains(&row) {
            let n = VgaBuffer::index(col, row);
            let cell = self.buffer.read(n);
            let flipped = if vga::is_alive(cell) {
                vga::erase(cell)
            } else {
                vga::prime(cell)
            };
            self.buffer.write(n, flipped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_keeps_every_live_cell_inside_the_frame() {
        let mut buffer = VgaBuffer::new();
        seed(&mut buffer);

        let mut population = 0;
        for row in 0..vga::HEIGHT {
            for col in 0..vga::WIDTH {
                if vga::is_alive(buffer.read(VgaBuffer::index(col, row))) {
                    population += 1;
                    assert!((1..=vga::INTERIOR_COLS).contains(&col), "col {col}");
                    assert!((1..=vga::INTERIOR_ROWS).contains(&row), "row {row}");
                }
            }
        }
        // Two guns of 36 cells plus four poles of 12; the gun placements
        // share four cells.
        assert_eq!(population, 2 * 36 + 4 * 12 - 4);
    }

    #[test]
    fn seeding_writes_the_frame_and_captions() {
        let mut buffer = VgaBuffer::new();
        seed(&mut buffer);

        assert_eq!(buffer.read(VgaBuffer::index(0, 0)), vga::BORDER);
        assert_eq!(buffer.read(VgaBuffer::index(vga::WIDTH - 1, vga::HEIGHT - 1)), vga::BORDER);

        let first = buffer.read(VgaBuffer::index(CAPTION_COL, 0));
        assert_eq!(first & vga::GLYPH_MASK, b'G' as vga::Cell);
        assert_eq!(first & !vga::GLYPH_MASK, vga::BORDER);
        let last = buffer.read(VgaBuffer::index(CAPTION_COL + 11, vga::HEIGHT - 1));
        assert_eq!(last & vga::GLYPH_MASK, b'n' as vga::Cell);
    }

    #[test]
    fn toggling_respects_the_frame() {
        let mut app = LifeApp::default();

        let was_alive = vga::is_alive(app.buffer.read(VgaBuffer::index(20, 20)));
        app.toggle_cell(20, 20);
        assert_ne!(vga::is_alive(app.buffer.read(VgaBuffer::index(20, 20))), was_alive);

        let corner = app.buffer.read(VgaBuffer::index(0, 0));
        app.toggle_cell(0, 0);
        assert_eq!(app.buffer.read(VgaBuffer::index(0, 0)), corner);
    }
}
