// life.rs - The update engine: gated rule pass plus per-iteration promotion

use crate::vga::{self, VgaBuffer};

/// Iterations between rule evaluations. Promotion still runs on every
/// iteration in between; re-promoting an unchanged scratch bit is a no-op.
const COMPUTE_DELAY: u16 = 200;

/// The update loop's state. One `step` is one pass of the loop: evaluate
/// the rule when the delay counter rolls over, then promote the staged
/// generation into the rendered state.
pub struct Life {
    tick: u16,
}

impl Life {
    pub fn new() -> Self {
        // Start at the threshold so the first iteration evaluates the rule.
        Self { tick: COMPUTE_DELAY }
    }

    /// One iteration of the update loop. Returns true when the rule pass
    /// fired this iteration.
    pub fn step(&mut self, buffer: &mut VgaBuffer) -> bool {
        self.tick += 1;
        let fired = self.tick > COMPUTE_DELAY;
        if fired {
            self.tick = 0;
            compute_next(buffer);
        }
        promote_all(buffer);
        fired
    }
}

/// Counts neighbours of every interior cell against the rendered state and
/// stages the next generation in the scratch bits. Scratch writes never
/// touch the rendered state, so counts later in the pass still see the old
/// generation.
fn compute_next(buffer: &mut VgaBuffer) {
    for row in 1..=vga::INTERIOR_ROWS {
        for col in 1..=vga::INTERIOR_COLS {
            let n = VgaBuffer::index(col, row);
            let neighbours = [
                n - 1,
                n + 1,
                n - vga::WIDTH,
                n + vga::WIDTH,
                n - vga::WIDTH - 1,
                n - vga::WIDTH + 1,
                n + vga::WIDTH - 1,
                n + vga::WIDTH + 1,
            ];

            let mut count = 0;
            for &m in &neighbours {
                if vga::is_alive(buffer.read(m)) {
                    count += 1;
                }
            }

            let cell = buffer.read(n);
            let next = match (vga::is_alive(cell), count) {
                (true, 2) | (true, 3) => true,  // Survival
                (false, 3) => true,             // Birth
                _ => false,                     // Death or stays dead
            };

            buffer.write(n, vga::with_scratch(cell, next));
        }
    }
}

/// Copies every interior cell's staged state into its rendered state.
fn promote_all(buffer: &mut VgaBuffer) {
    for row in 1..=vga::INTERIOR_ROWS {
        for col in 1..=vga::INTERIOR_COLS {
            let n = VgaBuffer::index(col, row);
            buffer.write(n, vga::promote(buffer.read(n)));
        }
    }
}
