use crate::core::definitions::{Location, RINGS, SECTORS};

/// Cells needed in a row to win, one per ring.
pub const LINE_LENGTH: usize = RINGS;

/// Radial lines, both spirals and every circular run of four, per sector.
pub const LINE_COUNT: usize = SECTORS * (3 + RINGS);

/** Winning lines as (ring, sector) pairs. Sectors wrap around, rings don't. */
pub const LINES: [[(usize, usize); LINE_LENGTH]; LINE_COUNT] = build_lines();

const fn build_lines() -> [[(usize, usize); LINE_LENGTH]; LINE_COUNT] {
    let mut lines = [[(0, 0); LINE_LENGTH]; LINE_COUNT];
    let mut n = 0;
    let mut sector = 0;
    while sector < SECTORS {
        let mut i = 0;
        while i < LINE_LENGTH {
            lines[n][i] = (i, sector);
            lines[n + 1][i] = (i, (sector + i) % SECTORS);
            lines[n + 2][i] = (i, (sector + SECTORS - i) % SECTORS);
            i += 1;
        }
        n += 3;
        let mut ring = 0;
        while ring < RINGS {
            let mut i = 0;
            while i < LINE_LENGTH {
                lines[n][i] = (ring, (sector + i) % SECTORS);
                i += 1;
            }
            n += 1;
            ring += 1;
        }
        sector += 1;
    }
    lines
}

/// Reads a location typed by a person.
///
/// Accepts `"2 7"`, `"2,7"` and the display form `"r2s7"`.
pub fn parse_location(input: &str) -> Option<Location> {
    let input = input.trim().to_ascii_lowercase();
    let (ring, sector) = if let Some(rest) = input.strip_prefix('r') {
        rest.split_once('s')?
    } else {
        input
            .split_once(',')
            .or_else(|| input.split_once(char::is_whitespace))?
    };
    let ring: usize = ring.trim().parse().ok()?;
    let sector: usize = sector.trim().parse().ok()?;
    Location::new(ring, sector).ok()
}
