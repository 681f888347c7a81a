//! Parsing of puzzle and grid configurations from strings.

use crate::grid::Grid;
use crate::puzzle::TILE_COUNT;

/// Parses a nine-digit string into a tile configuration.
///
/// Each character must be a digit in `0..=8` and every digit must appear
/// exactly once; `0` is the blank. No separators are accepted.
///
/// # Arguments
/// * `s`: the configuration in row-major order, e.g. `"123586407"`.
///
/// # Returns
/// * `Ok([u8; 9])` with the parsed tiles.
/// * `Err(String)` if the string is the wrong length, contains a character
///   outside `0..=8`, or repeats a tile.
///
/// # Examples
/// ```
/// use statespace_solver::utils::tiles_from_str;
/// let tiles = tiles_from_str("123586407").unwrap();
/// assert_eq!(tiles[7], 0);
/// assert!(tiles_from_str("12358640").is_err());
/// assert!(tiles_from_str("123586477").is_err());
/// ```
pub fn tiles_from_str(s: &str) -> Result<[u8; TILE_COUNT], String> {
    let mut tiles = [0u8; TILE_COUNT];
    let mut count = 0usize;

    for ch in s.chars() {
        match ch.to_digit(10) {
            Some(digit) if (digit as usize) < TILE_COUNT => {
                if count == TILE_COUNT {
                    return Err(format!(
                        "Too many tiles. Expected exactly {}",
                        TILE_COUNT
                    ));
                }
                tiles[count] = digit as u8;
                count += 1;
            }
            _ => {
                return Err(format!(
                    "Unrecognized character '{}' at position {}",
                    ch, count
                ))
            }
        }
    }

    if count != TILE_COUNT {
        return Err(format!("Expected {} tiles, found {}", TILE_COUNT, count));
    }

    let mut seen = [false; TILE_COUNT];
    for &tile in &tiles {
        if seen[tile as usize] {
            return Err(format!("Duplicate tile '{}' in configuration", tile));
        }
        seen[tile as usize] = true;
    }

    Ok(tiles)
}

/// Parses an array of digit strings into a `Grid`.
///
/// Each string is one row; each character must be a decimal digit, with
/// `0` marking a passable cell and any other digit an obstacle. All rows
/// must have the same length.
///
/// # Returns
/// * `Ok(Grid)` on success.
/// * `Err(String)` naming the first offending row or character.
pub fn grid_from_str_array(rows: &[&str]) -> Result<Grid, String> {
    if rows.is_empty() {
        return Err("Grid must have at least one row".to_string());
    }

    let mut cells = Vec::with_capacity(rows.len());
    for (r, row_str) in rows.iter().enumerate() {
        let mut row = Vec::new();
        for (c, ch) in row_str.chars().enumerate() {
            match ch.to_digit(10) {
                Some(digit) => row.push(digit as u8),
                None => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        ch, r, c
                    ))
                }
            }
        }
        cells.push(row);
    }

    Grid::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_from_str_valid() {
        let tiles = tiles_from_str("123586407").unwrap();
        assert_eq!(tiles, [1, 2, 3, 5, 8, 6, 4, 0, 7]);
    }

    #[test]
    fn test_tiles_from_str_rejects_short_input() {
        let result = tiles_from_str("1235864");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Expected 9 tiles"));
    }

    #[test]
    fn test_tiles_from_str_rejects_long_input() {
        let result = tiles_from_str("1235864070");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Too many tiles"));
    }

    #[test]
    fn test_tiles_from_str_rejects_out_of_range_digit() {
        let result = tiles_from_str("123586409");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized character '9'"));
    }

    #[test]
    fn test_tiles_from_str_rejects_separator() {
        let result = tiles_from_str("123 586 407");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized character ' '"));
    }

    #[test]
    fn test_tiles_from_str_rejects_duplicates() {
        let result = tiles_from_str("123586477");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Duplicate tile '7'"));
    }

    #[test]
    fn test_grid_from_str_array_valid() {
        let grid = grid_from_str_array(&["010", "000"]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(!grid.is_passable((0, 1)));
        assert!(grid.is_passable((1, 1)));
    }

    #[test]
    fn test_grid_from_str_array_rejects_empty() {
        let rows: [&str; 0] = [];
        assert!(grid_from_str_array(&rows).is_err());
    }

    #[test]
    fn test_grid_from_str_array_rejects_bad_character() {
        let result = grid_from_str_array(&["0x0"]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .contains("Unrecognized character 'x' in row 0 col 1"));
    }

    #[test]
    fn test_grid_from_str_array_rejects_ragged_rows() {
        let result = grid_from_str_array(&["000", "00"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Row 1 has 2 cells"));
    }
}
