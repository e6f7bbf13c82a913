use crate::board::Board;
use crate::data::Pos;

/// Translates a pixel coordinate into the cell under it.
///
/// `None` for pixels left of / above the board, beyond its far edges, or a zero tile size.
pub fn cell_at_pixel(px: i64, py: i64, tile_size: u32, board: &Board) -> Option<Pos> {
    if tile_size == 0 || px < 0 || py < 0 {
        return None;
    }
    let tile_size = i64::from(tile_size);
    let (x, y) = (px / tile_size, py / tile_size);
    if x >= board.width() as i64 || y >= board.height() as i64 {
        return None;
    }
    Some(Pos::new(x as i32, y as i32))
}
