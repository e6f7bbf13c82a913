use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Row-major grid stored in a single vector.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    /// All rows must be non-empty and of the same length, the parser checks that.
    pub(crate) fn new(grid: Vec<Vec<T>>) -> Self {
        assert!(!grid.is_empty() && !grid[0].is_empty());

        let rows = grid.len();
        let cols = grid[0].len();
        let mut data = Vec::with_capacity(rows * cols);
        for row in grid {
            assert_eq!(row.len(), cols);
            data.extend(row);
        }
        Vec2d { data, rows, cols }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.cols && (pos.y as usize) < self.rows
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self[pos])
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        if self.contains(pos) {
            Some(&mut self[pos])
        } else {
            None
        }
    }

    pub(crate) fn row_iter(&self) -> std::slice::Chunks<'_, T> {
        self.data.chunks(self.cols)
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    fn index_of(&self, pos: Pos) -> usize {
        pos.y as usize * self.cols + pos.x as usize
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.row_iter() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[self.index_of(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing() {
        let mut grid = Vec2d::new(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid[Pos::new(2, 0)], 3);
        assert_eq!(grid[Pos::new(0, 1)], 4);

        grid[Pos::new(1, 1)] = 0;
        assert_eq!(grid.to_string(), "123\n406\n");
    }

    #[test]
    fn bounds() {
        let mut grid = Vec2d::new(vec![vec!['a', 'b'], vec!['c', 'd']]);
        assert_eq!(grid.get(Pos::new(1, 1)), Some(&'d'));
        assert_eq!(grid.get(Pos::new(2, 0)), None);
        assert_eq!(grid.get(Pos::new(0, 2)), None);
        assert_eq!(grid.get(Pos::new(-1, 0)), None);
        assert!(grid.get_mut(Pos::new(0, -1)).is_none());
    }
}
