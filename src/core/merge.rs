// building maps from (coordinate, value) pairs
use crate::core::map2d::Map2D;
use crate::core::table::HashMap2D;
use crate::core::types::Key;

impl<R: Key, C: Key, V> Extend<((R, C), V)> for HashMap2D<R, C, V> {
    fn extend<I: IntoIterator<Item = ((R, C), V)>>(&mut self, iter: I) {
        for ((row, column), value) in iter {
            self.insert(row, column, Some(value));
        }
    }
}

impl<R: Key, C: Key, V> FromIterator<((R, C), V)> for HashMap2D<R, C, V> {
    fn from_iter<I: IntoIterator<Item = ((R, C), V)>>(iter: I) -> Self {
        let mut map = HashMap2D::new();
        map.extend(iter);
        map
    }
}
