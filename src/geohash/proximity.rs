use super::neighbors;
use crate::error::Result;

/// A 3x3 block of geohash cells centred on one cell.
///
/// Two points in the same block are at most two cell widths apart, so
/// checking the block catches nearby points that fall just across a cell edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proximity {
    cells: Vec<String>,
}

impl Proximity {
    /// Build the block around `hash` truncated to `precision` characters
    pub fn around(hash: &str, precision: usize) -> Result<Self> {
        let center: String = hash
            .chars()
            .take(precision)
            .collect::<String>()
            .to_ascii_lowercase();

        let mut cells = vec![center.clone()];
        cells.extend(neighbors(&center)?);
        Ok(Self { cells })
    }

    /// Center cell first, then its neighbors
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn contains(&self, geohash: &str) -> bool {
        let geohash = geohash.to_ascii_lowercase();
        self.cells.iter().any(|cell| geohash.starts_with(cell.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::geohash::encode;

    #[test]
    fn test_around_truncates() {
        let area = Proximity::around("u09tvw0f6", 5).unwrap();
        assert_eq!(area.cells()[0], "u09tv");
        assert_eq!(area.cells().len(), 9);
    }

    #[test]
    fn test_contains_same_and_adjacent_cells() {
        let here = encode(48.8566, 2.3522, 9).unwrap();
        let area = Proximity::around(&here, 5).unwrap();

        assert!(area.contains(&here));
        for cell in area.cells() {
            assert!(area.contains(&format!("{}0000", cell)));
        }
    }

    #[test]
    fn test_far_point_excluded() {
        let paris = encode(48.8566, 2.3522, 9).unwrap();
        let tokyo = encode(35.6895, 139.6917, 9).unwrap();
        let area = Proximity::around(&paris, 4).unwrap();
        assert!(!area.contains(&tokyo));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let area = Proximity::around("u09tv", 5).unwrap();
        assert!(area.contains("U09TVW0F6"));
    }

    #[test]
    fn test_zero_precision_is_invalid() {
        assert!(matches!(
            Proximity::around("u09tv", 0),
            Err(Error::InvalidGeohash(_))
        ));
    }
}
