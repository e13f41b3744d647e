use std::fmt;

/// A path length from the source node.
///
/// `Unreachable` orders after every finite distance, so the derived ordering
/// matches "infinity" semantics without floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// A known path length.
    Finite(u64),

    /// No path has been found (yet).
    Unreachable,
}

impl Distance {
    /// Returns the finite length, or `None` if unreachable.
    #[must_use]
    pub fn finite(self) -> Option<u64> {
        match self {
            Self::Finite(length) => Some(length),
            Self::Unreachable => None,
        }
    }

    /// Returns `true` if a path is known.
    #[must_use]
    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl From<u64> for Distance {
    fn from(length: u64) -> Self {
        Self::Finite(length)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(length) => write!(f, "{length}"),
            Self::Unreachable => f.write_str("∞"),
        }
    }
}

/// Distances from a source node, one entry per node in graph order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DistanceTable {
    entries: Vec<(String, Distance)>,
}

impl DistanceTable {
    pub(crate) fn new(entries: Vec<(String, Distance)>) -> Self {
        Self { entries }
    }

    /// Returns the distance recorded for `node`, if the node is in the table.
    #[must_use]
    pub fn get(&self, node: &str) -> Option<Distance> {
        self.entries
            .iter()
            .find(|(id, _)| id == node)
            .map(|(_, distance)| *distance)
    }

    /// Iterates over `(node, distance)` pairs in graph order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Distance)> {
        self.entries
            .iter()
            .map(|(id, distance)| (id.as_str(), *distance))
    }

    /// Returns the number of nodes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Formats as `{A: 0, B: 3, C: ∞}`.
impl fmt::Display for DistanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (id, distance)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{id}: {distance}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_orders_after_finite() {
        assert!(Distance::Finite(u64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(2) < Distance::Finite(3));
        assert_eq!(
            [Distance::Unreachable, Distance::Finite(5)].iter().min(),
            Some(&Distance::Finite(5))
        );
    }

    #[test]
    fn finite_accessor() {
        assert_eq!(Distance::from(4).finite(), Some(4));
        assert_eq!(Distance::Unreachable.finite(), None);
        assert!(!Distance::Unreachable.is_reachable());
    }

    #[test]
    fn table_lookup_and_display() {
        let table = DistanceTable::new(vec![
            ("A".into(), Distance::Finite(0)),
            ("B".into(), Distance::Unreachable),
        ]);

        assert_eq!(table.get("A"), Some(Distance::Finite(0)));
        assert_eq!(table.get("Z"), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.to_string(), "{A: 0, B: ∞}");
    }
}
