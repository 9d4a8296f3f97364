//! Projection of a tree position onto a renderable grid of intersections

pub mod board;
pub mod flatten;
pub mod flattened;
pub mod intersection;
pub mod labels;
pub mod options;
pub mod starpoints;
pub mod symbols;

pub use board::{Board, BoardDiffPt};
pub use flatten::{Flattener, flatten};
pub use flattened::{Flattened, MarkMap, MoveCollision, StoneMap};
pub use intersection::Intersection;
pub use options::{FlattenOptions, ShowVariations};
pub use symbols::{BaseSymbol, MarkSymbol, StoneSymbol};

/// Serde adapter for maps keyed by [`Point`](crate::point::Point).
///
/// JSON object keys must be strings, so these maps travel as a list of
/// `[point, value]` pairs.
pub(crate) mod point_map {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::point::Point;

    pub fn serialize<V, S>(map: &BTreeMap<Point, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        V: Serialize,
        S: Serializer,
    {
        serializer.collect_seq(map.iter())
    }

    pub fn deserialize<'de, V, D>(deserializer: D) -> Result<BTreeMap<Point, V>, D::Error>
    where
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let pairs: Vec<(Point, V)> = Vec::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}
