use super::{Path, Region};
use crate::error::{OperationError, Result};

/// Tagged operation input: a bare path or a full region.
///
/// Operators resolve the variant exactly once at their API boundary via
/// [`Shape::to_region`]; a bare closed path stands for the single-path region
/// it bounds. Nothing downstream re-infers which kind it was handed.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Path(Path),
    Region(Region),
}

impl From<Path> for Shape {
    fn from(path: Path) -> Self {
        Self::Path(path)
    }
}

impl From<Region> for Shape {
    fn from(region: Region) -> Self {
        Self::Region(region)
    }
}

impl Shape {
    /// Resolves the input to a region of cleaned closed polygons.
    ///
    /// A trailing point restating the first is accepted and removed; an empty
    /// region resolves to the empty set.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` when any constituent path has
    /// fewer than 3 distinct points after cleanup.
    pub fn to_region(&self, eps: f64) -> Result<Region> {
        let paths = match self {
            Self::Path(p) => std::slice::from_ref(p),
            Self::Region(r) => r.paths.as_slice(),
        };
        let mut cleaned = Vec::with_capacity(paths.len());
        for path in paths {
            let c = path.cleaned(eps);
            if c.points.len() < 3 {
                return Err(OperationError::InvalidInput(format!(
                    "closed polygon needs at least 3 distinct points, got {}",
                    c.points.len()
                ))
                .into());
            }
            cleaned.push(c);
        }
        Ok(Region::new(cleaned))
    }
}
