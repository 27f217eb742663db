use crate::error::Result;
use crate::geometry::{Path, Region, Shape};
use crate::operations::boolean::{Difference, Union};

use super::Offset;

/// Offsets a region constituent by constituent and recombines the parts.
///
/// Constituents are processed in containment order: islands (even depth)
/// shift by the signed amount and union into the accumulator, holes (odd
/// depth) shift the opposite way and subtract. A part that collapses below a
/// polygon drops out, closing the hole or island it came from.
pub fn offset_region(region: &Region, op: &Offset) -> Result<Region> {
    let depths = region.nesting_depths(op.eps);
    let mut order: Vec<usize> = (0..region.paths.len()).collect();
    order.sort_by_key(|&i| depths[i]);

    let mut acc = Region::empty();
    for idx in order {
        let hole = depths[idx] % 2 == 1;
        let amount = if hole { -op.amount } else { op.amount };
        let (points, _) = op.offset_path(&region.paths[idx], amount)?;
        let part = Path::new(points).cleaned(op.eps);
        if part.points.len() < 3 {
            continue;
        }
        let inputs = vec![Shape::Region(acc), Shape::Path(part)];
        acc = if hole {
            Difference::new(inputs, op.eps).execute()?
        } else {
            Union::new(inputs, op.eps).execute()?
        };
    }
    Ok(acc)
}
