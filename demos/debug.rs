//! Planix debug driver that runs the kernel's pipelines and prints their output.
//!
//! ```text
//! cargo run --example debug            # every stage
//! cargo run --example debug -- boolean # one stage: boolean | offset | mesh
//! ```
//!
//! Log verbosity follows RUST_LOG (e.g. RUST_LOG=planix=debug).

use planix::geometry::{Path, Region, Shape};
use planix::math::{Point2, Point3, TOLERANCE};
use planix::operations::{CornerMode, Difference, ExclusiveOr, Intersection, Offset, Union};
use planix::vnf::{triangulate, VertexArray, Vnf};
use planix::Result;

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("debug=info".parse().unwrap_or_default())
        .add_directive("planix=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match std::env::args().nth(1).as_deref() {
        None => {
            boolean_stage()?;
            offset_stage()?;
            mesh_stage()?;
        }
        Some("boolean") => boolean_stage()?,
        Some("offset") => offset_stage()?,
        Some("mesh") => mesh_stage()?,
        Some(other) => eprintln!("unknown stage {other:?}; expected boolean, offset or mesh"),
    }
    Ok(())
}

fn p2(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn square(origin: Point2, size: f64) -> Shape {
    Shape::from(Path::new(vec![
        origin,
        p2(origin.x + size, origin.y),
        p2(origin.x + size, origin.y + size),
        p2(origin.x, origin.y + size),
    ]))
}

fn report(label: &str, region: &Region) {
    println!(
        "  {label}: {} loop(s), area {:.3}",
        region.paths.len(),
        region.area(TOLERANCE)
    );
}

/// Two 10x10 squares overlapping in a 5x5 corner, through all four operations.
fn boolean_stage() -> Result<()> {
    println!("boolean stage");
    let inputs = || vec![square(p2(0.0, 0.0), 10.0), square(p2(5.0, 5.0), 10.0)];
    report("union", &Union::new(inputs(), TOLERANCE).execute()?);
    report("difference", &Difference::new(inputs(), TOLERANCE).execute()?);
    report("intersection", &Intersection::new(inputs(), TOLERANCE).execute()?);
    report("xor", &ExclusiveOr::new(inputs(), TOLERANCE).execute()?);
    Ok(())
}

/// Grows and shrinks a square ring with a hole, with round corners.
fn offset_stage() -> Result<()> {
    println!("offset stage");
    let ring = Region::new(vec![
        Path::new(vec![p2(0.0, 0.0), p2(12.0, 0.0), p2(12.0, 12.0), p2(0.0, 12.0)]),
        Path::new(vec![p2(4.0, 4.0), p2(4.0, 8.0), p2(8.0, 8.0), p2(8.0, 4.0)]),
    ]);
    for amount in [1.0, -1.0] {
        let grown = Offset::new(Shape::Region(ring.clone()), amount, TOLERANCE)
            .mode(CornerMode::Round)
            .quality(4)
            .execute()?;
        let result = grown.to_region(TOLERANCE)?;
        report(&format!("offset {amount:+}"), &result);
    }
    Ok(())
}

/// Chamfers a square outward and bridges the two rings into a wall mesh,
/// then meshes a two-ring tube with caps and triangulates it.
fn mesh_stage() -> Result<()> {
    println!("mesh stage");
    let base = vec![p2(0.0, 0.0), p2(8.0, 0.0), p2(8.0, 8.0), p2(0.0, 8.0)];
    let op = Offset::new(Shape::from(Path::new(base.clone())), 1.0, TOLERANCE)
        .mode(CornerMode::Chamfer);
    let (rim, walls) = op.execute_with_faces(0, false)?;

    let mut wall_mesh = Vnf::new();
    for pt in &base {
        wall_mesh.get_or_insert_vertex(Point3::new(pt.x, pt.y, 0.0));
    }
    for pt in &rim {
        wall_mesh.get_or_insert_vertex(Point3::new(pt.x, pt.y, 1.0));
    }
    for tri in &walls {
        wall_mesh.faces.push(tri.to_vec());
    }
    println!(
        "  chamfer wall: {} vertices, {} triangles",
        wall_mesh.points.len(),
        wall_mesh.faces.len()
    );

    let rings: Vec<Vec<Point3>> = vec![
        base.iter().map(|pt| Point3::new(pt.x, pt.y, 0.0)).collect(),
        base.iter().map(|pt| Point3::new(pt.x, pt.y, 4.0)).collect(),
    ];
    let tube = VertexArray::new(rings).col_wrap(true).caps(true).execute()?;
    let solid = triangulate(&tube)?;
    println!(
        "  capped tube: {} vertices, {} faces before, {} after triangulation",
        solid.points.len(),
        tube.faces.len(),
        solid.faces.len()
    );
    Ok(())
}
