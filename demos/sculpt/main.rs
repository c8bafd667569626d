//! Scripted sculpting session: drives an `EditSession` the way a tracked
//! controller would and prints the HUD line after every release.
//!
//! ```text
//! cargo run --example sculpt
//! RUST_LOG=meshsculpt=debug cargo run --example sculpt
//! ```

use meshsculpt::math::Point3;
use meshsculpt::session::{ControllerId, EditParams, EditSession};
use meshsculpt::{EditMode, Result};

const HAND: ControllerId = ControllerId(0);

/// Press, hold along `path`, release at the last point.
fn gesture(session: &mut EditSession, path: &[Point3]) -> Result<()> {
    let Some((&release, _)) = path.split_last() else {
        return Ok(());
    };
    session.begin_interaction(HAND, path[0]);
    for &position in path {
        session.sample(HAND, position)?;
    }
    let outcome = session.end_interaction(HAND, release)?;
    println!("{outcome:?}\n{}", session.status());
    Ok(())
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for meshsculpt.
    // Override with RUST_LOG env var (e.g. RUST_LOG=meshsculpt=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("meshsculpt=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut session = EditSession::new(EditParams::default());

    // Bootstrap a tetrahedron.
    for p in [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.3, 0.0, 0.0),
        Point3::new(0.0, 0.3, 0.0),
        Point3::new(0.0, 0.0, 0.3),
    ] {
        gesture(&mut session, &[p])?;
    }

    // Pull a new tip out of the slanted face.
    session.set_mode(EditMode::AddNodeAndFace);
    gesture(&mut session, &[Point3::new(0.2, 0.2, 0.2)])?;

    // Drag the tip further out.
    session.set_mode(EditMode::MoveNode);
    gesture(
        &mut session,
        &[
            Point3::new(0.21, 0.2, 0.2),
            Point3::new(0.25, 0.25, 0.25),
            Point3::new(0.3, 0.3, 0.3),
        ],
    )?;

    // Delete it again; the face underneath is restored.
    session.set_mode(EditMode::DeleteNode);
    gesture(&mut session, &[Point3::new(0.3, 0.3, 0.31)])?;

    let geometry = session.mesh().export_geometry()?;
    println!(
        "exported {} vertices, {} faces (double-sided)",
        geometry.vertices.len(),
        geometry.face_count()
    );
    Ok(())
}
