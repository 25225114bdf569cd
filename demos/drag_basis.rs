//! Scripted drag of both basis vectors, printing the final display list.
//!
//! Run with: RUST_LOG=basisgrid=debug cargo run --example drag_basis --features tracing

use basisgrid::{BasisRole, RecordingSurface, render_default};

fn main() -> miette::Result<()> {
    // Logs to stderr so the display list on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let surface = RecordingSurface::new(300.0, 150.0)?;
    let mut renderer = render_default(surface)?;

    // e1 from (1, 0) to (2, 0.5)
    renderer.pointer_move(200.0, 75.0);
    renderer.pointer_down(200.0, 75.0);
    for x in [210.0, 230.0, 250.0] {
        renderer.pointer_move(x, 75.0 - (x - 200.0) / 2.0);
    }
    renderer.pointer_up(250.0, 50.0);

    // e2 onto e1's line is refused, then settles at (-0.5, 1)
    renderer.pointer_down(150.0, 25.0);
    let frame = renderer.pointer_move(200.0, 62.5);
    for (role, err) in &frame.rejected {
        tracing::info!(?role, %err, "drag refused");
    }
    renderer.pointer_move(125.0, 25.0);
    renderer.pointer_up(125.0, 25.0);

    let basis = renderer.coordinate_system().basis();
    tracing::info!(
        e1 = ?basis.get(BasisRole::E1),
        e2 = ?basis.get(BasisRole::E2),
        "final basis"
    );

    let surface = renderer.into_surface();
    for command in surface.last_frame() {
        println!("{command}");
    }
    Ok(())
}
