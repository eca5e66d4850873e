//! Builds subdivision options from `name=value` arguments and prints their
//! stable codes.
//!
//! ```text
//! RUST_LOG=debug cargo run --example options -- scheme=loop creasing=chaikin triangles=smooth
//! ```
use opensubdiv_petite_sdc::sdc;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut scheme = sdc::Scheme::default();
    let mut options = sdc::SubdivisionOptions::default();

    for argument in std::env::args().skip(1) {
        let (name, value) = argument
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected name=value, got \"{argument}\""))?;

        match name {
            "scheme" => scheme = value.parse()?,
            "boundary" => options.set_boundary_interpolation(value.parse()?),
            "face_varying" => options.set_face_varying_linear_interpolation(value.parse()?),
            "creasing" => options.set_creasing_method(value.parse()?),
            "triangles" => options.set_triangle_subdivision(value.parse()?),
            _ => anyhow::bail!("unknown option \"{name}\""),
        }
    }

    if options.boundary_interpolation().is_legacy() {
        println!("note: boundary interpolation `none` is a legacy mode");
    }

    let normalized = options.normalized_for(scheme);

    println!("scheme:                  {scheme}");
    println!("boundary interpolation:  {}", normalized.boundary_interpolation());
    println!(
        "face-varying:            {}",
        normalized.face_varying_linear_interpolation()
    );
    println!("creasing method:         {}", normalized.creasing_method());
    println!("triangle subdivision:    {}", normalized.triangle_subdivision());
    println!("codes:                   {:?}", normalized.to_codes());

    Ok(())
}
