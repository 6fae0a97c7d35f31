use anyhow::{bail, Result};
use radiozone::{Config, DiskSource, Session};
use tracing::info;

use super::data_root;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!("[render] {} exists (use --force to overwrite)", args.output.display());
    }

    let config = Config::read(&args.config)?;
    let source = DiskSource::new(data_root(&args.config, args.data_dir.as_ref()));
    let mut session = Session::new(config, &source);

    if let Some(radius) = args.radius {
        session.set_radius(radius);
    }

    for (pass, click) in args.clicks.iter().enumerate() {
        if session.pass(Some(*click)) {
            info!(pass, lat = click.lat, lng = click.lng, "center moved, re-rendering");
        } else {
            info!(pass, lat = click.lat, lng = click.lng, "repeated click, no re-render");
        }
    }

    if args.reset {
        session.reset();
    }

    let view = session.view();
    if args.geojson {
        view.write_geojson(&args.output)?;
    } else {
        view.write_svg(&args.output)?;
    }

    info!(output = %args.output.display(), markers = view.marker_count(), "map written");
    println!("{}", view.status);

    Ok(())
}
