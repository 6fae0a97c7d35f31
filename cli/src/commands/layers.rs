use anyhow::Result;
use radiozone::{Config, DiskSource, Session};

use super::data_root;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::LayersArgs) -> Result<()> {
    let config = Config::read(&args.config)?;
    let source = DiskSource::new(data_root(&args.config, args.data_dir.as_ref()));
    let session = Session::new(config, &source);

    for layer in session.layers() {
        println!("{}\t{} markers", layer.name, layer.len());
    }
    for failure in session.failures() {
        println!("{}\tomitted: {}", failure.layer, failure.error);
    }

    Ok(())
}
