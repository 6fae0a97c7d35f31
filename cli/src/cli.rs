use std::path::PathBuf;

use radiozone::LatLng;

/// Map layers with a click-selected radius zone
#[derive(clap::Parser, Debug)]
#[command(name = "radiozone", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Load every configured layer and list marker counts
    Layers(LayersArgs),

    /// Run render passes for a sequence of clicks and write the final map
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
pub struct LayersArgs {
    /// Configuration file (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Root that layer sources are resolved against (default: the config's directory)
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Configuration file (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Output file (.svg, or GeoJSON with --geojson)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Root that layer sources are resolved against (default: the config's directory)
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    /// Click reported for one render pass, as LAT,LNG (repeatable, in order)
    #[arg(long = "click", value_parser = parse_lat_lng)]
    pub clicks: Vec<LatLng>,

    /// Zone radius in km (1-20)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Reset the zone center after the clicks
    #[arg(long)]
    pub reset: bool,

    /// Write the view as GeoJSON instead of SVG
    #[arg(long)]
    pub geojson: bool,

    /// Overwrite if the output file exists
    #[arg(long)]
    pub force: bool,
}

fn parse_lat_lng(s: &str) -> Result<LatLng, String> {
    let (lat, lng) = s.split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got {s:?}"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude {lat:?}: {e}"))?;
    let lng: f64 = lng.trim().parse().map_err(|e| format!("bad longitude {lng:?}: {e}"))?;

    let position = LatLng::new(lat, lng);
    if !position.is_valid() {
        return Err(format!("{s:?} is outside [-90, 90] x [-180, 180]"));
    }
    Ok(position)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parses_click_pairs() {
        assert_eq!(parse_lat_lng("52.51,13.42").unwrap(), LatLng::new(52.51, 13.42));
        assert_eq!(parse_lat_lng(" 52.5 , 13.4 ").unwrap(), LatLng::new(52.5, 13.4));
        assert!(parse_lat_lng("52.51").is_err());
        assert!(parse_lat_lng("north,13.4").is_err());
        assert!(parse_lat_lng("95,13.4").is_err());
    }

    #[test]
    fn render_collects_clicks_in_order() {
        let cli = Cli::try_parse_from([
            "radiozone", "-v", "render", "berlin.json", "-o", "map.svg",
            "--click", "52.51,13.42", "--click", "52.51,13.42", "--radius", "5",
        ]).unwrap();

        assert_eq!(cli.verbose, 1);
        let Commands::Render(args) = cli.command else { panic!("expected render") };
        assert_eq!(args.clicks, vec![LatLng::new(52.51, 13.42); 2]);
        assert_eq!(args.radius, Some(5.0));
        assert!(!args.geojson && !args.force && !args.reset);
    }
}
