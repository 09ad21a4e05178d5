use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use knight_graphics::{BoardRenderer, RenderStyle};
use knight_search::{find_shortest_path, Square};

/// Draw the shortest knight path between two squares.
#[derive(Parser, Debug)]
#[command(name = "knightpath", version)]
struct Cli {
    /// Square the knight starts on, as `file,rank` with both in 0..=7.
    #[arg(long, default_value = "4,4")]
    start: Square,

    /// Square the knight has to reach, as `file,rank`.
    #[arg(long, default_value = "0,0")]
    target: Square,

    /// Output PNG path.
    #[arg(long, default_value = "knight.png")]
    out: PathBuf,

    /// JSON file with colors and sizes, missing fields use the defaults.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Size of one square in pixels, overrides the style.
    #[arg(long)]
    cell_size: Option<u32>,

    /// Also print the path as JSON to stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut style = match &cli.style {
        Some(path) => RenderStyle::load(path)
            .with_context(|| format!("load style '{}'", path.display()))?,
        None => RenderStyle::default(),
    };
    if let Some(cell_size) = cli.cell_size {
        style.cell_size = cell_size;
    }

    let path = find_shortest_path(cli.start, cli.target)
        .with_context(|| format!("find path from {} to {}", cli.start, cli.target))?;

    log::info!(
        "{} moves: {}",
        path.len() - 1,
        path.iter()
            .map(|square| square.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    );

    if cli.json {
        println!("{}", serde_json::to_string(&path)?);
    }

    if let Some(parent) = cli.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    BoardRenderer::new(style)
        .render_to_file(&path, &cli.out)
        .with_context(|| format!("write png '{}'", cli.out.display()))?;

    log::info!("wrote {}", cli.out.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_fixed_run() {
        let cli = Cli::try_parse_from(["knightpath"]).unwrap();
        assert_eq!(cli.start, Square::new(4, 4));
        assert_eq!(cli.target, Square::new(0, 0));
        assert_eq!(cli.out, PathBuf::from("knight.png"));
        assert!(cli.style.is_none());
    }

    #[test]
    fn parses_squares() {
        let cli = Cli::try_parse_from(["knightpath", "--start", "0,0", "--target", "7,7"]).unwrap();
        assert_eq!(cli.start, Square::new(0, 0));
        assert_eq!(cli.target, Square::new(7, 7));

        assert!(Cli::try_parse_from(["knightpath", "--start", "e4"]).is_err());
    }

    #[test]
    fn parses_output_options() {
        let cli = Cli::try_parse_from([
            "knightpath",
            "--cell-size",
            "20",
            "--json",
            "--style",
            "style.json",
            "--out",
            "out/board.png",
        ])
        .unwrap();
        assert_eq!(cli.cell_size, Some(20));
        assert!(cli.json);
        assert_eq!(cli.style, Some(PathBuf::from("style.json")));
        assert_eq!(cli.out, PathBuf::from("out/board.png"));

        let defaults = Cli::try_parse_from(["knightpath"]).unwrap();
        assert_eq!(defaults.cell_size, None);
        assert!(!defaults.json);

        assert!(Cli::try_parse_from(["knightpath", "--cell-size", "big"]).is_err());
    }
}
