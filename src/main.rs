// SPDX-License-Identifier: MPL-2.0
//! Command-line surface: extract GPS coordinates from a JPEG file or a folder
//! of JPEGs and open the matching map URL in the default browser.

use geo_image_mapper::config;
use geo_image_mapper::directory_scanner;
use geo_image_mapper::error::{Error, Result};
use geo_image_mapper::extractor::{self, ExtractorOptions};
use geo_image_mapper::map_url::{MapProvider, DEFAULT_MARKERS_LIMIT};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const HELP: &str = "\
geo-image-mapper
Extract GPS coordinates from JPG image(s) and display them on a browser map.

USAGE:
  geo-image-mapper [OPTIONS] <PATH>

ARGS:
  <PATH>                Path to an image file or a folder with JPG images

OPTIONS:
  -m, --map <ENGINE>    Map engine: yandex (default), google, y, g
  -l, --limit <N>       Maximum number of markers when processing a folder
                        (default: 200)
      --strict          Surface unreadable-image errors instead of skipping
      --no-browser      Print the URL without opening a browser
  -h, --help            Print this help
";

#[derive(Debug)]
struct Args {
    path: PathBuf,
    map: Option<String>,
    limit: Option<usize>,
    strict: bool,
    no_browser: bool,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let args = Args {
        strict: pargs.contains("--strict"),
        no_browser: pargs.contains("--no-browser"),
        map: pargs.opt_value_from_str(["-m", "--map"])?,
        limit: pargs.opt_value_from_str(["-l", "--limit"])?,
        path: pargs.free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments: {:?}", remaining);
    }

    Ok(Some(args))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = config::load().unwrap_or_default();

    let selector = args
        .map
        .clone()
        .or(config.map_engine)
        .unwrap_or_else(|| config::DEFAULT_MAP_ENGINE.to_string());
    let provider = MapProvider::from_selector(&selector)?;

    let markers_limit = args
        .limit
        .or(config.markers_limit)
        .unwrap_or(DEFAULT_MARKERS_LIMIT);

    let options = ExtractorOptions {
        ignore_image_errors: !args.strict,
    };

    if args.path.is_file() {
        map_single_image(&args.path, provider, options, args.no_browser)
    } else if args.path.is_dir() {
        map_folder(
            &args.path,
            provider,
            options,
            markers_limit,
            args.no_browser,
        )
    } else {
        println!("Invalid path. Provide a path to a JPG file or a folder with images.");
        Ok(())
    }
}

fn map_single_image(
    path: &Path,
    provider: MapProvider,
    options: ExtractorOptions,
    no_browser: bool,
) -> Result<()> {
    let Some(coords) = extractor::extract_coordinates(path, options)? else {
        println!("Coordinates not found in the image file.");
        return Ok(());
    };

    println!(
        "Latitude: {}, Longitude: {}",
        coords.latitude, coords.longitude
    );
    open_map(&provider.single(&coords), no_browser)
}

fn map_folder(
    path: &Path,
    provider: MapProvider,
    options: ExtractorOptions,
    markers_limit: usize,
    no_browser: bool,
) -> Result<()> {
    let total = directory_scanner::list_images(path)?.len() as u64;
    let bar = ProgressBar::new(total);
    let coords_list =
        directory_scanner::scan_folder_with_progress(path, options, |_| bar.inc(1))?;
    bar.finish_and_clear();

    if coords_list.is_empty() {
        println!("No images with GPS coordinates found");
        return Ok(());
    }

    println!("Found {} images with GPS coordinates", coords_list.len());
    let url = provider.multiple(&coords_list, markers_limit)?;

    if coords_list.len() > markers_limit {
        println!(
            "Warning: found {} > {} images with GPS coordinates. Limited map to {} markers.",
            coords_list.len(),
            markers_limit,
            markers_limit
        );
    }

    open_map(&url, no_browser)
}

fn open_map(url: &str, no_browser: bool) -> Result<()> {
    if no_browser {
        println!("{url}");
        return Ok(());
    }

    println!("Opening URL in browser: {url}");
    opener::open(url).map_err(|e| Error::Io(e.to_string()))
}
