use clap::Parser;

use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use tempfile::NamedTempFile;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Cursor, IsTerminal, Read};
use std::{path::Path, sync::mpsc::channel, time::Duration};

use crate::errors::{Error, Result};
use crate::{marker_stream, InputKind, MarkerConfig, OutputFormat};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// SVG file to process ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Watch file for changes; update output on change. (FILE must be given)
    #[arg(short, long, requires = "file")]
    watch: bool,

    /// Treat input as raw SVG path data rather than an SVG document
    #[arg(long)]
    path_data: bool,

    /// Output format
    #[arg(long, default_value = "path")]
    format: OutputFormat,

    /// Maximum decimal places in output numbers
    #[arg(long, default_value = "3")]
    precision: usize,

    /// Convert quadratic Bezier curves to cubics in output
    #[arg(long)]
    cubic: bool,
}

/// Top-level configuration used by the `svgmarker` command-line process.
///
/// 'front-end' program settings (e.g. input/output filenames, whether to continually
/// process input on change, etc) are stored directly in this struct. Rendering
/// ('back-end') settings are stored in the embedded `MarkerConfig` struct.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// Stay monitoring `input_path` for changes (Requires input_path is not stdin)
    pub watch: bool,
    /// Input is path data rather than an SVG document
    pub path_data: bool,
    /// marker rendering options
    pub marker: MarkerConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.watch && args.file == "-" {
            // Should already be enforced by clap validation
            return Err(Error::Cli(
                "A non-stdin file must be provided with -w/--watch argument".into(),
            ));
        }
        if args.file != "-" && args.output != "-" {
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&args.output);
            if out_path.exists() && out_path.canonicalize()? == in_path.canonicalize()? {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            watch: args.watch,
            path_data: args.path_data,
            marker: MarkerConfig {
                format: args.format,
                precision: args.precision,
                cubic: args.cubic,
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }

    fn input_kind(&self) -> InputKind {
        if self.path_data {
            InputKind::PathData
        } else {
            InputKind::Svg
        }
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Convert the marker in `input` and write it to `output`, where either may
/// be '-' for stdin / stdout respectively.
pub fn marker_file(input: &str, output: &str, kind: InputKind, cfg: &MarkerConfig) -> Result<()> {
    let mut in_reader = if input == "-" {
        let mut stdin = std::io::stdin().lock();
        if stdin.is_terminal() {
            // A single Ctrl-D may not end terminal input; read it all up front.
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf)?;
            Box::new(Cursor::new(buf)) as Box<dyn BufRead>
        } else {
            Box::new(stdin) as Box<dyn BufRead>
        }
    } else {
        Box::new(BufReader::new(File::open(input)?)) as Box<dyn BufRead>
    };

    if output == "-" {
        marker_stream(&mut in_reader, &mut std::io::stdout(), kind, cfg)?;
    } else {
        let mut out_temp = NamedTempFile::new()?;
        marker_stream(&mut in_reader, &mut out_temp, kind, cfg)?;
        // Copy content rather than rename (by .persist()) since this
        // could cross filesystems; some apps (e.g. eog) also fail to
        // react to 'moved-over' files.
        fs::copy(out_temp.path(), output)?;
    }

    Ok(())
}

/// Run the `svgmarker` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    let kind = config.input_kind();
    if !config.watch {
        marker_file(&config.input_path, &config.output_path, kind, &config.marker)?;
    } else if config.input_path != "-" {
        let watch = config.input_path;
        let (tx, rx) = channel();
        let mut watcher = new_debouncer(Duration::from_millis(250), tx).map_err(Error::from_err)?;
        let watch_path = Path::new(&watch);
        watcher
            .watcher()
            .watch(watch_path, RecursiveMode::NonRecursive)
            .map_err(Error::from_err)?;
        marker_file(&watch, &config.output_path, kind, &config.marker).unwrap_or_else(|e| {
            eprintln!("conversion failed: {e}");
        });
        eprintln!("Watching {watch} for changes");
        loop {
            match rx.recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.path.canonicalize()? == watch_path.canonicalize()? {
                            eprintln!("{} changed", event.path.to_string_lossy());
                            marker_file(&watch, &config.output_path, kind, &config.marker)
                                .unwrap_or_else(|e| {
                                    eprintln!("conversion failed: {e}");
                                });
                        }
                    }
                }
                Ok(Err(e)) => eprintln!("Watch error {e:?}"),
                Err(e) => eprintln!("Channel error: {e:?}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let cfg = Config::from_cmdline("svgmarker").unwrap();
        assert_eq!(cfg.input_path, "-");
        assert_eq!(cfg.output_path, "-");
        assert!(!cfg.watch);
        assert!(!cfg.path_data);
        assert_eq!(cfg.marker, MarkerConfig::default());
        assert_eq!(cfg.input_kind(), InputKind::Svg);
    }

    #[test]
    fn test_config_options() {
        let cfg = Config::from_cmdline(
            "svgmarker 'my marker.svg' --format svg --precision 5 --cubic --path-data",
        )
        .unwrap();
        assert_eq!(cfg.input_path, "my marker.svg");
        assert_eq!(cfg.marker.format, OutputFormat::Svg);
        assert_eq!(cfg.marker.precision, 5);
        assert!(cfg.marker.cubic);
        assert_eq!(cfg.input_kind(), InputKind::PathData);
    }

    #[test]
    fn test_config_errors() {
        assert!(Config::from_cmdline("svgmarker --watch").is_err());
        assert!(Config::from_cmdline("svgmarker --format png").is_err());
        assert!(Config::from_cmdline("svgmarker --precision -1").is_err());
    }

    #[test]
    fn test_config_same_input_output() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().to_string_lossy().to_string();
        let cmdline = format!("svgmarker {path} -o {path}");
        assert!(matches!(
            Config::from_cmdline(&cmdline),
            Err(Error::Cli(_))
        ));
    }
}
