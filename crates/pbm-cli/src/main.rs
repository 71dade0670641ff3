//! pbmrotate - rotate plain PBM images from the command line.

use std::fs::{self, File};
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use pbm_core::{rotate_bytes, ErrorKind, RotateError, RotationRequest};

const EXAMPLES: &str = "\
Examples:
  # Rotate an image 270 degrees clockwise and write the result to a file
  pbmrotate -d 270 -o example-image-rotated.pbm example-image.pbm

  # Rotate an image 90 degrees counterclockwise and write the result to stdout
  pbmrotate -d 90 -c example-image.pbm

  # Rotate an image 180 degrees from stdin and write the result to a file
  curl https://example.com/internet-image.pbm | pbmrotate -d 180 -o internet-image-rotated.pbm

  # Rotate an image and write it next to the input as example-image-ccw90.pbm
  pbmrotate -c -s example-image.pbm";

#[derive(Parser, Debug)]
#[command(
    name = "pbmrotate",
    version,
    about = "Rotate plain (P1) PBM images by quarter turns",
    after_help = EXAMPLES
)]
struct Args {
    /// Input file; `-` or nothing reads piped standard input
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Number of degrees, a multiple of 90 (e.g. 90, 180, -270)
    #[arg(short, long, default_value_t = 90, allow_negative_numbers = true)]
    degrees: i64,

    /// Rotate counterclockwise
    #[arg(short, long)]
    counter_clockwise: bool,

    /// Write the result to FILE instead of standard output
    #[arg(short, long, value_name = "FILE", conflicts_with = "suffix")]
    output: Option<PathBuf>,

    /// Write the result next to the input file, e.g. `image-cw90.pbm`
    #[arg(short, long)]
    suffix: bool,

    /// Print debug logging to standard error
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn request(&self) -> RotationRequest {
        RotationRequest::new(self.degrees, self.counter_clockwise)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, PartialEq, Eq)]
enum Output {
    Stdout,
    File(PathBuf),
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(log_filter(args.verbose)))
        .format_timestamp_millis()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pbmrotate: {err:#}");
            match err.downcast_ref::<RotateError>().map(RotateError::kind) {
                Some(ErrorKind::InvalidArgument) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

/// Default log filter. Progress messages from this binary are always shown.
fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn,pbmrotate=info"
    }
}

fn run(args: &Args) -> Result<()> {
    let input = input_source(args.input.as_deref(), io::stdin().is_terminal())?;
    let output = output_target(args, &input)?;
    log::debug!("reading from {input:?}, writing to {output:?}");

    let bytes = read_input(&input)?;
    let rotated = rotate_bytes(&bytes, args.request())?;
    write_output(&output, &rotated)?;

    if let Output::File(path) = &output {
        log::info!("created file {}", path.display());
    }
    Ok(())
}

fn input_source(arg: Option<&Path>, stdin_is_terminal: bool) -> Result<Input> {
    match arg {
        Some(path) if path == Path::new("-") => Ok(Input::Stdin),
        Some(path) => Ok(Input::File(path.to_path_buf())),
        None if stdin_is_terminal => {
            bail!("no input file given and standard input is not a pipe (see --help)")
        }
        None => Ok(Input::Stdin),
    }
}

fn output_target(args: &Args, input: &Input) -> Result<Output> {
    if let Some(path) = &args.output {
        return Ok(Output::File(path.clone()));
    }
    if !args.suffix {
        return Ok(Output::Stdout);
    }
    match input {
        Input::File(path) => Ok(Output::File(suffixed_output_name(
            path,
            args.degrees,
            args.counter_clockwise,
        ))),
        Input::Stdin => bail!("--suffix needs an input file"),
    }
}

/// Build `<input without .pbm>-cw<deg>.pbm` or `-ccw<deg>.pbm`.
fn suffixed_output_name(input: &Path, degrees: i64, counter_clockwise: bool) -> PathBuf {
    let direction = if counter_clockwise { "ccw" } else { "cw" };
    let base = match input.extension() {
        Some(ext) if ext == "pbm" => input.with_extension(""),
        _ => input.to_path_buf(),
    };

    let mut name = base.into_os_string();
    name.push(format!("-{direction}{degrees}.pbm"));
    PathBuf::from(name)
}

fn read_input(input: &Input) -> Result<Vec<u8>> {
    match input {
        Input::Stdin => {
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .context("could not read standard input")?;
            Ok(bytes)
        }
        Input::File(path) => {
            fs::read(path).with_context(|| format!("could not open file {:?}", path.display()))
        }
    }
}

fn write_output(output: &Output, bytes: &[u8]) -> Result<()> {
    match output {
        Output::Stdout => {
            let mut out = BufWriter::new(io::stdout().lock());
            out.write_all(bytes)
                .and_then(|()| out.flush())
                .context("could not write to standard output")
        }
        Output::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create file {:?}", path.display()))?;
            let mut out = BufWriter::new(file);
            out.write_all(bytes)
                .and_then(|()| out.flush())
                .with_context(|| format!("could not write to file {:?}", path.display()))
        }
    }
}
