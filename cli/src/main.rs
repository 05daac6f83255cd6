use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::Parser;
use jsonpad::constants::{DEFAULT_INDENT_UNIT, DEFAULT_INDENT_WIDTH};
use jsonpad::FormatOptions;

#[derive(Parser, Debug)]
#[command(name = "jsonpad", version, about = "Reindent JSON-like input for human reading")]
struct Args {
    /// Input file paths. Omit or use '-' to read from stdin.
    files: Vec<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Indent units per nesting level.
    #[arg(long, value_name = "number", default_value_t = DEFAULT_INDENT_WIDTH)]
    indent: usize,

    /// String repeated to build one indentation step.
    #[arg(long, value_name = "string", default_value = DEFAULT_INDENT_UNIT)]
    unit: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let options = FormatOptions::new()
        .with_width(args.indent)
        .with_unit(args.unit.as_str());

    with_output_writer(args.output.as_deref(), |writer| {
        if args.files.is_empty() {
            return format_one(writer, "-", &options);
        }

        // One unreadable input must not stop the rest of the batch.
        let mut failures = 0usize;
        for path in &args.files {
            if let Err(err) = format_one(writer, path, &options) {
                eprintln!("ERROR  {path}: {err}");
                failures += 1;
            }
        }
        if failures > 0 {
            return Err(format!("{failures} input(s) could not be formatted").into());
        }
        Ok(())
    })
}

fn format_one(
    writer: &mut dyn Write,
    path: &str,
    options: &FormatOptions,
) -> Result<(), Box<dyn Error>> {
    let data = read_input(path)?;
    jsonpad::format_to_writer_with_options(&mut *writer, &data, options)?;
    writer.write_all(b"\n")?;
    Ok(())
}

fn read_input(path: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read(path)?)
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}
