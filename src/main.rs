use std::path::PathBuf;

const HELP: &str = "Ani Vision — Browse a categorized video catalog from the terminal.

  --catalog <path>     Load the video catalog from a YAML or JSON file
  --config <path>      Read configuration from this file
  --list-categories    Print categories with video counts and exit
  --version, -V        Show version and exit
  --help,    -h        Show this help message";

enum Mode {
    Interactive,
    ListCategories,
    Exit,
}

fn main() {
    let mut options = anivision::RunOptions::default();
    let mode = match parse_args(std::env::args().skip(1), &mut options) {
        Ok(mode) => mode,
        Err(message) => {
            eprintln!("error: {message}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let result = match mode {
        Mode::Exit => Ok(()),
        Mode::ListCategories => anivision::list_categories(&options).map(|listing| {
            print!("{listing}");
        }),
        Mode::Interactive => anivision::run(options),
    };

    if let Err(err) = result {
        eprintln!("error: {err:?}");
        std::process::exit(1);
    }
}

fn parse_args(
    args: impl Iterator<Item = String>,
    options: &mut anivision::RunOptions,
) -> Result<Mode, String> {
    let mut mode = Mode::Interactive;
    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("Ani Vision {}", anivision::VERSION);
                return Ok(Mode::Exit);
            }
            "--help" | "-h" => {
                println!("{HELP}");
                return Ok(Mode::Exit);
            }
            "--list-categories" => mode = Mode::ListCategories,
            "--catalog" | "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("{arg} requires a path"))?;
                if arg == "--catalog" {
                    options.catalog_path = Some(PathBuf::from(value));
                } else {
                    options.config_file = Some(PathBuf::from(value));
                }
            }
            other => return Err(format!("unknown argument {other:?}")),
        }
    }
    Ok(mode)
}
