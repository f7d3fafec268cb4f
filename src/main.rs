use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use tracing::{debug, info, Level};

use texdsl::building::{document, Body, Scope};
use texdsl::language::{Document, DocumentError};
use texdsl::solver::{self, Solver};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("texdsl")
        .version(VERSION)
        .propagate_version(true)
        .about("Generate LaTeX documents from nested builders.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase logging output; repeat for more detail."),
        )
        .subcommand(
            Command::new("solve")
                .about("Compute the minimum flight time for the two-wind problem")
                .long_about("Reads ten integers from standard input: the start point, the end point, the maximum speed, the duration of the first wind, and the velocities of the first and second winds."),
        )
        .subcommand(
            Command::new("sample")
                .about("Render a sample Beamer presentation")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .action(ArgAction::Set)
                        .help("The file to write the markup to. Writes to standard output if not given."),
                ),
        )
        .get_matches();

    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    debug!("Logging at {}", level);

    match matches.subcommand() {
        Some(("solve", _)) => {
            let input = match solver::read(io::stdin().lock()) {
                Ok(input) => input,
                Err(error) => fail(&error),
            };
            debug!(?input);

            let answer = Solver::new(input).solve();
            println!("{}", answer);
        }
        Some(("sample", submatches)) => {
            let document = match presentation() {
                Ok(document) => document,
                Err(error) => fail(&error),
            };

            let result = match submatches.get_one::<String>("output") {
                Some(filename) => write_file(&document, Path::new(filename)),
                None => write_stdout(&document),
            };

            if let Err(error) = result {
                fail(&error);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: texdsl [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn write_file(document: &Document, filename: &Path) -> Result<(), DocumentError> {
    info!("Writing document to: {}", filename.display());

    let mut file = File::create(filename)?;
    document.render_to(&mut file)?;
    file.flush()?;
    Ok(())
}

fn write_stdout(document: &Document) -> Result<(), DocumentError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    document.render_to(&mut handle)?;
    writeln!(handle)?;
    handle.flush()?;
    Ok(())
}

fn fail(error: &dyn std::error::Error) -> ! {
    eprintln!("{}: {}", "error".bright_red(), error);
    std::process::exit(1);
}

fn presentation() -> Result<Document, DocumentError> {
    document(|doc| {
        doc.document_class("beamer", &[])?;
        doc.use_package("babel", &["russian"])?;
        doc.use_package("amsmath", &[])?;

        doc.frame(Some("Pythagoras"), &[], |frame| {
            frame.text("For any right triangle:");
            frame.math(|math| {
                math.text("x^2 + y^2 = z^2");
                Ok(())
            })?;
            frame.itemize(&[], |list| {
                for row in ["legs", "hypotenuse"] {
                    list.item(None, |item| {
                        item.text(&format!("the {}", row));
                        Ok(())
                    })?;
                }
                Ok(())
            })
        })?;

        doc.frame_pairs(Some("Code"), &[("fragile", "singleslide")], |frame| {
            frame.environment_pairs("lstlisting", &[("language", "kotlin")], |code| {
                code.text("val a = 1");
                Ok(())
            })
        })
    })
}
