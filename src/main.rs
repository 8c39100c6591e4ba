mod config;
mod error;
mod extract;
mod lines;
mod spec;

use std::env;
use std::process;

use config::Config;
use error::ExtractError;
use extract::Extractor;

fn main() {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(missing) => {
            for error in &missing {
                eprintln!("{error}");
            }
            eprintln!(
                "usage: get-params txt=<source document> csv=<parameter list> output=<destination>"
            );
            process::exit(2);
        }
    };

    if let Err(error) = run(&config) {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), ExtractError> {
    // both documents are fully buffered before any matching starts
    let source = lines::read_lines(&config.txt).map_err(|source| ExtractError::Read {
        path: config.txt.clone(),
        source,
    })?;
    let params = lines::read_lines(&config.csv).map_err(|source| ExtractError::Read {
        path: config.csv.clone(),
        source,
    })?;

    let entries = spec::parse(&params)?;

    let mut extractor = Extractor::new(&source);
    extractor.run(&entries);

    lines::write_lines(&config.output, extractor.output()).map_err(|source| {
        ExtractError::Write {
            path: config.output.clone(),
            source,
        }
    })?;

    println!(
        "extracted parameters from {} listed in {} into {}",
        config.txt.display(),
        config.csv.display(),
        config.output.display()
    );
    Ok(())
}
