//! Headless driver for the registration form.
//!
//! Builds the registration document, loads the country list in the
//! background and turns lines read from stdin into form events.
//!
//! Usage: `regform-cli [config.json]`

mod commands;

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use regform_lib::error::LoadError;
use regform_lib::template::registration_form;
use regform_lib::{Config, FormCoordinator, LoaderConfig, OptionList, OptionLoader};
use simplelog::WriteLogger;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinHandle};

use commands::Command;

type LoadTask = JoinHandle<Result<OptionList, LoadError>>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Form(#[from] regform_lib::error::Error),
}

fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    match path {
        Some(path) => Ok(serde_json::from_reader(File::open(path)?)?),
        None => Ok(Config::default()),
    }
}

/// Put the country control into its loading state and fetch in the background.
///
/// A loader that can't be built counts as a failed load: the form shows the
/// failure placeholder and no task is spawned.
fn start_option_load(form: &mut FormCoordinator, config: &LoaderConfig) -> Option<LoadTask> {
    form.begin_option_load();
    match OptionLoader::from_config(config) {
        Ok(loader) => Some(tokio::spawn(async move { loader.load().await })),
        Err(err) => {
            form.finish_option_load(Err(err));
            None
        }
    }
}

/// Outcome of a finished load task. A task that panicked or was aborted is a
/// failed load like any other.
fn load_result(
    joined: Result<Result<OptionList, LoadError>, JoinError>,
) -> Result<OptionList, LoadError> {
    joined.unwrap_or_else(|e| Err(LoadError::Task(e.to_string())))
}

async fn run() -> Result<(), CliError> {
    let path = std::env::args().nth(1);
    let config = load_config(path.as_deref().map(Path::new))?;

    let document = registration_form(&config.form);
    let mut form = FormCoordinator::attach(document, config.form)?;

    let mut load = start_option_load(&mut form, &config.loader);
    if load.is_none() {
        println!("{}", commands::countries(&form));
    }

    println!("{}", commands::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            joined = async {
                match load.as_mut() {
                    Some(task) => task.await,
                    None => std::future::pending().await,
                }
            }, if load.is_some() => {
                load = None;
                form.finish_option_load(load_result(joined));
                println!("{}", commands::countries(&form));
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => println!("{}", commands::execute(&mut form, command)),
                    Err(message) => println!("{message}"),
                }
            }
        }
    }

    if let Some(task) = load {
        task.abort();
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let log_file = File::create("regform.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use regform_lib::FormConfig;

    use super::*;

    fn form() -> FormCoordinator {
        let config = FormConfig::default();
        FormCoordinator::attach(registration_form(&config), config).unwrap()
    }

    #[tokio::test]
    async fn test_bad_endpoint_shows_failure_placeholder() {
        let mut form = form();
        let loader = LoaderConfig {
            endpoint: "not a url".to_string(),
            ..LoaderConfig::default()
        };

        assert!(start_option_load(&mut form, &loader).is_none());

        let select = form.document().get("country").unwrap();
        assert!(!select.disabled);
        assert_eq!(
            select.options().collect::<Vec<_>>(),
            vec![("", "Failed to load countries")]
        );
        assert!(!form.is_ready());
    }

    #[tokio::test]
    async fn test_valid_endpoint_starts_loading() {
        let mut form = form();
        let loader = LoaderConfig {
            endpoint: "http://127.0.0.1:9".to_string(),
            timeout_ms: 50,
        };

        let task = start_option_load(&mut form, &loader).unwrap();
        let select = form.document().get("country").unwrap();
        assert!(select.disabled);
        assert_eq!(
            select.options().collect::<Vec<_>>(),
            vec![("", "Loading countries...")]
        );

        form.finish_option_load(load_result(task.await));
        assert_eq!(
            commands::countries(&form),
            "countries: Failed to load countries"
        );
    }

    #[tokio::test]
    async fn test_aborted_task_is_a_task_failure() {
        let task: LoadTask = tokio::spawn(std::future::pending());
        task.abort();

        let err = load_result(task.await).unwrap_err();
        assert!(matches!(err, LoadError::Task(_)));
    }
}
