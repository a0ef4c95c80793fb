use clap::Parser;
use log::{debug, warn, LevelFilter};
use seekernotes::application::App;
use seekernotes::cli::{format_directory_status, format_note_list, Cli, Commands};
use seekernotes::domain::Config;
use seekernotes::error::SeekerError;
use seekernotes::infrastructure::{ConfigStore, FileSystemRepository, FixedPicker, TerminalPicker};
use simple_logger::SimpleLogger;
use std::fs;
use std::io::{self, Read};

fn main() {
    let cli = Cli::parse();
    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Err(e) = SimpleLogger::new().with_level(log_level).init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    debug!("Parsed CLI: {:?}", cli);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), SeekerError> {
    let store = match cli.config_dir {
        Some(dir) => ConfigStore::new(dir),
        None => ConfigStore::from_platform()?,
    };
    debug!("Config file: {}", store.config_file_path().display());
    let repo = FileSystemRepository::new(store.clone());

    match cli.command {
        Commands::Config => {
            let app = App::startup(store, repo, FixedPicker::default());
            let config = app.require_config()?;
            println!("Config file: {}", app.config_store().config_file_path().display());
            println!("{}", serde_json::to_string_pretty(config)?);
            println!("{}", format_directory_status(config));
            Ok(())
        }
        Commands::SetDir { dir } => {
            let dir = if dir.is_absolute() {
                dir
            } else {
                std::env::current_dir()?.join(dir)
            };
            let mut app = App::startup(store, repo, FixedPicker::new(Some(dir)));
            if let Some(config) = app.choose_directory()? {
                report_chosen(&config);
            }
            Ok(())
        }
        Commands::PickDir => {
            let mut app = App::startup(store, repo, TerminalPicker::stdio());
            match app.choose_directory()? {
                Some(config) => report_chosen(&config),
                None => println!("No folder selected, config unchanged"),
            }
            Ok(())
        }
        Commands::List => {
            let app = App::startup(store, repo, FixedPicker::default());
            let config = app.require_config()?;
            let notes = app.load_notes(config)?;
            print!("{}", format_note_list(&notes));
            Ok(())
        }
        Commands::Show { path } => {
            let app = App::startup(store, repo, FixedPicker::default());
            let note = app.load_note(&path)?;
            print!("{}", note.content);
            Ok(())
        }
        Commands::Save { name, file } => {
            let content = match file {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let app = App::startup(store, repo, FixedPicker::default());
            let config = app.require_config()?;
            app.save_note(config, &content, &name)?;
            Ok(())
        }
    }
}

fn report_chosen(config: &Config) {
    if !config.is_user_dir_valid() {
        warn!(
            "'{}' is not a usable notes directory yet",
            config.user_selected_directory
        );
    }
    println!("Notes directory set to {}", config.user_selected_directory);
}
