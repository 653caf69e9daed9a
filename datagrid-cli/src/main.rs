mod cli;
mod error;
mod paths;
mod records;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use datagrid::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(html) => {
            println!("{html}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = File::create(&cli.log_file).map_err(|source| CliError::LogFile {
        path: cli.log_file.clone(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<DataTableConfig, CliError> {
    let config = match &cli.config {
        Some(path) => DataTableConfig::from_path(path)?,
        None => match paths::config_file() {
            Some(path) if path.exists() => DataTableConfig::from_path(&path)?,
            _ => DataTableConfig::default(),
        },
    };

    let config = match cli.page_size {
        Some(page_size) => config.page_size(page_size),
        None => config,
    };
    Ok(config)
}

/// Build the grid for `cli`, replay the requested interactions and render it.
fn run(cli: &Cli) -> Result<String, CliError> {
    let config = load_config(cli)?;
    let records = records::load(&cli.data)?;
    log::info!(
        "loaded {} records from {}",
        records.len(),
        cli.data.display()
    );

    let columns = records::columns(&records);
    let grid = DataTable::with_config(columns, records, config)?.row_id(records::row_id);

    for column_id in &cli.pin_left {
        grid.handle(GridEvent::Pin {
            column_id: column_id.clone(),
            side: Some(PinSide::Left),
        })?;
    }
    for column_id in &cli.pin_right {
        grid.handle(GridEvent::Pin {
            column_id: column_id.clone(),
            side: Some(PinSide::Right),
        })?;
    }
    if cli.page > 1 {
        grid.handle(GridEvent::Paginate(PaginationAction::GoTo(cli.page - 1)))?;
    }
    if let Some(row_id) = &cli.select {
        grid.handle(GridEvent::ToggleRow {
            row_id: row_id.clone(),
        })?;
    }

    Ok(datagrid::to_html(&grid.render()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use tempfile::NamedTempFile;

    use super::*;

    fn data_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn cli_for(data: &Path, args: &[&str]) -> Cli {
        let mut argv = vec!["datagrid-cli".to_string(), data.display().to_string()];
        argv.extend(args.iter().map(|a| a.to_string()));
        Cli::parse_from(argv)
    }

    fn rows(n: usize) -> String {
        let records: Vec<String> = (0..n)
            .map(|i| format!(r#"{{"id": "r{i}", "email": "user{i}@example.com"}}"#))
            .collect();
        format!("[{}]", records.join(","))
    }

    #[test]
    fn test_renders_records() {
        let data = data_file(&rows(3));
        let html = run(&cli_for(data.path(), &[])).unwrap();

        assert!(html.contains("user2@example.com"));
        assert!(html.contains(r#"data-row-id="r1""#));
        assert!(html.contains("Page 1 of 1"));
    }

    #[test]
    fn test_empty_array() {
        let data = data_file("[]");
        let html = run(&cli_for(data.path(), &[])).unwrap();
        assert!(html.contains("No results."));
    }

    #[test]
    fn test_page_and_selection() {
        let data = data_file(&rows(25));
        let html = run(&cli_for(
            data.path(),
            &["--page", "3", "--select", "r21", "--page-size", "10"],
        ))
        .unwrap();

        assert!(html.contains("Page 3 of 3"));
        assert!(html.contains("1 of 25 row(s) selected."));
        assert!(html.contains(r#"data-state="selected""#));
        assert!(!html.contains("user0@example.com"));
    }

    #[test]
    fn test_pin_right() {
        let data = data_file(&rows(1));
        let html = run(&cli_for(data.path(), &["--pin-right", "email"])).unwrap();
        assert!(html.contains("right: 0px;"));
    }

    #[test]
    fn test_config_file() {
        let data = data_file(&rows(0));
        let config = data_file(r#"{"empty_text": "Nothing to show"}"#);
        let html = run(&cli_for(
            data.path(),
            &["--config", &config.path().display().to_string()],
        ))
        .unwrap();
        assert!(html.contains("Nothing to show"));
    }

    #[test]
    fn test_unknown_row_is_an_error() {
        let data = data_file(&rows(2));
        let err = run(&cli_for(data.path(), &["--select", "missing"])).unwrap_err();
        assert!(matches!(err, CliError::Grid(GridError::UnknownRow(_))));
    }

    #[test]
    fn test_missing_data_file() {
        let err = run(&cli_for(Path::new("/no/such/data.json"), &[])).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
