use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "datagrid-cli")]
#[command(about = "Render a JSON array of records as a paginated HTML data grid")]
#[command(version)]
#[command(after_help = "Examples:
  datagrid-cli payments.json                       # First page, default pinning
  datagrid-cli payments.json --page 3              # Third page
  datagrid-cli payments.json --select 42           # Mark row with id 42 selected
  datagrid-cli payments.json --pin-right amount    # Pin a column to the right
  datagrid-cli payments.json --config grid.json    # Use a specific config file")]
pub struct Cli {
    /// JSON file holding an array of objects
    pub data: PathBuf,

    /// Grid configuration file (defaults to the user config file when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page to render, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page, overriding the configuration
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Id of the row to select
    #[arg(long)]
    pub select: Option<String>,

    /// Pin a column to the left (repeatable)
    #[arg(long)]
    pub pin_left: Vec<String>,

    /// Pin a column to the right (repeatable)
    #[arg(long)]
    pub pin_right: Vec<String>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Where to write the log
    #[arg(long, default_value = "datagrid.log")]
    pub log_file: PathBuf,
}
