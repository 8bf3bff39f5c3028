use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskdesk")]
#[command(about = "A command-line assistant for tasks and client contacts", long_about = None)]
pub struct Cli {
    /// Directory holding the task and client data files
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}
