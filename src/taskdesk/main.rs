use std::io::{self, BufRead, Write};

use clap::Parser;
use colored::*;

use taskdesk::clients::ClientList;
use taskdesk::error::Result;
use taskdesk::model::{Client, Task};
use taskdesk::store::fs::FileStore;
use taskdesk::store::DataStore;
use taskdesk::tasks::TaskList;
use taskdesk::ui::Ui;

mod args;
use args::Cli;

const LINE: &str = "_________________________________";

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut task_store: FileStore<Task> = FileStore::new(&cli.data_dir, "tasks.txt");
    let mut client_store: FileStore<Client> = FileStore::new(&cli.data_dir, "clients.txt");

    let task_load = task_store.load();
    let client_load = client_store.load();
    let task_stats = task_load.stats();
    let client_stats = client_load.stats();

    let mut ui = Ui::new(
        TaskList::new(task_load.records, task_store),
        ClientList::new(client_load.records, client_store),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_block(&mut out, &ui.greet(task_stats, client_stats))?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let reply = ui.respond(&line);
        print_block(&mut out, &reply.text)?;
        if reply.quit {
            break;
        }
    }
    Ok(())
}

fn print_block(out: &mut impl Write, text: &str) -> Result<()> {
    writeln!(out, "{}", LINE.bright_black())?;
    writeln!(out, "{}", text)?;
    writeln!(out, "{}", LINE.bright_black())?;
    out.flush()?;
    Ok(())
}
