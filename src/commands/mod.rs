pub mod dropdown;
pub mod option;
pub mod randomize;
pub mod settings;
pub mod view;

use colored::*;
use promptforge::config::Config;
use promptforge::random::{RandomSource, SystemRandom};
use promptforge::storage::{FileStorage, KeyValueStorage};
use promptforge::store::DropdownStore;
use std::path::PathBuf;

/// Everything a command handler needs: loaded config and resolved data dir
pub struct AppContext {
    pub config: Config,
    pub data_dir: PathBuf,
}

impl AppContext {
    pub fn new(config: Config, data_dir: PathBuf) -> Self {
        Self { config, data_dir }
    }

    pub fn open_store(&self) -> DropdownStore<FileStorage, SystemRandom> {
        let mut store = DropdownStore::load(FileStorage::new(&self.data_dir), SystemRandom::new());
        report_save_error(&mut store);
        store
    }
}

/// Surface a failed write once as a warning; the command itself still succeeds
pub fn report_save_error<S: KeyValueStorage, R: RandomSource>(store: &mut DropdownStore<S, R>) {
    if let Some(err) = store.take_save_error() {
        eprintln!("{} Changes were not saved: {}", "⚠".bright_yellow().bold(), err);
    }
}

pub fn warn_not_found(kind: &str, reference: &str) {
    println!(
        "{} No {} matches '{}'. Nothing changed.",
        "⚠".bright_yellow().bold(),
        kind,
        reference.bright_yellow()
    );
}

pub fn success(message: impl AsRef<str>) {
    println!("{} {}", "✓".bright_green().bold(), message.as_ref());
}
