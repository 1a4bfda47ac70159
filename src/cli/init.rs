use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path, shellexpand_path};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(settings.input_dir())?;

    println!("Initialized extracto at {}", resolved.display());
    println!("Settings:   {}", settings_path().display());
    println!("Statements: {}", settings.input_dir().display());
    Ok(())
}
