//! Persisted defaults for the CLI.

mod file;

use std::path::{Path, PathBuf};

use passmask::config::DEFAULT_PPS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pps: u64,
    pub show_masks: bool,
}

impl Settings {
    /// `$HOME/.config/passmask/settings`.
    pub fn path() -> PathBuf {
        file::get_path()
    }

    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::get_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&file::get_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(path, self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pps: DEFAULT_PPS,
            show_masks: false,
        }
    }
}
