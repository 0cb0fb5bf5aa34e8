//! Settings file persistence.
//!
//! One comma separated line: `pps,show_masks`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(to_line(settings).as_bytes())?;
    Ok(())
}

/// Missing files leave `settings` untouched.
pub fn load(path: &Path, settings: &mut Settings) -> io::Result<()> {
    let file = match OpenOptions::new().read(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    parse_line(line.trim(), settings);
    Ok(())
}

fn to_line(settings: &Settings) -> String {
    format!("{},{}\n", settings.pps, settings.show_masks)
}

/// Unparseable fields keep their current value.
fn parse_line(line: &str, settings: &mut Settings) {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return;
    }
    settings.pps = parts[0].parse().unwrap_or(settings.pps);
    settings.show_masks = parts[1].parse().unwrap_or(settings.show_masks);
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/passmask/settings", home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings");
        let settings = Settings {
            pps: 42_000,
            show_masks: true,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "42000,true\n");
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        load(&dir.path().join("absent"), &mut settings).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn garbage_fields_fall_back() {
        let mut settings = Settings::default();
        parse_line("fast,yes", &mut settings);
        assert_eq!(settings, Settings::default());
        parse_line("5,true", &mut settings);
        assert_eq!(settings.pps, 5);
        assert!(settings.show_masks);
        parse_line("only-one-field", &mut settings);
        assert_eq!(settings.pps, 5);
    }
}
