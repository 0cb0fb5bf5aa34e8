//! CLI context - bundles settings, flags, and clipboard state.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};

use passmask::config::RunConfig;
use passmask::engine::{self, split_candidates};
use passmask::error::{MaskError, Result};
use passmask::output::{LineSink, OCCURRENCE_HEADER, OutputSink};
use passmask::policy::{self, Policy};
use passmask::table::{self, Filters, Table, TableBuilder};

use super::{CliFlags, CommandMode, help, prompts, quiet, report};
use crate::exits;
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> std::result::Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        quiet::set(flags.quiet);

        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run the selected command. Returns once the summary is printed.
    pub fn run(&mut self) -> Result<()> {
        if self.flags.version {
            println!("passmask {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        if self.flags.help || self.flags.command == CommandMode::None {
            help::print_help();
            return Ok(());
        }

        let mut config = self.run_config();
        self.handle_save_defaults(&config);
        self.handle_clipboard(&mut config);

        let mut sink = self.open_sink(&config)?;
        let stop = exits::interrupt_flag();

        match self.flags.command {
            CommandMode::Gen => {
                let table = self.load_table(&config)?;
                let sort = self.flags.sort.unwrap_or_default();
                report::table_loaded(&self.flags.inputs, &table, &config, Some(sort));
                if config.show_masks {
                    println!("{OCCURRENCE_HEADER}");
                }
                let summary = engine::rank(&table, sort, &config, &mut sink, stop)?;
                report::ranked(&summary);
            }
            CommandMode::Check => {
                let table = self.load_table(&config)?;
                let candidates = self.candidates()?;
                report::table_loaded(&self.flags.inputs, &table, &config, None);
                if config.show_masks {
                    println!("{OCCURRENCE_HEADER}");
                }
                let summary = engine::check(&table, &candidates, &config, &mut sink, stop)?;
                report::matched(&summary);
            }
            CommandMode::Policy => {
                let policy = self.policy();
                policy.validate()?;
                report::policy_loaded(&policy, self.flags.noncompliant, &config);
                let summary =
                    policy::enumerate(&policy, self.flags.noncompliant, &config, &mut sink, stop)?;
                report::enumerated(&summary);
            }
            CommandMode::None => unreachable!("handled above"),
        }

        sink.flush()?;
        if let Some(path) = &self.flags.output {
            prompts::masks_written(sink.emitted, path);
        }
        if let Some(masks) = sink.clipboard.take() {
            self.copy_to_clipboard(masks, sink.emitted);
        }
        Ok(())
    }

    /// Saved defaults overridden by explicit flags.
    fn run_config(&self) -> RunConfig {
        RunConfig {
            pps: self.flags.pps.unwrap_or(self.settings.pps),
            time_budget: self.flags.target_time,
            show_masks: self.flags.show_masks || self.settings.show_masks,
        }
    }

    fn handle_save_defaults(&mut self, config: &RunConfig) {
        if !self.flags.save_defaults {
            return;
        }
        self.settings.pps = config.pps;
        self.settings.show_masks = config.show_masks;
        match self.settings.save_to_file() {
            Ok(()) => prompts::defaults_saved(&Settings::path().display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    /// Open the clipboard up front so an unavailable clipboard is reported
    /// before any work is done.
    fn handle_clipboard(&mut self, config: &mut RunConfig) {
        if !self.flags.clipboard {
            return;
        }
        match ClipboardContext::new() {
            Ok(c) => self.clipboard = Some(c),
            Err(_) => {
                if prompts::clipboard_fallback_prompt() {
                    config.show_masks = true;
                } else {
                    std::process::exit(0);
                }
            }
        }
    }

    fn open_sink(&self, config: &RunConfig) -> Result<OutputSink> {
        let file = match &self.flags.output {
            Some(path) => Some(LineSink::create(Path::new(path))?),
            None => None,
        };
        Ok(OutputSink {
            file,
            show_masks: config.show_masks,
            clipboard: self.clipboard.as_ref().map(|_| String::new()),
            emitted: 0,
        })
    }

    fn filters(&self) -> Filters {
        Filters {
            min_length: self.flags.min_length,
            max_length: self.flags.max_length,
            min_occurrence: self.flags.min_occurrence,
            max_occurrence: self.flags.max_occurrence,
            min_complexity: self.flags.min_complexity,
            max_complexity: self.flags.max_complexity,
            min_time: self.flags.min_time,
            max_time: self.flags.max_time,
        }
    }

    /// A lone `--minlength` above the default also raises the maximum.
    fn policy(&self) -> Policy {
        let defaults = Policy::default();
        let min_length = self.flags.min_length.unwrap_or(defaults.min_length);
        Policy {
            min_length,
            max_length: self
                .flags
                .max_length
                .unwrap_or(defaults.max_length.max(min_length)),
            lower: self.flags.lower,
            upper: self.flags.upper,
            digit: self.flags.digit,
            special: self.flags.special,
        }
    }

    /// Load every input (`-` is stdin) into one table.
    fn load_table(&self, config: &RunConfig) -> Result<Table> {
        let mut builder = TableBuilder::new(self.filters(), config);
        for input in &self.flags.inputs {
            if input == "-" {
                table::read_into(&mut builder, io::stdin().lock())?;
            } else {
                table::load_path(&mut builder, Path::new(input))?;
            }
        }
        let table = builder.finish();
        if !table.rejected().is_empty() {
            prompts::warn(&format!(
                "Skipped {} malformed record(s)",
                table.rejected().len()
            ));
        }
        Ok(table)
    }

    /// Candidates from `--checkmasks` followed by `--checkmasksfile`.
    fn candidates(&self) -> Result<Vec<String>> {
        let mut masks: Vec<String> = self
            .flags
            .check_masks
            .as_deref()
            .map(|list| split_candidates(list).map(String::from).collect())
            .unwrap_or_default();
        if let Some(path) = &self.flags.check_masks_file {
            let reader = BufReader::new(File::open(path)?);
            for line in reader.lines() {
                masks.push(line?);
            }
        }
        Ok(masks)
    }

    fn copy_to_clipboard(&mut self, masks: String, count: u64) {
        let Some(ctx) = self.clipboard.as_mut() else {
            return;
        };
        match ctx
            .set_contents(masks)
            .map_err(|e| MaskError::Clipboard(e.to_string()))
        {
            Ok(()) => prompts::clipboard_copied(count),
            Err(e) => prompts::clipboard_error(&e.to_string()),
        }
    }
}
