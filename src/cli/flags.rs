use passmask::engine::SortMode;
use passmask::policy::Bounds;

/// Which engine the invocation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandMode {
    #[default]
    None,
    Gen,
    Check,
    Policy,
}

impl CommandMode {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "gen" | "maskgen" => Some(CommandMode::Gen),
            "check" => Some(CommandMode::Check),
            "policy" | "policygen" => Some(CommandMode::Policy),
            _ => None,
        }
    }

    pub fn uses_table(self) -> bool {
        matches!(self, CommandMode::Gen | CommandMode::Check)
    }
}

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub show_masks: bool,
    pub save_defaults: bool,
    pub noncompliant: bool,
    pub command: CommandMode,
    pub inputs: Vec<String>,
    pub output: Option<String>,
    pub pps: Option<u64>,
    pub target_time: Option<u64>,
    pub sort: Option<SortMode>,
    pub check_masks: Option<String>,
    pub check_masks_file: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_occurrence: Option<u64>,
    pub max_occurrence: Option<u64>,
    pub min_complexity: Option<u128>,
    pub max_complexity: Option<u128>,
    pub min_time: Option<u128>,
    pub max_time: Option<u128>,
    pub lower: Bounds,
    pub upper: Bounds,
    pub digit: Bounds,
    pub special: Bounds,
}

impl CliFlags {
    pub fn has_check_source(&self) -> bool {
        self.check_masks.is_some() || self.check_masks_file.is_some()
    }
}
