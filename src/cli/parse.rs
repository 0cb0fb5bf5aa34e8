use std::str::FromStr;

use passmask::engine::SortMode;

use super::{CliFlags, CommandMode};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String, String),
    MissingValue(String),
    UnknownArg(String),
    UnknownCommand(String),
    MissingInput(&'static str),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(flag, s) => write!(f, "Invalid number for {}: {}", flag, s),
            ParseError::MissingValue(flag) => write!(f, "Missing value for {}", flag),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
            ParseError::UnknownCommand(s) => write!(f, "Unknown command: {}", s),
            ParseError::MissingInput(what) => write!(f, "Missing {}", what),
        }
    }
}

/// Consume the value following `args[*i]` and parse it.
fn value<T: FromStr>(args: &[String], i: &mut usize) -> Result<T, ParseError> {
    let flag = args[*i].clone();
    *i += 1;
    let raw = args.get(*i).ok_or_else(|| ParseError::MissingValue(flag.clone()))?;
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(flag, raw.clone()))
}

fn string(args: &[String], i: &mut usize) -> Result<String, ParseError> {
    let flag = args[*i].clone();
    *i += 1;
    args.get(*i).cloned().ok_or(ParseError::MissingValue(flag))
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--showmasks" => flags.show_masks = true,
            "--save-defaults" => flags.save_defaults = true,
            "--noncompliant" => flags.noncompliant = true,
            "--occurrence" => flags.sort = Some(SortMode::Occurrence),
            "--complexity" => flags.sort = Some(SortMode::Complexity),
            "--optindex" => flags.sort = Some(SortMode::OptIndex),
            "-o" | "--output" => flags.output = Some(string(args, &mut i)?),
            "--checkmasks" => flags.check_masks = Some(string(args, &mut i)?),
            "--checkmasksfile" => flags.check_masks_file = Some(string(args, &mut i)?),
            "--pps" => flags.pps = Some(value(args, &mut i)?),
            "-t" | "--targettime" => flags.target_time = Some(value(args, &mut i)?),
            "--minlength" => flags.min_length = Some(value(args, &mut i)?),
            "--maxlength" => flags.max_length = Some(value(args, &mut i)?),
            "--minoccurrence" => flags.min_occurrence = Some(value(args, &mut i)?),
            "--maxoccurrence" => flags.max_occurrence = Some(value(args, &mut i)?),
            "--mincomplexity" => flags.min_complexity = Some(value(args, &mut i)?),
            "--maxcomplexity" => flags.max_complexity = Some(value(args, &mut i)?),
            "--mintime" => flags.min_time = Some(value(args, &mut i)?),
            "--maxtime" => flags.max_time = Some(value(args, &mut i)?),
            "--minlower" => flags.lower.min = Some(value(args, &mut i)?),
            "--maxlower" => flags.lower.max = Some(value(args, &mut i)?),
            "--minupper" => flags.upper.min = Some(value(args, &mut i)?),
            "--maxupper" => flags.upper.max = Some(value(args, &mut i)?),
            "--mindigit" => flags.digit.min = Some(value(args, &mut i)?),
            "--maxdigit" => flags.digit.max = Some(value(args, &mut i)?),
            "--minspecial" => flags.special.min = Some(value(args, &mut i)?),
            "--maxspecial" => flags.special.max = Some(value(args, &mut i)?),
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(ParseError::UnknownArg(arg.to_string()));
            }
            word if flags.command == CommandMode::None => {
                flags.command = CommandMode::from_word(word)
                    .ok_or_else(|| ParseError::UnknownCommand(word.to_string()))?;
            }
            input if flags.command.uses_table() => flags.inputs.push(input.to_string()),
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    validate(&flags)?;
    Ok(flags)
}

/// Cross-flag requirements that a single flag cannot check on its own.
fn validate(flags: &CliFlags) -> Result<(), ParseError> {
    if flags.help || flags.version {
        return Ok(());
    }
    if flags.command.uses_table() && flags.inputs.is_empty() {
        return Err(ParseError::MissingInput("mask statistics file (CSV)"));
    }
    if flags.command == CommandMode::Check && !flags.has_check_source() {
        return Err(ParseError::MissingInput("--checkmasks or --checkmasksfile"));
    }
    Ok(())
}
