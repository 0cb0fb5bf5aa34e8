use passmask::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("Passmask");
    box_line_center("Password mask ranking and policy enumeration");
    box_line("");
    box_line("COMMANDS:");
    box_line("  gen     Rank masks from a mask,occurrence CSV by coverage per");
    box_line("          second and emit them until the target time is spent.");
    box_line("  check   Measure coverage and runtime of a given mask list");
    box_line("          against a mask,occurrence CSV.");
    box_line("  policy  Enumerate every mask that satisfies (or with");
    box_line("          --noncompliant, violates) a password policy.");
    box_line("");
    box_line("USAGE:");
    box_line("  passmask gen <masks.csv>... [OPTIONS]");
    box_line("  passmask check <masks.csv>... --checkmasks <LIST> [OPTIONS]");
    box_line("  passmask policy [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Output:");
    box_opt("  -o, --output <FILE>", "Write emitted masks to FILE, one per line");
    box_opt("  -b, --board", "Copy emitted masks to the clipboard");
    box_opt("      --showmasks", "Print a detail line for every emitted mask");
    box_opt("  -q, --quiet", "Suppress banners, warnings and log output");
    box_line("");
    box_line(" Cracking speed:");
    box_opt("      --pps <N>", "Passwords per second (default: 1000000000)");
    box_opt("  -t, --targettime <SECS>", "Stop once cumulative estimated time exceeds SECS");
    box_opt("      --save-defaults", "Save --pps and --showmasks as defaults");
    box_line("");
    box_line(" gen / check:");
    box_opt("      --optindex", "Sort by optimality index (default)");
    box_opt("      --occurrence", "Sort by observed occurrence");
    box_opt("      --complexity", "Sort by keyspace, smallest first");
    box_opt("      --checkmasks <LIST>", "Comma separated masks to check");
    box_opt("      --checkmasksfile <FILE>", "Masks to check, one per line");
    box_opt("      --min/maxlength <N>", "Mask length range");
    box_opt("      --min/maxoccurrence <N>", "Occurrence range");
    box_opt("      --min/maxcomplexity <N>", "Keyspace range");
    box_opt("      --min/maxtime <SECS>", "Estimated time range");
    box_line("");
    box_line(" policy:");
    box_opt("      --min/maxlength <N>", "Password length range (default: 8)");
    box_opt("      --min/maxlower <N>", "Lowercase letter count");
    box_opt("      --min/maxupper <N>", "Uppercase letter count");
    box_opt("      --min/maxdigit <N>", "Digit count");
    box_opt("      --min/maxspecial <N>", "Special character count");
    box_opt("      --noncompliant", "Emit masks that violate the policy");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passmask gen rockyou.csv -t 86400 -o day.hcmask");
    box_line("  passmask check rockyou.csv --checkmasks ?l?l?l?l?l?l,?d?d?d?d");
    box_line("  passmask policy --minlength 8 --mindigit 1 --minupper 1");
    box_line("");
    box_line("Set RUST_LOG (e.g. RUST_LOG=debug) to change log verbosity.");
    box_bottom();
}
