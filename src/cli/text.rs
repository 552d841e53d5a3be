//! Help and listing screens.

use fakepass::Registry;

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_text, box_top, flush};

pub fn print_help() {
    box_top("Fakepass");
    box_line_center("Seedable password and username generator");
    box_line("");
    box_line("USAGE:");
    box_line("  fakepass [FUNCTION] [OPTIONS]");
    box_line("");
    box_line("FUNCTIONS:");
    box_opt("  password", "Class-constrained password (default)");
    box_opt("  username", "Surname followed by four digits");
    box_opt("  weighted", "Pick one of -p options=.. by -p weights=..");
    box_opt("  list", "Show every function and its parameters");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (default: 12, minimum: 5)");
    box_opt("      --no-lower", "Exclude lower case letters");
    box_opt("      --no-upper", "Exclude upper case letters");
    box_opt("      --no-numeric", "Exclude digits");
    box_opt("      --no-special", "Exclude special characters");
    box_opt("      --space", "Allow spaces (never first or last)");
    box_opt("  -p, --param <KEY=VALUE>", "Raw function parameter. Repeatable; commas separate list values.");
    box_line("");
    box_line(" Generation:");
    box_opt("  -n, --number <N>", "How many values to generate");
    box_opt("      --seed <N>", "Reproducible output for the same seed");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Append to file (default: fakepass.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress everything except generated values");
    box_line("");
    box_line(" Settings:");
    box_opt("      --save", "Save the password, -n and -o options given as defaults");
    box_opt("  -d, --default", "Ignore saved defaults");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  fakepass                     One 12 character password");
    box_line("  fakepass -l 20 -n 3          Three passwords, 20 characters each");
    box_line("  fakepass --seed 11 -l 32     Same password on every run");
    box_line("  fakepass username -n 5       Five usernames");
    box_line("  fakepass -l 16 --save        Make 16 the default length");
    box_line("");
    box_bottom();
    println!();
    flush();
}

pub fn print_list(registry: &Registry) {
    for (name, info) in registry.iter() {
        box_top(name);
        box_text(info.description);
        box_line(&format!("Category: {}  Output: {}", info.category, info.output));
        box_line(&format!("Example:  {}", info.example));
        if !info.params.is_empty() {
            box_line("");
            for param in &info.params {
                let default = if param.default.is_empty() {
                    "required".to_string()
                } else {
                    format!("default: {}", param.default)
                };
                box_opt(
                    &format!("  {} <{}>", param.field, param.kind),
                    &format!("{} ({})", param.description, default),
                );
            }
        }
        box_bottom();
    }
    flush();
}
