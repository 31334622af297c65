use colored::*;

pub fn print_info(message: &str) {
    eprintln!("{} {}", "[INFO]".blue().bold(), message);
}

pub fn print_debug(message: &str, verbose: bool) {
    if verbose {
        eprintln!("{} {}", "[DEBUG]".cyan().bold(), message);
    }
}

pub fn print_success(message: &str) {
    eprintln!("{} {}", "[SUCCESS]".green().bold(), message);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "[WARNING]".yellow().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}

/// Prints a numbered list of likely causes under a heading.
pub fn print_hints(heading: &str, hints: &[&str]) {
    if hints.is_empty() {
        return;
    }

    eprintln!();
    eprintln!("{}", heading.yellow().bold());
    for (i, hint) in hints.iter().enumerate() {
        eprintln!("  {}. {}", i + 1, hint);
    }
}
