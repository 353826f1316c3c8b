/// Bank Linter — validates word bank files before they are used.
///
/// Usage: bank_linter <word_dir>

use prompt_cards::core::article::article;
use prompt_cards::core::bank::{read_word_file, WordBank, WordList};
use std::collections::HashSet;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: bank_linter <word_dir>");
        process::exit(0);
    }

    let dir = Path::new(&args[1]);
    if !dir.is_dir() {
        eprintln!("ERROR: Path '{}' is not a directory", args[1]);
        process::exit(1);
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for list in WordList::ALL {
        let path = dir.join(list.file_name());
        if !path.exists() {
            errors.push(format!("Missing word list '{}'", path.display()));
            continue;
        }
        match read_word_file(&path) {
            Ok(words) => {
                println!("  Loaded: {} ({} entries)", path.display(), words.len());
                let (list_errors, list_warnings) = lint_list(list, &words);
                errors.extend(list_errors);
                warnings.extend(list_warnings);
            }
            Err(e) => errors.push(e.to_string()),
        }
    }

    // The loader applies its own checks on top of the per-list ones.
    if errors.is_empty() {
        if let Err(e) = WordBank::load_from_dir(dir) {
            errors.push(format!("Word bank failed to load: {}", e));
        }
    }

    println!("\n=== Word Bank Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_list(list: WordList, words: &[String]) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let non_blank = words.iter().filter(|w| !w.trim().is_empty()).count();
    if non_blank == 0 {
        errors.push(format!("Word list '{}' has no usable entries", list));
        return (errors, warnings);
    }

    if non_blank < 3 {
        warnings.push(format!(
            "Word list '{}' has only {} entries (minimum 3 recommended)",
            list, non_blank
        ));
    }

    let mut seen = HashSet::new();
    for word in words {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            warnings.push(format!("Word list '{}' contains a blank entry", list));
            continue;
        }
        if trimmed != word {
            warnings.push(format!(
                "Word list '{}': '{}' has leading or trailing whitespace",
                list, word
            ));
        }
        if !seen.insert(trimmed.to_lowercase()) {
            warnings.push(format!("Word list '{}': duplicate entry '{}'", list, trimmed));
        }

        // Only words that take an article are checked here.
        let takes_article = matches!(list, WordList::Actors | WordList::Modifiers | WordList::Elements);
        let starts_with_letter = trimmed.chars().next().is_some_and(char::is_alphabetic);
        if takes_article && !starts_with_letter {
            warnings.push(format!(
                "Word list '{}': '{}' does not start with a letter; it will get article '{}'",
                list,
                trimmed,
                article(trimmed).unwrap_or("a")
            ));
        }
    }

    (errors, warnings)
}
