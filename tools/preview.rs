/// Preview — interactive shell for building prompts card by card.
///
/// Usage: preview [--words <dir>] [--seed <n>]
///
/// Commands:
///   show                 — list cards and the current prompt
///   add <type>           — append a drawn card
///   insert <id> <type>   — insert a drawn card after card <id>
///   remove <id>          — remove a card
///   reroll <id>          — draw a new value for a card
///   type <id> <type>     — change a card's type
///   move <id> <index>    — move a card to a position
///   generate             — regenerate the whole prompt
///   parts                — show the clauses behind the prompt
///   save                 — append the prompt to the saved text
///   saved                — print the saved text
///   export [path]        — write the saved text to a file
///   seed <n>             — restart the random stream
///   help                 — list commands
///   quit                 — exit

use prompt_cards::core::deck::{Deck, DEFAULT_EXPORT_NAME};
use prompt_cards::schema::card::{CardId, CardType};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "prompt_cards=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut words_dir = "word_data".to_string();
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--words" if i + 1 < args.len() => {
                i += 1;
                words_dir = args[i].clone();
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut deck = match Deck::builder().word_bank_dir(&words_dir).seed(seed).build() {
        Ok(deck) => deck,
        Err(e) => {
            eprintln!("ERROR: could not load word bank from '{}': {}", words_dir, e);
            std::process::exit(1);
        }
    };

    println!("Loaded {} words from '{}'", deck.bank().word_count(), words_dir);
    println!("Seed: {}", seed);
    println!("Type 'help' for commands.\n");
    print_deck(&deck);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        let result = match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
                continue;
            }
            "show" | "ls" => {
                print_deck(&deck);
                continue;
            }
            "parts" => {
                let p = deck.parts();
                println!("Actors:     {:?}", p.actors);
                println!("Pairs:      {:?}", p.pairs);
                println!("Conflicts:  {:?}", p.conflicts);
                println!("Actor clause:     {}", p.actor_clause());
                println!("Motivator clause: {}", p.motivator_clause());
                println!("Conflict clause:  {}", p.conflict_clause());
                continue;
            }
            "add" => match parse_type_arg(&parts[1..]) {
                Some(card_type) => deck.add_card(card_type).map(|_| ()),
                None => {
                    println!("Usage: add <type>");
                    print_types();
                    continue;
                }
            },
            "insert" => match (parse_id(parts.get(1)), parse_type_arg(parts.get(2..).unwrap_or(&[]))) {
                (Some(id), Some(card_type)) => deck.insert_after(id, card_type).map(|_| ()),
                _ => {
                    println!("Usage: insert <id> <type>");
                    continue;
                }
            },
            "remove" | "rm" => match parse_id(parts.get(1)) {
                Some(id) => deck.remove_card(id).map(|_| ()),
                None => {
                    println!("Usage: remove <id>");
                    continue;
                }
            },
            "reroll" | "r" => match parse_id(parts.get(1)) {
                Some(id) => deck.reroll(id),
                None => {
                    println!("Usage: reroll <id>");
                    continue;
                }
            },
            "type" => match (parse_id(parts.get(1)), parse_type_arg(parts.get(2..).unwrap_or(&[]))) {
                (Some(id), Some(card_type)) => deck.set_type(id, card_type),
                _ => {
                    println!("Usage: type <id> <type>");
                    print_types();
                    continue;
                }
            },
            "move" | "mv" => {
                let index = parts.get(2).and_then(|s| s.parse::<usize>().ok());
                match (parse_id(parts.get(1)), index) {
                    (Some(id), Some(index)) => deck.move_card(id, index),
                    _ => {
                        println!("Usage: move <id> <index>");
                        continue;
                    }
                }
            }
            "generate" | "gen" | "g" => deck.regenerate(),
            "save" => {
                deck.save_prompt();
                println!("Saved: {}", deck.prompt());
                continue;
            }
            "saved" => {
                if deck.saved_text().is_empty() {
                    println!("(nothing saved yet)");
                } else {
                    print!("{}", deck.saved_text());
                }
                continue;
            }
            "export" => {
                let path = parts.get(1).copied().unwrap_or(DEFAULT_EXPORT_NAME);
                match deck.export_saved(Path::new(path)) {
                    Ok(()) => println!("Exported saved prompts to '{}'", path),
                    Err(e) => println!("ERROR: {}", e),
                }
                continue;
            }
            "seed" => {
                match parts.get(1).map(|s| s.parse::<u64>()) {
                    None => println!("Current seed: {}", deck.seed()),
                    Some(Ok(s)) => {
                        deck.reseed(s);
                        println!("Seed set to {}", s);
                    }
                    Some(Err(_)) => println!("Invalid seed: {}", parts[1]),
                }
                continue;
            }
            _ => {
                println!("Unknown command: '{}'. Type 'help' for available commands.", cmd);
                continue;
            }
        };

        match result {
            Ok(()) => print_deck(&deck),
            Err(e) => println!("ERROR: {}", e),
        }
    }
}

/// Card types may be given as one word ("actor_modifier") or as the
/// label split over several ("Actor Modifier").
fn parse_type_arg(words: &[&str]) -> Option<CardType> {
    if words.is_empty() {
        return None;
    }
    words.join(" ").parse().ok()
}

fn parse_id(arg: Option<&&str>) -> Option<CardId> {
    arg.and_then(|s| s.parse::<u64>().ok()).map(CardId)
}

fn print_deck(deck: &Deck) {
    println!();
    for (index, card) in deck.cards().iter().enumerate() {
        println!("  [{}] #{:<3} {}", index, card.id, card);
    }
    println!("\n--- Prompt ---");
    println!("{}", deck.prompt());
    println!("--- End ---\n");
}

fn print_types() {
    let labels: Vec<&str> = CardType::ALL.iter().map(CardType::label).collect();
    println!("  types: {}", labels.join(", "));
}

fn print_usage() {
    println!("Preview — interactive shell for building writing prompts.");
    println!();
    println!("Usage: preview [--words <dir>] [--seed <n>]");
    println!();
    println!("  --words <dir>  Directory with actors/modifiers/motivators/elements/conflicts .json (default: word_data)");
    println!("  --seed <n>     Initial RNG seed (default: 42)");
}

fn print_help() {
    println!("Commands:");
    println!("  show                Show cards and the current prompt");
    println!("  add <type>          Append a drawn card");
    println!("  insert <id> <type>  Insert a drawn card after card <id>");
    println!("  remove <id>         Remove a card");
    println!("  reroll <id>         Draw a new value for a card");
    println!("  type <id> <type>    Change a card's type");
    println!("  move <id> <index>   Move a card to a position");
    println!("  generate            Regenerate the whole prompt");
    println!("  parts               Show the clauses behind the prompt");
    println!("  save                Append the prompt to the saved text");
    println!("  saved               Print the saved text");
    println!("  export [path]       Write the saved text (default: {})", DEFAULT_EXPORT_NAME);
    println!("  seed <n>            Restart the random stream");
    println!("  help                Show this help");
    println!("  quit                Exit");
    println!();
    print_types();
}
