//! Roster console application
//!
//! Menu-driven analysis of the hero/villain roster. The table state is
//! threaded through the dispatcher by value; the loop owns nothing else.

use std::io::{self, BufRead};

use tracing::warn;

use roster_core::menu::{self, Outcome};
use roster_core::Table;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("Welcome to the hero and villain data analysis application!");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut table = Table::new();

    loop {
        println!("{}", menu::menu_text());
        println!("Choose an option (1-{}): ", menu::OPTION_COUNT);

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed
            break;
        }

        let Some(choice) = menu::parse_choice(&line) else {
            warn!(input = line.trim(), "invalid menu choice");
            println!(
                "Error: enter a number between 1 and {}.",
                menu::OPTION_COUNT
            );
            continue;
        };

        match menu::dispatch(choice, table, &mut input)? {
            Outcome::Continue(next) => table = next,
            Outcome::Exit => break,
        }
    }

    Ok(())
}
