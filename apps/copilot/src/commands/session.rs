//! Interactive query session.
//!
//! The terminal analog of the copilot page: one query per line, one exchange
//! in flight at a time, and an explicit return to idle after an error. The
//! display state is owned by this loop and mutated only through
//! [`crate::state::step`].

use std::io::{self, BufRead, Write as _};

use anyhow::Result;
use colored::Colorize;
use copilot_async::types::answer::AnswerRequest;
use copilot_async::{Client, CopilotConfig};

use crate::commands::examples::EXAMPLE_QUERIES;
use crate::render;
use crate::state::{Effect, Event, Outcome, Phase, step};

pub async fn execute(client: &Client<CopilotConfig>) -> Result<()> {
    println!("{}", "Clinical AI Copilot".bold());
    println!("Ask questions about patient data and get AI-powered clinical insights.");
    println!(
        "Try: {}",
        EXAMPLE_QUERIES[0].italic()
    );
    println!("Type a query and press Enter; {} to leave.\n", "exit".cyan());

    let mut phase = Phase::Idle;
    let mut next_seq: u64 = 0;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "copilot>".cyan());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let (p, n, effect) = step(
            phase,
            next_seq,
            Event::Submit {
                query: input.to_string(),
            },
        );
        phase = p;
        next_seq = n;

        let Effect::Dispatch { seq, query } = effect else {
            // Blank input issues no request and changes nothing
            println!("{}", "Please enter a search query".yellow());
            continue;
        };

        println!("{}", "Analyzing...".dimmed());
        let outcome = Outcome::from_result(client.answer().create(AnswerRequest::new(query)).await);
        let (p, n, _) = step(phase, next_seq, Event::Completed { seq, outcome });
        phase = p;
        next_seq = n;

        match &phase {
            Phase::Populated { response } => println!("{}", render::populated(response)),
            Phase::Empty => println!("{}", render::empty()),
            Phase::Error { message } => println!("{}", render::error(message)),
            Phase::Idle | Phase::Busy { .. } => {}
        }

        // The try-again affordance: an error returns the session to idle so
        // the next line starts clean
        if matches!(phase, Phase::Error { .. }) {
            let (p, n, _) = step(phase, next_seq, Event::Reset);
            phase = p;
            next_seq = n;
        }
    }

    Ok(())
}
