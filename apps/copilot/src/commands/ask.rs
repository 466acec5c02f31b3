//! One-shot query submission.

use anyhow::Result;
use copilot_async::types::answer::AnswerRequest;
use copilot_async::{Client, CopilotConfig};

use crate::render;
use crate::state::{Effect, Event, Outcome, Phase, step};

pub async fn execute(
    client: &Client<CopilotConfig>,
    query: String,
    results: u32,
    json: bool,
) -> Result<()> {
    if json {
        // Raw payload for scripting; skips the display-state machinery
        let req = AnswerRequest::new(query).with_n_results(results);
        let resp = client.answer().create(req).await?;
        println!("{}", serde_json::to_string_pretty(&resp)?);
        return Ok(());
    }

    let (phase, next_seq, effect) = step(Phase::Idle, 0, Event::Submit { query });

    let Effect::Dispatch { seq, query } = effect else {
        // Blank input: no request is issued
        eprintln!("{}", render::error("Please enter a search query"));
        std::process::exit(2);
    };

    tracing::debug!(n_results = results, "submitting query");
    let req = AnswerRequest::new(query).with_n_results(results);
    let outcome = Outcome::from_result(client.answer().create(req).await);
    let (phase, _, _) = step(phase, next_seq, Event::Completed { seq, outcome });

    match phase {
        Phase::Populated { response } => {
            println!("{}", render::populated(&response));
            Ok(())
        }
        Phase::Empty => {
            println!("{}", render::empty());
            Ok(())
        }
        Phase::Error { message } => {
            eprintln!("{}", render::error(&message));
            std::process::exit(1);
        }
        // One submit, one completion: the machine cannot land here
        Phase::Idle | Phase::Busy { .. } => Ok(()),
    }
}
