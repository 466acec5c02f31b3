//! Display-state machine for the copilot exchange.
//!
//! The display state is a single finite value with one owner; `step` is a
//! pure transition function from (phase, event) to (phase, effect). Every
//! accepted submission gets a monotonically increasing sequence number, and
//! a completion whose sequence is not the latest is discarded, so rapid
//! successive submissions resolve deterministically to the newest one.

use copilot_async::CopilotError;
use copilot_async::types::AnswerResponse;

/// The current display state
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// No search performed yet; only the input affordance is shown
    Idle,
    /// One exchange in flight
    Busy {
        /// Sequence number of the in-flight exchange
        seq: u64,
    },
    /// The exchange failed; recovery requires an explicit user action
    Error {
        /// Message to surface verbatim
        message: String,
    },
    /// The exchange succeeded but carried no usable answer
    Empty,
    /// A usable answer is on display
    Populated {
        /// The rendered response
        response: Box<AnswerResponse>,
    },
}

/// Result of one exchange, as the state machine sees it
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A usable answer arrived
    Answered(Box<AnswerResponse>),
    /// The backend answered but with nothing usable
    NoAnswer,
    /// Transport or backend failure
    Failed(String),
}

impl Outcome {
    /// Classifies a client call result into an outcome
    ///
    /// A success whose answer trims to empty is `NoAnswer`, not a failure.
    #[must_use]
    pub fn from_result(result: Result<AnswerResponse, CopilotError>) -> Self {
        match result {
            Ok(response) if response.has_answer() => Self::Answered(Box::new(response)),
            Ok(_) => Self::NoAnswer,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// An event the state machine reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user submitted a query
    Submit {
        /// The query text as entered
        query: String,
    },
    /// An exchange completed
    Completed {
        /// Sequence number the exchange was dispatched with
        seq: u64,
        /// What came back
        outcome: Outcome,
    },
    /// Explicit return to idle (the try-again affordance)
    Reset,
}

/// Side-effect request produced by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do
    None,
    /// Issue exactly one request for this query
    Dispatch {
        /// Sequence number to report back in `Event::Completed`
        seq: u64,
        /// Query text to send
        query: String,
    },
}

/// Pure transition function
///
/// Returns the next phase, the next unused sequence number, and the effect
/// the caller must perform. A blank submission is a no-op: no effect, no
/// state change.
#[must_use]
pub fn step(phase: Phase, next_seq: u64, event: Event) -> (Phase, u64, Effect) {
    match event {
        Event::Submit { query } => {
            if query.trim().is_empty() {
                return (phase, next_seq, Effect::None);
            }
            let seq = next_seq;
            (
                Phase::Busy { seq },
                next_seq + 1,
                Effect::Dispatch { seq, query },
            )
        }
        Event::Completed { seq, outcome } => match phase {
            Phase::Busy { seq: current } if seq == current => {
                let next = match outcome {
                    Outcome::Answered(response) => Phase::Populated { response },
                    Outcome::NoAnswer => Phase::Empty,
                    Outcome::Failed(message) => Phase::Error { message },
                };
                (next, next_seq, Effect::None)
            }
            // Stale or unexpected completion: the display keeps what it has
            other => (other, next_seq, Effect::None),
        },
        Event::Reset => (Phase::Idle, next_seq, Effect::None),
    }
}
