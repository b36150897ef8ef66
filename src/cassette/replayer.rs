//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port, method, and input.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct RequestKey {
    port: String,
    method: String,
    input: String,
}

impl RequestKey {
    fn new(port: &str, method: &str, input: &serde_json::Value) -> Self {
        Self { port: port.to_string(), method: method.to_string(), input: input.to_string() }
    }
}

/// Replays interactions from a loaded cassette.
///
/// Interactions are matched on port, method, and input, so concurrent
/// requests replay correctly whatever order they are issued in. Repeated
/// identical requests are served in recording order.
pub struct CassetteReplayer {
    queues: HashMap<RequestKey, VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<RequestKey, VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = RequestKey::new(&interaction.port, &interaction.method, &interaction.input);
            queues.entry(key).or_default().push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Take the next recorded interaction matching the request.
    ///
    /// Returns `None` if nothing (or nothing more) was recorded for it.
    pub fn next_interaction(
        &mut self,
        port: &str,
        method: &str,
        input: &serde_json::Value,
    ) -> Option<Interaction> {
        self.queues.get_mut(&RequestKey::new(port, method, input))?.pop_front()
    }

    /// Number of interactions not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}
