//! Replaying adapter for the `DocumentSource` port.

use std::error::Error;
use std::sync::Mutex;

use super::replay_result;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::source::{DocumentSource, FetchFuture};

/// Serves recorded document fetches from a cassette.
pub struct ReplayingSource {
    replayer: Mutex<CassetteReplayer>,
    origin: String,
}

impl ReplayingSource {
    /// Creates a replaying source from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        Self {
            replayer: Mutex::new(CassetteReplayer::new(cassette)),
            origin: format!("cassette {} (recorded from {})", cassette.name, cassette.source),
        }
    }
}

impl DocumentSource for ReplayingSource {
    fn fetch(&self, path: &str) -> FetchFuture<'_> {
        let input = serde_json::json!({ "path": path });
        let interaction = self
            .replayer
            .lock()
            .map_err(|_| "replayer lock poisoned".to_string())
            .and_then(|mut replayer| {
                replayer
                    .next_interaction("source", "fetch", &input)
                    .ok_or_else(|| format!("no recorded fetch for {path}"))
            });
        let result: Result<String, Box<dyn Error + Send + Sync>> = match interaction {
            Ok(interaction) => replay_result(&interaction.output, "source::fetch"),
            Err(msg) => Err(msg.into()),
        };
        Box::pin(async move { result })
    }

    fn describe(&self) -> String {
        self.origin.clone()
    }
}
