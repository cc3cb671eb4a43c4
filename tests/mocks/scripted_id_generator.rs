use contact_store::{ContactId, IdGenerator};
use std::sync::{Arc, Mutex};

/// ID generator that replays a fixed script.
///
/// Once the script runs out the last ID is repeated, which makes it easy to
/// force collisions. Tracks how many IDs were handed out.
#[allow(dead_code)]
#[derive(Clone)]
pub struct ScriptedIdGenerator {
    script: Arc<Vec<String>>,
    calls: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl ScriptedIdGenerator {
    /// Create a generator from a non-empty list of IDs.
    pub fn new(ids: &[&str]) -> Self {
        assert!(!ids.is_empty(), "script needs at least one id");
        Self {
            script: Arc::new(ids.iter().map(|s| s.to_string()).collect()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times `generate` was called.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl IdGenerator for ScriptedIdGenerator {
    fn generate(&self) -> ContactId {
        let mut calls = self.calls.lock().unwrap();
        let id = &self.script[(*calls).min(self.script.len() - 1)];
        *calls += 1;
        ContactId::new(id.clone()).unwrap()
    }
}
