use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use super::{CommandError, CommandRunner};

/// A mock [CommandRunner], usable when testing the provider without spawning
/// real processes.
///
/// Every `run` answers with the currently scripted result and every
/// invocation, queries and dispatches alike, is recorded as its full argument
/// vector for later inspection.
#[derive(Clone)]
pub struct MockCommandRunner {
    resolvable: Arc<Mutex<bool>>,
    scripted: Arc<Mutex<Result<String, CommandError>>>,
    queries: Arc<Mutex<Vec<Vec<String>>>>,
    dispatches: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockCommandRunner {
    /// Creates a new runner which will answer every `run` with `scripted`.
    pub fn new(scripted: Result<String, CommandError>) -> MockCommandRunner {
        MockCommandRunner {
            resolvable: Arc::new(Mutex::new(true)),
            scripted: Arc::new(Mutex::new(scripted)),
            queries: Arc::new(Mutex::new(Vec::new())),
            dispatches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set whether [CommandRunner::resolve] should find the program or not.
    pub fn set_resolvable(&self, resolvable: bool) {
        *self.resolvable.lock().unwrap() = resolvable;
    }

    /// Replace the result answered by [CommandRunner::run].
    pub fn set_scripted(&self, scripted: Result<String, CommandError>) {
        *self.scripted.lock().unwrap() = scripted;
    }

    /// Argument vectors of all recorded `run` calls, oldest first.
    pub fn queries(&self) -> Vec<Vec<String>> {
        self.queries.lock().unwrap().clone()
    }

    /// Argument vectors of all recorded `dispatch` calls, oldest first.
    pub fn dispatches(&self) -> Vec<Vec<String>> {
        self.dispatches.lock().unwrap().clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        if *self.resolvable.lock().unwrap() {
            Some(PathBuf::from("/usr/bin").join(program))
        } else {
            None
        }
    }

    fn run(&self, _program: &str, args: &[String]) -> Result<String, CommandError> {
        self.queries.lock().unwrap().push(args.to_vec());
        self.scripted.lock().unwrap().clone()
    }

    fn dispatch(&self, _program: &str, args: &[String]) -> Result<(), CommandError> {
        self.dispatches.lock().unwrap().push(args.to_vec());
        Ok(())
    }
}
