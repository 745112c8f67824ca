//! Recording process runner for testing.

use std::sync::{Arc, RwLock};

use bazkit_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandSpec, ProcessRunner},
    },
    error::BazkitResult,
};

type Responder = Box<dyn Fn(&CommandSpec) -> CommandOutput + Send + Sync>;

struct Rule {
    program: String,
    prefix: Vec<String>,
    respond: Responder,
}

/// Records every command instead of running it, and answers with scripted
/// outputs. Commands matching no rule succeed with empty output.
///
/// Clones share state, so a test can keep one handle while the service owns
/// another.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<RwLock<Vec<CommandSpec>>>,
    rules: Arc<RwLock<Vec<Rule>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer commands of `program` whose arguments start with `prefix`.
    /// The first matching rule wins.
    pub fn respond(self, program: &str, prefix: &[&str], output: CommandOutput) -> Self {
        self.respond_with(program, prefix, move |_| output.clone())
    }

    /// Like [`respond`](Self::respond), computing the output per call. The
    /// closure may also touch the filesystem to simulate the tool.
    pub fn respond_with(
        self,
        program: &str,
        prefix: &[&str],
        respond: impl Fn(&CommandSpec) -> CommandOutput + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut rules) = self.rules.write() {
            rules.push(Rule {
                program: program.to_string(),
                prefix: prefix.iter().map(|s| s.to_string()).collect(),
                respond: Box::new(respond),
            });
        }
        self
    }

    /// Every command seen so far, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.read().map(|c| c.clone()).unwrap_or_default()
    }

    /// Commands of `program` whose arguments start with `prefix`.
    pub fn calls_to(&self, program: &str, prefix: &[&str]) -> Vec<CommandSpec> {
        self.calls()
            .into_iter()
            .filter(|c| c.matches(program, prefix))
            .collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> BazkitResult<CommandOutput> {
        self.calls
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(command.clone());

        let rules = self.rules.read().map_err(|_| ApplicationError::LockPoisoned)?;
        let output = rules
            .iter()
            .find(|r| {
                let prefix: Vec<&str> = r.prefix.iter().map(String::as_str).collect();
                command.matches(&r.program, &prefix)
            })
            .map(|r| (r.respond)(command))
            .unwrap_or_else(|| CommandOutput::ok(""));
        Ok(output)
    }
}
