//! Scripted helper for exercising the client without spawning processes.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::gateway::{CommandOutput, CommandRunner};

#[derive(Clone, Default)]
pub struct ScriptedRunner {
    rules: Arc<Vec<(String, CommandOutput)>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    // Answers any invocation whose joined arguments contain `pattern`.
    // Earlier rules win.
    pub fn respond(self, pattern: &str, stdout: &str) -> Self {
        self.rule(
            pattern,
            CommandOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                code: 0,
            },
        )
    }

    pub fn fail(self, pattern: &str, stderr: &str) -> Self {
        self.rule(
            pattern,
            CommandOutput {
                stdout: String::new(),
                stderr: stderr.to_string(),
                code: 1,
            },
        )
    }

    fn rule(self, pattern: &str, output: CommandOutput) -> Self {
        let mut rules = (*self.rules).clone();
        rules.push((pattern.to_string(), output));
        Self {
            rules: Arc::new(rules),
            calls: self.calls,
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, _program: &str, args: &[String]) -> std::io::Result<CommandOutput> {
        self.calls.lock().unwrap().push(args.to_vec());
        let joined = args.join(" ");

        let output = self
            .rules
            .iter()
            .find(|(pattern, _)| joined.contains(pattern.as_str()))
            .map(|(_, output)| output.clone())
            .unwrap_or_else(|| CommandOutput {
                stdout: String::new(),
                stderr: format!("no scripted response for: {}", joined),
                code: 1,
            });
        Ok(output)
    }
}
