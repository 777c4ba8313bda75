// Interactive REPL shell
//
// Thin presentation layer: reads utterances, runs one turn each, renders the
// envelope, and appends the turn to the conversation log. All routing and
// provider behavior lives in the Agent.

use anyhow::Result;
use crossterm::{
    cursor,
    style::Stylize,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use std::io::{self, IsTerminal, Write};

use crate::agent::Agent;
use crate::logging::{ConversationLogger, TurnRecord};

pub struct Repl {
    agent: Agent,
    logger: ConversationLogger,
    is_interactive: bool,
}

impl Repl {
    pub fn new(agent: Agent, logger: ConversationLogger) -> Self {
        // Interactive niceties only when stdout is a TTY
        let is_interactive = io::stdout().is_terminal();

        Self {
            agent,
            logger,
            is_interactive,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        if self.is_interactive {
            self.print_greeting();
        } else {
            eprintln!("# tern - non-interactive mode");
        }

        loop {
            render_prompt(self.is_interactive, &mut io::stdout(), &mut io::stderr())?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                // EOF
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            if input == "/quit" || input == "/exit" {
                if self.is_interactive {
                    println!("Goodbye!");
                }
                break;
            }

            self.process_turn(input).await;
        }

        Ok(())
    }

    async fn process_turn(&mut self, utterance: &str) {
        if self.is_interactive {
            print!("{}", "Thinking...".dark_grey());
            let _ = io::stdout().flush();
        }

        let envelope = self.agent.run_turn(utterance).await;

        if self.is_interactive {
            let _ = io::stdout()
                .execute(cursor::MoveToColumn(0))
                .and_then(|out| out.execute(Clear(ClearType::CurrentLine)));
        }

        println!("Answer: {}", envelope.answer);
        if self.is_interactive {
            println!("{}", format!("Source: {}", envelope.source).dark_grey());
        } else {
            println!("Source: {}", envelope.source);
        }

        // Log failures never break a turn
        let record = TurnRecord::new(utterance, &envelope);
        if let Err(e) = self.logger.log(&record) {
            tracing::warn!(error = %e, "failed to log conversation turn");
        }
    }

    fn print_greeting(&self) {
        println!("tern v{} - conversational assistant", env!("CARGO_PKG_VERSION"));
        println!("Ask me anything. I can search the web, get weather information, or chat.");
        println!();
        println!("How to use:");
        println!("  weather in <city>      current weather (e.g. \"weather in Karachi\")");
        println!("  search: <query>        forced web search");
        println!("  restaurants in Lahore  keyword queries route to search automatically");
        println!("  anything else          answered by the language model");
        println!();
        println!("Type /quit to exit.");
    }
}

/// Write the input prompt for the current mode. Non-TTY prompts go to stderr
/// so piped stdout carries only answers.
fn render_prompt(
    interactive: bool,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> io::Result<()> {
    if interactive {
        writeln!(stdout)?;
        write!(stdout, "> ")?;
        stdout.flush()
    } else {
        write!(stderr, "Query: ")?;
        stderr.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_prompt_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        render_prompt(true, &mut out, &mut err).unwrap();
        assert_eq!(out, b"\n> ");
        assert!(err.is_empty());
    }

    #[test]
    fn test_non_tty_prompt_goes_to_stderr() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        render_prompt(false, &mut out, &mut err).unwrap();
        assert!(out.is_empty(), "piped stdout must carry only answers");
        assert_eq!(err, b"Query: ");
    }
}
