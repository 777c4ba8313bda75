// CLI module
// Interactive shell for the assistant

mod repl;

pub use repl::Repl;
