//! Commands every shell starts with.

use shelltrix_types::error::Result;

use crate::command::{Command, CommandOutput};

/// The builtin command set, seeded into every [`CommandRegistry::new`].
///
/// [`CommandRegistry::new`]: crate::CommandRegistry::new
pub fn builtin_commands() -> Vec<Box<dyn Command>> {
    vec![Box::new(ExitCmd)]
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn description(&self) -> &str {
        "Exit this program"
    }
    fn aliases(&self) -> Vec<&str> {
        vec!["quit"]
    }
    fn execute(&self, _args: &[&str]) -> Result<CommandOutput> {
        Ok(CommandOutput::Exit(0))
    }
    fn extra_help(&self, _args: &[&str]) -> Option<String> {
        Some("Leave the shell with exit status 0. Ctrl-D does the same.".to_string())
    }
}
