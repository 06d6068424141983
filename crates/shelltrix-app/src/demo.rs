//! Demo commands.

use shelltrix_core::{CommandOutput, CommandRegistry, FnCommand, ShellError, Suggestion};

const HONK_HELP: &str = "\
To show off its skills, this goose will honk and honk back on demand.
Try 'honk foo' or 'honk bar'; the arguments complete after a space.";

/// Largest N `count` accepts.
const COUNT_MAX: u32 = 1000;

/// Register the demo commands. Returns one message per rejected alias.
pub fn register_demo_commands(reg: &mut CommandRegistry) -> Vec<String> {
    let mut notices = Vec::new();

    let honk = FnCommand::new("honk", "The sound a goose makes", |args| {
        Ok(CommandOutput::text(format!("HONK>>> {args:?}")))
    })
    .with_aliases(["blart"])
    .with_suggester(|_partial| {
        vec![
            Suggestion::new("foo", "A foo and his money are soon parted"),
            Suggestion::new("bar", "qux baz"),
        ]
    })
    .with_extra_help(|_args| HONK_HELP.to_string());
    notices.extend(reg.register(Box::new(honk)).iter().map(ToString::to_string));

    let longer = FnCommand::new("longercmd", "This is to test help formatting", |_args| {
        Ok(CommandOutput::text("That was something else."))
    });
    notices.extend(reg.register(Box::new(longer)).iter().map(ToString::to_string));

    let geese = FnCommand::new("geese", "List the flock", |_args| {
        Ok(CommandOutput::Table {
            headers: vec!["NAME".into(), "MOOD".into()],
            rows: vec![
                vec!["Gertrude".into(), "honking".into()],
                vec!["Bob".into(), "suspicious".into()],
            ],
        })
    })
    .with_aliases(["flock"]);
    notices.extend(reg.register(Box::new(geese)).iter().map(ToString::to_string));

    let count = FnCommand::new("count", "Count to N", |args| {
        let n: u32 = match args.get(1) {
            Some(arg) => arg
                .parse()
                .map_err(|_| ShellError::command(format!("not a number: '{arg}'")))?,
            None => return Err(ShellError::command("usage: count <N>")),
        };
        if n > COUNT_MAX {
            return Err(ShellError::command(format!("N must be at most {COUNT_MAX}")));
        }
        let out: Vec<String> = (1..=n).map(|i| i.to_string()).collect();
        Ok(CommandOutput::Text(out.join(" ")))
    })
    // Deliberately collides with honk's alias to show the diagnostic.
    .with_aliases(["blart", "c"]);
    notices.extend(reg.register(Box::new(count)).iter().map(ToString::to_string));

    notices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> (CommandRegistry, Vec<String>) {
        let mut reg = CommandRegistry::new();
        let notices = register_demo_commands(&mut reg);
        (reg, notices)
    }

    #[test]
    fn blart_collision_is_reported_once() {
        let (reg, notices) = registry();
        assert_eq!(
            notices,
            vec!["alias 'blart' for 'count' ignored: already an alias for 'honk'"]
        );
        assert_eq!(reg.lookup_alias("blart").unwrap().name(), "honk");
        assert_eq!(reg.lookup_alias("c").unwrap().name(), "count");
    }

    #[test]
    fn honk_through_alias() {
        let (reg, _) = registry();
        assert_eq!(
            reg.execute("blart arg1").unwrap(),
            CommandOutput::text(r#"HONK>>> ["blart", "arg1"]"#)
        );
    }

    #[test]
    fn count_validates_arguments() {
        let (reg, _) = registry();
        assert_eq!(reg.execute("c 3").unwrap(), CommandOutput::text("1 2 3"));
        assert!(reg.execute("count x").is_err());
        assert!(reg.execute("count").is_err());
    }

    #[test]
    fn count_rejects_large_n() {
        let (reg, _) = registry();
        let err = reg.execute("count 4000000000").unwrap_err();
        assert_eq!(err.to_string(), "command error: N must be at most 1000");
        assert!(reg.execute("count 1000").is_ok());
    }

    #[test]
    fn help_for_honk_alias() {
        let (reg, _) = registry();
        match reg.execute("help blart").unwrap() {
            CommandOutput::Text(text) => {
                assert!(text.starts_with("'blart' is an alias for 'honk'.\nTo show off"));
            },
            other => panic!("expected text, got {other:?}"),
        }
    }
}
