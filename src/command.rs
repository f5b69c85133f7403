use anyhow::{bail, Context as _, Result};


pub const HELP: &str = "\
init 1,2,3,4        rebuild the tree
update <pos> <val>  set a position
query <l> <r>       range sum, inclusive
eliminate <pos>     set a position to 0
show                print the tree
help                list commands
quit | exit         leave";

/// `Command` is one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init(String),
    Update { pos: usize, value: i64 },
    Query { left: usize, right: usize },
    Eliminate { pos: usize },
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (keyword, rest) = match line.find(char::is_whitespace) {
            Some(i) => (&line[..i], line[i..].trim()),
            None => (line, ""),
        };

        if keyword.is_empty() {
            bail!("expected a command, but found an empty line");
        }

        let mut args = rest.split_whitespace();
        let command = match keyword.to_ascii_lowercase().as_str() {
            "init" => return Ok(Command::Init(rest.to_string())),
            "update" => Command::Update {
                pos: next_arg(&mut args, "position")?,
                value: next_arg(&mut args, "value")?,
            },
            "query" => Command::Query {
                left: next_arg(&mut args, "left bound")?,
                right: next_arg(&mut args, "right bound")?,
            },
            "eliminate" => Command::Eliminate {
                pos: next_arg(&mut args, "position")?,
            },
            "show" => Command::Show,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            k => bail!("unknown command '{}'. type 'help' for the list", k),
        };

        if let Some(extra) = args.next() {
            bail!("unexpected argument '{}'", extra);
        }

        Ok(command)
    }
}

fn next_arg<'a, T>(args: &mut impl Iterator<Item = &'a str>, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let arg = match args.next() {
        Some(a) => a,
        None => bail!("expected {}, but found none", name),
    };
    arg.parse()
        .with_context(|| format!("failed to parse {} '{}'", name, arg))
}

/// Parses `1, 2,3` style input. Parts that are not integers are skipped.
pub fn parse_array_input(input: &str) -> Vec<i64> {
    input
        .split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}
