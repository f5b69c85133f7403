use anyhow::{bail, ensure, Context as _, Result};

use crate::{
    command::{parse_array_input, Command, HELP},
    config::Config,
    error::InvalidArgument,
    seg_tree::SegTree,
};


/// `Outcome` is what a successful action reports back to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: String,
    /// The tree has to be redrawn.
    pub tree_changed: bool,
}

impl Outcome {
    fn changed(status: String) -> Self {
        Self {
            status,
            tree_changed: true,
        }
    }

    fn unchanged(status: String) -> Self {
        Self {
            status,
            tree_changed: false,
        }
    }
}

/// `Session` holds the tree currently shown and validates user input before it
/// reaches the tree, so a front end only has to print what comes back.
#[derive(Debug, Clone)]
pub struct Session {
    tree: SegTree<i64>,
    value_range: (i64, i64),
    quit: bool,
}

impl Session {
    pub fn new(values: &[i64], value_range: (i64, i64)) -> Result<Self> {
        ensure!(!values.is_empty(), "enter a list of numbers");
        check_values(values, value_range)?;
        let tree = SegTree::new(values).context("failed to build the tree")?;
        Ok(Self {
            tree,
            value_range,
            quit: false,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let values = parse_array_input(&config.initial);
        ensure!(
            !values.is_empty(),
            "could not parse the initial array '{}'",
            config.initial
        );
        Self::new(&values, (config.value_min, config.value_max))
    }

    pub fn tree(&self) -> &SegTree<i64> {
        &self.tree
    }

    pub fn max_index(&self) -> usize {
        self.tree.logical_size() - 1
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    pub fn array_line(&self) -> String {
        let values = self
            .tree
            .values()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>();
        format!("Array: [{}]", values.join(", "))
    }

    pub fn init(&mut self, input: &str) -> Result<Outcome> {
        let input = input.trim();
        if input.is_empty() {
            bail!("enter a list of numbers");
        }

        let values = parse_array_input(input);
        if values.is_empty() {
            bail!("could not parse the list, use the format: 1,2,3,4,5");
        }

        check_values(&values, self.value_range)?;
        self.tree = SegTree::new(&values).context("failed to build the tree")?;
        tracing::info!(len = values.len(), "tree rebuilt");

        Ok(Outcome::changed(format!(
            "tree initialised with {} elements",
            values.len()
        )))
    }

    pub fn update(&mut self, pos: usize, value: i64) -> Result<Outcome> {
        check_values(&[value], self.value_range)?;
        ensure!(
            pos <= self.max_index(),
            "position {} is outside [0, {}]",
            pos,
            self.max_index()
        );

        self.tree
            .update(pos, value)
            .with_context(|| format!("failed to set position {} to {}", pos, value))?;
        tracing::debug!(pos, value, "position updated");

        Ok(Outcome::changed(format!(
            "updated: position {} = {}",
            pos, value
        )))
    }

    /// An invalid range is reported in the status text, not as an error.
    pub fn query(&self, left: usize, right: usize) -> Outcome {
        match self.tree.query(left, right) {
            Ok(sum) => {
                tracing::debug!(left, right, sum, "range queried");
                Outcome::unchanged(format!("sum [{}, {}] = {}", left, right, sum))
            }
            Err(InvalidArgument::Overflow) => {
                Outcome::unchanged(format!("sum [{}, {}] overflows", left, right))
            }
            Err(e) => {
                tracing::debug!(error = %e, "range rejected");
                Outcome::unchanged("invalid range".to_string())
            }
        }
    }

    pub fn eliminate(&mut self, pos: usize) -> Result<Outcome> {
        ensure!(
            pos <= self.max_index(),
            "position {} is outside [0, {}]",
            pos,
            self.max_index()
        );

        self.tree.eliminate(pos)?;
        tracing::debug!(pos, "position eliminated");

        Ok(Outcome::changed(format!("eliminated: position {}", pos)))
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Init(input) => self.init(&input),
            Command::Update { pos, value } => self.update(pos, value),
            Command::Query { left, right } => Ok(self.query(left, right)),
            Command::Eliminate { pos } => self.eliminate(pos),
            Command::Show => Ok(Outcome::changed(String::new())),
            Command::Help => Ok(Outcome::unchanged(HELP.to_string())),
            Command::Quit => {
                self.quit = true;
                Ok(Outcome::unchanged("bye".to_string()))
            }
        }
    }
}

fn check_values(values: &[i64], (min, max): (i64, i64)) -> Result<()> {
    if let Some(v) = values.iter().find(|&&v| v < min || max < v) {
        bail!("value {} is outside [{}, {}]", v, min, max);
    }
    Ok(())
}
