//! Filter controller: owns the loaded list, derives views, re-renders.

use std::io::{self, BufRead, Write};

use gigboard_core::{ApplyAction, Job, JobFilters, apply_filters};

use crate::render;

const HELP: &str = "\
commands:
  search <text>     text match on title, company, or location
  pay <dollars>     minimum hourly pay (0 clears)
  distance <miles>  maximum distance (0 clears)
  clear             reset all filters
  list              re-render the current view
  apply <n>         run the apply action of the n-th visible card
  quit              leave the board";

enum LoopControl {
    Continue,
    Quit,
}

/// One board session: an immutable job list plus the live filters.
///
/// The list is written once at load; every change to the filters derives
/// a fresh view from it.
pub struct Board {
    jobs: Vec<Job>,
    filters: JobFilters,
}

impl Board {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            filters: JobFilters::default(),
        }
    }

    /// The visible subset under the live filters.
    pub fn visible(&self) -> Vec<&Job> {
        apply_filters(&self.jobs, &self.filters)
    }

    pub fn set_search(&mut self, search: &str) {
        self.filters.search = search.to_string();
    }

    pub fn set_min_pay(&mut self, min_pay: f64) {
        self.filters.min_pay = min_pay;
    }

    pub fn set_max_distance(&mut self, max_distance: f64) {
        self.filters.max_distance = max_distance;
    }

    /// Read filter commands until EOF or `quit`, re-rendering the view
    /// after every change.
    pub fn run_interactive<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        render::render_jobs(out, &self.visible())?;

        for line in input.lines() {
            let line = line?;
            let command = line.trim();
            if command.is_empty() {
                continue;
            }
            match self.handle_command(command, out)? {
                LoopControl::Continue => {}
                LoopControl::Quit => break,
            }
        }
        Ok(())
    }

    fn handle_command<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<LoopControl> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => return Ok(LoopControl::Quit),
            "help" => writeln!(out, "{HELP}")?,
            "list" => render::render_jobs(out, &self.visible())?,
            "clear" => {
                self.filters = JobFilters::default();
                render::render_jobs(out, &self.visible())?;
            }
            "search" => {
                self.set_search(rest);
                render::render_jobs(out, &self.visible())?;
            }
            // Unparseable numbers degrade to 0, i.e. no restriction.
            "pay" => {
                self.set_min_pay(rest.parse().unwrap_or(0.0));
                render::render_jobs(out, &self.visible())?;
            }
            "distance" => {
                self.set_max_distance(rest.parse().unwrap_or(0.0));
                render::render_jobs(out, &self.visible())?;
            }
            "apply" => self.run_apply(rest, out)?,
            _ => writeln!(out, "unknown command: {command} (try `help`)")?,
        }

        Ok(LoopControl::Continue)
    }

    /// Resolve and report the apply action of the n-th visible card.
    fn run_apply<W: Write>(&self, argument: &str, out: &mut W) -> io::Result<()> {
        let Ok(position) = argument.parse::<usize>() else {
            return writeln!(out, "usage: apply <number>");
        };

        let visible = self.visible();
        let Some(job) = position.checked_sub(1).and_then(|idx| visible.get(idx)) else {
            return writeln!(out, "no visible posting [{position}]");
        };

        match ApplyAction::resolve(job) {
            ApplyAction::OpenUrl(url) => writeln!(out, "Opening {url}"),
            ApplyAction::WhatsApp(link) => writeln!(out, "Opening {link}"),
            ApplyAction::Notice(notice) => writeln!(out, "{notice}"),
        }
    }
}
