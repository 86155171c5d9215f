//! Interactive terminal front-end for the overlap search.

use anyhow::Result;
use chrono::NaiveDate;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::resolver::ZoneResolver;
use crate::slots::{find_overlapping_slots, AcceptanceWindow};

/// Inputs that stay fixed for the lifetime of one session.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub day: NaiveDate,
    pub window: AcceptanceWindow,
}

pub struct Application {
    resolver: ZoneResolver,
    options: SearchOptions,
}

impl Application {
    pub fn new(options: SearchOptions) -> Self {
        Self { resolver: ZoneResolver::bundled(), options }
    }

    pub fn with_resolver(resolver: ZoneResolver, options: SearchOptions) -> Self {
        Self { resolver, options }
    }

    pub fn run(&self) -> Result<()> {
        log::info!("Starting meetfind session for {}", self.options.day);

        let mut rl = DefaultEditor::new()?;

        println!("Welcome to meetfind! Enter one city or timezone per line.");
        println!(
            "Press enter on an empty line to search (local hours {:02}:00-{:02}:00), CTRL-D to quit.",
            self.options.window.start(),
            self.options.window.end()
        );
        let prompt = "> ";

        let mut queries: Vec<String> = Vec::new();
        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        if queries.is_empty() {
                            continue;
                        }
                        if let Err(err) = self.search(&queries) {
                            log::error!("Search failed: {:?}", err);
                            println!("Error: {}", err);
                        }
                        queries.clear();
                    } else {
                        let _ = rl.add_history_entry(line);
                        queries.push(line.to_string());
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    pub fn search(&self, queries: &[String]) -> Result<()> {
        let zones = self.resolver.resolve_zones(queries)?;
        log::info!("Resolved {} zone(s), searching {}", zones.len(), self.options.day);

        let slots = find_overlapping_slots(&zones, self.options.window, self.options.day)?;
        if slots.is_empty() {
            println!("No overlapping times found for {}.", self.options.day);
            return Ok(());
        }

        println!("Suggested meeting times on {}:", self.options.day);
        for slot in &slots {
            println!();
            for time in slot.zone_times() {
                println!("  {}", time);
            }
        }
        Ok(())
    }
}
