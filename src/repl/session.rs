//! REPL Session
//!
//! Per-user state (map paging, caught Pokemon) and command execution.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::CommandError;
use crate::pokedex::Pokedex;
use crate::repl::commands::{Command, COMMANDS};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Interactive session state.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    client: PokeApiClient,
    pokedex: Pokedex,
    page_size: u32,
    /// Offset of the page shown last, None before the first `map`
    current_offset: Option<u32>,
    rng: R,
}

impl Session<StdRng> {
    /// Creates a session with an entropy-seeded catch roller.
    pub fn new(client: PokeApiClient, page_size: u32) -> Self {
        Self::with_rng(client, page_size, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(client: PokeApiClient, page_size: u32, rng: R) -> Self {
        Self {
            client,
            pokedex: Pokedex::new(),
            page_size,
            current_offset: None,
            rng,
        }
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn current_offset(&self) -> Option<u32> {
        self.current_offset
    }

    // == Execute ==
    /// Runs `command`, writing user-facing output to `out`.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<Outcome, CommandError> {
        debug!(?command, "Executing command");
        match command {
            Command::Help => {
                write_help(out)?;
            }
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Outcome::Exit);
            }
            Command::Map => self.map_next(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Pokedex => self.list_caught(out)?,
        }
        Ok(Outcome::Continue)
    }

    async fn map_next<W: Write>(&mut self, out: &mut W) -> Result<(), CommandError> {
        let offset = self
            .current_offset
            .map_or(0, |current| current + self.page_size);
        let page = self.client.location_areas(offset, self.page_size).await?;

        if page.results.is_empty() {
            writeln!(out, "No more locations to display.")?;
            return Ok(());
        }
        for name in page.names() {
            writeln!(out, "{name}")?;
        }
        self.current_offset = Some(offset);
        Ok(())
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<(), CommandError> {
        let offset = match self.current_offset {
            Some(current) if current >= self.page_size => current - self.page_size,
            _ => return Err(CommandError::NoPreviousPage),
        };
        let page = self.client.location_areas(offset, self.page_size).await?;

        for name in page.names() {
            writeln!(out, "{name}")?;
        }
        self.current_offset = Some(offset);
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<(), CommandError> {
        writeln!(out, "Exploring area {area}...")?;
        let details = self.client.location_area(area).await?;

        writeln!(out, "Name: {}", details.name)?;
        writeln!(out, "Pokemon Encounters:")?;
        for encounter in &details.pokemon_encounters {
            writeln!(out, " - {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<(), CommandError> {
        writeln!(out, "Throwing a Pokeball at {name}...")?;
        let pokemon = self.client.pokemon(name).await?;

        let roll: f64 = self.rng.gen();
        if self.pokedex.attempt_catch(&pokemon, roll) {
            writeln!(out, "Congratulations! You caught a {}!", pokemon.name)?;
        } else {
            writeln!(out, "Oh no! The {} got away!", pokemon.name)?;
        }
        Ok(())
    }

    fn list_caught<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        if self.pokedex.is_empty() {
            writeln!(out, "You haven't caught any pokemon yet!")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for (i, pokemon) in self.pokedex.entries().iter().enumerate() {
            writeln!(
                out,
                "{}. {} (Base Experience: {})",
                i + 1,
                pokemon.name,
                pokemon.base_experience
            )?;
        }
        Ok(())
    }
}

/// Prints the command list.
pub fn write_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    for (usage, description) in COMMANDS {
        writeln!(out, "  {usage}: {description}")?;
    }
    Ok(())
}
