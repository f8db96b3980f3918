//! Pokedex Module
//!
//! Catch simulation and the in-memory list of caught Pokemon.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Pokemon;

/// A Pokemon that was successfully caught.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaughtPokemon {
    pub name: String,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    pub caught_at: DateTime<Utc>,
}

impl CaughtPokemon {
    fn from_pokemon(pokemon: &Pokemon) -> Self {
        Self {
            name: pokemon.name.clone(),
            base_experience: pokemon.base_experience.unwrap_or(0),
            height: pokemon.height,
            weight: pokemon.weight,
            caught_at: Utc::now(),
        }
    }
}

// == Catch Chance ==
/// Probability of catching a Pokemon with the given base experience.
///
/// Chance is `100 / base_experience`, capped at 1. Zero experience always catches.
pub fn catch_chance(base_experience: u32) -> f64 {
    if base_experience == 0 {
        return 1.0;
    }
    (100.0 / f64::from(base_experience)).min(1.0)
}

/// Caught Pokemon, in the order they were caught.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: Vec<CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    // == Attempt Catch ==
    /// Records `pokemon` if `roll` (uniform in `[0, 1)`) beats its catch chance.
    ///
    /// Returns true when the Pokemon was caught.
    pub fn attempt_catch(&mut self, pokemon: &Pokemon, roll: f64) -> bool {
        let chance = catch_chance(pokemon.base_experience.unwrap_or(0));
        if roll < chance {
            self.caught.push(CaughtPokemon::from_pokemon(pokemon));
            true
        } else {
            false
        }
    }

    pub fn entries(&self) -> &[CaughtPokemon] {
        &self.caught
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
