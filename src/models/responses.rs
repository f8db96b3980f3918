//! Response Models
//!
//! PokeAPI response shapes. Only the fields the client uses are decoded;
//! everything else in the payload is ignored.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference to another PokeAPI resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of `GET /location-area?offset=..&limit=..`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas, when reported
    #[serde(default)]
    pub count: Option<u32>,
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Returns the names of the areas on this page, in API order.
    pub fn names(&self) -> Vec<&str> {
        self.results.iter().map(|area| area.name.as_str()).collect()
    }
}

/// `GET /location-area/{name}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// `GET /pokemon/{name}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Missing for some forms; treated as zero
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_page_deserialize() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;
        let page: LocationAreaPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.count, Some(1089));
        assert_eq!(page.names(), vec!["canalave-city-area", "eterna-city-area"]);
    }

    #[test]
    fn test_location_area_deserialize() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}, "version_details": []}
            ]
        }"#;
        let area: LocationArea = serde_json::from_str(json).unwrap();

        assert_eq!(area.name, "canalave-city-area");
        assert_eq!(area.pokemon_encounters.len(), 1);
        assert_eq!(area.pokemon_encounters[0].pokemon.name, "tentacool");
    }

    #[test]
    fn test_pokemon_deserialize_null_experience() {
        let json = r#"{"id": 10, "name": "caterpie", "base_experience": null, "height": 3, "weight": 29}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.name, "caterpie");
        assert_eq!(pokemon.base_experience, None);
    }

    #[test]
    fn test_pokemon_missing_required_field() {
        let json = r#"{"id": 10, "name": "caterpie"}"#;
        assert!(serde_json::from_str::<Pokemon>(json).is_err());
    }
}
