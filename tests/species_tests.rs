use pokedex::ai::build_prompt;
use pokedex::core::models::SpeciesRecord;
use serde_json::{Value, json};

/// A trimmed-down pikachu payload in the exact shape PokeAPI returns,
/// including fields the extractor must ignore.
fn pikachu_payload() -> Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "abilities": [
            { "ability": { "name": "static", "url": "https://pokeapi.co/api/v2/ability/9/" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/" }, "is_hidden": true, "slot": 3 }
        ],
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ],
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
            "back_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/back/25.png"
        }
    })
}

fn bulbasaur_payload() -> Value {
    json!({
        "id": 1,
        "name": "bulbasaur",
        "abilities": [
            { "ability": { "name": "overgrow" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "chlorophyll" }, "is_hidden": true, "slot": 3 }
        ],
        "types": [
            { "slot": 1, "type": { "name": "grass" } },
            { "slot": 2, "type": { "name": "poison" } }
        ],
        "sprites": { "front_default": null }
    })
}

#[test]
fn test_extracts_pikachu_fields() {
    let record = SpeciesRecord::from_api_payload(&pikachu_payload());

    assert_eq!(record.name, "pikachu");
    assert_eq!(record.types, vec!["electric"]);
    assert_eq!(record.abilities, vec!["static", "lightning-rod"]);
    assert_eq!(
        record.image_url.as_deref(),
        Some("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png")
    );
}

#[test]
fn test_extracts_multiple_types_in_order() {
    let record = SpeciesRecord::from_api_payload(&bulbasaur_payload());

    assert_eq!(record.types, vec!["grass", "poison"]);
    assert_eq!(record.abilities, vec!["overgrow", "chlorophyll"]);
}

#[test]
fn test_null_sprite_means_no_image() {
    // PokeAPI returns front_default: null for some forms; that must not be
    // mistaken for a URL
    let record = SpeciesRecord::from_api_payload(&bulbasaur_payload());
    assert!(record.image_url.is_none());
}

#[test]
fn test_empty_payload_defaults_every_field() {
    let record = SpeciesRecord::from_api_payload(&json!({}));

    assert_eq!(record.name, "");
    assert!(record.types.is_empty());
    assert!(record.abilities.is_empty());
    assert!(record.image_url.is_none());
}

#[test]
fn test_oddly_shaped_entries_are_skipped() {
    // Entries missing the nested name, or of the wrong type, drop out
    // without failing the whole list
    let record = SpeciesRecord::from_api_payload(&json!({
        "name": "glitch",
        "types": [
            { "slot": 1, "type": { "name": "normal" } },
            { "slot": 2 },
            "bare string",
            { "slot": 3, "type": { "name": 7 } }
        ],
        "abilities": "not a list",
        "sprites": "also wrong"
    }));

    assert_eq!(record.types, vec!["normal"]);
    assert!(record.abilities.is_empty());
    assert!(record.image_url.is_none());
}

#[test]
fn test_every_fixture_produces_a_usable_prompt() {
    // Whatever the extractor produces must feed straight into the prompt
    // builder: non-empty and carrying the species name
    for payload in [pikachu_payload(), bulbasaur_payload()] {
        let record = SpeciesRecord::from_api_payload(&payload);
        let prompt = build_prompt(&record);

        assert!(!prompt.is_empty());
        assert!(
            prompt.contains(&record.name),
            "prompt should mention {}",
            record.name
        );
    }
}
