use serde_json::Value;

/// Normalized species data extracted from one PokeAPI lookup.
#[derive(Debug, Clone)]
pub struct SpeciesRecord {
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub image_url: Option<String>,
}

impl SpeciesRecord {
    /// Extract a record from a raw PokeAPI `pokemon` payload.
    ///
    /// Every field is optional on the wire as far as this crate is
    /// concerned: a missing name, type list, ability list or sprite
    /// defaults instead of failing the lookup.
    #[must_use]
    pub fn from_api_payload(payload: &Value) -> Self {
        let name = payload
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let image_url = payload
            .get("sprites")
            .and_then(|sprites| sprites.get("front_default"))
            .and_then(Value::as_str)
            .map(ToString::to_string);

        Self {
            name,
            types: nested_names(payload, "types", "type"),
            abilities: nested_names(payload, "abilities", "ability"),
            image_url,
        }
    }
}

/// Collect the `field[].inner.name` labels PokeAPI nests its enumerations
/// under, tolerating a missing or oddly shaped level anywhere.
fn nested_names(payload: &Value, field: &str, inner: &str) -> Vec<String> {
    payload
        .get(field)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get(inner)?.get("name")?.as_str())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}
