use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same as a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn null_and_missing_both_default() {
        let sample: Sample = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(sample.name, "");
        assert!(sample.tags.is_empty());

        let sample: Sample = serde_json::from_str(r#"{"name":"x","tags":["a"]}"#).unwrap();
        assert_eq!(sample.name, "x");
        assert_eq!(sample.tags, vec!["a"]);
    }
}
