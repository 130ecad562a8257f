use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

pub type ProductId = i64;

const ID_FIELD: &str = "id";

/// Represents a product in the registry.
///
/// Only `id` is interpreted. Every other JSON field rides along in
/// `attributes` untouched: key order is kept as received and numbers keep
/// their original text, so the product is echoed back exactly as sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Defaults to `0` when the payload leaves it out.
    pub id: ProductId,
    pub attributes: Map<String, Value>,
}

#[cfg(test)]
impl Product {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            attributes: Map::new(),
        }
    }

    /// Builder-style helper for attaching an opaque attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

// Hand-written rather than `#[serde(flatten)]`: flattening buffers values
// and cannot read `id` back out of an arbitrary-precision number.
impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;

        let mut id = 0;
        let mut attributes = Map::new();
        for (key, value) in fields {
            if key == ID_FIELD {
                id = value.as_i64().ok_or_else(|| {
                    D::Error::custom(format!("invalid product id `{value}`, expected an integer"))
                })?;
            } else {
                attributes.insert(key, value);
            }
        }

        Ok(Product { id, attributes })
    }
}

impl Serialize for Product {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(ID_FIELD, &self.id)?;
        for (key, value) in self.attributes.iter().filter(|(key, _)| key.as_str() != ID_FIELD) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
