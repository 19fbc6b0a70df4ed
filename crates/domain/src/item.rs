//! Item — the single resource exposed by the API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::id::ItemId;

/// A named magnitude identified by an integer.
///
/// Items are built from request input, echoed back, and dropped. They are
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub value: f64,
}

impl Item {
    /// Create a builder for constructing an [`Item`].
    #[must_use]
    pub fn builder() -> ItemBuilder {
        ItemBuilder::default()
    }
}

/// Step-by-step builder for [`Item`].
#[derive(Debug, Default)]
pub struct ItemBuilder {
    id: Option<ItemId>,
    name: Option<String>,
    value: Option<f64>,
}

impl ItemBuilder {
    #[must_use]
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(ItemId::new(id));
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Consume the builder and return an [`Item`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first unset field,
    /// checked in `id`, `name`, `value` order.
    pub fn build(self) -> Result<Item, ValidationError> {
        Ok(Item {
            id: self.id.ok_or(ValidationError::MissingField { field: "id" })?,
            name: self
                .name
                .ok_or(ValidationError::MissingField { field: "name" })?,
            value: self
                .value
                .ok_or(ValidationError::MissingField { field: "value" })?,
        })
    }
}

/// Look up a field, treating an explicit `null` the same as an absent key.
fn required<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(value) => Ok(value),
    }
}

impl TryFrom<Value> for Item {
    type Error = ValidationError;

    /// Shape-check a JSON document field by field.
    ///
    /// Unknown keys are ignored. Integers are accepted for `value` and
    /// widened to `f64`; `id` must be a JSON integer that fits in `i64`.
    fn try_from(document: Value) -> Result<Self, Self::Error> {
        let Value::Object(object) = document else {
            return Err(ValidationError::NotAnObject);
        };

        let id = required(&object, "id")?
            .as_i64()
            .ok_or(ValidationError::InvalidType {
                field: "id",
                expected: "integer",
            })?;
        let name = required(&object, "name")?
            .as_str()
            .ok_or(ValidationError::InvalidType {
                field: "name",
                expected: "string",
            })?;
        let value = required(&object, "value")?
            .as_f64()
            .ok_or(ValidationError::InvalidType {
                field: "value",
                expected: "number",
            })?;

        Item::builder().id(id).name(name).value(value).build()
    }
}
