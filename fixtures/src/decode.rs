//! Field accessors used by the hand-written record decoders
//!
//! Every accessor reports the dotted path of the offending field, so a
//! decode failure deep inside `stats[2].stat.name` says exactly that.

use serde_json::{Map, Value};

use crate::DecodeError;

/// A JSON object being decoded, together with its path from the document root
pub(crate) struct Object<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> Object<'a> {
    /// Treat the document root as an object
    pub fn root(value: &'a Value) -> Result<Self, DecodeError> {
        Self::at(value, String::new())
    }

    fn at(value: &'a Value, path: String) -> Result<Self, DecodeError> {
        match value.as_object() {
            Some(map) => Ok(Self { map, path }),
            None => Err(invalid(display_path(&path), "object")),
        }
    }

    fn field_path(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path, name)
        }
    }

    /// Present and non-null value
    fn get(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|v| !v.is_null())
    }

    fn required(&self, name: &str) -> Result<&'a Value, DecodeError> {
        self.get(name)
            .ok_or_else(|| DecodeError::MissingField(self.field_path(name)))
    }

    pub fn str(&self, name: &str) -> Result<String, DecodeError> {
        let value = self.required(name)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| invalid(self.field_path(name), "string"))
    }

    pub fn opt_str(&self, name: &str) -> Result<Option<String>, DecodeError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| invalid(self.field_path(name), "string")),
        }
    }

    /// The key must be present, but its value may be `null`
    pub fn nullable_str(&self, name: &str) -> Result<Option<String>, DecodeError> {
        if !self.map.contains_key(name) {
            return Err(DecodeError::MissingField(self.field_path(name)));
        }
        self.opt_str(name)
    }

    pub fn u32(&self, name: &str) -> Result<u32, DecodeError> {
        let value = self.required(name)?;
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| invalid(self.field_path(name), "unsigned 32-bit integer"))
    }

    pub fn opt_u32(&self, name: &str) -> Result<Option<u32>, DecodeError> {
        match self.get(name) {
            None => Ok(None),
            Some(_) => self.u32(name).map(Some),
        }
    }

    pub fn u8(&self, name: &str) -> Result<u8, DecodeError> {
        let value = self.required(name)?;
        value
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| invalid(self.field_path(name), "integer 0-255"))
    }

    pub fn opt_u8(&self, name: &str) -> Result<Option<u8>, DecodeError> {
        match self.get(name) {
            None => Ok(None),
            Some(_) => self.u8(name).map(Some),
        }
    }

    pub fn opt_bool(&self, name: &str) -> Result<Option<bool>, DecodeError> {
        match self.get(name) {
            None => Ok(None),
            Some(_) => self.bool(name).map(Some),
        }
    }

    pub fn bool(&self, name: &str) -> Result<bool, DecodeError> {
        let value = self.required(name)?;
        value
            .as_bool()
            .ok_or_else(|| invalid(self.field_path(name), "boolean"))
    }

    pub fn object(&self, name: &str) -> Result<Object<'a>, DecodeError> {
        let value = self.required(name)?;
        Object::at(value, self.field_path(name))
    }

    pub fn opt_object(&self, name: &str) -> Result<Option<Object<'a>>, DecodeError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => Object::at(value, self.field_path(name)).map(Some),
        }
    }

    /// Array of objects; each element is addressed as `name[i]`
    pub fn array(&self, name: &str) -> Result<Vec<Object<'a>>, DecodeError> {
        let value = self.required(name)?;
        let path = self.field_path(name);
        let items = value
            .as_array()
            .ok_or_else(|| invalid(path.clone(), "array"))?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| Object::at(item, format!("{}[{}]", path, i)))
            .collect()
    }

    pub fn opt_array(&self, name: &str) -> Result<Vec<Object<'a>>, DecodeError> {
        match self.get(name) {
            None => Ok(Vec::new()),
            Some(_) => self.array(name),
        }
    }
}

fn invalid(field: String, expected: &'static str) -> DecodeError {
    DecodeError::InvalidField { field, expected }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_reports_nested_path() {
        let doc = json!({ "stat": { "url": "x" } });
        let root = Object::root(&doc).unwrap();
        let err = root.object("stat").unwrap().str("name").unwrap_err();

        assert!(matches!(err, DecodeError::MissingField(ref f) if f == "stat.name"));
    }

    #[test]
    fn test_array_elements_are_indexed() {
        let doc = json!({ "types": [{ "slot": 1 }, 7] });
        let root = Object::root(&doc).unwrap();
        let err = root.array("types").err().unwrap();

        assert!(matches!(
            err,
            DecodeError::InvalidField { ref field, expected: "object" } if field == "types[1]"
        ));
    }

    #[test]
    fn test_null_is_treated_as_absent() {
        let doc = json!({ "height": null, "front_default": null });
        let root = Object::root(&doc).unwrap();

        assert_eq!(root.opt_u32("height").unwrap(), None);
        assert_eq!(root.nullable_str("front_default").unwrap(), None);
        assert!(root.nullable_str("back_default").is_err());
    }

    #[test]
    fn test_u8_rejects_out_of_range() {
        let doc = json!({ "base_stat": 300 });
        let root = Object::root(&doc).unwrap();

        assert!(root.u8("base_stat").is_err());
    }

    #[test]
    fn test_root_must_be_object() {
        let doc = json!([1, 2, 3]);
        let err = Object::root(&doc).err().unwrap();

        assert!(matches!(err, DecodeError::InvalidField { ref field, .. } if field == "<root>"));
    }
}
