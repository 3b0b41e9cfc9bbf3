use crate::errors::{Error, Result};

/// Element attributes in document order.
///
/// Elements carry only a handful of attributes, so lookups are a linear scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttrMap {
    attrs: Vec<(String, String)>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-update the given key/value.
    /// If the key is already present, update in place; otherwise append.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value of a required attribute
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| Error::MissingAttribute(key.to_owned()))
    }

    /// Parse an optional numeric attribute, falling back to `default`
    pub fn number_or(&self, key: &str, default: f64) -> Result<f64> {
        match self.get(key) {
            Some(value) => strp_attr(key, value),
            None => Ok(default),
        }
    }

    /// Parse a required numeric attribute
    pub fn number(&self, key: &str) -> Result<f64> {
        strp_attr(key, self.require(key)?)
    }
}

/// Parse an attribute value as a finite number
fn strp_attr(key: &str, value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::InvalidValue(key.to_owned(), value.to_owned())),
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl From<Vec<(String, String)>> for AttrMap {
    fn from(value: Vec<(String, String)>) -> Self {
        value.into_iter().collect()
    }
}
