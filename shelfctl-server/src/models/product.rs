//! Product name validation
//!
//! Names carry no format constraint beyond length: the column is
//! VARCHAR(255) and duplicates are allowed.

use super::ValidationError;

/// Maximum length for product names (matches the column width)
const MAX_PRODUCT_NAME_LEN: usize = 255;

/// Validated product name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductName(String);

impl ProductName {
    /// Create a new product name.
    ///
    /// # Rules
    /// - Must be non-empty
    /// - Max 255 bytes
    ///
    /// # Example
    /// ```
    /// use shelfctl_server::models::ProductName;
    ///
    /// assert!(ProductName::new("chair").is_ok());
    /// assert!(ProductName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty {
                field: "product name",
            });
        }

        if s.len() > MAX_PRODUCT_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "product name",
                max: MAX_PRODUCT_NAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the product name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(ProductName::new("chair").is_ok());
        assert!(ProductName::new("USB-C connector (2m)").is_ok());
        assert!(ProductName::new("a").is_ok());
    }

    #[test]
    fn rejects_empty() {
        let err = ProductName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn max_length() {
        // 255 chars should work
        let name_255 = "a".repeat(255);
        assert!(ProductName::new(&name_255).is_ok());

        // 256 chars should fail
        let name_256 = "a".repeat(256);
        let err = ProductName::new(&name_256).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 255, .. }));
    }
}
