use serde::Serialize;

use crate::errors::Error;

/// HDT: true heading, `$--HDT,x.x,T`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hdt {
    pub talker: String,
    /// Heading in degrees true.
    pub heading: Option<f64>,
}

impl Default for Hdt {
    fn default() -> Self {
        Self {
            talker: "HE".to_string(),
            heading: None,
        }
    }
}

impl Hdt {
    pub fn from_fields(talker: &str, fields: &[&str]) -> Result<Self, Error> {
        if fields.len() != 2 {
            return Err(Error::Format(format!(
                "true heading sentence has {} fields, expected 2",
                fields.len()
            )));
        }
        if !fields[1].is_empty() && fields[1] != "T" {
            return Err(Error::Format(format!(
                "heading reference '{}' is not true",
                fields[1]
            )));
        }
        let heading = if fields[0].is_empty() {
            None
        } else {
            Some(fields[0].parse().map_err(|_| {
                Error::Format(format!("heading '{}' is not a number", fields[0]))
            })?)
        };
        Ok(Self {
            talker: talker.to_string(),
            heading,
        })
    }

    pub fn fields(&self) -> Vec<String> {
        vec![
            self.heading.map(|h| format!("{:.1}", h)).unwrap_or_default(),
            "T".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields() {
        let h = Hdt::from_fields("HE", &["45.8", "T"]).unwrap();
        assert_eq!(h.heading, Some(45.8));
        assert_eq!(h.fields(), vec!["45.8", "T"]);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Hdt::from_fields("HE", &["45.8", "M"]).is_err());
        assert!(Hdt::from_fields("HE", &["45.8"]).is_err());
        assert!(Hdt::from_fields("HE", &["north", "T"]).is_err());
    }
}
