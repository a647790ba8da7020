use serde::Serialize;

use crate::errors::Error;

/// MTW: mean water temperature, `$--MTW,x.x,C`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mtw {
    pub talker: String,
    /// Water temperature in degrees Celsius.
    pub temperature: Option<f64>,
}

impl Default for Mtw {
    fn default() -> Self {
        Self {
            talker: "II".to_string(),
            temperature: None,
        }
    }
}

impl Mtw {
    pub fn from_fields(talker: &str, fields: &[&str]) -> Result<Self, Error> {
        if fields.len() != 2 {
            return Err(Error::Format(format!(
                "water temperature sentence has {} fields, expected 2",
                fields.len()
            )));
        }
        if !fields[1].is_empty() && fields[1] != "C" {
            return Err(Error::Format(format!(
                "temperature unit '{}' is not Celsius",
                fields[1]
            )));
        }
        let temperature = if fields[0].is_empty() {
            None
        } else {
            Some(fields[0].parse().map_err(|_| {
                Error::Format(format!("temperature '{}' is not a number", fields[0]))
            })?)
        };
        Ok(Self {
            talker: talker.to_string(),
            temperature,
        })
    }

    pub fn fields(&self) -> Vec<String> {
        vec![
            self.temperature.map(|t| format!("{:.1}", t)).unwrap_or_default(),
            "C".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields() {
        let m = Mtw::from_fields("II", &["22.5", "C"]).unwrap();
        assert_eq!(m.temperature, Some(22.5));
        assert_eq!(m.fields(), vec!["22.5", "C"]);
    }

    #[test]
    fn test_empty_temperature() {
        let m = Mtw::from_fields("II", &["", "C"]).unwrap();
        assert_eq!(m.temperature, None);
        assert_eq!(m.fields(), vec!["", "C"]);
    }

    #[test]
    fn test_rejects_bad_unit_and_arity() {
        assert!(Mtw::from_fields("II", &["22.5", "F"]).is_err());
        assert!(Mtw::from_fields("II", &["22.5"]).is_err());
        assert!(Mtw::from_fields("II", &["warm", "C"]).is_err());
    }
}
