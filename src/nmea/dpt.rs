use serde::Serialize;

use crate::errors::Error;

/// DPT: water depth, `$--DPT,x.x,x.x,x.x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dpt {
    pub talker: String,
    /// Depth below the transducer in meters.
    pub depth: Option<f64>,
    /// Transducer offset from the keel (negative) or waterline (positive).
    pub offset: Option<f64>,
    /// Maximum range scale of the sounder in meters.
    pub max_range: Option<f64>,
    // older talkers send two fields; remembered so rendering is the inverse
    #[serde(skip)]
    range_field: bool,
}

impl Default for Dpt {
    fn default() -> Self {
        Self {
            talker: "II".to_string(),
            depth: None,
            offset: None,
            max_range: None,
            range_field: true,
        }
    }
}

fn parse_meters(field: &str, what: &str) -> Result<Option<f64>, Error> {
    if field.is_empty() {
        return Ok(None);
    }
    field
        .parse()
        .map(Some)
        .map_err(|_| Error::Format(format!("{} '{}' is not a number", what, field)))
}

fn render_meters(value: Option<f64>) -> String {
    value.map(|v| format!("{:.1}", v)).unwrap_or_default()
}

impl Dpt {
    pub fn from_fields(talker: &str, fields: &[&str]) -> Result<Self, Error> {
        // the third field is a later addition, older talkers omit it
        if fields.len() != 2 && fields.len() != 3 {
            return Err(Error::Format(format!(
                "depth sentence has {} fields, expected 2 or 3",
                fields.len()
            )));
        }
        Ok(Self {
            talker: talker.to_string(),
            depth: parse_meters(fields[0], "depth")?,
            offset: parse_meters(fields[1], "transducer offset")?,
            max_range: if fields.len() == 3 {
                parse_meters(fields[2], "range scale")?
            } else {
                None
            },
            range_field: fields.len() == 3,
        })
    }

    pub fn fields(&self) -> Vec<String> {
        let mut fields = vec![render_meters(self.depth), render_meters(self.offset)];
        if self.range_field || self.max_range.is_some() {
            fields.push(render_meters(self.max_range));
        }
        fields
    }
}
