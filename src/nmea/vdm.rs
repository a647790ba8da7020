use serde::Serialize;

use crate::errors::Error;

/// AIS radio channel carried in the VDM/VDO channel field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AisChannel {
    A,
    B,
}

impl AisChannel {
    fn from_field(field: &str) -> Result<Option<Self>, Error> {
        match field {
            "" => Ok(None),
            "A" | "1" => Ok(Some(AisChannel::A)),
            "B" | "2" => Ok(Some(AisChannel::B)),
            other => Err(Error::Format(format!(
                "'{}' is not an AIS channel",
                other
            ))),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            AisChannel::A => "A",
            AisChannel::B => "B",
        }
    }
}

/// One VDM or VDO carrier sentence: a fragment of an armored AIS payload.
///
/// The sequence ID ties fragments of one multi-part message together. It
/// cycles through 0..=9 and can collide between unrelated messages close
/// together in time; resolving that is left to the caller, which sees the
/// fragments in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vdm {
    pub talker: String,
    pub n_fragments: u8,
    pub fragment: u8,
    pub sequence_id: Option<u32>,
    pub channel: Option<AisChannel>,
    pub payload: String,
    pub fill_bits: u8,
}

impl Default for Vdm {
    fn default() -> Self {
        Self {
            talker: "AI".to_string(),
            n_fragments: 0,
            fragment: 0,
            sequence_id: None,
            channel: None,
            payload: String::new(),
            fill_bits: 0,
        }
    }
}

fn parse_u8(field: &str, what: &str) -> Result<u8, Error> {
    field
        .parse()
        .map_err(|_| Error::Format(format!("{} '{}' is not a number", what, field)))
}

impl Vdm {
    pub fn from_fields(talker: &str, fields: &[&str]) -> Result<Self, Error> {
        if fields.len() != 6 {
            return Err(Error::Format(format!(
                "carrier sentence has {} fields, expected 6",
                fields.len()
            )));
        }
        let sequence_id = if fields[2].is_empty() {
            None
        } else {
            Some(fields[2].parse().map_err(|_| {
                Error::Format(format!("sequence id '{}' is not a number", fields[2]))
            })?)
        };
        let fill_bits = parse_u8(fields[5], "fill bits")?;
        if fill_bits > 5 {
            return Err(Error::Format(format!(
                "{} fill bits, expected at most 5",
                fill_bits
            )));
        }
        Ok(Self {
            talker: talker.to_string(),
            n_fragments: parse_u8(fields[0], "fragment count")?,
            fragment: parse_u8(fields[1], "fragment index")?,
            sequence_id,
            channel: AisChannel::from_field(fields[3])?,
            payload: fields[4].to_string(),
            fill_bits,
        })
    }

    pub fn fields(&self) -> Vec<String> {
        vec![
            self.n_fragments.to_string(),
            self.fragment.to_string(),
            self.sequence_id.map(|n| n.to_string()).unwrap_or_default(),
            self.channel.map(|c| c.as_str().to_string()).unwrap_or_default(),
            self.payload.clone(),
            self.fill_bits.to_string(),
        ]
    }
}
