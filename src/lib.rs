//! NMEA 0183 sentence codec with AIS message decoding and encoding.
//!
//! The crate is split in two layers. [`nmea`] handles the text envelope:
//! start token, talker and tag, comma fields and the XOR checksum, plus the
//! reassembly of multi-fragment VDM/VDO payloads. [`ais`] handles the binary
//! layer: the six-bit ASCII armoring and the bit-level layouts of message
//! types 1 through 27.
//!
//! Decoding a received line end to end:
//!
//! ```
//! use nmea_ais::{ais, nmea};
//!
//! let line = "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C";
//! let sentence = nmea::parse_sentence(line)?;
//! let (text, fill_bits) = nmea::ais_helper::reassemble(&[sentence])?;
//! let bits = ais::armor::decode(&text, fill_bits)?;
//! let message = ais::Message::from_bits(&bits)?;
//!
//! let report = message.as_position_report().unwrap();
//! assert_eq!(report.mmsi, 477553000);
//! # Ok::<(), nmea_ais::Error>(())
//! ```
//!
//! Everything is synchronous and side-effect free; fallible operations
//! return [`Error`]. Buffering fragments of a multi-part message until all
//! have arrived is the caller's concern.

pub mod ais;
pub mod errors;
pub mod nmea;

pub use errors::Error;
