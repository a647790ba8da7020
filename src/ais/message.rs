use serde::Serialize;

use super::bits::{BitVec, Field};
use super::message_01::PositionReport;
use super::message_04::BaseStationReport;
use super::message_05::StaticAndVoyageData;
use super::message_06::BinaryAddressed;
use super::message_07::BinaryAck;
use super::message_08::BinaryBroadcast;
use super::message_09::SarAircraftPosition;
use super::message_10::UtcInquiry;
use super::message_12::AddressedSafety;
use super::message_14::SafetyBroadcast;
use super::message_15::Interrogation;
use super::message_16::AssignmentCommand;
use super::message_17::DgnssBroadcast;
use super::message_18::StandardClassBReport;
use super::message_19::ExtendedClassBReport;
use super::message_20::DataLinkManagement;
use super::message_21::AidToNavigationReport;
use super::message_22::ChannelManagement;
use super::message_23::GroupAssignment;
use super::message_24::StaticDataReport;
use super::message_25::SingleSlotBinary;
use super::message_26::MultiSlotBinary;
use super::message_27::LongRangePosition;
use crate::errors::Error;

const MESSAGE_TYPE: Field = Field::new(0, 6);

/// Any decoded AIS message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Message {
    PositionReport(PositionReport),
    BaseStationReport(BaseStationReport),
    StaticAndVoyageData(StaticAndVoyageData),
    BinaryAddressed(BinaryAddressed),
    BinaryAck(BinaryAck),
    BinaryBroadcast(BinaryBroadcast),
    SarAircraftPosition(SarAircraftPosition),
    UtcInquiry(UtcInquiry),
    AddressedSafety(AddressedSafety),
    SafetyBroadcast(SafetyBroadcast),
    Interrogation(Interrogation),
    AssignmentCommand(AssignmentCommand),
    DgnssBroadcast(DgnssBroadcast),
    StandardClassBReport(StandardClassBReport),
    ExtendedClassBReport(ExtendedClassBReport),
    DataLinkManagement(DataLinkManagement),
    AidToNavigationReport(AidToNavigationReport),
    ChannelManagement(ChannelManagement),
    GroupAssignment(GroupAssignment),
    StaticDataReport(StaticDataReport),
    SingleSlotBinary(SingleSlotBinary),
    MultiSlotBinary(MultiSlotBinary),
    LongRangePosition(LongRangePosition),
}

impl Message {
    /// Decode a message from its unarmored bits. The first six bits carry
    /// the type ID and select the layout.
    pub fn from_bits(bits: &BitVec) -> Result<Self, Error> {
        let msg_type = bits.get(MESSAGE_TYPE)? as u8;
        match msg_type {
            1..=3 => PositionReport::from_bits(bits).map(Message::PositionReport),
            4 | 11 => BaseStationReport::from_bits(bits).map(Message::BaseStationReport),
            5 => StaticAndVoyageData::from_bits(bits).map(Message::StaticAndVoyageData),
            6 => BinaryAddressed::from_bits(bits).map(Message::BinaryAddressed),
            7 | 13 => BinaryAck::from_bits(bits).map(Message::BinaryAck),
            8 => BinaryBroadcast::from_bits(bits).map(Message::BinaryBroadcast),
            9 => SarAircraftPosition::from_bits(bits).map(Message::SarAircraftPosition),
            10 => UtcInquiry::from_bits(bits).map(Message::UtcInquiry),
            12 => AddressedSafety::from_bits(bits).map(Message::AddressedSafety),
            14 => SafetyBroadcast::from_bits(bits).map(Message::SafetyBroadcast),
            15 => Interrogation::from_bits(bits).map(Message::Interrogation),
            16 => AssignmentCommand::from_bits(bits).map(Message::AssignmentCommand),
            17 => DgnssBroadcast::from_bits(bits).map(Message::DgnssBroadcast),
            18 => StandardClassBReport::from_bits(bits).map(Message::StandardClassBReport),
            19 => ExtendedClassBReport::from_bits(bits).map(Message::ExtendedClassBReport),
            20 => DataLinkManagement::from_bits(bits).map(Message::DataLinkManagement),
            21 => AidToNavigationReport::from_bits(bits).map(Message::AidToNavigationReport),
            22 => ChannelManagement::from_bits(bits).map(Message::ChannelManagement),
            23 => GroupAssignment::from_bits(bits).map(Message::GroupAssignment),
            24 => StaticDataReport::from_bits(bits).map(Message::StaticDataReport),
            25 => SingleSlotBinary::from_bits(bits).map(Message::SingleSlotBinary),
            26 => MultiSlotBinary::from_bits(bits).map(Message::MultiSlotBinary),
            27 => LongRangePosition::from_bits(bits).map(Message::LongRangePosition),
            n => Err(Error::UnknownMessage(n)),
        }
    }

    pub fn to_bits(&self) -> BitVec {
        match self {
            Message::PositionReport(m) => m.to_bits(),
            Message::BaseStationReport(m) => m.to_bits(),
            Message::StaticAndVoyageData(m) => m.to_bits(),
            Message::BinaryAddressed(m) => m.to_bits(),
            Message::BinaryAck(m) => m.to_bits(),
            Message::BinaryBroadcast(m) => m.to_bits(),
            Message::SarAircraftPosition(m) => m.to_bits(),
            Message::UtcInquiry(m) => m.to_bits(),
            Message::AddressedSafety(m) => m.to_bits(),
            Message::SafetyBroadcast(m) => m.to_bits(),
            Message::Interrogation(m) => m.to_bits(),
            Message::AssignmentCommand(m) => m.to_bits(),
            Message::DgnssBroadcast(m) => m.to_bits(),
            Message::StandardClassBReport(m) => m.to_bits(),
            Message::ExtendedClassBReport(m) => m.to_bits(),
            Message::DataLinkManagement(m) => m.to_bits(),
            Message::AidToNavigationReport(m) => m.to_bits(),
            Message::ChannelManagement(m) => m.to_bits(),
            Message::GroupAssignment(m) => m.to_bits(),
            Message::StaticDataReport(m) => m.to_bits(),
            Message::SingleSlotBinary(m) => m.to_bits(),
            Message::MultiSlotBinary(m) => m.to_bits(),
            Message::LongRangePosition(m) => m.to_bits(),
        }
    }

    /// The type ID on the wire, including the variant distinctions that
    /// share a layout (1/2/3, 4/11, 7/13).
    pub fn type_id(&self) -> u8 {
        match self {
            Message::PositionReport(m) => m.message_type(),
            Message::BaseStationReport(m) => m.message_type(),
            Message::StaticAndVoyageData(_) => StaticAndVoyageData::ID,
            Message::BinaryAddressed(_) => BinaryAddressed::ID,
            Message::BinaryAck(m) => m.message_type(),
            Message::BinaryBroadcast(_) => BinaryBroadcast::ID,
            Message::SarAircraftPosition(_) => SarAircraftPosition::ID,
            Message::UtcInquiry(_) => UtcInquiry::ID,
            Message::AddressedSafety(_) => AddressedSafety::ID,
            Message::SafetyBroadcast(_) => SafetyBroadcast::ID,
            Message::Interrogation(_) => Interrogation::ID,
            Message::AssignmentCommand(_) => AssignmentCommand::ID,
            Message::DgnssBroadcast(_) => DgnssBroadcast::ID,
            Message::StandardClassBReport(_) => StandardClassBReport::ID,
            Message::ExtendedClassBReport(_) => ExtendedClassBReport::ID,
            Message::DataLinkManagement(_) => DataLinkManagement::ID,
            Message::AidToNavigationReport(_) => AidToNavigationReport::ID,
            Message::ChannelManagement(_) => ChannelManagement::ID,
            Message::GroupAssignment(_) => GroupAssignment::ID,
            Message::StaticDataReport(_) => StaticDataReport::ID,
            Message::SingleSlotBinary(_) => SingleSlotBinary::ID,
            Message::MultiSlotBinary(_) => MultiSlotBinary::ID,
            Message::LongRangePosition(_) => LongRangePosition::ID,
        }
    }

    pub fn as_position_report(&self) -> Option<&PositionReport> {
        match self {
            Message::PositionReport(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_base_station_report(&self) -> Option<&BaseStationReport> {
        match self {
            Message::BaseStationReport(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_static_and_voyage_data(&self) -> Option<&StaticAndVoyageData> {
        match self {
            Message::StaticAndVoyageData(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_standard_class_b_report(&self) -> Option<&StandardClassBReport> {
        match self {
            Message::StandardClassBReport(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_static_data_report(&self) -> Option<&StaticDataReport> {
        match self {
            Message::StaticDataReport(m) => Some(m),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ais::armor;

    #[test]
    fn test_dispatch_by_type_id() {
        let bits = armor::decode("133m@ogP00PD;88MD5MTDww@2D7k", 0).unwrap();
        let msg = Message::from_bits(&bits).unwrap();
        assert_eq!(msg.type_id(), 1);
        let report = msg.as_position_report().unwrap();
        assert_eq!(report.mmsi, 205344990);
        assert!(msg.as_static_and_voyage_data().is_none());
    }

    #[test]
    fn test_unknown_type_ids() {
        for id in [0u8, 28, 63] {
            let mut bits = BitVec::zeroed(168);
            bits.set(MESSAGE_TYPE, id as u64);
            assert_eq!(
                Message::from_bits(&bits).unwrap_err(),
                Error::UnknownMessage(id)
            );
        }
    }

    #[test]
    fn test_roundtrip_through_enum() {
        let bits = armor::decode("133m@ogP00PD;88MD5MTDww@2D7k", 0).unwrap();
        let msg = Message::from_bits(&bits).unwrap();
        assert_eq!(msg.to_bits(), bits);
    }

    #[test]
    fn test_serializes_to_json() {
        let bits = armor::decode("133m@ogP00PD;88MD5MTDww@2D7k", 0).unwrap();
        let msg = Message::from_bits(&bits).unwrap();
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["PositionReport"]["mmsi"], 205344990);
    }
}
