/*!
    bit layouts and enumerations of the two packed words an EDS connection entry carries per I/O connection.

    The goal of this file is to gather every bit assignment at one place, so what you see here is exactly what the decoders read, no more, no less.

    Each word is described twice:
    - as `const` [BitRange] tables, used by the decoders to pick each field out of a raw word
    - as `bilge` structs, used to compose a word from its fields

    Bit 0 is the least significant bit of the word. Reserved bits are listed so that every bit of a word belongs to exactly one range.
*/

use core::fmt;
use bilge::prelude::*;
use crate::data::BitRange;

/// layout of the Trigger/Transport word
#[allow(non_upper_case_globals)]
pub mod trigger_transport {
    use super::*;

    /// opaque transport class code, see [TransportClass]
    pub const transport_class: BitRange = BitRange::new(0, 16);
    /// production trigger, see [TriggerType]
    pub const trigger: BitRange = BitRange::new(16, 8);
    /// use of the connection, see [ApplicationType]
    pub const application: BitRange = BitRange::new(24, 4);
    pub const reserved: BitRange = BitRange::new(28, 3);
    /// set when the device is the server side of the connection
    pub const direction: BitRange = BitRange::new(31, 1);

    /// all ranges of the word, in bit order
    pub const ranges: [BitRange; 5] = [transport_class, trigger, application, reserved, direction];
}

/// layout of the Connection Parameters word
#[allow(non_upper_case_globals)]
pub mod connection_params {
    use super::*;

    /// fixed/variable size flags, see [SizeSupport]
    pub const size_support: BitRange = BitRange::new(0, 4);
    pub const reserved_low: BitRange = BitRange::new(4, 4);
    /// see [RealTimeFormat]
    pub const real_time_format: BitRange = BitRange::new(8, 7);
    pub const reserved_high: BitRange = BitRange::new(15, 1);
    /// O→T connection type, see [ConnectionType]
    pub const o_to_t_type: BitRange = BitRange::new(16, 4);
    /// T→O connection type, see [ConnectionType]
    pub const t_to_o_type: BitRange = BitRange::new(20, 4);
    /// O→T priority, see [Priority]
    pub const o_to_t_priority: BitRange = BitRange::new(24, 4);
    /// T→O priority, see [Priority]
    pub const t_to_o_priority: BitRange = BitRange::new(28, 4);

    /// all ranges of the word, in bit order
    pub const ranges: [BitRange; 8] = [
        size_support, reserved_low,
        real_time_format, reserved_high,
        o_to_t_type, t_to_o_type,
        o_to_t_priority, t_to_o_priority,
        ];
}



/// Trigger/Transport word, field by field
#[bitsize(32)]
#[derive(FromBits, DebugBits, Copy, Clone, Eq, PartialEq)]
pub struct TriggerTransportWord {
    pub transport_class: u16,
    pub trigger: u8,
    pub application: u4,
    reserved: u3,
    /// true if the device is the server of the connection
    pub server: bool,
}

/// Connection Parameters word, field by field
#[bitsize(32)]
#[derive(FromBits, DebugBits, Copy, Clone, Eq, PartialEq)]
pub struct ConnectionParamsWord {
    pub size_support: SizeSupport,
    reserved: u4,
    pub real_time_format: u7,
    reserved: u1,
    pub o_to_t_type: u4,
    pub t_to_o_type: u4,
    pub o_to_t_priority: u4,
    pub t_to_o_priority: u4,
}

/**
    data sizes a connection accepts in each direction

    These are independent flags, any combination is allowed.
*/
#[bitsize(4)]
#[derive(FromBits, DebugBits, Copy, Clone, Eq, PartialEq)]
pub struct SizeSupport {
    /// O→T data has a fixed size
    pub o_to_t_fixed: bool,
    /// O→T data has a variable size
    pub o_to_t_variable: bool,
    /// T→O data has a fixed size
    pub t_to_o_fixed: bool,
    /// T→O data has a variable size
    pub t_to_o_variable: bool,
}

impl SizeSupport {
    /// true when no size flag is set
    pub fn is_empty(&self) -> bool   {u4::from(*self).value() == 0}

    /// labels of the flags set, in bit order
    pub fn labels(&self, arrows: Arrows) -> Vec<String> {
        [ (self.o_to_t_fixed(), "Fixed", Way::OriginatorToTarget),
          (self.o_to_t_variable(), "Variable", Way::OriginatorToTarget),
          (self.t_to_o_fixed(), "Fixed", Way::TargetToOriginator),
          (self.t_to_o_variable(), "Variable", Way::TargetToOriginator),
        ].into_iter()
            .filter(|(set, _, _)| *set)
            .map(|(_, size, way)| format!("{} {}", size, way.label(arrows)))
            .collect()
    }

    /// flags set joined by ` / `, or `None`
    pub fn describe(&self, arrows: Arrows) -> String {
        if self.is_empty()
            {return String::from("None")}
        self.labels(arrows).join(" / ")
    }
}



/// ODVA transport classes known to EDS connection entries
#[bitsize(16)]
#[derive(TryFromBits, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TransportClass {
    Class0 = 0x0000,
    Class1 = 0x0001,
    Class2 = 0x0002,
    Class3 = 0x0003,
    Class4 = 0x0004,
    Class5 = 0x0005,
    Class6 = 0x0006,
}
impl fmt::Display for TransportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class {}", u16::from(*self))
    }
}

/// event producing data on the connection
#[bitsize(8)]
#[derive(TryFromBits, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TriggerType {
    /// data is produced periodically
    Cyclic = 0,
    /// data is produced when it changes
    ChangeOfState = 1,
    /// data is produced when the application decides
    Application = 2,
}
impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cyclic => "Cyclic",
            Self::ChangeOfState => "Change of State",
            Self::Application => "Application",
        })
    }
}

/// how the connection is used relatively to other connections to the same data
#[bitsize(4)]
#[derive(TryFromBits, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ApplicationType {
    /// the originator owns the outputs alone
    ExclusiveOwner = 0,
    /// only inputs are exchanged, no output is owned
    InputOnly = 1,
    /// inputs are received only while another connection keeps the data alive
    ListenOnly = 2,
    /// several originators may own the outputs, one at a time
    RedundantOwner = 3,
}
impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ExclusiveOwner => "Exclusive Owner",
            Self::InputOnly => "Input Only",
            Self::ListenOnly => "Listen Only",
            Self::RedundantOwner => "Redundant Owner",
        })
    }
}

/// side of the connection the device takes
#[bitsize(1)]
#[derive(FromBits, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Client = 0,
    Server = 1,
}
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Client => "Client",
            Self::Server => "Server",
        })
    }
}

/// framing of the real-time data
#[bitsize(7)]
#[derive(TryFromBits, Debug, Copy, Clone, Eq, PartialEq)]
pub enum RealTimeFormat {
    Modeless = 0,
    ZeroLength = 1,
    Heartbeat = 2,
    /// data is prefixed with a 32-bit run/idle header
    Header32Bit = 3,
}
impl fmt::Display for RealTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Modeless => "Modeless",
            Self::ZeroLength => "Zero-Length",
            Self::Heartbeat => "Heartbeat",
            Self::Header32Bit => "32-bit Header",
        })
    }
}

/// network topology of one direction of the connection
#[bitsize(4)]
#[derive(TryFromBits, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ConnectionType {
    PointToPoint = 0,
    Multicast = 1,
}
impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PointToPoint => "Point-to-Point",
            Self::Multicast => "Multicast",
        })
    }
}

/// network priority of one direction of the connection
#[bitsize(4)]
#[derive(TryFromBits, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Priority {
    Low = 0,
    High = 1,
    Scheduled = 2,
}
impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::High => "High",
            Self::Scheduled => "Scheduled",
        })
    }
}



/// one of the two data directions of a CIP connection
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Way {
    /// O→T
    OriginatorToTarget,
    /// T→O
    TargetToOriginator,
}
impl Way {
    pub fn label(self, arrows: Arrows) -> &'static str {
        match (self, arrows) {
            (Self::OriginatorToTarget, Arrows::Unicode) => "O→T",
            (Self::TargetToOriginator, Arrows::Unicode) => "T→O",
            (Self::OriginatorToTarget, Arrows::Ascii) => "O->T",
            (Self::TargetToOriginator, Arrows::Ascii) => "T->O",
        }
    }
}

/// how direction arrows are written in descriptions
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Arrows {
    /// `O→T`
    #[default]
    Unicode,
    /// `O->T`, for displays without unicode
    Ascii,
}

/// a value for each data direction of a connection
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PerWay<T> {
    pub o_to_t: T,
    pub t_to_o: T,
}
impl<T> PerWay<T> {
    pub fn get(&self, way: Way) -> &T {
        match way {
            Way::OriginatorToTarget => &self.o_to_t,
            Way::TargetToOriginator => &self.t_to_o,
        }
    }
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerWay<U> {
        PerWay {o_to_t: f(&self.o_to_t), t_to_o: f(&self.t_to_o)}
    }
    /// describe both directions, like `O→T Multicast, T→O Point-to-Point`
    pub fn describe(&self, arrows: Arrows, mut label: impl FnMut(&T) -> String) -> String {
        format!("{} {}, {} {}",
            Way::OriginatorToTarget.label(arrows), label(&self.o_to_t),
            Way::TargetToOriginator.label(arrows), label(&self.t_to_o),
            )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    /// every bit of a word must belong to exactly one range
    fn check_coverage(ranges: &[BitRange]) {
        let mut covered = 0u32;
        let mut next = 0;
        for range in ranges {
            assert_eq!(range.bit, next, "ranges must be contiguous, in bit order");
            assert_eq!(covered & range.mask(), 0, "{:?} overlaps a previous range", range);
            covered |= range.mask();
            next = range.end();
        }
        assert_eq!(covered, u32::MAX);
        assert_eq!(next, 32);
    }

    #[test]
    fn layouts_cover_words() {
        check_coverage(&trigger_transport::ranges);
        check_coverage(&connection_params::ranges);
    }

    #[test]
    fn trigger_transport_layout_matches_struct() {
        use trigger_transport as layout;
        for raw in [0, 0x8000_0000, 0x0201_0000, 0x7fff_ffff, 0xdead_beef, 0x1234_5678, u32::MAX] {
            let word = TriggerTransportWord::from(raw);
            assert_eq!(u32::from(word.transport_class()), layout::transport_class.extract(raw));
            assert_eq!(u32::from(word.trigger()), layout::trigger.extract(raw));
            assert_eq!(u32::from(word.application().value()), layout::application.extract(raw));
            assert_eq!(u32::from(word.server()), layout::direction.extract(raw));
        }
    }

    #[test]
    fn connection_params_layout_matches_struct() {
        use connection_params as layout;
        for raw in [0, 0x0000_000f, 0x0021_0000, 0x2100_0300, 0xdead_beef, 0x1234_5678, u32::MAX] {
            let word = ConnectionParamsWord::from(raw);
            assert_eq!(u32::from(u4::from(word.size_support()).value()), layout::size_support.extract(raw));
            assert_eq!(u32::from(word.real_time_format().value()), layout::real_time_format.extract(raw));
            assert_eq!(u32::from(word.o_to_t_type().value()), layout::o_to_t_type.extract(raw));
            assert_eq!(u32::from(word.t_to_o_type().value()), layout::t_to_o_type.extract(raw));
            assert_eq!(u32::from(word.o_to_t_priority().value()), layout::o_to_t_priority.extract(raw));
            assert_eq!(u32::from(word.t_to_o_priority().value()), layout::t_to_o_priority.extract(raw));
        }
    }

    #[test]
    fn size_support_labels() {
        let all = SizeSupport::from(u4::new(0xf));
        assert_eq!(all.describe(Arrows::Unicode), "Fixed O→T / Variable O→T / Fixed T→O / Variable T→O");
        assert_eq!(SizeSupport::from(u4::new(0b1001)).describe(Arrows::Ascii), "Fixed O->T / Variable T->O");
        assert!(SizeSupport::from(u4::new(0)).is_empty());
        assert_eq!(SizeSupport::from(u4::new(0)).describe(Arrows::Unicode), "None");
    }

    #[test]
    fn per_way_values() {
        let priorities = PerWay {o_to_t: Priority::High, t_to_o: Priority::Scheduled};
        assert_eq!(*priorities.get(Way::OriginatorToTarget), Priority::High);
        assert_eq!(*priorities.get(Way::TargetToOriginator), Priority::Scheduled);
        assert_eq!(priorities.describe(Arrows::Ascii, |p| p.to_string()), "O->T High, T->O Scheduled");
    }

    #[test]
    fn enumeration_codes() {
        assert_eq!(TriggerType::try_from(1u8).ok(), Some(TriggerType::ChangeOfState));
        assert!(TriggerType::try_from(3u8).is_err());
        assert_eq!(ApplicationType::try_from(u4::new(3)).ok(), Some(ApplicationType::RedundantOwner));
        assert!(ApplicationType::try_from(u4::new(4)).is_err());
        assert_eq!(Direction::from(u1::new(1)), Direction::Server);
        assert_eq!(TransportClass::try_from(0x0003u16).ok().map(|c| c.to_string()), Some(String::from("Class 3")));
        assert!(RealTimeFormat::try_from(u7::new(0x7f)).is_err());
        assert_eq!(u4::from(Priority::Scheduled).value(), 2);
    }
}
