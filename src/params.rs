//! decoding of the Connection Parameters word of an EDS connection entry

use bilge::prelude::*;
use crate::{
    data::{Code, hex8, hex32},
    record::RawWord,
    words::{self, ConnectionParamsWord, SizeSupport, RealTimeFormat, ConnectionType, Priority, PerWay, Arrows},
};

/**
    content of a Connection Parameters word

    The connection type and priority bytes hold one nibble per data direction, they are grouped in [PerWay].
*/
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ConnectionParams {
    /// the word as received, reserved bits included
    pub raw: u32,
    pub size_support: SizeSupport,
    pub real_time_format: Code<RealTimeFormat, u7>,
    pub connection_type: PerWay<Code<ConnectionType, u4>>,
    pub priority: PerWay<Code<Priority, u4>>,
}

/// label of a per-direction code, reserved codes have no details
fn label<T: ToString + Copy, R: Copy>(code: &Code<T, R>) -> String {
    code.known()
        .map_or(String::from("Reserved"), |value| value.to_string())
}

impl ConnectionParams {
    /// decode a word, an absent word has nothing to render
    pub fn decode(word: Option<u32>) -> Option<Self> {
        word.map(Self::from_word)
    }
    /// decode a word given as EDS numeric text, a text that is not a number has nothing to render
    pub fn decode_text(text: Option<&str>) -> Option<Self> {
        Self::decode(RawWord::parse_lossy(text))
    }

    pub fn from_word(raw: u32) -> Self {
        use words::connection_params as layout;
        let nibble = |range: crate::data::BitRange|  u4::new(range.extract(raw) as u8);

        let decoded = Self {
            raw,
            size_support: SizeSupport::from(nibble(layout::size_support)),
            real_time_format: Code::lookup(u7::new(layout::real_time_format.extract(raw) as u8)),
            connection_type: PerWay {
                o_to_t: Code::lookup(nibble(layout::o_to_t_type)),
                t_to_o: Code::lookup(nibble(layout::t_to_o_type)),
            },
            priority: PerWay {
                o_to_t: Code::lookup(nibble(layout::o_to_t_priority)),
                t_to_o: Code::lookup(nibble(layout::t_to_o_priority)),
            },
        };
        if ! (decoded.connection_type.o_to_t.is_known() && decoded.connection_type.t_to_o.is_known()
            && decoded.priority.o_to_t.is_known() && decoded.priority.t_to_o.is_known()) {
            log::trace!("reserved connection type or priority code in connection parameters word {}", hex32(raw));
        }
        decoded
    }

    /// rebuild the word from the decoded fields, reserved bits are cleared
    pub fn encode(&self) -> u32 {
        u32::from(ConnectionParamsWord::new(
            self.size_support,
            self.real_time_format.code(),
            self.connection_type.o_to_t.code(),
            self.connection_type.t_to_o.code(),
            self.priority.o_to_t.code(),
            self.priority.t_to_o.code(),
            ))
    }

    /// the raw word like `0x0000001E`
    pub fn raw_value(&self) -> String   {hex32(self.raw)}

    pub fn size_support_description(&self) -> String {
        self.size_support.describe(Arrows::default())
    }

    pub fn real_time_format_description(&self) -> String {
        match self.real_time_format {
            Code::Known(format) => format.to_string(),
            Code::Reserved(code) => format!("Reserved/Unknown ({})", hex8(code.value())),
        }
    }

    /// true if the direction is multicast
    pub fn multicast(&self) -> PerWay<bool> {
        self.connection_type.map(|code| code.is(ConnectionType::Multicast))
    }
    /// true if the direction is point to point
    pub fn point_to_point(&self) -> PerWay<bool> {
        self.connection_type.map(|code| code.is(ConnectionType::PointToPoint))
    }
    /// like `O→T Multicast, T→O Point-to-Point`
    pub fn connection_types_description(&self) -> String {
        self.connection_type.describe(Arrows::default(), label)
    }

    /// true if the direction has the given priority
    pub fn has_priority(&self, priority: Priority) -> PerWay<bool> {
        self.priority.map(|code| code.is(priority))
    }
    /// like `O→T High, T→O Scheduled`
    pub fn priority_description(&self) -> String {
        self.priority.describe(Arrows::default(), label)
    }
}
