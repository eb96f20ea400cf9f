//! decoding of the Trigger/Transport word of an EDS connection entry

use bilge::prelude::*;
use crate::{
    data::{Code, hex16, hex32},
    record::RawWord,
    words::{self, TriggerTransportWord, TransportClass, TriggerType, ApplicationType, Direction},
};

/**
    content of a Trigger/Transport word

    every field is always present. Codes missing from the enumerations are kept as [Code::Reserved], so the word can be rebuilt with [Self::encode]
*/
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TriggerTransport {
    /// the word as received, reserved bits included
    pub raw: u32,
    pub transport_class: Code<TransportClass, u16>,
    pub trigger: Code<TriggerType, u8>,
    pub application: Code<ApplicationType, u4>,
    pub direction: Direction,
}

impl TriggerTransport {
    /// decode a word, an absent word has nothing to render
    pub fn decode(word: Option<u32>) -> Option<Self> {
        word.map(Self::from_word)
    }
    /// decode a word given as EDS numeric text, a text that is not a number has nothing to render
    pub fn decode_text(text: Option<&str>) -> Option<Self> {
        Self::decode(RawWord::parse_lossy(text))
    }

    pub fn from_word(raw: u32) -> Self {
        use words::trigger_transport as layout;

        let decoded = Self {
            raw,
            transport_class: Code::lookup(layout::transport_class.extract(raw) as u16),
            trigger: Code::lookup(layout::trigger.extract(raw) as u8),
            application: Code::lookup(u4::new(layout::application.extract(raw) as u8)),
            direction: Direction::from(u1::new(layout::direction.extract(raw) as u8)),
        };
        if ! decoded.trigger.is_known() || ! decoded.application.is_known() {
            log::trace!("reserved trigger or application code in trigger/transport word {}", hex32(raw));
        }
        decoded
    }

    /// rebuild the word from the decoded fields, reserved bits are cleared
    pub fn encode(&self) -> u32 {
        u32::from(TriggerTransportWord::new(
            self.transport_class.code(),
            self.trigger.code(),
            self.application.code(),
            self.direction == Direction::Server,
            ))
    }

    /// the raw word like `0x0000001E`
    pub fn raw_value(&self) -> String   {hex32(self.raw)}

    /// the transport class code like `0x0001`
    pub fn transport_class_hex(&self) -> String   {hex16(self.transport_class.code())}
    pub fn transport_class_description(&self) -> String {
        match self.transport_class {
            Code::Known(class) => class.to_string(),
            Code::Reserved(code) => format!("Reserved/Unknown ({})", hex16(code)),
        }
    }

    pub fn cyclic(&self) -> bool   {self.trigger.is(TriggerType::Cyclic)}
    pub fn change_of_state(&self) -> bool   {self.trigger.is(TriggerType::ChangeOfState)}
    /// true if production is triggered by the application, not to be confused with [Self::application]
    pub fn application_triggered(&self) -> bool   {self.trigger.is(TriggerType::Application)}
    pub fn trigger_description(&self) -> String {
        self.trigger.known()
            .map_or(String::from("Reserved"), |trigger| trigger.to_string())
    }

    pub fn exclusive_owner(&self) -> bool   {self.application.is(ApplicationType::ExclusiveOwner)}
    pub fn input_only(&self) -> bool   {self.application.is(ApplicationType::InputOnly)}
    pub fn listen_only(&self) -> bool   {self.application.is(ApplicationType::ListenOnly)}
    pub fn redundant_owner(&self) -> bool   {self.application.is(ApplicationType::RedundantOwner)}
    pub fn application_description(&self) -> String {
        self.application.known()
            .map_or(String::from("Reserved"), |application| application.to_string())
    }

    pub fn is_server(&self) -> bool   {self.direction == Direction::Server}
    pub fn direction_description(&self) -> String   {self.direction.to_string()}
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_clear() {
        let decoded = TriggerTransport::from_word(0);
        assert_eq!(decoded.direction, Direction::Client);
        assert!(decoded.cyclic());
        assert!(decoded.exclusive_owner());
        assert_eq!(decoded.transport_class_hex(), "0x0000");
        assert_eq!(decoded.transport_class_description(), "Class 0");
        assert_eq!(decoded.raw_value(), "0x00000000");
    }

    #[test]
    fn reserved_codes() {
        // trigger 0x07, application 0x9, transport class 0x001E
        let decoded = TriggerTransport::from_word(0x0907_001e);
        assert_eq!(decoded.trigger, Code::Reserved(0x07));
        assert!(! decoded.cyclic() && ! decoded.change_of_state() && ! decoded.application_triggered());
        assert_eq!(decoded.trigger_description(), "Reserved");
        assert!(! decoded.exclusive_owner() && ! decoded.input_only() && ! decoded.listen_only() && ! decoded.redundant_owner());
        assert_eq!(decoded.application_description(), "Reserved");
        assert_eq!(decoded.transport_class_description(), "Reserved/Unknown (0x001E)");
        assert_eq!(decoded.transport_class_hex(), "0x001E");
        assert_eq!(decoded.raw_value(), "0x0907001E");
    }

    #[test]
    fn encode_clears_reserved_bits() {
        let decoded = TriggerTransport::from_word(0xf302_0001);
        assert_eq!(decoded.encode(), 0x8302_0001);
        assert_eq!(TriggerTransport::from_word(decoded.encode()), TriggerTransport {raw: 0x8302_0001, .. decoded});
    }

    #[test]
    fn absent_word() {
        assert_eq!(TriggerTransport::decode(None), None);
        assert_eq!(TriggerTransport::decode_text(Some("not a number")), None);
        assert_eq!(TriggerTransport::decode_text(Some("0x80000000")).map(|d| d.is_server()), Some(true));
    }
}
