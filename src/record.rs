/*!
    the slice of an EDS connection entry this crate consumes

    EDS files write the two connection words as numbers, usually hexadecimal, next to a vendor comment:

    ```text
        Connection1 =
            0x04010002,     $ trigger & transport
            0x44640405,     $ connection parameters
            ...
            "Exclusive Owner";
    ```

    Reading the file itself is up to the caller, this module only takes the numbers once they are extracted.
*/

use core::{fmt, num::IntErrorKind, str::FromStr};
use serde::{Deserialize, Serialize};
use crate::{
    data::hex32,
    error::{WordError, WordResult},
    params::ConnectionParams,
    summary::Summary,
    trigger::TriggerTransport,
};

/// a connection word as written in an EDS file, decimal or `0x` prefixed hexadecimal
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RawWord(pub u32);

impl RawWord {
    /// parse an optional text, giving nothing for an absent or malformed text
    pub fn parse_lossy(text: Option<&str>) -> Option<u32> {
        let text = text?;
        match text.parse::<RawWord>() {
            Ok(word) => Some(word.0),
            Err(error) => {
                log::debug!("ignoring connection word {:?}: {}", text, error);
                None
            },
        }
    }
}

impl FromStr for RawWord {
    type Err = WordError;
    fn from_str(text: &str) -> WordResult<Self> {
        let text = text.trim();
        if text.is_empty()
            {return Err(WordError::Empty)}
        let (digits, radix) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(digits) => (digits, 16),
            None => (text, 10),
        };
        if digits.is_empty()
            {return Err(WordError::Invalid("hexadecimal prefix without digits"))}
        if ! digits.chars().all(|c| c.is_digit(radix))
            {return Err(WordError::Invalid("unexpected character in number"))}
        u32::from_str_radix(digits, radix)
            .map(RawWord)
            .map_err(|error| match error.kind() {
                IntErrorKind::PosOverflow => WordError::Overflow,
                _ => WordError::Invalid("malformed number"),
            })
    }
}

impl From<RawWord> for u32 {
    fn from(word: RawWord) -> u32   {word.0}
}

impl fmt::Display for RawWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex32(self.0))
    }
}

/**
    connection data of one EDS connection entry

    Any word may be absent for entries that have no connection data. The comment is vendor text, it is kept verbatim and never interpreted.
*/
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub trigger_transport: Option<u32>,
    pub connection_params: Option<u32>,
    pub trigger_transport_comment: Option<String>,
}

impl ConnectionRecord {
    pub fn decode_trigger_transport(&self) -> Option<TriggerTransport> {
        TriggerTransport::decode(self.trigger_transport)
    }
    pub fn decode_connection_params(&self) -> Option<ConnectionParams> {
        ConnectionParams::decode(self.connection_params)
    }
    /// the vendor comment, untouched
    pub fn comment(&self) -> Option<&str> {
        self.trigger_transport_comment.as_deref()
    }
    /// one line description of the connection, with the default formatting
    pub fn summary(&self) -> String {
        Summary::default().summarize(self.trigger_transport, self.connection_params)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words() {
        assert_eq!("0x0000001E".parse::<RawWord>(), Ok(RawWord(0x1e)));
        assert_eq!("0X8000ffff".parse::<RawWord>(), Ok(RawWord(0x8000_ffff)));
        assert_eq!("  30 ".parse::<RawWord>(), Ok(RawWord(30)));
        assert_eq!("4294967295".parse::<RawWord>(), Ok(RawWord(u32::MAX)));
    }

    #[test]
    fn parse_failures() {
        assert_eq!("".parse::<RawWord>(), Err(WordError::Empty));
        assert_eq!("   ".parse::<RawWord>(), Err(WordError::Empty));
        assert!(matches!("0x".parse::<RawWord>(), Err(WordError::Invalid(_))));
        assert!(matches!("-1".parse::<RawWord>(), Err(WordError::Invalid(_))));
        assert!(matches!("+1".parse::<RawWord>(), Err(WordError::Invalid(_))));
        assert!(matches!("0x1_0".parse::<RawWord>(), Err(WordError::Invalid(_))));
        assert!(matches!("12ab".parse::<RawWord>(), Err(WordError::Invalid(_))));
        assert_eq!("0x100000000".parse::<RawWord>(), Err(WordError::Overflow));
        assert_eq!("4294967296".parse::<RawWord>(), Err(WordError::Overflow));
    }

    #[test]
    fn lossy_parse() {
        assert_eq!(RawWord::parse_lossy(None), None);
        assert_eq!(RawWord::parse_lossy(Some("garbage")), None);
        assert_eq!(RawWord::parse_lossy(Some("0x10")), Some(0x10));
        assert_eq!(RawWord(0x1e).to_string(), "0x0000001E");
    }

    #[test]
    fn record_comment_is_verbatim() {
        let record = ConnectionRecord {
            trigger_transport: Some(0x0001_0002),
            connection_params: None,
            trigger_transport_comment: Some(String::from("  Exclusive Owner, $ see manual ")),
        };
        assert_eq!(record.comment(), Some("  Exclusive Owner, $ see manual "));
        assert!(record.decode_trigger_transport().is_some_and(|d| d.change_of_state()));
        assert_eq!(record.decode_connection_params(), None);
        assert_eq!(record.summary(), "Client, Change of State");
    }
}
