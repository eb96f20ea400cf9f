/*!
    Decoder for the two packed words EtherNet/IP EDS files give for each I/O connection: the Trigger/Transport word and the Connection Parameters word.

    Decoding is pure and never fails, unknown codes are kept as reserved values. The [summary] module composes both words into a one line description.

        use eds_connection::{TriggerTransport, summarize};

        let decoded = TriggerTransport::decode(Some(0x8001_0000)).unwrap();
        assert!(decoded.is_server());
        assert!(decoded.change_of_state());
        assert_eq!(summarize(Some(0x8001_0000), Some(0x9)), "Server, Change of State, Fixed O→T / Variable T→O");
*/

pub mod data;
pub mod words;
pub mod error;
pub mod trigger;
pub mod params;
pub mod summary;
pub mod view;
pub mod record;

pub use crate::data::{BitRange, Code, extract, insert};
pub use crate::error::{WordError, WordResult};
pub use crate::trigger::TriggerTransport;
pub use crate::params::ConnectionParams;
pub use crate::summary::{Summary, SummaryConfig, summarize};
pub use crate::record::{ConnectionRecord, RawWord};
pub use crate::view::{TriggerTransportView, ConnectionParamsView};
