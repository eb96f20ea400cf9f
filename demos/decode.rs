//! decode the connection words of an EDS connection entry given on the command line
//!
//!     cargo run --example decode -- 0x04010002 0x44640405

use std::error::Error;
use eds_connection::{
    RawWord, TriggerTransport, ConnectionParams,
    TriggerTransportView, ConnectionParamsView,
    summarize,
    };

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let trigger = args.next().map(|text| text.parse::<RawWord>()).transpose()?.map(u32::from);
    let params = args.next().map(|text| text.parse::<RawWord>()).transpose()?.map(u32::from);

    println!("{}", summarize(trigger, params));
    if let Some(decoded) = TriggerTransport::decode(trigger) {
        println!("{:#?}", decoded);
        println!("{}", serde_json::to_string_pretty(&TriggerTransportView::from(&decoded))?);
    }
    if let Some(decoded) = ConnectionParams::decode(params) {
        println!("{:#?}", decoded);
        println!("{}", serde_json::to_string_pretty(&ConnectionParamsView::from(&decoded))?);
    }
    Ok(())
}
