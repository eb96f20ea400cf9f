//! one line description of a connection, composed from its two decoded words

use crate::{
    params::ConnectionParams,
    trigger::TriggerTransport,
    words::Arrows,
};

/// text given when neither word of a connection is available
pub const FALLBACK: &str = "No connection details available";

/// settings of a [Summary]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SummaryConfig {
    /// arrows used in direction labels
    pub arrows: Arrows,
    /// text given when there is nothing to describe
    pub fallback: String,
}
impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            arrows: Arrows::default(),
            fallback: String::from(FALLBACK),
        }
    }
}

/**
    formatter of connection summaries, like `Client, Cyclic, Fixed O→T / Variable T→O`

    The summary gathers, in this order and separated by `, `:
    - the direction and trigger type, when the Trigger/Transport word is present
    - the supported sizes, when the Connection Parameters word is present, `None` if no size flag is set

    The fallback text is given only when both words are absent.
*/
#[derive(Clone, Debug, Default)]
pub struct Summary {
    config: SummaryConfig,
}
impl Summary {
    pub fn new(config: SummaryConfig) -> Self   {Self {config}}
    pub fn config(&self) -> &SummaryConfig   {&self.config}

    /// decode both words and describe them
    pub fn summarize(&self, trigger: Option<u32>, params: Option<u32>) -> String {
        self.format(
            TriggerTransport::decode(trigger).as_ref(),
            ConnectionParams::decode(params).as_ref(),
            )
    }

    /// describe already decoded words
    pub fn format(&self, trigger: Option<&TriggerTransport>, params: Option<&ConnectionParams>) -> String {
        if trigger.is_none() && params.is_none()
            {return self.config.fallback.clone()}

        let mut parts = Vec::new();
        if let Some(trigger) = trigger {
            parts.push(trigger.direction_description());
            parts.push(trigger.trigger_description());
        }
        if let Some(params) = params {
            parts.push(params.size_support.describe(self.config.arrows));
        }
        parts.join(", ")
    }
}

/// describe a connection from its raw words, with the default formatting
pub fn summarize(trigger: Option<u32>, params: Option<u32>) -> String {
    Summary::default().summarize(trigger, params)
}
