// UI Bindings Module
//
// The boundary between the sandboxed extraction code and the plugin UI:
// typed wire messages, the message dispatcher, and one-shot API functions.

mod api;
mod dispatcher;
mod messages;

pub use api::{design_data_request, extract_selection_json, extract_snapshot_json, supported_kinds};
pub use dispatcher::{
    completion_notice, DispatchError, Dispatcher, DispatcherConfig, ResponseFormat,
    NO_ELIGIBLE_MESSAGE, NO_SELECTION_MESSAGE,
};
pub use messages::{
    AnalysisSummary, DesignData, InboundMessage, OutboundMessage, SelectionSummary,
};
