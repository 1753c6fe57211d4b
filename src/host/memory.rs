// MemoryHost - a PluginHost backed by a Document snapshot
//
// Records everything the dispatcher sends back so embedders (and tests) can
// inspect the UI traffic after the fact.

use tracing::debug;

use super::document::{Document, HostError};
use super::HostNode;
use super::PluginHost;
use crate::bindings::OutboundMessage;

pub struct MemoryHost {
    document: Document,
    posted: Vec<OutboundMessage>,
    notifications: Vec<String>,
    closed: bool,
}

impl MemoryHost {
    /// Wrap a snapshot. Fails if the snapshot's selection names missing nodes.
    pub fn new(document: Document) -> Result<Self, HostError> {
        document.selected_nodes()?;
        Ok(Self {
            document,
            posted: Vec::new(),
            notifications: Vec::new(),
            closed: false,
        })
    }

    /// Replace the current selection
    pub fn select<I, S>(&mut self, ids: I) -> Result<(), HostError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        if let Some(missing) = ids.iter().find(|id| self.document.find(id).is_none()) {
            return Err(HostError::UnknownNode(missing.clone()));
        }
        self.document.selection = ids;
        Ok(())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Messages posted to the UI, oldest first
    pub fn posted(&self) -> &[OutboundMessage] {
        &self.posted
    }

    /// Drain posted messages
    pub fn take_posted(&mut self) -> Vec<OutboundMessage> {
        std::mem::take(&mut self.posted)
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl PluginHost for MemoryHost {
    fn selection(&self) -> Vec<&dyn HostNode> {
        // Ids were validated on construction and on every select()
        self.document
            .selection
            .iter()
            .filter_map(|id| self.document.find(id))
            .map(|node| node as &dyn HostNode)
            .collect()
    }

    fn post_message(&mut self, message: OutboundMessage) {
        debug!("UI <- {}", message.type_name());
        self.posted.push(message);
    }

    fn notify(&mut self, message: &str) {
        debug!("notify: {}", message);
        self.notifications.push(message.to_string());
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
