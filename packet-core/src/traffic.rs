//! Send events fed to the compositor by a capture or replay source.

use serde::{Deserialize, Serialize};

use crate::{color::Color, config::Palette};

/// Transport protocol of a captured packet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Transport {
    Tcp,
    Udp,
    #[default]
    Other,
}

impl From<String> for Transport {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "t" | "tcp" => Transport::Tcp,
            "u" | "udp" => Transport::Udp,
            _ => Transport::Other,
        }
    }
}

impl From<Transport> for String {
    fn from(t: Transport) -> Self {
        match t {
            Transport::Tcp => "t",
            Transport::Udp => "u",
            Transport::Other => "?",
        }
        .to_owned()
    }
}

impl Transport {
    pub fn color(self, palette: &Palette) -> Color {
        match self {
            Transport::Tcp => palette.tcp,
            Transport::Udp => palette.udp,
            Transport::Other => palette.other,
        }
    }
}

/// One observed packet: `len` bytes from `src` to `dest`.
///
/// Field names follow the JSON records emitted by the capture side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficEvent {
    pub src: String,
    pub dest: String,
    #[serde(default)]
    pub src_port: u16,
    #[serde(default)]
    pub dest_port: u16,
    #[serde(default)]
    pub len: u32,
    #[serde(default, rename = "t")]
    pub transport: Transport,
}

impl TrafficEvent {
    pub fn new(src: impl Into<String>, dest: impl Into<String>, len: u32) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
            src_port: 0,
            dest_port: 0,
            len,
            transport: Transport::Other,
        }
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// Parses one JSON record.
    pub fn from_json(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// Size handed to the packet radius formula; an empty packet uses the default.
    pub fn size(&self) -> Option<f32> {
        (self.len > 0).then_some(self.len as f32)
    }
}
