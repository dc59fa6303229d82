use crate::{
    oob::{DaemonCommand, IofType, OpalDataType, OrteDataType, RmlTag},
    wire::{WireError, WireReader},
};
use std::{fmt, ops::Range};

/// How a body was packed by the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OobBodyLayout {
    /// Every value is preceded by type tags (debug builds of the runtime).
    /// `orte_type` is the ORTE type tag of the leading value.
    FullyDescribed { orte_type: u8 },
    /// Bare values.
    Compact,
}

/// Interpreted contents of an OOB message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OobBody {
    /// Version handshake sent with the invalid tag.
    Invalid { version: String, credential: String },
    Iof {
        layout: OobBodyLayout,
        iof_type: u8,
        job_id: u32,
        process_id: u32,
    },
    OrtedCallback {
        layout: OobBodyLayout,
        job_id: u32,
        process_id: u32,
        uri: String,
        node_name: String,
        blob_len: u32,
    },
    Xcast {
        layout: OobBodyLayout,
        daemon_command: u8,
    },
    /// Tag has no body decoder, or the body did not fit its layout.
    Opaque,
}

/// One complete OOB message body found in a packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OobMessage {
    pub rml_tag: u32,
    pub body: OobBody,

    /// Whole body, as a range of the packet.
    pub range: Range<usize>,

    /// Part of the body left uninterpreted.
    pub opaque: Range<usize>,
}

impl OobMessage {
    /// Interprets `body`, which sits at `offset` in the packet.
    pub fn decode(rml_tag: u32, body: &[u8], offset: usize) -> Self {
        let (decoded, consumed) = OobBody::decode(rml_tag, body);
        Self {
            rml_tag,
            body: decoded,
            range: offset..offset + body.len(),
            opaque: offset + consumed..offset + body.len(),
        }
    }

    pub fn opaque_len(&self) -> usize {
        self.opaque.len()
    }
}

impl fmt::Display for OobMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Message: RML-Tag={}", RmlTag::name_of(self.rml_tag))?;
        match &self.body {
            OobBody::Opaque => {}
            body => write!(f, " {}", body)?,
        }
        if let Some(layout @ OobBodyLayout::FullyDescribed { .. }) = self.body.layout() {
            write!(f, " ({})", layout)?;
        }
        if self.opaque_len() > 0 {
            write!(f, " Length={}", self.opaque_len())?;
        }
        Ok(())
    }
}

impl OobBody {
    /// Interprets a complete body for the given tag.
    ///
    /// Returns the body and how many of its bytes were interpreted.
    pub fn decode(rml_tag: u32, body: &[u8]) -> (Self, usize) {
        let decoded = match RmlTag::try_from(rml_tag) {
            Ok(RmlTag::Invalid) => Self::decode_invalid(body),
            Ok(RmlTag::IofHnp) | Ok(RmlTag::IofProxy) => Self::decode_iof(body),
            Ok(RmlTag::OrtedCallback) => Self::decode_orted_callback(body),
            Ok(RmlTag::Xcast) => Self::decode_xcast(body),
            _ => Ok(None),
        };

        match decoded {
            Ok(Some(found)) => found,
            Ok(None) => (OobBody::Opaque, 0),
            Err(err) => {
                tracing::warn!(rml_tag, %err, "oob body failed its layout check");
                (OobBody::Opaque, 0)
            }
        }
    }

    pub fn layout(&self) -> Option<OobBodyLayout> {
        match self {
            OobBody::Iof { layout, .. }
            | OobBody::OrtedCallback { layout, .. }
            | OobBody::Xcast { layout, .. } => Some(*layout),
            OobBody::Invalid { .. } | OobBody::Opaque => None,
        }
    }

    fn fully_described(body: &[u8]) -> Option<OobBodyLayout> {
        match body.first().map(|b| OpalDataType::try_from(*b)) {
            Some(Ok(OpalDataType::Int32)) => Some(OobBodyLayout::FullyDescribed {
                orte_type: body.get(5).copied().unwrap_or_default(),
            }),
            _ => None,
        }
    }

    // Number of packed names announced at `offset`; a callback carries exactly one.
    fn count_at(body: &[u8], offset: usize) -> Result<u32, WireError> {
        let mut r = WireReader::network(body);
        r.skip(offset)?;
        r.read_u32()
    }

    fn decode_invalid(body: &[u8]) -> Result<Option<(Self, usize)>, WireError> {
        if body.len() != 14 {
            return Ok(None);
        }

        let mut r = WireReader::network(body);
        let (version, version_len) = r.read_stringz()?;
        let (credential, credential_len) = r.read_stringz()?;

        Ok(Some((
            OobBody::Invalid {
                version,
                credential,
            },
            version_len + credential_len,
        )))
    }

    fn decode_iof(body: &[u8]) -> Result<Option<(Self, usize)>, WireError> {
        let mut r = WireReader::network(body);

        let layout = match Self::fully_described(body) {
            Some(layout) if body.len() >= 30 => {
                r.skip(7)?;
                layout
            }
            None if body.len() >= 21 => {
                r.skip(4)?;
                OobBodyLayout::Compact
            }
            _ => return Ok(None),
        };

        let iof_type = r.read_u8()?;
        let (job_id, process_id) = match layout {
            OobBodyLayout::FullyDescribed { .. } => {
                r.skip(7)?;
                let job_id = r.read_u32()?;
                r.skip(1)?;
                let process_id = r.read_u32()?;
                r.skip(6)?;
                (job_id, process_id)
            }
            OobBodyLayout::Compact => {
                r.skip(4)?;
                let job_id = r.read_u32()?;
                let process_id = r.read_u32()?;
                r.skip(4)?;
                (job_id, process_id)
            }
        };

        Ok(Some((
            OobBody::Iof {
                layout,
                iof_type,
                job_id,
                process_id,
            },
            r.position(),
        )))
    }

    fn decode_orted_callback(body: &[u8]) -> Result<Option<(Self, usize)>, WireError> {
        let mut r = WireReader::network(body);

        let layout = match Self::fully_described(body) {
            Some(layout) if body.len() >= 54 && Self::count_at(body, 1)? == 1 => layout,
            None if body.len() >= 40 && Self::count_at(body, 0)? == 1 => OobBodyLayout::Compact,
            _ => return Ok(None),
        };

        let (job_id, process_id, uri, node_name, blob_len) = match layout {
            OobBodyLayout::FullyDescribed { .. } => {
                r.skip(7)?;
                let job_id = r.read_u32()?;
                r.skip(1)?;
                let process_id = r.read_u32()?;
                r.skip(10)?;
                let (uri, _) = r.read_stringz()?;
                r.skip(10)?;
                let (node_name, _) = r.read_stringz()?;
                r.skip(14)?;
                let blob_len = r.read_u32()?;
                (job_id, process_id, uri, node_name, blob_len)
            }
            OobBodyLayout::Compact => {
                r.skip(4)?;
                let job_id = r.read_u32()?;
                let process_id = r.read_u32()?;
                r.skip(8)?;
                let (uri, _) = r.read_stringz()?;
                r.skip(8)?;
                let (node_name, _) = r.read_stringz()?;
                r.skip(8)?;
                let blob_len = r.read_u32()?;
                (job_id, process_id, uri, node_name, blob_len)
            }
        };

        Ok(Some((
            OobBody::OrtedCallback {
                layout,
                job_id,
                process_id,
                uri,
                node_name,
                blob_len,
            },
            r.position(),
        )))
    }

    fn decode_xcast(body: &[u8]) -> Result<Option<(Self, usize)>, WireError> {
        let mut r = WireReader::network(body);

        let layout = match Self::fully_described(body) {
            Some(layout) if body.len() >= 8 => {
                r.skip(7)?;
                layout
            }
            None if body.len() >= 5 => {
                r.skip(4)?;
                OobBodyLayout::Compact
            }
            _ => return Ok(None),
        };

        let daemon_command = r.read_u8()?;

        Ok(Some((
            OobBody::Xcast {
                layout,
                daemon_command,
            },
            r.position(),
        )))
    }
}

impl fmt::Display for OobBodyLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OobBodyLayout::FullyDescribed { orte_type } => {
                write!(f, "Debug={}", OrteDataType::name_of(*orte_type))
            }
            OobBodyLayout::Compact => Ok(()),
        }
    }
}

impl fmt::Display for OobBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OobBody::Invalid {
                version,
                credential,
            } => write!(f, "Version={} Credential={}", version, credential),
            OobBody::Iof {
                iof_type,
                job_id,
                process_id,
                ..
            } => write!(
                f,
                "Type={} Jobid={} Vpid={}",
                IofType::name_of(*iof_type),
                job_id,
                process_id
            ),
            OobBody::OrtedCallback {
                job_id,
                process_id,
                uri,
                node_name,
                blob_len,
                ..
            } => write!(
                f,
                "Jobid={} Vpid={} URI={} Nodename={} Blob-Length={}",
                job_id, process_id, uri, node_name, blob_len
            ),
            OobBody::Xcast { daemon_command, .. } => {
                write!(f, "CMD={}", DaemonCommand::name_of(*daemon_command))
            }
            OobBody::Opaque => Ok(()),
        }
    }
}
