use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Routed-messaging tag naming the kind of OOB control message.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum RmlTag {
    Invalid = 0,
    Daemon = 1,
    IofHnp = 2,
    IofProxy = 3,
    XcastBarrier = 4,
    Plm = 5,
    PlmProxy = 6,
    ErrMgr = 7,
    Wireup = 8,
    RmlInfoUpdate = 9,
    OrtedCallback = 10,
    Rollup = 11,
    ReportRemoteLaunch = 12,
    Ckpt = 13,
    RmlRoute = 14,
    Xcast = 15,
    UpdateRouteAck = 19,
    Sync = 20,
    FilemBase = 21,
    FilemBaseResp = 22,
    FilemRsh = 23,
    Snapc = 24,
    SnapcFull = 25,
    Tool = 26,
    DataServer = 27,
    DataClient = 28,
    CollectiveTimer = 29,
    Collective = 30,
    CollId = 31,
    DaemonColl = 32,
    CollIdReq = 33,
    ShowHelp = 34,
    DebuggerRelease = 35,
    Bootstrap = 36,
    MissedMsg = 37,
    Abort = 38,
    Heartbeat = 39,
    Migrate = 40,
    Sstore = 41,
    SstoreInternal = 42,
    Subscribe = 43,
    FailureNotice = 44,
    DfsCmd = 45,
    DfsData = 46,
    SensorData = 47,
    DirectModex = 48,
    DirectModexResp = 49,
    Max = 100,
}

impl RmlTag {
    pub fn name(self) -> &'static str {
        match self {
            RmlTag::Invalid => "Invalid",
            RmlTag::Daemon => "Daemon",
            RmlTag::IofHnp => "IOF HNP",
            RmlTag::IofProxy => "IOF Proxy",
            RmlTag::XcastBarrier => "XCAST Barrier",
            RmlTag::Plm => "PLM",
            RmlTag::PlmProxy => "PLM Proxy",
            RmlTag::ErrMgr => "Error Message",
            RmlTag::Wireup => "Wireup",
            RmlTag::RmlInfoUpdate => "RML Info Update",
            RmlTag::OrtedCallback => "ORTED Callback",
            RmlTag::Rollup => "Rollup",
            RmlTag::ReportRemoteLaunch => "Report Remote Launch",
            RmlTag::Ckpt => "CKPT",
            RmlTag::RmlRoute => "RML Route",
            RmlTag::Xcast => "XCAST",
            RmlTag::UpdateRouteAck => "Update Route ACK",
            RmlTag::Sync => "SYNC",
            RmlTag::FilemBase => "FileM Base",
            RmlTag::FilemBaseResp => "FileM Base Response",
            RmlTag::FilemRsh => "FileM RSH",
            RmlTag::Snapc => "SNAPC",
            RmlTag::SnapcFull => "SNAPC Full",
            RmlTag::Tool => "Tool",
            RmlTag::DataServer => "Data Server",
            RmlTag::DataClient => "Data Client",
            RmlTag::CollectiveTimer => "Collective Timer",
            RmlTag::Collective => "Collective",
            RmlTag::CollId => "Collective ID",
            RmlTag::DaemonColl => "Daemon Collective",
            RmlTag::CollIdReq => "Collective ID Request",
            RmlTag::ShowHelp => "Show Help",
            RmlTag::DebuggerRelease => "Debugger Release",
            RmlTag::Bootstrap => "Bootstrap",
            RmlTag::MissedMsg => "Missed Message",
            RmlTag::Abort => "Abort",
            RmlTag::Heartbeat => "Heartbeat",
            RmlTag::Migrate => "Migrate",
            RmlTag::Sstore => "SStore",
            RmlTag::SstoreInternal => "SStore Internal",
            RmlTag::Subscribe => "Subscribe",
            RmlTag::FailureNotice => "Failure Notice",
            RmlTag::DfsCmd => "DFS Command",
            RmlTag::DfsData => "DFS Data",
            RmlTag::SensorData => "Sensor Data",
            RmlTag::DirectModex => "Direct Modex",
            RmlTag::DirectModexResp => "Direct Modex Response",
            RmlTag::Max => "MAX Tag",
        }
    }

    pub fn name_of(raw: u32) -> String {
        match RmlTag::try_from(raw) {
            Ok(tag) => tag.name().to_string(),
            Err(_) => raw.to_string(),
        }
    }
}

/// OOB frame header `msg_type`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum OobMsgType {
    Ident = 0,
    Probe = 1,
    Ping = 2,
    User = 3,
}

impl OobMsgType {
    pub fn name(self) -> &'static str {
        match self {
            OobMsgType::Ident => "IDENT",
            OobMsgType::Probe => "PROBE",
            OobMsgType::Ping => "PING",
            OobMsgType::User => "USER",
        }
    }

    pub fn name_of(raw: u32) -> String {
        match OobMsgType::try_from(raw) {
            Ok(t) => t.name().to_string(),
            Err(_) => raw.to_string(),
        }
    }
}
