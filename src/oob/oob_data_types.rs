use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Type tags of the OPAL packing layer, written in front of packed values
/// when a buffer is fully described.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum OpalDataType {
    Undef = 0,
    Byte = 1,
    Bool = 2,
    String = 3,
    Size = 4,
    Pid = 5,
    Int = 6,
    Int8 = 7,
    Int16 = 8,
    Int32 = 9,
    Int64 = 10,
    Uint = 11,
    Uint8 = 12,
    Uint16 = 13,
    Uint32 = 14,
    Uint64 = 15,
    Float = 16,
    Timeval = 17,
    ByteObject = 18,
    DataType = 19,
    Null = 20,
    Pstat = 21,
    NodeStat = 22,
    HwlocTopo = 23,
    Value = 24,
    Buffer = 25,
    DssIdDynamic = 30,
}

impl OpalDataType {
    pub fn name(self) -> &'static str {
        match self {
            OpalDataType::Undef => "OPAL_UNDEF",
            OpalDataType::Byte => "OPAL_BYTE",
            OpalDataType::Bool => "OPAL_BOOL",
            OpalDataType::String => "OPAL_STRING",
            OpalDataType::Size => "OPAL_SIZE",
            OpalDataType::Pid => "OPAL_PID",
            OpalDataType::Int => "OPAL_INT",
            OpalDataType::Int8 => "OPAL_INT8",
            OpalDataType::Int16 => "OPAL_INT16",
            OpalDataType::Int32 => "OPAL_INT32",
            OpalDataType::Int64 => "OPAL_INT64",
            OpalDataType::Uint => "OPAL_UINT",
            OpalDataType::Uint8 => "OPAL_UINT8",
            OpalDataType::Uint16 => "OPAL_UINT16",
            OpalDataType::Uint32 => "OPAL_UINT32",
            OpalDataType::Uint64 => "OPAL_UINT64",
            OpalDataType::Float => "OPAL_FLOAT",
            OpalDataType::Timeval => "OPAL_TIMEVAL",
            OpalDataType::ByteObject => "OPAL_BYTE_OBJECT",
            OpalDataType::DataType => "OPAL_DATA_TYPE",
            OpalDataType::Null => "OPAL_NULL",
            OpalDataType::Pstat => "OPAL_PSTAT",
            OpalDataType::NodeStat => "OPAL_NODE_STAT",
            OpalDataType::HwlocTopo => "OPAL_HWLOC_TOPO",
            OpalDataType::Value => "OPAL_VALUE",
            OpalDataType::Buffer => "OPAL_BUFFER",
            OpalDataType::DssIdDynamic => "OPAL_DSS_ID_DYNAMIC",
        }
    }
}

/// Type tags of the ORTE packing layer.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum OrteDataType {
    StdCntr = 31,
    Name = 32,
    Vpid = 33,
    Jobid = 34,
    Undefined = 35,
    NodeState = 36,
    ProcState = 37,
    JobState = 38,
    ExitCode = 39,
    Value = 40,
    AppContext = 41,
    NodeDesc = 42,
    SlotDesc = 43,
    Job = 44,
    Node = 45,
    Proc = 46,
    JobMap = 47,
    RmlTag = 48,
    DaemonCmd = 49,
    IofTag = 50,
    DssIdDynamic = 80,
}

impl OrteDataType {
    pub fn name(self) -> &'static str {
        match self {
            OrteDataType::StdCntr => "ORTE_STD_CNTR",
            OrteDataType::Name => "ORTE_NAME",
            OrteDataType::Vpid => "ORTE_VPID",
            OrteDataType::Jobid => "ORTE_JOBID",
            OrteDataType::Undefined => "undefined",
            OrteDataType::NodeState => "ORTE_NODE_STATE",
            OrteDataType::ProcState => "ORTE_PROC_STATE",
            OrteDataType::JobState => "ORTE_JOB_STATE",
            OrteDataType::ExitCode => "ORTE_EXIT_CODE",
            OrteDataType::Value => "ORTE_VALUE",
            OrteDataType::AppContext => "ORTE_APP_CONTEXT",
            OrteDataType::NodeDesc => "ORTE_NODE_DESC",
            OrteDataType::SlotDesc => "ORTE_SLOT_DESC",
            OrteDataType::Job => "ORTE_JOB",
            OrteDataType::Node => "ORTE_NODE",
            OrteDataType::Proc => "ORTE_PROC",
            OrteDataType::JobMap => "ORTE_JOB_MAP",
            OrteDataType::RmlTag => "ORTE_RML_TAG",
            OrteDataType::DaemonCmd => "ORTE_DAEMON_CMD",
            OrteDataType::IofTag => "ORTE_IOF_TAG",
            OrteDataType::DssIdDynamic => "ORTE_DSS_ID_DYNAMIC",
        }
    }

    pub fn name_of(raw: u8) -> String {
        match OrteDataType::try_from(raw) {
            Ok(t) => t.name().to_string(),
            Err(_) => raw.to_string(),
        }
    }
}

/// Stream selector of an I/O forwarding message.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum IofType {
    Stdin = 0x01,
    Stdout = 0x02,
    Stderr = 0x04,
    Stddiag = 0x08,
    StdoutAll = 0x0e,
}

impl IofType {
    pub fn name(self) -> &'static str {
        match self {
            IofType::Stdin => "STDIN",
            IofType::Stdout => "STDOUT",
            IofType::Stderr => "STDERR",
            IofType::Stddiag => "STDDIAG",
            IofType::StdoutAll => "STDOUTALL",
        }
    }

    pub fn name_of(raw: u8) -> String {
        match IofType::try_from(raw) {
            Ok(t) => t.name().to_string(),
            Err(_) => raw.to_string(),
        }
    }
}

/// Command byte of a daemon broadcast (XCAST).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum DaemonCommand {
    ContactQuery = 1,
    KillLocalProcs = 2,
    SignalLocalProcs = 3,
    AddLocalProcs = 4,
    TreeSpawn = 5,
    Heartbeat = 6,
    Exit = 7,
    ProcessAndRelay = 9,
    MessageLocalProcs = 10,
    Null = 11,
    SyncByProc = 12,
    SyncWantNidmap = 13,
    ReportJobInfo = 14,
    ReportNodeInfo = 15,
    ReportProcInfo = 16,
    SpawnJob = 17,
    TerminateJob = 18,
    HaltVm = 19,
    Top = 22,
    NameReq = 23,
    Checkin = 24,
    ToolCheckin = 25,
    Process = 26,
    AbortProcsCalled = 28,
}

impl DaemonCommand {
    pub fn name(self) -> &'static str {
        match self {
            DaemonCommand::ContactQuery => "Contact Query CMD",
            DaemonCommand::KillLocalProcs => "Kill Local Procs",
            DaemonCommand::SignalLocalProcs => "Signal Local Procs",
            DaemonCommand::AddLocalProcs => "Add Local Procs",
            DaemonCommand::TreeSpawn => "Tree Spawn",
            DaemonCommand::Heartbeat => "Heartbeat CMD",
            DaemonCommand::Exit => "Exit CMD",
            DaemonCommand::ProcessAndRelay => "Process and Relay CMD",
            DaemonCommand::MessageLocalProcs => "Message Local Procs",
            DaemonCommand::Null => "Null CMD",
            DaemonCommand::SyncByProc => "SYNC by Proc",
            DaemonCommand::SyncWantNidmap => "SYNC Want NIDMAP",
            DaemonCommand::ReportJobInfo => "Report Job Info CMD",
            DaemonCommand::ReportNodeInfo => "Report Node Info CMD",
            DaemonCommand::ReportProcInfo => "Report Proc Info CMD",
            DaemonCommand::SpawnJob => "Spawn Job CMD",
            DaemonCommand::TerminateJob => "Terminate Job CMD",
            DaemonCommand::HaltVm => "Halt VM CMD",
            DaemonCommand::Top => "Top CMD",
            DaemonCommand::NameReq => "Name REQ CMD",
            DaemonCommand::Checkin => "Checkin CMD",
            DaemonCommand::ToolCheckin => "Tool Checkin CMD",
            DaemonCommand::Process => "Process CMD",
            DaemonCommand::AbortProcsCalled => "Abort Procs Called",
        }
    }

    pub fn name_of(raw: u8) -> String {
        match DaemonCommand::try_from(raw) {
            Ok(c) => c.name().to_string(),
            Err(_) => raw.to_string(),
        }
    }
}
