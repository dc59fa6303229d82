use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use mpi_wire::DecodeError;
use mpi_wire::session::PacketContext;
use mpi_wire::sync::{SyncLink, SyncMatcher, SyncPacket, SyncRole, SyncTable, SyncTransaction};

fn at_millis(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_700_000_000_000 + ms)
        .single()
        .expect("valid timestamp")
}

fn sync_bytes(job_id: u32, process_id: u32) -> Vec<u8> {
    SyncPacket { job_id, process_id }.encode()
}

fn ctx(frame_id: u32, ms: i64) -> PacketContext {
    PacketContext::new(frame_id, at_millis(ms), 1024, 40000)
}

#[test]
fn sync_packet_is_big_endian() {
    let bytes = sync_bytes(7, 3);
    assert_eq!(bytes, vec![0, 0, 0, 7, 0, 0, 0, 3]);
    assert_eq!(
        SyncPacket::decode(&bytes),
        Ok(SyncPacket {
            job_id: 7,
            process_id: 3
        })
    );
    assert_eq!(
        SyncPacket::decode(&bytes[..5]),
        Err(DecodeError::Truncated {
            needed: 8,
            available: 5
        })
    );
}

#[test]
fn request_and_response_are_linked() {
    let mut table = SyncTable::new();

    let request = SyncMatcher::correlate(&mut table, &sync_bytes(7, 3), &ctx(10, 0))
        .expect("correlate failed");
    assert_eq!(request.role, SyncRole::Request);
    assert_eq!(request.link, None);
    assert_eq!(table.len(), 1);

    let response = SyncMatcher::correlate(&mut table, &sync_bytes(7, 9), &ctx(12, 250))
        .expect("correlate failed");
    assert_eq!(response.role, SyncRole::Response);
    assert_eq!(
        response.link,
        Some(SyncLink::ResponseTo {
            request_frame: 10,
            elapsed: TimeDelta::milliseconds(250)
        })
    );
    assert_eq!(
        response.summary(40000, 1024),
        "40000\u{2192}1024 [SYNC] Jobid=7 Vpid=9 (Response)"
    );

    let transaction = table.get(7, 10).expect("transaction missing");
    assert_eq!(transaction.response_frame_id, Some(12));
    assert!(transaction.is_answered());

    let other_job = SyncMatcher::correlate(&mut table, &sync_bytes(8, 3), &ctx(14, 300))
        .expect("correlate failed");
    assert_eq!(other_job.role, SyncRole::Response);
    assert_eq!(other_job.link, None);
    assert_eq!(other_job.notice, Some(DecodeError::TransactionMismatch));
    assert_eq!(table.len(), 1);
}

#[test]
fn second_pass_reproduces_roles_and_links() {
    let mut table = SyncTable::new();
    let packets = [(10, 7, 3, 0), (12, 7, 9, 250), (14, 8, 3, 300), (16, 5, 1, 400)];

    let first: Vec<_> = packets
        .iter()
        .map(|&(frame, job, process, ms)| {
            SyncMatcher::correlate(&mut table, &sync_bytes(job, process), &ctx(frame, ms))
                .expect("correlate failed")
        })
        .collect();

    let second: Vec<_> = packets
        .iter()
        .map(|&(frame, job, process, ms)| {
            SyncMatcher::correlate(
                &mut table,
                &sync_bytes(job, process),
                &ctx(frame, ms).revisited(),
            )
            .expect("correlate failed")
        })
        .collect();

    for (first, second) in first.iter().zip(&second) {
        assert_eq!(first.role, second.role);
    }

    // The request learns about its response on the second pass
    assert_eq!(
        second[0].link,
        Some(SyncLink::ResponseIn { response_frame: 12 })
    );
    assert_eq!(second[1].link, first[1].link);
    assert_eq!(second[2].link, None);
    assert_eq!(second[3].link, None);
    assert_eq!(second[3].notice, None);
    assert_eq!(table.len(), 1);
}

#[test]
fn only_the_first_response_is_recorded() {
    let mut table = SyncTable::new();

    for (frame, process, ms) in [(1, 3, 0), (2, 4, 10), (3, 5, 20)] {
        SyncMatcher::correlate(&mut table, &sync_bytes(7, process), &ctx(frame, ms))
            .expect("correlate failed");
    }

    assert_eq!(table.get(7, 1).and_then(|t| t.response_frame_id), Some(2));
}

#[test]
fn repeated_request_keeps_its_role() {
    let mut table = SyncTable::new();

    SyncMatcher::correlate(&mut table, &sync_bytes(7, 3), &ctx(1, 0)).expect("correlate failed");
    let repeat = SyncMatcher::correlate(&mut table, &sync_bytes(7, 3), &ctx(2, 5))
        .expect("correlate failed");
    assert_eq!(repeat.role, SyncRole::Request);

    let replayed = SyncMatcher::correlate(&mut table, &sync_bytes(7, 3), &ctx(2, 5).revisited())
        .expect("correlate failed");
    assert_eq!(replayed.role, SyncRole::Request);
    assert_eq!(table.get(7, 1).and_then(|t| t.response_frame_id), None);
}

#[test]
fn table_lookup_picks_latest_transaction_of_the_job() {
    let mut table = SyncTable::new();
    table.insert(SyncTransaction::new(7, 1, 10, at_millis(0)));
    table.insert(SyncTransaction::new(7, 1, 20, at_millis(100)));
    table.insert(SyncTransaction::new(9, 1, 15, at_millis(50)));

    let found = table.lookup(7, 25).expect("lookup failed").expect("missing");
    assert_eq!(found.request_frame_id, 20);

    let found = table.lookup(7, 12).expect("lookup failed").expect("missing");
    assert_eq!(found.request_frame_id, 10);

    assert!(table.lookup(7, 5).expect("lookup failed").is_none());
    assert_eq!(table.lookup(8, 30).err(), Some(DecodeError::TransactionMismatch));
    assert_eq!(table.iter().count(), 3);
}
