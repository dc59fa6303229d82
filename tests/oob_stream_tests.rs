use mpi_wire::DecodeError;
use mpi_wire::oob::{
    ChannelDirection, OobBody, OobBodyLayout, OobChannel, OobFrameHeader, OobMessage, OobPacket,
    OobSegment, OobStreamDecoder, RmlTag,
};
use mpi_wire::wire::{WireReader, WireWriter};
use rand::Rng;
use rand::seq::SliceRandom;

fn frame_header(rml_tag: RmlTag, byte_length: u32) -> OobFrameHeader {
    OobFrameHeader {
        origin_job_id: 1,
        origin_process_id: 0,
        dst_job_id: 1,
        dst_process_id: 2,
        msg_type: 3,
        rml_tag: rml_tag.into(),
        byte_length,
    }
}

fn frame(rml_tag: RmlTag, body: &[u8]) -> Vec<u8> {
    let mut bytes = frame_header(rml_tag, body.len() as u32).encode();
    bytes.extend_from_slice(body);
    bytes
}

#[test]
fn frame_header_is_network_order() {
    let header = frame_header(RmlTag::Sync, 100);
    let bytes = header.encode();

    assert_eq!(bytes.len(), 28);
    assert_eq!(&bytes[20..24], &[0, 0, 0, 20]);
    assert_eq!(&bytes[24..28], &[0, 0, 0, 100]);

    let decoded = OobFrameHeader::decode(&mut WireReader::network(&bytes)).expect("decode failed");
    assert_eq!(decoded, header);
    assert_eq!(
        decoded.to_string(),
        "Header: Jobid-Origin=1 Vpid-Origin=0 Jobid-Dst=1 Vpid-Dst=2 Type=USER Tag=SYNC Length=100"
    );
}

#[test]
fn whole_frame_in_one_packet() {
    let body = WireWriter::network().u32(1).u8(7).finish();
    let packet = frame(RmlTag::Xcast, &body);

    let mut decoder = OobStreamDecoder::new();
    let decoded = decoder
        .decode(&packet, 1, ChannelDirection::Channel1, true)
        .expect("decode failed");

    assert_eq!(decoded.bytes_consumed, 33);
    assert_eq!(decoded.segments.len(), 2);
    assert_eq!(decoded.headers().count(), 1);

    let message = decoded.messages().next().expect("message missing");
    assert_eq!(message.range, 28..33);
    assert_eq!(
        message.body,
        OobBody::Xcast {
            layout: OobBodyLayout::Compact,
            daemon_command: 7
        }
    );
    assert_eq!(message.opaque_len(), 0);

    assert!(
        decoded
            .summary(40001, 40000)
            .ends_with("Tag=XCAST Length=5 Message: RML-Tag=XCAST CMD=Exit CMD")
    );
    assert!(!decoder.channel(ChannelDirection::Channel1).is_mid_message());
}

#[test]
fn split_message_carries_remaining_bytes() {
    let mut decoder = OobStreamDecoder::new();
    let direction = ChannelDirection::from_ports(50000, 40000);
    assert_eq!(direction, ChannelDirection::Channel1);

    let header = frame_header(RmlTag::Daemon, 100).encode();
    let decoded = decoder.decode(&header, 1, direction, true).expect("decode failed");
    assert!(matches!(decoded.segments[..], [OobSegment::Header { .. }]));
    assert_eq!(decoder.channel(direction).bytes_remaining, 100);

    let first = decoder
        .decode(&[0xab; 40], 2, direction, true)
        .expect("decode failed");
    assert_eq!(first.bytes_consumed, 40);
    assert_eq!(
        first.segments,
        vec![OobSegment::MessagePart {
            rml_tag: 1,
            range: 0..40,
            bytes_remaining: 60
        }]
    );
    assert_eq!(decoder.channel(direction).bytes_remaining, 60);
    assert_eq!(decoder.channel(direction).rml_tag, 1);

    let second = decoder
        .decode(&[0xcd; 60], 3, direction, true)
        .expect("decode failed");
    assert_eq!(second.bytes_consumed, 60);
    assert_eq!(
        second.segments,
        vec![OobSegment::MessagePart {
            rml_tag: 1,
            range: 0..60,
            bytes_remaining: 0
        }]
    );
    assert_eq!(decoder.channel(direction).bytes_remaining, 0);
    assert_eq!(second.summary(50000, 40000), "50000\u{2192}40000 [OOB] Message: RML-Tag=Daemon Length=60");
}

#[test]
fn header_split_across_packets_is_completed() {
    let mut stream = frame(RmlTag::Sync, &[1, 2, 3, 4]);
    stream.extend(frame(RmlTag::Abort, &[9; 6]));

    // Second header is cut after 10 bytes
    let (first, second) = stream.split_at(32 + 10);

    let mut decoder = OobStreamDecoder::new();
    let direction = ChannelDirection::Channel2;

    let decoded = decoder.decode(first, 1, direction, true).expect("decode failed");
    assert_eq!(decoded.headers().count(), 1);
    assert_eq!(decoded.messages().count(), 1);
    assert_eq!(
        decoded.segments.last(),
        Some(&OobSegment::PartialHeader { range: 32..42 })
    );
    assert!(decoder.channel(direction).has_partial_header());
    assert_eq!(decoder.channel(direction).header_bytes_needed(), 18);

    let decoded = decoder.decode(second, 2, direction, true).expect("decode failed");
    match &decoded.segments[..] {
        [OobSegment::Header { range, header }, OobSegment::Message(message)] => {
            assert_eq!(*range, 0..18);
            assert_eq!(header.rml_tag, u32::from(RmlTag::Abort));
            assert_eq!(header.byte_length, 6);
            assert_eq!(message.range, 18..24);
            assert_eq!(message.body, OobBody::Opaque);
            assert_eq!(message.opaque_len(), 6);
        }
        other => panic!("unexpected segments {:?}", other),
    }
    assert!(!decoder.channel(direction).has_partial_header());
}

#[test]
fn directions_are_reassembled_independently() {
    let mut decoder = OobStreamDecoder::new();

    let header = frame_header(RmlTag::Tool, 50).encode();
    decoder
        .decode(&header, 1, ChannelDirection::Channel1, true)
        .expect("decode failed");

    let reply = frame(RmlTag::Tool, &[0; 3]);
    let decoded = decoder
        .decode(&reply, 2, ChannelDirection::Channel2, true)
        .expect("decode failed");
    assert_eq!(decoded.messages().count(), 1);

    assert_eq!(decoder.channel(ChannelDirection::Channel1).bytes_remaining, 50);
    assert_eq!(decoder.channel(ChannelDirection::Channel2).bytes_remaining, 0);
    assert_eq!(
        ChannelDirection::from_ports(40000, 40000),
        ChannelDirection::Channel2
    );
}

#[test]
fn revisiting_a_packet_restores_its_channel_state() {
    let mut decoder = OobStreamDecoder::new();
    let direction = ChannelDirection::Channel1;

    decoder
        .decode(&frame_header(RmlTag::Daemon, 100).encode(), 1, direction, true)
        .expect("decode failed");
    let first = decoder
        .decode(&[0; 40], 2, direction, true)
        .expect("decode failed");
    decoder
        .decode(&[0; 60], 3, direction, true)
        .expect("decode failed");

    assert_eq!(decoder.snapshot_count(), 3);
    assert_eq!(decoder.snapshot(2).map(|s| s.bytes_remaining), Some(100));

    let replayed = decoder
        .decode(&[0; 40], 2, direction, false)
        .expect("decode failed");
    assert_eq!(replayed, first);
    assert_eq!(decoder.channel(direction).bytes_remaining, 0);
}

#[test]
fn revisit_leaves_the_live_stream_where_it_was() {
    let mut decoder = OobStreamDecoder::new();
    let direction = ChannelDirection::Channel2;

    let stream = frame(RmlTag::Tool, &[7; 40]);
    decoder
        .decode(&stream[..48], 0, direction, true)
        .expect("decode failed");
    decoder
        .decode(&stream[48..], 1, direction, true)
        .expect("decode failed");

    let replayed = decoder
        .decode(&stream[..48], 0, direction, false)
        .expect("decode failed");
    assert_eq!(replayed.headers().count(), 1);
    assert!(!decoder.channel(direction).is_mid_message());

    let next = frame(RmlTag::Sync, &[1; 12]);
    let decoded = decoder
        .decode(&next, 2, direction, true)
        .expect("decode failed");
    assert_eq!(decoded.headers().count(), 1);
    assert_eq!(decoded.messages().count(), 1);
    assert_eq!(decoded.segments.len(), 2);
}

#[test]
fn revisit_without_snapshot_is_rejected_like_its_first_visit() {
    let mut decoder = OobStreamDecoder::new();
    let packet = frame(RmlTag::Sync, &[0; 4]);

    assert_eq!(
        decoder.decode(&packet[..10], 9, ChannelDirection::Channel1, false),
        Err(DecodeError::Truncated {
            needed: 28,
            available: 10
        })
    );
    assert_eq!(decoder.snapshot_count(), 0);
    assert_eq!(decoder.channel(ChannelDirection::Channel1), &OobChannel::default());
}

fn segment_stream(rng: &mut impl Rng, stream: &[u8]) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();
    let mut cursor = 0;
    while cursor < stream.len() {
        let len = rng.random_range(1..=60).min(stream.len() - cursor);
        chunks.push(stream[cursor..cursor + len].to_vec());
        cursor += len;
    }
    chunks
}

#[test]
fn replay_is_idempotent_over_random_segmentation() {
    let mut rng = rand::rng();
    let tags = [RmlTag::Sync, RmlTag::Abort, RmlTag::Xcast, RmlTag::Heartbeat];

    for _ in 0..50 {
        let mut packets: Vec<(ChannelDirection, Vec<u8>)> = Vec::new();
        let mut frame_counts = [0usize; 2];

        for (index, direction) in [ChannelDirection::Channel1, ChannelDirection::Channel2]
            .into_iter()
            .enumerate()
        {
            let mut stream = Vec::new();
            let frames = rng.random_range(1..8);
            for _ in 0..frames {
                let tag = tags[rng.random_range(0..tags.len())];
                let body: Vec<u8> = (0..rng.random_range(0..80)).map(|_| rng.random()).collect();
                stream.extend(frame(tag, &body));
            }
            frame_counts[index] = frames;

            for chunk in segment_stream(&mut rng, &stream) {
                packets.push((direction, chunk));
            }
        }

        // Interleave the two directions while keeping each one in order
        let mut order: Vec<ChannelDirection> = packets.iter().map(|(d, _)| *d).collect();
        order.shuffle(&mut rng);
        let mut ones = packets
            .iter()
            .filter(|(d, _)| *d == ChannelDirection::Channel1);
        let mut twos = packets
            .iter()
            .filter(|(d, _)| *d == ChannelDirection::Channel2);
        let capture: Vec<&(ChannelDirection, Vec<u8>)> = order
            .iter()
            .filter_map(|d| match d {
                ChannelDirection::Channel1 => ones.next(),
                ChannelDirection::Channel2 => twos.next(),
            })
            .collect();

        let mut decoder = OobStreamDecoder::new();

        let first_pass: Vec<OobPacket> = capture
            .iter()
            .enumerate()
            .map(|(frame_id, (direction, bytes))| {
                decoder
                    .decode(bytes, frame_id as u32, *direction, true)
                    .expect("decode failed")
            })
            .collect();

        for (index, direction) in [ChannelDirection::Channel1, ChannelDirection::Channel2]
            .into_iter()
            .enumerate()
        {
            let headers: usize = first_pass
                .iter()
                .filter(|packet| packet.direction == direction)
                .map(|packet| packet.headers().count())
                .sum();
            assert_eq!(headers, frame_counts[index]);
            assert!(!decoder.channel(direction).is_mid_message());
            assert!(!decoder.channel(direction).has_partial_header());
        }

        let second_pass: Vec<OobPacket> = capture
            .iter()
            .enumerate()
            .map(|(frame_id, (direction, bytes))| {
                decoder
                    .decode(bytes, frame_id as u32, *direction, false)
                    .expect("decode failed")
            })
            .collect();
        assert_eq!(first_pass, second_pass);

        // Jumping around the capture gives the same answers too
        let mut jumps: Vec<usize> = (0..capture.len()).collect();
        jumps.shuffle(&mut rng);
        for frame_id in jumps {
            let (direction, bytes) = capture[frame_id];
            let replayed = decoder
                .decode(bytes, frame_id as u32, *direction, false)
                .expect("decode failed");
            assert_eq!(replayed, first_pass[frame_id]);
        }
    }
}

#[test]
fn invalid_tag_carries_version_handshake() {
    let body = WireWriter::network().stringz("3.0.0").stringz("secret!").finish();
    assert_eq!(body.len(), 14);

    let message = OobMessage::decode(RmlTag::Invalid.into(), &body, 28);
    assert_eq!(
        message.body,
        OobBody::Invalid {
            version: "3.0.0".to_string(),
            credential: "secret!".to_string()
        }
    );
    assert_eq!(message.opaque_len(), 0);

    let (body, consumed) = OobBody::decode(RmlTag::Invalid.into(), &[0u8; 15]);
    assert_eq!(body, OobBody::Opaque);
    assert_eq!(consumed, 0);
}

#[test]
fn iof_bodies_in_both_layouts() {
    let mut debug = vec![0u8; 34];
    debug[0] = 9;
    debug[5] = 50;
    debug[7] = 2;
    debug[15..19].copy_from_slice(&11u32.to_be_bytes());
    debug[20..24].copy_from_slice(&12u32.to_be_bytes());

    let message = OobMessage::decode(RmlTag::IofHnp.into(), &debug, 0);
    assert_eq!(
        message.body,
        OobBody::Iof {
            layout: OobBodyLayout::FullyDescribed { orte_type: 50 },
            iof_type: 2,
            job_id: 11,
            process_id: 12
        }
    );
    assert_eq!(message.opaque, 30..34);
    assert_eq!(
        message.to_string(),
        "Message: RML-Tag=IOF HNP Type=STDOUT Jobid=11 Vpid=12 (Debug=ORTE_IOF_TAG) Length=4"
    );

    let compact = WireWriter::network()
        .zeros(4)
        .u8(4)
        .zeros(4)
        .u32(11)
        .u32(12)
        .zeros(4)
        .finish();
    let (body, consumed) = OobBody::decode(RmlTag::IofProxy.into(), &compact);
    assert_eq!(consumed, 21);
    assert_eq!(body.layout(), Some(OobBodyLayout::Compact));
    assert_eq!(body.to_string(), "Type=STDERR Jobid=11 Vpid=12");

    // A debug body below its minimum length is not read as compact
    let (body, _) = OobBody::decode(RmlTag::IofHnp.into(), &debug[..25]);
    assert_eq!(body, OobBody::Opaque);
}

#[test]
fn orted_callback_bodies_in_both_layouts() {
    let compact = WireWriter::network()
        .u32(1)
        .u32(5)
        .u32(6)
        .zeros(8)
        .stringz("tcp://10.0.0.1:5000")
        .zeros(8)
        .stringz("node01")
        .zeros(8)
        .u32(1234)
        .bytes(&[0xee; 10])
        .finish();

    let message = OobMessage::decode(RmlTag::OrtedCallback.into(), &compact, 0);
    assert_eq!(
        message.body,
        OobBody::OrtedCallback {
            layout: OobBodyLayout::Compact,
            job_id: 5,
            process_id: 6,
            uri: "tcp://10.0.0.1:5000".to_string(),
            node_name: "node01".to_string(),
            blob_len: 1234
        }
    );
    assert_eq!(message.opaque_len(), 10);

    let debug = WireWriter::network()
        .u8(9)
        .u32(1)
        .u8(32)
        .u8(14)
        .u32(5)
        .u8(14)
        .u32(6)
        .zeros(10)
        .stringz("tcp://10.0.0.1:5000")
        .zeros(10)
        .stringz("node01")
        .zeros(14)
        .u32(1234)
        .finish();

    let (body, consumed) = OobBody::decode(RmlTag::OrtedCallback.into(), &debug);
    assert_eq!(consumed, debug.len());
    match body {
        OobBody::OrtedCallback {
            layout,
            job_id,
            process_id,
            uri,
            node_name,
            blob_len,
        } => {
            assert_eq!(layout, OobBodyLayout::FullyDescribed { orte_type: 32 });
            assert_eq!((job_id, process_id, blob_len), (5, 6, 1234));
            assert_eq!(uri, "tcp://10.0.0.1:5000");
            assert_eq!(node_name, "node01");
        }
        other => panic!("unexpected body {:?}", other),
    }

    // A name count other than one is left alone
    let mut two_names = compact.clone();
    two_names[3] = 2;
    let (body, _) = OobBody::decode(RmlTag::OrtedCallback.into(), &two_names);
    assert_eq!(body, OobBody::Opaque);

    // A uri without its terminator is left alone
    let unterminated = WireWriter::network()
        .u32(1)
        .zeros(16)
        .bytes(&[b'x'; 30])
        .finish();
    let (body, consumed) = OobBody::decode(RmlTag::OrtedCallback.into(), &unterminated);
    assert_eq!(body, OobBody::Opaque);
    assert_eq!(consumed, 0);
}

#[test]
fn xcast_abort_in_debug_layout() {
    let body = [0x09, 0x00, 0x00, 0x00, 0x01, 0x31, 0x0c, 0x07];

    let message = OobMessage::decode(RmlTag::Xcast.into(), &body, 28);
    assert_eq!(
        message.body,
        OobBody::Xcast {
            layout: OobBodyLayout::FullyDescribed { orte_type: 49 },
            daemon_command: 7
        }
    );
    assert_eq!(message.opaque_len(), 0);
    assert_eq!(
        message.to_string(),
        "Message: RML-Tag=XCAST CMD=Exit CMD (Debug=ORTE_DAEMON_CMD)"
    );
}

#[test]
fn unknown_tags_leave_body_opaque() {
    let message = OobMessage::decode(300, &[1, 2, 3], 0);
    assert_eq!(message.body, OobBody::Opaque);
    assert_eq!(message.to_string(), "Message: RML-Tag=300 Length=3");
    assert_eq!(RmlTag::name_of(100), "MAX Tag");
    assert_eq!(RmlTag::name_of(16), "16");
}
