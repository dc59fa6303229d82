use mpi_wire::btl::BtlKind;
use mpi_wire::classifier::{PacketClass, PacketClassifier, PortSet, PortSetParseError};

#[test]
fn classification_order() {
    let classifier = PacketClassifier::default();

    // Both ports high: OOB, whatever the contents
    assert_eq!(classifier.classify(&[65; 8], 40000, 50000), PacketClass::Oob);
    assert_eq!(classifier.classify(&[0; 3], 32768, 65535), PacketClass::Oob);

    assert_eq!(classifier.classify(&[0; 8], 1024, 40000), PacketClass::Sync);
    assert_eq!(classifier.classify(&[65; 8], 1024, 40000), PacketClass::Sync);

    assert_eq!(
        classifier.classify(&[65; 9], 1024, 40000),
        PacketClass::NotRecognized
    );
    assert_eq!(
        classifier.classify(&[64; 20], 1024, 40000),
        PacketClass::NotRecognized
    );
    assert_eq!(
        classifier.classify(&[78; 20], 1024, 40000),
        PacketClass::NotRecognized
    );

    assert_eq!(
        classifier.classify(&[65; 10], 1024, 40000),
        PacketClass::Btl(BtlKind::Match)
    );
    assert_eq!(
        classifier.classify(&[77; 30], 40000, 1024),
        PacketClass::Btl(BtlKind::RecvErrorNotify)
    );
}

#[test]
fn ports_outside_the_set_are_ignored() {
    let classifier = PacketClassifier::default();
    assert_eq!(
        classifier.classify(&[0; 8], 80, 443),
        PacketClass::NotRecognized
    );

    let classifier = PacketClassifier::new("80,443".parse().expect("parse failed"));
    assert_eq!(classifier.classify(&[0; 8], 80, 5000), PacketClass::Sync);
    assert_eq!(
        classifier.classify(&[0; 8], 5000, 6000),
        PacketClass::NotRecognized
    );
    assert!(!PacketClass::NotRecognized.is_recognized());
    assert_eq!(classifier.ports().to_string(), "80,443");
}

#[test]
fn empty_port_set_recognizes_nothing() {
    let classifier = PacketClassifier::new(PortSet::empty());
    assert!(classifier.ports().is_empty());

    for (buf, src, dst) in [
        (vec![0; 8], 1024, 40000),
        (vec![65; 20], 2000, 3000),
        (vec![0; 40], 40000, 50000),
    ] {
        let class = classifier.classify(&buf, src, dst);
        assert_eq!(class, PacketClass::NotRecognized);
        assert!(!class.is_recognized());
    }
}

#[test]
fn port_set_parsing() {
    let ports: PortSet = "80, 443,8000-8100".parse().expect("parse failed");
    assert!(ports.contains(80));
    assert!(ports.contains(443));
    assert!(ports.contains(8050));
    assert!(!ports.contains(8101));
    assert_eq!(ports.to_string(), "80,443,8000-8100");
    assert_eq!(ports.ranges().len(), 3);

    assert_eq!(PortSet::default().to_string(), "1024-65535");
    assert!(!PortSet::default().contains(1023));

    let empty: PortSet = "".parse().expect("parse failed");
    assert!(empty.is_empty());
    assert!(!empty.contains(1024));

    assert_eq!(
        "80,http".parse::<PortSet>(),
        Err(PortSetParseError::InvalidPort("http".to_string()))
    );
    assert_eq!(
        "9000-8000".parse::<PortSet>(),
        Err(PortSetParseError::InvertedRange {
            start: 9000,
            end: 8000
        })
    );
    assert_eq!(
        "70000".parse::<PortSet>(),
        Err(PortSetParseError::InvalidPort("70000".to_string()))
    );
}
