// Snapshot serialization round trips, starting from a real dump.

mod common;

use felidump::card::{CardSnapshot, DumpSession};
use felidump::{Error, ServiceCode};

fn dumped_snapshot() -> CardSnapshot {
    let idm = common::sample_idm_bytes();
    let mut transport = common::octopus_transport();
    transport.push_framed(&common::presence_payload(&idm));
    transport.push_framed(&common::key_version_payload(&idm, &[1]));
    transport.push_framed(&common::read_payload(&idm, &common::purse_block(956)));
    DumpSession::new(transport).dump().unwrap()
}

#[test]
fn persisted_record_round_trip() -> anyhow::Result<()> {
    let snapshot = dumped_snapshot();
    let record = snapshot.to_record();

    assert_eq!(record.system_code, "32776"); // 0x8008
    assert_eq!(record.data.len(), 1);
    assert_eq!(record.data[0].code, "1170000");
    assert_eq!(record.data[0].value, hex::encode(common::purse_block(956)));
    assert_eq!(record.services.len(), 1);
    assert_eq!(record.services[0].code, "65535");
    assert_eq!(record.services[0].key_version, "1");

    let back = CardSnapshot::from_record(snapshot.tag_id(), snapshot.scanned_at(), &record)?;
    assert_eq!(back, snapshot);
    Ok(())
}

#[test]
fn transient_record_round_trip() -> anyhow::Result<()> {
    let snapshot = dumped_snapshot();
    let record = snapshot.to_transient();

    assert_eq!(record.tag_id, common::sample_idm_bytes().to_vec());
    assert_eq!(record.system_code, 0x8008);
    assert_eq!(record.blocks["1170000"], common::purse_block(956).to_vec());
    assert_eq!(record.key_versions["65535"], 1);

    let back = CardSnapshot::from_transient(&record)?;
    assert_eq!(back, snapshot);
    Ok(())
}

#[test]
fn transient_null_payload_is_invalid_argument() {
    let snapshot = dumped_snapshot();
    let mut record = snapshot.to_transient();
    record.blocks.insert("1170001".to_string(), Vec::new());

    match CardSnapshot::from_transient(&record) {
        Err(Error::InvalidArgument(_)) => {}
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn persisted_record_rejects_malformed_address() {
    let snapshot = dumped_snapshot();
    let mut record = snapshot.to_record();
    record.data[0].code = "not hex".to_string();

    match CardSnapshot::from_record(snapshot.tag_id(), 0, &record) {
        Err(Error::InvalidFormat(_)) => {}
        other => panic!("expected InvalidFormat, got {:?}", other),
    }
}

#[test]
fn key_version_map_uses_service_code_order() {
    let snapshot = dumped_snapshot();
    let mut record = snapshot.to_record();
    // Prepend an out-of-order service; decoding re-sorts by service code.
    record.services.insert(
        0,
        felidump::card::serialize::ServiceRecord {
            code: "279".to_string(), // 0x0117
            key_version: "4".to_string(),
        },
    );

    let back = CardSnapshot::from_record(snapshot.tag_id(), 0, &record).unwrap();
    let codes: Vec<u16> = back.key_versions().keys().map(|s| s.as_u16()).collect();
    assert_eq!(codes, vec![0x0117, 0xFFFF]);
    assert_eq!(back.key_version(ServiceCode::new(0x0117)), Some(4));
}
