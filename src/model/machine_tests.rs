use super::*;
use chrono::Utc;

fn record(id: &str, os: &str, checks: &[(&str, &str)]) -> MachineRecord {
    MachineRecord {
        machine_id: id.to_string(),
        os: os.to_string(),
        last_check_in: 0,
        checks: checks
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

#[test]
fn test_not_encrypted_is_issue() {
    let m = record("a", "Linux", &[("disk_encryption", "Not Encrypted")]);
    assert!(m.has_configuration_issues());
}

#[test]
fn test_encrypted_with_percentage_is_clean() {
    let m = record(
        "a",
        "Linux",
        &[("disk_encryption", "Encrypted"), ("disk_usage", "42%")],
    );
    assert!(!m.has_configuration_issues());
}

#[test]
fn test_each_issue_value_is_detected() {
    for value in ISSUE_VALUES {
        let m = record("a", "Darwin", &[("x", value)]);
        assert!(m.has_configuration_issues(), "{value} should be an issue");
    }
}

#[test]
fn test_no_checks_is_clean() {
    let m = record("a", "Linux", &[]);
    assert!(!m.has_configuration_issues());
}

#[test]
fn test_unknown_value_is_not_a_machine_issue_but_tags_as_issue() {
    // "Needs Update" is what the Windows agent reports for os_updates
    let m = record("a", "Windows", &[("os_updates", "Needs Update")]);
    assert!(!m.has_configuration_issues());
    assert_eq!(CheckTag::of("Needs Update"), CheckTag::Issue);
}

#[test]
fn test_check_tag_values() {
    assert_eq!(CheckTag::of("Encrypted"), CheckTag::Ok);
    assert_eq!(CheckTag::of("Up to Date"), CheckTag::Ok);
    assert_eq!(CheckTag::of("Present"), CheckTag::Ok);
    assert_eq!(CheckTag::of("12.5%"), CheckTag::Ok);
    assert_eq!(CheckTag::of("Not Encrypted"), CheckTag::Issue);
    assert_eq!(CheckTag::of("Updates Available"), CheckTag::Issue);
    assert_eq!(CheckTag::of("Not Present"), CheckTag::Issue);
    assert_eq!(CheckTag::of("Compliant"), CheckTag::Issue);
    // Exact match only
    assert_eq!(CheckTag::of("encrypted"), CheckTag::Issue);
    assert_eq!(CheckTag::of(" Present"), CheckTag::Issue);
}

#[test]
fn test_short_id_truncates_to_eight() {
    let m = record("abcdefgh12345", "Linux", &[]);
    assert_eq!(m.short_id(), "abcdefgh");
}

#[test]
fn test_short_id_keeps_short_ids() {
    assert_eq!(record("abc", "Linux", &[]).short_id(), "abc");
    assert_eq!(record("", "Linux", &[]).short_id(), "");
    assert_eq!(record("abcdefgh", "Linux", &[]).short_id(), "abcdefgh");
}

#[test]
fn test_short_id_counts_characters_not_bytes() {
    let m = record("ідентифікатор", "Linux", &[]);
    assert_eq!(m.short_id(), "ідентифі");
}

#[test]
fn test_display_check_name() {
    assert_eq!(display_check_name("disk_encryption"), "DISK ENCRYPTION");
    assert_eq!(display_check_name("inactivity_sleep"), "INACTIVITY SLEEP");
    assert_eq!(display_check_name("antivirus"), "ANTIVIRUS");
    assert_eq!(display_check_name("a__b"), "A  B");
}

#[test]
fn test_format_check_in() {
    assert_eq!(format_check_in(0, &Utc), "1970-01-01 00:00:00");
    assert_eq!(format_check_in(1_700_000_000, &Utc), "2023-11-14 22:13:20");
}

#[test]
fn test_format_check_in_out_of_range() {
    assert_eq!(format_check_in(i64::MAX, &Utc), INVALID_DATE);
}

#[test]
fn test_deserialize_backend_payload() {
    let json = r#"{
        "machine_id": "5f0c8a2e-1b7d-4c52-9d3e-2a1f0b9c8d7e",
        "os": "Linux",
        "timestamp": 1700000000,
        "last_check_in": 1700000005,
        "checks": {
            "disk_encryption": "Encrypted",
            "os_updates": "Up to Date",
            "antivirus": "Not Present",
            "cpu_usage": "3.2%"
        }
    }"#;
    let m: MachineRecord = serde_json::from_str(json).unwrap();
    assert_eq!(m.os, "Linux");
    assert_eq!(m.last_check_in, 1_700_000_005);
    let keys: Vec<&str> = m.checks.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["disk_encryption", "os_updates", "antivirus", "cpu_usage"]
    );
    assert!(m.has_configuration_issues());
}
