use super::*;

#[test]
fn defaults_lean_toward_actionable_notifications() {
    let draft = SettingsDraft::default();
    assert_eq!(draft.display_name, "Nimbus User");
    assert_eq!(draft.email, "user@example.com");
    assert!(draft.deploy_alerts);
    assert!(!draft.weekly_digest);
    assert!(draft.incident_pages);
}

// ==========================================================================
// Display name validation
// ==========================================================================

#[test]
fn display_name_is_trimmed_but_keeps_interior_spaces() {
    assert_eq!(normalize_display_name("  Ada Lovelace  "), Ok("Ada Lovelace".to_owned()));
}

#[test]
fn blank_display_names_are_rejected() {
    assert!(normalize_display_name("").is_err());
    assert!(normalize_display_name("   ").is_err());
    assert!(normalize_display_name("\t\n").is_err());
}

#[test]
fn display_name_length_is_bounded_after_trimming() {
    let exactly_fifty = "x".repeat(50);
    assert_eq!(normalize_display_name(&exactly_fifty), Ok(exactly_fifty.clone()));

    let padded = format!("  {exactly_fifty}  ");
    assert_eq!(normalize_display_name(&padded), Ok(exactly_fifty));

    let too_long = "x".repeat(51);
    assert!(normalize_display_name(&too_long).is_err());
}

// ==========================================================================
// Email shape check
// ==========================================================================

#[test]
fn plausible_addresses_pass() {
    assert!(looks_like_email("user@example.com"));
    assert!(looks_like_email("  user@example.com  "));
    assert!(looks_like_email("a@b"));
}

#[test]
fn addresses_missing_a_side_fail() {
    assert!(!looks_like_email(""));
    assert!(!looks_like_email("user"));
    assert!(!looks_like_email("@example.com"));
    assert!(!looks_like_email("user@"));
    assert!(!looks_like_email("user@@example.com"));
}

// ==========================================================================
// Draft round-trip
// ==========================================================================

#[test]
fn a_saved_draft_reads_back_unchanged() {
    let draft = SettingsDraft {
        display_name: "Ada".to_owned(),
        email: "ada@nimbus.dev".to_owned(),
        deploy_alerts: false,
        weekly_digest: true,
        incident_pages: false,
    };
    let raw = serde_json::to_string(&draft).unwrap();
    let restored: SettingsDraft = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, draft);
}

#[test]
fn older_drafts_missing_fields_fill_with_defaults() {
    let restored: SettingsDraft = serde_json::from_str(r#"{"display_name":"Ada"}"#).unwrap();
    assert_eq!(restored.display_name, "Ada");
    assert_eq!(restored.email, SettingsDraft::default().email);
    assert!(restored.deploy_alerts);
    assert!(!restored.weekly_digest);
}
