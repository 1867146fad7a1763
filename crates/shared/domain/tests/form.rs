use fam_domain::form::FormSnapshot;

#[test]
fn snapshot_trims_fields() {
    let snapshot = FormSnapshot::new("  Mari ", "\tmari@example.ee\n", " Tere! ");
    assert_eq!(snapshot.name, "Mari");
    assert_eq!(snapshot.email, "mari@example.ee");
    assert_eq!(snapshot.message, "Tere!");
    assert!(snapshot.is_complete());
}

#[test]
fn whitespace_only_field_is_incomplete() {
    assert!(!FormSnapshot::new("Mari", "   ", "Tere").is_complete());
    assert!(!FormSnapshot::new("", "a@b.c", "Tere").is_complete());
    assert!(!FormSnapshot::new("Mari", "a@b.c", "").is_complete());
}
