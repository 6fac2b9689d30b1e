use super::*;

#[test]
fn starts_empty_with_offline_mode() {
    let draft = EventDraft::default();
    assert_eq!(draft.get(EventField::Mode), "offline");
    assert_eq!(draft.mode(), Some(EventMode::Offline));
    assert_eq!(draft.iter().count(), EventField::ALL.len());
    assert!(draft
        .iter()
        .filter(|(field, _)| *field != EventField::Mode)
        .all(|(_, value)| value.is_empty()));
}

#[test]
fn last_write_wins() {
    let mut draft = EventDraft::default();
    draft.set(EventField::Title, "R");
    draft.set(EventField::Title, "Re");
    draft.set(EventField::Title, "React Summit 2026");
    draft.get_mut(EventField::Venue).push_str("Hall A");

    assert_eq!(draft.get(EventField::Title), "React Summit 2026");
    assert_eq!(draft.get(EventField::Venue), "Hall A");
}

#[test]
fn unknown_mode_text_is_kept_but_not_parsed() {
    let mut draft = EventDraft::default();
    draft.set(EventField::Mode, "in-person");
    assert_eq!(draft.get(EventField::Mode), "in-person");
    assert_eq!(draft.mode(), None);

    draft.set_mode(EventMode::Hybrid);
    assert_eq!(draft.get(EventField::Mode), "hybrid");
}

#[test]
fn splits_and_trims_comma_lists() {
    assert_eq!(split_list("a, b ,c"), ["a", "b", "c"]);
    assert_eq!(split_list(" , ,x,, y ,"), ["x", "y"]);
    assert!(split_list("   ").is_empty());
}

#[test]
fn encodes_list_fields_as_json_arrays() {
    let mut draft = EventDraft::default();
    draft.set(EventField::Tags, "a, b ,c");
    draft.set(EventField::Agenda, "x,y");
    draft.set(EventField::Description, "  keeps, commas  ");

    assert_eq!(draft.wire_value(EventField::Tags), r#"["a","b","c"]"#);
    assert_eq!(draft.wire_value(EventField::Agenda), r#"["x","y"]"#);
    assert_eq!(
        draft.wire_value(EventField::Description),
        "  keeps, commas  "
    );
    assert_eq!(encode_list(""), "[]");
    assert_eq!(encode_list(r#"say "hi", ok"#), r#"["say \"hi\"","ok"]"#);
}

#[test]
fn reports_first_empty_field_in_wire_order() {
    let mut draft = EventDraft::default();
    assert_eq!(draft.missing_required(), Some(EventField::Title));

    for field in EventField::ALL {
        draft.set(field, "filled");
    }
    draft.set(EventField::Tags, "");
    draft.set(EventField::Venue, "");
    assert_eq!(draft.missing_required(), Some(EventField::Venue));

    draft.set(EventField::Venue, "Hall A");
    assert_eq!(draft.missing_required(), Some(EventField::Tags));

    draft.set(EventField::Tags, " , ");
    assert_eq!(draft.missing_required(), None);
    assert_eq!(draft.wire_value(EventField::Tags), "[]");
}
