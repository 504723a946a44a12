use super::*;

#[test]
fn cells_follow_from_to_message_order() {
    let row = build_row(&Message::new("A", "B", "hi"));
    assert_eq!(row.cells(), &["A".to_owned(), "B".to_owned(), "hi".to_owned()]);
}

#[test]
fn empty_fields_stay_empty() {
    let row = build_row(&Message::new("", "B", ""));
    assert_eq!(row.cells()[0], "");
    assert_eq!(row.cells()[1], "B");
    assert_eq!(row.cells()[2], "");
}

#[test]
fn build_rows_keeps_message_order() {
    let messages = vec![Message::new("1", "a", "first"), Message::new("2", "b", "second")];
    let rows = build_rows(&messages);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells()[2], "first");
    assert_eq!(rows[1].cells()[2], "second");
}

#[test]
fn build_rows_of_nothing_is_empty() {
    assert!(build_rows(&[]).is_empty());
}
