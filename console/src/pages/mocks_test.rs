use super::*;

#[test]
fn row_with_id_links_to_editor() {
    let mock = Mock { id: Some("m-1".to_owned()), ..Mock::default() };
    assert_eq!(edit_href(&mock).as_deref(), Some("/mocks/m-1"));
}

#[test]
fn row_without_id_has_no_edit_link() {
    assert_eq!(edit_href(&Mock::default()), None);
    let blank = Mock { id: Some(String::new()), ..Mock::default() };
    assert_eq!(edit_href(&blank), None);
}
