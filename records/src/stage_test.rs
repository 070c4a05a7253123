use super::*;

#[test]
fn new_selection_has_nothing_checked() {
    let sel = CodeSelection::t_stage();
    assert!(!sel.any());
    assert!(sel.selected().is_empty());
    assert_eq!(sel.codes().len(), 15);
}

#[test]
fn set_rejects_unknown_code() {
    let mut sel = CodeSelection::n_stage();
    assert!(!sel.set("N9", true));
    assert!(!sel.any());
}

#[test]
fn joined_follows_code_set_order() {
    let mut sel = CodeSelection::t_stage();
    sel.set("T3", true);
    sel.set("T1a", true);
    assert_eq!(sel.joined(), "T1a, T3");
}

#[test]
fn replace_from_is_case_insensitive_and_clears_others() {
    let mut sel = CodeSelection::t_stage();
    sel.set("T4", true);
    let unmatched = sel.replace_from("t1A ,T3");
    assert!(unmatched.is_empty());
    assert_eq!(sel.selected(), vec!["T1a", "T3"]);
    assert!(!sel.is_checked("T4"));
}

#[test]
fn replace_from_reports_unmatched_tokens() {
    let mut sel = CodeSelection::locations();
    let unmatched = sel.replace_from("RUL, hilum, ");
    assert_eq!(unmatched, vec!["hilum".to_owned()]);
    assert!(sel.is_checked("RUL"));
}

#[test]
fn clear_unticks_everything() {
    let mut sel = CodeSelection::m_stage();
    sel.set("M1c2", true);
    sel.clear();
    assert!(!sel.any());
}

#[test]
fn split_codes_drops_empty_tokens() {
    assert_eq!(split_codes(" , N1,,N2 "), vec!["N1".to_owned(), "N2".to_owned()]);
    assert!(split_codes("").is_empty());
}
