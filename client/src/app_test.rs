use super::*;

#[test]
fn route_paths_are_flat() {
    assert_eq!(AppRoute::Root.path(), "/");
    assert_eq!(AppRoute::Home.path(), "/home");
    assert_eq!(AppRoute::Find.path(), "/find");
    assert_eq!(AppRoute::Report.path(), "/report");
    assert_eq!(AppRoute::Benign.path(), "/benign");
    assert_eq!(AppRoute::Response.path(), "/response");
}

#[test]
fn route_paths_are_distinct() {
    let all = [
        AppRoute::Root,
        AppRoute::Home,
        AppRoute::Find,
        AppRoute::Report,
        AppRoute::Benign,
        AppRoute::Response,
    ];
    let mut paths: Vec<_> = all.iter().map(|r| r.path()).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), all.len());
}
