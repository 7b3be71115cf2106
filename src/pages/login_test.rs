use super::*;

#[test]
fn next_target_decodes_the_query_value() {
    assert_eq!(next_target("?next=%2Flogistics%3Fpage%3D2"), "/logistics?page=2");
}

#[test]
fn next_target_defaults_to_home() {
    assert_eq!(next_target(""), "/");
    assert_eq!(next_target("?foo=bar"), "/");
}

#[test]
fn next_target_reads_next_among_other_params() {
    assert_eq!(next_target("?a=1&next=%2Fupload&b=2"), "/upload");
}

#[test]
fn next_target_ignores_offsite_targets() {
    assert_eq!(next_target("?next=https%3A%2F%2Fexample.com%2Fphish"), "/");
}

#[test]
fn next_target_ignores_protocol_relative_targets() {
    assert_eq!(next_target("?next=%2F%2Fexample.com"), "/");
}
