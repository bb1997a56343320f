use super::*;
use evokit::prelude::ErrorKind;

fn create_index() -> AddressIndex {
    AddressIndex::new(vec!["4001 South 700 East".to_string(), " 1060 Dalton Ave S ".to_string()])
        .expect("cannot create index")
}

#[test]
fn can_lookup_both_directions() {
    let index = create_index();

    assert_eq!(index.location("1060 Dalton Ave S"), Ok(1));
    assert_eq!(index.location(" 4001 South 700 East"), Ok(0));
    assert_eq!(index.address(1), Ok("1060 Dalton Ave S"));
    assert_eq!(index.len(), 2);
}

#[test]
fn can_return_not_found_for_unknown_entries() {
    let index = create_index();

    assert_eq!(index.location("unknown").map_err(|err| err.kind()), Err(ErrorKind::NotFound));
    assert_eq!(index.address(2).map_err(|err| err.kind()), Err(ErrorKind::NotFound));
}

#[test]
fn can_reject_duplicate_addresses() {
    let result = AddressIndex::new(vec!["a".to_string(), "a ".to_string()]);

    assert_eq!(result.map(|_| ()).map_err(|err| err.kind()), Err(ErrorKind::Validation));
}
