use smallxml::{parse, Error};

#[test]
fn test_find_element_reached_through_earlier_sibling() {
    let root = parse("<r><b><a/></b><c/></r>").unwrap();
    let found = root.find_element("a").unwrap();
    let via_b = root.element(0).unwrap().element(0).unwrap();
    assert!(std::ptr::eq(found, via_b));
}

#[test]
fn test_find_element_first_match_wins() {
    let root = parse("<r><x><a>deep</a></x><a>shallow</a></r>").unwrap();
    assert_eq!(root.find_element("a").unwrap().value(), Some("deep"));
}

#[test]
fn test_find_element_from_subtree() {
    let root = parse("<r><x><a>1</a></x><y><a>2</a></y></r>").unwrap();
    let y = root.find_element("y").unwrap();
    assert_eq!(y.find_element("a").unwrap().value(), Some("2"));
}

#[test]
fn test_find_element_missing() {
    let root = parse("<r><a/></r>").unwrap();
    assert!(root.find_element("b").is_none());
    assert!(root.find_element("r").is_none());
}

#[test]
fn test_find_attribute() {
    let root = parse(r#"<r id="0"><a/><b><c id="1"/></b><d id="2"/></r>"#).unwrap();
    let found = root.find_attribute("id").unwrap();
    assert_eq!(found.name(), Some("c"));
    assert_eq!(found.attribute("id"), Some("1"));
}

#[test]
fn test_find_element_with_attribute() {
    let root =
        parse(r#"<r><item/><item key="a">1</item><other key="b"/><item key="c">2</item></r>"#)
            .unwrap();
    let found = root.find_element_with_attribute("item", "key").unwrap();
    assert_eq!(found.value(), Some("1"));
    assert!(root.find_element_with_attribute("other", "id").is_none());
}

#[test]
fn test_value_as_numbers() {
    let root = parse("<r><i>-17</i><f>2.75</f><s>abc</s><e/></r>").unwrap();
    assert_eq!(root.find_element("i").unwrap().value_as_int().unwrap(), -17);
    assert_eq!(
        root.find_element("f").unwrap().value_as_double().unwrap(),
        2.75
    );
    assert!(matches!(
        root.find_element("s").unwrap().value_as_int(),
        Err(Error::InvalidInt(_))
    ));
    assert!(matches!(
        root.find_element("e").unwrap().value_as_double(),
        Err(Error::MissingValue)
    ));
    assert!(matches!(root.value_as_int(), Err(Error::MissingValue)));
}

#[test]
fn test_element_index() {
    let root = parse("<r><a/><b/></r>").unwrap();
    assert_eq!(root.element(1).unwrap().name(), Some("b"));
    assert!(root.element(2).is_none());
    assert_eq!(root.size(), 2);
    assert!(!root.is_empty());
    assert!(root.value().is_none());
}
