use insta::assert_snapshot;
use rstest::rstest;
use smallxml::{parse, serialize, Error, Node};

#[test]
fn test_serialize_document() {
    let root = parse(r#"<doc version="2"><a><b>x</b><c/></a><d k='v'>y</d></doc>"#).unwrap();
    assert_snapshot!(root.to_xml_string().unwrap(), @r###"
    <?xml version="1.0" encoding="UTF-8"?>
    <!-- generated by smallxml -->
    <doc version="2">
      <a>
        <b>x</b>
        <c/>
      </a>
      <d k="v">y</d>
    </doc>
    "###);
}

#[test]
fn test_serialize_to_writer() {
    let root = Node::new("empty");
    let mut buf = Vec::new();
    serialize(&root, &mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- generated by smallxml -->\n<empty/>\n"
    );
}

#[test]
fn test_serialize_node_without_preamble() {
    let root = parse("<r><a>1</a></r>").unwrap();
    let a = root.element(0).unwrap();
    assert_eq!(a.to_string(), "<a>1</a>\n");
}

#[rstest]
#[case("a & b", "a &amp; b")]
#[case("<tag>", "&lt;tag&gt;")]
#[case("\"quoted\" 'single'", "&quot;quoted&quot; &apos;single&apos;")]
#[case("a/b!", "a&#47;b&#33;")]
#[case("&amp;", "&amp;amp;")]
#[case("plain", "plain")]
fn test_serialize_escapes_value(#[case] value: &str, #[case] escaped: &str) {
    let mut node = Node::new("v");
    node.set_value(value).unwrap();
    assert_eq!(node.to_string(), format!("<v>{}</v>\n", escaped));
}

#[rstest]
#[case("x<y", "x&lt;y")]
#[case("http://example.com/?a=1&b=2", "http:&#47;&#47;example.com&#47;?a=1&amp;b=2")]
fn test_serialize_escapes_attribute(#[case] value: &str, #[case] escaped: &str) {
    let mut node = Node::new("v");
    node.attributes_mut().add("at", value);
    assert_eq!(node.to_string(), format!("<v at=\"{}\"/>\n", escaped));
}

#[test]
fn test_serialize_unnamed_node_fails() {
    let mut root = Node::new("r");
    root.add_element().unwrap();
    assert!(matches!(root.to_xml_string(), Err(Error::UnnamedNode)));
}

#[test]
fn test_serialize_write_error() {
    struct Failing;
    impl std::io::Write for Failing {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    let err = serialize(&Node::new("a"), &mut Failing).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
