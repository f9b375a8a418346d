use blogpatch::{FragmentDocument, Value};

#[test]
fn test_manipulate_text() {
    let mut doc = FragmentDocument::parse("<p>Data</p>");
    let text = doc.texts().nth(1).unwrap();
    doc.text_mut(text).unwrap().set("Changed</p>");
    assert_eq!(doc.to_string(), "<p>Changed</p>");
}

#[test]
fn test_manipulate_attribute() {
    let mut doc = FragmentDocument::parse(r#"<p a="Foo"/>"#);
    let p = doc.elements().next().unwrap();
    doc.element_mut(p)
        .unwrap()
        .attribute_mut("a")
        .unwrap()
        .set_value("Changed");
    assert_eq!(doc.to_string(), r#"<p a="Changed"/>"#);
}

#[test]
fn test_manipulate_attribute_locality() {
    let input = "before <img  alt = 'x'\tsrc=\"http://a/p.png\"\n  class=pic  /> after <b id=1>";
    let mut doc = FragmentDocument::parse(input);
    let img = doc.elements().next().unwrap();
    doc.element_mut(img)
        .unwrap()
        .attribute_mut("src")
        .unwrap()
        .set_value("https://a/a-much-longer-path/p.png");
    assert_eq!(
        doc.to_string(),
        "before <img  alt = 'x'\tsrc=\"https://a/a-much-longer-path/p.png\"\n  class=pic  /> after <b id=1>"
    );
}

#[test]
fn test_manipulate_attribute_shorter() {
    let mut doc = FragmentDocument::parse("<a href='http://example.com/long/path' id=x>");
    let a = doc.elements().next().unwrap();
    doc.element_mut(a)
        .unwrap()
        .attribute_mut("HREF")
        .unwrap()
        .set_value("/");
    assert_eq!(doc.to_string(), "<a href='/' id=x>");
}

#[test]
fn test_manipulate_unquoted_attribute() {
    let mut doc = FragmentDocument::parse("<a href=x>");
    let a = doc.elements().next().unwrap();
    doc.element_mut(a)
        .unwrap()
        .attribute_mut("href")
        .unwrap()
        .set_value("yyy");
    assert_eq!(doc.to_string(), "<a href=yyy>");
}

#[test]
fn test_manipulate_valueless_attribute() {
    let mut doc = FragmentDocument::parse("<input disabled >");
    let input = doc.elements().next().unwrap();
    doc.element_mut(input)
        .unwrap()
        .attribute_mut("disabled")
        .unwrap()
        .set_value("disabled");
    assert_eq!(doc.to_string(), r#"<input disabled="disabled" >"#);
}

#[test]
fn test_manipulate_second_of_duplicates() {
    let mut doc = FragmentDocument::parse("<a href=1 href=2>");
    let a = doc.elements().next().unwrap();
    let element = doc.element_mut(a).unwrap();
    let second = element
        .attributes_mut()
        .filter(|attribute| attribute.is_name_equal_to("href"))
        .nth(1)
        .unwrap();
    second.set_value("3");
    assert_eq!(doc.to_string(), "<a href=1 href=3>");
}

#[test]
fn test_value_access() {
    let mut doc = FragmentDocument::parse("<IMG Src=a.png>x");
    let node = doc.elements().next().unwrap();
    match doc.value_mut(node) {
        Value::Element(element) => {
            assert_eq!(element.local_name(), "IMG");
            assert!(element.is_named("img"));
            let src = &element.attributes()[0];
            assert_eq!(src.name(), "Src");
            assert_eq!(src.value(), Some("a.png"));
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_attribute_less_element_is_verbatim() {
    let doc = FragmentDocument::parse("<br   />");
    let node = doc.elements().next().unwrap();
    let element = doc.element(node).unwrap();
    assert!(element.attributes().is_empty());
    assert_eq!(element.close(), "   />");
    assert_eq!(element.to_string(), "<br   />");
}
