use std::cell::RefCell;

use rstest::rstest;

use blogpatch::{fix_mixed_content, fix_mixed_content_all, FragmentDocument, HostFilter};

fn fix(input: &str) -> (bool, String) {
    let mut doc = FragmentDocument::parse(input);
    let changed = fix_mixed_content_all(&mut doc);
    (changed, doc.to_string())
}

#[rstest]
#[case::img_src("<img src=\"http://host/p.png\">", "<img src=\"https://host/p.png\">")]
#[case::img_srcset("<img srcset='http://host/p.png 2x'>", "<img srcset='https://host/p.png 2x'>")]
#[case::source_src("<source src=http://host/v.webm>", "<source src=https://host/v.webm>")]
#[case::source_srcset("<source srcset=\"http://host/p.png\">", "<source srcset=\"https://host/p.png\">")]
#[case::script("<script src=\"http://host/a.js\"></script>", "<script src=\"https://host/a.js\"></script>")]
#[case::video("<video src=\"http://host/v.mp4\">", "<video src=\"https://host/v.mp4\">")]
#[case::audio("<audio src=\"http://host/a.mp3\">", "<audio src=\"https://host/a.mp3\">")]
#[case::iframe("<iframe src=\"http://host/embed/1\">", "<iframe src=\"https://host/embed/1\">")]
#[case::embed("<embed src=\"http://host/a.swf\">", "<embed src=\"https://host/a.swf\">")]
#[case::link_stylesheet(
    "<link rel=\"stylesheet\" href=\"http://host/a.css\">",
    "<link rel=\"stylesheet\" href=\"https://host/a.css\">"
)]
#[case::link_stylesheet_case(
    "<LINK HREF='http://host/a.css' REL=StyleSheet>",
    "<LINK HREF='https://host/a.css' REL=StyleSheet>"
)]
#[case::form("<form action=\"http://host/post\">", "<form action=\"https://host/post\">")]
#[case::object("<object data=\"http://host/a.svg\">", "<object data=\"https://host/a.svg\">")]
#[case::upper_case_element("<IMG SRC=\"http://host/p.png\">", "<IMG SRC=\"https://host/p.png\">")]
#[case::leading_whitespace("<img src=\" http://host/p.png\">", "<img src=\" https://host/p.png\">")]
fn test_rule_table(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(fix(input), (true, expected.to_string()));
}

#[rstest]
#[case::anchor("<a href=\"http://host/\">")]
#[case::link_without_rel("<link href=\"http://host/a.css\">")]
#[case::link_icon("<link rel=\"icon\" href=\"http://host/favicon.ico\">")]
#[case::link_alternate_stylesheet("<link rel=\"alternate stylesheet\" href=\"http://host/a.css\">")]
#[case::img_other_attribute("<img longdesc=\"http://host/d.html\" data-src=\"http://host/p.png\">")]
#[case::form_method("<form method=\"http://host/\">")]
#[case::object_codebase("<object codebase=\"http://host/\">")]
#[case::plain_text("see http://host/page")]
#[case::end_tag("</img src=\"http://host/\">")]
#[case::valueless("<img src>")]
fn test_not_a_candidate(#[case] input: &str) {
    assert_eq!(fix(input), (false, input.to_string()));
}

#[rstest]
#[case::https("https://host/p.png")]
#[case::protocol_relative("//host/p.png")]
#[case::dot_relative("./rel/path.png")]
#[case::relative("rel/path.png")]
#[case::absolute_path("/p.png")]
#[case::ftps("ftps://host/p.png")]
#[case::no_path("http://host")]
#[case::upper_case_scheme("HTTP://host/p.png")]
#[case::data("data:image/png;base64,AAAA")]
fn test_scheme_discrimination(#[case] src: &str) {
    let input = format!("<img src=\"{}\">", src);
    assert_eq!(fix(&input), (false, input.clone()));
}

#[test]
fn test_srcset_multiple_urls() {
    assert_eq!(
        fix(r#"<img srcset="http://a/x 1x, http://b/y 2x">"#),
        (true, r#"<img srcset="https://a/x 1x, https://b/y 2x">"#.to_string())
    );
}

#[test]
fn test_srcset_partly_secure() {
    assert_eq!(
        fix(r#"<img srcset="https://a/x 1x, http://b/y 2x, //c/z 3x">"#),
        (
            true,
            r#"<img srcset="https://a/x 1x, https://b/y 2x, //c/z 3x">"#.to_string()
        )
    );
}

#[test]
fn test_src_and_srcset_on_one_element() {
    assert_eq!(
        fix(r#"<img src="http://a/x" alt="http://a/x" srcset="http://a/x 1x">"#),
        (
            true,
            r#"<img src="https://a/x" alt="http://a/x" srcset="https://a/x 1x">"#.to_string()
        )
    );
}

#[test]
fn test_only_attribute_values_change() {
    let input = "<p>Visit http://host/ now</p>\n<img\n  src = 'http://host/a.png'\n  alt=x >\n";
    let expected = "<p>Visit http://host/ now</p>\n<img\n  src = 'https://host/a.png'\n  alt=x >\n";
    assert_eq!(fix(input), (true, expected.to_string()));
}

#[test]
fn test_idempotent() {
    let mut doc = FragmentDocument::parse(
        r#"<img src="http://a/x"><script src='http://b/y'></script><iframe src=http://c/z>"#,
    );
    assert!(fix_mixed_content_all(&mut doc));
    let once = doc.to_string();
    assert!(!fix_mixed_content_all(&mut doc));
    assert_eq!(doc.to_string(), once);
}

#[test]
fn test_allow_list() {
    let input = r#"<script src="http://example.com/"></script><script src="http://example.net/"></script>"#;
    let filter = HostFilter::allow(["example.com"]).unwrap();
    let mut doc = FragmentDocument::parse(input);
    assert!(fix_mixed_content(&mut doc, filter.predicate()));
    assert_eq!(
        doc.to_string(),
        r#"<script src="https://example.com/"></script><script src="http://example.net/"></script>"#
    );
}

#[test]
fn test_deny_list() {
    let input = r#"<script src="http://example.com/"></script><script src="http://example.net/"></script>"#;
    let filter = HostFilter::deny(["example.com"]).unwrap();
    let mut doc = FragmentDocument::parse(input);
    assert!(fix_mixed_content(&mut doc, filter.predicate()));
    assert_eq!(
        doc.to_string(),
        r#"<script src="http://example.com/"></script><script src="https://example.net/"></script>"#
    );
}

#[test]
fn test_predicate_rejects_everything() {
    let input = r#"<img src="http://example.com/a.png">"#;
    let mut doc = FragmentDocument::parse(input);
    assert!(!fix_mixed_content(&mut doc, |_| false));
    assert_eq!(doc.to_string(), input);
}

#[test]
fn test_predicate_sees_candidates_only() {
    let mut doc = FragmentDocument::parse(
        r#"<img alt="x" src="http://a/p.png"><a href="http://a/"><link rel=stylesheet href="http://a/s.css">"#,
    );
    let seen = RefCell::new(Vec::new());
    fix_mixed_content(&mut doc, |attribute| {
        seen.borrow_mut().push(attribute.name().to_string());
        true
    });
    assert_eq!(seen.into_inner(), ["src", "href"]);
}
