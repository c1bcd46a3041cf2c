/**
 * XML Tree Builder Tests
 *
 * Shape of the intermediate tree for well-formed and loosely formed input
 */

#[path = "../util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::{humanize_document, parse_and_humanize};
    use xmlfold::{Error, ParseOptions, Parser, UnbalancedTags};

    fn row(kind: &str, value: &str, depth: usize) -> Vec<String> {
        vec![kind.to_string(), value.to_string(), depth.to_string()]
    }

    fn strict_parser() -> Parser {
        Parser::new(ParseOptions::default().with_unbalanced(UnbalancedTags::Strict))
    }

    mod text_nodes {
        use super::*;

        #[test]
        fn should_parse_root_level_text_nodes() {
            assert_eq!(parse_and_humanize(" a "), vec![row("Text", "a", 0)]);
        }

        #[test]
        fn should_drop_whitespace_between_tags() {
            assert_eq!(
                parse_and_humanize("<a>\n  <b/>\n</a>"),
                vec![row("Element", "a", 0), row("SelfClosedElement", "b", 1)]
            );
        }

        #[test]
        fn should_unescape_text() {
            assert_eq!(
                parse_and_humanize("<a>&amp;&lt;&gt;&apos;&quot;</a>"),
                vec![row("Element", "a", 0), row("Text", "&<>'\"", 1)]
            );
        }

        #[test]
        fn should_keep_unknown_entities() {
            assert_eq!(
                parse_and_humanize("<a>&copy; &#169;</a>"),
                vec![row("Element", "a", 0), row("Text", "&copy; &#169;", 1)]
            );
        }

        #[test]
        fn should_decode_char_refs_when_enabled() {
            let parser = Parser::new(ParseOptions::default().with_char_refs(true));
            let document = parser.parse("<a>&#169;&#x41;</a>").unwrap();
            assert_eq!(
                humanize_document(&document),
                vec![row("Element", "a", 0), row("Text", "\u{a9}A", 1)]
            );
        }

        #[test]
        fn should_insert_cdata_verbatim() {
            assert_eq!(
                parse_and_humanize("<a><![CDATA[ <raw> &amp; ]]></a>"),
                vec![row("Element", "a", 0), row("Text", " <raw> &amp; ", 1)]
            );
        }

        #[test]
        fn should_keep_text_and_cdata_as_separate_children() {
            assert_eq!(
                parse_and_humanize("<a>x<![CDATA[y]]>z</a>"),
                vec![
                    row("Element", "a", 0),
                    row("Text", "x", 1),
                    row("Text", "y", 1),
                    row("Text", "z", 1),
                ]
            );
        }
    }

    mod elements {
        use super::*;

        #[test]
        fn should_parse_nested_elements() {
            assert_eq!(
                parse_and_humanize("<a><b><c>t</c></b></a>"),
                vec![
                    row("Element", "a", 0),
                    row("Element", "b", 1),
                    row("Element", "c", 2),
                    row("Text", "t", 3),
                ]
            );
        }

        #[test]
        fn should_parse_attributes_in_order() {
            assert_eq!(
                parse_and_humanize(r#"<a z="1" y='two words' flag x=&lt;/>"#),
                vec![
                    row("SelfClosedElement", "a", 0),
                    row("Attribute", "z=1", 1),
                    row("Attribute", "y=two words", 1),
                    row("Attribute", "flag", 1),
                    row("Attribute", "x=<", 1),
                ]
            );
        }

        #[test]
        fn should_keep_processing_instructions_and_comments_as_siblings() {
            assert_eq!(
                parse_and_humanize(r#"<?xml version="1.0"?><!-- c --><root/>"#),
                vec![
                    row("ProcessingInstruction", r#"xml version="1.0""#, 0),
                    row("Comment", "-- c --", 0),
                    row("SelfClosedElement", "root", 0),
                ]
            );
        }

        #[test]
        fn should_handle_deep_nesting() {
            let depth = 100_000;
            let source = format!("{}{}", "<d>".repeat(depth), "</d>".repeat(depth));
            let document = Parser::default().parse(&source).unwrap();
            assert_eq!(document.children.len(), 1);
        }
    }

    mod unbalanced {
        use super::*;

        #[test]
        fn should_ignore_stray_close_tags() {
            assert_eq!(
                parse_and_humanize("</x><a>1</a></y>"),
                vec![row("Element", "a", 0), row("Text", "1", 1)]
            );
        }

        #[test]
        fn should_close_open_elements_at_end_of_input() {
            assert_eq!(
                parse_and_humanize("<a><b>t"),
                vec![
                    row("Element", "a", 0),
                    row("Element", "b", 1),
                    row("Text", "t", 2),
                ]
            );
        }

        #[test]
        fn should_report_stray_close_in_strict_mode() {
            assert_eq!(
                strict_parser().parse("<a></a></b>").unwrap_err(),
                Error::UnexpectedClose {
                    name: "b".to_string(),
                    offset: 7
                }
            );
        }

        #[test]
        fn should_report_unclosed_in_strict_mode() {
            assert_eq!(
                strict_parser().parse("<a><b/>").unwrap_err(),
                Error::Unclosed {
                    name: "a".to_string()
                }
            );
        }

        #[test]
        fn should_report_mismatched_close_in_strict_mode() {
            assert!(matches!(
                strict_parser().parse("<a><b></a></b>"),
                Err(Error::MismatchedClose { .. })
            ));
        }
    }
}
