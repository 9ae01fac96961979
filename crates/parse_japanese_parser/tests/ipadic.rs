//! End-to-end parsing with the embedded IPADIC dictionary.

use parse_japanese_ast::visitor::count;
use parse_japanese_ast::{Node, NodeType, ParagraphChild, Point, Position};
use parse_japanese_parser::{JapaneseParser, ParserOptions};
use pretty_assertions::assert_eq;

const TEXT: &str = "タイトル\n\n1 これは前段です。これは中段（２文の場合は後段。）です。これは後段です。\n（見出し）\nさらに文です。\n";

fn parser() -> JapaneseParser {
    JapaneseParser::new(ParserOptions::default()).unwrap()
}

#[test]
fn test_paragraphs_per_line() {
    let root = parser().parse(TEXT).unwrap();

    assert_eq!(root.children.len(), 5);
    assert_eq!(root.to_text(), TEXT);
}

#[test]
fn test_sentences_and_words() {
    let root = parser().parse(TEXT).unwrap();
    let paragraph = &root.children[2];

    let sentences: Vec<String> = paragraph.sentences().map(|s| s.to_text()).collect();
    assert_eq!(
        sentences,
        vec![
            "1 これは前段です。",
            "これは中段（２文の場合は後段。）です。",
            "これは後段です。",
        ]
    );

    let first = paragraph.sentences().next().unwrap();
    assert_eq!(count(first, NodeType::Word), 2);
}

#[test]
fn test_blank_line() {
    let root = parser().parse(TEXT).unwrap();
    let blank = &root.children[1];

    assert_eq!(blank.children.len(), 1);
    assert!(matches!(&blank.children[0], ParagraphChild::WhiteSpace(leaf) if leaf.value == "\n"));
}

#[test]
fn test_positions() {
    let root = parser().parse("文です。\n次。").unwrap();

    assert_eq!(
        root.position,
        Some(Position::new(Point::new(1, 1, 0), Point::new(2, 3, 7)))
    );
    assert_eq!(
        root.children[1].position,
        Some(Position::new(Point::new(2, 1, 5), Point::new(2, 3, 7)))
    );
}

#[test]
fn test_half_width_brackets() {
    let root = parser().parse("中段(後段。)です。").unwrap();

    assert_eq!(root.sentences().count(), 1);
    assert_eq!(root.to_text(), "中段(後段。)です。");
}

#[test]
fn test_token_metadata() {
    let options = ParserOptions::default().with_token_metadata(true);
    let parser = JapaneseParser::new(options).unwrap();

    let root = parser.parse("です。").unwrap();
    let sentence = root.sentences().next().unwrap();
    let word = sentence.words().next().unwrap();
    let stop = word.children.last().unwrap().leaf();

    let data = stop.data.as_ref().unwrap();
    assert_eq!(data.surface_form, "。");
    assert_eq!(data.part_of_speech, "記号");
    assert_eq!(data.part_of_speech_subcategory1, "句点");
}

#[test]
fn test_json_shape() {
    let options = ParserOptions::default().with_position_tracking(false);
    let parser = JapaneseParser::new(options).unwrap();

    let root = parser.parse("文。").unwrap();
    let json = serde_json::to_value(&root).unwrap();

    assert_eq!(json["type"], "RootNode");
    assert_eq!(json["children"][0]["type"], "ParagraphNode");
    assert_eq!(json["children"][0]["children"][0]["type"], "SentenceNode");
    assert!(json.get("position").is_none());
}

#[test]
fn test_invalid_dictionary() {
    let options = ParserOptions::default().with_dictionary_path("/nonexistent/dictionary");
    assert!(JapaneseParser::new(options).is_err());
}
