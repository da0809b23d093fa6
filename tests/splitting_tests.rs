use test_case::test_case;
use wordreader::{
    SplitRules,
    lang::splitting::split_line,
};

fn words(line: &str, rules: &SplitRules) -> Vec<String> {
    split_line(line, rules).unwrap().into_iter().map(|word| word.text).collect()
}

fn failure(line: &str) -> String {
    split_line(line, &SplitRules::default()).unwrap_err().to_string()
}


#[test_case("a b  c", &["a", "b", "c"]; "whitespace separated")]
#[test_case("  leading and trailing  ", &["leading", "and", "trailing"]; "surrounding whitespace")]
#[test_case("\ttab\tseparated ", &["tab", "separated"]; "tabs")]
#[test_case("", &[]; "empty line")]
#[test_case("a # comment", &["a"]; "trailing comment")]
#[test_case("# whole line", &[]; "comment line")]
#[test_case("a#b", &["a"]; "comment right after a word")]
#[test_case("\"a b\" c", &["a b", "c"]; "double quoted span")]
#[test_case("'a \"b\" c'", &["a \"b\" c"]; "other quote inside a span")]
#[test_case("a\"b c\"d", &["ab cd"]; "quote inside a word")]
#[test_case("\"\"", &[""]; "empty quoted word")]
#[test_case("\"# inside\" x", &["# inside", "x"]; "comment marker inside quotes")]
#[test_case("a\\ b", &["a b"]; "escaped space")]
#[test_case("\\#not", &["#not"]; "escaped comment marker")]
#[test_case("\"a\\\"b\"", &["a\"b"]; "escaped quote inside quotes")]
#[test_case("-keep class * { *; }", &["-keep", "class", "*", "{", "*;", "}"]; "configuration line")]
fn splits_with_default_rules(line: &str, expected: &[&str]) {
    assert_eq!(words(line, &SplitRules::default()), expected);
}


#[test_case("\"open", "Unterminated quote \" starting at column 1."; "unterminated double quote")]
#[test_case("x 'y", "Unterminated quote ' starting at column 3."; "unterminated single quote")]
#[test_case("a\\", "Dangling escape character at column 2."; "dangling escape")]
#[test_case("\"a\\", "Dangling escape character at column 3."; "dangling escape inside quotes")]
fn malformed_lines_fail(line: &str, message: &str) {
    assert_eq!(failure(line), message);
}


#[test]
fn quoted_words_are_marked() {
    let split = split_line("plain \"quoted\" mi'x'ed", &SplitRules::default()).unwrap();
    let quoted: Vec<bool> = split.iter().map(|word| word.quoted).collect();

    assert_eq!(quoted, vec![false, true, true]);
}


#[test_case("@plain", false; "plain word")]
#[test_case("@\"my file.cfg\"", false; "quote after the first character")]
#[test_case("\"@x\"", true; "quote at the start")]
#[test_case("'@'x", true; "quoted first character only")]
#[test_case("\\@x", true; "escaped first character")]
fn quoted_start_is_marked(line: &str, expected: bool) {
    let split = split_line(line, &SplitRules::default()).unwrap();

    assert_eq!(split.len(), 1);
    assert_eq!(split[0].quoted_start, expected);
}


#[test]
fn custom_rules() {
    let rules = SplitRules { quotes: vec!['"'], escape: None, comment: Some(';') };

    assert_eq!(words("a ; b", &rules), vec!["a"]);
    assert_eq!(words("'a b'", &rules), vec!["'a", "b'"]);
    assert_eq!(words("a\\b # c", &rules), vec!["a\\b", "#", "c"]);
}


#[test]
fn rules_without_comments() {
    let rules = SplitRules { comment: None, ..SplitRules::default() };

    assert_eq!(words("a # b", &rules), vec!["a", "#", "b"]);
}
