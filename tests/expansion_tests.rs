//! Conformance table for brace and tilde expansion.

use just_expand::{
    expand, Expander, ExpanderOptions, ExpansionError, ExpansionLimits, HomeDirectories,
    SubstitutionKind, WordNode, WordPart,
};

fn homes() -> HomeDirectories {
    HomeDirectories::new("/home/bob")
        .with_user("root", "/root")
        .with_user("alice", "/home/alice")
}

fn expand_words(raw: &str) -> Vec<String> {
    expand(raw, false, &homes())
        .iter()
        .map(WordNode::to_string)
        .collect()
}

fn check(cases: &[(&str, &[&str])]) {
    for (input, expected) in cases {
        assert_eq!(&expand_words(input), expected, "input: {}", input);
    }
}

#[test]
fn brace_alternations() {
    check(&[
        ("{foo,bar}", &["foo", "bar"]),
        ("a{b,c}d", &["abd", "acd"]),
        ("{a,b}_{c,d}", &["a_c", "a_d", "b_c", "b_d"]),
        (
            "{0,1}{0,1}{0,1}",
            &["000", "001", "010", "011", "100", "101", "110", "111"],
        ),
        ("a{X,,Y}b", &["aXb", "ab", "aYb"]),
        ("{,x}", &["", "x"]),
        ("{a,{b,c}}", &["a", "b", "c"]),
        (
            "-{A,={a,.{x,y}.,b}=,B}-",
            &["-A-", "-=a=-", "-=.x.=-", "-=.y.=-", "-=b=-", "-B-"],
        ),
    ]);
}

#[test]
fn brace_ranges() {
    check(&[
        ("{1..8..3}", &["1", "4", "7"]),
        ("{1..3}", &["1", "2", "3"]),
        ("{3..1}", &["3", "2", "1"]),
        ("{1..8..-3}", &["1", "4", "7"]),
        ("{-2..2..2}", &["-2", "0", "2"]),
        ("{08..10}", &["08", "09", "10"]),
        ("{a..e..2}", &["a", "c", "e"]),
        ("{x..v}", &["x", "w", "v"]),
        ("{1..2}{a,b}", &["1a", "1b", "2a", "2b"]),
    ]);
}

#[test]
fn brace_literal_fallbacks() {
    check(&[
        ("{{a,b}", &["{{a,b}"]),
        ("\\{{a,b}", &["{a", "{b"]),
        ("{a,b}}", &["a}", "b}"]),
        ("{a,b\\}", &["{a,b}"]),
        ("{a}", &["{a}"]),
        ("{}", &["{}"]),
        ("}{", &["}{"]),
        ("{{a,b}}", &["{{a,b}}"]),
        ("{1..a}", &["{1..a}"]),
        ("{a..Z}", &["{a..Z}"]),
        ("{1..2..}", &["{1..2..}"]),
        ("x{a\\,b}y", &["x{a,b}y"]),
        ("'{a,b}'", &["'{a,b}'"]),
        ("\"{a,b}\"c", &["\"{a,b}\"c"]),
    ]);
}

#[test]
fn substitution_atoms_pass_through() {
    check(&[
        ("{$(cmd),b}", &["$(cmd)", "b"]),
        ("{$(echo a,b),c}", &["$(echo a,b)", "c"]),
        ("x${y:-{p,q}}", &["x${y:-{p,q}}"]),
        ("{$a,$((1+2))}z", &["$az", "$((1+2))z"]),
        ("{$x}", &["{$x}"]),
    ]);

    let words = expand("{$a,b}", false, &homes());
    assert_eq!(
        words[0].parts,
        vec![WordPart::Substitution(just_expand::SubstitutionPart {
            kind: SubstitutionKind::Variable,
            text: "$a".to_string(),
        })]
    );
}

#[test]
fn tilde_expansion() {
    check(&[
        ("~", &["/home/bob"]),
        ("~/src", &["/home/bob/src"]),
        ("foo~/bar", &["foo~/bar"]),
        ("~root", &["/root"]),
        ("~alice/notes", &["/home/alice/notes"]),
        ("~nobody/x", &["~nobody/x"]),
        ("\\~/x", &["~/x"]),
        ("'~'/x", &["'~'/x"]),
        ("~$USER", &["~$USER"]),
    ]);
}

#[test]
fn brace_expansion_decides_tilde_position() {
    check(&[
        ("~{/src,root}", &["/home/bob/src", "/root"]),
        ("{~,~alice}/x", &["/home/bob/x", "/home/alice/x"]),
        ("a{~,b}", &["a~", "ab"]),
        ("{a,~}/x", &["a/x", "/home/bob/x"]),
    ]);
}

#[test]
fn assignment_context() {
    let exp = Expander::new(ExpanderOptions {
        home: Some(homes()),
        ..Default::default()
    });
    assert_eq!(
        exp.expand_to_strings("PATH=~/bin", true).unwrap(),
        vec!["PATH=/home/bob/bin"]
    );
    assert_eq!(
        exp.expand_to_strings("~/a:~root/b", true).unwrap(),
        vec!["/home/bob/a:/root/b"]
    );
    assert_eq!(
        exp.expand_to_strings("PATH=~/bin", false).unwrap(),
        vec!["PATH=~/bin"]
    );
    assert_eq!(
        exp.expand_to_strings("{~,a}=~", true).unwrap(),
        vec!["~=/home/bob", "a=/home/bob"]
    );
}

#[test]
fn word_limit_is_enforced() {
    let exp = Expander::new(ExpanderOptions {
        limits: ExpansionLimits {
            max_words: 100,
            ..Default::default()
        },
        home: Some(homes()),
    });
    assert_eq!(exp.expand("{1..100}").unwrap().len(), 100);
    assert_eq!(
        exp.expand("{1..10}{1..11}"),
        Err(ExpansionError::TooManyWords {
            limit: 100,
            requested: 110
        })
    );
}

#[test]
fn source_form_round_trips() {
    for raw in ["a{b,c}d", "\\{x\\}", "{1..5..2}", "$x{a,b}", "{{a,b}", "'q'{a,b}"] {
        let word = just_expand::parse_word(raw);
        assert_eq!(just_expand::parse_word(&word.to_source()), word, "{}", raw);
    }
}
