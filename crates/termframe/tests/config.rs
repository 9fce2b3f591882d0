//! Loading elements from YAML and JSON configuration.

use termframe::config::{MenuConfig, MessageConfig, TableConfig};
use termframe::{ErrorKind, FrameError, PaddingError, StyleError, ValidationError};

#[test]
fn message_from_yaml() {
    let config = MessageConfig::from_yaml(
        r#"
text: Hello World
align: center
min_width: 20
style: double
"#,
    )
    .unwrap();
    let message = config.build().unwrap();
    assert_eq!(message.text().lines().nth(1), Some("║   Hello World    ║"));
}

#[test]
fn message_from_json_with_lines_and_padding() {
    let config = MessageConfig::from_json(r#"{"text": ["Pad Test"], "padx": [2, 5]}"#).unwrap();
    let message = config.build().unwrap();
    assert_eq!(message.text().lines().nth(1), Some("│  Pad Test     │"));
}

#[test]
fn message_content_must_be_text() {
    let err = MessageConfig::from_json(r#"{"text": 42}"#)
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Validation(ValidationError::InvalidContent(_))
    ));

    let err = MessageConfig::from_json(r#"{"text": ["ok", 1]}"#)
        .unwrap()
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn unknown_style_and_alignment() {
    let err = MessageConfig::from_yaml("text: hi\nstyle: rounded")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(err, FrameError::Style(StyleError::Unknown(_))));

    let err = MessageConfig::from_yaml("text: hi\nstyle: 3")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(err, FrameError::Style(StyleError::NotAName(_))));

    let err = MessageConfig::from_yaml("text: hi\nalign: middle")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Validation(ValidationError::InvalidAlign(_))
    ));
}

#[test]
fn negative_and_malformed_padding() {
    let err = MessageConfig::from_yaml("text: hi\npadx: -1")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Padding(PaddingError::Negative { .. })
    ));

    let err = MessageConfig::from_yaml("text: hi\npadx: [1, 2, 3]")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Padding(PaddingError::Malformed { .. })
    ));
}

#[test]
fn parse_failures_are_config_errors() {
    let err = MessageConfig::from_yaml("text: [unclosed").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);

    let err = MessageConfig::from_json(r#"{"txt": "typo"}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn menu_from_yaml() {
    let config = MenuConfig::from_yaml(
        r#"
items: [Option 1, Option 2, Option 3]
header: Main Menu
footer: x) Exit
style: bold
"#,
    )
    .unwrap();
    let menu = config.build().unwrap();
    assert_eq!(
        menu.text(),
        "┏━━━━━━━━━┓\n┃Main Menu┃\n┣╍╍╍╍╍╍╍╍╍┫\n┃Option 1 ┃\n┃Option 2 ┃\n┃Option 3 ┃\n┣━━━━━━━━━┫\n┃x) Exit  ┃\n┗━━━━━━━━━┛"
    );
}

#[test]
fn menu_regions_from_json() {
    let config = MenuConfig::from_json(
        r#"{
            "items": ["Option 1"],
            "align": ["left", "right", "left"],
            "padx": [[0, 0], [2, 2], [0, 0]],
            "min_width": 21
        }"#,
    )
    .unwrap();
    let menu = config.build().unwrap();
    assert_eq!(menu.text().lines().nth(1), Some("│         Option 1  │"));
}

#[test]
fn menu_index_scheme_by_name() {
    let config = MenuConfig::from_yaml("items: [X, Y]\nindex: number.dot").unwrap();
    assert_eq!(config.build().unwrap().entries(), ["1. X", "2. Y"]);

    let err = MenuConfig::from_yaml("items: [X]\nindex: roman")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Validation(ValidationError::InvalidIndexScheme(_))
    ));
}

#[test]
fn menu_validation() {
    let err = MenuConfig::from_yaml("items: Invalid Items")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Validation(ValidationError::InvalidItems(_))
    ));

    let err = MenuConfig::from_yaml("items: [a]\ncustom_prefix: 7")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Validation(ValidationError::InvalidPrefix(_))
    ));

    let err = MenuConfig::from_yaml("items: [a]\nalign: [left, left]")
        .unwrap()
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = MenuConfig::from_yaml("items: [a]\nalign: [center, left, left]\npadx: 1")
        .unwrap()
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Padding);
}

#[test]
fn table_from_yaml() {
    let config = TableConfig::from_yaml(
        r#"
data:
  - {Name: Alice, Age: 30}
  - {Name: Bob, Age: 25}
  - {Name: Charlie, Age: 35}
align: [left, right]
index: true
row_sep: true
custom_align:
  0: center
"#,
    )
    .unwrap();
    let table = config.build().unwrap();
    assert_eq!(
        table.text(),
        "┌─┬───────┬───┐\n\
         │ │Name   │Age│\n\
         ├╌┼╌╌╌╌╌╌╌┼╌╌╌┤\n\
         │1│ Alice │ 30│\n\
         ├─┼───────┼───┤\n\
         │2│  Bob  │ 25│\n\
         ├─┼───────┼───┤\n\
         │3│Charlie│ 35│\n\
         └─┴───────┴───┘"
    );
}

#[test]
fn table_from_json_with_limits_and_minimums() {
    let config = TableConfig::from_json(
        r#"{
            "data": [["a", "b"], ["1", "2"]],
            "headers": "none",
            "min_width": {"1": 4},
            "padx": 0
        }"#,
    )
    .unwrap();
    let table = config.build().unwrap();
    assert_eq!(table.effective_widths().widths, vec![1, 4]);
    assert_eq!(table.row_count(), 2);

    let err = TableConfig::from_json(r#"{"data": [["wide"], ["cell"]], "max_column_width": 3}"#)
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Validation(ValidationError::CellTooLong { .. })
    ));
}

#[test]
fn table_validation() {
    let err = TableConfig::from_yaml("data: [[a], [1]]\nheaders: keys")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Validation(ValidationError::InvalidHeaders(_))
    ));

    let err = TableConfig::from_yaml("data: [[a], [1]]\ncustom_align: {0: [left, right]}")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Validation(ValidationError::AlignmentCountMismatch { .. })
    ));

    let err = TableConfig::from_yaml("data: [[a], [true]]")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Validation(ValidationError::InvalidCellType { .. })
    ));

    let err = TableConfig::from_yaml("data: [[a], {k: 1}]")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Validation(ValidationError::InvalidDataType(_))
    ));
}

#[test]
fn badly_typed_settings_are_validation_errors() {
    let message_cases = [
        r#"{"text": "hi", "min_width": -1}"#,
        r#"{"text": "hi", "min_width": "wide"}"#,
        r#"{"text": "hi", "align": 5}"#,
    ];
    for json in message_cases {
        let err = MessageConfig::from_json(json).unwrap().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "{}", json);
    }

    let menu_cases = [
        r#"{"items": ["a"], "align": "left"}"#,
        r#"{"items": ["a"], "min_width": 2.5}"#,
        r#"{"items": ["a"], "index": 1}"#,
    ];
    for json in menu_cases {
        let err = MenuConfig::from_json(json).unwrap().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "{}", json);
    }

    let table_cases = [
        r#"{"data": [["a"], ["1"]], "min_width": -3}"#,
        r#"{"data": [["a"], ["1"]], "min_width": {"0": "x"}}"#,
        r#"{"data": [["a"], ["1"]], "index": "yes"}"#,
        r#"{"data": [["a"], ["1"]], "row_sep": 1}"#,
        r#"{"data": [["a"], ["1"]], "align": ["left"]}"#,
        r#"{"data": [["a"], ["1"]], "max_table_width": -1}"#,
    ];
    for json in table_cases {
        let err = TableConfig::from_json(json).unwrap().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "{}", json);
    }
}

#[test]
fn badly_typed_settings_name_the_setting() {
    let err = TableConfig::from_yaml("data: [[a], [1]]\nrow_sep: sometimes")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Validation(ValidationError::InvalidFlag { ref field, .. }) if field == "row_sep"
    ));

    let err = MessageConfig::from_yaml("text: hi\nmin_width: -4")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::Validation(ValidationError::InvalidMinWidth(_))
    ));
}

#[test]
fn message_align_accepts_a_bare_name_or_one_item_list() {
    let bare = MessageConfig::from_yaml("text: ab\nalign: right\nmin_width: 6")
        .unwrap()
        .build()
        .unwrap();
    let listed = MessageConfig::from_yaml("text: ab\nalign: [right]\nmin_width: 6")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(bare.text().lines().nth(1), Some("│  ab│"));
    assert_eq!(bare.text(), listed.text());
}

#[test]
fn headers_accept_capitalized_none() {
    let table = TableConfig::from_yaml("data: [[a, b]]\nheaders: None")
        .unwrap()
        .build()
        .unwrap();
    assert!(table.headers().is_none());
    assert_eq!(table.row_count(), 1);
}
