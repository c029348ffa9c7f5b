#![no_main]

mod common;

use libfuzzer_sys::fuzz_target;
use wild_lib::document::Document;

use crate::common::{
  DocOp,
  scenario_from_bytes,
};

fuzz_target!(|data: &[u8]| {
  let scenario = scenario_from_bytes(data);
  let mut document = Document::new();
  document.set_text(scenario.initial);

  // Shadow model of the undo stack: every edit pushes the prior text,
  // every successful undo pops it.
  let mut shadow: Vec<String> = vec![String::new()];
  let mut version = document.version();

  for op in scenario.ops {
    let before = document.text().to_owned();
    match op {
      DocOp::SetText(text) => {
        document.set_text(text.clone());
        shadow.push(before);
        assert_eq!(document.text(), text);
      },
      DocOp::Transform(transform) => {
        let expected = transform.apply(&before);
        document.apply(transform);
        shadow.push(before);
        assert_eq!(document.text(), expected);
      },
      DocOp::Undo => {
        let undone = document.undo();
        match shadow.pop() {
          Some(previous) => {
            assert!(undone);
            assert_eq!(document.text(), previous);
          },
          None => {
            assert!(!undone);
            assert_eq!(document.text(), before);
          },
        }
      },
      DocOp::Clear => {
        document.clear();
        shadow.push(before);
        assert_eq!(document.text(), "");
      },
    }

    assert_eq!(document.history().len(), shadow.len());
    assert_eq!(document.stats().chars, document.text().chars().count());
    assert!(document.version() >= version);
    version = document.version();
  }

  // Unwinding the whole stack lands back on the empty starting text.
  while document.undo() {}
  assert_eq!(document.text(), "");
  assert!(document.history().is_empty());
});
