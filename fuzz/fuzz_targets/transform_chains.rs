#![no_main]

mod common;

use libfuzzer_sys::fuzz_target;
use wild_lib::{
  stats::TextStats,
  transform::{
    self,
    Transform,
  },
};

use crate::common::{
  DocOp,
  scenario_from_bytes,
};

fuzz_target!(|data: &[u8]| {
  let scenario = scenario_from_bytes(data);
  let mut text = scenario.initial;
  check_transform_algebra(&text);

  // Drive the text through the scripted ops, checking stats after each.
  for op in scenario.ops {
    match op {
      DocOp::SetText(next) => text = next,
      DocOp::Transform(transform) => text = transform.apply(&text),
      DocOp::Undo => {},
      DocOp::Clear => text.clear(),
    }
    check_stats(&text);
  }
  check_transform_algebra(&text);
});

fn check_transform_algebra(text: &str) {
  for first in Transform::ALL {
    let once = first.apply(text);
    check_stats(&once);

    match first {
      // Sorting trims trailing whitespace, so only the trim is stable.
      Transform::SortLines => assert_eq!(once.trim_end().len(), once.len()),
      _ => assert_eq!(first.apply(&once), once),
    }

    for second in Transform::ALL {
      check_stats(&second.apply(&once));
    }
  }

  let flattened = transform::remove_paragraphs(text);
  assert!(!flattened.contains('\n'));
  assert!(!flattened.contains("  "));
  assert!(!flattened.starts_with(' ') && !flattened.ends_with(' '));

  let despaced = transform::remove_extra_spaces(text);
  assert!(!despaced.contains("  "));
  assert!(!despaced.starts_with(' ') && !despaced.ends_with(' '));
}

fn check_stats(text: &str) {
  let stats = TextStats::of(text);
  assert!(stats.avg_word_length.is_finite());
  assert!(stats.avg_sentence_length.is_finite());
  assert!(stats.words <= stats.chars);
  assert!(stats.sentences <= stats.chars);
  if stats.words == 0 {
    assert_eq!(stats.avg_word_length, 0.0);
  }
}
