use wild_lib::transform::Transform;

const MAX_INITIAL_BYTES: usize = 4 * 1024;
const MAX_OPS: usize = 64;
const MAX_TEXT_BYTES: usize = 256;

/// One scripted action against a document.
#[derive(Debug, Clone)]
pub enum DocOp {
  SetText(String),
  Transform(Transform),
  Undo,
  Clear,
}

#[derive(Debug, Clone)]
pub struct Scenario {
  pub initial: String,
  pub ops:     Vec<DocOp>,
}

pub fn scenario_from_bytes(data: &[u8]) -> Scenario {
  let mut cursor = ByteCursor::new(data);
  let initial_len = cursor.next_usize(MAX_INITIAL_BYTES);
  let initial = lossy_text(cursor.next_bytes(initial_len));
  let op_count = cursor.next_usize(MAX_OPS);
  let mut ops = Vec::with_capacity(op_count);
  for _ in 0..op_count {
    let op = match cursor.next_u8() % 4 {
      0 => {
        let len = cursor.next_usize(MAX_TEXT_BYTES);
        DocOp::SetText(lossy_text(cursor.next_bytes(len)))
      },
      1 => {
        let hint = cursor.next_u8() as usize;
        DocOp::Transform(Transform::ALL[hint % Transform::ALL.len()])
      },
      2 => DocOp::Undo,
      _ => DocOp::Clear,
    };
    ops.push(op);
  }

  Scenario { initial, ops }
}

fn lossy_text(bytes: &[u8]) -> String {
  String::from_utf8_lossy(bytes).into_owned()
}

struct ByteCursor<'a> {
  data: &'a [u8],
  pos:  usize,
}

impl<'a> ByteCursor<'a> {
  fn new(data: &'a [u8]) -> Self {
    Self { data, pos: 0 }
  }

  fn next_u8(&mut self) -> u8 {
    let value = self.data.get(self.pos).copied().unwrap_or(0);
    self.pos = self.pos.saturating_add(1);
    value
  }

  fn next_u16(&mut self) -> u16 {
    let lo = self.next_u8() as u16;
    let hi = self.next_u8() as u16;
    lo | (hi << 8)
  }

  fn next_usize(&mut self, max: usize) -> usize {
    if max == 0 {
      return 0;
    }
    (self.next_u16() as usize) % (max + 1)
  }

  fn next_bytes(&mut self, len: usize) -> &'a [u8] {
    let start = self.pos.min(self.data.len());
    let end = start.saturating_add(len).min(self.data.len());
    self.pos = end;
    &self.data[start..end]
  }
}
