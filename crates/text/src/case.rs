// Locale-independent case mapping, one char at a time.
//
// A single char may map to several (`ß` uppercases to `SS`), so the output
// can be longer than the input.

pub fn to_upper_case(text: impl Iterator<Item = char>) -> String {
  let mut res = String::new();
  to_upper_case_with(text, &mut res);
  res
}

pub fn to_upper_case_with(text: impl Iterator<Item = char>, buf: &mut String) {
  text.for_each(|c| buf.extend(c.to_uppercase()));
}

pub fn to_lower_case(text: impl Iterator<Item = char>) -> String {
  let mut res = String::new();
  to_lower_case_with(text, &mut res);
  res
}

pub fn to_lower_case_with(text: impl Iterator<Item = char>, buf: &mut String) {
  text.for_each(|c| buf.extend(c.to_lowercase()));
}
